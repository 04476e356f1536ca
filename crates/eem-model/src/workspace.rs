//! Minimal stand-in for the raw simulation-input file.
//!
//! Workspace measures see the building as an ordered list of IDF-style
//! objects: a type name plus positional string fields. Object types compare
//! case-insensitively, as they do in the input format itself.

use serde::{Deserialize, Serialize};

/// A single IDF-style object.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct IdfObject {
    object_type: String,
    fields: Vec<String>,
}

impl IdfObject {
    /// Creates an object of the given type with the given positional fields.
    pub fn new(object_type: impl Into<String>, fields: Vec<String>) -> Self {
        Self {
            object_type: object_type.into(),
            fields,
        }
    }

    /// The object's type name.
    pub fn object_type(&self) -> &str {
        &self.object_type
    }

    /// The positional fields.
    pub fn fields(&self) -> &[String] {
        &self.fields
    }

    /// Returns the field at `index`, if present.
    pub fn field(&self, index: usize) -> Option<&str> {
        self.fields.get(index).map(String::as_str)
    }

    /// Sets the field at `index`, padding with blanks as needed.
    pub fn set_field(&mut self, index: usize, value: impl Into<String>) {
        if self.fields.len() <= index {
            self.fields.resize(index + 1, String::new());
        }
        self.fields[index] = value.into();
    }

    /// The conventional name field (field zero), if present and non-blank.
    pub fn name(&self) -> Option<&str> {
        self.field(0).filter(|name| !name.is_empty())
    }
}

/// An ordered collection of [`IdfObject`]s.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Workspace {
    objects: Vec<IdfObject>,
}

impl Workspace {
    /// Creates an empty workspace.
    pub fn new() -> Self {
        Self::default()
    }

    /// Appends an object, preserving insertion order.
    pub fn add_object(&mut self, object: IdfObject) {
        self.objects.push(object);
    }

    /// All objects in insertion order.
    pub fn objects(&self) -> &[IdfObject] {
        &self.objects
    }

    /// Objects of the given type, compared case-insensitively.
    pub fn objects_of_type<'a>(
        &'a self,
        object_type: &'a str,
    ) -> impl Iterator<Item = &'a IdfObject> {
        self.objects
            .iter()
            .filter(move |object| object.object_type.eq_ignore_ascii_case(object_type))
    }

    /// Mutable access to objects of the given type.
    pub fn objects_of_type_mut<'a>(
        &'a mut self,
        object_type: &'a str,
    ) -> impl Iterator<Item = &'a mut IdfObject> {
        self.objects
            .iter_mut()
            .filter(move |object| object.object_type.eq_ignore_ascii_case(object_type))
    }

    /// Number of objects of the given type.
    pub fn count_of_type(&self, object_type: &str) -> usize {
        self.objects_of_type(object_type).count()
    }
}
