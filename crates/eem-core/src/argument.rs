//! Argument descriptors and the value map a measure receives.
//!
//! The host asks a measure for its ordered [`ArgumentSpec`] sequence, converts
//! it into an [`ArgumentValues`] map, lets the user (or a test) supply values,
//! and hands the map back to the measure's `run`. Descriptors are immutable
//! once declared; supplied values are type checked at the point of entry.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::errors::{ErrorInfo, MeasureError};

fn argument_error(code: &str, message: impl Into<String>) -> MeasureError {
    MeasureError::Argument(ErrorInfo::new(code, message))
}

/// Declared type of a measure argument.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum ArgumentKind {
    /// Free-form text.
    String,
    /// Floating point number.
    Double,
    /// Whole number.
    Integer,
    /// True/false flag.
    Bool,
    /// Enumerated choice over an ordered list of accepted values.
    Choice {
        /// Accepted values, usually object handles or fixed keywords.
        choices: Vec<String>,
        /// Parallel display labels shown to the user.
        display_names: Vec<String>,
    },
}

impl ArgumentKind {
    /// Short label used in diagnostics.
    pub fn label(&self) -> &'static str {
        match self {
            ArgumentKind::String => "string",
            ArgumentKind::Double => "double",
            ArgumentKind::Integer => "integer",
            ArgumentKind::Bool => "bool",
            ArgumentKind::Choice { .. } => "choice",
        }
    }

    /// Returns whether the supplied value satisfies this kind.
    pub fn accepts(&self, value: &ArgumentValue) -> bool {
        match (self, value) {
            (ArgumentKind::String, ArgumentValue::String(_)) => true,
            (ArgumentKind::Double, ArgumentValue::Double(_)) => true,
            (ArgumentKind::Integer, ArgumentValue::Integer(_)) => true,
            (ArgumentKind::Bool, ArgumentValue::Bool(_)) => true,
            (ArgumentKind::Choice { choices, .. }, ArgumentValue::String(text)) => {
                choices.iter().any(|choice| choice == text)
            }
            _ => false,
        }
    }
}

/// A concrete value supplied for an argument.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum ArgumentValue {
    /// Text value; choice selections are carried as their accepted value.
    String(String),
    /// Floating point value.
    Double(f64),
    /// Whole number value.
    Integer(i64),
    /// Boolean value.
    Bool(bool),
}

impl ArgumentValue {
    /// Short label used in diagnostics.
    pub fn label(&self) -> &'static str {
        match self {
            ArgumentValue::String(_) => "string",
            ArgumentValue::Double(_) => "double",
            ArgumentValue::Integer(_) => "integer",
            ArgumentValue::Bool(_) => "bool",
        }
    }
}

impl From<&str> for ArgumentValue {
    fn from(value: &str) -> Self {
        ArgumentValue::String(value.to_string())
    }
}

impl From<String> for ArgumentValue {
    fn from(value: String) -> Self {
        ArgumentValue::String(value)
    }
}

impl From<f64> for ArgumentValue {
    fn from(value: f64) -> Self {
        ArgumentValue::Double(value)
    }
}

impl From<i64> for ArgumentValue {
    fn from(value: i64) -> Self {
        ArgumentValue::Integer(value)
    }
}

impl From<bool> for ArgumentValue {
    fn from(value: bool) -> Self {
        ArgumentValue::Bool(value)
    }
}

/// Declares one named, typed input accepted by a measure.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ArgumentSpec {
    /// Unique key within the measure's argument sequence.
    pub name: String,
    /// Declared type, including choice lists for enumerated arguments.
    pub kind: ArgumentKind,
    /// Whether the host must supply a value (or the spec a default).
    pub required: bool,
    /// Optional default applied when no value is supplied.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub default: Option<ArgumentValue>,
    /// Optional label shown to the user instead of `name`.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub display_name: Option<String>,
    /// Optional longer description.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    /// Optional display units (fc, inches, $, whole years).
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub units: Option<String>,
}

impl ArgumentSpec {
    fn new(name: impl Into<String>, kind: ArgumentKind, required: bool) -> Self {
        Self {
            name: name.into(),
            kind,
            required,
            default: None,
            display_name: None,
            description: None,
            units: None,
        }
    }

    /// Declares a free-form string argument.
    pub fn string(name: impl Into<String>, required: bool) -> Self {
        Self::new(name, ArgumentKind::String, required)
    }

    /// Declares a floating point argument.
    pub fn double(name: impl Into<String>, required: bool) -> Self {
        Self::new(name, ArgumentKind::Double, required)
    }

    /// Declares a whole number argument.
    pub fn integer(name: impl Into<String>, required: bool) -> Self {
        Self::new(name, ArgumentKind::Integer, required)
    }

    /// Declares a boolean argument.
    pub fn boolean(name: impl Into<String>, required: bool) -> Self {
        Self::new(name, ArgumentKind::Bool, required)
    }

    /// Declares a choice argument whose display labels equal its values.
    pub fn choice(name: impl Into<String>, choices: Vec<String>, required: bool) -> Self {
        let display_names = choices.clone();
        Self::new(
            name,
            ArgumentKind::Choice {
                choices,
                display_names,
            },
            required,
        )
    }

    /// Declares a choice argument with separate display labels.
    pub fn choice_with_display(
        name: impl Into<String>,
        choices: Vec<String>,
        display_names: Vec<String>,
        required: bool,
    ) -> Self {
        Self::new(
            name,
            ArgumentKind::Choice {
                choices,
                display_names,
            },
            required,
        )
    }

    /// Sets the default value. The default must satisfy the declared kind;
    /// [`ArgumentSpec::validate`] rejects descriptors where it does not.
    pub fn with_default(mut self, value: impl Into<ArgumentValue>) -> Self {
        self.default = Some(value.into());
        self
    }

    /// Sets the display label.
    pub fn with_display_name(mut self, display_name: impl Into<String>) -> Self {
        self.display_name = Some(display_name.into());
        self
    }

    /// Sets the longer description.
    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }

    /// Sets the display units.
    pub fn with_units(mut self, units: impl Into<String>) -> Self {
        self.units = Some(units.into());
        self
    }

    /// Checks the descriptor's own invariants: a non-blank name, parallel
    /// choice/display lists, and a default that satisfies the declared kind.
    pub fn validate(&self) -> Result<(), MeasureError> {
        if self.name.trim().is_empty() {
            return Err(argument_error(
                "eem_core.spec_name",
                "argument descriptor has a blank name",
            ));
        }
        if let ArgumentKind::Choice {
            choices,
            display_names,
        } = &self.kind
        {
            if choices.len() != display_names.len() {
                return Err(MeasureError::Argument(
                    ErrorInfo::new(
                        "eem_core.spec_choice_labels",
                        "choice values and display labels differ in length",
                    )
                    .with_context("argument", self.name.clone()),
                ));
            }
        }
        if let Some(default) = &self.default {
            if !self.kind.accepts(default) {
                return Err(MeasureError::Argument(
                    ErrorInfo::new(
                        "eem_core.spec_default_kind",
                        format!(
                            "default value of kind {} does not satisfy declared kind {}",
                            default.label(),
                            self.kind.label()
                        ),
                    )
                    .with_context("argument", self.name.clone()),
                ));
            }
        }
        Ok(())
    }
}

/// One declared argument together with the value supplied for it, if any.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ArgumentInstance {
    /// The declaring descriptor, carried so kinds and defaults travel with
    /// the map.
    pub spec: ArgumentSpec,
    /// Value supplied by the host or a test harness.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub value: Option<ArgumentValue>,
}

impl ArgumentInstance {
    /// Returns the supplied value, falling back to the declared default.
    pub fn effective(&self) -> Option<&ArgumentValue> {
        self.value.as_ref().or(self.spec.default.as_ref())
    }
}

/// Map from argument name to declared spec plus supplied value.
///
/// Built once per invocation from the measure's descriptor sequence, then
/// populated by the host before `run` is called.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ArgumentValues {
    entries: BTreeMap<String, ArgumentInstance>,
}

impl ArgumentValues {
    /// Converts a descriptor sequence into an empty value map.
    pub fn from_specs(specs: &[ArgumentSpec]) -> Self {
        let entries = specs
            .iter()
            .map(|spec| {
                (
                    spec.name.clone(),
                    ArgumentInstance {
                        spec: spec.clone(),
                        value: None,
                    },
                )
            })
            .collect();
        Self { entries }
    }

    /// Supplies a value for a declared argument. Rejects names the schema
    /// does not declare and values that fail the declared kind.
    pub fn set(
        &mut self,
        name: &str,
        value: impl Into<ArgumentValue>,
    ) -> Result<(), MeasureError> {
        let value = value.into();
        let entry = self.entries.get_mut(name).ok_or_else(|| {
            MeasureError::Argument(
                ErrorInfo::new(
                    "eem_core.argument_unknown",
                    format!("argument '{name}' is not declared by this measure"),
                )
                .with_context("argument", name.to_string()),
            )
        })?;
        if !entry.spec.kind.accepts(&value) {
            return Err(MeasureError::Argument(
                ErrorInfo::new(
                    "eem_core.argument_kind",
                    format!(
                        "value of kind {} does not satisfy declared kind {}",
                        value.label(),
                        entry.spec.kind.label()
                    ),
                )
                .with_context("argument", name.to_string()),
            ));
        }
        entry.value = Some(value);
        Ok(())
    }

    /// Returns the instance declared under `name`.
    pub fn get(&self, name: &str) -> Option<&ArgumentInstance> {
        self.entries.get(name)
    }

    /// Returns the effective value (supplied or default) for `name`.
    pub fn effective(&self, name: &str) -> Option<&ArgumentValue> {
        self.entries.get(name).and_then(ArgumentInstance::effective)
    }

    fn required_value(&self, name: &str) -> Result<&ArgumentValue, MeasureError> {
        self.effective(name).ok_or_else(|| {
            MeasureError::Argument(
                ErrorInfo::new(
                    "eem_core.argument_missing",
                    format!("argument '{name}' has neither a supplied value nor a default"),
                )
                .with_context("argument", name.to_string()),
            )
        })
    }

    /// Returns the string (or choice) value for `name`.
    pub fn string(&self, name: &str) -> Result<String, MeasureError> {
        match self.required_value(name)? {
            ArgumentValue::String(text) => Ok(text.clone()),
            other => Err(argument_error(
                "eem_core.argument_kind",
                format!("argument '{name}' holds a {}, expected a string", other.label()),
            )),
        }
    }

    /// Returns the floating point value for `name`.
    pub fn double(&self, name: &str) -> Result<f64, MeasureError> {
        match self.required_value(name)? {
            ArgumentValue::Double(value) => Ok(*value),
            other => Err(argument_error(
                "eem_core.argument_kind",
                format!("argument '{name}' holds a {}, expected a double", other.label()),
            )),
        }
    }

    /// Returns the whole number value for `name`.
    pub fn integer(&self, name: &str) -> Result<i64, MeasureError> {
        match self.required_value(name)? {
            ArgumentValue::Integer(value) => Ok(*value),
            other => Err(argument_error(
                "eem_core.argument_kind",
                format!("argument '{name}' holds a {}, expected an integer", other.label()),
            )),
        }
    }

    /// Returns the boolean value for `name`.
    pub fn boolean(&self, name: &str) -> Result<bool, MeasureError> {
        match self.required_value(name)? {
            ArgumentValue::Bool(value) => Ok(*value),
            other => Err(argument_error(
                "eem_core.argument_kind",
                format!("argument '{name}' holds a {}, expected a bool", other.label()),
            )),
        }
    }

    /// Iterates over the declared instances in name order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &ArgumentInstance)> {
        self.entries
            .iter()
            .map(|(name, instance)| (name.as_str(), instance))
    }

    /// Number of declared arguments in the map.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Returns whether the map declares no arguments.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn choice_rejects_values_outside_the_list() {
        let spec = ArgumentSpec::choice(
            "control_type",
            vec!["None".to_string(), "Stepped".to_string()],
            true,
        );
        let mut values = ArgumentValues::from_specs(&[spec]);
        assert!(values.set("control_type", "Stepped").is_ok());
        assert!(values.set("control_type", "Dimmed").is_err());
    }

    #[test]
    fn getters_fall_back_to_defaults() {
        let spec = ArgumentSpec::double("setpoint", true).with_default(45.0);
        let values = ArgumentValues::from_specs(&[spec]);
        assert_eq!(values.double("setpoint").unwrap(), 45.0);
    }
}
