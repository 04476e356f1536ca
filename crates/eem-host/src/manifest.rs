use eem_core::{ErrorInfo, MeasureError};
use serde::{Deserialize, Serialize};

/// Which input the host hands to a measure's `run`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum MeasureType {
    /// Operates on the in-memory building model.
    Model,
    /// Operates on the raw simulation-input workspace.
    EnergyPlus,
}

/// On-disk description of one measure, the analog of the original library's
/// per-measure metadata file.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MeasureManifest {
    /// Snake-case identifier, unique within a registry.
    pub name: String,
    /// Implementing type name, for diagnostics.
    pub class_name: String,
    /// Title shown to users; also the value of the measure's `name()`.
    pub display_name: String,
    pub version: String,
    /// Contract version the measure was built against.
    pub contract_version: u32,
    pub measure_type: MeasureType,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub modeler_description: Option<String>,
    /// Taxonomy tags, e.g. "Electric Lighting.Lighting Equipment".
    #[serde(default)]
    pub tags: Vec<String>,
}

impl MeasureManifest {
    /// Checks the manifest's own invariants.
    pub fn validate(&self) -> Result<(), MeasureError> {
        if self.name.trim().is_empty() {
            return Err(MeasureError::Registry(ErrorInfo::new(
                "eem_host.manifest_name",
                "measure manifest missing name",
            )));
        }
        if self.class_name.trim().is_empty() {
            return Err(MeasureError::Registry(ErrorInfo::new(
                "eem_host.manifest_class_name",
                "measure manifest missing class name",
            )));
        }
        if self.display_name.trim().is_empty() {
            return Err(MeasureError::Registry(ErrorInfo::new(
                "eem_host.manifest_display_name",
                "measure manifest missing display name",
            )));
        }
        if self.version.trim().is_empty() {
            return Err(MeasureError::Registry(ErrorInfo::new(
                "eem_host.manifest_version",
                "measure manifest missing version",
            )));
        }
        Ok(())
    }
}

/// Summary stored by the registry next to each installed manifest.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MeasureMetadata {
    pub name: String,
    pub class_name: String,
    pub display_name: String,
    pub version: String,
    pub contract_version: u32,
    pub measure_type: MeasureType,
    pub tags: Vec<String>,
    /// Content hash of the canonical manifest, for verification.
    pub manifest_hash: String,
}

impl MeasureMetadata {
    /// Derives the stored summary from a manifest and its hash.
    pub fn from_manifest(manifest: &MeasureManifest, manifest_hash: String) -> Self {
        Self {
            name: manifest.name.clone(),
            class_name: manifest.class_name.clone(),
            display_name: manifest.display_name.clone(),
            version: manifest.version.clone(),
            contract_version: manifest.contract_version,
            measure_type: manifest.measure_type,
            tags: manifest.tags.clone(),
            manifest_hash,
        }
    }
}
