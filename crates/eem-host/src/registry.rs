use std::fs;
use std::path::{Path, PathBuf};

use eem_core::{ErrorInfo, MeasureError};
use serde::{Deserialize, Serialize};
use walkdir::WalkDir;

use crate::hash::compute_manifest_hash;
use crate::manifest::{MeasureManifest, MeasureMetadata};
use crate::serde::to_canonical_json_bytes;

fn registry_io(err: impl ToString, path: &Path) -> MeasureError {
    MeasureError::Registry(
        ErrorInfo::new("eem_host.registry_io", err.to_string())
            .with_context("path", path.display().to_string()),
    )
}

/// One installed measure as recorded on disk.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RegistryEntry {
    pub metadata: MeasureMetadata,
    /// RFC 3339 timestamp of the install.
    pub installed_at: String,
}

/// On-disk store of measure manifests below a root directory, mirroring the
/// original library's `lib/measures/<name>/` layout. Entries may be nested
/// one extra level (taxonomy folders), so listing walks the tree.
#[derive(Debug, Clone)]
pub struct MeasureRegistry {
    root: PathBuf,
}

impl MeasureRegistry {
    /// Creates a registry rooted at the given directory.
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }

    fn entry_dir(&self, name: &str) -> PathBuf {
        self.root.join(name)
    }

    /// Validates and installs a manifest, writing `manifest.toml` and a
    /// `metadata.json` record with the manifest hash and install timestamp.
    pub fn install(&self, manifest: &MeasureManifest) -> Result<RegistryEntry, MeasureError> {
        manifest.validate()?;
        let manifest_hash = compute_manifest_hash(manifest)?;
        let metadata = MeasureMetadata::from_manifest(manifest, manifest_hash);
        let entry = RegistryEntry {
            metadata,
            installed_at: chrono::Utc::now().to_rfc3339(),
        };
        let dir = self.entry_dir(&manifest.name);
        fs::create_dir_all(&dir).map_err(|err| registry_io(err, &dir))?;
        let manifest_path = dir.join("manifest.toml");
        let manifest_text = toml::to_string_pretty(manifest).map_err(|err| {
            MeasureError::Registry(ErrorInfo::new(
                "eem_host.manifest_serialize",
                err.to_string(),
            ))
        })?;
        fs::write(&manifest_path, manifest_text)
            .map_err(|err| registry_io(err, &manifest_path))?;
        let metadata_path = dir.join("metadata.json");
        let entry_bytes = to_canonical_json_bytes(&entry)?;
        fs::write(&metadata_path, entry_bytes).map_err(|err| registry_io(err, &metadata_path))?;
        Ok(entry)
    }

    /// Removes an installed measure, if present.
    pub fn remove(&self, name: &str) -> Result<(), MeasureError> {
        let dir = self.entry_dir(name);
        if dir.exists() {
            fs::remove_dir_all(&dir).map_err(|err| registry_io(err, &dir))?;
        }
        Ok(())
    }

    /// Lists installed measures in name order.
    pub fn list(&self) -> Result<Vec<RegistryEntry>, MeasureError> {
        let mut entries = Vec::new();
        if !self.root.exists() {
            return Ok(entries);
        }
        for item in WalkDir::new(&self.root).min_depth(2).max_depth(4) {
            let item = item.map_err(|err| {
                MeasureError::Registry(ErrorInfo::new("eem_host.registry_walk", err.to_string()))
            })?;
            if !item.file_type().is_file() || item.file_name() != "metadata.json" {
                continue;
            }
            let bytes = fs::read(item.path()).map_err(|err| registry_io(err, item.path()))?;
            let parsed: RegistryEntry = crate::serde::from_json_slice(&bytes)?;
            entries.push(parsed);
        }
        entries.sort_by(|a, b| a.metadata.name.cmp(&b.metadata.name));
        Ok(entries)
    }

    /// Re-reads an installed measure and checks its manifest against the
    /// recorded hash, detecting edits made behind the registry's back.
    pub fn verify(&self, name: &str) -> Result<RegistryEntry, MeasureError> {
        let dir = self.entry_dir(name);
        let metadata_path = dir.join("metadata.json");
        if !metadata_path.exists() {
            return Err(MeasureError::Registry(ErrorInfo::new(
                "eem_host.registry_missing",
                format!("measure {name} not installed"),
            )));
        }
        let bytes = fs::read(&metadata_path).map_err(|err| registry_io(err, &metadata_path))?;
        let mut entry: RegistryEntry = crate::serde::from_json_slice(&bytes)?;
        let manifest_path = dir.join("manifest.toml");
        let manifest = crate::loader::load_measure_manifest(&manifest_path)?;
        let manifest_hash = compute_manifest_hash(&manifest)?;
        if manifest_hash != entry.metadata.manifest_hash {
            return Err(MeasureError::Registry(
                ErrorInfo::new("eem_host.registry_manifest_hash", "manifest hash mismatch")
                    .with_context("expected", entry.metadata.manifest_hash.clone())
                    .with_context("actual", manifest_hash),
            ));
        }
        entry.metadata = MeasureMetadata::from_manifest(&manifest, manifest_hash);
        Ok(entry)
    }
}
