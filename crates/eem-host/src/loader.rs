use std::fs;
use std::path::Path;

use eem_core::{ErrorInfo, MeasureError};

use crate::contract::EEM_CONTRACT_VERSION;
use crate::manifest::MeasureManifest;

/// Reads and parses a measure manifest from a TOML file.
pub fn load_measure_manifest(path: &Path) -> Result<MeasureManifest, MeasureError> {
    let contents = fs::read_to_string(path).map_err(|err| {
        MeasureError::Registry(
            ErrorInfo::new(
                "eem_host.read_manifest",
                format!("failed to read manifest: {err}"),
            )
            .with_context("path", path.display().to_string()),
        )
    })?;
    toml::from_str(&contents).map_err(|err| {
        MeasureError::Registry(
            ErrorInfo::new("eem_host.parse_manifest", err.to_string())
                .with_context("path", path.display().to_string()),
        )
    })
}

/// Rejects manifests built against a different host contract version.
pub fn verify_contract_compat(manifest: &MeasureManifest) -> Result<(), MeasureError> {
    if manifest.contract_version != EEM_CONTRACT_VERSION {
        return Err(MeasureError::Registry(ErrorInfo::new(
            "eem_host.contract_mismatch",
            format!(
                "measure contract {} is incompatible with host contract {}",
                manifest.contract_version, EEM_CONTRACT_VERSION
            ),
        )));
    }
    Ok(())
}
