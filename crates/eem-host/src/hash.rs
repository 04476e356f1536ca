use sha2::{Digest, Sha256};

use eem_core::MeasureError;

use crate::manifest::MeasureManifest;
use crate::serde::to_canonical_json_bytes;

/// Hashes the canonical JSON form of a manifest.
pub fn compute_manifest_hash(manifest: &MeasureManifest) -> Result<String, MeasureError> {
    let bytes = to_canonical_json_bytes(manifest)?;
    Ok(hex::encode(Sha256::digest(bytes)))
}
