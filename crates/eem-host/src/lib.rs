//! Host side of the EEM measure library: the fixed measure contract, measure
//! manifests, an on-disk registry and the in-memory adapter that dispatches
//! invocations.

mod adapter;
mod contract;
mod hash;
mod loader;
mod manifest;
mod registry;
mod serde;

pub use adapter::{HostAdapter, Invocation};
pub use contract::{ModelMeasure, WorkspaceMeasure, EEM_CONTRACT_VERSION};
pub use hash::compute_manifest_hash;
pub use loader::{load_measure_manifest, verify_contract_compat};
pub use manifest::{MeasureManifest, MeasureMetadata, MeasureType};
pub use registry::{MeasureRegistry, RegistryEntry};
pub use serde::{from_json_slice, to_canonical_json_bytes};
