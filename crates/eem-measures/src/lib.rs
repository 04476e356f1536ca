//! The EEM measure collection.
//!
//! Each module holds one independent measure satisfying the host contract:
//! `name`, `arguments`, `run`. Measures share no state; the only common
//! machinery is the vocabulary from `eem-core` and the capability surface of
//! `eem-model`. A measure's manifest lives next to its implementation so the
//! registry and the code cannot drift apart.

pub mod add_daylight_sensors;
pub mod enable_economizer_control;
pub mod ground_loop_output_variables;
pub mod reduce_lighting_loads;
pub mod replace_water_heater;

pub use add_daylight_sensors::AddDaylightSensors;
pub use enable_economizer_control::EnableEconomizerControl;
pub use ground_loop_output_variables::RequestGroundLoopOutputVariables;
pub use reduce_lighting_loads::ReduceLightingLoadsByPercentage;
pub use replace_water_heater::ReplaceWaterHeaterWithChilledWaterStorage;

use eem_core::MeasureError;
use eem_host::{HostAdapter, MeasureManifest};

/// Registers every measure in this crate on the provided adapter.
pub fn register_standard_measures(adapter: &mut HostAdapter) -> Result<(), MeasureError> {
    adapter.register_model_measure(Box::new(AddDaylightSensors))?;
    adapter.register_model_measure(Box::new(EnableEconomizerControl))?;
    adapter.register_model_measure(Box::new(ReduceLightingLoadsByPercentage))?;
    adapter.register_model_measure(Box::new(ReplaceWaterHeaterWithChilledWaterStorage))?;
    adapter.register_workspace_measure(Box::new(RequestGroundLoopOutputVariables))?;
    Ok(())
}

/// Manifests for every measure in this crate, in registration order.
pub fn standard_manifests() -> Vec<MeasureManifest> {
    vec![
        add_daylight_sensors::manifest(),
        enable_economizer_control::manifest(),
        reduce_lighting_loads::manifest(),
        replace_water_heater::manifest(),
        ground_loop_output_variables::manifest(),
    ]
}
