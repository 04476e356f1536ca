//! Air loops and outdoor air controllers.

use serde::{Deserialize, Serialize};

use crate::Handle;

/// An air loop; at most one outdoor air controller is attached.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AirLoop {
    pub handle: Handle,
    pub name: String,
    pub outdoor_air_controller: Option<Handle>,
}

/// Controller governing outdoor air intake and economizer operation.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct OutdoorAirController {
    pub handle: Handle,
    pub name: String,
    /// Economizer control keyword (NoEconomizer, FixedDryBulb, ...).
    pub economizer_control_type: String,
    /// Maximum limit dry-bulb temperature in Celsius, if set.
    pub maximum_limit_dry_bulb_c: Option<f64>,
    /// Minimum limit dry-bulb temperature in Celsius, if set.
    pub minimum_limit_dry_bulb_c: Option<f64>,
}
