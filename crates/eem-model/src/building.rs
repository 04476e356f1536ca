//! Building, space and zone objects.

use serde::{Deserialize, Serialize};

use crate::Handle;

/// The single building object every model carries.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Building {
    pub handle: Handle,
    pub name: String,
}

/// A named space type; spaces reference it by handle.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SpaceType {
    pub handle: Handle,
    pub name: String,
}

/// One space in the building.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Space {
    pub handle: Handle,
    pub name: String,
    /// Space type assignment, if any.
    pub space_type: Option<Handle>,
    /// Thermal zone assignment; spaces without one are excluded from the
    /// energy simulation.
    pub thermal_zone: Option<Handle>,
    /// Floor area in square meters.
    pub floor_area: f64,
    /// Design occupancy used by per-person loads.
    pub number_of_people: f64,
    /// Whether the space has exterior glazing that admits natural light.
    pub has_exterior_glazing: bool,
    /// Daylighting controls placed in this space.
    pub daylighting_controls: Vec<Handle>,
}

/// A thermal zone grouping one or more spaces.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ThermalZone {
    pub handle: Handle,
    pub name: String,
    /// Primary daylighting control driving the zone, if assigned.
    pub primary_daylighting_control: Option<Handle>,
    /// Secondary daylighting control, if assigned.
    pub secondary_daylighting_control: Option<Handle>,
    /// Fraction of the zone controlled by the primary control.
    pub primary_control_fraction: f64,
    /// Fraction of the zone controlled by the secondary control.
    pub secondary_control_fraction: f64,
}

/// A daylighting sensor placed in a space.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DaylightingControl {
    pub handle: Handle,
    pub name: String,
    /// Space the sensor sits in.
    pub space: Handle,
    /// Illuminance setpoint in lux.
    pub illuminance_setpoint_lux: f64,
    /// Control strategy keyword (None, Continuous, Stepped, Continuous/Off).
    pub control_type: String,
    /// Minimum input power fraction for continuous dimming.
    pub minimum_power_fraction: f64,
    /// Minimum light output fraction for continuous dimming.
    pub minimum_light_fraction: f64,
    /// Sensor height above the space origin, in meters.
    pub sensor_height_m: f64,
}
