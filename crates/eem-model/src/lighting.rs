//! Lighting instances, shared definitions and life-cycle cost annotations.

use serde::{Deserialize, Serialize};

use crate::Handle;

/// How a lights definition expresses its design power.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum LightingPower {
    /// Absolute lighting level in watts.
    Level(f64),
    /// Watts per square meter of floor area.
    PerArea(f64),
    /// Watts per person.
    PerPerson(f64),
    /// No load value assigned yet.
    None,
}

impl LightingPower {
    /// Resolves the definition power for a space of the given size and
    /// occupancy. Definitions without a load value contribute nothing.
    pub fn resolve(&self, floor_area: f64, people: f64) -> f64 {
        match self {
            LightingPower::Level(watts) => *watts,
            LightingPower::PerArea(watts_per_m2) => watts_per_m2 * floor_area,
            LightingPower::PerPerson(watts_per_person) => watts_per_person * people,
            LightingPower::None => 0.0,
        }
    }

    /// Scales the load value by the given factor, leaving empty definitions
    /// untouched.
    pub fn scaled(&self, factor: f64) -> Self {
        match self {
            LightingPower::Level(watts) => LightingPower::Level(watts * factor),
            LightingPower::PerArea(value) => LightingPower::PerArea(value * factor),
            LightingPower::PerPerson(value) => LightingPower::PerPerson(value * factor),
            LightingPower::None => LightingPower::None,
        }
    }

    /// Returns whether the definition carries any load value.
    pub fn is_assigned(&self) -> bool {
        !matches!(self, LightingPower::None)
    }
}

/// A lights definition, possibly shared by several instances.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LightsDefinition {
    pub handle: Handle,
    pub name: String,
    pub power: LightingPower,
}

/// What a lights instance illuminates.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum LightsTarget {
    /// Attached directly to one space.
    Space(Handle),
    /// Attached to a space type and inherited by its spaces.
    SpaceType(Handle),
}

/// One lights instance referencing a shared definition.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Lights {
    pub handle: Handle,
    pub name: String,
    /// The definition holding the load values.
    pub definition: Handle,
    pub target: LightsTarget,
}

/// Cost category recognised by the life-cycle costing pass.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum CostCategory {
    Construction,
    Salvage,
    Maintenance,
}

/// A life-cycle cost annotation attached to a model object.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LifeCycleCost {
    pub handle: Handle,
    pub name: String,
    /// Object the cost is attached to (a space or a lights definition).
    pub target: Handle,
    pub cost: f64,
    pub category: CostCategory,
    /// Years from the run start until the cost first occurs.
    pub years_from_start: i64,
    /// Repeat period in years; zero means a one-time cost.
    pub repeat_period_years: i64,
}
