//! Stub building model for the EEM measure library.
//!
//! This crate stands in for the host's full object graph: it carries just
//! enough of the building (spaces, zones, lighting, plant and air loops) and
//! of the raw simulation input to express every measure's queries and edits.
//! Measures borrow a [`Model`] or [`Workspace`] mutably for one invocation
//! and never retain references past it.

use serde::{Deserialize, Serialize};

pub mod air;
pub mod building;
pub mod lighting;
pub mod model;
pub mod plant;
pub mod workspace;

pub use air::{AirLoop, OutdoorAirController};
pub use building::{Building, DaylightingControl, Space, SpaceType, ThermalZone};
pub use lighting::{CostCategory, LifeCycleCost, LightingPower, Lights, LightsDefinition, LightsTarget};
pub use model::Model;
pub use plant::{LoopSide, Node, PlantLoop, WaterComponent, WaterComponentKind};
pub use workspace::{IdfObject, Workspace};

/// Opaque identifier for an object owned by a [`Model`].
///
/// Choice arguments carry handles as strings; [`Handle::parse`] recovers the
/// identifier on the measure side.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct Handle(u64);

impl Handle {
    /// Creates a handle from its raw integer representation.
    pub fn from_raw(raw: u64) -> Self {
        Self(raw)
    }

    /// Returns the raw integer representation of the handle.
    pub fn as_raw(&self) -> u64 {
        self.0
    }

    /// Parses the string form produced by [`Handle::to_string`].
    pub fn parse(text: &str) -> Option<Self> {
        text.trim().parse().ok().map(Handle)
    }
}

impl std::fmt::Display for Handle {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}
