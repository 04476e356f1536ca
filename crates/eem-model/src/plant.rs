//! Plant loops, nodes and water-side components.

use serde::{Deserialize, Serialize};

use crate::Handle;

/// Which side of a plant loop a node belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum LoopSide {
    Supply,
    Demand,
}

/// A connection point on a plant loop.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Node {
    pub handle: Handle,
    pub name: String,
    /// Loop the node belongs to.
    pub plant_loop: Handle,
    pub side: LoopSide,
}

/// Kind of water-side component recognised by the measures.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum WaterComponentKind {
    /// A mixed water heater, often used as a placeholder tank.
    WaterHeaterMixed,
    /// A stratified chilled-water thermal storage tank.
    ChilledWaterStorage,
}

/// A water-to-water component that may sit on two loops at once, connected
/// through a supply-side and a demand-side inlet node.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WaterComponent {
    pub handle: Handle,
    pub name: String,
    pub kind: WaterComponentKind,
    /// Supply-side inlet connection, if wired.
    pub supply_inlet_node: Option<Handle>,
    /// Demand-side inlet connection, if wired.
    pub demand_inlet_node: Option<Handle>,
}

/// A plant loop with its component lists per side.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PlantLoop {
    pub handle: Handle,
    pub name: String,
    /// Outlet node on the supply side, once one is added.
    pub supply_outlet_node: Option<Handle>,
    /// Components on the supply side, in connection order.
    pub supply_components: Vec<Handle>,
    /// Components on the demand side, in connection order.
    pub demand_components: Vec<Handle>,
}
