//! The mutable object graph a measure borrows for one invocation.

use std::collections::BTreeMap;

use eem_core::{ErrorInfo, MeasureError};
use serde::{Deserialize, Serialize};

use crate::air::{AirLoop, OutdoorAirController};
use crate::building::{Building, DaylightingControl, Space, SpaceType, ThermalZone};
use crate::lighting::{
    CostCategory, LifeCycleCost, LightingPower, Lights, LightsDefinition, LightsTarget,
};
use crate::plant::{LoopSide, Node, PlantLoop, WaterComponent, WaterComponentKind};
use crate::Handle;

fn unknown_handle(family: &str, handle: Handle) -> MeasureError {
    MeasureError::Model(
        ErrorInfo::new(
            "eem_model.unknown_handle",
            format!("no {family} object with the given handle"),
        )
        .with_context("family", family.to_string())
        .with_context("handle", handle.to_string()),
    )
}

/// The stub building model.
///
/// Objects live in per-family arenas keyed by [`Handle`]; handles ascend in
/// creation order, so iteration over any family is deterministic. Measures
/// query and edit through the methods below and never own the graph.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Model {
    next_handle: u64,
    building: Building,
    space_types: BTreeMap<Handle, SpaceType>,
    spaces: BTreeMap<Handle, Space>,
    thermal_zones: BTreeMap<Handle, ThermalZone>,
    daylighting_controls: BTreeMap<Handle, DaylightingControl>,
    lights_definitions: BTreeMap<Handle, LightsDefinition>,
    lights: BTreeMap<Handle, Lights>,
    life_cycle_costs: BTreeMap<Handle, LifeCycleCost>,
    plant_loops: BTreeMap<Handle, PlantLoop>,
    nodes: BTreeMap<Handle, Node>,
    water_components: BTreeMap<Handle, WaterComponent>,
    air_loops: BTreeMap<Handle, AirLoop>,
    outdoor_air_controllers: BTreeMap<Handle, OutdoorAirController>,
}

impl Default for Model {
    fn default() -> Self {
        Self::new()
    }
}

impl Model {
    /// Creates an empty model holding only the building object.
    pub fn new() -> Self {
        Self {
            next_handle: 2,
            building: Building {
                handle: Handle::from_raw(1),
                name: "Building 1".to_string(),
            },
            space_types: BTreeMap::new(),
            spaces: BTreeMap::new(),
            thermal_zones: BTreeMap::new(),
            daylighting_controls: BTreeMap::new(),
            lights_definitions: BTreeMap::new(),
            lights: BTreeMap::new(),
            life_cycle_costs: BTreeMap::new(),
            plant_loops: BTreeMap::new(),
            nodes: BTreeMap::new(),
            water_components: BTreeMap::new(),
            air_loops: BTreeMap::new(),
            outdoor_air_controllers: BTreeMap::new(),
        }
    }

    fn allocate(&mut self) -> Handle {
        let handle = Handle::from_raw(self.next_handle);
        self.next_handle += 1;
        handle
    }

    /// The building object.
    pub fn building(&self) -> &Building {
        &self.building
    }

    /// Mutable access to the building object.
    pub fn building_mut(&mut self) -> &mut Building {
        &mut self.building
    }

    // --- space types, spaces and zones ---

    /// Adds a space type and returns its handle.
    pub fn add_space_type(&mut self, name: &str) -> Handle {
        let handle = self.allocate();
        self.space_types.insert(
            handle,
            SpaceType {
                handle,
                name: name.to_string(),
            },
        );
        handle
    }

    /// Space types in handle order.
    pub fn space_types(&self) -> impl Iterator<Item = &SpaceType> {
        self.space_types.values()
    }

    /// Looks up a space type by handle.
    pub fn space_type(&self, handle: Handle) -> Option<&SpaceType> {
        self.space_types.get(&handle)
    }

    /// Adds a space with no assignments and zero floor area.
    pub fn add_space(&mut self, name: &str) -> Handle {
        let handle = self.allocate();
        self.spaces.insert(
            handle,
            Space {
                handle,
                name: name.to_string(),
                space_type: None,
                thermal_zone: None,
                floor_area: 0.0,
                number_of_people: 0.0,
                has_exterior_glazing: false,
                daylighting_controls: Vec::new(),
            },
        );
        handle
    }

    /// Spaces in handle order.
    pub fn spaces(&self) -> impl Iterator<Item = &Space> {
        self.spaces.values()
    }

    /// Looks up a space by handle.
    pub fn space(&self, handle: Handle) -> Option<&Space> {
        self.spaces.get(&handle)
    }

    /// Mutable access to a space.
    pub fn space_mut(&mut self, handle: Handle) -> Option<&mut Space> {
        self.spaces.get_mut(&handle)
    }

    /// Handles of spaces assigned to the given space type, in handle order.
    pub fn spaces_of_type(&self, space_type: Handle) -> Vec<Handle> {
        self.spaces
            .values()
            .filter(|space| space.space_type == Some(space_type))
            .map(|space| space.handle)
            .collect()
    }

    /// Adds a thermal zone.
    pub fn add_thermal_zone(&mut self, name: &str) -> Handle {
        let handle = self.allocate();
        self.thermal_zones.insert(
            handle,
            ThermalZone {
                handle,
                name: name.to_string(),
                primary_daylighting_control: None,
                secondary_daylighting_control: None,
                primary_control_fraction: 0.0,
                secondary_control_fraction: 0.0,
            },
        );
        handle
    }

    /// Looks up a thermal zone by handle.
    pub fn thermal_zone(&self, handle: Handle) -> Option<&ThermalZone> {
        self.thermal_zones.get(&handle)
    }

    /// Mutable access to a thermal zone.
    pub fn thermal_zone_mut(&mut self, handle: Handle) -> Option<&mut ThermalZone> {
        self.thermal_zones.get_mut(&handle)
    }

    /// Places a daylighting control in a space and registers it there.
    pub fn add_daylighting_control(
        &mut self,
        name: &str,
        space: Handle,
    ) -> Result<Handle, MeasureError> {
        if !self.spaces.contains_key(&space) {
            return Err(unknown_handle("space", space));
        }
        let handle = self.allocate();
        self.daylighting_controls.insert(
            handle,
            DaylightingControl {
                handle,
                name: name.to_string(),
                space,
                illuminance_setpoint_lux: 0.0,
                control_type: "Continuous/Off".to_string(),
                minimum_power_fraction: 0.3,
                minimum_light_fraction: 0.2,
                sensor_height_m: 0.0,
            },
        );
        if let Some(space) = self.spaces.get_mut(&space) {
            space.daylighting_controls.push(handle);
        }
        Ok(handle)
    }

    /// Looks up a daylighting control by handle.
    pub fn daylighting_control(&self, handle: Handle) -> Option<&DaylightingControl> {
        self.daylighting_controls.get(&handle)
    }

    /// Mutable access to a daylighting control.
    pub fn daylighting_control_mut(&mut self, handle: Handle) -> Option<&mut DaylightingControl> {
        self.daylighting_controls.get_mut(&handle)
    }

    /// Number of daylighting controls in the model.
    pub fn daylighting_control_count(&self) -> usize {
        self.daylighting_controls.len()
    }

    // --- lighting ---

    /// Adds a lights definition.
    pub fn add_lights_definition(&mut self, name: &str, power: LightingPower) -> Handle {
        let handle = self.allocate();
        self.lights_definitions.insert(
            handle,
            LightsDefinition {
                handle,
                name: name.to_string(),
                power,
            },
        );
        handle
    }

    /// Looks up a lights definition by handle.
    pub fn lights_definition(&self, handle: Handle) -> Option<&LightsDefinition> {
        self.lights_definitions.get(&handle)
    }

    /// Mutable access to a lights definition.
    pub fn lights_definition_mut(&mut self, handle: Handle) -> Option<&mut LightsDefinition> {
        self.lights_definitions.get_mut(&handle)
    }

    /// Copies a definition under a new name, for scaling shared definitions
    /// without touching their other users.
    pub fn clone_lights_definition(
        &mut self,
        source: Handle,
        new_name: &str,
    ) -> Result<Handle, MeasureError> {
        let power = self
            .lights_definitions
            .get(&source)
            .map(|definition| definition.power)
            .ok_or_else(|| unknown_handle("lights definition", source))?;
        let handle = self.allocate();
        self.lights_definitions.insert(
            handle,
            LightsDefinition {
                handle,
                name: new_name.to_string(),
                power,
            },
        );
        Ok(handle)
    }

    /// Adds a lights instance referencing an existing definition.
    pub fn add_lights(
        &mut self,
        name: &str,
        definition: Handle,
        target: LightsTarget,
    ) -> Result<Handle, MeasureError> {
        if !self.lights_definitions.contains_key(&definition) {
            return Err(unknown_handle("lights definition", definition));
        }
        let target_exists = match target {
            LightsTarget::Space(space) => self.spaces.contains_key(&space),
            LightsTarget::SpaceType(space_type) => self.space_types.contains_key(&space_type),
        };
        if !target_exists {
            let handle = match target {
                LightsTarget::Space(space) => space,
                LightsTarget::SpaceType(space_type) => space_type,
            };
            return Err(unknown_handle("lights target", handle));
        }
        let handle = self.allocate();
        self.lights.insert(
            handle,
            Lights {
                handle,
                name: name.to_string(),
                definition,
                target,
            },
        );
        Ok(handle)
    }

    /// Lights instances in handle order.
    pub fn lights(&self) -> impl Iterator<Item = &Lights> {
        self.lights.values()
    }

    /// Looks up a lights instance by handle.
    pub fn lights_instance(&self, handle: Handle) -> Option<&Lights> {
        self.lights.get(&handle)
    }

    /// Mutable access to a lights instance.
    pub fn lights_instance_mut(&mut self, handle: Handle) -> Option<&mut Lights> {
        self.lights.get_mut(&handle)
    }

    /// Number of lights instances referencing the definition.
    pub fn definition_use_count(&self, definition: Handle) -> usize {
        self.lights
            .values()
            .filter(|instance| instance.definition == definition)
            .count()
    }

    /// Total floor area across all spaces, in square meters.
    pub fn building_floor_area(&self) -> f64 {
        self.spaces.values().map(|space| space.floor_area).sum()
    }

    /// Total design lighting power across all lights instances, in watts.
    ///
    /// Space-type instances contribute once per space assigned to the type.
    pub fn building_lighting_power(&self) -> f64 {
        let mut total = 0.0;
        for instance in self.lights.values() {
            let Some(definition) = self.lights_definitions.get(&instance.definition) else {
                continue;
            };
            match instance.target {
                LightsTarget::Space(space) => {
                    if let Some(space) = self.spaces.get(&space) {
                        total += definition
                            .power
                            .resolve(space.floor_area, space.number_of_people);
                    }
                }
                LightsTarget::SpaceType(space_type) => {
                    for space in self.spaces.values() {
                        if space.space_type == Some(space_type) {
                            total += definition
                                .power
                                .resolve(space.floor_area, space.number_of_people);
                        }
                    }
                }
            }
        }
        total
    }

    // --- life-cycle costs ---

    /// Attaches a life-cycle cost to a space or lights definition.
    pub fn add_life_cycle_cost(
        &mut self,
        name: &str,
        target: Handle,
        cost: f64,
        category: CostCategory,
        years_from_start: i64,
        repeat_period_years: i64,
    ) -> Result<Handle, MeasureError> {
        if !self.spaces.contains_key(&target) && !self.lights_definitions.contains_key(&target) {
            return Err(unknown_handle("cost target", target));
        }
        let handle = self.allocate();
        self.life_cycle_costs.insert(
            handle,
            LifeCycleCost {
                handle,
                name: name.to_string(),
                target,
                cost,
                category,
                years_from_start,
                repeat_period_years,
            },
        );
        Ok(handle)
    }

    /// Life-cycle costs attached to the given object, in handle order.
    pub fn life_cycle_costs_for(&self, target: Handle) -> Vec<&LifeCycleCost> {
        self.life_cycle_costs
            .values()
            .filter(|cost| cost.target == target)
            .collect()
    }

    // --- plant ---

    /// Adds a plant loop with no nodes or components.
    pub fn add_plant_loop(&mut self, name: &str) -> Handle {
        let handle = self.allocate();
        self.plant_loops.insert(
            handle,
            PlantLoop {
                handle,
                name: name.to_string(),
                supply_outlet_node: None,
                supply_components: Vec::new(),
                demand_components: Vec::new(),
            },
        );
        handle
    }

    /// Plant loops in handle order.
    pub fn plant_loops(&self) -> impl Iterator<Item = &PlantLoop> {
        self.plant_loops.values()
    }

    /// Looks up a plant loop by handle.
    pub fn plant_loop(&self, handle: Handle) -> Option<&PlantLoop> {
        self.plant_loops.get(&handle)
    }

    /// Mutable access to a plant loop.
    pub fn plant_loop_mut(&mut self, handle: Handle) -> Option<&mut PlantLoop> {
        self.plant_loops.get_mut(&handle)
    }

    /// Adds a node to one side of a plant loop. The first supply-side node
    /// becomes the loop's supply outlet node.
    pub fn add_node(
        &mut self,
        name: &str,
        plant_loop: Handle,
        side: LoopSide,
    ) -> Result<Handle, MeasureError> {
        if !self.plant_loops.contains_key(&plant_loop) {
            return Err(unknown_handle("plant loop", plant_loop));
        }
        let handle = self.allocate();
        self.nodes.insert(
            handle,
            Node {
                handle,
                name: name.to_string(),
                plant_loop,
                side,
            },
        );
        if side == LoopSide::Supply {
            if let Some(loop_obj) = self.plant_loops.get_mut(&plant_loop) {
                if loop_obj.supply_outlet_node.is_none() {
                    loop_obj.supply_outlet_node = Some(handle);
                }
            }
        }
        Ok(handle)
    }

    /// Looks up a node by handle.
    pub fn node(&self, handle: Handle) -> Option<&Node> {
        self.nodes.get(&handle)
    }

    /// Renames a node in place.
    pub fn rename_node(&mut self, handle: Handle, name: &str) -> Result<(), MeasureError> {
        let node = self
            .nodes
            .get_mut(&handle)
            .ok_or_else(|| unknown_handle("node", handle))?;
        node.name = name.to_string();
        Ok(())
    }

    /// Adds an unconnected water component.
    pub fn add_water_component(&mut self, name: &str, kind: WaterComponentKind) -> Handle {
        let handle = self.allocate();
        self.water_components.insert(
            handle,
            WaterComponent {
                handle,
                name: name.to_string(),
                kind,
                supply_inlet_node: None,
                demand_inlet_node: None,
            },
        );
        handle
    }

    /// Water components in handle order.
    pub fn water_components(&self) -> impl Iterator<Item = &WaterComponent> {
        self.water_components.values()
    }

    /// Looks up a water component by handle.
    pub fn water_component(&self, handle: Handle) -> Option<&WaterComponent> {
        self.water_components.get(&handle)
    }

    /// Connects a component at the given node. The node's side decides which
    /// inlet is wired, and the component joins that side of the node's loop.
    pub fn connect_component_to_node(
        &mut self,
        component: Handle,
        node: Handle,
    ) -> Result<(), MeasureError> {
        let (loop_handle, side) = {
            let node = self
                .nodes
                .get(&node)
                .ok_or_else(|| unknown_handle("node", node))?;
            (node.plant_loop, node.side)
        };
        {
            let component = self
                .water_components
                .get_mut(&component)
                .ok_or_else(|| unknown_handle("water component", component))?;
            match side {
                LoopSide::Supply => component.supply_inlet_node = Some(node),
                LoopSide::Demand => component.demand_inlet_node = Some(node),
            }
        }
        if let Some(loop_obj) = self.plant_loops.get_mut(&loop_handle) {
            let list = match side {
                LoopSide::Supply => &mut loop_obj.supply_components,
                LoopSide::Demand => &mut loop_obj.demand_components,
            };
            if !list.contains(&component) {
                list.push(component);
            }
        }
        Ok(())
    }

    /// Removes a water component and detaches it from every loop.
    pub fn remove_water_component(&mut self, handle: Handle) -> Result<(), MeasureError> {
        if self.water_components.remove(&handle).is_none() {
            return Err(unknown_handle("water component", handle));
        }
        for loop_obj in self.plant_loops.values_mut() {
            loop_obj.supply_components.retain(|entry| *entry != handle);
            loop_obj.demand_components.retain(|entry| *entry != handle);
        }
        Ok(())
    }

    // --- air ---

    /// Adds an air loop without an outdoor air controller.
    pub fn add_air_loop(&mut self, name: &str) -> Handle {
        let handle = self.allocate();
        self.air_loops.insert(
            handle,
            AirLoop {
                handle,
                name: name.to_string(),
                outdoor_air_controller: None,
            },
        );
        handle
    }

    /// Air loops in handle order.
    pub fn air_loops(&self) -> impl Iterator<Item = &AirLoop> {
        self.air_loops.values()
    }

    /// Looks up an air loop by handle.
    pub fn air_loop(&self, handle: Handle) -> Option<&AirLoop> {
        self.air_loops.get(&handle)
    }

    /// Attaches a new outdoor air controller to an air loop.
    pub fn add_outdoor_air_controller(
        &mut self,
        name: &str,
        air_loop: Handle,
    ) -> Result<Handle, MeasureError> {
        if !self.air_loops.contains_key(&air_loop) {
            return Err(unknown_handle("air loop", air_loop));
        }
        let handle = self.allocate();
        self.outdoor_air_controllers.insert(
            handle,
            OutdoorAirController {
                handle,
                name: name.to_string(),
                economizer_control_type: "NoEconomizer".to_string(),
                maximum_limit_dry_bulb_c: None,
                minimum_limit_dry_bulb_c: None,
            },
        );
        if let Some(loop_obj) = self.air_loops.get_mut(&air_loop) {
            loop_obj.outdoor_air_controller = Some(handle);
        }
        Ok(handle)
    }

    /// Looks up an outdoor air controller by handle.
    pub fn outdoor_air_controller(&self, handle: Handle) -> Option<&OutdoorAirController> {
        self.outdoor_air_controllers.get(&handle)
    }

    /// Mutable access to an outdoor air controller.
    pub fn outdoor_air_controller_mut(
        &mut self,
        handle: Handle,
    ) -> Option<&mut OutdoorAirController> {
        self.outdoor_air_controllers.get_mut(&handle)
    }
}
