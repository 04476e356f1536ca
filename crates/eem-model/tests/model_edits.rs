use eem_model::{
    CostCategory, Handle, LightingPower, LightsTarget, LoopSide, Model, WaterComponentKind,
};

#[test]
fn handles_ascend_and_round_trip_their_string_form() {
    let mut model = Model::new();
    let first = model.add_space_type("Office");
    let second = model.add_space_type("Corridor");
    assert!(first < second);
    assert_eq!(Handle::parse(&first.to_string()), Some(first));
    assert_eq!(Handle::parse("not a handle"), None);
}

#[test]
fn spaces_report_their_type_membership() {
    let mut model = Model::new();
    let office = model.add_space_type("Office");
    let corridor = model.add_space_type("Corridor");
    let s1 = model.add_space("Office 101");
    let s2 = model.add_space("Office 102");
    let s3 = model.add_space("Hall");
    model.space_mut(s1).unwrap().space_type = Some(office);
    model.space_mut(s2).unwrap().space_type = Some(office);
    model.space_mut(s3).unwrap().space_type = Some(corridor);

    assert_eq!(model.spaces_of_type(office), vec![s1, s2]);
    assert_eq!(model.spaces_of_type(corridor), vec![s3]);
}

#[test]
fn daylighting_controls_register_on_their_space() {
    let mut model = Model::new();
    let space = model.add_space("Guest 101");
    let sensor = model
        .add_daylighting_control("Guest 101 daylighting control", space)
        .expect("space exists");
    assert_eq!(model.space(space).unwrap().daylighting_controls, vec![sensor]);
    assert_eq!(model.daylighting_control_count(), 1);

    let missing = Handle::from_raw(9999);
    assert!(model.add_daylighting_control("dangling", missing).is_err());
}

#[test]
fn component_swap_rewires_the_same_node_pair() {
    let mut model = Model::new();
    let chw_loop = model.add_plant_loop("Chilled Water Loop");
    let cnd_loop = model.add_plant_loop("Condenser Loop");
    let supply_node = model
        .add_node("CHW Supply Inlet", chw_loop, LoopSide::Supply)
        .unwrap();
    let demand_node = model
        .add_node("CND Demand Inlet", cnd_loop, LoopSide::Demand)
        .unwrap();

    let heater = model.add_water_component("CHW Tank Placeholder", WaterComponentKind::WaterHeaterMixed);
    model.connect_component_to_node(heater, supply_node).unwrap();
    model.connect_component_to_node(heater, demand_node).unwrap();
    assert_eq!(model.plant_loop(chw_loop).unwrap().supply_components, vec![heater]);

    // replacement takes over the exact node pair, then the original goes away
    let storage = model.add_water_component("CHW Storage", WaterComponentKind::ChilledWaterStorage);
    model.connect_component_to_node(storage, supply_node).unwrap();
    model.connect_component_to_node(storage, demand_node).unwrap();
    model.remove_water_component(heater).unwrap();

    let storage_obj = model.water_component(storage).unwrap();
    assert_eq!(storage_obj.supply_inlet_node, Some(supply_node));
    assert_eq!(storage_obj.demand_inlet_node, Some(demand_node));
    assert_eq!(model.plant_loop(chw_loop).unwrap().supply_components, vec![storage]);
    assert_eq!(model.plant_loop(cnd_loop).unwrap().demand_components, vec![storage]);
    assert!(model.water_component(heater).is_none());
    assert!(model.remove_water_component(heater).is_err());
}

#[test]
fn first_supply_node_becomes_the_loop_outlet() {
    let mut model = Model::new();
    let loop_handle = model.add_plant_loop("Heating Loop");
    let outlet = model
        .add_node("Heating Loop Outlet", loop_handle, LoopSide::Supply)
        .unwrap();
    let later = model
        .add_node("Heating Loop Inlet", loop_handle, LoopSide::Supply)
        .unwrap();
    assert_eq!(model.plant_loop(loop_handle).unwrap().supply_outlet_node, Some(outlet));
    assert_ne!(outlet, later);

    model.rename_node(outlet, "Heating Loop Supply Outlet Node").unwrap();
    assert_eq!(model.node(outlet).unwrap().name, "Heating Loop Supply Outlet Node");
}

#[test]
fn lighting_power_aggregates_across_targets() {
    let mut model = Model::new();
    let office = model.add_space_type("Office");
    let s1 = model.add_space("Office 101");
    let s2 = model.add_space("Office 102");
    for (space, area) in [(s1, 100.0), (s2, 50.0)] {
        let space = model.space_mut(space).unwrap();
        space.space_type = Some(office);
        space.floor_area = area;
    }

    let per_area = model.add_lights_definition("Office LPD", LightingPower::PerArea(10.0));
    model
        .add_lights("Office Lights", per_area, LightsTarget::SpaceType(office))
        .unwrap();
    let level = model.add_lights_definition("Task Light", LightingPower::Level(120.0));
    model
        .add_lights("Task Light 101", level, LightsTarget::Space(s1))
        .unwrap();

    // 10 W/m2 * 150 m2 + 120 W
    assert_eq!(model.building_lighting_power(), 1620.0);
    assert_eq!(model.building_floor_area(), 150.0);
    assert_eq!(model.definition_use_count(per_area), 1);
}

#[test]
fn cloned_definitions_scale_independently() {
    let mut model = Model::new();
    let shared = model.add_lights_definition("Shared LPD", LightingPower::PerArea(12.0));
    let clone = model
        .clone_lights_definition(shared, "Shared LPD - 30% reduction")
        .unwrap();
    let cloned = model.lights_definition_mut(clone).unwrap();
    cloned.power = cloned.power.scaled(0.7);

    assert_eq!(
        model.lights_definition(clone).unwrap().power,
        LightingPower::PerArea(12.0 * 0.7)
    );
    assert_eq!(
        model.lights_definition(shared).unwrap().power,
        LightingPower::PerArea(12.0)
    );
}

#[test]
fn life_cycle_costs_attach_to_spaces_and_definitions_only() {
    let mut model = Model::new();
    let space = model.add_space("Guest 101");
    let definition = model.add_lights_definition("LPD", LightingPower::PerArea(8.0));

    model
        .add_life_cycle_cost("lcc_mat", space, 5.0, CostCategory::Construction, 0, 0)
        .unwrap();
    model
        .add_life_cycle_cost("lcc_om", definition, 0.25, CostCategory::Maintenance, 0, 1)
        .unwrap();
    assert_eq!(model.life_cycle_costs_for(space).len(), 1);
    assert_eq!(model.life_cycle_costs_for(definition).len(), 1);

    let zone = model.add_thermal_zone("Zone 1");
    assert!(model
        .add_life_cycle_cost("lcc_bad", zone, 1.0, CostCategory::Salvage, 0, 0)
        .is_err());
}

#[test]
fn outdoor_air_controllers_attach_to_their_loop() {
    let mut model = Model::new();
    let loop_handle = model.add_air_loop("VAV System 1");
    let controller = model
        .add_outdoor_air_controller("VAV System 1 OA Controller", loop_handle)
        .unwrap();
    assert_eq!(
        model.air_loop(loop_handle).unwrap().outdoor_air_controller,
        Some(controller)
    );
    assert_eq!(
        model
            .outdoor_air_controller(controller)
            .unwrap()
            .economizer_control_type,
        "NoEconomizer"
    );
}
