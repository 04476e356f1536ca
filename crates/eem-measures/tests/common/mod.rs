#![allow(dead_code)]

use eem_model::{
    Handle, IdfObject, LightingPower, LightsTarget, LoopSide, Model, WaterComponentKind, Workspace,
};

/// Model for the daylight sensor reference scenario.
///
/// Space type "LargeHotel GuestRoom" carries nine spaces arranged so that a
/// valid run with a sensor height above 72 inches yields exactly eight
/// warnings: two spaces with existing sensors, two without a thermal zone,
/// two without exterior glazing, one zone with three sensor spaces, plus the
/// height warning.
pub fn daylight_model() -> (Model, Handle) {
    let mut model = Model::new();
    let guest_room = model.add_space_type("LargeHotel GuestRoom");
    // a second used space type keeps the choice list honest
    let corridor = model.add_space_type("Corridor");
    let hall = model.add_space("Corridor 1");
    model.space_mut(hall).unwrap().space_type = Some(corridor);

    let z1 = model.add_thermal_zone("Zone 1");
    let z2 = model.add_thermal_zone("Zone 2");
    let z3 = model.add_thermal_zone("Zone 3");

    // two spaces that already carry a sensor
    for name in ["Guest 101", "Guest 102"] {
        let space = model.add_space(name);
        model.space_mut(space).unwrap().space_type = Some(guest_room);
        model.space_mut(space).unwrap().floor_area = 25.0;
        model
            .add_daylighting_control(&format!("{name} existing control"), space)
            .unwrap();
    }
    // two spaces outside any thermal zone
    for name in ["Guest 103", "Guest 104"] {
        let space = model.add_space(name);
        let space = model.space_mut(space).unwrap();
        space.space_type = Some(guest_room);
        space.floor_area = 25.0;
    }
    // two zoned spaces without exterior glazing
    for (name, zone) in [("Guest 105", z1), ("Guest 106", z2)] {
        let space = model.add_space(name);
        let space = model.space_mut(space).unwrap();
        space.space_type = Some(guest_room);
        space.thermal_zone = Some(zone);
        space.floor_area = 25.0;
    }
    // three eligible spaces sharing one zone, descending floor area
    for (name, area) in [("Guest 107", 40.0), ("Guest 108", 30.0), ("Guest 109", 20.0)] {
        let space = model.add_space(name);
        let space = model.space_mut(space).unwrap();
        space.space_type = Some(guest_room);
        space.thermal_zone = Some(z3);
        space.floor_area = area;
        space.has_exterior_glazing = true;
    }

    (model, guest_room)
}

/// Model with a placeholder water heater spanning two plant loops.
pub struct WaterHeaterFixture {
    pub model: Model,
    pub heater: Handle,
    pub supply_node: Handle,
    pub demand_node: Handle,
    pub chilled_loop: Handle,
    pub condenser_loop: Handle,
}

pub fn water_heater_model(heater_name: &str) -> WaterHeaterFixture {
    let mut model = Model::new();
    let chilled_loop = model.add_plant_loop("Chilled Water Loop");
    let condenser_loop = model.add_plant_loop("Condenser Water Loop");
    let supply_node = model
        .add_node("Chilled Water Supply Inlet", chilled_loop, LoopSide::Supply)
        .unwrap();
    let demand_node = model
        .add_node("Condenser Demand Inlet", condenser_loop, LoopSide::Demand)
        .unwrap();
    let heater = model.add_water_component(heater_name, WaterComponentKind::WaterHeaterMixed);
    model.connect_component_to_node(heater, supply_node).unwrap();
    model.connect_component_to_node(heater, demand_node).unwrap();
    WaterHeaterFixture {
        model,
        heater,
        supply_node,
        demand_node,
        chilled_loop,
        condenser_loop,
    }
}

/// Model with lighting split across a space type and a standalone space.
pub struct LightingFixture {
    pub model: Model,
    pub office: Handle,
    pub storage_type: Handle,
    pub shared_definition: Handle,
    pub single_definition: Handle,
    pub out_of_scope_definition: Handle,
}

pub fn lighting_model() -> LightingFixture {
    let mut model = Model::new();
    let office = model.add_space_type("Office");
    let storage_type = model.add_space_type("Storage");

    let office_1 = model.add_space("Office 101");
    let office_2 = model.add_space("Office 102");
    let store = model.add_space("Store 1");
    for (space, space_type, area) in [
        (office_1, office, 100.0),
        (office_2, office, 50.0),
        (store, storage_type, 80.0),
    ] {
        let space = model.space_mut(space).unwrap();
        space.space_type = Some(space_type);
        space.floor_area = area;
    }

    // shared by both office spaces
    let shared_definition =
        model.add_lights_definition("Office LPD", LightingPower::PerArea(10.0));
    model
        .add_lights("Office 101 Lights", shared_definition, LightsTarget::Space(office_1))
        .unwrap();
    model
        .add_lights("Office 102 Lights", shared_definition, LightsTarget::Space(office_2))
        .unwrap();
    // single-use definition on the office space type
    let single_definition =
        model.add_lights_definition("Office Accent", LightingPower::Level(200.0));
    model
        .add_lights("Office Accent Lights", single_definition, LightsTarget::SpaceType(office))
        .unwrap();
    // storage lighting stays out of scope for office-only runs
    let out_of_scope_definition =
        model.add_lights_definition("Storage LPD", LightingPower::PerArea(5.0));
    model
        .add_lights("Store Lights", out_of_scope_definition, LightsTarget::Space(store))
        .unwrap();

    LightingFixture {
        model,
        office,
        storage_type,
        shared_definition,
        single_definition,
        out_of_scope_definition,
    }
}

/// Model with air loops, one of them missing an outdoor air controller.
pub fn economizer_model() -> Model {
    let mut model = Model::new();
    let vav_1 = model.add_air_loop("VAV System 1");
    let vav_2 = model.add_air_loop("VAV System 2");
    model.add_air_loop("Exhaust System");
    model
        .add_outdoor_air_controller("VAV System 1 OA Controller", vav_1)
        .unwrap();
    model
        .add_outdoor_air_controller("VAV System 2 OA Controller", vav_2)
        .unwrap();
    model
}

/// Workspace holding two named plant loops and one nameless one.
pub fn ground_loop_workspace() -> Workspace {
    let mut workspace = Workspace::new();
    workspace.add_object(IdfObject::new(
        "PlantLoop",
        vec!["Chilled Water Loop".to_string(), "Water".to_string()],
    ));
    workspace.add_object(IdfObject::new(
        "PlantLoop",
        vec!["Condenser Water Loop".to_string(), "Water".to_string()],
    ));
    workspace.add_object(IdfObject::new("PlantLoop", vec![String::new()]));
    workspace.add_object(IdfObject::new(
        "Zone",
        vec!["Thermal Zone 1".to_string()],
    ));
    workspace
}
