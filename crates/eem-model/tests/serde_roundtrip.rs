use eem_model::{IdfObject, LightingPower, LightsTarget, LoopSide, Model, WaterComponentKind, Workspace};

#[test]
fn model_round_trips_through_json() {
    let mut model = Model::new();
    let office = model.add_space_type("Office");
    let space = model.add_space("Office 101");
    {
        let space = model.space_mut(space).unwrap();
        space.space_type = Some(office);
        space.floor_area = 42.0;
        space.has_exterior_glazing = true;
    }
    let definition = model.add_lights_definition("Office LPD", LightingPower::PerArea(10.0));
    model
        .add_lights("Office Lights", definition, LightsTarget::SpaceType(office))
        .unwrap();
    let loop_handle = model.add_plant_loop("Chilled Water Loop");
    let node = model
        .add_node("CHW Supply Inlet", loop_handle, LoopSide::Supply)
        .unwrap();
    let tank = model.add_water_component("CHW Tank Placeholder", WaterComponentKind::WaterHeaterMixed);
    model.connect_component_to_node(tank, node).unwrap();

    let bytes = serde_json::to_vec(&model).expect("serialize");
    let parsed: Model = serde_json::from_slice(&bytes).expect("parse");
    assert_eq!(parsed, model);
    assert_eq!(parsed.building_lighting_power(), model.building_lighting_power());
}

#[test]
fn workspace_round_trips_through_json() {
    let mut workspace = Workspace::new();
    workspace.add_object(IdfObject::new(
        "Output:Variable",
        vec!["*".to_string(), "District Heating Rate".to_string(), "Hourly".to_string()],
    ));
    let bytes = serde_json::to_vec(&workspace).expect("serialize");
    let parsed: Workspace = serde_json::from_slice(&bytes).expect("parse");
    assert_eq!(parsed, workspace);
}
