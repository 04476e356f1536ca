use eem_host::{from_json_slice, to_canonical_json_bytes, MeasureManifest, MeasureType};

fn sample_manifest() -> MeasureManifest {
    MeasureManifest {
        name: "add_daylight_sensors".into(),
        class_name: "AddDaylightSensors".into(),
        display_name: "Add Daylight Sensors".into(),
        version: "0.1.0".into(),
        contract_version: eem_host::EEM_CONTRACT_VERSION,
        measure_type: MeasureType::Model,
        description: Some("Adds daylighting controls to spaces of a space type.".into()),
        modeler_description: None,
        tags: vec!["Electric Lighting.Electric Lighting Controls".into()],
    }
}

#[test]
fn manifest_roundtrip_is_stable() {
    let manifest = sample_manifest();
    manifest.validate().expect("valid manifest");
    let toml = toml::to_string(&manifest).expect("serialize");
    let parsed: MeasureManifest = toml::from_str(&toml).expect("parse");
    assert_eq!(manifest, parsed);
    let bytes = to_canonical_json_bytes(&manifest).expect("json");
    let parsed_json: MeasureManifest = from_json_slice(&bytes).expect("roundtrip");
    assert_eq!(parsed_json, manifest);
}

#[test]
fn blank_fields_fail_validation() {
    let mut manifest = sample_manifest();
    manifest.version = "  ".into();
    assert!(manifest.validate().is_err());

    let mut manifest = sample_manifest();
    manifest.display_name.clear();
    assert!(manifest.validate().is_err());
}

#[test]
fn canonical_bytes_are_deterministic() {
    let a = to_canonical_json_bytes(&sample_manifest()).expect("json");
    let b = to_canonical_json_bytes(&sample_manifest()).expect("json");
    assert_eq!(a, b);
}
