use eem_core::{ArgumentSpec, ArgumentValues, MeasureStatus, Runner};

fn gate_specs() -> Vec<ArgumentSpec> {
    vec![
        ArgumentSpec::string("space_type", true),
        ArgumentSpec::double("setpoint", true).with_default(45.0),
    ]
}

#[test]
fn missing_required_argument_fails_the_gate() {
    let specs = gate_specs();
    let values = ArgumentValues::from_specs(&specs);
    let mut runner = Runner::new();

    assert!(!runner.validate_user_arguments(&specs, &values));
    let report = runner.result();
    assert_eq!(report.status, MeasureStatus::Fail);
    assert_eq!(report.errors.len(), 1);
    assert!(report.errors[0].contains("space_type"));
}

#[test]
fn defaults_satisfy_required_descriptors() {
    let specs = gate_specs();
    let mut values = ArgumentValues::from_specs(&specs);
    values.set("space_type", "Office").expect("declared");
    let mut runner = Runner::new();

    assert!(runner.validate_user_arguments(&specs, &values));
    assert_eq!(runner.result().status, MeasureStatus::Success);
    assert!(runner.result().errors.is_empty());
}

#[test]
fn entry_missing_from_the_map_entirely_is_reported() {
    let specs = gate_specs();
    // map built from a narrower schema than the one being validated
    let values = ArgumentValues::from_specs(&specs[1..]);
    let mut runner = Runner::new();

    assert!(!runner.validate_user_arguments(&specs, &values));
    assert!(runner.result().errors[0].contains("no entry"));
}

#[test]
fn descriptor_self_check_runs_inside_the_gate() {
    let specs = vec![ArgumentSpec::double("height", true).with_default("thirty")];
    let values = ArgumentValues::from_specs(&specs);
    let mut runner = Runner::new();

    assert!(!runner.validate_user_arguments(&specs, &values));
    assert_eq!(runner.result().status, MeasureStatus::Fail);
}
