use eem_core::{ArgumentSpec, ArgumentValues, MeasureStatus, OutcomeReport, Runner};

#[test]
fn outcome_report_round_trips_through_json() {
    let mut runner = Runner::new();
    runner.register_initial_condition("9 spaces are assigned to space type 'GuestRoom'.");
    runner.register_warning("Space 'Guest 101' already has a daylighting sensor.");
    runner.register_info("No costs were requested for daylight sensors.");
    runner.register_final_condition("Added 3 daylighting controls.");
    let report = runner.into_report();

    let bytes = serde_json::to_vec(&report).expect("serialize");
    let parsed: OutcomeReport = serde_json::from_slice(&bytes).expect("parse");
    assert_eq!(parsed, report);
    assert_eq!(parsed.status, MeasureStatus::Success);
}

#[test]
fn value_map_round_trips_through_json() {
    let specs = vec![
        ArgumentSpec::choice(
            "economizer_type",
            vec![
                "FixedDryBulb".to_string(),
                "NoEconomizer".to_string(),
                "NoChange".to_string(),
            ],
            true,
        ),
        ArgumentSpec::double("econo_max_dry_bulb_temp", true).with_default(69.0),
    ];
    let mut values = ArgumentValues::from_specs(&specs);
    values.set("economizer_type", "FixedDryBulb").expect("declared");

    let bytes = serde_json::to_vec(&values).expect("serialize");
    let parsed: ArgumentValues = serde_json::from_slice(&bytes).expect("parse");
    assert_eq!(parsed, values);
    assert_eq!(parsed.string("economizer_type").unwrap(), "FixedDryBulb");
}
