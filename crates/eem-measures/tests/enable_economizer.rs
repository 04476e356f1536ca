mod common;

use eem_core::{ArgumentValue, ArgumentValues, MeasureStatus, Runner};
use eem_host::ModelMeasure;
use eem_measures::EnableEconomizerControl;
use eem_model::Model;

use common::economizer_model;

#[test]
fn arguments_match_the_documented_schema() {
    let model = economizer_model();
    let measure = EnableEconomizerControl;
    let arguments = measure.arguments(&model);

    assert_eq!(arguments.len(), 3);
    assert_eq!(arguments[0].name, "economizer_type");
    assert!(arguments[0].default.is_none());
    assert_eq!(
        arguments[1].default,
        Some(ArgumentValue::Double(69.0))
    );
    assert_eq!(
        arguments[2].default,
        Some(ArgumentValue::Double(-148.0))
    );
    assert_eq!(arguments, measure.arguments(&model));
}

#[test]
fn fixed_dry_bulb_is_applied_to_every_controller() {
    let mut model = economizer_model();
    let measure = EnableEconomizerControl;
    let specs = measure.arguments(&model);
    let mut values = ArgumentValues::from_specs(&specs);
    values.set("economizer_type", "FixedDryBulb").expect("listed choice");

    let mut runner = Runner::new();
    let succeeded = measure.run(&mut model, &mut runner, &values).expect("run");
    let report = runner.into_report();

    assert!(succeeded);
    assert_eq!(report.status, MeasureStatus::Success);
    // the loop without a controller warns, the other two are updated
    assert_eq!(report.warnings.len(), 1);
    assert!(report.warnings[0].contains("Exhaust System"));
    assert_eq!(
        report.initial_condition.as_deref(),
        Some("2 of 3 air loops have an outdoor air controller.")
    );
    assert_eq!(
        report.final_condition.as_deref(),
        Some("Economizer control type was set to FixedDryBulb on 2 air loops.")
    );

    let expected_max_c = (69.0 - 32.0) / 1.8;
    let expected_min_c = (-148.0 - 32.0) / 1.8;
    let mut checked = 0;
    for air_loop in model.air_loops() {
        let Some(controller_handle) = air_loop.outdoor_air_controller else {
            continue;
        };
        let controller = model.outdoor_air_controller(controller_handle).unwrap();
        assert_eq!(controller.economizer_control_type, "FixedDryBulb");
        assert_eq!(controller.maximum_limit_dry_bulb_c, Some(expected_max_c));
        assert_eq!(controller.minimum_limit_dry_bulb_c, Some(expected_min_c));
        checked += 1;
    }
    assert_eq!(checked, 2);
}

#[test]
fn no_change_is_not_applicable_and_touches_nothing() {
    let mut model = economizer_model();
    let measure = EnableEconomizerControl;
    let specs = measure.arguments(&model);
    let mut values = ArgumentValues::from_specs(&specs);
    values.set("economizer_type", "NoChange").expect("listed choice");

    let before = model.clone();
    let mut runner = Runner::new();
    assert!(measure.run(&mut model, &mut runner, &values).expect("run"));
    assert_eq!(runner.result().status, MeasureStatus::NotApplicable);
    assert_eq!(model, before);
}

#[test]
fn model_without_controllers_is_not_applicable() {
    let mut model = Model::new();
    model.add_air_loop("Bare System");
    let measure = EnableEconomizerControl;
    let specs = measure.arguments(&model);
    let mut values = ArgumentValues::from_specs(&specs);
    values.set("economizer_type", "NoEconomizer").expect("listed choice");

    let mut runner = Runner::new();
    assert!(measure.run(&mut model, &mut runner, &values).expect("run"));
    assert_eq!(runner.result().status, MeasureStatus::NotApplicable);
    assert_eq!(
        runner.result().initial_condition.as_deref(),
        Some("0 of 1 air loops have an outdoor air controller.")
    );
}

#[test]
fn missing_economizer_type_fails_the_gate() {
    let mut model = economizer_model();
    let measure = EnableEconomizerControl;
    let specs = measure.arguments(&model);
    let values = ArgumentValues::from_specs(&specs);

    let before = model.clone();
    let mut runner = Runner::new();
    assert!(!measure.run(&mut model, &mut runner, &values).expect("run"));
    assert_eq!(runner.result().status, MeasureStatus::Fail);
    assert_eq!(model, before);
}
