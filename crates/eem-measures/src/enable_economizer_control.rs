//! Enables or disables airside economizer operation on the air loops.

use eem_core::{ArgumentSpec, ArgumentValues, MeasureError, Runner};
use eem_host::{MeasureManifest, MeasureType, ModelMeasure, EEM_CONTRACT_VERSION};
use eem_model::{Handle, Model};

const NO_CHANGE: &str = "NoChange";

fn fahrenheit_to_celsius(fahrenheit: f64) -> f64 {
    (fahrenheit - 32.0) / 1.8
}

/// Sets the economizer control type and dry-bulb limits on every outdoor air
/// controller in the model. Choosing "NoChange" leaves the model untouched
/// and reports the run as not applicable.
pub struct EnableEconomizerControl;

/// Manifest describing this measure to the registry.
pub fn manifest() -> MeasureManifest {
    MeasureManifest {
        name: "enable_economizer_control".into(),
        class_name: "EnableEconomizerControl".into(),
        display_name: "Enable Economizer Control".into(),
        version: "0.1.0".into(),
        contract_version: EEM_CONTRACT_VERSION,
        measure_type: MeasureType::Model,
        description: Some(
            "Use outdoor air for free cooling when conditions allow by enabling a fixed \
             dry-bulb economizer."
                .into(),
        ),
        modeler_description: Some(
            "Finds the outdoor air controller on each air loop and sets its economizer control \
             type plus the maximum and minimum dry-bulb limits, converted from Fahrenheit."
                .into(),
        ),
        tags: vec!["HVAC.Ventilation".into()],
    }
}

impl ModelMeasure for EnableEconomizerControl {
    fn name(&self) -> &'static str {
        "Enable Economizer Control"
    }

    fn arguments(&self, _model: &Model) -> Vec<ArgumentSpec> {
        vec![
            ArgumentSpec::choice(
                "economizer_type",
                vec![
                    "FixedDryBulb".to_string(),
                    "NoEconomizer".to_string(),
                    NO_CHANGE.to_string(),
                ],
                true,
            )
            .with_display_name("Economizer Control Type"),
            ArgumentSpec::double("econo_max_dry_bulb_temp", true)
                .with_display_name("Economizer Maximum Limit Dry-Bulb Temperature (F)")
                .with_default(69.0),
            ArgumentSpec::double("econo_min_dry_bulb_temp", true)
                .with_display_name("Economizer Minimum Limit Dry-Bulb Temperature (F)")
                .with_default(-148.0),
        ]
    }

    fn run(
        &self,
        model: &mut Model,
        runner: &mut Runner,
        arguments: &ArgumentValues,
    ) -> Result<bool, MeasureError> {
        if !runner.validate_user_arguments(&self.arguments(model), arguments) {
            return Ok(false);
        }

        let economizer_type = arguments.string("economizer_type")?;
        let max_dry_bulb_f = arguments.double("econo_max_dry_bulb_temp")?;
        let min_dry_bulb_f = arguments.double("econo_min_dry_bulb_temp")?;

        if economizer_type == NO_CHANGE {
            runner.register_as_not_applicable(
                "N/A - User requested no change in economizer operation.",
            );
            return Ok(true);
        }

        let air_loops: Vec<(String, Option<Handle>)> = model
            .air_loops()
            .map(|air_loop| (air_loop.name.clone(), air_loop.outdoor_air_controller))
            .collect();
        let with_controller = air_loops
            .iter()
            .filter(|(_, controller)| controller.is_some())
            .count();
        runner.register_initial_condition(format!(
            "{with_controller} of {} air loops have an outdoor air controller.",
            air_loops.len()
        ));

        if with_controller == 0 {
            runner.register_as_not_applicable(
                "The model has no outdoor air controllers. Economizer operation cannot be \
                 changed.",
            );
            return Ok(true);
        }

        let mut changed = 0usize;
        for (loop_name, controller_handle) in air_loops {
            let Some(controller_handle) = controller_handle else {
                runner.register_warning(format!(
                    "Air loop '{loop_name}' has no outdoor air controller. Economizer operation \
                     was not changed."
                ));
                continue;
            };
            let Some(controller) = model.outdoor_air_controller_mut(controller_handle) else {
                continue;
            };
            controller.economizer_control_type = economizer_type.clone();
            controller.maximum_limit_dry_bulb_c = Some(fahrenheit_to_celsius(max_dry_bulb_f));
            controller.minimum_limit_dry_bulb_c = Some(fahrenheit_to_celsius(min_dry_bulb_f));
            changed += 1;
        }

        runner.register_final_condition(format!(
            "Economizer control type was set to {economizer_type} on {changed} air loops."
        ));
        Ok(true)
    }
}
