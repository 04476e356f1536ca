//! Swaps a placeholder water heater for a chilled-water storage tank.

use eem_core::{ArgumentSpec, ArgumentValues, MeasureError, Runner};
use eem_host::{MeasureManifest, MeasureType, ModelMeasure, EEM_CONTRACT_VERSION};
use eem_model::{Model, WaterComponentKind};

/// Replaces a named water heater with a chilled-water storage tank wired to
/// the same supply- and demand-side inlet nodes.
///
/// The replacement tank is created before the search, so a run whose name
/// matches nothing still leaves an unconnected tank behind, and a second run
/// against an already-swapped model does so again. That mirrors the original
/// workaround this measure reproduces; callers re-running it should expect
/// the extra object rather than an error.
pub struct ReplaceWaterHeaterWithChilledWaterStorage;

impl ReplaceWaterHeaterWithChilledWaterStorage {
    fn storage_count(model: &Model) -> usize {
        model
            .water_components()
            .filter(|component| component.kind == WaterComponentKind::ChilledWaterStorage)
            .count()
    }
}

/// Manifest describing this measure to the registry.
pub fn manifest() -> MeasureManifest {
    MeasureManifest {
        name: "replace_water_heater_with_chilled_water_storage".into(),
        class_name: "ReplaceWaterHeaterWithChilledWaterStorage".into(),
        display_name: "Replace Water Heater with Chilled Water Storage".into(),
        version: "0.1.0".into(),
        contract_version: EEM_CONTRACT_VERSION,
        measure_type: MeasureType::Model,
        description: Some(
            "Quick fix for a GUI issue that prevents putting thermal storage on two plant loops."
                .into(),
        ),
        modeler_description: Some(
            "Affected models carry a mixed water heater as a placeholder tank. The measure takes \
             the placeholder's name, swaps the object for a chilled water storage tank on the \
             same node pair, and removes the placeholder."
                .into(),
        ),
        tags: vec!["HVAC.Energy Recovery".into()],
    }
}

impl ModelMeasure for ReplaceWaterHeaterWithChilledWaterStorage {
    fn name(&self) -> &'static str {
        "Replace Water Heater with Chilled Water Storage"
    }

    fn arguments(&self, _model: &Model) -> Vec<ArgumentSpec> {
        vec![ArgumentSpec::string("wh_name", true)
            .with_display_name("Name of Water Heater to Replace")
            .with_description(
                "This object will be replaced with a new chilled water storage tank.",
            )
            .with_default("CHW Tank Placeholder")]
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

        let wh_name = arguments.string("wh_name")?;
        if wh_name.trim().is_empty() {
            runner.register_error("Empty water heater name was entered.");
            return Ok(false);
        }

        runner.register_initial_condition(format!(
            "The building started with {} chilled water storage objects.",
            Self::storage_count(model)
        ));

        let storage = model.add_water_component(
            &format!("{wh_name} Thermal Storage"),
            WaterComponentKind::ChilledWaterStorage,
        );

        // first supply component matching the name wins
        let mut found = None;
        'loops: for plant_loop in model.plant_loops() {
            for component_handle in &plant_loop.supply_components {
                let Some(component) = model.water_component(*component_handle) else {
                    continue;
                };
                if component.name == wh_name {
                    found = Some((plant_loop.handle, *component_handle));
                    break 'loops;
                }
            }
        }

        if let Some((loop_handle, component_handle)) = found {
            let loop_name = model
                .plant_loop(loop_handle)
                .map(|plant_loop| plant_loop.name.clone())
                .unwrap_or_default();
            runner.register_info(format!("Found '{wh_name}' on plant loop '{loop_name}'."));

            let (supply_inlet, demand_inlet) = match model.water_component(component_handle) {
                Some(component) => (component.supply_inlet_node, component.demand_inlet_node),
                None => (None, None),
            };
            let (Some(supply_inlet), Some(demand_inlet)) = (supply_inlet, demand_inlet) else {
                runner.register_error(format!(
                    "'{wh_name}' is missing a supply or demand inlet connection and cannot be \
                     rewired."
                ));
                // leave the model as it was before this run
                model.remove_water_component(storage)?;
                return Ok(false);
            };

            model.connect_component_to_node(storage, supply_inlet)?;
            model.connect_component_to_node(storage, demand_inlet)?;
            runner.register_info(format!("Removing water heater '{wh_name}'."));
            model.remove_water_component(component_handle)?;
        }

        runner.register_final_condition(format!(
            "The building finished with {} chilled water storage objects.",
            Self::storage_count(model)
        ));
        Ok(true)
    }
}
