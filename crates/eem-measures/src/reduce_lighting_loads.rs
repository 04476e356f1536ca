//! Reduces lighting power by a percentage, per space type or building-wide.

use std::collections::{BTreeMap, BTreeSet};

use eem_core::{ArgumentSpec, ArgumentValues, MeasureError, Runner};
use eem_host::{MeasureManifest, MeasureType, ModelMeasure, EEM_CONTRACT_VERSION};
use eem_model::{CostCategory, Handle, LightsTarget, Model};

const M2_TO_FT2: f64 = 10.7639;
const ENTIRE_BUILDING: &str = "*Entire Building*";

/// Scales the lighting power of every lights instance in scope by the given
/// reduction percentage.
///
/// Definitions shared by several instances are cloned before scaling so
/// out-of-scope users keep their power; single-use definitions are scaled in
/// place. Either way the adjusted definition is renamed with a reduction
/// suffix, so re-running the measure reduces the already-reduced power again.
pub struct ReduceLightingLoadsByPercentage;

/// Manifest describing this measure to the registry.
pub fn manifest() -> MeasureManifest {
    MeasureManifest {
        name: "reduce_lighting_loads_by_percentage".into(),
        class_name: "ReduceLightingLoadsByPercentage".into(),
        display_name: "Reduce Lighting Loads by Percentage".into(),
        version: "0.1.0".into(),
        contract_version: EEM_CONTRACT_VERSION,
        measure_type: MeasureType::Model,
        description: Some(
            "Replace the lighting system with a more efficient technology providing the same \
             light for less power."
                .into(),
        ),
        modeler_description: Some(
            "Walks the lights assigned to the selected space type (or the whole building), \
             clones shared definitions, renames them and scales lighting level, watts per area \
             and watts per person by the requested percentage. Cost arguments attach life cycle \
             costs to the adjusted definitions."
                .into(),
        ),
        tags: vec!["Electric Lighting.Lighting Equipment".into()],
    }
}

impl ModelMeasure for ReduceLightingLoadsByPercentage {
    fn name(&self) -> &'static str {
        "Reduce Lighting Loads by Percentage"
    }

    fn arguments(&self, model: &Model) -> Vec<ArgumentSpec> {
        // used space types sorted by name, then the whole-building sentinel
        let mut pairs: Vec<(String, String)> = model
            .space_types()
            .filter(|space_type| !model.spaces_of_type(space_type.handle).is_empty())
            .map(|space_type| (space_type.name.clone(), space_type.handle.to_string()))
            .collect();
        pairs.sort();
        let mut choices: Vec<String> = pairs.iter().map(|(_, handle)| handle.clone()).collect();
        let mut display_names: Vec<String> = pairs.into_iter().map(|(name, _)| name).collect();
        let building_handle = model.building().handle.to_string();
        choices.push(building_handle.clone());
        display_names.push(ENTIRE_BUILDING.to_string());

        vec![
            ArgumentSpec::choice_with_display("space_type", choices, display_names, true)
                .with_display_name(
                    "Apply the Measure to a Specific Space Type or to the Entire Model",
                )
                .with_default(building_handle),
            ArgumentSpec::double("lighting_power_reduction_percent", true)
                .with_display_name("Lighting Power Reduction")
                .with_units("%")
                .with_default(30.0),
            ArgumentSpec::double("material_and_installation_cost", true)
                .with_display_name(
                    "Increase in Material and Installation Cost for Lighting per Floor Area",
                )
                .with_units("%")
                .with_default(0.0),
            ArgumentSpec::double("demolition_cost", true)
                .with_display_name("Increase in Demolition Costs for Lighting per Floor Area")
                .with_units("%")
                .with_default(0.0),
            ArgumentSpec::integer("years_until_costs_start", true)
                .with_display_name("Years Until Costs Start")
                .with_units("whole years")
                .with_default(0i64),
            ArgumentSpec::boolean("demo_cost_initial_const", true)
                .with_display_name("Demolition Costs Occur During Initial Construction")
                .with_default(false),
            ArgumentSpec::integer("expected_life", true)
                .with_display_name("Expected Life")
                .with_units("whole years")
                .with_default(15i64),
            ArgumentSpec::double("om_cost", true)
                .with_display_name("Increase O & M Costs for Lighting per Floor Area")
                .with_units("%")
                .with_default(0.0),
            ArgumentSpec::integer("om_frequency", true)
                .with_display_name("O & M Frequency")
                .with_units("whole years")
                .with_default(1i64),
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

        let space_type_key = arguments.string("space_type")?;
        let reduction_percent = arguments.double("lighting_power_reduction_percent")?;
        let material_and_installation_cost = arguments.double("material_and_installation_cost")?;
        let demolition_cost = arguments.double("demolition_cost")?;
        let years_until_costs_start = arguments.integer("years_until_costs_start")?;
        let demo_cost_initial_const = arguments.boolean("demo_cost_initial_const")?;
        let expected_life = arguments.integer("expected_life")?;
        let om_cost = arguments.double("om_cost")?;
        let om_frequency = arguments.integer("om_frequency")?;

        // scope is either one space type or the whole building
        let mut apply_to_building = false;
        let mut space_type_handle: Option<Handle> = None;
        match Handle::parse(&space_type_key) {
            Some(handle) if handle == model.building().handle => apply_to_building = true,
            Some(handle) if model.space_type(handle).is_some() => {
                space_type_handle = Some(handle);
            }
            _ => {
                runner.register_error(format!(
                    "The selected space type with handle '{space_type_key}' was not found in \
                     the model. It may have been removed by another measure."
                ));
                return Ok(false);
            }
        }

        if reduction_percent > 100.0 {
            runner.register_error(
                "Please enter a value less than or equal to 100 for the lighting power \
                 reduction percentage.",
            );
            return Ok(false);
        }
        if reduction_percent < 1.0 {
            runner.register_warning(format!(
                "A lighting power reduction of {reduction_percent} percent is abnormally low."
            ));
        } else if reduction_percent > 90.0 {
            runner.register_warning(format!(
                "A lighting power reduction of {reduction_percent} percent is abnormally high."
            ));
        }

        for (label, cost) in [
            ("material and installation", material_and_installation_cost),
            ("demolition", demolition_cost),
            ("O & M", om_cost),
        ] {
            if cost < -100.0 {
                runner.register_error(format!(
                    "The {label} cost percentage increase cannot be less than -100."
                ));
                return Ok(false);
            }
        }
        if years_until_costs_start < 0 {
            runner.register_error(
                "Enter an integer greater than or equal to 0 for years until costs start.",
            );
            return Ok(false);
        }
        if expected_life < 1 {
            runner.register_error("Enter an integer greater than or equal to 1 for expected life.");
            return Ok(false);
        }
        if om_frequency < 1 {
            runner.register_error("Choose an integer greater than 0 for the O & M frequency.");
            return Ok(false);
        }

        let initial_power = model.building_lighting_power();
        let building_area_ft2 = model.building_floor_area() * M2_TO_FT2;
        if building_area_ft2 > 0.0 {
            runner.register_initial_condition(format!(
                "The model's initial lighting power was {initial_power:.0} watts, a lighting \
                 power density of {:.2} w/ft^2.",
                initial_power / building_area_ft2
            ));
        } else {
            runner.register_initial_condition(format!(
                "The model's initial lighting power was {initial_power:.0} watts."
            ));
        }

        let in_scope: Vec<Handle> = model
            .lights()
            .filter(|instance| match instance.target {
                LightsTarget::Space(space) => {
                    apply_to_building
                        || model.space(space).and_then(|space| space.space_type)
                            == space_type_handle
                }
                LightsTarget::SpaceType(space_type) => {
                    apply_to_building || Some(space_type) == space_type_handle
                }
            })
            .map(|instance| instance.handle)
            .collect();

        if in_scope.is_empty() {
            runner.register_as_not_applicable(
                "No lighting objects were found in the specified space type(s).",
            );
            return Ok(true);
        }

        let factor = 1.0 - reduction_percent / 100.0;
        // original definition -> definition now carrying the reduced power
        let mut adjusted: BTreeMap<Handle, Handle> = BTreeMap::new();
        let mut unassigned_warned: BTreeSet<Handle> = BTreeSet::new();
        let mut edited_definitions: Vec<Handle> = Vec::new();

        for instance_handle in in_scope {
            let Some(definition_handle) = model
                .lights_instance(instance_handle)
                .map(|instance| instance.definition)
            else {
                continue;
            };

            if let Some(replacement) = adjusted.get(&definition_handle).copied() {
                if let Some(instance) = model.lights_instance_mut(instance_handle) {
                    instance.definition = replacement;
                }
                continue;
            }

            let Some((definition_name, power_assigned)) = model
                .lights_definition(definition_handle)
                .map(|definition| (definition.name.clone(), definition.power.is_assigned()))
            else {
                continue;
            };
            if !power_assigned {
                if unassigned_warned.insert(definition_handle) {
                    runner.register_warning(format!(
                        "'{definition_name}' is used by one or more instances and has no load \
                         values. Its performance was not altered."
                    ));
                }
                adjusted.insert(definition_handle, definition_handle);
                continue;
            }

            let new_name = format!("{definition_name} - {reduction_percent}% reduction");
            let use_count = model.definition_use_count(definition_handle);
            let target_definition = if use_count > 1 {
                // shared definition: clone so other users keep their power
                let clone = model.clone_lights_definition(definition_handle, &new_name)?;
                if let Some(instance) = model.lights_instance_mut(instance_handle) {
                    instance.definition = clone;
                }
                clone
            } else {
                if let Some(definition) = model.lights_definition_mut(definition_handle) {
                    definition.name = new_name;
                }
                definition_handle
            };
            if let Some(definition) = model.lights_definition_mut(target_definition) {
                definition.power = definition.power.scaled(factor);
            }
            adjusted.insert(definition_handle, target_definition);
            edited_definitions.push(target_definition);
        }

        let costs_requested = material_and_installation_cost != 0.0
            || demolition_cost != 0.0
            || om_cost != 0.0;
        if costs_requested && !edited_definitions.is_empty() {
            let demo_start = if demo_cost_initial_const {
                years_until_costs_start
            } else {
                years_until_costs_start + expected_life
            };
            for definition_handle in &edited_definitions {
                let definition_name = model
                    .lights_definition(*definition_handle)
                    .map(|definition| definition.name.clone())
                    .unwrap_or_default();
                if material_and_installation_cost != 0.0 {
                    model.add_life_cycle_cost(
                        &format!("LCC_Mat - {definition_name}"),
                        *definition_handle,
                        material_and_installation_cost,
                        CostCategory::Construction,
                        years_until_costs_start,
                        0,
                    )?;
                }
                if demolition_cost != 0.0 {
                    model.add_life_cycle_cost(
                        &format!("LCC_Demo - {definition_name}"),
                        *definition_handle,
                        demolition_cost,
                        CostCategory::Salvage,
                        demo_start,
                        0,
                    )?;
                }
                if om_cost != 0.0 {
                    model.add_life_cycle_cost(
                        &format!("LCC_OM - {definition_name}"),
                        *definition_handle,
                        om_cost,
                        CostCategory::Maintenance,
                        0,
                        om_frequency,
                    )?;
                }
            }
            runner.register_info(format!(
                "Life cycle costs were attached to {} adjusted lighting definitions.",
                edited_definitions.len()
            ));
        }

        let final_power = model.building_lighting_power();
        if building_area_ft2 > 0.0 {
            runner.register_final_condition(format!(
                "The model's final lighting power is {final_power:.0} watts, a lighting power \
                 density of {:.2} w/ft^2.",
                final_power / building_area_ft2
            ));
        } else {
            runner.register_final_condition(format!(
                "The model's final lighting power is {final_power:.0} watts."
            ));
        }
        Ok(true)
    }
}
