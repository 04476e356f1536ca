//! Adds daylighting controls to every space of a chosen space type.

use eem_core::{ArgumentSpec, ArgumentValues, MeasureError, Runner};
use eem_host::{MeasureManifest, MeasureType, ModelMeasure, EEM_CONTRACT_VERSION};
use eem_model::{CostCategory, Handle, Model};

const FC_TO_LUX: f64 = 10.7639;
const INCHES_TO_METERS: f64 = 0.0254;
const M2_TO_FT2: f64 = 10.7639;

/// Adds a daylighting control to each space of the selected space type that
/// does not have one yet, then assigns the two largest controlled spaces per
/// thermal zone as that zone's primary and secondary controls.
///
/// Spaces that already carry a sensor, sit in no thermal zone, or have no
/// exterior glazing are reported as warnings and skipped; zones whose
/// controls are already assigned are skipped silently.
pub struct AddDaylightSensors;

fn used_space_type_choices(model: &Model) -> (Vec<String>, Vec<String>) {
    // only space types with at least one space, sorted by display name
    let mut pairs: Vec<(String, String)> = model
        .space_types()
        .filter(|space_type| !model.spaces_of_type(space_type.handle).is_empty())
        .map(|space_type| (space_type.name.clone(), space_type.handle.to_string()))
        .collect();
    pairs.sort();
    let handles = pairs.iter().map(|(_, handle)| handle.clone()).collect();
    let display = pairs.into_iter().map(|(name, _)| name).collect();
    (handles, display)
}

/// Manifest describing this measure to the registry.
pub fn manifest() -> MeasureManifest {
    MeasureManifest {
        name: "add_daylight_sensors".into(),
        class_name: "AddDaylightSensors".into(),
        display_name: "Add Daylight Sensors".into(),
        version: "0.1.0".into(),
        contract_version: EEM_CONTRACT_VERSION,
        measure_type: MeasureType::Model,
        description: Some(
            "Adds daylighting controls with dimming to the spaces of a chosen space type."
                .into(),
        ),
        modeler_description: Some(
            "Each eligible space receives one sensor configured from the setpoint, control type \
             and dimming fraction arguments. Per thermal zone, the two largest controlled \
             spaces drive the zone, with controlled fractions split by floor area. Life cycle \
             costs are attached per sensor when any cost argument is non-zero."
                .into(),
        ),
        tags: vec!["Electric Lighting.Electric Lighting Controls".into()],
    }
}

impl ModelMeasure for AddDaylightSensors {
    fn name(&self) -> &'static str {
        "Add Daylight Sensors"
    }

    fn arguments(&self, model: &Model) -> Vec<ArgumentSpec> {
        let (choices, display_names) = used_space_type_choices(model);
        vec![
            ArgumentSpec::choice_with_display("space_type", choices, display_names, true)
                .with_display_name("Add Daylight Sensors to Spaces of This Space Type"),
            ArgumentSpec::double("setpoint", true)
                .with_display_name("Daylighting Setpoint")
                .with_units("fc")
                .with_default(45.0),
            ArgumentSpec::choice(
                "control_type",
                vec![
                    "None".to_string(),
                    "Continuous".to_string(),
                    "Stepped".to_string(),
                    "Continuous/Off".to_string(),
                ],
                true,
            )
            .with_display_name("Daylighting Control Type")
            .with_default("Continuous/Off"),
            ArgumentSpec::double("min_power_fraction", true)
                .with_display_name("Daylighting Minimum Input Power Fraction")
                .with_description("min = 0 max = 0.6")
                .with_default(0.3),
            ArgumentSpec::double("min_light_fraction", true)
                .with_display_name("Daylighting Minimum Light Output Fraction")
                .with_description("min = 0 max = 0.6")
                .with_default(0.2),
            ArgumentSpec::double("fraction_zone_controlled", true)
                .with_display_name("Fraction of zone controlled by daylight sensors")
                .with_default(1.0),
            ArgumentSpec::double("height", true)
                .with_display_name("Sensor Height")
                .with_units("inches")
                .with_default(30.0),
            ArgumentSpec::double("material_cost", true)
                .with_display_name("Material and Installation Costs per Space for Daylight Sensor")
                .with_units("$")
                .with_default(0.0),
            ArgumentSpec::double("demolition_cost", true)
                .with_display_name("Demolition Costs per Space for Daylight Sensor")
                .with_units("$")
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
                .with_default(20i64),
            ArgumentSpec::double("om_cost", true)
                .with_display_name("O & M Costs per Space for Daylight Sensor")
                .with_units("$")
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
        let setpoint = arguments.double("setpoint")?;
        let control_type = arguments.string("control_type")?;
        let min_power_fraction = arguments.double("min_power_fraction")?;
        let min_light_fraction = arguments.double("min_light_fraction")?;
        let fraction_zone_controlled = arguments.double("fraction_zone_controlled")?;
        let height = arguments.double("height")?;
        let material_cost = arguments.double("material_cost")?;
        let demolition_cost = arguments.double("demolition_cost")?;
        let years_until_costs_start = arguments.integer("years_until_costs_start")?;
        let demo_cost_initial_const = arguments.boolean("demo_cost_initial_const")?;
        let expected_life = arguments.integer("expected_life")?;
        let om_cost = arguments.double("om_cost")?;
        let om_frequency = arguments.integer("om_frequency")?;

        // the chosen handle may be stale if another measure removed the type
        let space_type = Handle::parse(&space_type_key)
            .and_then(|handle| model.space_type(handle))
            .map(|space_type| (space_type.handle, space_type.name.clone()));
        let Some((space_type_handle, space_type_name)) = space_type else {
            runner.register_error(format!(
                "The selected space type with handle '{space_type_key}' was not found in the \
                 model. It may have been removed by another measure."
            ));
            return Ok(false);
        };

        if !(0.0..=9999.0).contains(&setpoint) {
            runner.register_error(format!(
                "A setpoint of {setpoint} foot-candles is outside the measure limit."
            ));
            return Ok(false);
        }
        if setpoint > 999.0 {
            runner.register_warning(format!(
                "A setpoint of {setpoint} foot-candles is abnormally high."
            ));
        }

        if !(0.0..=0.6).contains(&min_power_fraction) {
            runner.register_error(format!(
                "The requested minimum input power fraction of {min_power_fraction} for \
                 continuous dimming control is outside the acceptable range of 0 to 0.6."
            ));
            return Ok(false);
        }
        if !(0.0..=0.6).contains(&min_light_fraction) {
            runner.register_error(format!(
                "The requested minimum light output fraction of {min_light_fraction} for \
                 continuous dimming control is outside the acceptable range of 0 to 0.6."
            ));
            return Ok(false);
        }

        if !(-360.0..=360.0).contains(&height) {
            runner.register_error(format!(
                "A sensor height of {height} inches is outside the measure limit."
            ));
            return Ok(false);
        }
        if height > 72.0 {
            runner.register_warning(format!(
                "A sensor height of {height} inches is abnormally high."
            ));
        } else if height < 0.0 {
            runner.register_warning(
                "Typically the sensor height is positive, but a negative height may be \
                 appropriate when the space origin sits above the floor.",
            );
        }

        let costs_requested =
            material_cost.abs() + demolition_cost.abs() + om_cost.abs() != 0.0;
        if !costs_requested {
            runner.register_info("No costs were requested for daylight sensors.");
        }

        if years_until_costs_start < 0 || years_until_costs_start > expected_life {
            runner.register_error(
                "Years until costs start should be a non-negative integer no greater than the \
                 expected life.",
            );
            return Ok(false);
        }
        if !(1..=100).contains(&expected_life) {
            runner.register_error(
                "Choose an integer greater than 0 and less than or equal to 100 for the \
                 expected life.",
            );
            return Ok(false);
        }
        if om_frequency < 1 {
            runner.register_error("Choose an integer greater than 0 for the O & M frequency.");
            return Ok(false);
        }

        let setpoint_lux = setpoint * FC_TO_LUX;
        let height_m = height * INCHES_TO_METERS;

        let spaces_of_type = model.spaces_of_type(space_type_handle);
        runner.register_initial_condition(format!(
            "{} spaces are assigned to space type '{space_type_name}'.",
            spaces_of_type.len()
        ));

        // keep only spaces where a new sensor can do anything
        let mut candidates: Vec<Handle> = Vec::new();
        for space_handle in &spaces_of_type {
            let Some(space) = model.space(*space_handle) else {
                continue;
            };
            if !space.daylighting_controls.is_empty() {
                runner.register_warning(format!(
                    "Space '{}' already has a daylighting sensor. No sensor was added.",
                    space.name
                ));
                continue;
            }
            let Some(zone_handle) = space.thermal_zone else {
                runner.register_warning(format!(
                    "Space '{}' is not associated with a thermal zone. It won't be part of the \
                     energy simulation.",
                    space.name
                ));
                continue;
            };
            let Some(zone) = model.thermal_zone(zone_handle) else {
                continue;
            };
            if zone.primary_daylighting_control.is_some()
                || zone.secondary_daylighting_control.is_some()
            {
                continue;
            }
            candidates.push(*space_handle);
        }

        let mut sensor_count = 0usize;
        let mut sensor_area = 0.0;
        let mut affected_zones: Vec<Handle> = Vec::new();
        let mut new_sensors: Vec<(Handle, Handle)> = Vec::new();
        let mut cost_info_emitted = false;

        for space_handle in candidates {
            let Some(space) = model.space(space_handle) else {
                continue;
            };
            let space_name = space.name.clone();
            let floor_area = space.floor_area;
            let zone_handle = space.thermal_zone;
            if !space.has_exterior_glazing {
                runner.register_warning(format!(
                    "Space '{space_name}' has no exterior natural lighting. No sensor will be \
                     added."
                ));
                continue;
            }

            let sensor_name = format!("{space_name} daylighting control");
            let sensor = model.add_daylighting_control(&sensor_name, space_handle)?;
            if let Some(control) = model.daylighting_control_mut(sensor) {
                control.illuminance_setpoint_lux = setpoint_lux;
                control.control_type = control_type.clone();
                control.minimum_power_fraction = min_power_fraction;
                control.minimum_light_fraction = min_light_fraction;
                control.sensor_height_m = height_m;
            }

            if costs_requested {
                let demo_start = if demo_cost_initial_const {
                    years_until_costs_start
                } else {
                    years_until_costs_start + expected_life
                };
                model.add_life_cycle_cost(
                    &format!("LCC_Mat - {sensor_name}"),
                    space_handle,
                    material_cost,
                    CostCategory::Construction,
                    years_until_costs_start,
                    0,
                )?;
                model.add_life_cycle_cost(
                    &format!("LCC_Demo - {sensor_name}"),
                    space_handle,
                    demolition_cost,
                    CostCategory::Salvage,
                    demo_start,
                    0,
                )?;
                model.add_life_cycle_cost(
                    &format!("LCC_OM - {sensor_name}"),
                    space_handle,
                    om_cost,
                    CostCategory::Maintenance,
                    0,
                    om_frequency,
                )?;
                if !cost_info_emitted {
                    runner.register_info(
                        "Cost for daylight sensors was added to spaces. The cost stays in the \
                         model unless the space is removed; removing only the sensor will not \
                         remove the cost.",
                    );
                    cost_info_emitted = true;
                }
            }

            if let Some(zone_handle) = zone_handle {
                if !affected_zones.contains(&zone_handle) {
                    affected_zones.push(zone_handle);
                }
            }
            new_sensors.push((space_handle, sensor));
            sensor_area += floor_area;
            sensor_count += 1;
        }

        if sensor_count == 0 && !costs_requested {
            runner.register_as_not_applicable(
                "No spaces without sensors required a new sensor, and no life cycle costs were \
                 requested.",
            );
            return Ok(true);
        }

        // per zone, the two largest controlled spaces drive the zone
        for zone_handle in affected_zones.iter().copied() {
            let mut zone_sensors: Vec<(f64, Handle)> = new_sensors
                .iter()
                .filter_map(|(space_handle, sensor)| {
                    let space = model.space(*space_handle)?;
                    (space.thermal_zone == Some(zone_handle))
                        .then_some((space.floor_area, *sensor))
                })
                .collect();
            zone_sensors.sort_by(|a, b| b.0.total_cmp(&a.0));

            if zone_sensors.len() > 2 {
                let zone_name = model
                    .thermal_zone(zone_handle)
                    .map(|zone| zone.name.clone())
                    .unwrap_or_default();
                runner.register_warning(format!(
                    "Thermal zone '{zone_name}' had more than two spaces with sensors. Only two \
                     sensors were associated with the thermal zone."
                ));
            }

            let primary_area = zone_sensors.first().map(|(area, _)| *area).unwrap_or(0.0);
            let secondary_area = zone_sensors.get(1).map(|(area, _)| *area).unwrap_or(0.0);
            let controlled_total = primary_area + secondary_area;
            if let Some(zone) = model.thermal_zone_mut(zone_handle) {
                if let Some((area, sensor)) = zone_sensors.first() {
                    zone.primary_daylighting_control = Some(*sensor);
                    zone.primary_control_fraction = if controlled_total > 0.0 {
                        fraction_zone_controlled * area / controlled_total
                    } else {
                        0.0
                    };
                }
                if let Some((area, sensor)) = zone_sensors.get(1) {
                    zone.secondary_daylighting_control = Some(*sensor);
                    zone.secondary_control_fraction = if controlled_total > 0.0 {
                        fraction_zone_controlled * area / controlled_total
                    } else {
                        0.0
                    };
                }
            }
        }

        runner.register_final_condition(format!(
            "Added {sensor_count} daylighting controls covering {:.0} ft^2 of floor area across \
             {} thermal zones.",
            sensor_area * M2_TO_FT2,
            affected_zones.len()
        ));
        Ok(true)
    }
}
