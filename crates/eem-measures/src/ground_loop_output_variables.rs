//! Requests the output variables ground heat exchanger sizing needs.

use eem_core::{ArgumentSpec, ArgumentValues, MeasureError, Runner};
use eem_host::{MeasureManifest, MeasureType, WorkspaceMeasure, EEM_CONTRACT_VERSION};
use eem_model::{IdfObject, Workspace};

const OUTPUT_VARIABLE: &str = "Output:Variable";
const PLANT_LOOP: &str = "PlantLoop";
/// Field index of "Plant Side Outlet Node Name" on a PlantLoop object.
const PLANT_SIDE_OUTLET_NODE_FIELD: usize = 11;
const REPORTING_FREQUENCY: &str = "Hourly";

const DISTRICT_VARIABLES: [&str; 2] = ["District Heating Rate", "District Cooling Rate"];
const NODE_VARIABLES: [&str; 3] = [
    "System Node Temperature",
    "System Node Setpoint Temperature",
    "System Node Mass Flow Rate",
];

fn output_variable(key: &str, variable: &str) -> IdfObject {
    IdfObject::new(
        OUTPUT_VARIABLE,
        vec![
            key.to_string(),
            variable.to_string(),
            REPORTING_FREQUENCY.to_string(),
        ],
    )
}

/// Appends hourly district heating/cooling rate requests, renames each plant
/// loop's plant-side outlet node so the exported report reads well, and
/// requests the node conditions under the new names.
///
/// Output variable requests are appended, never deduplicated: running the
/// measure twice doubles the requests, exactly as the exporter tolerates.
pub struct RequestGroundLoopOutputVariables;

/// Manifest describing this measure to the registry.
pub fn manifest() -> MeasureManifest {
    MeasureManifest {
        name: "request_ground_loop_output_variables".into(),
        class_name: "RequestGroundLoopOutputVariables".into(),
        display_name: "Request Ground Loop Output Variables".into(),
        version: "0.1.0".into(),
        contract_version: EEM_CONTRACT_VERSION,
        measure_type: MeasureType::EnergyPlus,
        description: Some(
            "Requests the loads a ground heat exchanger sizing tool needs from the simulation \
             input."
                .into(),
        ),
        modeler_description: Some(
            "Adds hourly Output:Variable requests for the district heating and cooling rates, \
             renames each PlantLoop's plant side outlet node, and requests temperature, \
             setpoint and mass flow rate on the renamed nodes."
                .into(),
        ),
        tags: vec!["HVAC.Heat Rejection".into()],
    }
}

impl WorkspaceMeasure for RequestGroundLoopOutputVariables {
    fn name(&self) -> &'static str {
        "Request Ground Loop Output Variables"
    }

    fn arguments(&self) -> Vec<ArgumentSpec> {
        Vec::new()
    }

    fn run(
        &self,
        workspace: &mut Workspace,
        runner: &mut Runner,
        arguments: &ArgumentValues,
    ) -> Result<bool, MeasureError> {
        if !runner.validate_user_arguments(&self.arguments(), arguments) {
            return Ok(false);
        }

        runner.register_initial_condition(format!(
            "The input file started with {} output variable requests.",
            workspace.count_of_type(OUTPUT_VARIABLE)
        ));

        for variable in DISTRICT_VARIABLES {
            workspace.add_object(output_variable("*", variable));
            runner.register_info(format!(
                "Requested output for '{variable}' at the {REPORTING_FREQUENCY} timestep."
            ));
        }

        // rename first, then append requests; the workspace cannot grow while
        // its objects are borrowed
        let mut renamed: Vec<String> = Vec::new();
        let mut nameless = 0usize;
        for object in workspace.objects_of_type_mut(PLANT_LOOP) {
            let Some(loop_name) = object.name().map(str::to_string) else {
                nameless += 1;
                continue;
            };
            let node_name = format!("{loop_name} Supply Outlet Node");
            object.set_field(PLANT_SIDE_OUTLET_NODE_FIELD, node_name.clone());
            renamed.push(node_name);
        }
        if nameless > 0 {
            runner.register_warning(format!(
                "{nameless} PlantLoop objects have no name field. Their outlet nodes were not \
                 renamed and no node conditions were requested for them."
            ));
        }
        for node_name in &renamed {
            for variable in NODE_VARIABLES {
                workspace.add_object(output_variable(node_name, variable));
            }
        }

        runner.register_final_condition(format!(
            "The input file finished with {} output variable requests.",
            workspace.count_of_type(OUTPUT_VARIABLE)
        ));
        Ok(true)
    }
}
