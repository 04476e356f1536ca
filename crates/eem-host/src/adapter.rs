use std::collections::BTreeMap;

use eem_core::{ArgumentSpec, ArgumentValues, ErrorInfo, MeasureError, OutcomeReport, Runner};
use eem_model::{Model, Workspace};

use crate::contract::{ModelMeasure, WorkspaceMeasure};

fn duplicate_name(name: &str) -> MeasureError {
    MeasureError::Registry(
        ErrorInfo::new(
            "eem_host.measure_duplicate",
            format!("a measure named '{name}' is already registered"),
        )
        .with_context("measure", name.to_string()),
    )
}

fn unknown_name(name: &str) -> MeasureError {
    MeasureError::Registry(
        ErrorInfo::new(
            "eem_host.measure_unknown",
            format!("no measure named '{name}' is registered"),
        )
        .with_context("measure", name.to_string()),
    )
}

/// Completed measure invocation: the boolean status the measure returned and
/// the report the runner accumulated.
#[derive(Debug, Clone, PartialEq)]
pub struct Invocation {
    /// Whether the measure reported success.
    pub succeeded: bool,
    /// The finished outcome report.
    pub report: OutcomeReport,
}

/// Explicit, in-memory registration of measures by name.
///
/// There is no runtime plugin discovery: the host (or a test harness)
/// constructs an adapter and registers each measure directly, then dispatches
/// invocations through the fixed contract. Every invocation gets a fresh
/// runner; no state is shared between runs.
#[derive(Default)]
pub struct HostAdapter {
    model_measures: BTreeMap<String, Box<dyn ModelMeasure>>,
    workspace_measures: BTreeMap<String, Box<dyn WorkspaceMeasure>>,
}

impl HostAdapter {
    /// Creates an empty adapter.
    pub fn new() -> Self {
        Self::default()
    }

    /// Registers a model measure under its own name.
    pub fn register_model_measure(
        &mut self,
        measure: Box<dyn ModelMeasure>,
    ) -> Result<(), MeasureError> {
        let name = measure.name().to_string();
        if self.model_measures.contains_key(&name) || self.workspace_measures.contains_key(&name) {
            return Err(duplicate_name(&name));
        }
        self.model_measures.insert(name, measure);
        Ok(())
    }

    /// Registers a workspace measure under its own name.
    pub fn register_workspace_measure(
        &mut self,
        measure: Box<dyn WorkspaceMeasure>,
    ) -> Result<(), MeasureError> {
        let name = measure.name().to_string();
        if self.model_measures.contains_key(&name) || self.workspace_measures.contains_key(&name) {
            return Err(duplicate_name(&name));
        }
        self.workspace_measures.insert(name, measure);
        Ok(())
    }

    /// Names of registered model measures, in name order.
    pub fn model_measure_names(&self) -> Vec<&str> {
        self.model_measures.keys().map(String::as_str).collect()
    }

    /// Names of registered workspace measures, in name order.
    pub fn workspace_measure_names(&self) -> Vec<&str> {
        self.workspace_measures.keys().map(String::as_str).collect()
    }

    /// Asks a registered model measure for its argument descriptors.
    pub fn model_arguments(
        &self,
        name: &str,
        model: &Model,
    ) -> Result<Vec<ArgumentSpec>, MeasureError> {
        let measure = self.model_measures.get(name).ok_or_else(|| unknown_name(name))?;
        Ok(measure.arguments(model))
    }

    /// Asks a registered workspace measure for its argument descriptors.
    pub fn workspace_arguments(&self, name: &str) -> Result<Vec<ArgumentSpec>, MeasureError> {
        let measure = self
            .workspace_measures
            .get(name)
            .ok_or_else(|| unknown_name(name))?;
        Ok(measure.arguments())
    }

    /// Runs a registered model measure once against the model.
    pub fn invoke_model_measure(
        &self,
        name: &str,
        model: &mut Model,
        arguments: &ArgumentValues,
    ) -> Result<Invocation, MeasureError> {
        let measure = self.model_measures.get(name).ok_or_else(|| unknown_name(name))?;
        let mut runner = Runner::new();
        let succeeded = measure.run(model, &mut runner, arguments)?;
        Ok(Self::finish(name, succeeded, runner))
    }

    /// Runs a registered workspace measure once against the workspace.
    pub fn invoke_workspace_measure(
        &self,
        name: &str,
        workspace: &mut Workspace,
        arguments: &ArgumentValues,
    ) -> Result<Invocation, MeasureError> {
        let measure = self
            .workspace_measures
            .get(name)
            .ok_or_else(|| unknown_name(name))?;
        let mut runner = Runner::new();
        let succeeded = measure.run(workspace, &mut runner, arguments)?;
        Ok(Self::finish(name, succeeded, runner))
    }

    fn finish(name: &str, succeeded: bool, mut runner: Runner) -> Invocation {
        use eem_core::MeasureStatus;
        // a false return without a registered error still has to surface as
        // a failed report
        if !succeeded && runner.result().status != MeasureStatus::Fail {
            runner.register_error(format!(
                "Measure '{name}' returned false without registering an error."
            ));
        }
        Invocation {
            succeeded,
            report: runner.into_report(),
        }
    }
}
