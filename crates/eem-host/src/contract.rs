use eem_core::{ArgumentSpec, ArgumentValues, MeasureError, Runner};
use eem_model::{Model, Workspace};

/// Version of the host/measure contract. Manifests declaring a different
/// version are rejected by [`crate::verify_contract_compat`].
pub const EEM_CONTRACT_VERSION: u32 = 1;

/// A measure operating on the in-memory building model.
///
/// The host calls the three methods in a fixed sequence: `name` for display,
/// `arguments` to build the value map, then `run` exactly once. `Ok(false)`
/// is an ordinary reported failure; `Err` is reserved for internal faults
/// (schema mismatches past the validation gate) and aborts the invocation.
pub trait ModelMeasure: Send + Sync {
    /// Stable, human readable identifier.
    fn name(&self) -> &'static str;

    /// Ordered argument descriptors; choices may derive from the model.
    fn arguments(&self, model: &Model) -> Vec<ArgumentSpec>;

    /// Performs the transformation, reporting through the runner.
    fn run(
        &self,
        model: &mut Model,
        runner: &mut Runner,
        arguments: &ArgumentValues,
    ) -> Result<bool, MeasureError>;
}

/// A measure operating on the raw simulation-input workspace instead of the
/// building model. Same calling sequence and failure convention as
/// [`ModelMeasure`].
pub trait WorkspaceMeasure: Send + Sync {
    /// Stable, human readable identifier.
    fn name(&self) -> &'static str;

    /// Ordered argument descriptors. Workspace measures have no model to
    /// derive choices from.
    fn arguments(&self) -> Vec<ArgumentSpec>;

    /// Performs the transformation, reporting through the runner.
    fn run(
        &self,
        workspace: &mut Workspace,
        runner: &mut Runner,
        arguments: &ArgumentValues,
    ) -> Result<bool, MeasureError>;
}
