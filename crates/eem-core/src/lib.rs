#![deny(missing_docs)]
#![doc = "Measure-facing vocabulary for the EEM measure library: structured \
errors, argument descriptors and value maps, and the invocation runner."]

pub mod argument;
pub mod errors;
pub mod runner;

pub use argument::{ArgumentInstance, ArgumentKind, ArgumentSpec, ArgumentValue, ArgumentValues};
pub use errors::{ErrorInfo, MeasureError};
pub use runner::{MeasureStatus, OutcomeReport, Runner};
