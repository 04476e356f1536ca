//! Invocation runner and the outcome report it accumulates.
//!
//! The host constructs one [`Runner`] per invocation, passes it to the
//! measure's `run`, and reads the finished [`OutcomeReport`] afterwards.
//! Ordinary problems (missing arguments, absent model objects) are registered
//! here rather than raised; the report carries the terminal status.

use serde::{Deserialize, Serialize};

use crate::argument::{ArgumentSpec, ArgumentValues};

/// Terminal status of a measure invocation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum MeasureStatus {
    /// The measure ran to completion; warnings may still be present.
    Success,
    /// The measure reported a failure.
    Fail,
    /// The measure ran but had nothing applicable to do.
    NotApplicable,
}

/// Structured result of one measure invocation.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct OutcomeReport {
    /// Terminal status; starts at success and is driven by registrations.
    pub status: MeasureStatus,
    /// Error messages registered during the run.
    pub errors: Vec<String>,
    /// Warning messages registered during the run.
    pub warnings: Vec<String>,
    /// Informational messages registered during the run.
    pub info: Vec<String>,
    /// Summary of the relevant model state before any edits.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub initial_condition: Option<String>,
    /// Summary of the relevant model state after the edits.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub final_condition: Option<String>,
}

impl Default for OutcomeReport {
    fn default() -> Self {
        Self {
            status: MeasureStatus::Success,
            errors: Vec::new(),
            warnings: Vec::new(),
            info: Vec::new(),
            initial_condition: None,
            final_condition: None,
        }
    }
}

/// Accumulates the outcome report on behalf of the host.
#[derive(Debug, Default)]
pub struct Runner {
    report: OutcomeReport,
}

impl Runner {
    /// Creates a fresh runner with an empty, successful report.
    pub fn new() -> Self {
        Self::default()
    }

    /// Registers an informational message.
    pub fn register_info(&mut self, message: impl Into<String>) {
        self.report.info.push(message.into());
    }

    /// Registers a warning. Warnings never change the terminal status.
    pub fn register_warning(&mut self, message: impl Into<String>) {
        self.report.warnings.push(message.into());
    }

    /// Registers an error and forces the terminal status to failure.
    pub fn register_error(&mut self, message: impl Into<String>) {
        self.report.errors.push(message.into());
        self.report.status = MeasureStatus::Fail;
    }

    /// Marks the run as not applicable unless an error already failed it.
    pub fn register_as_not_applicable(&mut self, message: impl Into<String>) {
        self.report.info.push(message.into());
        if self.report.status == MeasureStatus::Success {
            self.report.status = MeasureStatus::NotApplicable;
        }
    }

    /// Records the before-edit summary of the model.
    pub fn register_initial_condition(&mut self, message: impl Into<String>) {
        self.report.initial_condition = Some(message.into());
    }

    /// Records the after-edit summary of the model.
    pub fn register_final_condition(&mut self, message: impl Into<String>) {
        self.report.final_condition = Some(message.into());
    }

    /// The single fail-fast gate: checks that every required descriptor has a
    /// supplied value or default and that every supplied value satisfies the
    /// kind it was declared with. Registers an error per violation and
    /// returns whether the map passed. Measures must not touch the model
    /// when this is false.
    ///
    /// Supplied values are checked against the spec embedded in the map (the
    /// schema the host set them against), not against `specs`. A choice
    /// value that was valid when the map was built therefore passes the gate
    /// even if the referenced object has since left the model; resolving it
    /// is the measure's job.
    pub fn validate_user_arguments(
        &mut self,
        specs: &[ArgumentSpec],
        values: &ArgumentValues,
    ) -> bool {
        let mut ok = true;
        for spec in specs {
            if let Err(err) = spec.validate() {
                self.register_error(err.to_string());
                ok = false;
                continue;
            }
            match values.get(&spec.name) {
                None => {
                    if spec.required && spec.default.is_none() {
                        self.register_error(format!(
                            "Argument '{}' is required, but the supplied map has no entry for it.",
                            spec.name
                        ));
                        ok = false;
                    }
                }
                Some(instance) => {
                    if let Some(value) = &instance.value {
                        if !instance.spec.kind.accepts(value) {
                            self.register_error(format!(
                                "Argument '{}' holds a {} value, but a {} is declared.",
                                spec.name,
                                value.label(),
                                instance.spec.kind.label()
                            ));
                            ok = false;
                        }
                    } else if spec.required && spec.default.is_none() {
                        self.register_error(format!(
                            "Argument '{}' is required, but no value was supplied and it has no default.",
                            spec.name
                        ));
                        ok = false;
                    }
                }
            }
        }
        ok
    }

    /// Returns the report accumulated so far.
    pub fn result(&self) -> &OutcomeReport {
        &self.report
    }

    /// Consumes the runner and returns the finished report.
    pub fn into_report(self) -> OutcomeReport {
        self.report
    }
}
