//! Error types for gwt_core operations.

use thiserror::Error;

use crate::scenario::GwtStep;

/// Result alias used throughout the crate.
pub type Result<T> = std::result::Result<T, GwtError>;

/// Core error type for scenario execution.
///
/// Errors fall into two disjoint categories:
///
/// 1. **Documentation-contract violations** ([`UnimplementedStep`],
///    [`MissingDescription`]) — raised by the framework itself when a
///    scenario type violates the Given/When/Then contract. Always fatal
///    to the current [`test()`] call, and always carry the concrete
///    scenario type name for diagnostics.
/// 2. **Domain-test failures** ([`Scenario`]) — raised by the scenario's
///    own step bodies. The framework passes these through unmodified;
///    it never wraps or reinterprets them.
///
/// Use [`is_contract_violation`](GwtError::is_contract_violation) to
/// tell the categories apart when aggregating results in a runner.
///
/// [`UnimplementedStep`]: GwtError::UnimplementedStep
/// [`MissingDescription`]: GwtError::MissingDescription
/// [`Scenario`]: GwtError::Scenario
/// [`test()`]: crate::GwtScenario::test
#[derive(Error, Debug)]
pub enum GwtError {
    /// A required lifecycle step was invoked but never overridden by the
    /// concrete scenario type.
    #[error("{scenario} must implement the '{step}' step")]
    UnimplementedStep {
        /// Short name of the concrete scenario type
        scenario: &'static str,
        /// The step that was left at its default
        step: GwtStep,
    },

    /// The scenario ran all three steps but supplies no description.
    #[error("description not provided for scenario '{scenario}'")]
    MissingDescription {
        /// Short name of the concrete scenario type
        scenario: &'static str,
    },

    /// A failure raised inside a scenario's own given/when/then body,
    /// e.g. an assertion mismatch. Propagated unchanged.
    #[error(transparent)]
    Scenario(#[from] anyhow::Error),
}

impl GwtError {
    /// Returns `true` for framework-level contract violations, `false`
    /// for failures originating in the scenario's own step bodies.
    pub fn is_contract_violation(&self) -> bool {
        matches!(
            self,
            GwtError::UnimplementedStep { .. } | GwtError::MissingDescription { .. }
        )
    }
}
