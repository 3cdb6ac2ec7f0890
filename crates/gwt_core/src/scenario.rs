//! The Given/When/Then lifecycle contract.
//!
//! [`GwtScenario`] is the base contract every test scenario implements:
//! three ordered steps plus a fixed [`test()`](GwtScenario::test) entry
//! point that an external runner calls. The contract is enforced at call
//! time, not at definition time — a scenario that forgets a step or its
//! description compiles fine and fails with a descriptive error when run.

use std::fmt;

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::description::GwtDescription;
use crate::error::{GwtError, Result};

/// One of the three required lifecycle steps.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum GwtStep {
    /// Preconditions setup
    Given,
    /// The action under test
    When,
    /// Outcome verification
    Then,
}

impl GwtStep {
    /// Lowercase step name as used in error messages and logs.
    pub fn as_str(&self) -> &'static str {
        match self {
            GwtStep::Given => "given",
            GwtStep::When => "when",
            GwtStep::Then => "then",
        }
    }
}

impl fmt::Display for GwtStep {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Strips the module path from a fully qualified type name.
fn short_type_name(full: &'static str) -> &'static str {
    full.rsplit("::").next().unwrap_or(full)
}

/// A test scenario structured as Given (preconditions), When (action),
/// Then (expected outcome).
///
/// Concrete scenario types override the three step methods and supply a
/// per-type [`GwtDescription`]. A runner constructs an instance, calls
/// [`test()`](GwtScenario::test) exactly once, and discards it; step
/// state lives on the instance itself (hence `&mut self`).
///
/// # Contract
///
/// - Each step has a default body that fails with
///   [`GwtError::UnimplementedStep`]; overriding all three is mandatory
///   but checked only when the step actually runs.
/// - [`description()`](GwtScenario::description) defaults to `None`; a
///   scenario that ships without one fails [`test()`](GwtScenario::test)
///   with [`GwtError::MissingDescription`] — after its steps ran, so a
///   genuine test failure is never masked by a documentation failure.
/// - Errors returned from step bodies pass through
///   [`test()`](GwtScenario::test) unmodified, and panics unwind as
///   usual.
///
/// # Examples
///
/// ```
/// use gwt_core::{GwtDescription, GwtScenario, Result};
///
/// #[derive(Default)]
/// struct UserLogsIn {
///     registered: bool,
///     session: Option<String>,
/// }
///
/// impl GwtScenario for UserLogsIn {
///     fn description() -> Option<GwtDescription> {
///         Some(GwtDescription::new(
///             "UserLogsIn",
///             "a registered user",
///             "valid credentials submitted",
///             "session is created",
///         ))
///     }
///
///     fn given(&mut self) -> Result<()> {
///         self.registered = true;
///         Ok(())
///     }
///
///     fn when(&mut self) -> Result<()> {
///         if self.registered {
///             self.session = Some("session-1".to_string());
///         }
///         Ok(())
///     }
///
///     fn then(&mut self) -> Result<()> {
///         assert!(self.session.is_some());
///         Ok(())
///     }
/// }
///
/// UserLogsIn::default().test().unwrap();
/// ```
pub trait GwtScenario {
    /// The per-type description documenting this scenario's intent.
    ///
    /// Defaults to `None`. Scenarios override this to return their
    /// description; absence is detected at [`test()`](GwtScenario::test)
    /// time, not at definition time.
    fn description() -> Option<GwtDescription>
    where
        Self: Sized,
    {
        None
    }

    /// Short name of the concrete scenario type.
    ///
    /// This is the scenario's only identity: it appears in every
    /// contract error and is the conventional description title.
    fn scenario_name() -> &'static str
    where
        Self: Sized,
    {
        short_type_name(std::any::type_name::<Self>())
    }

    /// Establishes the preconditions.
    fn given(&mut self) -> Result<()>
    where
        Self: Sized,
    {
        Err(GwtError::UnimplementedStep {
            scenario: Self::scenario_name(),
            step: GwtStep::Given,
        })
    }

    /// Performs the action under test.
    fn when(&mut self) -> Result<()>
    where
        Self: Sized,
    {
        Err(GwtError::UnimplementedStep {
            scenario: Self::scenario_name(),
            step: GwtStep::When,
        })
    }

    /// Verifies the expected outcome.
    fn then(&mut self) -> Result<()>
    where
        Self: Sized,
    {
        Err(GwtError::UnimplementedStep {
            scenario: Self::scenario_name(),
            step: GwtStep::Then,
        })
    }

    /// Runs the scenario: given, when, then, in that order, then
    /// validates the description.
    ///
    /// This is the framework's entry point; scenario types must not
    /// override it. There is no retry or skip — the first failing step
    /// aborts the call, and description validation runs only once all
    /// three steps have completed.
    ///
    /// # Errors
    ///
    /// Returns whatever a step body returned, unmodified, or a
    /// contract violation raised by the framework itself (an
    /// unimplemented step, or a missing description).
    fn test(&mut self) -> Result<()>
    where
        Self: Sized,
    {
        let name = Self::scenario_name();
        debug!(scenario = name, step = %GwtStep::Given, "running step");
        self.given()?;
        debug!(scenario = name, step = %GwtStep::When, "running step");
        self.when()?;
        debug!(scenario = name, step = %GwtStep::Then, "running step");
        self.then()?;
        debug!(scenario = name, "validating description");
        self.validate_description()
    }

    /// Checks that this scenario type supplies a description.
    ///
    /// Called by [`test()`](GwtScenario::test) after the steps complete.
    fn validate_description(&self) -> Result<()>
    where
        Self: Sized,
    {
        match Self::description() {
            Some(_) => Ok(()),
            None => Err(GwtError::MissingDescription {
                scenario: Self::scenario_name(),
            }),
        }
    }

    /// Renders this scenario type's description as Markdown.
    ///
    /// Returns `None` for an undescribed scenario; a documentation
    /// generator walking many types decides how to report the gap.
    fn render_markdown() -> Option<String>
    where
        Self: Sized,
    {
        Self::description().map(|d| d.render_as_markdown())
    }
}
