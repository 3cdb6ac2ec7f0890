//! GWT Core Library
//!
//! A minimal structuring convention for Given/When/Then tests, providing:
//! - A scenario base contract with three ordered steps and a fixed
//!   `test()` entry point
//! - Per-type natural-language descriptions with Markdown rendering
//! - Call-time validation that no scenario ships undocumented
//! - A process-wide registry for enumerating scenario types
//!
//! Execution and reporting stay with the caller: any test runner that
//! invokes [`GwtScenario::test`] and collects failures works, and any
//! documentation generator can walk a [`ScenarioRegistry`] and
//! concatenate the rendered blocks.
//!
//! # Quick Start
//!
//! ```
//! use gwt_core::{GwtDescription, GwtScenario, Result};
//!
//! #[derive(Default)]
//! struct UserLogsIn {
//!     registered: bool,
//!     session: Option<String>,
//! }
//!
//! impl GwtScenario for UserLogsIn {
//!     fn description() -> Option<GwtDescription> {
//!         Some(GwtDescription::new(
//!             "UserLogsIn",
//!             "a registered user",
//!             "valid credentials submitted",
//!             "session is created",
//!         ))
//!     }
//!
//!     fn given(&mut self) -> Result<()> {
//!         self.registered = true;
//!         Ok(())
//!     }
//!
//!     fn when(&mut self) -> Result<()> {
//!         assert!(self.registered);
//!         self.session = Some("session-1".to_string());
//!         Ok(())
//!     }
//!
//!     fn then(&mut self) -> Result<()> {
//!         assert_eq!(self.session.as_deref(), Some("session-1"));
//!         Ok(())
//!     }
//! }
//!
//! UserLogsIn::default().test().unwrap();
//! ```
//!
//! # Documentation Generation
//!
//! Registered scenario types can be rendered in one walk:
//!
//! ```
//! use gwt_core::{GwtDescription, GwtScenario, Result, ScenarioRegistry};
//! # #[derive(Default)]
//! # struct UserLogsIn;
//! # impl GwtScenario for UserLogsIn {
//! #     fn description() -> Option<GwtDescription> {
//! #         Some(GwtDescription::new("UserLogsIn", "g", "w", "t"))
//! #     }
//! #     fn given(&mut self) -> Result<()> { Ok(()) }
//! #     fn when(&mut self) -> Result<()> { Ok(()) }
//! #     fn then(&mut self) -> Result<()> { Ok(()) }
//! # }
//!
//! let registry = ScenarioRegistry::new();
//! registry.register::<UserLogsIn>();
//!
//! let docs = registry.render_all();
//! assert!(docs.contains("### Test Scenario: UserLogsIn"));
//! ```
//!
//! # Contract Failures
//!
//! Framework failures (a missing description, an unimplemented step)
//! are [`GwtError`] contract violations naming the scenario type;
//! failures raised by step bodies pass through unmodified. See
//! [`GwtError::is_contract_violation`].

mod description;
mod error;
pub mod registry;
mod scenario;

pub use description::GwtDescription;
pub use error::{GwtError, Result};
pub use registry::ScenarioRegistry;
pub use scenario::{GwtScenario, GwtStep};
