//! Process-wide registry of scenario types.
//!
//! Rust has no subclass reflection, so enumeration works through an
//! explicit registration step: each concrete scenario type is registered
//! once (its type identity plus description provider), typically during
//! runner or module setup, and documentation generators walk the
//! registry afterwards. Only explicitly registered types appear —
//! nothing is discovered transitively.
//!
//! Entries keep insertion order; registration order across files is not
//! guaranteed to match declaration order. Undescribed types are recorded
//! but skipped by [`descriptions`](ScenarioRegistry::descriptions), so a
//! generator can still spot them via [`names`](ScenarioRegistry::names).

use std::any::TypeId;

use parking_lot::RwLock;

use crate::description::GwtDescription;
use crate::scenario::GwtScenario;

type DescriptionFn = fn() -> Option<GwtDescription>;

struct ScenarioEntry {
    type_id: TypeId,
    name: &'static str,
    description: DescriptionFn,
}

/// An insertion-ordered collection of registered scenario types.
///
/// Reads are evaluated at call time, not cached: a type registered after
/// a previous walk shows up in the next one. Most callers use the
/// process-wide instance from [`global()`]; standalone registries exist
/// for isolated walks (and tests).
pub struct ScenarioRegistry {
    entries: RwLock<Vec<ScenarioEntry>>,
}

impl ScenarioRegistry {
    /// Creates an empty registry.
    pub const fn new() -> Self {
        Self {
            entries: RwLock::new(Vec::new()),
        }
    }

    /// Registers a scenario type.
    ///
    /// Idempotent per type: registering the same type twice keeps the
    /// original entry and position.
    pub fn register<S: GwtScenario + 'static>(&self) {
        let mut entries = self.entries.write();
        let type_id = TypeId::of::<S>();
        if entries.iter().any(|e| e.type_id == type_id) {
            return;
        }
        entries.push(ScenarioEntry {
            type_id,
            name: S::scenario_name(),
            description: S::description,
        });
    }

    /// Returns the descriptions of all registered described types, in
    /// insertion order.
    ///
    /// Types registered without a description are skipped.
    pub fn descriptions(&self) -> Vec<GwtDescription> {
        self.entries
            .read()
            .iter()
            .filter_map(|e| (e.description)())
            .collect()
    }

    /// Returns the names of all registered types, described or not, in
    /// insertion order.
    pub fn names(&self) -> Vec<&'static str> {
        self.entries.read().iter().map(|e| e.name).collect()
    }

    /// Renders every described entry as Markdown, blank-line separated.
    ///
    /// This is the whole-registry walk a documentation generator
    /// performs; per-type rendering lives on
    /// [`GwtScenario::render_markdown`].
    pub fn render_all(&self) -> String {
        self.descriptions()
            .iter()
            .map(GwtDescription::render_as_markdown)
            .collect::<Vec<_>>()
            .join("\n")
    }

    /// Number of registered types, described or not.
    pub fn len(&self) -> usize {
        self.entries.read().len()
    }

    /// Returns `true` if nothing has been registered.
    pub fn is_empty(&self) -> bool {
        self.entries.read().is_empty()
    }
}

impl Default for ScenarioRegistry {
    fn default() -> Self {
        Self::new()
    }
}

static GLOBAL: ScenarioRegistry = ScenarioRegistry::new();

/// The process-wide scenario registry.
pub fn global() -> &'static ScenarioRegistry {
    &GLOBAL
}
