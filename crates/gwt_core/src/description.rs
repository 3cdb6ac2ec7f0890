//! Natural-language descriptions attached to scenario types.
//!
//! A [`GwtDescription`] documents a scenario's intent: a title plus one
//! sentence each for the Given, When, and Then steps. Descriptions are
//! immutable values owned by exactly one scenario type and rendered to
//! Markdown for documentation generation.

use serde::{Deserialize, Serialize};

/// The documentation record for one scenario type.
///
/// Construction requires all four fields; there are no defaults. The
/// value is immutable once built — readers go through the accessors.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GwtDescription {
    title: String,
    given: String,
    when: String,
    then: String,
}

impl GwtDescription {
    /// Creates a description from its four parts.
    ///
    /// By convention `title` matches the concrete scenario type name,
    /// which is the only identity a scenario carries.
    pub fn new(
        title: impl Into<String>,
        given: impl Into<String>,
        when: impl Into<String>,
        then: impl Into<String>,
    ) -> Self {
        Self {
            title: title.into(),
            given: given.into(),
            when: when.into(),
            then: then.into(),
        }
    }

    /// The scenario title.
    pub fn title(&self) -> &str {
        &self.title
    }

    /// The Given (preconditions) text.
    pub fn given(&self) -> &str {
        &self.given
    }

    /// The When (action) text.
    pub fn when(&self) -> &str {
        &self.when
    }

    /// The Then (expected outcome) text.
    pub fn then(&self) -> &str {
        &self.then
    }

    /// Renders the description as a Markdown block.
    ///
    /// The template is fixed:
    ///
    /// ```text
    /// ### Test Scenario: <title>
    ///
    /// **Given**: <given>
    ///
    /// **When**: <when>
    ///
    /// **Then**: <then>
    /// ```
    ///
    /// Field text is inserted verbatim; Markdown-special characters are
    /// not escaped. Callers that feed untrusted text into a rendering
    /// pipeline must escape it themselves.
    pub fn render_as_markdown(&self) -> String {
        format!(
            "### Test Scenario: {}\n\n**Given**: {}\n\n**When**: {}\n\n**Then**: {}\n",
            self.title, self.given, self.when, self.then
        )
    }
}
