use std::fmt;

use nuevg_interaction::Interaction;
use serde::{Deserialize, Serialize};

/// Event record seeded by interaction selection.
///
/// Owns exactly one interaction, the summary.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EventRecord {
    summary: Interaction,
}

impl EventRecord {
    /// Creates a record around its summary interaction.
    pub fn new(summary: Interaction) -> Self {
        Self { summary }
    }

    /// The selected interaction.
    pub fn summary(&self) -> &Interaction {
        &self.summary
    }

    /// Mutable access to the selected interaction.
    pub fn summary_mut(&mut self) -> &mut Interaction {
        &mut self.summary
    }

    /// Consumes the record, returning its summary.
    pub fn into_summary(self) -> Interaction {
        self.summary
    }
}

impl fmt::Display for EventRecord {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "event summary:")?;
        write!(f, "{}", self.summary)
    }
}
