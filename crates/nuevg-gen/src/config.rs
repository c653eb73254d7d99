use nuevg_core::{ErrorInfo, EvgError};
use serde::{Deserialize, Serialize};

use crate::catalog::CurrentType;

/// Per-generator configuration: which weak current the generator enumerates.
///
/// Both flags default to false, which configures a generator that admits no
/// channels. Setting both is rejected by [`GeneratorConfig::current`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
pub struct GeneratorConfig {
    /// Enumerate charged current channels.
    #[serde(rename = "is-CC", default)]
    pub is_cc: bool,
    /// Enumerate neutral current channels.
    #[serde(rename = "is-NC", default)]
    pub is_nc: bool,
}

impl GeneratorConfig {
    /// Charged current only.
    pub fn charged_current() -> Self {
        Self {
            is_cc: true,
            is_nc: false,
        }
    }

    /// Neutral current only.
    pub fn neutral_current() -> Self {
        Self {
            is_cc: false,
            is_nc: true,
        }
    }

    /// Parses a YAML mapping such as `is-CC: true`.
    pub fn from_yaml_str(data: &str) -> Result<Self, EvgError> {
        serde_yaml::from_str(data)
            .map_err(|err| EvgError::Config(ErrorInfo::new("config-parse", err.to_string())))
    }

    /// Resolves the configured current.
    ///
    /// `Ok(None)` when neither flag is set; an error when both are.
    pub fn current(&self) -> Result<Option<CurrentType>, EvgError> {
        match (self.is_cc, self.is_nc) {
            (true, true) => Err(EvgError::Config(
                ErrorInfo::new(
                    "conflicting-current-flags",
                    "generator configured for both charged and neutral current",
                )
                .with_context("is-CC", "true")
                .with_context("is-NC", "true")
                .with_hint("use one generator instance per current"),
            )),
            (true, false) => Ok(Some(CurrentType::Charged)),
            (false, true) => Ok(Some(CurrentType::Neutral)),
            (false, false) => Ok(None),
        }
    }
}
