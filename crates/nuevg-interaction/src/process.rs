use std::fmt;

use serde::{Deserialize, Serialize};

/// Scattering mechanism.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "kebab-case")]
pub enum ScatteringType {
    /// Not yet classified.
    #[default]
    Null,
    /// Quasi-elastic scattering.
    QuasiElastic,
    /// Resonant single pion production.
    SinglePion,
    /// Deep inelastic scattering.
    DeepInelastic,
    /// Coherent scattering off the whole nucleus.
    Coherent,
    /// Diffractive scattering.
    Diffractive,
}

impl ScatteringType {
    /// Stable short label.
    pub fn as_str(&self) -> &'static str {
        match self {
            ScatteringType::Null => "null",
            ScatteringType::QuasiElastic => "qel",
            ScatteringType::SinglePion => "res",
            ScatteringType::DeepInelastic => "dis",
            ScatteringType::Coherent => "coh",
            ScatteringType::Diffractive => "dfr",
        }
    }
}

/// Interaction current.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize, Default)]
pub enum InteractionType {
    /// Not yet classified.
    #[default]
    Null,
    /// Weak charged current.
    WeakCC,
    /// Weak neutral current.
    WeakNC,
    /// Electromagnetic.
    Em,
}

impl InteractionType {
    /// Stable short label.
    pub fn as_str(&self) -> &'static str {
        match self {
            InteractionType::Null => "null",
            InteractionType::WeakCC => "weak[cc]",
            InteractionType::WeakNC => "weak[nc]",
            InteractionType::Em => "em",
        }
    }
}

/// Scattering mechanism × interaction current.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize, Default)]
pub struct ProcessInfo {
    scattering: ScatteringType,
    interaction: InteractionType,
}

impl ProcessInfo {
    /// Creates a process descriptor.
    pub const fn new(scattering: ScatteringType, interaction: InteractionType) -> Self {
        Self {
            scattering,
            interaction,
        }
    }

    /// Scattering mechanism.
    pub fn scattering_type(&self) -> ScatteringType {
        self.scattering
    }

    /// Interaction current.
    pub fn interaction_type(&self) -> InteractionType {
        self.interaction
    }

    /// Resonant single pion production.
    pub fn is_resonant(&self) -> bool {
        self.scattering == ScatteringType::SinglePion
    }

    /// Weak charged current.
    pub fn is_weak_cc(&self) -> bool {
        self.interaction == InteractionType::WeakCC
    }

    /// Weak neutral current.
    pub fn is_weak_nc(&self) -> bool {
        self.interaction == InteractionType::WeakNC
    }
}

impl fmt::Display for ProcessInfo {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}/{}", self.scattering.as_str(), self.interaction.as_str())
    }
}
