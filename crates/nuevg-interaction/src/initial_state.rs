use std::fmt;

use nuevg_core::FourMomentum;
use serde::{Deserialize, Serialize};

use crate::target::Target;

/// Probe plus target, the input to every interaction list generator.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct InitialState {
    probe_pdg: i32,
    target: Target,
    probe_p4: FourMomentum,
}

impl InitialState {
    /// Pairs a probe code with a target. The probe four-momentum starts at zero.
    pub fn new(probe_pdg: i32, target: Target) -> Self {
        Self {
            probe_pdg,
            target,
            probe_p4: FourMomentum::default(),
        }
    }

    /// Probe identifier.
    pub fn probe_pdg(&self) -> i32 {
        self.probe_pdg
    }

    /// The struck object.
    pub fn target(&self) -> &Target {
        &self.target
    }

    /// Mutable access to the struck object.
    pub fn target_mut(&mut self) -> &mut Target {
        &mut self.target
    }

    /// Incoming probe four-momentum.
    pub fn probe_p4(&self) -> &FourMomentum {
        &self.probe_p4
    }

    /// Overwrites the incoming probe four-momentum.
    pub fn set_probe_p4(&mut self, p4: FourMomentum) {
        self.probe_p4 = p4;
    }

    /// Compact single-line form, `nu:<probe>;tgt:<target>`.
    pub fn as_string(&self) -> String {
        format!("nu:{};tgt:{}", self.probe_pdg, self.target.as_string())
    }
}

impl fmt::Display for InitialState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, " probe PDG code = {}", self.probe_pdg)?;
        writeln!(f, " probe P4 = {}", self.probe_p4)?;
        write!(f, "{}", self.target)
    }
}
