use std::fmt;

use serde::{Deserialize, Serialize};

/// Exclusive final-state signature: nucleon and pion multiplicities.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
pub struct XclsTag {
    n_protons: u32,
    n_neutrons: u32,
    n_pi_plus: u32,
    n_pi_zero: u32,
    n_pi_minus: u32,
}

impl XclsTag {
    /// An inclusive tag with every multiplicity at zero.
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets final state nucleon multiplicities.
    pub fn set_n_nucleons(&mut self, protons: u32, neutrons: u32) {
        self.n_protons = protons;
        self.n_neutrons = neutrons;
    }

    /// Sets final state pion multiplicities.
    pub fn set_n_pions(&mut self, pi_plus: u32, pi_zero: u32, pi_minus: u32) {
        self.n_pi_plus = pi_plus;
        self.n_pi_zero = pi_zero;
        self.n_pi_minus = pi_minus;
    }

    /// Final state protons.
    pub fn n_protons(&self) -> u32 {
        self.n_protons
    }

    /// Final state neutrons.
    pub fn n_neutrons(&self) -> u32 {
        self.n_neutrons
    }

    /// Final state positive pions.
    pub fn n_pi_plus(&self) -> u32 {
        self.n_pi_plus
    }

    /// Final state neutral pions.
    pub fn n_pi_zero(&self) -> u32 {
        self.n_pi_zero
    }

    /// Final state negative pions.
    pub fn n_pi_minus(&self) -> u32 {
        self.n_pi_minus
    }

    /// Total final state nucleons.
    pub fn total_nucleons(&self) -> u32 {
        self.n_protons + self.n_neutrons
    }

    /// Total final state pions.
    pub fn total_pions(&self) -> u32 {
        self.n_pi_plus + self.n_pi_zero + self.n_pi_minus
    }

    /// True when no multiplicity is constrained.
    pub fn is_inclusive(&self) -> bool {
        self.total_nucleons() == 0 && self.total_pions() == 0
    }
}

impl fmt::Display for XclsTag {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "N(p={},n={});pi(+={},0={},-={})",
            self.n_protons, self.n_neutrons, self.n_pi_plus, self.n_pi_zero, self.n_pi_minus
        )
    }
}
