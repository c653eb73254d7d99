use std::fmt;

use serde::{Deserialize, Serialize};

/// Four-momentum in natural units, GeV.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize, Default)]
pub struct FourMomentum {
    /// x component of the three-momentum.
    pub px: f64,
    /// y component of the three-momentum.
    pub py: f64,
    /// z component of the three-momentum.
    pub pz: f64,
    /// Energy.
    pub e: f64,
}

impl FourMomentum {
    /// Creates a four-momentum from `(px, py, pz, E)`.
    pub const fn new(px: f64, py: f64, pz: f64, e: f64) -> Self {
        Self { px, py, pz, e }
    }

    /// A particle of mass `mass` at rest and on shell.
    pub const fn at_rest(mass: f64) -> Self {
        Self::new(0.0, 0.0, 0.0, mass)
    }

    /// Magnitude of the three-momentum.
    pub fn p(&self) -> f64 {
        (self.px * self.px + self.py * self.py + self.pz * self.pz).sqrt()
    }

    /// Invariant mass squared, `E² - |p|²`.
    pub fn mass2(&self) -> f64 {
        self.e * self.e - self.p() * self.p()
    }
}

impl fmt::Display for FourMomentum {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "(E = {:.6}, px = {:.6}, py = {:.6}, pz = {:.6})",
            self.e, self.px, self.py, self.pz
        )
    }
}
