//! Reaction targets: nuclei, free nucleons and bare particles.
//!
//! A [`Target`] keeps its (Z, A) pair consistent with the particle database:
//! an unknown isotope collapses to the degenerate `Z = 0, A = 0` state instead
//! of failing. Callers check [`Target::is_valid_nucleus`] and friends before
//! relying on composition.

use std::fmt;

use log::{debug, warn};
use nuevg_core::pdg;
use nuevg_core::{FourMomentum, ParticleDatabase};
use serde::{Deserialize, Serialize};

/// Average nucleon mass in GeV, used when the database has no nucleon entry.
pub const NUCLEON_MASS: f64 = 0.938_919;

/// The object struck by the probe.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Target {
    pdg: i32,
    z: i32,
    a: i32,
    struck_nucleon: Option<i32>,
    struck_nucleon_p4: Option<FourMomentum>,
    struck_quark: Option<i32>,
    struck_sea_quark: bool,
}

impl Target {
    fn empty(pdg: i32) -> Self {
        Self {
            pdg,
            z: 0,
            a: 0,
            struck_nucleon: None,
            struck_nucleon_p4: None,
            struck_quark: None,
            struck_sea_quark: false,
        }
    }

    /// Builds a target from a bare identifier.
    ///
    /// Ion codes are decoded into (Z, A) and validated; anything else is a
    /// bare particle with `Z = A = 0`.
    pub fn from_pdg(code: i32, db: &dyn ParticleDatabase) -> Self {
        let mut target = Self::empty(code);
        if pdg::is_ion(code) {
            let z = pdg::ion_pdg_code_to_z(code);
            let a = pdg::ion_pdg_code_to_a(code);
            target.set_za(z, a, db);
        }
        target
    }

    /// Builds a nuclear (or free nucleon) target from its proton and nucleon counts.
    ///
    /// Pairs outside the ion code range get the null identifier and collapse
    /// to `Z = A = 0` like any other unknown isotope.
    pub fn from_za(z: i32, a: i32, db: &dyn ParticleDatabase) -> Self {
        let mut target = Self::empty(pdg::ion_pdg_code(a, z).unwrap_or(pdg::PDG_NULL));
        target.set_za(z, a, db);
        target
    }

    /// Builds a nuclear target with a designated struck nucleon.
    ///
    /// An out-of-domain `struck_nucleon` leaves the struck nucleon unset.
    pub fn with_struck_nucleon(
        z: i32,
        a: i32,
        struck_nucleon: i32,
        db: &dyn ParticleDatabase,
    ) -> Self {
        let mut target = Self::empty(pdg::ion_pdg_code(a, z).unwrap_or(pdg::PDG_NULL));
        target.z = z;
        target.a = a;
        target.force_nucleus_validity(db);
        target.set_struck_nucleon(struck_nucleon, db);
        target
    }

    fn set_za(&mut self, z: i32, a: i32, db: &dyn ParticleDatabase) {
        self.z = z;
        self.a = a;
        self.force_nucleus_validity(db);

        if self.is_proton() {
            self.set_struck_nucleon(pdg::PDG_PROTON, db);
        } else if self.is_neutron() {
            self.set_struck_nucleon(pdg::PDG_NEUTRON, db);
        }
    }

    fn force_nucleus_validity(&mut self, db: &dyn ParticleDatabase) {
        if !self.is_valid_nucleus(db) {
            warn!(
                "event=target_validate module=target status=invalid z={} a={} action=reset_to_zero",
                self.z, self.a
            );
            self.z = 0;
            self.a = 0;
        }
    }

    /// Designates the struck nucleon.
    ///
    /// Only the proton and neutron are accepted; anything else resets the
    /// struck nucleon to unset. A valid nucleon starts at rest and on shell.
    pub fn set_struck_nucleon(&mut self, code: i32, db: &dyn ParticleDatabase) {
        if !pdg::is_neutron_or_proton(code) {
            debug!(
                "event=struck_nucleon_set module=target status=rejected pdg={code} action=unset"
            );
            self.struck_nucleon = None;
            self.struck_nucleon_p4 = None;
            return;
        }
        let mass = match db.find(code) {
            Some(data) => data.mass,
            None => {
                warn!(
                    "event=struck_nucleon_set module=target status=missing_mass pdg={code} fallback={NUCLEON_MASS}"
                );
                NUCLEON_MASS
            }
        };
        self.struck_nucleon = Some(code);
        self.struck_nucleon_p4 = Some(FourMomentum::at_rest(mass));
    }

    /// Designates the struck quark. Non-quark codes are ignored.
    pub fn set_struck_quark(&mut self, code: i32) {
        if pdg::is_quark(code) || pdg::is_anti_quark(code) {
            self.struck_quark = Some(code);
        }
    }

    /// Marks the struck quark as a sea (true) or valence (false) constituent.
    pub fn set_struck_sea_quark(&mut self, from_sea: bool) {
        self.struck_sea_quark = from_sea;
    }

    /// Overrides the struck nucleon four-momentum.
    pub fn set_struck_nucleon_p4(&mut self, p4: FourMomentum) {
        self.struck_nucleon_p4 = Some(p4);
    }

    /// Target identifier.
    pub fn pdg(&self) -> i32 {
        self.pdg
    }

    /// Proton count.
    pub fn z(&self) -> i32 {
        self.z
    }

    /// Nucleon count.
    pub fn a(&self) -> i32 {
        self.a
    }

    /// Neutron count.
    pub fn n(&self) -> i32 {
        self.a - self.z
    }

    /// Struck nucleon code, if one is set.
    pub fn struck_nucleon(&self) -> Option<i32> {
        self.struck_nucleon
    }

    /// Struck nucleon four-momentum, if a struck nucleon is set.
    pub fn struck_nucleon_p4(&self) -> Option<&FourMomentum> {
        self.struck_nucleon_p4.as_ref()
    }

    /// Struck quark code, if one is set.
    pub fn struck_quark(&self) -> Option<i32> {
        self.struck_quark
    }

    /// Whether the struck quark comes from the sea.
    pub fn struck_quark_is_from_sea(&self) -> bool {
        self.struck_sea_quark
    }

    /// Returns true if a struck nucleon is designated.
    pub fn struck_nucleon_is_set(&self) -> bool {
        self.struck_nucleon.is_some()
    }

    /// Returns true if a struck quark is designated.
    pub fn struck_quark_is_set(&self) -> bool {
        self.struck_quark.is_some()
    }

    /// A single proton or neutron.
    pub fn is_free_nucleon(&self) -> bool {
        self.a == 1 && (self.z == 0 || self.z == 1)
    }

    /// A free proton.
    pub fn is_proton(&self) -> bool {
        self.a == 1 && self.z == 1
    }

    /// A free neutron.
    pub fn is_neutron(&self) -> bool {
        self.a == 1 && self.z == 0
    }

    /// A nucleus with more than one nucleon.
    pub fn is_nucleus(&self) -> bool {
        self.a > 1
    }

    /// A bare particle known to the database (for example an electron).
    pub fn is_particle(&self, db: &dyn ParticleDatabase) -> bool {
        db.exists(self.pdg) && self.a == 0 && self.z == 0
    }

    /// Free nucleon, or a (Z, A) isotope known to the database.
    pub fn is_valid_nucleus(&self, db: &dyn ParticleDatabase) -> bool {
        if self.is_free_nucleon() {
            return true;
        }
        pdg::ion_pdg_code(self.a, self.z).is_some_and(|code| db.exists(code))
    }

    /// Even Z and even N.
    pub fn is_even_even(&self) -> bool {
        self.is_nucleus() && self.n() % 2 == 0 && self.z % 2 == 0
    }

    /// Odd Z and odd N.
    pub fn is_odd_odd(&self) -> bool {
        self.is_nucleus() && self.n() % 2 == 1 && self.z % 2 == 1
    }

    /// Exactly one of Z, N is odd.
    pub fn is_even_odd(&self) -> bool {
        self.is_nucleus() && !self.is_even_even() && !self.is_odd_odd()
    }

    fn lookup_code(&self) -> i32 {
        if self.is_proton() {
            pdg::PDG_PROTON
        } else if self.is_neutron() {
            pdg::PDG_NEUTRON
        } else {
            self.pdg
        }
    }

    /// Rest mass in GeV, or 0 when the database does not know the target.
    pub fn mass(&self, db: &dyn ParticleDatabase) -> f64 {
        db.find(self.lookup_code()).map_or(0.0, |data| data.mass)
    }

    /// Charge in units of e, or 0 when the database does not know the target.
    pub fn charge(&self, db: &dyn ParticleDatabase) -> f64 {
        db.find(self.lookup_code()).map_or(0.0, |data| data.charge)
    }

    /// Struck nucleon rest mass in GeV, or 0 when no struck nucleon is set.
    pub fn struck_nucleon_mass(&self, db: &dyn ParticleDatabase) -> f64 {
        match self.struck_nucleon {
            Some(code) => db.find(code).map_or(NUCLEON_MASS, |data| data.mass),
            None => {
                warn!("event=struck_nucleon_mass module=target status=unset value=0");
                0.0
            }
        }
    }

    /// Compact single-line form: `PDG[N=nucleon][q=quark(s|v)]`.
    pub fn as_string(&self) -> String {
        let mut out = self.pdg.to_string();
        if let Some(nucleon) = self.struck_nucleon {
            out.push_str(&format!("[N={nucleon}]"));
        }
        if let Some(quark) = self.struck_quark {
            let origin = if self.struck_sea_quark { "s" } else { "v" };
            out.push_str(&format!("[q={quark}({origin})]"));
        }
        out
    }
}

impl fmt::Display for Target {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, " target PDG code = {}", self.pdg)?;
        if self.is_nucleus() || self.is_free_nucleon() {
            writeln!(f, " Z = {}, A = {}", self.z, self.a)?;
        }
        if let Some(nucleon) = self.struck_nucleon {
            write!(f, " struck nucleon = {nucleon}")?;
            if let Some(p4) = &self.struck_nucleon_p4 {
                write!(f, ", P4 = {p4}")?;
            }
            writeln!(f)?;
        }
        Ok(())
    }
}
