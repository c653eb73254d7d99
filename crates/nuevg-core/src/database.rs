//! Particle property lookup.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::pdg;

/// Static properties of a particle or isotope.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ParticleData {
    /// Short display name.
    pub name: String,
    /// Rest mass in GeV.
    pub mass: f64,
    /// Electric charge in units of e.
    pub charge: f64,
}

/// Resolves particle and isotope codes to their properties.
///
/// Anything that answers `None` from [`ParticleDatabase::find`] is treated as
/// an unknown code.
pub trait ParticleDatabase: Send + Sync {
    /// Looks up a particle by PDG code.
    fn find(&self, pdg: i32) -> Option<&ParticleData>;

    /// Returns true if the code is known.
    fn exists(&self, pdg: i32) -> bool {
        self.find(pdg).is_some()
    }
}

/// Table-backed [`ParticleDatabase`].
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct StaticParticleDatabase {
    entries: BTreeMap<i32, ParticleData>,
}

// (Z, A, name, mass in GeV)
const STANDARD_ISOTOPES: [(i32, i32, &str, f64); 10] = [
    (1, 2, "H2", 1.875_613),
    (2, 3, "He3", 2.808_391),
    (2, 4, "He4", 3.727_379),
    (6, 12, "C12", 11.174_86),
    (7, 14, "N14", 13.040_20),
    (8, 16, "O16", 14.895_08),
    (13, 27, "Al27", 25.126_50),
    (18, 40, "Ar40", 37.224_72),
    (26, 56, "Fe56", 52.089_81),
    (82, 208, "Pb208", 193.729_0),
];

impl StaticParticleDatabase {
    /// Creates an empty database.
    pub fn new() -> Self {
        Self::default()
    }

    /// Database preloaded with leptons, quarks, nucleons, pions and a fixed
    /// set of commonly used target isotopes.
    pub fn standard() -> Self {
        let mut db = Self::new();

        db.insert(pdg::PDG_ELECTRON, "e-", 0.000_510_999, -1.0);
        db.insert(pdg::PDG_POSITRON, "e+", 0.000_510_999, 1.0);
        db.insert(pdg::PDG_MUON, "mu-", 0.105_658_4, -1.0);
        db.insert(pdg::PDG_ANTI_MUON, "mu+", 0.105_658_4, 1.0);
        db.insert(pdg::PDG_TAU, "tau-", 1.776_86, -1.0);
        db.insert(pdg::PDG_ANTI_TAU, "tau+", 1.776_86, 1.0);

        db.insert(pdg::PDG_NU_E, "nu_e", 0.0, 0.0);
        db.insert(pdg::PDG_ANTI_NU_E, "nu_e_bar", 0.0, 0.0);
        db.insert(pdg::PDG_NU_MU, "nu_mu", 0.0, 0.0);
        db.insert(pdg::PDG_ANTI_NU_MU, "nu_mu_bar", 0.0, 0.0);
        db.insert(pdg::PDG_NU_TAU, "nu_tau", 0.0, 0.0);
        db.insert(pdg::PDG_ANTI_NU_TAU, "nu_tau_bar", 0.0, 0.0);

        let quarks = [
            (pdg::PDG_D_QUARK, "d", 0.0047, -1.0 / 3.0),
            (pdg::PDG_U_QUARK, "u", 0.0022, 2.0 / 3.0),
            (pdg::PDG_S_QUARK, "s", 0.093, -1.0 / 3.0),
            (pdg::PDG_C_QUARK, "c", 1.27, 2.0 / 3.0),
            (pdg::PDG_B_QUARK, "b", 4.18, -1.0 / 3.0),
            (pdg::PDG_T_QUARK, "t", 172.76, 2.0 / 3.0),
        ];
        for (code, name, mass, charge) in quarks {
            db.insert(code, name, mass, charge);
            db.insert(-code, &format!("{name}_bar"), mass, -charge);
        }

        db.insert(pdg::PDG_PROTON, "proton", 0.938_272, 1.0);
        db.insert(pdg::PDG_NEUTRON, "neutron", 0.939_565, 0.0);
        db.insert(pdg::PDG_PI_PLUS, "pi+", 0.139_570, 1.0);
        db.insert(pdg::PDG_PI_ZERO, "pi0", 0.134_977, 0.0);
        db.insert(pdg::PDG_PI_MINUS, "pi-", 0.139_570, -1.0);

        for (z, a, name, mass) in STANDARD_ISOTOPES {
            if let Some(code) = pdg::ion_pdg_code(a, z) {
                db.insert(code, name, mass, f64::from(z));
            }
        }

        db
    }

    /// Adds or replaces an entry.
    pub fn insert(&mut self, pdg: i32, name: &str, mass: f64, charge: f64) {
        self.entries.insert(
            pdg,
            ParticleData {
                name: name.to_string(),
                mass,
                charge,
            },
        );
    }

    /// Number of known codes.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Returns true if no codes are known.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl ParticleDatabase for StaticParticleDatabase {
    fn find(&self, pdg: i32) -> Option<&ParticleData> {
        self.entries.get(&pdg)
    }
}
