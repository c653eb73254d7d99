//! PDG particle codes and classification helpers.
//!
//! Nuclei use the ion convention `10LZZZAAAI`: `1_000_000_000 + Z * 10_000 + A * 10`.

/// Placeholder code for "no particle".
pub const PDG_NULL: i32 = 0;

/// Electron.
pub const PDG_ELECTRON: i32 = 11;
/// Positron.
pub const PDG_POSITRON: i32 = -11;
/// Muon.
pub const PDG_MUON: i32 = 13;
/// Antimuon.
pub const PDG_ANTI_MUON: i32 = -13;
/// Tau lepton.
pub const PDG_TAU: i32 = 15;
/// Antitau lepton.
pub const PDG_ANTI_TAU: i32 = -15;

/// Electron neutrino.
pub const PDG_NU_E: i32 = 12;
/// Electron antineutrino.
pub const PDG_ANTI_NU_E: i32 = -12;
/// Muon neutrino.
pub const PDG_NU_MU: i32 = 14;
/// Muon antineutrino.
pub const PDG_ANTI_NU_MU: i32 = -14;
/// Tau neutrino.
pub const PDG_NU_TAU: i32 = 16;
/// Tau antineutrino.
pub const PDG_ANTI_NU_TAU: i32 = -16;

/// Down quark.
pub const PDG_D_QUARK: i32 = 1;
/// Up quark.
pub const PDG_U_QUARK: i32 = 2;
/// Strange quark.
pub const PDG_S_QUARK: i32 = 3;
/// Charm quark.
pub const PDG_C_QUARK: i32 = 4;
/// Bottom quark.
pub const PDG_B_QUARK: i32 = 5;
/// Top quark.
pub const PDG_T_QUARK: i32 = 6;

/// Proton.
pub const PDG_PROTON: i32 = 2212;
/// Neutron.
pub const PDG_NEUTRON: i32 = 2112;

/// Positive pion.
pub const PDG_PI_PLUS: i32 = 211;
/// Neutral pion.
pub const PDG_PI_ZERO: i32 = 111;
/// Negative pion.
pub const PDG_PI_MINUS: i32 = -211;

const ION_BASE: i32 = 1_000_000_000;
const ION_MAX: i32 = 1_999_999_999;

/// Largest nucleon count the three-digit `AAA` field can hold.
pub const MAX_ION_A: i32 = 999;

/// Returns true for the three neutrino flavours.
pub fn is_neutrino(pdg: i32) -> bool {
    matches!(pdg, PDG_NU_E | PDG_NU_MU | PDG_NU_TAU)
}

/// Returns true for the three antineutrino flavours.
pub fn is_anti_neutrino(pdg: i32) -> bool {
    matches!(pdg, PDG_ANTI_NU_E | PDG_ANTI_NU_MU | PDG_ANTI_NU_TAU)
}

/// Returns true for d, u, s, c, b, t.
pub fn is_quark(pdg: i32) -> bool {
    (PDG_D_QUARK..=PDG_T_QUARK).contains(&pdg)
}

/// Returns true for the antiquarks of [`is_quark`].
pub fn is_anti_quark(pdg: i32) -> bool {
    (-PDG_T_QUARK..=-PDG_D_QUARK).contains(&pdg)
}

/// Returns true for the proton.
pub fn is_proton(pdg: i32) -> bool {
    pdg == PDG_PROTON
}

/// Returns true for the neutron.
pub fn is_neutron(pdg: i32) -> bool {
    pdg == PDG_NEUTRON
}

/// Returns true for either nucleon.
pub fn is_neutron_or_proton(pdg: i32) -> bool {
    is_proton(pdg) || is_neutron(pdg)
}

/// Returns true if the code follows the ion convention.
pub fn is_ion(pdg: i32) -> bool {
    pdg > ION_BASE && pdg < ION_MAX
}

/// Builds the ion code for a nucleus with `a` nucleons and `z` protons.
///
/// Returns `None` unless `0 <= z <= a <= MAX_ION_A`; other pairs do not fit
/// the `ZZZAAA` fields and would alias another nucleus.
pub fn ion_pdg_code(a: i32, z: i32) -> Option<i32> {
    if z < 0 || z > a || a > MAX_ION_A {
        return None;
    }
    Some(ION_BASE + z * 10_000 + a * 10)
}

/// Extracts Z from an ion code.
pub fn ion_pdg_code_to_z(pdg: i32) -> i32 {
    (pdg - ION_BASE) / 10_000
}

/// Extracts A from an ion code.
pub fn ion_pdg_code_to_a(pdg: i32) -> i32 {
    ((pdg - ION_BASE) % 10_000) / 10
}
