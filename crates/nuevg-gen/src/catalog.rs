//! Static single pion production channel tables.
//!
//! Each channel fixes the struck nucleon and the final-state nucleon and
//! pion. Tables are indexed by probe polarity and weak current; charged
//! current tables hold three channels and neutral current tables four.
//! Table order is the enumeration order and must stay stable.

use nuevg_core::pdg;
use nuevg_interaction::{InteractionType, XclsTag};
use serde::{Deserialize, Serialize};

/// Neutrino or antineutrino probe.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Polarity {
    /// ν_e, ν_μ, ν_τ.
    Neutrino,
    /// ν̄_e, ν̄_μ, ν̄_τ.
    AntiNeutrino,
}

impl Polarity {
    /// Classifies a probe code. Returns `None` for anything but (anti)neutrinos.
    pub fn of_probe(probe_pdg: i32) -> Option<Self> {
        if pdg::is_neutrino(probe_pdg) {
            Some(Polarity::Neutrino)
        } else if pdg::is_anti_neutrino(probe_pdg) {
            Some(Polarity::AntiNeutrino)
        } else {
            None
        }
    }
}

/// Weak current class selecting a channel table.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum CurrentType {
    /// W exchange.
    Charged,
    /// Z exchange.
    Neutral,
}

impl CurrentType {
    /// Short label, `cc` or `nc`.
    pub fn as_str(&self) -> &'static str {
        match self {
            CurrentType::Charged => "cc",
            CurrentType::Neutral => "nc",
        }
    }

    /// Matching interaction classification.
    pub fn interaction_type(&self) -> InteractionType {
        match self {
            CurrentType::Charged => InteractionType::WeakCC,
            CurrentType::Neutral => InteractionType::WeakNC,
        }
    }
}

/// Proton or neutron.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Nucleon {
    /// p
    Proton,
    /// n
    Neutron,
}

impl Nucleon {
    /// PDG code.
    pub fn pdg(&self) -> i32 {
        match self {
            Nucleon::Proton => pdg::PDG_PROTON,
            Nucleon::Neutron => pdg::PDG_NEUTRON,
        }
    }

    /// Electric charge in units of e.
    pub fn charge(&self) -> i32 {
        match self {
            Nucleon::Proton => 1,
            Nucleon::Neutron => 0,
        }
    }
}

/// Charged or neutral pion.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Pion {
    /// π+
    Plus,
    /// π0
    Zero,
    /// π−
    Minus,
}

impl Pion {
    /// PDG code.
    pub fn pdg(&self) -> i32 {
        match self {
            Pion::Plus => pdg::PDG_PI_PLUS,
            Pion::Zero => pdg::PDG_PI_ZERO,
            Pion::Minus => pdg::PDG_PI_MINUS,
        }
    }

    /// Electric charge in units of e.
    pub fn charge(&self) -> i32 {
        match self {
            Pion::Plus => 1,
            Pion::Zero => 0,
            Pion::Minus => -1,
        }
    }
}

/// One single pion production channel.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub struct SppChannel {
    /// Stable label, `<probe><nucleon>_<cc|nc>_<p n π+ π0 π−>`.
    pub code: &'static str,
    /// Nucleon that must be present in the target.
    pub struck: Nucleon,
    /// Final-state nucleon.
    pub final_nucleon: Nucleon,
    /// Final-state pion.
    pub final_pion: Pion,
}

const fn channel(
    code: &'static str,
    struck: Nucleon,
    final_nucleon: Nucleon,
    final_pion: Pion,
) -> SppChannel {
    SppChannel {
        code,
        struck,
        final_nucleon,
        final_pion,
    }
}

use self::Nucleon::{Neutron as N, Proton as P};
use self::Pion::{Minus, Plus, Zero};

const NU_CC: [SppChannel; 3] = [
    channel("vp_cc_10100", P, P, Plus),
    channel("vn_cc_10010", N, P, Zero),
    channel("vn_cc_01100", N, N, Plus),
];

const NU_NC: [SppChannel; 4] = [
    channel("vp_nc_10010", P, P, Zero),
    channel("vp_nc_01100", P, N, Plus),
    channel("vn_nc_01010", N, N, Zero),
    channel("vn_nc_10001", N, P, Minus),
];

const NUBAR_CC: [SppChannel; 3] = [
    channel("vbn_cc_01001", N, N, Minus),
    channel("vbp_cc_01010", P, N, Zero),
    channel("vbp_cc_10001", P, P, Minus),
];

const NUBAR_NC: [SppChannel; 4] = [
    channel("vbp_nc_10010", P, P, Zero),
    channel("vbp_nc_01100", P, N, Plus),
    channel("vbn_nc_01010", N, N, Zero),
    channel("vbn_nc_10001", N, P, Minus),
];

/// Ordered channel table for a probe polarity and weak current.
pub fn spp_channels(polarity: Polarity, current: CurrentType) -> &'static [SppChannel] {
    match (polarity, current) {
        (Polarity::Neutrino, CurrentType::Charged) => &NU_CC,
        (Polarity::Neutrino, CurrentType::Neutral) => &NU_NC,
        (Polarity::AntiNeutrino, CurrentType::Charged) => &NUBAR_CC,
        (Polarity::AntiNeutrino, CurrentType::Neutral) => &NUBAR_NC,
    }
}

impl SppChannel {
    /// PDG code of the nucleon that must be struck.
    pub fn init_state_nucleon(&self) -> i32 {
        self.struck.pdg()
    }

    /// PDG code of the final-state nucleon.
    pub fn fin_state_nucleon(&self) -> i32 {
        self.final_nucleon.pdg()
    }

    /// PDG code of the final-state pion.
    pub fn fin_state_pion(&self) -> i32 {
        self.final_pion.pdg()
    }

    /// Checks hadronic charge balance for the given probe and current.
    ///
    /// A charged current moves one unit of charge from the lepton to the
    /// hadronic system (+1 for neutrinos, −1 for antineutrinos); a neutral
    /// current moves none.
    pub fn conserves_charge(&self, polarity: Polarity, current: CurrentType) -> bool {
        let transfer = match (polarity, current) {
            (_, CurrentType::Neutral) => 0,
            (Polarity::Neutrino, CurrentType::Charged) => 1,
            (Polarity::AntiNeutrino, CurrentType::Charged) => -1,
        };
        self.struck.charge() + transfer == self.final_nucleon.charge() + self.final_pion.charge()
    }

    /// Exclusive tag with exactly one nucleon and exactly one pion.
    pub fn excl_tag(&self) -> XclsTag {
        let mut tag = XclsTag::new();
        match self.final_nucleon {
            Nucleon::Proton => tag.set_n_nucleons(1, 0),
            Nucleon::Neutron => tag.set_n_nucleons(0, 1),
        }
        match self.final_pion {
            Pion::Plus => tag.set_n_pions(1, 0, 0),
            Pion::Zero => tag.set_n_pions(0, 1, 0),
            Pion::Minus => tag.set_n_pions(0, 0, 1),
        }
        tag
    }
}
