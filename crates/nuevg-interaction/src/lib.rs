#![deny(missing_docs)]
#![doc = "Value types describing a neutrino interaction: the target, the initial state, the process and the exclusive final state."]

/// Probe + target pairing.
pub mod initial_state;
/// Interaction descriptor combining state, process and final-state tag.
pub mod interaction;
/// Scattering mechanism and current classification.
pub mod process;
pub mod target;
/// Exclusive final-state tag.
pub mod xcls;

pub use initial_state::InitialState;
pub use interaction::Interaction;
pub use process::{InteractionType, ProcessInfo, ScatteringType};
pub use target::{Target, NUCLEON_MASS};
pub use xcls::XclsTag;
