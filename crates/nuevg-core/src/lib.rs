#![deny(missing_docs)]
#![doc = "Core types shared by the nuevg interaction engine: errors, particle codes, the particle database seam, kinematics and deterministic randomness."]

pub mod database;
pub mod errors;
mod kinematics;
pub mod pdg;
pub mod rng;

pub use database::{ParticleData, ParticleDatabase, StaticParticleDatabase};
pub use errors::{ErrorInfo, EvgError};
pub use kinematics::FourMomentum;
pub use rng::{derive_substream_seed, RngHandle};
