#![deny(missing_docs)]
#![doc = "Channel catalogs, interaction list generators, aggregation and uniform selection of neutrino interactions."]

pub mod catalog;
/// Generator configuration and its YAML loader.
pub mod config;
/// Diffractive generator placeholder.
pub mod dfrc;
/// Generator capability trait.
pub mod generator;
/// Ordered interaction lists.
pub mod list;
pub mod map;
/// Event record produced by selection.
pub mod record;
/// Resonant single pion production generator.
pub mod rspp;
/// Selection capability and the uniform selector.
pub mod selector;

pub use catalog::{spp_channels, CurrentType, Nucleon, Pion, Polarity, SppChannel};
pub use config::GeneratorConfig;
pub use dfrc::DfrcInteractionListGenerator;
pub use generator::InteractionListGenerator;
pub use list::InteractionList;
pub use map::InteractionGeneratorMap;
pub use record::EventRecord;
pub use rspp::RsppInteractionListGenerator;
pub use selector::{InteractionSelector, ToyInteractionSelector};
