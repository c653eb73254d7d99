//! Aggregation of interaction lists into one indexable sampling space.

use std::collections::BTreeMap;
use std::ops::{Index, Range};

use log::{info, warn};
use nuevg_interaction::{InitialState, Interaction};
use serde::Serialize;
use sha2::{Digest, Sha256};

use crate::generator::InteractionListGenerator;
use crate::list::InteractionList;

#[derive(Debug, Clone, PartialEq, Serialize)]
struct Segment {
    source: String,
    span: Range<usize>,
}

/// Flattened, read-only union of interaction lists.
///
/// Lists are appended in the order supplied, each keeping its internal order.
/// Identical channels coming from different lists are all kept.
#[derive(Debug, Clone, PartialEq, Default, Serialize)]
pub struct InteractionGeneratorMap {
    interactions: Vec<Interaction>,
    segments: Vec<Segment>,
}

impl InteractionGeneratorMap {
    /// Aggregates anonymous lists. Each list is keyed `list[<position>]`.
    pub fn build<I>(lists: I) -> Self
    where
        I: IntoIterator<Item = InteractionList>,
    {
        let mut map = Self::default();
        for (idx, list) in lists.into_iter().enumerate() {
            map.absorb(format!("list[{idx}]"), list);
        }
        map
    }

    /// Runs every generator on `init_state` and aggregates the lists it
    /// returns, keyed by generator name. Generators answering with an error
    /// cannot handle this initial state and contribute nothing.
    pub fn from_generators(
        init_state: &InitialState,
        generators: &[&dyn InteractionListGenerator],
    ) -> Self {
        let mut map = Self::default();
        for generator in generators {
            match generator.generate(init_state) {
                Ok(list) => {
                    info!(
                        "event=generator_map module=map status=absorbed generator={} size={}",
                        generator.name(),
                        list.len()
                    );
                    map.absorb(generator.name().to_string(), list);
                }
                Err(err) => {
                    warn!(
                        "event=generator_map module=map status=skipped generator={} code={}",
                        generator.name(),
                        err.code()
                    );
                }
            }
        }
        map
    }

    fn absorb(&mut self, source: String, list: InteractionList) {
        let start = self.interactions.len();
        self.interactions.extend(list);
        self.segments.push(Segment {
            source,
            span: start..self.interactions.len(),
        });
    }

    /// Number of aggregated interactions.
    pub fn size(&self) -> usize {
        self.interactions.len()
    }

    /// Returns true if nothing was aggregated.
    pub fn is_empty(&self) -> bool {
        self.interactions.is_empty()
    }

    /// Flattened, ordered view.
    pub fn interaction_list(&self) -> &[Interaction] {
        &self.interactions
    }

    /// Interaction at `index`.
    pub fn get(&self, index: usize) -> Option<&Interaction> {
        self.interactions.get(index)
    }

    /// Iterates in aggregation order.
    pub fn iter(&self) -> std::slice::Iter<'_, Interaction> {
        self.interactions.iter()
    }

    /// Key of the list that contributed the interaction at `index`.
    pub fn generator_of(&self, index: usize) -> Option<&str> {
        self.segments
            .iter()
            .find(|segment| segment.span.contains(&index))
            .map(|segment| segment.source.as_str())
    }

    /// Keys of the absorbed lists, in aggregation order. Lists that were
    /// empty are still listed.
    pub fn sources(&self) -> impl Iterator<Item = &str> + '_ {
        self.segments.iter().map(|segment| segment.source.as_str())
    }

    /// Number of interactions per process signature (`scattering/current`).
    pub fn process_counts(&self) -> BTreeMap<String, usize> {
        let mut counts = BTreeMap::new();
        for interaction in &self.interactions {
            *counts
                .entry(interaction.process_info().to_string())
                .or_insert(0) += 1;
        }
        counts
    }

    /// SHA-256 over the ordered entries; equal hashes mean equal enumeration.
    pub fn canonical_hash(&self) -> String {
        let mut hasher = Sha256::new();
        hasher.update((self.interactions.len() as u64).to_le_bytes());
        for interaction in &self.interactions {
            let line = interaction.as_string();
            hasher.update((line.len() as u64).to_le_bytes());
            hasher.update(line.as_bytes());
        }
        hex::encode(hasher.finalize())
    }
}

impl Index<usize> for InteractionGeneratorMap {
    type Output = Interaction;

    fn index(&self, index: usize) -> &Self::Output {
        &self.interactions[index]
    }
}
