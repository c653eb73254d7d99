use std::ops::Index;

use nuevg_interaction::Interaction;
use serde::{Deserialize, Serialize};

/// Ordered interactions produced by one generator call.
///
/// Insertion order defines the selection index space.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct InteractionList {
    interactions: Vec<Interaction>,
}

impl InteractionList {
    /// Creates an empty list.
    pub fn new() -> Self {
        Self::default()
    }

    /// Appends an interaction.
    pub fn push(&mut self, interaction: Interaction) {
        self.interactions.push(interaction);
    }

    /// Number of interactions.
    pub fn len(&self) -> usize {
        self.interactions.len()
    }

    /// Returns true if the list holds no interactions.
    pub fn is_empty(&self) -> bool {
        self.interactions.is_empty()
    }

    /// Interaction at `index`.
    pub fn get(&self, index: usize) -> Option<&Interaction> {
        self.interactions.get(index)
    }

    /// Iterates in insertion order.
    pub fn iter(&self) -> std::slice::Iter<'_, Interaction> {
        self.interactions.iter()
    }

    /// Slice view in insertion order.
    pub fn as_slice(&self) -> &[Interaction] {
        &self.interactions
    }
}

impl Index<usize> for InteractionList {
    type Output = Interaction;

    fn index(&self, index: usize) -> &Self::Output {
        &self.interactions[index]
    }
}

impl IntoIterator for InteractionList {
    type Item = Interaction;
    type IntoIter = std::vec::IntoIter<Interaction>;

    fn into_iter(self) -> Self::IntoIter {
        self.interactions.into_iter()
    }
}

impl<'a> IntoIterator for &'a InteractionList {
    type Item = &'a Interaction;
    type IntoIter = std::slice::Iter<'a, Interaction>;

    fn into_iter(self) -> Self::IntoIter {
        self.interactions.iter()
    }
}

impl FromIterator<Interaction> for InteractionList {
    fn from_iter<I: IntoIterator<Item = Interaction>>(iter: I) -> Self {
        Self {
            interactions: iter.into_iter().collect(),
        }
    }
}
