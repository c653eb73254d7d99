use std::fmt;

use serde::{Deserialize, Serialize};

use crate::initial_state::InitialState;
use crate::process::ProcessInfo;
use crate::xcls::XclsTag;

/// One candidate reaction: initial state, process and final-state tag.
///
/// Everything is held by value, so `clone` is a deep copy.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Interaction {
    init_state: InitialState,
    process_info: ProcessInfo,
    excl_tag: XclsTag,
}

impl Interaction {
    /// Creates an inclusive interaction for the given process.
    pub fn new(init_state: InitialState, process_info: ProcessInfo) -> Self {
        Self {
            init_state,
            process_info,
            excl_tag: XclsTag::default(),
        }
    }

    /// Initial state.
    pub fn init_state(&self) -> &InitialState {
        &self.init_state
    }

    /// Mutable initial state.
    pub fn init_state_mut(&mut self) -> &mut InitialState {
        &mut self.init_state
    }

    /// Process descriptor.
    pub fn process_info(&self) -> &ProcessInfo {
        &self.process_info
    }

    /// Exclusive final-state tag.
    pub fn excl_tag(&self) -> &XclsTag {
        &self.excl_tag
    }

    /// Replaces the exclusive final-state tag.
    pub fn set_excl_tag(&mut self, tag: XclsTag) {
        self.excl_tag = tag;
    }

    /// Compact single-line form used in logs and hashes.
    pub fn as_string(&self) -> String {
        format!(
            "{};proc:{};xcls:{}",
            self.init_state.as_string(),
            self.process_info,
            self.excl_tag
        )
    }
}

impl fmt::Display for Interaction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.init_state)?;
        writeln!(f, " process = {}", self.process_info)?;
        write!(f, " exclusive tag = {}", self.excl_tag)
    }
}
