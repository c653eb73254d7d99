use log::{error, info};
use nuevg_core::{ErrorInfo, EvgError, FourMomentum, RngHandle};

use crate::map::InteractionGeneratorMap;
use crate::record::EventRecord;

/// Draws one interaction from an aggregate and materialises it as an event.
pub trait InteractionSelector: Send + Sync {
    /// Selects an interaction, stamps the probe four-momentum on a copy and
    /// wraps the copy in a fresh [`EventRecord`]. The aggregate is never
    /// modified.
    fn select(
        &self,
        map: Option<&InteractionGeneratorMap>,
        probe_p4: &FourMomentum,
        rng: &mut RngHandle,
    ) -> Result<EventRecord, EvgError>;
}

/// Uniform selector over the flattened index space.
///
/// Every aggregated interaction is equally likely regardless of its cross
/// section, so the resulting event sample is not physically distributed.
/// A rate-weighted selector implements the same trait.
#[derive(Debug, Clone, Copy, Default)]
pub struct ToyInteractionSelector;

impl ToyInteractionSelector {
    /// Creates the selector.
    pub fn new() -> Self {
        Self
    }
}

impl InteractionSelector for ToyInteractionSelector {
    fn select(
        &self,
        map: Option<&InteractionGeneratorMap>,
        probe_p4: &FourMomentum,
        rng: &mut RngHandle,
    ) -> Result<EventRecord, EvgError> {
        let Some(map) = map else {
            error!("event=select_interaction module=selector status=null_map");
            return Err(EvgError::Selector(ErrorInfo::new(
                "null-aggregate",
                "no interaction generator map supplied",
            )));
        };

        let Some(index) = rng.index(map.size()) else {
            error!("event=select_interaction module=selector status=empty_map");
            return Err(EvgError::Selector(
                ErrorInfo::new("empty-aggregate", "interaction generator map is empty")
                    .with_hint("check that at least one generator handles the initial state"),
            ));
        };

        let mut selected = map[index].clone();
        selected.init_state_mut().set_probe_p4(*probe_p4);
        info!(
            "event=select_interaction module=selector status=selected index={} size={} interaction={}",
            index,
            map.size(),
            selected.as_string()
        );

        Ok(EventRecord::new(selected))
    }
}
