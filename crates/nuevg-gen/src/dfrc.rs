use log::info;
use nuevg_core::EvgError;
use nuevg_interaction::InitialState;

use crate::generator::InteractionListGenerator;
use crate::list::InteractionList;

/// Diffractive scattering generator.
///
/// No diffractive channels are modelled yet, so every initial state is
/// accepted and answered with an empty list.
#[derive(Debug, Clone, Copy, Default)]
pub struct DfrcInteractionListGenerator;

impl DfrcInteractionListGenerator {
    /// Generator name used as aggregation key.
    pub const NAME: &'static str = "dfrc";

    /// Creates the generator.
    pub fn new() -> Self {
        Self
    }
}

impl InteractionListGenerator for DfrcInteractionListGenerator {
    fn name(&self) -> &str {
        Self::NAME
    }

    fn generate(&self, init_state: &InitialState) -> Result<InteractionList, EvgError> {
        info!(
            "event=interaction_list module=dfrc status=unmodelled init_state={}",
            init_state.as_string()
        );
        Ok(InteractionList::new())
    }
}
