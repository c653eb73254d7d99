use nuevg_core::EvgError;
use nuevg_interaction::InitialState;

use crate::list::InteractionList;

/// Enumerates candidate interactions for an initial state.
///
/// The three outcomes carry different meanings:
/// - `Err(_)`: this generator cannot handle the initial state;
/// - `Ok(empty)`: handled, but the process is deliberately not modelled;
/// - `Ok(non-empty)`: the candidates, in a stable order.
pub trait InteractionListGenerator: Send + Sync {
    /// Stable name used to key the generator's contribution in an aggregate.
    fn name(&self) -> &str;

    /// Produces a freshly owned interaction list.
    fn generate(&self, init_state: &InitialState) -> Result<InteractionList, EvgError>;
}
