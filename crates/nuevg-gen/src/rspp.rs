use std::sync::Arc;

use log::{error, info, warn};
use nuevg_core::{ErrorInfo, EvgError, ParticleDatabase};
use nuevg_interaction::{InitialState, Interaction, ProcessInfo, ScatteringType};

use crate::catalog::{spp_channels, CurrentType, Nucleon, Polarity, SppChannel};
use crate::config::GeneratorConfig;
use crate::generator::InteractionListGenerator;
use crate::list::InteractionList;

/// Resonant single pion production generator.
///
/// Each instance enumerates one weak current. For a recognised probe it walks
/// the catalog table for (probe polarity, current) and keeps every channel
/// whose struck nucleon the target actually contains.
pub struct RsppInteractionListGenerator {
    current: Option<CurrentType>,
    db: Arc<dyn ParticleDatabase>,
}

impl RsppInteractionListGenerator {
    /// Generator name used as aggregation key.
    pub const NAME: &'static str = "rspp";

    /// Builds a generator from a validated configuration.
    pub fn new(
        config: &GeneratorConfig,
        db: Arc<dyn ParticleDatabase>,
    ) -> Result<Self, EvgError> {
        let current = config.current()?;
        Ok(Self { current, db })
    }

    /// Configured current, if any.
    pub fn current(&self) -> Option<CurrentType> {
        self.current
    }

    fn has_nucleon(init_state: &InitialState, nucleon: Nucleon) -> bool {
        let target = init_state.target();
        match nucleon {
            Nucleon::Proton => target.z() > 0,
            Nucleon::Neutron => target.n() > 0,
        }
    }

    fn build_interaction(
        &self,
        init_state: &InitialState,
        current: CurrentType,
        channel: &SppChannel,
    ) -> Interaction {
        let proc_info = ProcessInfo::new(ScatteringType::SinglePion, current.interaction_type());
        let mut interaction = Interaction::new(init_state.clone(), proc_info);
        interaction
            .init_state_mut()
            .target_mut()
            .set_struck_nucleon(channel.init_state_nucleon(), self.db.as_ref());
        interaction.set_excl_tag(channel.excl_tag());
        interaction
    }
}

impl InteractionListGenerator for RsppInteractionListGenerator {
    fn name(&self) -> &str {
        Self::NAME
    }

    fn generate(&self, init_state: &InitialState) -> Result<InteractionList, EvgError> {
        info!(
            "event=interaction_list module=rspp status=start init_state={}",
            init_state.as_string()
        );

        let probe = init_state.probe_pdg();
        let Some(polarity) = Polarity::of_probe(probe) else {
            warn!(
                "event=interaction_list module=rspp status=unrecognized_probe init_state={}",
                init_state.as_string()
            );
            let info = ErrorInfo::new(
                "unrecognized-probe",
                "probe is neither a neutrino nor an antineutrino",
            )
            .with_context("probe", probe.to_string())
            .with_context("generator", Self::NAME);
            return Err(EvgError::Generator(info));
        };

        let mut list = InteractionList::new();
        if let Some(current) = self.current {
            for channel in spp_channels(polarity, current) {
                if Self::has_nucleon(init_state, channel.struck) {
                    list.push(self.build_interaction(init_state, current, channel));
                }
            }
        }

        if list.is_empty() {
            error!(
                "event=interaction_list module=rspp status=no_channels init_state={}",
                init_state.as_string()
            );
            let target = init_state.target();
            return Err(EvgError::Generator(
                ErrorInfo::new("no-admissible-channel", "no channel survives target filtering")
                    .with_context("probe", probe.to_string())
                    .with_context("z", target.z().to_string())
                    .with_context("a", target.a().to_string())
                    .with_context("current", self.current.map_or("none", |c| c.as_str())),
            ));
        }

        info!(
            "event=interaction_list module=rspp status=done channels={}",
            list.len()
        );
        Ok(list)
    }
}
