use std::sync::Arc;

use nuevg_core::pdg::{PDG_MUON, PDG_NU_MU};
use nuevg_core::{ParticleDatabase, StaticParticleDatabase};
use nuevg_gen::{
    DfrcInteractionListGenerator, GeneratorConfig, InteractionGeneratorMap,
    InteractionListGenerator, RsppInteractionListGenerator,
};
use nuevg_interaction::{InitialState, Target};

struct Fixture {
    cc: RsppInteractionListGenerator,
    nc: RsppInteractionListGenerator,
    dfrc: DfrcInteractionListGenerator,
    init_state: InitialState,
}

fn fixture(probe: i32) -> Fixture {
    let db: Arc<dyn ParticleDatabase> = Arc::new(StaticParticleDatabase::standard());
    let target = Target::from_za(6, 12, db.as_ref());
    Fixture {
        cc: RsppInteractionListGenerator::new(&GeneratorConfig::charged_current(), db.clone())
            .unwrap(),
        nc: RsppInteractionListGenerator::new(&GeneratorConfig::neutral_current(), db).unwrap(),
        dfrc: DfrcInteractionListGenerator::new(),
        init_state: InitialState::new(probe, target),
    }
}

#[test]
fn build_preserves_list_order() {
    let fx = fixture(PDG_NU_MU);
    let cc = fx.cc.generate(&fx.init_state).unwrap();
    let nc = fx.nc.generate(&fx.init_state).unwrap();
    let expected: Vec<_> = cc.iter().chain(nc.iter()).cloned().collect();

    let map = InteractionGeneratorMap::build([cc, nc]);
    assert_eq!(map.size(), 7);
    assert_eq!(map.interaction_list(), expected.as_slice());
    assert_eq!(map.generator_of(0), Some("list[0]"));
    assert_eq!(map.generator_of(2), Some("list[0]"));
    assert_eq!(map.generator_of(3), Some("list[1]"));
    assert_eq!(map.generator_of(7), None);
    assert_eq!(&map[6], expected.last().unwrap());
}

#[test]
fn duplicates_are_kept() {
    let fx = fixture(PDG_NU_MU);
    let cc = fx.cc.generate(&fx.init_state).unwrap();
    let map = InteractionGeneratorMap::build([cc.clone(), cc]);
    assert_eq!(map.size(), 6);
    assert_eq!(map[0], map[3]);
}

#[test]
fn from_generators_skips_failures_and_keys_by_name() {
    let fx = fixture(PDG_NU_MU);
    let generators: [&dyn InteractionListGenerator; 3] = [&fx.dfrc, &fx.cc, &fx.nc];
    let map = InteractionGeneratorMap::from_generators(&fx.init_state, &generators);
    assert_eq!(map.size(), 7);
    assert_eq!(map.sources().collect::<Vec<_>>(), ["dfrc", "rspp", "rspp"]);
    assert_eq!(map.generator_of(0), Some("rspp"));

    let counts = map.process_counts();
    assert_eq!(counts["res/weak[cc]"], 3);
    assert_eq!(counts["res/weak[nc]"], 4);
}

#[test]
fn unrecognized_probe_leaves_only_placeholder_lists() {
    let fx = fixture(PDG_MUON);
    let generators: [&dyn InteractionListGenerator; 3] = [&fx.cc, &fx.nc, &fx.dfrc];
    let map = InteractionGeneratorMap::from_generators(&fx.init_state, &generators);
    assert!(map.is_empty());
    assert_eq!(map.sources().collect::<Vec<_>>(), ["dfrc"]);
}

#[test]
fn canonical_hash_tracks_enumeration_order() {
    let fx = fixture(PDG_NU_MU);
    let cc = fx.cc.generate(&fx.init_state).unwrap();
    let nc = fx.nc.generate(&fx.init_state).unwrap();

    let a = InteractionGeneratorMap::build([cc.clone(), nc.clone()]);
    let b = InteractionGeneratorMap::build([cc.clone(), nc.clone()]);
    let swapped = InteractionGeneratorMap::build([nc, cc]);

    assert_eq!(a.canonical_hash(), b.canonical_hash());
    assert_eq!(a.canonical_hash().len(), 64);
    assert!(a
        .canonical_hash()
        .chars()
        .all(|c| c.is_ascii_digit() || ('a'..='f').contains(&c)));
    assert_ne!(a.canonical_hash(), swapped.canonical_hash());
}

#[test]
fn empty_build_has_no_interactions() {
    let map = InteractionGeneratorMap::build(Vec::new());
    assert_eq!(map.size(), 0);
    assert!(map.get(0).is_none());
    assert!(map.process_counts().is_empty());
}
