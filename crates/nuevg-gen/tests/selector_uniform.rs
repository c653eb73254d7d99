use std::sync::Arc;

use nuevg_core::pdg::PDG_NU_MU;
use nuevg_core::{FourMomentum, ParticleDatabase, RngHandle, StaticParticleDatabase};
use nuevg_gen::{
    GeneratorConfig, InteractionGeneratorMap, InteractionList, InteractionListGenerator,
    InteractionSelector, RsppInteractionListGenerator, ToyInteractionSelector,
};
use nuevg_interaction::{InitialState, Target};
use proptest::prelude::*;

fn probe_p4() -> FourMomentum {
    FourMomentum::new(0.0, 0.0, 1.5, 1.5)
}

fn list_for(z: i32, a: i32, config: GeneratorConfig) -> InteractionList {
    let db: Arc<dyn ParticleDatabase> = Arc::new(StaticParticleDatabase::standard());
    let init_state = InitialState::new(PDG_NU_MU, Target::from_za(z, a, db.as_ref()));
    RsppInteractionListGenerator::new(&config, db)
        .unwrap()
        .generate(&init_state)
        .unwrap()
}

fn carbon_map() -> InteractionGeneratorMap {
    InteractionGeneratorMap::build([
        list_for(6, 12, GeneratorConfig::charged_current()),
        list_for(6, 12, GeneratorConfig::neutral_current()),
    ])
}

#[test]
fn null_map_is_rejected() {
    let mut rng = RngHandle::from_seed(1);
    let err = ToyInteractionSelector::new()
        .select(None, &probe_p4(), &mut rng)
        .unwrap_err();
    assert_eq!(err.code(), "null-aggregate");
}

#[test]
fn empty_map_is_rejected() {
    let mut rng = RngHandle::from_seed(1);
    let map = InteractionGeneratorMap::build([InteractionList::new()]);
    let err = ToyInteractionSelector::new()
        .select(Some(&map), &probe_p4(), &mut rng)
        .unwrap_err();
    assert_eq!(err.code(), "empty-aggregate");
}

#[test]
fn selected_interaction_is_a_stamped_copy() {
    let map = carbon_map();
    let snapshot = map.clone();
    let mut rng = RngHandle::from_seed(5);

    let mut record = ToyInteractionSelector::new()
        .select(Some(&map), &probe_p4(), &mut rng)
        .unwrap();
    assert_eq!(record.summary().init_state().probe_p4(), &probe_p4());

    let mut expected = record.summary().clone();
    expected.init_state_mut().set_probe_p4(FourMomentum::default());
    assert!(map.iter().any(|interaction| *interaction == expected));

    record
        .summary_mut()
        .init_state_mut()
        .target_mut()
        .set_struck_nucleon_p4(FourMomentum::new(0.2, 0.0, 0.0, 0.96));
    assert_eq!(map, snapshot);
    for interaction in map.iter() {
        assert_eq!(interaction.init_state().probe_p4(), &FourMomentum::default());
    }
}

#[test]
fn single_entry_is_always_chosen() {
    let single = list_for(1, 1, GeneratorConfig::charged_current());
    assert_eq!(single.len(), 1);
    let map = InteractionGeneratorMap::build([single]);
    let mut rng = RngHandle::from_seed(99);
    for _ in 0..50 {
        let record = ToyInteractionSelector::new()
            .select(Some(&map), &probe_p4(), &mut rng)
            .unwrap();
        assert_eq!(record.summary().excl_tag(), map[0].excl_tag());
    }
}

#[test]
fn selection_is_roughly_uniform() {
    let map = carbon_map();
    let mut rng = RngHandle::from_seed(2024);
    let mut hits = vec![0usize; map.size()];
    let trials = 14_000;
    for _ in 0..trials {
        let record = ToyInteractionSelector::new()
            .select(Some(&map), &probe_p4(), &mut rng)
            .unwrap();
        let mut chosen = record.into_summary();
        chosen.init_state_mut().set_probe_p4(FourMomentum::default());
        let index = map.iter().position(|i| *i == chosen).unwrap();
        hits[index] += 1;
    }
    let expected = trials / map.size();
    for count in hits {
        assert!(
            count > expected * 8 / 10 && count < expected * 12 / 10,
            "count {count} too far from {expected}"
        );
    }
}

proptest! {
    #[test]
    fn same_seed_same_selection(seed in any::<u64>()) {
        let map = carbon_map();
        let selector = ToyInteractionSelector::new();
        let mut rng_a = RngHandle::from_seed(seed);
        let mut rng_b = RngHandle::from_seed(seed);
        let a = selector.select(Some(&map), &probe_p4(), &mut rng_a).unwrap();
        let b = selector.select(Some(&map), &probe_p4(), &mut rng_b).unwrap();
        prop_assert_eq!(a, b);
    }
}
