#![allow(missing_docs)]

use biosim::simulation::ecosystem::{Simulation, Snapshot};
use biosim::simulation::environment::Environment;
use biosim::simulation::geometric_utils::{is_inside_world, position};
use biosim::simulation::mutation::{BehaviorBiased, MutationPolicy, RandomWalk};
use biosim::simulation::organism::{Action, Organism, OrganismId, OrganismSettings};
use biosim::simulation::params::Params;
use biosim::simulation::traits::Traits;
use proptest::prelude::*;
use rand::SeedableRng;
use rand::rngs::StdRng;

fn settings_strategy() -> impl Strategy<Value = OrganismSettings> {
    (
        prop::array::uniform7(0.0f32..=1.0),
        0.2f32..3.0,
    )
        .prop_map(|(t, size)| OrganismSettings {
            motility: Some(t[0]),
            photosynthesis: Some(t[1]),
            predation: Some(t[2]),
            defense: Some(t[3]),
            sensory: Some(t[4]),
            reproduction: Some(t[5]),
            metabolism: Some(t[6]),
            size: Some(size),
        })
}

proptest! {
    #[test]
    fn traits_always_normalized(values in prop::array::uniform7(-5.0f32..5.0)) {
        let traits = Traits::new(
            values[0], values[1], values[2], values[3], values[4], values[5], values[6],
        );
        prop_assert!(traits.is_normalized());
    }

    #[test]
    fn inherited_traits_stay_normalized(
        values in prop::array::uniform7(0.0f32..=1.0),
        seed in any::<u64>(),
    ) {
        let parent = Traits::new(
            values[0], values[1], values[2], values[3], values[4], values[5], values[6],
        );
        let mut rng = StdRng::seed_from_u64(seed);
        let walk = RandomWalk { rate: 1.0, scale: 0.3 };
        let biased = BehaviorBiased { scale: 0.3, bias: 1.0 };
        let actions = [Action::Moved, Action::Predation, Action::Defended];

        prop_assert!(walk.inherit(&parent, &actions, &mut rng).is_normalized());
        prop_assert!(biased.inherit(&parent, &actions, &mut rng).is_normalized());
    }

    #[test]
    fn movement_stays_in_world(
        settings in settings_strategy(),
        coords in prop::array::uniform3(-50.0f32..=50.0),
        seed in any::<u64>(),
    ) {
        let params = Params::default();
        let mut rng = StdRng::seed_from_u64(seed);
        let mut organism = Organism::founder(
            OrganismId(0),
            &settings,
            position(coords[0], coords[1], coords[2]),
            &params,
        );

        for _ in 0..20 {
            organism.move_randomly(&params, &mut rng);
            prop_assert!(is_inside_world(&organism.pos, params.half_extent()));
        }
    }

    #[test]
    fn generations_preserve_bounds(
        population in prop::collection::vec(settings_strategy(), 0..12),
        seed in any::<u64>(),
    ) {
        let mut sim = Simulation::with_seed(Params::default(), seed).unwrap();
        let mut snapshot = Snapshot::new(Environment::default());
        for settings in &population {
            sim.create_organism(&mut snapshot, settings);
        }

        let mut current = snapshot;
        for _ in 0..4 {
            let before = current.population();
            current = sim.advance_one_generation(&current);
            prop_assert!(current.population() <= 2 * before);
            for organism in &current.organisms {
                prop_assert!(organism.traits.is_normalized());
                prop_assert!(is_inside_world(&organism.pos, sim.params().half_extent()));
                prop_assert!(organism.size > 0.0);
            }
            let resources = current.environment.resources;
            prop_assert!(resources.organic <= 100.0 && resources.minerals <= 100.0);
        }
    }
}
