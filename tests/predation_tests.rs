#![allow(missing_docs)]
#![allow(clippy::float_cmp)]

use biosim::simulation::geometric_utils::position;
use biosim::simulation::organism::{Action, Organism, OrganismId, OrganismSettings};
use biosim::simulation::params::Params;
use biosim::simulation::predation::{
    PredationOutcome, energy_from_prey, resolve_predation, select_prey,
};
use rand::SeedableRng;
use rand::rngs::StdRng;

fn create_test_params() -> Params {
    Params::default()
}

fn create_predator(predation: f32) -> Organism {
    let settings = OrganismSettings {
        predation: Some(predation),
        sensory: Some(1.0),
        size: Some(2.0),
        ..OrganismSettings::default()
    };
    Organism::founder(OrganismId(100), &settings, position(0.0, 0.0, 0.0), &create_test_params())
}

fn create_prey(id: u64, defense: f32, size: f32, x: f32) -> Organism {
    let settings = OrganismSettings {
        defense: Some(defense),
        size: Some(size),
        ..OrganismSettings::default()
    };
    Organism::founder(OrganismId(id), &settings, position(x, 0.0, 0.0), &create_test_params())
}

#[test]
fn test_successful_predation_transfers_energy() {
    let params = create_test_params();
    let mut rng = StdRng::seed_from_u64(21);
    let mut predator = create_predator(1.0);
    let mut pool = vec![create_prey(1, 0.0, 1.0, 1.0)];
    pool[0].energy = 40.0;

    let before = predator.energy;
    let outcome = resolve_predation(&mut predator, &mut pool, &params, &mut rng);

    let expected_gain = 40.0 * 0.7 + 1.0 * 3.0;
    assert_eq!(
        outcome,
        PredationOutcome::Consumed {
            prey: OrganismId(1),
            energy_gained: expected_gain,
        }
    );
    assert!((predator.energy - (before + expected_gain)).abs() < 1e-4);
    assert!(pool.is_empty());
    assert_eq!(predator.actions, vec![Action::Predation]);
}

#[test]
fn test_energy_from_prey_formula() {
    let params = create_test_params();
    let mut prey = create_prey(1, 0.0, 1.5, 1.0);
    prey.energy = 10.0;

    assert!((energy_from_prey(&prey, &params) - (7.0 + 4.5)).abs() < 1e-5);
}

#[test]
fn test_predation_skipped_without_ability_or_energy() {
    let params = create_test_params();
    let mut rng = StdRng::seed_from_u64(22);
    let mut pool = vec![create_prey(1, 0.0, 1.0, 1.0)];

    let mut harmless = create_predator(0.0);
    assert_eq!(
        resolve_predation(&mut harmless, &mut pool, &params, &mut rng),
        PredationOutcome::Skipped
    );

    let mut exhausted = create_predator(1.0);
    exhausted.energy = 0.0;
    assert_eq!(
        resolve_predation(&mut exhausted, &mut pool, &params, &mut rng),
        PredationOutcome::Skipped
    );

    assert_eq!(pool.len(), 1);
    assert!(pool[0].actions.is_empty());
}

#[test]
fn test_prey_out_of_sensory_range() {
    let params = create_test_params();
    let mut rng = StdRng::seed_from_u64(23);
    let mut predator = create_predator(1.0);
    // sensory 1.0 * radius 10.0
    let mut pool = vec![create_prey(1, 0.0, 1.0, 10.5)];

    assert_eq!(
        resolve_predation(&mut predator, &mut pool, &params, &mut rng),
        PredationOutcome::NoPrey
    );
    assert_eq!(pool.len(), 1);
    assert!(predator.actions.is_empty());
}

#[test]
fn test_prey_too_large() {
    let params = create_test_params();
    let predator = create_predator(1.0);

    // limit is 2.0 * 1.2 = 2.4, exclusive
    let too_big = vec![create_prey(1, 0.0, 2.4, 1.0)];
    assert_eq!(select_prey(&predator, &too_big, &params), None);

    let just_fits = vec![create_prey(1, 0.0, 2.3, 1.0)];
    assert_eq!(select_prey(&predator, &just_fits, &params), Some(0));
}

#[test]
fn test_predator_ignores_itself() {
    let params = create_test_params();
    let predator = create_predator(1.0);
    let pool = vec![predator.clone()];

    assert_eq!(select_prey(&predator, &pool, &params), None);
}

#[test]
fn test_most_vulnerable_prey_selected() {
    let params = create_test_params();
    let predator = create_predator(1.0);
    let pool = vec![
        // vulnerability 1.0 / 4.0 = 0.25
        create_prey(1, 0.0, 1.0, 4.0),
        // vulnerability 0.5 / 1.0 = 0.5
        create_prey(2, 0.5, 1.0, 1.0),
    ];

    assert_eq!(select_prey(&predator, &pool, &params), Some(1));
}

#[test]
fn test_vulnerability_tie_keeps_pool_order() {
    let params = create_test_params();
    let predator = create_predator(1.0);
    let pool = vec![
        // 0.5 / 2.0 = 0.25
        create_prey(1, 0.5, 1.0, 2.0),
        // 1.0 / 4.0 = 0.25
        create_prey(2, 0.0, 1.0, 4.0),
    ];

    assert_eq!(select_prey(&predator, &pool, &params), Some(0));

    let reversed: Vec<Organism> = pool.into_iter().rev().collect();
    assert_eq!(select_prey(&predator, &reversed, &params), Some(0));
}

#[test]
fn test_failed_predation_costs_both_sides() {
    let params = create_test_params();
    let mut rng = StdRng::seed_from_u64(24);
    let mut predator = create_predator(0.3);
    // defense >= predation can never be overcome
    let mut pool = vec![create_prey(1, 0.5, 1.0, 1.0)];

    let outcome = resolve_predation(&mut predator, &mut pool, &params, &mut rng);

    assert_eq!(outcome, PredationOutcome::Repelled { prey: OrganismId(1) });
    assert!((predator.energy - (100.0 - 0.3)).abs() < 1e-4);
    assert_eq!(predator.actions, vec![Action::FailedPredation]);
    assert_eq!(pool.len(), 1);
    assert!((pool[0].energy - (100.0 - 0.25)).abs() < 1e-4);
    assert_eq!(pool[0].actions, vec![Action::Defended]);
}

#[test]
fn test_success_rate_tracks_attack_advantage() {
    let params = create_test_params();
    let mut rng = StdRng::seed_from_u64(25);

    // success probability 0.6 - 0.5 + 0.2 = 0.3
    let trials = 2000;
    let mut kills = 0;
    for _ in 0..trials {
        let mut predator = create_predator(0.6);
        let mut pool = vec![create_prey(1, 0.5, 1.0, 1.0)];
        if let PredationOutcome::Consumed { .. } =
            resolve_predation(&mut predator, &mut pool, &params, &mut rng)
        {
            kills += 1;
        }
    }

    let rate = kills as f32 / trials as f32;
    assert!((0.25..0.35).contains(&rate), "kill rate {rate}");
}
