#![allow(missing_docs)]
#![allow(clippy::float_cmp)]

use biosim::error::SimError;
use biosim::simulation::ecosystem::Simulation;
use biosim::simulation::mutation::MutationStrategy;
use biosim::simulation::params::Params;
use std::fs;

fn temp_path(name: &str) -> String {
    std::env::temp_dir()
        .join(format!("biosim_{}_{}", std::process::id(), name))
        .to_string_lossy()
        .into_owned()
}

#[test]
fn test_default_params_are_valid() {
    let params = Params::default();
    assert!(params.validate().is_ok());
    assert_eq!(params.half_extent(), 50.0);
    assert!((params.senescence_age() - 70.0).abs() < 1e-4);
}

#[test]
fn test_save_and_load() {
    let params = Params {
        max_lifespan: 250,
        mutation_strategy: MutationStrategy::BehaviorBiased,
        sensory_radius: 15.0,
        ..Params::default()
    };
    let path = temp_path("save_load.json");

    params.save_to_file(&path).expect("Failed to save params");
    let loaded = Params::load_from_file(&path).expect("Failed to load params");

    assert_eq!(loaded, params);

    fs::remove_file(&path).ok();
}

#[test]
fn test_partial_file_uses_defaults() {
    let path = temp_path("partial.json");
    fs::write(&path, r#"{ "max_lifespan": 12, "mutation_strategy": "behavior_biased" }"#).unwrap();

    let loaded = Params::load_from_file(&path).unwrap();

    assert_eq!(loaded.max_lifespan, 12);
    assert_eq!(loaded.mutation_strategy, MutationStrategy::BehaviorBiased);
    assert_eq!(loaded.world_size, Params::default().world_size);

    fs::remove_file(&path).ok();
}

#[test]
fn test_load_missing_file() {
    let result = Params::load_from_file("/nonexistent/biosim/params.json");
    assert!(matches!(result, Err(SimError::Io(_))));
}

#[test]
fn test_load_malformed_file() {
    let path = temp_path("malformed.json");
    fs::write(&path, "{ not json").unwrap();

    let result = Params::load_from_file(&path);
    assert!(matches!(result, Err(SimError::Serde(_))));

    fs::remove_file(&path).ok();
}

#[test]
fn test_invalid_params_rejected() {
    let cases = [
        Params {
            world_size: 0.0,
            ..Params::default()
        },
        Params {
            max_lifespan: 0,
            ..Params::default()
        },
        Params {
            mutation_rate: 1.5,
            ..Params::default()
        },
        Params {
            min_speed: 10.0,
            max_speed: 1.0,
            ..Params::default()
        },
    ];

    for params in cases {
        assert!(matches!(params.validate(), Err(SimError::InvalidParams(_))));
        assert!(Simulation::with_seed(params, 0).is_err());
    }
}
