//! # Biosim - Generational Organism Simulation
//!
//! A population of organisms advanced through discrete generations. Each
//! organism is described by seven normalized traits and, every generation,
//! pays its metabolism, moves, harvests light, hunts, reproduces with
//! mutated traits and ages until it starves, is eaten or dies of old age.
//!
//! ## Features
//!
//! - Trait vectors clamped to `[0, 1]`
//! - Pluggable mutation policies (random walk or behavior biased)
//! - Same-generation predation against the population carried forward so far
//! - Immutable snapshots: a step returns a new snapshot, never edits its input
//! - Fast-forward as a lazy iterator and a host-driven tick loop
//!
//! ## Core Modules
//!
//! - [`simulation::organism`] - Organism state and lifecycle steps
//! - [`simulation::predation`] - Prey selection and resolution
//! - [`simulation::ecosystem`] - Snapshots and the generation scheduler
//! - [`simulation::runner`] - Fast-forward and tick loop
//!
//! ```no_run
//! use biosim::simulation::ecosystem::{Simulation, Snapshot};
//! use biosim::simulation::environment::Environment;
//! use biosim::simulation::organism::OrganismSettings;
//! use biosim::simulation::params::Params;
//!
//! let mut sim = Simulation::with_seed(Params::default(), 7)?;
//! let mut snapshot = Snapshot::new(Environment::default());
//! sim.create_organism(&mut snapshot, &OrganismSettings::default());
//! let later = sim.advance_generations(&snapshot, 50)?;
//! println!("{} organisms after 50 generations", later.population());
//! # Ok::<(), biosim::error::SimError>(())
//! ```

/// Error types.
pub mod error;

/// Core simulation logic and data structures.
pub mod simulation {
    /// Population snapshots and the generation scheduler.
    pub mod ecosystem;
    /// Environment conditions and resource counters.
    pub mod environment;
    /// Position helpers and world bounds.
    pub mod geometric_utils;
    /// Trait inheritance policies.
    pub mod mutation;
    /// Organism state and per-organism lifecycle steps.
    pub mod organism;
    /// Simulation parameters.
    pub mod params;
    /// Cross-organism predation.
    pub mod predation;
    /// Fast-forward driver and host-driven tick loop.
    pub mod runner;
    /// Per-generation counters.
    pub mod stats;
    /// Trait vectors.
    pub mod traits;
}
