//! Population snapshots and the per-generation scheduler.
//!
//! A [`Snapshot`] holds every live organism and the environment. A
//! [`Simulation`] owns the random source and mutation policy and turns one
//! snapshot into the next:
//!
//! - The input snapshot is folded in order, threading the next-generation
//!   population as the accumulator
//! - Each organism runs metabolism, movement, photosynthesis, predation and
//!   reproduction, in that order
//! - Predation only sees organisms already carried into the accumulator
//! - Resources regenerate once every organism has been processed

use rand::SeedableRng;
use rand::rngs::StdRng;
use serde::{Deserialize, Serialize};

use super::environment::Environment;
use super::geometric_utils::random_position;
use super::mutation::MutationPolicy;
use super::organism::{Organism, OrganismId, OrganismSettings};
use super::params::Params;
use super::predation::{self, PredationOutcome};
use super::stats::GenerationStats;
use crate::error::Result;

/// The full population and environment at one point in time.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Snapshot {
    /// Live organisms, in processing order.
    pub organisms: Vec<Organism>,
    /// Shared environment.
    pub environment: Environment,
    /// Generation steps applied since the run began.
    pub generation: u64,
    /// Next unused organism id.
    pub next_id: u64,
}

impl Snapshot {
    /// Creates an empty snapshot.
    pub fn new(environment: Environment) -> Self {
        Self {
            organisms: Vec::new(),
            environment,
            generation: 0,
            next_id: 0,
        }
    }

    /// Number of live organisms.
    pub fn population(&self) -> usize {
        self.organisms.len()
    }

    /// Looks up an organism by id.
    pub fn find(&self, id: OrganismId) -> Option<&Organism> {
        self.organisms.iter().find(|o| o.id == id)
    }

    /// Reserves a fresh organism id.
    pub fn allocate_id(&mut self) -> OrganismId {
        let id = OrganismId(self.next_id);
        self.next_id += 1;
        id
    }

    /// Highest lineage depth in the population.
    pub fn max_generation(&self) -> u32 {
        self.organisms.iter().map(|o| o.generation).max().unwrap_or(0)
    }
}

/// Drives snapshots forward one generation at a time.
#[derive(Debug)]
pub struct Simulation {
    params: Params,
    rng: StdRng,
    policy: Box<dyn MutationPolicy>,
    last_stats: GenerationStats,
}

impl Simulation {
    /// Creates a simulation seeded from the thread-local generator.
    pub fn new(params: Params) -> Result<Self> {
        let rng = StdRng::from_rng(&mut rand::rng());
        Self::with_rng(params, rng)
    }

    /// Creates a deterministic simulation.
    pub fn with_seed(params: Params, seed: u64) -> Result<Self> {
        Self::with_rng(params, StdRng::seed_from_u64(seed))
    }

    fn with_rng(params: Params, rng: StdRng) -> Result<Self> {
        params.validate()?;
        let policy = params.mutation_strategy.build(&params);
        tracing::info!(
            "simulation created (world {}, lifespan {}, {:?} mutation)",
            params.world_size,
            params.max_lifespan,
            params.mutation_strategy
        );
        Ok(Self {
            params,
            rng,
            policy,
            last_stats: GenerationStats::default(),
        })
    }

    /// Replaces the mutation policy with a custom one.
    #[must_use]
    pub fn with_mutation_policy(mut self, policy: Box<dyn MutationPolicy>) -> Self {
        self.policy = policy;
        self
    }

    /// Simulation parameters.
    pub fn params(&self) -> &Params {
        &self.params
    }

    /// Counters from the most recent generation step.
    pub fn last_stats(&self) -> &GenerationStats {
        &self.last_stats
    }

    /// Adds a founding organism at a random position.
    ///
    /// Must be called before the snapshot is handed to a generation step.
    ///
    /// # Returns
    ///
    /// The id of the new organism.
    pub fn create_organism(
        &mut self,
        snapshot: &mut Snapshot,
        settings: &OrganismSettings,
    ) -> OrganismId {
        let id = snapshot.allocate_id();
        let pos = random_position(&mut self.rng, self.params.half_extent());
        snapshot
            .organisms
            .push(Organism::founder(id, settings, pos, &self.params));
        id
    }

    /// Advances the snapshot by one generation.
    ///
    /// The input is left untouched; the returned snapshot replaces it.
    pub fn advance_one_generation(&mut self, snapshot: &Snapshot) -> Snapshot {
        let mut stats = GenerationStats {
            generation: snapshot.generation + 1,
            population_before: snapshot.organisms.len(),
            ..GenerationStats::default()
        };
        let mut next_id = snapshot.next_id;
        let environment = snapshot.environment;

        let organisms = snapshot.organisms.iter().fold(
            Vec::with_capacity(snapshot.organisms.len()),
            |mut next, organism| {
                self.advance_organism(organism, &environment, &mut next, &mut next_id, &mut stats);
                next
            },
        );

        let mut environment = environment;
        environment.regenerate(&self.params);

        stats.population_after = organisms.len();
        tracing::debug!(
            "generation {}: population {} -> {} (births {}, starved {}, aged out {}, consumed {})",
            stats.generation,
            stats.population_before,
            stats.population_after,
            stats.births,
            stats.starved,
            stats.died_of_age,
            stats.consumed
        );
        self.last_stats = stats;

        Snapshot {
            organisms,
            environment,
            generation: snapshot.generation + 1,
            next_id,
        }
    }

    /// Runs one organism through the pipeline, pushing it (and any offspring)
    /// onto `next` if it survives.
    fn advance_organism(
        &mut self,
        organism: &Organism,
        environment: &Environment,
        next: &mut Vec<Organism>,
        next_id: &mut u64,
        stats: &mut GenerationStats,
    ) {
        let params = &self.params;
        let mut entity = organism.clone();
        entity.actions.clear();

        if !entity.is_alive() {
            stats.starved += 1;
            return;
        }
        if entity.is_expired(params) {
            stats.died_of_age += 1;
            return;
        }

        if !entity.metabolize(params) {
            stats.starved += 1;
            return;
        }

        entity.move_randomly(params, &mut self.rng);
        entity.photosynthesize(environment, params);

        match predation::resolve_predation(&mut entity, next, params, &mut self.rng) {
            PredationOutcome::Consumed { .. } => stats.consumed += 1,
            PredationOutcome::Repelled { .. } => stats.failed_hunts += 1,
            PredationOutcome::Skipped | PredationOutcome::NoPrey => {}
        }

        let child_id = OrganismId(*next_id);
        let offspring =
            entity.try_reproduce(child_id, params, self.policy.as_ref(), &mut self.rng);

        next.push(entity);
        if let Some(child) = offspring {
            tracing::trace!("{} spawned {}", organism.id, child.id);
            *next_id += 1;
            stats.births += 1;
            next.push(child);
        }
    }
}
