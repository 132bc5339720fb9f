//! Predation: a predator picks one prey from the population assembled so far
//! this generation and either consumes it or is repelled.
//!
//! This is the only step that removes another organism mid-generation.

use rand::{Rng, RngCore};

use super::geometric_utils::distance;
use super::organism::{Action, Organism, OrganismId};
use super::params::Params;

/// Result of one predation attempt.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum PredationOutcome {
    /// Predator has no predation ability or no energy.
    Skipped,
    /// No candidate prey within range.
    NoPrey,
    /// Prey was caught and removed from the pool.
    Consumed {
        /// The consumed organism.
        prey: OrganismId,
        /// Energy the predator gained.
        energy_gained: f32,
    },
    /// Prey fought the predator off and stays in the pool.
    Repelled {
        /// The organism that defended itself.
        prey: OrganismId,
    },
}

/// How attractive a target is: weakly defended and close prey rank first.
pub fn vulnerability(prey: &Organism, distance: f32) -> f32 {
    (1.0 - prey.traits.defense) / distance.max(f32::EPSILON)
}

/// Energy a predator gains from consuming `prey`.
pub fn energy_from_prey(prey: &Organism, params: &Params) -> f32 {
    prey.energy * params.predation_energy_fraction + prey.size * params.predation_size_energy
}

/// Index of the most vulnerable organism in `pool` the predator can target.
///
/// Candidates are within `sensory * sensory_radius` and smaller than
/// `predator.size * prey_size_ratio`. Ties keep the earliest pool entry.
pub fn select_prey(predator: &Organism, pool: &[Organism], params: &Params) -> Option<usize> {
    let range = predator.traits.sensory * params.sensory_radius;
    let max_size = predator.size * params.prey_size_ratio;

    let mut best: Option<(usize, f32)> = None;
    for (idx, candidate) in pool.iter().enumerate() {
        if candidate.id == predator.id || candidate.size >= max_size {
            continue;
        }
        let d = distance(&predator.pos, &candidate.pos);
        if d > range {
            continue;
        }
        let score = vulnerability(candidate, d);
        if best.is_none_or(|(_, top)| score > top) {
            best = Some((idx, score));
        }
    }
    best.map(|(idx, _)| idx)
}

/// Lets `predator` hunt within `pool`.
///
/// Success requires `predation > prey.defense` and a draw below
/// `predation - defense + predation_success_bonus`. A consumed prey is
/// removed from `pool`; a repelled one is charged a defense cost and tagged.
///
/// # Arguments
///
/// * `predator` - The hunting organism (not a member of `pool`)
/// * `pool` - Organisms already carried into the next generation
/// * `params` - Simulation parameters
/// * `rng` - Random source
pub fn resolve_predation(
    predator: &mut Organism,
    pool: &mut Vec<Organism>,
    params: &Params,
    rng: &mut dyn RngCore,
) -> PredationOutcome {
    if predator.traits.predation <= 0.0 || predator.energy <= 0.0 {
        return PredationOutcome::Skipped;
    }

    let Some(idx) = select_prey(predator, pool, params) else {
        return PredationOutcome::NoPrey;
    };

    let attack = predator.traits.predation;
    let defense = pool[idx].traits.defense;
    let success = attack > defense
        && rng.random::<f32>() < attack - defense + params.predation_success_bonus;

    if success {
        let prey = pool.remove(idx);
        let energy_gained = energy_from_prey(&prey, params);
        predator.gain_energy(energy_gained);
        predator.record(Action::Predation);
        tracing::trace!("{} consumed {}", predator.id, prey.id);
        PredationOutcome::Consumed {
            prey: prey.id,
            energy_gained,
        }
    } else {
        predator.consume_energy(attack * params.failed_predation_cost);
        predator.record(Action::FailedPredation);

        let prey = &mut pool[idx];
        prey.consume_energy(defense * params.defense_cost);
        prey.record(Action::Defended);
        tracing::trace!("{} repelled {}", prey.id, predator.id);
        PredationOutcome::Repelled { prey: prey.id }
    }
}
