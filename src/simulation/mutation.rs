//! Mutation engine: derives a child trait vector from its parent's.
//!
//! Two policies are built in. [`RandomWalk`] is the default: an independent
//! coin flip per trait, perturbing the selected ones. [`BehaviorBiased`]
//! perturbs every trait and nudges upward the traits the parent actually
//! exercised this generation.

use rand::{Rng, RngCore};
use serde::{Deserialize, Serialize};

use super::organism::Action;
use super::params::Params;
use super::traits::{TraitKind, Traits};

/// Derives offspring traits from a parent.
///
/// Implementations must not keep mutable state between calls; all randomness
/// comes from the supplied generator.
pub trait MutationPolicy: std::fmt::Debug + Send + Sync {
    /// Returns the child trait vector.
    ///
    /// # Arguments
    ///
    /// * `parent` - Parent trait vector
    /// * `actions` - Parent's action log for the current generation
    /// * `rng` - Random source
    fn inherit(&self, parent: &Traits, actions: &[Action], rng: &mut dyn RngCore) -> Traits;
}

/// Built-in policy selector, stored in [`Params`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum MutationStrategy {
    /// Per-trait Bernoulli-gated uniform perturbation.
    #[default]
    RandomWalk,
    /// Unconditional perturbation biased by the parent's actions.
    BehaviorBiased,
}

impl MutationStrategy {
    /// Builds the policy configured by `params`.
    pub fn build(self, params: &Params) -> Box<dyn MutationPolicy> {
        match self {
            MutationStrategy::RandomWalk => Box::new(RandomWalk {
                rate: params.mutation_rate,
                scale: params.mutation_scale,
            }),
            MutationStrategy::BehaviorBiased => Box::new(BehaviorBiased {
                scale: params.mutation_scale,
                bias: params.behavior_bias,
            }),
        }
    }
}

/// Each trait independently mutates with probability `rate` by a uniform
/// amount in `[-scale, scale]`; the rest are copied unchanged.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RandomWalk {
    /// Per-trait mutation probability.
    pub rate: f32,
    /// Maximum absolute perturbation.
    pub scale: f32,
}

impl Default for RandomWalk {
    fn default() -> Self {
        Self {
            rate: 0.1,
            scale: 0.1,
        }
    }
}

impl MutationPolicy for RandomWalk {
    fn inherit(&self, parent: &Traits, _actions: &[Action], rng: &mut dyn RngCore) -> Traits {
        let mut child = *parent;
        for kind in TraitKind::ALL {
            if rng.random::<f32>() < self.rate {
                let delta = (rng.random::<f32>() * 2.0 - 1.0) * self.scale;
                child.set(kind, parent.get(kind) + delta);
            }
        }
        child
    }
}

/// Every trait is perturbed by a uniform amount in `[-scale/2, scale/2]`
/// plus an upward bias proportional to how often the parent performed the
/// matching action.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct BehaviorBiased {
    /// Width of the unbiased perturbation.
    pub scale: f32,
    /// Maximum upward bias for a trait exercised by every logged action.
    pub bias: f32,
}

impl Default for BehaviorBiased {
    fn default() -> Self {
        Self {
            scale: 0.1,
            bias: 0.05,
        }
    }
}

impl BehaviorBiased {
    /// Fraction of `actions` that exercised `kind`.
    fn weight(kind: TraitKind, actions: &[Action]) -> f32 {
        if actions.is_empty() {
            return 0.0;
        }
        let hits = actions
            .iter()
            .filter(|a| a.exercised_trait() == Some(kind))
            .count();
        hits as f32 / actions.len() as f32
    }
}

impl MutationPolicy for BehaviorBiased {
    fn inherit(&self, parent: &Traits, actions: &[Action], rng: &mut dyn RngCore) -> Traits {
        let mut child = *parent;
        for kind in TraitKind::ALL {
            let amount = (rng.random::<f32>() - 0.5) * self.scale;
            let biased = amount + Self::weight(kind, actions) * self.bias * rng.random::<f32>();
            child.set(kind, parent.get(kind) + biased);
        }
        child
    }
}
