use serde::{Deserialize, Serialize};

use super::mutation::MutationStrategy;
use crate::error::{Result, SimError};

/// Simulation parameters that control every per-generation formula.
///
/// All values have sensible defaults (see [`Params::default`]); a host can
/// override them from a JSON file with [`Params::load_from_file`].
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Params {
    /// Edge length of the cubic world. Coordinates live in `[-world_size / 2, world_size / 2]`.
    pub world_size: f32,
    /// Age (in generations) at which an organism dies regardless of energy.
    pub max_lifespan: u32,
    /// Energy given to founding organisms.
    pub starting_energy: f32,
    /// Lower bound for organism size.
    pub min_size: f32,

    /// Base energy burned per generation before trait and size scaling.
    pub base_metabolic_cost: f32,
    /// Fraction of the lifespan after which aging starts to cost extra energy.
    pub senescence_onset: f32,
    /// Extra energy per generation lived past the senescence onset.
    pub senescence_rate: f32,

    /// Motility below this value means the organism does not move.
    pub motility_threshold: f32,
    /// Distance travelled per unit of motility (for size 1).
    pub move_multiplier: f32,
    /// Energy cost per unit of distance and size.
    pub move_energy_rate: f32,
    /// Vertical jitter as a fraction of the horizontal distance travelled.
    pub vertical_jitter: f32,

    /// Photosynthesis below this value means no light harvesting.
    pub photosynthesis_threshold: f32,
    /// Energy gained per unit of photosynthesis, light and size.
    pub photosynthesis_multiplier: f32,
    /// Fraction of light lost between the surface and the bottom of the world.
    pub depth_attenuation: f32,

    /// Energy an organism must exceed before it may reproduce.
    pub reproduction_threshold: f32,
    /// Energy debited from the parent for one offspring.
    pub reproduction_cost: f32,
    /// Fraction of the reproduction cost handed to the offspring.
    pub offspring_energy_fraction: f32,
    /// Maximum horizontal offset of an offspring from its parent.
    pub offspring_spread: f32,
    /// Offspring size is `parent.size * uniform(1 - v, 1 + v)`.
    pub offspring_size_variation: f32,

    /// Sensory range per unit of the sensory trait.
    pub sensory_radius: f32,
    /// Prey must be smaller than `predator.size * prey_size_ratio`.
    pub prey_size_ratio: f32,
    /// Added to `predation - defense` to get the success probability.
    pub predation_success_bonus: f32,
    /// Fraction of the prey's energy gained on a kill.
    pub predation_energy_fraction: f32,
    /// Energy gained per unit of prey size on a kill.
    pub predation_size_energy: f32,
    /// Energy lost by a predator per unit of predation on a failed hunt.
    pub failed_predation_cost: f32,
    /// Energy lost by prey per unit of defense when repelling a hunt.
    pub defense_cost: f32,

    /// Which built-in mutation policy offspring are derived with.
    pub mutation_strategy: MutationStrategy,
    /// Per-trait probability of mutation (random walk policy).
    pub mutation_rate: f32,
    /// Maximum absolute perturbation of one mutation.
    pub mutation_scale: f32,
    /// Upward bias per unit of action frequency (behavior biased policy).
    pub behavior_bias: f32,

    /// Cap for every resource counter.
    pub resource_cap: f32,
    /// Organic matter regenerated per generation.
    pub organic_regeneration: f32,
    /// Minerals regenerated per generation.
    pub mineral_regeneration: f32,

    /// Slowest speed the runner accepts, in generations per second.
    pub min_speed: f32,
    /// Fastest speed the runner accepts, in generations per second.
    pub max_speed: f32,
    /// Upper bound on generations advanced by a single runner tick.
    pub max_generations_per_tick: u32,
}

impl Default for Params {
    fn default() -> Self {
        Self {
            world_size: 100.0,
            max_lifespan: 100,
            starting_energy: 100.0,
            min_size: 0.1,

            base_metabolic_cost: 0.5,
            senescence_onset: 0.7,
            senescence_rate: 0.05,

            motility_threshold: 0.05,
            move_multiplier: 2.0,
            move_energy_rate: 0.5,
            vertical_jitter: 0.1,

            photosynthesis_threshold: 0.05,
            photosynthesis_multiplier: 5.0,
            depth_attenuation: 0.5,

            reproduction_threshold: 50.0,
            reproduction_cost: 40.0,
            offspring_energy_fraction: 0.5,
            offspring_spread: 1.0,
            offspring_size_variation: 0.2,

            sensory_radius: 10.0,
            prey_size_ratio: 1.2,
            predation_success_bonus: 0.2,
            predation_energy_fraction: 0.7,
            predation_size_energy: 3.0,
            failed_predation_cost: 1.0,
            defense_cost: 0.5,

            mutation_strategy: MutationStrategy::RandomWalk,
            mutation_rate: 0.1,
            mutation_scale: 0.1,
            behavior_bias: 0.05,

            resource_cap: 100.0,
            organic_regeneration: 0.5,
            mineral_regeneration: 0.2,

            min_speed: 0.1,
            max_speed: 60.0,
            max_generations_per_tick: 100,
        }
    }
}

impl Params {
    /// Half the world edge; every coordinate is clamped to `±half_extent`.
    pub fn half_extent(&self) -> f32 {
        self.world_size / 2.0
    }

    /// Age after which senescence costs accrue.
    pub fn senescence_age(&self) -> f32 {
        self.max_lifespan as f32 * self.senescence_onset
    }

    /// Checks that the parameters describe a runnable simulation.
    pub fn validate(&self) -> Result<()> {
        let positive = [
            ("world_size", self.world_size),
            ("min_size", self.min_size),
            ("sensory_radius", self.sensory_radius),
            ("resource_cap", self.resource_cap),
            ("min_speed", self.min_speed),
        ];
        for (name, value) in positive {
            if !(value.is_finite() && value > 0.0) {
                return Err(SimError::InvalidParams(format!(
                    "{name} must be positive, got {value}"
                )));
            }
        }

        if self.max_lifespan == 0 {
            return Err(SimError::InvalidParams(
                "max_lifespan must be at least 1".to_string(),
            ));
        }

        let unit = [
            ("senescence_onset", self.senescence_onset),
            ("mutation_rate", self.mutation_rate),
            ("offspring_energy_fraction", self.offspring_energy_fraction),
            ("depth_attenuation", self.depth_attenuation),
            ("offspring_size_variation", self.offspring_size_variation),
        ];
        for (name, value) in unit {
            if !(0.0..=1.0).contains(&value) {
                return Err(SimError::InvalidParams(format!(
                    "{name} must lie in [0, 1], got {value}"
                )));
            }
        }

        if self.max_speed < self.min_speed {
            return Err(SimError::InvalidParams(format!(
                "max_speed ({}) is below min_speed ({})",
                self.max_speed, self.min_speed
            )));
        }

        Ok(())
    }

    /// Loads parameters from a JSON file. Missing fields fall back to defaults.
    pub fn load_from_file(path: &str) -> Result<Self> {
        let json = std::fs::read_to_string(path)?;
        let params: Self = serde_json::from_str(&json)?;
        params.validate()?;
        Ok(params)
    }

    /// Saves parameters to a JSON file.
    pub fn save_to_file(&self, path: &str) -> Result<()> {
        let json = serde_json::to_string_pretty(self)?;
        std::fs::write(path, json)?;
        Ok(())
    }
}
