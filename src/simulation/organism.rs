//! Organism state and per-organism lifecycle steps.
//!
//! Each generation an organism is run through a fixed pipeline (see
//! [`super::ecosystem`]): metabolism and aging, movement, photosynthesis,
//! predation and reproduction. The steps here only touch the organism they
//! are called on; predation lives in [`super::predation`] because it reaches
//! into the rest of the population.

use ndarray::Array1;
use rand::{Rng, RngCore};
use serde::{Deserialize, Serialize};
use std::fmt;

use super::environment::Environment;
use super::geometric_utils::{VERTICAL_AXIS, clamp_to_world_mut};
use super::mutation::MutationPolicy;
use super::params::Params;
use super::traits::{TraitKind, Traits};

/// Opaque organism identifier, unique within a simulation run.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct OrganismId(pub u64);

impl fmt::Display for OrganismId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "organism-{}", self.0)
    }
}

/// A behavior recorded on an organism during the current generation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Action {
    /// Created this generation as offspring.
    Born,
    /// Paid its metabolic cost and aged.
    Metabolism,
    /// Moved.
    Moved,
    /// Harvested light.
    Photosynthesis,
    /// Caught and consumed prey.
    Predation,
    /// Hunted without success.
    FailedPredation,
    /// Survived a hunt.
    Defended,
    /// Produced an offspring.
    Reproduced,
}

impl Action {
    /// The tag as it appears in logs and serialized output.
    pub fn as_str(self) -> &'static str {
        match self {
            Action::Born => "born",
            Action::Metabolism => "metabolism",
            Action::Moved => "moved",
            Action::Photosynthesis => "photosynthesis",
            Action::Predation => "predation",
            Action::FailedPredation => "failed_predation",
            Action::Defended => "defended",
            Action::Reproduced => "reproduced",
        }
    }

    /// The trait this action exercises, if any.
    pub fn exercised_trait(self) -> Option<TraitKind> {
        match self {
            Action::Born => None,
            Action::Metabolism => Some(TraitKind::Metabolism),
            Action::Moved => Some(TraitKind::Motility),
            Action::Photosynthesis => Some(TraitKind::Photosynthesis),
            Action::Predation | Action::FailedPredation => Some(TraitKind::Predation),
            Action::Defended => Some(TraitKind::Defense),
            Action::Reproduced => Some(TraitKind::Reproduction),
        }
    }
}

impl fmt::Display for Action {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Settings for a founding organism. Unset fields take the documented defaults.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct OrganismSettings {
    /// Defaults to 0.1.
    pub motility: Option<f32>,
    /// Defaults to 0.5.
    pub photosynthesis: Option<f32>,
    /// Defaults to 0.1.
    pub predation: Option<f32>,
    /// Defaults to 0.1.
    pub defense: Option<f32>,
    /// Defaults to 0.1.
    pub sensory: Option<f32>,
    /// Defaults to 0.3.
    pub reproduction: Option<f32>,
    /// Defaults to 0.5.
    pub metabolism: Option<f32>,
    /// Defaults to 1.0.
    pub size: Option<f32>,
}

impl OrganismSettings {
    /// Trait vector described by these settings.
    pub fn traits(&self) -> Traits {
        Traits::new(
            self.motility.unwrap_or(0.1),
            self.photosynthesis.unwrap_or(0.5),
            self.predation.unwrap_or(0.1),
            self.defense.unwrap_or(0.1),
            self.sensory.unwrap_or(0.1),
            self.reproduction.unwrap_or(0.3),
            self.metabolism.unwrap_or(0.5),
        )
    }

    /// Size described by these settings.
    pub fn size(&self) -> f32 {
        self.size.unwrap_or(1.0)
    }
}

/// A simulated organism.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Organism {
    /// Unique identifier.
    pub id: OrganismId,
    /// Position `[x, y, z]` in world coordinates.
    pub pos: Array1<f32>,
    /// Body size, always positive.
    pub size: f32,
    /// Capabilities.
    pub traits: Traits,
    /// Current energy (culled when <= 0).
    pub energy: f32,
    /// Generations survived.
    pub age: u32,
    /// Depth from the founding ancestor.
    pub generation: u32,
    /// Parent, for lineage bookkeeping only.
    pub parent_id: Option<OrganismId>,
    /// Behaviors performed this generation, in order.
    pub actions: Vec<Action>,
}

impl Organism {
    /// Creates a founding organism at `pos`.
    ///
    /// # Arguments
    ///
    /// * `id` - Unique identifier
    /// * `settings` - Trait and size overrides
    /// * `pos` - Starting position, clamped into the world
    /// * `params` - Simulation parameters (starting energy, world size, minimum size)
    pub fn founder(
        id: OrganismId,
        settings: &OrganismSettings,
        pos: Array1<f32>,
        params: &Params,
    ) -> Self {
        let mut pos = pos;
        clamp_to_world_mut(&mut pos, params.half_extent());
        Self {
            id,
            pos,
            size: settings.size().max(params.min_size),
            traits: settings.traits(),
            energy: params.starting_energy,
            age: 0,
            generation: 0,
            parent_id: None,
            actions: Vec::new(),
        }
    }

    /// Checks if the organism is alive.
    pub fn is_alive(&self) -> bool {
        self.energy > 0.0
    }

    /// Whether the organism has reached the end of its lifespan.
    pub fn is_expired(&self, params: &Params) -> bool {
        self.age >= params.max_lifespan
    }

    /// Appends a tag to this generation's action log.
    pub fn record(&mut self, action: Action) {
        self.actions.push(action);
    }

    /// Whether `action` was recorded this generation.
    pub fn did(&self, action: Action) -> bool {
        self.actions.contains(&action)
    }

    /// Reduces the organism's energy.
    pub fn consume_energy(&mut self, amount: f32) {
        self.energy -= amount;
    }

    /// Increases the organism's energy.
    pub fn gain_energy(&mut self, amount: f32) {
        self.energy += amount;
    }

    /// Energy burned by one generation of metabolism at the current age,
    /// excluding senescence.
    pub fn metabolic_cost(&self, params: &Params) -> f32 {
        params.base_metabolic_cost * (1.0 + self.traits.metabolism) * (1.0 + self.size * 0.5)
    }

    /// Pays the metabolic cost and ages by one generation.
    ///
    /// Past the senescence onset every further generation adds a linear
    /// degeneration cost.
    ///
    /// # Returns
    ///
    /// `true` if the organism survived.
    pub fn metabolize(&mut self, params: &Params) -> bool {
        let cost = self.metabolic_cost(params);
        self.age += 1;

        let onset = params.senescence_age();
        let degeneration = if self.age as f32 > onset {
            (self.age as f32 - onset) * params.senescence_rate
        } else {
            0.0
        };

        self.consume_energy(cost + degeneration);
        self.record(Action::Metabolism);
        self.is_alive()
    }

    /// Moves in a random horizontal direction.
    ///
    /// Larger organisms travel less per unit of motility. Skipped when
    /// motility is negligible or the organism cannot pay for the trip.
    ///
    /// # Returns
    ///
    /// Distance travelled (0 if skipped).
    pub fn move_randomly(&mut self, params: &Params, rng: &mut dyn RngCore) -> f32 {
        if self.traits.motility < params.motility_threshold {
            return 0.0;
        }

        let distance = self.traits.motility * params.move_multiplier / self.size;
        let cost = distance * self.size * params.move_energy_rate;
        if self.energy <= cost {
            return 0.0;
        }

        let angle = rng.random::<f32>() * std::f32::consts::TAU;
        let jitter = (rng.random::<f32>() * 2.0 - 1.0) * params.vertical_jitter * distance;
        self.pos[0] += angle.cos() * distance;
        self.pos[VERTICAL_AXIS] += jitter;
        self.pos[2] += angle.sin() * distance;
        clamp_to_world_mut(&mut self.pos, params.half_extent());

        self.consume_energy(cost);
        self.record(Action::Moved);
        distance
    }

    /// Light reaching the organism's depth, as a fraction of surface light.
    pub fn depth_factor(&self, params: &Params) -> f32 {
        let depth = (params.half_extent() - self.pos[VERTICAL_AXIS]) / params.world_size;
        (1.0 - params.depth_attenuation * depth).clamp(0.0, 1.0)
    }

    /// Harvests light energy.
    ///
    /// # Returns
    ///
    /// Energy gained (0 if the trait is below threshold).
    pub fn photosynthesize(&mut self, env: &Environment, params: &Params) -> f32 {
        if self.traits.photosynthesis < params.photosynthesis_threshold {
            return 0.0;
        }

        let gain = self.traits.photosynthesis
            * env.light_level
            * self.size
            * env.light_availability(params)
            * params.photosynthesis_multiplier
            * self.depth_factor(params);

        self.gain_energy(gain);
        self.record(Action::Photosynthesis);
        gain
    }

    /// Whether the organism has enough energy to attempt reproduction.
    pub fn can_reproduce(&self, params: &Params) -> bool {
        self.energy > params.reproduction_threshold
    }

    /// Attempts asexual reproduction.
    ///
    /// On success the parent pays [`Params::reproduction_cost`] and the
    /// offspring receives a fraction of it, mutated traits and a position
    /// near the parent.
    ///
    /// # Arguments
    ///
    /// * `child_id` - Identifier for the offspring, used only on success
    /// * `policy` - Mutation policy deriving the child's traits
    ///
    /// # Returns
    ///
    /// The offspring, if one was produced.
    pub fn try_reproduce(
        &mut self,
        child_id: OrganismId,
        params: &Params,
        policy: &dyn MutationPolicy,
        rng: &mut dyn RngCore,
    ) -> Option<Organism> {
        if !self.can_reproduce(params) || rng.random::<f32>() >= self.traits.reproduction {
            return None;
        }

        let spread = params.offspring_spread;
        let mut pos = self.pos.clone();
        pos[0] += (rng.random::<f32>() * 2.0 - 1.0) * spread;
        pos[2] += (rng.random::<f32>() * 2.0 - 1.0) * spread;
        clamp_to_world_mut(&mut pos, params.half_extent());

        let variation = params.offspring_size_variation;
        let size_factor = 1.0 - variation + rng.random::<f32>() * 2.0 * variation;
        let traits = policy.inherit(&self.traits, &self.actions, rng);

        let child = Organism {
            id: child_id,
            pos,
            size: (self.size * size_factor).max(params.min_size),
            traits,
            energy: params.reproduction_cost * params.offspring_energy_fraction,
            age: 0,
            generation: self.generation + 1,
            parent_id: Some(self.id),
            actions: vec![Action::Born],
        };

        self.consume_energy(params.reproduction_cost);
        self.record(Action::Reproduced);
        Some(child)
    }
}
