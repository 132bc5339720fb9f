//! The trait vector: seven normalized scalars describing what an organism can do.
//!
//! Every field lives in `[0, 1]`. Values pushed outside that range are clamped,
//! never wrapped and never rejected.

use serde::{Deserialize, Serialize};

/// Clamps a value into `[0, 1]`.
///
/// `NaN` maps to `0.0` so a bad perturbation can never poison a lineage.
pub fn clamp01(value: f32) -> f32 {
    if value.is_nan() {
        0.0
    } else {
        value.clamp(0.0, 1.0)
    }
}

/// Names one field of [`Traits`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TraitKind {
    /// Ability to move.
    Motility,
    /// Ability to harvest light.
    Photosynthesis,
    /// Ability to hunt.
    Predation,
    /// Resistance to being hunted.
    Defense,
    /// Range at which prey can be detected.
    Sensory,
    /// Likelihood of reproducing when energy allows.
    Reproduction,
    /// Metabolic rate; higher burns more energy per generation.
    Metabolism,
}

impl TraitKind {
    /// All kinds, in declaration order.
    pub const ALL: [TraitKind; 7] = [
        TraitKind::Motility,
        TraitKind::Photosynthesis,
        TraitKind::Predation,
        TraitKind::Defense,
        TraitKind::Sensory,
        TraitKind::Reproduction,
        TraitKind::Metabolism,
    ];
}

/// The trait vector of an organism.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Traits {
    /// Ability to move.
    pub motility: f32,
    /// Ability to harvest light.
    pub photosynthesis: f32,
    /// Ability to hunt.
    pub predation: f32,
    /// Resistance to being hunted.
    pub defense: f32,
    /// Sensory range multiplier.
    pub sensory: f32,
    /// Reproduction likelihood.
    pub reproduction: f32,
    /// Metabolic rate.
    pub metabolism: f32,
}

impl Traits {
    /// Creates a trait vector, clamping every field into `[0, 1]`.
    pub fn new(
        motility: f32,
        photosynthesis: f32,
        predation: f32,
        defense: f32,
        sensory: f32,
        reproduction: f32,
        metabolism: f32,
    ) -> Self {
        Self {
            motility: clamp01(motility),
            photosynthesis: clamp01(photosynthesis),
            predation: clamp01(predation),
            defense: clamp01(defense),
            sensory: clamp01(sensory),
            reproduction: clamp01(reproduction),
            metabolism: clamp01(metabolism),
        }
    }

    /// Returns the value of one field.
    pub fn get(&self, kind: TraitKind) -> f32 {
        match kind {
            TraitKind::Motility => self.motility,
            TraitKind::Photosynthesis => self.photosynthesis,
            TraitKind::Predation => self.predation,
            TraitKind::Defense => self.defense,
            TraitKind::Sensory => self.sensory,
            TraitKind::Reproduction => self.reproduction,
            TraitKind::Metabolism => self.metabolism,
        }
    }

    /// Sets one field, clamping the value into `[0, 1]`.
    pub fn set(&mut self, kind: TraitKind, value: f32) {
        let value = clamp01(value);
        match kind {
            TraitKind::Motility => self.motility = value,
            TraitKind::Photosynthesis => self.photosynthesis = value,
            TraitKind::Predation => self.predation = value,
            TraitKind::Defense => self.defense = value,
            TraitKind::Sensory => self.sensory = value,
            TraitKind::Reproduction => self.reproduction = value,
            TraitKind::Metabolism => self.metabolism = value,
        }
    }

    /// Iterates over `(kind, value)` pairs in declaration order.
    pub fn iter(&self) -> impl Iterator<Item = (TraitKind, f32)> + '_ {
        TraitKind::ALL.into_iter().map(|kind| (kind, self.get(kind)))
    }

    /// Returns `true` if every field lies in `[0, 1]`.
    pub fn is_normalized(&self) -> bool {
        self.iter().all(|(_, v)| (0.0..=1.0).contains(&v))
    }
}
