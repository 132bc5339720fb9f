//! Shared environment state: ambient conditions plus bounded resource counters.

use serde::{Deserialize, Serialize};

use super::params::Params;
use super::traits::clamp01;

/// Resource counters, each capped at [`Params::resource_cap`].
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Resources {
    /// Organic matter.
    pub organic: f32,
    /// Dissolved minerals.
    pub minerals: f32,
    /// Available light; held at the cap every generation.
    pub light: f32,
}

impl Default for Resources {
    fn default() -> Self {
        Self {
            organic: 100.0,
            minerals: 100.0,
            light: 100.0,
        }
    }
}

/// Environment of a simulation run.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Environment {
    /// Normalized temperature.
    pub temperature: f32,
    /// Normalized light level, scales photosynthesis.
    pub light_level: f32,
    /// Normalized moisture.
    pub moisture: f32,
    /// Resource counters.
    pub resources: Resources,
}

impl Default for Environment {
    fn default() -> Self {
        Self {
            temperature: 0.5,
            light_level: 0.8,
            moisture: 0.5,
            resources: Resources::default(),
        }
    }
}

impl Environment {
    /// Creates an environment with full resources. Conditions are clamped into `[0, 1]`.
    pub fn new(temperature: f32, light_level: f32, moisture: f32) -> Self {
        Self {
            temperature: clamp01(temperature),
            light_level: clamp01(light_level),
            moisture: clamp01(moisture),
            resources: Resources::default(),
        }
    }

    /// Available light as a fraction of the cap.
    pub fn light_availability(&self, params: &Params) -> f32 {
        clamp01(self.resources.light / params.resource_cap)
    }

    /// End-of-generation regeneration: organic and minerals creep up towards
    /// the cap, light is reset to it.
    pub fn regenerate(&mut self, params: &Params) {
        let cap = params.resource_cap;
        let r = &mut self.resources;
        r.organic = (r.organic + params.organic_regeneration).clamp(0.0, cap);
        r.minerals = (r.minerals + params.mineral_regeneration).clamp(0.0, cap);
        r.light = cap;
    }
}
