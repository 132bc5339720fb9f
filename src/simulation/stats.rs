use serde::{Deserialize, Serialize};

/// Counters describing what happened during one generation step.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct GenerationStats {
    /// Generation number of the snapshot produced by the step.
    pub generation: u64,
    /// Organisms in the input snapshot.
    pub population_before: usize,
    /// Organisms in the output snapshot.
    pub population_after: usize,
    /// Offspring produced.
    pub births: usize,
    /// Organisms dropped for having no energy (on entry or after metabolism).
    pub starved: usize,
    /// Organisms dropped for reaching the lifespan cap.
    pub died_of_age: usize,
    /// Prey consumed by predators.
    pub consumed: usize,
    /// Hunts that failed.
    pub failed_hunts: usize,
}

impl GenerationStats {
    /// Total organisms removed this step, for any reason.
    pub fn deaths(&self) -> usize {
        self.starved + self.died_of_age + self.consumed
    }

    /// Net population change.
    pub fn net_change(&self) -> i64 {
        self.population_after as i64 - self.population_before as i64
    }
}
