//! Fast-forwarding and the tick loop.
//!
//! The core never owns a timer. A host feeds elapsed time into a [`Runner`],
//! which decides how many generations are due, and long fast-forwards can be
//! consumed step by step through [`Generations`] so the host can yield
//! between steps.

use super::ecosystem::{Simulation, Snapshot};
use super::params::Params;
use crate::error::{Result, SimError};

/// Lazily yields successive snapshots, one generation per item.
///
/// The iterator never ends; bound it with `take` or `nth`.
#[derive(Debug)]
pub struct Generations<'a> {
    simulation: &'a mut Simulation,
    current: Snapshot,
}

impl Iterator for Generations<'_> {
    type Item = Snapshot;

    fn next(&mut self) -> Option<Snapshot> {
        let next = self.simulation.advance_one_generation(&self.current);
        self.current = next.clone();
        Some(next)
    }
}

/// Converts a real-valued generation count (e.g. from a UI slider) into a
/// step count.
///
/// Negative, fractional and non-finite values are rejected.
pub fn generation_count(value: f64) -> Result<u32> {
    if !value.is_finite() || value < 0.0 || value.fract() != 0.0 || value > f64::from(u32::MAX) {
        return Err(SimError::InvalidArgument(format!(
            "generation count must be a non-negative integer, got {value}"
        )));
    }
    Ok(value as u32)
}

impl Simulation {
    /// Returns an iterator advancing `snapshot` one generation per item.
    pub fn generations(&mut self, snapshot: &Snapshot) -> Generations<'_> {
        Generations {
            simulation: self,
            current: snapshot.clone(),
        }
    }

    /// Advances `snapshot` by `generations` steps, threading each output into
    /// the next step.
    ///
    /// Zero returns an identical copy of the input. A negative count fails
    /// with [`SimError::InvalidArgument`] before any work is done.
    pub fn advance_generations(&mut self, snapshot: &Snapshot, generations: i64) -> Result<Snapshot> {
        let n = usize::try_from(generations).map_err(|_| {
            SimError::InvalidArgument(format!(
                "generation count must be non-negative, got {generations}"
            ))
        })?;

        if n == 0 {
            return Ok(snapshot.clone());
        }

        let mut current = snapshot.clone();
        for _ in 0..n {
            current = self.advance_one_generation(&current);
        }
        Ok(current)
    }
}

/// Start/stop/speed state for a host-driven tick loop.
#[derive(Debug, Clone, PartialEq)]
pub struct Runner {
    running: bool,
    speed: f32,
    min_speed: f32,
    max_speed: f32,
    max_per_tick: u32,
    accumulator: f32,
}

impl Runner {
    /// Creates a stopped runner at one generation per second.
    pub fn new(params: &Params) -> Self {
        Self {
            running: false,
            speed: 1.0_f32.max(params.min_speed).min(params.max_speed),
            min_speed: params.min_speed,
            max_speed: params.max_speed,
            max_per_tick: params.max_generations_per_tick,
            accumulator: 0.0,
        }
    }

    /// Starts (or resumes) the loop.
    pub fn start(&mut self) {
        if !self.running {
            tracing::info!("runner started at {} generations/s", self.speed);
        }
        self.running = true;
    }

    /// Pauses the loop. Partially elapsed time is discarded.
    pub fn stop(&mut self) {
        if self.running {
            tracing::info!("runner stopped");
        }
        self.running = false;
        self.accumulator = 0.0;
    }

    /// Whether the loop is running.
    pub fn is_running(&self) -> bool {
        self.running
    }

    /// Current speed in generations per second.
    pub fn speed(&self) -> f32 {
        self.speed
    }

    /// Sets the speed, clamped into the configured range.
    pub fn set_speed(&mut self, generations_per_second: f32) {
        self.speed = if generations_per_second.is_nan() {
            self.min_speed
        } else {
            generations_per_second.max(self.min_speed).min(self.max_speed)
        };
    }

    /// Feeds `dt` seconds of elapsed time.
    ///
    /// # Returns
    ///
    /// Number of generations now due (0 while stopped), at most
    /// `max_generations_per_tick`. Time beyond that cap is dropped.
    pub fn tick(&mut self, dt: f32) -> u32 {
        if !self.running || dt.is_nan() || dt <= 0.0 {
            return 0;
        }

        self.accumulator += dt * self.speed;
        let due = self.accumulator.floor();
        self.accumulator -= due;

        let due = due as u32;
        if due > self.max_per_tick {
            tracing::warn!("{} generations due, capping at {}", due, self.max_per_tick);
            self.accumulator = 0.0;
            return self.max_per_tick;
        }
        due
    }

    /// Feeds `dt` seconds and advances `snapshot` by however many generations are due.
    pub fn drive(&mut self, simulation: &mut Simulation, snapshot: &Snapshot, dt: f32) -> Snapshot {
        let due = self.tick(dt);
        simulation
            .generations(snapshot)
            .take(due as usize)
            .last()
            .unwrap_or_else(|| snapshot.clone())
    }
}
