//! Simulation clock
//!
//! Turns raw frame deltas into the monotonically non-decreasing `now_ms` and the
//! per-frame `delta_ms` that every combat update is driven by.

use serde::{Deserialize, Serialize};

/// Configuration for the simulation clock
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ClockConfig {
    /// How many simulated milliseconds pass per real millisecond
    pub time_scale: f64,
    /// Fixed timestep for deterministic stepping (in milliseconds)
    pub fixed_timestep_ms: f64,
    /// Maximum delta per frame to prevent spiral of death
    pub max_delta_ms: f64,
}

impl Default for ClockConfig {
    fn default() -> Self {
        Self {
            time_scale: 1.0,
            fixed_timestep_ms: 1000.0 / 60.0,
            max_delta_ms: 250.0,
        }
    }
}

/// Simulation time tracking
#[derive(Debug, Clone)]
pub struct SimClock {
    /// Configuration
    pub config: ClockConfig,
    /// Simulated time since session start in milliseconds
    pub now_ms: f64,
    /// Delta for this frame (clamped and scaled)
    pub delta_ms: f64,
    /// Frame counter
    pub frame_count: u64,
    /// Whether the simulation is paused
    pub paused: bool,
    /// Accumulated time for fixed timestep
    fixed_accumulator: f64,
}

impl Default for SimClock {
    fn default() -> Self {
        Self::new(ClockConfig::default())
    }
}

impl SimClock {
    /// Create a new clock with custom config
    pub fn new(config: ClockConfig) -> Self {
        Self {
            config,
            now_ms: 0.0,
            delta_ms: 0.0,
            frame_count: 0,
            paused: false,
            fixed_accumulator: 0.0,
        }
    }

    /// Advance the clock with the raw delta from the previous frame.
    /// Returns the `(now_ms, delta_ms)` pair for this frame.
    pub fn advance(&mut self, raw_delta_ms: f64) -> (f64, f64) {
        self.frame_count += 1;

        if self.paused || raw_delta_ms <= 0.0 {
            self.delta_ms = 0.0;
            return (self.now_ms, 0.0);
        }

        self.delta_ms = raw_delta_ms.min(self.config.max_delta_ms) * self.config.time_scale;
        self.now_ms += self.delta_ms;
        self.fixed_accumulator += self.delta_ms;
        (self.now_ms, self.delta_ms)
    }

    /// Get the number of fixed timesteps to process this frame
    pub fn fixed_steps(&mut self) -> u32 {
        let mut steps = 0;
        while self.fixed_accumulator >= self.config.fixed_timestep_ms {
            self.fixed_accumulator -= self.config.fixed_timestep_ms;
            steps += 1;
        }
        steps
    }

    /// Pause the simulation
    pub fn pause(&mut self) {
        self.paused = true;
    }

    /// Resume the simulation
    pub fn resume(&mut self) {
        self.paused = false;
    }

    /// Set the time scale (0.0 = frozen, 1.0 = normal, 2.0 = double speed)
    pub fn set_time_scale(&mut self, scale: f64) {
        self.config.time_scale = scale.max(0.0);
    }
}
