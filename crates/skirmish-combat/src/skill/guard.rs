//! Guard-then-counter state machine
//!
//! `Idle -> Guarding -> Resolving -> Idle`. Activation enters `Guarding`;
//! the engine's per-frame update drains the window and passes through
//! `Resolving` into `Idle` within the same tick.

use super::ability::GuardCounterConfig;

/// An open guard window
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct GuardWindow {
    pub remaining_ms: f64,
    /// Angle from the caster to the aim point at activation
    pub attack_direction: f32,
    pub blocked_attack: bool,
    pub config: GuardCounterConfig,
}

/// A closed guard window waiting to be resolved
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct GuardResolution {
    pub attack_direction: f32,
    pub blocked_attack: bool,
    pub config: GuardCounterConfig,
}

#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub enum GuardPhase {
    #[default]
    Idle,
    Guarding(GuardWindow),
    Resolving(GuardResolution),
}

impl GuardPhase {
    /// Open a fresh window
    pub fn begin(attack_direction: f32, config: GuardCounterConfig) -> Self {
        Self::Guarding(GuardWindow {
            remaining_ms: config.guard_ms,
            attack_direction,
            blocked_attack: false,
            config,
        })
    }

    /// Whether the guard ability is in flight
    pub fn is_active(&self) -> bool {
        !matches!(self, Self::Idle)
    }

    /// Whether the defensive window is open
    pub fn is_guarding(&self) -> bool {
        matches!(self, Self::Guarding(_))
    }

    pub fn remaining_ms(&self) -> f64 {
        match self {
            Self::Guarding(w) => w.remaining_ms.max(0.0),
            _ => 0.0,
        }
    }

    /// Record a blocked hit. Returns true iff the window is open.
    pub fn block(&mut self) -> bool {
        match self {
            Self::Guarding(w) => {
                w.blocked_attack = true;
                true
            }
            _ => false,
        }
    }

    /// Drain the window by `delta_ms`, moving to `Resolving` once it hits zero
    pub fn tick(&mut self, delta_ms: f64) {
        if let Self::Guarding(mut w) = *self {
            w.remaining_ms -= delta_ms;
            *self = if w.remaining_ms > 0.0 {
                Self::Guarding(w)
            } else {
                Self::Resolving(GuardResolution {
                    attack_direction: w.attack_direction,
                    blocked_attack: w.blocked_attack,
                    config: w.config,
                })
            };
        }
    }

    /// Take a pending resolution, leaving the phase `Idle`
    pub fn take_resolution(&mut self) -> Option<GuardResolution> {
        match *self {
            Self::Resolving(resolution) => {
                *self = Self::Idle;
                Some(resolution)
            }
            _ => None,
        }
    }
}

/// What a resolved guard did
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct CounterOutcome {
    pub blocked: bool,
    /// Enemies damaged by the counter
    pub hits: usize,
    /// Enemies destroyed by the counter
    pub kills: usize,
    pub total_damage: f32,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn config() -> GuardCounterConfig {
        GuardCounterConfig {
            guard_ms: 500.0,
            ..Default::default()
        }
    }

    #[test]
    fn test_window_runs_to_resolution() {
        let mut phase = GuardPhase::begin(0.0, config());
        assert!(phase.is_active());
        assert!(phase.is_guarding());

        phase.tick(300.0);
        assert_eq!(phase.remaining_ms(), 200.0);
        assert!(phase.take_resolution().is_none());

        phase.tick(200.0);
        assert!(phase.is_active());
        assert!(!phase.is_guarding());

        let resolution = phase.take_resolution().unwrap();
        assert!(!resolution.blocked_attack);
        assert_eq!(phase, GuardPhase::Idle);
    }

    #[test]
    fn test_block_only_while_guarding() {
        let mut idle = GuardPhase::Idle;
        assert!(!idle.block());

        let mut phase = GuardPhase::begin(1.0, config());
        assert!(phase.block());
        phase.tick(500.0);
        assert!(!phase.block());

        let resolution = phase.take_resolution().unwrap();
        assert!(resolution.blocked_attack);
        assert_eq!(resolution.attack_direction, 1.0);
    }

    #[test]
    fn test_idle_tick_is_noop() {
        let mut phase = GuardPhase::Idle;
        phase.tick(1000.0);
        assert_eq!(phase, GuardPhase::Idle);
        assert!(!phase.is_active());
    }
}
