//! Side-effect hooks for presentation (sound cues, hit flashes, HUD popups).
//!
//! Injected into the engine at construction. Every hook defaults to a no-op.

use super::ability::AbilityId;
use super::guard::CounterOutcome;

pub trait CombatFeedback {
    fn ability_activated(&mut self, _id: AbilityId) {}

    fn attack_blocked(&mut self) {}

    fn counter_resolved(&mut self, _outcome: &CounterOutcome) {}

    fn targets_stunned(&mut self, _count: usize) {}

    fn projectiles_cleared(&mut self, _count: usize) {}
}

/// Feedback sink that ignores everything
#[derive(Debug, Clone, Copy, Default)]
pub struct NoFeedback;

impl CombatFeedback for NoFeedback {}
