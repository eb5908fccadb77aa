//! Cooldown expiry bookkeeping
//!
//! Cooldowns are stored as absolute "expires at" timestamps in sim time. A
//! missing entry, or an expiry at or before `now_ms`, means ready.

use std::collections::HashMap;

use super::ability::AbilityId;

#[derive(Debug, Clone, Default)]
pub struct CooldownBook {
    expires_at: HashMap<AbilityId, f64>,
}

impl CooldownBook {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn is_ready(&self, id: AbilityId, now_ms: f64) -> bool {
        self.expires_at.get(&id).map_or(true, |&at| now_ms >= at)
    }

    /// Remaining cooldown, never negative
    pub fn remaining(&self, id: AbilityId, now_ms: f64) -> f64 {
        self.expires_at
            .get(&id)
            .map_or(0.0, |&at| (at - now_ms).max(0.0))
    }

    /// Start a full cooldown at `now_ms`
    pub fn commit(&mut self, id: AbilityId, now_ms: f64, cooldown_ms: f64) {
        self.expires_at.insert(id, now_ms + cooldown_ms);
    }

    /// Cut the remaining cooldown by `fraction` (0.0 - 1.0)
    pub fn reduce_remaining(&mut self, id: AbilityId, now_ms: f64, fraction: f64) {
        if let Some(at) = self.expires_at.get_mut(&id) {
            let remaining = (*at - now_ms).max(0.0);
            *at = now_ms + remaining * (1.0 - fraction.clamp(0.0, 1.0));
        }
    }

    pub fn expires_at(&self, id: AbilityId) -> Option<f64> {
        self.expires_at.get(&id).copied()
    }

    pub fn clear(&mut self) {
        self.expires_at.clear();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_absent_entry_is_ready() {
        let book = CooldownBook::new();
        assert!(book.is_ready(AbilityId::Warp, 0.0));
        assert_eq!(book.remaining(AbilityId::Warp, 0.0), 0.0);
    }

    #[test]
    fn test_commit_and_expiry() {
        let mut book = CooldownBook::new();
        book.commit(AbilityId::Warp, 1000.0, 500.0);
        assert!(!book.is_ready(AbilityId::Warp, 1499.0));
        assert_eq!(book.remaining(AbilityId::Warp, 1200.0), 300.0);
        assert!(book.is_ready(AbilityId::Warp, 1500.0));
        assert_eq!(book.remaining(AbilityId::Warp, 2000.0), 0.0);
        // Other abilities are unaffected
        assert!(book.is_ready(AbilityId::StunBurst, 1000.0));
    }

    #[test]
    fn test_reduce_remaining() {
        let mut book = CooldownBook::new();
        book.commit(AbilityId::GuardCounter, 0.0, 10_000.0);
        book.reduce_remaining(AbilityId::GuardCounter, 600.0, 0.5);
        assert_eq!(book.expires_at(AbilityId::GuardCounter), Some(5_300.0));

        // Reducing an ability never committed is a no-op
        book.reduce_remaining(AbilityId::Warp, 600.0, 0.5);
        assert_eq!(book.expires_at(AbilityId::Warp), None);
    }
}
