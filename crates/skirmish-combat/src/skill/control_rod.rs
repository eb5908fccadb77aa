//! Self-buff window with a range bonus

/// Transient record of an active control-rod buff.
///
/// The attack-power part lives in the caster's ledger; this tracks the same
/// window so range calculations outside the core can ask for the bonus.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct ControlRodState {
    pub is_active: bool,
    pub remaining_ms: f64,
    range_bonus: f32,
}

impl ControlRodState {
    /// Start (or restart) the window
    pub fn start(&mut self, duration_ms: f64, range_bonus: f32) {
        self.is_active = duration_ms > 0.0;
        self.remaining_ms = duration_ms.max(0.0);
        self.range_bonus = range_bonus;
    }

    /// Update timer
    pub fn tick(&mut self, delta_ms: f64) {
        if !self.is_active {
            return;
        }
        self.remaining_ms -= delta_ms;
        if self.remaining_ms <= 0.0 {
            *self = Self::default();
        }
    }

    /// Extra range while active, zero otherwise
    pub fn range_bonus(&self) -> f32 {
        if self.is_active {
            self.range_bonus
        } else {
            0.0
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_bonus_follows_window() {
        let mut rod = ControlRodState::default();
        assert_eq!(rod.range_bonus(), 0.0);

        rod.start(1000.0, 80.0);
        assert_eq!(rod.range_bonus(), 80.0);

        rod.tick(999.0);
        assert_eq!(rod.range_bonus(), 80.0);

        rod.tick(1.0);
        assert!(!rod.is_active);
        assert_eq!(rod.range_bonus(), 0.0);
        assert_eq!(rod.remaining_ms, 0.0);
    }
}
