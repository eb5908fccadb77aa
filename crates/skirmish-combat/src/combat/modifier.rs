//! Timed stat modifiers (buffs)

use serde::{Deserialize, Serialize};
use skirmish_core::EntityId;

/// Which stat a modifier adjusts
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ModifierKind {
    AttackPower,
    AaMultiplier,
    AttackSpeed,
    MoveSpeed,
    Defense,
    /// Stacks additively: `crit_chance += multiplier - 1`
    CritChance,
}

impl ModifierKind {
    /// Display name
    pub fn name(self) -> &'static str {
        match self {
            Self::AttackPower => "Attack Power",
            Self::AaMultiplier => "Basic Attack",
            Self::AttackSpeed => "Attack Speed",
            Self::MoveSpeed => "Move Speed",
            Self::Defense => "Defense",
            Self::CritChance => "Crit Chance",
        }
    }

    /// Whether entries of this kind compose additively rather than multiplicatively
    pub fn is_additive(self) -> bool {
        matches!(self, Self::CritChance)
    }
}

/// An active modifier instance
#[derive(Debug, Clone, PartialEq)]
pub struct Modifier {
    pub kind: ModifierKind,
    pub multiplier: f32,
    /// Remaining duration in milliseconds
    pub remaining_ms: f64,
    /// Who granted it
    pub source: EntityId,
    pub stack_count: Option<u32>,
}

impl Modifier {
    /// Create a single-stack modifier
    pub fn new(kind: ModifierKind, multiplier: f32, duration_ms: f64, source: EntityId) -> Self {
        Self {
            kind,
            multiplier,
            remaining_ms: duration_ms,
            source,
            stack_count: None,
        }
    }

    /// Builder-style setter for the stack count
    pub fn with_stacks(mut self, stacks: u32) -> Self {
        self.stack_count = Some(stacks);
        self
    }

    /// Whether this modifier has expired
    pub fn is_expired(&self) -> bool {
        self.remaining_ms <= 0.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_expiry() {
        let mut m = Modifier::new(ModifierKind::AttackPower, 1.2, 100.0, EntityId::new());
        assert!(!m.is_expired());
        m.remaining_ms = 0.0;
        assert!(m.is_expired());
    }

    #[test]
    fn test_only_crit_is_additive() {
        assert!(ModifierKind::CritChance.is_additive());
        assert!(!ModifierKind::AttackPower.is_additive());
        assert!(!ModifierKind::Defense.is_additive());
    }
}
