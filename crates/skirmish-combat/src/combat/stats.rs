//! Combat stats
//!
//! The per-combatant numbers the damage pipeline reads. Owned by the host;
//! the combat core only ever reads them or folds modifiers onto a copy.

use serde::{Deserialize, Serialize};

/// Core combat stats for players and enemies
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct CombatStats {
    /// Maximum health points
    pub max_hp: f32,
    /// Attack power
    pub attack_power: f32,
    /// Basic attack damage multiplier
    pub aa_multiplier: f32,
    /// Defense (fed into the mitigation curve)
    pub defense: f32,
    /// Basic attacks per second
    pub attack_speed: f32,
    /// Critical hit chance (0.0 - 1.0)
    pub crit_chance: f32,
    /// Movement speed in units per second
    pub move_speed: f32,
}

impl Default for CombatStats {
    fn default() -> Self {
        Self {
            max_hp: 100.0,
            attack_power: 10.0,
            aa_multiplier: 1.0,
            defense: 0.0,
            attack_speed: 1.0,
            crit_chance: 0.05,
            move_speed: 200.0,
        }
    }
}

impl CombatStats {
    /// Create new stats from the numbers that matter to the damage pipeline
    pub fn new(max_hp: f32, attack_power: f32, defense: f32, crit_chance: f32) -> Self {
        Self {
            max_hp,
            attack_power,
            defense: defense.max(0.0),
            crit_chance: crit_chance.clamp(0.0, 1.0),
            ..Default::default()
        }
    }

    /// Stats that only carry a defense value, for targets known by defense alone
    pub fn defender(defense: f32) -> Self {
        Self {
            defense: defense.max(0.0),
            ..Default::default()
        }
    }

    /// Builder-style setter for the basic attack multiplier
    pub fn with_aa_multiplier(mut self, aa_multiplier: f32) -> Self {
        self.aa_multiplier = aa_multiplier;
        self
    }

    /// Builder-style setter for crit chance (clamped to 0.0 - 1.0)
    pub fn with_crit_chance(mut self, crit_chance: f32) -> Self {
        self.set_crit_chance(crit_chance);
        self
    }

    /// Builder-style setter for attack speed
    pub fn with_attack_speed(mut self, attack_speed: f32) -> Self {
        self.attack_speed = attack_speed;
        self
    }

    /// Set crit chance, clamped to 0.0 - 1.0
    pub fn set_crit_chance(&mut self, crit_chance: f32) {
        self.crit_chance = crit_chance.clamp(0.0, 1.0);
    }

    /// Set defense, never below zero
    pub fn set_defense(&mut self, defense: f32) {
        self.defense = defense.max(0.0);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_mutators_clamp() {
        let mut stats = CombatStats::default();
        stats.set_crit_chance(1.7);
        assert_eq!(stats.crit_chance, 1.0);
        stats.set_crit_chance(-0.2);
        assert_eq!(stats.crit_chance, 0.0);
        stats.set_defense(-40.0);
        assert_eq!(stats.defense, 0.0);
    }

    #[test]
    fn test_constructors_clamp() {
        let stats = CombatStats::new(100.0, 50.0, -5.0, 2.0);
        assert_eq!(stats.defense, 0.0);
        assert_eq!(stats.crit_chance, 1.0);
        assert_eq!(CombatStats::defender(-1.0).defense, 0.0);
        assert_eq!(CombatStats::default().with_crit_chance(3.0).crit_chance, 1.0);
    }
}
