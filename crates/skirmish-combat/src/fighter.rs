//! Concrete combatant
//!
//! A ready-made implementation of both collaborator roles: it can own a
//! [`SkillEngine`] as the caster, and it can stand in the enemy list as a
//! target.

use glam::Vec2;
use skirmish_core::EntityId;

use crate::combat::{CombatStats, ModifierLedger, StatusEffect};
use crate::skill::{CombatTarget, Combatant, SkillEngine};

/// A combatant with position, HP, base stats and a modifier ledger
#[derive(Debug, Clone)]
pub struct Fighter {
    pub id: EntityId,
    pub position: Vec2,
    pub stats: CombatStats,
    pub current_hp: f32,
    pub hitbox_radius: f32,
    pub active: bool,
    pub ledger: ModifierLedger,
}

impl Fighter {
    /// Create a fighter at full HP
    pub fn new(position: Vec2, stats: CombatStats) -> Self {
        Self {
            id: EntityId::new(),
            position,
            current_hp: stats.max_hp,
            stats,
            hitbox_radius: 16.0,
            active: true,
            ledger: ModifierLedger::new(),
        }
    }

    /// Builder-style setter for the hitbox radius
    pub fn with_hitbox(mut self, radius: f32) -> Self {
        self.hitbox_radius = radius;
        self
    }

    /// Whether this fighter is alive
    pub fn is_alive(&self) -> bool {
        self.current_hp > 0.0
    }

    /// HP as a 0.0-1.0 fraction
    pub fn hp_fraction(&self) -> f32 {
        if self.stats.max_hp <= 0.0 {
            return 0.0;
        }
        (self.current_hp / self.stats.max_hp).clamp(0.0, 1.0)
    }

    /// Apply damage. Returns true if this hit was lethal.
    pub fn take_damage(&mut self, amount: f32) -> bool {
        if !self.is_alive() {
            return false;
        }
        self.current_hp = (self.current_hp - amount).max(0.0);
        !self.is_alive()
    }

    /// Resolve an incoming hit against `engine`'s guard before committing HP loss.
    /// Returns `None` if the guard nullified it, otherwise whether it was lethal.
    pub fn receive_hit(&mut self, engine: &mut SkillEngine, amount: f32) -> Option<bool> {
        if engine.on_incoming_attack() {
            return None;
        }
        Some(self.take_damage(amount))
    }

    /// Stats with every active modifier folded in
    pub fn effective_stats(&self) -> CombatStats {
        self.ledger.effective_stats(&self.stats)
    }

    /// Move speed after modifiers and slows; zero while rooted or stunned
    pub fn current_move_speed(&self) -> f32 {
        if self.ledger.movement_prevented() {
            return 0.0;
        }
        self.effective_stats().move_speed * self.ledger.move_speed_factor()
    }

    /// Advance modifiers and status effects
    pub fn tick(&mut self, delta_ms: f64) {
        self.ledger.update(delta_ms);
    }
}

impl Combatant for Fighter {
    fn position(&self) -> Vec2 {
        self.position
    }

    fn set_position(&mut self, position: Vec2) {
        self.position = position;
    }

    fn stats(&self) -> &CombatStats {
        &self.stats
    }

    fn ledger(&self) -> &ModifierLedger {
        &self.ledger
    }

    fn ledger_mut(&mut self) -> &mut ModifierLedger {
        &mut self.ledger
    }

    fn take_damage(&mut self, amount: f32) -> bool {
        Fighter::take_damage(self, amount)
    }
}

impl CombatTarget for Fighter {
    fn is_active(&self) -> bool {
        self.active
    }

    fn is_alive(&self) -> bool {
        Fighter::is_alive(self)
    }

    fn position(&self) -> Vec2 {
        self.position
    }

    fn defense(&self) -> f32 {
        self.effective_stats().defense
    }

    fn hitbox_radius(&self) -> f32 {
        self.hitbox_radius
    }

    fn take_damage(&mut self, amount: f32) -> bool {
        Fighter::take_damage(self, amount)
    }

    fn apply_status(&mut self, effect: StatusEffect) -> bool {
        self.ledger.apply_status(effect)
    }
}
