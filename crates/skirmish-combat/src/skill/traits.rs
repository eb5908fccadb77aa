//! Collaborator interfaces
//!
//! The engine never owns the caster, enemies, or projectiles. The host
//! refreshes borrowed views of them each frame and passes them in through a
//! [`SkillContext`].

use glam::Vec2;

use crate::combat::{CombatStats, ModifierLedger, StatusEffect};

/// The combatant that owns a skill engine
pub trait Combatant {
    fn position(&self) -> Vec2;

    fn set_position(&mut self, position: Vec2);

    /// Base stats, before modifiers
    fn stats(&self) -> &CombatStats;

    fn ledger(&self) -> &ModifierLedger;

    fn ledger_mut(&mut self) -> &mut ModifierLedger;

    /// Apply damage. Returns true if the combatant died.
    fn take_damage(&mut self, amount: f32) -> bool;

    /// Stats with every active modifier folded in
    fn effective_stats(&self) -> CombatStats {
        self.ledger().effective_stats(self.stats())
    }
}

/// Something abilities can hit
pub trait CombatTarget {
    fn is_active(&self) -> bool;

    fn is_alive(&self) -> bool {
        self.is_active()
    }

    fn position(&self) -> Vec2;

    fn defense(&self) -> f32;

    fn hitbox_radius(&self) -> f32;

    /// Apply damage. Returns true if the target was destroyed.
    fn take_damage(&mut self, amount: f32) -> bool;

    /// Apply a status effect. Returns false if the target rejected it.
    fn apply_status(&mut self, effect: StatusEffect) -> bool;
}

/// An enemy bullet
pub trait Projectile {
    fn is_active(&self) -> bool;

    fn position(&self) -> Vec2;

    fn deactivate(&mut self);
}

/// Borrowed view of the world for one activation or update call
pub struct SkillContext<'a, C: ?Sized, E, P> {
    pub caster: &'a mut C,
    pub enemies: &'a mut [E],
    pub projectiles: &'a mut [P],
}

impl<'a, C: Combatant + ?Sized, E: CombatTarget, P: Projectile> SkillContext<'a, C, E, P> {
    pub fn new(caster: &'a mut C, enemies: &'a mut [E], projectiles: &'a mut [P]) -> Self {
        Self {
            caster,
            enemies,
            projectiles,
        }
    }
}
