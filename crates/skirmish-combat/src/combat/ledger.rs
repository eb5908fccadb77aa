//! Modifier ledger
//!
//! Holds, ticks down, and exposes the buffs and status effects active on one
//! combatant. Expiry is purely time based: every [`ModifierLedger::update`]
//! subtracts the frame delta and drops entries at or below zero the same tick.

use tracing::debug;

use super::damage::apply_modifiers;
use super::modifier::{Modifier, ModifierKind};
use super::stats::CombatStats;
use super::status::{StatusEffect, StatusKind};

/// All active modifiers and status effects on a combatant
#[derive(Debug, Clone, Default)]
pub struct ModifierLedger {
    modifiers: Vec<Modifier>,
    statuses: Vec<StatusEffect>,
}

impl ModifierLedger {
    /// Create a new empty ledger
    pub fn new() -> Self {
        Self::default()
    }

    /// Grant a modifier. Entries from different sources never merge; a repeat
    /// from the same source refreshes to the longer duration. Already-expired
    /// modifiers are ignored.
    pub fn add_modifier(&mut self, modifier: Modifier) {
        if modifier.is_expired() {
            return;
        }
        if let Some(existing) = self
            .modifiers
            .iter_mut()
            .find(|m| m.kind == modifier.kind && m.source == modifier.source)
        {
            existing.multiplier = modifier.multiplier;
            existing.remaining_ms = existing.remaining_ms.max(modifier.remaining_ms);
            existing.stack_count = modifier.stack_count.or(existing.stack_count);
        } else {
            self.modifiers.push(modifier);
        }
    }

    /// Apply a status effect. Returns false if it was rejected by CC immunity
    /// or arrived with no duration left.
    ///
    /// While `CcImmune` is active every other kind is dropped; a new `CcImmune`
    /// is still accepted and refreshes or extends the immunity.
    pub fn apply_status(&mut self, effect: StatusEffect) -> bool {
        if effect.is_expired() {
            return false;
        }
        if effect.kind != StatusKind::CcImmune && self.is_cc_immune() {
            debug!(kind = effect.kind.name(), "status rejected by cc immunity");
            return false;
        }

        if let Some(existing) = self
            .statuses
            .iter_mut()
            .find(|s| s.kind == effect.kind && s.source == effect.source)
        {
            existing.remaining_ms = existing.remaining_ms.max(effect.remaining_ms);
            if effect.value.is_some() {
                existing.value = effect.value;
            }
        } else if effect.kind == StatusKind::CcImmune {
            // Immunity from any source extends the one window
            match self.statuses.iter_mut().find(|s| s.kind == StatusKind::CcImmune) {
                Some(existing) => {
                    existing.remaining_ms = existing.remaining_ms.max(effect.remaining_ms)
                }
                None => self.statuses.push(effect),
            }
        } else {
            self.statuses.push(effect);
        }
        true
    }

    /// Advance every entry by `delta_ms` and remove the expired ones
    pub fn update(&mut self, delta_ms: f64) {
        for modifier in &mut self.modifiers {
            modifier.remaining_ms -= delta_ms;
        }
        for status in &mut self.statuses {
            status.remaining_ms -= delta_ms;
        }
        self.modifiers.retain(|m| !m.is_expired());
        self.statuses.retain(|s| !s.is_expired());
    }

    /// Base stats with every active modifier folded in
    pub fn effective_stats(&self, base: &CombatStats) -> CombatStats {
        apply_modifiers(base, &self.modifiers)
    }

    /// Active modifiers
    pub fn modifiers(&self) -> &[Modifier] {
        &self.modifiers
    }

    /// Active status effects
    pub fn statuses(&self) -> &[StatusEffect] {
        &self.statuses
    }

    /// Combined multiplier of every active modifier of `kind`
    pub fn combined_multiplier(&self, kind: ModifierKind) -> f32 {
        let matching = self.modifiers.iter().filter(|m| m.kind == kind);
        if kind.is_additive() {
            1.0 + matching.map(|m| m.multiplier - 1.0).sum::<f32>()
        } else {
            matching.map(|m| m.multiplier).product()
        }
    }

    /// Check if a specific status type is active
    pub fn has_status(&self, kind: StatusKind) -> bool {
        self.statuses.iter().any(|s| s.kind == kind)
    }

    pub fn is_stunned(&self) -> bool {
        self.has_status(StatusKind::Stun)
    }

    pub fn is_cc_immune(&self) -> bool {
        self.has_status(StatusKind::CcImmune)
    }

    /// Whether any active effect prevents movement
    pub fn movement_prevented(&self) -> bool {
        self.statuses.iter().any(|s| s.prevents_movement())
    }

    /// Whether any active effect prevents skill usage
    pub fn skills_prevented(&self) -> bool {
        self.statuses.iter().any(|s| s.prevents_skills())
    }

    /// Move speed factor from active slows: product of `1 - value`, never negative
    pub fn move_speed_factor(&self) -> f32 {
        self.statuses
            .iter()
            .filter(|s| s.kind == StatusKind::Slow)
            .filter_map(|s| s.value)
            .map(|v| (1.0 - v).max(0.0))
            .product()
    }

    /// Remove all entries
    pub fn clear(&mut self) {
        self.modifiers.clear();
        self.statuses.clear();
    }

    /// Number of active entries (modifiers + statuses)
    pub fn count(&self) -> usize {
        self.modifiers.len() + self.statuses.len()
    }
}
