//! Damage calculation pipeline
//!
//! Pure functions from (attacker stats, defender stats, ability descriptor) to a
//! [`DamageResult`]. The only non-determinism is the crit draw, which is taken
//! from an injected [`CritRoll`].

use serde::{Deserialize, Serialize};

use super::modifier::{Modifier, ModifierKind};
use super::rng::CritRoll;
use super::stats::CombatStats;

/// Raw damage multiplier applied on a critical basic attack
pub const CRIT_MULTIPLIER: f32 = 1.5;

/// Every successful non-true hit deals at least this much
const MIN_DAMAGE: f32 = 1.0;

/// Result of a damage calculation. Consumed immediately by the caller, never stored.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DamageResult {
    /// Damage before mitigation
    pub raw_damage: f32,
    /// Damage after mitigation, floored, never below 1
    pub final_damage: f32,
    /// Whether this was a critical hit
    pub is_critical: bool,
    /// Share of raw damage removed by defense (0.0 - 1.0)
    pub damage_reduction_fraction: f32,
}

/// Ability damage descriptor: `base_damage + attack_power * scaling_ratio * extra_multiplier`
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct AbilityDamage {
    pub base_damage: f32,
    pub scaling_ratio: f32,
    #[serde(default = "default_extra_multiplier")]
    pub extra_multiplier: f32,
}

fn default_extra_multiplier() -> f32 {
    1.0
}

impl AbilityDamage {
    /// Damage that scales purely off attack power
    pub fn scaling(scaling_ratio: f32) -> Self {
        Self {
            base_damage: 0.0,
            scaling_ratio,
            extra_multiplier: 1.0,
        }
    }
}

/// Fraction of raw damage that passes through `defense`.
///
/// `100 / (defense + 100)`: 0 defense passes everything, 100 passes half,
/// 200 passes a third.
pub fn mitigation_fraction(defense: f32) -> f32 {
    100.0 / (defense + 100.0)
}

/// Apply defense mitigation and the damage floor
fn mitigate(raw_damage: f32, is_critical: bool, defense: f32) -> DamageResult {
    let pass = mitigation_fraction(defense);
    DamageResult {
        raw_damage,
        final_damage: (raw_damage * pass).floor().max(MIN_DAMAGE),
        is_critical,
        damage_reduction_fraction: 1.0 - pass,
    }
}

/// Basic attack: `attack_power * aa_multiplier`, x1.5 on a crit roll
pub fn resolve_basic_attack(
    attacker: &CombatStats,
    defender: &CombatStats,
    rng: &mut impl CritRoll,
) -> DamageResult {
    let is_critical = rng.roll() < attacker.crit_chance;
    let crit_mult = if is_critical { CRIT_MULTIPLIER } else { 1.0 };
    let raw = attacker.attack_power * attacker.aa_multiplier * crit_mult;
    mitigate(raw, is_critical, defender.defense)
}

/// Ability damage. Never crits.
pub fn resolve_ability_damage(
    attacker: &CombatStats,
    defender: &CombatStats,
    descriptor: &AbilityDamage,
) -> DamageResult {
    let raw = descriptor.base_damage
        + attacker.attack_power * descriptor.scaling_ratio * descriptor.extra_multiplier;
    mitigate(raw, false, defender.defense)
}

/// True damage bypasses mitigation entirely
pub fn resolve_true_damage(amount: f32) -> DamageResult {
    DamageResult {
        raw_damage: amount,
        final_damage: amount.max(MIN_DAMAGE),
        is_critical: false,
        damage_reduction_fraction: 0.0,
    }
}

/// Fold modifiers left-to-right onto a copy of `base`.
///
/// Stat multipliers compose multiplicatively; crit chance composes additively
/// (`+= multiplier - 1`) so probability never compounds. The folded crit
/// chance is clamped to 0.0 - 1.0.
pub fn apply_modifiers<'a>(
    base: &CombatStats,
    modifiers: impl IntoIterator<Item = &'a Modifier>,
) -> CombatStats {
    let mut stats = *base;
    for modifier in modifiers {
        let m = modifier.multiplier;
        match modifier.kind {
            ModifierKind::AttackPower => stats.attack_power *= m,
            ModifierKind::AaMultiplier => stats.aa_multiplier *= m,
            ModifierKind::AttackSpeed => stats.attack_speed *= m,
            ModifierKind::MoveSpeed => stats.move_speed *= m,
            ModifierKind::Defense => stats.defense *= m,
            ModifierKind::CritChance => stats.crit_chance += m - 1.0,
        }
    }
    stats.set_crit_chance(stats.crit_chance);
    stats.set_defense(stats.defense);
    stats
}

/// Milliseconds between basic attacks.
///
/// Precondition: `attack_speed > 0`. Validated where stats are authored.
pub fn attack_interval_ms(attack_speed: f32) -> f32 {
    1000.0 / attack_speed
}
