//! Combat model
//!
//! Provides combat stats, the damage pipeline, crit randomness, and the
//! modifier ledger (buffs and status effects).

pub mod damage;
pub mod ledger;
pub mod modifier;
pub mod rng;
pub mod stats;
pub mod status;

pub use damage::{
    AbilityDamage, CRIT_MULTIPLIER, DamageResult, apply_modifiers, attack_interval_ms,
    mitigation_fraction, resolve_ability_damage, resolve_basic_attack, resolve_true_damage,
};
pub use ledger::ModifierLedger;
pub use modifier::{Modifier, ModifierKind};
pub use rng::{CritRoll, FixedRoll, SeededRng};
pub use stats::CombatStats;
pub use status::{StatusEffect, StatusKind};
