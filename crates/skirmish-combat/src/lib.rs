//! Skirmish Combat - Action-combat resolution core
//!
//! Provides the damage model, the modifier ledger for buffs and status effects,
//! and the per-combatant skill execution engine.

pub mod combat;
pub mod fighter;
pub mod skill;

pub use fighter::Fighter;

// Combat model re-exports
pub use combat::{
    AbilityDamage, CombatStats, CritRoll, DamageResult, FixedRoll, Modifier, ModifierKind,
    ModifierLedger, SeededRng, StatusEffect, StatusKind, apply_modifiers, attack_interval_ms,
    mitigation_fraction, resolve_ability_damage, resolve_basic_attack, resolve_true_damage,
};

// Skill engine re-exports
pub use skill::{
    Ability, AbilityId, CombatFeedback, CombatTarget, Combatant, ConfigError, CounterOutcome,
    EngineConfig, GuardPhase, NoFeedback, Projectile, SkillConfigError, SkillContext, SkillEngine,
    SkillLoadout, SkillSlot,
};
