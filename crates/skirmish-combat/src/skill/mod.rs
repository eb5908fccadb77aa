//! Skill execution
//!
//! Ability definitions and loadout config, cooldown bookkeeping, the guard
//! state machine, area hit tests, and the per-combatant engine that ties them
//! together.

pub mod ability;
pub mod config;
pub mod control_rod;
pub mod cooldown;
pub mod engine;
pub mod feedback;
pub mod geometry;
pub mod guard;
pub mod traits;

pub use ability::{
    Ability, AbilityId, BulletClearConfig, ControlRodConfig, GuardCounterConfig, SkillSlot,
    StunBurstConfig, WarpConfig, SLOT_COUNT,
};
pub use config::{ConfigError, EngineConfig, SkillConfigError, SkillLoadout};
pub use control_rod::ControlRodState;
pub use cooldown::CooldownBook;
pub use engine::SkillEngine;
pub use feedback::{CombatFeedback, NoFeedback};
pub use geometry::{Trapezoid, direction_angle, within_radius};
pub use guard::{CounterOutcome, GuardPhase, GuardResolution, GuardWindow};
pub use traits::{CombatTarget, Combatant, Projectile, SkillContext};
