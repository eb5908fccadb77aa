//! Ability definitions
//!
//! The five activatable behaviors form a closed set. Each variant carries its
//! own tuning payload, so adding a sixth forces every dispatch site to handle it.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::combat::AbilityDamage;

/// Number of player-assignable ability slots
pub const SLOT_COUNT: usize = 2;

/// Stable ability identity, independent of the slot it is bound to
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum AbilityId {
    Warp,
    StunBurst,
    GuardCounter,
    ControlRod,
    BulletClear,
}

impl AbilityId {
    /// Config/log name
    pub fn name(self) -> &'static str {
        match self {
            Self::Warp => "warp",
            Self::StunBurst => "stun_burst",
            Self::GuardCounter => "guard_counter",
            Self::ControlRod => "control_rod",
            Self::BulletClear => "bullet_clear",
        }
    }
}

impl fmt::Display for AbilityId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// One of the two input-bound ability slots
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum SkillSlot {
    Primary,
    Secondary,
}

impl SkillSlot {
    pub fn index(self) -> usize {
        match self {
            Self::Primary => 0,
            Self::Secondary => 1,
        }
    }
}

/// Instant reposition toward the aim point
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct WarpConfig {
    pub cooldown_ms: f64,
    /// Farther aim points are clamped along the aim direction
    pub max_range: f32,
}

impl Default for WarpConfig {
    fn default() -> Self {
        Self {
            cooldown_ms: 6_000.0,
            max_range: 250.0,
        }
    }
}

/// Stun every live enemy around the caster
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct StunBurstConfig {
    pub cooldown_ms: f64,
    pub radius: f32,
    pub stun_ms: f64,
}

impl Default for StunBurstConfig {
    fn default() -> Self {
        Self {
            cooldown_ms: 12_000.0,
            radius: 150.0,
            stun_ms: 1_500.0,
        }
    }
}

/// Guard window followed by a trapezoid counter-attack if something was blocked
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct GuardCounterConfig {
    pub cooldown_ms: f64,
    /// Length of the invulnerable guard window
    pub guard_ms: f64,
    /// Counter shape: width at the caster
    pub near_width: f32,
    /// Counter shape: width at the far edge
    pub far_width: f32,
    /// Counter shape: reach along the guard direction
    pub length: f32,
    pub damage: AbilityDamage,
    /// Share of the remaining cooldown removed after a successful block
    pub refund_fraction: f64,
}

impl Default for GuardCounterConfig {
    fn default() -> Self {
        Self {
            cooldown_ms: 10_000.0,
            guard_ms: 600.0,
            near_width: 60.0,
            far_width: 200.0,
            length: 260.0,
            damage: AbilityDamage::scaling(2.5),
            refund_fraction: 0.5,
        }
    }
}

/// Timed attack-power buff that also widens the caster's range
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ControlRodConfig {
    pub cooldown_ms: f64,
    pub duration_ms: f64,
    pub attack_multiplier: f32,
    pub range_bonus: f32,
}

impl Default for ControlRodConfig {
    fn default() -> Self {
        Self {
            cooldown_ms: 20_000.0,
            duration_ms: 6_000.0,
            attack_multiplier: 1.3,
            range_bonus: 80.0,
        }
    }
}

/// Deactivate every enemy projectile around the caster
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct BulletClearConfig {
    pub cooldown_ms: f64,
    pub radius: f32,
}

impl Default for BulletClearConfig {
    fn default() -> Self {
        Self {
            cooldown_ms: 15_000.0,
            radius: 200.0,
        }
    }
}

/// An ability bound to a slot, tagged by `id` in config files
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(tag = "id", rename_all = "snake_case")]
pub enum Ability {
    Warp(WarpConfig),
    StunBurst(StunBurstConfig),
    GuardCounter(GuardCounterConfig),
    ControlRod(ControlRodConfig),
    BulletClear(BulletClearConfig),
}

impl Ability {
    /// Get the ability's ID
    pub fn id(&self) -> AbilityId {
        match self {
            Self::Warp(_) => AbilityId::Warp,
            Self::StunBurst(_) => AbilityId::StunBurst,
            Self::GuardCounter(_) => AbilityId::GuardCounter,
            Self::ControlRod(_) => AbilityId::ControlRod,
            Self::BulletClear(_) => AbilityId::BulletClear,
        }
    }

    /// Full cooldown in milliseconds
    pub fn cooldown_ms(&self) -> f64 {
        match self {
            Self::Warp(c) => c.cooldown_ms,
            Self::StunBurst(c) => c.cooldown_ms,
            Self::GuardCounter(c) => c.cooldown_ms,
            Self::ControlRod(c) => c.cooldown_ms,
            Self::BulletClear(c) => c.cooldown_ms,
        }
    }

    /// Whether activation leaves a phase in flight
    pub fn is_multi_phase(&self) -> bool {
        matches!(self, Self::GuardCounter(_))
    }
}
