//! Engine configuration and load-time validation
//!
//! Ability tuning is external data. It is checked once here, when it is loaded,
//! so the engine itself never has to guard against degenerate shapes or
//! negative timers.

use std::fs;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};
use skirmish_core::ArenaBounds;
use tracing::info;

use super::ability::{
    Ability, AbilityId, ControlRodConfig, GuardCounterConfig, SkillSlot, SLOT_COUNT,
};

/// Invalid ability or arena data
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum SkillConfigError {
    #[error("{0}: cooldown must be non-negative, got {1}")]
    NegativeCooldown(AbilityId, f64),

    #[error("{0}: duration must be non-negative, got {1}")]
    NegativeDuration(AbilityId, f64),

    #[error("{0}: radius or range must be non-negative, got {1}")]
    NegativeRadius(AbilityId, f32),

    #[error("guard_counter: trapezoid length must be positive, got {0}")]
    ZeroLengthTrapezoid(f32),

    #[error("guard_counter: trapezoid widths must be non-negative, got near {0} far {1}")]
    NegativeWidth(f32, f32),

    #[error("guard_counter: refund fraction must be within 0..=1, got {0}")]
    RefundOutOfRange(f64),

    #[error("control_rod: attack multiplier must be positive, got {0}")]
    NonPositiveMultiplier(f32),

    #[error("ability {0} is bound to both slots")]
    DuplicateAbility(AbilityId),

    #[error("arena bounds must have positive extent")]
    DegenerateBounds,
}

/// Errors that can occur while loading an engine config
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("failed to read config file '{0}': {1}")]
    Read(PathBuf, std::io::Error),

    #[error("failed to parse config: {0}")]
    Parse(#[from] toml::de::Error),

    #[error(transparent)]
    Invalid(#[from] SkillConfigError),
}

/// The two abilities bound at session start
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct SkillLoadout {
    pub primary: Ability,
    pub secondary: Ability,
}

impl Default for SkillLoadout {
    fn default() -> Self {
        Self {
            primary: Ability::GuardCounter(GuardCounterConfig::default()),
            secondary: Ability::ControlRod(ControlRodConfig::default()),
        }
    }
}

impl SkillLoadout {
    pub fn new(primary: Ability, secondary: Ability) -> Self {
        Self { primary, secondary }
    }

    /// Ability bound to `slot`
    pub fn get(&self, slot: SkillSlot) -> &Ability {
        match slot {
            SkillSlot::Primary => &self.primary,
            SkillSlot::Secondary => &self.secondary,
        }
    }

    /// Both abilities in slot order
    pub fn abilities(&self) -> [&Ability; SLOT_COUNT] {
        [&self.primary, &self.secondary]
    }

    /// Check every ability payload and the slot pairing
    pub fn validate(&self) -> Result<(), SkillConfigError> {
        if self.primary.id() == self.secondary.id() {
            return Err(SkillConfigError::DuplicateAbility(self.primary.id()));
        }
        for ability in self.abilities() {
            validate_ability(ability)?;
        }
        Ok(())
    }
}

fn validate_ability(ability: &Ability) -> Result<(), SkillConfigError> {
    let id = ability.id();
    if ability.cooldown_ms() < 0.0 {
        return Err(SkillConfigError::NegativeCooldown(id, ability.cooldown_ms()));
    }

    match ability {
        Ability::Warp(c) => non_negative_radius(id, c.max_range),
        Ability::StunBurst(c) => {
            non_negative_radius(id, c.radius)?;
            non_negative_duration(id, c.stun_ms)
        }
        Ability::GuardCounter(c) => {
            non_negative_duration(id, c.guard_ms)?;
            if c.length <= 0.0 {
                return Err(SkillConfigError::ZeroLengthTrapezoid(c.length));
            }
            if c.near_width < 0.0 || c.far_width < 0.0 {
                return Err(SkillConfigError::NegativeWidth(c.near_width, c.far_width));
            }
            if !(0.0..=1.0).contains(&c.refund_fraction) {
                return Err(SkillConfigError::RefundOutOfRange(c.refund_fraction));
            }
            Ok(())
        }
        Ability::ControlRod(c) => {
            non_negative_duration(id, c.duration_ms)?;
            if c.attack_multiplier <= 0.0 {
                return Err(SkillConfigError::NonPositiveMultiplier(c.attack_multiplier));
            }
            Ok(())
        }
        Ability::BulletClear(c) => non_negative_radius(id, c.radius),
    }
}

fn non_negative_radius(id: AbilityId, radius: f32) -> Result<(), SkillConfigError> {
    if radius < 0.0 {
        return Err(SkillConfigError::NegativeRadius(id, radius));
    }
    Ok(())
}

fn non_negative_duration(id: AbilityId, duration_ms: f64) -> Result<(), SkillConfigError> {
    if duration_ms < 0.0 {
        return Err(SkillConfigError::NegativeDuration(id, duration_ms));
    }
    Ok(())
}

/// Everything a [`SkillEngine`](super::SkillEngine) needs at construction
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct EngineConfig {
    /// Playable area; warps never leave it
    #[serde(default)]
    pub bounds: ArenaBounds,
    #[serde(default)]
    pub loadout: SkillLoadout,
}

impl EngineConfig {
    /// Check arena and loadout
    pub fn validate(&self) -> Result<(), SkillConfigError> {
        if !self.bounds.is_valid() {
            return Err(SkillConfigError::DegenerateBounds);
        }
        self.loadout.validate()
    }

    /// Parse and validate a TOML document
    pub fn from_toml_str(content: &str) -> Result<Self, ConfigError> {
        let config: Self = toml::from_str(content)?;
        config.validate()?;
        Ok(config)
    }

    /// Read, parse and validate a TOML file
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let content =
            fs::read_to_string(path).map_err(|e| ConfigError::Read(path.to_path_buf(), e))?;
        let config = Self::from_toml_str(&content)?;
        info!(
            "Loaded engine config from {:?} ({} + {})",
            path,
            config.loadout.primary.id(),
            config.loadout.secondary.id()
        );
        Ok(config)
    }
}
