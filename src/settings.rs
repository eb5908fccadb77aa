//! Sandbox settings with persistence
//!
//! Settings are read from `~/.config/skirmish/sandbox.toml` unless a path is
//! given on the command line.

use std::fs;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};
use skirmish_combat::{CombatStats, EngineConfig};
use tracing::{info, warn};

/// All sandbox settings
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct SandboxSettings {
    #[serde(default)]
    pub engine: EngineConfig,
    #[serde(default)]
    pub scenario: ScenarioSettings,
}

impl SandboxSettings {
    /// Get the config directory path
    fn config_dir() -> Option<PathBuf> {
        dirs::config_dir().map(|p| p.join("skirmish"))
    }

    /// Get the default settings file path
    pub fn default_path() -> Option<PathBuf> {
        Self::config_dir().map(|p| p.join("sandbox.toml"))
    }

    /// Load settings from `path` (or the default location), falling back to
    /// defaults if missing, unreadable, or invalid
    pub fn load(path: Option<&Path>) -> Self {
        let path = match path {
            Some(p) => p.to_path_buf(),
            None => match Self::default_path() {
                Some(p) => p,
                None => {
                    warn!("Could not determine config directory");
                    return Self::default();
                }
            },
        };

        if !path.exists() {
            info!("No settings file at {:?}, using defaults", path);
            return Self::default();
        }

        let content = match fs::read_to_string(&path) {
            Ok(content) => content,
            Err(e) => {
                warn!("Failed to read settings file: {}, using defaults", e);
                return Self::default();
            }
        };

        let settings: Self = match toml::from_str(&content) {
            Ok(settings) => settings,
            Err(e) => {
                warn!("Failed to parse settings: {}, using defaults", e);
                return Self::default();
            }
        };

        if let Err(e) = settings.engine.validate() {
            warn!("Invalid engine config: {}, using defaults", e);
            return Self::default();
        }
        if let Err(e) = settings.scenario.validate() {
            warn!("Invalid scenario: {}, using defaults", e);
            return Self::default();
        }

        info!("Loaded settings from {:?}", path);
        settings
    }

    /// Save settings to the default location
    pub fn save(&self) -> anyhow::Result<PathBuf> {
        let Some(dir) = Self::config_dir() else {
            anyhow::bail!("Could not determine config directory");
        };

        let path = dir.join("sandbox.toml");

        // Create config directory if it doesn't exist
        if !dir.exists() {
            fs::create_dir_all(&dir)?;
        }

        let content = toml::to_string_pretty(self)?;
        fs::write(&path, content)?;
        info!("Saved settings to {:?}", path);
        Ok(path)
    }
}

/// Invalid scenario data
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum ScenarioError {
    #[error("{0} must be positive, got {1}")]
    NonPositive(&'static str, f64),

    #[error("{0} must be non-negative, got {1}")]
    Negative(&'static str, f64),
}

fn positive(name: &'static str, value: f64) -> Result<(), ScenarioError> {
    if value > 0.0 && value.is_finite() {
        Ok(())
    } else {
        Err(ScenarioError::NonPositive(name, value))
    }
}

fn non_negative(name: &'static str, value: f64) -> Result<(), ScenarioError> {
    if value >= 0.0 && value.is_finite() {
        Ok(())
    } else {
        Err(ScenarioError::Negative(name, value))
    }
}

/// The scripted encounter the sandbox plays out
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct ScenarioSettings {
    /// Crit RNG seed; omitted means a random seed
    pub seed: Option<u64>,
    /// Simulated session length
    pub duration_ms: f64,
    /// Host frame length fed to the clock
    pub frame_ms: f64,
    /// Fixed simulation step; each frame runs as many steps as have accumulated
    pub step_ms: f64,
    pub enemy_count: usize,
    /// Enemies spawn on a ring around the arena center
    pub spawn_radius: f32,
    pub player: CombatStats,
    pub enemy: CombatStats,
    /// Player basic attack reach before the control rod bonus
    pub player_range: f32,
    /// Enemy melee reach
    pub enemy_range: f32,
    /// Enemies fire a bullet at the player this often
    pub volley_interval_ms: f64,
    pub bullet_speed: f32,
    pub bullet_damage: f32,
    /// Abilities fire once an enemy is this close
    pub ability_trigger_range: f32,
}

impl Default for ScenarioSettings {
    fn default() -> Self {
        Self {
            seed: Some(7),
            duration_ms: 30_000.0,
            frame_ms: 1000.0 / 60.0,
            step_ms: 1000.0 / 60.0,
            enemy_count: 8,
            spawn_radius: 300.0,
            player: CombatStats::new(600.0, 45.0, 40.0, 0.2).with_attack_speed(2.0),
            enemy: CombatStats::new(180.0, 18.0, 20.0, 0.05).with_attack_speed(0.8),
            player_range: 140.0,
            enemy_range: 40.0,
            volley_interval_ms: 1_500.0,
            bullet_speed: 0.25,
            bullet_damage: 12.0,
            ability_trigger_range: 200.0,
        }
    }
}

impl ScenarioSettings {
    /// Check that the encounter can run to completion
    pub fn validate(&self) -> Result<(), ScenarioError> {
        non_negative("duration_ms", self.duration_ms)?;
        positive("frame_ms", self.frame_ms)?;
        positive("step_ms", self.step_ms)?;
        positive("player.attack_speed", self.player.attack_speed as f64)?;
        positive("enemy.attack_speed", self.enemy.attack_speed as f64)?;
        positive("volley_interval_ms", self.volley_interval_ms)?;
        non_negative("spawn_radius", self.spawn_radius as f64)?;
        non_negative("player_range", self.player_range as f64)?;
        non_negative("enemy_range", self.enemy_range as f64)?;
        non_negative("ability_trigger_range", self.ability_trigger_range as f64)?;
        non_negative("bullet_speed", self.bullet_speed as f64)?;
        non_negative("bullet_damage", self.bullet_damage as f64)?;
        Ok(())
    }
}
