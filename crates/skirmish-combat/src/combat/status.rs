//! Crowd-control status effects

use serde::{Deserialize, Serialize};
use skirmish_core::EntityId;

/// Types of status effects
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum StatusKind {
    Stun,
    /// `value` is the fraction of move speed removed
    Slow,
    Root,
    Silence,
    /// Rejects every other incoming status while active
    CcImmune,
}

impl StatusKind {
    /// Display name
    pub fn name(self) -> &'static str {
        match self {
            Self::Stun => "Stunned",
            Self::Slow => "Slowed",
            Self::Root => "Rooted",
            Self::Silence => "Silenced",
            Self::CcImmune => "Unstoppable",
        }
    }
}

/// An active status effect instance
#[derive(Debug, Clone, PartialEq)]
pub struct StatusEffect {
    pub kind: StatusKind,
    /// Remaining duration in milliseconds
    pub remaining_ms: f64,
    pub source: EntityId,
    pub value: Option<f32>,
}

impl StatusEffect {
    /// Create a status effect without a magnitude
    pub fn new(kind: StatusKind, duration_ms: f64, source: EntityId) -> Self {
        Self {
            kind,
            remaining_ms: duration_ms,
            source,
            value: None,
        }
    }

    /// Create a stun
    pub fn stun(duration_ms: f64, source: EntityId) -> Self {
        Self::new(StatusKind::Stun, duration_ms, source)
    }

    /// Create a slow removing `fraction` of move speed
    pub fn slow(fraction: f32, duration_ms: f64, source: EntityId) -> Self {
        Self {
            value: Some(fraction),
            ..Self::new(StatusKind::Slow, duration_ms, source)
        }
    }

    /// Whether this effect prevents movement
    pub fn prevents_movement(&self) -> bool {
        matches!(self.kind, StatusKind::Stun | StatusKind::Root)
    }

    /// Whether this effect prevents skill usage
    pub fn prevents_skills(&self) -> bool {
        matches!(self.kind, StatusKind::Stun | StatusKind::Silence)
    }

    /// Whether this effect has expired
    pub fn is_expired(&self) -> bool {
        self.remaining_ms <= 0.0
    }
}
