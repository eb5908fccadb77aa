//! Skirmish Core - Core types and utilities for the Skirmish combat core
//!
//! This crate provides the foundational types used throughout the workspace:
//! - Mathematical primitives (re-exported from glam)
//! - Entity identity and the playable arena rectangle
//! - Simulation clock producing `(now_ms, delta_ms)` pairs

pub mod time;
pub mod types;

pub use glam::Vec2;
pub use time::{ClockConfig, SimClock};
pub use types::{ArenaBounds, EntityId};
