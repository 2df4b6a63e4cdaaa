//! Simulation constants used across systems.
//!
//! These are the built-in defaults; [`crate::SimConfig`] carries the
//! runtime-tunable copies.

/// Multiplicative decay applied to velocity every tick.
pub const FRICTION: f32 = 0.9;
/// Damage removed per tick while a body sits below the void floor.
pub const VOID_DAMAGE: f32 = 1.0;
/// Y coordinate below which the void starts.
pub const VOID_FLOOR: f32 = 0.0;
/// Health pool given to the demo body.
pub const DEMO_MAX_HEALTH: f32 = 10.0;
