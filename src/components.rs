//! Component types carried by simulated bodies.
//!
//! Each behaviour's state is a plain component owned by its entity, so the
//! state lives and dies with the body it belongs to. Which behaviours a body
//! has is expressed by which components are present.
use bevy::prelude::*;
use serde::Serialize;

/// Horizontal velocity owned by a body's locomotion behaviour.
///
/// Attached lazily: a body spawned without it gains the component when its
/// first move command is applied.
#[derive(Component, Debug, Clone, Copy, Default, PartialEq, Serialize)]
pub struct Velocity {
    /// Velocity along the x axis.
    pub vx: f32,
    /// Velocity along the z axis.
    pub vz: f32,
}

impl Velocity {
    /// Creates a velocity of exactly `(vx, vz)`.
    #[must_use]
    pub const fn new(vx: f32, vz: f32) -> Self {
        Self { vx, vz }
    }
}

/// Hit points with an upper bound.
#[derive(Component, Debug, Clone, PartialEq, Serialize)]
pub struct Health {
    /// Current hit points.
    pub current: f32,
    /// Upper bound enforced by [`heal`](Health::heal).
    pub max: f32,
}

impl Health {
    /// Creates a health pool at `current` out of `max`.
    #[must_use]
    pub const fn new(current: f32, max: f32) -> Self {
        Self { current, max }
    }

    /// Adds `amount` to the current hit points, saturating at `max`.
    ///
    /// Negative amounts are accepted and simply invert the direction; no
    /// validation is performed.
    pub fn heal(&mut self, amount: f32) {
        self.current = (self.current + amount).min(self.max);
    }

    /// Adds `amount` to the current hit points, flooring at zero.
    ///
    /// Damage is expressed as a negative `amount`; positive amounts invert
    /// the direction, mirroring [`heal`](Health::heal).
    pub fn take_damage(&mut self, amount: f32) {
        self.current = (self.current + amount).max(0.0);
    }
}

/// Free-form string value attached to an entity.
#[derive(Component, Debug, Clone, Default, PartialEq, Serialize)]
pub struct Label(String);

impl Label {
    /// Returns the current value; empty if never set.
    #[must_use]
    pub fn value(&self) -> &str {
        &self.0
    }

    /// Overwrites the value unconditionally.
    pub fn set_value(&mut self, value: impl Into<String>) {
        self.0 = value.into();
    }
}
