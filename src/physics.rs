//! Physics helper functions.
//!
//! Provides the locomotion arithmetic used by the simulation. These
//! functions operate on simple numeric tuples so they can be reused both
//! inside Bevy systems and in standalone unit tests.

/// Advances a horizontal position by one tick of velocity.
///
/// # Examples
///
/// ```
/// use bodkin::step_position;
/// let (x, z) = step_position((1.0, 2.0), (0.5, -1.0));
/// assert!((x - 1.5).abs() < 1e-6);
/// assert!((z - 1.0).abs() < 1e-6);
/// ```
#[must_use]
pub const fn step_position(position: (f32, f32), velocity: (f32, f32)) -> (f32, f32) {
    let (x, z) = position;
    let (vx, vz) = velocity;
    (x + vx, z + vz)
}

/// Scales a velocity by the friction factor.
///
/// Applied once per tick, unconditionally, so a velocity that is never
/// re-set decays geometrically towards zero.
///
/// # Examples
///
/// ```
/// use bodkin::decay_velocity;
/// let (vx, vz) = decay_velocity((1.0, -2.0), 0.9);
/// assert!((vx - 0.9).abs() < 1e-6);
/// assert!((vz + 1.8).abs() < 1e-6);
/// ```
#[must_use]
pub const fn decay_velocity(velocity: (f32, f32), friction: f32) -> (f32, f32) {
    let (vx, vz) = velocity;
    (vx * friction, vz * friction)
}
