//! Systems applying body behaviours each tick.

use bevy::prelude::*;
use log::{debug, warn};

use crate::components::{Health, Velocity};
use crate::config::SimConfig;
use crate::physics::{decay_velocity, step_position};

use super::MoveInbox;

/// Drains the [`MoveInbox`] and applies each command.
///
/// A command sets the addressed body's velocity to exactly `(dx, dz)`,
/// overwriting any prior value. Bodies that have never moved gain their
/// [`Velocity`] component here; commands addressing a despawned entity are
/// dropped with a warning.
pub fn apply_move_commands_system(
    mut commands: Commands,
    mut inbox: ResMut<MoveInbox>,
    mut bodies: Query<&mut Velocity>,
) {
    for command in inbox.drain() {
        if let Ok(mut velocity) = bodies.get_mut(command.entity) {
            velocity.vx = command.dx;
            velocity.vz = command.dz;
        } else if let Ok(mut body) = commands.get_entity(command.entity) {
            body.insert(Velocity::new(command.dx, command.dz));
        } else {
            warn!("move command for despawned entity {:?} dropped", command.entity);
        }
    }
}

/// Advances every moving body by its velocity, then applies friction decay.
///
/// Runs unconditionally for each body carrying a [`Velocity`]; bodies that
/// have never received a move command lack the component and are untouched,
/// so ticking them is a positional no-op.
pub fn locomotion_system(
    config: Res<SimConfig>,
    mut bodies: Query<(&mut Transform, &mut Velocity)>,
) {
    for (mut transform, mut velocity) in &mut bodies {
        let (x, z) = step_position(
            (transform.translation.x, transform.translation.z),
            (velocity.vx, velocity.vz),
        );
        transform.translation.x = x;
        transform.translation.z = z;
        let (vx, vz) = decay_velocity((velocity.vx, velocity.vz), config.friction);
        velocity.vx = vx;
        velocity.vz = vz;
    }
}

/// Applies void damage to bodies strictly below the void floor.
///
/// A pure function of current position; bodies at or above the floor are
/// untouched.
pub fn void_damage_system(config: Res<SimConfig>, mut bodies: Query<(&Transform, &mut Health)>) {
    for (transform, mut health) in &mut bodies {
        if transform.translation.y < config.void_floor {
            health.take_damage(-config.void_damage);
            debug!(
                "void damage at y {}, health now {}",
                transform.translation.y, health.current
            );
        }
    }
}
