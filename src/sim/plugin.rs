//! Bevy plugin wiring the behaviour systems into the schedule.

use bevy::prelude::*;

use crate::config::SimConfig;

use super::{apply_move_commands_system, locomotion_system, void_damage_system, MoveInbox};

/// Bevy plugin installing the body behaviour systems.
///
/// One `Update` run is one simulation tick. Systems are chained so buffered
/// move commands take effect before locomotion, and locomotion before the
/// void hazard, matching the behaviour order of the original driver loop.
/// [`SimConfig`] is only initialised when absent, so callers may insert
/// their own before or after adding the plugin.
#[derive(Default)]
pub struct SimulationPlugin;

impl Plugin for SimulationPlugin {
    fn build(&self, app: &mut App) {
        app.init_resource::<SimConfig>();
        app.init_resource::<MoveInbox>();
        app.add_systems(
            Update,
            (
                apply_move_commands_system,
                locomotion_system,
                void_damage_system,
            )
                .chain(),
        );
    }
}
