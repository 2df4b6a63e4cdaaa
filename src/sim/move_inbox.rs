//! Buffered move commands awaiting the next tick.

use bevy::prelude::{Entity, Resource};

/// Request to set a body's velocity to exactly `(dx, dz)`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct MoveCommand {
    /// Body whose velocity is overwritten.
    pub entity: Entity,
    /// New velocity along the x axis.
    pub dx: f32,
    /// New velocity along the z axis.
    pub dz: f32,
}

/// Move commands buffered until [`apply_move_commands_system`] drains them.
///
/// [`apply_move_commands_system`]: crate::sim::apply_move_commands_system
#[derive(Resource, Default)]
pub struct MoveInbox {
    commands: Vec<MoveCommand>,
}

impl MoveInbox {
    /// Queues a single command.
    pub fn push(&mut self, command: MoveCommand) {
        self.commands.push(command);
    }

    /// Queues a batch of commands.
    pub fn extend<I>(&mut self, commands: I)
    where
        I: IntoIterator<Item = MoveCommand>,
    {
        self.commands.extend(commands);
    }

    /// Drains all buffered commands in arrival order.
    pub fn drain(&mut self) -> std::vec::Drain<'_, MoveCommand> {
        self.commands.drain(..)
    }

    /// Returns `true` when no commands are buffered.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.commands.is_empty()
    }
}
