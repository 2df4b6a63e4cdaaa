//! Behaviour systems and their plugin.
//!
//! This module provides a [`SimulationPlugin`] that wires the body
//! behaviours into the `Update` schedule. One schedule run is one
//! simulation tick: buffered move commands are applied first, then
//! locomotion, then the void hazard. The underlying systems are also
//! exposed for tests.

mod move_inbox;
mod plugin;
mod systems;

pub use move_inbox::{MoveCommand, MoveInbox};
pub use plugin::SimulationPlugin;
pub use systems::{apply_move_commands_system, locomotion_system, void_damage_system};
