//! Core library for the bodkin body simulation.
//!
//! Behaviours that would classically be mixed into entity types through
//! default-method inheritance are modelled here as components plus systems:
//! locomotion state is a [`Velocity`] component, hit points are a
//! [`Health`] component, and the named-value behaviour is a [`Label`]
//! component. Attaching a behaviour to a body means inserting the matching
//! component, so behaviour state shares the entity's lifetime and cannot be
//! orphaned.
//!
//! [`SimulationPlugin`] installs the per-tick systems; the demo binaries
//! and the integration tests drive the schedule explicitly.

pub mod components;
pub mod config;
pub mod constants;
pub mod logging;
pub mod physics;
pub mod sim;

pub use constants::*;

// Re-export commonly used items
pub use components::{Health, Label, Velocity};
pub use config::{ConfigError, SimConfig};
pub use logging::init as init_logging;
pub use physics::{decay_velocity, step_position};
pub use sim::{MoveCommand, MoveInbox, SimulationPlugin};

pub mod prelude {
    //! Prelude exports used in documentation examples.
    //!
    //! ```rust,no_run
    //! use bodkin::prelude::*;
    //! ```

    pub use crate::components::{Health, Label, Velocity};
    pub use crate::sim::{MoveCommand, MoveInbox, SimulationPlugin};
    pub use crate::SimConfig;
}
