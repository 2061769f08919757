//! Interfaces between the hydrogen-orbital drivers and the outside world.

use anyhow;

pub mod cli;
pub mod input;

use cli::Command;

/// Trait for handling an input specification.
pub trait InputHandle {
    /// Runs the driver selected by `command` with the parameters held in the input.
    fn handle(&self, command: &Command) -> Result<(), anyhow::Error>;
}
