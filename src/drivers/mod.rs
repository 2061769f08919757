//! Drivers that sample hydrogenic wavefunctions for the three visualisation modes.

use anyhow;

pub mod density_slice;
pub mod orbital_shape;
pub mod radial_distribution;

// =================
// Trait definitions
// =================

/// Trait defining behaviours of drivers.
pub trait HydrogenDriver {
    /// The type of the parameter structure controlling the driver.
    type Params;

    /// The type of the successful outcome when executing the driver.
    type Outcome;

    /// Executes the driver and stores the result internally.
    fn run(&mut self) -> Result<(), anyhow::Error>;

    /// Returns the result of the driver execution.
    fn result(&self) -> Result<&Self::Outcome, anyhow::Error>;
}

// ================
// Shared functions
// ================

fn default_a0() -> f64 {
    crate::wavefunction::DEFAULT_BOHR_RADIUS
}
