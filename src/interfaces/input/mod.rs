//! YAML configuration input.

use std::path::Path;

use anyhow::{self, Context};
use serde::{Deserialize, Serialize};

use crate::drivers::density_slice::{DensitySliceDriver, DensitySliceParams};
use crate::drivers::orbital_shape::{OrbitalShapeDriver, OrbitalShapeParams};
use crate::drivers::radial_distribution::{RadialDistributionDriver, RadialDistributionParams};
use crate::drivers::HydrogenDriver;
use crate::interfaces::cli::Command;
use crate::interfaces::InputHandle;
use crate::io::read_hydrogen_yaml;


/// A structure containing render parameters which can be serialised into and deserialised from a
/// YAML input file. The quantum numbers themselves are given on the command line.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct Input {
    /// Parameters for orbital-shape sampling.
    ///
    /// # Default
    ///
    /// If not specified, [`OrbitalShapeParams::default`] is used.
    #[serde(default)]
    pub shape: OrbitalShapeParams,

    /// Parameters for density-slice sampling.
    ///
    /// # Default
    ///
    /// If not specified, [`DensitySliceParams::default`] is used.
    #[serde(default)]
    pub density: DensitySliceParams,

    /// Parameters for radial-distribution sampling.
    ///
    /// # Default
    ///
    /// If not specified, [`RadialDistributionParams::default`] is used.
    #[serde(default)]
    pub radial: RadialDistributionParams,
}

impl Input {
    /// Reads an input specification from a YAML file.
    ///
    /// # Errors
    ///
    /// Errors if the file cannot be opened or is not a valid input specification.
    pub fn from_yaml<P: AsRef<Path>>(path: P) -> Result<Self, anyhow::Error> {
        let path = path.as_ref();
        read_hydrogen_yaml::<Input, _>(path)
            .with_context(|| format!("Unable to read configuration file {}", path.display()))
    }
}

impl InputHandle for Input {
    fn handle(&self, command: &Command) -> Result<(), anyhow::Error> {
        match *command {
            Command::Shape { n, l, m } => {
                let mut driver = OrbitalShapeDriver::builder()
                    .parameters(&self.shape)
                    .n(n)
                    .l(l)
                    .m(m)
                    .build()
                    .context("Unable to set up the orbital-shape driver")?;
                driver.run()
            }
            Command::Density { n, l, m } => {
                let mut driver = DensitySliceDriver::builder()
                    .parameters(&self.density)
                    .n(n)
                    .l(l)
                    .m(m)
                    .build()
                    .context("Unable to set up the density-slice driver")?;
                driver.run()
            }
            Command::Radial { n, l } => {
                let mut driver = RadialDistributionDriver::builder()
                    .parameters(&self.radial)
                    .n(n)
                    .l(l)
                    .build()
                    .context("Unable to set up the radial-distribution driver")?;
                driver.run()
            }
        }
    }
}
