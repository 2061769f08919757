//! Driver for the angular shapes of orbitals, drawn as surfaces of radius
//! $`\lvert Y_{lm}(\theta, \phi) \rvert`$.

use std::fmt;

use anyhow::{self, format_err};
use derive_builder::Builder;
use itertools::Itertools;
use ndarray::{Array2, Zip};
use serde::{Deserialize, Serialize};

use crate::composition::{phases, Phase};
use crate::drivers::HydrogenDriver;
use crate::grid::{spherical_to_cartesian, AngularGrid};
use crate::io::format::{
    hydrogen_output, hydrogen_warn, log_title, nice_bool, write_subtitle, HydrogenOutput,
};
use crate::io::{write_hydrogen_binary, HydrogenFileType};
use crate::wavefunction::angmom_label;
use crate::wavefunction::angular::{par_evaluate_angular, MagneticKind};

#[cfg(test)]
#[path = "orbital_shape_tests.rs"]
mod orbital_shape_tests;

// ==================
// Struct definitions
// ==================

// ----------
// Parameters
// ----------

fn default_resolution() -> usize {
    100
}

/// Structure containing control parameters for orbital-shape sampling.
#[derive(Clone, Builder, Debug, PartialEq, Serialize, Deserialize)]
pub struct OrbitalShapeParams {
    /// The number of polar and of azimuthal angles in the angular mesh.
    #[builder(default = "default_resolution()")]
    #[serde(default = "default_resolution")]
    pub resolution: usize,

    /// Optional name for saving the result as a binary file of type
    /// [`HydrogenFileType::Shp`]. If `None`, the result will not be saved.
    #[builder(default = "None")]
    #[serde(default)]
    pub result_save_name: Option<String>,
}

impl OrbitalShapeParams {
    /// Returns a builder to construct a [`OrbitalShapeParams`] structure.
    pub fn builder() -> OrbitalShapeParamsBuilder {
        OrbitalShapeParamsBuilder::default()
    }
}

impl Default for OrbitalShapeParams {
    fn default() -> Self {
        Self::builder()
            .build()
            .expect("Unable to construct a default `OrbitalShapeParams`.")
    }
}

impl fmt::Display for OrbitalShapeParams {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(
            f,
            "Angular mesh resolution: {} × {}",
            self.resolution, self.resolution
        )?;
        writeln!(
            f,
            "Save orbital shape to file: {}",
            if let Some(name) = self.result_save_name.as_ref() {
                HydrogenFileType::Shp.path_for(name).display().to_string()
            } else {
                nice_bool(false)
            }
        )?;
        writeln!(f)?;
        Ok(())
    }
}

// ------
// Result
// ------

/// Structure containing a sampled orbital shape. Rows follow the azimuthal angle and columns the
/// polar angle of the underlying [`AngularGrid`].
#[derive(Clone, Builder, Debug, Serialize, Deserialize)]
pub struct OrbitalShapeResult {
    /// The control parameters used to obtain this set of results.
    pub parameters: OrbitalShapeParams,

    /// The principal quantum number. It only labels the shape, since $`Y_{lm}`$ does not depend
    /// on it.
    pub n: u32,

    /// The orbital angular momentum quantum number.
    pub l: u32,

    /// The magnetic quantum number.
    pub m: i32,

    /// The angular mesh.
    pub grid: AngularGrid,

    /// The real spherical harmonic $`Y_{lm}`$ on the mesh.
    pub ylm: Array2<f64>,

    /// The surface radius $`\lvert Y_{lm} \rvert`$.
    pub radius: Array2<f64>,

    /// Cartesian $`x`$ coordinates of the surface.
    pub x: Array2<f64>,

    /// Cartesian $`y`$ coordinates of the surface.
    pub y: Array2<f64>,

    /// Cartesian $`z`$ coordinates of the surface.
    pub z: Array2<f64>,

    /// The sign of $`Y_{lm}`$, used to colour the lobes.
    pub phases: Array2<Phase>,
}

impl OrbitalShapeResult {
    fn builder() -> OrbitalShapeResultBuilder {
        OrbitalShapeResultBuilder::default()
    }

    /// Returns the largest surface radius, which bounds the plotting box on every axis.
    pub fn extent(&self) -> f64 {
        self.radius.iter().copied().fold(0.0, f64::max)
    }

    /// Returns the number of mesh points with the given phase.
    pub fn phase_count(&self, phase: Phase) -> usize {
        self.phases.iter().filter(|&&p| p == phase).count()
    }
}

impl fmt::Display for OrbitalShapeResult {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write_subtitle(f, "Orbital shape summary")?;
        writeln!(
            f,
            "Orbital: {}{} (n={}, l={}, m={:+}), {}",
            self.n,
            angmom_label(self.l),
            self.n,
            self.l,
            self.m,
            MagneticKind::from_m(self.m)
        )?;
        let (nphi, ntheta) = self.grid.dim();
        writeln!(f, "Mesh: {nphi} azimuthal × {ntheta} polar angles")?;
        writeln!(f, "Largest surface radius: {:.6}", self.extent())?;
        writeln!(
            f,
            "Phase counts: {}",
            [Phase::Positive, Phase::Negative, Phase::Node]
                .iter()
                .map(|&p| format!("{p} {}", self.phase_count(p)))
                .join(", ")
        )?;
        Ok(())
    }
}

// ------
// Driver
// ------

/// Driver for sampling the angular shape of a hydrogenic orbital.
#[derive(Clone, Builder)]
pub struct OrbitalShapeDriver<'a> {
    /// The control parameters for orbital-shape sampling.
    parameters: &'a OrbitalShapeParams,

    /// The principal quantum number, used only as a label.
    #[builder(default = "1")]
    n: u32,

    /// The orbital angular momentum quantum number.
    l: u32,

    /// The magnetic quantum number.
    m: i32,

    /// The result of the sampling.
    #[builder(setter(skip), default = "None")]
    result: Option<OrbitalShapeResult>,
}

impl<'a> OrbitalShapeDriver<'a> {
    /// Returns a builder to construct a [`OrbitalShapeDriver`] structure.
    pub fn builder() -> OrbitalShapeDriverBuilder<'a> {
        OrbitalShapeDriverBuilder::default()
    }

    /// Samples $`Y_{lm}`$ on an angular mesh and builds the $`\lvert Y_{lm} \rvert`$ surface.
    fn sample_orbital_shape(&mut self) -> Result<(), anyhow::Error> {
        log_title(&format!(
            "Orbital Shape (n={}, l={}, m={})",
            self.n, self.l, self.m
        ));
        hydrogen_output!("");
        let params = self.parameters;
        params.log_output_display();

        if self.l >= self.n {
            hydrogen_warn!(
                "n={} cannot host l={}. The angular shape is still drawn, but n is only a label here.",
                self.n,
                self.l
            );
        }

        let grid = AngularGrid::new(params.resolution);
        let ylm = par_evaluate_angular(self.l, self.m, &grid.theta, &grid.phi)?;
        let radius = ylm.mapv(f64::abs);
        let points = Zip::from(&radius)
            .and(&grid.theta)
            .and(&grid.phi)
            .map_collect(|&r, &t, &p| spherical_to_cartesian(r, t, p));
        let x = points.mapv(|pt| pt.x);
        let y = points.mapv(|pt| pt.y);
        let z = points.mapv(|pt| pt.z);
        let phases = phases(&ylm);
        log::debug!(
            "Orbital shape for l={}, m={} sampled on a {:?} mesh.",
            self.l,
            self.m,
            grid.dim()
        );

        let result = OrbitalShapeResult::builder()
            .parameters(params.clone())
            .n(self.n)
            .l(self.l)
            .m(self.m)
            .grid(grid)
            .ylm(ylm)
            .radius(radius)
            .x(x)
            .y(y)
            .z(z)
            .phases(phases)
            .build()
            .map_err(|err| format_err!(err))?;

        result.log_output_display();
        hydrogen_output!("");

        if let Some(name) = params.result_save_name.as_ref() {
            write_hydrogen_binary(name, HydrogenFileType::Shp, &result)?;
            hydrogen_output!(
                "Orbital shape saved as {}.",
                HydrogenFileType::Shp.path_for(name).display()
            );
            hydrogen_output!("");
        }

        self.result = Some(result);
        Ok(())
    }
}

impl<'a> HydrogenDriver for OrbitalShapeDriver<'a> {
    type Params = OrbitalShapeParams;

    type Outcome = OrbitalShapeResult;

    fn result(&self) -> Result<&Self::Outcome, anyhow::Error> {
        self.result
            .as_ref()
            .ok_or_else(|| format_err!("No orbital shape results found."))
    }

    fn run(&mut self) -> Result<(), anyhow::Error> {
        self.sample_orbital_shape()
    }
}
