//! Driver for probability-density cross-sections through the nucleus in the $`xz`$ plane.

use std::fmt;

use anyhow::{self, format_err};
use derive_builder::Builder;
use ndarray::Array2;
use serde::{Deserialize, Serialize};

use crate::composition::{probability_density, visibility_scaled, wavefunction};
use crate::drivers::{default_a0, HydrogenDriver};
use crate::grid::{default_density_range, XZSlice};
use crate::io::format::{hydrogen_output, log_title, nice_bool, write_subtitle, HydrogenOutput};
use crate::io::{write_hydrogen_binary, HydrogenFileType};
use crate::wavefunction::QuantumState;


// ==================
// Struct definitions
// ==================

// ----------
// Parameters
// ----------

fn default_resolution() -> usize {
    800
}

/// Structure containing control parameters for density-slice sampling.
#[derive(Clone, Builder, Debug, PartialEq, Serialize, Deserialize)]
pub struct DensitySliceParams {
    /// The number of sample points along each side of the square slice.
    #[builder(default = "default_resolution()")]
    #[serde(default = "default_resolution")]
    pub resolution: usize,

    /// The half-width of the slice, in units of $`a_0`$. If `None`, $`5n^2`$ is used.
    #[builder(default = "None")]
    #[serde(default)]
    pub range: Option<f64>,

    /// The length scale $`a_0`$.
    #[builder(default = "default_a0()")]
    #[serde(default = "default_a0")]
    pub a0: f64,

    /// Optional name for saving the result as a binary file of type
    /// [`HydrogenFileType::Den`]. If `None`, the result will not be saved.
    #[builder(default = "None")]
    #[serde(default)]
    pub result_save_name: Option<String>,
}

impl DensitySliceParams {
    /// Returns a builder to construct a [`DensitySliceParams`] structure.
    pub fn builder() -> DensitySliceParamsBuilder {
        DensitySliceParamsBuilder::default()
    }
}

impl Default for DensitySliceParams {
    fn default() -> Self {
        Self::builder()
            .build()
            .expect("Unable to construct a default `DensitySliceParams`.")
    }
}

impl fmt::Display for DensitySliceParams {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(
            f,
            "Slice resolution: {} × {}",
            self.resolution, self.resolution
        )?;
        writeln!(
            f,
            "Slice half-width: {}",
            self.range
                .map(|r| format!("{r:.3} a0"))
                .unwrap_or_else(|| "5n² a0 (automatic)".to_string())
        )?;
        writeln!(f, "Length scale a0: {:.6}", self.a0)?;
        writeln!(
            f,
            "Save density slice to file: {}",
            if let Some(name) = self.result_save_name.as_ref() {
                HydrogenFileType::Den.path_for(name).display().to_string()
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

/// Structure containing a sampled density slice. Rows run along $`z`$ from $`-R`$ to $`+R`$ and
/// columns along $`x`$ from $`-R`$ to $`+R`$.
#[derive(Clone, Builder, Debug, Serialize, Deserialize)]
pub struct DensitySliceResult {
    /// The control parameters used to obtain this set of results.
    pub parameters: DensitySliceParams,

    /// The quantum state sampled.
    pub state: QuantumState,

    /// The plotting extent `[x_min, x_max, z_min, z_max]`.
    pub extent: [f64; 4],

    /// The wavefunction $`\psi_{nlm}`$ on the slice.
    pub psi: Array2<f64>,

    /// The probability density $`\lvert\psi\rvert^2`$ on the slice.
    pub density: Array2<f64>,

    /// The square root of the density, which keeps outer lobes visible.
    pub scaled_density: Array2<f64>,
}

impl DensitySliceResult {
    fn builder() -> DensitySliceResultBuilder {
        DensitySliceResultBuilder::default()
    }

    /// Returns the largest sampled density and the $`(x, z)`$ position at which it occurs.
    pub fn peak(&self) -> (f64, (f64, f64)) {
        let (nz, nx) = self.density.dim();
        let [xmin, xmax, zmin, zmax] = self.extent;
        let coord = |i: usize, n: usize, lo: f64, hi: f64| {
            if n > 1 {
                lo + (hi - lo) * i as f64 / (n - 1) as f64
            } else {
                lo
            }
        };
        self.density
            .indexed_iter()
            .fold((f64::MIN, (0.0, 0.0)), |acc, ((i, j), &v)| {
                if v > acc.0 {
                    (v, (coord(j, nx, xmin, xmax), coord(i, nz, zmin, zmax)))
                } else {
                    acc
                }
            })
    }
}

impl fmt::Display for DensitySliceResult {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write_subtitle(f, "Density slice summary")?;
        let (nz, nx) = self.density.dim();
        let (peak, (x, z)) = self.peak();
        writeln!(f, "State: {}", self.state)?;
        writeln!(
            f,
            "Extent: x ∈ [{:.2}, {:.2}] a0, z ∈ [{:.2}, {:.2}] a0",
            self.extent[0], self.extent[1], self.extent[2], self.extent[3]
        )?;
        writeln!(f, "Samples: {nx} × {nz}")?;
        writeln!(f, "Peak |ψ|²: {peak:.6e} at (x, z) = ({x:+.3}, {z:+.3}) a0")?;
        Ok(())
    }
}

// ------
// Driver
// ------

/// Driver for sampling the probability density of a hydrogenic orbital on the $`xz`$ plane.
#[derive(Clone, Builder)]
pub struct DensitySliceDriver<'a> {
    /// The control parameters for density-slice sampling.
    parameters: &'a DensitySliceParams,

    /// The principal quantum number.
    n: u32,

    /// The orbital angular momentum quantum number.
    l: u32,

    /// The magnetic quantum number.
    m: i32,

    /// The result of the sampling.
    #[builder(setter(skip), default = "None")]
    result: Option<DensitySliceResult>,
}

impl<'a> DensitySliceDriver<'a> {
    /// Returns a builder to construct a [`DensitySliceDriver`] structure.
    pub fn builder() -> DensitySliceDriverBuilder<'a> {
        DensitySliceDriverBuilder::default()
    }

    /// Samples $`\psi`$ and $`\lvert\psi\rvert^2`$ on the $`xz`$ plane.
    fn sample_density_slice(&mut self) -> Result<(), anyhow::Error> {
        log_title(&format!(
            "Electron Density Cross-Section (n={}, l={}, m={})",
            self.n, self.l, self.m
        ));
        hydrogen_output!("");
        let params = self.parameters;
        params.log_output_display();

        let state = QuantumState::new(self.n, self.l, self.m)?;
        let range = params.range.unwrap_or_else(|| default_density_range(self.n));
        let slice = XZSlice::new(range, params.resolution);
        let psi = wavefunction(&state, &slice.r, &slice.theta, &slice.phi, params.a0)?;
        let density = probability_density(&psi);
        let scaled_density = visibility_scaled(&density);
        log::debug!(
            "Density slice for {} sampled on a {:?} grid.",
            state,
            slice.dim()
        );

        let result = DensitySliceResult::builder()
            .parameters(params.clone())
            .state(state)
            .extent(slice.extent())
            .psi(psi)
            .density(density)
            .scaled_density(scaled_density)
            .build()
            .map_err(|err| format_err!(err))?;

        result.log_output_display();
        hydrogen_output!("");

        if let Some(name) = params.result_save_name.as_ref() {
            write_hydrogen_binary(name, HydrogenFileType::Den, &result)?;
            hydrogen_output!(
                "Density slice saved as {}.",
                HydrogenFileType::Den.path_for(name).display()
            );
            hydrogen_output!("");
        }

        self.result = Some(result);
        Ok(())
    }
}

impl<'a> HydrogenDriver for DensitySliceDriver<'a> {
    type Params = DensitySliceParams;

    type Outcome = DensitySliceResult;

    fn result(&self) -> Result<&Self::Outcome, anyhow::Error> {
        self.result
            .as_ref()
            .ok_or_else(|| format_err!("No density slice results found."))
    }

    fn run(&mut self) -> Result<(), anyhow::Error> {
        self.sample_density_slice()
    }
}
