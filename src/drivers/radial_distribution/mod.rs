//! Driver for radial distribution curves $`P(r) = r^2 \lvert R_{nl}(r) \rvert^2`$.

use std::fmt;

use anyhow::{self, format_err};
use derive_builder::Builder;
use ndarray::Array1;
use serde::{Deserialize, Serialize};

use crate::composition::{radial_distribution, trapezoid};
use crate::drivers::{default_a0, HydrogenDriver};
use crate::grid::{default_radial_extent, RadialLine};
use crate::io::format::{
    hydrogen_output, hydrogen_warn, log_title, nice_bool, write_subtitle, HydrogenOutput,
};
use crate::io::{write_hydrogen_binary, HydrogenFileType};
use crate::wavefunction::angmom_label;
use crate::wavefunction::radial::evaluate_radial;


/// Relative deviation of the sampled normalisation from unity above which the radial range is
/// reported as too short.
const NORMALISATION_TOLERANCE: f64 = 1e-2;

// ==================
// Struct definitions
// ==================

// ----------
// Parameters
// ----------

fn default_npoints() -> usize {
    1000
}

/// Structure containing control parameters for radial-distribution sampling.
#[derive(Clone, Builder, Debug, PartialEq, Serialize, Deserialize)]
pub struct RadialDistributionParams {
    /// The number of evenly spaced radii, including both end points.
    #[builder(default = "default_npoints()")]
    #[serde(default = "default_npoints")]
    pub npoints: usize,

    /// The outermost radius, in units of $`a_0`$. If `None`, $`3n^2 + 20`$ is used.
    #[builder(default = "None")]
    #[serde(default)]
    pub max_r: Option<f64>,

    /// The length scale $`a_0`$.
    #[builder(default = "default_a0()")]
    #[serde(default = "default_a0")]
    pub a0: f64,

    /// Optional name for saving the result as a binary file of type
    /// [`HydrogenFileType::Rad`]. If `None`, the result will not be saved.
    #[builder(default = "None")]
    #[serde(default)]
    pub result_save_name: Option<String>,
}

impl RadialDistributionParams {
    /// Returns a builder to construct a [`RadialDistributionParams`] structure.
    pub fn builder() -> RadialDistributionParamsBuilder {
        RadialDistributionParamsBuilder::default()
    }
}

impl Default for RadialDistributionParams {
    fn default() -> Self {
        Self::builder()
            .build()
            .expect("Unable to construct a default `RadialDistributionParams`.")
    }
}

impl fmt::Display for RadialDistributionParams {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Number of radial points: {}", self.npoints)?;
        writeln!(
            f,
            "Outermost radius: {}",
            self.max_r
                .map(|r| format!("{r:.3} a0"))
                .unwrap_or_else(|| "3n² + 20 a0 (automatic)".to_string())
        )?;
        writeln!(f, "Length scale a0: {:.6}", self.a0)?;
        writeln!(
            f,
            "Save radial distribution to file: {}",
            if let Some(name) = self.result_save_name.as_ref() {
                HydrogenFileType::Rad.path_for(name).display().to_string()
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

/// Structure containing a sampled radial distribution.
#[derive(Clone, Builder, Debug, Serialize, Deserialize)]
pub struct RadialDistributionResult {
    /// The control parameters used to obtain this set of results.
    pub parameters: RadialDistributionParams,

    /// The principal quantum number.
    pub n: u32,

    /// The orbital angular momentum quantum number.
    pub l: u32,

    /// The sampled radii.
    pub r: Array1<f64>,

    /// The radial amplitudes $`R_{nl}(r)`$.
    pub radial: Array1<f64>,

    /// The radial distribution $`P(r)`$.
    pub distribution: Array1<f64>,

    /// $`\int P(r)\,\mathrm{d}r`$ over the sampled range.
    pub normalisation: f64,

    /// The sampled radius at which $`P(r)`$ is largest.
    pub most_probable_radius: f64,
}

impl RadialDistributionResult {
    fn builder() -> RadialDistributionResultBuilder {
        RadialDistributionResultBuilder::default()
    }

    /// Returns the number of radial nodes found by sign changes of the sampled $`R_{nl}`$.
    pub fn sampled_radial_nodes(&self) -> usize {
        self.radial
            .windows(2)
            .into_iter()
            .filter(|w| w[0] * w[1] < 0.0)
            .count()
    }
}

impl fmt::Display for RadialDistributionResult {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write_subtitle(f, "Radial distribution summary")?;
        writeln!(
            f,
            "Orbital: {}{} (n={}, l={})",
            self.n,
            angmom_label(self.l),
            self.n,
            self.l
        )?;
        writeln!(
            f,
            "Sampled range: [{:.3}, {:.3}] a0 ({} points)",
            self.r.iter().next().copied().unwrap_or(0.0),
            self.r.iter().last().copied().unwrap_or(0.0),
            self.r.len()
        )?;
        writeln!(f, "∫ P(r) dr over sampled range: {:.6}", self.normalisation)?;
        writeln!(
            f,
            "Most probable radius: {:.4} a0",
            self.most_probable_radius
        )?;
        writeln!(
            f,
            "Radial nodes: {} sampled, {} expected",
            self.sampled_radial_nodes(),
            self.n - self.l - 1
        )?;
        Ok(())
    }
}

// ------
// Driver
// ------

/// Driver for sampling the radial distribution of a hydrogenic orbital.
#[derive(Clone, Builder)]
pub struct RadialDistributionDriver<'a> {
    /// The control parameters for radial-distribution sampling.
    parameters: &'a RadialDistributionParams,

    /// The principal quantum number.
    n: u32,

    /// The orbital angular momentum quantum number.
    l: u32,

    /// The result of the sampling.
    #[builder(setter(skip), default = "None")]
    result: Option<RadialDistributionResult>,
}

impl<'a> RadialDistributionDriver<'a> {
    /// Returns a builder to construct a [`RadialDistributionDriver`] structure.
    pub fn builder() -> RadialDistributionDriverBuilder<'a> {
        RadialDistributionDriverBuilder::default()
    }

    /// Samples $`R_{nl}`$ and $`P(r)`$ along a radial line.
    fn sample_radial_distribution(&mut self) -> Result<(), anyhow::Error> {
        log_title(&format!(
            "Radial Distribution Function (n={}, l={})",
            self.n, self.l
        ));
        hydrogen_output!("");
        let params = self.parameters;
        params.log_output_display();

        let max_r = params.max_r.unwrap_or_else(|| default_radial_extent(self.n));
        let line = RadialLine::new(max_r, params.npoints);
        let radial = evaluate_radial(self.n, self.l, &line.r, params.a0)?;
        let distribution = radial_distribution(self.n, self.l, &line.r, params.a0)?;
        let normalisation = trapezoid(&distribution, &line.r);
        let most_probable_radius = distribution
            .iter()
            .zip(line.r.iter())
            .fold((f64::MIN, 0.0), |(pmax, rmax), (&p, &r)| {
                if p > pmax {
                    (p, r)
                } else {
                    (pmax, rmax)
                }
            })
            .1;
        log::debug!(
            "Radial distribution for n={}, l={} sampled at {} points.",
            self.n,
            self.l,
            line.r.len()
        );

        let result = RadialDistributionResult::builder()
            .parameters(params.clone())
            .n(self.n)
            .l(self.l)
            .r(line.r)
            .radial(radial)
            .distribution(distribution)
            .normalisation(normalisation)
            .most_probable_radius(most_probable_radius)
            .build()
            .map_err(|err| format_err!(err))?;

        result.log_output_display();
        hydrogen_output!("");
        if (result.normalisation - 1.0).abs() > NORMALISATION_TOLERANCE {
            hydrogen_warn!(
                "∫ P(r) dr = {:.6} deviates from 1: the sampled range or resolution is insufficient.",
                result.normalisation
            );
        }

        if let Some(name) = params.result_save_name.as_ref() {
            write_hydrogen_binary(name, HydrogenFileType::Rad, &result)?;
            hydrogen_output!(
                "Radial distribution saved as {}.",
                HydrogenFileType::Rad.path_for(name).display()
            );
            hydrogen_output!("");
        }

        self.result = Some(result);
        Ok(())
    }
}

impl<'a> HydrogenDriver for RadialDistributionDriver<'a> {
    type Params = RadialDistributionParams;

    type Outcome = RadialDistributionResult;

    fn result(&self) -> Result<&Self::Outcome, anyhow::Error> {
        self.result
            .as_ref()
            .ok_or_else(|| format_err!("No radial distribution results found."))
    }

    fn run(&mut self) -> Result<(), anyhow::Error> {
        self.sample_radial_distribution()
    }
}
