//! Composition of radial and angular amplitudes into wavefunctions, densities and distributions.

use std::fmt;

use ndarray::{s, Array, Array1, ArrayBase, Data, Dimension, Ix1, Zip};
use serde::{Deserialize, Serialize};

use crate::wavefunction::angular::par_evaluate_angular;
use crate::wavefunction::radial::{evaluate_radial, par_evaluate_radial};
use crate::wavefunction::{PhysicsDomainError, QuantumState};


// ================
// Enum definitions
// ================

/// Enumerated type for the sign of an amplitude, used to colour lobes.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Phase {
    /// Positive amplitude.
    Positive,

    /// Negative amplitude.
    Negative,

    /// Exactly zero amplitude.
    Node,
}

impl Phase {
    /// Classifies an amplitude by sign. `NaN` is classified as [`Phase::Node`].
    pub fn of(value: f64) -> Self {
        if value > 0.0 {
            Phase::Positive
        } else if value < 0.0 {
            Phase::Negative
        } else {
            Phase::Node
        }
    }
}

impl fmt::Display for Phase {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Phase::Positive => write!(f, "+"),
            Phase::Negative => write!(f, "-"),
            Phase::Node => write!(f, "0"),
        }
    }
}

// =========
// Functions
// =========

/// Evaluates the full wavefunction $`\psi_{nlm} = R_{nl}(r) Y_{lm}(\theta, \phi)`$ at every
/// sample point. The three coordinate arrays must share one shape.
///
/// # Errors
///
/// Returns a [`PhysicsDomainError`] if `a0` is not a valid length scale.
///
/// # Panics
///
/// Panics if the coordinate arrays differ in shape.
pub fn wavefunction<S1, S2, S3, D>(
    state: &QuantumState,
    r: &ArrayBase<S1, D>,
    theta: &ArrayBase<S2, D>,
    phi: &ArrayBase<S3, D>,
    a0: f64,
) -> Result<Array<f64, D>, PhysicsDomainError>
where
    S1: Data<Elem = f64>,
    S2: Data<Elem = f64>,
    S3: Data<Elem = f64>,
    D: Dimension,
{
    let radial = par_evaluate_radial(state.n(), state.l(), r, a0)?;
    let angular = par_evaluate_angular(state.l(), state.m(), theta, phi)?;
    Ok(radial * angular)
}

/// Returns the probability density $`\lvert\psi\rvert^2`$.
pub fn probability_density<S, D>(psi: &ArrayBase<S, D>) -> Array<f64, D>
where
    S: Data<Elem = f64>,
    D: Dimension,
{
    psi.mapv(|v| v.abs().powi(2))
}

/// Returns $`\sqrt{\lvert\psi\rvert^2}`$, which keeps faint outer lobes of a density visible next
/// to its bright core.
pub fn visibility_scaled<S, D>(density: &ArrayBase<S, D>) -> Array<f64, D>
where
    S: Data<Elem = f64>,
    D: Dimension,
{
    density.mapv(f64::sqrt)
}

/// Evaluates the radial distribution function $`P(r) = r^2 \lvert R_{nl}(r) \rvert^2`$, the
/// probability per unit radius of finding the electron in a thin shell at $`r`$.
///
/// # Errors
///
/// As for [`evaluate_radial`].
pub fn radial_distribution<S, D>(
    n: u32,
    l: u32,
    r: &ArrayBase<S, D>,
    a0: f64,
) -> Result<Array<f64, D>, PhysicsDomainError>
where
    S: Data<Elem = f64>,
    D: Dimension,
{
    let rnl = evaluate_radial(n, l, r, a0)?;
    Ok(Zip::from(r)
        .and(&rnl)
        .map_collect(|&ri, &v| ri * ri * v.abs().powi(2)))
}

/// Classifies every amplitude by its sign.
pub fn phases<S, D>(amplitudes: &ArrayBase<S, D>) -> Array<Phase, D>
where
    S: Data<Elem = f64>,
    D: Dimension,
{
    amplitudes.map(|&v| Phase::of(v))
}

/// Integrates sampled values with the trapezoidal rule. Fewer than two samples integrate to zero.
///
/// # Panics
///
/// Panics if `y` and `x` differ in length.
pub fn trapezoid<S1, S2>(y: &ArrayBase<S1, Ix1>, x: &ArrayBase<S2, Ix1>) -> f64
where
    S1: Data<Elem = f64>,
    S2: Data<Elem = f64>,
{
    assert_eq!(y.len(), x.len(), "Mismatched lengths for trapezoidal integration.");
    if x.len() < 2 {
        return 0.0;
    }
    let dx: Array1<f64> = &x.slice(s![1..]) - &x.slice(s![..-1]);
    let ysum: Array1<f64> = &y.slice(s![1..]) + &y.slice(s![..-1]);
    0.5 * dx.dot(&ysum)
}
