//! Real spherical harmonics $`Y_{lm}(\theta, \phi)`$ for the angular part of the hydrogenic
//! wavefunction.
//!
//! Complex harmonics $`Y_l^m \propto P_l^m(\cos\theta) e^{im\phi}`$ are eigenfunctions of
//! $`\hat{L}_z`$. The real combinations used here isolate the $`\cos(m\phi)`$ and
//! $`\sin(\lvert m \rvert\phi)`$ components, giving the familiar Cartesian-oriented orbitals
//! ($`p_x`$, $`p_y`$, $`d_{xy}`$, ...).

use std::f64::consts::SQRT_2;
use std::fmt;

use ndarray::{Array, ArrayBase, Data, Dimension, Zip};
use serde::{Deserialize, Serialize};

use crate::special::sph_harm;
use crate::wavefunction::PhysicsDomainError;

#[cfg(test)]
#[path = "angular_tests.rs"]
mod angular_tests;

/// Enumerated type classifying the magnetic quantum number by sign, which selects the formula
/// used to build the real harmonic.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum MagneticKind {
    /// $`m = 0`$: the complex harmonic is already real.
    Zero,

    /// $`m > 0`$: cosine-like harmonic, $`\sqrt{2}(-1)^m \operatorname{Re} Y_l^m`$.
    Positive,

    /// $`m < 0`$: sine-like harmonic, $`\sqrt{2}(-1)^m \operatorname{Im} Y_l^{\lvert m \rvert}`$.
    Negative,
}

impl MagneticKind {
    /// Classifies `m` by its sign.
    pub fn from_m(m: i32) -> Self {
        match m.signum() {
            0 => MagneticKind::Zero,
            1 => MagneticKind::Positive,
            _ => MagneticKind::Negative,
        }
    }
}

impl fmt::Display for MagneticKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            MagneticKind::Zero => write!(f, "axial"),
            MagneticKind::Positive => write!(f, "cosine-like"),
            MagneticKind::Negative => write!(f, "sine-like"),
        }
    }
}

/// Condon--Shortley phase $`(-1)^m`$.
fn condon_shortley(m: i32) -> f64 {
    if m.rem_euclid(2) == 0 {
        1.0
    } else {
        -1.0
    }
}

fn check_angular_domain(l: u32, m: i32) -> Result<(), PhysicsDomainError> {
    if m.unsigned_abs() > l {
        Err(PhysicsDomainError::Angular { l, m })
    } else {
        Ok(())
    }
}

/// Evaluates the real harmonic at one direction once the domain is known to be valid.
fn real_sph_kernel(kind: MagneticKind, l: u32, m: i32, theta: f64, phi: f64) -> f64 {
    // `sph_harm` takes the azimuthal angle before the polar angle.
    match kind {
        MagneticKind::Zero => sph_harm(0, l, phi, theta).re,
        MagneticKind::Positive => SQRT_2 * condon_shortley(m) * sph_harm(m, l, phi, theta).re,
        MagneticKind::Negative => {
            SQRT_2 * condon_shortley(m) * sph_harm(m.abs(), l, phi, theta).im
        }
    }
}

/// Evaluates the real spherical harmonic $`Y_{lm}(\theta, \phi)`$ in a single direction.
///
/// ```math
/// Y_{lm} = \begin{cases}
///     \operatorname{Re} Y_l^0 & m = 0, \\
///     \sqrt{2}(-1)^m \operatorname{Re} Y_l^m & m > 0, \\
///     \sqrt{2}(-1)^m \operatorname{Im} Y_l^{\lvert m \rvert} & m < 0.
/// \end{cases}
/// ```
///
/// # Arguments
///
/// * `l` - The orbital angular momentum quantum number.
/// * `m` - The magnetic quantum number.
/// * `theta` - The polar angle measured from the $`+z`$ axis, in $`[0, \pi]`$.
/// * `phi` - The azimuthal angle, in $`[0, 2\pi)`$.
///
/// # Errors
///
/// Returns [`PhysicsDomainError::Angular`] if $`\lvert m \rvert > l`$.
pub fn real_spherical_harmonic(
    l: u32,
    m: i32,
    theta: f64,
    phi: f64,
) -> Result<f64, PhysicsDomainError> {
    check_angular_domain(l, m)?;
    Ok(real_sph_kernel(MagneticKind::from_m(m), l, m, theta, phi))
}

/// Evaluates the real spherical harmonic $`Y_{lm}`$ element-wise over paired arrays of polar and
/// azimuthal angles.
///
/// See [`real_spherical_harmonic`] for the definition. The output has the shape of `theta`.
///
/// # Errors
///
/// Returns [`PhysicsDomainError::Angular`] if $`\lvert m \rvert > l`$.
///
/// # Panics
///
/// Panics if `theta` and `phi` do not have the same shape.
pub fn evaluate_angular<S1, S2, D>(
    l: u32,
    m: i32,
    theta: &ArrayBase<S1, D>,
    phi: &ArrayBase<S2, D>,
) -> Result<Array<f64, D>, PhysicsDomainError>
where
    S1: Data<Elem = f64>,
    S2: Data<Elem = f64>,
    D: Dimension,
{
    check_angular_domain(l, m)?;
    let kind = MagneticKind::from_m(m);
    Ok(Zip::from(theta)
        .and(phi)
        .map_collect(|&t, &p| real_sph_kernel(kind, l, m, t, p)))
}

/// Parallel counterpart of [`evaluate_angular`] for large angular grids.
///
/// # Errors
///
/// Returns [`PhysicsDomainError::Angular`] if $`\lvert m \rvert > l`$.
///
/// # Panics
///
/// Panics if `theta` and `phi` do not have the same shape.
pub fn par_evaluate_angular<S1, S2, D>(
    l: u32,
    m: i32,
    theta: &ArrayBase<S1, D>,
    phi: &ArrayBase<S2, D>,
) -> Result<Array<f64, D>, PhysicsDomainError>
where
    S1: Data<Elem = f64>,
    S2: Data<Elem = f64>,
    D: Dimension,
{
    check_angular_domain(l, m)?;
    let kind = MagneticKind::from_m(m);
    Ok(Zip::from(theta)
        .and(phi)
        .par_map_collect(|&t, &p| real_sph_kernel(kind, l, m, t, p)))
}
