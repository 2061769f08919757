//! Radial part $`R_{nl}(r)`$ of the hydrogenic wavefunction.

use ndarray::{Array, ArrayBase, Data, Dimension, Zip};

use crate::special::{genlaguerre, ln_gamma};
use crate::wavefunction::{check_length_scale, PhysicsDomainError};

#[cfg(test)]
#[path = "radial_tests.rs"]
mod radial_tests;

/// Checks $`n \ge 1`$ and $`l < n`$.
fn check_radial_domain(n: u32, l: u32) -> Result<(), PhysicsDomainError> {
    if l >= n || n < 1 {
        Err(PhysicsDomainError::Radial { n, l })
    } else {
        Ok(())
    }
}

/// Calculates the logarithm of the normalisation constant of $`R_{nl}`$,
///
/// ```math
/// N_{nl} = \sqrt{\left(\frac{2}{n a_0}\right)^3 \frac{(n-l-1)!}{2n (n+l)!}}.
/// ```
///
/// The factorial ratio enters as $`\ln\Gamma(n-l) - \ln\Gamma(n+l+1)`$. The ratio underflows
/// once $`n + l`$ reaches about 170 and $`N_{nl}`$ itself near 300, so neither is formed.
///
/// The caller must have checked the domain of `n`, `l` and `a0`.
pub(crate) fn ln_radial_normalisation(n: u32, l: u32, a0: f64) -> f64 {
    let nf = f64::from(n);
    let lf = f64::from(l);
    let log_factorial_ratio = ln_gamma(nf - lf) - ln_gamma(nf + lf + 1.0);
    0.5 * (3.0 * (2.0 / (nf * a0)).ln() - (2.0 * nf).ln() + log_factorial_ratio)
}

/// Evaluates $`R_{nl}`$ at one radius once the log-normalisation is known.
///
/// The magnitudes of the tiny normalisation and of the large $`\rho^l`$ and Laguerre factors are
/// summed as logarithms and exponentiated once. The sign is tracked separately.
fn radial_kernel(n: u32, l: u32, ln_norm: f64, r: f64, a0: f64) -> f64 {
    let rho = 2.0 * r / (f64::from(n) * a0);
    let poly = genlaguerre(n - l - 1, f64::from(2 * l + 1), rho);
    let (ln_rho_pow, rho_pow_sign) = if l == 0 {
        (0.0, 1.0)
    } else if rho < 0.0 && l % 2 == 1 {
        (f64::from(l) * rho.abs().ln(), -1.0)
    } else {
        (f64::from(l) * rho.abs().ln(), 1.0)
    };
    rho_pow_sign * poly.signum() * (ln_norm - rho / 2.0 + ln_rho_pow + poly.abs().ln()).exp()
}

/// Evaluates the normalised hydrogenic radial wavefunction at a single radius,
///
/// ```math
/// R_{nl}(r) = N_{nl}\, e^{-\rho/2} \rho^l L_{n-l-1}^{(2l+1)}(\rho),
/// \qquad \rho = \frac{2r}{n a_0}.
/// ```
///
/// # Arguments
///
/// * `n` - The principal quantum number, at least one.
/// * `l` - The orbital angular momentum quantum number, less than `n`.
/// * `r` - The non-negative radial distance.
/// * `a0` - The length scale, normally [`super::DEFAULT_BOHR_RADIUS`].
///
/// # Returns
///
/// The value of $`R_{nl}(r)`$. It is exactly zero only at the origin for $`l > 0`$ and at radial
/// nodes. It stays non-zero for $`n + l`$ beyond 170, where the factorial ratio in $`N_{nl}`$ is
/// below the smallest `f64`.
///
/// # Errors
///
/// Returns [`PhysicsDomainError::Radial`] if $`l \ge n`$ or $`n < 1`$, and
/// [`PhysicsDomainError::LengthScale`] if `a0` is not positive and finite.
pub fn radial_wavefunction(n: u32, l: u32, r: f64, a0: f64) -> Result<f64, PhysicsDomainError> {
    check_radial_domain(n, l)?;
    check_length_scale(a0)?;
    Ok(radial_kernel(n, l, ln_radial_normalisation(n, l, a0), r, a0))
}

/// Evaluates $`R_{nl}`$ element-wise over an array of radial distances.
///
/// See [`radial_wavefunction`] for the definition. The output has the same shape as `r`, and `r`
/// is left untouched.
///
/// # Errors
///
/// As for [`radial_wavefunction`]. No partial output is produced.
pub fn evaluate_radial<S, D>(
    n: u32,
    l: u32,
    r: &ArrayBase<S, D>,
    a0: f64,
) -> Result<Array<f64, D>, PhysicsDomainError>
where
    S: Data<Elem = f64>,
    D: Dimension,
{
    check_radial_domain(n, l)?;
    check_length_scale(a0)?;
    let ln_norm = ln_radial_normalisation(n, l, a0);
    Ok(r.mapv(|ri| radial_kernel(n, l, ln_norm, ri, a0)))
}

/// Parallel counterpart of [`evaluate_radial`] for large grids.
///
/// # Errors
///
/// As for [`radial_wavefunction`].
pub fn par_evaluate_radial<S, D>(
    n: u32,
    l: u32,
    r: &ArrayBase<S, D>,
    a0: f64,
) -> Result<Array<f64, D>, PhysicsDomainError>
where
    S: Data<Elem = f64>,
    D: Dimension,
{
    check_radial_domain(n, l)?;
    check_length_scale(a0)?;
    let ln_norm = ln_radial_normalisation(n, l, a0);
    Ok(Zip::from(r).par_map_collect(|&ri| radial_kernel(n, l, ln_norm, ri, a0)))
}
