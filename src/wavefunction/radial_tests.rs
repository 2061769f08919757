use approx::assert_relative_eq;
use factorial::Factorial;
use ndarray::{arr0, array, Array1, Array2};
use proptest::prelude::*;

use crate::special::ln_gamma;
use crate::wavefunction::radial::{evaluate_radial, ln_radial_normalisation, radial_wavefunction};
use crate::wavefunction::PhysicsDomainError;

fn trapezoid(y: &Array1<f64>, x: &Array1<f64>) -> f64 {
    x.windows(2)
        .into_iter()
        .zip(y.windows(2))
        .map(|(xw, yw)| 0.5 * (xw[1] - xw[0]) * (yw[0] + yw[1]))
        .sum()
}

#[test]
fn test_radial_1s_closed_form() {
    let r = array![0.0, 1.0, 2.0];
    let r10 = evaluate_radial(1, 0, &r, 1.0).unwrap();
    assert_relative_eq!(r10[0], 2.0, epsilon = 1e-12);
    assert_relative_eq!(r10[1], 2.0 * (-1.0_f64).exp(), epsilon = 1e-12);
    assert_relative_eq!(r10[2], 2.0 * (-2.0_f64).exp(), epsilon = 1e-12);
    assert_relative_eq!(r10[1], 0.7358, epsilon = 1e-4);
    assert_relative_eq!(r10[2], 0.2707, epsilon = 1e-4);
}

#[test]
fn test_radial_low_shells_closed_forms() {
    let r = Array1::linspace(0.0, 25.0, 51);
    let r20 = evaluate_radial(2, 0, &r, 1.0).unwrap();
    let r21 = evaluate_radial(2, 1, &r, 1.0).unwrap();
    let r30 = evaluate_radial(3, 0, &r, 1.0).unwrap();
    for (i, &ri) in r.iter().enumerate() {
        let r20_ref = (2.0 - ri) * (-ri / 2.0).exp() / (2.0 * 2.0_f64.sqrt());
        let r21_ref = ri * (-ri / 2.0).exp() / (2.0 * 6.0_f64.sqrt());
        let r30_ref = 2.0 / (3.0 * 3.0_f64.sqrt())
            * (1.0 - 2.0 * ri / 3.0 + 2.0 * ri * ri / 27.0)
            * (-ri / 3.0).exp();
        assert_relative_eq!(r20[i], r20_ref, epsilon = 1e-12);
        assert_relative_eq!(r21[i], r21_ref, epsilon = 1e-12);
        assert_relative_eq!(r30[i], r30_ref, epsilon = 1e-12);
    }
}

#[test]
fn test_radial_length_scale() {
    // R_10(r; a0) = 2 a0^{-3/2} exp(-r/a0)
    let a0 = 0.529;
    let r = array![0.0, 0.3, 1.1];
    let r10 = evaluate_radial(1, 0, &r, a0).unwrap();
    for (v, &ri) in r10.iter().zip(r.iter()) {
        assert_relative_eq!(*v, 2.0 * a0.powf(-1.5) * (-ri / a0).exp(), max_relative = 1e-12);
    }
    assert_eq!(
        evaluate_radial(1, 0, &r, 0.0),
        Err(PhysicsDomainError::LengthScale { a0: 0.0 })
    );
    assert!(evaluate_radial(1, 0, &r, -1.0).is_err());
    assert!(evaluate_radial(1, 0, &r, f64::NAN).is_err());
}

#[test]
fn test_radial_domain_errors() {
    let r = array![0.5, 1.0];
    assert_eq!(
        evaluate_radial(2, 2, &r, 1.0),
        Err(PhysicsDomainError::Radial { n: 2, l: 2 })
    );
    assert_eq!(
        evaluate_radial(0, 0, &r, 1.0),
        Err(PhysicsDomainError::Radial { n: 0, l: 0 })
    );
    assert_eq!(
        radial_wavefunction(3, 5, 1.0, 1.0),
        Err(PhysicsDomainError::Radial { n: 3, l: 5 })
    );
    let err = evaluate_radial(2, 2, &r, 1.0).unwrap_err();
    assert!(err.to_string().contains("n=2, l=2"));
}

#[test]
fn test_radial_normalisation_integral() {
    let r = Array1::linspace(0.0, 30.0, 1000);
    for n in 1..=3u32 {
        for l in 0..n {
            let rnl = evaluate_radial(n, l, &r, 1.0).unwrap();
            let p = &r * &r * &rnl * &rnl;
            assert_relative_eq!(trapezoid(&p, &r), 1.0, max_relative = 1e-2);
        }
    }
}

#[test]
fn test_radial_normalisation_matches_direct_factorials() {
    for n in 1..=10u32 {
        for l in 0..n {
            let num = u128::from(n - l - 1)
                .checked_factorial()
                .expect("Unable to compute a small factorial.") as f64;
            let den = u128::from(n + l)
                .checked_factorial()
                .expect("Unable to compute a small factorial.") as f64;
            let nf = f64::from(n);
            let direct = ((2.0 / nf).powi(3) / (2.0 * nf) * num / den).sqrt();
            assert_relative_eq!(
                ln_radial_normalisation(n, l, 1.0).exp(),
                direct,
                max_relative = 1e-10
            );
        }
    }
}

#[test]
fn test_radial_large_n_is_finite() {
    // (n + l)! for n = 50 no longer fits in u128.
    assert!(u128::from(50u32 + 49).checked_factorial().is_none());

    let r = Array1::linspace(0.0, 7_520.0, 2_000);
    let r50 = evaluate_radial(50, 0, &r, 1.0).unwrap();
    assert!(r50.iter().all(|v| v.is_finite()));
    let r50_49 = evaluate_radial(50, 49, &r, 1.0).unwrap();
    assert!(r50_49.iter().all(|v| v.is_finite()));
    let r100 = evaluate_radial(100, 3, &r, 1.0).unwrap();
    assert!(r100.iter().all(|v| v.is_finite()));
}

#[test]
fn test_radial_beyond_normalisation_underflow() {
    // 0! / 199! is below the smallest f64, although N_{100,99} ~ 1e-112 is not.
    assert_eq!((ln_gamma(1.0) - ln_gamma(200.0)).exp(), 0.0);
    assert_relative_eq!(
        ln_radial_normalisation(100, 99, 1.0),
        -257.916_925_419_557,
        max_relative = 1e-10
    );

    // R_{100,99} peaks at r = n^2 a0 = 10^4 a0.
    let peak = radial_wavefunction(100, 99, 10_000.0, 1.0).unwrap();
    assert!(peak.is_finite() && peak > 0.0);

    let r = Array1::linspace(0.0, 40_000.0, 20_001);
    let r100_99 = evaluate_radial(100, 99, &r, 1.0).unwrap();
    assert!(r100_99.iter().all(|v| v.is_finite()));
    let p = &r * &r * &r100_99 * &r100_99;
    assert_relative_eq!(trapezoid(&p, &r), 1.0, max_relative = 1e-6);

    let r150_149 = evaluate_radial(150, 149, &r, 1.0).unwrap();
    assert!(r150_149.iter().any(|&v| v > 0.0));
}

#[test]
fn test_radial_shape_preserved() {
    let r2 = Array2::from_shape_fn((4, 7), |(i, j)| 0.5 * (i + j) as f64);
    let out = evaluate_radial(3, 1, &r2, 1.0).unwrap();
    assert_eq!(out.shape(), r2.shape());
    for ((i, j), v) in out.indexed_iter() {
        assert_eq!(*v, radial_wavefunction(3, 1, r2[(i, j)], 1.0).unwrap());
    }

    let scalar = evaluate_radial(1, 0, &arr0(1.0), 1.0).unwrap();
    assert_eq!(scalar.ndim(), 0);
    assert_relative_eq!(scalar.into_scalar(), 2.0 * (-1.0_f64).exp(), epsilon = 1e-12);
}

#[test]
fn test_radial_input_untouched_and_deterministic() {
    let r = Array1::linspace(0.0, 12.0, 64);
    let r_copy = r.clone();
    let a = evaluate_radial(4, 2, &r, 1.0).unwrap();
    let b = evaluate_radial(4, 2, &r.view(), 1.0).unwrap();
    assert_eq!(r, r_copy);
    assert_eq!(a, b);
}

proptest! {
    #[test]
    fn test_radial_valid_states_are_finite(n in 1u32..40, l_frac in 0.0f64..1.0, r in 0.0f64..500.0) {
        let l = ((f64::from(n) * l_frac) as u32).min(n - 1);
        let v = radial_wavefunction(n, l, r, 1.0).unwrap();
        prop_assert!(v.is_finite());
    }

    #[test]
    fn test_radial_invalid_states_fail(n in 0u32..30, extra in 0u32..10) {
        let l = n + extra;
        prop_assert_eq!(
            radial_wavefunction(n, l, 1.0, 1.0),
            Err(PhysicsDomainError::Radial { n, l })
        );
    }
}
