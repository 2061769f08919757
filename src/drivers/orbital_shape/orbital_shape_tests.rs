use std::env;
use std::f64::consts::PI;
use std::fs;

use approx::assert_abs_diff_eq;

use crate::composition::Phase;
use crate::drivers::orbital_shape::{OrbitalShapeDriver, OrbitalShapeParams, OrbitalShapeResult};
use crate::drivers::HydrogenDriver;
use crate::io::{read_hydrogen_binary, HydrogenFileType};
use crate::wavefunction::PhysicsDomainError;

#[test]
fn test_drivers_orbital_shape_defaults() {
    let params = OrbitalShapeParams::default();
    assert_eq!(params.resolution, 100);
    assert_eq!(params.result_save_name, None);
    assert!(params.to_string().contains("100 × 100"));

    // n defaults to 1 when only the angular quantum numbers are given.
    let mut driver = OrbitalShapeDriver::builder()
        .parameters(&params)
        .l(0)
        .m(0)
        .build()
        .unwrap();
    driver.run().unwrap();
    assert_eq!(driver.result().unwrap().n, 1);
}

#[test]
fn test_drivers_orbital_shape_params_display_save_path() {
    let params = OrbitalShapeParams::builder()
        .result_save_name(Some("run.v2".to_string()))
        .build()
        .unwrap();
    let text = params.to_string();
    assert!(text.contains("run.hydro.shp"));
    assert!(!text.contains("run.v2"));
    assert!(text.contains(
        &HydrogenFileType::Shp
            .path_for("run.v2")
            .display()
            .to_string()
    ));
}

#[test]
fn test_drivers_orbital_shape_s_sphere() {
    let params = OrbitalShapeParams::builder()
        .resolution(30)
        .build()
        .unwrap();
    let mut driver = OrbitalShapeDriver::builder()
        .parameters(&params)
        .n(1)
        .l(0)
        .m(0)
        .build()
        .unwrap();
    driver.run().unwrap();
    let res = driver.result().unwrap();
    let y00 = 0.5 / PI.sqrt();

    assert_eq!(res.radius.dim(), (30, 30));
    assert_abs_diff_eq!(res.extent(), y00, epsilon = 1e-12);
    assert_eq!(res.phase_count(Phase::Positive), 900);
    for ((&x, &y), &z) in res.x.iter().zip(res.y.iter()).zip(res.z.iter()) {
        assert_abs_diff_eq!((x * x + y * y + z * z).sqrt(), y00, epsilon = 1e-12);
    }
}

#[test]
fn test_drivers_orbital_shape_pz() {
    let params = OrbitalShapeParams::default();
    let mut driver = OrbitalShapeDriver::builder()
        .parameters(&params)
        .n(2)
        .l(1)
        .m(0)
        .build()
        .unwrap();
    driver.run().unwrap();
    let res = driver.result().unwrap();
    let top = (3.0 / (4.0 * PI)).sqrt();

    // The largest lobe radius is reached on the z axis.
    assert_abs_diff_eq!(res.extent(), top, epsilon = 1e-12);
    assert_abs_diff_eq!(res.z[(0, 0)], top, epsilon = 1e-12);
    assert_abs_diff_eq!(res.z[(0, 99)], -top, epsilon = 1e-12);

    // No polar mesh angle lands on the nodal plane, so the two lobes split the mesh evenly.
    assert_eq!(res.phase_count(Phase::Positive), 5000);
    assert_eq!(res.phase_count(Phase::Negative), 5000);
    assert_eq!(res.phase_count(Phase::Node), 0);
    assert_eq!(res.phases[(10, 0)], Phase::Positive);
    assert_eq!(res.phases[(10, 99)], Phase::Negative);
    assert!(res.to_string().contains("axial"));
}

#[test]
fn test_drivers_orbital_shape_label_only_n() {
    let params = OrbitalShapeParams::builder()
        .resolution(20)
        .build()
        .unwrap();
    let mut driver = OrbitalShapeDriver::builder()
        .parameters(&params)
        .n(1)
        .l(3)
        .m(-2)
        .build()
        .unwrap();
    driver.run().unwrap();
    let res = driver.result().unwrap();
    assert_eq!((res.n, res.l, res.m), (1, 3, -2));
    assert!(res.to_string().contains("1f (n=1, l=3, m=-2), sine-like"));
}

#[test]
fn test_drivers_orbital_shape_domain_error() {
    let params = OrbitalShapeParams::builder()
        .resolution(20)
        .build()
        .unwrap();
    let mut driver = OrbitalShapeDriver::builder()
        .parameters(&params)
        .n(3)
        .l(1)
        .m(-3)
        .build()
        .unwrap();
    let err = driver.run().unwrap_err();
    assert_eq!(
        err.downcast_ref::<PhysicsDomainError>(),
        Some(&PhysicsDomainError::Angular { l: 1, m: -3 })
    );
    assert!(driver.result().is_err());
}

#[test]
fn test_drivers_orbital_shape_saved() {
    let dir = env::temp_dir().join(format!("hydrogen-shp-test-{}", std::process::id()));
    fs::create_dir_all(&dir).unwrap();
    let name = dir.join("dxy").display().to_string();
    let params = OrbitalShapeParams::builder()
        .resolution(25)
        .result_save_name(Some(name.clone()))
        .build()
        .unwrap();
    let mut driver = OrbitalShapeDriver::builder()
        .parameters(&params)
        .n(3)
        .l(2)
        .m(-2)
        .build()
        .unwrap();
    driver.run().unwrap();
    let saved: OrbitalShapeResult = read_hydrogen_binary(&name, HydrogenFileType::Shp).unwrap();
    let res = driver.result().unwrap();
    assert_eq!(saved.parameters, params);
    assert_eq!(saved.ylm, res.ylm);
    assert_eq!(saved.phases, res.phases);
    fs::remove_dir_all(&dir).unwrap();
}
