//! Coordinate grids on which hydrogenic wavefunctions are sampled.

use std::f64::consts::PI;

use nalgebra::Point3;
use ndarray::{Array1, Array2, Zip};
use serde::{Deserialize, Serialize};


/// Offset added to radii before dividing by them. At the origin $`z / (r + \epsilon) = 0`$, so the
/// polar angle there is $`\pi/2`$ instead of `NaN`.
pub const RADIUS_EPSILON: f64 = 1e-10;

/// Returns the default half-width of a density slice for principal quantum number `n`, in units
/// of $`a_0`$. Orbital radii grow as $`n^2`$.
pub fn default_density_range(n: u32) -> f64 {
    5.0 * f64::from(n).powi(2)
}

/// Returns the default outer radius of a radial-distribution curve for principal quantum number
/// `n`, in units of $`a_0`$.
pub fn default_radial_extent(n: u32) -> f64 {
    3.0 * f64::from(n).powi(2) + 20.0
}

/// Builds the two coordinate matrices of a rectangular mesh, in the `xy` indexing convention: rows
/// follow `ys` and columns follow `xs`.
pub fn meshgrid(xs: &Array1<f64>, ys: &Array1<f64>) -> (Array2<f64>, Array2<f64>) {
    let shape = (ys.len(), xs.len());
    let xx = Array2::from_shape_fn(shape, |(_, j)| xs[j]);
    let yy = Array2::from_shape_fn(shape, |(i, _)| ys[i]);
    (xx, yy)
}

/// Converts spherical polar coordinates to a Cartesian point.
pub fn spherical_to_cartesian(r: f64, theta: f64, phi: f64) -> Point3<f64> {
    let (sin_t, cos_t) = theta.sin_cos();
    let (sin_p, cos_p) = phi.sin_cos();
    Point3::new(r * sin_t * cos_p, r * sin_t * sin_p, r * cos_t)
}

// ==================
// Struct definitions
// ==================

/// A uniform mesh over all directions: polar angles $`\theta \in [0, \pi]`$ along columns and
/// azimuthal angles $`\phi \in [0, 2\pi]`$ along rows.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct AngularGrid {
    /// Polar angles at every mesh point.
    pub theta: Array2<f64>,

    /// Azimuthal angles at every mesh point.
    pub phi: Array2<f64>,
}

impl AngularGrid {
    /// Constructs a `resolution` × `resolution` angular mesh.
    pub fn new(resolution: usize) -> Self {
        let thetas = Array1::linspace(0.0, PI, resolution);
        let phis = Array1::linspace(0.0, 2.0 * PI, resolution);
        let (theta, phi) = meshgrid(&thetas, &phis);
        Self { theta, phi }
    }

    /// Returns the mesh shape as (number of azimuthal angles, number of polar angles).
    pub fn dim(&self) -> (usize, usize) {
        self.theta.dim()
    }
}

/// A square slice through the nucleus in the $`xz`$ plane ($`y = 0`$), with the spherical polar
/// coordinates of every sample point precomputed.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct XZSlice {
    /// Half-width of the square, in units of $`a_0`$.
    pub range: f64,

    /// $`x`$ coordinates of the sample points.
    pub x: Array2<f64>,

    /// $`z`$ coordinates of the sample points.
    pub z: Array2<f64>,

    /// Distances from the nucleus.
    pub r: Array2<f64>,

    /// Polar angles from the $`+z`$ axis.
    pub theta: Array2<f64>,

    /// Azimuthal angles: $`0`$ on the $`x \ge 0`$ half-plane, $`\pi`$ on the other.
    pub phi: Array2<f64>,
}

impl XZSlice {
    /// Constructs a `resolution` × `resolution` slice covering $`[-R, R]^2`$.
    pub fn new(range: f64, resolution: usize) -> Self {
        let lin = Array1::linspace(-range, range, resolution);
        let (x, z) = meshgrid(&lin, &lin);
        let r = Zip::from(&x).and(&z).map_collect(|&xi, &zi| xi.hypot(zi));
        let theta = Zip::from(&z)
            .and(&r)
            .map_collect(|&zi, &ri| (zi / (ri + RADIUS_EPSILON)).clamp(-1.0, 1.0).acos());
        let phi = x.mapv(|xi| if xi >= 0.0 { 0.0 } else { PI });
        Self {
            range,
            x,
            z,
            r,
            theta,
            phi,
        }
    }

    /// Returns the plotting extent as `[x_min, x_max, z_min, z_max]`.
    pub fn extent(&self) -> [f64; 4] {
        [-self.range, self.range, -self.range, self.range]
    }

    /// Returns the slice shape as (number of $`z`$ values, number of $`x`$ values).
    pub fn dim(&self) -> (usize, usize) {
        self.r.dim()
    }
}

/// Evenly spaced radii from the nucleus outwards.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct RadialLine {
    /// The sampled radii.
    pub r: Array1<f64>,
}

impl RadialLine {
    /// Constructs `npoints` radii spanning $`[0, r_\mathrm{max}]`$.
    pub fn new(max_r: f64, npoints: usize) -> Self {
        Self {
            r: Array1::linspace(0.0, max_r, npoints),
        }
    }
}
