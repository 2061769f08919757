//! # Hydrogen Orbitals
//!
//! Hydrogen Orbitals evaluates the stationary states $`\psi_{nlm}`$ of the hydrogen atom written
//! in Rust, with the following capabilities:
//! - evaluation of the normalised radial wavefunction $`R_{nl}(r)`$ with a log-gamma
//!   normalisation that stays finite for large principal quantum numbers,
//! - evaluation of the real spherical harmonics $`Y_{lm}(\theta, \phi)`$ used in chemistry
//!   (axial, cosine-like and sine-like orbitals),
//! - element-wise evaluation over arrays of any shape, in serial or in parallel,
//!
//! and the following sampling drivers built on top of them:
//! - angular orbital shapes drawn as $`\lvert Y_{lm} \rvert`$ surfaces coloured by phase,
//! - probability-density cross-sections on the $`xz`$ plane, and
//! - radial distribution curves $`r^2 \lvert R_{nl} \rvert^2`$.
//!
//! ## Units
//!
//! Lengths are measured in units of the length scale $`a_0`$, which every evaluator takes
//! explicitly. [`wavefunction::DEFAULT_BOHR_RADIUS`] gives atomic units.
//!
//! ## Examples and usage
//!
//! For most items (structs, enums, functions, and traits), their usages are illustrated in test
//! functions. The `hydrogen-orbitals` binary exposes the three drivers as the `shape`, `density`
//! and `radial` subcommands; render parameters may be supplied in a YAML file via `--config`.

pub mod composition;
pub mod drivers;
pub mod grid;
pub mod interfaces;
pub mod io;
pub mod special;
pub mod wavefunction;
