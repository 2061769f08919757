//! Hydrogenic wavefunctions: quantum numbers, radial amplitudes and real angular amplitudes.

use std::error::Error;
use std::fmt;

use serde::{Deserialize, Serialize};

pub mod angular;
pub mod radial;


/// The default length scale $`a_0`$, *i.e.* the Bohr radius in atomic units.
pub const DEFAULT_BOHR_RADIUS: f64 = 1.0;

/// Spectroscopic letters of orbital angular momenta.
pub static ANGMOM_LABELS: [&str; 7] = ["s", "p", "d", "f", "g", "h", "i"];

/// Returns the spectroscopic letter for the orbital angular momentum `l`.
///
/// Beyond `i`, letters continue alphabetically from `k`, skipping `p` and `s`.
pub fn angmom_label(l: u32) -> String {
    match usize::try_from(l) {
        Ok(i) if i < ANGMOM_LABELS.len() => ANGMOM_LABELS[i].to_string(),
        _ => {
            let excess = l - ANGMOM_LABELS.len() as u32;
            ('k'..='z')
                .filter(|c| !matches!(c, 'p' | 's'))
                .nth(excess as usize)
                .map(String::from)
                .unwrap_or_else(|| format!("[{l}]"))
        }
    }
}

// =================
// Error definitions
// =================

/// Error for quantum numbers or parameters outside the physically meaningful domain.
#[derive(Debug, Clone, PartialEq)]
pub enum PhysicsDomainError {
    /// The principal and orbital quantum numbers violate $`0 \le l < n`$.
    Radial { n: u32, l: u32 },

    /// The magnetic quantum number violates $`\lvert m \rvert \le l`$.
    Angular { l: u32, m: i32 },

    /// The length scale is not a positive finite number.
    LengthScale { a0: f64 },
}

impl fmt::Display for PhysicsDomainError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PhysicsDomainError::Radial { n, l } => write!(
                f,
                "Physics violation: n must be positive and greater than l. You passed n={n}, l={l}"
            ),
            PhysicsDomainError::Angular { l, m } => write!(
                f,
                "Physics violation: |m| must not exceed l. You passed l={l}, m={m}"
            ),
            PhysicsDomainError::LengthScale { a0 } => write!(
                f,
                "Physics violation: the length scale must be positive and finite. You passed a0={a0}"
            ),
        }
    }
}

impl Error for PhysicsDomainError {}

/// Checks that `a0` is usable as a length scale.
pub(crate) fn check_length_scale(a0: f64) -> Result<(), PhysicsDomainError> {
    if a0.is_finite() && a0 > 0.0 {
        Ok(())
    } else {
        Err(PhysicsDomainError::LengthScale { a0 })
    }
}

// ==================
// Struct definitions
// ==================

/// A validated set of hydrogenic quantum numbers $`(n, l, m)`$.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct QuantumState {
    n: u32,
    l: u32,
    m: i32,
}

impl QuantumState {
    /// Constructs a quantum state after checking $`0 \le l < n`$ and
    /// $`-l \le m \le l`$.
    ///
    /// # Errors
    ///
    /// Returns a [`PhysicsDomainError`] naming the first violated constraint.
    pub fn new(n: u32, l: u32, m: i32) -> Result<Self, PhysicsDomainError> {
        if n < 1 || l >= n {
            return Err(PhysicsDomainError::Radial { n, l });
        }
        if m.unsigned_abs() > l {
            return Err(PhysicsDomainError::Angular { l, m });
        }
        Ok(Self { n, l, m })
    }

    /// The principal quantum number.
    pub fn n(&self) -> u32 {
        self.n
    }

    /// The orbital angular momentum quantum number.
    pub fn l(&self) -> u32 {
        self.l
    }

    /// The magnetic quantum number.
    pub fn m(&self) -> i32 {
        self.m
    }

    /// Returns the spectroscopic subshell label, *e.g.* `3d`.
    pub fn subshell_label(&self) -> String {
        format!("{}{}", self.n, angmom_label(self.l))
    }
}

impl fmt::Display for QuantumState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} (n={}, l={}, m={:+})",
            self.subshell_label(),
            self.n,
            self.l,
            self.m
        )
    }
}
