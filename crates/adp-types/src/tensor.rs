// ─────────────────────────────────────────────────────────────────────
// ADP Core — Tensor
// © 1998–2026 Miroslav Šotek. All rights reserved.
// Contact: www.anulum.li | protoscience@anulum.li
// ORCID: https://orcid.org/0009-0009-3560-0851
// License: GNU AGPL v3 | Commercial licensing available
// ─────────────────────────────────────────────────────────────────────
use serde::{Deserialize, Serialize};
use std::ops::Index;

/// Column vector in 3D.
pub type Vec3 = [f64; 3];

/// Dense 3x3 matrix, row-major: `m[row][col]`.
pub type Mat3 = [[f64; 3]; 3];

/// Symmetric 3x3 tensor stored as six components.
/// Order: (11, 22, 33, 12, 13, 23)
///
/// The basis (Cartesian, fractional, U*, beta) is not tracked by the type;
/// mixing bases without an explicit conversion is a caller error.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct Tensor6(pub [f64; 6]);

impl Tensor6 {
    pub const fn new(u11: f64, u22: f64, u33: f64, u12: f64, u13: f64, u23: f64) -> Self {
        Tensor6([u11, u22, u33, u12, u13, u23])
    }

    /// Diagonal tensor with `value` on all three diagonal entries.
    pub const fn isotropic(value: f64) -> Self {
        Tensor6([value, value, value, 0.0, 0.0, 0.0])
    }

    pub fn components(&self) -> [f64; 6] {
        self.0
    }

    pub fn trace(&self) -> f64 {
        self.0[0] + self.0[1] + self.0[2]
    }

    /// Uniform scale of all six components.
    pub fn scaled(&self, factor: f64) -> Self {
        Tensor6(self.0.map(|c| c * factor))
    }

    /// Largest absolute component; zero for the zero tensor.
    pub fn max_abs(&self) -> f64 {
        self.0.iter().fold(0.0_f64, |acc, c| acc.max(c.abs()))
    }

    pub fn is_finite(&self) -> bool {
        self.0.iter().all(|c| c.is_finite())
    }
}

impl From<[f64; 6]> for Tensor6 {
    fn from(components: [f64; 6]) -> Self {
        Tensor6(components)
    }
}

impl Index<usize> for Tensor6 {
    type Output = f64;

    fn index(&self, i: usize) -> &f64 {
        &self.0[i]
    }
}

/// Reciprocal-lattice (Miller) index h, k, l.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub struct MillerIndex {
    pub h: i32,
    pub k: i32,
    pub l: i32,
}

impl MillerIndex {
    pub const fn new(h: i32, k: i32, l: i32) -> Self {
        MillerIndex { h, k, l }
    }

    pub fn as_f64(&self) -> Vec3 {
        [self.h as f64, self.k as f64, self.l as f64]
    }

    pub fn is_origin(&self) -> bool {
        self.h == 0 && self.k == 0 && self.l == 0
    }
}

impl From<[i32; 3]> for MillerIndex {
    fn from(hkl: [i32; 3]) -> Self {
        MillerIndex::new(hkl[0], hkl[1], hkl[2])
    }
}

/// Principal axes of a Cartesian displacement tensor.
///
/// `values[i]` belongs to `vectors[i]`. Neither is sorted.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct EigenResult {
    pub values: Vec3,
    pub vectors: [Vec3; 3],
}

impl EigenResult {
    /// Root-mean-square displacement along each principal axis.
    pub fn rms_displacements(&self) -> Vec3 {
        self.values.map(f64::sqrt)
    }
}
