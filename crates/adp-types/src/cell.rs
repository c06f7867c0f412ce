// ─────────────────────────────────────────────────────────────────────
// ADP Core — Unit Cell
// © 1998–2026 Miroslav Šotek. All rights reserved.
// Contact: www.anulum.li | protoscience@anulum.li
// ORCID: https://orcid.org/0009-0009-3560-0851
// License: GNU AGPL v3 | Commercial licensing available
// ─────────────────────────────────────────────────────────────────────
//! Unit-cell geometry needed by the ADP conversions.
//!
//! Orthogonalization follows the PDB convention: a along x, b in the
//! xy-plane, c* along z.

use crate::config::UnitCellParams;
use crate::error::{AdpError, AdpResult};
use crate::tensor::{Mat3, MillerIndex};

/// Read-only cell geometry consumed by the converters and Debye-Waller factors.
pub trait UnitCellMetric {
    /// Reciprocal edge lengths (a*, b*, c*).
    fn reciprocal_lengths(&self) -> [f64; 3];

    /// Fractional -> Cartesian.
    fn orthogonalization_matrix(&self) -> Mat3;

    /// Cartesian -> fractional.
    fn fractionalization_matrix(&self) -> Mat3;

    /// |d*|² = 1/d² for reflection `h`.
    fn d_star_sq(&self, h: &MillerIndex) -> f64;

    /// (sin θ / λ)² for reflection `h`.
    fn stol_sq(&self, h: &MillerIndex) -> f64 {
        self.d_star_sq(h) / 4.0
    }
}

#[derive(Debug, Clone)]
pub struct UnitCell {
    params: UnitCellParams,
    volume: f64,
    reciprocal_lengths: [f64; 3],
    reciprocal_metric: Mat3,
    orthogonalization: Mat3,
    fractionalization: Mat3,
}

impl UnitCell {
    pub fn new(params: UnitCellParams) -> AdpResult<Self> {
        params.validate()?;
        let UnitCellParams {
            a,
            b,
            c,
            alpha,
            beta,
            gamma,
        } = params;
        let (sa, ca) = alpha.to_radians().sin_cos();
        let (sb, cb) = beta.to_radians().sin_cos();
        let (sg, cg) = gamma.to_radians().sin_cos();

        let vol_factor = 1.0 - ca * ca - cb * cb - cg * cg + 2.0 * ca * cb * cg;
        if vol_factor <= 0.0 {
            return Err(AdpError::ConfigError(format!(
                "cell angles ({alpha}, {beta}, {gamma}) do not span a volume"
            )));
        }
        let volume = a * b * c * vol_factor.sqrt();

        let ra = b * c * sa / volume;
        let rb = a * c * sb / volume;
        let rc = a * b * sg / volume;

        // Reciprocal angle cosines
        let cas = (cb * cg - ca) / (sb * sg);
        let cbs = (ca * cg - cb) / (sa * sg);
        let cgs = (ca * cb - cg) / (sa * sb);

        let reciprocal_metric = [
            [ra * ra, ra * rb * cgs, ra * rc * cbs],
            [ra * rb * cgs, rb * rb, rb * rc * cas],
            [ra * rc * cbs, rb * rc * cas, rc * rc],
        ];

        let o00 = a;
        let o01 = b * cg;
        let o02 = c * cb;
        let o11 = b * sg;
        let o12 = c * (ca - cb * cg) / sg;
        let o22 = volume / (a * b * sg);
        let orthogonalization = [[o00, o01, o02], [0.0, o11, o12], [0.0, 0.0, o22]];

        // Inverse of the upper-triangular orthogonalization matrix
        let fractionalization = [
            [
                1.0 / o00,
                -o01 / (o00 * o11),
                (o01 * o12 - o02 * o11) / (o00 * o11 * o22),
            ],
            [0.0, 1.0 / o11, -o12 / (o11 * o22)],
            [0.0, 0.0, 1.0 / o22],
        ];

        Ok(UnitCell {
            params,
            volume,
            reciprocal_lengths: [ra, rb, rc],
            reciprocal_metric,
            orthogonalization,
            fractionalization,
        })
    }

    pub fn params(&self) -> &UnitCellParams {
        &self.params
    }

    /// Cell volume in Å³.
    pub fn volume(&self) -> f64 {
        self.volume
    }

    /// G*, the metric tensor of the reciprocal basis.
    pub fn reciprocal_metric(&self) -> &Mat3 {
        &self.reciprocal_metric
    }

    /// Resolution d (Å) of reflection `h`. Infinite for (0,0,0).
    pub fn d_spacing(&self, h: &MillerIndex) -> f64 {
        1.0 / self.d_star_sq(h).sqrt()
    }
}

impl UnitCellMetric for UnitCell {
    fn reciprocal_lengths(&self) -> [f64; 3] {
        self.reciprocal_lengths
    }

    fn orthogonalization_matrix(&self) -> Mat3 {
        self.orthogonalization
    }

    fn fractionalization_matrix(&self) -> Mat3 {
        self.fractionalization
    }

    fn d_star_sq(&self, h: &MillerIndex) -> f64 {
        let v = h.as_f64();
        let g = &self.reciprocal_metric;
        let mut sum = 0.0;
        for i in 0..3 {
            for j in 0..3 {
                sum += v[i] * g[i][j] * v[j];
            }
        }
        sum
    }
}
