// ─────────────────────────────────────────────────────────────────────
// ADP Core — Eigen
// © 1998–2026 Miroslav Šotek. All rights reserved.
// Contact: www.anulum.li | protoscience@anulum.li
// ORCID: https://orcid.org/0009-0009-3560-0851
// License: GNU AGPL v3 | Commercial licensing available
// ─────────────────────────────────────────────────────────────────────
//! Principal axes of a Cartesian displacement tensor.
//!
//! Eigenvalues are the three real roots of the characteristic cubic
//!   det(U - λI) = 0
//! solved analytically with Cardan's trigonometric formula (Bronstein &
//! Semendjajew, Taschenbuch der Mathematik). A non-positive root means
//! the tensor is not positive definite.
//!
//! Eigenvectors follow Nye, Physical Properties of Crystals (1992),
//! pp. 165-168: power iteration on U gives the axis of the largest
//! eigenvalue, power iteration on U⁻¹ the axis of the smallest, and
//! their cross product the remaining axis.

use crate::linalg::{
    approx_equal, argmax_abs, cofactor_transpose, cross, determinant, diagonal, dot, mat_vec,
    norm, scale_mat, sym_to_mat,
};
use adp_types::config::EigenConfig;
use adp_types::error::{AdpError, AdpResult};
use adp_types::tensor::{EigenResult, Mat3, Tensor6, Vec3};
use std::f64::consts::PI;
use tracing::{debug, warn};

/// Discriminant values below this (relative to scale⁶) are rounding noise.
const DISCRIMINANT_NOISE: f64 = 1e-12;

/// |p| below this (relative to scale²) is treated as a triple root.
const TRIPLE_ROOT_NOISE: f64 = 1e-13;

/// Eigenvalues of a Cartesian tensor, ordered (largest, smallest, intermediate).
///
/// Fails with [`AdpError::NotPositiveDefinite`] if the cubic has complex
/// roots, any root is <= 0, or the tensor is not finite. Repeated roots
/// are valid.
pub fn eigenvalues(ucart: &Tensor6) -> AdpResult<Vec3> {
    if !ucart.is_finite() {
        return Err(AdpError::not_positive_definite(
            "tensor has non-finite components",
        ));
    }
    let u = ucart.components();

    // Normal form: x³ + r x² + s x + t = 0, from -det(U - xI)
    let r = -u[0] - u[1] - u[2];
    let s = u[0] * u[1] + u[0] * u[2] + u[1] * u[2] - u[3] * u[3] - u[4] * u[4] - u[5] * u[5];
    let t = u[0] * u[5] * u[5] - u[0] * u[1] * u[2] + u[2] * u[3] * u[3] + u[1] * u[4] * u[4]
        - 2.0 * u[3] * u[4] * u[5];

    // Reduced form: y³ + p y + q = 0, with x = y - r/3
    let p = s - r * r / 3.0;
    let q = 2.0 * r * r * r / 27.0 - r * s / 3.0 + t;
    let shift = -r / 3.0;

    let scale = ucart.max_abs();
    let d = p * p * p / 27.0 + q * q / 4.0;
    if d > DISCRIMINANT_NOISE * scale.powi(6) {
        return Err(AdpError::not_positive_definite(format!(
            "characteristic cubic has complex roots (D = {d:e})"
        )));
    }

    let roots: Vec3 = if p > -TRIPLE_ROOT_NOISE * scale * scale {
        [shift; 3]
    } else {
        let zeta = (-p * p * p / 27.0).sqrt();
        let phi = (-q / (2.0 * zeta)).clamp(-1.0, 1.0).acos();
        let rzeta = 2.0 * zeta.cbrt();
        std::array::from_fn(|i| rzeta * ((phi + 2.0 * PI * i as f64) / 3.0).cos() + shift)
    };

    for (i, &lambda) in roots.iter().enumerate() {
        if lambda <= 0.0 {
            return Err(AdpError::not_positive_definite(format!(
                "eigenvalue {i} = {lambda:e} is not positive"
            )));
        }
    }
    Ok(roots)
}

/// Orthonormal principal axes with the given power-iteration tolerance.
///
/// Axis 0 comes from iterating U, axis 1 from iterating U⁻¹, axis 2 is
/// their cross product. When the start vector is already an eigenvector
/// the iteration stops there, so the order carries no guarantee about
/// which eigenvalue each axis belongs to. Use [`eigensystem`] for pairs.
pub fn eigenvectors(ucart: &Tensor6, tolerance: f64) -> AdpResult<[Vec3; 3]> {
    eigenvectors_with(ucart, &EigenConfig::with_tolerance(tolerance))
}

pub fn eigenvectors_with(ucart: &Tensor6, config: &EigenConfig) -> AdpResult<[Vec3; 3]> {
    config.validate()?;
    let m = sym_to_mat(ucart);
    let det = determinant(&m);
    if det == 0.0 || !det.is_finite() {
        return Err(AdpError::not_positive_definite(format!(
            "tensor is singular (det = {det:e})"
        )));
    }
    let m_inv = scale_mat(&cofactor_transpose(&m), 1.0 / det);

    let from_m = dominant_eigenvector(&m, config)?;
    let from_inverse = dominant_eigenvector(&m_inv, config)?;

    let third = cross(&from_m, &from_inverse);
    let len = norm(&third);
    if len == 0.0 {
        return Err(AdpError::not_positive_definite(
            "principal axes from U and U^-1 are parallel",
        ));
    }
    Ok([from_m, from_inverse, third.map(|c| c / len)])
}

/// Eigenvalues paired with their eigenvectors. All or nothing.
///
/// Vectors keep the order of [`eigenvectors_with`]. Each gets the Cardan
/// root of the same rank as its Rayleigh quotient vᵀUv.
pub fn eigensystem(ucart: &Tensor6, config: &EigenConfig) -> AdpResult<EigenResult> {
    let mut roots = eigenvalues(ucart)?;
    let vectors = eigenvectors_with(ucart, config)?;

    let m = sym_to_mat(ucart);
    let quotients = vectors.map(|v| dot(&v, &mat_vec(&m, &v)));
    let mut rank = [0usize, 1, 2];
    rank.sort_by(|&i, &j| quotients[i].total_cmp(&quotients[j]));
    roots.sort_by(f64::total_cmp);

    let mut values = [0.0; 3];
    for (root, &axis) in roots.iter().zip(&rank) {
        values[axis] = *root;
    }
    Ok(EigenResult { values, vectors })
}

/// Power iteration for the eigenvector of the largest-magnitude eigenvalue.
///
/// Starts from the unit vector of the largest |diagonal| entry (lowest
/// index on ties). An iterate equal to the negated previous one means the
/// dominant eigenvalue is negative.
fn dominant_eigenvector(m: &Mat3, config: &EigenConfig) -> AdpResult<Vec3> {
    let mut v = [0.0; 3];
    v[argmax_abs(&diagonal(m))] = 1.0;

    for iteration in 1..=config.max_iterations {
        let mv = mat_vec(m, &v);
        let abs_lambda = norm(&mv);
        if abs_lambda == 0.0 || !abs_lambda.is_finite() {
            return Err(AdpError::not_positive_definite(
                "power iteration collapsed to a zero vector",
            ));
        }
        let mv = mv.map(|c| c / abs_lambda);
        let scaled_tolerance = mv[argmax_abs(&mv)].abs() * config.tolerance;

        if approx_equal(&mv, &v.map(|c| -c), scaled_tolerance) {
            return Err(AdpError::not_positive_definite(
                "power iteration alternates sign (negative eigenvalue)",
            ));
        }
        if approx_equal(&mv, &v, scaled_tolerance) {
            debug!(iterations = iteration, "power iteration converged");
            return Ok(mv);
        }
        v = mv;
    }

    warn!(
        max_iterations = config.max_iterations,
        tolerance = config.tolerance,
        "power iteration did not converge"
    );
    Err(AdpError::NonConvergence {
        iterations: config.max_iterations,
    })
}
