// ─────────────────────────────────────────────────────────────────────
// ADP Core — Debye-Waller
// © 1998–2026 Miroslav Šotek. All rights reserved.
// Contact: www.anulum.li | protoscience@anulum.li
// ORCID: https://orcid.org/0009-0009-3560-0851
// License: GNU AGPL v3 | Commercial licensing available
// ─────────────────────────────────────────────────────────────────────
//! Debye-Waller attenuation factors.
//!
//! Isotropic:    exp(-B (sin θ/λ)²)
//! Anisotropic:  exp(-2π² hᵀ U* h), or exp(-hᵀ beta h)
//!
//! No positive-definiteness check is made here.

use crate::convert::{cartesian_to_reciprocal_star, fractional_to_reciprocal_star, u_as_b};
use adp_types::cell::UnitCellMetric;
use adp_types::constants::TWO_PI_SQUARED;
use adp_types::tensor::{MillerIndex, Tensor6};

/// hᵀ X h for a symmetric six-component X.
fn quadratic_form(h: &MillerIndex, x: &Tensor6) -> f64 {
    let [h, k, l] = h.as_f64();
    h * h * x[0]
        + k * k * x[1]
        + l * l * x[2]
        + 2.0 * h * k * x[3]
        + 2.0 * h * l * x[4]
        + 2.0 * k * l * x[5]
}

pub fn debye_waller_biso(stol_sq: f64, biso: f64) -> f64 {
    (-biso * stol_sq).exp()
}

pub fn debye_waller_uiso(stol_sq: f64, uiso: f64) -> f64 {
    debye_waller_biso(stol_sq, u_as_b(uiso))
}

/// Isotropic factor for reflection `h`; (sin θ/λ)² comes from the cell.
pub fn debye_waller_biso_hkl(cell: &impl UnitCellMetric, h: &MillerIndex, biso: f64) -> f64 {
    debye_waller_biso(cell.stol_sq(h), biso)
}

pub fn debye_waller_uiso_hkl(cell: &impl UnitCellMetric, h: &MillerIndex, uiso: f64) -> f64 {
    debye_waller_biso_hkl(cell, h, u_as_b(uiso))
}

pub fn debye_waller_ustar(h: &MillerIndex, ustar: &Tensor6) -> f64 {
    (-TWO_PI_SQUARED * quadratic_form(h, ustar)).exp()
}

/// The 2π² is already part of the beta convention.
pub fn debye_waller_beta(h: &MillerIndex, beta: &Tensor6) -> f64 {
    (-quadratic_form(h, beta)).exp()
}

pub fn debye_waller_ufrac(cell: &impl UnitCellMetric, h: &MillerIndex, ufrac: &Tensor6) -> f64 {
    debye_waller_ustar(
        h,
        &fractional_to_reciprocal_star(ufrac, &cell.reciprocal_lengths()),
    )
}

pub fn debye_waller_ucart(cell: &impl UnitCellMetric, h: &MillerIndex, ucart: &Tensor6) -> f64 {
    debye_waller_ustar(
        h,
        &cartesian_to_reciprocal_star(ucart, &cell.fractionalization_matrix()),
    )
}
