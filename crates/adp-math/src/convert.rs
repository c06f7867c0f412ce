// ─────────────────────────────────────────────────────────────────────
// ADP Core — Convert
// © 1998–2026 Miroslav Šotek. All rights reserved.
// Contact: www.anulum.li | protoscience@anulum.li
// ORCID: https://orcid.org/0009-0009-3560-0851
// License: GNU AGPL v3 | Commercial licensing available
// ─────────────────────────────────────────────────────────────────────
//! Conversions between equivalent encodings of a displacement tensor.
//!
//! Encodings:
//!   - Ucart: Cartesian frame (Å²)
//!   - Ufrac: along the direct cell axes (Å²)
//!   - U*:    reciprocal-star, U*_ij = Ufrac_ij a*_i a*_j
//!   - beta:  2π² U*
//!   - B:     8π² U
//!   - Uiso:  one scalar, mean of the Ucart diagonal
//!
//! All maps are linear and total. Nothing here validates the tensor;
//! NaN and Inf propagate.

use crate::linalg::congruence_sym;
use adp_types::cell::UnitCellMetric;
use adp_types::constants::{EIGHT_PI_SQUARED, TWO_PI_SQUARED};
use adp_types::tensor::{Mat3, Tensor6};

fn pair_factors(r: &[f64; 3]) -> [f64; 6] {
    [
        r[0] * r[0],
        r[1] * r[1],
        r[2] * r[2],
        r[0] * r[1],
        r[0] * r[2],
        r[1] * r[2],
    ]
}

// ── Ufrac <-> U* ─────────────────────────────────────────────────────

/// Ufrac -> U*.
///
/// The transformation is U* = C Ufrac Cᵀ with C = diag(a*, b*, c*),
/// which reduces to scaling each component by a*_i a*_j.
pub fn fractional_to_reciprocal_star(ufrac: &Tensor6, reciprocal_lengths: &[f64; 3]) -> Tensor6 {
    let f = pair_factors(reciprocal_lengths);
    Tensor6(std::array::from_fn(|i| ufrac[i] * f[i]))
}

/// U* -> Ufrac.
pub fn reciprocal_star_to_fractional(ustar: &Tensor6, reciprocal_lengths: &[f64; 3]) -> Tensor6 {
    let f = pair_factors(reciprocal_lengths);
    Tensor6(std::array::from_fn(|i| ustar[i] / f[i]))
}

// ── Ucart <-> U* ─────────────────────────────────────────────────────

/// Ucart -> U* via U* = F Ucart Fᵀ, F the fractionalization matrix.
pub fn cartesian_to_reciprocal_star(ucart: &Tensor6, fractionalization: &Mat3) -> Tensor6 {
    congruence_sym(fractionalization, ucart)
}

/// U* -> Ucart via Ucart = O U* Oᵀ, O the orthogonalization matrix.
pub fn reciprocal_star_to_cartesian(ustar: &Tensor6, orthogonalization: &Mat3) -> Tensor6 {
    congruence_sym(orthogonalization, ustar)
}

// ── Ucart <-> Ufrac (through U*) ─────────────────────────────────────

pub fn cartesian_to_fractional(ucart: &Tensor6, cell: &impl UnitCellMetric) -> Tensor6 {
    reciprocal_star_to_fractional(
        &cartesian_to_reciprocal_star(ucart, &cell.fractionalization_matrix()),
        &cell.reciprocal_lengths(),
    )
}

pub fn fractional_to_cartesian(ufrac: &Tensor6, cell: &impl UnitCellMetric) -> Tensor6 {
    reciprocal_star_to_cartesian(
        &fractional_to_reciprocal_star(ufrac, &cell.reciprocal_lengths()),
        &cell.orthogonalization_matrix(),
    )
}

// ── U* <-> beta ──────────────────────────────────────────────────────

pub fn reciprocal_star_to_temperature_factor(ustar: &Tensor6) -> Tensor6 {
    ustar.scaled(TWO_PI_SQUARED)
}

pub fn temperature_factor_to_reciprocal_star(beta: &Tensor6) -> Tensor6 {
    Tensor6(beta.0.map(|c| c / TWO_PI_SQUARED))
}

pub fn cartesian_to_temperature_factor(ucart: &Tensor6, cell: &impl UnitCellMetric) -> Tensor6 {
    reciprocal_star_to_temperature_factor(&cartesian_to_reciprocal_star(
        ucart,
        &cell.fractionalization_matrix(),
    ))
}

pub fn temperature_factor_to_cartesian(beta: &Tensor6, cell: &impl UnitCellMetric) -> Tensor6 {
    reciprocal_star_to_cartesian(
        &temperature_factor_to_reciprocal_star(beta),
        &cell.orthogonalization_matrix(),
    )
}

pub fn fractional_to_temperature_factor(ufrac: &Tensor6, cell: &impl UnitCellMetric) -> Tensor6 {
    reciprocal_star_to_temperature_factor(&fractional_to_reciprocal_star(
        ufrac,
        &cell.reciprocal_lengths(),
    ))
}

pub fn temperature_factor_to_fractional(beta: &Tensor6, cell: &impl UnitCellMetric) -> Tensor6 {
    reciprocal_star_to_fractional(
        &temperature_factor_to_reciprocal_star(beta),
        &cell.reciprocal_lengths(),
    )
}

// ── Isotropic ────────────────────────────────────────────────────────

/// Uiso = (Ucart11 + Ucart22 + Ucart33) / 3
pub fn cartesian_to_isotropic(ucart: &Tensor6) -> f64 {
    ucart.trace() / 3.0
}

/// Isotropic equivalent of an anisotropic tensor (U_equiv).
pub fn u_equiv(ucart: &Tensor6) -> f64 {
    cartesian_to_isotropic(ucart)
}

pub fn isotropic_to_cartesian(uiso: f64) -> Tensor6 {
    Tensor6::isotropic(uiso)
}

pub fn fractional_to_isotropic(ufrac: &Tensor6, cell: &impl UnitCellMetric) -> f64 {
    cartesian_to_isotropic(&fractional_to_cartesian(ufrac, cell))
}

pub fn isotropic_to_fractional(uiso: f64, cell: &impl UnitCellMetric) -> Tensor6 {
    cartesian_to_fractional(&isotropic_to_cartesian(uiso), cell)
}

pub fn reciprocal_star_to_isotropic(ustar: &Tensor6, cell: &impl UnitCellMetric) -> f64 {
    cartesian_to_isotropic(&reciprocal_star_to_cartesian(
        ustar,
        &cell.orthogonalization_matrix(),
    ))
}

pub fn isotropic_to_reciprocal_star(uiso: f64, cell: &impl UnitCellMetric) -> Tensor6 {
    cartesian_to_reciprocal_star(
        &isotropic_to_cartesian(uiso),
        &cell.fractionalization_matrix(),
    )
}

pub fn temperature_factor_to_isotropic(beta: &Tensor6, cell: &impl UnitCellMetric) -> f64 {
    cartesian_to_isotropic(&temperature_factor_to_cartesian(beta, cell))
}

pub fn isotropic_to_temperature_factor(uiso: f64, cell: &impl UnitCellMetric) -> Tensor6 {
    cartesian_to_temperature_factor(&isotropic_to_cartesian(uiso), cell)
}

// ── U <-> B ──────────────────────────────────────────────────────────

pub fn u_as_b(uiso: f64) -> f64 {
    uiso * EIGHT_PI_SQUARED
}

pub fn b_as_u(biso: f64) -> f64 {
    biso / EIGHT_PI_SQUARED
}

pub fn u_as_b_aniso(u: &Tensor6) -> Tensor6 {
    u.scaled(EIGHT_PI_SQUARED)
}

pub fn b_as_u_aniso(b: &Tensor6) -> Tensor6 {
    Tensor6(b.0.map(|c| c / EIGHT_PI_SQUARED))
}
