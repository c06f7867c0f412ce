// ─────────────────────────────────────────────────────────────────────
// ADP Core — Property-Based Tests (proptest) for adp-math
// © 1998–2026 Miroslav Šotek. All rights reserved.
// Contact: www.anulum.li | protoscience@anulum.li
// ORCID: https://orcid.org/0009-0009-3560-0851
// License: GNU AGPL v3 | Commercial licensing available
// ─────────────────────────────────────────────────────────────────────
//! Property-based tests for adp-math using proptest.
//!
//! Covers: conversion roundtrips, eigenvalue trace invariance,
//! eigenvector orthonormality, positive-definiteness rejection,
//! Debye-Waller bounds.

use adp_math::convert::*;
use adp_math::debye_waller::*;
use adp_math::eigen::{eigensystem, eigenvalues, eigenvectors};
use adp_math::linalg::{dot, mat_mul, mat_to_sym, mat_vec, norm, sym_to_mat, transpose};
use adp_types::cell::{UnitCell, UnitCellMetric};
use adp_types::config::{EigenConfig, UnitCellParams};
use adp_types::error::AdpError;
use adp_types::tensor::{Mat3, MillerIndex, Tensor6, Vec3};
use proptest::prelude::*;

fn cell() -> impl Strategy<Value = UnitCell> {
    (
        3.0f64..60.0,
        3.0f64..60.0,
        3.0f64..60.0,
        70.0f64..110.0,
        70.0f64..110.0,
        70.0f64..110.0,
    )
        .prop_map(|(a, b, c, al, be, ga)| {
            UnitCell::new(UnitCellParams::new(a, b, c, al, be, ga)).unwrap()
        })
}

fn any_tensor() -> impl Strategy<Value = Tensor6> {
    prop::array::uniform6(-0.05f64..0.05).prop_map(Tensor6)
}

fn rotation(a: f64, b: f64, c: f64) -> Mat3 {
    let (sa, ca) = a.sin_cos();
    let (sb, cb) = b.sin_cos();
    let (sc, cc) = c.sin_cos();
    let rz1 = [[ca, -sa, 0.0], [sa, ca, 0.0], [0.0, 0.0, 1.0]];
    let rx = [[1.0, 0.0, 0.0], [0.0, cb, -sb], [0.0, sb, cb]];
    let rz2 = [[cc, -sc, 0.0], [sc, cc, 0.0], [0.0, 0.0, 1.0]];
    mat_mul(&mat_mul(&rz1, &rx), &rz2)
}

/// Positive-definite Ucart with well separated eigenvalues, plus those eigenvalues.
fn pd_tensor() -> impl Strategy<Value = (Tensor6, Vec3)> {
    (
        0.005f64..0.02,
        1.5f64..2.5,
        1.5f64..2.5,
        0.0f64..std::f64::consts::TAU,
        0.0f64..std::f64::consts::TAU,
        0.0f64..std::f64::consts::TAU,
    )
        .prop_map(|(l1, k2, k3, a, b, c)| {
            let values = [l1, l1 * k2, l1 * k2 * k3];
            let r = rotation(a, b, c);
            let d = [
                [values[0], 0.0, 0.0],
                [0.0, values[1], 0.0],
                [0.0, 0.0, values[2]],
            ];
            (mat_to_sym(&mat_mul(&mat_mul(&r, &d), &transpose(&r))), values)
        })
}

fn miller() -> impl Strategy<Value = MillerIndex> {
    (-20i32..20, -20i32..20, -20i32..20).prop_map(|(h, k, l)| MillerIndex::new(h, k, l))
}

fn tensors_close(a: &Tensor6, b: &Tensor6, rel: f64) -> bool {
    let scale = b.max_abs().max(1e-12);
    (0..6).all(|i| (a[i] - b[i]).abs() <= rel * scale)
}

fn sorted(mut v: Vec3) -> Vec3 {
    v.sort_by(|a, b| a.partial_cmp(b).unwrap());
    v
}

// ── Conversion Roundtrips ────────────────────────────────────────────

proptest! {
    /// Ucart -> U* -> Ucart reproduces the input.
    #[test]
    fn cartesian_star_roundtrip(t in any_tensor(), cell in cell()) {
        let ustar = cartesian_to_reciprocal_star(&t, &cell.fractionalization_matrix());
        let back = reciprocal_star_to_cartesian(&ustar, &cell.orthogonalization_matrix());
        prop_assert!(tensors_close(&back, &t, 1e-10), "{:?} vs {:?}", back, t);
    }

    /// Ufrac -> Ucart -> Ufrac reproduces the input.
    #[test]
    fn fractional_cartesian_roundtrip(t in any_tensor(), cell in cell()) {
        let back = cartesian_to_fractional(&fractional_to_cartesian(&t, &cell), &cell);
        prop_assert!(tensors_close(&back, &t, 1e-10), "{:?} vs {:?}", back, t);
    }

    /// Ufrac -> U* -> Ufrac and U* -> beta -> U* reproduce the input.
    #[test]
    fn scaling_roundtrips(t in any_tensor(), cell in cell()) {
        let r = cell.reciprocal_lengths();
        let back = reciprocal_star_to_fractional(&fractional_to_reciprocal_star(&t, &r), &r);
        prop_assert!(tensors_close(&back, &t, 1e-12));
        let back = temperature_factor_to_reciprocal_star(&reciprocal_star_to_temperature_factor(&t));
        prop_assert!(tensors_close(&back, &t, 1e-14));
        let back = temperature_factor_to_cartesian(&cartesian_to_temperature_factor(&t, &cell), &cell);
        prop_assert!(tensors_close(&back, &t, 1e-10));
        let back = b_as_u_aniso(&u_as_b_aniso(&t));
        prop_assert!(tensors_close(&back, &t, 1e-14));
    }

    /// Uiso survives a trip through every anisotropic basis.
    #[test]
    fn isotropic_roundtrips(u in 0.001f64..2.0, cell in cell()) {
        prop_assert!((b_as_u(u_as_b(u)) - u).abs() <= 1e-14 * u);
        prop_assert!((cartesian_to_isotropic(&isotropic_to_cartesian(u)) - u).abs() <= 1e-14 * u);
        let ufrac = isotropic_to_fractional(u, &cell);
        prop_assert!((fractional_to_isotropic(&ufrac, &cell) - u).abs() <= 1e-10 * u);
        let ustar = isotropic_to_reciprocal_star(u, &cell);
        prop_assert!((reciprocal_star_to_isotropic(&ustar, &cell) - u).abs() <= 1e-10 * u);
        let beta = isotropic_to_temperature_factor(u, &cell);
        prop_assert!((temperature_factor_to_isotropic(&beta, &cell) - u).abs() <= 1e-10 * u);
    }
}

// ── Eigenvalue Properties ────────────────────────────────────────────

proptest! {
    /// Sum of eigenvalues equals the trace.
    #[test]
    fn eigenvalue_trace_invariance((t, _) in pd_tensor()) {
        let vals = eigenvalues(&t).unwrap();
        let sum: f64 = vals.iter().sum();
        prop_assert!((sum - t.trace()).abs() <= 1e-12 * t.trace(),
            "sum = {}, trace = {}", sum, t.trace());
    }

    /// Cardan's roots reproduce the generating eigenvalues.
    #[test]
    fn eigenvalues_recover_spectrum((t, expected) in pd_tensor()) {
        let vals = sorted(eigenvalues(&t).unwrap());
        for i in 0..3 {
            prop_assert!((vals[i] - expected[i]).abs() <= 1e-9 * expected[2],
                "lambda[{}] = {}, expected {}", i, vals[i], expected[i]);
        }
    }

    /// Isotropic tensors give three equal eigenvalues.
    #[test]
    fn isotropic_degeneracy(u in 0.001f64..2.0) {
        let vals = eigenvalues(&isotropic_to_cartesian(u)).unwrap();
        for v in vals {
            prop_assert!((v - u).abs() <= 1e-12 * u, "{} vs {}", v, u);
        }
    }

    /// A dominant negative diagonal entry is rejected by both solvers.
    #[test]
    fn negative_diagonal_rejected(
        a in 0.1f64..1.0,
        b in 0.01f64..0.09,
        c in 0.01f64..0.09,
    ) {
        let t = Tensor6::new(-a, b, c, 0.0, 0.0, 0.0);
        let is_npd = matches!(eigenvalues(&t), Err(AdpError::NotPositiveDefinite { .. }));
        prop_assert!(is_npd);
        let is_npd = matches!(eigenvectors(&t, 1e-6), Err(AdpError::NotPositiveDefinite { .. }));
        prop_assert!(is_npd);
    }
}

// ── Eigenvector Properties ───────────────────────────────────────────

proptest! {
    /// Eigenvectors are unit length and mutually orthogonal.
    #[test]
    fn eigenvectors_orthonormal((t, _) in pd_tensor()) {
        let vecs = eigenvectors(&t, 1e-6).unwrap();
        for i in 0..3 {
            prop_assert!((norm(&vecs[i]) - 1.0).abs() < 1e-10, "|v{}| = {}", i, norm(&vecs[i]));
            for j in (i + 1)..3 {
                prop_assert!(dot(&vecs[i], &vecs[j]).abs() < 1e-5,
                    "v{} . v{} = {}", i, j, dot(&vecs[i], &vecs[j]));
            }
        }
    }

    /// values[i] and vectors[i] satisfy U v = λ v.
    #[test]
    fn eigensystem_pairs_by_position((t, expected) in pd_tensor()) {
        let eig = eigensystem(&t, &EigenConfig::default()).unwrap();
        let m = sym_to_mat(&t);
        for i in 0..3 {
            let mv = mat_vec(&m, &eig.vectors[i]);
            for k in 0..3 {
                let residual = mv[k] - eig.values[i] * eig.vectors[i][k];
                prop_assert!(residual.abs() <= 1e-5 * expected[2],
                    "axis {} component {} residual {}", i, k, residual);
            }
        }
    }
}

// ── Debye-Waller Properties ──────────────────────────────────────────

proptest! {
    /// Uiso = 0 means no attenuation.
    #[test]
    fn zero_uiso_no_attenuation(cell in cell(), h in miller()) {
        prop_assert_eq!(debye_waller_uiso_hkl(&cell, &h, 0.0), 1.0);
    }

    /// The (0,0,0) reflection is never attenuated.
    #[test]
    fn origin_no_attenuation(t in any_tensor(), cell in cell()) {
        let origin = MillerIndex::default();
        prop_assert_eq!(debye_waller_ustar(&origin, &t), 1.0);
        prop_assert_eq!(debye_waller_beta(&origin, &t), 1.0);
        prop_assert_eq!(debye_waller_ucart(&cell, &origin, &t), 1.0);
    }

    /// A positive-definite tensor attenuates: 0 < DW <= 1.
    #[test]
    fn positive_definite_attenuates((t, _) in pd_tensor(), cell in cell(), h in miller()) {
        let dw = debye_waller_ucart(&cell, &h, &t);
        prop_assert!(dw > 0.0 && dw <= 1.0, "DW = {}", dw);
    }

    /// Ucart, Ufrac and beta give the same factor.
    #[test]
    fn debye_waller_basis_independent((t, _) in pd_tensor(), cell in cell(), h in miller()) {
        let reference = debye_waller_ucart(&cell, &h, &t);
        let ufrac = cartesian_to_fractional(&t, &cell);
        let beta = cartesian_to_temperature_factor(&t, &cell);
        prop_assert!((debye_waller_ufrac(&cell, &h, &ufrac) - reference).abs() <= 1e-10);
        prop_assert!((debye_waller_beta(&h, &beta) - reference).abs() <= 1e-10);
    }
}

// ── Concrete Scenario ────────────────────────────────────────────────

#[test]
fn diagonal_tensor_scenario() {
    let t = Tensor6::new(0.01, 0.02, 0.03, 0.0, 0.0, 0.0);

    let vals = sorted(eigenvalues(&t).unwrap());
    for (got, want) in vals.iter().zip([0.01, 0.02, 0.03]) {
        assert!((got - want).abs() < 1e-12);
    }

    let vecs = eigenvectors(&t, 1e-6).unwrap();
    for v in &vecs {
        let axis = v.iter().position(|c| c.abs() > 0.5).unwrap();
        for (k, c) in v.iter().enumerate() {
            let expected = if k == axis { 1.0 } else { 0.0 };
            assert!((c.abs() - expected).abs() < 1e-10);
        }
    }

    assert_eq!(fractional_to_reciprocal_star(&t, &[1.0, 1.0, 1.0]), t);
}
