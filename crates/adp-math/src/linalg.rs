// ─────────────────────────────────────────────────────────────────────
// ADP Core — Linalg
// © 1998–2026 Miroslav Šotek. All rights reserved.
// Contact: www.anulum.li | protoscience@anulum.li
// ORCID: https://orcid.org/0009-0009-3560-0851
// License: GNU AGPL v3 | Commercial licensing available
// ─────────────────────────────────────────────────────────────────────
//! Fixed-size 3x3 linear algebra.
//!
//! Determinant, adjugate, congruence transform and the vector helpers
//! used by the power iteration. Dimension is fixed at 3 throughout.

use adp_types::tensor::{Mat3, Tensor6, Vec3};

/// Expand a six-component tensor to its dense symmetric form.
pub fn sym_to_mat(t: &Tensor6) -> Mat3 {
    [[t[0], t[3], t[4]], [t[3], t[1], t[5]], [t[4], t[5], t[2]]]
}

/// Compress a (symmetric) matrix back to six components. The lower
/// triangle is ignored.
pub fn mat_to_sym(m: &Mat3) -> Tensor6 {
    Tensor6::new(m[0][0], m[1][1], m[2][2], m[0][1], m[0][2], m[1][2])
}

pub fn mat_mul(a: &Mat3, b: &Mat3) -> Mat3 {
    let mut out = [[0.0; 3]; 3];
    for i in 0..3 {
        for j in 0..3 {
            out[i][j] = a[i][0] * b[0][j] + a[i][1] * b[1][j] + a[i][2] * b[2][j];
        }
    }
    out
}

pub fn transpose(a: &Mat3) -> Mat3 {
    [
        [a[0][0], a[1][0], a[2][0]],
        [a[0][1], a[1][1], a[2][1]],
        [a[0][2], a[1][2], a[2][2]],
    ]
}

pub fn mat_vec(m: &Mat3, v: &Vec3) -> Vec3 {
    [
        m[0][0] * v[0] + m[0][1] * v[1] + m[0][2] * v[2],
        m[1][0] * v[0] + m[1][1] * v[1] + m[1][2] * v[2],
        m[2][0] * v[0] + m[2][1] * v[1] + m[2][2] * v[2],
    ]
}

pub fn scale_mat(m: &Mat3, factor: f64) -> Mat3 {
    m.map(|row| row.map(|x| x * factor))
}

pub fn diagonal(m: &Mat3) -> Vec3 {
    [m[0][0], m[1][1], m[2][2]]
}

pub fn determinant(m: &Mat3) -> f64 {
    m[0][0] * (m[1][1] * m[2][2] - m[1][2] * m[2][1])
        - m[0][1] * (m[1][0] * m[2][2] - m[1][2] * m[2][0])
        + m[0][2] * (m[1][0] * m[2][1] - m[1][1] * m[2][0])
}

/// Transposed cofactor matrix (adjugate). `adj(M) / det(M)` is the inverse.
pub fn cofactor_transpose(m: &Mat3) -> Mat3 {
    [
        [
            m[1][1] * m[2][2] - m[1][2] * m[2][1],
            m[0][2] * m[2][1] - m[0][1] * m[2][2],
            m[0][1] * m[1][2] - m[0][2] * m[1][1],
        ],
        [
            m[1][2] * m[2][0] - m[1][0] * m[2][2],
            m[0][0] * m[2][2] - m[0][2] * m[2][0],
            m[0][2] * m[1][0] - m[0][0] * m[1][2],
        ],
        [
            m[1][0] * m[2][1] - m[1][1] * m[2][0],
            m[0][1] * m[2][0] - m[0][0] * m[2][1],
            m[0][0] * m[1][1] - m[0][1] * m[1][0],
        ],
    ]
}

/// A X Aᵀ
pub fn congruence(a: &Mat3, x: &Mat3) -> Mat3 {
    mat_mul(&mat_mul(a, x), &transpose(a))
}

/// A T Aᵀ on a six-component tensor.
pub fn congruence_sym(a: &Mat3, t: &Tensor6) -> Tensor6 {
    mat_to_sym(&congruence(a, &sym_to_mat(t)))
}

pub fn dot(a: &Vec3, b: &Vec3) -> f64 {
    a[0] * b[0] + a[1] * b[1] + a[2] * b[2]
}

pub fn cross(a: &Vec3, b: &Vec3) -> Vec3 {
    [
        a[1] * b[2] - a[2] * b[1],
        a[2] * b[0] - a[0] * b[2],
        a[0] * b[1] - a[1] * b[0],
    ]
}

pub fn norm(v: &Vec3) -> f64 {
    dot(v, v).sqrt()
}

/// Index of the largest |v_i|. Ties go to the lowest index.
pub fn argmax_abs(v: &Vec3) -> usize {
    let mut best = 0;
    for i in 1..3 {
        if v[i].abs() > v[best].abs() {
            best = i;
        }
    }
    best
}

/// Component-wise |a_i - b_i| <= tolerance.
pub fn approx_equal(a: &Vec3, b: &Vec3, tolerance: f64) -> bool {
    (0..3).all(|i| (a[i] - b[i]).abs() <= tolerance)
}
