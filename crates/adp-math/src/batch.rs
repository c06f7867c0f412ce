// ─────────────────────────────────────────────────────────────────────
// ADP Core — Batch
// © 1998–2026 Miroslav Šotek. All rights reserved.
// Contact: www.anulum.li | protoscience@anulum.li
// ORCID: https://orcid.org/0009-0009-3560-0851
// License: GNU AGPL v3 | Commercial licensing available
// ─────────────────────────────────────────────────────────────────────
//! Per-atom and per-reflection sweeps over tensor tables.
//!
//! A table is an `n x 6` array, one tensor per row in (11, 22, 33, 12, 13, 23)
//! order. Eigen failures are reported per row; one bad atom does not abort
//! the sweep.

use crate::convert::{cartesian_to_isotropic, cartesian_to_reciprocal_star};
use crate::debye_waller::debye_waller_ustar;
use crate::eigen::{eigensystem, eigenvalues};
use adp_types::cell::UnitCellMetric;
use adp_types::config::EigenConfig;
use adp_types::error::{AdpError, AdpResult};
use adp_types::tensor::{EigenResult, MillerIndex, Tensor6, Vec3};
use ndarray::{Array1, Array2, ArrayView1};
use tracing::warn;

fn check_table(table: &Array2<f64>) -> AdpResult<()> {
    if table.ncols() != 6 {
        return Err(AdpError::ConfigError(format!(
            "tensor table dimension mismatch: expected 6 columns, got {}",
            table.ncols()
        )));
    }
    Ok(())
}

fn row_tensor(row: ArrayView1<f64>) -> Tensor6 {
    Tensor6(std::array::from_fn(|i| row[i]))
}

/// Ucart rows -> U* rows.
pub fn cartesian_rows_to_reciprocal_star(
    table: &Array2<f64>,
    cell: &impl UnitCellMetric,
) -> AdpResult<Array2<f64>> {
    check_table(table)?;
    let f = cell.fractionalization_matrix();
    let mut out = Array2::zeros(table.raw_dim());
    for (src, mut dst) in table.rows().into_iter().zip(out.rows_mut()) {
        let ustar = cartesian_to_reciprocal_star(&row_tensor(src), &f);
        for (d, c) in dst.iter_mut().zip(ustar.components()) {
            *d = c;
        }
    }
    Ok(out)
}

/// U_equiv of every Ucart row.
pub fn isotropic_equivalents(table: &Array2<f64>) -> AdpResult<Array1<f64>> {
    check_table(table)?;
    Ok(table
        .rows()
        .into_iter()
        .map(|row| cartesian_to_isotropic(&row_tensor(row)))
        .collect())
}

/// Eigenvalues of every Ucart row.
pub fn eigenvalue_rows(table: &Array2<f64>) -> AdpResult<Vec<AdpResult<Vec3>>> {
    check_table(table)?;
    Ok(table
        .rows()
        .into_iter()
        .enumerate()
        .map(|(i, row)| {
            eigenvalues(&row_tensor(row)).inspect_err(|e| {
                warn!(row = i, error = %e, "eigenvalues rejected");
            })
        })
        .collect())
}

/// Full eigensystem of every Ucart row.
pub fn eigensystem_rows(
    table: &Array2<f64>,
    config: &EigenConfig,
) -> AdpResult<Vec<AdpResult<EigenResult>>> {
    check_table(table)?;
    config.validate()?;
    Ok(table
        .rows()
        .into_iter()
        .enumerate()
        .map(|(i, row)| {
            eigensystem(&row_tensor(row), config).inspect_err(|e| {
                warn!(row = i, error = %e, "eigensystem rejected");
            })
        })
        .collect())
}

/// Indices of rows that are positive definite.
pub fn positive_definite_rows(table: &Array2<f64>) -> AdpResult<Vec<usize>> {
    Ok(eigenvalue_rows(table)?
        .iter()
        .enumerate()
        .filter_map(|(i, r)| r.is_ok().then_some(i))
        .collect())
}

/// Anisotropic Debye-Waller factor of one U* tensor over many reflections.
pub fn debye_waller_ustar_rows(indices: &[MillerIndex], ustar: &Tensor6) -> Array1<f64> {
    indices
        .iter()
        .map(|h| debye_waller_ustar(h, ustar))
        .collect()
}
