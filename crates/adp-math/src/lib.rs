// ─────────────────────────────────────────────────────────────────────
// ADP Core — ADP Math
// © 1998–2026 Miroslav Šotek. All rights reserved.
// Contact: www.anulum.li | protoscience@anulum.li
// ORCID: https://orcid.org/0009-0009-3560-0851
// License: GNU AGPL v3 | Commercial licensing available
// ─────────────────────────────────────────────────────────────────────
//! Numerical kernels for anisotropic displacement parameters.

pub mod batch;
pub mod convert;
pub mod debye_waller;
pub mod eigen;
pub mod linalg;
