// ─────────────────────────────────────────────────────────────────────
// ADP Core — Constants
// © 1998–2026 Miroslav Šotek. All rights reserved.
// Contact: www.anulum.li | protoscience@anulum.li
// ORCID: https://orcid.org/0009-0009-3560-0851
// License: GNU AGPL v3 | Commercial licensing available
// ─────────────────────────────────────────────────────────────────────
use std::f64::consts::PI;

/// 2π², relates the beta convention to U*.
pub const TWO_PI_SQUARED: f64 = 2.0 * PI * PI;

/// 8π², relates B to U.
pub const EIGHT_PI_SQUARED: f64 = 8.0 * PI * PI;

/// Default power-iteration tolerance (relative to the largest component).
pub const DEFAULT_EIGEN_TOLERANCE: f64 = 1e-6;

/// Hard cap on power-iteration steps.
pub const POWER_ITERATION_LIMIT: usize = 1000;
