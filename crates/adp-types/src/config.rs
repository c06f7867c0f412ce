// ─────────────────────────────────────────────────────────────────────
// ADP Core — Config
// © 1998–2026 Miroslav Šotek. All rights reserved.
// Contact: www.anulum.li | protoscience@anulum.li
// ORCID: https://orcid.org/0009-0009-3560-0851
// License: GNU AGPL v3 | Commercial licensing available
// ─────────────────────────────────────────────────────────────────────
use crate::cell::UnitCell;
use crate::constants::{DEFAULT_EIGEN_TOLERANCE, POWER_ITERATION_LIMIT};
use crate::error::{AdpError, AdpResult};
use serde::{Deserialize, Serialize};

/// Top-level configuration: one unit cell plus solver settings.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AdpConfig {
    pub unit_cell: UnitCellParams,
    /// Optional eigen-solver settings. Defaults apply when absent.
    #[serde(default)]
    pub eigen: EigenConfig,
}

/// Direct-space cell parameters. Lengths in Å, angles in degrees.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct UnitCellParams {
    pub a: f64,
    pub b: f64,
    pub c: f64,
    pub alpha: f64,
    pub beta: f64,
    pub gamma: f64,
}

impl UnitCellParams {
    pub fn new(a: f64, b: f64, c: f64, alpha: f64, beta: f64, gamma: f64) -> Self {
        UnitCellParams {
            a,
            b,
            c,
            alpha,
            beta,
            gamma,
        }
    }

    /// Cubic cell with edge `a`.
    pub fn cubic(a: f64) -> Self {
        Self::new(a, a, a, 90.0, 90.0, 90.0)
    }

    pub fn validate(&self) -> AdpResult<()> {
        for (name, len) in [("a", self.a), ("b", self.b), ("c", self.c)] {
            if !len.is_finite() || len <= 0.0 {
                return Err(AdpError::ConfigError(format!(
                    "cell length {name} must be positive and finite, got {len}"
                )));
            }
        }
        for (name, angle) in [
            ("alpha", self.alpha),
            ("beta", self.beta),
            ("gamma", self.gamma),
        ] {
            if !angle.is_finite() || angle <= 0.0 || angle >= 180.0 {
                return Err(AdpError::ConfigError(format!(
                    "cell angle {name} must lie in (0, 180) degrees, got {angle}"
                )));
            }
        }
        Ok(())
    }
}

/// Power-iteration settings for the eigenvector solver.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct EigenConfig {
    /// Convergence tolerance, scaled by the largest component of each iterate.
    #[serde(default = "default_tolerance")]
    pub tolerance: f64,
    #[serde(default = "default_max_iterations")]
    pub max_iterations: usize,
}

fn default_tolerance() -> f64 {
    DEFAULT_EIGEN_TOLERANCE
}
fn default_max_iterations() -> usize {
    POWER_ITERATION_LIMIT
}

impl Default for EigenConfig {
    fn default() -> Self {
        EigenConfig {
            tolerance: default_tolerance(),
            max_iterations: default_max_iterations(),
        }
    }
}

impl EigenConfig {
    pub fn with_tolerance(tolerance: f64) -> Self {
        EigenConfig {
            tolerance,
            ..Self::default()
        }
    }

    pub fn validate(&self) -> AdpResult<()> {
        if !self.tolerance.is_finite() || self.tolerance <= 0.0 {
            return Err(AdpError::ConfigError(format!(
                "eigen tolerance must be positive and finite, got {}",
                self.tolerance
            )));
        }
        if self.max_iterations == 0 {
            return Err(AdpError::ConfigError(
                "eigen max_iterations must be at least 1".to_string(),
            ));
        }
        Ok(())
    }
}

impl AdpConfig {
    /// Load from a JSON file and validate.
    pub fn from_file(path: &str) -> AdpResult<Self> {
        let contents = std::fs::read_to_string(path)?;
        let config: Self = serde_json::from_str(&contents)?;
        config.validate()?;
        Ok(config)
    }

    pub fn validate(&self) -> AdpResult<()> {
        self.unit_cell.validate()?;
        self.eigen.validate()
    }

    /// Build the unit cell described by this config.
    pub fn create_unit_cell(&self) -> AdpResult<UnitCell> {
        UnitCell::new(self.unit_cell)
    }
}
