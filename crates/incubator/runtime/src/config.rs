//! Ledger configuration

use serde::{Deserialize, Serialize};

/// Utilization breakpoints used to tier pools for presentation
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct LedgerConfig {
    /// Percentage at which a pool enters the warning tier
    #[serde(default = "default_warning_threshold")]
    pub warning_threshold: f64,

    /// Percentage at which a pool enters the critical tier
    #[serde(default = "default_critical_threshold")]
    pub critical_threshold: f64,
}

impl Default for LedgerConfig {
    fn default() -> Self {
        Self {
            warning_threshold: default_warning_threshold(),
            critical_threshold: default_critical_threshold(),
        }
    }
}

impl LedgerConfig {
    /// Thresholds must be finite, non-negative and ordered
    pub fn is_valid(&self) -> bool {
        self.warning_threshold.is_finite()
            && self.critical_threshold.is_finite()
            && self.warning_threshold >= 0.0
            && self.warning_threshold <= self.critical_threshold
    }
}

fn default_warning_threshold() -> f64 {
    60.0
}

fn default_critical_threshold() -> f64 {
    80.0
}
