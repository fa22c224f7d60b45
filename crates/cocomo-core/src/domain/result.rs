//! Estimation output.

use serde::{Deserialize, Serialize};

/// Round to two decimals, halves away from zero.
pub fn round2(value: f64) -> f64 {
    (value * 100.0).round() / 100.0
}

/// Effort, schedule, staffing and productivity for one estimate.
///
/// Every field is rounded to two decimals. `effort_adjustment_factor` is only
/// set by the intermediate model.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct EstimationResult {
    /// Effort in person-months.
    pub person_months: f64,
    /// Development schedule in calendar months.
    pub time_in_months: f64,
    /// Average staff, `effort / schedule`.
    pub staff_size: f64,
    /// KLOC per person-month.
    pub productivity: f64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub effort_adjustment_factor: Option<f64>,
}

impl EstimationResult {
    /// EAF for display; "not applicable" for basic estimates.
    pub fn effort_adjustment_label(&self) -> String {
        match self.effort_adjustment_factor {
            Some(eaf) => format!("{eaf:.2}"),
            None => "not applicable".to_string(),
        }
    }
}
