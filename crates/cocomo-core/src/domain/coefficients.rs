//! Regression coefficient tables for the basic and intermediate models.

use std::fmt;

use serde::{Deserialize, Serialize};

use super::error::{EstimationError, Result};
use super::project_class::ProjectClass;

/// Which estimator a coefficient set was calibrated for.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum EstimatorVariant {
    Basic,
    Intermediate,
}

impl EstimatorVariant {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Basic => "basic",
            Self::Intermediate => "intermediate",
        }
    }
}

impl fmt::Display for EstimatorVariant {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Coefficients of the effort (`a * size^b`) and schedule (`c * effort^d`) curves.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct EstimationCoefficients {
    pub a: f64,
    pub b: f64,
    pub c: f64,
    pub d: f64,
}

impl EstimationCoefficients {
    const fn new(a: f64, b: f64, c: f64, d: f64) -> Self {
        Self { a, b, c, d }
    }
}

/// One row of the coefficient table.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct CoefficientEntry {
    pub variant: EstimatorVariant,
    pub class: ProjectClass,
    pub coefficients: EstimationCoefficients,
}

const fn entry(
    variant: EstimatorVariant,
    class: ProjectClass,
    coefficients: EstimationCoefficients,
) -> CoefficientEntry {
    CoefficientEntry {
        variant,
        class,
        coefficients,
    }
}

// The intermediate `a` values descend from Organic to Embedded, the opposite of
// the basic table. Both orderings are the calibrated values.
static COEFFICIENT_TABLE: [CoefficientEntry; 6] = [
    entry(
        EstimatorVariant::Basic,
        ProjectClass::Organic,
        EstimationCoefficients::new(2.4, 1.05, 2.5, 0.38),
    ),
    entry(
        EstimatorVariant::Basic,
        ProjectClass::SemiDetached,
        EstimationCoefficients::new(3.0, 1.12, 2.5, 0.35),
    ),
    entry(
        EstimatorVariant::Basic,
        ProjectClass::Embedded,
        EstimationCoefficients::new(3.6, 1.20, 2.5, 0.32),
    ),
    entry(
        EstimatorVariant::Intermediate,
        ProjectClass::Organic,
        EstimationCoefficients::new(3.2, 1.05, 2.5, 0.38),
    ),
    entry(
        EstimatorVariant::Intermediate,
        ProjectClass::SemiDetached,
        EstimationCoefficients::new(3.0, 1.12, 2.5, 0.35),
    ),
    entry(
        EstimatorVariant::Intermediate,
        ProjectClass::Embedded,
        EstimationCoefficients::new(2.8, 1.20, 2.5, 0.32),
    ),
];

/// The full coefficient table, basic rows first.
pub fn coefficient_table() -> &'static [CoefficientEntry] {
    &COEFFICIENT_TABLE
}

/// Look up the coefficients for a (variant, class) pair.
pub fn coefficients_for(
    variant: EstimatorVariant,
    class: ProjectClass,
) -> Result<EstimationCoefficients> {
    COEFFICIENT_TABLE
        .iter()
        .find(|e| e.variant == variant && e.class == class)
        .map(|e| e.coefficients)
        .ok_or(EstimationError::MissingCoefficients { variant, class })
}
