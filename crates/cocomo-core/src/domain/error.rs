//! Domain-level error taxonomy for COCOMO estimation.

use super::coefficients::EstimatorVariant;
use super::cost_driver::RatingLevel;
use super::project_class::ProjectClass;

/// COCOMO domain errors.
#[derive(Debug, thiserror::Error)]
pub enum EstimationError {
    #[error("unknown project class: {0:?} (expected Organic, SemiDetached or Embedded)")]
    UnknownProjectClass(String),

    #[error("no {variant} coefficients defined for project class {class}")]
    MissingCoefficients {
        variant: EstimatorVariant,
        class: ProjectClass,
    },

    #[error("unknown cost driver: {0}")]
    UnknownCostDriver(String),

    #[error("rating level {level} is not applicable for cost driver {code}")]
    RatingNotApplicable { code: String, level: RatingLevel },

    #[error("driver multiplier must be a positive, finite value, got {0}")]
    InvalidMultiplier(f64),

    #[error("unknown rating level: {0}")]
    UnknownRatingLevel(String),

    #[error("size must be a positive, finite KLOC value, got {0}")]
    InvalidSize(f64),

    #[error("unsupported request format: {0}")]
    UnsupportedFormat(String),

    #[error("json error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("toml error: {0}")]
    Toml(#[from] toml::de::Error),

    #[error("io error: {0}")]
    Io(#[from] std::io::Error),
}

/// Result type for COCOMO domain operations.
pub type Result<T> = std::result::Result<T, EstimationError>;
