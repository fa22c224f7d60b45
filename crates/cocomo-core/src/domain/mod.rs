//! Domain models for COCOMO estimation.
//!
//! Canonical definitions for the core entities:
//! - `ProjectClass`: Organic, SemiDetached or Embedded
//! - `EstimationCoefficients`: the static (variant, class) regression table
//! - `CostDriver`: the fifteen-entry rating catalog and driver selections
//! - `EstimationResult`: rounded effort/schedule/staffing output

pub mod coefficients;
pub mod cost_driver;
pub mod error;
pub mod project_class;
pub mod result;

// Re-export main types and errors
pub use coefficients::{
    coefficient_table, coefficients_for, CoefficientEntry, EstimationCoefficients,
    EstimatorVariant,
};
pub use cost_driver::{
    cost_driver, cost_drivers, CostDriver, DriverSelections, RatingLevel, RatingScale,
    COST_DRIVER_COUNT,
};
pub use error::{EstimationError, Result};
pub use project_class::{parse_project_class, ProjectClass};
pub use result::{round2, EstimationResult};
