//! COCOMO Core Library
//!
//! Basic and intermediate COCOMO estimators over static coefficient and
//! cost-driver tables, plus request loading and report rendering.

pub mod domain;
pub mod estimator;
pub mod obs;
pub mod reporting;
pub mod request;
pub mod settings;
pub mod telemetry;

pub use domain::{
    coefficient_table, coefficients_for, cost_driver, cost_drivers, parse_project_class, round2,
    CoefficientEntry, CostDriver, DriverSelections, EstimationCoefficients, EstimationError,
    EstimationResult, EstimatorVariant, ProjectClass, RatingLevel, RatingScale, Result,
    COST_DRIVER_COUNT,
};

pub use estimator::{apply_model, BasicEstimator, IntermediateEstimator, ModelOutput};
pub use reporting::{
    read_estimate_json, render_estimate_md, write_estimate_json, write_estimate_md, DriverEntry,
    EstimateReport, REPORT_SCHEMA_VERSION,
};
pub use request::{DriverValue, EstimateRequest};
pub use settings::{LogFormat, Settings};
pub use telemetry::init_tracing;

/// COCOMO version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
