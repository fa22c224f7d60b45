//! File-based estimate requests.
//!
//! A request names the model, project class, size and optional driver
//! ratings, and can be written as JSON or TOML:
//!
//! ```toml
//! model = "intermediate"
//! project_class = "Embedded"
//! size_kloc = 50.0
//!
//! [drivers]
//! RELY = "very_high"
//! PCAP = 0.70
//! ```
//!
//! This is the validation boundary in front of the estimators: size is
//! checked here, class names are parsed, and driver codes and levels are
//! resolved against the catalog.

use std::collections::BTreeMap;
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::domain::{
    parse_project_class, DriverSelections, EstimationError, EstimatorVariant, RatingLevel, Result,
};
use crate::estimator::{BasicEstimator, IntermediateEstimator};
use crate::obs::{emit_drivers_ignored, emit_request_loaded};
use crate::reporting::EstimateReport;

/// A driver rating given either as a level name or a raw multiplier.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum DriverValue {
    Multiplier(f64),
    Level(String),
}

impl DriverValue {
    /// Record this rating for `code` in `selections`.
    ///
    /// Raw multipliers need not be on the driver's scale, but must be
    /// positive and finite.
    pub fn apply(&self, code: &str, selections: &mut DriverSelections) -> Result<()> {
        match self {
            Self::Multiplier(m) if !m.is_finite() || *m <= 0.0 => {
                Err(EstimationError::InvalidMultiplier(*m))
            }
            Self::Multiplier(m) => selections.select(code, *m),
            Self::Level(name) => selections.select_level(code, name.parse::<RatingLevel>()?),
        }
    }
}

/// One estimate to run.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EstimateRequest {
    #[serde(default = "default_model")]
    pub model: EstimatorVariant,
    pub project_class: String,
    pub size_kloc: f64,
    #[serde(default)]
    pub drivers: BTreeMap<String, DriverValue>,
}

fn default_model() -> EstimatorVariant {
    EstimatorVariant::Basic
}

impl EstimateRequest {
    /// Load a request from a `.json` or `.toml` file (extension case is ignored).
    pub fn from_path(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path)?;
        let ext = path.extension().and_then(|e| e.to_str()).unwrap_or("");
        let request: Self = if ext.eq_ignore_ascii_case("json") {
            serde_json::from_str(&content)?
        } else if ext.eq_ignore_ascii_case("toml") {
            toml::from_str(&content)?
        } else if ext.is_empty() {
            return Err(EstimationError::UnsupportedFormat("<none>".to_string()));
        } else {
            return Err(EstimationError::UnsupportedFormat(ext.to_string()));
        };
        emit_request_loaded(path, request.model);
        Ok(request)
    }

    /// Resolve driver entries into catalog-ordered selections.
    pub fn driver_selections(&self) -> Result<DriverSelections> {
        let mut selections = DriverSelections::none();
        for (code, value) in &self.drivers {
            value.apply(code, &mut selections)?;
        }
        Ok(selections)
    }

    /// Validate the request and run the matching estimator.
    pub fn execute(&self) -> Result<EstimateReport> {
        let class = parse_project_class(&self.project_class)?;
        if !self.size_kloc.is_finite() || self.size_kloc <= 0.0 {
            return Err(EstimationError::InvalidSize(self.size_kloc));
        }

        match self.model {
            EstimatorVariant::Basic => {
                if !self.drivers.is_empty() {
                    emit_drivers_ignored(self.drivers.len());
                }
                let result = BasicEstimator::new(class)?.estimate(self.size_kloc);
                Ok(EstimateReport::new(
                    self.model,
                    class,
                    self.size_kloc,
                    &DriverSelections::none(),
                    result,
                ))
            }
            EstimatorVariant::Intermediate => {
                let selections = self.driver_selections()?;
                let result =
                    IntermediateEstimator::new(class)?.estimate(self.size_kloc, &selections);
                Ok(EstimateReport::new(
                    self.model,
                    class,
                    self.size_kloc,
                    &selections,
                    result,
                ))
            }
        }
    }
}
