//! Structured observability hooks for estimation events.
//!
//! Events carry an `event` field so JSON log lines can be filtered by kind.
//! Verbosity follows `RUST_LOG` (see [`crate::telemetry::init_tracing`]).

use tracing::{debug, info, warn};

use crate::domain::{EstimationResult, EstimatorVariant, ProjectClass};

/// Emit event: an estimate was computed.
pub fn emit_estimate_computed(
    variant: EstimatorVariant,
    class: ProjectClass,
    size_kloc: f64,
    result: &EstimationResult,
) {
    info!(
        event = "estimate.computed",
        variant = %variant,
        class = %class,
        size_kloc = size_kloc,
        person_months = result.person_months,
        time_in_months = result.time_in_months,
        eaf = ?result.effort_adjustment_factor,
    );
}

/// Emit event: an estimate request was loaded from disk.
pub fn emit_request_loaded(path: &std::path::Path, variant: EstimatorVariant) {
    debug!(event = "request.loaded", path = %path.display(), variant = %variant);
}

/// Emit event: driver selections were supplied to the basic model and dropped.
pub fn emit_drivers_ignored(count: usize) {
    warn!(
        event = "request.drivers_ignored",
        count = count,
        "basic model does not use cost drivers"
    );
}
