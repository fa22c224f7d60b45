use anyhow::{Context, Result};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::path::Path;

use crate::domain::{DriverSelections, EstimationResult, EstimatorVariant, ProjectClass};

pub const REPORT_SCHEMA_VERSION: &str = "1.0";

/// A selected cost driver as recorded in the report.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct DriverEntry {
    pub code: String,
    pub multiplier: f64,
}

/// Canonical estimate artifact written for the CLI and downstream tooling.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct EstimateReport {
    pub schema_version: String,
    pub generated_at: DateTime<Utc>,
    pub model: EstimatorVariant,
    pub project_class: ProjectClass,
    pub size_kloc: f64,
    pub drivers: Vec<DriverEntry>,
    pub result: EstimationResult,
}

impl EstimateReport {
    pub fn new(
        model: EstimatorVariant,
        project_class: ProjectClass,
        size_kloc: f64,
        selections: &DriverSelections,
        result: EstimationResult,
    ) -> Self {
        Self {
            schema_version: REPORT_SCHEMA_VERSION.to_string(),
            generated_at: Utc::now(),
            model,
            project_class,
            size_kloc,
            drivers: selections
                .selected()
                .map(|(driver, multiplier)| DriverEntry {
                    code: driver.code.to_string(),
                    multiplier,
                })
                .collect(),
            result,
        }
    }
}

/// Write estimate.json in pretty JSON format.
pub fn write_estimate_json(path: &Path, report: &EstimateReport) -> Result<()> {
    let content = serde_json::to_string_pretty(report).context("serialize estimate report")?;
    std::fs::write(path, content).with_context(|| format!("write {:?}", path))?;
    Ok(())
}

/// Read a previously written estimate.json.
pub fn read_estimate_json(path: &Path) -> Result<EstimateReport> {
    let content = std::fs::read_to_string(path).with_context(|| format!("read {:?}", path))?;
    serde_json::from_str(&content).with_context(|| format!("parse {:?}", path))
}

/// Render a markdown summary of one estimate.
pub fn render_estimate_md(report: &EstimateReport) -> String {
    let r = &report.result;
    let mut out = String::new();
    out.push_str("# COCOMO Estimate\n\n");
    out.push_str(&format!(
        "- model: {}\n- project class: {}\n- size: {} KLOC\n\n",
        report.model, report.project_class, report.size_kloc
    ));

    out.push_str("## Result\n");
    out.push_str(&format!(
        "- effort: {:.2} person-months\n- schedule: {:.2} months\n- staff size: {:.2}\n- productivity: {:.2} KLOC/person-month\n- effort adjustment factor: {}\n",
        r.person_months,
        r.time_in_months,
        r.staff_size,
        r.productivity,
        r.effort_adjustment_label()
    ));

    if !report.drivers.is_empty() {
        out.push_str("\n## Cost Drivers\n");
        for d in &report.drivers {
            out.push_str(&format!("- `{}`: {:.2}\n", d.code, d.multiplier));
        }
    }
    out
}

/// Write estimate.md.
pub fn write_estimate_md(path: &Path, report: &EstimateReport) -> Result<()> {
    std::fs::write(path, render_estimate_md(report)).with_context(|| format!("write {:?}", path))?;
    Ok(())
}
