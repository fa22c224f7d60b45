//! COCOMO - software effort estimation CLI
//!
//! The `cocomo` command runs basic and intermediate COCOMO estimates.
//!
//! ## Commands
//!
//! - `basic`: size-only estimate for a project class
//! - `intermediate`: estimate adjusted by cost-driver ratings
//! - `run`: execute an estimate request file (JSON or TOML)
//! - `drivers`: list the cost-driver catalog
//! - `coefficients`: list the coefficient table

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use std::path::{Path, PathBuf};
use tracing::{debug, Level};

use cocomo_core::{
    coefficient_table, cost_drivers, parse_project_class, render_estimate_md, write_estimate_json,
    BasicEstimator, DriverSelections, DriverValue, EstimateReport, EstimateRequest,
    EstimatorVariant, IntermediateEstimator, ProjectClass, RatingLevel, Settings,
};

#[derive(Parser)]
#[command(name = "cocomo")]
#[command(author = "Stevedores Org")]
#[command(version = env!("CARGO_PKG_VERSION"))]
#[command(about = "COCOMO software effort and schedule estimation", long_about = None)]
struct Cli {
    /// Enable verbose output
    #[arg(short, long, global = true)]
    verbose: bool,

    /// Emit JSON-formatted log lines (overrides COCOMO_LOG_FORMAT)
    #[arg(long, global = true)]
    log_json: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Basic estimate from size and project class
    Basic {
        /// Project class: Organic, SemiDetached or Embedded (default: COCOMO_PROJECT_CLASS)
        #[arg(short, long)]
        class: Option<String>,

        /// Size in thousands of lines of code
        #[arg(short, long, value_parser = parse_size)]
        size: f64,

        /// Print the full report as JSON
        #[arg(long)]
        json: bool,
    },

    /// Intermediate estimate adjusted by cost-driver ratings
    Intermediate {
        /// Project class: Organic, SemiDetached or Embedded (default: COCOMO_PROJECT_CLASS)
        #[arg(short, long)]
        class: Option<String>,

        /// Size in thousands of lines of code
        #[arg(short, long, value_parser = parse_size)]
        size: f64,

        /// Driver rating as CODE=LEVEL or CODE=MULTIPLIER (repeatable), e.g. RELY=high
        #[arg(short, long = "driver", value_parser = parse_driver)]
        drivers: Vec<(String, DriverValue)>,

        /// Print the full report as JSON
        #[arg(long)]
        json: bool,
    },

    /// Execute an estimate request file
    Run {
        /// Request file (.json or .toml)
        #[arg(short, long)]
        request: PathBuf,

        /// Write the JSON report to this path
        #[arg(short, long)]
        output: Option<PathBuf>,

        /// Print a markdown summary instead of plain text
        #[arg(long)]
        markdown: bool,
    },

    /// List the cost-driver catalog
    Drivers {
        /// Print the catalog as JSON (undefined levels are null)
        #[arg(long)]
        json: bool,
    },

    /// List the coefficient table
    Coefficients {
        /// Print the table as JSON
        #[arg(long)]
        json: bool,
    },
}

fn parse_size(s: &str) -> std::result::Result<f64, String> {
    let size: f64 = s.parse().map_err(|_| format!("not a number: {s}"))?;
    if !size.is_finite() || size <= 0.0 {
        return Err(format!("size must be a positive KLOC value, got {s}"));
    }
    Ok(size)
}

fn parse_driver(s: &str) -> std::result::Result<(String, DriverValue), String> {
    let (code, value) = s
        .split_once('=')
        .ok_or_else(|| format!("expected CODE=VALUE, got {s}"))?;
    let code = code.trim().to_ascii_uppercase();
    let value = value.trim();
    let value = match value.parse::<f64>() {
        Ok(m) if m.is_finite() && m > 0.0 => DriverValue::Multiplier(m),
        Ok(_) => return Err(format!("driver multiplier must be positive, got {value}")),
        Err(_) => DriverValue::Level(value.to_ascii_lowercase()),
    };
    Ok((code, value))
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    let settings = Settings::from_env().context("Invalid COCOMO environment settings")?;

    // Setup logging
    let level = if cli.verbose {
        Level::DEBUG
    } else {
        Level::WARN
    };
    cocomo_core::init_tracing(settings.log_format_with_override(cli.log_json), level);

    match cli.command {
        Commands::Basic { class, size, json } => {
            let class = resolve_class(class.as_deref(), &settings)?;
            cmd_basic(class, size, json)
        }
        Commands::Intermediate {
            class,
            size,
            drivers,
            json,
        } => {
            let class = resolve_class(class.as_deref(), &settings)?;
            cmd_intermediate(class, size, &drivers, json)
        }
        Commands::Run {
            request,
            output,
            markdown,
        } => cmd_run(&request, output.as_deref(), markdown),
        Commands::Drivers { json } => cmd_drivers(json),
        Commands::Coefficients { json } => cmd_coefficients(json),
    }
}

fn resolve_class(name: Option<&str>, settings: &Settings) -> Result<ProjectClass> {
    match name {
        Some(name) => Ok(parse_project_class(name)?),
        None => {
            debug!(class = %settings.default_project_class, "using default project class");
            Ok(settings.default_project_class)
        }
    }
}

fn cmd_basic(class: ProjectClass, size: f64, json: bool) -> Result<()> {
    let result = BasicEstimator::new(class)?.estimate(size);
    let report = EstimateReport::new(
        EstimatorVariant::Basic,
        class,
        size,
        &DriverSelections::none(),
        result,
    );
    print_report(&report, json)
}

fn cmd_intermediate(
    class: ProjectClass,
    size: f64,
    drivers: &[(String, DriverValue)],
    json: bool,
) -> Result<()> {
    let selections = build_selections(drivers)?;
    let result = IntermediateEstimator::new(class)?.estimate(size, &selections);
    let report = EstimateReport::new(
        EstimatorVariant::Intermediate,
        class,
        size,
        &selections,
        result,
    );
    print_report(&report, json)
}

fn build_selections(drivers: &[(String, DriverValue)]) -> Result<DriverSelections> {
    let mut selections = DriverSelections::none();
    for (code, value) in drivers {
        value
            .apply(code, &mut selections)
            .with_context(|| format!("Invalid cost driver {code}"))?;
    }
    Ok(selections)
}

fn cmd_run(request: &Path, output: Option<&Path>, markdown: bool) -> Result<()> {
    let req = EstimateRequest::from_path(request)
        .with_context(|| format!("Failed to load request {}", request.display()))?;
    let report = req.execute().context("Estimate request rejected")?;

    if let Some(path) = output {
        write_estimate_json(path, &report)?;
        println!("Report written to {}", path.display());
    }

    if markdown {
        print!("{}", render_estimate_md(&report));
        Ok(())
    } else {
        print_report(&report, false)
    }
}

fn print_report(report: &EstimateReport, json: bool) -> Result<()> {
    if json {
        println!(
            "{}",
            serde_json::to_string_pretty(report).context("serialize report")?
        );
        return Ok(());
    }

    let r = &report.result;
    println!(
        "COCOMO {} estimate ({}, {} KLOC)",
        report.model, report.project_class, report.size_kloc
    );
    println!("  Effort:           {:>10.2} person-months", r.person_months);
    println!("  Schedule:         {:>10.2} months", r.time_in_months);
    println!("  Staff size:       {:>10.2}", r.staff_size);
    println!("  Productivity:     {:>10.2} KLOC/person-month", r.productivity);
    println!("  Adjustment (EAF): {:>10}", r.effort_adjustment_label());
    for d in &report.drivers {
        println!("    {} = {:.2}", d.code, d.multiplier);
    }
    Ok(())
}

fn cmd_drivers(json: bool) -> Result<()> {
    if json {
        println!("{}", drivers_json()?);
        return Ok(());
    }

    println!(
        "{:<5} {:<46} {:>6} {:>6} {:>6} {:>6} {:>6} {:>6}",
        "CODE", "DESCRIPTION", "VL", "L", "N", "H", "VH", "XH"
    );
    for d in cost_drivers() {
        let cells: Vec<String> = RatingLevel::ALL
            .into_iter()
            .map(|level| match d.multiplier(level) {
                Some(m) => format!("{m:>6.2}"),
                None => format!("{:>6}", "-"),
            })
            .collect();
        println!("{:<5} {:<46} {}", d.code, d.description, cells.join(" "));
    }
    Ok(())
}

fn drivers_json() -> Result<String> {
    serde_json::to_string_pretty(cost_drivers()).context("serialize cost-driver catalog")
}

fn cmd_coefficients(json: bool) -> Result<()> {
    if json {
        println!("{}", coefficients_json()?);
        return Ok(());
    }

    println!(
        "{:<13} {:<13} {:>5} {:>5} {:>5} {:>5}",
        "VARIANT", "CLASS", "a", "b", "c", "d"
    );
    for e in coefficient_table() {
        let c = &e.coefficients;
        println!(
            "{:<13} {:<13} {:>5.2} {:>5.2} {:>5.2} {:>5.2}",
            e.variant.as_str(),
            e.class.as_str(),
            c.a,
            c.b,
            c.c,
            c.d
        );
    }
    Ok(())
}

fn coefficients_json() -> Result<String> {
    serde_json::to_string_pretty(coefficient_table()).context("serialize coefficient table")
}
