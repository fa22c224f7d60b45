//! Cost-driver catalog and driver selections for the intermediate model.
//!
//! The catalog is a fixed, ordered list of fifteen drivers. Each driver rates
//! a project attribute on a six-level scale; a level maps to an effort
//! multiplier, or to `None` when that level is not defined for the driver.
//!
//! A [`DriverSelections`] holds at most one multiplier per catalog driver.
//! Unselected drivers contribute the multiplicative identity to the Effort
//! Adjustment Factor.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use super::error::{EstimationError, Result};

/// Qualitative rating level, lowest to highest.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RatingLevel {
    VeryLow,
    Low,
    Nominal,
    High,
    VeryHigh,
    ExtraHigh,
}

impl RatingLevel {
    pub const ALL: [RatingLevel; 6] = [
        Self::VeryLow,
        Self::Low,
        Self::Nominal,
        Self::High,
        Self::VeryHigh,
        Self::ExtraHigh,
    ];

    pub fn as_str(self) -> &'static str {
        match self {
            Self::VeryLow => "very_low",
            Self::Low => "low",
            Self::Nominal => "nominal",
            Self::High => "high",
            Self::VeryHigh => "very_high",
            Self::ExtraHigh => "extra_high",
        }
    }

    fn index(self) -> usize {
        self as usize
    }
}

impl fmt::Display for RatingLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for RatingLevel {
    type Err = EstimationError;

    fn from_str(s: &str) -> Result<Self> {
        Self::ALL
            .into_iter()
            .find(|level| level.as_str() == s)
            .ok_or_else(|| EstimationError::UnknownRatingLevel(s.to_string()))
    }
}

/// Multipliers indexed by [`RatingLevel`].
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct RatingScale([Option<f64>; 6]);

impl RatingScale {
    pub fn multiplier(&self, level: RatingLevel) -> Option<f64> {
        self.0[level.index()]
    }

    /// Defined levels with their multipliers, lowest first.
    pub fn defined(&self) -> impl Iterator<Item = (RatingLevel, f64)> + '_ {
        RatingLevel::ALL
            .into_iter()
            .filter_map(|level| self.multiplier(level).map(|m| (level, m)))
    }
}

/// A named cost-influence factor.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct CostDriver {
    /// Unique short code, e.g. `RELY`.
    pub code: &'static str,
    pub description: &'static str,
    pub scale: RatingScale,
}

impl CostDriver {
    pub fn multiplier(&self, level: RatingLevel) -> Option<f64> {
        self.scale.multiplier(level)
    }
}

pub const COST_DRIVER_COUNT: usize = 15;

const NA: Option<f64> = None;

const fn driver(
    code: &'static str,
    description: &'static str,
    scale: [Option<f64>; 6],
) -> CostDriver {
    CostDriver {
        code,
        description,
        scale: RatingScale(scale),
    }
}

#[rustfmt::skip]
static COST_DRIVERS: [CostDriver; COST_DRIVER_COUNT] = [
    // Product attributes
    driver("RELY", "Required software reliability",
        [Some(0.75), Some(0.88), Some(1.00), Some(1.15), Some(1.40), NA]),
    driver("DATA", "Size of application database",
        [NA, Some(0.94), Some(1.00), Some(1.08), Some(1.16), NA]),
    driver("CPLX", "Complexity of the product",
        [Some(0.70), Some(0.85), Some(1.00), Some(1.15), Some(1.30), Some(1.65)]),
    // Hardware attributes
    driver("TIME", "Run-time performance constraints",
        [NA, NA, Some(1.00), Some(1.11), Some(1.30), Some(1.66)]),
    driver("STOR", "Memory constraints",
        [NA, NA, Some(1.00), Some(1.06), Some(1.21), Some(1.56)]),
    driver("VIRT", "Volatility of the virtual machine environment",
        [NA, Some(0.87), Some(1.00), Some(1.15), Some(1.30), NA]),
    driver("TURN", "Required turnabout time",
        [NA, Some(0.87), Some(1.00), Some(1.07), Some(1.15), NA]),
    // Personnel attributes
    driver("ACAP", "Analyst capability",
        [Some(1.46), Some(1.19), Some(1.00), Some(0.86), Some(0.71), NA]),
    driver("AEXP", "Applications experience",
        [Some(1.29), Some(1.13), Some(1.00), Some(0.91), Some(0.82), NA]),
    driver("PCAP", "Software engineer capability",
        [Some(1.42), Some(1.17), Some(1.00), Some(0.86), Some(0.70), NA]),
    driver("VEXP", "Virtual machine experience",
        [Some(1.21), Some(1.10), Some(1.00), Some(0.90), NA, NA]),
    driver("LEXP", "Programming language experience",
        [Some(1.14), Some(1.07), Some(1.00), Some(0.95), NA, NA]),
    // Project attributes
    driver("MODP", "Application of software engineering methods",
        [Some(1.24), Some(1.10), Some(1.00), Some(0.91), Some(0.82), NA]),
    driver("TOOL", "Use of software tools",
        [Some(1.24), Some(1.10), Some(1.00), Some(0.91), Some(0.83), NA]),
    driver("SCED", "Required development schedule",
        [Some(1.23), Some(1.08), Some(1.00), Some(1.04), Some(1.10), NA]),
];

/// The cost-driver catalog in canonical order.
pub fn cost_drivers() -> &'static [CostDriver] {
    &COST_DRIVERS
}

/// Find a driver by its exact code.
pub fn cost_driver(code: &str) -> Option<&'static CostDriver> {
    COST_DRIVERS.iter().find(|d| d.code == code)
}

fn driver_index(code: &str) -> Result<usize> {
    COST_DRIVERS
        .iter()
        .position(|d| d.code == code)
        .ok_or_else(|| EstimationError::UnknownCostDriver(code.to_string()))
}

/// Chosen multiplier per catalog driver, in catalog order.
///
/// Selected values are not checked against the driver's rating scale; any
/// multiplier is taken as given.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct DriverSelections([Option<f64>; COST_DRIVER_COUNT]);

impl DriverSelections {
    /// No driver selected; the adjustment factor is exactly 1.
    pub fn none() -> Self {
        Self::default()
    }

    /// Build from positional values in catalog order. Values past the
    /// fifteenth are ignored, missing trailing values stay unselected.
    pub fn from_multipliers<I>(values: I) -> Self
    where
        I: IntoIterator<Item = Option<f64>>,
    {
        let mut selections = Self::none();
        for (slot, value) in selections.0.iter_mut().zip(values) {
            *slot = value;
        }
        selections
    }

    /// Select a raw multiplier for `code`.
    pub fn select(&mut self, code: &str, multiplier: f64) -> Result<()> {
        let idx = driver_index(code)?;
        self.0[idx] = Some(multiplier);
        Ok(())
    }

    /// Select the catalog multiplier of `level` for `code`.
    pub fn select_level(&mut self, code: &str, level: RatingLevel) -> Result<()> {
        let idx = driver_index(code)?;
        let multiplier = COST_DRIVERS[idx].multiplier(level).ok_or_else(|| {
            EstimationError::RatingNotApplicable {
                code: code.to_string(),
                level,
            }
        })?;
        self.0[idx] = Some(multiplier);
        Ok(())
    }

    /// Clear the selection for `code`.
    pub fn clear(&mut self, code: &str) -> Result<()> {
        let idx = driver_index(code)?;
        self.0[idx] = None;
        Ok(())
    }

    pub fn get(&self, code: &str) -> Option<f64> {
        driver_index(code).ok().and_then(|idx| self.0[idx])
    }

    /// Every catalog driver paired with its selection.
    pub fn iter(&self) -> impl Iterator<Item = (&'static CostDriver, Option<f64>)> + '_ {
        COST_DRIVERS.iter().zip(self.0.iter().copied())
    }

    /// Only the drivers that carry a selection.
    pub fn selected(&self) -> impl Iterator<Item = (&'static CostDriver, f64)> + '_ {
        self.iter().filter_map(|(d, m)| m.map(|m| (d, m)))
    }

    pub fn is_empty(&self) -> bool {
        self.0.iter().all(Option::is_none)
    }

    /// Unrounded product of the selected multipliers.
    pub fn effort_adjustment_factor(&self) -> f64 {
        self.0.iter().flatten().product()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_catalog_order_and_size() {
        let codes: Vec<_> = cost_drivers().iter().map(|d| d.code).collect();
        assert_eq!(
            codes,
            vec![
                "RELY", "DATA", "CPLX", "TIME", "STOR", "VIRT", "TURN", "ACAP", "AEXP", "PCAP",
                "VEXP", "LEXP", "MODP", "TOOL", "SCED"
            ]
        );
    }

    #[test]
    fn test_every_driver_is_nominal_one() {
        for d in cost_drivers() {
            assert_eq!(d.multiplier(RatingLevel::Nominal), Some(1.0), "{}", d.code);
        }
    }

    #[test]
    fn test_not_applicable_levels() {
        let time = cost_driver("TIME").unwrap();
        assert_eq!(time.multiplier(RatingLevel::VeryLow), None);
        assert_eq!(time.multiplier(RatingLevel::Low), None);
        assert_eq!(time.multiplier(RatingLevel::ExtraHigh), Some(1.66));

        let lexp = cost_driver("LEXP").unwrap();
        assert_eq!(lexp.scale.defined().count(), 4);
    }

    #[test]
    fn test_cost_driver_lookup_is_exact() {
        assert!(cost_driver("RELY").is_some());
        assert!(cost_driver("rely").is_none());
    }

    #[test]
    fn test_rating_level_from_str() {
        assert_eq!("very_high".parse::<RatingLevel>().unwrap(), RatingLevel::VeryHigh);
        assert!(matches!(
            "VeryHigh".parse::<RatingLevel>(),
            Err(EstimationError::UnknownRatingLevel(_))
        ));
    }

    #[test]
    fn test_empty_selection_is_identity() {
        let s = DriverSelections::none();
        assert!(s.is_empty());
        assert_eq!(s.effort_adjustment_factor(), 1.0);
    }

    #[test]
    fn test_select_level_resolves_catalog_value() {
        let mut s = DriverSelections::none();
        s.select_level("CPLX", RatingLevel::ExtraHigh).unwrap();
        assert_eq!(s.get("CPLX"), Some(1.65));
        assert_eq!(s.effort_adjustment_factor(), 1.65);
    }

    #[test]
    fn test_select_level_rejects_undefined_level() {
        let mut s = DriverSelections::none();
        let err = s.select_level("DATA", RatingLevel::VeryLow).unwrap_err();
        assert!(matches!(err, EstimationError::RatingNotApplicable { .. }));
        assert!(s.is_empty());
    }

    #[test]
    fn test_select_unknown_code() {
        let mut s = DriverSelections::none();
        assert!(matches!(
            s.select("XXXX", 1.2),
            Err(EstimationError::UnknownCostDriver(_))
        ));
    }

    #[test]
    fn test_select_accepts_off_scale_multiplier() {
        let mut s = DriverSelections::none();
        s.select("RELY", 2.0).unwrap();
        s.select("ACAP", 0.5).unwrap();
        assert_eq!(s.effort_adjustment_factor(), 1.0);
        s.clear("ACAP").unwrap();
        assert_eq!(s.effort_adjustment_factor(), 2.0);
    }

    #[test]
    fn test_from_multipliers_is_positional() {
        let s = DriverSelections::from_multipliers([Some(1.15), None, Some(1.30)]);
        assert_eq!(s.get("RELY"), Some(1.15));
        assert_eq!(s.get("DATA"), None);
        assert_eq!(s.get("CPLX"), Some(1.30));
        assert_eq!(s.selected().count(), 2);

        let overflow = DriverSelections::from_multipliers(vec![Some(1.0); 20]);
        assert_eq!(overflow.selected().count(), COST_DRIVER_COUNT);
    }
}
