//! Basic and intermediate COCOMO estimators.
//!
//! Both estimators resolve their coefficients once at construction and share
//! [`apply_model`] for the effort/schedule/staffing/productivity formulas.
//! Neither re-validates `size`; callers pass a finite KLOC value above zero.

use crate::domain::{
    coefficients_for, round2, DriverSelections, EstimationCoefficients, EstimationResult,
    EstimatorVariant, ProjectClass, Result,
};
use crate::obs::emit_estimate_computed;

/// Unrounded model output.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ModelOutput {
    pub effort: f64,
    pub schedule: f64,
    pub staff_size: f64,
    pub productivity: f64,
}

impl ModelOutput {
    fn rounded(&self, effort_adjustment_factor: Option<f64>) -> EstimationResult {
        EstimationResult {
            person_months: round2(self.effort),
            time_in_months: round2(self.schedule),
            staff_size: round2(self.staff_size),
            productivity: round2(self.productivity),
            effort_adjustment_factor: effort_adjustment_factor.map(round2),
        }
    }
}

/// Effort `a * size^b * eaf`, schedule `c * effort^d`, and the two ratios.
pub fn apply_model(coefficients: &EstimationCoefficients, size: f64, eaf: f64) -> ModelOutput {
    let effort = coefficients.a * size.powf(coefficients.b) * eaf;
    let schedule = coefficients.c * effort.powf(coefficients.d);
    ModelOutput {
        effort,
        schedule,
        staff_size: effort / schedule,
        productivity: size / effort,
    }
}

/// Size-only estimator using the basic coefficient table.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct BasicEstimator {
    class: ProjectClass,
    coefficients: EstimationCoefficients,
}

impl BasicEstimator {
    pub fn new(class: ProjectClass) -> Result<Self> {
        Ok(Self {
            class,
            coefficients: coefficients_for(EstimatorVariant::Basic, class)?,
        })
    }

    pub fn class(&self) -> ProjectClass {
        self.class
    }

    pub fn coefficients(&self) -> &EstimationCoefficients {
        &self.coefficients
    }

    pub fn estimate(&self, size: f64) -> EstimationResult {
        let output = apply_model(&self.coefficients, size, 1.0);
        let result = output.rounded(None);
        emit_estimate_computed(EstimatorVariant::Basic, self.class, size, &result);
        result
    }
}

/// Cost-driver adjusted estimator using the intermediate coefficient table.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct IntermediateEstimator {
    class: ProjectClass,
    coefficients: EstimationCoefficients,
}

impl IntermediateEstimator {
    pub fn new(class: ProjectClass) -> Result<Self> {
        Ok(Self {
            class,
            coefficients: coefficients_for(EstimatorVariant::Intermediate, class)?,
        })
    }

    pub fn class(&self) -> ProjectClass {
        self.class
    }

    pub fn coefficients(&self) -> &EstimationCoefficients {
        &self.coefficients
    }

    pub fn estimate(&self, size: f64, selections: &DriverSelections) -> EstimationResult {
        let eaf = selections.effort_adjustment_factor();
        let output = apply_model(&self.coefficients, size, eaf);
        let result = output.rounded(Some(eaf));
        emit_estimate_computed(EstimatorVariant::Intermediate, self.class, size, &result);
        result
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_apply_model_identity_eaf() {
        let c = EstimationCoefficients {
            a: 2.0,
            b: 1.0,
            c: 1.0,
            d: 1.0,
        };
        let out = apply_model(&c, 5.0, 1.0);
        assert_eq!(out.effort, 10.0);
        assert_eq!(out.schedule, 10.0);
        assert_eq!(out.staff_size, 1.0);
        assert_eq!(out.productivity, 0.5);
    }

    #[test]
    fn test_apply_model_scales_effort_by_eaf() {
        let c = EstimationCoefficients {
            a: 2.0,
            b: 1.0,
            c: 1.0,
            d: 1.0,
        };
        let out = apply_model(&c, 5.0, 1.5);
        assert_eq!(out.effort, 15.0);
    }

    #[test]
    fn test_basic_organic_ten_kloc() {
        let r = BasicEstimator::new(ProjectClass::Organic)
            .unwrap()
            .estimate(10.0);
        assert_eq!(r.person_months, 26.93);
        assert_eq!(r.time_in_months, 8.74);
        assert_eq!(r.staff_size, 3.08);
        assert_eq!(r.productivity, 0.37);
        assert_eq!(r.effort_adjustment_factor, None);
    }

    #[test]
    fn test_intermediate_organic_ten_kloc_unadjusted() {
        let r = IntermediateEstimator::new(ProjectClass::Organic)
            .unwrap()
            .estimate(10.0, &DriverSelections::none());
        assert_eq!(r.effort_adjustment_factor, Some(1.0));
        assert_eq!(r.person_months, 35.90);
        assert_eq!(r.time_in_months, 9.75);
        assert_eq!(r.staff_size, 3.68);
        assert_eq!(r.productivity, 0.28);
    }

    #[test]
    fn test_estimators_carry_their_own_tables() {
        let basic = BasicEstimator::new(ProjectClass::Embedded).unwrap();
        let inter = IntermediateEstimator::new(ProjectClass::Embedded).unwrap();
        assert_eq!(basic.coefficients().a, 3.6);
        assert_eq!(inter.coefficients().a, 2.8);
        assert_eq!(basic.class(), inter.class());
    }
}
