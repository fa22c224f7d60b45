//! Project class: the scale/risk profile used to pick regression coefficients.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use super::error::{EstimationError, Result};

/// COCOMO project classification.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ProjectClass {
    /// Small teams, familiar environment, flexible requirements.
    Organic,
    /// Mixed experience, medium size and rigidity.
    SemiDetached,
    /// Tight hardware, software and operational constraints.
    Embedded,
}

impl ProjectClass {
    pub const ALL: [ProjectClass; 3] = [Self::Organic, Self::SemiDetached, Self::Embedded];

    /// Canonical name, the only spelling accepted by [`parse_project_class`].
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Organic => "Organic",
            Self::SemiDetached => "SemiDetached",
            Self::Embedded => "Embedded",
        }
    }
}

impl fmt::Display for ProjectClass {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ProjectClass {
    type Err = EstimationError;

    fn from_str(s: &str) -> Result<Self> {
        parse_project_class(s)
    }
}

/// Resolve a project class from its canonical name.
///
/// Matching is exact and case-sensitive; there is no fallback class.
pub fn parse_project_class(text: &str) -> Result<ProjectClass> {
    ProjectClass::ALL
        .into_iter()
        .find(|class| class.as_str() == text)
        .ok_or_else(|| EstimationError::UnknownProjectClass(text.to_string()))
}
