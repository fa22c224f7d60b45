//! Environment-driven defaults for COCOMO binaries.
//!
//! | variable               | values              | default   |
//! |------------------------|---------------------|-----------|
//! | `COCOMO_LOG_FORMAT`    | `text` or `json`    | `text`    |
//! | `COCOMO_PROJECT_CLASS` | canonical class name| `Organic` |

use crate::domain::{parse_project_class, ProjectClass, Result};

pub const LOG_FORMAT_ENV: &str = "COCOMO_LOG_FORMAT";
pub const PROJECT_CLASS_ENV: &str = "COCOMO_PROJECT_CLASS";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum LogFormat {
    #[default]
    Text,
    Json,
}

/// Process-level settings.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Settings {
    pub log_format: LogFormat,
    /// Class used when a command does not name one.
    pub default_project_class: ProjectClass,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            log_format: LogFormat::Text,
            default_project_class: ProjectClass::Organic,
        }
    }
}

impl Settings {
    /// Read settings from the process environment.
    pub fn from_env() -> Result<Self> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Read settings through an arbitrary key lookup.
    pub fn from_lookup<F>(lookup: F) -> Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let mut settings = Self::default();
        if let Some(format) = lookup(LOG_FORMAT_ENV) {
            settings.log_format = if format.eq_ignore_ascii_case("json") {
                LogFormat::Json
            } else {
                LogFormat::Text
            };
        }
        if let Some(class) = lookup(PROJECT_CLASS_ENV) {
            settings.default_project_class = parse_project_class(&class)?;
        }
        Ok(settings)
    }

    /// Log format after a command-line `--log-json` override.
    pub fn log_format_with_override(&self, force_json: bool) -> LogFormat {
        if force_json {
            LogFormat::Json
        } else {
            self.log_format
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::EstimationError;
    use std::collections::HashMap;

    fn lookup(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let map: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |key| map.get(key).cloned()
    }

    #[test]
    fn test_defaults_when_unset() {
        let s = Settings::from_lookup(lookup(&[])).unwrap();
        assert_eq!(s, Settings::default());
        assert_eq!(s.log_format, LogFormat::Text);
    }

    #[test]
    fn test_reads_overrides() {
        let s = Settings::from_lookup(lookup(&[
            (LOG_FORMAT_ENV, "JSON"),
            (PROJECT_CLASS_ENV, "Embedded"),
        ]))
        .unwrap();
        assert_eq!(s.log_format, LogFormat::Json);
        assert_eq!(s.default_project_class, ProjectClass::Embedded);
    }

    #[test]
    fn test_cli_override_forces_json() {
        let s = Settings::default();
        assert_eq!(s.log_format_with_override(false), LogFormat::Text);
        assert_eq!(s.log_format_with_override(true), LogFormat::Json);
    }

    #[test]
    fn test_rejects_bad_class() {
        let err = Settings::from_lookup(lookup(&[(PROJECT_CLASS_ENV, "embedded")])).unwrap_err();
        assert!(matches!(err, EstimationError::UnknownProjectClass(_)));
    }
}
