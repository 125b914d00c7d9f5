//! Environment driven configuration.

use std::env;
use std::str::FromStr;
use std::time::Duration;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("{key} has invalid value '{value}': {reason}")]
    Invalid {
        key: &'static str,
        value: String,
        reason: String,
    },
}

/// Physical size of one layout unit on the page.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum PageUnit {
    /// 1 unit = 1/72 inch.
    #[default]
    Point,
    Millimeter,
}

impl PageUnit {
    pub fn to_mm(&self, value: f32) -> f32 {
        match self {
            Self::Point => value * 25.4 / 72.0,
            Self::Millimeter => value,
        }
    }

    pub fn from_pt(&self, value: f32) -> f32 {
        match self {
            Self::Point => value,
            Self::Millimeter => value * 25.4 / 72.0,
        }
    }
}

impl FromStr for PageUnit {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "pt" | "point" | "points" => Ok(Self::Point),
            "mm" | "millimeter" | "millimeters" => Ok(Self::Millimeter),
            other => Err(format!("expected 'pt' or 'mm', got '{}'", other)),
        }
    }
}

#[derive(Debug, Clone)]
pub struct DocumentConfig {
    pub page_unit: PageUnit,
    pub document_title: String,
    pub handoff_ttl: Duration,
    pub handoff_capacity: u64,
}

impl Default for DocumentConfig {
    fn default() -> Self {
        Self {
            page_unit: PageUnit::Point,
            document_title: "Personal Details".to_string(),
            handoff_ttl: Duration::from_secs(10 * 60),
            handoff_capacity: 100,
        }
    }
}

impl DocumentConfig {
    /// Read configuration from the process environment, loading `.env` first.
    pub fn from_env() -> Result<Self, ConfigError> {
        dotenvy::dotenv().ok();
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Build a configuration from an arbitrary key lookup. Missing keys keep defaults.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let mut config = Self::default();

        if let Some(value) = lookup("PDF_PAGE_UNIT") {
            config.page_unit = value.parse().map_err(|reason| ConfigError::Invalid {
                key: "PDF_PAGE_UNIT",
                value: value.clone(),
                reason,
            })?;
        }

        if let Some(value) = lookup("PDF_DOCUMENT_TITLE") {
            if !value.trim().is_empty() {
                config.document_title = value;
            }
        }

        if let Some(value) = lookup("HANDOFF_TTL_SECS") {
            let secs = parse_positive("HANDOFF_TTL_SECS", &value)?;
            config.handoff_ttl = Duration::from_secs(secs);
        }

        if let Some(value) = lookup("HANDOFF_MAX_ENTRIES") {
            config.handoff_capacity = parse_positive("HANDOFF_MAX_ENTRIES", &value)?;
        }

        Ok(config)
    }
}

fn parse_positive(key: &'static str, value: &str) -> Result<u64, ConfigError> {
    match value.trim().parse::<u64>() {
        Ok(0) => Err(ConfigError::Invalid {
            key,
            value: value.to_string(),
            reason: "must be greater than zero".to_string(),
        }),
        Ok(n) => Ok(n),
        Err(e) => Err(ConfigError::Invalid {
            key,
            value: value.to_string(),
            reason: e.to_string(),
        }),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn lookup(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let map: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |key| map.get(key).cloned()
    }

    #[test]
    fn test_defaults() {
        let config = DocumentConfig::from_lookup(lookup(&[])).unwrap();
        assert_eq!(config.page_unit, PageUnit::Point);
        assert_eq!(config.document_title, "Personal Details");
        assert_eq!(config.handoff_ttl, Duration::from_secs(600));
        assert_eq!(config.handoff_capacity, 100);
    }

    #[test]
    fn test_overrides() {
        let config = DocumentConfig::from_lookup(lookup(&[
            ("PDF_PAGE_UNIT", "MM"),
            ("PDF_DOCUMENT_TITLE", "Candidate"),
            ("HANDOFF_TTL_SECS", "30"),
            ("HANDOFF_MAX_ENTRIES", "5"),
        ]))
        .unwrap();
        assert_eq!(config.page_unit, PageUnit::Millimeter);
        assert_eq!(config.document_title, "Candidate");
        assert_eq!(config.handoff_ttl, Duration::from_secs(30));
        assert_eq!(config.handoff_capacity, 5);
    }

    #[test]
    fn test_invalid_values() {
        let err = DocumentConfig::from_lookup(lookup(&[("PDF_PAGE_UNIT", "inch")])).unwrap_err();
        assert!(err.to_string().contains("PDF_PAGE_UNIT"));

        let err = DocumentConfig::from_lookup(lookup(&[("HANDOFF_TTL_SECS", "0")])).unwrap_err();
        assert!(err.to_string().contains("greater than zero"));

        assert!(DocumentConfig::from_lookup(lookup(&[("HANDOFF_MAX_ENTRIES", "x")])).is_err());
    }

    #[test]
    fn test_unit_conversion() {
        assert!((PageUnit::Point.to_mm(72.0) - 25.4).abs() < 1e-4);
        assert_eq!(PageUnit::Millimeter.to_mm(20.0), 20.0);
        assert!((PageUnit::Millimeter.from_pt(72.0) - 25.4).abs() < 1e-4);
    }
}
