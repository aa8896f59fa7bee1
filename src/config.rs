use crate::error::ConfigError;
use crate::models::transaction::UNCATEGORIZED;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use std::path::Path;

/// Longest accepted recent-spending window, one hundred years.
pub const MAX_RECENT_WINDOW_DAYS: i64 = 36_525;

/// Tunables for the aggregation engine and the transaction validator.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EngineConfig {
    /// Length of the trailing "recent spending" window, in days.
    #[serde(default = "EngineConfig::default_recent_window_days")]
    pub recent_window_days: i64,
    /// Utilization percentage at which a near-limit insight fires.
    #[serde(default = "EngineConfig::default_near_limit_percent")]
    pub near_limit_percent: Decimal,
    #[serde(default = "EngineConfig::default_fallback_category")]
    pub fallback_category: String,
    /// When false, input categories are ignored and every transaction is
    /// filed under the fallback category.
    #[serde(default = "EngineConfig::default_categories_enabled")]
    pub categories_enabled: bool,
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self {
            recent_window_days: Self::default_recent_window_days(),
            near_limit_percent: Self::default_near_limit_percent(),
            fallback_category: Self::default_fallback_category(),
            categories_enabled: Self::default_categories_enabled(),
        }
    }
}

impl EngineConfig {
    pub fn default_recent_window_days() -> i64 {
        30
    }

    pub fn default_near_limit_percent() -> Decimal {
        Decimal::from(80)
    }

    pub fn default_fallback_category() -> String {
        UNCATEGORIZED.to_string()
    }

    pub fn default_categories_enabled() -> bool {
        true
    }

    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let raw = std::fs::read_to_string(path)?;
        let config: Self = serde_json::from_str(&raw)?;
        config.validate()?;
        tracing::debug!(path = %path.display(), ?config, "loaded engine config");
        Ok(config)
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        if !(0..=MAX_RECENT_WINDOW_DAYS).contains(&self.recent_window_days) {
            return Err(ConfigError::RecentWindowOutOfRange(self.recent_window_days));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::NamedTempFile;

    #[test]
    fn test_default_values() {
        let config = EngineConfig::default();
        assert_eq!(config.recent_window_days, 30);
        assert_eq!(config.near_limit_percent, Decimal::from(80));
        assert_eq!(config.fallback_category, "Uncategorized");
        assert!(config.categories_enabled);
    }

    #[test]
    fn test_partial_json_fills_defaults() {
        let config: EngineConfig = serde_json::from_str(r#"{"recent_window_days": 7}"#).unwrap();
        assert_eq!(config.recent_window_days, 7);
        assert_eq!(config.near_limit_percent, Decimal::from(80));
        assert_eq!(config.fallback_category, "Uncategorized");
    }

    #[test]
    fn test_load_from_file() {
        let mut tmp = NamedTempFile::new().expect("Failed to create temp file");
        write!(tmp, r#"{{"near_limit_percent": "90", "categories_enabled": false}}"#).unwrap();

        let config = EngineConfig::load(tmp.path()).unwrap();
        assert_eq!(config.near_limit_percent, Decimal::from(90));
        assert!(!config.categories_enabled);
    }

    #[test]
    fn test_load_rejects_out_of_range_window() {
        for days in ["-1", "36526", "1000000000", "9223372036854775807"] {
            let mut tmp = NamedTempFile::new().expect("Failed to create temp file");
            write!(tmp, r#"{{"recent_window_days": {}}}"#, days).unwrap();

            let result = EngineConfig::load(tmp.path());
            assert!(
                matches!(result, Err(ConfigError::RecentWindowOutOfRange(_))),
                "window {} should be rejected",
                days
            );
        }
    }

    #[test]
    fn test_load_accepts_window_bounds() {
        for days in [0, MAX_RECENT_WINDOW_DAYS] {
            let mut tmp = NamedTempFile::new().expect("Failed to create temp file");
            write!(tmp, r#"{{"recent_window_days": {}}}"#, days).unwrap();

            let config = EngineConfig::load(tmp.path()).unwrap();
            assert_eq!(config.recent_window_days, days);
        }
    }

    #[test]
    fn test_load_missing_file() {
        let result = EngineConfig::load(Path::new("does-not-exist.json"));
        assert!(matches!(result, Err(ConfigError::Io(_))));
    }

    #[test]
    fn test_load_malformed_file() {
        let mut tmp = NamedTempFile::new().expect("Failed to create temp file");
        write!(tmp, "not json").unwrap();

        let result = EngineConfig::load(tmp.path());
        assert!(matches!(result, Err(ConfigError::Serde(_))));
    }
}
