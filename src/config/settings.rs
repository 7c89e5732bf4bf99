//! User settings for finance-tracker
//!
//! Settings are read from `config.json` in the base directory. A missing file
//! means defaults, and missing keys fall back to their default values. The
//! file is edited by hand; the program never writes it.

use serde::{Deserialize, Serialize};

use super::paths::FinancePaths;
use crate::error::FinanceError;
use crate::form::ParsePolicy;

/// User settings for finance-tracker
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Settings {
    /// What a form submission does with fields that fail to parse
    #[serde(default)]
    pub parse_policy: ParsePolicy,

    /// Currency symbol used when displaying amounts
    #[serde(default = "default_currency")]
    pub currency_symbol: String,

    /// Whether a new session starts with the sample records
    #[serde(default = "default_true")]
    pub seed_sample_data: bool,

    /// Whether changes are appended to the audit log
    #[serde(default)]
    pub audit_enabled: bool,
}

fn default_currency() -> String {
    "$".to_string()
}

fn default_true() -> bool {
    true
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            parse_policy: ParsePolicy::default(),
            currency_symbol: default_currency(),
            seed_sample_data: true,
            audit_enabled: false,
        }
    }
}

impl Settings {
    /// Load settings from disk, or defaults if the file doesn't exist
    pub fn load_or_default(paths: &FinancePaths) -> Result<Self, FinanceError> {
        let settings_path = paths.settings_file();

        if !settings_path.exists() {
            return Ok(Settings::default());
        }

        let contents = std::fs::read_to_string(&settings_path)
            .map_err(|e| FinanceError::Io(format!("Failed to read settings file: {}", e)))?;

        serde_json::from_str(&contents)
            .map_err(|e| FinanceError::Config(format!("Failed to parse settings file: {}", e)))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_default_settings() {
        let settings = Settings::default();
        assert_eq!(settings.parse_policy, ParsePolicy::Fallback);
        assert_eq!(settings.currency_symbol, "$");
        assert!(settings.seed_sample_data);
        assert!(!settings.audit_enabled);
    }

    #[test]
    fn test_missing_file_gives_defaults() {
        let temp_dir = TempDir::new().unwrap();
        let paths = FinancePaths::with_base_dir(temp_dir.path().to_path_buf());

        assert_eq!(Settings::load_or_default(&paths).unwrap(), Settings::default());
    }

    #[test]
    fn test_full_file_round_trips() {
        let temp_dir = TempDir::new().unwrap();
        let paths = FinancePaths::with_base_dir(temp_dir.path().to_path_buf());

        let settings = Settings {
            parse_policy: ParsePolicy::Strict,
            currency_symbol: "€".to_string(),
            seed_sample_data: false,
            audit_enabled: true,
        };
        std::fs::write(
            paths.settings_file(),
            serde_json::to_string_pretty(&settings).unwrap(),
        )
        .unwrap();

        assert_eq!(Settings::load_or_default(&paths).unwrap(), settings);
    }

    #[test]
    fn test_partial_file_fills_defaults() {
        let temp_dir = TempDir::new().unwrap();
        let paths = FinancePaths::with_base_dir(temp_dir.path().to_path_buf());
        std::fs::write(paths.settings_file(), r#"{"parse_policy": "strict"}"#).unwrap();

        let settings = Settings::load_or_default(&paths).unwrap();
        assert_eq!(settings.parse_policy, ParsePolicy::Strict);
        assert_eq!(settings.currency_symbol, "$");
        assert!(settings.seed_sample_data);
    }

    #[test]
    fn test_invalid_file_is_config_error() {
        let temp_dir = TempDir::new().unwrap();
        let paths = FinancePaths::with_base_dir(temp_dir.path().to_path_buf());
        std::fs::write(paths.settings_file(), "not json").unwrap();

        let err = Settings::load_or_default(&paths).unwrap_err();
        assert!(matches!(err, FinanceError::Config(_)));
    }
}
