use serde::Deserialize;
use std::path::Path;
use thiserror::Error;

// =============================================================================
// Logging
// =============================================================================

/// Environment variable holding the `tracing` filter directive
pub const LOG_ENV_VAR: &str = "VERSION_ORDER_LOG";

/// Filter used when `LOG_ENV_VAR` is unset or invalid
pub const DEFAULT_LOG_FILTER: &str = "warn";

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Failed to read config {path}: {source}")]
    Read {
        path: String,
        #[source]
        source: std::io::Error,
    },

    #[error("Invalid config {path}: {source}")]
    Parse {
        path: String,
        #[source]
        source: serde_json::Error,
    },
}

/// Ordering configuration structure
#[derive(Debug, Clone, Deserialize, Default, PartialEq)]
#[serde(default, rename_all = "camelCase")]
pub struct OrderConfig {
    pub input: InputConfig,
    pub output: OutputConfig,
}

/// How input versions are accepted
#[derive(Debug, Clone, Deserialize, Default, PartialEq)]
#[serde(default, rename_all = "camelCase")]
pub struct InputConfig {
    /// Fail on the first input that is not a valid semantic version
    /// instead of ordering it leniently. The whole string is checked, so a
    /// pre-release such as `rc.01` is rejected even though its base is fine.
    pub reject_invalid: bool,
}

/// How the ordered result is emitted
#[derive(Debug, Clone, Deserialize, Default, PartialEq)]
#[serde(default, rename_all = "camelCase")]
pub struct OutputConfig {
    /// Latest version first
    pub descending: bool,
}

impl OrderConfig {
    /// Load configuration from a JSON file. Missing fields use defaults.
    pub fn from_path(path: &Path) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path).map_err(|source| ConfigError::Read {
            path: path.display().to_string(),
            source,
        })?;

        serde_json::from_str(&content).map_err(|source| ConfigError::Parse {
            path: path.display().to_string(),
            source,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;
    use std::io::Write;
    use tempfile::NamedTempFile;

    #[test]
    fn order_config_from_partial_object_uses_defaults_for_missing_fields() {
        let result = serde_json::from_value::<OrderConfig>(json!({
            "output": {
                "descending": true
            }
        }))
        .unwrap();

        assert!(result.output.descending);
        assert_eq!(result.input, InputConfig::default());
    }

    #[test]
    fn order_config_from_full_object_parses_all_fields() {
        let result = serde_json::from_value::<OrderConfig>(json!({
            "input": { "rejectInvalid": true },
            "output": { "descending": true }
        }))
        .unwrap();

        assert_eq!(
            result,
            OrderConfig {
                input: InputConfig {
                    reject_invalid: true
                },
                output: OutputConfig { descending: true },
            }
        );
    }

    #[test]
    fn from_path_reads_json_file() {
        let mut file = NamedTempFile::new().unwrap();
        write!(file, r#"{{"input": {{"rejectInvalid": true}}}}"#).unwrap();

        let config = OrderConfig::from_path(file.path()).unwrap();

        assert!(config.input.reject_invalid);
        assert!(!config.output.descending);
    }

    #[test]
    fn from_path_reports_missing_file() {
        let dir = tempfile::tempdir().unwrap();
        let err = OrderConfig::from_path(&dir.path().join("missing.json")).unwrap_err();

        assert!(matches!(err, ConfigError::Read { .. }));
    }

    #[test]
    fn from_path_reports_invalid_json() {
        let mut file = NamedTempFile::new().unwrap();
        write!(file, "{{ not json").unwrap();

        let err = OrderConfig::from_path(file.path()).unwrap_err();

        assert!(matches!(err, ConfigError::Parse { .. }));
    }
}
