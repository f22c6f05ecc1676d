use std::path::{Path, PathBuf};

use tracing_subscriber::filter::LevelFilter;

use crate::error::ConfigError;
use crate::game::{DEFAULT_COLS, DEFAULT_ROWS};

/// Largest width or height accepted from configuration, so the framed grid
/// fits a normal terminal.
pub const MAX_DIMENSION: usize = 16;

/// Top-level application configuration, loadable from TOML.
#[derive(Debug, Clone, Default, serde::Serialize, serde::Deserialize)]
#[serde(default)]
pub struct AppConfig {
    pub board: BoardConfig,
    pub ui: UiConfig,
    pub logging: LoggingConfig,
}

#[derive(Debug, Clone, serde::Serialize, serde::Deserialize)]
#[serde(default)]
pub struct BoardConfig {
    pub width: usize,
    pub height: usize,
}

impl Default for BoardConfig {
    fn default() -> Self {
        BoardConfig {
            width: DEFAULT_COLS,
            height: DEFAULT_ROWS,
        }
    }
}

#[derive(Debug, Clone, serde::Serialize, serde::Deserialize)]
#[serde(default)]
pub struct UiConfig {
    /// Column the selector starts on; clamped to the board width.
    pub start_column: usize,
}

impl Default for UiConfig {
    fn default() -> Self {
        UiConfig { start_column: 3 }
    }
}

#[derive(Debug, Clone, serde::Serialize, serde::Deserialize)]
#[serde(default)]
pub struct LoggingConfig {
    /// Default filter directive. `RUST_LOG` takes precedence when set.
    pub level: String,
    /// Log file. The terminal UI only logs when this is set.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub file: Option<PathBuf>,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        LoggingConfig {
            level: "info".to_string(),
            file: None,
        }
    }
}

impl AppConfig {
    /// Load configuration from a TOML file.
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path).map_err(|e| ConfigError::FileRead {
            path: path.to_path_buf(),
            source: e,
        })?;
        let config: AppConfig = toml::from_str(&content)?;
        config.validate()?;
        Ok(config)
    }

    /// Load configuration from a TOML file, falling back to defaults if the file
    /// does not exist.
    pub fn load_or_default(path: &Path) -> Result<Self, ConfigError> {
        if path.exists() {
            Self::load(path)
        } else {
            Ok(Self::default())
        }
    }

    /// Validate configuration values.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.board.width == 0 || self.board.width > MAX_DIMENSION {
            return Err(ConfigError::Validation(format!(
                "board.width must be in 1..={MAX_DIMENSION}"
            )));
        }
        if self.board.height == 0 || self.board.height > MAX_DIMENSION {
            return Err(ConfigError::Validation(format!(
                "board.height must be in 1..={MAX_DIMENSION}"
            )));
        }
        if self.logging.level.parse::<LevelFilter>().is_err() {
            return Err(ConfigError::Validation(format!(
                "logging.level '{}' is not a valid level",
                self.logging.level
            )));
        }

        Ok(())
    }

    /// Generate a TOML string with all default values (useful for creating
    /// example config files).
    pub fn default_toml() -> String {
        toml::to_string_pretty(&AppConfig::default()).expect("default config serializes")
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn test_default_config_is_valid() {
        let config = AppConfig::default();
        config.validate().expect("default config should be valid");
        assert_eq!((config.board.width, config.board.height), (7, 6));
    }

    #[test]
    fn test_partial_toml_uses_defaults() {
        let toml_str = r#"
[board]
width = 9
"#;
        let config: AppConfig = toml::from_str(toml_str).unwrap();
        assert_eq!(config.board.width, 9);
        // Other fields should be defaults
        assert_eq!(config.board.height, 6);
        assert_eq!(config.ui.start_column, 3);
        assert_eq!(config.logging.level, "info");
        assert!(config.logging.file.is_none());
    }

    #[test]
    fn test_empty_toml_uses_all_defaults() {
        let config: AppConfig = toml::from_str("").unwrap();
        let default = AppConfig::default();
        assert_eq!(config.board.width, default.board.width);
        assert_eq!(config.board.height, default.board.height);
    }

    #[test]
    fn test_validation_rejects_zero_width() {
        let mut config = AppConfig::default();
        config.board.width = 0;
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_validation_rejects_oversized_height() {
        let mut config = AppConfig::default();
        config.board.height = MAX_DIMENSION + 1;
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_validation_rejects_unknown_level() {
        let mut config = AppConfig::default();
        config.logging.level = "chatty".to_string();
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_load_or_default_missing_file() {
        let config = AppConfig::load_or_default(Path::new("nonexistent_config.toml")).unwrap();
        assert_eq!(config.board.width, DEFAULT_COLS);
    }

    #[test]
    fn test_load_from_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("test_config.toml");
        let mut f = std::fs::File::create(&path).unwrap();
        writeln!(
            f,
            r#"
[board]
height = 8

[logging]
level = "debug"
file = "game.log"
"#
        )
        .unwrap();

        let config = AppConfig::load(&path).unwrap();
        assert_eq!(config.board.height, 8);
        assert_eq!(config.logging.file, Some(PathBuf::from("game.log")));
        // Others are defaults
        assert_eq!(config.board.width, DEFAULT_COLS);
    }

    #[test]
    fn test_load_rejects_invalid_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("bad.toml");
        std::fs::write(&path, "[board]\nwidth = 0\n").unwrap();

        assert!(matches!(
            AppConfig::load(&path),
            Err(ConfigError::Validation(_))
        ));
    }

    #[test]
    fn test_default_toml_roundtrips() {
        let toml_str = AppConfig::default_toml();
        let config: AppConfig = toml::from_str(&toml_str).unwrap();
        config.validate().expect("roundtripped config should be valid");
    }
}
