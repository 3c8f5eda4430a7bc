use std::path::Path;

use crate::error::ConfigError;

/// Game configuration, loadable from YAML.
///
/// All fields have defaults, so a partial (or empty) config file works: any
/// missing key takes its default value.
#[derive(Debug, Clone, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
#[serde(default)]
pub struct GameConfig {
    /// Number of rows in the board, in `[4, 10]`.
    pub rows: usize,
    /// Number of columns in the board, in `[4, 10]`.
    pub cols: usize,
    /// Consecutive same-player pieces needed to win, in `[3, 8]`.
    pub win_length: usize,
}

impl Default for GameConfig {
    fn default() -> Self {
        GameConfig {
            rows: 6,
            cols: 7,
            win_length: 4,
        }
    }
}

impl GameConfig {
    /// Load configuration from a YAML file.
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path).map_err(|e| ConfigError::FileRead {
            path: path.to_path_buf(),
            source: e,
        })?;
        // An empty document parses as YAML null, not as a mapping.
        let config: GameConfig = if content.trim().is_empty() {
            GameConfig::default()
        } else {
            serde_yaml::from_str(&content)?
        };
        config.validate()?;
        Ok(config)
    }

    /// Load configuration from a YAML file, falling back to defaults if the
    /// file does not exist.
    pub fn load_or_default(path: &Path) -> Result<Self, ConfigError> {
        if path.exists() {
            Self::load(path)
        } else {
            eprintln!(
                "Warning: config file '{}' not found, using defaults",
                path.display()
            );
            Ok(Self::default())
        }
    }

    /// Validate configuration values.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.rows < 4 || self.rows > 10 {
            return Err(ConfigError::Validation("rows must be in [4, 10]".into()));
        }
        if self.cols < 4 || self.cols > 10 {
            return Err(ConfigError::Validation("cols must be in [4, 10]".into()));
        }
        if self.win_length < 3 || self.win_length > 8 {
            return Err(ConfigError::Validation(
                "win_length must be in [3, 8]".into(),
            ));
        }
        // A run longer than the largest dimension can never be completed.
        let max_dimension = self.rows.max(self.cols);
        if self.win_length > max_dimension {
            return Err(ConfigError::Validation(format!(
                "win_length ({}) cannot be greater than max board dimension ({})",
                self.win_length, max_dimension
            )));
        }
        Ok(())
    }

    /// Generate a YAML string with all default values (useful for creating
    /// example config files).
    pub fn default_yaml() -> String {
        serde_yaml::to_string(&GameConfig::default()).expect("default config serializes")
    }
}
