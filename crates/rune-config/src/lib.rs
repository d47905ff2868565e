//! Rune text field configuration
//!
//! Settings for the selection coordinator and its gesture recognizers,
//! loaded from `rune.toml` with environment variable overrides.

use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use thiserror::Error;

/// Default configuration file, looked up in the current directory.
pub const DEFAULT_CONFIG_FILE: &str = "rune.toml";

/// Errors raised while loading a configuration file.
#[derive(Error, Debug)]
pub enum ConfigError {
    /// The file could not be read.
    #[error("failed to read config file {path}: {source}")]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// The file is not valid TOML for [`RuneConfig`].
    #[error("failed to parse config file {path}: {source}")]
    Parse {
        path: PathBuf,
        #[source]
        source: toml::de::Error,
    },
}

/// Main configuration structure
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct RuneConfig {
    /// Cursor and selection handle settings
    pub selection: SelectionConfig,
    /// Gesture recognition thresholds
    pub gestures: GestureConfig,
    /// Log output settings
    pub logging: LoggingConfig,
}

/// Cursor and selection handle configuration
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SelectionConfig {
    /// Cursor stroke width in density-independent pixels
    pub cursor_thickness: f32,
    /// Pixels per density-independent pixel
    pub density: f32,
    /// Emit haptic pulses while handles move
    pub haptics: bool,
}

/// Gesture recognizer thresholds
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct GestureConfig {
    /// Distance a pointer may travel before a press becomes a drag
    pub touch_slop: f32,
    /// Hold time before a press becomes a long press
    pub long_press_timeout_ms: u64,
    /// Maximum gap between the first tap's release and the second press
    pub double_tap_timeout_ms: u64,
    /// Maximum distance between the two presses of a double tap
    pub double_tap_slop: f32,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct LoggingConfig {
    /// `tracing_subscriber::EnvFilter` directive used when `RUST_LOG` is unset
    pub filter: String,
}

impl Default for SelectionConfig {
    fn default() -> Self {
        Self {
            cursor_thickness: 2.0,
            density: 1.0,
            haptics: true,
        }
    }
}

impl Default for GestureConfig {
    fn default() -> Self {
        Self {
            touch_slop: 8.0,
            long_press_timeout_ms: 400,
            double_tap_timeout_ms: 300,
            double_tap_slop: 100.0,
        }
    }
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            filter: "rune_textfield=info".to_string(),
        }
    }
}

impl SelectionConfig {
    /// Cursor stroke width in pixels.
    pub fn cursor_width_px(&self) -> f32 {
        self.cursor_thickness * self.density
    }
}

impl RuneConfig {
    /// Load configuration from a TOML file
    pub fn load_from_file<P: AsRef<Path>>(path: P) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        let content = std::fs::read_to_string(path).map_err(|source| ConfigError::Read {
            path: path.to_path_buf(),
            source,
        })?;

        toml::from_str(&content).map_err(|source| ConfigError::Parse {
            path: path.to_path_buf(),
            source,
        })
    }

    /// Load configuration from `rune.toml` in the current directory, or
    /// return the defaults if it is missing or broken.
    pub fn load_or_default() -> Self {
        match Self::load_from_file(DEFAULT_CONFIG_FILE) {
            Ok(config) => config,
            Err(ConfigError::Read { source, .. })
                if source.kind() == std::io::ErrorKind::NotFound =>
            {
                Self::default()
            }
            Err(err) => {
                tracing::warn!(error = %err, "using default configuration");
                Self::default()
            }
        }
    }

    /// Merge configuration with environment variables
    ///
    /// Environment variables take precedence over configuration file values.
    /// Values that fail to parse are ignored.
    pub fn merge_with_env(&mut self) {
        self.merge_with(|key| std::env::var(key).ok());
    }

    fn merge_with(&mut self, lookup: impl Fn(&str) -> Option<String>) {
        // Selection settings
        if let Some(val) = parse_var::<f32>(&lookup, "RUNE_CURSOR_THICKNESS") {
            self.selection.cursor_thickness = val;
        }
        if let Some(val) = parse_var::<f32>(&lookup, "RUNE_DENSITY") {
            self.selection.density = val;
        }
        if let Some(val) = lookup("RUNE_HAPTICS") {
            self.selection.haptics = val == "1" || val.eq_ignore_ascii_case("true");
        }

        // Gesture settings
        if let Some(val) = parse_var::<f32>(&lookup, "RUNE_TOUCH_SLOP") {
            self.gestures.touch_slop = val;
        }
        if let Some(val) = parse_var::<u64>(&lookup, "RUNE_LONG_PRESS_MS") {
            self.gestures.long_press_timeout_ms = val;
        }
        if let Some(val) = parse_var::<u64>(&lookup, "RUNE_DOUBLE_TAP_MS") {
            self.gestures.double_tap_timeout_ms = val;
        }

        if let Some(filter) = lookup("RUNE_LOG") {
            self.logging.filter = filter;
        }
    }

    /// Load configuration with environment variable overrides
    ///
    /// 1. Load from rune.toml (or use defaults if not found)
    /// 2. Override with environment variables if present
    pub fn load() -> Self {
        let mut config = Self::load_or_default();
        config.merge_with_env();
        config
    }
}

fn parse_var<T: std::str::FromStr>(lookup: &impl Fn(&str) -> Option<String>, key: &str) -> Option<T> {
    let raw = lookup(key)?;
    match raw.trim().parse() {
        Ok(val) => Some(val),
        Err(_) => {
            tracing::warn!(key, value = %raw, "ignoring unparsable environment override");
            None
        }
    }
}
