//! Wattway configuration system
//!
//! This crate provides centralized configuration management for the Wattway
//! motion engine, loading settings from `wattway.toml` with environment
//! variable overrides.

use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use thiserror::Error;

/// Default configuration file name, looked up in the current directory.
pub const DEFAULT_CONFIG_FILE: &str = "wattway.toml";

/// Errors that can occur while loading configuration.
#[derive(Error, Debug)]
pub enum ConfigError {
    /// The configuration file could not be read.
    #[error("failed to read config file {path}: {source}")]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// The configuration file is not valid TOML for this schema.
    #[error("failed to parse config file: {0}")]
    Parse(#[from] toml::de::Error),

    /// A value is syntactically valid but out of range.
    #[error("invalid value for {key}: {message}")]
    Invalid { key: &'static str, message: String },
}

/// Result type for configuration operations.
pub type Result<T> = std::result::Result<T, ConfigError>;

/// Main configuration structure for Wattway
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq)]
#[serde(default)]
pub struct WattwayConfig {
    /// Frame driver and curve evaluator settings
    pub animation: AnimationConfig,
    /// Design token source
    pub theme: ThemeConfig,
    /// Headless demo settings
    pub demo: DemoConfig,
}

/// Frame driver and curve evaluator configuration
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct AnimationConfig {
    /// Host display refresh rate in frames per second
    pub frame_rate: u32,
    /// Largest frame delta accepted from the host clock, in milliseconds
    pub max_frame_ms: f64,
    /// Largest spring integration step, in milliseconds
    pub max_substep_ms: f64,
    /// Spring rest threshold on displacement from target
    pub spring_position_epsilon: f64,
    /// Spring rest threshold on velocity (units per second)
    pub spring_velocity_epsilon: f64,
}

/// Design token configuration
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq)]
#[serde(default)]
pub struct ThemeConfig {
    /// Path to a TOML token file; the built-in Wattway tokens are used when unset
    pub path: Option<PathBuf>,
}

/// Demo binary configuration
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct DemoConfig {
    /// Length of the simulated interaction timeline in seconds
    pub seconds: f64,
}

impl Default for AnimationConfig {
    fn default() -> Self {
        Self {
            frame_rate: 60,
            max_frame_ms: 100.0,
            max_substep_ms: 4.0,
            spring_position_epsilon: 1e-3,
            spring_velocity_epsilon: 1e-2,
        }
    }
}

impl Default for DemoConfig {
    fn default() -> Self {
        Self { seconds: 2.0 }
    }
}

impl AnimationConfig {
    /// Nominal frame step in seconds derived from `frame_rate`.
    pub fn frame_dt(&self) -> f64 {
        1.0 / f64::from(self.frame_rate.max(1))
    }

    /// Largest accepted frame delta in seconds.
    pub fn max_frame_dt(&self) -> f64 {
        self.max_frame_ms / 1000.0
    }

    /// Largest spring integration step in seconds.
    pub fn max_substep(&self) -> f64 {
        self.max_substep_ms / 1000.0
    }

    fn validate(&self) -> Result<()> {
        if self.frame_rate == 0 {
            return Err(ConfigError::Invalid {
                key: "animation.frame_rate",
                message: "must be at least 1".to_string(),
            });
        }
        let positive = [
            ("animation.max_frame_ms", self.max_frame_ms),
            ("animation.max_substep_ms", self.max_substep_ms),
            (
                "animation.spring_position_epsilon",
                self.spring_position_epsilon,
            ),
            (
                "animation.spring_velocity_epsilon",
                self.spring_velocity_epsilon,
            ),
        ];
        for (key, value) in positive {
            if !value.is_finite() || value <= 0.0 {
                return Err(ConfigError::Invalid {
                    key,
                    message: format!("expected a positive number, got {value}"),
                });
            }
        }
        Ok(())
    }
}

impl WattwayConfig {
    /// Load configuration from a TOML file
    ///
    /// # Arguments
    /// * `path` - Path to the wattway.toml configuration file
    pub fn load_from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        let content = std::fs::read_to_string(path).map_err(|source| ConfigError::Read {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_toml_str(&content)
    }

    /// Parse and validate configuration from TOML text.
    pub fn from_toml_str(content: &str) -> Result<Self> {
        let config: Self = toml::from_str(content)?;
        config.validate()?;
        Ok(config)
    }

    /// Load configuration from the default location (wattway.toml in the current
    /// directory) or return default configuration if the file doesn't exist
    pub fn load_or_default() -> Result<Self> {
        let path = Path::new(DEFAULT_CONFIG_FILE);
        if path.exists() {
            Self::load_from_file(path)
        } else {
            Ok(Self::default())
        }
    }

    /// Merge configuration with environment variables
    ///
    /// Environment variables take precedence over configuration file values.
    pub fn merge_with_env(&mut self) {
        self.merge_with(|key| std::env::var(key).ok());
    }

    /// Merge overrides from an arbitrary key lookup.
    ///
    /// Unparseable values are skipped and leave the current value in place.
    pub fn merge_with<F>(&mut self, lookup: F)
    where
        F: Fn(&str) -> Option<String>,
    {
        let number = |key: &str| lookup(key).and_then(|v| v.trim().parse::<f64>().ok());

        if let Some(fps) = lookup("WATTWAY_FPS").and_then(|v| v.trim().parse::<u32>().ok()) {
            self.animation.frame_rate = fps;
        }
        if let Some(ms) = number("WATTWAY_MAX_FRAME_MS") {
            self.animation.max_frame_ms = ms;
        }
        if let Some(ms) = number("WATTWAY_MAX_SUBSTEP_MS") {
            self.animation.max_substep_ms = ms;
        }
        if let Some(eps) = number("WATTWAY_SPRING_POSITION_EPSILON") {
            self.animation.spring_position_epsilon = eps;
        }
        if let Some(eps) = number("WATTWAY_SPRING_VELOCITY_EPSILON") {
            self.animation.spring_velocity_epsilon = eps;
        }
        if let Some(path) = lookup("WATTWAY_THEME") {
            self.theme.path = Some(PathBuf::from(path));
        }
        if let Some(seconds) = number("WATTWAY_DEMO_SECONDS") {
            self.demo.seconds = seconds;
        }
    }

    /// Check every section for out-of-range values.
    pub fn validate(&self) -> Result<()> {
        self.animation.validate()?;
        if !self.demo.seconds.is_finite() || self.demo.seconds < 0.0 {
            return Err(ConfigError::Invalid {
                key: "demo.seconds",
                message: format!("expected a non-negative number, got {}", self.demo.seconds),
            });
        }
        Ok(())
    }

    /// Load configuration with environment variable overrides
    ///
    /// This is the recommended way to load configuration:
    /// 1. Load from wattway.toml (or use defaults if not found)
    /// 2. Override with environment variables if present
    /// 3. Validate the merged result
    pub fn load() -> Result<Self> {
        let mut config = Self::load_or_default()?;
        config.merge_with_env();
        config.validate()?;
        Ok(config)
    }
}
