#![forbid(unsafe_code)]

//! Tunable thresholds for drag-to-select.
//!
//! [`SelectConfig`] collects the constants that decide when a press becomes a
//! drag and how eagerly the container auto-scrolls. `SelectConfig::default()`
//! reproduces the stock behavior; hosts with denser layouts or touch input can
//! load their own values from TOML or JSON.
//!
//! ```toml
//! # rubberband.toml
//! activation_threshold = 16.0
//! edge_band = 32.0
//! max_scroll_step = 20.0
//! key_scroll_reset = "escape_only"
//! ```
//!
//! ```rust,ignore
//! let config = SelectConfig::from_toml_file("rubberband.toml")?;
//! ```

#[cfg(feature = "config")]
use std::path::Path;

#[cfg(feature = "config")]
use serde::{Deserialize, Serialize};

/// Default minimum gesture diagonal (px) before a press becomes a drag.
pub const DEFAULT_ACTIVATION_THRESHOLD: f64 = 10.0;

/// Default width (px) of the auto-scroll band along each viewport edge.
pub const DEFAULT_EDGE_BAND: f64 = 20.0;

/// Default cap (px) on one auto-scroll step per axis.
pub const DEFAULT_MAX_SCROLL_STEP: f64 = 15.0;

/// Which key presses reset the scroll-adjustment vector of a gesture.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "config", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "config", serde(rename_all = "snake_case"))]
pub enum KeyScrollReset {
    /// Every key press clears the scroll vector. While it is cleared, pointer
    /// moves and scrolls are ignored until the pointer is released.
    #[default]
    AnyKey,
    /// Only Escape clears it (as part of cancelling the gesture).
    EscapeOnly,
}

/// Drag-to-select tuning.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "config", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "config", serde(default))]
pub struct SelectConfig {
    /// Minimum diagonal length (px) that promotes a press into a drag.
    pub activation_threshold: f64,
    /// Width (px) of the edge band that triggers auto-scroll.
    pub edge_band: f64,
    /// Largest auto-scroll step (px) per axis per frame.
    pub max_scroll_step: f64,
    pub key_scroll_reset: KeyScrollReset,
}

impl Default for SelectConfig {
    fn default() -> Self {
        Self {
            activation_threshold: DEFAULT_ACTIVATION_THRESHOLD,
            edge_band: DEFAULT_EDGE_BAND,
            max_scroll_step: DEFAULT_MAX_SCROLL_STEP,
            key_scroll_reset: KeyScrollReset::AnyKey,
        }
    }
}

impl SelectConfig {
    #[must_use]
    pub fn with_activation_threshold(mut self, threshold: f64) -> Self {
        self.activation_threshold = threshold;
        self
    }

    #[must_use]
    pub fn with_edge_band(mut self, band: f64) -> Self {
        self.edge_band = band;
        self
    }

    #[must_use]
    pub fn with_max_scroll_step(mut self, step: f64) -> Self {
        self.max_scroll_step = step;
        self
    }

    #[must_use]
    pub fn with_key_scroll_reset(mut self, reset: KeyScrollReset) -> Self {
        self.key_scroll_reset = reset;
        self
    }

    /// Load from a TOML string.
    #[cfg(feature = "config")]
    pub fn from_toml_str(s: &str) -> Result<Self, ConfigError> {
        let config: Self = toml::from_str(s).map_err(ConfigError::Toml)?;
        config.validated()
    }

    /// Load from a TOML file on disk.
    #[cfg(feature = "config")]
    pub fn from_toml_file(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path.as_ref()).map_err(ConfigError::Io)?;
        Self::from_toml_str(&content)
    }

    /// Load from a JSON string.
    #[cfg(feature = "config")]
    pub fn from_json_str(s: &str) -> Result<Self, ConfigError> {
        let config: Self = serde_json::from_str(s).map_err(ConfigError::Json)?;
        config.validated()
    }

    /// Load from a JSON file on disk.
    #[cfg(feature = "config")]
    pub fn from_json_file(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path.as_ref()).map_err(ConfigError::Io)?;
        Self::from_json_str(&content)
    }

    /// Validate all parameters are within acceptable ranges.
    ///
    /// Returns a list of validation errors. An empty list means the config
    /// is valid.
    #[must_use]
    pub fn validate(&self) -> Vec<String> {
        let mut errors = Vec::new();

        if !self.activation_threshold.is_finite() || self.activation_threshold < 0.0 {
            errors.push(format!(
                "activation_threshold must be finite and >= 0, got {}",
                self.activation_threshold
            ));
        }

        if !self.edge_band.is_finite() || self.edge_band <= 0.0 {
            errors.push(format!(
                "edge_band must be finite and > 0, got {}",
                self.edge_band
            ));
        }

        if !self.max_scroll_step.is_finite() || self.max_scroll_step <= 0.0 {
            errors.push(format!(
                "max_scroll_step must be finite and > 0, got {}",
                self.max_scroll_step
            ));
        }

        errors
    }

    /// `self` if it validates, otherwise [`ConfigError::Validation`].
    pub fn validated(self) -> Result<Self, ConfigError> {
        let errors = self.validate();
        if errors.is_empty() {
            Ok(self)
        } else {
            Err(ConfigError::Validation(errors))
        }
    }
}

/// Errors that can occur when loading a configuration.
#[derive(Debug)]
pub enum ConfigError {
    /// I/O error reading a file.
    Io(std::io::Error),
    /// TOML parse error.
    #[cfg(feature = "config")]
    Toml(toml::de::Error),
    /// JSON parse error.
    #[cfg(feature = "config")]
    Json(serde_json::Error),
    /// Validation errors.
    Validation(Vec<String>),
}

impl std::fmt::Display for ConfigError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Io(e) => write!(f, "I/O error: {e}"),
            #[cfg(feature = "config")]
            Self::Toml(e) => write!(f, "TOML parse error: {e}"),
            #[cfg(feature = "config")]
            Self::Json(e) => write!(f, "JSON parse error: {e}"),
            Self::Validation(errors) => {
                write!(f, "validation errors: {}", errors.join("; "))
            }
        }
    }
}

impl std::error::Error for ConfigError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Io(e) => Some(e),
            #[cfg(feature = "config")]
            Self::Toml(e) => Some(e),
            #[cfg(feature = "config")]
            Self::Json(e) => Some(e),
            Self::Validation(_) => None,
        }
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
