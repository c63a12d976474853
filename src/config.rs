//! Configuration structures for theme extraction and styling.
//!
//! All tunable parameters live here, split into sampling (how colors are read
//! out of the image) and style (how the chosen color is rendered).
//!
//! # Configuration Loading
//!
//! Configuration can be loaded from JSON files or constructed programmatically:
//!
//! ```no_run
//! use chrome_theme::ThemeConfig;
//! use std::path::Path;
//!
//! // Load from file
//! let config = ThemeConfig::from_json_file(Path::new("theme.json"))?;
//!
//! // Or use defaults
//! let config = ThemeConfig::default();
//! # Ok::<(), chrome_theme::ThemeError>(())
//! ```
//!
//! Fields missing from a JSON file fall back to their defaults.

use crate::constants::{sampling, style};
use crate::error::{Result, ThemeError};
use serde::{Deserialize, Serialize};
use std::path::Path;

/// Complete theme configuration.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct ThemeConfig {
    /// Pixel sampling configuration
    pub sampling: SamplingConfig,

    /// Style rendering configuration
    pub style: StyleConfig,
}

/// Pixel sampling parameters.
///
/// Shared by the prominent and average extractors.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SamplingConfig {
    /// Number of prominent colors returned
    pub amount: usize,

    /// Channel quantization step for prominent colors (1 = no grouping)
    pub group: u8,

    /// Visit every n-th pixel
    pub sample: usize,
}

impl Default for SamplingConfig {
    fn default() -> Self {
        Self {
            amount: sampling::DEFAULT_AMOUNT,
            group: sampling::DEFAULT_GROUP,
            sample: sampling::DEFAULT_SAMPLE,
        }
    }
}

/// Notation used for the translucent hover background.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum HoverNotation {
    /// `rgba(r, g, b, a)`
    #[default]
    Rgba,
    /// `rgb(r, g, b, a)`, four arguments in the three-channel notation
    Legacy,
}

/// Style rendering parameters.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct StyleConfig {
    /// CSS `transition` value
    pub transition: String,

    /// Background opacity while hovered (0.0-1.0)
    pub hover_alpha: f64,

    /// Notation of the hover background
    pub hover_notation: HoverNotation,
}

impl Default for StyleConfig {
    fn default() -> Self {
        Self {
            transition: style::DEFAULT_TRANSITION.to_string(),
            hover_alpha: style::DEFAULT_HOVER_ALPHA,
            hover_notation: HoverNotation::default(),
        }
    }
}

impl ThemeConfig {
    /// Check parameter ranges
    pub fn validate(&self) -> Result<()> {
        if self.sampling.amount == 0 {
            return Err(invalid("sampling.amount", self.sampling.amount));
        }
        if self.sampling.group == 0 {
            return Err(invalid("sampling.group", self.sampling.group));
        }
        if self.sampling.sample == 0 {
            return Err(invalid("sampling.sample", self.sampling.sample));
        }
        if !(0.0..=1.0).contains(&self.style.hover_alpha) {
            return Err(invalid("style.hover_alpha", self.style.hover_alpha));
        }
        Ok(())
    }

    /// Load and validate configuration from a JSON file
    pub fn from_json_file(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path).map_err(|e| {
            ThemeError::config(format!("Failed to read {}", path.display()), e)
        })?;
        let config: Self = serde_json::from_str(&content).map_err(|e| {
            ThemeError::config(format!("Failed to parse {}", path.display()), e)
        })?;
        config.validate()?;
        Ok(config)
    }

    /// Save configuration to a JSON file
    pub fn to_json_file(&self, path: &Path) -> Result<()> {
        let json = serde_json::to_string_pretty(self)
            .map_err(|e| ThemeError::config("Failed to serialize configuration", e))?;
        std::fs::write(path, json).map_err(|e| {
            ThemeError::config(format!("Failed to write {}", path.display()), e)
        })?;
        Ok(())
    }
}

fn invalid(parameter: &str, value: impl ToString) -> ThemeError {
    ThemeError::InvalidParameter {
        parameter: parameter.to_string(),
        value: value.to_string(),
    }
}
