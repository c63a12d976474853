//! Error types for the chrome_theme library

use thiserror::Error;

/// Result type alias for chrome_theme operations
pub type Result<T> = std::result::Result<T, ThemeError>;

/// Error types for extraction, resolution and styling
#[derive(Error, Debug)]
pub enum ThemeError {
    /// Image could not be loaded or decoded
    #[error("Failed to load image: {message}")]
    ImageLoadError {
        message: String,
        #[source]
        source: Option<Box<dyn std::error::Error + Send + Sync>>,
    },

    /// Extraction produced no usable candidate color
    #[error("No usable colors extracted from image: {image}")]
    EmptyPalette { image: String },

    /// Target elements could not be resolved
    ///
    /// Raised by bindings whose lookup can reject a selector.
    #[error("Failed to resolve targets for '{selector}': {message}")]
    TargetResolution { selector: String, message: String },

    /// An element binding rejected a style update
    #[error("Style update failed: {message}")]
    StyleError { message: String },

    /// Invalid configuration parameter
    #[error("Invalid parameter: {parameter} = {value}")]
    InvalidParameter { parameter: String, value: String },

    /// Configuration file could not be read, written or parsed
    #[error("Configuration error: {message}")]
    ConfigError {
        message: String,
        #[source]
        source: Option<Box<dyn std::error::Error + Send + Sync>>,
    },

    /// Generic processing error
    #[error("Processing error: {0}")]
    ProcessingError(String),
}

impl ThemeError {
    /// Create an image load error with context
    pub fn image_load<E>(message: impl Into<String>, source: E) -> Self
    where
        E: std::error::Error + Send + Sync + 'static,
    {
        Self::ImageLoadError {
            message: message.into(),
            source: Some(Box::new(source)),
        }
    }

    /// Create a configuration error with context
    pub fn config<E>(message: impl Into<String>, source: E) -> Self
    where
        E: std::error::Error + Send + Sync + 'static,
    {
        Self::ConfigError {
            message: message.into(),
            source: Some(Box::new(source)),
        }
    }

    /// Create a style error
    pub fn style(message: impl Into<String>) -> Self {
        Self::StyleError {
            message: message.into(),
        }
    }

    /// Create a target resolution error
    pub fn target(selector: impl Into<String>, message: impl Into<String>) -> Self {
        Self::TargetResolution {
            selector: selector.into(),
            message: message.into(),
        }
    }

    /// Check if retrying with another image could succeed
    pub fn is_recoverable(&self) -> bool {
        matches!(
            self,
            ThemeError::ImageLoadError { .. } | ThemeError::EmptyPalette { .. }
        )
    }

    /// Get user-friendly error description for application display
    pub fn user_message(&self) -> String {
        match self {
            ThemeError::ImageLoadError { .. } => {
                "Could not load the image. Please check the address and format.".to_string()
            }
            ThemeError::EmptyPalette { .. } => {
                "The image has no usable colors for a theme.".to_string()
            }
            ThemeError::TargetResolution { selector, .. } => {
                format!("Could not find elements for '{}'.", selector)
            }
            ThemeError::InvalidParameter { parameter, .. } => {
                format!("The theme setting '{}' is invalid.", parameter)
            }
            _ => "Applying the theme failed.".to_string(),
        }
    }
}
