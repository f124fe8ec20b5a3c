//! Error types for the rgb_conversions library

use thiserror::Error;

use crate::color::Channel;

/// Result type alias for rgb_conversions operations
pub type Result<T> = std::result::Result<T, ConversionError>;

/// Errors raised while building colors or loading report configuration
#[derive(Error, Debug)]
pub enum ConversionError {
    /// A channel value fell outside the inclusive 0-255 range
    #[error("{channel} channel out of range: {value} (expected 0-255)")]
    RangeViolation { channel: Channel, value: i64 },

    /// A hex string could not be decoded into three channels
    #[error("Invalid hex color {input:?}: {reason}")]
    InvalidHex { input: String, reason: String },

    /// Report configuration could not be read or written
    #[error("Configuration error: {message}")]
    Config {
        message: String,
        #[source]
        source: Option<Box<dyn std::error::Error + Send + Sync>>,
    },
}

impl ConversionError {
    /// Create a hex parsing error for the given input
    pub fn invalid_hex(input: impl Into<String>, reason: impl Into<String>) -> Self {
        Self::InvalidHex {
            input: input.into(),
            reason: reason.into(),
        }
    }

    /// Create a configuration error with context
    pub fn config<E>(message: impl Into<String>, source: E) -> Self
    where
        E: std::error::Error + Send + Sync + 'static,
    {
        Self::Config {
            message: message.into(),
            source: Some(Box::new(source)),
        }
    }

    /// Check if the error came from caller-supplied color input
    pub fn is_input_error(&self) -> bool {
        matches!(
            self,
            ConversionError::RangeViolation { .. } | ConversionError::InvalidHex { .. }
        )
    }

    /// Get user-friendly error description for application display
    pub fn user_message(&self) -> String {
        match self {
            ConversionError::RangeViolation { channel, value } => format!(
                "The {} value {} is not a valid color channel. Use a whole number from 0 to 255.",
                channel, value
            ),
            ConversionError::InvalidHex { .. } => {
                "Could not read the hex color. Use the form #RRGGBB, for example #FFA500.".to_string()
            }
            ConversionError::Config { .. } => {
                "Could not use the configuration file. Please check the path and JSON contents.".to_string()
            }
        }
    }
}
