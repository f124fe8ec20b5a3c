//! Configuration for rendering color reports.
//!
//! Configuration can be loaded from JSON files or constructed programmatically:
//!
//! ```no_run
//! use rgb_conversions::ReportConfig;
//! use std::path::Path;
//!
//! // Load from file
//! let config = ReportConfig::from_json_file(Path::new("report.json"))?;
//!
//! // Or use defaults
//! let config = ReportConfig::default();
//! # Ok::<(), rgb_conversions::ConversionError>(())
//! ```
//!
//! Every field has a default, so a file only needs the settings it changes.

use serde::{Deserialize, Serialize};
use std::path::Path;
use tracing::info;

use crate::constants::DEFAULT_PRECISION;
use crate::{ConversionError, Result};

/// Output layout of a rendered report
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ReportFormat {
    /// One line per representation
    #[default]
    Text,
    /// Pretty-printed JSON document
    Json,
}

/// Report rendering parameters.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ReportConfig {
    /// Decimals shown for HSL and CMYK values in text output
    pub precision: usize,

    /// Text or JSON output
    pub format: ReportFormat,

    /// Show CMYK scaled to percent instead of unscaled [0, 1]
    pub percent_cmyk: bool,
}

impl Default for ReportConfig {
    fn default() -> Self {
        Self {
            precision: DEFAULT_PRECISION,
            format: ReportFormat::Text,
            percent_cmyk: false,
        }
    }
}

impl ReportConfig {
    /// Load configuration from JSON file
    pub fn from_json_file(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path)
            .map_err(|e| ConversionError::config(format!("reading {}", path.display()), e))?;
        let config: Self = serde_json::from_str(&content)
            .map_err(|e| ConversionError::config(format!("parsing {}", path.display()), e))?;
        info!(path = %path.display(), ?config, "loaded report config");
        Ok(config)
    }

    /// Save configuration to JSON file
    pub fn to_json_file(&self, path: &Path) -> Result<()> {
        let json = serde_json::to_string_pretty(self)
            .map_err(|e| ConversionError::config("serializing report config", e))?;
        std::fs::write(path, json)
            .map_err(|e| ConversionError::config(format!("writing {}", path.display()), e))?;
        info!(path = %path.display(), "saved report config");
        Ok(())
    }
}
