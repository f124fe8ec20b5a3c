//! Text and JSON reports of a color in every representation
//!
//! This is the presentation layer over the color value. It is the only part
//! of the crate that logs.

use serde::{Deserialize, Serialize};
use std::fmt::Write as _;
use tracing::debug;

use crate::color::{Cmyk, Hsl, RgbColor};
use crate::config::{ReportConfig, ReportFormat};
use crate::{ConversionError, Result};

/// A color together with all of its derived representations
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ColorReport {
    /// Source channels
    pub rgb: RgbColor,
    /// `#RRGGBB` encoding
    pub hex: String,
    /// Hue in degrees, saturation and lightness in percent
    pub hsl: Hsl,
    /// Unscaled CMYK components
    pub cmyk: Cmyk,
}

impl ColorReport {
    pub fn new(rgb: RgbColor) -> Self {
        Self {
            rgb,
            hex: rgb.to_hex(),
            hsl: rgb.to_hsl(),
            cmyk: rgb.to_cmyk(),
        }
    }

    /// Render as three lines: hex, HSL, CMYK
    pub fn to_text(&self, config: &ReportConfig) -> String {
        let p = config.precision;
        let mut out = String::new();
        // Writing into a String cannot fail
        let _ = writeln!(out, "{} in HEX: {}", self.rgb, self.hex);
        let _ = writeln!(out, "{} in HSL: {:.*}", self.rgb, p, self.hsl);
        if config.percent_cmyk {
            let c = self.cmyk.to_percent();
            let _ = writeln!(
                out,
                "{} in CMYK: ({:.*}%, {:.*}%, {:.*}%, {:.*}%)",
                self.rgb, p, c.cyan, p, c.magenta, p, c.yellow, p, c.black
            );
        } else {
            let _ = writeln!(out, "{} in CMYK: {:.*}", self.rgb, p, self.cmyk);
        }
        out
    }
}

impl From<RgbColor> for ColorReport {
    fn from(rgb: RgbColor) -> Self {
        Self::new(rgb)
    }
}

/// Render reports for a list of colors in the configured format
///
/// Text output separates colors with a blank line. JSON output is a single
/// array, even for one color.
pub fn render(colors: &[RgbColor], config: &ReportConfig) -> Result<String> {
    debug!(count = colors.len(), format = ?config.format, "rendering color report");

    let reports: Vec<ColorReport> = colors.iter().copied().map(ColorReport::new).collect();

    match config.format {
        ReportFormat::Text => Ok(reports
            .iter()
            .map(|report| report.to_text(config))
            .collect::<Vec<_>>()
            .join("\n")),
        ReportFormat::Json => serde_json::to_string_pretty(&reports)
            .map_err(|e| ConversionError::config("serializing color report", e)),
    }
}
