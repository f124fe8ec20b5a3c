//! Derived color representations
//!
//! Provides the conversions from [`RgbColor`] to:
//! - HSL (hue in degrees, saturation and lightness in percent)
//! - CMYK (components unscaled in [0, 1])
//!
//! The two models keep different scaling conventions. [`Hsl::to_unit`] and
//! [`Cmyk::to_percent`] expose the other convention explicitly.

use std::fmt;

use serde::{Deserialize, Serialize};

use super::RgbColor;
use crate::constants::{scale, BLACK_CMYK, DEFAULT_PRECISION};

/// Cylindrical hue/saturation/lightness coordinates
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Hsl {
    /// Hue in degrees, [0, 360)
    pub hue: f64,
    /// Saturation in percent, [0, 100]
    pub saturation: f64,
    /// Lightness in percent, [0, 100]
    pub lightness: f64,
}

impl Hsl {
    /// Same color with saturation and lightness as fractions in [0, 1]
    ///
    /// Hue stays in degrees.
    pub fn to_unit(self) -> Self {
        Self {
            hue: self.hue,
            saturation: self.saturation / scale::PERCENT,
            lightness: self.lightness / scale::PERCENT,
        }
    }
}

impl fmt::Display for Hsl {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let p = f.precision().unwrap_or(DEFAULT_PRECISION);
        write!(
            f,
            "({:.*}, {:.*}%, {:.*}%)",
            p, self.hue, p, self.saturation, p, self.lightness
        )
    }
}

/// Subtractive print coordinates
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Cmyk {
    pub cyan: f64,
    pub magenta: f64,
    pub yellow: f64,
    pub black: f64,
}

impl Cmyk {
    /// Same color with every component scaled to [0, 100]
    pub fn to_percent(self) -> Self {
        Self {
            cyan: self.cyan * scale::PERCENT,
            magenta: self.magenta * scale::PERCENT,
            yellow: self.yellow * scale::PERCENT,
            black: self.black * scale::PERCENT,
        }
    }

    pub fn components(&self) -> [f64; 4] {
        [self.cyan, self.magenta, self.yellow, self.black]
    }
}

impl From<[f64; 4]> for Cmyk {
    fn from([cyan, magenta, yellow, black]: [f64; 4]) -> Self {
        Self {
            cyan,
            magenta,
            yellow,
            black,
        }
    }
}

impl fmt::Display for Cmyk {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let p = f.precision().unwrap_or(DEFAULT_PRECISION);
        write!(
            f,
            "({:.*}, {:.*}, {:.*}, {:.*})",
            p, self.cyan, p, self.magenta, p, self.yellow, p, self.black
        )
    }
}

/// Convert an RGB color to HSL
///
/// Hue sector selection compares the normalized channels with exact equality
/// against the maximum, red first, then green, then blue.
pub fn rgb_to_hsl(color: &RgbColor) -> Hsl {
    let [r, g, b] = color.normalized();

    let max = r.max(g).max(b);
    let min = r.min(g).min(b);
    let delta = max - min;

    let mut hue = 0.0;
    if delta > 0.0 {
        hue = if max == r {
            (g - b) / delta + if g < b { scale::HUE_SECTORS } else { 0.0 }
        } else if max == g {
            (b - r) / delta + 2.0
        } else {
            (r - g) / delta + 4.0
        };
        hue /= scale::HUE_SECTORS;
    }

    let lightness = (max + min) / 2.0;
    // delta == 0 covers black and white, where the denominator is also 0
    let saturation = if delta == 0.0 {
        0.0
    } else {
        // rounding can push the ratio a hair above 1
        (delta / (1.0 - (2.0 * lightness - 1.0).abs())).min(1.0)
    };

    Hsl {
        hue: hue * scale::HUE_DEGREES,
        saturation: saturation * scale::PERCENT,
        lightness: lightness * scale::PERCENT,
    }
}

/// Convert an RGB color to unscaled CMYK
pub fn rgb_to_cmyk(color: &RgbColor) -> Cmyk {
    if color.red() == 0 && color.green() == 0 && color.blue() == 0 {
        return Cmyk::from(BLACK_CMYK);
    }

    let [r, g, b] = color.normalized();

    let k = 1.0 - r.max(g).max(b);
    Cmyk {
        cyan: (1.0 - r - k) / (1.0 - k),
        magenta: (1.0 - g - k) / (1.0 - k),
        yellow: (1.0 - b - k) / (1.0 - k),
        black: k,
    }
}
