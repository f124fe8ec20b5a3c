//! Color value and conversion module
//!
//! This module holds the validated RGB color value and the conversions
//! from it to hex, HSL and CMYK representations.

pub mod conversion;
pub mod rgb;

pub use conversion::{rgb_to_cmyk, rgb_to_hsl, Cmyk, Hsl};
pub use rgb::{Channel, RgbColor};
