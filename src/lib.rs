//! # RGB Conversions
//!
//! An immutable 8-bit RGB color value and pure conversions to other
//! representations:
//! - Hexadecimal `#RRGGBB` text
//! - HSL (hue in degrees, saturation and lightness in percent)
//! - CMYK (unscaled components in [0, 1])
//!
//! Channels are validated once, at construction. Every conversion after that
//! is total.
//!
//! ## Example
//!
//! ```rust
//! use rgb_conversions::RgbColor;
//!
//! let orange = RgbColor::new(255, 165, 0)?;
//! assert_eq!(orange.to_hex(), "#FFA500");
//! assert_eq!(orange.to_string(), "RGB(255, 165, 0)");
//! println!("HSL: {}, CMYK: {}", orange.to_hsl(), orange.to_cmyk());
//! # Ok::<(), rgb_conversions::ConversionError>(())
//! ```

pub mod color;
pub mod config;
pub mod constants;
pub mod error;
pub mod report;

pub use color::{rgb_to_cmyk, rgb_to_hsl, Channel, Cmyk, Hsl, RgbColor};
pub use config::{ReportConfig, ReportFormat};
pub use error::{ConversionError, Result};
pub use report::{render, ColorReport};
