//! The 8-bit RGB color value
//!
//! [`RgbColor`] is the only validated type in the crate. Construction checks
//! every channel once; all conversions afterwards assume the channels are in
//! range and cannot fail.

use std::fmt;
use std::str::FromStr;

use palette::Srgb;
use serde::{Deserialize, Serialize};

use super::conversion::{rgb_to_cmyk, rgb_to_hsl, Cmyk, Hsl};
use crate::constants::{channel, hex};
use crate::{ConversionError, Result};

/// One of the three additive color components
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Channel {
    Red,
    Green,
    Blue,
}

impl Channel {
    /// Channels in encoding order
    pub const ALL: [Channel; 3] = [Channel::Red, Channel::Green, Channel::Blue];

    pub fn name(self) -> &'static str {
        match self {
            Channel::Red => "red",
            Channel::Green => "green",
            Channel::Blue => "blue",
        }
    }
}

impl fmt::Display for Channel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Immutable color with three 8-bit channel intensities
///
/// Equality is structural over the three channels. Instances are `Copy`
/// and carry no interior state, so they can be shared freely across threads.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "RawChannels", into = "RawChannels")]
pub struct RgbColor {
    red: u8,
    green: u8,
    blue: u8,
}

/// Unvalidated wire form used by serde
#[derive(Serialize, Deserialize)]
struct RawChannels {
    red: i64,
    green: i64,
    blue: i64,
}

impl TryFrom<RawChannels> for RgbColor {
    type Error = ConversionError;

    fn try_from(raw: RawChannels) -> Result<Self> {
        RgbColor::new(raw.red, raw.green, raw.blue)
    }
}

impl From<RgbColor> for RawChannels {
    fn from(color: RgbColor) -> Self {
        Self {
            red: color.red.into(),
            green: color.green.into(),
            blue: color.blue.into(),
        }
    }
}

impl RgbColor {
    /// Build a color from three integers
    ///
    /// # Errors
    ///
    /// Returns [`ConversionError::RangeViolation`] for the first channel,
    /// checked red then green then blue, that lies outside 0..=255.
    pub fn new(red: i64, green: i64, blue: i64) -> Result<Self> {
        Ok(Self {
            red: checked_channel(Channel::Red, red)?,
            green: checked_channel(Channel::Green, green)?,
            blue: checked_channel(Channel::Blue, blue)?,
        })
    }

    /// Build a color from channels that are already bytes
    pub const fn from_channels(red: u8, green: u8, blue: u8) -> Self {
        Self { red, green, blue }
    }

    pub const fn red(&self) -> u8 {
        self.red
    }

    pub const fn green(&self) -> u8 {
        self.green
    }

    pub const fn blue(&self) -> u8 {
        self.blue
    }

    /// Value of a single channel
    pub const fn channel(&self, channel: Channel) -> u8 {
        match channel {
            Channel::Red => self.red,
            Channel::Green => self.green,
            Channel::Blue => self.blue,
        }
    }

    /// Encode as `#RRGGBB` with uppercase digits
    pub fn to_hex(&self) -> String {
        format!("#{:02X}{:02X}{:02X}", self.red, self.green, self.blue)
    }

    /// Decode a `#RRGGBB` string; the `#` is optional and digits may be either case
    ///
    /// # Errors
    ///
    /// Returns [`ConversionError::InvalidHex`] if the input is not exactly six
    /// hex digits after the optional prefix.
    pub fn from_hex(input: &str) -> Result<Self> {
        let digits = input.strip_prefix(hex::PREFIX).unwrap_or(input);
        let expected = hex::ENCODED_LEN - 1;
        if digits.len() != expected {
            return Err(ConversionError::invalid_hex(
                input,
                format!("expected {} hex digits, got {}", expected, digits.len()),
            ));
        }
        if let Some(bad) = digits.chars().find(|c| !c.is_ascii_hexdigit()) {
            return Err(ConversionError::invalid_hex(
                input,
                format!("unexpected character {:?}", bad),
            ));
        }

        let pair = |index: usize| {
            let start = index * hex::DIGITS_PER_CHANNEL;
            u8::from_str_radix(&digits[start..start + hex::DIGITS_PER_CHANNEL], 16)
                .map_err(|e| ConversionError::invalid_hex(input, e.to_string()))
        };

        Ok(Self::from_channels(pair(0)?, pair(1)?, pair(2)?))
    }

    /// Hue in degrees, saturation and lightness in percent
    pub fn to_hsl(&self) -> Hsl {
        rgb_to_hsl(self)
    }

    /// Unscaled cyan, magenta, yellow and black components
    pub fn to_cmyk(&self) -> Cmyk {
        rgb_to_cmyk(self)
    }

    /// Channels divided by 255
    pub(crate) fn normalized(&self) -> [f64; 3] {
        [
            f64::from(self.red) / channel::SCALE,
            f64::from(self.green) / channel::SCALE,
            f64::from(self.blue) / channel::SCALE,
        ]
    }
}

fn checked_channel(which: Channel, value: i64) -> Result<u8> {
    if (channel::MIN..=channel::MAX).contains(&value) {
        // In range, so the narrowing is lossless
        Ok(value as u8)
    } else {
        Err(ConversionError::RangeViolation {
            channel: which,
            value,
        })
    }
}

impl fmt::Display for RgbColor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "RGB({}, {}, {})", self.red, self.green, self.blue)
    }
}

impl FromStr for RgbColor {
    type Err = ConversionError;

    fn from_str(s: &str) -> Result<Self> {
        Self::from_hex(s.trim())
    }
}

impl From<Srgb<u8>> for RgbColor {
    fn from(srgb: Srgb<u8>) -> Self {
        Self::from_channels(srgb.red, srgb.green, srgb.blue)
    }
}

impl From<RgbColor> for Srgb<u8> {
    fn from(color: RgbColor) -> Self {
        Srgb::new(color.red, color.green, color.blue)
    }
}
