//! Fixed scales and reference values shared by the color conversions

/// Channel range limits
pub mod channel {
    /// Smallest valid channel intensity
    pub const MIN: i64 = 0;

    /// Largest valid channel intensity
    pub const MAX: i64 = 255;

    /// Divisor used to normalize a channel into the unit interval
    pub const SCALE: f64 = 255.0;
}

/// Output scales for derived representations
pub mod scale {
    /// Full turn of the hue wheel in degrees
    pub const HUE_DEGREES: f64 = 360.0;

    /// Number of hue sectors in the hexagonal model
    pub const HUE_SECTORS: f64 = 6.0;

    /// Multiplier from a unit fraction to a percentage
    pub const PERCENT: f64 = 100.0;
}

/// Hex string layout
pub mod hex {
    /// Leading marker of an encoded color
    pub const PREFIX: char = '#';

    /// Total encoded length including the prefix
    pub const ENCODED_LEN: usize = 7;

    /// Hex digits per channel
    pub const DIGITS_PER_CHANNEL: usize = 2;
}

/// CMYK of pure black, returned without evaluating the general formula
pub const BLACK_CMYK: [f64; 4] = [0.0, 0.0, 0.0, 1.0];

/// Default number of decimals used in rendered reports
pub const DEFAULT_PRECISION: usize = 2;
