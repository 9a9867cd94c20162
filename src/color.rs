//! Color type and palette math.
//!
//! `Rgb` is the value type the whole pipeline works in. The tone
//! adjustments (darken/lighten/blend) operate directly on channels in
//! `f64` with truncating casts; saturation changes go through a transient
//! HLS view backed by the `palette` crate.

use std::fmt;
use std::str::FromStr;

use crate::error::{Result, ThemeError};

/// An RGB color value.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct Rgb {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

/// A transient HLS view of an [`Rgb`] value.
///
/// All three components are fractions in [0,1]; hue is a fraction of a
/// full turn, not degrees. Never persisted: convert, adjust, convert back.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Hls {
    pub hue: f32,
    pub lightness: f32,
    pub saturation: f32,
}

impl Rgb {
    /// Create a new color from RGB components.
    pub const fn new(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }

    /// Parse a `#rrggbb` hex color string. The leading `#` is optional and
    /// digits may be in either case.
    pub fn from_hex(s: &str) -> Result<Self> {
        let s = s.trim();
        let hex = s.strip_prefix('#').unwrap_or(s);

        if hex.len() != 6 || !hex.is_ascii() {
            return Err(ThemeError::Parse {
                message: format!("Invalid hex color: {}", s),
                help: Some("Use #rrggbb format".to_string()),
            });
        }

        let r = parse_hex_byte(&hex[0..2])?;
        let g = parse_hex_byte(&hex[2..4])?;
        let b = parse_hex_byte(&hex[4..6])?;
        Ok(Self::new(r, g, b))
    }

    /// Scale every channel toward 0 by `amount`.
    ///
    /// An amount outside [0,1] is treated as 0, making the call a no-op.
    pub fn darken(self, amount: f64) -> Self {
        let amount = clamp_amount(amount);
        Self::new(
            (f64::from(self.r) * (1.0 - amount)) as u8,
            (f64::from(self.g) * (1.0 - amount)) as u8,
            (f64::from(self.b) * (1.0 - amount)) as u8,
        )
    }

    /// Move every channel toward 255 by `amount`.
    ///
    /// Same out-of-range handling as [`darken`](Self::darken).
    pub fn lighten(self, amount: f64) -> Self {
        let amount = clamp_amount(amount);
        Self::new(
            (f64::from(self.r) + (255.0 - f64::from(self.r)) * amount) as u8,
            (f64::from(self.g) + (255.0 - f64::from(self.g)) * amount) as u8,
            (f64::from(self.b) + (255.0 - f64::from(self.b)) * amount) as u8,
        )
    }

    /// Unweighted 50/50 average with another color, channel-wise,
    /// truncating to integers.
    pub fn blend(self, other: Self) -> Self {
        Self::new(
            ((u16::from(self.r) + u16::from(other.r)) / 2) as u8,
            ((u16::from(self.g) + u16::from(other.g)) / 2) as u8,
            ((u16::from(self.b) + u16::from(other.b)) / 2) as u8,
        )
    }

    /// Overwrite the HLS saturation component with `amount` directly.
    ///
    /// Not a multiplicative scale. An amount outside [0,1] becomes 0,
    /// which fully desaturates the color.
    pub fn saturate(self, amount: f64) -> Self {
        let amount = clamp_amount(amount);
        let mut hls = self.to_hls();
        hls.saturation = amount as f32;
        hls.to_rgb()
    }

    /// Convert to the normalized HLS view.
    ///
    /// Achromatic colors yield hue 0 and saturation 0.
    pub fn to_hls(self) -> Hls {
        use palette::{Hsl, IntoColor, Srgb};

        let rgb: Srgb<f32> = Srgb::new(
            f32::from(self.r) / 255.0,
            f32::from(self.g) / 255.0,
            f32::from(self.b) / 255.0,
        );
        let hsl: Hsl = rgb.into_color();

        Hls {
            hue: hsl.hue.into_positive_degrees() / 360.0,
            lightness: hsl.lightness,
            saturation: hsl.saturation,
        }
    }
}

impl Hls {
    /// Convert back to RGB, truncating to integer channels.
    pub fn to_rgb(self) -> Rgb {
        use palette::{Hsl, IntoColor, Srgb};

        let hsl = Hsl::new(self.hue * 360.0, self.saturation, self.lightness);
        let rgb: Srgb<f32> = hsl.into_color();

        Rgb::new(
            (rgb.red * 255.0) as u8,
            (rgb.green * 255.0) as u8,
            (rgb.blue * 255.0) as u8,
        )
    }
}

impl FromStr for Rgb {
    type Err = ThemeError;

    fn from_str(s: &str) -> Result<Self> {
        Self::from_hex(s)
    }
}

impl fmt::Display for Rgb {
    /// Lowercase `#rrggbb`, the form every artifact consumer parses.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{:02x}{:02x}{:02x}", self.r, self.g, self.b)
    }
}

/// Out-of-range adjustment amounts collapse to 0 rather than failing.
fn clamp_amount(amount: f64) -> f64 {
    if (0.0..=1.0).contains(&amount) {
        amount
    } else {
        0.0
    }
}

/// Parse a two-character hex byte.
fn parse_hex_byte(s: &str) -> Result<u8> {
    u8::from_str_radix(s, 16).map_err(|_| ThemeError::Parse {
        message: format!("Invalid hex byte: {}", s),
        help: None,
    })
}
