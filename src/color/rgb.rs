//! RGB triple used throughout the theme pipeline
//!
//! Provides the plain 8-bit color value handed out by extractors, together
//! with the small amount of arithmetic the selection and contrast steps need:
//! - Channel sum (the "colorfulness" proxy)
//! - YIQ luminance
//! - CSS and hexadecimal rendering
//! - Interop with `palette::Srgb<u8>`

use crate::constants::contrast::YIQ_WEIGHTS;
use palette::Srgb;
use serde::{Deserialize, Serialize};
use std::fmt;

/// An opaque 8-bit RGB color
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(from = "[u8; 3]", into = "[u8; 3]")]
pub struct Rgb {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl Rgb {
    /// Pure white, which is never picked as a dominant color
    pub const WHITE: Rgb = Rgb::new(255, 255, 255);

    /// Pure black
    pub const BLACK: Rgb = Rgb::new(0, 0, 0);

    /// Create a color from its three channels
    pub const fn new(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }

    /// Sum of the three channels, in `[0, 765]`
    pub fn channel_sum(&self) -> u16 {
        u16::from(self.r) + u16::from(self.g) + u16::from(self.b)
    }

    /// Whether this is exactly `[255, 255, 255]`
    pub fn is_white(&self) -> bool {
        *self == Self::WHITE
    }

    /// YIQ luminance scaled by 1000, i.e. `299r + 587g + 114b`
    ///
    /// Kept as an integer so the `>= 128` threshold is decided exactly.
    pub fn yiq_millis(&self) -> u32 {
        let [wr, wg, wb] = YIQ_WEIGHTS;
        u32::from(self.r) * wr + u32::from(self.g) * wg + u32::from(self.b) * wb
    }

    /// YIQ luminance, `(299r + 587g + 114b) / 1000`
    pub fn yiq(&self) -> f64 {
        f64::from(self.yiq_millis()) / 1000.0
    }

    /// CSS functional notation, e.g. `rgb(250, 0, 0)`
    pub fn to_css(&self) -> String {
        format!("rgb({}, {}, {})", self.r, self.g, self.b)
    }

    /// Lowercase hexadecimal notation, e.g. `#fa0000`
    pub fn to_hex(&self) -> String {
        format!("#{:x}", Srgb::<u8>::from(*self))
    }
}

impl fmt::Display for Rgb {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[{}, {}, {}]", self.r, self.g, self.b)
    }
}

impl From<[u8; 3]> for Rgb {
    fn from([r, g, b]: [u8; 3]) -> Self {
        Self::new(r, g, b)
    }
}

impl From<Rgb> for [u8; 3] {
    fn from(color: Rgb) -> Self {
        [color.r, color.g, color.b]
    }
}

impl From<Srgb<u8>> for Rgb {
    fn from(color: Srgb<u8>) -> Self {
        Self::new(color.red, color.green, color.blue)
    }
}

impl From<Rgb> for Srgb<u8> {
    fn from(color: Rgb) -> Self {
        Srgb::new(color.r, color.g, color.b)
    }
}
