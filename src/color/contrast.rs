//! Text color contrast decision based on YIQ luminance

use super::Rgb;
use crate::constants::contrast::YIQ_THRESHOLD_MILLIS;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Foreground color placed on top of a themed background
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TextColor {
    Black,
    White,
}

impl TextColor {
    /// CSS keyword for this color
    pub fn as_css(&self) -> &'static str {
        match self {
            TextColor::Black => "black",
            TextColor::White => "white",
        }
    }
}

impl fmt::Display for TextColor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_css())
    }
}

/// Pick a readable text color for `background`
///
/// Black when the YIQ luminance is at least 128, white otherwise.
pub fn text_color_for(background: Rgb) -> TextColor {
    if background.yiq_millis() >= YIQ_THRESHOLD_MILLIS {
        TextColor::Black
    } else {
        TextColor::White
    }
}
