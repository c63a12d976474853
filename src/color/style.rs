//! Style derivation: turns a chosen color into the CSS values applied to elements
//!
//! This is a pure function of the color and the style configuration, so the
//! same `ThemeStyle` can be applied through any element binding.

use super::{text_color_for, Rgb, TextColor};
use crate::config::{HoverNotation, StyleConfig};
use serde::{Deserialize, Serialize};

/// Background values swapped in and out by the pointer handlers
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct HoverStyle {
    /// Background while the pointer is over the element
    pub enter: String,
    /// Background restored when the pointer leaves
    pub leave: String,
}

/// Complete theme for one color
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ThemeStyle {
    /// Source color
    pub color: Rgb,
    /// Hexadecimal form of `color`
    pub hex: String,
    /// `background-color` value
    pub background: String,
    /// `color` value
    pub text: TextColor,
    /// `transition` value
    pub transition: String,
    /// Pointer enter/leave backgrounds
    pub hover: HoverStyle,
}

impl ThemeStyle {
    /// Derive every style value from `color`
    pub fn derive(color: Rgb, config: &StyleConfig) -> Self {
        let background = color.to_css();
        Self {
            color,
            hex: color.to_hex(),
            text: text_color_for(color),
            transition: config.transition.clone(),
            hover: HoverStyle {
                enter: hover_background(color, config),
                leave: background.clone(),
            },
            background,
        }
    }
}

fn hover_background(color: Rgb, config: &StyleConfig) -> String {
    let Rgb { r, g, b } = color;
    let alpha = config.hover_alpha;
    match config.hover_notation {
        HoverNotation::Rgba => format!("rgba({r}, {g}, {b}, {alpha})"),
        HoverNotation::Legacy => format!("rgb({r}, {g}, {b}, {alpha})"),
    }
}
