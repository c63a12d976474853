//! Color decision core
//!
//! This module picks a representative color, decides the contrasting text
//! color and derives the CSS values of a theme. It has no I/O and knows
//! nothing about elements.

pub mod rgb;
pub mod selection;
pub mod contrast;
pub mod style;

pub use rgb::Rgb;
pub use selection::select_most_colorful;
pub use contrast::{text_color_for, TextColor};
pub use style::{HoverStyle, ThemeStyle};
