//! # Chrome Theme
//!
//! A Rust crate for theming page elements with the colors of an image.
//!
//! This library:
//! - Samples the prominent or average colors of an image
//! - Picks the most colorful prominent color, never pure white
//! - Chooses black or white text from the YIQ luminance of that color
//! - Styles every target element with the color, a background transition
//!   and a translucent hover state
//!
//! Element access goes through the [`target`] traits. An in-memory document
//! ships with the crate; on `wasm32` the [`dom`] module binds the browser DOM
//! and exports `WebTheme` to JavaScript.
//!
//! ## Example
//!
//! ```rust,no_run
//! use chrome_theme::{FileExtractor, MemoryDocument, ThemeApplier};
//!
//! # async fn run() -> chrome_theme::Result<()> {
//! let document = MemoryDocument::new();
//! let card = document.add_element("div", "card");
//!
//! let mut theme = ThemeApplier::new(document, FileExtractor::default());
//! theme.set_image("cover.png");
//! theme.set_targets("card")?;
//!
//! let style = theme.select_dominant_color().await?;
//! println!("Background: {}, text: {}", style.background, style.text);
//! # Ok(())
//! # }
//! ```

pub mod error;
pub mod constants;
pub mod config;
pub mod color;
pub mod image_loader;
pub mod extraction;
pub mod target;
pub mod applier;
#[cfg(target_arch = "wasm32")]
pub mod dom;

pub use applier::ThemeApplier;
pub use color::{Rgb, TextColor, ThemeStyle};
pub use config::{HoverNotation, SamplingConfig, StyleConfig, ThemeConfig};
pub use error::{Result, ThemeError};
pub use extraction::{ColorExtractor, PixelSampler, StaticExtractor};
#[cfg(not(target_arch = "wasm32"))]
pub use extraction::FileExtractor;
#[cfg(target_arch = "wasm32")]
pub use extraction::FetchExtractor;
pub use target::{Document, MemoryDocument, MemoryElement, NodeCollection, ThemeElement};
