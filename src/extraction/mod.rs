//! Color extraction capability
//!
//! The theme applier only needs two questions answered about an image: which
//! colors dominate it, and what its average color is. Both are asynchronous
//! since loading the image is the one suspension point of a theme update.

pub mod sampler;
#[cfg(not(target_arch = "wasm32"))]
pub mod file;
#[cfg(target_arch = "wasm32")]
pub mod fetch;

use crate::color::Rgb;
use crate::error::Result;
use std::future::Future;

pub use sampler::PixelSampler;
#[cfg(not(target_arch = "wasm32"))]
pub use file::FileExtractor;
#[cfg(target_arch = "wasm32")]
pub use fetch::FetchExtractor;

/// Source of representative colors for an image reference
pub trait ColorExtractor {
    /// Ranked representative colors of `image`, most prominent first
    fn dominant_colors(&self, image: &str) -> impl Future<Output = Result<Vec<Rgb>>>;

    /// Averaged color of `image`
    fn average_color(&self, image: &str) -> impl Future<Output = Result<Rgb>>;
}

/// Extractor returning fixed colors regardless of the image reference
#[derive(Debug, Clone, PartialEq)]
pub struct StaticExtractor {
    palette: Vec<Rgb>,
    average: Rgb,
}

impl StaticExtractor {
    /// Create an extractor answering with `palette` and `average`
    pub fn new(palette: Vec<Rgb>, average: Rgb) -> Self {
        Self { palette, average }
    }
}

impl ColorExtractor for StaticExtractor {
    async fn dominant_colors(&self, _image: &str) -> Result<Vec<Rgb>> {
        Ok(self.palette.clone())
    }

    async fn average_color(&self, _image: &str) -> Result<Rgb> {
        Ok(self.average)
    }
}
