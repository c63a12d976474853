//! Extractor reading images from the local filesystem
//!
//! Decoding runs on tokio's blocking pool, so a runtime must be active when
//! the returned futures are awaited.

use super::{ColorExtractor, PixelSampler};
use crate::color::Rgb;
use crate::config::SamplingConfig;
use crate::error::{Result, ThemeError};
use crate::image_loader::load_image;
use image::RgbaImage;
use std::path::PathBuf;

/// Extractor treating image references as filesystem paths
#[derive(Debug, Clone, Default)]
pub struct FileExtractor {
    sampler: PixelSampler,
}

impl FileExtractor {
    /// Create an extractor with custom sampling parameters
    pub fn new(config: SamplingConfig) -> Self {
        Self {
            sampler: PixelSampler::new(config),
        }
    }

    async fn load(&self, image: &str) -> Result<RgbaImage> {
        let path = PathBuf::from(image);
        tokio::task::spawn_blocking(move || load_image(&path))
            .await
            .map_err(|e| ThemeError::ProcessingError(format!("Image decode task failed: {}", e)))?
    }
}

impl ColorExtractor for FileExtractor {
    async fn dominant_colors(&self, image: &str) -> Result<Vec<Rgb>> {
        let pixels = self.load(image).await?;
        let palette = self.sampler.prominent_in(&pixels);
        tracing::debug!(image, colors = palette.len(), "sampled prominent colors");
        Ok(palette)
    }

    async fn average_color(&self, image: &str) -> Result<Rgb> {
        let pixels = self.load(image).await?;
        self.sampler
            .average_in(&pixels)
            .ok_or_else(|| ThemeError::EmptyPalette {
                image: image.to_string(),
            })
    }
}
