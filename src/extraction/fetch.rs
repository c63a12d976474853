//! Extractor fetching images over HTTP from the browser

use super::{ColorExtractor, PixelSampler};
use crate::color::Rgb;
use crate::config::SamplingConfig;
use crate::error::{Result, ThemeError};
use crate::image_loader::decode_image;
use image::RgbaImage;
use wasm_bindgen::{JsCast, JsValue};
use wasm_bindgen_futures::JsFuture;
use web_sys::Response;

/// Extractor treating image references as URLs
#[derive(Debug, Clone, Default)]
pub struct FetchExtractor {
    sampler: PixelSampler,
}

impl FetchExtractor {
    /// Create an extractor with custom sampling parameters
    pub fn new(config: SamplingConfig) -> Self {
        Self {
            sampler: PixelSampler::new(config),
        }
    }

    async fn load(&self, url: &str) -> Result<RgbaImage> {
        let bytes = fetch_bytes(url).await?;
        decode_image(&bytes, url)
    }
}

impl ColorExtractor for FetchExtractor {
    async fn dominant_colors(&self, image: &str) -> Result<Vec<Rgb>> {
        let pixels = self.load(image).await?;
        Ok(self.sampler.prominent_in(&pixels))
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

async fn fetch_bytes(url: &str) -> Result<Vec<u8>> {
    let window = web_sys::window()
        .ok_or_else(|| ThemeError::ProcessingError("No window available".into()))?;

    let response = JsFuture::from(window.fetch_with_str(url))
        .await
        .map_err(|e| load_error(url, e))?;
    let response: Response = response.dyn_into().map_err(|e| load_error(url, e))?;

    if !response.ok() {
        return Err(ThemeError::ImageLoadError {
            message: format!("HTTP {} for {}", response.status(), url),
            source: None,
        });
    }

    let buffer = response.array_buffer().map_err(|e| load_error(url, e))?;
    let buffer = JsFuture::from(buffer).await.map_err(|e| load_error(url, e))?;
    Ok(js_sys::Uint8Array::new(&buffer).to_vec())
}

fn load_error(url: &str, err: JsValue) -> ThemeError {
    ThemeError::ImageLoadError {
        message: format!("Failed to fetch {}: {:?}", url, err),
        source: None,
    }
}
