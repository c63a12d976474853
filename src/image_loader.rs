//! Image decoding with support for the common web formats
//!
//! This module provides the entry points used by the extractors to turn an
//! image reference into RGBA pixels.
//!
//! ## Supported Formats
//!
//! Via the `image` crate:
//! - JPEG, PNG, GIF (first frame only), WebP, BMP
//!
//! ## Design
//!
//! Everything is converted to 8-bit RGBA so the sampler can skip transparent
//! pixels regardless of the source format.

use crate::error::{Result, ThemeError};
use image::{DynamicImage, ImageReader, RgbaImage};
use std::path::Path;

/// Supported image formats
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ImageFormat {
    /// JPEG image
    Jpeg,
    /// PNG image
    Png,
    /// GIF image (first frame only)
    Gif,
    /// WebP image
    WebP,
    /// BMP image
    Bmp,
}

impl ImageFormat {
    /// Detect format from file extension
    pub fn from_extension(path: &Path) -> Option<ImageFormat> {
        let ext = path.extension()?.to_str()?.to_lowercase();
        match ext.as_str() {
            "jpg" | "jpeg" => Some(ImageFormat::Jpeg),
            "png" => Some(ImageFormat::Png),
            "gif" => Some(ImageFormat::Gif),
            "webp" => Some(ImageFormat::WebP),
            "bmp" => Some(ImageFormat::Bmp),
            _ => None,
        }
    }

    /// Matching decoder format of the `image` crate
    pub fn decoder_format(&self) -> image::ImageFormat {
        match self {
            ImageFormat::Jpeg => image::ImageFormat::Jpeg,
            ImageFormat::Png => image::ImageFormat::Png,
            ImageFormat::Gif => image::ImageFormat::Gif,
            ImageFormat::WebP => image::ImageFormat::WebP,
            ImageFormat::Bmp => image::ImageFormat::Bmp,
        }
    }
}

/// Load an image from disk as RGBA pixels
///
/// # Errors
///
/// Returns `ThemeError::ImageLoadError` if:
/// - The extension is not a supported format
/// - File cannot be opened
/// - Decoding fails
///
/// # Example
///
/// ```rust,no_run
/// use chrome_theme::image_loader::load_image;
/// use std::path::Path;
///
/// let pixels = load_image(Path::new("cover.png"))?;
/// println!("Loaded image: {}x{}", pixels.width(), pixels.height());
/// # Ok::<(), chrome_theme::ThemeError>(())
/// ```
pub fn load_image(path: &Path) -> Result<RgbaImage> {
    let format = ImageFormat::from_extension(path).ok_or_else(|| ThemeError::ImageLoadError {
        message: format!("Unknown image format for file: {}", path.display()),
        source: None,
    })?;

    let mut reader = ImageReader::open(path).map_err(|e| {
        ThemeError::image_load(format!("Failed to open image file: {}", path.display()), e)
    })?;
    reader.set_format(format.decoder_format());

    let img: DynamicImage = reader.decode().map_err(|e| {
        ThemeError::image_load(format!("Failed to decode image: {}", path.display()), e)
    })?;

    Ok(img.to_rgba8())
}

/// Decode an in-memory image as RGBA pixels, guessing the format from its content
pub fn decode_image(bytes: &[u8], origin: &str) -> Result<RgbaImage> {
    let img = image::load_from_memory(bytes).map_err(|e| {
        ThemeError::image_load(format!("Failed to decode image: {}", origin), e)
    })?;
    Ok(img.to_rgba8())
}

/// Get list of all supported file extensions
pub fn supported_extensions() -> &'static [&'static str] {
    &["jpg", "jpeg", "png", "gif", "webp", "bmp"]
}

/// Check if a file extension is supported
pub fn is_supported_extension(ext: &str) -> bool {
    let ext_lower = ext.to_lowercase();
    supported_extensions().contains(&ext_lower.as_str())
}
