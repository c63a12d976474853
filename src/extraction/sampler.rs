//! Pixel sampling for prominent and average colors
//!
//! Works on raw RGBA bytes so the same code serves every extractor:
//! - Every `sample`-th pixel is visited
//! - Fully transparent pixels are ignored
//! - Prominent colors are grouped by rounding each channel to a multiple of
//!   `group` and ranked by occurrence
//! - The average is a plain per-channel mean, rounded to the nearest integer

use crate::color::Rgb;
use crate::config::SamplingConfig;
use crate::constants::sampling::CHANNEL_MAX;
use image::RgbaImage;
use std::collections::HashMap;

const RGBA_CHANNELS: usize = 4;

/// Sampler turning decoded pixels into candidate colors
#[derive(Debug, Clone, Default)]
pub struct PixelSampler {
    config: SamplingConfig,
}

impl PixelSampler {
    /// Create a sampler with the given parameters
    ///
    /// Zero `group` or `sample` values are treated as 1.
    pub fn new(config: SamplingConfig) -> Self {
        Self { config }
    }

    /// Sampling parameters in use
    pub fn config(&self) -> &SamplingConfig {
        &self.config
    }

    /// Most frequent grouped colors of an image, most frequent first
    pub fn prominent_in(&self, image: &RgbaImage) -> Vec<Rgb> {
        self.prominent(image.as_raw())
    }

    /// Average color of an image, `None` when no opaque pixel was visited
    pub fn average_in(&self, image: &RgbaImage) -> Option<Rgb> {
        self.average(image.as_raw())
    }

    /// Most frequent grouped colors of RGBA bytes, most frequent first
    ///
    /// Colors with equal counts keep the order in which they were first seen.
    pub fn prominent(&self, rgba: &[u8]) -> Vec<Rgb> {
        let group = self.config.group.max(1);
        let mut counts: HashMap<Rgb, (usize, usize)> = HashMap::new();

        for (seen, [r, g, b]) in self.visit(rgba).enumerate() {
            let color = Rgb::new(quantize(r, group), quantize(g, group), quantize(b, group));
            counts.entry(color).or_insert((0, seen)).0 += 1;
        }

        let mut ranked: Vec<(Rgb, (usize, usize))> = counts.into_iter().collect();
        ranked.sort_by(|(_, (count_a, first_a)), (_, (count_b, first_b))| {
            count_b.cmp(count_a).then(first_a.cmp(first_b))
        });

        ranked
            .into_iter()
            .take(self.config.amount)
            .map(|(color, _)| color)
            .collect()
    }

    /// Average color of RGBA bytes, `None` when no opaque pixel was visited
    pub fn average(&self, rgba: &[u8]) -> Option<Rgb> {
        let mut sums = [0u64; 3];
        let mut count = 0u64;

        for pixel in self.visit(rgba) {
            for (sum, channel) in sums.iter_mut().zip(pixel) {
                *sum += u64::from(channel);
            }
            count += 1;
        }

        if count == 0 {
            return None;
        }

        let [r, g, b] = sums.map(|sum| ((sum + count / 2) / count) as u8);
        Some(Rgb::new(r, g, b))
    }

    /// Visited opaque-enough pixels as `[r, g, b]`
    fn visit<'a>(&self, rgba: &'a [u8]) -> impl Iterator<Item = [u8; 3]> + 'a {
        rgba.chunks_exact(RGBA_CHANNELS)
            .step_by(self.config.sample.max(1))
            .filter(|pixel| pixel[3] > 0)
            .map(|pixel| [pixel[0], pixel[1], pixel[2]])
    }
}

/// Round `channel` to the nearest multiple of `group`, capped at 255
fn quantize(channel: u8, group: u8) -> u8 {
    let group = u16::from(group);
    let rounded = (u16::from(channel) + group / 2) / group * group;
    rounded.min(CHANNEL_MAX) as u8
}
