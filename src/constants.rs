//! Default values and thresholds for theme extraction
//!
//! This module contains compile-time constants shared by the sampler, the
//! contrast decision and the style defaults.

/// Pixel sampling defaults used by the prominent and average extractors
pub mod sampling {
    /// Number of prominent colors returned
    pub const DEFAULT_AMOUNT: usize = 3;

    /// Channel quantization step when grouping prominent colors
    pub const DEFAULT_GROUP: u8 = 20;

    /// Only every n-th pixel is visited
    pub const DEFAULT_SAMPLE: usize = 10;

    /// Upper bound of a quantized channel
    pub const CHANNEL_MAX: u16 = 255;
}

/// Contrast decision thresholds
pub mod contrast {
    /// YIQ luminance at or above which text is rendered black
    pub const YIQ_THRESHOLD: u32 = 128;

    /// `YIQ_THRESHOLD` in the 1000-scaled integer domain
    pub const YIQ_THRESHOLD_MILLIS: u32 = YIQ_THRESHOLD * 1000;

    /// Channel weights of the YIQ luminance, summing to 1000
    pub const YIQ_WEIGHTS: [u32; 3] = [299, 587, 114];
}

/// Style defaults
pub mod style {
    /// CSS transition applied to themed elements
    pub const DEFAULT_TRANSITION: &str = "background-color 0.3s ease";

    /// Background opacity while hovered
    pub const DEFAULT_HOVER_ALPHA: f64 = 0.7;

    /// Style properties written on every themed element
    pub const BACKGROUND_PROPERTY: &str = "background-color";
    pub const TEXT_PROPERTY: &str = "color";
    pub const TRANSITION_PROPERTY: &str = "transition";
}
