use std::path::PathBuf;

use crate::domain::percentage::{CornerRadiusPercent, PaddingPercent};

pub const DEFAULT_INPUT_FILE: &str = "Gemini_Generated_Image_x2hc1fx2hc1fx2hc.png";
pub const DEFAULT_PADDED_OUTPUT_FILE: &str = "icon_with_padding.png";
pub const DEFAULT_ROUNDED_OUTPUT_FILE: &str = "icon_rounded.png";

/// Job description for the padding step. `percent` is validated when the job runs.
#[derive(Debug, Clone, PartialEq)]
pub struct PaddingConfig {
    pub input: PathBuf,
    pub output: PathBuf,
    pub percent: f64,
}

impl Default for PaddingConfig {
    fn default() -> Self {
        Self {
            input: PathBuf::from(DEFAULT_INPUT_FILE),
            output: PathBuf::from(DEFAULT_PADDED_OUTPUT_FILE),
            percent: PaddingPercent::DEFAULT,
        }
    }
}

/// Job description for the corner-rounding step.
#[derive(Debug, Clone, PartialEq)]
pub struct RoundingConfig {
    pub input: PathBuf,
    pub output: PathBuf,
    pub percent: f64,
}

impl Default for RoundingConfig {
    fn default() -> Self {
        Self {
            input: PathBuf::from(DEFAULT_INPUT_FILE),
            output: PathBuf::from(DEFAULT_ROUNDED_OUTPUT_FILE),
            percent: CornerRadiusPercent::DEFAULT,
        }
    }
}
