use std::fmt;

/// Dimensions and pixel mode of a decoded raster.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ImageInfo {
    pub width: u32,
    pub height: u32,
    pub has_alpha: bool,
}

impl ImageInfo {
    pub fn new(width: u32, height: u32, has_alpha: bool) -> Self {
        Self {
            width,
            height,
            has_alpha,
        }
    }

    /// Pixel mode name used in log lines.
    pub fn mode(&self) -> &'static str {
        if self.has_alpha {
            "RGBA"
        } else {
            "RGB"
        }
    }
}

impl fmt::Display for ImageInfo {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}x{}", self.width, self.height)
    }
}

/// Encoded PNG output of one processing step.
#[derive(Debug, Clone, PartialEq)]
pub struct ProcessedIcon {
    pub data: Vec<u8>,
    pub source: ImageInfo,
    pub result: ImageInfo,
    /// Padding or corner radius in pixels, depending on the step.
    pub amount_px: u32,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_mode_follows_alpha() {
        assert_eq!(ImageInfo::new(4, 4, true).mode(), "RGBA");
        assert_eq!(ImageInfo::new(4, 4, false).mode(), "RGB");
        assert_eq!(ImageInfo::new(640, 480, false).to_string(), "640x480");
    }
}
