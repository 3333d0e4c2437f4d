use std::path::{Path, PathBuf};
use std::sync::Arc;
use super::config::{PaddingConfig, RoundingConfig};
use super::error::ApplicationError;
use tracing::info;

use crate::domain::file_storage_trait::FileStorage;
use crate::domain::image::{ImageInfo, ProcessedIcon};
use crate::domain::image_processor_trait::IconProcessor;
use crate::domain::percentage::{CornerRadiusPercent, PaddingPercent};

/// What a finished run reports back to the caller.
#[derive(Debug, Clone, PartialEq)]
pub struct IconSummary {
    pub input: PathBuf,
    pub output: PathBuf,
    pub percent: f64,
    pub source: ImageInfo,
    pub result: ImageInfo,
    /// Padding or corner radius in pixels.
    pub amount_px: u32,
}

pub struct IconService {
    image_processor: Arc<dyn IconProcessor + Send + Sync>,
    file_storage: Arc<dyn FileStorage + Send + Sync>,
}

impl IconService {
    pub fn new(
        image_processor: Arc<dyn IconProcessor + Send + Sync>,
        file_storage: Arc<dyn FileStorage + Send + Sync>,
    ) -> Self {
        Self {
            image_processor,
            file_storage,
        }
    }

    pub fn add_padding(&self, config: &PaddingConfig) -> Result<IconSummary, ApplicationError> {
        let percent = PaddingPercent::new(config.percent)?;
        let image_data = self.read_input(&config.input)?;

        let icon = self.image_processor.add_padding(image_data, percent)?;
        self.file_storage.save_image(&config.output, &icon.data)?;

        info!(
            "padded {} -> {} ({} -> {}, {}px)",
            config.input.display(),
            config.output.display(),
            icon.source,
            icon.result,
            icon.amount_px
        );
        Ok(summarize(&config.input, &config.output, percent.value(), icon))
    }

    pub fn add_rounded_corners(
        &self,
        config: &RoundingConfig,
    ) -> Result<IconSummary, ApplicationError> {
        let percent = CornerRadiusPercent::new(config.percent)?;
        let image_data = self.read_input(&config.input)?;

        let icon = self.image_processor.add_rounded_corners(image_data, percent)?;
        self.file_storage.save_image(&config.output, &icon.data)?;

        info!(
            "rounded {} -> {} ({}, radius {}px)",
            config.input.display(),
            config.output.display(),
            icon.result,
            icon.amount_px
        );
        Ok(summarize(&config.input, &config.output, percent.value(), icon))
    }

    fn read_input(&self, path: &Path) -> Result<Vec<u8>, ApplicationError> {
        if !self.file_storage.exists(path) {
            return Err(ApplicationError::MissingInput {
                path: path.to_path_buf(),
            });
        }
        Ok(self.file_storage.read_image(path)?)
    }
}

fn summarize(
    input: &Path,
    output: &Path,
    percent: f64,
    icon: ProcessedIcon,
) -> IconSummary {
    IconSummary {
        input: input.to_path_buf(),
        output: output.to_path_buf(),
        percent,
        source: icon.source,
        result: icon.result,
        amount_px: icon.amount_px,
    }
}
