use crate::application::config::{
    PaddingConfig, RoundingConfig, DEFAULT_INPUT_FILE, DEFAULT_PADDED_OUTPUT_FILE,
    DEFAULT_ROUNDED_OUTPUT_FILE,
};
use crate::application::error::ApplicationError;
use crate::application::icon_service::{IconService, IconSummary};
use crate::domain::percentage::{CornerRadiusPercent, PaddingPercent};
use crate::infrastructure::file_storage::LocalFileStorage;
use crate::infrastructure::image_processor::DefaultIconProcessor;
use clap::Parser;
use std::path::PathBuf;
use std::sync::Arc;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

/// Add transparent padding around an icon so the host platform's corner mask has room.
#[derive(Parser, Debug)]
#[command(name = "add_padding", version, about, long_about = None)]
pub struct PaddingArgs {
    /// Input image path.
    #[arg(short, long, default_value = DEFAULT_INPUT_FILE, value_name = "PATH")]
    pub input: PathBuf,

    /// Output PNG path.
    #[arg(short, long, default_value = DEFAULT_PADDED_OUTPUT_FILE, value_name = "PATH")]
    pub output: PathBuf,

    /// Padding as a fraction of the larger side, in (0, 1].
    #[arg(short, long, default_value_t = PaddingPercent::DEFAULT, value_name = "FLOAT")]
    pub percent: f64,

    /// Enable debug logging.
    #[arg(short, long)]
    pub verbose: bool,
}

impl From<PaddingArgs> for PaddingConfig {
    fn from(args: PaddingArgs) -> Self {
        Self {
            input: args.input,
            output: args.output,
            percent: args.percent,
        }
    }
}

/// Round the corners of an icon by replacing its alpha channel with a rounded-rectangle mask.
#[derive(Parser, Debug)]
#[command(name = "create_rounded_icon", version, about, long_about = None)]
pub struct RoundingArgs {
    /// Input image path.
    #[arg(short, long, default_value = DEFAULT_INPUT_FILE, value_name = "PATH")]
    pub input: PathBuf,

    /// Output PNG path.
    #[arg(short, long, default_value = DEFAULT_ROUNDED_OUTPUT_FILE, value_name = "PATH")]
    pub output: PathBuf,

    /// Corner radius as a fraction of the smaller side, in [0, 0.5).
    #[arg(short, long, default_value_t = CornerRadiusPercent::DEFAULT, value_name = "FLOAT")]
    pub percent: f64,

    /// Enable debug logging.
    #[arg(short, long)]
    pub verbose: bool,
}

impl From<RoundingArgs> for RoundingConfig {
    fn from(args: RoundingArgs) -> Self {
        Self {
            input: args.input,
            output: args.output,
            percent: args.percent,
        }
    }
}

/// Installs the stderr log subscriber. `RUST_LOG` wins over `verbose`.
pub fn init_logging(verbose: bool) {
    let log_level = if verbose { "debug" } else { "info" };
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| format!("create_app_icon={log_level}").into()),
        )
        .with(
            tracing_subscriber::fmt::layer()
                .with_target(false)
                .with_writer(std::io::stderr),
        )
        .init();
}

fn default_service() -> IconService {
    IconService::new(
        Arc::new(DefaultIconProcessor::new()),
        Arc::new(LocalFileStorage::new()),
    )
}

pub fn run_add_padding(args: PaddingArgs) -> Result<IconSummary, ApplicationError> {
    let config = PaddingConfig::from(args);
    let summary = default_service().add_padding(&config)?;
    for line in padding_report(&summary) {
        println!("{}", line);
    }
    Ok(summary)
}

pub fn run_add_rounded_corners(args: RoundingArgs) -> Result<IconSummary, ApplicationError> {
    let config = RoundingConfig::from(args);
    let summary = default_service().add_rounded_corners(&config)?;
    for line in rounding_report(&summary) {
        println!("{}", line);
    }
    Ok(summary)
}

pub fn padding_report(summary: &IconSummary) -> [String; 2] {
    [
        format!(
            "✓ Added {:.1}% padding: {} -> {}",
            summary.percent * 100.0,
            summary.input.display(),
            summary.output.display()
        ),
        format!("  Original: {}, New: {}", summary.source, summary.result),
    ]
}

pub fn rounding_report(summary: &IconSummary) -> [String; 2] {
    [
        format!(
            "✓ Applied rounded corners (radius: {}px): {} -> {}",
            summary.amount_px,
            summary.input.display(),
            summary.output.display()
        ),
        format!(
            "  Size: {}, Corner radius: {}px ({:.1}%)",
            summary.result,
            summary.amount_px,
            summary.percent * 100.0
        ),
    ]
}
