//! HuePick - command-line color picker
//!
//! Converts colors between models, renders the hue/saturation gradient and
//! averages regions of raw RGBA images.

mod config;
mod report;

use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use huepick_canvas::{average_pixel, hue_saturation_gradient, PixelBuffer, Region};
use serde::Serialize;
use tracing::{debug, info};
use tracing_subscriber::{EnvFilter, FmtSubscriber};

use config::{AppConfig, LOG_ENV};
use report::{AverageReport, ColorReport, InputModel};

#[derive(Parser)]
#[command(name = "huepick")]
#[command(version, about = "Pick, convert and inspect colors")]
struct Cli {
    /// Config file (defaults to <config dir>/huepick/config.json)
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Show a color in every model
    Convert {
        /// Model of the input values
        #[arg(value_enum)]
        model: InputModel,

        /// The three components of the color
        #[arg(num_args = 3, required = true, allow_negative_numbers = true)]
        values: Vec<String>,

        /// Print JSON instead of text
        #[arg(long)]
        json: bool,
    },
    /// Render the hue/saturation gradient as raw RGBA bytes
    Gradient {
        #[arg(long)]
        width: Option<u32>,

        #[arg(long)]
        height: Option<u32>,

        /// Output file
        #[arg(short, long)]
        output: PathBuf,
    },
    /// Average the pixels of a raw RGBA image
    Average {
        /// Raw RGBA8 input file
        input: PathBuf,

        #[arg(long)]
        width: u32,

        #[arg(long)]
        height: u32,

        /// Only average this chunk, as X,Y,WIDTH,HEIGHT
        #[arg(long)]
        region: Option<Region>,

        /// Print JSON instead of text
        #[arg(long)]
        json: bool,
    },
    /// Print the effective configuration as JSON
    Config,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let config_path = AppConfig::resolve_path(cli.config.as_deref());
    let config = AppConfig::load(config_path.as_deref())?;

    init_logging(&config)?;
    match &config_path {
        Some(path) => debug!("Loaded config from {}", path.display()),
        None => debug!("Using default config"),
    }

    match cli.command {
        Commands::Convert {
            model,
            values,
            json,
        } => {
            let report = ColorReport::parse(model, &values)?;
            print_report(&report, json || config.json_output)?;
        }
        Commands::Gradient {
            width,
            height,
            output,
        } => {
            let width = width.unwrap_or(config.gradient.width);
            let height = height.unwrap_or(config.gradient.height);
            let pixels = hue_saturation_gradient(width, height)?;
            std::fs::write(&output, pixels.as_bytes())
                .with_context(|| format!("failed to write {}", output.display()))?;
            info!("Wrote {}x{} gradient to {}", width, height, output.display());
        }
        Commands::Average {
            input,
            width,
            height,
            region,
            json,
        } => {
            let data = std::fs::read(&input)
                .with_context(|| format!("failed to read {}", input.display()))?;
            let mut pixels = PixelBuffer::from_raw(width, height, data)
                .with_context(|| {
                    format!("{} is not a {}x{} RGBA image", input.display(), width, height)
                })?;
            if let Some(region) = region {
                pixels = pixels.region(region)?;
            }
            let report = AverageReport::new(average_pixel(&pixels)?);
            print_report(&report, json || config.json_output)?;
        }
        Commands::Config => {
            println!("{}", String::from_utf8_lossy(&config.to_json()?));
        }
    }

    Ok(())
}

/// Install the global subscriber. `HUEPICK_LOG` wins over the config file.
/// Logs go to stderr so reports on stdout stay machine-readable.
fn init_logging(config: &AppConfig) -> Result<()> {
    let filter = match EnvFilter::try_from_env(LOG_ENV) {
        Ok(filter) => filter,
        Err(_) => EnvFilter::try_new(&config.log_filter)
            .with_context(|| format!("invalid log filter {:?}", config.log_filter))?,
    };
    let subscriber = FmtSubscriber::builder()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .finish();
    tracing::subscriber::set_global_default(subscriber)?;
    Ok(())
}

fn print_report<T: Serialize + std::fmt::Display>(report: &T, json: bool) -> Result<()> {
    if json {
        println!("{}", serde_json::to_string_pretty(report)?);
    } else {
        println!("{report}");
    }
    Ok(())
}
