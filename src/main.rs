//! `safelog` command-line front end.
//!
//! # Architecture Overview
//!
//! ```text
//!   APP_ENV ──────────┐
//!   --config file ────┼─▶ AppConfig + EnvironmentMode ─┬─▶ SecureLogger ─▶ stderr
//!   --mode override ──┘                                ├─▶ Sanitizer ────▶ stdout
//!                                                      └─▶ ImageLoader ──▶ stdout
//! ```

use std::path::PathBuf;

use clap::{Parser, Subcommand, ValueEnum};
use serde_json::Value;

use safelog::config::{load_config, AppConfig, EnvironmentMode};
use safelog::media::{
    now_millis, resolve_image_url, Callbacks, ErrorEvent, ImageLoader, ImageProps, LoadEvent, LoadingStrategy,
};
use safelog::observability::init_logging;
use safelog::secure_log::{Sanitizer, SecureLogger};

#[derive(Parser)]
#[command(name = "safelog")]
#[command(about = "Environment-gated logging, log sanitization and image load states", long_about = None)]
struct Cli {
    /// TOML configuration file.
    #[arg(short, long, global = true)]
    config: Option<PathBuf>,

    /// Override the mode read from the environment.
    #[arg(short, long, global = true)]
    mode: Option<EnvironmentMode>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Sanitize a JSON value and print it
    Sanitize {
        /// JSON document, e.g. '{"password":"x"}'
        json: String,
    },
    /// Log through the secure logger
    Log {
        #[arg(value_enum)]
        level: Level,
        /// Message arguments; for `error` the first is the message and the rest the detail
        args: Vec<String>,
    },
    /// Drive one image instance and print the resulting view
    Image {
        #[arg(long)]
        src: String,
        #[arg(long, default_value = "")]
        alt: String,
        #[arg(long)]
        width: Option<u32>,
        #[arg(long)]
        height: Option<u32>,
        #[arg(long)]
        eager: bool,
        #[arg(long, value_enum, default_value = "pending")]
        outcome: Outcome,
    },
    /// Resolve an image URL, optionally cache-busted
    ImageUrl {
        url: Option<String>,
        #[arg(long)]
        bust: bool,
    },
}

#[derive(Clone, Copy, ValueEnum)]
enum Level {
    Info,
    Warn,
    Error,
    Debug,
}

#[derive(Clone, Copy, ValueEnum)]
enum Outcome {
    Pending,
    Load,
    Error,
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let cli = Cli::parse();

    let config = match &cli.config {
        Some(path) => load_config(path)?,
        None => AppConfig::default(),
    };
    init_logging(&config.logging);

    let mode = cli
        .mode
        .unwrap_or_else(|| EnvironmentMode::from_env(&config.environment.variable));
    tracing::debug!(%mode, variable = %config.environment.variable, "Environment mode resolved");

    match cli.command {
        Commands::Sanitize { json } => {
            let value: Value = serde_json::from_str(&json)?;
            let sanitized = Sanitizer::new(mode).sanitize(&value);
            println!("{}", serde_json::to_string_pretty(&sanitized)?);
        }
        Commands::Log { level, args } => {
            let logger = SecureLogger::new(mode);
            let refs: Vec<&dyn std::fmt::Display> = args.iter().map(|a| a as &dyn std::fmt::Display).collect();
            match level {
                Level::Info => logger.info(&refs),
                Level::Warn => logger.warn(&refs),
                Level::Debug => logger.debug(&refs),
                Level::Error => {
                    let (message, rest) = args.split_first().map_or(("", &[][..]), |(m, r)| (m.as_str(), r));
                    let detail = rest.join(" ");
                    if detail.is_empty() {
                        logger.error(&message, None);
                    } else {
                        logger.error(&message, Some(&detail));
                    }
                }
            }
        }
        Commands::Image {
            src,
            alt,
            width,
            height,
            eager,
            outcome,
        } => {
            let mut props = ImageProps::from_config(src.clone(), alt, &config.media);
            if let Some(w) = width {
                props = props.width(w);
            }
            if let Some(h) = height {
                props = props.height(h);
            }
            if eager {
                props = props.loading(LoadingStrategy::Eager);
            }

            let mut image = ImageLoader::new(props, Callbacks::default()).with_config(&config.media);
            match outcome {
                Outcome::Pending => {}
                Outcome::Load => {
                    image.handle_load(&LoadEvent::new(src));
                }
                Outcome::Error => {
                    image.handle_error(&ErrorEvent::new(src));
                }
            }
            println!("{}", serde_json::to_string_pretty(&image.render())?);
        }
        Commands::ImageUrl { url, bust } => {
            println!("{}", resolve_image_url(url.as_deref(), bust, now_millis(), &config.media));
        }
    }

    Ok(())
}
