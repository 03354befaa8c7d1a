//! Command-line interface

use anyhow::Context;
use clap::{Parser, Subcommand};
use std::io::Write;
use std::path::{Path, PathBuf};
use tracing::info;
use vpp_application::ports::registry::list_cache_providers;
use vpp_domain::value_objects::BatteryRegistration;
use vpp_infrastructure::{AppConfig, AppContext, ConfigLoader};

/// Command line interface for the VPP battery service
#[derive(Parser, Debug)]
#[command(name = "vpp")]
#[command(about = "Battery range aggregates with a cache-aside read path")]
#[command(version)]
pub struct Cli {
    /// Path to configuration file
    #[arg(short, long, global = true)]
    pub config: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Command,
}

/// Subcommands
#[derive(Subcommand, Debug, PartialEq, Eq)]
pub enum Command {
    /// Register batteries from a JSON array file and persist them
    Ingest {
        /// JSON file holding `[{"name", "postcode", "capacity"}, ...]`
        file: PathBuf,
    },

    /// Query aggregates for a postcode range (runs the query twice)
    Query {
        /// Lower postcode bound (inclusive)
        #[arg(long)]
        from: String,

        /// Upper postcode bound (inclusive)
        #[arg(long)]
        to: String,

        /// Lower capacity bound (inclusive)
        #[arg(long, allow_negative_numbers = true)]
        min: Option<i32>,

        /// Upper capacity bound (inclusive)
        #[arg(long, allow_negative_numbers = true)]
        max: Option<i32>,

        /// Zero-based page number
        #[arg(long)]
        page: Option<u32>,

        /// Page size
        #[arg(long)]
        size: Option<u32>,

        /// JSON file of batteries to ingest before querying
        #[arg(long)]
        seed: Option<PathBuf>,
    },

    /// List registered cache providers
    Providers,
}

/// Load configuration from `path`, or from the default locations
pub fn load_config(path: Option<&Path>) -> anyhow::Result<AppConfig> {
    let loader = match path {
        Some(path) => ConfigLoader::new().with_config_path(path),
        None => ConfigLoader::new(),
    };
    Ok(loader.load()?)
}

/// Execute one command, writing its output to `out`
pub async fn run(
    command: Command,
    config: &AppConfig,
    out: &mut impl Write,
) -> anyhow::Result<()> {
    match command {
        Command::Ingest { file } => {
            let batteries = read_registrations(&file)?;
            let ctx = AppContext::build(config)?;
            let consumer = ctx.start_consumer().await?;

            let message = ctx
                .registration_service
                .register_batteries(batteries)
                .await?;

            // Dropping every handle on the bus ends the consumer stream
            drop(ctx);
            let persisted = consumer.await.context("Consumer task failed")?;
            info!("Consumer persisted {} batteries", persisted);

            writeln!(out, "{message}")?;
            writeln!(out, "Persisted {persisted} batteries")?;
        }
        Command::Query {
            from,
            to,
            min,
            max,
            page,
            size,
            seed,
        } => {
            let ctx = AppContext::build(config)?;
            if let Some(seed) = seed {
                for battery in read_registrations(&seed)? {
                    battery.validate()?;
                    if let Some(invalidation) = ctx.consumer_service.consume(battery).await {
                        invalidation.await.context("Invalidation task failed")?;
                    }
                }
            }

            for attempt in ["first", "second"] {
                let result = ctx
                    .query_service
                    .get_batteries(&from, &to, min, max, page, size)
                    .await?;
                info!("Query {} attempt complete", attempt);
                writeln!(out, "{}", serde_json::to_string_pretty(&result)?)?;
            }

            let stats = ctx.cache.stats().await?;
            writeln!(
                out,
                "cache={} hits={} misses={}",
                ctx.cache.provider_name(),
                stats.hits,
                stats.misses
            )?;
        }
        Command::Providers => {
            for (name, description) in list_cache_providers() {
                writeln!(out, "{name:<8} {description}")?;
            }
        }
    }
    Ok(())
}

fn read_registrations(path: &Path) -> anyhow::Result<Vec<BatteryRegistration>> {
    let content = std::fs::read_to_string(path)
        .with_context(|| format!("Failed to read {}", path.display()))?;
    serde_json::from_str(&content)
        .with_context(|| format!("Invalid battery list in {}", path.display()))
}
