//! Kubedash CLI
//!
//! An offline inspector for Kubernetes snapshots: summarizes pods from
//! `kubectl -o json` output and renders metric series the way the
//! dashboard charts them.

mod commands;
mod config;
mod input;
mod output;

use anyhow::Result;
use clap::{Parser, Subcommand, ValueEnum};
use commands::{chart, normalize, pods};
use kubedash_core::ThemeSetting;
use std::path::PathBuf;
use tracing::debug;
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

/// Kubedash CLI
#[derive(Parser)]
#[command(name = "kubedash")]
#[command(author, version, about = "Kubedash snapshot inspector for Kubernetes pods and metrics", long_about = None)]
pub struct Cli {
    /// Path to a config file (defaults to ~/.config/kubedash/config.*)
    #[arg(long, env = "KUBEDASH_CONFIG")]
    pub config: Option<PathBuf>,

    /// Output format
    #[arg(long, short, default_value = "table")]
    pub format: output::OutputFormat,

    /// Theme override
    #[arg(long)]
    pub theme: Option<ThemeArg>,

    /// Enable verbose output
    #[arg(long, short)]
    pub verbose: bool,

    /// Emit logs as JSON
    #[arg(long)]
    pub log_json: bool,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Debug, Clone, Copy, ValueEnum)]
pub enum ThemeArg {
    Light,
    Dark,
    System,
}

impl From<ThemeArg> for ThemeSetting {
    fn from(arg: ThemeArg) -> Self {
        match arg {
            ThemeArg::Light => ThemeSetting::Light,
            ThemeArg::Dark => ThemeSetting::Dark,
            ThemeArg::System => ThemeSetting::System,
        }
    }
}

#[derive(Subcommand)]
pub enum Commands {
    /// Summarize pods: readiness, status, restarts and resources
    Pods {
        /// Pod or pod list JSON file, `-` for stdin
        file: String,

        /// PodMetrics (or list) JSON file
        #[arg(long, short)]
        metrics: Option<String>,
    },

    /// Render labeled metric series as a chart would
    Chart {
        /// Series JSON file or Prometheus query_range response, `-` for stdin
        file: String,

        /// Time span of the chart in seconds
        #[arg(long, default_value_t = 3600)]
        span: i64,

        /// Only show the series with this label
        #[arg(long)]
        select: Option<String>,

        /// Unit shown next to values
        #[arg(long)]
        unit: Option<String>,

        /// Format times in UTC instead of the local time zone
        #[arg(long)]
        utc: bool,
    },

    /// Convert a resource quantity to millicores or mebibytes
    Normalize {
        /// Resource kind (cpu or memory)
        kind: String,

        /// Quantity, e.g. 500m or 1Gi
        quantity: String,
    },
}

fn init_tracing(verbose: bool, json: bool) {
    let default_level = if verbose { "debug" } else { "warn" };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));

    tracing_subscriber::registry()
        .with(filter)
        .with(json.then(|| fmt::layer().json().with_writer(std::io::stderr)))
        .with((!json).then(|| fmt::layer().with_writer(std::io::stderr)))
        .init();
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_tracing(cli.verbose, cli.log_json);

    let mut config = config::DashboardConfig::load(cli.config.as_deref())?;
    if let Some(theme) = cli.theme {
        config.theme = theme.into();
    }
    debug!(theme = ?config.theme, "Starting kubedash");

    // Execute command
    match cli.command {
        Commands::Pods { file, metrics } => {
            pods::show_pods(&file, metrics.as_deref(), cli.format)?;
        }
        Commands::Chart {
            file,
            span,
            select,
            unit,
            utc,
        } => {
            let options = chart::ChartOptions {
                span_secs: span,
                selected: select,
                unit: unit.unwrap_or_else(|| config.unit.clone()),
                utc,
                mode: config.theme_mode(),
            };
            chart::show_chart(&file, &options, &config.palette()?, cli.format)?;
        }
        Commands::Normalize { kind, quantity } => {
            normalize::show_normalized(&kind, &quantity, cli.format)?;
        }
    }

    Ok(())
}
