mod browse;
mod commands;
mod view;

use clap::{Parser, Subcommand};
use floorplan_core::{Layout, RowCode};
use tracing_subscriber::EnvFilter;

use crate::view::{DeviceClass, Orientation, TerminalWidthClassifier, ViewConfig};

#[derive(Debug, Parser)]
#[command(name = "floorplan")]
#[command(about = "Browse the warehouse floor plan and estimate walk times")]
struct Cli {
    /// Grid variant; overrides FLOORPLAN_LAYOUT
    #[arg(long, global = true)]
    layout: Option<Layout>,

    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Debug, Subcommand)]
enum Commands {
    /// Resolve a location code such as I-2-7 or I27
    Lookup {
        code: String,
        /// Print the result as JSON
        #[arg(long)]
        json: bool,
    },
    /// Select a cell directly by row, aisle and optional spot
    Select {
        #[arg(long, value_parser = parse_row)]
        row: RowCode,
        #[arg(long)]
        aisle: u32,
        #[arg(long)]
        spot: Option<u32>,
        /// Print the result as JSON
        #[arg(long)]
        json: bool,
    },
    /// Draw the floor plan
    Map {
        /// Location code to highlight
        #[arg(long)]
        select: Option<String>,
        #[command(flatten)]
        view: ViewArgs,
    },
    /// List the measured walk times used for estimates
    Anchors,
    /// Interactive search and selection on stdin
    Browse {
        #[command(flatten)]
        view: ViewArgs,
    },
}

#[derive(Debug, Clone, clap::Args)]
struct ViewArgs {
    #[arg(long, value_enum, env = "FLOORPLAN_ORIENTATION", default_value_t = Orientation::Standard)]
    orientation: Orientation,
    /// Device class; detected from the terminal width when omitted
    #[arg(long, value_enum)]
    device: Option<DeviceClass>,
}

impl ViewArgs {
    fn resolve(&self) -> ViewConfig {
        ViewConfig::resolve(
            self.orientation,
            self.device,
            &TerminalWidthClassifier::from_env(),
        )
    }
}

fn parse_row(raw: &str) -> Result<RowCode, String> {
    let mut chars = raw.trim().chars();
    match (chars.next(), chars.next()) {
        (Some(c), None) => RowCode::from_letter(c.to_ascii_uppercase())
            .ok_or_else(|| format!("unknown row '{c}'")),
        _ => Err(format!("expected a single row letter, got '{raw}'")),
    }
}

fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();
    let cli = Cli::parse();

    let mut config = floorplan_core::load_app_config_from_env()?;
    if let Some(layout) = cli.layout {
        config.layout = layout;
    }

    let env_filter = EnvFilter::try_from_default_env()
        .or_else(|_| EnvFilter::try_new(config.log_level.clone()))?;
    tracing_subscriber::fmt()
        .with_env_filter(env_filter)
        .with_writer(std::io::stderr)
        .init();
    tracing::debug!(?config, "configuration loaded");

    let estimator = floorplan_core::build_estimator(&config)?;

    match cli.command {
        Some(Commands::Lookup { code, json }) => commands::run_lookup(&estimator, &code, json)?,
        Some(Commands::Select {
            row,
            aisle,
            spot,
            json,
        }) => commands::run_select(&estimator, row, aisle, spot, json)?,
        Some(Commands::Map { select, view }) => {
            commands::run_map(&estimator, view.resolve(), select.as_deref())?;
        }
        Some(Commands::Anchors) => commands::run_anchors(&estimator),
        Some(Commands::Browse { view }) => {
            let stdin = std::io::stdin();
            browse::run_browse(stdin.lock(), std::io::stdout(), &estimator, view.resolve())?;
        }
        None => commands::run_map(
            &estimator,
            ViewConfig::resolve(
                Orientation::default(),
                None,
                &TerminalWidthClassifier::from_env(),
            ),
            None,
        )?,
    }

    Ok(())
}
