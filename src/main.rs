use anyhow::{Context, Result};
use camino::Utf8PathBuf;
use clap::{Parser, Subcommand};
use serde::Serialize;
use tracing_subscriber::EnvFilter;

use campusmap::config::MapConfig;
use campusmap::facility::{FacilityDetail, VoteStatus};
use campusmap::model::{Category, Pin, PinId, Viewport};
use campusmap::registry;
use campusmap::screen::{MapScreen, TapEvent};

#[derive(Parser, Debug)]
#[command(author, version, about = "Drive the campus map engine and print its state as JSON", long_about = None)]
struct Cli {
    /// JSON file overriding map settings
    #[arg(short, long, global = true, value_name = "CONFIG")]
    config: Option<Utf8PathBuf>,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// List registered pins, optionally for one category
    Pins {
        #[arg(value_name = "CATEGORY")]
        category: Option<Category>,
    },
    /// Replay a JSON array of tap events and print one snapshot per event
    Replay {
        #[arg(value_name = "EVENTS")]
        events: Utf8PathBuf,
        /// Map surface width
        #[arg(long, default_value_t = 390.0)]
        width: f32,
        /// Map surface height
        #[arg(long, default_value_t = 700.0)]
        height: f32,
    },
    /// Open a facility detail screen and apply votes
    Detail {
        #[arg(value_name = "CATEGORY")]
        category: Category,
        #[arg(value_name = "NAME")]
        name: String,
        /// Vote to cast, in order (repeatable)
        #[arg(long = "vote", value_name = "STATUS")]
        votes: Vec<VoteStatus>,
    },
}

#[derive(Serialize)]
struct PinEntry<'a> {
    id: PinId,
    #[serde(flatten)]
    pin: &'a Pin,
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();
    let cfg = MapConfig::load_or_default(cli.config.as_deref())?;

    let json = match cli.command {
        Command::Pins { category } => {
            let pins: Vec<PinEntry> = registry::all_pins()
                .filter(|(id, _)| category.is_none_or(|c| c == id.category))
                .map(|(id, pin)| PinEntry { id, pin })
                .collect();
            serde_json::to_string_pretty(&pins)?
        }
        Command::Replay { events, width, height } => {
            let text = std::fs::read_to_string(&events).with_context(|| format!("Open {}", events))?;
            let events: Vec<TapEvent> =
                serde_json::from_str(&text).with_context(|| format!("Failed to parse {}", events))?;
            let mut screen = MapScreen::new(Viewport::with_size(width, height), cfg);
            let snapshots = screen.replay(&events);
            serde_json::to_string_pretty(&snapshots)?
        }
        Command::Detail { category, name, votes } => {
            let mut detail = FacilityDetail::open(category, name, &cfg);
            for v in votes {
                detail.vote(v);
            }
            serde_json::to_string_pretty(&detail)?
        }
    };
    println!("{}", json);
    Ok(())
}

