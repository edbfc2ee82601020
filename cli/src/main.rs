//! Command-line runner for the checkout simulator
//!
//! Reads a store configuration (JSON) and an event file (text), runs the
//! simulation, and prints the statistics as JSON:
//!
//! ```text
//! checkout-sim --config store.json --events events.txt
//! ```

use anyhow::{Context, Result};
use checkout_simulator_core_rs::{create_event_list, Simulation, StoreConfig};
use clap::Parser;
use std::fs;
use std::path::PathBuf;

/// Run a checkout-area simulation and print its statistics
#[derive(Debug, Parser)]
#[command(name = "checkout-sim", version, about)]
struct Args {
    /// Path to the store configuration (JSON)
    #[arg(long)]
    config: PathBuf,

    /// Path to the event file
    #[arg(long)]
    events: PathBuf,
}

fn main() -> Result<()> {
    let args = Args::parse();

    let config_text = fs::read_to_string(&args.config)
        .with_context(|| format!("reading config file {}", args.config.display()))?;
    let config = StoreConfig::from_json(&config_text)
        .with_context(|| format!("parsing config file {}", args.config.display()))?;

    let events_text = fs::read_to_string(&args.events)
        .with_context(|| format!("reading event file {}", args.events.display()))?;
    let events = create_event_list(&events_text)
        .with_context(|| format!("parsing event file {}", args.events.display()))?;

    let stats = Simulation::new(&config)
        .run(events)
        .context("running simulation")?;

    println!("{}", serde_json::to_string_pretty(&stats)?);
    Ok(())
}
