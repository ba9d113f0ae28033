//! `agenda` CLI — plan free weekly windows and check booking conflicts
//! from the command line.
//!
//! ## Usage
//!
//! ```sh
//! # Free weekly windows for a physician/room pair
//! agenda plan -i request.json
//!
//! # Same, chopped into bookable 30-minute slots
//! agenda plan -i request.json --slot 30
//!
//! # Classify conflicts between candidate and existing bookings
//! agenda check -i bookings.json
//!
//! # Both subcommands read stdin and write stdout when -i/-o are omitted
//! cat request.json | agenda plan
//! ```
//!
//! Day tokens and times in the request JSON are raw boundary input:
//! `"lunes"`, `"MIÉ"`, `"Friday"` and `"09:00"`/`"09:00:00"` are all
//! accepted and normalized on ingestion.

use std::collections::HashSet;
use std::io::{self, Read};

use agenda_engine::{
    ensure_no_internal_overlap, find_conflicts, generate_slots, plan_free_windows, BookingId,
    PhysicianId, RoomId, ScopedInterval, WeeklyInterval,
};
use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use serde::Deserialize;

#[derive(Parser)]
#[command(
    name = "agenda",
    version,
    about = "Weekly clinic agenda planning and conflict checks"
)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Compute the free weekly windows for a physician/room pair
    Plan {
        /// Input file (reads from stdin if omitted)
        #[arg(short, long)]
        input: Option<String>,
        /// Output file (writes to stdout if omitted)
        #[arg(short, long)]
        output: Option<String>,
        /// Chop the free windows into slots of this many minutes
        #[arg(long)]
        slot: Option<u16>,
    },
    /// Classify conflicts between candidate and existing bookings
    Check {
        /// Input file (reads from stdin if omitted)
        #[arg(short, long)]
        input: Option<String>,
        /// Output file (writes to stdout if omitted)
        #[arg(short, long)]
        output: Option<String>,
    },
}

/// Wire shape of a planning request.
#[derive(Deserialize)]
struct PlanRequest {
    physician: PhysicianId,
    room: RoomId,
    availability: Vec<WeeklyInterval>,
    room_hours: Vec<WeeklyInterval>,
    #[serde(default)]
    existing: Vec<ScopedInterval>,
}

/// Wire shape of a conflict-check request. `exclude` carries the id of a
/// booking being edited so it is not reported against itself.
#[derive(Deserialize)]
struct CheckRequest {
    candidates: Vec<ScopedInterval>,
    #[serde(default)]
    existing: Vec<ScopedInterval>,
    #[serde(default)]
    exclude: Vec<BookingId>,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    match cli.command {
        Commands::Plan {
            input,
            output,
            slot,
        } => {
            let text = read_input(input.as_deref())?;
            let request: PlanRequest =
                serde_json::from_str(&text).context("Failed to parse plan request")?;

            let free = plan_free_windows(
                request.physician,
                request.room,
                &request.availability,
                &request.room_hours,
                &request.existing,
            );
            let result = match slot {
                Some(minutes) => generate_slots(&free, minutes),
                None => free,
            };

            let json = serde_json::to_string_pretty(&result)?;
            write_output(output.as_deref(), &json)?;
        }
        Commands::Check { input, output } => {
            let text = read_input(input.as_deref())?;
            let request: CheckRequest =
                serde_json::from_str(&text).context("Failed to parse check request")?;

            // A self-overlapping candidate batch is never confirmable:
            // refuse before any cross-scope check runs.
            let windows: Vec<WeeklyInterval> =
                request.candidates.iter().map(|c| c.window).collect();
            ensure_no_internal_overlap(&windows).context("Candidate batch rejected")?;

            let exclude: HashSet<BookingId> = request.exclude.iter().copied().collect();
            let conflicts = find_conflicts(&request.candidates, &request.existing, &exclude);

            let json = serde_json::to_string_pretty(&conflicts)?;
            write_output(output.as_deref(), &json)?;
        }
    }

    Ok(())
}

fn read_input(path: Option<&str>) -> Result<String> {
    match path {
        Some(path) => {
            std::fs::read_to_string(path).with_context(|| format!("Failed to read file: {}", path))
        }
        None => {
            let mut buf = String::new();
            io::stdin()
                .read_to_string(&mut buf)
                .context("Failed to read from stdin")?;
            Ok(buf)
        }
    }
}

fn write_output(path: Option<&str>, content: &str) -> Result<()> {
    match path {
        Some(path) => {
            std::fs::write(path, content)
                .with_context(|| format!("Failed to write file: {}", path))?;
        }
        None => {
            println!("{}", content);
        }
    }
    Ok(())
}
