//! One-shot flight-leg calculator.
//!
//! Solves the wind triangle for a single leg and prints the wind
//! correction angle, heading, ground speed, and leg time.

use anyhow::Result;
use clap::{Parser, ValueEnum};
use flightleg_cli::format;
use flightleg_core::{InputLimits, LegInputs, WindTriangleResult};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

/// Message shown for either no-solution kind.
const NO_SOLUTION_MESSAGE: &str = "Wind too strong to maintain track.";

/// Process exit status for a leg with no solution. Distinct from 1
/// (rejected input) and 2 (usage error).
const NO_SOLUTION_EXIT: i32 = 3;

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
enum Output {
    /// Labeled fields, one per line
    Table,
    /// A single JSON object
    Json,
}

/// Solve the wind triangle for one flight leg
#[derive(Parser, Debug)]
#[command(author, version, about)]
struct Args {
    /// Desired track in degrees (0-360)
    #[arg(long)]
    track: f64,

    /// True airspeed in knots
    #[arg(long)]
    tas: f64,

    /// Direction the wind blows from, in degrees (0-360)
    #[arg(long)]
    wind_dir: f64,

    /// Wind speed in knots
    #[arg(long)]
    wind_speed: f64,

    /// Leg distance in nautical miles
    #[arg(long)]
    distance: f64,

    /// Output format
    #[arg(long, default_value = "table")]
    output: Output,
}

fn main() -> Result<()> {
    // Logs go to stderr so stdout stays machine-readable.
    tracing_subscriber::registry()
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .with(tracing_subscriber::EnvFilter::from_default_env())
        .init();

    let args = Args::parse();

    let inputs = LegInputs {
        track_deg: args.track,
        tas_kt: args.tas,
        wind_dir_deg: args.wind_dir,
        wind_speed_kt: args.wind_speed,
        distance_nm: args.distance,
    };
    InputLimits::default().check(&inputs)?;

    tracing::debug!(?inputs, "solving leg");

    match inputs.solve() {
        Ok(result) => {
            match args.output {
                Output::Table => print_table(&result),
                Output::Json => print_json(&inputs, &result)?,
            }
            Ok(())
        }
        Err(err) => {
            tracing::warn!(%err, "leg has no solution");
            if args.output == Output::Json {
                println!("{}", serde_json::json!({ "error": NO_SOLUTION_MESSAGE }));
            }
            eprintln!("{NO_SOLUTION_MESSAGE}");
            std::process::exit(NO_SOLUTION_EXIT);
        }
    }
}

fn print_table(result: &WindTriangleResult) {
    println!("WCA:          {}", format::wca(result.wca_deg));
    println!("Heading:      {}", format::heading(result.heading_deg));
    println!("Ground Speed: {}", format::ground_speed(result.ground_speed_kt));
    println!("Leg Time:     {}", format::leg_time(result.leg_time));
}

fn print_json(inputs: &LegInputs, result: &WindTriangleResult) -> Result<()> {
    let report = serde_json::json!({
        "inputs": inputs,
        "wca_deg": result.wca_deg,
        "heading_deg": result.heading_deg,
        "ground_speed_kt": result.ground_speed_kt,
        "leg_time_secs": result.leg_time.as_secs_f64(),
        "formatted": {
            "wca": format::wca(result.wca_deg),
            "heading": format::heading(result.heading_deg),
            "ground_speed": format::ground_speed(result.ground_speed_kt),
            "leg_time": format::leg_time(result.leg_time),
        },
    });
    println!("{}", serde_json::to_string_pretty(&report)?);
    Ok(())
}
