use std::path::PathBuf;
use std::process::ExitCode;

use clap::Parser;
use tracing_subscriber::EnvFilter;

use flight_search::planner::SearchConfig;
use flight_search::query::{QueryOutcome, QueryRequest, run_query};

/// Search a CSV flight schedule for itineraries between two airports.
#[derive(Debug, Parser)]
#[command(version, about)]
struct Cli {
    /// Path to the CSV flight data
    source: PathBuf,

    /// Origin airport code
    origin: String,

    /// Destination airport code
    destination: String,

    /// Number of bags per passenger
    #[arg(long, default_value_t = 0)]
    bags: u32,

    /// Also search for a return leg
    #[arg(long = "return")]
    round_trip: bool,
}

fn main() -> ExitCode {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();

    let request = QueryRequest {
        source_path: cli.source,
        origin: cli.origin,
        destination: cli.destination,
        bag_count: cli.bags,
        round_trip: cli.round_trip,
    };

    match run_query(&request, &SearchConfig::default()) {
        Ok(QueryOutcome::Found(document)) => {
            println!("{document}");
            ExitCode::SUCCESS
        }
        Ok(QueryOutcome::NoItineraries) => {
            eprintln!("no itineraries found");
            ExitCode::from(1)
        }
        Err(e) => {
            eprintln!("error: {e}");
            ExitCode::from(2)
        }
    }
}
