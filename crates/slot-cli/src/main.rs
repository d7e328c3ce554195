//! `slots` CLI — recommend meeting slots from the command line.
//!
//! ## Usage
//!
//! ```sh
//! # Recommend a slot for a request (stdin → stdout)
//! cat request.json | slots recommend
//!
//! # From file to file, pretty-printed
//! slots recommend -i request.json -o response.json --pretty
//!
//! # Reject wall-clock times that fall in a DST gap instead of adjusting them
//! slots recommend -i request.json --dst-policy skip
//!
//! # List the candidate slots of one proposed window
//! slots candidates --start 2026-03-02T09:00:00 --end 2026-03-02T11:00:00 \
//!     --timezone America/New_York --duration 60
//! ```
//!
//! Diagnostics go to stderr; set `RUST_LOG` or `--log-level` to see them.

use anyhow::{Context, Result};
use clap::{Parser, Subcommand, ValueEnum};
use slot_engine::timezone::{parse_instant, parse_timezone, utc_to_zone};
use slot_engine::{generate_candidates, DstPolicy, RecommendationRequest, TimeWindow};
use std::io::{self, Read};
use tracing::info;
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(name = "slots", version, about = "Meeting slot recommendation CLI")]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// Log filter used when RUST_LOG is not set (e.g. "debug", "slot_engine=trace")
    #[arg(long, global = true, default_value = "warn")]
    log_level: String,

    /// How to resolve wall-clock times that fall on a DST transition
    #[arg(long, global = true, value_enum, default_value_t = PolicyArg::WallClock)]
    dst_policy: PolicyArg,
}

#[derive(Subcommand)]
enum Commands {
    /// Recommend the best slot for a JSON recommendation request
    Recommend {
        /// Input file (reads from stdin if omitted)
        #[arg(short, long)]
        input: Option<String>,
        /// Output file (writes to stdout if omitted)
        #[arg(short, long)]
        output: Option<String>,
        /// Pretty-print the JSON response
        #[arg(long)]
        pretty: bool,
    },
    /// List candidate slots inside one proposed window
    Candidates {
        /// Window start (RFC 3339, or local time in --timezone)
        #[arg(long)]
        start: String,
        /// Window end (RFC 3339, or local time in --timezone)
        #[arg(long)]
        end: String,
        /// IANA timezone of the window
        #[arg(long, default_value = "UTC")]
        timezone: String,
        /// Meeting duration in minutes
        #[arg(long)]
        duration: i64,
    },
}

#[derive(Clone, Copy, ValueEnum)]
enum PolicyArg {
    Skip,
    ShiftForward,
    WallClock,
}

impl From<PolicyArg> for DstPolicy {
    fn from(arg: PolicyArg) -> Self {
        match arg {
            PolicyArg::Skip => DstPolicy::Skip,
            PolicyArg::ShiftForward => DstPolicy::ShiftForward,
            PolicyArg::WallClock => DstPolicy::WallClock,
        }
    }
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_logging(&cli.log_level)?;
    let policy = DstPolicy::from(cli.dst_policy);

    match cli.command {
        Commands::Recommend {
            input,
            output,
            pretty,
        } => {
            let json = read_input(input.as_deref())?;
            let request =
                RecommendationRequest::from_json(&json).context("Failed to parse request")?;
            let response = request
                .evaluate(policy)
                .with_context(|| format!("Invalid request for event {}", request.event_id))?;
            info!(event_id = %response.event_id, message = %response.message, "recommendation complete");

            let rendered = if pretty {
                serde_json::to_string_pretty(&response)?
            } else {
                serde_json::to_string(&response)?
            };
            write_output(output.as_deref(), &rendered)?;
        }
        Commands::Candidates {
            start,
            end,
            timezone,
            duration,
        } => {
            let tz = parse_timezone(&timezone)?;
            let window = TimeWindow::new(
                parse_instant(&start, tz, policy).context("Invalid --start")?,
                parse_instant(&end, tz, policy).context("Invalid --end")?,
            )?;
            let candidates = generate_candidates(&window, duration);
            if candidates.is_empty() {
                eprintln!(
                    "No {}-minute slot fits in a {}-minute window",
                    duration,
                    window.duration_minutes()
                );
            }
            for candidate in candidates {
                println!(
                    "{} {}",
                    utc_to_zone(candidate.start(), tz).to_rfc3339(),
                    utc_to_zone(candidate.end(), tz).to_rfc3339()
                );
            }
        }
    }

    Ok(())
}

fn init_logging(default_filter: &str) -> Result<()> {
    let filter = EnvFilter::try_from_default_env()
        .or_else(|_| EnvFilter::try_new(default_filter))
        .with_context(|| format!("Invalid log filter: {}", default_filter))?;
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .init();
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
