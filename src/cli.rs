use std::ffi::OsString;
use std::io::Write;

use clap::{error::ErrorKind, Parser};
use serde::Serialize;

use crate::{
    plot::{self, PlotOptions},
    sim::{self, SimulationInput, SimulationResult, DEFAULT_TARGET_WINS},
    stats::{Histogram, Summary},
};

pub const USAGE: &str = "Please specify the number of simulation loops.";

/// Estimate how many Blackjack rounds it takes to collect five-card wins.
#[derive(Parser, Debug, Clone)]
#[command(name = "fivecard", version)]
pub struct Args {
    /// Number of sessions to simulate
    #[arg(value_parser = parse_sessions)]
    pub sessions: u32,

    /// Seed for the random stream; random when omitted
    #[arg(long)]
    pub seed: Option<u64>,

    /// Five-card wins that end a session
    #[arg(long, default_value_t = DEFAULT_TARGET_WINS, value_parser = clap::value_parser!(u32).range(1..))]
    pub wins: u32,

    /// Merge histogram buckets to fit this many rows; one row per round count when omitted
    #[arg(long, value_parser = clap::value_parser!(u64).range(1..))]
    pub bins: Option<u64>,

    /// Print the summary as JSON
    #[arg(long)]
    pub json: bool,

    /// Skip the histogram
    #[arg(long)]
    pub no_plot: bool,

    /// More logging on stderr (-v info, -vv debug, -vvv trace)
    #[arg(short, long, action = clap::ArgAction::Count)]
    pub verbose: u8,
}

/// Only a plain run of ASCII digits counts: no sign, no decimal point.
fn parse_sessions(raw: &str) -> Result<u32, String> {
    if raw.is_empty() || !raw.bytes().all(|b| b.is_ascii_digit()) {
        return Err(format!("'{raw}' is not a non-negative integer"));
    }
    raw.parse::<u32>().map_err(|err| format!("'{raw}': {err}"))
}

pub enum Command {
    Simulate(Args),
    /// Text to print before exiting without simulating.
    Print(String),
}

pub fn parse<I, T>(args: I) -> Command
where
    I: IntoIterator<Item = T>,
    T: Into<OsString> + Clone,
{
    match Args::try_parse_from(args) {
        Ok(args) => Command::Simulate(args),
        Err(err) if matches!(err.kind(), ErrorKind::DisplayHelp | ErrorKind::DisplayVersion) => {
            Command::Print(err.to_string())
        }
        Err(_) => Command::Print(format!("{USAGE}\n")),
    }
}

pub fn run<I, T, W>(args: I, out: &mut W) -> anyhow::Result<()>
where
    I: IntoIterator<Item = T>,
    T: Into<OsString> + Clone,
    W: Write,
{
    match parse(args) {
        Command::Simulate(args) => execute(&args, out),
        Command::Print(text) => {
            write!(out, "{text}")?;
            Ok(())
        }
    }
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct Report<'a> {
    #[serde(flatten)]
    simulation: &'a SimulationResult,
    win_rate: f64,
    summary: &'a Summary,
    histogram: &'a Histogram,
}

pub fn execute<W: Write>(args: &Args, out: &mut W) -> anyhow::Result<()> {
    let input = SimulationInput {
        sessions: args.sessions,
        seed: args.seed,
        target_wins: args.wins,
        progress_interval: (args.sessions / 10).max(1),
    };
    let result = sim::run_with_progress(input, |current, total| {
        log::info!("{current}/{total} sessions");
    })?;

    if result.rounds.is_empty() {
        writeln!(out, "No sessions were simulated.")?;
        return Ok(());
    }

    let summary = Summary::from_rounds(&result.rounds)?;
    let histogram = Histogram::from_rounds(&result.rounds);

    if args.json {
        let report = Report {
            simulation: &result,
            win_rate: result.win_rate(),
            summary: &summary,
            histogram: &histogram,
        };
        serde_json::to_writer_pretty(&mut *out, &report)?;
        writeln!(out)?;
        return Ok(());
    }

    writeln!(out, "Simulation time: {:.2}s", result.elapsed.as_secs_f64())?;
    writeln!(out, "Average rounds: {:.2}", summary.mean)?;
    writeln!(out, "Median rounds: {}", summary.median)?;
    writeln!(out, "Standard deviation: {:.2}", summary.std_dev)?;
    writeln!(out, "Mode: {}", summary.mode_label())?;
    writeln!(out, "Max rounds: {}", summary.max)?;
    writeln!(out, "Min rounds: {}", summary.min)?;

    if !args.no_plot {
        writeln!(out)?;
        let options = PlotOptions {
            max_rows: args.bins.map(|b| b as usize),
            ..PlotOptions::default()
        };
        let title = format!("Rounds to {} five-card wins", args.wins);
        plot::render(&histogram, &title, &options, out)?;
    }
    Ok(())
}

/// Terminal logging on stderr so stdout carries only the report.
pub fn log(verbosity: u8) -> Result<(), log::SetLoggerError> {
    let level = match verbosity {
        0 => log::LevelFilter::Warn,
        1 => log::LevelFilter::Info,
        2 => log::LevelFilter::Debug,
        _ => log::LevelFilter::Trace,
    };
    let config = simplelog::ConfigBuilder::new()
        .set_location_level(log::LevelFilter::Off)
        .set_target_level(log::LevelFilter::Off)
        .set_thread_level(log::LevelFilter::Off)
        .build();
    simplelog::TermLogger::init(
        level,
        config,
        simplelog::TerminalMode::Stderr,
        simplelog::ColorChoice::Auto,
    )
}
