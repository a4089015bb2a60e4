mod cli;

use std::io::{self, Write};
use std::path::PathBuf;
use std::time::Duration;

use anyhow::{Context, Result, anyhow};
use clap::Parser;
use dream_world_graph::{Clock, ManualClock, Simulation};

use cli::{LayoutSnapshot, load_config, load_records};

#[derive(Debug, Parser)]
#[command(author, version, about)]
struct Args {
    /// JSON array of tagged records, or `-` for stdin.
    #[arg(long)]
    records: PathBuf,
    /// JSON layout config; omitted fields keep their defaults.
    #[arg(long)]
    config: Option<PathBuf>,
    #[arg(long)]
    seed: Option<u64>,
    /// Simulated wall time to run the layout for.
    #[arg(long, default_value_t = 3.0)]
    seconds: f32,
    /// Simulated spacing between rendered frames.
    #[arg(long, default_value_t = 16)]
    frame_ms: u64,
    /// Canvas point to hit-test, as `X,Y`.
    #[arg(long, value_parser = parse_point)]
    hit: Option<(f32, f32)>,
    #[arg(long)]
    pretty: bool,
    #[arg(short, long)]
    verbose: bool,
}

fn parse_point(value: &str) -> Result<(f32, f32)> {
    let (x, y) = value
        .split_once(',')
        .ok_or_else(|| anyhow!("expected X,Y but got {value:?}"))?;
    let x = x.trim().parse().with_context(|| format!("invalid x in {value:?}"))?;
    let y = y.trim().parse().with_context(|| format!("invalid y in {value:?}"))?;
    Ok((x, y))
}

fn init_tracing(verbose: bool) {
    use tracing_subscriber::EnvFilter;

    let filter = if verbose {
        EnvFilter::new("debug")
    } else {
        EnvFilter::from_default_env().add_directive(tracing::Level::WARN.into())
    };

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .with_ansi(false)
        .init();
}

fn main() -> Result<()> {
    let args = Args::parse();
    init_tracing(args.verbose);

    let mut config = load_config(args.config.as_deref())?;
    if let Some(seed) = args.seed {
        config.seed.rng_seed = seed;
    }
    let records = load_records(&args.records)?;

    let clock = ManualClock::new();
    let mut simulation = Simulation::from_records_with_clock(&records, config, clock.clone());

    if simulation.graph().is_renderable() {
        let frame = Duration::from_millis(args.frame_ms.max(1));
        let total = Duration::from_secs_f32(args.seconds.max(0.0).min(3600.0));

        simulation.start();
        while clock.now() < total {
            clock.advance(frame);
            simulation.update();
        }
        tracing::info!(
            ticks = simulation.tick_count(),
            nodes = simulation.graph().node_count(),
            edges = simulation.graph().edge_count(),
            "layout simulated"
        );
    } else {
        tracing::warn!(
            nodes = simulation.graph().node_count(),
            "not enough distinct themes to lay out a world map"
        );
    }

    let snapshot = LayoutSnapshot::capture(&simulation, args.hit);
    let stdout = io::stdout();
    let mut out = stdout.lock();
    let written = if args.pretty {
        serde_json::to_writer_pretty(&mut out, &snapshot)
    } else {
        serde_json::to_writer(&mut out, &snapshot)
    };
    written.context("failed to write layout snapshot")?;
    writeln!(out).context("failed to write layout snapshot")?;

    Ok(())
}
