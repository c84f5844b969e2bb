//! Ant Foraging Runner
//!
//! Runs a foraging simulation for a fixed number of ticks and reports tick
//! summaries as log lines or JSON lines.

use clap::Parser;
use colony_core::{SimConfig, Simulation};
use std::path::PathBuf;
use std::process::ExitCode;

/// Command line arguments for the runner
#[derive(Parser, Debug)]
#[command(name = "ant_forage")]
#[command(about = "Stigmergic ant foraging simulation")]
struct Args {
    /// TOML configuration file; defaults apply when absent
    #[arg(long)]
    config: Option<PathBuf>,

    /// Random seed, overriding the configured one
    #[arg(long)]
    seed: Option<u64>,

    /// Number of ticks to simulate
    #[arg(long, default_value_t = 500)]
    ticks: u64,

    /// Ticks between reported summaries
    #[arg(long, default_value_t = 50)]
    report_interval: u64,

    /// Emit reported summaries as JSON lines on stdout
    #[arg(long)]
    jsonl: bool,

    /// Print the effective configuration and exit
    #[arg(long)]
    print_config: bool,
}

fn init_tracing() {
    let filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info"));
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .try_init();
}

fn main() -> ExitCode {
    init_tracing();
    let args = Args::parse();

    match run(args) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            tracing::error!("{}", e);
            ExitCode::FAILURE
        }
    }
}

fn run(args: Args) -> Result<(), Box<dyn std::error::Error>> {
    let mut config = match &args.config {
        Some(path) => SimConfig::from_file(path)?,
        None => SimConfig::default(),
    };
    if let Some(seed) = args.seed {
        config.seed = Some(seed);
    }

    if args.print_config {
        print!("{}", config.to_toml()?);
        return Ok(());
    }

    let mut sim = Simulation::new(config)?;
    let interval = args.report_interval.max(1);

    for _ in 0..args.ticks {
        let summary = sim.step();
        if summary.tick % interval != 0 && summary.tick != args.ticks {
            continue;
        }

        if args.jsonl {
            println!("{}", summary.to_jsonl()?);
        } else {
            tracing::info!(
                tick = summary.tick,
                carrying_home = summary.actions.return_to_nest,
                following = summary.actions.follow_trail,
                searching = summary.actions.search,
                total_pheromone = summary.total_pheromone,
                remaining_food = summary.remaining_food,
                food_delivered = summary.food_delivered,
                "progress"
            );
        }
    }

    let env = sim.environment();
    tracing::info!(
        ticks = sim.tick(),
        seed = sim.seed(),
        search_mode = %sim.config().search_mode,
        population = sim.config().population,
        remaining_food = env.food.total(),
        food_delivered = env.food_delivered(),
        "simulation complete"
    );

    Ok(())
}
