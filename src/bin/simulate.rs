//! Balance simulator CLI.
//!
//! Usage:
//!   cargo run --bin simulate -- [OPTIONS]
//!
//! Options:
//!   -n <runs>    number of runs (default 200)
//!   -d <days>    days per run (default 30)
//!   --seed <n>   reproducible batch seed

use std::env;

use tracing_subscriber::EnvFilter;
use turf::simulator::{run_simulation, SimConfig};

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")))
        .init();

    let config = parse_args(&env::args().collect::<Vec<_>>());

    println!("turf balance simulator");
    println!("  runs: {}   days: {}", config.num_runs, config.target_days);
    if let Some(seed) = config.seed {
        println!("  seed: {seed}");
    }
    println!();

    let report = run_simulation(&config);
    println!("{}", report.to_text());
}

fn parse_args(args: &[String]) -> SimConfig {
    let mut config = SimConfig::default();
    let mut i = 1;
    while i < args.len() {
        match args[i].as_str() {
            "-n" => {
                if let Some(v) = args.get(i + 1).and_then(|v| v.parse().ok()) {
                    config.num_runs = v;
                }
                i += 2;
            }
            "-d" => {
                if let Some(v) = args.get(i + 1).and_then(|v| v.parse().ok()) {
                    config.target_days = v;
                }
                i += 2;
            }
            "--seed" => {
                if let Some(v) = args.get(i + 1).and_then(|v| v.parse().ok()) {
                    config.seed = Some(v);
                }
                i += 2;
            }
            _ => i += 1,
        }
    }
    config
}
