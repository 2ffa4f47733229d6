//! Terminal to-do client over the simulated in-memory store.

use std::time::Duration;

use anyhow::Result;
use clap::Parser;
use todo_store::{
    FaultPolicy, Latency, StoreConfig, TodoStore, DEFAULT_FAILURE_RATE, DEFAULT_JITTER_MS,
    DEFAULT_LATENCY_MS,
};

mod app;
mod run;
mod ui;
mod util;

/// Keyboard-driven to-do list. The backing store is in-memory and simulates
/// an unreliable network, so expect delays and the occasional failure.
#[derive(Debug, Parser)]
#[command(name = "todo-tui", version)]
struct Args {
    /// Probability in [0, 1] that any store call fails.
    #[arg(long, default_value_t = DEFAULT_FAILURE_RATE)]
    fail_rate: f64,

    /// Base delay for every store call, in milliseconds.
    #[arg(long, default_value_t = DEFAULT_LATENCY_MS)]
    latency_ms: u64,

    /// Extra random delay on top of the base, in milliseconds.
    #[arg(long, default_value_t = DEFAULT_JITTER_MS)]
    jitter_ms: u64,

    /// Start with an empty collection instead of the sample records.
    #[arg(long)]
    empty: bool,
}

fn main() -> Result<()> {
    let args = Args::parse();
    init_tracing();

    let config = StoreConfig {
        latency: Latency::new(
            Duration::from_millis(args.latency_ms),
            Duration::from_millis(args.jitter_ms),
        ),
        faults: FaultPolicy::Random(args.fail_rate),
    };
    let store = if args.empty {
        TodoStore::new(config)
    } else {
        TodoStore::with_sample_todos(config)
    };

    run::run(store)
}

/// Logs go to stderr and only when `RUST_LOG` asks for them, so the
/// alternate screen stays clean by default.
fn init_tracing() {
    if std::env::var_os("RUST_LOG").is_none() {
        return;
    }
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .init();
}
