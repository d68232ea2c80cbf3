use clap::{Parser, ValueEnum};
use tracing::{debug, Level};

mod capture;
mod data_store;
mod demo;
mod logging_helpers;
mod rollable;

#[derive(ValueEnum, Clone, Copy, Debug, PartialEq, Eq)]
enum Demo {
    All,
    Capture,
    Simple,
    Generic,
}

#[derive(Parser, Debug)]
#[clap(author, version, about, long_about = None)]
struct Args {
    /// Which playground to run
    #[clap(long, value_enum, default_value_t = Demo::All)]
    demo: Demo,

    /// Seed every die, making the rolls reproducible
    #[clap(long)]
    seed: Option<u64>,

    /// Add a die with this many sides to the simple erasure demo (repeatable)
    #[clap(long = "sides")]
    extra_sides: Vec<u32>,

    /// Log at debug level
    #[clap(short, long)]
    verbose: bool,
}

fn main() -> anyhow::Result<()> {
    let args = Args::parse();
    let max_level = if args.verbose { Level::DEBUG } else { Level::INFO };
    let _log_guard = logging_helpers::init_subscriber(max_level);
    debug!("{:?}", args);

    if matches!(args.demo, Demo::All | Demo::Capture) {
        demo::capture_lists(args.seed);
    }
    if matches!(args.demo, Demo::All | Demo::Simple) {
        demo::simple_erasure(args.seed, &args.extra_sides);
    }
    if matches!(args.demo, Demo::All | Demo::Generic) {
        demo::generic_erasure()?;
    }
    Ok(())
}
