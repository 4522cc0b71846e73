//! CLI frontend for the Dicebag dice roller and random picker.

mod commands;

use std::process;

use clap::{Parser, Subcommand};
use tracing_subscriber::EnvFilter;
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;

#[derive(Parser)]
#[command(
    name = "dicebag",
    about = "Roll dice and let them pick for you",
    version,
    propagate_version = true
)]
struct Cli {
    /// Log engine activity to stderr (RUST_LOG overrides)
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Roll dice written in notation such as 2d6+3
    Roll {
        /// Dice notation, e.g. 1d20, 3d6-1
        notation: String,

        /// Number of times to roll
        #[arg(short, long, default_value = "1")]
        times: u32,

        /// Allow omitting the dice count (d6 means 1d6)
        #[arg(short, long)]
        lenient: bool,

        /// RNG seed for reproducible rolls
        #[arg(short, long)]
        seed: Option<u64>,

        /// Print rolls and statistics as JSON
        #[arg(long)]
        json: bool,
    },

    /// Pick one of up to six items at random
    Pick {
        /// The items to choose from
        #[arg(required = true, num_args = 1..)]
        items: Vec<String>,

        /// Comma-separated weights, one per item (implies --weighted)
        #[arg(short, long, value_delimiter = ',')]
        weights: Vec<u32>,

        /// Pick proportionally to weight instead of rolling one die
        #[arg(long)]
        weighted: bool,

        /// Title for the selection
        #[arg(long, default_value = dicebag_core::selection::DEFAULT_TEXT_TITLE)]
        title: String,

        /// Number of picks
        #[arg(short, long, default_value = "1")]
        times: u32,

        /// RNG seed for reproducible picks
        #[arg(short, long)]
        seed: Option<u64>,

        /// Print picks and statistics as JSON
        #[arg(long)]
        json: bool,
    },

    /// Walk through todos, dice, and random picks with sample data
    Demo {
        /// RNG seed for a reproducible walkthrough
        #[arg(short, long, default_value = "42")]
        seed: u64,
    },
}

fn init_logging(verbose: bool) {
    let default = if verbose {
        "dicebag_core=debug,dicebag_cli=debug"
    } else {
        "dicebag_core=warn,dicebag_cli=warn"
    };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default));

    tracing_subscriber::registry()
        .with(filter)
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();
}

fn main() {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    let result = match cli.command {
        Commands::Roll {
            notation,
            times,
            lenient,
            seed,
            json,
        } => commands::roll::run(&notation, times, lenient, seed, json),
        Commands::Pick {
            items,
            weights,
            weighted,
            title,
            times,
            seed,
            json,
        } => commands::pick::run(&commands::pick::PickArgs {
            items: &items,
            weights: &weights,
            weighted,
            title: &title,
            times,
            seed,
            json,
        }),
        Commands::Demo { seed } => commands::demo::run(seed),
    };

    if let Err(e) = result {
        eprintln!("error: {e}");
        process::exit(1);
    }
}
