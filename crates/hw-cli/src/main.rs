//! CLI frontend for the Hoardwright encounter and treasure generator.

mod commands;

use std::path::PathBuf;
use std::process;

use clap::{Parser, Subcommand};
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(
    name = "hw",
    about = "Hoardwright: random encounters and treasure hoards",
    version,
    propagate_version = true
)]
struct Cli {
    /// Log resolution steps to stderr
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Roll dice notation such as 2d6+1
    Roll {
        /// Dice notation
        notation: String,

        /// Number of times to roll
        #[arg(short = 'n', long, default_value = "1")]
        times: u32,

        /// RNG seed for reproducible rolls
        #[arg(long)]
        seed: Option<u64>,
    },

    /// Generate a full encounter for a region
    Encounter {
        /// Region id, e.g. generic-forest
        #[arg(short, long)]
        region: String,

        /// Nighttime rest instead of daytime travel
        #[arg(long)]
        night: bool,

        /// Travelling off-road
        #[arg(long)]
        off_road: bool,

        /// A camp fire is lit (night only)
        #[arg(long)]
        camping: bool,

        /// RNG seed for reproducible encounters
        #[arg(long)]
        seed: Option<u64>,

        /// Maximum nesting of table lookups
        #[arg(long, default_value_t = hw_encounter::config::DEFAULT_MAX_DEPTH)]
        max_depth: usize,

        /// Print the encounter as JSON
        #[arg(long)]
        json: bool,

        /// Directory containing the data files
        #[arg(short, long, default_value = "data")]
        dir: PathBuf,
    },

    /// Resolve a single table down to a creature or text
    Table {
        /// Table name
        name: String,

        /// Region id used for regional tables and fallbacks
        #[arg(short, long)]
        region: Option<String>,

        /// RNG seed for reproducible rolls
        #[arg(long)]
        seed: Option<u64>,

        /// Directory containing the data files
        #[arg(short, long, default_value = "data")]
        dir: PathBuf,
    },

    /// Parse a hoard code and roll the hoard
    Treasure {
        /// Hoard code, e.g. "C4 + R4 + M1"
        code: String,

        /// RNG seed for reproducible hoards
        #[arg(long)]
        seed: Option<u64>,

        /// Directory containing the data files
        #[arg(short, long, default_value = "data")]
        dir: PathBuf,
    },

    /// List the available tables
    Tables {
        /// Directory containing the data files
        #[arg(short, long, default_value = "data")]
        dir: PathBuf,
    },
}

fn init_logging(verbose: bool) {
    let default = if verbose { "debug" } else { "warn" };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();
}

fn main() {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    let result = match cli.command {
        Commands::Roll {
            notation,
            times,
            seed,
        } => commands::roll::run(&notation, times, seed),
        Commands::Encounter {
            region,
            night,
            off_road,
            camping,
            seed,
            max_depth,
            json,
            dir,
        } => commands::encounter::run(
            &dir,
            commands::encounter::Options {
                region,
                night,
                off_road,
                camping,
                seed,
                max_depth,
                json,
            },
        ),
        Commands::Table {
            name,
            region,
            seed,
            dir,
        } => commands::table::run(&dir, &name, region.as_deref(), seed),
        Commands::Treasure { code, seed, dir } => commands::treasure::run(&dir, &code, seed),
        Commands::Tables { dir } => commands::tables::run(&dir),
    };

    if let Err(e) = result {
        eprintln!("error: {e}");
        process::exit(1);
    }
}
