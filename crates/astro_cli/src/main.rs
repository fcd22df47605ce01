//! Astro CLI - Command Line Access to the Astronomical Algorithms
//!
//! # Commands
//!
//! - `astro jd <year> <month> <day> [--julian]` - Calendar date to Julian day
//! - `astro calendar <jd>` - Julian day to calendar date and weekday
//! - `astro sidereal <jd> [--apparent] [--at-0h]` - Sidereal time at Greenwich
//! - `astro interp3` / `astro interp5` - Evaluate an equally spaced table
//! - `astro extremum` / `astro zero` - Extremum or zero of a 3- or 5-row table
//! - `astro eqtime <jde>` - Equation of time
//! - `astro kepler <e> <m>` - Solve Kepler's equation
//!
//! # Configuration
//!
//! Settings are read from `astro.toml` (or `--config <path>`) when present,
//! then overridden by `ASTRO_*` environment variables. `RUST_LOG` takes
//! precedence over the configured log level.

use std::path::Path;

use clap::{Parser, Subcommand};
use tracing::{debug, info};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

mod commands;
mod config;
mod error;

use commands::interp::TableArgs;
use commands::kepler::KeplerMethod;
use commands::OutputFormat;
use config::CliConfig;
pub use error::{CliError, Result};

/// Astronomical algorithms CLI
#[derive(Parser)]
#[command(name = "astro")]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Enable verbose output
    #[arg(short, long, global = true)]
    verbose: bool,

    /// Configuration file path
    #[arg(short, long, global = true, default_value = "astro.toml")]
    config: String,

    /// Output format
    #[arg(short, long, global = true, value_enum, default_value_t = OutputFormat::Text)]
    format: OutputFormat,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Convert a calendar date to a Julian day (current time if omitted)
    #[command(allow_negative_numbers = true)]
    Jd {
        /// Astronomical year (0 is 1 BC)
        year: Option<i32>,

        /// Month, 1-12
        month: Option<u32>,

        /// Day of month with fraction
        day: Option<f64>,

        /// Read the date on the Julian calendar
        #[arg(long)]
        julian: bool,
    },

    /// Convert a Julian day to a calendar date
    Calendar {
        /// Julian day
        jd: f64,

        /// Use the proleptic Gregorian calendar before 1582
        #[arg(long)]
        proleptic: bool,
    },

    /// Sidereal time at Greenwich
    Sidereal {
        /// Julian day (UT)
        jd: f64,

        /// Include nutation in right ascension
        #[arg(long)]
        apparent: bool,

        /// Evaluate at 0h UT of the given day
        #[arg(long)]
        at_0h: bool,
    },

    /// Interpolate a three-row table
    Interp3 {
        #[command(flatten)]
        table: TableArgs,

        /// Abscissa to interpolate at
        #[arg(long, allow_hyphen_values = true)]
        at: f64,

        /// Reject abscissae outside the central interval
        #[arg(long)]
        strict: bool,
    },

    /// Interpolate a five-row table
    Interp5 {
        #[command(flatten)]
        table: TableArgs,

        /// Abscissa to interpolate at
        #[arg(long, allow_hyphen_values = true)]
        at: f64,

        /// Reject abscissae outside the central interval
        #[arg(long)]
        strict: bool,
    },

    /// Extremum of a three- or five-row table
    Extremum {
        #[command(flatten)]
        table: TableArgs,
    },

    /// Zero of a three- or five-row table
    Zero {
        #[command(flatten)]
        table: TableArgs,

        /// Use Newton refinement instead of the closed-form iteration
        #[arg(long)]
        refined: bool,
    },

    /// Equation of time in minutes
    Eqtime {
        /// Julian ephemeris day
        jde: f64,
    },

    /// Solve Kepler's equation
    Kepler {
        /// Orbital eccentricity, 0 <= e < 1
        e: f64,

        /// Mean anomaly in degrees
        #[arg(allow_hyphen_values = true)]
        m: f64,

        /// Solution method
        #[arg(long, value_enum, default_value_t = KeplerMethod::Newton)]
        method: KeplerMethod,
    },
}

fn init_tracing(config: &CliConfig, verbose: bool) {
    let default_level = if verbose {
        "debug"
    } else {
        config.log_level.as_filter_str()
    };
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));

    tracing_subscriber::registry()
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .with(filter)
        .init();
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let config = CliConfig::load_with_env_and_validate(Path::new(&cli.config))?;
    init_tracing(&config, cli.verbose);

    if cli.verbose {
        info!("Verbose mode enabled");
    }
    debug!(?config, path = %cli.config, "loaded configuration");

    let format = cli.format;
    match cli.command {
        Commands::Jd {
            year,
            month,
            day,
            julian,
        } => commands::jd::run(year, month, day, julian, &config, format),
        Commands::Calendar { jd, proleptic } => {
            commands::calendar::run(jd, proleptic, &config, format)
        }
        Commands::Sidereal {
            jd,
            apparent,
            at_0h,
        } => commands::sidereal::run(jd, apparent, at_0h, &config, format),
        Commands::Interp3 { table, at, strict } => {
            commands::interp::run_interpolate(3, &table, at, strict, &config, format)
        }
        Commands::Interp5 { table, at, strict } => {
            commands::interp::run_interpolate(5, &table, at, strict, &config, format)
        }
        Commands::Extremum { table } => commands::interp::run_extremum(&table, &config, format),
        Commands::Zero { table, refined } => {
            commands::interp::run_zero(&table, refined, &config, format)
        }
        Commands::Eqtime { jde } => commands::eqtime::run(jde, &config, format),
        Commands::Kepler { e, m, method } => {
            commands::kepler::run(e, m, method, &config, format)
        }
    }
}
