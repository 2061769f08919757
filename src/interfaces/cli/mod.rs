//! Command-line interface of the `hydrogen-orbitals` binary.

use std::path::{Path, PathBuf};

use anyhow::{self, Context};
use clap::{ArgAction, Parser, Subcommand};
use log::LevelFilter;
use log4rs::append::console::{ConsoleAppender, Target};
use log4rs::append::file::FileAppender;
use log4rs::config::{Appender, Config, Logger, Root};
use log4rs::encode::pattern::PatternEncoder;

use crate::io::format::{hydrogen_error, hydrogen_output};
use crate::wavefunction::PhysicsDomainError;

#[cfg(test)]
#[path = "cli_tests.rs"]
mod cli_tests;

const VERSION: Option<&str> = option_env!("CARGO_PKG_VERSION");

/// Name of the logger that carries the main program output.
pub const OUTPUT_LOGGER: &str = "hydrogen-output";

/// Logs a nicely formatted heading to the `hydrogen-output` logger.
pub fn log_heading() {
    let version = if let Some(ver) = VERSION {
        format!("v{ver}")
    } else {
        "v unknown".to_string()
    };
    hydrogen_output!("╭─────────────────────────────────────────────────────────────────────────────╮");
    hydrogen_output!("│   ●        Hydrogen Orbitals                                                │");
    hydrogen_output!("│  ╱ ╲       Radial wavefunctions R_nl(r) and real spherical harmonics Y_lm   │");
    hydrogen_output!("│ ●─●─●      sampled as shapes, density slices and radial distributions       │");
    hydrogen_output!("│{version:>76} │");
    hydrogen_output!("╰─────────────────────────────────────────────────────────────────────────────╯");
    hydrogen_output!("");
}

// ==================
// Struct definitions
// ==================

/// Command-line arguments.
#[derive(Parser, Debug)]
#[command(author, version, about)]
pub struct Cli {
    /// YAML configuration file holding render parameters for each mode.
    #[arg(short, long, global = true)]
    pub config: Option<PathBuf>,

    /// File to which the program output is also written.
    #[arg(short, long, global = true)]
    pub output: Option<PathBuf>,

    /// Raises the diagnostic log level. May be given up to three times.
    #[arg(short, long, action = ArgAction::Count, global = true)]
    pub verbose: u8,

    /// The visualisation mode.
    #[command(subcommand)]
    pub command: Option<Command>,
}

/// Visualisation modes.
#[derive(Subcommand, Clone, Debug, PartialEq, Eq)]
pub enum Command {
    /// Angular shape of an orbital, drawn as the surface |Y_lm|.
    Shape {
        /// Principal quantum number, used only as a label.
        #[arg(short, default_value_t = 1)]
        n: u32,

        /// Orbital angular momentum quantum number.
        #[arg(short)]
        l: u32,

        /// Magnetic quantum number.
        #[arg(short, allow_negative_numbers = true)]
        m: i32,
    },

    /// Probability density |ψ|² on the xz plane through the nucleus.
    Density {
        /// Principal quantum number.
        #[arg(short)]
        n: u32,

        /// Orbital angular momentum quantum number.
        #[arg(short)]
        l: u32,

        /// Magnetic quantum number.
        #[arg(short, allow_negative_numbers = true)]
        m: i32,
    },

    /// Radial distribution r²|R_nl|².
    Radial {
        /// Principal quantum number.
        #[arg(short)]
        n: u32,

        /// Orbital angular momentum quantum number.
        #[arg(short)]
        l: u32,
    },
}

// =========
// Functions
// =========

/// Maps the number of `-v` flags to a level for diagnostic logging.
pub fn verbosity_level(verbose: u8) -> LevelFilter {
    match verbose {
        0 => LevelFilter::Warn,
        1 => LevelFilter::Info,
        2 => LevelFilter::Debug,
        _ => LevelFilter::Trace,
    }
}

/// Builds the logging configuration of the binary.
///
/// The `hydrogen-output` logger writes bare messages to standard output and, if `output` is
/// given, to that file as well. All other records go to standard error at the level set by
/// `verbose`.
///
/// # Errors
///
/// Errors if the output file cannot be opened or the configuration is inconsistent.
pub fn logging_config(output: Option<&Path>, verbose: u8) -> Result<Config, anyhow::Error> {
    let stdout = ConsoleAppender::builder()
        .encoder(Box::new(PatternEncoder::new("{m}{n}")))
        .build();
    let stderr = ConsoleAppender::builder()
        .target(Target::Stderr)
        .encoder(Box::new(PatternEncoder::new("[{l:<5}] {t} - {m}{n}")))
        .build();

    let mut builder = Config::builder()
        .appender(Appender::builder().build("stdout", Box::new(stdout)))
        .appender(Appender::builder().build("stderr", Box::new(stderr)));
    let mut output_logger = Logger::builder().appender("stdout");

    if let Some(path) = output {
        let file = FileAppender::builder()
            .encoder(Box::new(PatternEncoder::new("{m}{n}")))
            .append(false)
            .build(path)
            .with_context(|| format!("Unable to open output file {}", path.display()))?;
        builder = builder.appender(Appender::builder().build("file", Box::new(file)));
        output_logger = output_logger.appender("file");
    }

    builder
        .logger(
            output_logger
                .additive(false)
                .build(OUTPUT_LOGGER, LevelFilter::Info),
        )
        .build(Root::builder().appender("stderr").build(verbosity_level(verbose)))
        .context("Invalid logging configuration")
}

/// Returns the [`PhysicsDomainError`] at the root of a failure, if there is one.
pub fn physics_cause(err: &anyhow::Error) -> Option<&PhysicsDomainError> {
    err.chain()
        .find_map(|cause| cause.downcast_ref::<PhysicsDomainError>())
}

/// Logs a failed run. Quantum numbers or parameters outside their physical domain are reported
/// as physics errors together with a reminder of the allowed ranges. Anything else is reported as
/// an unexpected error.
pub fn report_failure(err: &anyhow::Error) {
    if let Some(domain_err) = physics_cause(err) {
        hydrogen_error!("PHYSICS ERROR: {domain_err}");
        hydrogen_error!(
            "Tip: Remember that l must be less than n, and |m| must be less than or equal to l."
        );
    } else {
        hydrogen_error!("UNEXPECTED ERROR: {err:#}");
    }
}
