use std::env;
use std::fs;

use anyhow::Context;
use clap::Parser;
use log::LevelFilter;

use crate::interfaces::cli::{
    logging_config, physics_cause, verbosity_level, Cli, Command, OUTPUT_LOGGER,
};
use crate::wavefunction::{PhysicsDomainError, QuantumState};

#[test]
fn test_interfaces_cli_shape() {
    let cli = Cli::try_parse_from(["hydrogen-orbitals", "shape", "-l", "2", "-m", "-1"]).unwrap();
    assert_eq!(cli.command, Some(Command::Shape { n: 1, l: 2, m: -1 }));
    assert!(cli.config.is_none());
    assert!(cli.output.is_none());
    assert_eq!(cli.verbose, 0);

    let cli =
        Cli::try_parse_from(["hydrogen-orbitals", "shape", "-n", "4", "-l", "3", "-m", "3"]).unwrap();
    assert_eq!(cli.command, Some(Command::Shape { n: 4, l: 3, m: 3 }));
}

#[test]
fn test_interfaces_cli_density_and_radial() {
    let cli = Cli::try_parse_from([
        "hydrogen-orbitals",
        "-c",
        "render.yml",
        "density",
        "-n",
        "3",
        "-l",
        "2",
        "-m",
        "-2",
        "-vv",
    ])
    .unwrap();
    assert_eq!(cli.command, Some(Command::Density { n: 3, l: 2, m: -2 }));
    assert_eq!(cli.config.unwrap().to_str(), Some("render.yml"));
    assert_eq!(cli.verbose, 2);

    let cli = Cli::try_parse_from(["hydrogen-orbitals", "radial", "-n", "2", "-l", "0", "-o", "out.log"])
        .unwrap();
    assert_eq!(cli.command, Some(Command::Radial { n: 2, l: 0 }));
    assert_eq!(cli.output.unwrap().to_str(), Some("out.log"));
}

#[test]
fn test_interfaces_cli_rejections() {
    // Density needs n; radial takes no m; quantum numbers must be integers.
    assert!(Cli::try_parse_from(["hydrogen-orbitals", "density", "-l", "1", "-m", "0"]).is_err());
    assert!(
        Cli::try_parse_from(["hydrogen-orbitals", "radial", "-n", "2", "-l", "1", "-m", "0"])
            .is_err()
    );
    assert!(Cli::try_parse_from(["hydrogen-orbitals", "shape", "-l", "one", "-m", "0"]).is_err());
    assert!(Cli::try_parse_from(["hydrogen-orbitals", "radial", "-n", "-2", "-l", "0"]).is_err());

    // No subcommand parses, and the binary prints help for it.
    let cli = Cli::try_parse_from(["hydrogen-orbitals"]).unwrap();
    assert!(cli.command.is_none());
}

#[test]
fn test_interfaces_cli_verbosity_level() {
    assert_eq!(verbosity_level(0), LevelFilter::Warn);
    assert_eq!(verbosity_level(1), LevelFilter::Info);
    assert_eq!(verbosity_level(2), LevelFilter::Debug);
    assert_eq!(verbosity_level(7), LevelFilter::Trace);
}

#[test]
fn test_interfaces_cli_logging_config() {
    let config = logging_config(None, 1).unwrap();
    assert_eq!(config.appenders().len(), 2);
    assert_eq!(config.root().level(), LevelFilter::Info);
    let output = config
        .loggers()
        .iter()
        .find(|logger| logger.name() == OUTPUT_LOGGER)
        .unwrap();
    assert!(!output.additive());
    assert_eq!(output.appenders(), ["stdout".to_string()]);

    let dir = env::temp_dir().join(format!("hydrogen-cli-test-{}", std::process::id()));
    fs::create_dir_all(&dir).unwrap();
    let log_path = dir.join("run.log");
    let config = logging_config(Some(&log_path), 0).unwrap();
    assert_eq!(config.appenders().len(), 3);
    assert!(log_path.exists());
    fs::remove_dir_all(&dir).unwrap();
}

#[test]
fn test_interfaces_cli_physics_cause() {
    let domain_err: anyhow::Error = QuantumState::new(1, 1, 0).unwrap_err().into();
    assert_eq!(
        physics_cause(&domain_err),
        Some(&PhysicsDomainError::Radial { n: 1, l: 1 })
    );

    let wrapped = QuantumState::new(2, 1, 2)
        .context("Unable to set up the density slice")
        .unwrap_err();
    assert_eq!(
        physics_cause(&wrapped),
        Some(&PhysicsDomainError::Angular { l: 1, m: 2 })
    );

    let other = anyhow::anyhow!("Unable to read configuration file");
    assert!(physics_cause(&other).is_none());
}
