use std::process;

use anyhow::{self, Context};
use clap::{CommandFactory, Parser};

use hydrogen_orbitals::interfaces::cli::{
    log_heading, logging_config, report_failure, Cli, Command,
};
use hydrogen_orbitals::interfaces::input::Input;
use hydrogen_orbitals::interfaces::InputHandle;

fn run(cli: &Cli, command: &Command) -> Result<(), anyhow::Error> {
    let input = match cli.config.as_ref() {
        Some(path) => Input::from_yaml(path)?,
        None => Input::default(),
    };
    log::debug!("Dispatching {command:?}.");
    input.handle(command)
}

fn main() {
    let cli = Cli::parse();
    let Some(command) = cli.command.as_ref() else {
        if let Err(err) = Cli::command().print_help() {
            eprintln!("UNEXPECTED ERROR: {err}");
            process::exit(1);
        }
        return;
    };

    let logging = logging_config(cli.output.as_deref(), cli.verbose)
        .and_then(|config| log4rs::init_config(config).context("Unable to initialise logging"));
    if let Err(err) = logging {
        eprintln!("UNEXPECTED ERROR: {err:#}");
        process::exit(1);
    }

    log_heading();
    if let Err(err) = run(&cli, command) {
        report_failure(&err);
        process::exit(1);
    }
}
