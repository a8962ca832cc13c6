//! unitpath - classpath and isolation assembler for deployable units
//!
//! Command line front end: builds a unit against a local repository and
//! prints its artifact descriptor or classpath.

use clap::Parser;
use miette::Diagnostic;

mod cli;
mod commands;
mod logging;

use cli::{Cli, Commands};
use unitpath::error::Result;
use unitpath::settings::Settings;

/// Settings from the config file and environment, overridden by flags
fn settings(cli: &Cli) -> Result<Settings> {
    let mut settings = Settings::load(cli.config.as_deref())?;

    if let Some(repository) = &cli.repository {
        settings.repository = Some(repository.clone());
    }
    if let Some(version) = &cli.runtime_version {
        settings.runtime_version = Some(version.clone());
    }

    Ok(settings)
}

fn run(cli: Cli) -> miette::Result<()> {
    let settings = settings(&cli)?;

    match cli.command {
        Commands::Describe(args) => commands::describe::run(&settings, args),
        Commands::Classpath(args) => commands::classpath::run(&settings, args),
    }
}

/// Print an error, its causes and the first help text found along the chain
fn report(error: &miette::Report) {
    eprintln!("Error: {error}");
    for cause in error.chain().skip(1) {
        eprintln!("  Caused by: {cause}");
    }

    let mut current: &dyn Diagnostic = &**error;
    loop {
        if let Some(help) = current.help() {
            eprintln!("  Help: {help}");
            break;
        }
        match current.diagnostic_source() {
            Some(next) => current = next,
            None => break,
        }
    }
}

fn main() {
    let cli = Cli::parse();
    logging::init_tracing(cli.verbose);

    if let Err(e) = run(cli) {
        report(&e);
        std::process::exit(1);
    }
}
