// src/main.rs
mod cli;
mod config;
mod error;
mod greeting;

use clap::Parser;
use cli::Cli;
use config::GreetConfig;
use error::GreetError;
use log::LevelFilter;
use std::io;
use std::process::ExitCode;

fn main() -> ExitCode {
  let cli = Cli::parse();

  // Setup logging based on verbosity
  let log_level = match cli.verbose {
    0 => LevelFilter::Info,
    1 => LevelFilter::Debug,
    _ => LevelFilter::Trace,
  };
  env_logger::Builder::new().filter_level(log_level).init();

  log::debug!("CLI args: {:?}", cli);

  match run(&cli) {
    Ok(()) => ExitCode::SUCCESS,
    Err(e) => {
      eprintln!("Error: {}", e);
      ExitCode::FAILURE
    }
  }
}

fn run(cli: &Cli) -> Result<(), GreetError> {
  // Resolve everything before writing, so a bad repeat count prints nothing
  let config = GreetConfig::from_cli(cli)?;
  log::debug!("Resolved config: {:?}", config);

  let stdout = io::stdout();
  let mut out = stdout.lock();
  greeting::run_greet(&config, &mut out)?;

  Ok(())
}
