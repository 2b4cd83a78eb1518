// src/cli.rs
use clap::{ArgAction, Parser};

#[derive(Parser, Debug)]
#[command(
    name = "greet",
    author,
    version,
    about = "Prints a greeting built from environment-encoded arguments and flags.",
    long_about = None
)]
pub struct Cli {
  /// Name of the person to greet [default: World]
  #[arg(long)]
  #[clap(env = "ARGS_NAME")]
  pub name: Option<String>,

  /// Age of the person, appended as a second sentence when set
  #[arg(long)]
  #[clap(env = "ARGS_AGE")]
  pub age: Option<String>,

  /// Print the greeting in uppercase (takes precedence over --lowercase)
  #[arg(
    long,
    action = ArgAction::Set,
    num_args = 0..=1,
    default_value = "false",
    default_missing_value = "true",
    value_parser = parse_flag
  )]
  #[clap(env = "FLAGS_UPPERCASE")]
  pub uppercase: bool,

  /// Print the greeting in lowercase
  #[arg(
    long,
    action = ArgAction::Set,
    num_args = 0..=1,
    default_value = "false",
    default_missing_value = "true",
    value_parser = parse_flag
  )]
  #[clap(env = "FLAGS_LOWERCASE")]
  pub lowercase: bool,

  /// Number of times to print the greeting [default: 1]
  #[arg(long, allow_hyphen_values = true)]
  #[clap(env = "FLAGS_REPEAT")]
  pub repeat: Option<String>,

  /// Increase verbosity level (e.g., -v, -vv)
  #[arg(short, long, action = ArgAction::Count)]
  pub verbose: u8,
}

/// Only the literal `true` (any casing) enables a flag; every other text disables it.
pub fn parse_flag(value: &str) -> Result<bool, String> {
  Ok(value.eq_ignore_ascii_case("true"))
}
