// src/config.rs
use crate::cli::Cli;
use crate::error::GreetError;

pub const DEFAULT_NAME: &str = "World";
pub const DEFAULT_REPEAT: &str = "1";

const NAME_VAR: &str = "ARGS_NAME";
const REPEAT_VAR: &str = "FLAGS_REPEAT";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum CaseMode {
  #[default]
  Preserve,
  Upper,
  Lower,
}

impl CaseMode {
  /// Uppercase is checked first, so it wins when both flags are set.
  pub fn from_flags(uppercase: bool, lowercase: bool) -> Self {
    if uppercase {
      CaseMode::Upper
    } else if lowercase {
      CaseMode::Lower
    } else {
      CaseMode::Preserve
    }
  }

  pub fn apply(self, text: String) -> String {
    match self {
      CaseMode::Preserve => text,
      CaseMode::Upper => text.to_uppercase(),
      CaseMode::Lower => text.to_lowercase(),
    }
  }
}

/// Fully resolved greeting parameters, with defaults filled in.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GreetConfig {
  pub name: String,
  pub age: Option<String>,
  pub case: CaseMode,
  pub repeat: usize,
}

impl GreetConfig {
  pub fn from_cli(cli: &Cli) -> Result<Self, GreetError> {
    Self::resolve(cli, |key| std::env::var(key).ok())
  }

  /// `lookup` backs up clap's env binding so an empty variable is still seen
  /// as set even if clap dropped it.
  pub fn resolve<F>(cli: &Cli, lookup: F) -> Result<Self, GreetError>
  where
    F: Fn(&str) -> Option<String>,
  {
    let name = cli
      .name
      .clone()
      .or_else(|| lookup(NAME_VAR))
      .unwrap_or_else(|| DEFAULT_NAME.to_string());
    let age = non_empty(cli.age.as_deref()).map(str::to_string);
    let repeat_text = cli
      .repeat
      .clone()
      .or_else(|| lookup(REPEAT_VAR))
      .unwrap_or_else(|| DEFAULT_REPEAT.to_string());
    let repeat = parse_repeat(&repeat_text)?;

    Ok(GreetConfig {
      name,
      age,
      case: CaseMode::from_flags(cli.uppercase, cli.lowercase),
      repeat,
    })
  }
}

// An empty age is the same as no age.
fn non_empty(value: Option<&str>) -> Option<&str> {
  value.filter(|v| !v.is_empty())
}

/// Surrounding whitespace is ignored. Negative counts are valid integers and
/// print nothing; counts past `usize::MAX` are clamped.
pub fn parse_repeat(value: &str) -> Result<usize, GreetError> {
  let count: i64 = value.trim().parse().map_err(|e| GreetError::RepeatParse {
    value: value.to_string(),
    source: e,
  })?;
  if count < 0 {
    return Ok(0);
  }
  Ok(usize::try_from(count).unwrap_or(usize::MAX))
}
