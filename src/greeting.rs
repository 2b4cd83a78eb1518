// src/greeting.rs
use std::io::Write;

use log::{debug, trace};

use crate::config::GreetConfig;
use crate::error::GreetError;

pub fn build_greeting(name: &str, age: Option<&str>) -> String {
  let mut greeting = format!("Hello {}!", name);
  if let Some(age) = age {
    greeting.push_str(&format!(" You are {} years old.", age));
  }
  greeting
}

pub fn render(config: &GreetConfig) -> String {
  config
    .case
    .apply(build_greeting(&config.name, config.age.as_deref()))
}

pub fn run_greet<W: Write>(config: &GreetConfig, out: &mut W) -> Result<(), GreetError> {
  let greeting = render(config);
  debug!("Printing {:?} {} time(s)", greeting, config.repeat);

  for i in 0..config.repeat {
    trace!("Line {}", i + 1);
    writeln!(out, "{}", greeting)?;
  }
  out.flush()?;

  Ok(())
}

#[cfg(test)]
mod tests {
  use super::*;
  use crate::config::CaseMode;

  fn config(name: &str, age: Option<&str>, case: CaseMode, repeat: usize) -> GreetConfig {
    GreetConfig {
      name: name.to_string(),
      age: age.map(str::to_string),
      case,
      repeat,
    }
  }

  fn output(config: &GreetConfig) -> String {
    let mut buf = Vec::new();
    run_greet(config, &mut buf).unwrap();
    String::from_utf8(buf).unwrap()
  }

  #[test]
  fn greeting_without_age() {
    assert_eq!(build_greeting("World", None), "Hello World!");
  }

  #[test]
  fn greeting_with_age() {
    assert_eq!(
      build_greeting("Alice", Some("30")),
      "Hello Alice! You are 30 years old."
    );
  }

  #[test]
  fn render_applies_case_to_whole_sentence() {
    let c = config("Alice", Some("30"), CaseMode::Upper, 1);
    assert_eq!(render(&c), "HELLO ALICE! YOU ARE 30 YEARS OLD.");
    let c = config("Alice", None, CaseMode::Lower, 1);
    assert_eq!(render(&c), "hello alice!");
  }

  #[test]
  fn writes_one_line_per_repeat() {
    let c = config("World", None, CaseMode::Preserve, 3);
    assert_eq!(output(&c), "Hello World!\nHello World!\nHello World!\n");
  }

  #[test]
  fn zero_repeat_writes_nothing() {
    let c = config("World", None, CaseMode::Preserve, 0);
    assert_eq!(output(&c), "");
  }
}
