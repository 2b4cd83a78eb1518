// src/error.rs
use std::num::ParseIntError;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum GreetError {
  #[error("IO Error: {0}")]
  Io(#[from] std::io::Error),

  #[error("Could not parse repeat count '{value}' as an integer: {source}")]
  RepeatParse {
    value: String,
    #[source]
    source: ParseIntError,
  },
}
