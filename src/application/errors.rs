//! Application layer errors

use thiserror::Error;

/// Errors that escape a demo and end the run
#[derive(Error, Debug)]
pub enum DemoError {
    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),

    #[error("Input error: {0}")]
    Input(#[from] InputError),
}

/// Interactive input errors
#[derive(Error, Debug, PartialEq, Eq)]
pub enum InputError {
    #[error("input closed before an answer was given")]
    Closed,

    #[error("expected a number, got {0:?}")]
    NotANumber(String),
}

/// Menu selection errors, handled inside the demo that shows the menu
#[derive(Error, Debug, PartialEq, Eq)]
pub enum MenuError {
    #[error("choice {choice} is out of range (1-{max})")]
    OutOfRange { choice: i64, max: i64 },
}

/// Configuration errors
#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("Missing required field: {0}")]
    MissingField(String),

    #[error("Invalid value: {0}")]
    InvalidValue(String),

    #[error("Parse error: {0}")]
    Parse(String),
}
