//! Error types for the CLI

use thiserror::Error;

/// Main CLI error type
#[derive(Error, Debug)]
pub enum CliError {
    /// Configuration error
    #[error("Configuration error: {0}")]
    Config(String),

    /// Registration error
    #[error("Registration error: {0}")]
    Registration(#[from] aoc_dispatch::RegistrationError),

    /// Dispatch error
    #[error("{0}")]
    Dispatch(#[from] aoc_dispatch::DispatchError),

    /// IO error
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}
