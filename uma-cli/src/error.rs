//! Error types for the CLI

use thiserror::Error;

/// Main CLI error type
#[derive(Error, Debug)]
pub enum CliError {
    /// Configuration error
    #[error("Configuration error: {0}")]
    Config(String),

    /// API client error
    #[error("{0}")]
    Client(#[from] uma_http_client::UmaError),

    /// Async runtime could not start
    #[error("Runtime error: {0}")]
    Runtime(#[from] std::io::Error),

    /// JSON output error
    #[error("JSON output error: {0}")]
    Json(#[from] serde_json::Error),
}
