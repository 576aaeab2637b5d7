use thiserror::Error;

/// Errors surfaced by the suggestion engine and its configuration.
#[derive(Debug, Error)]
pub enum Error {
    /// A distance bound below zero was requested. Configuration is left unchanged.
    #[error("can't set max edit distance to {0}, it must be >= 0")]
    NegativeDistance(i64),

    /// The corpus could not be read.
    #[error("failed to read corpus: {0}")]
    Io(#[from] std::io::Error),

    /// A settings document could not be parsed or rendered.
    #[error("invalid settings: {0}")]
    Settings(#[from] serde_json::Error),
}

pub type Result<T> = std::result::Result<T, Error>;
