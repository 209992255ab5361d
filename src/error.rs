use std::io;
use std::result::Result as StdResult;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum Error {
    #[error("Invalid coin_id. Must be one of: {0}")]
    InvalidCoin(String),
    #[error("Invalid range. Must be one of: {0}")]
    InvalidRange(String),
    #[error("Binance returned status {0}")]
    UpstreamStatus(u16),
    #[error("Invalid upstream data: {0}")]
    UpstreamData(String),
    #[error("Configuration error: {0}")]
    Config(String),
    #[error("IO error: {0}")]
    Io(#[from] io::Error),
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),
}

impl Error {
    /// Client errors map to a 400 response; everything else is treated as
    /// upstream unavailability and surfaced as a generic 503.
    pub fn is_invalid_input(&self) -> bool {
        matches!(self, Error::InvalidCoin(_) | Error::InvalidRange(_))
    }
}

pub type Result<T> = StdResult<T, Error>;
