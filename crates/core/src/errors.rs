//! Core error types for the Foliocast application.
//!
//! This module defines the root error type plus validation errors for
//! holdings configuration. Market data and forecast errors live in their
//! own modules and are wrapped here.

use thiserror::Error;

use crate::forecast::ForecastError;
use crate::market_data::MarketDataError;

/// Type alias for Result using our Error type.
pub type Result<T> = std::result::Result<T, Error>;

/// Root error type for the portfolio application.
#[derive(Error, Debug)]
pub enum Error {
    #[error("Input validation failed: {0}")]
    Validation(#[from] ValidationError),

    #[error("Market data operation failed: {0}")]
    MarketData(#[from] MarketDataError),

    #[error("Forecast operation failed: {0}")]
    Forecast(#[from] ForecastError),

    #[error("Failed to load configuration: {0}")]
    ConfigIO(String),

    #[error("Unexpected error: {0}")]
    Unexpected(String),
}

/// Validation errors for holdings configuration.
///
/// A malformed holding is a configuration error, not a runtime one: it
/// aborts the run before any pipeline work instead of producing a
/// misleading report.
#[derive(Error, Debug)]
pub enum ValidationError {
    #[error("Malformed holding '{symbol}': {reason}")]
    MalformedHolding { symbol: String, reason: String },

    #[error("Duplicate holding symbol '{0}' in portfolio")]
    DuplicateSymbol(String),

    #[error("Invalid input: {0}")]
    InvalidInput(String),

    #[error("Failed to parse decimal number: {0}")]
    DecimalParse(#[from] rust_decimal::Error),
}

impl From<rust_decimal::Error> for Error {
    fn from(err: rust_decimal::Error) -> Self {
        Error::Validation(ValidationError::DecimalParse(err))
    }
}

impl From<std::io::Error> for Error {
    fn from(err: std::io::Error) -> Self {
        Error::ConfigIO(err.to_string())
    }
}

impl From<Error> for String {
    fn from(err: Error) -> Self {
        err.to_string()
    }
}
