use thiserror::Error;
use yahoo_finance_api::YahooError;

#[derive(Error, Debug)]
pub enum MarketDataError {
    /// No history exists for the symbol (delisted, unknown, or empty result)
    #[error("No price data found for symbol '{0}'")]
    NoData(String),

    #[error("Provider error: {0}")]
    ProviderError(String),

    #[error("Parsing error: {0}")]
    ParsingError(String),

    #[error("Unknown error: {0}")]
    Unknown(String),
}

impl From<YahooError> for MarketDataError {
    fn from(error: YahooError) -> Self {
        match error {
            YahooError::FetchFailed(e) => MarketDataError::ProviderError(e),
            YahooError::NoQuotes => MarketDataError::ProviderError("No quotes found".to_string()),
            YahooError::NoResult => MarketDataError::ProviderError("No data found".to_string()),
            _ => MarketDataError::Unknown(error.to_string()),
        }
    }
}
