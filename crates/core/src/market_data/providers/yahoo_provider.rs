use std::time::{Duration, SystemTime};

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use log::debug;
use num_traits::FromPrimitive;
use rust_decimal::Decimal;
use yahoo_finance_api as yahoo;

use crate::market_data::market_data_errors::MarketDataError;
use crate::market_data::market_data_model::PricePoint;
use crate::market_data::market_data_traits::PriceHistoryProviderTrait;

const SECS_PER_DAY: u64 = 86_400;

/// Price source adapter backed by Yahoo Finance.
pub struct YahooProvider {
    provider: yahoo::YahooConnector,
}

impl YahooProvider {
    pub fn new() -> Result<Self, MarketDataError> {
        let provider = yahoo::YahooConnector::new()?;
        Ok(YahooProvider { provider })
    }

    fn yahoo_quote_to_price_point(
        &self,
        symbol: &str,
        quote: &yahoo::Quote,
    ) -> Result<PricePoint, MarketDataError> {
        let timestamp: DateTime<Utc> = DateTime::from_timestamp(quote.timestamp as i64, 0)
            .ok_or_else(|| {
                MarketDataError::ParsingError(format!(
                    "Invalid quote timestamp {} for {}",
                    quote.timestamp, symbol
                ))
            })?;
        let close = Decimal::from_f64(quote.close).ok_or_else(|| {
            MarketDataError::ParsingError(format!(
                "Invalid close price {} for {}",
                quote.close, symbol
            ))
        })?;
        // Calendar date only; intraday time and zone are irrelevant downstream
        Ok(PricePoint::new(timestamp.date_naive(), close))
    }
}

#[async_trait]
impl PriceHistoryProviderTrait for YahooProvider {
    async fn fetch_history(
        &self,
        symbol: &str,
        lookback_days: i64,
    ) -> Result<Vec<PricePoint>, MarketDataError> {
        let end = SystemTime::now();
        let start = end
            .checked_sub(Duration::from_secs(lookback_days.max(0) as u64 * SECS_PER_DAY))
            .unwrap_or(SystemTime::UNIX_EPOCH);

        debug!("Fetching {} days of history for {}", lookback_days, symbol);

        let response = self
            .provider
            .get_quote_history(symbol, start.into(), end.into())
            .await?;

        let quotes = response.quotes()?;
        if quotes.is_empty() {
            return Err(MarketDataError::NoData(symbol.to_string()));
        }

        quotes
            .iter()
            .map(|q| self.yahoo_quote_to_price_point(symbol, q))
            .collect()
    }
}
