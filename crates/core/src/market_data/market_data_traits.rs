use async_trait::async_trait;

use super::market_data_errors::MarketDataError;
use super::market_data_model::PricePoint;

/// Price source adapter.
///
/// Returns daily (date, close) observations for a symbol over a trailing
/// lookback window. No retry or backoff contract: any transient failure
/// surfaces as an error and is treated as unavailability for the run.
#[async_trait]
pub trait PriceHistoryProviderTrait: Send + Sync {
    async fn fetch_history(
        &self,
        symbol: &str,
        lookback_days: i64,
    ) -> Result<Vec<PricePoint>, MarketDataError>;
}
