use std::sync::Arc;

use async_trait::async_trait;
use log::{debug, warn};
use rust_decimal::Decimal;
use rust_decimal_macros::dec;

use crate::constants::{
    FORECAST_DAILY_PERIODS, FORECAST_HORIZON, LOOKBACK_DAYS, REPORT_DECIMAL_PRECISION,
};
use crate::errors::{Error, Result};
use crate::forecast::ForecastEngineTrait;
use crate::holdings::Holding;
use crate::market_data::{normalize_history, MarketDataError, PriceHistoryProviderTrait};
use crate::portfolio::report_model::{InstrumentReport, Valuation};

/// Per-instrument valuation pipeline: fetch, validate, forecast, derive.
///
/// The signature is infallible on purpose: a failed holding must never
/// abort the portfolio run, so every failure collapses into an
/// `Unavailable` report here.
#[async_trait]
pub trait InstrumentPipelineTrait: Send + Sync {
    async fn process(&self, holding: &Holding) -> InstrumentReport;
}

pub struct InstrumentPipeline {
    price_provider: Arc<dyn PriceHistoryProviderTrait>,
    forecast_engine: Arc<dyn ForecastEngineTrait>,
}

impl InstrumentPipeline {
    pub fn new(
        price_provider: Arc<dyn PriceHistoryProviderTrait>,
        forecast_engine: Arc<dyn ForecastEngineTrait>,
    ) -> Self {
        Self {
            price_provider,
            forecast_engine,
        }
    }

    async fn value_holding(&self, holding: &Holding) -> Result<Valuation> {
        let history = self
            .price_provider
            .fetch_history(&holding.symbol, LOOKBACK_DAYS)
            .await?;
        if history.is_empty() {
            // An empty series is unavailability, not a zero-length result
            return Err(MarketDataError::NoData(holding.symbol.clone()).into());
        }

        let history = normalize_history(history);

        let model = self.forecast_engine.fit(&history)?;
        let forecast = model.predict(FORECAST_DAILY_PERIODS)?;
        if forecast.len() < FORECAST_HORIZON {
            return Err(Error::Unexpected(format!(
                "Engine returned {} of {} requested periods for {}",
                forecast.len(),
                FORECAST_DAILY_PERIODS,
                holding.symbol
            )));
        }
        // Tail selection: keep the last 5 of the 150 daily steps, so
        // projections sit roughly 146-150 days out in forecast order.
        let projections = &forecast[forecast.len() - FORECAST_HORIZON..];

        let last_close = history[history.len() - 1].close;

        // Rounding to 2 dp happens here, at derivation; reports store
        // final precision and presentation re-derives nothing.
        let last_price = last_close.round_dp(REPORT_DECIMAL_PRECISION);
        let current_value = (last_price * holding.quantity).round_dp(REPORT_DECIMAL_PRECISION);
        // Validation rejects zero average cost up front; guard anyway so a
        // caller that skips validation gets Unavailable, not a panic.
        if holding.average_cost.is_zero() {
            return Err(Error::Unexpected(format!(
                "Zero average cost for {}",
                holding.symbol
            )));
        }
        let profit_loss_pct = ((last_price - holding.average_cost) / holding.average_cost
            * dec!(100))
        .round_dp(REPORT_DECIMAL_PRECISION);

        let mut projected_values = [Decimal::ZERO; FORECAST_HORIZON];
        for (slot, point) in projected_values.iter_mut().zip(projections.iter()) {
            *slot = (point.predicted * holding.quantity).round_dp(REPORT_DECIMAL_PRECISION);
        }

        Ok(Valuation::Valued {
            last_price,
            current_value,
            profit_loss_pct,
            projected_values,
        })
    }
}

#[async_trait]
impl InstrumentPipelineTrait for InstrumentPipeline {
    async fn process(&self, holding: &Holding) -> InstrumentReport {
        match self.value_holding(holding).await {
            Ok(valuation) => {
                debug!("Valued holding {}", holding.symbol);
                InstrumentReport::new(holding, valuation)
            }
            Err(e) => {
                warn!("Error valuing {}: {}", holding.symbol, e);
                InstrumentReport::unavailable(holding)
            }
        }
    }
}
