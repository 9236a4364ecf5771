use std::sync::Arc;
use std::time::Duration;

use async_trait::async_trait;
use futures::stream::{self, StreamExt};
use log::{debug, warn};
use rust_decimal::Decimal;
use rust_decimal_macros::dec;
use tokio::time::timeout;

use crate::constants::{
    DEFAULT_HOLDING_TIMEOUT_SECS, DEFAULT_PIPELINE_CONCURRENCY, FORECAST_HORIZON,
    REPORT_DECIMAL_PRECISION,
};
use crate::errors::Result;
use crate::holdings::{validate_holdings, Holding};
use crate::portfolio::pipeline_service::InstrumentPipelineTrait;
use crate::portfolio::report_model::{
    InstrumentReport, PortfolioSummary, PortfolioValuation, Valuation,
};

#[async_trait]
pub trait PortfolioAggregatorTrait: Send + Sync {
    /// Values every holding and folds the reports into portfolio totals.
    ///
    /// Reports come back in the holdings' original order. A malformed
    /// holding aborts the run before any pipeline work; a holding that
    /// fails or times out during valuation degrades to `Unavailable`.
    async fn aggregate(&self, holdings: &[Holding]) -> Result<PortfolioValuation>;
}

pub struct PortfolioAggregator {
    pipeline: Arc<dyn InstrumentPipelineTrait>,
    concurrency: usize,
    holding_timeout: Duration,
}

impl PortfolioAggregator {
    pub fn new(pipeline: Arc<dyn InstrumentPipelineTrait>) -> Self {
        Self {
            pipeline,
            concurrency: DEFAULT_PIPELINE_CONCURRENCY,
            holding_timeout: Duration::from_secs(DEFAULT_HOLDING_TIMEOUT_SECS),
        }
    }

    /// Bounds how many holdings are valued concurrently. External
    /// providers rate-limit and engines are CPU-bound, so this is a
    /// worker count, not one task per holding.
    pub fn with_concurrency(mut self, concurrency: usize) -> Self {
        self.concurrency = concurrency.max(1);
        self
    }

    /// A stuck external call must not block the rest of the portfolio;
    /// a holding that exceeds this budget reports as unavailable.
    pub fn with_holding_timeout(mut self, holding_timeout: Duration) -> Self {
        self.holding_timeout = holding_timeout;
        self
    }
}

#[async_trait]
impl PortfolioAggregatorTrait for PortfolioAggregator {
    async fn aggregate(&self, holdings: &[Holding]) -> Result<PortfolioValuation> {
        validate_holdings(holdings)?;

        debug!(
            "Aggregating {} holdings ({} workers, {:?} per-holding timeout)",
            holdings.len(),
            self.concurrency,
            self.holding_timeout
        );

        let holding_timeout = self.holding_timeout;
        // Owned holdings: the buffered futures outlive the closure call,
        // so each one must carry its holding rather than borrow it.
        let reports: Vec<InstrumentReport> = stream::iter(holdings.to_vec())
            .map(|holding| {
                let pipeline = Arc::clone(&self.pipeline);
                async move {
                    match timeout(holding_timeout, pipeline.process(&holding)).await {
                        Ok(report) => report,
                        Err(_) => {
                            warn!(
                                "Valuation of {} timed out after {:?}",
                                holding.symbol, holding_timeout
                            );
                            InstrumentReport::unavailable(&holding)
                        }
                    }
                }
            })
            .buffered(self.concurrency)
            .collect()
            .await;

        let summary = summarize(&reports);
        Ok(PortfolioValuation { reports, summary })
    }
}

/// Pure fold of the reports into portfolio totals.
///
/// Unavailable holdings contribute zero to current value and projections
/// but their cost basis still counts toward total invested, which uses
/// input data only.
pub fn summarize(reports: &[InstrumentReport]) -> PortfolioSummary {
    let mut total_current_value = Decimal::ZERO;
    let mut total_invested = Decimal::ZERO;
    let mut total_projected_values = [Decimal::ZERO; FORECAST_HORIZON];

    for report in reports {
        total_invested += report.invested();
        if let Valuation::Valued {
            current_value,
            projected_values,
            ..
        } = &report.valuation
        {
            total_current_value += *current_value;
            for (total, value) in total_projected_values.iter_mut().zip(projected_values.iter()) {
                *total += *value;
            }
        }
    }

    let total_current_value = total_current_value.round_dp(REPORT_DECIMAL_PRECISION);
    let total_invested = total_invested.round_dp(REPORT_DECIMAL_PRECISION);
    // Zero invested means zero quantity everywhere; P&L is undefined
    // rather than a division error.
    let total_profit_loss_pct = if total_invested.is_zero() {
        None
    } else {
        Some(
            ((total_current_value - total_invested) / total_invested * dec!(100))
                .round_dp(REPORT_DECIMAL_PRECISION),
        )
    };

    for total in total_projected_values.iter_mut() {
        *total = total.round_dp(REPORT_DECIMAL_PRECISION);
    }

    PortfolioSummary {
        total_current_value,
        total_invested,
        total_profit_loss_pct,
        total_projected_values,
    }
}
