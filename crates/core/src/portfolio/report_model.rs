//! Valuation report domain models.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::constants::FORECAST_HORIZON;
use crate::holdings::Holding;

/// Valuation outcome for one holding.
///
/// Either every figure is numeric or the whole valuation is unavailable.
/// The two-variant shape makes a half-populated report unrepresentable;
/// consumers check the tag, never a string sentinel.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
#[serde(rename_all = "camelCase", tag = "status")]
pub enum Valuation {
    #[serde(rename_all = "camelCase")]
    Valued {
        /// Most recent observed close, not a forecast value
        last_price: Decimal,
        current_value: Decimal,
        profit_loss_pct: Decimal,
        /// Projected position values, one per forecast horizon period
        projected_values: [Decimal; FORECAST_HORIZON],
    },
    Unavailable,
}

impl Valuation {
    pub fn is_valued(&self) -> bool {
        matches!(self, Valuation::Valued { .. })
    }
}

/// Per-holding output of the instrument pipeline. Created once per run,
/// never mutated afterward.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct InstrumentReport {
    pub symbol: String,
    pub quantity: Decimal,
    pub average_cost: Decimal,
    pub valuation: Valuation,
}

impl InstrumentReport {
    pub fn new(holding: &Holding, valuation: Valuation) -> Self {
        InstrumentReport {
            symbol: holding.symbol.clone(),
            quantity: holding.quantity,
            average_cost: holding.average_cost,
            valuation,
        }
    }

    /// Report for a holding whose data or forecast failed.
    pub fn unavailable(holding: &Holding) -> Self {
        Self::new(holding, Valuation::Unavailable)
    }

    /// Cost basis of the position, always computable from input data.
    pub fn invested(&self) -> Decimal {
        self.average_cost * self.quantity
    }
}

/// Portfolio-level totals, recomputed fresh each run from the reports.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct PortfolioSummary {
    /// Sum of current values over valued holdings only
    pub total_current_value: Decimal,
    /// Sum of avg_cost x quantity over ALL holdings, valued or not
    pub total_invested: Decimal,
    /// None when total invested is zero
    pub total_profit_loss_pct: Option<Decimal>,
    /// Per-horizon sums over holdings valued at that position
    pub total_projected_values: [Decimal; FORECAST_HORIZON],
}

/// The full output of one aggregation run.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct PortfolioValuation {
    /// Reports in the holdings' original order
    pub reports: Vec<InstrumentReport>,
    pub summary: PortfolioSummary,
}
