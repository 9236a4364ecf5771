//! Foliocast CLI - values a holdings file and prints the portfolio table.
//!
//! Usage: `foliocast [holdings.json]`. The holdings file is a JSON array
//! of `{"symbol", "quantity", "averageCost"}` objects. All figures in the
//! table are pre-computed and pre-rounded by the core; this binary only
//! formats them.

use std::env;
use std::fs;
use std::sync::Arc;

use anyhow::{Context, Result};
use log::info;
use rust_decimal::Decimal;

use foliocast_core::forecast::TrendEngine;
use foliocast_core::holdings::Holding;
use foliocast_core::market_data::YahooProvider;
use foliocast_core::{
    InstrumentPipeline, PortfolioAggregator, PortfolioAggregatorTrait, PortfolioValuation,
    Valuation,
};

const DEFAULT_HOLDINGS_PATH: &str = "holdings.json";

const UNAVAILABLE: &str = "N/A";

fn load_holdings(path: &str) -> Result<Vec<Holding>> {
    let contents =
        fs::read_to_string(path).with_context(|| format!("Failed to read holdings file {path}"))?;
    let holdings: Vec<Holding> =
        serde_json::from_str(&contents).with_context(|| format!("Failed to parse {path}"))?;
    Ok(holdings)
}

fn money(value: Decimal) -> String {
    format!("{value:.2}")
}

fn render(valuation: &PortfolioValuation) {
    println!(
        "{:<12} {:>8} {:>10} {:>10} {:>12} {:>9} {:>12} {:>12} {:>12} {:>12} {:>12}",
        "Instrument",
        "Qty",
        "Avg cost",
        "LTP",
        "Cur val",
        "P&L (%)",
        "Month 1",
        "Month 2",
        "Month 3",
        "Month 4",
        "Month 5",
    );

    for report in &valuation.reports {
        match &report.valuation {
            Valuation::Valued {
                last_price,
                current_value,
                profit_loss_pct,
                projected_values,
            } => {
                println!(
                    "{:<12} {:>8} {:>10} {:>10} {:>12} {:>9} {:>12} {:>12} {:>12} {:>12} {:>12}",
                    report.symbol,
                    report.quantity,
                    money(report.average_cost),
                    money(*last_price),
                    money(*current_value),
                    money(*profit_loss_pct),
                    money(projected_values[0]),
                    money(projected_values[1]),
                    money(projected_values[2]),
                    money(projected_values[3]),
                    money(projected_values[4]),
                );
            }
            Valuation::Unavailable => {
                println!(
                    "{:<12} {:>8} {:>10} {:>10} {:>12} {:>9} {:>12} {:>12} {:>12} {:>12} {:>12}",
                    report.symbol,
                    report.quantity,
                    money(report.average_cost),
                    UNAVAILABLE,
                    UNAVAILABLE,
                    UNAVAILABLE,
                    UNAVAILABLE,
                    UNAVAILABLE,
                    UNAVAILABLE,
                    UNAVAILABLE,
                    UNAVAILABLE,
                );
            }
        }
    }

    let summary = &valuation.summary;
    let total_pl = summary
        .total_profit_loss_pct
        .map(money)
        .unwrap_or_else(|| UNAVAILABLE.to_string());
    println!(
        "{:<12} {:>8} {:>10} {:>10} {:>12} {:>9} {:>12} {:>12} {:>12} {:>12} {:>12}",
        "Total",
        "",
        "",
        "",
        money(summary.total_current_value),
        total_pl,
        money(summary.total_projected_values[0]),
        money(summary.total_projected_values[1]),
        money(summary.total_projected_values[2]),
        money(summary.total_projected_values[3]),
        money(summary.total_projected_values[4]),
    );
    println!("Total invested: {}", money(summary.total_invested));
}

#[tokio::main]
async fn main() -> Result<()> {
    env_logger::init();

    let path = env::args()
        .nth(1)
        .unwrap_or_else(|| DEFAULT_HOLDINGS_PATH.to_string());
    let holdings = load_holdings(&path)?;
    info!("Loaded {} holdings from {}", holdings.len(), path);

    let provider = Arc::new(YahooProvider::new()?);
    let engine = Arc::new(TrendEngine::new());
    let pipeline = Arc::new(InstrumentPipeline::new(provider, engine));
    let aggregator = PortfolioAggregator::new(pipeline);

    let valuation = aggregator.aggregate(&holdings).await?;
    render(&valuation);

    Ok(())
}
