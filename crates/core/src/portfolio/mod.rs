//! Portfolio module - per-instrument valuation pipeline and aggregation.

mod aggregator_service;
mod pipeline_service;
mod report_model;
mod report_model_tests;

pub use aggregator_service::{summarize, PortfolioAggregator, PortfolioAggregatorTrait};
pub use pipeline_service::{InstrumentPipeline, InstrumentPipelineTrait};
pub use report_model::{InstrumentReport, PortfolioSummary, PortfolioValuation, Valuation};
