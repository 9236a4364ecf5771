//! Market data module - price history models, provider trait, and providers.

mod market_data_errors;
mod market_data_model;
mod market_data_model_tests;
mod market_data_traits;
pub(crate) mod providers;

pub use market_data_errors::MarketDataError;
pub use market_data_model::{normalize_history, PricePoint};
pub use market_data_traits::PriceHistoryProviderTrait;

pub use providers::yahoo_provider::YahooProvider;
