//! Forecast module - engine traits, models, and the trend engine.

mod forecast_errors;
mod forecast_model;
mod forecast_traits;
mod trend_engine;
mod trend_engine_tests;

pub use forecast_errors::ForecastError;
pub use forecast_model::ForecastPoint;
pub use forecast_traits::{ForecastEngineTrait, ForecastModelTrait};
pub use trend_engine::TrendEngine;
