use super::forecast_errors::ForecastError;
use super::forecast_model::ForecastPoint;
use crate::market_data::PricePoint;

/// A fitted model, ready to produce point forecasts.
pub trait ForecastModelTrait: Send + Sync {
    /// Predicts the requested number of future daily periods, one calendar
    /// day per period starting after the last fitted observation.
    fn predict(&self, periods: usize) -> Result<Vec<ForecastPoint>, ForecastError>;
}

/// Forecast engine: fits a model to an observed price series.
///
/// Engines are CPU-bound and synchronous; callers run them inline on a
/// normalized (sorted, duplicate-free) series.
pub trait ForecastEngineTrait: Send + Sync {
    fn fit(&self, history: &[PricePoint]) -> Result<Box<dyn ForecastModelTrait>, ForecastError>;
}
