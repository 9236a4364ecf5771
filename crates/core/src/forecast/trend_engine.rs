//! Linear trend forecast engine.
//!
//! Fits an ordinary-least-squares line to (day index, close) and
//! extrapolates it forward one calendar day per period. A deliberately
//! simple stand-in for heavier time-series models behind the same trait.

use chrono::{Duration, NaiveDate};
use num_traits::{FromPrimitive, ToPrimitive};
use rust_decimal::Decimal;

use super::forecast_errors::ForecastError;
use super::forecast_model::ForecastPoint;
use super::forecast_traits::{ForecastEngineTrait, ForecastModelTrait};
use crate::market_data::PricePoint;

/// Minimum observations needed to fit a line.
const MIN_OBSERVATIONS: usize = 2;

#[derive(Debug, Clone, Copy, Default)]
pub struct TrendEngine;

impl TrendEngine {
    pub fn new() -> Self {
        TrendEngine
    }
}

/// Fitted line y = intercept + slope * t, where t is the observation index.
struct TrendModel {
    intercept: f64,
    slope: f64,
    observations: usize,
    last_date: NaiveDate,
}

impl ForecastEngineTrait for TrendEngine {
    fn fit(&self, history: &[PricePoint]) -> Result<Box<dyn ForecastModelTrait>, ForecastError> {
        if history.len() < MIN_OBSERVATIONS {
            return Err(ForecastError::InsufficientHistory {
                got: history.len(),
                need: MIN_OBSERVATIONS,
            });
        }

        let n = history.len();
        let closes: Vec<f64> = history
            .iter()
            .map(|p| {
                p.close.to_f64().ok_or_else(|| {
                    ForecastError::Computation(format!("Close price {} is not finite", p.close))
                })
            })
            .collect::<Result<_, _>>()?;

        let t_mean = (n - 1) as f64 / 2.0;
        let y_mean = closes.iter().sum::<f64>() / n as f64;

        let mut covariance = 0.0;
        let mut variance = 0.0;
        for (t, y) in closes.iter().enumerate() {
            let dt = t as f64 - t_mean;
            covariance += dt * (y - y_mean);
            variance += dt * dt;
        }
        if variance == 0.0 {
            return Err(ForecastError::Computation(
                "Zero variance in time index".to_string(),
            ));
        }

        let slope = covariance / variance;
        let intercept = y_mean - slope * t_mean;

        let last_date = history[n - 1].date;

        Ok(Box::new(TrendModel {
            intercept,
            slope,
            observations: n,
            last_date,
        }))
    }
}

impl ForecastModelTrait for TrendModel {
    fn predict(&self, periods: usize) -> Result<Vec<ForecastPoint>, ForecastError> {
        let mut forecast = Vec::with_capacity(periods);
        for step in 1..=periods {
            let t = (self.observations - 1 + step) as f64;
            let value = self.intercept + self.slope * t;
            let predicted = Decimal::from_f64(value).ok_or_else(|| {
                ForecastError::Computation(format!("Non-finite forecast value at step {}", step))
            })?;
            let date = self.last_date + Duration::days(step as i64);
            forecast.push(ForecastPoint::new(date, predicted));
        }
        Ok(forecast)
    }
}
