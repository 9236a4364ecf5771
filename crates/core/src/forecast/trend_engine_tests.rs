//! Tests for the linear trend engine.

#[cfg(test)]
mod tests {
    use crate::forecast::{ForecastEngineTrait, ForecastError, TrendEngine};
    use crate::market_data::PricePoint;
    use chrono::NaiveDate;
    use num_traits::ToPrimitive;
    use rust_decimal_macros::dec;

    fn date(d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(2024, 1, d).unwrap()
    }

    #[test]
    fn test_fit_rejects_insufficient_history() {
        let engine = TrendEngine::new();
        let history = vec![PricePoint::new(date(1), dec!(10))];
        assert!(matches!(
            engine.fit(&history),
            Err(ForecastError::InsufficientHistory { got: 1, need: 2 })
        ));
    }

    #[test]
    fn test_perfect_line_is_extrapolated_exactly() {
        // closes 10, 11, 12 -> slope 1, next values 13, 14, ...
        let engine = TrendEngine::new();
        let history = vec![
            PricePoint::new(date(1), dec!(10)),
            PricePoint::new(date(2), dec!(11)),
            PricePoint::new(date(3), dec!(12)),
        ];
        let model = engine.fit(&history).unwrap();
        let forecast = model.predict(3).unwrap();

        assert_eq!(forecast.len(), 3);
        for (i, point) in forecast.iter().enumerate() {
            let expected = 13.0 + i as f64;
            let predicted = point.predicted.to_f64().unwrap();
            assert!(
                (predicted - expected).abs() < 1e-9,
                "step {}: got {}, expected {}",
                i + 1,
                predicted,
                expected
            );
        }
    }

    #[test]
    fn test_forecast_dates_advance_one_day_per_period() {
        let engine = TrendEngine::new();
        let history = vec![
            PricePoint::new(date(1), dec!(10)),
            PricePoint::new(date(2), dec!(11)),
        ];
        let model = engine.fit(&history).unwrap();
        let forecast = model.predict(2).unwrap();
        assert_eq!(forecast[0].date, date(3));
        assert_eq!(forecast[1].date, date(4));
    }

    #[test]
    fn test_flat_series_forecasts_flat() {
        let engine = TrendEngine::new();
        let history = vec![
            PricePoint::new(date(1), dec!(7.5)),
            PricePoint::new(date(2), dec!(7.5)),
            PricePoint::new(date(3), dec!(7.5)),
        ];
        let model = engine.fit(&history).unwrap();
        let forecast = model.predict(5).unwrap();
        for point in forecast {
            let predicted = point.predicted.to_f64().unwrap();
            assert!((predicted - 7.5).abs() < 1e-9);
        }
    }
}
