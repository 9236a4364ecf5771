//! Tests for price history normalization.

#[cfg(test)]
mod tests {
    use crate::market_data::{normalize_history, PricePoint};
    use chrono::NaiveDate;
    use rust_decimal_macros::dec;

    fn date(d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(2024, 1, d).unwrap()
    }

    #[test]
    fn test_normalize_sorts_by_date() {
        let history = vec![
            PricePoint::new(date(3), dec!(3)),
            PricePoint::new(date(1), dec!(1)),
            PricePoint::new(date(2), dec!(2)),
        ];
        let normalized = normalize_history(history);
        let dates: Vec<_> = normalized.iter().map(|p| p.date).collect();
        assert_eq!(dates, vec![date(1), date(2), date(3)]);
    }

    #[test]
    fn test_normalize_collapses_duplicate_dates_keeping_later() {
        let history = vec![
            PricePoint::new(date(1), dec!(10)),
            PricePoint::new(date(1), dec!(11)),
            PricePoint::new(date(2), dec!(12)),
        ];
        let normalized = normalize_history(history);
        assert_eq!(normalized.len(), 2);
        assert_eq!(normalized[0].close, dec!(11));
        assert_eq!(normalized[1].close, dec!(12));
    }

    #[test]
    fn test_normalize_empty_stays_empty() {
        assert!(normalize_history(vec![]).is_empty());
    }
}
