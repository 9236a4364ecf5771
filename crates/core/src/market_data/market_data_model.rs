//! Price history domain models.

use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// One observed daily close.
///
/// Dates are calendar dates only; any time-of-day or zone information from
/// a provider is dropped at the adapter boundary.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PricePoint {
    pub date: NaiveDate,
    pub close: Decimal,
}

impl PricePoint {
    pub fn new(date: NaiveDate, close: Decimal) -> Self {
        PricePoint { date, close }
    }
}

/// Sorts a price series chronologically and collapses duplicate dates,
/// keeping the later observation for each date.
pub fn normalize_history(mut points: Vec<PricePoint>) -> Vec<PricePoint> {
    points.sort_by_key(|p| p.date);
    let mut normalized: Vec<PricePoint> = Vec::with_capacity(points.len());
    for point in points {
        match normalized.last_mut() {
            Some(last) if last.date == point.date => *last = point,
            _ => normalized.push(point),
        }
    }
    normalized
}
