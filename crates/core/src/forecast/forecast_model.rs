use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// One forecast point, in horizon order (period 1 nearest).
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ForecastPoint {
    pub date: NaiveDate,
    pub predicted: Decimal,
}

impl ForecastPoint {
    pub fn new(date: NaiveDate, predicted: Decimal) -> Self {
        ForecastPoint { date, predicted }
    }
}
