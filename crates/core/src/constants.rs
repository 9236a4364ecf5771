/// Historical span of daily prices requested for model fitting
pub const LOOKBACK_DAYS: i64 = 1825; // 5 years

/// Number of future points kept from each forecast
pub const FORECAST_HORIZON: usize = 5;

/// Daily periods requested from the forecast engine.
/// Only the last `FORECAST_HORIZON` points are kept, so projections sit
/// roughly 146-150 days out rather than one per calendar month.
pub const FORECAST_DAILY_PERIODS: usize = 150;

/// Decimal precision for derived monetary and percentage figures
pub const REPORT_DECIMAL_PRECISION: u32 = 2;

/// Default number of holdings valued concurrently
pub const DEFAULT_PIPELINE_CONCURRENCY: usize = 4;

/// Default per-holding valuation timeout, in seconds
pub const DEFAULT_HOLDING_TIMEOUT_SECS: u64 = 60;
