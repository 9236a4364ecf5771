//! Foliocast Core - domain entities, services, and traits.
//!
//! This crate contains the valuation and forecast pipeline for a fixed
//! portfolio of holdings. Price retrieval and forecasting sit behind
//! narrow traits so the core is testable with deterministic stubs.

pub mod constants;
pub mod errors;
pub mod forecast;
pub mod holdings;
pub mod market_data;
pub mod portfolio;

// Re-export common types from the portfolio module
pub use portfolio::*;

// Re-export error types
pub use errors::Error;
pub use errors::Result;
