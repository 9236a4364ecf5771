//! Holdings module - portfolio position inputs and their validation.

mod holdings_model;

pub use holdings_model::{validate_holdings, Holding};
