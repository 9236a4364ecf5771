use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use std::collections::HashSet;

use crate::errors::ValidationError;

/// One portfolio position, supplied as configuration at process start.
///
/// Immutable for the duration of a run. Valuation never writes back into
/// a holding; derived figures live in `InstrumentReport`.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Holding {
    pub symbol: String,
    pub quantity: Decimal,
    pub average_cost: Decimal,
}

impl Holding {
    pub fn new(symbol: impl Into<String>, quantity: Decimal, average_cost: Decimal) -> Self {
        Holding {
            symbol: symbol.into(),
            quantity,
            average_cost,
        }
    }

    /// Cost basis of the position: average cost times quantity.
    /// Always computable from input data alone.
    pub fn invested(&self) -> Decimal {
        self.average_cost * self.quantity
    }

    pub fn validate(&self) -> Result<(), ValidationError> {
        if self.symbol.trim().is_empty() {
            return Err(ValidationError::MalformedHolding {
                symbol: self.symbol.clone(),
                reason: "symbol must not be empty".to_string(),
            });
        }
        if self.quantity.is_sign_negative() {
            return Err(ValidationError::MalformedHolding {
                symbol: self.symbol.clone(),
                reason: format!("quantity must not be negative (got {})", self.quantity),
            });
        }
        if !self.quantity.fract().is_zero() {
            return Err(ValidationError::MalformedHolding {
                symbol: self.symbol.clone(),
                reason: format!("quantity must be a whole number (got {})", self.quantity),
            });
        }
        if self.average_cost <= Decimal::ZERO {
            return Err(ValidationError::MalformedHolding {
                symbol: self.symbol.clone(),
                reason: format!("average cost must be positive (got {})", self.average_cost),
            });
        }
        Ok(())
    }
}

/// Validates every holding and rejects duplicate symbols.
///
/// Runs before any pipeline work so a bad configuration aborts the run
/// with a diagnostic instead of producing a misleading report.
pub fn validate_holdings(holdings: &[Holding]) -> Result<(), ValidationError> {
    let mut seen: HashSet<&str> = HashSet::with_capacity(holdings.len());
    for holding in holdings {
        holding.validate()?;
        if !seen.insert(holding.symbol.as_str()) {
            return Err(ValidationError::DuplicateSymbol(holding.symbol.clone()));
        }
    }
    Ok(())
}
