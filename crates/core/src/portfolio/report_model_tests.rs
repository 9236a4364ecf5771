//! Tests for valuation report models.

#[cfg(test)]
mod tests {
    use crate::holdings::Holding;
    use crate::portfolio::{InstrumentReport, Valuation};
    use rust_decimal_macros::dec;

    fn holding() -> Holding {
        Holding::new("ACME", dec!(100), dec!(10.00))
    }

    #[test]
    fn test_unavailable_report_carries_input_fields() {
        let report = InstrumentReport::unavailable(&holding());
        assert_eq!(report.symbol, "ACME");
        assert_eq!(report.quantity, dec!(100));
        assert_eq!(report.average_cost, dec!(10.00));
        assert_eq!(report.valuation, Valuation::Unavailable);
        assert!(!report.valuation.is_valued());
    }

    #[test]
    fn test_invested_is_computable_for_unavailable_reports() {
        let report = InstrumentReport::unavailable(&holding());
        assert_eq!(report.invested(), dec!(1000.00));
    }

    #[test]
    fn test_valuation_serializes_with_status_tag() {
        let valued = Valuation::Valued {
            last_price: dec!(12.00),
            current_value: dec!(1200.00),
            profit_loss_pct: dec!(20.00),
            projected_values: [dec!(1); 5],
        };
        let json = serde_json::to_value(&valued).unwrap();
        assert_eq!(json["status"], "valued");
        assert!(json["lastPrice"].is_number());

        let unavailable = serde_json::to_value(&Valuation::Unavailable).unwrap();
        assert_eq!(unavailable["status"], "unavailable");
    }
}
