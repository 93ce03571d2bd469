use serde::{Deserialize, Serialize};

/// One row of the "Detalle de Movimientos Realizados" section.
///
/// Dates are kept as the raw `DD/MON` tokens printed on the statement.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TransactionRecord {
    pub operation_date: String,
    pub settlement_date: String,
    pub description_code: String,
    /// Continuation lines following the row, joined with single spaces.
    pub reference: String,
    pub clabe: Option<String>,
    pub tracking_key: Option<String>,
    pub charge_amount: Option<f64>,
    /// Reserved: never populated by the row heuristic.
    pub credit_amount: Option<f64>,
    /// Reserved: never populated by the row heuristic.
    pub operation_balance: Option<f64>,
    /// Reserved: never populated by the row heuristic.
    pub settlement_balance: Option<f64>,
}

impl TransactionRecord {
    pub fn new(
        operation_date: impl Into<String>,
        settlement_date: impl Into<String>,
        description_code: impl Into<String>,
    ) -> Self {
        Self {
            operation_date: operation_date.into(),
            settlement_date: settlement_date.into(),
            description_code: description_code.into(),
            reference: String::new(),
            clabe: None,
            tracking_key: None,
            charge_amount: None,
            credit_amount: None,
            operation_balance: None,
            settlement_balance: None,
        }
    }
}
