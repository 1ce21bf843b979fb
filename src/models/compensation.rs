use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

// ── Compensation ────────────────────────────────────────────────

/// Salary record for an employee, keyed by the employee's identifier.
///
/// `salary` travels as an exact JSON number and keeps the scale it was sent
/// with; it is not range-checked. `effective_date` is kept as the ISO-8601
/// string the client sent.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Compensation {
    pub employee_id: String,
    #[serde(with = "rust_decimal::serde::arbitrary_precision")]
    pub salary: Decimal,
    pub effective_date: String,
}
