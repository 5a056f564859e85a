//! Pay-invoice input types.

use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::cashbox::types::CashBoxKind;

/// A request to pay an invoice out of a cash box.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct PayInvoiceRequest {
    /// The declared cash type; must match the supplied box.
    pub cash_type: CashBoxKind,
    /// Amount to pay, strictly positive and within the invoice residual.
    pub amount: Decimal,
    /// Payment date.
    pub date: NaiveDate,
}
