//! Line domain types for the running-balance ledger.

use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use arqueo_shared::types::{
    CashLineId, DepartmentId, InvoiceId, MoveId, PartnerId, PaymentId,
};

/// Default user-orderable sequence assigned to new lines.
pub const DEFAULT_LINE_SEQUENCE: i32 = 10;

/// Whether a line adds to or subtracts from the box balance.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LineType {
    /// Money entering the box.
    Income,
    /// Money leaving the box.
    Expense,
}

/// Kind of supporting document attached to a line.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DocumentType {
    /// Vendor or customer invoice.
    Invoice,
    /// Simple receipt.
    Receipt,
    /// Cash register ticket.
    Ticket,
    /// Goods waybill.
    Waybill,
    /// Purchase order.
    PurchaseOrder,
    /// Anything else.
    Other,
}

/// One dated income or expense entry against a cash box.
///
/// `balance` is the running balance at this line and is recomputed for the
/// whole box whenever any line is added, removed, or has its sequence,
/// amount or type changed. It is never patched incrementally.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CashLine {
    /// Line identity.
    pub id: CashLineId,
    /// User-orderable position; ties are broken by insertion order.
    pub sequence: i32,
    /// Date of the movement.
    pub date: NaiveDate,
    /// Income or expense.
    pub line_type: LineType,
    /// Supporting document kind, if any.
    pub document_type: Option<DocumentType>,
    /// Supporting document number, if any.
    pub document_number: Option<String>,
    /// Vendor/beneficiary reference, if any.
    pub partner: Option<PartnerId>,
    /// Free-text counterparty name; defaults from the partner when set.
    pub partner_name: Option<String>,
    /// Department the movement belongs to.
    pub department: Option<DepartmentId>,
    /// What the movement was for. Required, non-blank.
    pub description: String,
    /// Movement amount, strictly positive.
    pub amount: Decimal,
    /// Running balance at this line, including this line's own amount.
    pub balance: Decimal,
    /// Free-form remarks.
    pub notes: Option<String>,
    /// Invoice being paid down by this line (logistics boxes).
    pub invoice: Option<InvoiceId>,
    /// Payment registered for the invoice (set once, immutable).
    pub payment: Option<PaymentId>,
    /// Journal entry posted for this line (set once, immutable).
    pub journal_move: Option<MoveId>,
}

/// Input for creating a new line.
#[derive(Debug, Clone)]
pub struct NewLine {
    /// Date of the movement.
    pub date: NaiveDate,
    /// Income or expense.
    pub line_type: LineType,
    /// Movement amount, strictly positive.
    pub amount: Decimal,
    /// What the movement was for. Required, non-blank.
    pub description: String,
    /// Position override; defaults to [`DEFAULT_LINE_SEQUENCE`].
    pub sequence: Option<i32>,
    /// Supporting document kind.
    pub document_type: Option<DocumentType>,
    /// Supporting document number.
    pub document_number: Option<String>,
    /// Vendor/beneficiary reference.
    pub partner: Option<PartnerId>,
    /// Counterparty name; callers resolve it from the partner record.
    pub partner_name: Option<String>,
    /// Department the movement belongs to.
    pub department: Option<DepartmentId>,
    /// Free-form remarks.
    pub notes: Option<String>,
    /// Invoice being paid down by this line.
    pub invoice: Option<InvoiceId>,
}

impl NewLine {
    /// Creates a line input with the required fields; everything else
    /// starts unset.
    #[must_use]
    pub fn new(
        date: NaiveDate,
        line_type: LineType,
        amount: Decimal,
        description: impl Into<String>,
    ) -> Self {
        Self {
            date,
            line_type,
            amount,
            description: description.into(),
            sequence: None,
            document_type: None,
            document_number: None,
            partner: None,
            partner_name: None,
            department: None,
            notes: None,
            invoice: None,
        }
    }
}

/// Partial update of an existing line. Only `Some` fields are applied.
#[derive(Debug, Clone, Default)]
pub struct LineUpdate {
    /// New movement date.
    pub date: Option<NaiveDate>,
    /// New position.
    pub sequence: Option<i32>,
    /// New line type.
    pub line_type: Option<LineType>,
    /// New amount, strictly positive.
    pub amount: Option<Decimal>,
    /// New description, non-blank.
    pub description: Option<String>,
    /// New document number.
    pub document_number: Option<String>,
    /// New counterparty name.
    pub partner_name: Option<String>,
    /// New remarks.
    pub notes: Option<String>,
}
