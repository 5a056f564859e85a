//! Pay-invoice error types.

use arqueo_shared::AppError;
use rust_decimal::Decimal;
use thiserror::Error;

use crate::accounting::AccountingError;
use crate::cashbox::types::{CashBoxKind, CashBoxState};
use crate::ledger::LedgerError;

/// Errors that can occur while paying an invoice from a cash box.
#[derive(Debug, Error)]
pub enum PayInvoiceError {
    /// The amount to pay must be greater than zero.
    #[error("The amount to pay must be greater than zero")]
    AmountNotPositive,

    /// The amount to pay exceeds the invoice's outstanding balance.
    #[error(
        "The amount to pay ({amount}) cannot be greater than the invoice's outstanding balance ({residual})"
    )]
    ExceedsResidual {
        /// Requested payment amount.
        amount: Decimal,
        /// Invoice residual amount.
        residual: Decimal,
    },

    /// The selected box does not match the requested cash type.
    #[error("A {requested} box must be selected; got a {selected} box")]
    WrongCashBox {
        /// The declared cash type.
        requested: CashBoxKind,
        /// The kind of the box actually supplied.
        selected: CashBoxKind,
    },

    /// Invoices can only be paid from an open box.
    #[error("Invoices can only be paid from an open box (box is {state})")]
    BoxNotOpen {
        /// The box's current state.
        state: CashBoxState,
    },

    /// The box does not hold enough cash.
    #[error("Insufficient funds in the box. Available: {balance}, amount to pay: {amount}")]
    InsufficientFunds {
        /// Current box balance.
        balance: Decimal,
        /// Requested payment amount.
        amount: Decimal,
    },

    /// Line store error.
    #[error(transparent)]
    Ledger(#[from] LedgerError),

    /// Accounting bridge error.
    #[error(transparent)]
    Accounting(#[from] AccountingError),
}

impl From<PayInvoiceError> for AppError {
    fn from(err: PayInvoiceError) -> Self {
        match err {
            PayInvoiceError::AmountNotPositive
            | PayInvoiceError::ExceedsResidual { .. }
            | PayInvoiceError::WrongCashBox { .. }
            | PayInvoiceError::BoxNotOpen { .. }
            | PayInvoiceError::InsufficientFunds { .. } => Self::Validation(err.to_string()),
            PayInvoiceError::Ledger(inner) => inner.into(),
            PayInvoiceError::Accounting(inner) => inner.into(),
        }
    }
}
