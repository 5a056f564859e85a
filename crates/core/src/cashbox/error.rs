//! Cash box error types.

use arqueo_shared::AppError;
use rust_decimal::Decimal;
use thiserror::Error;

use crate::accounting::AccountingError;
use crate::cashbox::types::CashBoxState;
use crate::ledger::LedgerError;

/// Errors that can occur during cash box operations.
#[derive(Debug, Error)]
pub enum CashBoxError {
    // ========== Validation Errors ==========
    /// The initial amount cannot be negative.
    #[error("Initial amount cannot be negative: {amount}")]
    NegativeInitialAmount {
        /// The offending amount.
        amount: Decimal,
    },

    /// A box cannot be opened without a positive initial amount.
    #[error("Cannot open a box without an initial amount greater than zero (current: {amount})")]
    InitialAmountRequired {
        /// The current initial amount.
        amount: Decimal,
    },

    /// The payment type requires an operation number.
    #[error("Payment type '{payment_type}' requires an operation or cheque number")]
    OperationNumberRequired {
        /// Name of the payment type.
        payment_type: String,
    },

    // ========== State Errors ==========
    /// The requested transition is not allowed from the current state.
    #[error("Cannot transition box from {from} to {to}")]
    InvalidTransition {
        /// Current state.
        from: CashBoxState,
        /// Requested state.
        to: CashBoxState,
    },

    /// A box cannot be closed while its balance is negative.
    #[error("Cannot close a box with negative balance: {balance}")]
    NegativeBalanceClose {
        /// The current balance.
        balance: Decimal,
    },

    /// Closed boxes cannot be cancelled.
    #[error("A closed box cannot be cancelled")]
    CannotCancelClosed,

    /// This box kind does not allow resetting a closed box to draft.
    #[error("A closed box cannot be reset to draft")]
    CannotResetClosed,

    /// Boxes cannot be deleted in this state.
    #[error("Boxes in state {state} cannot be deleted; only draft or cancelled boxes can")]
    DeleteLocked {
        /// The current state.
        state: CashBoxState,
    },

    /// A box with recorded movements cannot be deleted.
    #[error("A box with recorded movements cannot be deleted")]
    DeleteHasLines,

    // ========== Wrapped collaborator errors ==========
    /// Line store error.
    #[error(transparent)]
    Ledger(#[from] LedgerError),

    /// Accounting bridge error.
    #[error(transparent)]
    Accounting(#[from] AccountingError),
}

impl From<CashBoxError> for AppError {
    fn from(err: CashBoxError) -> Self {
        match err {
            CashBoxError::NegativeInitialAmount { .. }
            | CashBoxError::InitialAmountRequired { .. }
            | CashBoxError::OperationNumberRequired { .. } => Self::Validation(err.to_string()),
            CashBoxError::InvalidTransition { .. }
            | CashBoxError::NegativeBalanceClose { .. }
            | CashBoxError::CannotCancelClosed
            | CashBoxError::CannotResetClosed
            | CashBoxError::DeleteLocked { .. }
            | CashBoxError::DeleteHasLines => Self::State(err.to_string()),
            CashBoxError::Ledger(inner) => inner.into(),
            CashBoxError::Accounting(inner) => inner.into(),
        }
    }
}
