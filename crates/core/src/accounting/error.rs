//! Accounting bridge error types.

use arqueo_shared::AppError;
use arqueo_shared::types::JournalId;
use rust_decimal::Decimal;
use thiserror::Error;

/// Errors that can occur while posting into the accounting ledger.
#[derive(Debug, Error)]
pub enum AccountingError {
    // ========== Configuration Errors ==========
    /// The box has no accounting journal configured.
    #[error("The box has no accounting journal configured")]
    MissingJournal,

    /// The journal has no default cash account.
    #[error("Journal {0} has no default account")]
    NoCashAccount(JournalId),

    /// The company has no suspense account configured.
    #[error("No suspense account configured for cash counterparts")]
    NoSuspenseAccount,

    // ========== Consistency Errors ==========
    /// A move request was built with unequal debit and credit totals.
    ///
    /// The bridge only builds balanced requests, so this indicates a bug;
    /// the operation is refused rather than silently corrected.
    #[error("Unbalanced move request. Debit: {debit}, Credit: {credit}")]
    UnbalancedMove {
        /// Total debit amount.
        debit: Decimal,
        /// Total credit amount.
        credit: Decimal,
    },

    // ========== Gateway Errors ==========
    /// The ledger subsystem rejected or failed the request.
    #[error("Ledger subsystem error: {0}")]
    Gateway(String),
}

impl From<AccountingError> for AppError {
    fn from(err: AccountingError) -> Self {
        match err {
            AccountingError::MissingJournal
            | AccountingError::NoCashAccount(_)
            | AccountingError::NoSuspenseAccount => Self::Configuration(err.to_string()),
            AccountingError::UnbalancedMove { .. } => Self::Consistency(err.to_string()),
            AccountingError::Gateway(_) => Self::Internal(err.to_string()),
        }
    }
}
