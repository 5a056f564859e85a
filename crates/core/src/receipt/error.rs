//! Cash receipt error types.

use arqueo_shared::AppError;
use chrono::NaiveDate;
use thiserror::Error;

use crate::receipt::types::ReceiptState;

/// Errors that can occur during receipt operations.
#[derive(Debug, Error)]
pub enum ReceiptError {
    /// The delivered amount must be greater than zero.
    #[error("The delivered amount must be greater than zero")]
    AmountNotPositive,

    /// The receipt date cannot be in the future.
    #[error("The receipt date cannot be in the future: {0}")]
    FutureDate(NaiveDate),

    /// Only draft receipts can be confirmed.
    #[error("Only draft receipts can be confirmed (receipt is {state})")]
    NotDraft {
        /// The receipt's current state.
        state: ReceiptState,
    },

    /// Management receipts require a recipient before confirmation.
    #[error("Management receipts require the person receiving the cash")]
    RecipientRequired,

    /// Management receipts require a concept before confirmation.
    #[error("Management receipts require a concept")]
    ConceptRequired,

    /// The receipt is already cancelled.
    #[error("The receipt is already cancelled")]
    AlreadyCancelled,

    /// The receipt is already in draft.
    #[error("The receipt is already in draft")]
    AlreadyDraft,

    /// Confirmed receipts cannot be deleted.
    #[error("A confirmed receipt cannot be deleted; cancel it first")]
    DeleteConfirmed,
}

impl From<ReceiptError> for AppError {
    fn from(err: ReceiptError) -> Self {
        match err {
            ReceiptError::AmountNotPositive
            | ReceiptError::FutureDate(_)
            | ReceiptError::RecipientRequired
            | ReceiptError::ConceptRequired => Self::Validation(err.to_string()),
            ReceiptError::NotDraft { .. }
            | ReceiptError::AlreadyCancelled
            | ReceiptError::AlreadyDraft
            | ReceiptError::DeleteConfirmed => Self::State(err.to_string()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_classification_into_app_error() {
        assert!(matches!(
            AppError::from(ReceiptError::AmountNotPositive),
            AppError::Validation(_)
        ));
        assert!(matches!(
            AppError::from(ReceiptError::FutureDate(
                NaiveDate::from_ymd_opt(2030, 1, 1).unwrap()
            )),
            AppError::Validation(_)
        ));
        assert!(matches!(
            AppError::from(ReceiptError::DeleteConfirmed),
            AppError::State(_)
        ));
    }
}
