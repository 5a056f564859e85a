//! Line store error types.

use arqueo_shared::AppError;
use arqueo_shared::types::CashLineId;
use thiserror::Error;

use crate::cashbox::types::CashBoxState;

/// Errors that can occur during line operations.
#[derive(Debug, Error)]
pub enum LedgerError {
    /// Line amount must be greater than zero.
    #[error("Line amount must be greater than zero")]
    AmountNotPositive,

    /// Line description is required.
    #[error("Line description is required")]
    DescriptionRequired,

    /// Lines cannot be changed while the box is in this state.
    #[error("Lines cannot be added, modified or removed while the box is {state}")]
    LinesLocked {
        /// The owning box's current state.
        state: CashBoxState,
    },

    /// Line not found on the box.
    #[error("Line not found: {0}")]
    LineNotFound(CashLineId),
}

impl From<LedgerError> for AppError {
    fn from(err: LedgerError) -> Self {
        match err {
            LedgerError::AmountNotPositive | LedgerError::DescriptionRequired => {
                Self::Validation(err.to_string())
            }
            LedgerError::LinesLocked { .. } => Self::State(err.to_string()),
            LedgerError::LineNotFound(_) => Self::NotFound(err.to_string()),
        }
    }
}
