//! Receipt lifecycle and reporting.

use chrono::NaiveDate;
use rust_decimal::Decimal;

use super::error::ReceiptError;
use super::types::{CashReceipt, ReceiptArea, ReceiptState};
use crate::audit::AuditTrail;
use crate::sequence::{SequenceKind, Sequencer, next_code_or_fallback};

/// Stateless service driving receipt state transitions.
pub struct ReceiptService;

impl ReceiptService {
    /// Confirms a draft receipt, assigning its voucher number exactly once.
    ///
    /// Management receipts must carry a recipient and a concept; the
    /// requirement is enforced here, at confirm time, not at creation.
    pub fn confirm(
        receipt: &mut CashReceipt,
        sequencer: &dyn Sequencer,
        audit: &mut dyn AuditTrail,
    ) -> Result<(), ReceiptError> {
        if receipt.state != ReceiptState::Draft {
            return Err(ReceiptError::NotDraft {
                state: receipt.state,
            });
        }
        if receipt.area == ReceiptArea::AdminManagement {
            if receipt.recipient.is_none() {
                return Err(ReceiptError::RecipientRequired);
            }
            if receipt
                .concept
                .as_deref()
                .is_none_or(|c| c.trim().is_empty())
            {
                return Err(ReceiptError::ConceptRequired);
            }
        }

        if receipt.code.is_none() {
            receipt.code = Some(next_code_or_fallback(sequencer, SequenceKind::CashReceipt));
        }
        receipt.state = ReceiptState::Confirmed;

        audit.append_note(
            receipt.id.into_inner(),
            format!("Receipt {} confirmed", receipt.display_code()),
        );
        Ok(())
    }

    /// Cancels a receipt. Only rejected when it is already cancelled.
    pub fn cancel(
        receipt: &mut CashReceipt,
        audit: &mut dyn AuditTrail,
    ) -> Result<(), ReceiptError> {
        if receipt.state == ReceiptState::Cancelled {
            return Err(ReceiptError::AlreadyCancelled);
        }

        receipt.state = ReceiptState::Cancelled;
        audit.append_note(
            receipt.id.into_inner(),
            format!("Receipt {} cancelled", receipt.display_code()),
        );
        Ok(())
    }

    /// Resets a receipt back to draft, reverting the voucher number to the
    /// placeholder.
    pub fn reset_to_draft(
        receipt: &mut CashReceipt,
        audit: &mut dyn AuditTrail,
    ) -> Result<(), ReceiptError> {
        if receipt.state == ReceiptState::Draft {
            return Err(ReceiptError::AlreadyDraft);
        }

        receipt.state = ReceiptState::Draft;
        receipt.code = None;
        audit.append_note(receipt.id.into_inner(), "Receipt reset to draft".to_string());
        Ok(())
    }

    /// Validates that a receipt may be deleted. Confirmed receipts must be
    /// cancelled first.
    pub fn validate_delete(receipt: &CashReceipt) -> Result<(), ReceiptError> {
        if receipt.state == ReceiptState::Confirmed {
            return Err(ReceiptError::DeleteConfirmed);
        }
        Ok(())
    }

    /// Returns the confirmed receipts dated within `[from, to]`.
    #[must_use]
    pub fn confirmed_between<'a>(
        receipts: &'a [CashReceipt],
        from: NaiveDate,
        to: NaiveDate,
    ) -> Vec<&'a CashReceipt> {
        receipts
            .iter()
            .filter(|r| r.state == ReceiptState::Confirmed && r.date >= from && r.date <= to)
            .collect()
    }

    /// Returns the confirmed total for an area, optionally bounded by a
    /// date range.
    #[must_use]
    pub fn total_by_area(
        receipts: &[CashReceipt],
        area: ReceiptArea,
        from: Option<NaiveDate>,
        to: Option<NaiveDate>,
    ) -> Decimal {
        receipts
            .iter()
            .filter(|r| r.state == ReceiptState::Confirmed && r.area == area)
            .filter(|r| from.is_none_or(|d| r.date >= d))
            .filter(|r| to.is_none_or(|d| r.date <= d))
            .map(|r| r.amount)
            .sum()
    }
}
