//! Lifecycle state machine for cash boxes.

use rust_decimal::Decimal;

use arqueo_shared::types::{CashLineId, MoveId};

use crate::accounting::bridge::AccountingBridge;
use crate::accounting::types::{AccountingGateway, BridgeConfig};
use crate::audit::AuditTrail;
use crate::cashbox::error::CashBoxError;
use crate::cashbox::types::{CashBox, CashBoxState};
use crate::ledger::store::LineStore;
use crate::ledger::types::NewLine;
use crate::sequence::{Sequencer, next_code_or_fallback};

/// Stateless service driving cash box state transitions.
///
/// Accounting postings are sub-operations of the transition that triggers
/// them: the posting happens before any state lands on the box, so a
/// gateway failure leaves the aggregate exactly as it was.
pub struct CashBoxService;

impl CashBoxService {
    /// Activates a draft box (Draft → Open).
    ///
    /// The display code is assigned exactly once, here. For kinds that post
    /// into the accounting ledger the opening entry posts first; its
    /// failure aborts the whole transition without consuming a code.
    pub fn activate(
        cash_box: &mut CashBox,
        sequencer: &dyn Sequencer,
        gateway: &mut dyn AccountingGateway,
        config: &BridgeConfig,
        audit: &mut dyn AuditTrail,
    ) -> Result<(), CashBoxError> {
        if cash_box.state != CashBoxState::Draft {
            return Err(CashBoxError::InvalidTransition {
                from: cash_box.state,
                to: CashBoxState::Open,
            });
        }
        if cash_box.initial_amount <= Decimal::ZERO {
            return Err(CashBoxError::InitialAmountRequired {
                amount: cash_box.initial_amount,
            });
        }

        let opening_move = if cash_box.policy().requires_journal {
            Some(AccountingBridge::post_opening_entry(
                cash_box, gateway, config,
            )?)
        } else {
            None
        };

        if cash_box.code.is_none() {
            cash_box.code = Some(next_code_or_fallback(
                sequencer,
                cash_box.kind.sequence_kind(),
            ));
        }
        cash_box.state = CashBoxState::Open;
        if opening_move.is_some() {
            cash_box.opening_move = opening_move;
        }

        audit.append_note(
            cash_box.id.into_inner(),
            format!(
                "{} box {} opened with initial amount {}",
                cash_box.kind.label(),
                cash_box.display_code(),
                cash_box.initial_amount
            ),
        );
        Ok(())
    }

    /// Closes an open box (Open → Closed).
    ///
    /// Fails while the balance is negative. Kinds that post into the
    /// accounting ledger record a closing entry reversing the residual
    /// balance, skipped entirely when the balance is exactly zero.
    /// Returns the posted closing move, if any.
    pub fn close(
        cash_box: &mut CashBox,
        gateway: &mut dyn AccountingGateway,
        config: &BridgeConfig,
        audit: &mut dyn AuditTrail,
    ) -> Result<Option<MoveId>, CashBoxError> {
        if cash_box.state != CashBoxState::Open {
            return Err(CashBoxError::InvalidTransition {
                from: cash_box.state,
                to: CashBoxState::Closed,
            });
        }
        let balance = cash_box.current_balance();
        if balance < Decimal::ZERO {
            return Err(CashBoxError::NegativeBalanceClose { balance });
        }

        let closing_move = if cash_box.policy().requires_journal {
            AccountingBridge::post_closing_entry(cash_box, gateway, config)?
        } else {
            None
        };

        cash_box.state = CashBoxState::Closed;
        if closing_move.is_some() {
            cash_box.closing_move = closing_move;
        }

        audit.append_note(
            cash_box.id.into_inner(),
            format!(
                "{} box {} closed with final balance {}",
                cash_box.kind.label(),
                cash_box.display_code(),
                balance
            ),
        );
        Ok(closing_move)
    }

    /// Cancels a box (Draft|Open → Cancelled). Closed boxes cannot be
    /// cancelled.
    pub fn cancel(
        cash_box: &mut CashBox,
        audit: &mut dyn AuditTrail,
    ) -> Result<(), CashBoxError> {
        if cash_box.state == CashBoxState::Closed {
            return Err(CashBoxError::CannotCancelClosed);
        }

        cash_box.state = CashBoxState::Cancelled;
        audit.append_note(
            cash_box.id.into_inner(),
            format!(
                "{} box {} cancelled",
                cash_box.kind.label(),
                cash_box.display_code()
            ),
        );
        Ok(())
    }

    /// Resets a box back to draft, reverting the display code to the
    /// placeholder. Closed boxes only reset where the kind's policy allows
    /// it. Already-posted accounting documents are left standing.
    pub fn reset_to_draft(
        cash_box: &mut CashBox,
        audit: &mut dyn AuditTrail,
    ) -> Result<(), CashBoxError> {
        if cash_box.state == CashBoxState::Closed && !cash_box.policy().reset_allowed_when_closed
        {
            return Err(CashBoxError::CannotResetClosed);
        }

        cash_box.state = CashBoxState::Draft;
        cash_box.code = None;
        audit.append_note(
            cash_box.id.into_inner(),
            format!("{} box reset to draft", cash_box.kind.label()),
        );
        Ok(())
    }

    /// Validates that a box may be deleted.
    ///
    /// Kinds with a delete lock reject open and closed boxes; distribution
    /// boxes delete in any state unless movements exist.
    pub fn validate_delete(cash_box: &CashBox) -> Result<(), CashBoxError> {
        if cash_box.policy().delete_locked_when_active {
            if matches!(cash_box.state, CashBoxState::Open | CashBoxState::Closed) {
                return Err(CashBoxError::DeleteLocked {
                    state: cash_box.state,
                });
            }
        } else if !cash_box.lines.is_empty() {
            return Err(CashBoxError::DeleteHasLines);
        }
        Ok(())
    }

    /// Adds a plain (non-invoice) line to the box.
    ///
    /// For kinds that post into the accounting ledger and while the box is
    /// open, the line's journal entry posts before the line lands on the
    /// box; a gateway failure leaves the box untouched. Invoice-linked
    /// payments go through the pay-invoice orchestrator instead.
    pub fn add_line(
        cash_box: &mut CashBox,
        input: NewLine,
        gateway: &mut dyn AccountingGateway,
        config: &BridgeConfig,
    ) -> Result<CashLineId, CashBoxError> {
        let mut line = LineStore::build_line(cash_box, input)?;

        if cash_box.policy().requires_journal {
            line.journal_move =
                AccountingBridge::post_line_entry(cash_box, &line, gateway, config)?;
        }

        Ok(LineStore::attach(cash_box, line))
    }
}
