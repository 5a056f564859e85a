//! Translation of cash box events into ledger postings.

use arqueo_shared::types::{AccountId, JournalId, MoveId};

use super::error::AccountingError;
use super::types::{
    AccountingGateway, BridgeConfig, InvoiceInfo, InvoicePaymentResult, MoveLineRequest,
    MoveRequest, PaymentRequest,
};
use crate::cashbox::types::{CashBox, CashBoxState};
use crate::ledger::types::{CashLine, LineType};

/// Stateless bridge between the cash box aggregate and the general ledger.
///
/// Every operation builds a balanced request and posts it immediately
/// through the gateway; gateway failures propagate unchanged so the
/// enclosing transition can abort without partial state.
pub struct AccountingBridge;

impl AccountingBridge {
    /// Posts the opening entry for a box being activated: debit the
    /// journal's cash account, credit the suspense counterpart, both for
    /// the initial amount.
    pub fn post_opening_entry(
        cash_box: &CashBox,
        gateway: &mut dyn AccountingGateway,
        config: &BridgeConfig,
    ) -> Result<MoveId, AccountingError> {
        let (journal, cash_account) = Self::resolve_cash_account(cash_box, gateway)?;
        let suspense = Self::suspense_account(config)?;

        let request = MoveRequest {
            journal,
            date: cash_box.date,
            reference: format!("Cash box opening {}", cash_box.id),
            lines: vec![
                MoveLineRequest {
                    account: cash_account,
                    debit: cash_box.initial_amount,
                    credit: rust_decimal::Decimal::ZERO,
                    partner: None,
                },
                MoveLineRequest {
                    account: suspense,
                    debit: rust_decimal::Decimal::ZERO,
                    credit: cash_box.initial_amount,
                    partner: None,
                },
            ],
        };

        Self::submit(gateway, request)
    }

    /// Posts the closing entry reversing the residual balance: credit the
    /// cash account, debit the suspense counterpart.
    ///
    /// Returns `None` without posting anything when the balance is exactly
    /// zero at close time.
    pub fn post_closing_entry(
        cash_box: &CashBox,
        gateway: &mut dyn AccountingGateway,
        config: &BridgeConfig,
    ) -> Result<Option<MoveId>, AccountingError> {
        let balance = cash_box.current_balance();
        if balance.is_zero() {
            return Ok(None);
        }

        let (journal, cash_account) = Self::resolve_cash_account(cash_box, gateway)?;
        let suspense = Self::suspense_account(config)?;

        let request = MoveRequest {
            journal,
            date: cash_box.date,
            reference: format!("Cash box closing {}", cash_box.display_code()),
            lines: vec![
                MoveLineRequest {
                    account: suspense,
                    debit: balance,
                    credit: rust_decimal::Decimal::ZERO,
                    partner: None,
                },
                MoveLineRequest {
                    account: cash_account,
                    debit: rust_decimal::Decimal::ZERO,
                    credit: balance,
                    partner: None,
                },
            ],
        };

        Self::submit(gateway, request).map(Some)
    }

    /// Posts the journal entry for one cash line.
    ///
    /// For an expense the counterpart account (the partner's payable
    /// account when set, else the suspense account) is debited and the cash
    /// account credited; for an income the sides swap. A no-op returning
    /// `None` when the owning box is not currently open.
    pub fn post_line_entry(
        cash_box: &CashBox,
        line: &CashLine,
        gateway: &mut dyn AccountingGateway,
        config: &BridgeConfig,
    ) -> Result<Option<MoveId>, AccountingError> {
        if cash_box.state != CashBoxState::Open {
            return Ok(None);
        }

        let (journal, cash_account) = Self::resolve_cash_account(cash_box, gateway)?;
        let counterpart = match line.partner.and_then(|p| gateway.partner_payable_account(p)) {
            Some(account) => account,
            None => Self::suspense_account(config)?,
        };

        let (debit_account, credit_account) = match line.line_type {
            LineType::Expense => (counterpart, cash_account),
            LineType::Income => (cash_account, counterpart),
        };

        let request = MoveRequest {
            journal,
            date: line.date,
            reference: line.description.clone(),
            lines: vec![
                MoveLineRequest {
                    account: debit_account,
                    debit: line.amount,
                    credit: rust_decimal::Decimal::ZERO,
                    partner: line.partner,
                },
                MoveLineRequest {
                    account: credit_account,
                    debit: rust_decimal::Decimal::ZERO,
                    credit: line.amount,
                    partner: line.partner,
                },
            ],
        };

        Self::submit(gateway, request).map(Some)
    }

    /// Registers a payment for an invoice-linked line, posts it, and
    /// reconciles the payment's open lines against the invoice's.
    ///
    /// Idempotent: a line that already carries a payment reference is
    /// returned as-is without creating a duplicate. The payment direction
    /// opposes the invoice's natural direction (outbound for payables,
    /// inbound for receivables).
    pub fn post_invoice_payment(
        cash_box: &CashBox,
        line: &CashLine,
        invoice: &InvoiceInfo,
        gateway: &mut dyn AccountingGateway,
    ) -> Result<InvoicePaymentResult, AccountingError> {
        if let Some(existing) = line.payment {
            return Ok(InvoicePaymentResult {
                payment: existing,
                journal_move: line.journal_move,
            });
        }

        // The payment moves through the box's journal; require it to be
        // configured and resolvable like every other posting.
        let (journal, _cash_account) = Self::resolve_cash_account(cash_box, gateway)?;

        let request = PaymentRequest {
            direction: invoice.move_type.payment_direction(),
            partner_kind: invoice.move_type.partner_kind(),
            partner: invoice.partner,
            amount: line.amount,
            date: line.date,
            journal,
            memo: line.description.clone(),
        };

        let posted = gateway.create_payment(request)?;
        gateway.reconcile(&posted.counterpart_lines, &invoice.open_lines)?;

        Ok(InvoicePaymentResult {
            payment: posted.id,
            journal_move: Some(posted.move_id),
        })
    }

    fn resolve_cash_account(
        cash_box: &CashBox,
        gateway: &dyn AccountingGateway,
    ) -> Result<(JournalId, AccountId), AccountingError> {
        let journal = cash_box.journal.ok_or(AccountingError::MissingJournal)?;
        let account = gateway
            .journal_cash_account(journal)
            .ok_or(AccountingError::NoCashAccount(journal))?;
        Ok((journal, account))
    }

    fn suspense_account(config: &BridgeConfig) -> Result<AccountId, AccountingError> {
        config
            .suspense_account
            .ok_or(AccountingError::NoSuspenseAccount)
    }

    fn submit(
        gateway: &mut dyn AccountingGateway,
        request: MoveRequest,
    ) -> Result<MoveId, AccountingError> {
        if !request.is_balanced() {
            return Err(AccountingError::UnbalancedMove {
                debit: request.total_debit(),
                credit: request.total_credit(),
            });
        }
        gateway.create_and_post_move(request)
    }
}
