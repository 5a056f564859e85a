//! Recording gateway double shared by the crate's tests.

use std::collections::HashMap;

use arqueo_shared::types::{
    AccountId, JournalId, MoveId, MoveLineId, PartnerId, PaymentId,
};

use super::error::AccountingError;
use super::types::{AccountingGateway, MoveRequest, PaymentRequest, PostedPayment};

/// In-memory gateway that records every request it receives.
#[derive(Debug, Default)]
pub struct RecordingGateway {
    /// Journal -> default cash account.
    pub cash_accounts: HashMap<JournalId, AccountId>,
    /// Partner -> payable account.
    pub payable_accounts: HashMap<PartnerId, AccountId>,
    /// Every posted move request, in order.
    pub moves: Vec<MoveRequest>,
    /// Every payment request, in order.
    pub payments: Vec<PaymentRequest>,
    /// Every reconciliation call: (payment lines, invoice lines).
    pub reconciliations: Vec<(Vec<MoveLineId>, Vec<MoveLineId>)>,
    /// When set, the next mutating call fails with a gateway error.
    pub fail_next: bool,
}

impl RecordingGateway {
    /// Creates a gateway that resolves `journal` to a fresh cash account.
    pub fn with_journal(journal: JournalId) -> Self {
        let mut gateway = Self::default();
        gateway.cash_accounts.insert(journal, AccountId::new());
        gateway
    }

    fn check_failure(&mut self) -> Result<(), AccountingError> {
        if self.fail_next {
            self.fail_next = false;
            return Err(AccountingError::Gateway("injected failure".to_string()));
        }
        Ok(())
    }
}

impl AccountingGateway for RecordingGateway {
    fn journal_cash_account(&self, journal: JournalId) -> Option<AccountId> {
        self.cash_accounts.get(&journal).copied()
    }

    fn partner_payable_account(&self, partner: PartnerId) -> Option<AccountId> {
        self.payable_accounts.get(&partner).copied()
    }

    fn create_and_post_move(&mut self, request: MoveRequest) -> Result<MoveId, AccountingError> {
        self.check_failure()?;
        self.moves.push(request);
        Ok(MoveId::new())
    }

    fn create_payment(
        &mut self,
        request: PaymentRequest,
    ) -> Result<PostedPayment, AccountingError> {
        self.check_failure()?;
        self.payments.push(request);
        Ok(PostedPayment {
            id: PaymentId::new(),
            move_id: MoveId::new(),
            counterpart_lines: vec![MoveLineId::new()],
        })
    }

    fn reconcile(
        &mut self,
        payment_lines: &[MoveLineId],
        invoice_lines: &[MoveLineId],
    ) -> Result<(), AccountingError> {
        self.check_failure()?;
        self.reconciliations
            .push((payment_lines.to_vec(), invoice_lines.to_vec()));
        Ok(())
    }
}
