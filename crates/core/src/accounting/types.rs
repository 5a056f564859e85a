//! Gateway port and request/response types for the accounting ledger.

use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use arqueo_shared::types::{
    AccountId, InvoiceId, JournalId, MoveId, MoveLineId, PartnerId, PaymentId,
};

use super::error::AccountingError;
use crate::ledger::types::DocumentType;

/// One debit/credit line of a journal entry request.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MoveLineRequest {
    /// Account to post to.
    pub account: AccountId,
    /// Debit amount (zero when this is the credit side).
    pub debit: Decimal,
    /// Credit amount (zero when this is the debit side).
    pub credit: Decimal,
    /// Counterparty attached to the line, if any.
    pub partner: Option<PartnerId>,
}

/// A balanced journal entry request. Posted immediately on creation; no
/// draft accounting documents are left behind.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MoveRequest {
    /// Journal to post into.
    pub journal: JournalId,
    /// Accounting date.
    pub date: NaiveDate,
    /// Human-readable reference.
    pub reference: String,
    /// Debit/credit lines; totals must be equal.
    pub lines: Vec<MoveLineRequest>,
}

impl MoveRequest {
    /// Returns the total debit amount.
    #[must_use]
    pub fn total_debit(&self) -> Decimal {
        self.lines.iter().map(|l| l.debit).sum()
    }

    /// Returns the total credit amount.
    #[must_use]
    pub fn total_credit(&self) -> Decimal {
        self.lines.iter().map(|l| l.credit).sum()
    }

    /// Returns true if debits equal credits.
    #[must_use]
    pub fn is_balanced(&self) -> bool {
        self.total_debit() == self.total_credit()
    }
}

/// Direction of a registered payment.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PaymentDirection {
    /// Money coming into the company.
    Inbound,
    /// Money leaving the company.
    Outbound,
}

/// Which side of the business the payment partner sits on.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PartnerKind {
    /// A customer.
    Customer,
    /// A supplier/vendor.
    Supplier,
}

/// A payment registration request.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PaymentRequest {
    /// Inbound or outbound.
    pub direction: PaymentDirection,
    /// Customer or supplier payment.
    pub partner_kind: PartnerKind,
    /// The paying/paid partner.
    pub partner: PartnerId,
    /// Payment amount, strictly positive.
    pub amount: Decimal,
    /// Payment date.
    pub date: NaiveDate,
    /// Journal the payment moves through.
    pub journal: JournalId,
    /// Memo shown on the payment.
    pub memo: String,
}

/// A payment registered and posted by the gateway.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PostedPayment {
    /// The payment reference.
    pub id: PaymentId,
    /// The journal entry the payment posted.
    pub move_id: MoveId,
    /// The payment's open receivable/payable lines, used for reconciliation.
    pub counterpart_lines: Vec<MoveLineId>,
}

/// Result of running an invoice payment through the bridge.
#[derive(Debug, Clone, Copy)]
pub struct InvoicePaymentResult {
    /// The payment reference recorded on the line.
    pub payment: PaymentId,
    /// The payment's journal entry, when one was created by this call.
    pub journal_move: Option<MoveId>,
}

/// Classification of the invoice being paid.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum InvoiceMoveType {
    /// Invoice issued to a customer (receivable).
    CustomerInvoice,
    /// Bill received from a vendor (payable).
    VendorBill,
    /// Credit note issued to a customer.
    CustomerRefund,
    /// Credit note received from a vendor.
    VendorRefund,
}

impl InvoiceMoveType {
    /// Returns the payment direction opposite the invoice's natural
    /// direction: inbound for receivables, outbound for payables.
    #[must_use]
    pub const fn payment_direction(&self) -> PaymentDirection {
        match self {
            Self::CustomerInvoice | Self::VendorRefund => PaymentDirection::Inbound,
            Self::VendorBill | Self::CustomerRefund => PaymentDirection::Outbound,
        }
    }

    /// Returns which side of the business the invoice partner sits on.
    #[must_use]
    pub const fn partner_kind(&self) -> PartnerKind {
        match self {
            Self::CustomerInvoice | Self::CustomerRefund => PartnerKind::Customer,
            Self::VendorBill | Self::VendorRefund => PartnerKind::Supplier,
        }
    }

    /// Returns the supporting document kind inferred for the cash line.
    #[must_use]
    pub const fn document_type(&self) -> DocumentType {
        match self {
            Self::CustomerInvoice | Self::VendorBill => DocumentType::Invoice,
            Self::CustomerRefund | Self::VendorRefund => DocumentType::Receipt,
        }
    }
}

/// Snapshot of an invoice as seen by the pay-invoice flow.
///
/// The invoice subsystem is external; callers resolve the invoice and hand
/// the core this value.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct InvoiceInfo {
    /// Invoice identity.
    pub id: InvoiceId,
    /// Invoice display code (e.g. `"F001-00012"`).
    pub code: String,
    /// Invoice counterparty.
    pub partner: PartnerId,
    /// Counterparty display name.
    pub partner_name: String,
    /// Invoice classification.
    pub move_type: InvoiceMoveType,
    /// Amount still unpaid.
    pub residual: Decimal,
    /// The invoice's open receivable/payable lines, used for reconciliation.
    pub open_lines: Vec<MoveLineId>,
}

/// Port to the external general ledger and payment subsystem.
///
/// Every mutation posts its document immediately; failures propagate
/// unchanged and the caller aborts without partial state.
pub trait AccountingGateway {
    /// Resolves the default cash account of a journal.
    fn journal_cash_account(&self, journal: JournalId) -> Option<AccountId>;

    /// Resolves a partner's payable account, if configured.
    fn partner_payable_account(&self, partner: PartnerId) -> Option<AccountId>;

    /// Creates and immediately posts a balanced journal entry.
    fn create_and_post_move(&mut self, request: MoveRequest) -> Result<MoveId, AccountingError>;

    /// Registers and posts a payment.
    fn create_payment(&mut self, request: PaymentRequest)
    -> Result<PostedPayment, AccountingError>;

    /// Reconciles a payment's open lines against an invoice's open lines.
    fn reconcile(
        &mut self,
        payment_lines: &[MoveLineId],
        invoice_lines: &[MoveLineId],
    ) -> Result<(), AccountingError>;
}

/// Company-level accounting configuration consumed by the bridge.
#[derive(Debug, Clone, Copy, Default)]
pub struct BridgeConfig {
    /// Suspense account used as counterpart when no partner account applies.
    pub suspense_account: Option<AccountId>,
}
