//! Cash box domain types and the per-kind policy table.

use chrono::{Datelike, NaiveDate};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use arqueo_shared::types::{
    CashBoxId, CashLineId, CompanyId, JournalId, MoveId, PaymentTypeId, UserId,
};

use crate::cashbox::error::CashBoxError;
use crate::ledger::types::{CashLine, LineType};
use crate::sequence::{DRAFT_PLACEHOLDER, SequenceKind};

/// The three cash box variants.
///
/// They share one aggregate and state machine; the differences between them
/// are captured by [`CashBoxPolicy`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum CashBoxKind {
    /// Petty cash.
    Petty,
    /// Distribution cash.
    Distribution,
    /// Logistics cash, the variant integrated with the accounting ledger.
    Logistics,
}

impl CashBoxKind {
    /// Returns the capability set for this kind.
    #[must_use]
    pub const fn policy(&self) -> CashBoxPolicy {
        match self {
            Self::Petty => CashBoxPolicy {
                requires_journal: false,
                reset_allowed_when_closed: true,
                delete_locked_when_active: true,
                lines_editable_when_cancelled: true,
            },
            Self::Distribution => CashBoxPolicy {
                requires_journal: false,
                reset_allowed_when_closed: true,
                delete_locked_when_active: false,
                lines_editable_when_cancelled: true,
            },
            Self::Logistics => CashBoxPolicy {
                requires_journal: true,
                reset_allowed_when_closed: false,
                delete_locked_when_active: true,
                lines_editable_when_cancelled: false,
            },
        }
    }

    /// Returns the display-code sequence this kind draws from.
    #[must_use]
    pub const fn sequence_kind(&self) -> SequenceKind {
        match self {
            Self::Petty => SequenceKind::PettyCash,
            Self::Distribution => SequenceKind::DistributionCash,
            Self::Logistics => SequenceKind::LogisticsCash,
        }
    }

    /// Returns the human-readable label used in audit notes.
    #[must_use]
    pub const fn label(&self) -> &'static str {
        match self {
            Self::Petty => "Petty cash",
            Self::Distribution => "Distribution cash",
            Self::Logistics => "Logistics cash",
        }
    }
}

impl std::fmt::Display for CashBoxKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Petty => write!(f, "petty"),
            Self::Distribution => write!(f, "distribution"),
            Self::Logistics => write!(f, "logistics"),
        }
    }
}

impl std::str::FromStr for CashBoxKind {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "petty" => Ok(Self::Petty),
            "distribution" => Ok(Self::Distribution),
            "logistics" => Ok(Self::Logistics),
            _ => Err(format!("Unknown cash box kind: {s}")),
        }
    }
}

/// Capability set distinguishing the three box kinds.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CashBoxPolicy {
    /// Whether open/close/line events post into the accounting ledger.
    pub requires_journal: bool,
    /// Whether a closed box may be reset back to draft.
    pub reset_allowed_when_closed: bool,
    /// Whether open and closed boxes are protected from deletion.
    pub delete_locked_when_active: bool,
    /// Whether lines may still be edited once the box is cancelled.
    pub lines_editable_when_cancelled: bool,
}

impl CashBoxPolicy {
    /// Returns true if lines may be added, modified or removed while the
    /// box is in `state`. Closed boxes are always locked.
    #[must_use]
    pub const fn lines_editable_in(&self, state: CashBoxState) -> bool {
        match state {
            CashBoxState::Draft | CashBoxState::Open => true,
            CashBoxState::Closed => false,
            CashBoxState::Cancelled => self.lines_editable_when_cancelled,
        }
    }
}

/// Lifecycle state of a cash box.
///
/// Draft → Open → Closed, with Draft/Open → Cancelled. Closed and
/// Cancelled are terminal; no transition leaves them except the
/// policy-gated reset back to Draft.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum CashBoxState {
    /// Being prepared; no display code yet.
    Draft,
    /// Active and accepting movements.
    Open,
    /// Counted and settled (immutable).
    Closed,
    /// Abandoned.
    Cancelled,
}

impl std::fmt::Display for CashBoxState {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Draft => write!(f, "draft"),
            Self::Open => write!(f, "open"),
            Self::Closed => write!(f, "closed"),
            Self::Cancelled => write!(f, "cancelled"),
        }
    }
}

/// A payment-type catalog entry (bank transfer, cheque, cash, ...).
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PaymentType {
    /// Catalog identity.
    pub id: PaymentTypeId,
    /// Display name.
    pub name: String,
    /// Optional short code.
    pub code: Option<String>,
    /// Catalog ordering.
    pub sequence: i32,
    /// Whether the entry is selectable.
    pub active: bool,
    /// Whether this payment type must carry an operation number.
    pub requires_number: bool,
}

/// How the opening cash arrived (payment type + operation/cheque number).
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct InitialPayment {
    /// The payment-type catalog entry.
    pub payment_type: PaymentTypeId,
    /// Bank operation or cheque number, when the payment type demands one.
    pub operation_number: Option<String>,
}

impl InitialPayment {
    /// Validates this initial payment against its catalog entry.
    pub fn validate_against(&self, payment_type: &PaymentType) -> Result<(), CashBoxError> {
        if payment_type.requires_number
            && self
                .operation_number
                .as_deref()
                .is_none_or(|n| n.trim().is_empty())
        {
            return Err(CashBoxError::OperationNumberRequired {
                payment_type: payment_type.name.clone(),
            });
        }
        Ok(())
    }
}

/// Derived totals of a cash box, recomputed from the line set on read.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct CashBoxTotals {
    /// Initial amount plus all income lines.
    pub total_income: Decimal,
    /// Sum of all expense lines.
    pub total_expense: Decimal,
    /// `total_income - total_expense`.
    pub current_balance: Decimal,
}

/// Input for creating a new cash box.
#[derive(Debug, Clone)]
pub struct NewCashBox {
    /// Owning company.
    pub company: CompanyId,
    /// Box date.
    pub date: NaiveDate,
    /// Responsible user.
    pub responsible: UserId,
    /// Responsible user's display name (shown in the box display name).
    pub responsible_name: String,
    /// Opening amount, zero or positive.
    pub initial_amount: Decimal,
    /// How the opening cash arrived, if recorded.
    pub initial_payment: Option<InitialPayment>,
    /// Accounting journal to post into (logistics boxes).
    pub journal: Option<JournalId>,
}

impl NewCashBox {
    /// Creates a box input with the required fields; everything else
    /// starts unset.
    #[must_use]
    pub fn new(
        company: CompanyId,
        date: NaiveDate,
        responsible: UserId,
        responsible_name: impl Into<String>,
        initial_amount: Decimal,
    ) -> Self {
        Self {
            company,
            date,
            responsible,
            responsible_name: responsible_name.into(),
            initial_amount,
            initial_payment: None,
            journal: None,
        }
    }
}

/// A cash register instance tracking one responsible party's movements.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CashBox {
    /// Box identity.
    pub id: CashBoxId,
    /// Which of the three variants this box is.
    pub kind: CashBoxKind,
    /// Assigned display code; `None` renders as the draft placeholder.
    pub code: Option<String>,
    /// Owning company.
    pub company: CompanyId,
    /// Box date.
    pub date: NaiveDate,
    /// Responsible user.
    pub responsible: UserId,
    /// Responsible user's display name.
    pub responsible_name: String,
    /// Opening amount.
    pub initial_amount: Decimal,
    /// How the opening cash arrived, if recorded.
    pub initial_payment: Option<InitialPayment>,
    /// Lifecycle state.
    pub state: CashBoxState,
    /// Movements, in insertion order.
    pub lines: Vec<CashLine>,
    /// Accounting journal to post into (logistics boxes).
    pub journal: Option<JournalId>,
    /// Posted opening entry, set once on activation.
    pub opening_move: Option<MoveId>,
    /// Posted closing entry, set once on close when the balance is nonzero.
    pub closing_move: Option<MoveId>,
}

impl CashBox {
    /// Creates a draft box with no display code.
    ///
    /// # Errors
    ///
    /// Returns `CashBoxError::NegativeInitialAmount` when the opening
    /// amount is below zero.
    pub fn new(kind: CashBoxKind, input: NewCashBox) -> Result<Self, CashBoxError> {
        if input.initial_amount < Decimal::ZERO {
            return Err(CashBoxError::NegativeInitialAmount {
                amount: input.initial_amount,
            });
        }
        Ok(Self {
            id: CashBoxId::new(),
            kind,
            code: None,
            company: input.company,
            date: input.date,
            responsible: input.responsible,
            responsible_name: input.responsible_name,
            initial_amount: input.initial_amount,
            initial_payment: input.initial_payment,
            state: CashBoxState::Draft,
            lines: Vec::new(),
            journal: input.journal,
            opening_move: None,
            closing_move: None,
        })
    }

    /// Returns this kind's capability set.
    #[must_use]
    pub const fn policy(&self) -> CashBoxPolicy {
        self.kind.policy()
    }

    /// Returns the assigned code, or the draft placeholder.
    #[must_use]
    pub fn display_code(&self) -> &str {
        self.code.as_deref().unwrap_or(DRAFT_PLACEHOLDER)
    }

    /// Returns the list-view display name.
    #[must_use]
    pub fn display_name(&self) -> String {
        format!(
            "{} - {} ({})",
            self.display_code(),
            self.date,
            self.responsible_name
        )
    }

    /// Recomputes the derived totals from the line set.
    ///
    /// Totals are a pure function of `initial_amount` and the lines; they
    /// are never stored as independent ground truth.
    #[must_use]
    pub fn totals(&self) -> CashBoxTotals {
        let income: Decimal = self
            .lines
            .iter()
            .filter(|l| l.line_type == LineType::Income)
            .map(|l| l.amount)
            .sum();
        let expense: Decimal = self
            .lines
            .iter()
            .filter(|l| l.line_type == LineType::Expense)
            .map(|l| l.amount)
            .sum();

        let total_income = income + self.initial_amount;
        CashBoxTotals {
            total_income,
            total_expense: expense,
            current_balance: total_income - expense,
        }
    }

    /// Returns the current balance.
    #[must_use]
    pub fn current_balance(&self) -> Decimal {
        self.totals().current_balance
    }

    /// Returns the line with the given id, if present.
    #[must_use]
    pub fn line(&self, id: CashLineId) -> Option<&CashLine> {
        self.lines.iter().find(|l| l.id == id)
    }

    /// Returns true if the box date falls in the same month as `today`.
    #[must_use]
    pub fn opened_in_month_of(&self, today: NaiveDate) -> bool {
        self.date.year() == today.year() && self.date.month() == today.month()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    fn make_box(kind: CashBoxKind, initial: Decimal) -> CashBox {
        CashBox::new(
            kind,
            NewCashBox::new(
                CompanyId::new(),
                NaiveDate::from_ymd_opt(2026, 3, 10).unwrap(),
                UserId::new(),
                "Maria Quispe",
                initial,
            ),
        )
        .unwrap()
    }

    #[test]
    fn test_new_box_starts_draft_without_code() {
        let cash_box = make_box(CashBoxKind::Petty, dec!(100));
        assert_eq!(cash_box.state, CashBoxState::Draft);
        assert!(cash_box.code.is_none());
        assert_eq!(cash_box.display_code(), "Borrador");
    }

    #[test]
    fn test_negative_initial_amount_rejected() {
        let result = CashBox::new(
            CashBoxKind::Petty,
            NewCashBox::new(
                CompanyId::new(),
                NaiveDate::from_ymd_opt(2026, 3, 10).unwrap(),
                UserId::new(),
                "Maria Quispe",
                dec!(-1),
            ),
        );
        assert!(matches!(
            result,
            Err(CashBoxError::NegativeInitialAmount { .. })
        ));
    }

    #[test]
    fn test_display_name_uses_placeholder_in_draft() {
        let cash_box = make_box(CashBoxKind::Distribution, dec!(50));
        assert_eq!(
            cash_box.display_name(),
            "Borrador - 2026-03-10 (Maria Quispe)"
        );
    }

    #[test]
    fn test_totals_on_empty_box() {
        let cash_box = make_box(CashBoxKind::Petty, dec!(80));
        let totals = cash_box.totals();
        assert_eq!(totals.total_income, dec!(80));
        assert_eq!(totals.total_expense, dec!(0));
        assert_eq!(totals.current_balance, dec!(80));
    }

    #[test]
    fn test_policy_table() {
        assert!(CashBoxKind::Logistics.policy().requires_journal);
        assert!(!CashBoxKind::Petty.policy().requires_journal);
        assert!(!CashBoxKind::Distribution.policy().requires_journal);

        assert!(CashBoxKind::Petty.policy().reset_allowed_when_closed);
        assert!(CashBoxKind::Distribution.policy().reset_allowed_when_closed);
        assert!(!CashBoxKind::Logistics.policy().reset_allowed_when_closed);

        assert!(!CashBoxKind::Distribution.policy().delete_locked_when_active);
    }

    #[test]
    fn test_lines_editable_per_state() {
        let petty = CashBoxKind::Petty.policy();
        assert!(petty.lines_editable_in(CashBoxState::Draft));
        assert!(petty.lines_editable_in(CashBoxState::Open));
        assert!(!petty.lines_editable_in(CashBoxState::Closed));
        assert!(petty.lines_editable_in(CashBoxState::Cancelled));

        let logistics = CashBoxKind::Logistics.policy();
        assert!(!logistics.lines_editable_in(CashBoxState::Cancelled));
        assert!(!logistics.lines_editable_in(CashBoxState::Closed));
    }

    #[test]
    fn test_initial_payment_validation() {
        let payment_type = PaymentType {
            id: PaymentTypeId::new(),
            name: "Cheque".to_string(),
            code: Some("CHQ".to_string()),
            sequence: 10,
            active: true,
            requires_number: true,
        };

        let missing = InitialPayment {
            payment_type: payment_type.id,
            operation_number: None,
        };
        assert!(matches!(
            missing.validate_against(&payment_type),
            Err(CashBoxError::OperationNumberRequired { .. })
        ));

        let blank = InitialPayment {
            payment_type: payment_type.id,
            operation_number: Some("   ".to_string()),
        };
        assert!(blank.validate_against(&payment_type).is_err());

        let present = InitialPayment {
            payment_type: payment_type.id,
            operation_number: Some("0001-2345".to_string()),
        };
        assert!(present.validate_against(&payment_type).is_ok());
    }

    #[test]
    fn test_opened_in_month_of() {
        let cash_box = make_box(CashBoxKind::Petty, dec!(10));
        assert!(cash_box.opened_in_month_of(NaiveDate::from_ymd_opt(2026, 3, 31).unwrap()));
        assert!(!cash_box.opened_in_month_of(NaiveDate::from_ymd_opt(2026, 4, 1).unwrap()));
        // Same month of a different year does not count.
        assert!(!cash_box.opened_in_month_of(NaiveDate::from_ymd_opt(2025, 3, 10).unwrap()));
    }

    #[test]
    fn test_kind_from_str() {
        use std::str::FromStr;
        assert_eq!(CashBoxKind::from_str("petty").unwrap(), CashBoxKind::Petty);
        assert_eq!(
            CashBoxKind::from_str("LOGISTICS").unwrap(),
            CashBoxKind::Logistics
        );
        assert!(CashBoxKind::from_str("treasury").is_err());
    }
}
