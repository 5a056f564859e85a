//! Cash receipt domain types.

use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use arqueo_shared::types::{CompanyId, Currency, PartnerId, ReceiptId, UserId};

use crate::receipt::error::ReceiptError;
use crate::sequence::DRAFT_PLACEHOLDER;

/// Default recipient label printed when no partner was recorded.
pub const DEFAULT_RECIPIENT: &str = "BENEFICIARIO";

/// Default concept label printed when no concept was recorded.
pub const DEFAULT_CONCEPT: &str = "ENTREGA DE EFECTIVO";

/// Company area issuing the receipt.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ReceiptArea {
    /// Logistics hands cash out without naming a recipient up front.
    Logistics,
    /// Administration/management receipts must name recipient and concept.
    AdminManagement,
}

impl ReceiptArea {
    /// Returns the printed label for this area.
    #[must_use]
    pub const fn label(&self) -> &'static str {
        match self {
            Self::Logistics => "Logística",
            Self::AdminManagement => "Administración Gerencia",
        }
    }
}

/// Lifecycle state of a receipt.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ReceiptState {
    /// Being prepared; no voucher number yet.
    Draft,
    /// Confirmed and numbered.
    Confirmed,
    /// Voided.
    Cancelled,
}

impl std::fmt::Display for ReceiptState {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Draft => write!(f, "draft"),
            Self::Confirmed => write!(f, "confirmed"),
            Self::Cancelled => write!(f, "cancelled"),
        }
    }
}

/// Input for creating a new receipt.
#[derive(Debug, Clone)]
pub struct NewReceipt {
    /// Issuing company.
    pub company: CompanyId,
    /// Receipt date; never in the future.
    pub date: NaiveDate,
    /// Issuing area.
    pub area: ReceiptArea,
    /// Person receiving the cash.
    pub recipient: Option<PartnerId>,
    /// Recipient display name.
    pub recipient_name: Option<String>,
    /// User creating the receipt.
    pub created_by: UserId,
    /// Delivered amount, strictly positive.
    pub amount: Decimal,
    /// Voucher currency.
    pub currency: Currency,
    /// Reason for the handout.
    pub concept: Option<String>,
    /// Free-form remarks.
    pub notes: Option<String>,
}

impl NewReceipt {
    /// Creates a receipt input with the required fields; everything else
    /// starts unset and the currency defaults to soles.
    #[must_use]
    pub fn new(
        company: CompanyId,
        date: NaiveDate,
        area: ReceiptArea,
        created_by: UserId,
        amount: Decimal,
    ) -> Self {
        Self {
            company,
            date,
            area,
            recipient: None,
            recipient_name: None,
            created_by,
            amount,
            currency: Currency::default(),
            concept: None,
            notes: None,
        }
    }
}

/// A cash handout voucher.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CashReceipt {
    /// Receipt identity.
    pub id: ReceiptId,
    /// Assigned voucher number; `None` renders as the draft placeholder.
    pub code: Option<String>,
    /// Issuing company.
    pub company: CompanyId,
    /// Receipt date.
    pub date: NaiveDate,
    /// Issuing area.
    pub area: ReceiptArea,
    /// Person receiving the cash.
    pub recipient: Option<PartnerId>,
    /// Recipient display name.
    pub recipient_name: Option<String>,
    /// User who created the receipt.
    pub created_by: UserId,
    /// Delivered amount.
    pub amount: Decimal,
    /// Voucher currency.
    pub currency: Currency,
    /// Reason for the handout.
    pub concept: Option<String>,
    /// Free-form remarks.
    pub notes: Option<String>,
    /// Lifecycle state.
    pub state: ReceiptState,
}

impl CashReceipt {
    /// Creates a draft receipt with no voucher number.
    ///
    /// # Errors
    ///
    /// Rejects a non-positive amount and a date after `today`.
    pub fn new(input: NewReceipt, today: NaiveDate) -> Result<Self, ReceiptError> {
        if input.amount <= Decimal::ZERO {
            return Err(ReceiptError::AmountNotPositive);
        }
        if input.date > today {
            return Err(ReceiptError::FutureDate(input.date));
        }
        Ok(Self {
            id: ReceiptId::new(),
            code: None,
            company: input.company,
            date: input.date,
            area: input.area,
            recipient: input.recipient,
            recipient_name: input.recipient_name,
            created_by: input.created_by,
            amount: input.amount,
            currency: input.currency,
            concept: input.concept,
            notes: input.notes,
            state: ReceiptState::Draft,
        })
    }

    /// Returns the assigned voucher number, or the draft placeholder.
    #[must_use]
    pub fn display_code(&self) -> &str {
        self.code.as_deref().unwrap_or(DRAFT_PLACEHOLDER)
    }

    /// Returns the list-view display name.
    #[must_use]
    pub fn display_name(&self) -> String {
        match &self.recipient_name {
            Some(name) => format!("{} - {} - {}", self.display_code(), name, self.date),
            None => format!("{} - {}", self.display_code(), self.date),
        }
    }

    /// Returns the recipient name for the printed voucher.
    #[must_use]
    pub fn recipient_display(&self) -> &str {
        self.recipient_name.as_deref().unwrap_or(DEFAULT_RECIPIENT)
    }

    /// Returns the concept for the printed voucher.
    #[must_use]
    pub fn concept_display(&self) -> &str {
        self.concept.as_deref().unwrap_or(DEFAULT_CONCEPT)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    fn today() -> NaiveDate {
        NaiveDate::from_ymd_opt(2026, 3, 15).unwrap()
    }

    fn make_input(amount: Decimal) -> NewReceipt {
        NewReceipt::new(
            CompanyId::new(),
            NaiveDate::from_ymd_opt(2026, 3, 10).unwrap(),
            ReceiptArea::Logistics,
            UserId::new(),
            amount,
        )
    }

    #[test]
    fn test_new_receipt_starts_draft() {
        let receipt = CashReceipt::new(make_input(dec!(150)), today()).unwrap();
        assert_eq!(receipt.state, ReceiptState::Draft);
        assert!(receipt.code.is_none());
        assert_eq!(receipt.display_code(), "Borrador");
        assert_eq!(receipt.currency, Currency::Pen);
    }

    #[test]
    fn test_amount_must_be_positive() {
        assert!(matches!(
            CashReceipt::new(make_input(dec!(0)), today()),
            Err(ReceiptError::AmountNotPositive)
        ));
        assert!(matches!(
            CashReceipt::new(make_input(dec!(-10)), today()),
            Err(ReceiptError::AmountNotPositive)
        ));
    }

    #[test]
    fn test_future_date_rejected() {
        let mut input = make_input(dec!(150));
        input.date = NaiveDate::from_ymd_opt(2026, 3, 16).unwrap();
        assert!(matches!(
            CashReceipt::new(input, today()),
            Err(ReceiptError::FutureDate(_))
        ));
    }

    #[test]
    fn test_today_is_accepted() {
        let mut input = make_input(dec!(150));
        input.date = today();
        assert!(CashReceipt::new(input, today()).is_ok());
    }

    #[test]
    fn test_print_defaults() {
        let receipt = CashReceipt::new(make_input(dec!(150)), today()).unwrap();
        assert_eq!(receipt.recipient_display(), "BENEFICIARIO");
        assert_eq!(receipt.concept_display(), "ENTREGA DE EFECTIVO");
    }

    #[test]
    fn test_display_name_with_and_without_recipient() {
        let receipt = CashReceipt::new(make_input(dec!(150)), today()).unwrap();
        assert_eq!(receipt.display_name(), "Borrador - 2026-03-10");

        let mut input = make_input(dec!(150));
        input.recipient = Some(PartnerId::new());
        input.recipient_name = Some("Rosa Flores".to_string());
        let receipt = CashReceipt::new(input, today()).unwrap();
        assert_eq!(receipt.display_name(), "Borrador - Rosa Flores - 2026-03-10");
    }

    #[test]
    fn test_area_labels() {
        assert_eq!(ReceiptArea::Logistics.label(), "Logística");
        assert_eq!(
            ReceiptArea::AdminManagement.label(),
            "Administración Gerencia"
        );
    }
}
