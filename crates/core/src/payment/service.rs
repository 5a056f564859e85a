//! Pay-invoice orchestration.

use rust_decimal::Decimal;

use arqueo_shared::types::CashLineId;

use super::error::PayInvoiceError;
use super::types::PayInvoiceRequest;
use crate::accounting::bridge::AccountingBridge;
use crate::accounting::types::{AccountingGateway, InvoiceInfo};
use crate::cashbox::types::{CashBox, CashBoxState};
use crate::ledger::store::LineStore;
use crate::ledger::types::{LineType, NewLine};

/// Stateless orchestrator paying posted invoices from a cash box.
pub struct PayInvoiceService;

impl PayInvoiceService {
    /// Pays `invoice` out of `cash_box`, creating one expense line.
    ///
    /// Preconditions are checked in order: the amount is positive, within
    /// the invoice's outstanding balance, the box matches the declared cash
    /// type and is open, and the box holds enough cash. Any violation
    /// creates no line and posts nothing.
    ///
    /// For logistics boxes the accounting bridge registers and reconciles a
    /// payment instead of posting a plain line entry; the bridge runs
    /// before the line lands on the box so a gateway failure leaves the box
    /// untouched.
    pub fn pay_invoice(
        cash_box: &mut CashBox,
        invoice: &InvoiceInfo,
        request: PayInvoiceRequest,
        gateway: &mut dyn AccountingGateway,
    ) -> Result<CashLineId, PayInvoiceError> {
        if request.amount <= Decimal::ZERO {
            return Err(PayInvoiceError::AmountNotPositive);
        }
        if request.amount > invoice.residual {
            return Err(PayInvoiceError::ExceedsResidual {
                amount: request.amount,
                residual: invoice.residual,
            });
        }
        if request.cash_type != cash_box.kind {
            return Err(PayInvoiceError::WrongCashBox {
                requested: request.cash_type,
                selected: cash_box.kind,
            });
        }
        if cash_box.state != CashBoxState::Open {
            return Err(PayInvoiceError::BoxNotOpen {
                state: cash_box.state,
            });
        }
        let balance = cash_box.current_balance();
        if request.amount > balance {
            return Err(PayInvoiceError::InsufficientFunds {
                balance,
                amount: request.amount,
            });
        }

        let mut input = NewLine::new(
            request.date,
            LineType::Expense,
            request.amount,
            format!("Payment of {} - {}", invoice.code, invoice.partner_name),
        );
        input.document_type = Some(invoice.move_type.document_type());
        input.document_number = Some(invoice.code.clone());
        input.partner = Some(invoice.partner);
        input.partner_name = Some(invoice.partner_name.clone());
        input.invoice = Some(invoice.id);

        let mut line = LineStore::build_line(cash_box, input)?;

        if cash_box.policy().requires_journal {
            let result =
                AccountingBridge::post_invoice_payment(cash_box, &line, invoice, gateway)?;
            line.payment = Some(result.payment);
            line.journal_move = result.journal_move;
        }

        Ok(LineStore::attach(cash_box, line))
    }
}
