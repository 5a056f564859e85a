//! Accounting bridge for the logistics cash box.
//!
//! Translates box-open, box-close and line events into balanced journal
//! entry requests, and invoice-linked lines into payment + reconciliation
//! requests, against an external general ledger behind the
//! [`AccountingGateway`] port:
//! - Gateway port and move/payment request types
//! - The bridge itself (opening, closing, line and invoice-payment posts)
//! - Error types for configuration and gateway failures

pub mod bridge;
pub mod error;
pub mod types;

#[cfg(test)]
pub mod testing;

pub use bridge::AccountingBridge;
pub use error::AccountingError;
pub use types::{
    AccountingGateway, BridgeConfig, InvoiceInfo, InvoiceMoveType, InvoicePaymentResult,
    MoveLineRequest, MoveRequest, PartnerKind, PaymentDirection, PaymentRequest, PostedPayment,
};
