//! Cash receipt vouchers.
//!
//! A standalone voucher documenting an ad-hoc cash handout to a third
//! party. Receipts do not participate in any running-balance ledger; they
//! have their own draft → confirmed → cancelled lifecycle and a Spanish
//! amount-to-words formatter for the printed form:
//! - Voucher domain types and display helpers
//! - Lifecycle service (confirm, cancel, reset, delete guard) and
//!   period/area reporting
//! - The amount-to-words converter

pub mod error;
pub mod service;
pub mod types;
pub mod words;

pub use error::ReceiptError;
pub use service::ReceiptService;
pub use types::{CashReceipt, NewReceipt, ReceiptArea, ReceiptState};
pub use words::amount_to_words;
