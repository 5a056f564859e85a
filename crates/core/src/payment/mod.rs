//! Pay-invoice orchestrator.
//!
//! A stateless entry point that pays a posted invoice out of any of the
//! three cash box kinds: validates the amount against the invoice residual
//! and the box balance, then creates one expense line through the line
//! store, delegating to the accounting bridge when the target is a
//! logistics box.

pub mod error;
pub mod service;
pub mod types;

pub use error::PayInvoiceError;
pub use service::PayInvoiceService;
pub use types::PayInvoiceRequest;
