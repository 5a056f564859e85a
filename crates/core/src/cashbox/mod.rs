//! Cash box aggregate and lifecycle state machine.
//!
//! One generic `CashBox` covers the petty, distribution and logistics
//! variants; the behavioral differences between them live in a small
//! per-kind policy table instead of three parallel type hierarchies:
//! - Domain types, the kind/policy table and derived totals
//! - State machine transitions (activate, close, cancel, reset)
//! - Deletion guards
//! - Orchestration of line creation with the accounting bridge

pub mod error;
pub mod service;
pub mod types;

pub use error::CashBoxError;
pub use service::CashBoxService;
pub use types::{
    CashBox, CashBoxKind, CashBoxPolicy, CashBoxState, CashBoxTotals, InitialPayment, NewCashBox,
    PaymentType,
};
