//! Running-balance line store.
//!
//! This module implements the ordered income/expense ledger attached to a
//! cash box:
//! - Line domain types and creation/update inputs
//! - Validation rules for line fields and box state
//! - Full-box balance recomputation in `(sequence, insertion)` order
//! - Error types for line operations

pub mod error;
pub mod store;
pub mod types;

#[cfg(test)]
mod store_props;

pub use error::LedgerError;
pub use store::LineStore;
pub use types::{CashLine, DocumentType, LineType, LineUpdate, NewLine};
