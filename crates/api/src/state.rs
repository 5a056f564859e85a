//! Shared application state.
//!
//! Persistence proper is an external collaborator of the core; the API
//! layer keeps its records in memory behind one `RwLock` per store so that
//! each mutation (state transition plus balance recomputation) happens
//! under a single write guard.

use std::collections::HashMap;
use std::sync::Arc;

use tokio::sync::RwLock;

use arqueo_core::cashbox::CashBox;
use arqueo_shared::types::CashBoxId;

/// Application state shared across handlers.
#[derive(Clone, Default)]
pub struct AppState {
    /// All cash boxes, keyed by id.
    pub boxes: Arc<RwLock<HashMap<CashBoxId, CashBox>>>,
}

impl AppState {
    /// Creates empty state.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }
}
