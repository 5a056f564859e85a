//! Dashboard data types.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// Per-user dashboard figures for one box kind.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DashboardData {
    /// All of the user's boxes of this kind.
    pub total_boxes: usize,
    /// Boxes currently open.
    pub open_boxes: usize,
    /// Combined balance of the open boxes.
    pub total_open_balance: Decimal,
    /// Boxes dated in the current month.
    pub boxes_this_month: usize,
}

/// Per-user state counters for the quick-select widget.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct QuickStats {
    /// Draft boxes.
    pub draft: usize,
    /// Open boxes.
    pub open: usize,
    /// Closed boxes.
    pub closed: usize,
    /// All boxes regardless of state.
    pub total: usize,
    /// Combined balance of the open boxes.
    pub total_open_balance: Decimal,
}
