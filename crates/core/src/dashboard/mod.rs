//! Aggregate statistics for dashboards and the quick-select widget.

pub mod service;
pub mod types;

pub use service::DashboardService;
pub use types::{DashboardData, QuickStats};
