//! Pure aggregation over a user's cash boxes.

use chrono::NaiveDate;
use rust_decimal::Decimal;

use arqueo_shared::types::UserId;

use super::types::{DashboardData, QuickStats};
use crate::cashbox::types::{CashBox, CashBoxKind, CashBoxState};

/// Stateless aggregation service behind the dashboard endpoints.
pub struct DashboardService;

impl DashboardService {
    /// Computes the dashboard figures for one user and box kind.
    #[must_use]
    pub fn dashboard_data(
        boxes: &[CashBox],
        kind: CashBoxKind,
        responsible: UserId,
        today: NaiveDate,
    ) -> DashboardData {
        let mine: Vec<&CashBox> = boxes
            .iter()
            .filter(|b| b.kind == kind && b.responsible == responsible)
            .collect();

        let open: Vec<&&CashBox> = mine
            .iter()
            .filter(|b| b.state == CashBoxState::Open)
            .collect();

        DashboardData {
            total_boxes: mine.len(),
            open_boxes: open.len(),
            total_open_balance: open.iter().map(|b| b.current_balance()).sum(),
            boxes_this_month: mine.iter().filter(|b| b.opened_in_month_of(today)).count(),
        }
    }

    /// Computes the quick-select counters for one user and box kind.
    #[must_use]
    pub fn quick_stats(boxes: &[CashBox], kind: CashBoxKind, responsible: UserId) -> QuickStats {
        let mut stats = QuickStats {
            draft: 0,
            open: 0,
            closed: 0,
            total: 0,
            total_open_balance: Decimal::ZERO,
        };

        for cash_box in boxes
            .iter()
            .filter(|b| b.kind == kind && b.responsible == responsible)
        {
            stats.total += 1;
            match cash_box.state {
                CashBoxState::Draft => stats.draft += 1,
                CashBoxState::Open => {
                    stats.open += 1;
                    stats.total_open_balance += cash_box.current_balance();
                }
                CashBoxState::Closed => stats.closed += 1,
                CashBoxState::Cancelled => {}
            }
        }
        stats
    }
}
