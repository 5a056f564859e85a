//! Cash box aggregate endpoints.
//!
//! Per box kind: dashboard figures, quick-select counters and quick
//! creation of a draft box for the requesting user.

use axum::{
    Json, Router,
    extract::{Path, Query, State},
    http::StatusCode,
    response::IntoResponse,
    routing::{get, post},
};
use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use tracing::info;

use arqueo_core::cashbox::{CashBox, CashBoxKind, NewCashBox};
use arqueo_core::dashboard::DashboardService;
use arqueo_shared::AppError;
use arqueo_shared::types::{CashBoxId, CompanyId, UserId};

use crate::AppState;
use crate::error::ApiError;

/// Creates the cash box routes.
pub fn routes() -> Router<AppState> {
    Router::new()
        .route("/cash/{kind}/dashboard", get(dashboard_data))
        .route("/cash/{kind}/quick-stats", get(quick_stats))
        .route("/cash/{kind}/quick-create", post(quick_create))
}

// ============================================================================
// Request / Response Types
// ============================================================================

/// Query parameters identifying the requesting user.
#[derive(Debug, Deserialize)]
pub struct ResponsibleQuery {
    /// The responsible user the figures are computed for.
    pub responsible: UserId,
}

/// Request body for quick creation of a draft box.
#[derive(Debug, Deserialize)]
pub struct QuickCreateRequest {
    /// The responsible user the box is created for.
    pub responsible: UserId,
    /// Responsible user's display name.
    #[serde(default)]
    pub responsible_name: String,
    /// Issuing company.
    pub company: CompanyId,
    /// Opening amount; defaults to zero like a form-created draft.
    #[serde(default)]
    pub initial_amount: Decimal,
    /// Box date; defaults to today.
    pub date: Option<NaiveDate>,
}

/// Response for quick creation.
#[derive(Debug, Serialize)]
pub struct QuickCreateResponse {
    /// Whether the box was created.
    pub success: bool,
    /// The new box id.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub box_id: Option<CashBoxId>,
    /// The new box display code (the draft placeholder).
    #[serde(skip_serializing_if = "Option::is_none")]
    pub code: Option<String>,
    /// Error message when creation failed.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

// ============================================================================
// Route Handlers
// ============================================================================

fn parse_kind(kind: &str) -> Result<CashBoxKind, ApiError> {
    kind.parse::<CashBoxKind>()
        .map_err(|e| ApiError(AppError::Validation(e)))
}

/// GET /cash/{kind}/dashboard
async fn dashboard_data(
    State(state): State<AppState>,
    Path(kind): Path<String>,
    Query(query): Query<ResponsibleQuery>,
) -> Result<impl IntoResponse, ApiError> {
    let kind = parse_kind(&kind)?;
    let today = chrono::Utc::now().date_naive();

    let boxes = state.boxes.read().await;
    let all: Vec<CashBox> = boxes.values().cloned().collect();
    drop(boxes);

    let data = DashboardService::dashboard_data(&all, kind, query.responsible, today);
    Ok((StatusCode::OK, Json(data)))
}

/// GET /cash/{kind}/quick-stats
async fn quick_stats(
    State(state): State<AppState>,
    Path(kind): Path<String>,
    Query(query): Query<ResponsibleQuery>,
) -> Result<impl IntoResponse, ApiError> {
    let kind = parse_kind(&kind)?;

    let boxes = state.boxes.read().await;
    let all: Vec<CashBox> = boxes.values().cloned().collect();
    drop(boxes);

    let stats = DashboardService::quick_stats(&all, kind, query.responsible);
    Ok((StatusCode::OK, Json(stats)))
}

/// POST /cash/{kind}/quick-create
///
/// Creates a draft box; the display code stays on the placeholder until
/// the box is activated. Creation failures come back in the response
/// envelope rather than as an HTTP error, so the widget can show them
/// inline.
async fn quick_create(
    State(state): State<AppState>,
    Path(kind): Path<String>,
    Json(request): Json<QuickCreateRequest>,
) -> Result<impl IntoResponse, ApiError> {
    let kind = parse_kind(&kind)?;
    let date = request
        .date
        .unwrap_or_else(|| chrono::Utc::now().date_naive());

    let input = NewCashBox::new(
        request.company,
        date,
        request.responsible,
        request.responsible_name,
        request.initial_amount,
    );

    match CashBox::new(kind, input) {
        Ok(cash_box) => {
            let box_id = cash_box.id;
            let code = cash_box.display_code().to_string();
            state.boxes.write().await.insert(box_id, cash_box);
            info!(%box_id, %kind, "cash box created");

            Ok((
                StatusCode::CREATED,
                Json(QuickCreateResponse {
                    success: true,
                    box_id: Some(box_id),
                    code: Some(code),
                    error: None,
                }),
            ))
        }
        Err(err) => Ok((
            StatusCode::OK,
            Json(QuickCreateResponse {
                success: false,
                box_id: None,
                code: None,
                error: Some(err.to_string()),
            }),
        )),
    }
}
