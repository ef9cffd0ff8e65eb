//! Announcement API routes.

use axum::{
    Json,
    extract::{Path, State},
    http::StatusCode,
};
use core_types::Announcement;
use tracing::{debug, warn};
use web_types::ApiError;

use crate::state::AppState;

/// Message returned when the requested company is unknown.
pub const COMPANY_NOT_FOUND: &str = "A company with the provided id does not exist.";

/// GET /api/company/:handle/announcements - List a company's announcements,
/// newest first.
pub async fn list_announcements(
    State(state): State<AppState>,
    Path(handle): Path<String>,
) -> Result<Json<Vec<Announcement>>, (StatusCode, Json<ApiError>)> {
    match state.announcements(&handle) {
        Some(announcements) => {
            debug!(%handle, count = announcements.len(), "serving announcements");
            Ok(Json(announcements.to_vec()))
        }
        None => {
            warn!(%handle, "announcements requested for unknown company");
            Err((
                StatusCode::NOT_FOUND,
                Json(ApiError::with_code(COMPANY_NOT_FOUND, "NOT_FOUND")),
            ))
        }
    }
}
