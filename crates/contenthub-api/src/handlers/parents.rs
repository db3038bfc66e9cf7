//! Parent picker listing.

use axum::Json;
use axum::extract::State;

use contenthub_entity::element::ParentListEntry;

use crate::dto::ApiResponse;
use crate::error::ApiError;
use crate::state::AppState;

/// GET /parents
pub async fn list_parents(
    State(state): State<AppState>,
) -> Result<Json<ApiResponse<Vec<ParentListEntry>>>, ApiError> {
    let entries = state.tree_service.list_parents().await?;
    Ok(Json(ApiResponse::ok(entries)))
}
