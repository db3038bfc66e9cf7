//! Tag index handler.

use axum::Json;
use axum::extract::{Query, State};

use contenthub_entity::tag::Tag;

use crate::dto::ApiResponse;
use crate::dto::request::TagListQuery;
use crate::error::ApiError;
use crate::state::AppState;

/// GET /contenttags?sort=
pub async fn list_tags(
    State(state): State<AppState>,
    Query(query): Query<TagListQuery>,
) -> Result<Json<ApiResponse<Vec<Tag>>>, ApiError> {
    let page = state.tag_service.list(query.sort.as_deref()).await?;
    Ok(Json(ApiResponse::page(page)))
}
