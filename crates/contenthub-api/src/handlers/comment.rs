//! Comment handlers, nested under a content element.

use axum::Json;
use axum::extract::{Path, Query, State};

use contenthub_entity::comment::Comment;
use contenthub_service::comment::CommentListParams;

use crate::dto::ApiResponse;
use crate::dto::request::{CreateCommentRequest, UpdateCommentRequest};
use crate::error::ApiError;
use crate::extractors::{CurrentUser, ValidatedJson, parse_id};
use crate::state::AppState;

/// GET /contentelements/{id}/comments?limit=&offset=
pub async fn list_comments(
    State(state): State<AppState>,
    Path(id): Path<String>,
    Query(params): Query<CommentListParams>,
) -> Result<Json<ApiResponse<Vec<Comment>>>, ApiError> {
    let element_id = parse_id(&id, "ID")?;
    let page = state.comment_service.list(element_id, &params).await?;
    Ok(Json(ApiResponse::page(page)))
}

/// POST /contentelements/{id}/comments
pub async fn add_comment(
    State(state): State<AppState>,
    user: CurrentUser,
    Path(id): Path<String>,
    ValidatedJson(req): ValidatedJson<CreateCommentRequest>,
) -> Result<Json<ApiResponse<Comment>>, ApiError> {
    let element_id = parse_id(&id, "ID")?;
    let comment = state
        .comment_service
        .add(&user, element_id, req.into())
        .await?;
    Ok(Json(ApiResponse::ok(comment)))
}

/// PATCH /contentelements/{id}/comments/{cid}
pub async fn update_comment(
    State(state): State<AppState>,
    user: CurrentUser,
    Path((id, cid)): Path<(String, String)>,
    ValidatedJson(req): ValidatedJson<UpdateCommentRequest>,
) -> Result<Json<ApiResponse<Comment>>, ApiError> {
    let element_id = parse_id(&id, "ID")?;
    let comment_id = parse_id(&cid, "CID")?;
    let comment = state
        .comment_service
        .update(&user, element_id, comment_id, req.into())
        .await?;
    Ok(Json(ApiResponse::ok(comment)))
}

/// DELETE /contentelements/{id}/comments/{cid}
pub async fn delete_comment(
    State(state): State<AppState>,
    user: CurrentUser,
    Path((id, cid)): Path<(String, String)>,
) -> Result<Json<ApiResponse<Comment>>, ApiError> {
    let element_id = parse_id(&id, "ID")?;
    let comment_id = parse_id(&cid, "CID")?;
    let comment = state
        .comment_service
        .delete(&user, element_id, comment_id)
        .await?;
    Ok(Json(ApiResponse::ok(comment)))
}
