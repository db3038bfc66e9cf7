//! Content element handlers.

use axum::Json;
use axum::extract::{Path, Query, State};

use contenthub_entity::element::ContentElement;
use contenthub_service::element::ElementListParams;

use crate::dto::ApiResponse;
use crate::dto::request::{CreateElementRequest, UpdateElementRequest};
use crate::error::ApiError;
use crate::extractors::{CurrentUser, ValidatedJson, parse_id};
use crate::state::AppState;

/// GET /contentelements?all=&id=&title=&description=&content=&tags=&status=&parent=&tree=&sort=&limit=&offset=
pub async fn list_elements(
    State(state): State<AppState>,
    Query(params): Query<ElementListParams>,
) -> Result<Json<ApiResponse<Vec<ContentElement>>>, ApiError> {
    let page = state.element_service.list(&params).await?;
    Ok(Json(ApiResponse::page(page)))
}

/// GET /contentelements/{id}
pub async fn get_element(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<Json<ApiResponse<ContentElement>>, ApiError> {
    let id = parse_id(&id, "ID")?;
    let element = state.element_service.get(id).await?;
    Ok(Json(ApiResponse::ok(element)))
}

/// POST /contentelements
pub async fn create_element(
    State(state): State<AppState>,
    user: CurrentUser,
    ValidatedJson(req): ValidatedJson<CreateElementRequest>,
) -> Result<Json<ApiResponse<ContentElement>>, ApiError> {
    let element = state.element_service.create(&user, req.into()).await?;
    Ok(Json(ApiResponse::ok(element)))
}

/// PATCH /contentelements/{id}
pub async fn update_element(
    State(state): State<AppState>,
    user: CurrentUser,
    Path(id): Path<String>,
    ValidatedJson(req): ValidatedJson<UpdateElementRequest>,
) -> Result<Json<ApiResponse<ContentElement>>, ApiError> {
    let id = parse_id(&id, "ID")?;
    let element = state.element_service.update(&user, id, req.into()).await?;
    Ok(Json(ApiResponse::ok(element)))
}

/// DELETE /contentelements/{id}
pub async fn delete_element(
    State(state): State<AppState>,
    user: CurrentUser,
    Path(id): Path<String>,
) -> Result<Json<ApiResponse<ContentElement>>, ApiError> {
    let id = parse_id(&id, "ID")?;
    let element = state.element_service.delete(&user, id).await?;
    Ok(Json(ApiResponse::ok(element)))
}
