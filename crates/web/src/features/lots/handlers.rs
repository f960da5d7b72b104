use axum::{
    Json,
    extract::{Path, State},
    http::StatusCode,
    response::{IntoResponse, Response},
};
use storage::{Database, dto::lot::{AllocateLotRequest, LotResponse}};
use validator::Validate;

use crate::error::WebError;
use crate::middleware::auth::RequireApiKey;

use super::services;

#[utoipa::path(
    get,
    path = "/api/lots",
    responses(
        (status = 200, description = "List all lot assignments", body = Vec<LotResponse>)
    ),
    tag = "lots"
)]
pub async fn list_lots(State(db): State<Database>) -> Result<Response, WebError> {
    let lots = services::list_lots(db.pool()).await?;

    let response: Vec<LotResponse> = lots.into_iter().map(LotResponse::from).collect();

    Ok(Json(response).into_response())
}

#[utoipa::path(
    put,
    path = "/api/lots",
    request_body = AllocateLotRequest,
    security(
        ("bearer_auth" = [])
    ),
    responses(
        (status = 200, description = "Lot allocated", body = LotResponse),
        (status = 400, description = "Validation error"),
        (status = 401, description = "Unauthorized")
    ),
    tag = "lots"
)]
pub async fn allocate_lot(
    State(db): State<Database>,
    _: RequireApiKey,
    Json(req): Json<AllocateLotRequest>,
) -> Result<Response, WebError> {
    req.validate()?;

    let lot = services::allocate_lot(db.pool(), &req).await?;

    Ok(Json(LotResponse::from(lot)).into_response())
}

#[utoipa::path(
    delete,
    path = "/api/lots/{lot_id}",
    params(
        ("lot_id" = String, Path, description = "Lot ID")
    ),
    security(
        ("bearer_auth" = [])
    ),
    responses(
        (status = 204, description = "Lot deleted"),
        (status = 401, description = "Unauthorized"),
        (status = 404, description = "Lot not found")
    ),
    tag = "lots"
)]
pub async fn delete_lot(
    State(db): State<Database>,
    _: RequireApiKey,
    Path(lot_id): Path<String>,
) -> Result<Response, WebError> {
    services::delete_lot(db.pool(), &lot_id).await?;

    Ok(StatusCode::NO_CONTENT.into_response())
}
