use axum::{
    Json,
    extract::State,
    response::{IntoResponse, Response},
};
use serde_json::json;
use storage::{
    Database,
    dto::attendance::{LotAttendanceView, RecordAttendanceRequest},
};
use validator::Validate;

use crate::error::WebError;
use crate::middleware::auth::RequireApiKey;

use super::services;

#[utoipa::path(
    post,
    path = "/api/attendance",
    request_body = RecordAttendanceRequest,
    security(
        ("bearer_auth" = [])
    ),
    responses(
        (status = 200, description = "Attendance recorded"),
        (status = 400, description = "Validation error"),
        (status = 401, description = "Unauthorized")
    ),
    tag = "attendance"
)]
pub async fn record_attendance(
    State(db): State<Database>,
    _: RequireApiKey,
    Json(req): Json<RecordAttendanceRequest>,
) -> Result<Response, WebError> {
    req.validate()?;

    services::record_attendance(db.pool(), &req).await?;

    Ok(Json(json!({ "success": true })).into_response())
}

#[utoipa::path(
    get,
    path = "/api/attendance/lots",
    responses(
        (status = 200, description = "Lot-wise attendance view", body = Vec<LotAttendanceView>)
    ),
    tag = "attendance"
)]
pub async fn lot_wise_attendance(State(db): State<Database>) -> Result<Response, WebError> {
    let views = services::lot_wise_attendance(db.pool()).await?;

    Ok(Json(views).into_response())
}
