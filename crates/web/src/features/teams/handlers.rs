use axum::{
    Json,
    extract::{Path, State},
    response::{IntoResponse, Response},
};
use storage::{
    Database,
    dto::bank_details::{BankDetailsResponse, UpsertBankDetailsRequest},
};
use validator::Validate;

use crate::error::WebError;

use super::services;

#[utoipa::path(
    get,
    path = "/api/teams/{team_id}/bank-details",
    params(
        ("team_id" = String, Path, description = "Team ID")
    ),
    responses(
        (status = 200, description = "Bank details found", body = BankDetailsResponse),
        (status = 404, description = "No bank details on record")
    ),
    tag = "teams"
)]
pub async fn get_bank_details(
    State(db): State<Database>,
    Path(team_id): Path<String>,
) -> Result<Response, WebError> {
    let details = services::get_bank_details(db.pool(), &team_id).await?;

    Ok(Json(BankDetailsResponse::from(details)).into_response())
}

#[utoipa::path(
    put,
    path = "/api/teams/{team_id}/bank-details",
    params(
        ("team_id" = String, Path, description = "Team ID")
    ),
    request_body = UpsertBankDetailsRequest,
    responses(
        (status = 200, description = "Bank details saved", body = BankDetailsResponse),
        (status = 400, description = "Validation error")
    ),
    tag = "teams"
)]
pub async fn upsert_bank_details(
    State(db): State<Database>,
    Path(team_id): Path<String>,
    Json(req): Json<UpsertBankDetailsRequest>,
) -> Result<Response, WebError> {
    req.validate()?;

    let details = services::upsert_bank_details(db.pool(), &team_id, &req).await?;

    Ok(Json(BankDetailsResponse::from(details)).into_response())
}
