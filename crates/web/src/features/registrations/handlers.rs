use axum::{
    Json,
    extract::{Path, State},
    http::StatusCode,
    response::{IntoResponse, Response},
};
use serde_json::json;
use storage::{
    Database,
    dto::registration::{
        CreateRegistrationRequest, RegistrationResponse, UpdateRegistrationRequest,
    },
};
use validator::Validate;

use crate::error::WebError;
use crate::middleware::auth::RequireApiKey;

use super::services;

#[utoipa::path(
    get,
    path = "/api/registrations",
    security(
        ("bearer_auth" = [])
    ),
    responses(
        (status = 200, description = "List all registrations successfully", body = Vec<RegistrationResponse>),
        (status = 401, description = "Unauthorized")
    ),
    tag = "registrations"
)]
pub async fn list_registrations(
    State(db): State<Database>,
    _: RequireApiKey,
) -> Result<Response, WebError> {
    let registrations = services::list_registrations(db.pool()).await?;

    let response: Vec<RegistrationResponse> = registrations
        .into_iter()
        .map(RegistrationResponse::from)
        .collect();

    Ok(Json(response).into_response())
}

#[utoipa::path(
    get,
    path = "/api/registrations/{registration_id}",
    params(
        ("registration_id" = String, Path, description = "Registration ID")
    ),
    security(
        ("bearer_auth" = [])
    ),
    responses(
        (status = 200, description = "Registration found", body = RegistrationResponse),
        (status = 401, description = "Unauthorized"),
        (status = 404, description = "Registration not found")
    ),
    tag = "registrations"
)]
pub async fn get_registration(
    State(db): State<Database>,
    _: RequireApiKey,
    Path(registration_id): Path<String>,
) -> Result<Response, WebError> {
    let registration = services::get_registration(db.pool(), &registration_id).await?;

    Ok(Json(RegistrationResponse::from(registration)).into_response())
}

#[utoipa::path(
    put,
    path = "/api/registrations/{registration_id}",
    params(
        ("registration_id" = String, Path, description = "Registration ID")
    ),
    request_body = UpdateRegistrationRequest,
    security(
        ("bearer_auth" = [])
    ),
    responses(
        (status = 200, description = "Registration updated successfully", body = RegistrationResponse),
        (status = 400, description = "Validation error"),
        (status = 401, description = "Unauthorized"),
        (status = 404, description = "Registration not found")
    ),
    tag = "registrations"
)]
pub async fn update_registration(
    State(db): State<Database>,
    _: RequireApiKey,
    Path(registration_id): Path<String>,
    Json(update_req): Json<UpdateRegistrationRequest>,
) -> Result<Response, WebError> {
    update_req.validate()?;

    let updated = services::update_registration(db.pool(), &registration_id, &update_req).await?;

    Ok(Json(RegistrationResponse::from(updated)).into_response())
}

#[utoipa::path(
    post,
    path = "/api/teams/{team_id}/registrations",
    params(
        ("team_id" = String, Path, description = "Team ID")
    ),
    request_body = CreateRegistrationRequest,
    responses(
        (status = 201, description = "Registration created successfully", body = RegistrationResponse),
        (status = 400, description = "Validation error")
    ),
    tag = "registrations"
)]
pub async fn create_registration(
    State(db): State<Database>,
    Path(team_id): Path<String>,
    Json(req): Json<CreateRegistrationRequest>,
) -> Result<Response, WebError> {
    req.validate()?;

    let registration = services::create_registration(db.pool(), &team_id, &req).await?;

    Ok((
        StatusCode::CREATED,
        Json(RegistrationResponse::from(registration)),
    )
        .into_response())
}

#[utoipa::path(
    get,
    path = "/api/teams/{team_id}/registrations",
    params(
        ("team_id" = String, Path, description = "Team ID")
    ),
    responses(
        (status = 200, description = "List the team's registrations", body = Vec<RegistrationResponse>)
    ),
    tag = "registrations"
)]
pub async fn list_team_registrations(
    State(db): State<Database>,
    Path(team_id): Path<String>,
) -> Result<Response, WebError> {
    let registrations = services::list_team_registrations(db.pool(), &team_id).await?;

    let response: Vec<RegistrationResponse> = registrations
        .into_iter()
        .map(RegistrationResponse::from)
        .collect();

    Ok(Json(response).into_response())
}

#[utoipa::path(
    delete,
    path = "/api/teams/{team_id}/registrations/{registration_id}",
    params(
        ("team_id" = String, Path, description = "Team ID"),
        ("registration_id" = String, Path, description = "Registration ID")
    ),
    responses(
        (status = 200, description = "Duplicate registration deleted"),
        (status = 403, description = "Not the owner, or the only registration for this event"),
        (status = 404, description = "Registration not found")
    ),
    tag = "registrations"
)]
pub async fn delete_registration(
    State(db): State<Database>,
    Path((team_id, registration_id)): Path<(String, String)>,
) -> Result<Response, WebError> {
    services::delete_duplicate_registration(db.pool(), &team_id, &registration_id).await?;

    Ok(Json(json!({
        "success": true,
        "message": "Duplicate registration deleted"
    }))
    .into_response())
}
