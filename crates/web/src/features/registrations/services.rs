use sqlx::SqlitePool;
use storage::{
    dto::registration::{CreateRegistrationRequest, UpdateRegistrationRequest},
    error::Result,
    models::Registration,
    repository::registration::RegistrationRepository,
    services::registration_dedup,
};

/// List all registrations
pub async fn list_registrations(pool: &SqlitePool) -> Result<Vec<Registration>> {
    let repo = RegistrationRepository::new(pool);
    repo.list().await
}

/// List one team's registrations
pub async fn list_team_registrations(pool: &SqlitePool, team_id: &str) -> Result<Vec<Registration>> {
    let repo = RegistrationRepository::new(pool);
    repo.list_by_team(team_id).await
}

/// Get registration by ID
pub async fn get_registration(pool: &SqlitePool, registration_id: &str) -> Result<Registration> {
    let repo = RegistrationRepository::new(pool);
    repo.find_by_id(registration_id).await
}

/// Create a new registration for a team
pub async fn create_registration(
    pool: &SqlitePool,
    team_id: &str,
    request: &CreateRegistrationRequest,
) -> Result<Registration> {
    let repo = RegistrationRepository::new(pool);
    repo.create(team_id, request).await
}

/// Update a registration (coordinator edit)
pub async fn update_registration(
    pool: &SqlitePool,
    registration_id: &str,
    request: &UpdateRegistrationRequest,
) -> Result<Registration> {
    let repo = RegistrationRepository::new(pool);

    let existing = repo.find_by_id(registration_id).await?;
    repo.update(&existing, request).await
}

/// Delete a registration if it is a redundant duplicate
pub async fn delete_duplicate_registration(
    pool: &SqlitePool,
    team_id: &str,
    registration_id: &str,
) -> Result<()> {
    registration_dedup::delete_duplicate_registration(pool, team_id, registration_id).await
}
