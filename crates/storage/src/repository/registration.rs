use sqlx::{QueryBuilder, Sqlite, SqlitePool, types::Json};
use uuid::Uuid;

use crate::dto::registration::{CreateRegistrationRequest, UpdateRegistrationRequest};
use crate::error::{Result, StorageError};
use crate::models::Registration;

const COLUMNS: &str =
    "registration_id, team_id, team_name, event_name, contestants, created_at";

pub struct RegistrationRepository<'a> {
    pool: &'a SqlitePool,
}

impl<'a> RegistrationRepository<'a> {
    pub fn new(pool: &'a SqlitePool) -> Self {
        Self { pool }
    }

    /// List all registrations, oldest first
    pub async fn list(&self) -> Result<Vec<Registration>> {
        let registrations = sqlx::query_as::<_, Registration>(&format!(
            "SELECT {COLUMNS} FROM registrations ORDER BY created_at, registration_id"
        ))
        .fetch_all(self.pool)
        .await?;

        Ok(registrations)
    }

    /// List all registrations submitted by one team
    pub async fn list_by_team(&self, team_id: &str) -> Result<Vec<Registration>> {
        let registrations = sqlx::query_as::<_, Registration>(&format!(
            "SELECT {COLUMNS} FROM registrations
             WHERE team_id = ?
             ORDER BY created_at, registration_id"
        ))
        .bind(team_id)
        .fetch_all(self.pool)
        .await?;

        Ok(registrations)
    }

    /// List one team's registrations for one event (the duplicate candidate set)
    pub async fn list_by_team_and_event(
        &self,
        team_id: &str,
        event_name: &str,
    ) -> Result<Vec<Registration>> {
        let registrations = sqlx::query_as::<_, Registration>(&format!(
            "SELECT {COLUMNS} FROM registrations
             WHERE team_id = ? AND event_name = ?
             ORDER BY created_at, registration_id"
        ))
        .bind(team_id)
        .bind(event_name)
        .fetch_all(self.pool)
        .await?;

        Ok(registrations)
    }

    pub async fn find_by_id(&self, registration_id: &str) -> Result<Registration> {
        let registration = sqlx::query_as::<_, Registration>(&format!(
            "SELECT {COLUMNS} FROM registrations WHERE registration_id = ?"
        ))
        .bind(registration_id)
        .fetch_optional(self.pool)
        .await?
        .ok_or(StorageError::NotFound)?;

        Ok(registration)
    }

    /// Create a new registration for a team
    pub async fn create(
        &self,
        team_id: &str,
        req: &CreateRegistrationRequest,
    ) -> Result<Registration> {
        let registration_id = Uuid::new_v4().to_string();

        let registration = sqlx::query_as::<_, Registration>(&format!(
            "INSERT INTO registrations (registration_id, team_id, team_name, event_name, contestants)
             VALUES (?, ?, ?, ?, ?)
             RETURNING {COLUMNS}"
        ))
        .bind(&registration_id)
        .bind(team_id)
        .bind(&req.team_name)
        .bind(&req.event_name)
        .bind(Json(&req.contestants))
        .fetch_one(self.pool)
        .await?;

        Ok(registration)
    }

    /// Update an existing registration (coordinator edit)
    pub async fn update(
        &self,
        existing: &Registration,
        req: &UpdateRegistrationRequest,
    ) -> Result<Registration> {
        let team_name = req.team_name.as_ref().unwrap_or(&existing.team_name);
        let contestants = req.contestants.as_ref().unwrap_or(&existing.contestants.0);

        let registration = sqlx::query_as::<_, Registration>(&format!(
            "UPDATE registrations
             SET team_name = ?, contestants = ?
             WHERE registration_id = ?
             RETURNING {COLUMNS}"
        ))
        .bind(team_name)
        .bind(Json(contestants))
        .bind(&existing.registration_id)
        .fetch_optional(self.pool)
        .await?
        .ok_or(StorageError::NotFound)?;

        Ok(registration)
    }

    /// Delete one registration, but only while at least two of the given
    /// duplicate candidates still exist. The count is re-verified inside the
    /// statement so a concurrent delete of the last sibling makes this a
    /// no-op instead of removing a team's sole registration.
    pub async fn delete_if_among_duplicates(
        &self,
        registration_id: &str,
        candidate_ids: &[String],
    ) -> Result<bool> {
        let mut query: QueryBuilder<Sqlite> =
            QueryBuilder::new("DELETE FROM registrations WHERE registration_id = ");
        query.push_bind(registration_id);
        query.push(" AND (SELECT COUNT(*) FROM registrations WHERE registration_id IN (");

        let mut ids = query.separated(", ");
        for id in candidate_ids {
            ids.push_bind(id);
        }

        query.push(")) >= 2");

        let result = query.build().execute(self.pool).await?;

        Ok(result.rows_affected() > 0)
    }
}
