use sqlx::SqlitePool;
use uuid::Uuid;

use crate::dto::lot::AllocateLotRequest;
use crate::error::{Result, StorageError};
use crate::models::Lot;

const COLUMNS: &str = "lot_id, lot_number, event, team_id, team_name, theme";

pub struct LotRepository<'a> {
    pool: &'a SqlitePool,
}

impl<'a> LotRepository<'a> {
    pub fn new(pool: &'a SqlitePool) -> Self {
        Self { pool }
    }

    /// List all lot assignments, ordered by event then lot number
    pub async fn list(&self) -> Result<Vec<Lot>> {
        let lots = sqlx::query_as::<_, Lot>(&format!(
            "SELECT {COLUMNS} FROM lots ORDER BY event, lot_number"
        ))
        .fetch_all(self.pool)
        .await?;

        Ok(lots)
    }

    /// Allocate a lot to a team for an event. Upserts on (team_id, event):
    /// re-allocating overwrites the lot number and theme in place.
    pub async fn allocate(&self, req: &AllocateLotRequest) -> Result<Lot> {
        let lot_id = Uuid::new_v4().to_string();

        let lot = sqlx::query_as::<_, Lot>(&format!(
            "INSERT INTO lots (lot_id, lot_number, event, team_id, team_name, theme)
             VALUES (?, ?, ?, ?, ?, ?)
             ON CONFLICT (team_id, event) DO UPDATE SET
                 lot_number = excluded.lot_number,
                 team_name = excluded.team_name,
                 theme = excluded.theme
             RETURNING {COLUMNS}"
        ))
        .bind(&lot_id)
        .bind(req.lot_number)
        .bind(&req.event)
        .bind(&req.team_id)
        .bind(&req.team_name)
        .bind(&req.theme)
        .fetch_one(self.pool)
        .await?;

        Ok(lot)
    }

    /// Delete a lot assignment by ID
    pub async fn delete(&self, lot_id: &str) -> Result<()> {
        let result = sqlx::query("DELETE FROM lots WHERE lot_id = ?")
            .bind(lot_id)
            .execute(self.pool)
            .await?;

        if result.rows_affected() == 0 {
            return Err(StorageError::NotFound);
        }

        Ok(())
    }
}
