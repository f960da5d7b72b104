use sqlx::SqlitePool;

use crate::dto::bank_details::UpsertBankDetailsRequest;
use crate::error::{Result, StorageError};
use crate::models::BankDetails;

const COLUMNS: &str = "team_id, account_holder, account_number, ifsc_code, upi_id";

pub struct BankDetailsRepository<'a> {
    pool: &'a SqlitePool,
}

impl<'a> BankDetailsRepository<'a> {
    pub fn new(pool: &'a SqlitePool) -> Self {
        Self { pool }
    }

    pub async fn find_by_team(&self, team_id: &str) -> Result<BankDetails> {
        let details = sqlx::query_as::<_, BankDetails>(&format!(
            "SELECT {COLUMNS} FROM bank_details WHERE team_id = ?"
        ))
        .bind(team_id)
        .fetch_optional(self.pool)
        .await?
        .ok_or(StorageError::NotFound)?;

        Ok(details)
    }

    /// Save a team's payout details. Upserts on team_id.
    pub async fn upsert(
        &self,
        team_id: &str,
        req: &UpsertBankDetailsRequest,
    ) -> Result<BankDetails> {
        let details = sqlx::query_as::<_, BankDetails>(&format!(
            "INSERT INTO bank_details (team_id, account_holder, account_number, ifsc_code, upi_id)
             VALUES (?, ?, ?, ?, ?)
             ON CONFLICT (team_id) DO UPDATE SET
                 account_holder = excluded.account_holder,
                 account_number = excluded.account_number,
                 ifsc_code = excluded.ifsc_code,
                 upi_id = excluded.upi_id
             RETURNING {COLUMNS}"
        ))
        .bind(team_id)
        .bind(&req.account_holder)
        .bind(&req.account_number)
        .bind(&req.ifsc_code)
        .bind(&req.upi_id)
        .fetch_one(self.pool)
        .await?;

        Ok(details)
    }
}
