use sqlx::SqlitePool;
use storage::{
    dto::bank_details::UpsertBankDetailsRequest,
    error::Result,
    models::BankDetails,
    repository::bank_details::BankDetailsRepository,
};

/// Get a team's payout details
pub async fn get_bank_details(pool: &SqlitePool, team_id: &str) -> Result<BankDetails> {
    let repo = BankDetailsRepository::new(pool);
    repo.find_by_team(team_id).await
}

/// Save a team's payout details (upsert on team_id)
pub async fn upsert_bank_details(
    pool: &SqlitePool,
    team_id: &str,
    request: &UpsertBankDetailsRequest,
) -> Result<BankDetails> {
    let repo = BankDetailsRepository::new(pool);
    repo.upsert(team_id, request).await
}
