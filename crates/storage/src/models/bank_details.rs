use serde::{Deserialize, Serialize};
use sqlx::FromRow;

/// Payout details for one team, keyed by team_id.
#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct BankDetails {
    pub team_id: String,
    pub account_holder: String,
    pub account_number: String,
    pub ifsc_code: String,
    pub upi_id: Option<String>,
}
