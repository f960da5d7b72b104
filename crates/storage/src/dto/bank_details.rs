use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use validator::Validate;

/// Request payload for a team saving its payout details. Upserts on team_id.
#[derive(Debug, Clone, Serialize, Deserialize, Validate, ToSchema)]
pub struct UpsertBankDetailsRequest {
    #[validate(length(
        min = 1,
        max = 255,
        message = "Account holder must be between 1 and 255 characters"
    ))]
    pub account_holder: String,

    #[validate(length(
        min = 1,
        max = 64,
        message = "Account number must be between 1 and 64 characters"
    ))]
    pub account_number: String,

    #[validate(length(min = 1, max = 16, message = "IFSC code is required"))]
    pub ifsc_code: String,

    #[validate(length(max = 255))]
    pub upi_id: Option<String>,
}

/// Response containing one team's payout details
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct BankDetailsResponse {
    pub team_id: String,
    pub account_holder: String,
    pub account_number: String,
    pub ifsc_code: String,
    pub upi_id: Option<String>,
}

impl From<crate::models::BankDetails> for BankDetailsResponse {
    fn from(details: crate::models::BankDetails) -> Self {
        Self {
            team_id: details.team_id,
            account_holder: details.account_holder,
            account_number: details.account_number,
            ifsc_code: details.ifsc_code,
            upi_id: details.upi_id,
        }
    }
}
