use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use validator::Validate;

/// Request payload for admin lot allocation. Upserts on (team_id, event).
#[derive(Debug, Clone, Serialize, Deserialize, Validate, ToSchema)]
pub struct AllocateLotRequest {
    #[validate(range(min = 1, message = "Lot number must be positive"))]
    pub lot_number: i64,

    #[validate(length(min = 1, max = 255, message = "Event is required"))]
    pub event: String,

    #[validate(length(min = 1, max = 64, message = "Team id is required"))]
    pub team_id: String,

    #[validate(length(min = 1, max = 255, message = "Team name is required"))]
    pub team_name: String,

    #[validate(length(max = 255))]
    pub theme: Option<String>,
}

/// Response containing one lot assignment
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct LotResponse {
    pub lot_id: String,
    pub lot_number: i64,
    pub event: String,
    pub team_id: String,
    pub team_name: String,
    pub theme: Option<String>,
}

impl From<crate::models::Lot> for LotResponse {
    fn from(lot: crate::models::Lot) -> Self {
        Self {
            lot_id: lot.lot_id,
            lot_number: lot.lot_number,
            event: lot.event,
            team_id: lot.team_id,
            team_name: lot.team_name,
            theme: lot.theme,
        }
    }
}
