use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use utoipa::ToSchema;
use validator::Validate;

/// A single contestant entry inside a registration. Stored as part of the
/// registration's JSON contestant list.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Validate, ToSchema)]
pub struct Contestant {
    #[validate(length(
        min = 1,
        max = 255,
        message = "Contestant name must be between 1 and 255 characters"
    ))]
    pub contestant_name: String,

    #[validate(length(
        min = 1,
        max = 64,
        message = "dNo must be between 1 and 64 characters"
    ))]
    pub d_no: String,
}

/// A team's signup for one event. Duplicates with an identical contestant
/// signature may coexist for the same (team_id, event_name).
#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct Registration {
    pub registration_id: String,
    pub team_id: String,
    pub team_name: String,
    pub event_name: String,
    pub contestants: sqlx::types::Json<Vec<Contestant>>,
    pub created_at: chrono::NaiveDateTime,
}
