use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use validator::Validate;

use crate::models::Contestant;

/// Request payload for a team registering its contestant list for an event
#[derive(Debug, Clone, Serialize, Deserialize, Validate, ToSchema)]
pub struct CreateRegistrationRequest {
    #[validate(length(
        min = 1,
        max = 255,
        message = "Team name must be between 1 and 255 characters"
    ))]
    pub team_name: String,

    #[validate(length(
        min = 1,
        max = 255,
        message = "Event name must be between 1 and 255 characters"
    ))]
    pub event_name: String,

    #[validate(length(min = 1, message = "At least one contestant is required"))]
    #[validate(nested)]
    pub contestants: Vec<Contestant>,
}

/// Request payload for a coordinator editing an existing registration
#[derive(Debug, Clone, Serialize, Deserialize, Validate, ToSchema)]
pub struct UpdateRegistrationRequest {
    #[validate(length(min = 1, max = 255))]
    pub team_name: Option<String>,

    #[validate(length(min = 1, message = "At least one contestant is required"))]
    #[validate(nested)]
    pub contestants: Option<Vec<Contestant>>,
}

/// Response containing one registration
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct RegistrationResponse {
    pub registration_id: String,
    pub team_id: String,
    pub team_name: String,
    pub event_name: String,
    pub contestants: Vec<Contestant>,
    pub created_at: NaiveDateTime,
}

impl From<crate::models::Registration> for RegistrationResponse {
    fn from(registration: crate::models::Registration) -> Self {
        Self {
            registration_id: registration.registration_id,
            team_id: registration.team_id,
            team_name: registration.team_name,
            event_name: registration.event_name,
            contestants: registration.contestants.0,
            created_at: registration.created_at,
        }
    }
}
