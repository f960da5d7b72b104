use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use validator::Validate;

use crate::models::VALID_STATUSES;

/// Request payload for recording one contestant's attendance.
/// (event_name, d_no) is the natural key; a repeat call overwrites.
#[derive(Debug, Clone, Serialize, Deserialize, Validate, ToSchema)]
pub struct RecordAttendanceRequest {
    #[validate(length(min = 1, max = 255, message = "Event name is required"))]
    pub event_name: String,

    #[validate(length(min = 1, max = 64, message = "dNo is required"))]
    pub d_no: String,

    #[validate(length(min = 1, max = 64, message = "Team id is required"))]
    pub team_id: String,

    #[validate(length(min = 1, max = 255, message = "Team name is required"))]
    pub team_name: String,

    #[validate(length(min = 1, max = 255, message = "Contestant name is required"))]
    pub contestant_name: String,

    #[validate(custom(function = "validate_status"))]
    pub status: String,

    #[validate(length(max = 1000))]
    pub malpractice_details: Option<String>,
}

/// One contestant in the merged lot-wise view, annotated with status
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct ContestantAttendance {
    pub contestant_name: String,
    pub d_no: String,
    pub status: String,
    pub malpractice_details: String,
}

/// One lot with its registration's contestants and their current statuses
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct LotAttendanceView {
    pub lot_id: String,
    pub lot_number: i64,
    pub event_name: String,
    pub team_id: String,
    pub team_name: String,
    pub theme: Option<String>,
    pub contestants: Vec<ContestantAttendance>,
}

// Validation helper
fn validate_status(status: &str) -> Result<(), validator::ValidationError> {
    if VALID_STATUSES.contains(&status) {
        Ok(())
    } else {
        Err(validator::ValidationError::new("invalid_status"))
    }
}
