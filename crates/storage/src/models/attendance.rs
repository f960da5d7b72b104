use serde::{Deserialize, Serialize};
use sqlx::FromRow;

/// Statuses a floor coordinator may record. The merged lot-wise view adds
/// `PENDING` for contestants with no record yet.
pub const VALID_STATUSES: &[&str] = &["PRESENT", "ABSENT", "MALPRACTICE"];

pub const STATUS_PENDING: &str = "PENDING";

/// One contestant's presence for one event. Natural key is
/// (event_name, d_no): a d_no reused across teams within the same event
/// collides onto a single record.
#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct AttendanceRecord {
    pub attendance_id: String,
    pub event_name: String,
    pub d_no: String,
    pub team_id: String,
    pub team_name: String,
    pub contestant_name: String,
    pub status: String,
    pub malpractice_details: String,
}
