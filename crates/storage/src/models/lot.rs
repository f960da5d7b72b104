use serde::{Deserialize, Serialize};
use sqlx::FromRow;

/// A team's assigned performance slot for one event. Natural key is
/// (team_id, event); allocation upserts on it.
#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct Lot {
    pub lot_id: String,
    pub lot_number: i64,
    pub event: String,
    pub team_id: String,
    pub team_name: String,
    pub theme: Option<String>,
}
