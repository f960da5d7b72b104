use axum::{Router, routing::get};

use super::handlers::{get_bank_details, upsert_bank_details};
use crate::state::AppState;

pub fn routes() -> Router<AppState> {
    Router::new().route(
        "/:team_id/bank-details",
        get(get_bank_details).put(upsert_bank_details),
    )
}
