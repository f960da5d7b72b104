use axum::{
    Router,
    routing::{get, post},
};

use super::handlers::{lot_wise_attendance, record_attendance};
use crate::state::AppState;

pub fn routes() -> Router<AppState> {
    Router::new()
        .route("/", post(record_attendance))
        .route("/lots", get(lot_wise_attendance))
}
