use axum::{
    Router,
    routing::{delete, get},
};

use super::handlers::{allocate_lot, delete_lot, list_lots};
use crate::state::AppState;

pub fn routes() -> Router<AppState> {
    Router::new()
        .route("/", get(list_lots).put(allocate_lot))
        .route("/:lot_id", delete(delete_lot))
}
