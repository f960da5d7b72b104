use axum::{
    Router,
    routing::{delete, get},
};

use super::handlers::{
    create_registration, delete_registration, get_registration, list_registrations,
    list_team_registrations, update_registration,
};
use crate::state::AppState;

pub fn routes() -> Router<AppState> {
    Router::new()
        .route("/", get(list_registrations))
        .route(
            "/:registration_id",
            get(get_registration).put(update_registration),
        )
}

/// Team-scoped registration routes, mounted under the /teams nest
pub fn team_routes() -> Router<AppState> {
    Router::new()
        .route(
            "/:team_id/registrations",
            get(list_team_registrations).post(create_registration),
        )
        .route(
            "/:team_id/registrations/:registration_id",
            delete(delete_registration),
        )
}
