use anyhow::Context;
use axum::Router;
use storage::Database;
use tower_http::cors::{Any, CorsLayer};
use utoipa::OpenApi;
use utoipa_swagger_ui::SwaggerUi;

mod config;
mod error;
mod features;
mod middleware;
mod state;

use config::Config;
use middleware::auth::ApiKeys;
use state::AppState;

#[derive(OpenApi)]
#[openapi(
    paths(
        features::registrations::handlers::list_registrations,
        features::registrations::handlers::get_registration,
        features::registrations::handlers::update_registration,
        features::registrations::handlers::create_registration,
        features::registrations::handlers::list_team_registrations,
        features::registrations::handlers::delete_registration,
        features::lots::handlers::list_lots,
        features::lots::handlers::allocate_lot,
        features::lots::handlers::delete_lot,
        features::attendance::handlers::record_attendance,
        features::attendance::handlers::lot_wise_attendance,
        features::teams::handlers::get_bank_details,
        features::teams::handlers::upsert_bank_details,
    ),
    components(
        schemas(
            storage::dto::registration::CreateRegistrationRequest,
            storage::dto::registration::UpdateRegistrationRequest,
            storage::dto::registration::RegistrationResponse,
            storage::dto::lot::AllocateLotRequest,
            storage::dto::lot::LotResponse,
            storage::dto::attendance::RecordAttendanceRequest,
            storage::dto::attendance::ContestantAttendance,
            storage::dto::attendance::LotAttendanceView,
            storage::dto::bank_details::UpsertBankDetailsRequest,
            storage::dto::bank_details::BankDetailsResponse,
            storage::models::Contestant,
        )
    ),
    tags(
        (name = "registrations", description = "Team event registrations"),
        (name = "lots", description = "Lot allocation per team per event"),
        (name = "attendance", description = "Attendance recording and the lot-wise view"),
        (name = "teams", description = "Team bank details"),
    ),
    modifiers(&SecurityAddon)
)]
struct ApiDoc;

struct SecurityAddon;

impl utoipa::Modify for SecurityAddon {
    fn modify(&self, openapi: &mut utoipa::openapi::OpenApi) {
        if let Some(components) = openapi.components.as_mut() {
            components.add_security_scheme(
                "bearer_auth",
                utoipa::openapi::security::SecurityScheme::Http(
                    utoipa::openapi::security::HttpBuilder::new()
                        .scheme(utoipa::openapi::security::HttpAuthScheme::Bearer)
                        .bearer_format("API Key")
                        .build(),
                ),
            )
        }
    }
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();

    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env().unwrap_or_else(|_| "info".into()),
        )
        .with_target(true)
        .with_file(true)
        .with_line_number(true)
        .init();

    tracing::info!("Starting Festival Portal API");

    let config = Config::from_env().context("Failed to load API configuration")?;
    tracing::info!("Configuration loaded successfully");

    let db = Database::new(&config.database_url)
        .await
        .context("Failed to initialize database")?;
    tracing::info!("Database connection established");

    tracing::info!("Running database migrations");
    db.run_migrations()
        .await
        .context("Failed to run migrations")?;
    tracing::info!("Database migrations completed successfully");

    let state = AppState {
        db,
        api_keys: ApiKeys::from_comma_separated(&config.api_keys),
    };

    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    let api = Router::new()
        .nest(
            "/teams",
            features::teams::routes::routes()
                .merge(features::registrations::routes::team_routes()),
        )
        .nest("/registrations", features::registrations::routes::routes())
        .nest("/lots", features::lots::routes::routes())
        .nest("/attendance", features::attendance::routes::routes());

    let app = Router::new()
        .nest("/api", api)
        .layer(cors)
        .with_state(state)
        .merge(SwaggerUi::new("/swagger-ui").url("/api-docs/openapi.json", ApiDoc::openapi()));

    let bind_address = format!("{}:{}", config.host, config.port);
    tracing::info!("Starting server at http://{}", bind_address);
    tracing::info!("Swagger UI available at http://{}/swagger-ui/", bind_address);

    let listener = tokio::net::TcpListener::bind(&bind_address).await?;
    axum::serve(listener, app).await?;

    Ok(())
}
