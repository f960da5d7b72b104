use storage::Database;
use storage::dto::registration::CreateRegistrationRequest;
use storage::models::Contestant;

pub async fn setup() -> Database {
    let db = Database::in_memory().await.expect("in-memory database");
    db.run_migrations().await.expect("migrations");
    db
}

pub fn registration_request(
    team_name: &str,
    event_name: &str,
    contestants: &[(&str, &str)],
) -> CreateRegistrationRequest {
    CreateRegistrationRequest {
        team_name: team_name.to_string(),
        event_name: event_name.to_string(),
        contestants: contestants
            .iter()
            .map(|(name, d_no)| Contestant {
                contestant_name: name.to_string(),
                d_no: d_no.to_string(),
            })
            .collect(),
    }
}
