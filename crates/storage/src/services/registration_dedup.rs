use sqlx::SqlitePool;

use crate::error::{Result, StorageError};
use crate::models::RegistrationSignature;
use crate::repository::registration::RegistrationRepository;

/// Delete a team's registration, but only when it is a redundant duplicate.
///
/// A registration may go only if another registration of the same team, for
/// the same event, with an equal [`RegistrationSignature`] still exists.
/// Self-service deletion can therefore never leave a team with zero
/// registrations for an event, while accidental double-submissions remain
/// cleanable.
pub async fn delete_duplicate_registration(
    pool: &SqlitePool,
    team_id: &str,
    registration_id: &str,
) -> Result<()> {
    let repo = RegistrationRepository::new(pool);

    let target = repo.find_by_id(registration_id).await?;
    if target.team_id != team_id {
        return Err(StorageError::forbidden(
            "Registration belongs to another team",
        ));
    }

    let signature = RegistrationSignature::of(&target);

    let candidates = repo
        .list_by_team_and_event(team_id, &target.event_name)
        .await?;
    let duplicate_ids: Vec<String> = candidates
        .iter()
        .filter(|candidate| RegistrationSignature::of(candidate) == signature)
        .map(|candidate| candidate.registration_id.clone())
        .collect();

    if duplicate_ids.len() < 2 {
        return Err(StorageError::forbidden(
            "Cannot delete the only registration for this event",
        ));
    }

    let deleted = repo
        .delete_if_among_duplicates(registration_id, &duplicate_ids)
        .await?;

    if !deleted {
        // A concurrent delete won the race between the candidate read and
        // the conditional delete. Re-load to report the right failure.
        match repo.find_by_id(registration_id).await {
            Ok(_) => Err(StorageError::forbidden(
                "Cannot delete the only registration for this event",
            )),
            Err(StorageError::NotFound) => Err(StorageError::NotFound),
            Err(e) => Err(e),
        }
    } else {
        Ok(())
    }
}
