mod common;

use common::{registration_request, setup};
use storage::error::StorageError;
use storage::repository::registration::RegistrationRepository;
use storage::services::registration_dedup::delete_duplicate_registration;

#[tokio::test]
async fn refuses_to_delete_sole_registration() {
    let db = setup().await;
    let repo = RegistrationRepository::new(db.pool());

    let only = repo
        .create(
            "T1",
            &registration_request("Team One", "Quiz", &[("Anu", "D1"), ("Biju", "D2")]),
        )
        .await
        .unwrap();

    let result = delete_duplicate_registration(db.pool(), "T1", &only.registration_id).await;
    assert!(matches!(result, Err(StorageError::Forbidden(_))));

    // The registration must remain intact.
    let remaining = repo.list_by_team_and_event("T1", "Quiz").await.unwrap();
    assert_eq!(remaining.len(), 1);
}

#[tokio::test]
async fn deletes_one_of_two_order_permuted_duplicates() {
    let db = setup().await;
    let repo = RegistrationRepository::new(db.pool());

    let first = repo
        .create(
            "T1",
            &registration_request("Team One", "Quiz", &[("Anu", "D1"), ("Biju", "D2")]),
        )
        .await
        .unwrap();
    repo.create(
        "T1",
        &registration_request("Team One", "Quiz", &[("Biju", "D2"), ("Anu", "D1")]),
    )
    .await
    .unwrap();

    delete_duplicate_registration(db.pool(), "T1", &first.registration_id)
        .await
        .unwrap();

    let remaining = repo.list_by_team_and_event("T1", "Quiz").await.unwrap();
    assert_eq!(remaining.len(), 1);
    assert_ne!(remaining[0].registration_id, first.registration_id);
}

#[tokio::test]
async fn name_and_d_no_case_differences_are_still_duplicates() {
    let db = setup().await;
    let repo = RegistrationRepository::new(db.pool());

    let sloppy = repo
        .create(
            "T1",
            &registration_request("Team One", "Quiz", &[("ANU", "d1"), ("biju k", "D2")]),
        )
        .await
        .unwrap();
    repo.create(
        "T1",
        &registration_request("Team One", "Quiz", &[("Anu Thomas", "D1"), ("Biju", "d2")]),
    )
    .await
    .unwrap();

    delete_duplicate_registration(db.pool(), "T1", &sloppy.registration_id)
        .await
        .unwrap();

    let remaining = repo.list_by_team_and_event("T1", "Quiz").await.unwrap();
    assert_eq!(remaining.len(), 1);
}

#[tokio::test]
async fn candidate_set_is_scoped_to_the_exact_event_name() {
    let db = setup().await;
    let repo = RegistrationRepository::new(db.pool());

    // The signature folds case, but candidates are fetched by the stored
    // event_name; a differently-cased event is a separate registration.
    let target = repo
        .create("T1", &registration_request("Team One", "Quiz", &[("Anu", "D1")]))
        .await
        .unwrap();
    repo.create("T1", &registration_request("Team One", "quiz", &[("Anu", "D1")]))
        .await
        .unwrap();

    let result = delete_duplicate_registration(db.pool(), "T1", &target.registration_id).await;
    assert!(matches!(result, Err(StorageError::Forbidden(_))));
}

#[tokio::test]
async fn different_d_no_sets_are_not_duplicates() {
    let db = setup().await;
    let repo = RegistrationRepository::new(db.pool());

    let target = repo
        .create(
            "T1",
            &registration_request("Team One", "Quiz", &[("Anu", "D1"), ("Biju", "D2")]),
        )
        .await
        .unwrap();
    repo.create(
        "T1",
        &registration_request("Team One", "Quiz", &[("Anu", "D1"), ("Chinnu", "D3")]),
    )
    .await
    .unwrap();

    let result = delete_duplicate_registration(db.pool(), "T1", &target.registration_id).await;
    assert!(matches!(result, Err(StorageError::Forbidden(_))));
}

#[tokio::test]
async fn refuses_delete_for_non_owner() {
    let db = setup().await;
    let repo = RegistrationRepository::new(db.pool());

    // Two identical registrations: duplicate status must not matter.
    let target = repo
        .create("T1", &registration_request("Team One", "Quiz", &[("Anu", "D1")]))
        .await
        .unwrap();
    repo.create("T1", &registration_request("Team One", "Quiz", &[("Anu", "D1")]))
        .await
        .unwrap();

    let result = delete_duplicate_registration(db.pool(), "T2", &target.registration_id).await;
    assert!(matches!(result, Err(StorageError::Forbidden(_))));

    let remaining = repo.list_by_team("T1").await.unwrap();
    assert_eq!(remaining.len(), 2);
}

#[tokio::test]
async fn missing_registration_reports_not_found() {
    let db = setup().await;

    let result = delete_duplicate_registration(db.pool(), "T1", "no-such-id").await;
    assert!(matches!(result, Err(StorageError::NotFound)));
}

#[tokio::test]
async fn second_delete_of_last_pair_is_refused() {
    let db = setup().await;
    let repo = RegistrationRepository::new(db.pool());

    let a = repo
        .create("T1", &registration_request("Team One", "Quiz", &[("Anu", "D1")]))
        .await
        .unwrap();
    let b = repo
        .create("T1", &registration_request("Team One", "Quiz", &[("Anu", "D1")]))
        .await
        .unwrap();

    delete_duplicate_registration(db.pool(), "T1", &a.registration_id)
        .await
        .unwrap();

    let result = delete_duplicate_registration(db.pool(), "T1", &b.registration_id).await;
    assert!(matches!(result, Err(StorageError::Forbidden(_))));

    let remaining = repo.list_by_team_and_event("T1", "Quiz").await.unwrap();
    assert_eq!(remaining.len(), 1);
}
