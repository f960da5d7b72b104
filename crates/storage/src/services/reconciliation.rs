use std::collections::HashMap;

use sqlx::SqlitePool;

use crate::dto::attendance::{ContestantAttendance, LotAttendanceView};
use crate::error::Result;
use crate::models::{AttendanceRecord, Lot, Registration, STATUS_PENDING};
use crate::repository::attendance::AttendanceRepository;
use crate::repository::lot::LotRepository;
use crate::repository::registration::RegistrationRepository;

/// Fetch every lot, registration, and attendance record and merge them into
/// the lot-wise view. All filtering happens in memory; nothing is mutated.
pub async fn lot_wise_attendance(pool: &SqlitePool) -> Result<Vec<LotAttendanceView>> {
    let lots = LotRepository::new(pool).list().await?;
    let registrations = RegistrationRepository::new(pool).list().await?;
    let attendance = AttendanceRepository::new(pool).list().await?;

    Ok(merge_lot_attendance(&lots, &registrations, &attendance))
}

/// Produce, for every lot, its registration's contestants annotated with
/// their current attendance status.
///
/// Contestants with no attendance record yet default to `PENDING` with empty
/// malpractice details. A lot whose (team_id, event) has no registration
/// yields an empty contestant list rather than an error; the read path is
/// deliberately lenient.
pub fn merge_lot_attendance(
    lots: &[Lot],
    registrations: &[Registration],
    attendance: &[AttendanceRecord],
) -> Vec<LotAttendanceView> {
    // First registration wins when duplicates share a (team, event) key.
    let mut registrations_by_key: HashMap<(&str, &str), &Registration> = HashMap::new();
    for registration in registrations {
        registrations_by_key
            .entry((registration.team_id.as_str(), registration.event_name.as_str()))
            .or_insert(registration);
    }

    let mut attendance_by_key: HashMap<(&str, &str), Vec<&AttendanceRecord>> = HashMap::new();
    for record in attendance {
        attendance_by_key
            .entry((record.team_id.as_str(), record.event_name.as_str()))
            .or_default()
            .push(record);
    }

    lots.iter()
        .map(|lot| {
            let key = (lot.team_id.as_str(), lot.event.as_str());
            let records = attendance_by_key.get(&key);

            let contestants = registrations_by_key
                .get(&key)
                .map(|registration| {
                    registration
                        .contestants
                        .0
                        .iter()
                        .map(|contestant| {
                            // Upsert keeps (event, d_no) unique, so at most one
                            // record should match; the first one wins regardless.
                            let matched = records.and_then(|records| {
                                records.iter().find(|r| r.d_no == contestant.d_no)
                            });

                            match matched {
                                Some(record) => ContestantAttendance {
                                    contestant_name: contestant.contestant_name.clone(),
                                    d_no: contestant.d_no.clone(),
                                    status: record.status.clone(),
                                    malpractice_details: record.malpractice_details.clone(),
                                },
                                None => ContestantAttendance {
                                    contestant_name: contestant.contestant_name.clone(),
                                    d_no: contestant.d_no.clone(),
                                    status: STATUS_PENDING.to_string(),
                                    malpractice_details: String::new(),
                                },
                            }
                        })
                        .collect()
                })
                .unwrap_or_default();

            LotAttendanceView {
                lot_id: lot.lot_id.clone(),
                lot_number: lot.lot_number,
                event_name: lot.event.clone(),
                team_id: lot.team_id.clone(),
                team_name: lot.team_name.clone(),
                theme: lot.theme.clone(),
                contestants,
            }
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::Contestant;
    use sqlx::types::Json;

    fn lot(team_id: &str, event: &str, lot_number: i64) -> Lot {
        Lot {
            lot_id: format!("lot-{team_id}-{event}"),
            lot_number,
            event: event.to_string(),
            team_id: team_id.to_string(),
            team_name: format!("Team {team_id}"),
            theme: None,
        }
    }

    fn registration(team_id: &str, event: &str, d_nos: &[&str]) -> Registration {
        Registration {
            registration_id: format!("reg-{team_id}-{event}-{}", d_nos.join("-")),
            team_id: team_id.to_string(),
            team_name: format!("Team {team_id}"),
            event_name: event.to_string(),
            contestants: Json(
                d_nos
                    .iter()
                    .map(|d_no| Contestant {
                        contestant_name: format!("Contestant {d_no}"),
                        d_no: d_no.to_string(),
                    })
                    .collect(),
            ),
            created_at: chrono::NaiveDate::from_ymd_opt(2026, 2, 14)
                .unwrap()
                .and_hms_opt(9, 0, 0)
                .unwrap(),
        }
    }

    fn record(team_id: &str, event: &str, d_no: &str, status: &str, details: &str) -> AttendanceRecord {
        AttendanceRecord {
            attendance_id: format!("att-{event}-{d_no}-{status}"),
            event_name: event.to_string(),
            d_no: d_no.to_string(),
            team_id: team_id.to_string(),
            team_name: format!("Team {team_id}"),
            contestant_name: format!("Contestant {d_no}"),
            status: status.to_string(),
            malpractice_details: details.to_string(),
        }
    }

    #[test]
    fn test_merged_contestant_count_matches_registration() {
        let lots = vec![lot("T1", "Quiz", 4)];
        let registrations = vec![registration("T1", "Quiz", &["D1", "D2", "D3"])];

        let merged = merge_lot_attendance(&lots, &registrations, &[]);

        assert_eq!(merged.len(), 1);
        assert_eq!(merged[0].contestants.len(), 3);
    }

    #[test]
    fn test_uncovered_contestants_default_to_pending() {
        let lots = vec![lot("T1", "Quiz", 4)];
        let registrations = vec![registration("T1", "Quiz", &["D1", "D2"])];
        let attendance = vec![record("T1", "Quiz", "D1", "PRESENT", "")];

        let merged = merge_lot_attendance(&lots, &registrations, &attendance);

        let contestants = &merged[0].contestants;
        assert_eq!(contestants[0].status, "PRESENT");
        assert_eq!(contestants[1].status, "PENDING");
        assert_eq!(contestants[1].malpractice_details, "");
    }

    #[test]
    fn test_malpractice_details_are_overlaid() {
        let lots = vec![lot("T1", "Quiz", 4)];
        let registrations = vec![registration("T1", "Quiz", &["D1"])];
        let attendance = vec![record("T1", "Quiz", "D1", "MALPRACTICE", "phone on stage")];

        let merged = merge_lot_attendance(&lots, &registrations, &attendance);

        assert_eq!(merged[0].contestants[0].status, "MALPRACTICE");
        assert_eq!(merged[0].contestants[0].malpractice_details, "phone on stage");
    }

    #[test]
    fn test_lot_without_registration_has_no_contestants() {
        let lots = vec![lot("T2", "Quiz", 7)];
        let registrations = vec![registration("T1", "Quiz", &["D1"])];

        let merged = merge_lot_attendance(&lots, &registrations, &[]);

        assert_eq!(merged.len(), 1);
        assert!(merged[0].contestants.is_empty());
    }

    #[test]
    fn test_first_attendance_match_wins() {
        let lots = vec![lot("T1", "Quiz", 4)];
        let registrations = vec![registration("T1", "Quiz", &["D1"])];
        let attendance = vec![
            record("T1", "Quiz", "D1", "PRESENT", ""),
            record("T1", "Quiz", "D1", "ABSENT", ""),
        ];

        let merged = merge_lot_attendance(&lots, &registrations, &attendance);

        assert_eq!(merged[0].contestants[0].status, "PRESENT");
    }

    #[test]
    fn test_first_registration_wins_for_duplicate_key() {
        let lots = vec![lot("T1", "Quiz", 4)];
        let registrations = vec![
            registration("T1", "Quiz", &["D1", "D2"]),
            registration("T1", "Quiz", &["D9"]),
        ];

        let merged = merge_lot_attendance(&lots, &registrations, &[]);

        let d_nos: Vec<&str> = merged[0]
            .contestants
            .iter()
            .map(|c| c.d_no.as_str())
            .collect();
        assert_eq!(d_nos, vec!["D1", "D2"]);
    }

    #[test]
    fn test_attendance_from_other_team_is_ignored() {
        let lots = vec![lot("T1", "Quiz", 4)];
        let registrations = vec![registration("T1", "Quiz", &["D1"])];
        // Same event and d_no but bucketed under another team.
        let attendance = vec![record("T2", "Quiz", "D1", "ABSENT", "")];

        let merged = merge_lot_attendance(&lots, &registrations, &attendance);

        assert_eq!(merged[0].contestants[0].status, "PENDING");
    }

    #[test]
    fn test_one_view_per_lot() {
        let lots = vec![lot("T1", "Quiz", 4), lot("T1", "Dance", 2), lot("T2", "Quiz", 5)];
        let registrations = vec![registration("T1", "Quiz", &["D1"])];

        let merged = merge_lot_attendance(&lots, &registrations, &[]);

        assert_eq!(merged.len(), 3);
        assert_eq!(merged[0].event_name, "Quiz");
        assert_eq!(merged[1].event_name, "Dance");
        assert!(merged[1].contestants.is_empty());
        assert!(merged[2].contestants.is_empty());
    }
}
