use sqlx::SqlitePool;
use storage::{
    dto::attendance::{LotAttendanceView, RecordAttendanceRequest},
    error::Result,
    models::AttendanceRecord,
    repository::attendance::AttendanceRepository,
    services::reconciliation,
};

/// Record or update one contestant's attendance for one event
pub async fn record_attendance(
    pool: &SqlitePool,
    request: &RecordAttendanceRequest,
) -> Result<AttendanceRecord> {
    let repo = AttendanceRepository::new(pool);
    repo.upsert(request).await
}

/// Merge lots, registrations, and attendance into the lot-wise view
pub async fn lot_wise_attendance(pool: &SqlitePool) -> Result<Vec<LotAttendanceView>> {
    reconciliation::lot_wise_attendance(pool).await
}
