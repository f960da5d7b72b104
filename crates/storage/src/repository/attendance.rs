use sqlx::SqlitePool;
use uuid::Uuid;

use crate::dto::attendance::RecordAttendanceRequest;
use crate::error::Result;
use crate::models::AttendanceRecord;

const COLUMNS: &str = "attendance_id, event_name, d_no, team_id, team_name, \
                       contestant_name, status, malpractice_details";

pub struct AttendanceRepository<'a> {
    pool: &'a SqlitePool,
}

impl<'a> AttendanceRepository<'a> {
    pub fn new(pool: &'a SqlitePool) -> Self {
        Self { pool }
    }

    /// List all attendance records
    pub async fn list(&self) -> Result<Vec<AttendanceRecord>> {
        let records = sqlx::query_as::<_, AttendanceRecord>(&format!(
            "SELECT {COLUMNS} FROM attendance_records ORDER BY event_name, d_no"
        ))
        .fetch_all(self.pool)
        .await?;

        Ok(records)
    }

    /// Record one contestant's attendance. Upserts on (event_name, d_no),
    /// last write wins: exactly one record per key survives the call.
    pub async fn upsert(&self, req: &RecordAttendanceRequest) -> Result<AttendanceRecord> {
        let attendance_id = Uuid::new_v4().to_string();
        let malpractice_details = req.malpractice_details.as_deref().unwrap_or("");

        let record = sqlx::query_as::<_, AttendanceRecord>(&format!(
            "INSERT INTO attendance_records
                 (attendance_id, event_name, d_no, team_id, team_name,
                  contestant_name, status, malpractice_details)
             VALUES (?, ?, ?, ?, ?, ?, ?, ?)
             ON CONFLICT (event_name, d_no) DO UPDATE SET
                 team_id = excluded.team_id,
                 team_name = excluded.team_name,
                 contestant_name = excluded.contestant_name,
                 status = excluded.status,
                 malpractice_details = excluded.malpractice_details
             RETURNING {COLUMNS}"
        ))
        .bind(&attendance_id)
        .bind(&req.event_name)
        .bind(&req.d_no)
        .bind(&req.team_id)
        .bind(&req.team_name)
        .bind(&req.contestant_name)
        .bind(&req.status)
        .bind(malpractice_details)
        .fetch_one(self.pool)
        .await?;

        Ok(record)
    }
}
