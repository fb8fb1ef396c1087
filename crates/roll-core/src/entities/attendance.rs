use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::Entity;

/// One day's attendance sheet. The backend keys these records by date, so
/// `id` carries the `YYYY-MM-DD` string for the day.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AttendanceRecord {
    pub id: String,
    pub note: Option<String>,
    pub updated_at: Option<DateTime<Utc>>,
    pub attendance_students: Vec<AttendanceStudent>,
}

/// Per-student presence entry within a day's sheet.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AttendanceStudent {
    pub student_id: String,
    pub attendance_status: bool,
    pub note: Option<String>,
}

/// Upsert payload for a day's sheet (the date rides in the URL).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AttendanceUpsertReq {
    pub note: Option<String>,
    pub attendance_students: Vec<AttendanceStudent>,
}

impl Entity for AttendanceRecord {
    fn id(&self) -> &str {
        &self.id
    }
}
