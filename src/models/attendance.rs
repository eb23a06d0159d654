use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use uuid::Uuid;

/// One member's presence outcome for one service occurrence.
///
/// Member and service names are copied in at write time so historical
/// reports stay stable when a member is later renamed.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct AttendanceRecord {
    pub id: Uuid,
    pub member_id: Uuid,
    pub member_name: String,
    pub service_id: String,
    pub service_name: String,
    pub date: NaiveDate,
    pub present: bool,
}

#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct AttendanceMark {
    pub member_id: Uuid,
    pub present: bool,
}

#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct SaveAttendanceRequest {
    #[schema(example = "sunday")]
    pub service_id: String,
    #[schema(example = "2024-01-07")]
    pub date: String, // YYYY-MM-DD
    pub marks: Vec<AttendanceMark>,
}

#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct SaveAttendanceResponse {
    pub saved: usize,
    pub skipped: usize,
    pub stats: AttendanceStats,
}

#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct AttendanceStats {
    pub service_id: String,
    pub service_date: NaiveDate,
    pub total_members: usize,
    pub present_count: usize,
    pub absent_count: usize,
}

#[derive(Debug, Deserialize)]
pub struct AttendanceRangeQuery {
    pub start_date: String,
    pub end_date: String,
}

#[derive(Debug, Deserialize)]
pub struct AttendanceStatsQuery {
    pub service_id: String,
    pub date: String,
}
