use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use uuid::Uuid;

use crate::models::member::{ChurchRole, MemberCategory};

/// One row of the absence report. Derived on every generation, never stored.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct AbsenceReportEntry {
    pub member_id: Uuid,
    pub member_name: String,
    pub category: MemberCategory,
    pub role: ChurchRole,
    /// Every absence date in the window, ascending.
    pub absence_dates: Vec<NaiveDate>,
    /// Longest run of absences under the weekly-cadence rule.
    pub consecutive_absences: u32,
}

#[derive(Debug, Deserialize)]
pub struct AbsenceReportQuery {
    pub start_date: String,
    pub end_date: String,
    /// Category name, or "all" (the default) for no category filter.
    pub category: Option<String>,
    pub min_absences: Option<usize>,
}
