use std::collections::HashMap;
use std::sync::Arc;

use chrono::NaiveDate;
use uuid::Uuid;

use crate::error::AppResult;
use crate::models::{AbsenceReportEntry, AbsenceReportQuery, AttendanceRecord, Member, MemberCategory};
use crate::store::MemoryStore;
use crate::utils::{csv_line, format_display_date, parse_date};

/// Builds the absence report for a date window, inclusive on both ends.
///
/// Records outside the window or referencing unknown members are dropped.
/// Members with no absences in the window produce no row. Rows are ranked
/// by consecutive absences, then total absences, then name.
pub fn build_absence_report(
    members: &[Member],
    records: &[AttendanceRecord],
    start: NaiveDate,
    end: NaiveDate,
) -> Vec<AbsenceReportEntry> {
    let known: HashMap<Uuid, &Member> = members.iter().map(|m| (m.id, m)).collect();

    let mut by_member: HashMap<Uuid, Vec<&AttendanceRecord>> = HashMap::new();
    for record in records {
        if record.date < start || record.date > end {
            continue;
        }
        if !known.contains_key(&record.member_id) {
            log::debug!(
                "dropping attendance record {} for unknown member {}",
                record.id,
                record.member_id
            );
            continue;
        }
        by_member.entry(record.member_id).or_default().push(record);
    }

    let mut entries = Vec::new();
    for (member_id, member_records) in by_member {
        let mut absence_dates: Vec<NaiveDate> = member_records
            .iter()
            .filter(|r| !r.present)
            .map(|r| r.date)
            .collect();
        if absence_dates.is_empty() {
            continue;
        }
        absence_dates.sort_unstable();

        let member = known[&member_id];
        entries.push(AbsenceReportEntry {
            member_id,
            member_name: member.name.clone(),
            category: member.category,
            role: member.role,
            consecutive_absences: longest_weekly_streak(&absence_dates),
            absence_dates,
        });
    }

    entries.sort_by(|a, b| {
        b.consecutive_absences
            .cmp(&a.consecutive_absences)
            .then(b.absence_dates.len().cmp(&a.absence_dates.len()))
            .then(a.member_name.cmp(&b.member_name))
    });
    entries
}

/// Longest run of "consecutive" absences in a chronologically sorted list.
///
/// Services recur weekly, so two absences at most 7 days apart are taken as
/// consecutive occurrences even though the calendar dates are not adjacent.
/// The rule does not distinguish service types; a Wednesday absence followed
/// by a Sunday absence within 7 days extends the same streak. Swap this
/// function out to change that policy without touching the grouping above.
pub fn longest_weekly_streak(sorted_dates: &[NaiveDate]) -> u32 {
    if sorted_dates.is_empty() {
        return 0;
    }

    let mut max_streak = 1u32;
    let mut current = 1u32;
    for pair in sorted_dates.windows(2) {
        let gap_days = (pair[1] - pair[0]).num_days().abs();
        if gap_days <= 7 {
            current += 1;
            if current > max_streak {
                max_streak = current;
            }
        } else {
            current = 1;
        }
    }
    max_streak
}

/// Keeps entries matching the category (wildcard when `None`) with at least
/// `min_absences` absence dates.
pub fn filter_report(
    entries: Vec<AbsenceReportEntry>,
    category: Option<MemberCategory>,
    min_absences: usize,
) -> Vec<AbsenceReportEntry> {
    entries
        .into_iter()
        .filter(|entry| {
            let category_match = category.is_none_or(|c| entry.category == c);
            category_match && entry.absence_dates.len() >= min_absences
        })
        .collect()
}

pub const REPORT_CSV_HEADER: &str =
    "Member Name,Category,Role,Total Absences,Consecutive Absences,Absence Dates";

/// Renders report entries as a CSV document, header included. Absence dates
/// are joined with "; " inside one field.
pub fn write_report_csv(entries: &[AbsenceReportEntry]) -> String {
    let mut out = String::from(REPORT_CSV_HEADER);
    out.push('\n');

    for entry in entries {
        let dates = entry
            .absence_dates
            .iter()
            .map(|d| format_display_date(*d))
            .collect::<Vec<_>>()
            .join("; ");
        let category = entry.category.to_string();
        let role = entry.role.to_string();
        let total = entry.absence_dates.len().to_string();
        let streak = entry.consecutive_absences.to_string();
        out.push_str(&csv_line([
            entry.member_name.as_str(),
            category.as_str(),
            role.as_str(),
            total.as_str(),
            streak.as_str(),
            dates.as_str(),
        ]));
        out.push('\n');
    }
    out
}

#[derive(Clone)]
pub struct ReportService {
    store: Arc<MemoryStore>,
}

impl ReportService {
    pub fn new(store: Arc<MemoryStore>) -> Self {
        Self { store }
    }

    pub fn generate(&self, query: &AbsenceReportQuery) -> AppResult<Vec<AbsenceReportEntry>> {
        let start = parse_date(&query.start_date)?;
        let end = parse_date(&query.end_date)?;
        let category = parse_category_filter(query.category.as_deref())?;
        let min_absences = query.min_absences.unwrap_or(1);

        let members = self.store.members();
        let records = self.store.attendance();
        let entries = build_absence_report(&members, &records, start, end);
        Ok(filter_report(entries, category, min_absences))
    }

    /// Returns the download filename and the rendered CSV document.
    pub fn export(&self, query: &AbsenceReportQuery) -> AppResult<(String, String)> {
        let entries = self.generate(query)?;
        let filename = format!(
            "absence_report_{}_{}.csv",
            query.start_date.trim(),
            query.end_date.trim()
        );
        Ok((filename, write_report_csv(&entries)))
    }
}

fn parse_category_filter(value: Option<&str>) -> AppResult<Option<MemberCategory>> {
    match value {
        None => Ok(None),
        Some(raw) if raw.trim().eq_ignore_ascii_case("all") => Ok(None),
        Some(raw) => MemberCategory::parse(raw)
            .map(Some)
            .ok_or_else(|| {
                crate::error::AppError::ValidationError(format!("unknown category '{raw}'"))
            }),
    }
}
