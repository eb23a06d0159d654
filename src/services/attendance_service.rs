use std::sync::Arc;

use uuid::Uuid;

use crate::error::{AppError, AppResult};
use crate::models::{
    AttendanceRecord, AttendanceStats, ChurchService, SaveAttendanceRequest,
    SaveAttendanceResponse,
};
use crate::store::MemoryStore;
use crate::utils::parse_date;

#[derive(Clone)]
pub struct AttendanceService {
    store: Arc<MemoryStore>,
}

impl AttendanceService {
    pub fn new(store: Arc<MemoryStore>) -> Self {
        Self { store }
    }

    pub fn services(&self) -> Vec<ChurchService> {
        self.store.services()
    }

    /// Saves one roster's presence outcomes for a service occurrence.
    ///
    /// Member and service names are denormalized onto each record at write
    /// time. Marks referencing unknown members are skipped, not fatal.
    pub fn save_bulk(&self, req: SaveAttendanceRequest) -> AppResult<SaveAttendanceResponse> {
        let service = self
            .store
            .get_service(&req.service_id)
            .ok_or_else(|| AppError::NotFound(format!("Service '{}' not found", req.service_id)))?;
        let date = parse_date(&req.date)?;

        let mut records = Vec::with_capacity(req.marks.len());
        let mut skipped = 0usize;
        let mut present_count = 0usize;

        for mark in &req.marks {
            let Some(member) = self.store.get_member(mark.member_id) else {
                log::warn!(
                    "Skipping attendance mark for unknown member {}",
                    mark.member_id
                );
                skipped += 1;
                continue;
            };
            if mark.present {
                present_count += 1;
            }
            records.push(AttendanceRecord {
                id: Uuid::new_v4(),
                member_id: member.id,
                member_name: member.name.clone(),
                service_id: service.id.clone(),
                service_name: service.name.clone(),
                date,
                present: mark.present,
            });
        }

        let saved = records.len();
        self.store.append_attendance(records);
        log::info!(
            "Saved {saved} attendance records for {} on {date} ({skipped} skipped)",
            service.id
        );

        Ok(SaveAttendanceResponse {
            saved,
            skipped,
            stats: AttendanceStats {
                service_id: service.id,
                service_date: date,
                total_members: saved,
                present_count,
                absent_count: saved - present_count,
            },
        })
    }

    pub fn records_between(&self, start: &str, end: &str) -> AppResult<Vec<AttendanceRecord>> {
        let start = parse_date(start)?;
        let end = parse_date(end)?;
        Ok(self.store.attendance_between(start, end))
    }

    pub fn stats_for(&self, service_id: &str, date: &str) -> AppResult<AttendanceStats> {
        let date = parse_date(date)?;
        let records = self.store.attendance_for(service_id, date);
        let present_count = records.iter().filter(|r| r.present).count();

        Ok(AttendanceStats {
            service_id: service_id.to_string(),
            service_date: date,
            total_members: records.len(),
            present_count,
            absent_count: records.len() - present_count,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::AttendanceMark;
    use crate::services::MemberService;
    use crate::models::CreateMemberRequest;

    fn setup() -> (Arc<MemoryStore>, AttendanceService, MemberService) {
        let store = Arc::new(MemoryStore::new());
        (
            store.clone(),
            AttendanceService::new(store.clone()),
            MemberService::new(store),
        )
    }

    fn new_member(members: &MemberService, name: &str) -> uuid::Uuid {
        members
            .create(CreateMemberRequest {
                name: name.to_string(),
                age: 30,
                gender: "Male".to_string(),
                phone: "+258841234567".to_string(),
                address: "Maputo".to_string(),
                category: "Youth".to_string(),
                status: "Active".to_string(),
                role: "Disciple".to_string(),
            })
            .unwrap()
            .id
    }

    #[test]
    fn test_save_bulk_denormalizes_names() {
        let (store, attendance, members) = setup();
        let ana = new_member(&members, "Ana");
        let joao = new_member(&members, "João");

        let response = attendance
            .save_bulk(SaveAttendanceRequest {
                service_id: "sunday".to_string(),
                date: "2024-01-07".to_string(),
                marks: vec![
                    AttendanceMark {
                        member_id: ana,
                        present: true,
                    },
                    AttendanceMark {
                        member_id: joao,
                        present: false,
                    },
                ],
            })
            .unwrap();

        assert_eq!(response.saved, 2);
        assert_eq!(response.skipped, 0);
        assert_eq!(response.stats.present_count, 1);
        assert_eq!(response.stats.absent_count, 1);

        let records = store.attendance();
        let ana_record = records.iter().find(|r| r.member_id == ana).unwrap();
        assert_eq!(ana_record.member_name, "Ana");
        assert_eq!(ana_record.service_name, "Sunday Service");

        // Renaming the member afterwards must not rewrite history.
        members
            .update(
                ana,
                crate::models::UpdateMemberRequest {
                    name: Some("Ana Costa".to_string()),
                    age: None,
                    gender: None,
                    phone: None,
                    address: None,
                    category: None,
                    status: None,
                    role: None,
                },
            )
            .unwrap();
        let record = store
            .attendance()
            .into_iter()
            .find(|r| r.member_id == ana)
            .unwrap();
        assert_eq!(record.member_name, "Ana");
    }

    #[test]
    fn test_save_bulk_skips_unknown_members() {
        let (store, attendance, members) = setup();
        let ana = new_member(&members, "Ana");

        let response = attendance
            .save_bulk(SaveAttendanceRequest {
                service_id: "sunday".to_string(),
                date: "2024-01-07".to_string(),
                marks: vec![
                    AttendanceMark {
                        member_id: ana,
                        present: false,
                    },
                    AttendanceMark {
                        member_id: uuid::Uuid::new_v4(),
                        present: true,
                    },
                ],
            })
            .unwrap();

        assert_eq!(response.saved, 1);
        assert_eq!(response.skipped, 1);
        assert_eq!(store.attendance().len(), 1);
    }

    #[test]
    fn test_save_bulk_rejects_bad_inputs() {
        let (_, attendance, _) = setup();

        let unknown_service = attendance.save_bulk(SaveAttendanceRequest {
            service_id: "saturday".to_string(),
            date: "2024-01-07".to_string(),
            marks: vec![],
        });
        assert!(matches!(unknown_service, Err(AppError::NotFound(_))));

        let bad_date = attendance.save_bulk(SaveAttendanceRequest {
            service_id: "sunday".to_string(),
            date: "07/01/2024".to_string(),
            marks: vec![],
        });
        assert!(matches!(bad_date, Err(AppError::InvalidDate(_))));
    }

    #[test]
    fn test_stats_and_range_queries() {
        let (_, attendance, members) = setup();
        let ana = new_member(&members, "Ana");
        let joao = new_member(&members, "João");

        attendance
            .save_bulk(SaveAttendanceRequest {
                service_id: "sunday".to_string(),
                date: "2024-01-07".to_string(),
                marks: vec![
                    AttendanceMark {
                        member_id: ana,
                        present: true,
                    },
                    AttendanceMark {
                        member_id: joao,
                        present: false,
                    },
                ],
            })
            .unwrap();

        let stats = attendance.stats_for("sunday", "2024-01-07").unwrap();
        assert_eq!(stats.total_members, 2);
        assert_eq!(stats.present_count, 1);
        assert_eq!(stats.absent_count, 1);

        let empty = attendance.stats_for("sunday", "2024-01-14").unwrap();
        assert_eq!(empty.total_members, 0);

        let in_range = attendance
            .records_between("2024-01-01", "2024-01-31")
            .unwrap();
        assert_eq!(in_range.len(), 2);
        assert!(attendance.records_between("bad", "2024-01-31").is_err());
    }
}
