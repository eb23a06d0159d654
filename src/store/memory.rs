use std::collections::HashMap;
use std::sync::RwLock;

use chrono::NaiveDate;
use uuid::Uuid;

use crate::models::{AttendanceRecord, ChurchService, Member};

/// In-memory data store backing the service layer.
///
/// Owned by the caller and injected where needed; never a process-wide
/// singleton. A hosted store would slot in behind the same service layer.
pub struct MemoryStore {
    members: RwLock<HashMap<Uuid, Member>>,
    attendance: RwLock<Vec<AttendanceRecord>>,
    services: RwLock<Vec<ChurchService>>,
}

impl MemoryStore {
    /// Creates an empty store pre-loaded with the default service catalog.
    pub fn new() -> Self {
        Self {
            members: RwLock::new(HashMap::new()),
            attendance: RwLock::new(Vec::new()),
            services: RwLock::new(ChurchService::defaults()),
        }
    }

    pub fn members(&self) -> Vec<Member> {
        let mut members: Vec<Member> = self
            .members
            .read()
            .expect("member lock poisoned")
            .values()
            .cloned()
            .collect();
        members.sort_by(|a, b| a.name.cmp(&b.name));
        members
    }

    pub fn get_member(&self, id: Uuid) -> Option<Member> {
        self.members
            .read()
            .expect("member lock poisoned")
            .get(&id)
            .cloned()
    }

    pub fn insert_member(&self, member: Member) {
        self.members
            .write()
            .expect("member lock poisoned")
            .insert(member.id, member);
    }

    /// Replaces an existing member. Returns false when the id is unknown.
    pub fn replace_member(&self, member: Member) -> bool {
        let mut members = self.members.write().expect("member lock poisoned");
        if members.contains_key(&member.id) {
            members.insert(member.id, member);
            true
        } else {
            false
        }
    }

    pub fn remove_member(&self, id: Uuid) -> bool {
        self.members
            .write()
            .expect("member lock poisoned")
            .remove(&id)
            .is_some()
    }

    pub fn services(&self) -> Vec<ChurchService> {
        self.services
            .read()
            .expect("service lock poisoned")
            .clone()
    }

    pub fn get_service(&self, id: &str) -> Option<ChurchService> {
        self.services
            .read()
            .expect("service lock poisoned")
            .iter()
            .find(|s| s.id == id)
            .cloned()
    }

    pub fn append_attendance(&self, records: Vec<AttendanceRecord>) {
        self.attendance
            .write()
            .expect("attendance lock poisoned")
            .extend(records);
    }

    /// Snapshot of every attendance record.
    pub fn attendance(&self) -> Vec<AttendanceRecord> {
        self.attendance
            .read()
            .expect("attendance lock poisoned")
            .clone()
    }

    /// Records with `start <= date <= end`.
    pub fn attendance_between(&self, start: NaiveDate, end: NaiveDate) -> Vec<AttendanceRecord> {
        self.attendance
            .read()
            .expect("attendance lock poisoned")
            .iter()
            .filter(|r| r.date >= start && r.date <= end)
            .cloned()
            .collect()
    }

    /// Records for one service occurrence.
    pub fn attendance_for(&self, service_id: &str, date: NaiveDate) -> Vec<AttendanceRecord> {
        self.attendance
            .read()
            .expect("attendance lock poisoned")
            .iter()
            .filter(|r| r.service_id == service_id && r.date == date)
            .cloned()
            .collect()
    }
}

impl Default for MemoryStore {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Utc;
    use crate::models::{ChurchRole, Gender, MemberCategory, MemberStatus};

    fn sample_member(name: &str) -> Member {
        let now = Utc::now();
        Member {
            id: Uuid::new_v4(),
            name: name.to_string(),
            age: 30,
            gender: Gender::Other,
            phone: "+258840000000".to_string(),
            address: "Maputo".to_string(),
            category: MemberCategory::Youth,
            status: MemberStatus::Active,
            role: ChurchRole::Disciple,
            created_at: now,
            updated_at: now,
        }
    }

    fn sample_record(member: &Member, date: NaiveDate, present: bool) -> AttendanceRecord {
        AttendanceRecord {
            id: Uuid::new_v4(),
            member_id: member.id,
            member_name: member.name.clone(),
            service_id: "sunday".to_string(),
            service_name: "Sunday Service".to_string(),
            date,
            present,
        }
    }

    #[test]
    fn test_member_crud() {
        let store = MemoryStore::new();
        let member = sample_member("Ana");
        let id = member.id;

        store.insert_member(member.clone());
        assert_eq!(store.get_member(id).unwrap().name, "Ana");

        let mut renamed = member.clone();
        renamed.name = "Ana Costa".to_string();
        assert!(store.replace_member(renamed));
        assert_eq!(store.get_member(id).unwrap().name, "Ana Costa");

        assert!(store.remove_member(id));
        assert!(store.get_member(id).is_none());
        assert!(!store.remove_member(id));
    }

    #[test]
    fn test_replace_unknown_member_is_rejected() {
        let store = MemoryStore::new();
        assert!(!store.replace_member(sample_member("Ghost")));
        assert!(store.members().is_empty());
    }

    #[test]
    fn test_members_sorted_by_name() {
        let store = MemoryStore::new();
        store.insert_member(sample_member("Zeca"));
        store.insert_member(sample_member("Ana"));
        store.insert_member(sample_member("Marta"));

        let names: Vec<String> = store.members().into_iter().map(|m| m.name).collect();
        assert_eq!(names, vec!["Ana", "Marta", "Zeca"]);
    }

    #[test]
    fn test_default_services_seeded() {
        let store = MemoryStore::new();
        assert_eq!(store.services().len(), 3);
        assert!(store.get_service("sunday").is_some());
        assert!(store.get_service("saturday").is_none());
    }

    #[test]
    fn test_attendance_queries() {
        let store = MemoryStore::new();
        let member = sample_member("Ana");
        let d = |day| NaiveDate::from_ymd_opt(2024, 1, day).unwrap();

        store.insert_member(member.clone());
        store.append_attendance(vec![
            sample_record(&member, d(7), true),
            sample_record(&member, d(14), false),
            sample_record(&member, d(21), false),
        ]);

        assert_eq!(store.attendance().len(), 3);
        assert_eq!(store.attendance_between(d(8), d(21)).len(), 2);
        assert_eq!(store.attendance_for("sunday", d(14)).len(), 1);
        assert!(store.attendance_for("wednesday", d(14)).is_empty());
    }
}
