use chrono::{Datelike, Duration, Utc};
use rand::Rng;
use uuid::Uuid;

use crate::config::SeedConfig;
use crate::models::{
    AttendanceRecord, ChurchRole, Gender, Member, MemberCategory, MemberStatus,
};
use crate::store::MemoryStore;

/// Populates the store with a sample roster and randomized attendance
/// history, mirroring what the UI prototype generated on the fly.
pub fn seed_demo_data(store: &MemoryStore, config: &SeedConfig) {
    let members = sample_roster();
    for member in &members {
        store.insert_member(member.clone());
    }

    let rate = config.attendance_rate.clamp(0.0, 1.0);
    let end = Utc::now().date_naive();
    let start = end - Duration::days(i64::from(config.weeks) * 7 - 1);

    let services = store.services();
    let mut rng = rand::thread_rng();
    let mut records = Vec::new();

    let mut date = start;
    while date <= end {
        for service in &services {
            if service.day_of_week != Some(date.weekday().num_days_from_sunday()) {
                continue;
            }
            for member in &members {
                records.push(AttendanceRecord {
                    id: Uuid::new_v4(),
                    member_id: member.id,
                    member_name: member.name.clone(),
                    service_id: service.id.clone(),
                    service_name: service.name.clone(),
                    date,
                    present: rng.gen_bool(rate),
                });
            }
        }
        date += Duration::days(1);
    }

    let count = records.len();
    store.append_attendance(records);
    log::info!(
        "Seeded {} demo members and {} attendance records ({} weeks)",
        members.len(),
        count,
        config.weeks
    );
}

fn sample_roster() -> Vec<Member> {
    let entries: [(&str, u32, Gender, MemberCategory, MemberStatus, ChurchRole); 8] = [
        ("Ana Costa", 27, Gender::Female, MemberCategory::Youth, MemberStatus::Active, ChurchRole::Disciple),
        ("João Macamo", 54, Gender::Male, MemberCategory::Father, MemberStatus::Active, ChurchRole::Worker),
        ("Maria Tembe", 48, Gender::Female, MemberCategory::Mother, MemberStatus::Active, ChurchRole::Worker),
        ("Carlos Sitoe", 19, Gender::Male, MemberCategory::Youth, MemberStatus::Active, ChurchRole::InFormation),
        ("Luísa Cossa", 33, Gender::Female, MemberCategory::Mother, MemberStatus::Active, ChurchRole::Disciple),
        ("Pedro Mondlane", 61, Gender::Male, MemberCategory::Father, MemberStatus::Inactive, ChurchRole::Disciple),
        ("Esperança Nhaca", 22, Gender::Female, MemberCategory::Youth, MemberStatus::Active, ChurchRole::Disciple),
        ("Samuel Chissano", 40, Gender::Male, MemberCategory::Visitor, MemberStatus::Active, ChurchRole::InFormation),
    ];

    let now = Utc::now();
    entries
        .into_iter()
        .enumerate()
        .map(|(i, (name, age, gender, category, status, role))| Member {
            id: Uuid::new_v4(),
            name: name.to_string(),
            age,
            gender,
            phone: format!("+2588412345{i:02}"),
            address: format!("Av. Central {}, Maputo", i + 1),
            category,
            status,
            role,
            created_at: now,
            updated_at: now,
        })
        .collect()
}
