use std::sync::Arc;

use chrono::Utc;
use uuid::Uuid;

use crate::error::{AppError, AppResult};
use crate::models::{
    ChurchRole, CreateMemberRequest, DashboardStats, Gender, Member, MemberCategory,
    MemberQuery, MemberStatus, UpdateMemberRequest,
};
use crate::store::MemoryStore;

#[derive(Clone)]
pub struct MemberService {
    store: Arc<MemoryStore>,
}

impl MemberService {
    pub fn new(store: Arc<MemoryStore>) -> Self {
        Self { store }
    }

    /// Lists members, optionally narrowed by case-insensitive name search
    /// and status. A missing or "all" status keeps everyone.
    pub fn list(&self, query: &MemberQuery) -> Vec<Member> {
        let mut members = self.store.members();

        if let Some(term) = query.search.as_deref().map(str::trim)
            && !term.is_empty()
        {
            let needle = term.to_lowercase();
            members.retain(|m| m.name.to_lowercase().contains(&needle));
        }

        if let Some(status) = query.status.as_deref().map(str::trim)
            && !status.is_empty()
            && !status.eq_ignore_ascii_case("all")
        {
            let wanted = MemberStatus::parse_or_default(status);
            members.retain(|m| m.status == wanted);
        }

        members
    }

    pub fn get(&self, id: Uuid) -> AppResult<Member> {
        self.store
            .get_member(id)
            .ok_or_else(|| AppError::NotFound(format!("Member {id} not found")))
    }

    pub fn create(&self, req: CreateMemberRequest) -> AppResult<Member> {
        validate_member_fields(&req.name, req.age, &req.phone, &req.address)?;

        let now = Utc::now();
        let member = Member {
            id: Uuid::new_v4(),
            name: req.name.trim().to_string(),
            age: req.age,
            gender: Gender::parse_or_default(&req.gender),
            phone: req.phone.trim().to_string(),
            address: req.address.trim().to_string(),
            category: MemberCategory::parse_or_default(&req.category),
            status: MemberStatus::parse_or_default(&req.status),
            role: ChurchRole::parse_or_default(&req.role),
            created_at: now,
            updated_at: now,
        };

        self.store.insert_member(member.clone());
        log::info!("Created member {} ({})", member.name, member.id);
        Ok(member)
    }

    pub fn update(&self, id: Uuid, req: UpdateMemberRequest) -> AppResult<Member> {
        let mut member = self.get(id)?;

        if let Some(name) = req.name {
            member.name = name;
        }
        if let Some(age) = req.age {
            member.age = age;
        }
        if let Some(gender) = req.gender {
            member.gender = Gender::parse_or_default(&gender);
        }
        if let Some(phone) = req.phone {
            member.phone = phone;
        }
        if let Some(address) = req.address {
            member.address = address;
        }
        if let Some(category) = req.category {
            member.category = MemberCategory::parse_or_default(&category);
        }
        if let Some(status) = req.status {
            member.status = MemberStatus::parse_or_default(&status);
        }
        if let Some(role) = req.role {
            member.role = ChurchRole::parse_or_default(&role);
        }

        validate_member_fields(&member.name, member.age, &member.phone, &member.address)?;
        member.name = member.name.trim().to_string();
        member.phone = member.phone.trim().to_string();
        member.address = member.address.trim().to_string();
        member.updated_at = Utc::now();

        if !self.store.replace_member(member.clone()) {
            return Err(AppError::NotFound(format!("Member {id} not found")));
        }
        Ok(member)
    }

    pub fn delete(&self, id: Uuid) -> AppResult<()> {
        if !self.store.remove_member(id) {
            return Err(AppError::NotFound(format!("Member {id} not found")));
        }
        log::info!("Deleted member {id}");
        Ok(())
    }

    pub fn dashboard_stats(&self) -> DashboardStats {
        let members = self.store.members();
        let count_category =
            |c: MemberCategory| members.iter().filter(|m| m.category == c).count();

        DashboardStats {
            total_members: members.len(),
            active_members: members
                .iter()
                .filter(|m| m.status == MemberStatus::Active)
                .count(),
            inactive_members: members
                .iter()
                .filter(|m| m.status == MemberStatus::Inactive)
                .count(),
            youth: count_category(MemberCategory::Youth),
            mothers: count_category(MemberCategory::Mother),
            fathers: count_category(MemberCategory::Father),
            visitors: count_category(MemberCategory::Visitor),
        }
    }
}

fn validate_member_fields(name: &str, age: u32, phone: &str, address: &str) -> AppResult<()> {
    if name.trim().is_empty() {
        return Err(AppError::ValidationError("Name is required".to_string()));
    }
    if age == 0 {
        return Err(AppError::ValidationError(
            "Age must be greater than 0".to_string(),
        ));
    }
    if phone.trim().is_empty() {
        return Err(AppError::ValidationError("Phone is required".to_string()));
    }
    if address.trim().is_empty() {
        return Err(AppError::ValidationError("Address is required".to_string()));
    }
    Ok(())
}
