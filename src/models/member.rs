use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use uuid::Uuid;

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, ToSchema)]
pub enum Gender {
    Male,
    Female,
    Other,
}

impl Gender {
    /// Coerces an arbitrary string into a gender. Unrecognized values fall
    /// back to `Other`.
    pub fn parse_or_default(value: &str) -> Self {
        match value.trim().to_ascii_lowercase().as_str() {
            "male" => Gender::Male,
            "female" => Gender::Female,
            _ => Gender::Other,
        }
    }
}

impl std::fmt::Display for Gender {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Gender::Male => write!(f, "Male"),
            Gender::Female => write!(f, "Female"),
            Gender::Other => write!(f, "Other"),
        }
    }
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, ToSchema)]
pub enum MemberCategory {
    Youth,
    Mother,
    Father,
    Visitor,
}

impl MemberCategory {
    /// Strict parse, case-insensitive. `None` for unrecognized values.
    pub fn parse(value: &str) -> Option<Self> {
        match value.trim().to_ascii_lowercase().as_str() {
            "youth" => Some(MemberCategory::Youth),
            "mother" => Some(MemberCategory::Mother),
            "father" => Some(MemberCategory::Father),
            "visitor" => Some(MemberCategory::Visitor),
            _ => None,
        }
    }

    /// Coerces an arbitrary string into a category. Unrecognized values fall
    /// back to `Youth`, the registration form's initial selection.
    pub fn parse_or_default(value: &str) -> Self {
        Self::parse(value).unwrap_or(MemberCategory::Youth)
    }
}

impl std::fmt::Display for MemberCategory {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            MemberCategory::Youth => write!(f, "Youth"),
            MemberCategory::Mother => write!(f, "Mother"),
            MemberCategory::Father => write!(f, "Father"),
            MemberCategory::Visitor => write!(f, "Visitor"),
        }
    }
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, ToSchema)]
pub enum MemberStatus {
    Active,
    Inactive,
}

impl MemberStatus {
    /// Coerces an arbitrary string into a status. Unrecognized values fall
    /// back to `Active`.
    pub fn parse_or_default(value: &str) -> Self {
        match value.trim().to_ascii_lowercase().as_str() {
            "inactive" => MemberStatus::Inactive,
            _ => MemberStatus::Active,
        }
    }
}

impl std::fmt::Display for MemberStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            MemberStatus::Active => write!(f, "Active"),
            MemberStatus::Inactive => write!(f, "Inactive"),
        }
    }
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, ToSchema)]
pub enum ChurchRole {
    Worker,
    Disciple,
    #[serde(rename = "In-Formation")]
    InFormation,
}

impl ChurchRole {
    /// Coerces an arbitrary string into a role. Unrecognized values fall
    /// back to `In-Formation`, the registration form's initial selection.
    pub fn parse_or_default(value: &str) -> Self {
        let normalized: String = value
            .trim()
            .chars()
            .filter(|c| c.is_ascii_alphanumeric())
            .collect::<String>()
            .to_ascii_lowercase();
        match normalized.as_str() {
            "worker" => ChurchRole::Worker,
            "disciple" => ChurchRole::Disciple,
            _ => ChurchRole::InFormation,
        }
    }
}

impl std::fmt::Display for ChurchRole {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ChurchRole::Worker => write!(f, "Worker"),
            ChurchRole::Disciple => write!(f, "Disciple"),
            ChurchRole::InFormation => write!(f, "In-Formation"),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct Member {
    pub id: Uuid,
    pub name: String,
    pub age: u32,
    pub gender: Gender,
    pub phone: String,
    pub address: String,
    pub category: MemberCategory,
    pub status: MemberStatus,
    pub role: ChurchRole,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct CreateMemberRequest {
    #[schema(example = "Ana Costa")]
    pub name: String,
    #[schema(example = 27)]
    pub age: u32,
    #[schema(example = "Female")]
    pub gender: String,
    #[schema(example = "+258841234567")]
    pub phone: String,
    #[schema(example = "Av. Central 42, Maputo")]
    pub address: String,
    #[schema(example = "Youth")]
    pub category: String,
    #[schema(example = "Active")]
    pub status: String,
    #[schema(example = "Disciple")]
    pub role: String,
}

#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct UpdateMemberRequest {
    pub name: Option<String>,
    pub age: Option<u32>,
    pub gender: Option<String>,
    pub phone: Option<String>,
    pub address: Option<String>,
    pub category: Option<String>,
    pub status: Option<String>,
    pub role: Option<String>,
}

#[derive(Debug, Deserialize)]
pub struct MemberQuery {
    pub search: Option<String>,
    pub status: Option<String>,
}

#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct DashboardStats {
    pub total_members: usize,
    pub active_members: usize,
    pub inactive_members: usize,
    pub youth: usize,
    pub mothers: usize,
    pub fathers: usize,
    pub visitors: usize,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_category_parse_or_default() {
        assert_eq!(
            MemberCategory::parse_or_default("Youth"),
            MemberCategory::Youth
        );
        assert_eq!(
            MemberCategory::parse_or_default(" visitor "),
            MemberCategory::Visitor
        );
        assert_eq!(
            MemberCategory::parse_or_default("MOTHER"),
            MemberCategory::Mother
        );
        // fallback
        assert_eq!(
            MemberCategory::parse_or_default("elder"),
            MemberCategory::Youth
        );
        assert_eq!(MemberCategory::parse_or_default(""), MemberCategory::Youth);
    }

    #[test]
    fn test_role_parse_or_default() {
        assert_eq!(ChurchRole::parse_or_default("Worker"), ChurchRole::Worker);
        assert_eq!(
            ChurchRole::parse_or_default("In-Formation"),
            ChurchRole::InFormation
        );
        assert_eq!(
            ChurchRole::parse_or_default("in formation"),
            ChurchRole::InFormation
        );
        assert_eq!(
            ChurchRole::parse_or_default("deacon"),
            ChurchRole::InFormation
        );
    }

    #[test]
    fn test_status_and_gender_parse_or_default() {
        assert_eq!(
            MemberStatus::parse_or_default("inactive"),
            MemberStatus::Inactive
        );
        assert_eq!(MemberStatus::parse_or_default("???"), MemberStatus::Active);
        assert_eq!(Gender::parse_or_default("female"), Gender::Female);
        assert_eq!(Gender::parse_or_default("unspecified"), Gender::Other);
    }
}
