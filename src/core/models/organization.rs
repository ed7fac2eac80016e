use std::collections::BTreeMap;

use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use uuid::Uuid;

use super::common::{PageInfo, SortOrder};

#[derive(Debug, Clone, Serialize, FromRow)]
#[serde(rename_all = "camelCase")]
pub struct Organization {
    pub id: Uuid,
    pub name: String,
    pub email: String,
    pub image: Option<String>,
    #[serde(skip_serializing)]
    pub provider_account_id: Option<String>,
    pub organization_name: String,
    pub description: Option<String>,
    pub website: Option<String>,
    pub phone: Option<String>,
    pub address: Option<String>,
    pub is_verified: bool,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

#[derive(Debug, Clone)]
pub struct Insert {
    pub name: String,
    pub email: String,
    pub image: Option<String>,
    pub provider_account_id: Option<String>,
    pub organization_name: String,
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Update {
    pub organization_name: Option<String>,
    pub description: Option<String>,
    pub website: Option<String>,
    pub phone: Option<String>,
    pub address: Option<String>,
}

#[derive(Debug, Clone, Serialize, FromRow)]
#[serde(rename_all = "camelCase")]
pub struct Brief {
    pub id: Uuid,
    pub organization_name: String,
    pub name: String,
    pub email: String,
    pub image: Option<String>,
}

#[derive(Debug, Clone, Serialize, FromRow)]
#[serde(rename_all = "camelCase")]
pub struct Summary {
    pub id: Uuid,
    pub name: String,
    pub organization_name: String,
    pub email: String,
    pub image: Option<String>,
    pub description: Option<String>,
    pub website: Option<String>,
    pub is_verified: bool,
    pub volunteer_count: i64,
    pub project_count: i64,
    pub created_at: DateTime<Utc>,
}

/// An organization seen from one of its volunteers.
#[derive(Debug, Clone, Serialize, FromRow)]
#[serde(rename_all = "camelCase")]
pub struct Joined {
    pub id: Uuid,
    pub name: String,
    pub organization_name: String,
    pub image: Option<String>,
    pub email: String,
    pub project_count: i64,
    pub volunteer_count: i64,
    pub role: String,
    pub joined_at: DateTime<Utc>,
    pub created_at: DateTime<Utc>,
}

pub const DEFAULT_ROLE: &str = "volunteer";

#[derive(Debug, Clone)]
pub struct MembershipInsert {
    pub organization_id: Uuid,
    pub volunteer_id: Uuid,
    pub role: String,
    pub joined_at: DateTime<Utc>,
}

#[derive(Debug, Clone, Serialize, FromRow)]
#[serde(rename_all = "camelCase")]
pub struct Member {
    pub id: Uuid,
    pub name: Option<String>,
    pub email: String,
    pub image: Option<String>,
    pub date_of_birth: Option<NaiveDate>,
    pub created_at: DateTime<Utc>,
    pub role: String,
    pub joined_at: DateTime<Utc>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MemberSort {
    JoinedAt,
    Name,
    Email,
    Role,
}

impl MemberSort {
    pub fn parse(value: Option<&str>) -> Self {
        match value {
            Some("name") => MemberSort::Name,
            Some("email") => MemberSort::Email,
            Some("role") => MemberSort::Role,
            _ => MemberSort::JoinedAt,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            MemberSort::JoinedAt => "joinedAt",
            MemberSort::Name => "name",
            MemberSort::Email => "email",
            MemberSort::Role => "role",
        }
    }
}

#[derive(Debug, Clone)]
pub struct MemberQuery {
    pub organization_id: Uuid,
    pub role: Option<String>,
    pub search: Option<String>,
    pub sort: MemberSort,
    pub order: SortOrder,
}

#[derive(Debug, Clone, Serialize)]
pub struct MemberSummary {
    pub total: i64,
    pub roles: BTreeMap<String, i64>,
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct MemberFilters {
    pub organization_id: Uuid,
    pub role: String,
    pub search: Option<String>,
    pub sort_by: &'static str,
    pub sort_order: SortOrder,
}

#[derive(Debug, Clone, Serialize)]
pub struct MemberPage {
    pub volunteers: Vec<Member>,
    pub pagination: PageInfo,
    pub summary: MemberSummary,
    pub filters: MemberFilters,
}
