use std::str::FromStr;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use uuid::Uuid;

use super::common::{PageInfo, SortOrder};
use super::organization;
use crate::error::Error;

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize, sqlx::Type)]
#[sqlx(type_name = "project_status", rename_all = "lowercase")]
#[serde(rename_all = "lowercase")]
pub enum ProjectStatus {
    Draft,
    Active,
    Completed,
    Cancelled,
}

impl ProjectStatus {
    pub const ALL: [ProjectStatus; 4] = [
        ProjectStatus::Draft,
        ProjectStatus::Active,
        ProjectStatus::Completed,
        ProjectStatus::Cancelled,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            ProjectStatus::Draft => "draft",
            ProjectStatus::Active => "active",
            ProjectStatus::Completed => "completed",
            ProjectStatus::Cancelled => "cancelled",
        }
    }
}

impl FromStr for ProjectStatus {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        ProjectStatus::ALL
            .into_iter()
            .find(|status| status.as_str() == s)
            .ok_or_else(|| Error::BusinessError("Invalid status. Must be one of: draft, active, completed, cancelled".into()))
    }
}

#[derive(Debug, Clone, Serialize, FromRow)]
#[serde(rename_all = "camelCase")]
pub struct Project {
    pub id: Uuid,
    pub title: String,
    pub description: String,
    pub address: String,
    pub coordinates: Vec<f64>,
    pub status: ProjectStatus,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

#[derive(Debug, Clone)]
pub struct Insert {
    pub title: String,
    pub description: String,
    pub address: String,
    pub coordinates: [f64; 2],
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Create {
    pub title: Option<String>,
    pub description: Option<String>,
    pub address: Option<String>,
    pub coordinates: Option<Vec<f64>>,
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Listing {
    #[serde(flatten)]
    pub project: Project,
    pub organization: Option<organization::Brief>,
    pub volunteer_count: i64,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ProjectSort {
    CreatedAt,
    UpdatedAt,
    Title,
    Status,
}

impl ProjectSort {
    pub fn parse(value: Option<&str>) -> Self {
        match value {
            Some("updatedAt") => ProjectSort::UpdatedAt,
            Some("title") => ProjectSort::Title,
            Some("status") => ProjectSort::Status,
            _ => ProjectSort::CreatedAt,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            ProjectSort::CreatedAt => "createdAt",
            ProjectSort::UpdatedAt => "updatedAt",
            ProjectSort::Title => "title",
            ProjectSort::Status => "status",
        }
    }
}

#[derive(Debug, Clone)]
pub struct ProjectQuery {
    pub status: Option<ProjectStatus>,
    pub organization_id: Option<Uuid>,
    pub search: Option<String>,
    pub sort: ProjectSort,
    pub order: SortOrder,
}

#[derive(Debug, Clone, Default, Serialize, PartialEq, Eq)]
pub struct Summary {
    pub draft: i64,
    pub active: i64,
    pub completed: i64,
    pub cancelled: i64,
    pub total: i64,
}

impl Summary {
    pub fn add(&mut self, status: ProjectStatus, count: i64) {
        match status {
            ProjectStatus::Draft => self.draft += count,
            ProjectStatus::Active => self.active += count,
            ProjectStatus::Completed => self.completed += count,
            ProjectStatus::Cancelled => self.cancelled += count,
        }
    }
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Filters {
    pub status: Option<ProjectStatus>,
    pub organization_id: Option<Uuid>,
    pub search: Option<String>,
    pub sort_by: &'static str,
    pub sort_order: SortOrder,
}

#[derive(Debug, Clone, Serialize)]
pub struct Page {
    pub projects: Vec<Listing>,
    pub pagination: PageInfo,
    pub summary: Summary,
    pub filters: Filters,
}
