use std::str::FromStr;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use uuid::Uuid;

use super::common::{PageInfo, SortOrder};
use super::{organization, volunteer};
use crate::error::Error;

pub const MAX_MESSAGE_LEN: usize = 500;

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize, sqlx::Type)]
#[sqlx(type_name = "join_request_status", rename_all = "lowercase")]
#[serde(rename_all = "lowercase")]
pub enum JoinRequestStatus {
    Pending,
    Accepted,
    Rejected,
}

impl JoinRequestStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            JoinRequestStatus::Pending => "pending",
            JoinRequestStatus::Accepted => "accepted",
            JoinRequestStatus::Rejected => "rejected",
        }
    }

    /// Only pending requests move, and only to a terminal status.
    pub fn can_transition_to(&self, next: JoinRequestStatus) -> bool {
        *self == JoinRequestStatus::Pending && next != JoinRequestStatus::Pending
    }
}

impl FromStr for JoinRequestStatus {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "pending" => Ok(JoinRequestStatus::Pending),
            "accepted" => Ok(JoinRequestStatus::Accepted),
            "rejected" => Ok(JoinRequestStatus::Rejected),
            _ => Err(Error::BusinessError(
                "Invalid status. Must be one of: pending, accepted, rejected".into(),
            )),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize, sqlx::Type)]
#[sqlx(type_name = "requester_kind", rename_all = "lowercase")]
#[serde(rename_all = "lowercase")]
pub enum RequesterKind {
    Volunteer,
    Organization,
}

#[derive(Debug, Clone, Serialize, FromRow)]
#[serde(rename_all = "camelCase")]
pub struct JoinRequest {
    pub id: Uuid,
    pub requested_by: RequesterKind,
    pub volunteer_id: Uuid,
    pub organization_id: Uuid,
    pub project_id: Option<Uuid>,
    pub status: JoinRequestStatus,
    pub role: String,
    pub message: Option<String>,
    pub rejection_reason: Option<String>,
    pub processed_at: Option<DateTime<Utc>>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

#[derive(Debug, Clone)]
pub struct Insert {
    pub requested_by: RequesterKind,
    pub volunteer_id: Uuid,
    pub organization_id: Uuid,
    pub project_id: Option<Uuid>,
    pub role: String,
    pub message: Option<String>,
}

/// A status change applied only while the stored request is still pending.
#[derive(Debug, Clone)]
pub struct Transition {
    pub status: JoinRequestStatus,
    pub rejection_reason: Option<String>,
    pub processed_at: DateTime<Utc>,
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Detail {
    #[serde(flatten)]
    pub request: JoinRequest,
    pub volunteer: volunteer::Brief,
    pub organization: organization::Brief,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum JoinRequestSort {
    CreatedAt,
    UpdatedAt,
    Status,
    RequestedBy,
}

impl JoinRequestSort {
    pub fn parse(value: Option<&str>) -> Self {
        match value {
            Some("updatedAt") => JoinRequestSort::UpdatedAt,
            Some("status") => JoinRequestSort::Status,
            Some("requestby") => JoinRequestSort::RequestedBy,
            _ => JoinRequestSort::CreatedAt,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            JoinRequestSort::CreatedAt => "createdAt",
            JoinRequestSort::UpdatedAt => "updatedAt",
            JoinRequestSort::Status => "status",
            JoinRequestSort::RequestedBy => "requestby",
        }
    }
}

#[derive(Debug, Clone)]
pub struct JoinRequestQuery {
    pub organization_id: Uuid,
    pub status: Option<JoinRequestStatus>,
    pub sort: JoinRequestSort,
    pub order: SortOrder,
}

#[derive(Debug, Clone, Default, Serialize, PartialEq, Eq)]
pub struct Summary {
    pub pending: i64,
    pub accepted: i64,
    pub rejected: i64,
    pub total: i64,
}

impl Summary {
    pub fn add(&mut self, status: JoinRequestStatus, count: i64) {
        match status {
            JoinRequestStatus::Pending => self.pending += count,
            JoinRequestStatus::Accepted => self.accepted += count,
            JoinRequestStatus::Rejected => self.rejected += count,
        }
    }
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Filters {
    pub organization_id: Uuid,
    pub status: Option<JoinRequestStatus>,
    pub sort_by: &'static str,
    pub sort_order: SortOrder,
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Page {
    pub join_requests: Vec<Detail>,
    pub pagination: PageInfo,
    pub summary: Summary,
    pub filters: Filters,
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SendBody {
    pub volunteer_id: Option<String>,
    pub organization_id: Option<String>,
    pub project_id: Option<String>,
    pub message: Option<String>,
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProcessBody {
    pub request_id: Option<String>,
    pub organization_id: Option<String>,
    pub reason: Option<String>,
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Sent {
    pub join_request: Detail,
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Accepted {
    pub request_id: Uuid,
    pub volunteer_name: Option<String>,
    pub organization_name: String,
    pub role: String,
    pub accepted_at: DateTime<Utc>,
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Rejected {
    pub request_id: Uuid,
    pub volunteer_name: Option<String>,
    pub organization_name: String,
    pub rejected_at: DateTime<Utc>,
    pub reason: Option<String>,
}
