use chrono::Utc;
use uuid::Uuid;

use crate::core::models::{
    common::Pagination,
    join_request::{
        Accepted, Detail, Filters, Insert, JoinRequest, JoinRequestQuery, JoinRequestStatus, Page, Rejected, RequesterKind, Summary, Transition,
    },
    organization::{MembershipInsert, Organization, DEFAULT_ROLE},
};
use crate::core::ports::repository::{Common, JoinRequestCommon, MembershipCommon, OrganizationCommon, ProjectCommon, Store, TxStore, VolunteerCommon};
use crate::core::services::account::{owned_organization, owned_volunteer};
use crate::error::Error;

/// A volunteer's request to join, with ids already parsed and the message trimmed.
#[derive(Debug, Clone)]
pub struct Submission {
    pub volunteer_id: Uuid,
    pub organization_id: Uuid,
    pub project_id: Option<Uuid>,
    pub message: Option<String>,
}

#[derive(Debug, Clone, Copy)]
pub struct Decision {
    pub request_id: Uuid,
    pub organization_id: Uuid,
}

pub async fn send_request<S: Store>(mut storer: S, email: &str, submission: Submission) -> Result<Detail, Error> {
    let volunteer = owned_volunteer(&mut storer, email, submission.volunteer_id).await?;
    let organization = OrganizationCommon::get(&mut storer, submission.organization_id)
        .await?
        .ok_or_else(|| Error::NotFound("Organization not found".into()))?;
    if let Some(project_id) = submission.project_id {
        ProjectCommon::get(&mut storer, project_id)
            .await?
            .ok_or_else(|| Error::NotFound("Project not found".into()))?;
        if !ProjectCommon::is_owner(&mut storer, project_id, organization.id).await? {
            return Err(Error::BusinessError("Project does not belong to this organization".into()));
        }
    }
    if MembershipCommon::is_member(&mut storer, organization.id, volunteer.id).await? {
        return Err(Error::BusinessError("You are already a member of this organization".into()));
    }
    if JoinRequestCommon::has_pending(&mut storer, volunteer.id, organization.id).await? {
        return Err(Error::BusinessError("You already have a pending join request for this organization".into()));
    }
    let id = JoinRequestCommon::insert(
        &mut storer,
        Insert {
            requested_by: RequesterKind::Volunteer,
            volunteer_id: volunteer.id,
            organization_id: organization.id,
            project_id: submission.project_id,
            role: DEFAULT_ROLE.into(),
            message: submission.message,
        },
    )
    .await?;
    log::info!("volunteer {} asked to join organization {}", volunteer.id, organization.id);
    JoinRequestCommon::detail(&mut storer, id)
        .await?
        .ok_or_else(|| Error::ServerError(format!("join request {} vanished after insert", id)))
}

pub async fn list_requests<S: Store>(mut storer: S, email: &str, query: JoinRequestQuery, pagination: Pagination) -> Result<Page, Error> {
    owned_organization(&mut storer, email, query.organization_id).await?;
    let total_count = JoinRequestCommon::count(&mut storer, &query).await?;
    let join_requests = JoinRequestCommon::query(&mut storer, &query, &pagination).await?;
    let mut summary = Summary {
        total: total_count,
        ..Default::default()
    };
    for (status, count) in JoinRequestCommon::status_counts(&mut storer, query.organization_id).await? {
        summary.add(status, count);
    }
    Ok(Page {
        join_requests,
        pagination: pagination.info(total_count),
        summary,
        filters: Filters {
            organization_id: query.organization_id,
            status: query.status,
            sort_by: query.sort.as_str(),
            sort_order: query.order,
        },
    })
}

/// Locks the request and checks it can still move to `next`.
async fn lock_pending<S: Common>(storer: &mut S, email: &str, decision: Decision, next: JoinRequestStatus) -> Result<(Organization, JoinRequest), Error> {
    let organization = owned_organization(storer, email, decision.organization_id).await?;
    let request = JoinRequestCommon::get_for_update(storer, decision.request_id)
        .await?
        .ok_or_else(|| Error::NotFound("Join request not found".into()))?;
    if request.organization_id != organization.id {
        return Err(Error::Forbidden("Unauthorized: Request does not belong to this organization".into()));
    }
    if !request.status.can_transition_to(next) {
        return Err(Error::BusinessError(format!("Request has already been {}", request.status.as_str())));
    }
    Ok((organization, request))
}

async fn apply<S: Common>(storer: &mut S, request: &JoinRequest, transition: &Transition) -> Result<(), Error> {
    if !JoinRequestCommon::transition(storer, request.id, transition).await? {
        return Err(Error::BusinessError("Request has already been processed".into()));
    }
    Ok(())
}

/// Marks the request accepted and records the membership in the same transaction.
pub async fn accept_request<T: TxStore>(mut storer: T, email: &str, decision: Decision) -> Result<Accepted, Error> {
    let (organization, request) = lock_pending(&mut storer, email, decision, JoinRequestStatus::Accepted).await?;
    let now = Utc::now();
    apply(
        &mut storer,
        &request,
        &Transition {
            status: JoinRequestStatus::Accepted,
            rejection_reason: None,
            processed_at: now,
        },
    )
    .await?;
    MembershipCommon::insert(
        &mut storer,
        MembershipInsert {
            organization_id: organization.id,
            volunteer_id: request.volunteer_id,
            role: request.role.clone(),
            joined_at: now,
        },
    )
    .await?;
    let volunteer = VolunteerCommon::get(&mut storer, request.volunteer_id).await?;
    storer.commit().await?;
    log::info!("organization {} accepted join request {}", organization.id, request.id);
    Ok(Accepted {
        request_id: request.id,
        volunteer_name: volunteer.and_then(|v| v.name),
        organization_name: organization.organization_name,
        role: request.role,
        accepted_at: now,
    })
}

pub async fn reject_request<T: TxStore>(mut storer: T, email: &str, decision: Decision, reason: Option<String>) -> Result<Rejected, Error> {
    let (organization, request) = lock_pending(&mut storer, email, decision, JoinRequestStatus::Rejected).await?;
    let now = Utc::now();
    apply(
        &mut storer,
        &request,
        &Transition {
            status: JoinRequestStatus::Rejected,
            rejection_reason: reason.clone(),
            processed_at: now,
        },
    )
    .await?;
    let volunteer = VolunteerCommon::get(&mut storer, request.volunteer_id).await?;
    storer.commit().await?;
    log::info!("organization {} rejected join request {}", organization.id, request.id);
    Ok(Rejected {
        request_id: request.id,
        volunteer_name: volunteer.and_then(|v| v.name),
        organization_name: organization.organization_name,
        rejected_at: now,
        reason,
    })
}
