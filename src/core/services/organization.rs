use std::collections::BTreeMap;

use crate::core::models::{
    common::Pagination,
    organization::{MemberFilters, MemberPage, MemberQuery, MemberSummary, Organization, Summary, Update},
};
use crate::core::ports::repository::{MembershipCommon, OrganizationCommon, Store};
use crate::core::services::account::owned_organization;
use crate::error::Error;

pub async fn list_organizations<S: Store>(mut storer: S) -> Result<Vec<Summary>, Error> {
    OrganizationCommon::summaries(&mut storer).await
}

/// Updates the organization registered under the session email.
pub async fn update_organization<S: Store>(mut storer: S, email: &str, update: Update) -> Result<Organization, Error> {
    let organization = OrganizationCommon::get_by_email(&mut storer, email)
        .await?
        .ok_or_else(|| Error::NotFound("Organization not found".into()))?;
    let updated = OrganizationCommon::update(&mut storer, organization.id, update).await?;
    log::info!("organization {} updated its profile", updated.id);
    Ok(updated)
}

pub async fn list_members<S: Store>(mut storer: S, email: &str, query: MemberQuery, pagination: Pagination) -> Result<MemberPage, Error> {
    owned_organization(&mut storer, email, query.organization_id).await?;
    let total_count = MembershipCommon::count(&mut storer, &query).await?;
    let volunteers = MembershipCommon::query(&mut storer, &query, &pagination).await?;
    let roles: BTreeMap<String, i64> = MembershipCommon::role_counts(&mut storer, query.organization_id)
        .await?
        .into_iter()
        .collect();
    let summary = MemberSummary {
        total: roles.values().sum(),
        roles,
    };
    Ok(MemberPage {
        volunteers,
        pagination: pagination.info(total_count),
        summary,
        filters: MemberFilters {
            organization_id: query.organization_id,
            role: query.role.unwrap_or_else(|| "all".into()),
            search: query.search,
            sort_by: query.sort.as_str(),
            sort_order: query.order,
        },
    })
}
