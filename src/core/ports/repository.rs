use uuid::Uuid;

use crate::core::models::{
    common::Pagination,
    join_request::{Detail as JoinRequestDetail, Insert as JoinRequestInsert, JoinRequest, JoinRequestQuery, JoinRequestStatus, Transition},
    organization::{Insert as OrganizationInsert, Joined, Member, MemberQuery, MembershipInsert, Organization, Summary as OrganizationSummary, Update as OrganizationUpdate},
    project::{Insert as ProjectInsert, Listing, Project, ProjectQuery, ProjectStatus},
    volunteer::{Insert as VolunteerInsert, ProfilePatch, Volunteer},
};
use crate::error::Error;

pub trait VolunteerCommon {
    async fn insert(&mut self, data: VolunteerInsert) -> Result<Uuid, Error>;
    async fn get(&mut self, id: Uuid) -> Result<Option<Volunteer>, Error>;
    async fn get_by_email(&mut self, email: &str) -> Result<Option<Volunteer>, Error>;
    /// Fails with `Error::Duplicate` when the username belongs to someone else.
    async fn patch(&mut self, id: Uuid, patch: ProfilePatch) -> Result<Volunteer, Error>;
    async fn mark_completed(&mut self, id: Uuid) -> Result<(), Error>;
    async fn joined_organizations(&mut self, id: Uuid) -> Result<Vec<Joined>, Error>;
}

pub trait OrganizationCommon {
    async fn insert(&mut self, data: OrganizationInsert) -> Result<Uuid, Error>;
    async fn get(&mut self, id: Uuid) -> Result<Option<Organization>, Error>;
    async fn get_by_email(&mut self, email: &str) -> Result<Option<Organization>, Error>;
    async fn update(&mut self, id: Uuid, data: OrganizationUpdate) -> Result<Organization, Error>;
    async fn summaries(&mut self) -> Result<Vec<OrganizationSummary>, Error>;
}

pub trait MembershipCommon {
    /// Returns false when the pair was already a member.
    async fn insert(&mut self, data: MembershipInsert) -> Result<bool, Error>;
    async fn is_member(&mut self, organization_id: Uuid, volunteer_id: Uuid) -> Result<bool, Error>;
    async fn query(&mut self, query: &MemberQuery, pagination: &Pagination) -> Result<Vec<Member>, Error>;
    async fn count(&mut self, query: &MemberQuery) -> Result<i64, Error>;
    async fn role_counts(&mut self, organization_id: Uuid) -> Result<Vec<(String, i64)>, Error>;
}

pub trait ProjectCommon {
    async fn insert(&mut self, data: ProjectInsert) -> Result<Project, Error>;
    async fn add_owner(&mut self, project_id: Uuid, organization_id: Uuid) -> Result<(), Error>;
    async fn get(&mut self, id: Uuid) -> Result<Option<Project>, Error>;
    async fn is_owner(&mut self, project_id: Uuid, organization_id: Uuid) -> Result<bool, Error>;
    async fn query(&mut self, query: &ProjectQuery, pagination: &Pagination) -> Result<Vec<Listing>, Error>;
    async fn count(&mut self, query: &ProjectQuery) -> Result<i64, Error>;
    async fn status_counts(&mut self, organization_id: Option<Uuid>) -> Result<Vec<(ProjectStatus, i64)>, Error>;
}

pub trait JoinRequestCommon {
    /// Fails with `Error::BusinessError` when a pending request for the pair slipped in concurrently.
    async fn insert(&mut self, data: JoinRequestInsert) -> Result<Uuid, Error>;
    async fn get(&mut self, id: Uuid) -> Result<Option<JoinRequest>, Error>;
    /// Locks the row until the surrounding transaction ends.
    async fn get_for_update(&mut self, id: Uuid) -> Result<Option<JoinRequest>, Error>;
    async fn detail(&mut self, id: Uuid) -> Result<Option<JoinRequestDetail>, Error>;
    async fn has_pending(&mut self, volunteer_id: Uuid, organization_id: Uuid) -> Result<bool, Error>;
    /// Applies the transition only if the request is still pending. Returns whether it did.
    async fn transition(&mut self, id: Uuid, transition: &Transition) -> Result<bool, Error>;
    async fn query(&mut self, query: &JoinRequestQuery, pagination: &Pagination) -> Result<Vec<JoinRequestDetail>, Error>;
    async fn count(&mut self, query: &JoinRequestQuery) -> Result<i64, Error>;
    async fn status_counts(&mut self, organization_id: Uuid) -> Result<Vec<(JoinRequestStatus, i64)>, Error>;
}

pub trait Common: VolunteerCommon + OrganizationCommon + MembershipCommon + ProjectCommon + JoinRequestCommon {}

pub trait Store: Common {}

/// Dropping a `TxStore` without committing discards its writes.
pub trait TxStore: Store {
    async fn commit(self) -> Result<(), Error>;
}

pub trait Manager {
    type Store: Store;
    type Tx: TxStore;

    async fn db(&self) -> Result<Self::Store, Error>;
    async fn tx(&self) -> Result<Self::Tx, Error>;
}
