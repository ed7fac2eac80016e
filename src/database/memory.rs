use std::sync::atomic::{AtomicBool, Ordering as AtomicOrdering};
use std::sync::{Arc, Mutex, PoisonError};

use chrono::{DateTime, Duration, Utc};
use uuid::Uuid;

use crate::core::models::{
    common::{Pagination, SortOrder},
    join_request::{Detail as JoinRequestDetail, Insert as JoinRequestInsert, JoinRequest, JoinRequestQuery, JoinRequestSort, JoinRequestStatus, Transition},
    organization::{
        Brief as OrganizationBrief, Insert as OrganizationInsert, Joined, Member, MemberQuery, MemberSort, MembershipInsert, Organization,
        Summary as OrganizationSummary, Update as OrganizationUpdate,
    },
    project::{Insert as ProjectInsert, Listing, Project, ProjectQuery, ProjectSort, ProjectStatus},
    volunteer::{Availability, Brief as VolunteerBrief, EmergencyContact, Insert as VolunteerInsert, Preferences, ProfilePatch, SocialMedia, Volunteer},
};
use crate::core::ports::repository::{Common, JoinRequestCommon, Manager, MembershipCommon, OrganizationCommon, ProjectCommon, Store, TxStore, VolunteerCommon};
use crate::error::Error;

#[derive(Debug, Clone)]
struct ProjectOwner {
    project_id: Uuid,
    organization_id: Uuid,
    added_at: DateTime<Utc>,
}

#[derive(Debug, Clone, Default)]
pub struct MemoryState {
    volunteers: Vec<Volunteer>,
    organizations: Vec<Organization>,
    memberships: Vec<MembershipInsert>,
    projects: Vec<Project>,
    project_owners: Vec<ProjectOwner>,
    join_requests: Vec<JoinRequest>,
    clock: Option<DateTime<Utc>>,
}

impl MemoryState {
    /// Strictly increasing timestamps keep time-based ordering deterministic.
    fn now(&mut self) -> DateTime<Utc> {
        let now = match self.clock {
            Some(last) if Utc::now() <= last => last + Duration::microseconds(1),
            _ => Utc::now(),
        };
        self.clock = Some(now);
        now
    }

    fn volunteer(&self, id: Uuid) -> Option<&Volunteer> {
        self.volunteers.iter().find(|v| v.id == id)
    }

    fn organization(&self, id: Uuid) -> Option<&Organization> {
        self.organizations.iter().find(|o| o.id == id)
    }

    fn volunteer_count(&self, organization_id: Uuid) -> i64 {
        self.memberships.iter().filter(|m| m.organization_id == organization_id).count() as i64
    }

    fn project_count(&self, organization_id: Uuid) -> i64 {
        self.project_owners.iter().filter(|o| o.organization_id == organization_id).count() as i64
    }

    fn primary_owner(&self, project_id: Uuid) -> Option<&Organization> {
        self.project_owners
            .iter()
            .filter(|o| o.project_id == project_id)
            .min_by_key(|o| o.added_at)
            .and_then(|o| self.organization(o.organization_id))
    }

    fn organization_brief(organization: &Organization) -> OrganizationBrief {
        OrganizationBrief {
            id: organization.id,
            organization_name: organization.organization_name.clone(),
            name: organization.name.clone(),
            email: organization.email.clone(),
            image: organization.image.clone(),
        }
    }

    fn detail(&self, request: &JoinRequest) -> Option<JoinRequestDetail> {
        let volunteer = self.volunteer(request.volunteer_id)?;
        let organization = self.organization(request.organization_id)?;
        Some(JoinRequestDetail {
            request: request.clone(),
            volunteer: VolunteerBrief {
                id: volunteer.id,
                name: volunteer.name.clone(),
                email: volunteer.email.clone(),
                image: volunteer.image.clone(),
                date_of_birth: volunteer.date_of_birth,
            },
            organization: Self::organization_brief(organization),
        })
    }

    fn members(&self, query: &MemberQuery) -> Vec<Member> {
        let search = query.search.as_deref().map(str::to_lowercase);
        let mut members: Vec<Member> = self
            .memberships
            .iter()
            .filter(|m| m.organization_id == query.organization_id)
            .filter(|m| query.role.as_deref().map(|role| role == m.role).unwrap_or(true))
            .filter_map(|m| {
                let v = self.volunteer(m.volunteer_id)?;
                Some(Member {
                    id: v.id,
                    name: v.name.clone(),
                    email: v.email.clone(),
                    image: v.image.clone(),
                    date_of_birth: v.date_of_birth,
                    created_at: v.created_at,
                    role: m.role.clone(),
                    joined_at: m.joined_at,
                })
            })
            .filter(|m| match &search {
                Some(needle) => contains(m.name.as_deref(), needle) || contains(Some(m.email.as_str()), needle),
                None => true,
            })
            .collect();
        members.sort_by(|a, b| {
            let ordering = match query.sort {
                MemberSort::JoinedAt => a.joined_at.cmp(&b.joined_at),
                MemberSort::Name => lower(a.name.as_deref()).cmp(&lower(b.name.as_deref())),
                MemberSort::Email => a.email.to_lowercase().cmp(&b.email.to_lowercase()),
                MemberSort::Role => a.role.cmp(&b.role),
            };
            query.order.apply(ordering)
        });
        members
    }

    fn listings(&self, query: &ProjectQuery) -> Vec<Listing> {
        let search = query.search.as_deref().map(str::to_lowercase);
        let mut projects: Vec<&Project> = self
            .projects
            .iter()
            .filter(|p| query.status.map(|s| s == p.status).unwrap_or(true))
            .filter(|p| match query.organization_id {
                Some(org) => self.project_owners.iter().any(|o| o.project_id == p.id && o.organization_id == org),
                None => true,
            })
            .filter(|p| match &search {
                Some(needle) => [&p.title, &p.description, &p.address].into_iter().any(|f| contains(Some(f.as_str()), needle)),
                None => true,
            })
            .collect();
        projects.sort_by(|a, b| {
            let ordering = match query.sort {
                ProjectSort::CreatedAt => a.created_at.cmp(&b.created_at),
                ProjectSort::UpdatedAt => a.updated_at.cmp(&b.updated_at),
                ProjectSort::Title => a.title.to_lowercase().cmp(&b.title.to_lowercase()),
                ProjectSort::Status => a.status.cmp(&b.status),
            };
            query.order.apply(ordering)
        });
        projects
            .into_iter()
            .map(|p| Listing {
                project: p.clone(),
                organization: self.primary_owner(p.id).map(Self::organization_brief),
                volunteer_count: 0,
            })
            .collect()
    }

    fn requests(&self, query: &JoinRequestQuery) -> Vec<&JoinRequest> {
        let mut requests: Vec<&JoinRequest> = self
            .join_requests
            .iter()
            .filter(|r| r.organization_id == query.organization_id)
            .filter(|r| query.status.map(|s| s == r.status).unwrap_or(true))
            .collect();
        requests.sort_by(|a, b| {
            let ordering = match query.sort {
                JoinRequestSort::CreatedAt => a.created_at.cmp(&b.created_at),
                JoinRequestSort::UpdatedAt => a.updated_at.cmp(&b.updated_at),
                JoinRequestSort::Status => a.status.cmp(&b.status),
                JoinRequestSort::RequestedBy => a.requested_by.cmp(&b.requested_by),
            };
            query.order.apply(ordering)
        });
        requests
    }
}

fn lower(value: Option<&str>) -> String {
    value.unwrap_or_default().to_lowercase()
}

fn contains(haystack: Option<&str>, needle: &str) -> bool {
    haystack.map(|h| h.to_lowercase().contains(needle)).unwrap_or(false)
}

fn page<T>(items: Vec<T>, pagination: &Pagination) -> Vec<T> {
    items
        .into_iter()
        .skip(pagination.offset() as usize)
        .take(pagination.limit() as usize)
        .collect()
}

fn patch_volunteer(v: &mut Volunteer, patch: ProfilePatch) {
    macro_rules! set {
        ($($field:ident),*) => {
            $(if let Some(value) = patch.$field {
                v.$field = value.into();
            })*
        };
    }
    set!(
        username,
        date_of_birth,
        phone_number,
        gender,
        bio,
        address,
        city,
        state,
        country,
        zip_code,
        education_level,
        institution,
        years_of_experience,
        location
    );
    set!(languages, skills, interests, causes, availability, social_media, emergency_contact, preferences);
}

/// Shared state plus, inside a transaction, a private copy that replaces it on commit.
pub struct MemoryStore {
    shared: Arc<Mutex<MemoryState>>,
    snapshot: Option<MemoryState>,
    fail_membership_inserts: Arc<AtomicBool>,
}

impl MemoryStore {
    fn with_state<R>(&mut self, f: impl FnOnce(&mut MemoryState) -> R) -> R {
        match &mut self.snapshot {
            Some(state) => f(state),
            None => f(&mut self.shared.lock().unwrap_or_else(PoisonError::into_inner)),
        }
    }
}

impl VolunteerCommon for MemoryStore {
    async fn insert(&mut self, data: VolunteerInsert) -> Result<Uuid, Error> {
        self.with_state(|state| {
            if state.volunteers.iter().any(|v| v.email == data.email) {
                return Err(Error::Duplicate { field: "email".into() });
            }
            let now = state.now();
            let id = Uuid::new_v4();
            state.volunteers.push(Volunteer {
                id,
                name: data.name,
                email: data.email,
                image: data.image,
                provider_account_id: data.provider_account_id,
                is_admin: false,
                is_verified: false,
                is_account_completed: false,
                username: None,
                date_of_birth: None,
                phone_number: None,
                gender: None,
                bio: None,
                languages: Vec::new(),
                location: None,
                address: None,
                city: None,
                state: None,
                country: None,
                zip_code: None,
                education_level: None,
                institution: None,
                years_of_experience: None,
                skills: Vec::new(),
                interests: Vec::new(),
                causes: Vec::new(),
                availability: Availability::default(),
                social_media: SocialMedia::default(),
                emergency_contact: EmergencyContact::default(),
                preferences: Preferences::default(),
                created_at: now,
                updated_at: now,
            });
            Ok(id)
        })
    }

    async fn get(&mut self, id: Uuid) -> Result<Option<Volunteer>, Error> {
        Ok(self.with_state(|state| state.volunteer(id).cloned()))
    }

    async fn get_by_email(&mut self, email: &str) -> Result<Option<Volunteer>, Error> {
        Ok(self.with_state(|state| state.volunteers.iter().find(|v| v.email == email).cloned()))
    }

    async fn patch(&mut self, id: Uuid, patch: ProfilePatch) -> Result<Volunteer, Error> {
        self.with_state(|state| {
            if let Some(username) = &patch.username {
                if state.volunteers.iter().any(|v| v.id != id && v.username.as_ref() == Some(username)) {
                    return Err(Error::Duplicate { field: "username".into() });
                }
            }
            let now = state.now();
            let volunteer = state
                .volunteers
                .iter_mut()
                .find(|v| v.id == id)
                .ok_or_else(|| Error::NotFound("Volunteer not found".into()))?;
            patch_volunteer(volunteer, patch);
            volunteer.updated_at = now;
            Ok(volunteer.clone())
        })
    }

    async fn mark_completed(&mut self, id: Uuid) -> Result<(), Error> {
        self.with_state(|state| {
            if let Some(v) = state.volunteers.iter_mut().find(|v| v.id == id) {
                v.is_account_completed = true;
            }
        });
        Ok(())
    }

    async fn joined_organizations(&mut self, id: Uuid) -> Result<Vec<Joined>, Error> {
        Ok(self.with_state(|state| {
            let mut joined: Vec<Joined> = state
                .memberships
                .iter()
                .filter(|m| m.volunteer_id == id)
                .filter_map(|m| {
                    let o = state.organization(m.organization_id)?;
                    Some(Joined {
                        id: o.id,
                        name: o.name.clone(),
                        organization_name: o.organization_name.clone(),
                        image: o.image.clone(),
                        email: o.email.clone(),
                        project_count: state.project_count(o.id),
                        volunteer_count: state.volunteer_count(o.id),
                        role: m.role.clone(),
                        joined_at: m.joined_at,
                        created_at: o.created_at,
                    })
                })
                .collect();
            joined.sort_by(|a, b| b.joined_at.cmp(&a.joined_at));
            joined
        }))
    }
}

impl OrganizationCommon for MemoryStore {
    async fn insert(&mut self, data: OrganizationInsert) -> Result<Uuid, Error> {
        self.with_state(|state| {
            if state.organizations.iter().any(|o| o.email == data.email) {
                return Err(Error::Duplicate { field: "email".into() });
            }
            let now = state.now();
            let id = Uuid::new_v4();
            state.organizations.push(Organization {
                id,
                name: data.name,
                email: data.email,
                image: data.image,
                provider_account_id: data.provider_account_id,
                organization_name: data.organization_name,
                description: None,
                website: None,
                phone: None,
                address: None,
                is_verified: false,
                created_at: now,
                updated_at: now,
            });
            Ok(id)
        })
    }

    async fn get(&mut self, id: Uuid) -> Result<Option<Organization>, Error> {
        Ok(self.with_state(|state| state.organization(id).cloned()))
    }

    async fn get_by_email(&mut self, email: &str) -> Result<Option<Organization>, Error> {
        Ok(self.with_state(|state| state.organizations.iter().find(|o| o.email == email).cloned()))
    }

    async fn update(&mut self, id: Uuid, data: OrganizationUpdate) -> Result<Organization, Error> {
        self.with_state(|state| {
            let now = state.now();
            let o = state
                .organizations
                .iter_mut()
                .find(|o| o.id == id)
                .ok_or_else(|| Error::NotFound("Organization not found".into()))?;
            if let Some(name) = data.organization_name {
                o.organization_name = name;
            }
            o.description = data.description.or(o.description.take());
            o.website = data.website.or(o.website.take());
            o.phone = data.phone.or(o.phone.take());
            o.address = data.address.or(o.address.take());
            o.updated_at = now;
            Ok(o.clone())
        })
    }

    async fn summaries(&mut self) -> Result<Vec<OrganizationSummary>, Error> {
        Ok(self.with_state(|state| {
            let mut list: Vec<OrganizationSummary> = state
                .organizations
                .iter()
                .map(|o| OrganizationSummary {
                    id: o.id,
                    name: o.name.clone(),
                    organization_name: o.organization_name.clone(),
                    email: o.email.clone(),
                    image: o.image.clone(),
                    description: o.description.clone(),
                    website: o.website.clone(),
                    is_verified: o.is_verified,
                    volunteer_count: state.volunteer_count(o.id),
                    project_count: state.project_count(o.id),
                    created_at: o.created_at,
                })
                .collect();
            list.sort_by(|a, b| b.created_at.cmp(&a.created_at));
            list
        }))
    }
}

impl MembershipCommon for MemoryStore {
    async fn insert(&mut self, data: MembershipInsert) -> Result<bool, Error> {
        if self.fail_membership_inserts.load(AtomicOrdering::SeqCst) {
            return Err(Error::ServerError("membership insert failed".into()));
        }
        Ok(self.with_state(|state| {
            let exists = state
                .memberships
                .iter()
                .any(|m| m.organization_id == data.organization_id && m.volunteer_id == data.volunteer_id);
            if !exists {
                state.memberships.push(data);
            }
            !exists
        }))
    }

    async fn is_member(&mut self, organization_id: Uuid, volunteer_id: Uuid) -> Result<bool, Error> {
        Ok(self.with_state(|state| {
            state
                .memberships
                .iter()
                .any(|m| m.organization_id == organization_id && m.volunteer_id == volunteer_id)
        }))
    }

    async fn query(&mut self, query: &MemberQuery, pagination: &Pagination) -> Result<Vec<Member>, Error> {
        Ok(self.with_state(|state| page(state.members(query), pagination)))
    }

    async fn count(&mut self, query: &MemberQuery) -> Result<i64, Error> {
        Ok(self.with_state(|state| state.members(query).len() as i64))
    }

    async fn role_counts(&mut self, organization_id: Uuid) -> Result<Vec<(String, i64)>, Error> {
        Ok(self.with_state(|state| {
            let mut counts: Vec<(String, i64)> = Vec::new();
            for m in state.memberships.iter().filter(|m| m.organization_id == organization_id) {
                match counts.iter_mut().find(|(role, _)| *role == m.role) {
                    Some((_, n)) => *n += 1,
                    None => counts.push((m.role.clone(), 1)),
                }
            }
            counts
        }))
    }
}

impl ProjectCommon for MemoryStore {
    async fn insert(&mut self, data: ProjectInsert) -> Result<Project, Error> {
        Ok(self.with_state(|state| {
            let now = state.now();
            let project = Project {
                id: Uuid::new_v4(),
                title: data.title,
                description: data.description,
                address: data.address,
                coordinates: data.coordinates.to_vec(),
                status: ProjectStatus::Draft,
                created_at: now,
                updated_at: now,
            };
            state.projects.push(project.clone());
            project
        }))
    }

    async fn add_owner(&mut self, project_id: Uuid, organization_id: Uuid) -> Result<(), Error> {
        self.with_state(|state| {
            let added_at = state.now();
            state.project_owners.push(ProjectOwner {
                project_id,
                organization_id,
                added_at,
            });
        });
        Ok(())
    }

    async fn get(&mut self, id: Uuid) -> Result<Option<Project>, Error> {
        Ok(self.with_state(|state| state.projects.iter().find(|p| p.id == id).cloned()))
    }

    async fn is_owner(&mut self, project_id: Uuid, organization_id: Uuid) -> Result<bool, Error> {
        Ok(self.with_state(|state| {
            state
                .project_owners
                .iter()
                .any(|o| o.project_id == project_id && o.organization_id == organization_id)
        }))
    }

    async fn query(&mut self, query: &ProjectQuery, pagination: &Pagination) -> Result<Vec<Listing>, Error> {
        Ok(self.with_state(|state| page(state.listings(query), pagination)))
    }

    async fn count(&mut self, query: &ProjectQuery) -> Result<i64, Error> {
        Ok(self.with_state(|state| state.listings(query).len() as i64))
    }

    async fn status_counts(&mut self, organization_id: Option<Uuid>) -> Result<Vec<(ProjectStatus, i64)>, Error> {
        Ok(self.with_state(|state| {
            ProjectStatus::ALL
                .into_iter()
                .map(|status| {
                    let query = ProjectQuery {
                        status: Some(status),
                        organization_id,
                        search: None,
                        sort: ProjectSort::CreatedAt,
                        order: SortOrder::Desc,
                    };
                    (status, state.listings(&query).len() as i64)
                })
                .filter(|(_, n)| *n > 0)
                .collect()
        }))
    }
}

impl JoinRequestCommon for MemoryStore {
    async fn insert(&mut self, data: JoinRequestInsert) -> Result<Uuid, Error> {
        self.with_state(|state| {
            let pending = state.join_requests.iter().any(|r| {
                r.volunteer_id == data.volunteer_id && r.organization_id == data.organization_id && r.status == JoinRequestStatus::Pending
            });
            if pending {
                return Err(Error::BusinessError("A join request already exists".into()));
            }
            let now = state.now();
            let id = Uuid::new_v4();
            state.join_requests.push(JoinRequest {
                id,
                requested_by: data.requested_by,
                volunteer_id: data.volunteer_id,
                organization_id: data.organization_id,
                project_id: data.project_id,
                status: JoinRequestStatus::Pending,
                role: data.role,
                message: data.message,
                rejection_reason: None,
                processed_at: None,
                created_at: now,
                updated_at: now,
            });
            Ok(id)
        })
    }

    async fn get(&mut self, id: Uuid) -> Result<Option<JoinRequest>, Error> {
        Ok(self.with_state(|state| state.join_requests.iter().find(|r| r.id == id).cloned()))
    }

    async fn get_for_update(&mut self, id: Uuid) -> Result<Option<JoinRequest>, Error> {
        JoinRequestCommon::get(self, id).await
    }

    async fn detail(&mut self, id: Uuid) -> Result<Option<JoinRequestDetail>, Error> {
        Ok(self.with_state(|state| state.join_requests.iter().find(|r| r.id == id).and_then(|r| state.detail(r))))
    }

    async fn has_pending(&mut self, volunteer_id: Uuid, organization_id: Uuid) -> Result<bool, Error> {
        Ok(self.with_state(|state| {
            state
                .join_requests
                .iter()
                .any(|r| r.volunteer_id == volunteer_id && r.organization_id == organization_id && r.status == JoinRequestStatus::Pending)
        }))
    }

    async fn transition(&mut self, id: Uuid, transition: &Transition) -> Result<bool, Error> {
        Ok(self.with_state(|state| {
            let now = state.now();
            match state.join_requests.iter_mut().find(|r| r.id == id) {
                Some(r) if r.status.can_transition_to(transition.status) => {
                    r.status = transition.status;
                    r.rejection_reason = transition.rejection_reason.clone();
                    r.processed_at = Some(transition.processed_at);
                    r.updated_at = now;
                    true
                }
                _ => false,
            }
        }))
    }

    async fn query(&mut self, query: &JoinRequestQuery, pagination: &Pagination) -> Result<Vec<JoinRequestDetail>, Error> {
        Ok(self.with_state(|state| {
            let details: Vec<JoinRequestDetail> = state.requests(query).into_iter().filter_map(|r| state.detail(r)).collect();
            page(details, pagination)
        }))
    }

    async fn count(&mut self, query: &JoinRequestQuery) -> Result<i64, Error> {
        Ok(self.with_state(|state| state.requests(query).len() as i64))
    }

    async fn status_counts(&mut self, organization_id: Uuid) -> Result<Vec<(JoinRequestStatus, i64)>, Error> {
        Ok(self.with_state(|state| {
            [JoinRequestStatus::Pending, JoinRequestStatus::Accepted, JoinRequestStatus::Rejected]
                .into_iter()
                .map(|status| {
                    let n = state
                        .join_requests
                        .iter()
                        .filter(|r| r.organization_id == organization_id && r.status == status)
                        .count() as i64;
                    (status, n)
                })
                .collect()
        }))
    }
}

impl Common for MemoryStore {}
impl Store for MemoryStore {}

impl TxStore for MemoryStore {
    async fn commit(self) -> Result<(), Error> {
        if let Some(state) = self.snapshot {
            *self.shared.lock().unwrap_or_else(PoisonError::into_inner) = state;
        }
        Ok(())
    }
}

#[derive(Clone, Default)]
pub struct MemoryManager {
    state: Arc<Mutex<MemoryState>>,
    fail_membership_inserts: Arc<AtomicBool>,
}

impl MemoryManager {
    pub fn fail_membership_inserts(&self, fail: bool) {
        self.fail_membership_inserts.store(fail, AtomicOrdering::SeqCst);
    }

    fn store(&self, snapshot: Option<MemoryState>) -> MemoryStore {
        MemoryStore {
            shared: self.state.clone(),
            snapshot,
            fail_membership_inserts: self.fail_membership_inserts.clone(),
        }
    }
}

impl Manager for MemoryManager {
    type Store = MemoryStore;
    type Tx = MemoryStore;

    async fn db(&self) -> Result<MemoryStore, Error> {
        Ok(self.store(None))
    }

    async fn tx(&self) -> Result<MemoryStore, Error> {
        let snapshot = self.state.lock().unwrap_or_else(PoisonError::into_inner).clone();
        Ok(self.store(Some(snapshot)))
    }
}

#[cfg(test)]
pub(crate) mod test {
    use super::*;
    use crate::core::models::volunteer;

    /// Seeds state directly, bypassing the services under test.
    pub struct Fixture {
        pub organization: Organization,
    }

    impl Fixture {
        pub fn new(manager: &MemoryManager) -> Self {
            Self {
                organization: Self::seed_organization(manager, "Helping Hands"),
            }
        }

        fn with_state<R>(manager: &MemoryManager, f: impl FnOnce(&mut MemoryState) -> R) -> R {
            f(&mut manager.state.lock().unwrap())
        }

        fn seed_organization(manager: &MemoryManager, name: &str) -> Organization {
            Self::with_state(manager, |state| {
                let now = state.now();
                let organization = Organization {
                    id: Uuid::new_v4(),
                    name: name.into(),
                    email: format!("{}@org.example", name.to_lowercase().replace(' ', "-")),
                    image: None,
                    provider_account_id: None,
                    organization_name: name.into(),
                    description: None,
                    website: None,
                    phone: None,
                    address: None,
                    is_verified: false,
                    created_at: now,
                    updated_at: now,
                };
                state.organizations.push(organization.clone());
                organization
            })
        }

        pub fn organization(&self, manager: &MemoryManager, name: &str) -> Organization {
            Self::seed_organization(manager, name)
        }

        pub fn volunteer(&self, manager: &MemoryManager, name: &str) -> Volunteer {
            Self::with_state(manager, |state| {
                let now = state.now();
                let v = Volunteer {
                    name: Some(name.into()),
                    created_at: now,
                    updated_at: now,
                    ..volunteer::test::volunteer(&format!("{}@example.org", name.to_lowercase()))
                };
                state.volunteers.push(v.clone());
                v
            })
        }

        pub fn member(&self, manager: &MemoryManager, name: &str, role: &str) -> Volunteer {
            let v = self.volunteer(manager, name);
            Self::with_state(manager, |state| {
                let joined_at = state.now();
                state.memberships.push(MembershipInsert {
                    organization_id: self.organization.id,
                    volunteer_id: v.id,
                    role: role.into(),
                    joined_at,
                });
            });
            v
        }

        pub fn project(&self, manager: &MemoryManager, organization_id: Uuid, title: &str) -> Project {
            Self::with_state(manager, |state| {
                let now = state.now();
                let project = Project {
                    id: Uuid::new_v4(),
                    title: title.into(),
                    description: format!("{} description", title),
                    address: "Main Street".into(),
                    coordinates: vec![10.0, 20.0],
                    status: ProjectStatus::Draft,
                    created_at: now,
                    updated_at: now,
                };
                state.projects.push(project.clone());
                state.project_owners.push(ProjectOwner {
                    project_id: project.id,
                    organization_id,
                    added_at: now,
                });
                project
            })
        }
    }
}
