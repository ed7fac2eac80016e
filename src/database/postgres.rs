use std::ops::DerefMut;

use chrono::NaiveDate;
use sqlx::pool::PoolConnection;
use sqlx::types::Json;
use sqlx::{query, query_as, query_scalar, FromRow, PgConnection, PgPool, Postgres, QueryBuilder, Transaction};
use uuid::Uuid;

use crate::core::models::{
    common::{Pagination, SortOrder},
    join_request::{Detail as JoinRequestDetail, Insert as JoinRequestInsert, JoinRequest, JoinRequestQuery, JoinRequestSort, JoinRequestStatus, Transition},
    organization::{
        Brief as OrganizationBrief, Insert as OrganizationInsert, Joined, Member, MemberQuery, MemberSort, MembershipInsert, Organization,
        Summary as OrganizationSummary, Update as OrganizationUpdate,
    },
    project::{Insert as ProjectInsert, Listing, Project, ProjectQuery, ProjectSort, ProjectStatus},
    volunteer::{Brief as VolunteerBrief, Insert as VolunteerInsert, ProfilePatch, Volunteer},
};
use crate::core::ports::repository::{Common, JoinRequestCommon, Manager, MembershipCommon, OrganizationCommon, ProjectCommon, Store, TxStore, VolunteerCommon};
use crate::error::Error;

pub struct PgSqlx<E>
where
    E: DerefMut<Target = PgConnection>,
{
    executor: E,
}

impl<E> PgSqlx<E>
where
    E: DerefMut<Target = PgConnection>,
{
    pub fn new(executor: E) -> Self {
        Self { executor }
    }
}

/// Turns unique violations on known constraints into client errors.
fn map_unique(err: sqlx::Error) -> Error {
    let constraint = match &err {
        sqlx::Error::Database(db) if db.is_unique_violation() => db.constraint().map(str::to_owned),
        _ => None,
    };
    match constraint.as_deref() {
        Some("volunteers_email_key") | Some("organizations_email_key") => Error::Duplicate { field: "email".into() },
        Some("volunteers_username_key") => Error::Duplicate { field: "username".into() },
        Some("join_requests_one_pending_idx") => Error::BusinessError("A join request already exists".into()),
        _ => Error::DatabaseError(err),
    }
}

fn like_pattern(search: &str) -> String {
    let escaped = search.replace('\\', "\\\\").replace('%', "\\%").replace('_', "\\_");
    format!("%{}%", escaped)
}

fn push_order(stmt: &mut QueryBuilder<'_, Postgres>, column: &str, order: SortOrder, tie_breaker: &str) {
    stmt.push(format!(" ORDER BY {} {}, {}", column, order.as_sql(), tie_breaker));
}

fn push_page(stmt: &mut QueryBuilder<'_, Postgres>, pagination: &Pagination) {
    stmt.push(" LIMIT ").push_bind(pagination.limit());
    stmt.push(" OFFSET ").push_bind(pagination.offset());
}

impl<E> VolunteerCommon for PgSqlx<E>
where
    E: DerefMut<Target = PgConnection>,
{
    async fn insert(&mut self, data: VolunteerInsert) -> Result<Uuid, Error> {
        let id = Uuid::new_v4();
        query("INSERT INTO volunteers (id, name, email, image, provider_account_id) VALUES ($1, $2, $3, $4, $5)")
            .bind(id)
            .bind(data.name)
            .bind(data.email)
            .bind(data.image)
            .bind(data.provider_account_id)
            .execute(&mut *self.executor)
            .await
            .map_err(map_unique)?;
        Ok(id)
    }

    async fn get(&mut self, id: Uuid) -> Result<Option<Volunteer>, Error> {
        let volunteer = query_as("SELECT * FROM volunteers WHERE id = $1")
            .bind(id)
            .fetch_optional(&mut *self.executor)
            .await?;
        Ok(volunteer)
    }

    async fn get_by_email(&mut self, email: &str) -> Result<Option<Volunteer>, Error> {
        let volunteer = query_as("SELECT * FROM volunteers WHERE email = $1")
            .bind(email)
            .fetch_optional(&mut *self.executor)
            .await?;
        Ok(volunteer)
    }

    async fn patch(&mut self, id: Uuid, patch: ProfilePatch) -> Result<Volunteer, Error> {
        let volunteer: Option<Volunteer> = query_as(
            "
        UPDATE volunteers SET
            username = COALESCE($2, username),
            date_of_birth = COALESCE($3, date_of_birth),
            phone_number = COALESCE($4, phone_number),
            gender = COALESCE($5, gender),
            bio = COALESCE($6, bio),
            languages = COALESCE($7, languages),
            location = COALESCE($8, location),
            address = COALESCE($9, address),
            city = COALESCE($10, city),
            state = COALESCE($11, state),
            country = COALESCE($12, country),
            zip_code = COALESCE($13, zip_code),
            education_level = COALESCE($14, education_level),
            institution = COALESCE($15, institution),
            years_of_experience = COALESCE($16, years_of_experience),
            skills = COALESCE($17, skills),
            interests = COALESCE($18, interests),
            causes = COALESCE($19, causes),
            availability = COALESCE($20, availability),
            social_media = COALESCE($21, social_media),
            emergency_contact = COALESCE($22, emergency_contact),
            preferences = COALESCE($23, preferences),
            updated_at = NOW()
        WHERE id = $1
        RETURNING *",
        )
        .bind(id)
        .bind(patch.username)
        .bind(patch.date_of_birth)
        .bind(patch.phone_number)
        .bind(patch.gender)
        .bind(patch.bio)
        .bind(patch.languages)
        .bind(patch.location)
        .bind(patch.address)
        .bind(patch.city)
        .bind(patch.state)
        .bind(patch.country)
        .bind(patch.zip_code)
        .bind(patch.education_level)
        .bind(patch.institution)
        .bind(patch.years_of_experience)
        .bind(patch.skills.map(Json))
        .bind(patch.interests)
        .bind(patch.causes)
        .bind(patch.availability.map(Json))
        .bind(patch.social_media.map(Json))
        .bind(patch.emergency_contact.map(Json))
        .bind(patch.preferences.map(Json))
        .fetch_optional(&mut *self.executor)
        .await
        .map_err(map_unique)?;
        volunteer.ok_or_else(|| Error::NotFound("Volunteer not found".into()))
    }

    async fn mark_completed(&mut self, id: Uuid) -> Result<(), Error> {
        query("UPDATE volunteers SET is_account_completed = TRUE WHERE id = $1")
            .bind(id)
            .execute(&mut *self.executor)
            .await?;
        Ok(())
    }

    async fn joined_organizations(&mut self, id: Uuid) -> Result<Vec<Joined>, Error> {
        let joined = query_as(
            "
        SELECT
            o.id,
            o.name,
            o.organization_name,
            o.image,
            o.email,
            (SELECT COUNT(*) FROM project_owners AS po WHERE po.organization_id = o.id) AS project_count,
            (SELECT COUNT(*) FROM memberships AS mm WHERE mm.organization_id = o.id) AS volunteer_count,
            m.role,
            m.joined_at,
            o.created_at
        FROM memberships AS m
        JOIN organizations AS o ON o.id = m.organization_id
        WHERE m.volunteer_id = $1
        ORDER BY m.joined_at DESC",
        )
        .bind(id)
        .fetch_all(&mut *self.executor)
        .await?;
        Ok(joined)
    }
}

impl<E> OrganizationCommon for PgSqlx<E>
where
    E: DerefMut<Target = PgConnection>,
{
    async fn insert(&mut self, data: OrganizationInsert) -> Result<Uuid, Error> {
        let id = Uuid::new_v4();
        query("INSERT INTO organizations (id, name, email, image, provider_account_id, organization_name) VALUES ($1, $2, $3, $4, $5, $6)")
            .bind(id)
            .bind(data.name)
            .bind(data.email)
            .bind(data.image)
            .bind(data.provider_account_id)
            .bind(data.organization_name)
            .execute(&mut *self.executor)
            .await
            .map_err(map_unique)?;
        Ok(id)
    }

    async fn get(&mut self, id: Uuid) -> Result<Option<Organization>, Error> {
        let organization = query_as("SELECT * FROM organizations WHERE id = $1")
            .bind(id)
            .fetch_optional(&mut *self.executor)
            .await?;
        Ok(organization)
    }

    async fn get_by_email(&mut self, email: &str) -> Result<Option<Organization>, Error> {
        let organization = query_as("SELECT * FROM organizations WHERE email = $1")
            .bind(email)
            .fetch_optional(&mut *self.executor)
            .await?;
        Ok(organization)
    }

    async fn update(&mut self, id: Uuid, data: OrganizationUpdate) -> Result<Organization, Error> {
        let organization: Option<Organization> = query_as(
            "
        UPDATE organizations SET
            organization_name = COALESCE($2, organization_name),
            description = COALESCE($3, description),
            website = COALESCE($4, website),
            phone = COALESCE($5, phone),
            address = COALESCE($6, address),
            updated_at = NOW()
        WHERE id = $1
        RETURNING *",
        )
        .bind(id)
        .bind(data.organization_name)
        .bind(data.description)
        .bind(data.website)
        .bind(data.phone)
        .bind(data.address)
        .fetch_optional(&mut *self.executor)
        .await?;
        organization.ok_or_else(|| Error::NotFound("Organization not found".into()))
    }

    async fn summaries(&mut self) -> Result<Vec<OrganizationSummary>, Error> {
        let list = query_as(
            "
        SELECT
            o.id,
            o.name,
            o.organization_name,
            o.email,
            o.image,
            o.description,
            o.website,
            o.is_verified,
            (SELECT COUNT(*) FROM memberships AS m WHERE m.organization_id = o.id) AS volunteer_count,
            (SELECT COUNT(*) FROM project_owners AS po WHERE po.organization_id = o.id) AS project_count,
            o.created_at
        FROM organizations AS o
        ORDER BY o.created_at DESC",
        )
        .fetch_all(&mut *self.executor)
        .await?;
        Ok(list)
    }
}

fn push_member_filters(stmt: &mut QueryBuilder<'_, Postgres>, query: &MemberQuery) {
    stmt.push(" WHERE m.organization_id = ").push_bind(query.organization_id);
    if let Some(role) = &query.role {
        stmt.push(" AND m.role = ").push_bind(role.clone());
    }
    if let Some(search) = &query.search {
        let pattern = like_pattern(search);
        stmt.push(" AND (v.name ILIKE ").push_bind(pattern.clone());
        stmt.push(" OR v.email ILIKE ").push_bind(pattern).push(")");
    }
}

impl<E> MembershipCommon for PgSqlx<E>
where
    E: DerefMut<Target = PgConnection>,
{
    async fn insert(&mut self, data: MembershipInsert) -> Result<bool, Error> {
        let result = query(
            "INSERT INTO memberships (organization_id, volunteer_id, role, joined_at) VALUES ($1, $2, $3, $4) ON CONFLICT (organization_id, volunteer_id) DO NOTHING",
        )
        .bind(data.organization_id)
        .bind(data.volunteer_id)
        .bind(data.role)
        .bind(data.joined_at)
        .execute(&mut *self.executor)
        .await?;
        Ok(result.rows_affected() == 1)
    }

    async fn is_member(&mut self, organization_id: Uuid, volunteer_id: Uuid) -> Result<bool, Error> {
        let exists = query_scalar("SELECT EXISTS(SELECT 1 FROM memberships WHERE organization_id = $1 AND volunteer_id = $2)")
            .bind(organization_id)
            .bind(volunteer_id)
            .fetch_one(&mut *self.executor)
            .await?;
        Ok(exists)
    }

    async fn query(&mut self, query: &MemberQuery, pagination: &Pagination) -> Result<Vec<Member>, Error> {
        let mut stmt = QueryBuilder::new(
            "
        SELECT v.id, v.name, v.email, v.image, v.date_of_birth, v.created_at, m.role, m.joined_at
        FROM memberships AS m
        JOIN volunteers AS v ON v.id = m.volunteer_id",
        );
        push_member_filters(&mut stmt, query);
        let column = match query.sort {
            MemberSort::JoinedAt => "m.joined_at",
            MemberSort::Name => "LOWER(v.name)",
            MemberSort::Email => "LOWER(v.email)",
            MemberSort::Role => "m.role",
        };
        push_order(&mut stmt, column, query.order, "v.id");
        push_page(&mut stmt, pagination);
        let members = stmt.build_query_as().fetch_all(&mut *self.executor).await?;
        Ok(members)
    }

    async fn count(&mut self, query: &MemberQuery) -> Result<i64, Error> {
        let mut stmt = QueryBuilder::new("SELECT COUNT(*) FROM memberships AS m JOIN volunteers AS v ON v.id = m.volunteer_id");
        push_member_filters(&mut stmt, query);
        let (n,) = stmt.build_query_as().fetch_one(&mut *self.executor).await?;
        Ok(n)
    }

    async fn role_counts(&mut self, organization_id: Uuid) -> Result<Vec<(String, i64)>, Error> {
        let counts = query_as("SELECT role, COUNT(*) FROM memberships WHERE organization_id = $1 GROUP BY role ORDER BY role")
            .bind(organization_id)
            .fetch_all(&mut *self.executor)
            .await?;
        Ok(counts)
    }
}

#[derive(FromRow)]
struct ListingRow {
    #[sqlx(flatten)]
    project: Project,
    owner_id: Option<Uuid>,
    owner_organization_name: Option<String>,
    owner_name: Option<String>,
    owner_email: Option<String>,
    owner_image: Option<String>,
    volunteer_count: i64,
}

impl From<ListingRow> for Listing {
    fn from(row: ListingRow) -> Self {
        let organization = match (row.owner_id, row.owner_organization_name, row.owner_name, row.owner_email) {
            (Some(id), Some(organization_name), Some(name), Some(email)) => Some(OrganizationBrief {
                id,
                organization_name,
                name,
                email,
                image: row.owner_image,
            }),
            _ => None,
        };
        Listing {
            project: row.project,
            organization,
            volunteer_count: row.volunteer_count,
        }
    }
}

fn push_project_filters(stmt: &mut QueryBuilder<'_, Postgres>, query: &ProjectQuery) {
    stmt.push(" WHERE 1 = 1");
    if let Some(status) = query.status {
        stmt.push(" AND p.status = ").push_bind(status);
    }
    if let Some(organization_id) = query.organization_id {
        stmt.push(" AND EXISTS (SELECT 1 FROM project_owners AS f WHERE f.project_id = p.id AND f.organization_id = ")
            .push_bind(organization_id)
            .push(")");
    }
    if let Some(search) = &query.search {
        let pattern = like_pattern(search);
        stmt.push(" AND (p.title ILIKE ").push_bind(pattern.clone());
        stmt.push(" OR p.description ILIKE ").push_bind(pattern.clone());
        stmt.push(" OR p.address ILIKE ").push_bind(pattern).push(")");
    }
}

impl<E> ProjectCommon for PgSqlx<E>
where
    E: DerefMut<Target = PgConnection>,
{
    async fn insert(&mut self, data: ProjectInsert) -> Result<Project, Error> {
        let project = query_as("INSERT INTO projects (id, title, description, address, coordinates) VALUES ($1, $2, $3, $4, $5) RETURNING *")
            .bind(Uuid::new_v4())
            .bind(data.title)
            .bind(data.description)
            .bind(data.address)
            .bind(data.coordinates.to_vec())
            .fetch_one(&mut *self.executor)
            .await?;
        Ok(project)
    }

    async fn add_owner(&mut self, project_id: Uuid, organization_id: Uuid) -> Result<(), Error> {
        query("INSERT INTO project_owners (project_id, organization_id) VALUES ($1, $2)")
            .bind(project_id)
            .bind(organization_id)
            .execute(&mut *self.executor)
            .await?;
        Ok(())
    }

    async fn get(&mut self, id: Uuid) -> Result<Option<Project>, Error> {
        let project = query_as("SELECT * FROM projects WHERE id = $1")
            .bind(id)
            .fetch_optional(&mut *self.executor)
            .await?;
        Ok(project)
    }

    async fn is_owner(&mut self, project_id: Uuid, organization_id: Uuid) -> Result<bool, Error> {
        let exists = query_scalar("SELECT EXISTS(SELECT 1 FROM project_owners WHERE project_id = $1 AND organization_id = $2)")
            .bind(project_id)
            .bind(organization_id)
            .fetch_one(&mut *self.executor)
            .await?;
        Ok(exists)
    }

    async fn query(&mut self, query: &ProjectQuery, pagination: &Pagination) -> Result<Vec<Listing>, Error> {
        let mut stmt = QueryBuilder::new(
            "
        SELECT
            p.*,
            o.id AS owner_id,
            o.organization_name AS owner_organization_name,
            o.name AS owner_name,
            o.email AS owner_email,
            o.image AS owner_image,
            (SELECT COUNT(*) FROM project_volunteers AS pv WHERE pv.project_id = p.id) AS volunteer_count
        FROM projects AS p
        LEFT JOIN LATERAL (
            SELECT org.*
            FROM project_owners AS po
            JOIN organizations AS org ON org.id = po.organization_id
            WHERE po.project_id = p.id
            ORDER BY po.added_at
            LIMIT 1
        ) AS o ON TRUE",
        );
        push_project_filters(&mut stmt, query);
        let column = match query.sort {
            ProjectSort::CreatedAt => "p.created_at",
            ProjectSort::UpdatedAt => "p.updated_at",
            ProjectSort::Title => "LOWER(p.title)",
            ProjectSort::Status => "p.status",
        };
        push_order(&mut stmt, column, query.order, "p.id");
        push_page(&mut stmt, pagination);
        let rows: Vec<ListingRow> = stmt.build_query_as().fetch_all(&mut *self.executor).await?;
        Ok(rows.into_iter().map(Listing::from).collect())
    }

    async fn count(&mut self, query: &ProjectQuery) -> Result<i64, Error> {
        let mut stmt = QueryBuilder::new("SELECT COUNT(*) FROM projects AS p");
        push_project_filters(&mut stmt, query);
        let (n,) = stmt.build_query_as().fetch_one(&mut *self.executor).await?;
        Ok(n)
    }

    async fn status_counts(&mut self, organization_id: Option<Uuid>) -> Result<Vec<(ProjectStatus, i64)>, Error> {
        let counts = query_as(
            "
        SELECT p.status, COUNT(*)
        FROM projects AS p
        WHERE $1::uuid IS NULL OR EXISTS (SELECT 1 FROM project_owners AS f WHERE f.project_id = p.id AND f.organization_id = $1)
        GROUP BY p.status",
        )
        .bind(organization_id)
        .fetch_all(&mut *self.executor)
        .await?;
        Ok(counts)
    }
}

const DETAIL_SELECT: &str = "
        SELECT
            jr.*,
            v.name AS volunteer_name,
            v.email AS volunteer_email,
            v.image AS volunteer_image,
            v.date_of_birth AS volunteer_date_of_birth,
            o.organization_name AS org_organization_name,
            o.name AS org_name,
            o.email AS org_email,
            o.image AS org_image
        FROM join_requests AS jr
        JOIN volunteers AS v ON v.id = jr.volunteer_id
        JOIN organizations AS o ON o.id = jr.organization_id";

#[derive(FromRow)]
struct DetailRow {
    #[sqlx(flatten)]
    request: JoinRequest,
    volunteer_name: Option<String>,
    volunteer_email: String,
    volunteer_image: Option<String>,
    volunteer_date_of_birth: Option<NaiveDate>,
    org_organization_name: String,
    org_name: String,
    org_email: String,
    org_image: Option<String>,
}

impl From<DetailRow> for JoinRequestDetail {
    fn from(row: DetailRow) -> Self {
        JoinRequestDetail {
            volunteer: VolunteerBrief {
                id: row.request.volunteer_id,
                name: row.volunteer_name,
                email: row.volunteer_email,
                image: row.volunteer_image,
                date_of_birth: row.volunteer_date_of_birth,
            },
            organization: OrganizationBrief {
                id: row.request.organization_id,
                organization_name: row.org_organization_name,
                name: row.org_name,
                email: row.org_email,
                image: row.org_image,
            },
            request: row.request,
        }
    }
}

fn push_request_filters(stmt: &mut QueryBuilder<'_, Postgres>, query: &JoinRequestQuery) {
    stmt.push(" WHERE jr.organization_id = ").push_bind(query.organization_id);
    if let Some(status) = query.status {
        stmt.push(" AND jr.status = ").push_bind(status);
    }
}

impl<E> JoinRequestCommon for PgSqlx<E>
where
    E: DerefMut<Target = PgConnection>,
{
    async fn insert(&mut self, data: JoinRequestInsert) -> Result<Uuid, Error> {
        let id = Uuid::new_v4();
        query(
            "INSERT INTO join_requests (id, requested_by, volunteer_id, organization_id, project_id, role, message) VALUES ($1, $2, $3, $4, $5, $6, $7)",
        )
        .bind(id)
        .bind(data.requested_by)
        .bind(data.volunteer_id)
        .bind(data.organization_id)
        .bind(data.project_id)
        .bind(data.role)
        .bind(data.message)
        .execute(&mut *self.executor)
        .await
        .map_err(map_unique)?;
        Ok(id)
    }

    async fn get(&mut self, id: Uuid) -> Result<Option<JoinRequest>, Error> {
        let request = query_as("SELECT * FROM join_requests WHERE id = $1")
            .bind(id)
            .fetch_optional(&mut *self.executor)
            .await?;
        Ok(request)
    }

    async fn get_for_update(&mut self, id: Uuid) -> Result<Option<JoinRequest>, Error> {
        let request = query_as("SELECT * FROM join_requests WHERE id = $1 FOR UPDATE")
            .bind(id)
            .fetch_optional(&mut *self.executor)
            .await?;
        Ok(request)
    }

    async fn detail(&mut self, id: Uuid) -> Result<Option<JoinRequestDetail>, Error> {
        let row: Option<DetailRow> = query_as(&format!("{} WHERE jr.id = $1", DETAIL_SELECT))
            .bind(id)
            .fetch_optional(&mut *self.executor)
            .await?;
        Ok(row.map(JoinRequestDetail::from))
    }

    async fn has_pending(&mut self, volunteer_id: Uuid, organization_id: Uuid) -> Result<bool, Error> {
        let exists = query_scalar(
            "SELECT EXISTS(SELECT 1 FROM join_requests WHERE volunteer_id = $1 AND organization_id = $2 AND status = 'pending')",
        )
        .bind(volunteer_id)
        .bind(organization_id)
        .fetch_one(&mut *self.executor)
        .await?;
        Ok(exists)
    }

    async fn transition(&mut self, id: Uuid, transition: &Transition) -> Result<bool, Error> {
        let result = query(
            "
        UPDATE join_requests
        SET status = $2, rejection_reason = $3, processed_at = $4, updated_at = NOW()
        WHERE id = $1 AND status = 'pending'",
        )
        .bind(id)
        .bind(transition.status)
        .bind(transition.rejection_reason.clone())
        .bind(transition.processed_at)
        .execute(&mut *self.executor)
        .await?;
        Ok(result.rows_affected() == 1)
    }

    async fn query(&mut self, query: &JoinRequestQuery, pagination: &Pagination) -> Result<Vec<JoinRequestDetail>, Error> {
        let mut stmt = QueryBuilder::new(DETAIL_SELECT);
        push_request_filters(&mut stmt, query);
        let column = match query.sort {
            JoinRequestSort::CreatedAt => "jr.created_at",
            JoinRequestSort::UpdatedAt => "jr.updated_at",
            JoinRequestSort::Status => "jr.status",
            JoinRequestSort::RequestedBy => "jr.requested_by",
        };
        push_order(&mut stmt, column, query.order, "jr.id");
        push_page(&mut stmt, pagination);
        let rows: Vec<DetailRow> = stmt.build_query_as().fetch_all(&mut *self.executor).await?;
        Ok(rows.into_iter().map(JoinRequestDetail::from).collect())
    }

    async fn count(&mut self, query: &JoinRequestQuery) -> Result<i64, Error> {
        let mut stmt = QueryBuilder::new("SELECT COUNT(*) FROM join_requests AS jr");
        push_request_filters(&mut stmt, query);
        let (n,) = stmt.build_query_as().fetch_one(&mut *self.executor).await?;
        Ok(n)
    }

    async fn status_counts(&mut self, organization_id: Uuid) -> Result<Vec<(JoinRequestStatus, i64)>, Error> {
        let counts = query_as("SELECT status, COUNT(*) FROM join_requests WHERE organization_id = $1 GROUP BY status")
            .bind(organization_id)
            .fetch_all(&mut *self.executor)
            .await?;
        Ok(counts)
    }
}

impl<E> Common for PgSqlx<E> where E: DerefMut<Target = PgConnection> {}
impl<E> Store for PgSqlx<E> where E: DerefMut<Target = PgConnection> {}

impl TxStore for PgSqlx<Transaction<'static, Postgres>> {
    async fn commit(self) -> Result<(), Error> {
        self.executor.commit().await?;
        Ok(())
    }
}

pub struct PgSqlxManager {
    pool: PgPool,
}

impl PgSqlxManager {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

impl Manager for PgSqlxManager {
    type Store = PgSqlx<PoolConnection<Postgres>>;
    type Tx = PgSqlx<Transaction<'static, Postgres>>;

    async fn db(&self) -> Result<Self::Store, Error> {
        let conn = self.pool.acquire().await?;
        Ok(PgSqlx::new(conn))
    }

    async fn tx(&self) -> Result<Self::Tx, Error> {
        let tx = self.pool.begin().await?;
        Ok(PgSqlx::new(tx))
    }
}
