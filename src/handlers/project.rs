use actix_web::{
    web::{Data, Json, Query},
    HttpResponse,
};
use serde::Deserialize;

use crate::context::UserInfo;
use crate::core::models::common::{non_blank, Pagination, SortOrder};
use crate::core::models::project::{Create, Page, ProjectQuery, ProjectSort, ProjectStatus};
use crate::core::ports::repository::Manager;
use crate::core::services::project::{create_project, list_projects};
use crate::error::Error;
use crate::request::parse_optional_id;
use crate::response::Envelope;

pub async fn create<M: Manager>(user_info: UserInfo, Json(body): Json<Create>, manager: Data<M>) -> Result<HttpResponse, Error> {
    let project = create_project(manager.tx().await?, &user_info.email, body).await?;
    Ok(Envelope::data(project).with_message("Project created successfully").created())
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ListParams {
    page: Option<i64>,
    limit: Option<i64>,
    status: Option<String>,
    organization_id: Option<String>,
    sort_by: Option<String>,
    sort_order: Option<String>,
    search: Option<String>,
}

pub async fn list<M: Manager>(Query(params): Query<ListParams>, manager: Data<M>) -> Result<Json<Envelope<Page>>, Error> {
    let pagination = Pagination::validate(params.page, params.limit, 12, 50)?;
    let organization_id = parse_optional_id(params.organization_id, "organization ID")?;
    let status = non_blank(params.status)
        .filter(|s| s != "all")
        .map(|s| s.parse::<ProjectStatus>())
        .transpose()?;
    let query = ProjectQuery {
        status,
        organization_id,
        search: non_blank(params.search),
        sort: ProjectSort::parse(params.sort_by.as_deref()),
        order: SortOrder::parse(params.sort_order.as_deref()),
    };
    let page = list_projects(manager.db().await?, query, pagination).await?;
    Ok(Json(Envelope::data(page)))
}
