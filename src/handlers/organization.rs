use actix_web::web::{Data, Json, Query};
use serde::Deserialize;

use crate::context::UserInfo;
use crate::core::models::common::{non_blank, Pagination, SortOrder};
use crate::core::models::organization::{MemberPage, MemberQuery, MemberSort, Organization, Summary, Update};
use crate::core::ports::repository::Manager;
use crate::core::services::organization::{list_members, list_organizations, update_organization};
use crate::error::Error;
use crate::request::parse_id;
use crate::response::Envelope;

pub async fn list<M: Manager>(manager: Data<M>) -> Result<Json<Envelope<Vec<Summary>>>, Error> {
    let organizations = list_organizations(manager.db().await?).await?;
    Ok(Json(Envelope::data(organizations)))
}

pub async fn update<M: Manager>(user_info: UserInfo, Json(mut body): Json<Update>, manager: Data<M>) -> Result<Json<Envelope<Organization>>, Error> {
    body.organization_name = Some(non_blank(body.organization_name).ok_or_else(|| Error::BusinessError("Organization name is required".into()))?);
    let organization = update_organization(manager.db().await?, &user_info.email, body).await?;
    Ok(Json(Envelope::data(organization).with_message("Organization details updated successfully")))
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MemberParams {
    organization_id: Option<String>,
    page: Option<i64>,
    limit: Option<i64>,
    sort_by: Option<String>,
    sort_order: Option<String>,
    role: Option<String>,
    search: Option<String>,
}

pub async fn members<M: Manager>(user_info: UserInfo, Query(params): Query<MemberParams>, manager: Data<M>) -> Result<Json<Envelope<MemberPage>>, Error> {
    let organization_id = non_blank(params.organization_id).ok_or_else(|| Error::BusinessError("Organization ID is required".into()))?;
    let organization_id = parse_id(&organization_id, "organization ID")?;
    let pagination = Pagination::validate(params.page, params.limit, 10, 100)?;
    let query = MemberQuery {
        organization_id,
        role: non_blank(params.role).filter(|r| r != "all"),
        search: non_blank(params.search),
        sort: MemberSort::parse(params.sort_by.as_deref()),
        order: SortOrder::parse(params.sort_order.as_deref()),
    };
    let page = list_members(manager.db().await?, &user_info.email, query, pagination).await?;
    Ok(Json(Envelope::data(page)))
}
