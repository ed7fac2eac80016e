use actix_web::{
    web::{Data, Json, Query},
    HttpResponse,
};
use serde::Deserialize;

use crate::context::UserInfo;
use crate::core::models::common::{non_blank, Pagination, SortOrder};
use crate::core::models::join_request::{
    Accepted, JoinRequestQuery, JoinRequestSort, JoinRequestStatus, Page, ProcessBody, Rejected, SendBody, Sent, MAX_MESSAGE_LEN,
};
use crate::core::ports::repository::Manager;
use crate::core::services::join_request::{accept_request, list_requests, reject_request, send_request, Decision, Submission};
use crate::error::Error;
use crate::request::{bounded_text, parse_id, parse_optional_id};
use crate::response::Envelope;

pub async fn send<M: Manager>(user_info: UserInfo, Json(body): Json<SendBody>, manager: Data<M>) -> Result<HttpResponse, Error> {
    let (Some(volunteer_id), Some(organization_id)) = (non_blank(body.volunteer_id), non_blank(body.organization_id)) else {
        return Err(Error::BusinessError("Volunteer ID and Organization ID are required".into()));
    };
    let submission = Submission {
        volunteer_id: parse_id(&volunteer_id, "ID")?,
        organization_id: parse_id(&organization_id, "ID")?,
        project_id: parse_optional_id(body.project_id, "ID")?,
        message: bounded_text(body.message, MAX_MESSAGE_LEN, "Message")?,
    };
    let detail = send_request(manager.db().await?, &user_info.email, submission).await?;
    Ok(Envelope::data(Sent { join_request: detail })
        .with_message("Join request sent successfully")
        .created())
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ListParams {
    organization_id: Option<String>,
    status: Option<String>,
    page: Option<i64>,
    limit: Option<i64>,
    sort_by: Option<String>,
    sort_order: Option<String>,
}

pub async fn list<M: Manager>(user_info: UserInfo, Query(params): Query<ListParams>, manager: Data<M>) -> Result<Json<Envelope<Page>>, Error> {
    let organization_id = non_blank(params.organization_id).ok_or_else(|| Error::BusinessError("Organization ID is required".into()))?;
    let organization_id = parse_id(&organization_id, "organization ID")?;
    let pagination = Pagination::validate(params.page, params.limit, 10, 100)?;
    let status = non_blank(params.status)
        .filter(|s| s != "all")
        .map(|s| s.parse::<JoinRequestStatus>())
        .transpose()?;
    let query = JoinRequestQuery {
        organization_id,
        status,
        sort: JoinRequestSort::parse(params.sort_by.as_deref()),
        order: SortOrder::parse(params.sort_order.as_deref()),
    };
    let page = list_requests(manager.db().await?, &user_info.email, query, pagination).await?;
    Ok(Json(Envelope::data(page)))
}

fn decision(body: &ProcessBody) -> Result<Decision, Error> {
    let (Some(request_id), Some(organization_id)) = (non_blank(body.request_id.clone()), non_blank(body.organization_id.clone())) else {
        return Err(Error::BusinessError("Request ID and Organization ID are required".into()));
    };
    Ok(Decision {
        request_id: parse_id(&request_id, "ID")?,
        organization_id: parse_id(&organization_id, "ID")?,
    })
}

pub async fn accept<M: Manager>(user_info: UserInfo, Json(body): Json<ProcessBody>, manager: Data<M>) -> Result<Json<Envelope<Accepted>>, Error> {
    let decision = decision(&body)?;
    let accepted = accept_request(manager.tx().await?, &user_info.email, decision).await?;
    Ok(Json(Envelope::data(accepted).with_message("Join request accepted successfully")))
}

pub async fn reject<M: Manager>(user_info: UserInfo, Json(body): Json<ProcessBody>, manager: Data<M>) -> Result<Json<Envelope<Rejected>>, Error> {
    let decision = decision(&body)?;
    let reason = bounded_text(body.reason, MAX_MESSAGE_LEN, "Reason")?;
    let rejected = reject_request(manager.tx().await?, &user_info.email, decision, reason).await?;
    Ok(Json(Envelope::data(rejected).with_message("Join request rejected successfully")))
}
