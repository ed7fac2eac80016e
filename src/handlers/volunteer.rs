use actix_web::web::{Data, Json};
use serde::Deserialize;

use crate::context::UserInfo;
use crate::core::models::common::non_blank;
use crate::core::models::organization::Joined;
use crate::core::models::volunteer::{ProfilePatch, ProfileUpdated};
use crate::core::ports::repository::Manager;
use crate::core::services::volunteer::{joined_organizations, update_profile as update_volunteer_profile};
use crate::error::Error;
use crate::request::parse_id;
use crate::response::Envelope;

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProfileBody {
    volunteer_id: Option<String>,
    #[serde(flatten)]
    patch: ProfilePatch,
}

pub async fn update_profile<M: Manager>(user_info: UserInfo, Json(body): Json<ProfileBody>, manager: Data<M>) -> Result<Json<Envelope<ProfileUpdated>>, Error> {
    let volunteer_id = non_blank(body.volunteer_id).ok_or_else(|| Error::BusinessError("Volunteer ID is required".into()))?;
    let volunteer_id = parse_id(&volunteer_id, "volunteer ID")?;
    let today = chrono::Utc::now().date_naive();
    let updated = update_volunteer_profile(manager.tx().await?, &user_info.email, volunteer_id, body.patch, today).await?;
    Ok(Json(Envelope::data(updated).with_message("Profile updated successfully")))
}

pub async fn joined<M: Manager>(user_info: UserInfo, manager: Data<M>) -> Result<Json<Envelope<Vec<Joined>>>, Error> {
    let organizations = joined_organizations(manager.db().await?, &user_info.email).await?;
    Ok(Json(Envelope::data(organizations)))
}
