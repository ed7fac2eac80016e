use actix_web::{
    web::{Data, Json},
    HttpResponse,
};

use crate::context::UserInfo;
use crate::core::models::account::{AccountType, Create, Info};
use crate::core::models::common::non_blank;
use crate::core::ports::repository::Manager;
use crate::core::services::account::{create_account, current as current_account};
use crate::error::Error;
use crate::response::Envelope;

pub async fn create<M: Manager>(user_info: UserInfo, Json(body): Json<Create>, manager: Data<M>) -> Result<HttpResponse, Error> {
    let account_type: AccountType = non_blank(body.account_type)
        .ok_or_else(|| Error::BusinessError("Account type is required".into()))?
        .parse()?;
    let created = create_account(manager.db().await?, user_info.identity(), account_type).await?;
    Ok(Envelope::data(created).with_message("Account created successfully").created())
}

pub async fn current<M: Manager>(user_info: UserInfo, manager: Data<M>) -> Result<Json<Envelope<Info>>, Error> {
    let account = current_account(&mut manager.db().await?, &user_info.email).await?;
    Ok(Json(Envelope::data(account.info())))
}
