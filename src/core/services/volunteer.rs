use chrono::NaiveDate;
use uuid::Uuid;

use crate::core::models::{
    account::Account,
    organization::Joined,
    volunteer::{ProfilePatch, ProfileUpdated},
};
use crate::core::ports::repository::{Store, TxStore, VolunteerCommon};
use crate::core::services::account::{current, owned_volunteer};
use crate::error::Error;

/// Applies the patch and the completion flag in one transaction.
pub async fn update_profile<T: TxStore>(mut storer: T, email: &str, volunteer_id: Uuid, patch: ProfilePatch, today: NaiveDate) -> Result<ProfileUpdated, Error> {
    let errors = patch.validate(today);
    if !errors.is_empty() {
        return Err(Error::Validation(errors));
    }
    owned_volunteer(&mut storer, email, volunteer_id).await?;
    let mut volunteer = VolunteerCommon::patch(&mut storer, volunteer_id, patch).await?;
    // completion is sticky
    let completes = !volunteer.is_account_completed && volunteer.has_complete_profile();
    if completes {
        VolunteerCommon::mark_completed(&mut storer, volunteer_id).await?;
        volunteer.is_account_completed = true;
    }
    storer.commit().await?;
    if completes {
        log::info!("volunteer {} completed their profile", volunteer_id);
    }
    Ok(ProfileUpdated {
        is_account_completed: volunteer.is_account_completed,
        volunteer,
    })
}

pub async fn joined_organizations<S: Store>(mut storer: S, email: &str) -> Result<Vec<Joined>, Error> {
    match current(&mut storer, email).await? {
        Account::Volunteer(volunteer) => VolunteerCommon::joined_organizations(&mut storer, volunteer.id).await,
        Account::Organization(_) => Err(Error::Forbidden("Only volunteers can list joined organizations".into())),
    }
}
