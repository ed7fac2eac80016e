use uuid::Uuid;

use crate::core::models::{
    account::{Account, AccountType, Created},
    organization::{Insert as OrganizationInsert, Organization},
    volunteer::{Insert as VolunteerInsert, Volunteer},
};
use crate::core::ports::repository::{Common, OrganizationCommon, Store, VolunteerCommon};
use crate::error::Error;

/// Identity asserted by the session token.
#[derive(Debug, Clone)]
pub struct Identity {
    pub email: String,
    pub name: Option<String>,
    pub image: Option<String>,
    pub provider_account_id: Option<String>,
}

/// Volunteer accounts win when an email exists in both tables.
pub async fn resolve<S: Common>(storer: &mut S, email: &str) -> Result<Option<Account>, Error> {
    if let Some(volunteer) = VolunteerCommon::get_by_email(storer, email).await? {
        return Ok(Some(Account::Volunteer(volunteer)));
    }
    Ok(OrganizationCommon::get_by_email(storer, email).await?.map(Account::Organization))
}

pub async fn current<S: Common>(storer: &mut S, email: &str) -> Result<Account, Error> {
    resolve(storer, email)
        .await?
        .ok_or_else(|| Error::NotFound("Account not found".into()))
}

/// Loads the organization and checks that the session owns it.
pub async fn owned_organization<S: Common>(storer: &mut S, email: &str, organization_id: Uuid) -> Result<Organization, Error> {
    let organization = OrganizationCommon::get(storer, organization_id)
        .await?
        .ok_or_else(|| Error::NotFound("Organization not found".into()))?;
    if organization.email != email {
        return Err(Error::Forbidden("Unauthorized: You can only manage your own organization".into()));
    }
    Ok(organization)
}

pub async fn owned_volunteer<S: Common>(storer: &mut S, email: &str, volunteer_id: Uuid) -> Result<Volunteer, Error> {
    let volunteer = VolunteerCommon::get(storer, volunteer_id)
        .await?
        .ok_or_else(|| Error::NotFound("Volunteer not found".into()))?;
    if volunteer.email != email {
        return Err(Error::Forbidden("Unauthorized: You can only act on your own volunteer account".into()));
    }
    Ok(volunteer)
}

pub async fn create_account<S: Store>(mut storer: S, identity: Identity, account_type: AccountType) -> Result<Created, Error> {
    if resolve(&mut storer, &identity.email).await?.is_some() {
        return Err(Error::BusinessError("Account already exists".into()));
    }
    let id = match account_type {
        AccountType::Volunteer => {
            VolunteerCommon::insert(
                &mut storer,
                VolunteerInsert {
                    name: identity.name,
                    email: identity.email,
                    image: identity.image,
                    provider_account_id: identity.provider_account_id,
                },
            )
            .await?
        }
        AccountType::Organization => {
            let name = identity.name.unwrap_or_else(|| "Organization".into());
            OrganizationCommon::insert(
                &mut storer,
                OrganizationInsert {
                    organization_name: name.clone(),
                    name,
                    email: identity.email,
                    image: identity.image,
                    provider_account_id: identity.provider_account_id,
                },
            )
            .await?
        }
    };
    log::info!("created {:?} account {}", account_type, id);
    Ok(Created { account_type, id })
}
