use std::str::FromStr;

use serde::{Deserialize, Serialize};
use uuid::Uuid;

use super::organization::Organization;
use super::volunteer::Volunteer;
use crate::error::Error;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum AccountType {
    Volunteer,
    Organization,
}

impl FromStr for AccountType {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "volunteer" => Ok(AccountType::Volunteer),
            "organization" => Ok(AccountType::Organization),
            _ => Err(Error::BusinessError("Invalid account type".into())),
        }
    }
}

/// The account a session email resolves to.
#[derive(Debug, Clone)]
pub enum Account {
    Volunteer(Volunteer),
    Organization(Organization),
}

impl Account {
    pub fn id(&self) -> Uuid {
        match self {
            Account::Volunteer(v) => v.id,
            Account::Organization(o) => o.id,
        }
    }

    pub fn account_type(&self) -> AccountType {
        match self {
            Account::Volunteer(_) => AccountType::Volunteer,
            Account::Organization(_) => AccountType::Organization,
        }
    }

    pub fn info(&self) -> Info {
        match self {
            Account::Volunteer(v) => Info {
                id: v.id,
                account_type: AccountType::Volunteer,
                is_admin: v.is_admin,
                is_verified: v.is_verified,
                is_account_completed: v.is_account_completed,
            },
            Account::Organization(o) => Info {
                id: o.id,
                account_type: AccountType::Organization,
                is_admin: false,
                is_verified: o.is_verified,
                is_account_completed: true,
            },
        }
    }
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Info {
    pub id: Uuid,
    pub account_type: AccountType,
    pub is_admin: bool,
    pub is_verified: bool,
    pub is_account_completed: bool,
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Create {
    pub account_type: Option<String>,
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Created {
    pub account_type: AccountType,
    pub id: Uuid,
}
