use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use uuid::Uuid;

use crate::error::FieldError;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SkillLevel {
    Beginner,
    Intermediate,
    Advanced,
    Expert,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Skill {
    pub name: String,
    pub level: SkillLevel,
    #[serde(default)]
    pub verified: bool,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TimeSlot {
    pub day: String,
    pub start_time: String,
    pub end_time: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct Availability {
    pub timezone: Option<String>,
    pub days_available: Vec<String>,
    pub time_slots: Vec<TimeSlot>,
    pub hours_per_week: Option<String>,
    pub can_work_remotely: bool,
    pub max_travel_distance: Option<u32>,
}

impl Default for Availability {
    fn default() -> Self {
        Self {
            timezone: None,
            days_available: Vec::new(),
            time_slots: Vec::new(),
            hours_per_week: None,
            can_work_remotely: true,
            max_travel_distance: Some(25),
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct SocialMedia {
    pub linkedin: Option<String>,
    pub twitter: Option<String>,
    pub facebook: Option<String>,
    pub instagram: Option<String>,
    pub website: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct EmergencyContact {
    pub name: Option<String>,
    pub relationship: Option<String>,
    pub phone_number: Option<String>,
    pub email: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct Preferences {
    pub open_to_projects: bool,
    pub is_profile_public: bool,
    pub receive_email_notifications: bool,
    #[serde(rename = "receiveSMSNotifications")]
    pub receive_sms_notifications: bool,
    pub allow_contact_by_organizations: bool,
    pub preferred_project_types: Vec<String>,
    pub preferred_commitment: Option<String>,
}

impl Default for Preferences {
    fn default() -> Self {
        Self {
            open_to_projects: true,
            is_profile_public: true,
            receive_email_notifications: true,
            receive_sms_notifications: false,
            allow_contact_by_organizations: true,
            preferred_project_types: Vec::new(),
            preferred_commitment: None,
        }
    }
}

#[derive(Debug, Clone, Serialize, FromRow)]
#[serde(rename_all = "camelCase")]
pub struct Volunteer {
    pub id: Uuid,
    pub name: Option<String>,
    pub email: String,
    pub image: Option<String>,
    #[serde(skip_serializing)]
    pub provider_account_id: Option<String>,
    pub is_admin: bool,
    pub is_verified: bool,
    pub is_account_completed: bool,
    pub username: Option<String>,
    pub date_of_birth: Option<NaiveDate>,
    pub phone_number: Option<String>,
    pub gender: Option<String>,
    pub bio: Option<String>,
    pub languages: Vec<String>,
    pub location: Option<Vec<f64>>,
    pub address: Option<String>,
    pub city: Option<String>,
    pub state: Option<String>,
    pub country: Option<String>,
    pub zip_code: Option<String>,
    pub education_level: Option<String>,
    pub institution: Option<String>,
    pub years_of_experience: Option<String>,
    #[sqlx(json)]
    pub skills: Vec<Skill>,
    pub interests: Vec<String>,
    pub causes: Vec<String>,
    #[sqlx(json)]
    pub availability: Availability,
    #[sqlx(json)]
    pub social_media: SocialMedia,
    #[sqlx(json)]
    pub emergency_contact: EmergencyContact,
    #[sqlx(json)]
    pub preferences: Preferences,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

fn filled(value: &Option<String>) -> bool {
    value.as_deref().map(|v| !v.trim().is_empty()).unwrap_or(false)
}

impl Volunteer {
    /// Every contact and address field is present and the location is a real point.
    pub fn has_complete_profile(&self) -> bool {
        let located = matches!(self.location.as_deref(), Some([lng, lat]) if *lng != 0.0 && *lat != 0.0);
        located
            && self.date_of_birth.is_some()
            && [
                &self.username,
                &self.phone_number,
                &self.gender,
                &self.address,
                &self.city,
                &self.state,
                &self.country,
                &self.zip_code,
            ]
            .into_iter()
            .all(filled)
    }
}

#[derive(Debug, Clone)]
pub struct Insert {
    pub name: Option<String>,
    pub email: String,
    pub image: Option<String>,
    pub provider_account_id: Option<String>,
}

/// Profile fields a volunteer may change. `None` leaves the stored value alone.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProfilePatch {
    pub username: Option<String>,
    pub date_of_birth: Option<NaiveDate>,
    pub phone_number: Option<String>,
    pub gender: Option<String>,
    pub bio: Option<String>,
    pub languages: Option<Vec<String>>,
    pub location: Option<Vec<f64>>,
    pub address: Option<String>,
    pub city: Option<String>,
    pub state: Option<String>,
    pub country: Option<String>,
    pub zip_code: Option<String>,
    pub education_level: Option<String>,
    pub institution: Option<String>,
    pub years_of_experience: Option<String>,
    pub skills: Option<Vec<Skill>>,
    pub interests: Option<Vec<String>>,
    pub causes: Option<Vec<String>>,
    pub availability: Option<Availability>,
    pub social_media: Option<SocialMedia>,
    pub emergency_contact: Option<EmergencyContact>,
    pub preferences: Option<Preferences>,
}

const MAX_BIO_LEN: usize = 500;

impl ProfilePatch {
    pub fn validate(&self, today: NaiveDate) -> Vec<FieldError> {
        let mut errors = Vec::new();
        if let Some(username) = &self.username {
            let len = username.chars().count();
            if !(3..=30).contains(&len) {
                errors.push(FieldError::new("username", "Username must be between 3 and 30 characters"));
            } else if !username.chars().all(|c| c.is_ascii_alphanumeric() || matches!(c, '_' | '.' | '-')) {
                errors.push(FieldError::new("username", "Username may only contain letters, digits, '_', '.' and '-'"));
            }
        }
        if let Some(dob) = self.date_of_birth {
            if dob > today {
                errors.push(FieldError::new("dateOfBirth", "Date of birth cannot be in the future"));
            }
        }
        if let Some(phone) = &self.phone_number {
            let len = phone.chars().count();
            if !(7..=20).contains(&len) || !phone.chars().all(|c| c.is_ascii_digit() || matches!(c, ' ' | '+' | '-' | '(' | ')')) {
                errors.push(FieldError::new("phoneNumber", "Phone number is not valid"));
            }
        }
        if let Some(bio) = &self.bio {
            if bio.chars().count() > MAX_BIO_LEN {
                errors.push(FieldError::new("bio", "Bio cannot exceed 500 characters"));
            }
        }
        if let Some(location) = &self.location {
            match location.as_slice() {
                [lng, lat] if (-180.0..=180.0).contains(lng) && (-90.0..=90.0).contains(lat) => {}
                _ => errors.push(FieldError::new("location", "Location must be [longitude, latitude]")),
            }
        }
        if let Some(skills) = &self.skills {
            if skills.iter().any(|s| s.name.trim().is_empty()) {
                errors.push(FieldError::new("skills", "Skill name is required"));
            }
        }
        errors
    }
}

#[derive(Debug, Clone, Serialize, FromRow)]
#[serde(rename_all = "camelCase")]
pub struct Brief {
    pub id: Uuid,
    pub name: Option<String>,
    pub email: String,
    pub image: Option<String>,
    pub date_of_birth: Option<NaiveDate>,
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ProfileUpdated {
    pub volunteer: Volunteer,
    pub is_account_completed: bool,
}
