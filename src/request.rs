use uuid::Uuid;

use crate::core::models::common::non_blank;
use crate::error::Error;

/// Parses an id that has already been checked for presence.
pub fn parse_id(value: &str, label: &str) -> Result<Uuid, Error> {
    Uuid::parse_str(value.trim()).map_err(|_| Error::BusinessError(format!("Invalid {} format", label)))
}

/// Blank counts as absent.
pub fn parse_optional_id(value: Option<String>, label: &str) -> Result<Option<Uuid>, Error> {
    non_blank(value).map(|v| parse_id(&v, label)).transpose()
}

/// Trims free text, drops it when empty and rejects it past `max` characters.
pub fn bounded_text(value: Option<String>, max: usize, label: &str) -> Result<Option<String>, Error> {
    let value = non_blank(value);
    if let Some(v) = &value {
        if v.chars().count() > max {
            return Err(Error::BusinessError(format!("{} cannot exceed {} characters", label, max)));
        }
    }
    Ok(value)
}
