//! Staff accounts.

use secrecy::SecretString;
use serde::{Deserialize, Serialize};

use super::validate::required;
use super::{Collection, Record};
use crate::domain::foundation::{CenterId, RecordDate, Role, UserId, ValidationError};

/// A staff account: admin, teacher or doctor.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct User {
    pub id: UserId,
    pub name: String,
    /// Unique across accounts, compared case-insensitively.
    pub email: String,
    pub phone: String,
    pub role: Role,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub profile_image: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub center_id: Option<CenterId>,
    pub is_active: bool,
    pub created_at: RecordDate,
}

impl User {
    /// Builds the account a successful signup creates.
    pub fn from_signup(id: UserId, data: &SignupData, created_at: RecordDate) -> Self {
        Self {
            id,
            name: data.name.trim().to_string(),
            email: data.email.trim().to_string(),
            phone: data.phone.trim().to_string(),
            role: data.role,
            profile_image: None,
            center_id: data.center_id.clone(),
            is_active: true,
            created_at,
        }
    }

    /// Case-insensitive email comparison.
    pub fn has_email(&self, email: &str) -> bool {
        normalize_email(&self.email) == normalize_email(email)
    }
}

impl Record for User {
    const COLLECTION: Collection = Collection::Users;

    fn record_id(&self) -> &str {
        self.id.as_str()
    }
}

/// Everything a person types into the signup screen.
#[derive(Debug, Clone)]
pub struct SignupData {
    pub name: String,
    pub email: String,
    pub phone: String,
    pub password: SecretString,
    pub role: Role,
    pub center_id: Option<CenterId>,
}

impl SignupData {
    /// Checks the non-secret fields. Password strength is a session policy.
    pub fn validate(&self) -> Result<(), ValidationError> {
        required("name", &self.name)?;
        required("phone", &self.phone)?;
        validate_email(&self.email)?;
        if !self.role.is_recognized() {
            return Err(ValidationError::invalid_format(
                "role",
                "must be admin, teacher or doctor",
            ));
        }
        Ok(())
    }
}

/// Canonical form used for email lookups.
pub fn normalize_email(email: &str) -> String {
    email.trim().to_lowercase()
}

/// Minimal shape check: exactly one `@` with text on both sides.
pub fn validate_email(email: &str) -> Result<(), ValidationError> {
    let email = email.trim();
    required("email", email)?;
    let mut parts = email.split('@');
    match (parts.next(), parts.next(), parts.next()) {
        (Some(local), Some(domain), None) if !local.is_empty() && !domain.is_empty() => Ok(()),
        _ => Err(ValidationError::invalid_format(
            "email",
            "expected a single @ between name and domain",
        )),
    }
}
