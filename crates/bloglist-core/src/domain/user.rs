use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::error::DomainError;

/// Minimum length, in characters, of both usernames and passwords.
const MIN_CREDENTIAL_LENGTH: usize = 3;

/// User entity - represents a registered author.
///
/// `password_hash` is never serialized. `blog_ids` is derived from post
/// ownership when the user is loaded through [`crate::services::UserService`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct User {
    pub id: Uuid,
    pub username: String,
    pub name: Option<String>,
    #[serde(skip_serializing, default)]
    pub password_hash: String,
    #[serde(default)]
    pub blog_ids: Vec<Uuid>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl User {
    /// Create a new user with generated ID and timestamps.
    pub fn new(username: String, name: Option<String>, password_hash: String) -> Self {
        let now = Utc::now();
        Self {
            id: Uuid::now_v7(),
            username,
            name,
            password_hash,
            blog_ids: Vec::new(),
            created_at: now,
            updated_at: now,
        }
    }
}

/// Registration form as submitted by a client.
#[derive(Debug, Clone, Default)]
pub struct Registration {
    pub username: Option<String>,
    pub name: Option<String>,
    pub password: Option<String>,
}

/// Registration that passed validation. Still holds the plaintext password,
/// which must be hashed before a [`User`] is built.
#[derive(Debug, Clone)]
pub struct NewUser {
    pub username: String,
    pub name: Option<String>,
    pub password: String,
}

impl Registration {
    pub fn validate(self) -> Result<NewUser, DomainError> {
        let username = self.username.map(|u| u.trim().to_string());
        let username = check_length("username", username)?;
        let password = check_length("password", self.password)?;

        Ok(NewUser {
            username,
            name: self.name.filter(|n| !n.trim().is_empty()),
            password,
        })
    }
}

fn check_length(field: &str, value: Option<String>) -> Result<String, DomainError> {
    match value {
        Some(v) if v.chars().count() >= MIN_CREDENTIAL_LENGTH => Ok(v),
        _ => Err(DomainError::Validation(format!(
            "{field} must be at least {MIN_CREDENTIAL_LENGTH} characters long"
        ))),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn registration(username: &str, password: &str) -> Registration {
        Registration {
            username: Some(username.to_string()),
            name: Some("Matti Luukkainen".to_string()),
            password: Some(password.to_string()),
        }
    }

    #[test]
    fn test_valid_registration() {
        let new_user = registration("mluukkai", "salainen").validate().unwrap();

        assert_eq!(new_user.username, "mluukkai");
        assert_eq!(new_user.name.as_deref(), Some("Matti Luukkainen"));
    }

    #[test]
    fn test_short_credentials_are_rejected() {
        assert!(matches!(
            registration("mo", "secret").validate(),
            Err(DomainError::Validation(_))
        ));
        assert!(matches!(
            registration("mikkis", "s").validate(),
            Err(DomainError::Validation(_))
        ));
    }

    #[test]
    fn test_missing_password_is_rejected() {
        let form = Registration {
            password: None,
            ..registration("mikkis", "secret")
        };

        assert!(matches!(form.validate(), Err(DomainError::Validation(_))));
    }

    #[test]
    fn test_password_hash_is_not_serialized() {
        let user = User::new("root".to_string(), None, "$argon2id$secret".to_string());
        let json = serde_json::to_value(&user).unwrap();

        assert!(json.get("password_hash").is_none());
        assert_eq!(json["username"], "root");
    }
}
