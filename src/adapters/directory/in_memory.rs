use async_trait::async_trait;
use tokio::sync::RwLock;

use crate::domain::foundation::{AuthError, UserId};
use crate::domain::records::User;
use crate::ports::UserDirectory;

/// Volatile user directory.
///
/// Users are kept in insertion order; lookups are linear, which is fine for
/// the handful of staff accounts an NGO deployment has.
#[derive(Debug, Default)]
pub struct InMemoryUserDirectory {
    users: RwLock<Vec<User>>,
    /// Optional error to return for all calls (for error testing)
    force_error: RwLock<Option<AuthError>>,
}

impl InMemoryUserDirectory {
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds a user before the directory is shared.
    pub fn with_user(mut self, user: User) -> Self {
        self.users.get_mut().push(user);
        self
    }

    pub fn with_error(mut self, error: AuthError) -> Self {
        *self.force_error.get_mut() = Some(error);
        self
    }

    pub async fn clear_error(&self) {
        *self.force_error.write().await = None;
    }

    pub async fn user_count(&self) -> usize {
        self.users.read().await.len()
    }

    async fn check_forced_error(&self) -> Result<(), AuthError> {
        match self.force_error.read().await.clone() {
            Some(error) => Err(error),
            None => Ok(()),
        }
    }
}

#[async_trait]
impl UserDirectory for InMemoryUserDirectory {
    async fn find_by_email(&self, email: &str) -> Result<Option<User>, AuthError> {
        self.check_forced_error().await?;
        let users = self.users.read().await;
        Ok(users.iter().find(|u| u.has_email(email)).cloned())
    }

    async fn find_by_id(&self, id: &UserId) -> Result<Option<User>, AuthError> {
        self.check_forced_error().await?;
        let users = self.users.read().await;
        Ok(users.iter().find(|u| &u.id == id).cloned())
    }

    async fn insert(&self, user: User) -> Result<(), AuthError> {
        self.check_forced_error().await?;
        // Check and push under one write guard.
        let mut users = self.users.write().await;
        if users.iter().any(|u| u.has_email(&user.email)) {
            return Err(AuthError::EmailAlreadyRegistered);
        }
        users.push(user);
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::foundation::{RecordDate, Role};

    fn user(id: &str, email: &str) -> User {
        User {
            id: UserId::new(id).unwrap(),
            name: "Test User".to_string(),
            email: email.to_string(),
            phone: "+91 9000000000".to_string(),
            role: Role::Teacher,
            profile_image: None,
            center_id: None,
            is_active: true,
            created_at: RecordDate::from_ymd(2024, 1, 1).unwrap(),
        }
    }

    #[tokio::test]
    async fn insert_rejects_duplicate_email_ignoring_case() {
        let directory = InMemoryUserDirectory::new().with_user(user("1", "a@x.org"));

        let result = directory.insert(user("2", "A@X.ORG")).await;

        assert_eq!(result, Err(AuthError::EmailAlreadyRegistered));
        assert_eq!(directory.user_count().await, 1);
    }

    #[tokio::test]
    async fn find_by_email_and_id() {
        let directory = InMemoryUserDirectory::new();
        directory.insert(user("7", "b@x.org")).await.unwrap();

        let by_email = directory.find_by_email("B@x.org").await.unwrap();
        let by_id = directory.find_by_id(&UserId::new("7").unwrap()).await.unwrap();

        assert_eq!(by_email, by_id);
        assert!(by_email.is_some());
        assert!(directory.find_by_email("c@x.org").await.unwrap().is_none());
    }

    #[tokio::test]
    async fn forced_error_is_returned() {
        let directory =
            InMemoryUserDirectory::new().with_error(AuthError::service_unavailable("down"));
        assert!(directory.find_by_email("a@x.org").await.is_err());
        directory.clear_error().await;
        assert!(directory.find_by_email("a@x.org").await.is_ok());
    }
}
