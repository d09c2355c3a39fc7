use async_trait::async_trait;

use crate::domain::foundation::{AuthError, UserId};
use crate::domain::records::User;

/// Staff account lookup and registration.
///
/// # Contract
///
/// - `find_by_email` matches case-insensitively
/// - `insert` fails with `AuthError::EmailAlreadyRegistered` when another
///   account already uses the email, and stores nothing in that case
/// - Transient failures surface as `AuthError::ServiceUnavailable`
#[async_trait]
pub trait UserDirectory: Send + Sync {
    async fn find_by_email(&self, email: &str) -> Result<Option<User>, AuthError>;

    async fn find_by_id(&self, id: &UserId) -> Result<Option<User>, AuthError>;

    async fn insert(&self, user: User) -> Result<(), AuthError>;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn user_directory_is_object_safe_and_send_sync() {
        fn _assert_trait_object(_: &dyn UserDirectory) {}
        fn _assert_send_sync<T: Send + Sync + ?Sized>() {}
        _assert_send_sync::<std::sync::Arc<dyn UserDirectory>>();
    }
}
