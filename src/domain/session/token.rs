use secrecy::{ExposeSecret, SecretString};

use crate::domain::foundation::Timestamp;

/// A signed bearer token proving a past successful login.
#[derive(Debug, Clone)]
pub struct SessionToken {
    value: SecretString,
    expires_at: Timestamp,
}

impl SessionToken {
    pub fn new(value: impl Into<String>, expires_at: Timestamp) -> Self {
        Self {
            value: SecretString::new(value.into()),
            expires_at,
        }
    }

    /// The encoded token, for handing to a client.
    pub fn expose(&self) -> &str {
        self.value.expose_secret()
    }

    pub fn expires_at(&self) -> Timestamp {
        self.expires_at
    }

    pub fn is_expired_at(&self, now: Timestamp) -> bool {
        !now.is_before(&self.expires_at)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn debug_output_hides_value() {
        let token = SessionToken::new("abc.def.ghi", Timestamp::now());
        assert!(!format!("{:?}", token).contains("abc.def.ghi"));
        assert_eq!(token.expose(), "abc.def.ghi");
    }

    #[test]
    fn expiry_is_inclusive() {
        let expires = Timestamp::from_unix_secs(1_000).unwrap();
        let token = SessionToken::new("t", expires);
        assert!(!token.is_expired_at(Timestamp::from_unix_secs(999).unwrap()));
        assert!(token.is_expired_at(expires));
    }
}
