//! Salted password digests shared by the identity verifiers.

use hmac::{Hmac, Mac};
use secrecy::{ExposeSecret, SecretString};
use serde::{Deserialize, Serialize};
use sha2::Sha256;
use subtle::ConstantTimeEq;
use uuid::Uuid;

use crate::domain::foundation::AuthError;

type HmacSha256 = Hmac<Sha256>;

/// A random per-account salt plus HMAC-SHA256(salt, password).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub(crate) struct Credential {
    salt: Vec<u8>,
    digest: Vec<u8>,
}

impl Credential {
    pub(crate) fn derive(password: &SecretString) -> Result<Self, AuthError> {
        let salt = Uuid::new_v4().into_bytes().to_vec();
        let digest = digest(&salt, password)?;
        Ok(Self { salt, digest })
    }

    /// Constant-time comparison against a candidate password.
    pub(crate) fn matches(&self, password: &SecretString) -> Result<bool, AuthError> {
        let candidate = digest(&self.salt, password)?;
        Ok(candidate.as_slice().ct_eq(self.digest.as_slice()).unwrap_u8() == 1)
    }
}

fn digest(salt: &[u8], password: &SecretString) -> Result<Vec<u8>, AuthError> {
    let mut mac = HmacSha256::new_from_slice(salt)
        .map_err(|e| AuthError::service_unavailable(format!("HMAC key rejected: {}", e)))?;
    mac.update(password.expose_secret().as_bytes());
    Ok(mac.finalize().into_bytes().to_vec())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn secret(s: &str) -> SecretString {
        SecretString::new(s.to_string())
    }

    #[test]
    fn matches_only_the_registered_password() {
        let credential = Credential::derive(&secret("password123")).unwrap();
        assert!(credential.matches(&secret("password123")).unwrap());
        assert!(!credential.matches(&secret("password124")).unwrap());
    }

    #[test]
    fn same_password_gets_different_salt_and_digest() {
        let a = Credential::derive(&secret("password123")).unwrap();
        let b = Credential::derive(&secret("password123")).unwrap();
        assert_ne!(a.salt, b.salt);
        assert_ne!(a.digest, b.digest);
    }

    #[test]
    fn survives_a_json_round_trip() {
        let credential = Credential::derive(&secret("abcdef")).unwrap();
        let json = serde_json::to_value(&credential).unwrap();
        let back: Credential = serde_json::from_value(json).unwrap();
        assert!(back.matches(&secret("abcdef")).unwrap());
        assert!(!format!("{:?}", back).contains("abcdef"));
    }
}
