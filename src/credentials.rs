// 🔐 Credential Store - toy register/login demo
//
// The store is a plain value owned by the caller; there is no process-wide map.
// Passwords are kept as salted SHA-256 digests. This is still a classroom
// demo, not an authentication system.

use crate::error::AuthError;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sha2::{Digest, Sha256};
use std::collections::HashMap;
use tracing::{info, warn};

pub const MIN_USERNAME_LEN: usize = 3;
pub const MIN_PASSWORD_LEN: usize = 6;

// ============================================================================
// CREDENTIAL
// ============================================================================

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Credential {
    /// Stable identity (UUID)
    pub id: String,

    pub username: String,

    /// Per-user random salt mixed into the digest
    salt: String,

    /// SHA-256(salt + password), hex encoded
    password_hash: String,

    pub registered_at: DateTime<Utc>,
}

impl Credential {
    fn new(username: String, password: &str) -> Self {
        let salt = uuid::Uuid::new_v4().to_string();
        let password_hash = digest(&salt, password);

        Credential {
            id: uuid::Uuid::new_v4().to_string(),
            username,
            salt,
            password_hash,
            registered_at: Utc::now(),
        }
    }

    /// Check a candidate password against the stored digest
    pub fn verify(&self, password: &str) -> bool {
        digest(&self.salt, password) == self.password_hash
    }
}

fn digest(salt: &str, password: &str) -> String {
    let mut hasher = Sha256::new();
    hasher.update(salt.as_bytes());
    hasher.update(password.as_bytes());
    format!("{:x}", hasher.finalize())
}

// ============================================================================
// CREDENTIAL STORE
// ============================================================================

#[derive(Debug, Default)]
pub struct CredentialStore {
    users: HashMap<String, Credential>,
}

impl CredentialStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Store pre-seeded with the three demo accounts
    pub fn with_demo_users() -> Self {
        let mut store = Self::new();
        for (username, password) in DEMO_USERS {
            if let Err(e) = store.register(username, password, password) {
                warn!(username, error = %e, "demo user rejected");
            }
        }
        store
    }

    /// Register a new user.
    ///
    /// Rules are checked in order: duplicate username, username length,
    /// password length, confirmation match.
    pub fn register(
        &mut self,
        username: &str,
        password: &str,
        confirm: &str,
    ) -> Result<&Credential, AuthError> {
        self.check_username(username)?;
        check_password(password).map_err(|e| reject(username, e))?;
        if password != confirm {
            return Err(reject(username, AuthError::PasswordMismatch));
        }

        let credential = Credential::new(username.to_string(), password);
        info!(username, id = %credential.id, "user registered");

        let stored = self.users.entry(username.to_string()).or_insert(credential);
        Ok(&*stored)
    }

    /// Username rules on their own: not taken, long enough.
    /// Lets a session stop before asking for a password.
    pub fn check_username(&self, username: &str) -> Result<(), AuthError> {
        if self.users.contains_key(username) {
            return Err(reject(username, AuthError::DuplicateUsername));
        }
        if username.chars().count() < MIN_USERNAME_LEN {
            return Err(reject(username, AuthError::UsernameTooShort { min: MIN_USERNAME_LEN }));
        }
        Ok(())
    }

    /// Authenticate an existing user
    pub fn login(&self, username: &str, password: &str) -> Result<&Credential, AuthError> {
        let credential = self
            .users
            .get(username)
            .ok_or_else(|| reject(username, AuthError::UnknownUsername))?;

        if !credential.verify(password) {
            return Err(reject(username, AuthError::WrongPassword));
        }

        info!(username, "login succeeded");
        Ok(credential)
    }

    pub fn contains(&self, username: &str) -> bool {
        self.users.contains_key(username)
    }

    /// Registered usernames, sorted
    pub fn usernames(&self) -> Vec<&str> {
        let mut names: Vec<&str> = self.users.keys().map(String::as_str).collect();
        names.sort_unstable();
        names
    }

    pub fn len(&self) -> usize {
        self.users.len()
    }

    pub fn is_empty(&self) -> bool {
        self.users.is_empty()
    }
}

/// Password length rule
pub fn check_password(password: &str) -> Result<(), AuthError> {
    if password.chars().count() < MIN_PASSWORD_LEN {
        return Err(AuthError::PasswordTooShort { min: MIN_PASSWORD_LEN });
    }
    Ok(())
}

fn reject(username: &str, error: AuthError) -> AuthError {
    warn!(username, code = error.kind().as_str(), %error, "credential check failed");
    error
}

pub const DEMO_USERS: [(&str, &str); 3] = [
    ("john_doe", "password123"),
    ("jane_smith", "secure456"),
    ("admin", "admin123"),
];

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_register_and_login() {
        let mut store = CredentialStore::new();

        let id = store.register("alice", "secret1", "secret1").unwrap().id.clone();
        assert!(!id.is_empty());

        let credential = store.login("alice", "secret1").unwrap();
        assert_eq!(credential.username, "alice");
        assert_eq!(credential.id, id);

        assert_eq!(store.login("alice", "wrong").unwrap_err(), AuthError::WrongPassword);
    }

    #[test]
    fn test_short_username_rejected() {
        let mut store = CredentialStore::new();
        let err = store.register("ab", "secret1", "secret1").unwrap_err();
        assert_eq!(err, AuthError::UsernameTooShort { min: 3 });
        assert!(store.is_empty());
    }

    #[test]
    fn test_short_password_rejected() {
        let mut store = CredentialStore::new();
        let err = store.register("alice", "12345", "12345").unwrap_err();
        assert_eq!(err, AuthError::PasswordTooShort { min: 6 });
    }

    #[test]
    fn test_mismatch_rejected() {
        let mut store = CredentialStore::new();
        let err = store.register("alice", "secret1", "secret2").unwrap_err();
        assert_eq!(err, AuthError::PasswordMismatch);
        assert!(!store.contains("alice"));
    }

    #[test]
    fn test_duplicate_checked_first() {
        let mut store = CredentialStore::new();
        store.register("alice", "secret1", "secret1").unwrap();

        // Even with an invalid password the duplicate wins
        let err = store.register("alice", "x", "y").unwrap_err();
        assert_eq!(err, AuthError::DuplicateUsername);
        assert_eq!(store.len(), 1);
    }

    #[test]
    fn test_unknown_username() {
        let store = CredentialStore::new();
        assert_eq!(store.login("bob", "secret1").unwrap_err(), AuthError::UnknownUsername);
    }

    #[test]
    fn test_length_counts_characters() {
        let mut store = CredentialStore::new();
        // 3 characters, 6 bytes
        assert!(store.register("äöü", "pässwörd", "pässwörd").is_ok());
    }

    #[test]
    fn test_password_not_stored_in_plaintext() {
        let mut store = CredentialStore::new();
        let credential = store.register("alice", "secret1", "secret1").unwrap();
        assert_ne!(credential.password_hash, "secret1");
        assert_eq!(credential.password_hash.len(), 64);
    }

    #[test]
    fn test_same_password_different_digest() {
        let mut store = CredentialStore::new();
        let a = store.register("alice", "secret1", "secret1").unwrap().password_hash.clone();
        let b = store.register("bobby", "secret1", "secret1").unwrap().password_hash.clone();
        assert_ne!(a, b);
    }

    #[test]
    fn test_check_username_before_password() {
        let mut store = CredentialStore::new();
        store.register("alice", "secret1", "secret1").unwrap();

        assert_eq!(store.check_username("alice"), Err(AuthError::DuplicateUsername));
        assert_eq!(store.check_username("al"), Err(AuthError::UsernameTooShort { min: 3 }));
        assert!(store.check_username("carol").is_ok());
        assert!(check_password("12345").is_err());
        assert!(check_password("123456").is_ok());
    }

    #[test]
    fn test_demo_users() {
        let store = CredentialStore::with_demo_users();
        assert_eq!(store.usernames(), vec!["admin", "jane_smith", "john_doe"]);
        assert!(store.login("john_doe", "password123").is_ok());
        assert!(store.login("john_doe", "wrongpass").is_err());
    }
}
