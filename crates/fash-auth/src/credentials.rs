//! Credential checking.
//!
//! Sessions depend on the [`Authenticator`] trait only. [`CredentialStore`]
//! is the in-memory implementation fed from the configuration file. It keeps
//! passwords in plaintext: this is a simulator login, not a security boundary.

use std::collections::HashMap;

use tracing::{info, warn};

use crate::{AuthError, Principal, Role};

/// Checks a login attempt.
pub trait Authenticator {
    /// Return true if `username` may log in as `role` with `password`.
    fn verify(&self, role: Role, username: &str, password: &str) -> bool;

    /// Verify and produce the logged-in principal.
    fn authenticate(
        &self,
        role: Role,
        username: &str,
        password: &str,
    ) -> Result<Principal, AuthError> {
        if self.verify(role, username, password) {
            info!(%role, username, "Login successful");
            Ok(Principal::new(username, role))
        } else {
            warn!(%role, username, "Login rejected");
            Err(AuthError::InvalidCredentials)
        }
    }
}

/// Accounts keyed by role and username.
#[derive(Debug, Clone, Default)]
pub struct CredentialStore {
    accounts: HashMap<(Role, String), String>,
}

impl CredentialStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register an account.
    ///
    /// The same username may exist once per role.
    pub fn add_account(
        &mut self,
        role: Role,
        username: impl Into<String>,
        password: impl Into<String>,
    ) -> Result<(), AuthError> {
        let username = username.into();
        let password = password.into();
        if username.trim().is_empty() {
            return Err(AuthError::EmptyField("username"));
        }
        if password.is_empty() {
            return Err(AuthError::EmptyField("password"));
        }

        let key = (role, username);
        if self.accounts.contains_key(&key) {
            return Err(AuthError::DuplicateAccount {
                role: role.to_string(),
                username: key.1,
            });
        }
        self.accounts.insert(key, password);
        Ok(())
    }

    /// Builder-style variant of [`CredentialStore::add_account`].
    pub fn with_account(
        mut self,
        role: Role,
        username: impl Into<String>,
        password: impl Into<String>,
    ) -> Result<Self, AuthError> {
        self.add_account(role, username, password)?;
        Ok(self)
    }

    pub fn len(&self) -> usize {
        self.accounts.len()
    }

    pub fn is_empty(&self) -> bool {
        self.accounts.is_empty()
    }

    /// Number of accounts registered for a role.
    pub fn count_for(&self, role: Role) -> usize {
        self.accounts.keys().filter(|(r, _)| *r == role).count()
    }
}

impl Authenticator for CredentialStore {
    fn verify(&self, role: Role, username: &str, password: &str) -> bool {
        self.accounts
            .get(&(role, username.to_string()))
            .map(|stored| constant_time_compare(stored.as_bytes(), password.as_bytes()))
            .unwrap_or(false)
    }
}

/// Constant-time comparison to prevent timing attacks.
fn constant_time_compare(a: &[u8], b: &[u8]) -> bool {
    if a.len() != b.len() {
        return false;
    }

    let mut result = 0u8;
    for (x, y) in a.iter().zip(b.iter()) {
        result |= x ^ y;
    }
    result == 0
}
