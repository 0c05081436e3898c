//! Login support for FASH-HUB.
//!
//! Provides the two user roles and the credential check sessions use.

mod credentials;
mod error;
mod user;

pub use credentials::{Authenticator, CredentialStore};
pub use error::AuthError;
pub use user::{Principal, Role};
