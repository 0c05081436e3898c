//! User types.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::AuthError;

/// Role a user logs in as.
///
/// The role only decides which menu the session shows.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Role {
    /// Store manager: maintains the catalog.
    Manager,
    /// Customer: shops and places orders.
    Customer,
}

impl Role {
    /// All roles, in login menu order.
    pub const ALL: [Role; 2] = [Role::Manager, Role::Customer];

    /// Get role as string.
    pub fn as_str(&self) -> &'static str {
        match self {
            Role::Manager => "manager",
            Role::Customer => "customer",
        }
    }

    /// Human-readable name.
    pub fn display_name(&self) -> &'static str {
        match self {
            Role::Manager => "Manager",
            Role::Customer => "Customer",
        }
    }

    /// Number of this role in the login menu (1-based).
    pub fn menu_number(&self) -> u32 {
        match self {
            Role::Manager => 1,
            Role::Customer => 2,
        }
    }

    /// Role for a login menu number.
    pub fn from_menu_number(choice: u32) -> Option<Self> {
        Self::ALL.into_iter().find(|role| role.menu_number() == choice)
    }
}

impl fmt::Display for Role {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for Role {
    type Err = AuthError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "manager" => Ok(Role::Manager),
            "customer" => Ok(Role::Customer),
            other => Err(AuthError::UnknownRole(other.to_string())),
        }
    }
}

/// A user who has logged in.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Principal {
    /// Login name.
    pub username: String,
    /// Role the user logged in as.
    pub role: Role,
}

impl Principal {
    pub fn new(username: impl Into<String>, role: Role) -> Self {
        Self {
            username: username.into(),
            role,
        }
    }

    pub fn is_manager(&self) -> bool {
        self.role == Role::Manager
    }
}
