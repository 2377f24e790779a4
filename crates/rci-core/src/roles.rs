use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Dashboard a signed-in user is routed to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Role {
    Admin,
    MarketingManager,
}

impl std::fmt::Display for Role {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Role::Admin => write!(f, "Admin"),
            Role::MarketingManager => write!(f, "Marketing Manager"),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct User {
    pub name: String,
    pub email: String,
    pub roles: Vec<Role>,
}

impl User {
    #[must_use]
    pub fn has_role(&self, role: Role) -> bool {
        self.roles.contains(&role)
    }
}

/// A signed-in user together with the role they chose at login.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LoginSession {
    pub user: User,
    pub active_role: Role,
}

#[derive(Debug, Error, PartialEq, Eq)]
pub enum LoginError {
    #[error("username must be non-empty")]
    EmptyUsername,
}

/// Placeholder mailbox assigned to every signed-in user.
pub const DEMO_EMAIL: &str = "manager@precision.com";

/// Sign in as `username` with the chosen `role`.
///
/// There is no credential check: any non-blank username is accepted and the
/// user is granted both roles. The username is trimmed.
///
/// # Errors
///
/// Returns [`LoginError::EmptyUsername`] if `username` is blank.
pub fn login(username: &str, role: Role) -> Result<LoginSession, LoginError> {
    let name = username.trim();
    if name.is_empty() {
        return Err(LoginError::EmptyUsername);
    }

    tracing::info!(user = name, role = %role, "user signed in");

    Ok(LoginSession {
        user: User {
            name: name.to_string(),
            email: DEMO_EMAIL.to_string(),
            roles: vec![Role::Admin, Role::MarketingManager],
        },
        active_role: role,
    })
}
