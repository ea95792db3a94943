//! Current user lookup

use shared::models::User;

/// Provides the identity labels are rendered for
pub trait IdentityProvider: Send + Sync {
    /// Current user, `None` for anonymous access
    fn current_identity(&self) -> Option<User>;
}

/// Fixed identity, resolved once at startup
#[derive(Debug, Clone, Default)]
pub struct StaticIdentity {
    user: Option<User>,
}

impl StaticIdentity {
    pub fn new(user: User) -> Self {
        Self { user: Some(user) }
    }

    pub fn anonymous() -> Self {
        Self { user: None }
    }

    /// Identity from an optional username (e.g. an environment variable)
    pub fn from_username(username: Option<&str>) -> Self {
        match username.map(str::trim) {
            Some(name) if !name.is_empty() => Self::new(User::new(name)),
            _ => Self::anonymous(),
        }
    }
}

impl IdentityProvider for StaticIdentity {
    fn current_identity(&self) -> Option<User> {
        self.user.clone()
    }
}
