//! Session model — the explicit authenticated-session object.
//!
//! Instead of an ambient credential store, a [`Session`] is produced
//! by login, passed by reference into every gateway call that needs
//! it, and simply dropped on logout.

use serde::{Deserialize, Serialize};

use crate::models::user::{AuthResponse, Role, User};

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Session {
    /// Opaque bearer token forwarded on every outgoing request.
    pub token: String,
    pub user: User,
}

impl Session {
    pub fn new(token: String, user: User) -> Self {
        Self { token, user }
    }

    /// Admin inventory operations are open to both `ADMIN` and
    /// `MANAGER` roles.
    pub fn is_admin(&self) -> bool {
        matches!(self.user.role, Role::Admin | Role::Manager)
    }
}

impl From<AuthResponse> for Session {
    fn from(resp: AuthResponse) -> Self {
        Session::new(resp.token, resp.user)
    }
}
