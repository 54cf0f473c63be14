//! Decides which view a caller gets.

use crate::core::credentials::CredentialStore;
use crate::errors::{AppError, AppResult};
use crate::models::{Role, Session};
use tracing::{info, warn};

pub struct RoleGate<'a> {
    store: &'a CredentialStore,
}

impl<'a> RoleGate<'a> {
    pub fn new(store: &'a CredentialStore) -> Self {
        Self { store }
    }

    /// Unknown role and wrong secret fail the same way.
    pub fn login(&self, user: &str, secret: &str) -> AppResult<Session> {
        match Role::from_name(user) {
            Some(role) if self.store.verify(user, secret) => {
                info!(%role, "login succeeded");
                Ok(Session {
                    role,
                    authenticated: true,
                })
            }
            Some(role) if !self.store.has_role(role) => {
                warn!(%role, "login rejected, no secret configured for this role");
                Err(AppError::Auth)
            }
            _ => {
                warn!("login rejected");
                Err(AppError::Auth)
            }
        }
    }
}

impl Session {
    pub fn require(&self, role: Role) -> AppResult<()> {
        if self.authenticated && self.role == role {
            Ok(())
        } else {
            Err(AppError::Auth)
        }
    }
}
