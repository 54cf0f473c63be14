//! Role -> secret digests, built once at startup.

use crate::config::Config;
use crate::models::Role;
use sha2::{Digest, Sha256};
use std::collections::HashMap;
use std::fmt;
use tracing::warn;

/// Lower-case hex SHA-256 of the UTF-8 secret.
pub fn digest(secret: &str) -> String {
    let mut hasher = Sha256::new();
    hasher.update(secret.as_bytes());
    hex::encode(hasher.finalize())
}

pub struct CredentialStore {
    digests: HashMap<Role, String>,
}

impl CredentialStore {
    /// Digest every secret; the plaintext is dropped on return.
    pub fn from_secrets<I>(secrets: I) -> Self
    where
        I: IntoIterator<Item = (Role, String)>,
    {
        let digests = secrets
            .into_iter()
            .map(|(role, secret)| (role, digest(&secret)))
            .collect();
        Self { digests }
    }

    pub fn from_config(cfg: &Config) -> Self {
        let configured = [
            (Role::Admin, cfg.admin_secret.clone()),
            (Role::Employee, cfg.employee_secret.clone()),
        ];

        let mut secrets = Vec::new();
        for (role, secret) in configured {
            match secret {
                Some(s) if !s.is_empty() => secrets.push((role, s)),
                _ => warn!(%role, "no secret configured, this role cannot log in"),
            }
        }
        Self::from_secrets(secrets)
    }

    pub fn has_role(&self, role: Role) -> bool {
        self.digests.contains_key(&role)
    }

    /// True only for a known role whose stored digest matches.
    pub fn verify(&self, role_candidate: &str, secret_candidate: &str) -> bool {
        Role::from_name(role_candidate)
            .and_then(|role| self.digests.get(&role))
            .is_some_and(|stored| *stored == digest(secret_candidate))
    }
}

impl fmt::Debug for CredentialStore {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut roles: Vec<&Role> = self.digests.keys().collect();
        roles.sort();
        f.debug_struct("CredentialStore")
            .field("roles", &roles)
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn digest_is_sha256_hex() {
        assert_eq!(
            digest(""),
            "e3b0c44298fc1c149afbf4c8996fb92427ae41e4649b934ca495991b7852b855"
        );
    }

    #[test]
    fn debug_never_shows_digests() {
        let store = CredentialStore::from_secrets([(Role::Admin, "letmein".to_string())]);
        let s = format!("{store:?}");
        assert!(s.contains("Admin"));
        assert!(!s.contains(&digest("letmein")));
    }

    #[test]
    fn blank_config_secret_means_no_role() {
        let cfg = Config {
            admin_secret: Some(String::new()),
            employee_secret: Some("employee123".into()),
            ..Config::default()
        };
        let store = CredentialStore::from_config(&cfg);
        assert!(!store.has_role(Role::Admin));
        assert!(store.has_role(Role::Employee));
        assert!(!store.verify("admin", ""));
    }
}
