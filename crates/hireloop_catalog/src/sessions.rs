// --- File: crates/hireloop_catalog/src/sessions.rs ---
use constant_time_eq::constant_time_eq;
use hireloop_common::{BoxFuture, HireloopError, SessionProvider, UserSession};
use hireloop_config::{AuthConfig, AuthUser, SECRET_MARKER};
use tracing::{debug, warn};

use crate::error::CatalogError;

/// Resolves bearer tokens against the users listed in the auth configuration.
#[derive(Debug, Clone, Default)]
pub struct StaticSessionProvider {
    users: Vec<AuthUser>,
}

impl StaticSessionProvider {
    /// Users whose token is blank or was never injected are skipped.
    pub fn from_config(config: &AuthConfig) -> Result<Self, CatalogError> {
        let mut users: Vec<AuthUser> = Vec::with_capacity(config.users.len());
        for user in &config.users {
            let token = user.token.trim();
            if token.is_empty() || token == SECRET_MARKER {
                warn!("No token configured for user '{}', skipping", user.user_ref);
                continue;
            }
            if users.iter().any(|known| known.token == token) {
                return Err(CatalogError::DuplicateToken(user.user_ref.clone()));
            }
            users.push(AuthUser {
                token: token.to_string(),
                user_ref: user.user_ref.clone(),
            });
        }
        if users.is_empty() {
            warn!("No auth users configured; booking requests will be rejected");
        }
        Ok(Self { users })
    }

    pub fn user_count(&self) -> usize {
        self.users.len()
    }

    fn lookup(&self, token: &str) -> Option<&AuthUser> {
        self.users
            .iter()
            .find(|user| constant_time_eq(user.token.as_bytes(), token.as_bytes()))
    }
}

impl SessionProvider for StaticSessionProvider {
    fn resolve_session(
        &self,
        bearer_token: Option<&str>,
    ) -> BoxFuture<'_, UserSession, HireloopError> {
        let session = match bearer_token.and_then(|token| self.lookup(token)) {
            Some(user) => {
                debug!("Resolved session for user '{}'", user.user_ref);
                UserSession::authenticated(user.user_ref.clone())
            }
            None => {
                if bearer_token.is_some() {
                    debug!("Unknown bearer token, treating caller as anonymous");
                }
                UserSession::anonymous()
            }
        };
        Box::pin(async move { Ok(session) })
    }
}
