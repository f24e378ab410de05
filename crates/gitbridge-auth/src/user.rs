//! Identity resolution against the downstream authenticator.

use anyhow::Result;
use async_trait::async_trait;
use axum::http::Extensions;

use crate::constants::SESSION_AUTH_PREFIX;
use crate::credentials::ForwardedCredentials;

/// Minimal user record the bridge needs from the downstream store.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UserAccount {
    /// Canonical username in the downstream store.
    pub username: String,
    /// Human-readable name, when the store has one.
    pub display_name: Option<String>,
}

/// Seam to the downstream credential validator.
///
/// The secret is either a password, forwarded verbatim, or a session token
/// carrying the [`SESSION_AUTH_PREFIX`] sentinel. `Ok(None)` is
/// absence-of-user; `Err` is a fault in the validator itself.
#[async_trait]
pub trait Authenticator: Send + Sync {
    /// Validate the pair and return the matching account, if any.
    ///
    /// # Errors
    ///
    /// Returns an error only when the validator itself fails; a pair that
    /// matches no user is `Ok(None)`.
    async fn authenticate(&self, username: &str, secret: &str) -> Result<Option<UserAccount>>;
}

/// Resolve the user behind a request the filter has already annotated.
///
/// Reads the [`ForwardedCredentials`] extension and delegates to the
/// authenticator: passwords go through untouched, session tokens get the
/// sentinel prefix so the downstream user service re-validates the session
/// instead of hashing a password. A request the filter passed through
/// anonymously resolves to `Ok(None)` without consulting the authenticator.
///
/// # Errors
///
/// Propagates authenticator faults unchanged.
pub async fn resolve_user(
    extensions: &Extensions,
    authenticator: &dyn Authenticator,
) -> Result<Option<UserAccount>> {
    let Some(credentials) = extensions.get::<ForwardedCredentials>() else {
        return Ok(None);
    };
    match credentials {
        ForwardedCredentials::Password { username, password } => {
            authenticator.authenticate(username, password).await
        }
        ForwardedCredentials::SessionToken { username, token } => {
            let secret = format!("{SESSION_AUTH_PREFIX}{token}");
            authenticator.authenticate(username, &secret).await
        }
    }
}
