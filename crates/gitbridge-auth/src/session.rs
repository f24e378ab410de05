//! Seam to the host application's web-session store.

use async_trait::async_trait;
use axum::http::HeaderMap;

/// Identity recorded on an established, signed-in web session.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ActiveSession {
    /// Username of the signed-in caller.
    pub username: String,
    /// Opaque session identifier the host hands out.
    pub session_id: String,
}

/// Resolves the caller's web session, if any.
///
/// The bridge owns no session lifecycle; the host application implements
/// this against its real session store (typically keyed off a cookie in the
/// request headers). `None` means the caller is not signed in.
#[async_trait]
pub trait SessionSource: Send + Sync {
    /// Session for the request at hand, or `None` when anonymous.
    async fn current(&self, headers: &HeaderMap) -> Option<ActiveSession>;
}
