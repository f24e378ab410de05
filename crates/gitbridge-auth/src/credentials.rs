//! The transient identity pair forwarded to the downstream application.

/// Unauthenticated credentials attached to a request by the bridging filter.
///
/// This is the typed rendition of the `gerrit-username` /
/// `gerrit-password` / `gerrit-token` request attributes the host systems
/// exchange. It lives for one request: created by the filter, read once by
/// the downstream authentication call, dropped with the request.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ForwardedCredentials {
    /// A decoded HTTP Basic pair, not yet validated.
    Password {
        /// Identifier ahead of the first colon.
        username: String,
        /// Everything after the first colon; may be empty.
        password: String,
    },
    /// Identity of a caller with an established web session.
    SessionToken {
        /// Username recorded on the session.
        username: String,
        /// Opaque session identifier.
        token: String,
    },
}

impl ForwardedCredentials {
    /// Identifier this pair claims, regardless of which secret backs it.
    #[must_use]
    pub fn username(&self) -> &str {
        match self {
            Self::Password { username, .. } | Self::SessionToken { username, .. } => username,
        }
    }
}
