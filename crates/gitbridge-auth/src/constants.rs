//! Shared literals (scheme prefix, realm, forwarded attribute names, problem URIs).

/// Scheme prefix a Basic `Authorization` header must carry, space included.
/// The match is case-sensitive.
pub const BASIC_SCHEME_PREFIX: &str = "Basic ";

/// Realm announced in the Basic challenge.
pub const BASIC_REALM: &str = "Gerrit Code Review";

/// Exact `WWW-Authenticate` value returned on rejected credentials.
pub const BASIC_CHALLENGE: &str = "Basic realm=\"Gerrit Code Review\"";

/// Sentinel the downstream user service expects in front of a session token
/// so it can tell session re-validation apart from a password check.
pub const SESSION_AUTH_PREFIX: &str = "sessionauth:";

/// Attribute name the host systems use for the forwarded username.
pub const ATTR_USERNAME: &str = "gerrit-username";
/// Attribute name the host systems use for the forwarded password.
pub const ATTR_PASSWORD: &str = "gerrit-password";
/// Attribute name the host systems use for the forwarded session token.
pub const ATTR_TOKEN: &str = "gerrit-token";

/// Problem type for rejected credentials.
pub const PROBLEM_UNAUTHORIZED: &str = "https://gitbridge.dev/problems/unauthorized";
/// Problem type for internal faults.
pub const PROBLEM_INTERNAL: &str = "https://gitbridge.dev/problems/internal";
