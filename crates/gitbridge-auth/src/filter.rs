//! The bridging middleware: three branches, two of which annotate the request.

use std::sync::Arc;

use axum::{
    extract::State,
    http::{HeaderValue, Request, header::AUTHORIZATION},
    middleware::Next,
    response::Response,
};
use base64::{Engine as _, engine::general_purpose};
use tracing::{debug, warn};

use crate::constants::BASIC_SCHEME_PREFIX;
use crate::credentials::ForwardedCredentials;
use crate::error::AuthError;
use crate::session::SessionSource;

/// Shared dependencies the filter needs from the embedding host.
#[derive(Clone)]
pub struct BridgeState {
    /// The host's web-session store.
    pub sessions: Arc<dyn SessionSource>,
}

impl BridgeState {
    /// Wire the filter to the host's session store.
    #[must_use]
    pub fn new(sessions: Arc<dyn SessionSource>) -> Self {
        Self { sessions }
    }
}

/// Bridge the caller's identity into the request.
///
/// With an `Authorization` header the request must carry HTTP Basic
/// credentials; they are decoded and attached as
/// [`ForwardedCredentials::Password`]. Without one, a signed-in web session
/// is attached as [`ForwardedCredentials::SessionToken`]. Neither means the
/// request proceeds anonymously, untouched.
///
/// # Errors
///
/// [`AuthError::unauthorized`] when the header uses another scheme or the
/// decoded payload has no usable `username:secret` split. Both responses
/// carry the Basic challenge so clients can retry with credentials.
pub async fn bridge_auth(
    State(state): State<Arc<BridgeState>>,
    mut req: Request<axum::body::Body>,
    next: Next,
) -> Result<Response, AuthError> {
    if let Some(value) = req.headers().get(AUTHORIZATION).cloned() {
        let credentials = match decode_basic(&value) {
            Ok(credentials) => credentials,
            Err(err) => {
                warn!(
                    status = err.status().as_u16(),
                    "rejected authorization header"
                );
                return Err(err);
            }
        };
        debug!(username = credentials.username(), "forwarding basic credentials");
        req.extensions_mut().insert(credentials);
        return Ok(next.run(req).await);
    }

    if let Some(session) = state.sessions.current(req.headers()).await {
        debug!(username = %session.username, "forwarding session identity");
        req.extensions_mut().insert(ForwardedCredentials::SessionToken {
            username: session.username,
            token: session.session_id,
        });
        return Ok(next.run(req).await);
    }

    debug!("no credentials presented; proceeding anonymously");
    Ok(next.run(req).await)
}

/// Decode a Basic `Authorization` header into the forwarded pair.
///
/// The split position must be at least one: a leading colon would forward an
/// empty username. An empty password is fine.
fn decode_basic(value: &HeaderValue) -> Result<ForwardedCredentials, AuthError> {
    let header = value
        .to_str()
        .map_err(|_| AuthError::unauthorized("authorization header is not visible ASCII"))?;
    let Some(payload) = header.strip_prefix(BASIC_SCHEME_PREFIX) else {
        return Err(AuthError::unauthorized(
            "authorization scheme must be Basic",
        ));
    };
    let decoded = general_purpose::STANDARD
        .decode(payload)
        .map_err(|_| AuthError::unauthorized("credentials must be base64 encoded"))?;
    let pair = String::from_utf8(decoded)
        .map_err(|_| AuthError::unauthorized("credentials must decode to UTF-8"))?;

    match pair.find(':') {
        Some(split) if split >= 1 => Ok(ForwardedCredentials::Password {
            username: pair[..split].to_string(),
            password: pair[split + 1..].to_string(),
        }),
        _ => Err(AuthError::unauthorized(
            "credentials must be username:password",
        )),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::http::StatusCode;

    fn basic(pair: &[u8]) -> HeaderValue {
        let encoded = format!("Basic {}", general_purpose::STANDARD.encode(pair));
        HeaderValue::from_str(&encoded).expect("header value")
    }

    #[test]
    fn decodes_a_well_formed_pair() {
        let credentials = decode_basic(&basic(b"alice:secret")).expect("credentials");
        assert_eq!(
            credentials,
            ForwardedCredentials::Password {
                username: "alice".to_string(),
                password: "secret".to_string(),
            }
        );
    }

    #[test]
    fn splits_on_the_first_colon_only() {
        let credentials = decode_basic(&basic(b"alice:se:cret")).expect("credentials");
        assert_eq!(
            credentials,
            ForwardedCredentials::Password {
                username: "alice".to_string(),
                password: "se:cret".to_string(),
            }
        );
    }

    #[test]
    fn accepts_an_empty_password() {
        let credentials = decode_basic(&basic(b"alice:")).expect("credentials");
        assert_eq!(
            credentials,
            ForwardedCredentials::Password {
                username: "alice".to_string(),
                password: String::new(),
            }
        );
    }

    #[test]
    fn rejects_other_schemes() {
        let err = decode_basic(&HeaderValue::from_static("Digest nope")).unwrap_err();
        assert_eq!(err.status(), StatusCode::UNAUTHORIZED);
    }

    #[test]
    fn scheme_match_is_case_sensitive() {
        let err = decode_basic(&HeaderValue::from_static("basic YWxpY2U6c2VjcmV0")).unwrap_err();
        assert_eq!(err.status(), StatusCode::UNAUTHORIZED);
    }

    #[test]
    fn rejects_a_leading_colon() {
        let err = decode_basic(&basic(b":nopass")).unwrap_err();
        assert_eq!(err.status(), StatusCode::UNAUTHORIZED);
    }

    #[test]
    fn rejects_a_pair_without_separator() {
        let err = decode_basic(&basic(b"nocolon")).unwrap_err();
        assert_eq!(err.status(), StatusCode::UNAUTHORIZED);
    }

    #[test]
    fn rejects_undecodable_base64() {
        let err = decode_basic(&HeaderValue::from_static("Basic !!!not-base64!!!")).unwrap_err();
        assert_eq!(err.status(), StatusCode::UNAUTHORIZED);
    }

    #[test]
    fn rejects_non_utf8_payloads() {
        // base64 of the bytes `a : 0xFF`
        let err = decode_basic(&HeaderValue::from_static("Basic YTr/")).unwrap_err();
        assert_eq!(err.status(), StatusCode::UNAUTHORIZED);
    }
}
