//! Hand-rolled fakes for the bridge's two seams.

use std::collections::HashMap;
use std::sync::Mutex;
use std::sync::atomic::{AtomicUsize, Ordering};

use anyhow::{Result, bail};
use async_trait::async_trait;
use axum::http::HeaderMap;
use gitbridge_auth::{ActiveSession, Authenticator, SessionSource, UserAccount};

/// Session store answering every lookup with the same fixed session.
#[derive(Debug)]
pub struct MockSessions {
    session: Option<ActiveSession>,
    lookups: AtomicUsize,
}

impl MockSessions {
    /// Store with one signed-in caller.
    #[must_use]
    pub fn signed_in(username: &str, session_id: &str) -> Self {
        Self {
            session: Some(ActiveSession {
                username: username.to_string(),
                session_id: session_id.to_string(),
            }),
            lookups: AtomicUsize::new(0),
        }
    }

    /// Store where nobody is signed in.
    #[must_use]
    pub const fn signed_out() -> Self {
        Self {
            session: None,
            lookups: AtomicUsize::new(0),
        }
    }

    /// Number of lookups performed so far.
    #[must_use]
    pub fn lookups(&self) -> usize {
        self.lookups.load(Ordering::Relaxed)
    }
}

#[async_trait]
impl SessionSource for MockSessions {
    async fn current(&self, _headers: &HeaderMap) -> Option<ActiveSession> {
        self.lookups.fetch_add(1, Ordering::Relaxed);
        self.session.clone()
    }
}

/// Authenticator with a scripted user table; records every pair it sees.
#[derive(Debug, Default)]
pub struct MockAuthenticator {
    users: HashMap<String, (String, UserAccount)>,
    seen: Mutex<Vec<(String, String)>>,
    fail: bool,
}

impl MockAuthenticator {
    /// Empty table: every pair resolves to absence-of-user.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Script a user reachable with the given secret.
    #[must_use]
    pub fn with_user(mut self, username: &str, secret: &str, display_name: Option<&str>) -> Self {
        self.users.insert(
            username.to_string(),
            (
                secret.to_string(),
                UserAccount {
                    username: username.to_string(),
                    display_name: display_name.map(ToString::to_string),
                },
            ),
        );
        self
    }

    /// Make every call fail, as an offline validator would.
    #[must_use]
    pub const fn failing(mut self) -> Self {
        self.fail = true;
        self
    }

    /// Every (username, secret) pair presented so far, in call order.
    ///
    /// # Panics
    ///
    /// Panics if a previous test thread poisoned the recording lock.
    #[must_use]
    pub fn secrets_seen(&self) -> Vec<(String, String)> {
        self.seen.lock().expect("recording lock").clone()
    }
}

#[async_trait]
impl Authenticator for MockAuthenticator {
    async fn authenticate(&self, username: &str, secret: &str) -> Result<Option<UserAccount>> {
        self.seen
            .lock()
            .expect("recording lock")
            .push((username.to_string(), secret.to_string()));
        if self.fail {
            bail!("authenticator offline");
        }
        Ok(self
            .users
            .get(username)
            .filter(|(expected, _)| expected == secret)
            .map(|(_, account)| account.clone()))
    }
}
