#![forbid(unsafe_code)]
#![deny(
    warnings,
    dead_code,
    unused,
    unused_imports,
    unused_must_use,
    unreachable_pub,
    clippy::all,
    clippy::pedantic,
    clippy::nursery,
    rustdoc::broken_intra_doc_links,
    rustdoc::bare_urls,
    missing_docs
)]

//! Authentication bridge between a Gerrit host and an embedded Gitblit
//! instance.
//!
//! A caller already signed into Gerrit is recognised transparently: the
//! filter copies the session's identity into the request so the downstream
//! repository browser can resolve it. A caller presenting HTTP Basic
//! credentials has them decoded and forwarded for evaluation against
//! Gerrit's own user store. Everyone else proceeds anonymously.
//!
//! Layout: `filter.rs` (the bridging middleware), `credentials.rs` (the
//! forwarded identity pair), `session.rs` (web-session seam), `user.rs`
//! (identity resolution against the downstream authenticator),
//! `constants.rs` (header and realm literals), `error.rs` (problem
//! responses and the Basic challenge).

pub mod constants;
pub mod credentials;
pub mod error;
pub mod filter;
pub mod session;
pub mod user;

pub use constants::{ATTR_PASSWORD, ATTR_TOKEN, ATTR_USERNAME, BASIC_CHALLENGE, BASIC_REALM};
pub use credentials::ForwardedCredentials;
pub use error::AuthError;
pub use filter::{BridgeState, bridge_auth};
pub use session::{ActiveSession, SessionSource};
pub use user::{Authenticator, UserAccount, resolve_user};
