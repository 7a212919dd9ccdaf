//! Session and authentication.
//!
//! The canonical session state is one persisted token; everything else
//! (logged-in flag, user claims) is derived from it on read, so there is no
//! cached boolean that can drift out of sync.
//!
//! - [`token_store`] - persistence surface for the token
//! - [`claims`] - unverified, non-throwing JWT payload decoding
//! - [`session`] - the `SessionManager` owning the lifecycle
//! - [`guard`] - route admission policies
//! - [`authenticator`] - bearer-token request middleware

pub mod authenticator;
pub mod claims;
pub mod guard;
pub mod session;
pub mod token_store;

pub use authenticator::RequestAuthenticator;
pub use claims::{decode_claims, token_is_valid, TokenClaims};
pub use guard::{AuthenticatedOnly, GuardDecision, PublicOnly, RouteGuard};
pub use session::SessionManager;
pub use token_store::{FileTokenStore, MemoryTokenStore, TokenStore};
