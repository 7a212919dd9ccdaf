//! Bearer-token request middleware.
//!
//! Every outbound request except the literal login endpoint gets the
//! persisted token attached as a bearer credential. Requests without a
//! token pass through unmodified: authorization is enforced server-side,
//! the client only adds convenience.

use std::sync::Arc;

use reqwest::RequestBuilder;

use crate::auth::session::SessionManager;

/// Login endpoint path, excluded from token attachment.
pub const LOGIN_ENDPOINT: &str = "/accounts/login";

/// Attaches `Authorization: Bearer <token>` to outbound requests.
#[derive(Clone)]
pub struct RequestAuthenticator {
    session: Arc<SessionManager>,
}

impl RequestAuthenticator {
    pub fn new(session: Arc<SessionManager>) -> Self {
        Self { session }
    }

    /// Apply the bearer credential to a request for `path`.
    ///
    /// The login endpoint and token-less sessions pass through untouched.
    pub fn apply(&self, path: &str, request: RequestBuilder) -> RequestBuilder {
        if path.contains(LOGIN_ENDPOINT) {
            return request;
        }
        match self.session.get_token() {
            Some(token) => request.bearer_auth(token),
            None => request,
        }
    }
}
