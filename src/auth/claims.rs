//! Unverified JWT claims decoding.
//!
//! The client trusts transport security and decodes the payload segment
//! without checking the signature; the backend is the only verifier.
//! Decoding is a pure parse-or-`None` operation and never panics or
//! propagates an error past this boundary: a malformed token simply means
//! "no claims", which callers treat as an invalid session.

use base64::engine::general_purpose::URL_SAFE_NO_PAD;
use base64::Engine;
use serde::Deserialize;

/// Claims the console reads from the token payload.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct TokenClaims {
    #[serde(default)]
    pub email: String,
    /// The `sub` claim carries the account holder's display name
    #[serde(default, rename = "sub")]
    pub full_name: String,
    /// Expiry as Unix seconds, absent on tokens without a lifetime
    #[serde(default)]
    pub exp: Option<i64>,
}

impl TokenClaims {
    /// Whether the token is past its expiry at `now_secs` (Unix seconds).
    /// Tokens without an `exp` claim never expire.
    pub fn is_expired(&self, now_secs: i64) -> bool {
        match self.exp {
            Some(exp) => now_secs >= exp,
            None => false,
        }
    }
}

/// Decode the payload segment of a JWT without verifying the signature.
///
/// Returns `None` for anything that is not three dot-separated segments
/// with a base64url JSON object in the middle.
pub fn decode_claims(token: &str) -> Option<TokenClaims> {
    let mut segments = token.split('.');
    let payload = match (segments.next(), segments.next(), segments.next(), segments.next()) {
        (Some(_header), Some(payload), Some(_signature), None) => payload,
        _ => return None,
    };
    let bytes = URL_SAFE_NO_PAD.decode(payload).ok()?;
    serde_json::from_slice(&bytes).ok()
}

/// Whether a token is currently valid: decodes successfully and, if it
/// carries an `exp` claim, has not passed it.
pub fn token_is_valid(token: &str) -> bool {
    match decode_claims(token) {
        Some(claims) => !claims.is_expired(chrono::Utc::now().timestamp()),
        None => false,
    }
}
