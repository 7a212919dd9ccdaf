//! Error types.
//!
//! Three disjoint families, mirroring how failures surface in the console:
//!
//! - [`AuthError`] - login failures, each variant carrying a distinct
//!   user-facing message; callers never see raw transport errors
//! - [`GatewayError`] - any failed list/create/update/delete call
//! - [`ValidationError`] - per-field form errors, fully handled locally and
//!   never sent to the server
//!
//! All error types are `Send + Sync` and safe to move across tasks.

use thiserror::Error;

/// Authentication failures, mapped from the transport layer.
///
/// The `Display` impl is the user-facing message (the console's locale is
/// pt-BR, matching the backend it talks to).
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum AuthError {
    /// HTTP 401/403 from the login endpoint
    #[error("Usuário ou senha incorretos")]
    InvalidCredentials,

    /// No response at all (DNS, refused connection, timeout)
    #[error("Erro de conexão com o servidor")]
    Connection,

    /// The server supplied an explicit message in the response body
    #[error("{0}")]
    ServerMessage(String),

    /// Anything else
    #[error("Erro ao realizar login")]
    Unknown,
}

impl AuthError {
    /// The message shown to the user.
    pub fn user_message(&self) -> String {
        self.to_string()
    }
}

/// A failed gateway call (list/create/update/delete).
#[derive(Debug, Error, Clone)]
pub enum GatewayError {
    /// The server answered with an error status.
    ///
    /// `message` is the server-supplied `message` field when present, else a
    /// generic fallback; it is always safe to show to the user.
    #[error("{message}")]
    Server {
        /// HTTP status code
        status: u16,
        /// User-displayable message
        message: String,
    },

    /// The request never reached the server.
    #[error("Erro de conexão com o servidor")]
    Connection {
        /// Transport detail, for logs only
        message: String,
    },

    /// The server answered but the body could not be decoded.
    #[error("Resposta inválida do servidor")]
    InvalidResponse {
        /// Decode detail, for logs only
        message: String,
    },
}

impl GatewayError {
    /// Create a new connection error.
    pub fn connection(message: impl Into<String>) -> Self {
        Self::Connection { message: message.into() }
    }

    /// Create a new invalid-response error.
    pub fn invalid_response(message: impl Into<String>) -> Self {
        Self::InvalidResponse { message: message.into() }
    }

    /// The message shown to the user (never the raw transport detail).
    pub fn user_message(&self) -> String {
        self.to_string()
    }
}

/// A per-field validation failure.
///
/// Surfaced inline in the form; submission is blocked while any of these
/// remain. Never propagated past the form layer.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
#[error("campo '{field}': {message}")]
pub struct ValidationError {
    /// The field that failed validation
    pub field: &'static str,
    /// Human-readable message
    pub message: String,
}

impl ValidationError {
    /// Create a new validation error.
    pub fn new(field: &'static str, message: impl Into<String>) -> Self {
        Self { field, message: message.into() }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_auth_error_messages_are_distinct() {
        let errors = [
            AuthError::InvalidCredentials,
            AuthError::Connection,
            AuthError::ServerMessage("Conta bloqueada".to_string()),
            AuthError::Unknown,
        ];
        for (i, a) in errors.iter().enumerate() {
            for b in errors.iter().skip(i + 1) {
                assert_ne!(a.user_message(), b.user_message());
            }
        }
    }

    #[test]
    fn test_gateway_error_hides_transport_detail() {
        let error = GatewayError::connection("tcp connect error: Connection refused");
        assert_eq!(error.user_message(), "Erro de conexão com o servidor");
    }

    #[test]
    fn test_validation_error() {
        let error = ValidationError::new("cpf", "CPF inválido");
        assert_eq!(error.field, "cpf");
        assert_eq!(error.message, "CPF inválido");
    }
}
