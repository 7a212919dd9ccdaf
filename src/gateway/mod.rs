//! Gateways to the backend REST API.
//!
//! Abstract contracts ([`AuthGateway`], [`EntityGateway`]) plus the
//! reqwest-backed implementations in [`http`]. Controllers and the session
//! manager depend only on the traits, which keeps them testable with
//! in-memory doubles.

pub mod http;

use async_trait::async_trait;

use crate::error::{AuthError, GatewayError};
use crate::models::{Entity, LoginResponse};

/// Authentication endpoint contract.
#[async_trait]
pub trait AuthGateway: Send + Sync {
    /// Exchange credentials for a token.
    async fn login(&self, email: &str, password: &str) -> Result<LoginResponse, AuthError>;
}

/// Remote CRUD contract for one entity collection.
#[async_trait]
pub trait EntityGateway<E: Entity>: Send + Sync {
    /// Fetch the whole collection.
    async fn list(&self) -> Result<Vec<E>, GatewayError>;

    /// Create an entity; the server assigns the identifier.
    async fn create(&self, draft: &E::Draft) -> Result<E, GatewayError>;

    /// Update an existing entity, keyed by id.
    async fn update(&self, id: &str, draft: &E::Draft) -> Result<E, GatewayError>;

    /// Delete an entity by id.
    async fn delete(&self, id: &str) -> Result<(), GatewayError>;
}

pub use http::{HttpAuthGateway, HttpCustomerGateway, HttpEntityGateway};
