//! HTTP gateway implementations.
//!
//! Error-mapping policy, applied uniformly: a request that never reaches
//! the server becomes a connection error; an error status becomes a
//! server error whose message is the body's `message` field when present;
//! an undecodable success body becomes an invalid-response error. Raw
//! transport errors go to the log, never to the user.

use std::marker::PhantomData;

use async_trait::async_trait;
use reqwest::{Client, Response, StatusCode};

use crate::auth::authenticator::{RequestAuthenticator, LOGIN_ENDPOINT};
use crate::config::AppConfig;
use crate::error::{AuthError, GatewayError};
use crate::gateway::{AuthGateway, EntityGateway};
use crate::models::{Customer, Entity, LoginRequest, LoginResponse};

/// Fallback message when the server supplies none.
const GENERIC_SERVER_ERROR: &str = "Erro ao comunicar com o servidor";

fn extract_server_message(body: Option<serde_json::Value>) -> Option<String> {
    body?.get("message")?.as_str().map(str::to_string)
}

async fn error_from_response(response: Response) -> GatewayError {
    let status = response.status().as_u16();
    let message = extract_server_message(response.json().await.ok())
        .unwrap_or_else(|| GENERIC_SERVER_ERROR.to_string());
    GatewayError::Server { status, message }
}

/// Login gateway over `/accounts/login`.
pub struct HttpAuthGateway {
    config: AppConfig,
    client: Client,
}

impl HttpAuthGateway {
    pub fn new(config: AppConfig) -> Self {
        Self { config, client: Client::new() }
    }
}

#[async_trait]
impl AuthGateway for HttpAuthGateway {
    async fn login(&self, email: &str, password: &str) -> Result<LoginResponse, AuthError> {
        let url = self.config.api_url(LOGIN_ENDPOINT);
        let request = LoginRequest { email: email.to_string(), password: password.to_string() };

        let response = self
            .client
            .post(&url)
            .json(&request)
            .send()
            .await
            .map_err(|err| {
                tracing::error!(error = %err, "login request failed to reach the server");
                AuthError::Connection
            })?;

        let status = response.status();
        if status == StatusCode::UNAUTHORIZED || status == StatusCode::FORBIDDEN {
            return Err(AuthError::InvalidCredentials);
        }
        if !status.is_success() {
            return Err(match extract_server_message(response.json().await.ok()) {
                Some(message) => AuthError::ServerMessage(message),
                None => AuthError::Unknown,
            });
        }

        response.json::<LoginResponse>().await.map_err(|err| {
            tracing::error!(error = %err, "login response body could not be decoded");
            AuthError::Unknown
        })
    }
}

/// Generic CRUD gateway over an entity's REST collection.
///
/// Every request is threaded through the [`RequestAuthenticator`] so the
/// bearer token rides along automatically.
pub struct HttpEntityGateway<E: Entity> {
    config: AppConfig,
    client: Client,
    authenticator: RequestAuthenticator,
    _entity: PhantomData<fn() -> E>,
}

impl<E: Entity> HttpEntityGateway<E> {
    pub fn new(config: AppConfig, authenticator: RequestAuthenticator) -> Self {
        Self { config, client: Client::new(), authenticator, _entity: PhantomData }
    }

    fn item_url(&self, id: &str) -> String {
        self.config.api_url(&format!("{}/{}", E::COLLECTION_PATH, id))
    }
}

#[async_trait]
impl<E: Entity> EntityGateway<E> for HttpEntityGateway<E> {
    async fn list(&self) -> Result<Vec<E>, GatewayError> {
        let url = self.config.api_url(E::COLLECTION_PATH);
        let request = self.authenticator.apply(E::COLLECTION_PATH, self.client.get(&url));
        let response = request
            .send()
            .await
            .map_err(|err| GatewayError::connection(err.to_string()))?;
        if !response.status().is_success() {
            return Err(error_from_response(response).await);
        }
        response
            .json::<Vec<E>>()
            .await
            .map_err(|err| GatewayError::invalid_response(err.to_string()))
    }

    async fn create(&self, draft: &E::Draft) -> Result<E, GatewayError> {
        let url = self.config.api_url(E::COLLECTION_PATH);
        let request = self
            .authenticator
            .apply(E::COLLECTION_PATH, self.client.post(&url).json(draft));
        let response = request
            .send()
            .await
            .map_err(|err| GatewayError::connection(err.to_string()))?;
        if !response.status().is_success() {
            return Err(error_from_response(response).await);
        }
        response
            .json::<E>()
            .await
            .map_err(|err| GatewayError::invalid_response(err.to_string()))
    }

    async fn update(&self, id: &str, draft: &E::Draft) -> Result<E, GatewayError> {
        let url = self.item_url(id);
        let request = self
            .authenticator
            .apply(E::COLLECTION_PATH, self.client.patch(&url).json(draft));
        let response = request
            .send()
            .await
            .map_err(|err| GatewayError::connection(err.to_string()))?;
        if !response.status().is_success() {
            return Err(error_from_response(response).await);
        }
        response
            .json::<E>()
            .await
            .map_err(|err| GatewayError::invalid_response(err.to_string()))
    }

    async fn delete(&self, id: &str) -> Result<(), GatewayError> {
        let url = self.item_url(id);
        let request = self.authenticator.apply(E::COLLECTION_PATH, self.client.delete(&url));
        let response = request
            .send()
            .await
            .map_err(|err| GatewayError::connection(err.to_string()))?;
        if !response.status().is_success() {
            return Err(error_from_response(response).await);
        }
        Ok(())
    }
}

/// Read gateway for the authenticated account holder.
pub struct HttpCustomerGateway {
    config: AppConfig,
    client: Client,
    authenticator: RequestAuthenticator,
}

const CUSTOMER_ME_PATH: &str = "/customers/me";

impl HttpCustomerGateway {
    pub fn new(config: AppConfig, authenticator: RequestAuthenticator) -> Self {
        Self { config, client: Client::new(), authenticator }
    }

    /// Fetch the authenticated user's profile.
    pub async fn authenticated_user(&self) -> Result<Customer, GatewayError> {
        let url = self.config.api_url(CUSTOMER_ME_PATH);
        let request = self.authenticator.apply(CUSTOMER_ME_PATH, self.client.get(&url));
        let response = request
            .send()
            .await
            .map_err(|err| GatewayError::connection(err.to_string()))?;
        if !response.status().is_success() {
            return Err(error_from_response(response).await);
        }
        response
            .json::<Customer>()
            .await
            .map_err(|err| GatewayError::invalid_response(err.to_string()))
    }
}
