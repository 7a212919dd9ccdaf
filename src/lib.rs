//! Mercadinho Console — client core for a small-retail management console.
//!
//! This crate owns the parts of the console that are not pixels: the
//! session/auth lifecycle (token persistence, expiry detection, automatic
//! logout, route guarding, outbound request authentication) and the generic
//! CRUD-table-with-form controller pattern shared by the Products and
//! Employees screens.
//!
//! # Architecture
//!
//! - `auth`: token store, unverified JWT claims decoding, `SessionManager`,
//!   route guards and the bearer-token request authenticator
//! - `gateway`: async HTTP gateways over the backend REST API
//! - `controller`: entity collection controllers and their forms
//! - `models`: wire models shared with the backend (camelCase on the wire)
//! - `navigation` / `notify`: collaborator traits for the router and the
//!   snackbar layer, injected rather than reached for globally
//!
//! The UI toolkit, the router implementation and the backend itself are all
//! external collaborators; everything here is headless and testable.

pub mod auth;
pub mod config;
pub mod controller;
pub mod dashboard;
pub mod error;
pub mod format;
pub mod gateway;
pub mod models;
pub mod navigation;
pub mod notify;

pub use auth::authenticator::RequestAuthenticator;
pub use auth::guard::{AuthenticatedOnly, GuardDecision, PublicOnly, RouteGuard};
pub use auth::session::SessionManager;
pub use auth::token_store::{FileTokenStore, MemoryTokenStore, TokenStore};
pub use config::{AppConfig, AppConfigBuilder, ConfigError};
pub use controller::collection::{EntityCollectionController, FormMode, Phase};
pub use controller::form::EntityForm;
pub use error::{AuthError, GatewayError, ValidationError};
pub use navigation::Navigator;
pub use notify::Notifier;
