//! Wire models shared with the backend.
//!
//! Field names are camelCase on the wire (the backend is a Java/TS-style
//! REST API); every struct carries `#[serde(rename_all = "camelCase")]`.
//! Monetary amounts are integer cents everywhere in these types.

pub mod auth;
pub mod customer;
pub mod employee;
pub mod product;

pub use auth::{LoginRequest, LoginResponse};
pub use customer::Customer;
pub use employee::{Employee, EmployeeDraft};
pub use product::{Product, ProductDraft, ProductType};

use serde::de::DeserializeOwned;
use serde::Serialize;

/// A remotely managed entity with a server-assigned identifier.
///
/// The identifier is opaque and never client-generated: drafts
/// ([`Entity::Draft`]) carry every field except the id, and the id appears
/// only once the server has acknowledged the create.
pub trait Entity: Clone + Send + Sync + DeserializeOwned + 'static {
    /// The entity minus its identifier, sent on create/update.
    type Draft: Serialize + Send + Sync;

    /// REST collection path, e.g. `/api/products`.
    const COLLECTION_PATH: &'static str;

    /// User-facing singular label for notifications.
    const LABEL: &'static str;

    /// Server-assigned identifier.
    fn id(&self) -> &str;
}
