//! Shared test doubles and fixtures.

#![allow(dead_code)]

use std::sync::atomic::{AtomicBool, AtomicUsize, Ordering};
use std::sync::{Arc, Mutex};

use async_trait::async_trait;
use base64::engine::general_purpose::URL_SAFE_NO_PAD;
use base64::Engine;

use mercadinho_console::error::{AuthError, GatewayError};
use mercadinho_console::gateway::{AuthGateway, EntityGateway};
use mercadinho_console::models::{LoginResponse, Product, ProductDraft, ProductType};
use mercadinho_console::navigation::Navigator;
use mercadinho_console::notify::Notifier;

/// Build an unsigned-but-well-formed JWT with the given claims.
pub fn jwt(email: &str, full_name: &str, exp: Option<i64>) -> String {
    let header = URL_SAFE_NO_PAD.encode(br#"{"alg":"HS256","typ":"JWT"}"#);
    let mut payload = serde_json::json!({ "email": email, "sub": full_name });
    if let Some(exp) = exp {
        payload["exp"] = serde_json::json!(exp);
    }
    let payload = URL_SAFE_NO_PAD.encode(payload.to_string().as_bytes());
    format!("{header}.{payload}.test-signature")
}

/// A token that expires an hour from now.
pub fn fresh_jwt() -> String {
    jwt("ana@mercadinho.com.br", "Ana Lima", Some(chrono::Utc::now().timestamp() + 3600))
}

/// A token that expired an hour ago.
pub fn expired_jwt() -> String {
    jwt("ana@mercadinho.com.br", "Ana Lima", Some(chrono::Utc::now().timestamp() - 3600))
}

/// Navigator that records every path it is sent to.
#[derive(Debug, Default)]
pub struct RecordingNavigator {
    paths: Mutex<Vec<String>>,
}

impl RecordingNavigator {
    pub fn new() -> Arc<Self> {
        Arc::new(Self::default())
    }

    pub fn visited(&self) -> Vec<String> {
        self.paths.lock().unwrap().clone()
    }

    pub fn last_visited(&self) -> Option<String> {
        self.paths.lock().unwrap().last().cloned()
    }
}

impl Navigator for RecordingNavigator {
    fn navigate(&self, path: &str) {
        self.paths.lock().unwrap().push(path.to_string());
    }

    fn current_path(&self) -> String {
        self.last_visited().unwrap_or_else(|| "/".to_string())
    }
}

/// Kind of a recorded notification.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NotificationKind {
    Success,
    Error,
    Warning,
}

/// Notifier that records every notification.
#[derive(Debug, Default)]
pub struct RecordingNotifier {
    events: Mutex<Vec<(NotificationKind, String, String)>>,
}

impl RecordingNotifier {
    pub fn new() -> Arc<Self> {
        Arc::new(Self::default())
    }

    pub fn events(&self) -> Vec<(NotificationKind, String, String)> {
        self.events.lock().unwrap().clone()
    }

    pub fn count_of(&self, kind: NotificationKind) -> usize {
        self.events().iter().filter(|(k, _, _)| *k == kind).count()
    }

    pub fn last(&self) -> Option<(NotificationKind, String, String)> {
        self.events.lock().unwrap().last().cloned()
    }

    fn record(&self, kind: NotificationKind, title: &str, message: &str) {
        self.events
            .lock()
            .unwrap()
            .push((kind, title.to_string(), message.to_string()));
    }
}

impl Notifier for RecordingNotifier {
    fn show_success(&self, title: &str, message: &str) {
        self.record(NotificationKind::Success, title, message);
    }

    fn show_error(&self, title: &str, message: &str) {
        self.record(NotificationKind::Error, title, message);
    }

    fn show_warning(&self, title: &str, message: &str) {
        self.record(NotificationKind::Warning, title, message);
    }
}

/// Auth gateway stub with a scripted response and a call counter.
pub struct StubAuthGateway {
    response: Mutex<Result<LoginResponse, AuthError>>,
    pub calls: AtomicUsize,
}

impl StubAuthGateway {
    pub fn succeeding_with(token: impl Into<String>) -> Arc<Self> {
        Arc::new(Self {
            response: Mutex::new(Ok(LoginResponse {
                access_token: token.into(),
                expires_in: Some(3600),
            })),
            calls: AtomicUsize::new(0),
        })
    }

    pub fn failing_with(error: AuthError) -> Arc<Self> {
        Arc::new(Self { response: Mutex::new(Err(error)), calls: AtomicUsize::new(0) })
    }

    pub fn call_count(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }
}

#[async_trait]
impl AuthGateway for StubAuthGateway {
    async fn login(&self, _email: &str, _password: &str) -> Result<LoginResponse, AuthError> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        self.response.lock().unwrap().clone()
    }
}

/// Build a product for seeding fakes.
pub fn product(id: &str, name: &str) -> Product {
    Product {
        product_id: id.to_string(),
        name: name.to_string(),
        description: String::new(),
        product_type: ProductType::Food,
        price_in_cents: 1000,
        promo_in_cents: None,
        promo_active: false,
        promo_starts_at: None,
        promo_ends_at: None,
        stock_quantity: 5,
        expires_at: None,
    }
}

fn product_from_draft(id: String, draft: &ProductDraft) -> Product {
    Product {
        product_id: id,
        name: draft.name.clone(),
        description: draft.description.clone(),
        product_type: draft.product_type,
        price_in_cents: draft.price_in_cents,
        promo_in_cents: draft.promo_in_cents,
        promo_active: draft.promo_active,
        promo_starts_at: draft.promo_starts_at,
        promo_ends_at: draft.promo_ends_at,
        stock_quantity: draft.stock_quantity,
        expires_at: draft.expires_at,
    }
}

/// In-memory product gateway with failure switches and call counters.
#[derive(Default)]
pub struct FakeProductGateway {
    products: Mutex<Vec<Product>>,
    next_id: AtomicUsize,
    pub fail_list: AtomicBool,
    pub fail_create: AtomicBool,
    pub fail_update: AtomicBool,
    pub fail_delete: AtomicBool,
    pub list_calls: AtomicUsize,
    pub create_calls: AtomicUsize,
    pub update_calls: AtomicUsize,
    pub delete_calls: AtomicUsize,
    deleted_ids: Mutex<Vec<String>>,
}

impl FakeProductGateway {
    pub fn seeded(products: Vec<Product>) -> Arc<Self> {
        let gateway = Self { products: Mutex::new(products), ..Self::default() };
        gateway.next_id.store(100, Ordering::SeqCst);
        Arc::new(gateway)
    }

    pub fn deleted_ids(&self) -> Vec<String> {
        self.deleted_ids.lock().unwrap().clone()
    }

    fn server_error() -> GatewayError {
        GatewayError::Server { status: 500, message: "Falha interna no servidor".to_string() }
    }
}

#[async_trait]
impl EntityGateway<Product> for FakeProductGateway {
    async fn list(&self) -> Result<Vec<Product>, GatewayError> {
        self.list_calls.fetch_add(1, Ordering::SeqCst);
        if self.fail_list.load(Ordering::SeqCst) {
            return Err(Self::server_error());
        }
        Ok(self.products.lock().unwrap().clone())
    }

    async fn create(&self, draft: &ProductDraft) -> Result<Product, GatewayError> {
        self.create_calls.fetch_add(1, Ordering::SeqCst);
        if self.fail_create.load(Ordering::SeqCst) {
            return Err(Self::server_error());
        }
        let id = format!("p{}", self.next_id.fetch_add(1, Ordering::SeqCst));
        let created = product_from_draft(id, draft);
        self.products.lock().unwrap().push(created.clone());
        Ok(created)
    }

    async fn update(&self, id: &str, draft: &ProductDraft) -> Result<Product, GatewayError> {
        self.update_calls.fetch_add(1, Ordering::SeqCst);
        if self.fail_update.load(Ordering::SeqCst) {
            return Err(Self::server_error());
        }
        let mut products = self.products.lock().unwrap();
        let Some(slot) = products.iter_mut().find(|p| p.product_id == id) else {
            return Err(GatewayError::Server { status: 404, message: "Produto não encontrado".to_string() });
        };
        *slot = product_from_draft(id.to_string(), draft);
        Ok(slot.clone())
    }

    async fn delete(&self, id: &str) -> Result<(), GatewayError> {
        self.delete_calls.fetch_add(1, Ordering::SeqCst);
        self.deleted_ids.lock().unwrap().push(id.to_string());
        if self.fail_delete.load(Ordering::SeqCst) {
            return Err(Self::server_error());
        }
        self.products.lock().unwrap().retain(|p| p.product_id != id);
        Ok(())
    }
}
