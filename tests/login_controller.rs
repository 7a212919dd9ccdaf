//! Login screen controller flow tests.

mod common;

use std::sync::Arc;

use pretty_assertions::assert_eq;

use mercadinho_console::auth::token_store::{MemoryTokenStore, TokenStore};
use mercadinho_console::controller::login::LoginController;
use mercadinho_console::error::AuthError;
use mercadinho_console::navigation::routes;
use mercadinho_console::SessionManager;

use common::{fresh_jwt, NotificationKind, RecordingNavigator, RecordingNotifier, StubAuthGateway};

struct Fixture {
    gateway: Arc<StubAuthGateway>,
    store: Arc<MemoryTokenStore>,
    navigator: Arc<RecordingNavigator>,
    notifier: Arc<RecordingNotifier>,
    controller: LoginController,
}

fn fixture(gateway: Arc<StubAuthGateway>) -> Fixture {
    let store = Arc::new(MemoryTokenStore::new());
    let navigator = RecordingNavigator::new();
    let notifier = RecordingNotifier::new();
    let session = SessionManager::new(gateway.clone(), store.clone(), navigator.clone());
    let controller = LoginController::new(session, navigator.clone(), notifier.clone());
    Fixture { gateway, store, navigator, notifier, controller }
}

#[tokio::test]
async fn successful_login_notifies_and_navigates_to_dashboard() {
    let token = fresh_jwt();
    let mut fx = fixture(StubAuthGateway::succeeding_with(token.clone()));
    fx.controller.form.email = "ana@mercadinho.com.br".to_string();
    fx.controller.form.password = "s3cret".to_string();

    fx.controller.submit().await;

    assert_eq!(fx.gateway.call_count(), 1);
    assert_eq!(fx.store.load(), Some(token));
    assert_eq!(fx.navigator.last_visited(), Some(routes::DASHBOARD.to_string()));
    assert_eq!(fx.notifier.count_of(NotificationKind::Success), 1);
    assert_eq!(fx.controller.error_message(), None);
    assert!(!fx.controller.is_loading());
}

#[tokio::test]
async fn invalid_form_never_reaches_the_gateway() {
    let mut fx = fixture(StubAuthGateway::succeeding_with(fresh_jwt()));
    fx.controller.form.email = "not-an-email".to_string();

    fx.controller.submit().await;

    assert_eq!(fx.gateway.call_count(), 0);
    assert!(fx.controller.form.is_touched());
    assert_eq!(fx.notifier.count_of(NotificationKind::Error), 1);
    assert_eq!(fx.navigator.visited(), Vec::<String>::new());
}

#[tokio::test]
async fn failed_login_keeps_message_for_inline_display() {
    let mut fx = fixture(StubAuthGateway::failing_with(AuthError::InvalidCredentials));
    fx.controller.form.email = "ana@mercadinho.com.br".to_string();
    fx.controller.form.password = "wrong".to_string();

    fx.controller.submit().await;

    assert_eq!(fx.store.load(), None);
    assert_eq!(fx.controller.error_message(), Some("Usuário ou senha incorretos"));
    assert_eq!(fx.notifier.count_of(NotificationKind::Error), 1);
    assert!(fx.navigator.visited().is_empty(), "stays on the login screen");
}

#[tokio::test]
async fn entering_login_screen_drops_current_session() {
    let fx = fixture(StubAuthGateway::succeeding_with(fresh_jwt()));
    fx.store.save(&fresh_jwt());

    fx.controller.on_enter();

    assert_eq!(fx.store.load(), None);
    assert_eq!(fx.navigator.last_visited(), Some(routes::LOGIN.to_string()));
}
