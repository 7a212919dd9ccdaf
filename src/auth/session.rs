//! Session lifecycle.
//!
//! `SessionManager` owns the authentication state of the console. The only
//! canonical datum is the persisted token; `is_authenticated` and
//! `current_user` are recomputed from it on every read. Construction runs
//! one cleanup pass so a stale token from a previous run is purged before
//! the first render, and a background sweep repeats that check while the
//! app sits idle.

use std::sync::{Arc, Mutex, MutexGuard};
use std::time::Duration;

use tokio::task::JoinHandle;

use crate::auth::claims::{self, TokenClaims};
use crate::auth::token_store::TokenStore;
use crate::error::AuthError;
use crate::gateway::AuthGateway;
use crate::navigation::{routes, Navigator};

/// How often the background sweep re-checks token validity.
pub const SWEEP_INTERVAL: Duration = Duration::from_secs(60);

/// Owns login/logout orchestration and token validity checks.
///
/// Constructed once at startup and injected into every consumer (guards,
/// request authenticator, controllers); there is no global instance.
pub struct SessionManager {
    gateway: Arc<dyn AuthGateway>,
    store: Arc<dyn TokenStore>,
    navigator: Arc<dyn Navigator>,
    sweep: Mutex<Option<JoinHandle<()>>>,
}

impl SessionManager {
    /// Create the session manager and run the startup cleanup pass.
    ///
    /// If the persisted token is expired or malformed it is cleared
    /// immediately and the navigator is sent to the login route.
    pub fn new(
        gateway: Arc<dyn AuthGateway>,
        store: Arc<dyn TokenStore>,
        navigator: Arc<dyn Navigator>,
    ) -> Arc<Self> {
        let session = Self { gateway, store, navigator, sweep: Mutex::new(None) };
        session.check_and_clear();
        Arc::new(session)
    }

    /// Authenticate against the backend.
    ///
    /// On success the returned token is persisted and the session becomes
    /// authenticated; on failure nothing changes and the error carries a
    /// user-displayable message.
    pub async fn login(&self, email: &str, password: &str) -> Result<(), AuthError> {
        let response = self.gateway.login(email, password).await?;
        self.store.save(&response.access_token);
        tracing::info!(email, "login succeeded");
        Ok(())
    }

    /// Clear the session and navigate to the login route.
    ///
    /// Idempotent: logging out while already logged out still re-navigates.
    pub fn logout(&self) {
        self.clear_auth();
    }

    /// Whether a valid (present, decodable, unexpired) token is held.
    /// Recomputed from the persisted token on every call.
    pub fn is_authenticated(&self) -> bool {
        match self.store.load() {
            Some(token) => claims::token_is_valid(&token),
            None => false,
        }
    }

    /// Claims of the authenticated user, derived from the token on read.
    /// `Some` iff the session is authenticated and the token decodes.
    pub fn current_user(&self) -> Option<TokenClaims> {
        let token = self.store.load()?;
        let claims = claims::decode_claims(&token)?;
        if claims.is_expired(chrono::Utc::now().timestamp()) {
            return None;
        }
        Some(claims)
    }

    /// The raw persisted token, unvalidated. Consumed only by the request
    /// authenticator.
    pub fn get_token(&self) -> Option<String> {
        self.store.load()
    }

    /// Start the periodic expiry sweep on the current tokio runtime.
    ///
    /// The task holds only a weak reference and stops by itself once the
    /// manager is dropped; it can also be stopped explicitly with
    /// [`SessionManager::stop_expiry_sweep`]. Calling this again replaces
    /// the previous sweep.
    pub fn spawn_expiry_sweep(self: &Arc<Self>, every: Duration) {
        let weak = Arc::downgrade(self);
        let handle = tokio::spawn(async move {
            let mut ticker = tokio::time::interval(every);
            // the first tick completes immediately; the startup cleanup
            // already covered that instant
            ticker.tick().await;
            loop {
                ticker.tick().await;
                let Some(session) = weak.upgrade() else { break };
                session.check_and_clear();
            }
        });
        if let Some(previous) = self.sweep_slot().replace(handle) {
            previous.abort();
        }
    }

    /// Stop the background sweep, if running.
    pub fn stop_expiry_sweep(&self) {
        if let Some(handle) = self.sweep_slot().take() {
            handle.abort();
        }
    }

    /// One check-and-clear pass: a present-but-invalid token is treated
    /// exactly like a logout.
    fn check_and_clear(&self) {
        if let Some(token) = self.store.load() {
            if !claims::token_is_valid(&token) {
                tracing::warn!("expired or malformed session token detected, signing out");
                self.clear_auth();
            }
        }
    }

    fn clear_auth(&self) {
        self.store.clear();
        self.navigator.navigate(routes::LOGIN);
    }

    fn sweep_slot(&self) -> MutexGuard<'_, Option<JoinHandle<()>>> {
        match self.sweep.lock() {
            Ok(guard) => guard,
            Err(poisoned) => poisoned.into_inner(),
        }
    }
}

impl Drop for SessionManager {
    fn drop(&mut self) {
        self.stop_expiry_sweep();
    }
}
