//! Route admission policies.
//!
//! Both guards are stateless: each decision is a pure function of the
//! session state at the instant of navigation, nothing is cached across
//! navigations.

use std::sync::Arc;

use crate::auth::session::SessionManager;
use crate::navigation::{routes, Navigator};

/// Outcome of consulting a guard.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GuardDecision {
    /// Admit the navigation.
    Allow,
    /// Deny and send the user to this route instead.
    Redirect(&'static str),
}

/// A policy the router consults before entering a route.
pub trait RouteGuard: Send + Sync {
    /// Pure decision from current session state.
    fn decision(&self) -> GuardDecision;

    /// Router-facing shape: `true` admits; on deny the redirect is
    /// performed as a side effect.
    fn can_activate(&self) -> bool;
}

/// Admits only unauthenticated users (the login screen); authenticated
/// users are redirected to the dashboard.
pub struct PublicOnly {
    session: Arc<SessionManager>,
    navigator: Arc<dyn Navigator>,
}

impl PublicOnly {
    pub fn new(session: Arc<SessionManager>, navigator: Arc<dyn Navigator>) -> Self {
        Self { session, navigator }
    }
}

impl RouteGuard for PublicOnly {
    fn decision(&self) -> GuardDecision {
        if self.session.is_authenticated() {
            GuardDecision::Redirect(routes::DASHBOARD)
        } else {
            GuardDecision::Allow
        }
    }

    fn can_activate(&self) -> bool {
        match self.decision() {
            GuardDecision::Allow => true,
            GuardDecision::Redirect(path) => {
                self.navigator.navigate(path);
                false
            }
        }
    }
}

/// Admits only authenticated users; everyone else is redirected to the
/// login screen.
pub struct AuthenticatedOnly {
    session: Arc<SessionManager>,
    navigator: Arc<dyn Navigator>,
}

impl AuthenticatedOnly {
    pub fn new(session: Arc<SessionManager>, navigator: Arc<dyn Navigator>) -> Self {
        Self { session, navigator }
    }
}

impl RouteGuard for AuthenticatedOnly {
    fn decision(&self) -> GuardDecision {
        if self.session.is_authenticated() {
            GuardDecision::Allow
        } else {
            GuardDecision::Redirect(routes::LOGIN)
        }
    }

    fn can_activate(&self) -> bool {
        match self.decision() {
            GuardDecision::Allow => true,
            GuardDecision::Redirect(path) => {
                self.navigator.navigate(path);
                false
            }
        }
    }
}
