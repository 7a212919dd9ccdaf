//! Login screen controller.

use std::sync::Arc;

use crate::auth::session::SessionManager;
use crate::error::ValidationError;
use crate::navigation::{routes, Navigator};
use crate::notify::Notifier;

/// Raw input state for the login form.
#[derive(Debug, Clone, Default)]
pub struct LoginForm {
    pub email: String,
    pub password: String,
    touched: bool,
}

impl LoginForm {
    pub fn validate(&self) -> Vec<ValidationError> {
        let mut errors = Vec::new();
        let email = self.email.trim();
        if email.is_empty() {
            errors.push(ValidationError::new("email", "Informe o e-mail"));
        } else if !is_plausible_email(email) {
            errors.push(ValidationError::new("email", "Informe um e-mail válido"));
        }
        if self.password.is_empty() {
            errors.push(ValidationError::new("password", "Informe a senha"));
        }
        errors
    }

    pub fn mark_all_touched(&mut self) {
        self.touched = true;
    }

    pub fn is_touched(&self) -> bool {
        self.touched
    }
}

// Same loose shape the form component checks; the server does the real
// verification.
fn is_plausible_email(value: &str) -> bool {
    let Some((local, domain)) = value.split_once('@') else { return false };
    !local.is_empty() && domain.contains('.') && !domain.starts_with('.') && !domain.ends_with('.')
}

/// Drives the login screen against the session manager.
pub struct LoginController {
    session: Arc<SessionManager>,
    navigator: Arc<dyn Navigator>,
    notifier: Arc<dyn Notifier>,
    pub form: LoginForm,
    loading: bool,
    error_message: Option<String>,
}

impl LoginController {
    pub fn new(
        session: Arc<SessionManager>,
        navigator: Arc<dyn Navigator>,
        notifier: Arc<dyn Notifier>,
    ) -> Self {
        Self {
            session,
            navigator,
            notifier,
            form: LoginForm::default(),
            loading: false,
            error_message: None,
        }
    }

    /// Entering the login screen drops any current session, so a half-dead
    /// token can never leak into a fresh login.
    pub fn on_enter(&self) {
        self.session.logout();
    }

    /// Whether a login call is in flight (the form is disabled meanwhile).
    pub fn is_loading(&self) -> bool {
        self.loading
    }

    /// The last login failure, for inline display.
    pub fn error_message(&self) -> Option<&str> {
        self.error_message.as_deref()
    }

    /// Submit the form.
    ///
    /// Invalid input surfaces field errors and makes no gateway call. On
    /// success the user is greeted and sent to the dashboard; on failure
    /// the message is shown and kept for inline display.
    pub async fn submit(&mut self) {
        self.error_message = None;

        if !self.form.validate().is_empty() {
            self.form.mark_all_touched();
            self.notifier
                .show_error("Atenção!", "Por favor, preencha o formulário corretamente.");
            return;
        }

        let email = self.form.email.trim().to_string();
        let password = self.form.password.clone();

        self.loading = true;
        let result = self.session.login(&email, &password).await;
        self.loading = false;

        match result {
            Ok(()) => {
                self.notifier
                    .show_success("Bem-vindo(a)!", "Login realizado com sucesso.");
                self.navigator.navigate(routes::DASHBOARD);
            }
            Err(err) => {
                let message = err.user_message();
                self.notifier.show_error("Falha no Login", &message);
                self.error_message = Some(message);
            }
        }
    }
}
