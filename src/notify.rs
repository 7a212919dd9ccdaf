//! Snackbar collaborator.
//!
//! Fire-and-forget notifications; the core never consumes a return value
//! from the notification layer.

/// Abstraction over the snackbar/notification component.
pub trait Notifier: Send + Sync {
    fn show_success(&self, title: &str, message: &str);
    fn show_error(&self, title: &str, message: &str);
    fn show_warning(&self, title: &str, message: &str);
}

/// Notifier that writes to the tracing log.
///
/// Useful headless (tests, smoke runs) and as a fallback before the UI
/// notifier is wired up.
#[derive(Debug, Default, Clone, Copy)]
pub struct LogNotifier;

impl Notifier for LogNotifier {
    fn show_success(&self, title: &str, message: &str) {
        tracing::info!(title, message, "notification");
    }

    fn show_error(&self, title: &str, message: &str) {
        tracing::error!(title, message, "notification");
    }

    fn show_warning(&self, title: &str, message: &str) {
        tracing::warn!(title, message, "notification");
    }
}
