//! Capabilities the handlers need from their host
//!
//! A web page backs these with form inputs, `confirm`, `alert` and
//! `location`; the CLI backs them with terminal prompts.

#[cfg(test)]
use mockall::automock;

/// Login form bindings
#[cfg_attr(test, automock)]
pub trait LoginView: Send + Sync {
    /// Raw contents of the email field
    fn email(&self) -> String;

    /// Raw contents of the password field
    fn password(&self) -> String;

    /// Show an inline error banner
    fn show_error(&self, message: &str);
}

/// Blocking yes/no confirmation
#[cfg_attr(test, automock)]
pub trait Confirmer: Send + Sync {
    fn confirm(&self, prompt: &str) -> bool;
}

/// Blocking notification
#[cfg_attr(test, automock)]
pub trait Notifier: Send + Sync {
    fn alert(&self, message: &str);
}

/// Page navigation
#[cfg_attr(test, automock)]
pub trait Navigator: Send + Sync {
    /// Leave the current page for `path`
    fn redirect(&self, path: &str);

    /// Reload the current page, discarding client state
    fn reload(&self);
}
