//! Terminal implementations of the frontend capabilities

use dialoguer::Confirm;
use taskdesk_frontend::{Confirmer, LoginView, Navigator, Notifier};
use tracing::warn;

/// Asks on the terminal, or agrees straight away with `--yes`
pub struct TerminalConfirmer {
    assume_yes: bool,
}

impl TerminalConfirmer {
    pub fn new(assume_yes: bool) -> Self {
        Self { assume_yes }
    }
}

impl Confirmer for TerminalConfirmer {
    fn confirm(&self, prompt: &str) -> bool {
        if self.assume_yes {
            return true;
        }
        // An unreadable terminal counts as "no"
        Confirm::new()
            .with_prompt(prompt)
            .default(false)
            .interact()
            .unwrap_or_else(|e| {
                warn!(error = %e, "confirmation prompt failed");
                false
            })
    }
}

/// Writes alerts to stderr
pub struct TerminalNotifier;

impl Notifier for TerminalNotifier {
    fn alert(&self, message: &str) {
        eprintln!("{message}");
    }
}

/// Reports where a browser would have navigated
pub struct TerminalNavigator {
    base_url: String,
}

impl TerminalNavigator {
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            base_url: base_url.into(),
        }
    }
}

impl Navigator for TerminalNavigator {
    fn redirect(&self, path: &str) {
        println!("→ {}{}", self.base_url, path);
    }

    fn reload(&self) {
        println!("Done.");
    }
}

/// Login form filled from flags or prompts
pub struct TerminalLoginView {
    email: String,
    password: String,
}

impl TerminalLoginView {
    pub fn new(email: String, password: String) -> Self {
        Self { email, password }
    }
}

impl LoginView for TerminalLoginView {
    fn email(&self) -> String {
        self.email.clone()
    }

    fn password(&self) -> String {
        self.password.clone()
    }

    fn show_error(&self, message: &str) {
        eprintln!("{message}");
    }
}
