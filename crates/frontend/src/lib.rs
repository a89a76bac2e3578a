//! Taskdesk frontend handlers
//!
//! Each handler is a short linear flow: user gesture, validation or
//! confirmation, one API call, then a view update or navigation. Everything
//! a browser page would provide (form fields, dialogs, location) is injected
//! through the capability traits in [`ui`].

pub mod actions;
pub mod login;
pub mod session;
pub mod ui;

pub use actions::{ActionContext, ActionOutcome, EmployeeActions, ManagerActions};
pub use login::{LoginHandler, LoginOutcome};
pub use ui::{Confirmer, LoginView, Navigator, Notifier};
