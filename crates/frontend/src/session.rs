//! Session helpers

use crate::ui::Navigator;
use taskdesk_core::{CoreResult, RouteSettings, TokenStore};
use tracing::info;

/// Forget the stored token and return to the login page
///
/// The redirect only happens once the token is gone.
pub async fn logout(
    tokens: &dyn TokenStore,
    navigator: &dyn Navigator,
    routes: &RouteSettings,
) -> CoreResult<()> {
    tokens.clear().await?;
    info!("logged out");
    navigator.redirect(&routes.login);
    Ok(())
}

/// Whether a token is currently stored
pub async fn has_token(tokens: &dyn TokenStore) -> CoreResult<bool> {
    Ok(tokens.get().await?.is_some())
}
