//! User signup, login, and logout.

use fruitstand_client::api::ApiClient;
use fruitstand_client::session::{SessionError, SessionStore};
use fruitstand_core::Email;

use super::{CommandError, shop};

/// Create a user account.
///
/// Success leads to the login view; no identity is persisted here.
///
/// # Errors
///
/// Returns an error if the email is malformed or the request fails.
pub async fn signup(
    api: &ApiClient,
    name: &str,
    email: &str,
    password: &str,
) -> Result<(), CommandError> {
    let email = Email::parse(email)?;
    api.signup_user(name, &email, password).await?;
    tracing::info!("Account created. Sign in with `fruitstand login`");
    Ok(())
}

/// Log in, persist the returned identity, and show the shop.
///
/// The identity write happens before the shop renders, so an interrupted
/// render still leaves the login in place for the next invocation.
///
/// # Errors
///
/// Returns an error if the email is malformed, the request fails, or the
/// identity cannot be persisted.
pub async fn login(
    api: &ApiClient,
    session: &SessionStore,
    email: &str,
    password: &str,
) -> Result<(), CommandError> {
    let email = Email::parse(email)?;
    let user = api.login_user(&email, password).await?;
    session.set_user(&user)?;
    shop::browse(api, session).await
}

/// Clear the user identity.
///
/// The admin flag is deliberately untouched - it has no logout path.
///
/// # Errors
///
/// Returns an error if the persisted identity cannot be removed.
pub fn logout(session: &SessionStore) -> Result<(), CommandError> {
    session.clear_user()?;
    tracing::info!("Logged out");
    Ok(())
}

/// Print the persisted identity verbatim, or note guest browsing.
///
/// # Errors
///
/// Returns an error if the identity cannot be re-encoded for display.
pub fn whoami(session: &SessionStore) -> Result<(), CommandError> {
    match session.user() {
        Some(user) => {
            let rendered = serde_json::to_string_pretty(&user).map_err(SessionError::from)?;
            println!("{rendered}");
        }
        None => tracing::info!("Browsing as guest"),
    }
    Ok(())
}
