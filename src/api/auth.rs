//! Auth Commands
//!
//! Sign-in, sign-out and session verification, applied to the app store.

use casino_access::{AuthError, Credentials};
use tracing::{debug, info, warn};

use super::{client, sessions, with_timeout};
use crate::store::{notify, store_set_user, store_user_untracked, AppStore, ToastKind};

/// Authenticate and, on success, show the dashboard.
pub async fn sign_in(store: AppStore, credentials: Credentials) -> Result<(), AuthError> {
    let api = client();
    match with_timeout(sessions().login(&api, &credentials)).await {
        Ok(session) => {
            let welcome = format!("Welcome back, {}!", session.user.full_name);
            store_set_user(&store, Some(session.user));
            notify(store, ToastKind::Success, welcome);
            Ok(())
        }
        Err(err) => {
            if !matches!(err, AuthError::Invalid(_)) {
                notify(store, ToastKind::Error, "Login failed. Please check your credentials.");
            }
            Err(err)
        }
    }
}

pub fn sign_out(store: AppStore) {
    sessions().logout();
    store_set_user(&store, None);
    notify(store, ToastKind::Success, "Logged out successfully");
}

/// Restore the stored session, if any, into the store.
///
/// Returns whether a session was found.
pub fn restore_session(store: &AppStore) -> bool {
    match sessions().restore() {
        Some(session) => {
            store_set_user(store, Some(session.user));
            true
        }
        None => false,
    }
}

/// Confirm a restored session with the API.
///
/// A rejected token or a deleted account signs the operator out; network
/// trouble keeps the restored snapshot. A result that arrives after the
/// operator signed out or switched accounts is dropped.
pub async fn verify_session(store: AppStore) {
    let restored = store_user_untracked(&store).map(|user| user.username);
    let sent_token = sessions().access_token().ok();
    let api = client();

    let result = with_timeout(sessions().fetch_current_user(&api)).await;
    let current = store_user_untracked(&store).map(|user| user.username);
    if current.is_none() || current != restored {
        debug!("session changed during verification; ignoring result");
        return;
    }

    match result {
        Ok(user) => {
            info!(username = %user.username, "session verified");
            store_set_user(&store, Some(user));
        }
        Err(AuthError::SessionEnded) => debug!("session ended during verification"),
        Err(err) if err.ends_session() => {
            if sessions().access_token().ok() != sent_token {
                debug!("stored token replaced during verification; keeping it");
                return;
            }
            warn!(error = %err, "stored session rejected");
            sessions().logout();
            store_set_user(&store, None);
        }
        Err(err) => warn!(error = %err, "could not verify session"),
    }
}

/// Sign out after an authenticated read was refused with 401.
pub(super) fn expire_session(store: AppStore) {
    warn!("access token expired");
    sessions().logout();
    store_set_user(&store, None);
    notify(store, ToastKind::Error, "Your session has expired. Please sign in again.");
}

/// Demo shortcut that skips the API entirely.
#[cfg(feature = "direct-access")]
pub fn direct_access(store: AppStore, role: casino_access::Role) {
    match sessions().direct_access(role) {
        Ok(session) => {
            let message = format!("Logged in as {}", session.user.role);
            store_set_user(&store, Some(session.user));
            notify(store, ToastKind::Success, message);
        }
        Err(err) => notify(store, ToastKind::Error, err.user_message()),
    }
}
