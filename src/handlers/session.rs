use crate::core::session::SessionView;
use crate::core::state::AppState;
use crate::models::user::User;
use crate::storage::sync;
use crate::validation::login::validate_login;
use tracing::info;

/// Log in with the name/roll form.
///
/// Blank fields fail validation; there is no other check. A successful login
/// replaces any previous user and is persisted immediately.
pub fn login(state: &AppState, view: &mut SessionView, name: &str, number: &str) {
    let ttl = state.config.ui.message_ttl_ms;

    match validate_login(name, number) {
        Ok((name, roll)) => {
            let user = User::new(name, roll);
            info!(name = %user.name, roll = %user.roll, "User logged in");

            let welcome = format!("Welcome {}", user.name);
            view.current_user = Some(user);
            sync::persist_current_user(state, view.current_user.as_ref());
            view.show_notice(welcome, ttl);
        }
        Err(e) => view.show_notice(e.to_string(), ttl),
    }
}

/// Log out: clears the whole view and persists the null user.
pub fn logout(state: &AppState, view: &mut SessionView) {
    if let Some(user) = &view.current_user {
        info!(name = %user.name, "User logged out");
    }

    view.current_user = None;
    view.selected = None;
    view.results.clear();
    view.query.clear();

    sync::persist_current_user(state, None);
    view.show_notice("Logged out", state.config.ui.message_ttl_ms);
}
