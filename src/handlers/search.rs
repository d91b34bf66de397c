use crate::core::error::ActionError;
use crate::core::session::SessionView;
use crate::core::state::AppState;

/// Text-input analog: stores the query without running it.
pub fn set_query(view: &mut SessionView, text: &str) {
    view.query = text.to_string();
}

/// Run the current query against the roster.
///
/// Auth-gated; on failure the result list and selection stay untouched.
pub fn search(state: &AppState, view: &mut SessionView) {
    if view.current_user.is_none() {
        let err = ActionError::AuthRequired {
            action: "search clubs",
        };
        view.show_notice(err.to_string(), state.config.ui.message_ttl_ms);
        return;
    }

    view.results = state.club_store.search(&view.query);
    view.selected = None;
}

/// Open the detail view for a club.
pub fn select_club(state: &AppState, view: &mut SessionView, id: u32) {
    let ttl = state.config.ui.message_ttl_ms;

    if view.current_user.is_none() {
        let err = ActionError::AuthRequired {
            action: "view club details",
        };
        view.show_notice(err.to_string(), ttl);
        return;
    }

    if state.club_store.get(id).is_none() {
        view.show_notice(ActionError::ClubNotFound(id).to_string(), ttl);
        return;
    }

    view.selected = Some(id);
}

/// Back to the list view.
pub fn deselect(view: &mut SessionView) {
    view.selected = None;
}
