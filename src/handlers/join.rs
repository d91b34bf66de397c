use crate::core::error::ActionError;
use crate::core::session::SessionView;
use crate::core::state::AppState;
use crate::storage::sync;
use tracing::info;

/// Join a club for the current user.
///
/// One club per category: a second join in a claimed category is rejected
/// with the name of the club already held, and nothing changes. A successful
/// join mutates the roster and the membership index, persists both, and
/// drops the session back to a refreshed list view.
pub fn join_club(state: &AppState, view: &mut SessionView, id: u32) {
    let ttl = state.config.ui.message_ttl_ms;

    let message = match try_join(state, view, id) {
        Ok(club_name) => format!("You joined {}", club_name),
        Err(e) => e.to_string(),
    };

    view.show_notice(message, ttl);
}

fn try_join(state: &AppState, view: &mut SessionView, id: u32) -> Result<String, ActionError> {
    let user = view.current_user.as_ref().ok_or(ActionError::AuthRequired {
        action: "join a club",
    })?;

    let club = state
        .club_store
        .get(id)
        .ok_or(ActionError::ClubNotFound(id))?;

    let key = user.key();

    if let Some(held_id) = state.membership.joined_club(&key, &club.category) {
        let club_name = state
            .club_store
            .name_of(held_id)
            .unwrap_or_else(|| format!("club #{}", held_id));
        return Err(ActionError::AlreadyJoined { club_name });
    }

    state.club_store.record_join(id, user.roster_entry());
    state.membership.record(key, club.category.clone(), id);
    info!(club = %club.name, user = %user.name, "Club joined");

    sync::persist_clubs(state);
    sync::persist_membership(state);

    // Back to a refreshed list view: rerun the pending query against the
    // updated roster, then clear it along with the selection.
    view.results = state.club_store.search(&view.query);
    view.selected = None;
    view.query.clear();

    Ok(club.name)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::state::testing::temp_state;
    use crate::handlers::{search, session};
    use crate::models::club::Club;
    use crate::models::user::User;
    use crate::storage::local_store::slots;
    use std::collections::BTreeMap;

    fn club(id: u32, name: &str, category: &str, views: u32) -> Club {
        Club {
            id,
            name: name.to_string(),
            category: category.to_string(),
            bulletin: String::new(),
            contact: String::new(),
            views,
            members: Vec::new(),
        }
    }

    fn alice_session() -> (AppState, SessionView, tempfile::TempDir) {
        let (state, dir) = temp_state();
        state.club_store.replace_all(vec![
            club(1, "Chess Club", "Games", 10),
            club(2, "Checkers Club", "Games", 5),
            club(3, "Robotics Club", "Technical", 20),
        ]);

        let mut view = SessionView::default();
        session::login(&state, &mut view, "Alice", "101");
        (state, view, dir)
    }

    #[test]
    fn test_first_join_updates_roster_and_index() {
        let (state, mut view, _dir) = alice_session();

        join_club(&state, &mut view, 1);

        let chess = state.club_store.get(1).unwrap();
        assert_eq!(chess.views, 11);
        assert_eq!(chess.members, vec!["Alice (101)".to_string()]);

        let key = User::new("Alice", "101").key();
        assert_eq!(state.membership.joined_club(&key, "Games"), Some(1));
        assert_eq!(view.notice(), Some("You joined Chess Club"));
    }

    #[test]
    fn test_second_join_in_category_is_rejected_without_state_change() {
        let (state, mut view, _dir) = alice_session();

        join_club(&state, &mut view, 1);
        join_club(&state, &mut view, 2);

        assert_eq!(
            view.notice(),
            Some("You already joined \"Chess Club\" in this category.")
        );

        // Club 2 untouched, index still points at club 1.
        let checkers = state.club_store.get(2).unwrap();
        assert_eq!(checkers.views, 5);
        assert!(checkers.members.is_empty());

        let key = User::new("Alice", "101").key();
        assert_eq!(state.membership.joined_club(&key, "Games"), Some(1));
    }

    #[test]
    fn test_join_in_another_category_is_allowed() {
        let (state, mut view, _dir) = alice_session();

        join_club(&state, &mut view, 1);
        join_club(&state, &mut view, 3);

        let key = User::new("Alice", "101").key();
        assert_eq!(state.membership.joined_club(&key, "Games"), Some(1));
        assert_eq!(state.membership.joined_club(&key, "Technical"), Some(3));
    }

    #[test]
    fn test_two_users_can_join_the_same_category() {
        let (state, mut view, _dir) = alice_session();

        join_club(&state, &mut view, 1);

        session::login(&state, &mut view, "Bob", "202");
        join_club(&state, &mut view, 2);

        let checkers = state.club_store.get(2).unwrap();
        assert_eq!(checkers.views, 6);
        assert_eq!(checkers.members, vec!["Bob (202)".to_string()]);
    }

    #[test]
    fn test_join_resets_to_refreshed_list_view() {
        let (state, mut view, _dir) = alice_session();

        search::set_query(&mut view, "Chess");
        search::search(&state, &mut view);
        assert_eq!(view.results.len(), 1);

        search::select_club(&state, &mut view, 1);
        join_club(&state, &mut view, 1);

        // Results were recomputed with the pending query, then the query and
        // selection were cleared.
        assert!(view.selected.is_none());
        assert!(view.query.is_empty());
        let ids: Vec<u32> = view.results.iter().map(|c| c.id).collect();
        assert_eq!(ids, vec![1]);
        assert_eq!(view.results[0].views, 11);
    }

    #[test]
    fn test_join_without_login_is_rejected() {
        let (state, _view, _dir) = alice_session();

        let mut anon = SessionView::default();
        join_club(&state, &mut anon, 1);

        assert_eq!(anon.notice(), Some("Login first to join a club"));
        assert_eq!(state.club_store.get(1).unwrap().views, 10);
    }

    #[test]
    fn test_join_unknown_club_is_rejected() {
        let (state, mut view, _dir) = alice_session();

        join_club(&state, &mut view, 99);
        assert_eq!(view.notice(), Some("No club with id 99"));
    }

    #[test]
    fn test_join_persists_both_slots() {
        let (state, mut view, _dir) = alice_session();

        join_club(&state, &mut view, 1);

        let clubs: Option<Vec<Club>> = state.storage.read_slot(slots::CLUBS);
        assert_eq!(clubs.unwrap().iter().find(|c| c.id == 1).unwrap().views, 11);

        let blob: Option<BTreeMap<String, BTreeMap<String, u32>>> =
            state.storage.read_slot(slots::MEMBERSHIP);
        let blob = blob.unwrap();
        assert_eq!(blob.len(), 1);
        let categories = blob.values().next().unwrap();
        assert_eq!(categories.get("Games"), Some(&1));
    }

    #[test]
    fn test_views_monotonic_across_many_joins() {
        let (state, mut view, _dir) = alice_session();

        // Ten distinct users each join the chess club once.
        for i in 0..10 {
            session::login(&state, &mut view, &format!("User{}", i), &format!("{}", i));
            join_club(&state, &mut view, 1);
        }

        let chess = state.club_store.get(1).unwrap();
        assert_eq!(chess.views, 20);
        assert_eq!(chess.members.len(), 10);
    }
}
