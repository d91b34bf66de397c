// Write-through persistence: every mutation of a durable structure rewrites
// its whole slot. Failures degrade to a warning; the in-memory session keeps
// going.

use crate::core::state::AppState;
use crate::models::user::User;
use crate::storage::local_store::slots;
use tracing::warn;

pub fn persist_clubs(state: &AppState) {
    if let Err(e) = state
        .storage
        .write_slot(slots::CLUBS, &state.club_store.snapshot())
    {
        warn!(slot = slots::CLUBS, error = %e, "Failed to persist club roster");
    }
}

pub fn persist_membership(state: &AppState) {
    if let Err(e) = state
        .storage
        .write_slot(slots::MEMBERSHIP, &state.membership.export())
    {
        warn!(slot = slots::MEMBERSHIP, error = %e, "Failed to persist membership index");
    }
}

/// Persists the user, or `null` after logout.
pub fn persist_current_user(state: &AppState, user: Option<&User>) {
    if let Err(e) = state.storage.write_slot(slots::CURRENT_USER, &user) {
        warn!(slot = slots::CURRENT_USER, error = %e, "Failed to persist current user");
    }
}
