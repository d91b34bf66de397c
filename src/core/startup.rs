// Boot-time restore: load each durable slot, or fall back to its default.
// Missing and malformed slots are treated the same way (see LocalStore).

use crate::core::state::AppState;
use crate::models::club::Club;
use crate::models::user::User;
use crate::storage::local_store::slots;
use crate::stores::seed;
use anyhow::Result;
use std::collections::BTreeMap;
use tracing::info;

/// Restore durable state into the stores and return the persisted current
/// user, if any.
pub fn restore_state(state: &AppState) -> Result<Option<User>> {
    match state.storage.read_slot::<Vec<Club>>(slots::CLUBS) {
        Some(clubs) if !clubs.is_empty() => {
            info!(clubs = clubs.len(), "Club roster restored from storage");
            state.club_store.replace_all(clubs);
        }
        _ => {
            let seeded = seed::load(&state.config.seed)?;
            info!(clubs = seeded.len(), "Club roster seeded from dataset");
            state.club_store.replace_all(seeded);
        }
    }

    if let Some(blob) = state
        .storage
        .read_slot::<BTreeMap<String, BTreeMap<String, u32>>>(slots::MEMBERSHIP)
    {
        state.membership.restore(blob);
        info!(users = state.membership.len(), "Membership index restored");
    }

    let current_user = state
        .storage
        .read_slot::<Option<User>>(slots::CURRENT_USER)
        .flatten();

    Ok(current_user)
}
