// Application state (AppState)

use crate::core::config::Config;
use crate::storage::local_store::LocalStore;
use crate::stores::{club_store::ClubStore, membership::MembershipIndex};
use std::sync::Arc;

/// Shared application state
///
/// Holds the durable structures and configuration handed to every action
/// handler. The fields are Arc'd so the console loop and tests can clone the
/// state cheaply.
#[derive(Clone)]
pub struct AppState {
    /// Ordered club roster
    pub club_store: Arc<ClubStore>,

    /// Per-user, per-category join index
    pub membership: Arc<MembershipIndex>,

    /// Durable JSON blob slots
    pub storage: Arc<LocalStore>,

    /// Configuration
    pub config: Arc<Config>,
}

impl AppState {
    pub fn new(config: Config, storage: LocalStore) -> Self {
        Self {
            club_store: Arc::new(ClubStore::new()),
            membership: Arc::new(MembershipIndex::new()),
            storage: Arc::new(storage),
            config: Arc::new(config),
        }
    }
}

#[cfg(test)]
pub mod testing {
    use super::*;
    use tempfile::TempDir;

    /// AppState over a throwaway storage directory. The TempDir must stay
    /// alive for as long as the state is used.
    pub fn temp_state() -> (AppState, TempDir) {
        let dir = TempDir::new().unwrap();
        let storage = LocalStore::open(dir.path()).unwrap();
        (AppState::new(Config::default(), storage), dir)
    }
}
