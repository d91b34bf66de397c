use crate::models::user::UserKey;
use dashmap::DashMap;
use std::collections::{BTreeMap, HashMap};

/// Which club each user joined, per category. Additive only: the portal has
/// no leave operation, so entries are never removed or overwritten.
pub struct MembershipIndex {
    joined: DashMap<UserKey, HashMap<String, u32>>,
}

impl MembershipIndex {
    pub fn new() -> Self {
        Self {
            joined: DashMap::new(),
        }
    }

    /// Club id the user already holds in this category, if any.
    pub fn joined_club(&self, key: &UserKey, category: &str) -> Option<u32> {
        self.joined
            .get(key)
            .and_then(|categories| categories.get(category).copied())
    }

    /// Record a join. The caller enforces the one-club-per-category rule
    /// before mutating anything; an existing entry is never replaced here.
    pub fn record(&self, key: UserKey, category: String, club_id: u32) {
        self.joined
            .entry(key)
            .or_default()
            .entry(category)
            .or_insert(club_id);
    }

    /// Export for the `joinedByUser` slot. Sorted maps keep the serialized
    /// file deterministic.
    pub fn export(&self) -> BTreeMap<String, BTreeMap<String, u32>> {
        self.joined
            .iter()
            .map(|entry| {
                let categories = entry
                    .value()
                    .iter()
                    .map(|(category, id)| (category.clone(), *id))
                    .collect();
                (entry.key().encode(), categories)
            })
            .collect()
    }

    /// Rebuild the index from a stored blob, skipping keys that do not
    /// decode.
    pub fn restore(&self, blob: BTreeMap<String, BTreeMap<String, u32>>) {
        self.joined.clear();
        for (encoded, categories) in blob {
            match UserKey::decode(&encoded) {
                Some(key) => {
                    self.joined.insert(key, categories.into_iter().collect());
                }
                None => {
                    tracing::warn!(key = %encoded, "Unrecognized membership key, skipping");
                }
            }
        }
    }

    pub fn len(&self) -> usize {
        self.joined.len()
    }

    pub fn is_empty(&self) -> bool {
        self.joined.is_empty()
    }
}

impl Default for MembershipIndex {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::user::User;

    #[test]
    fn test_record_and_lookup() {
        let index = MembershipIndex::new();
        let key = User::new("Alice", "101").key();

        assert!(index.joined_club(&key, "Games").is_none());

        index.record(key.clone(), "Games".to_string(), 1);
        assert_eq!(index.joined_club(&key, "Games"), Some(1));
        assert!(index.joined_club(&key, "Cultural").is_none());
    }

    #[test]
    fn test_record_never_replaces_existing_entry() {
        let index = MembershipIndex::new();
        let key = User::new("Alice", "101").key();

        index.record(key.clone(), "Games".to_string(), 1);
        index.record(key.clone(), "Games".to_string(), 2);

        assert_eq!(index.joined_club(&key, "Games"), Some(1));
    }

    #[test]
    fn test_at_most_one_club_per_category_per_user() {
        let index = MembershipIndex::new();
        let alice = User::new("Alice", "101").key();
        let bob = User::new("Bob", "202").key();

        index.record(alice.clone(), "Games".to_string(), 1);
        index.record(alice.clone(), "Technical".to_string(), 4);
        index.record(bob.clone(), "Games".to_string(), 2);

        let exported = index.export();
        for categories in exported.values() {
            // One id per category is structural; verify the category count
            // matches what was recorded per user.
            assert!(categories.len() <= 2);
        }
        assert_eq!(index.joined_club(&alice, "Games"), Some(1));
        assert_eq!(index.joined_club(&bob, "Games"), Some(2));
    }

    #[test]
    fn test_export_restore_round_trip() {
        let index = MembershipIndex::new();
        let key = User::new("Alice", "101").key();
        index.record(key.clone(), "Games".to_string(), 1);
        index.record(key.clone(), "Cultural".to_string(), 3);

        let restored = MembershipIndex::new();
        restored.restore(index.export());

        assert_eq!(restored.joined_club(&key, "Games"), Some(1));
        assert_eq!(restored.joined_club(&key, "Cultural"), Some(3));
        assert_eq!(restored.len(), 1);
    }

    #[test]
    fn test_restore_skips_undecodable_keys() {
        let mut blob = BTreeMap::new();
        blob.insert(
            "Alice_101".to_string(),
            BTreeMap::from([("Games".to_string(), 1u32)]),
        );

        let index = MembershipIndex::new();
        index.restore(blob);
        assert!(index.is_empty());
    }
}
