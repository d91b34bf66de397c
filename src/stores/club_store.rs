use crate::models::club::Club;
use std::sync::RwLock;

/// Ordered club roster. Seeded once at boot, mutated only by successful
/// joins, never shrinks.
pub struct ClubStore {
    clubs: RwLock<Vec<Club>>,
}

impl ClubStore {
    pub fn new() -> Self {
        Self {
            clubs: RwLock::new(Vec::new()),
        }
    }

    /// Replace the whole roster (boot-time restore or first-run seeding).
    pub fn replace_all(&self, clubs: Vec<Club>) {
        *self.clubs.write().unwrap() = clubs;
    }

    /// Full copy of the roster in storage order.
    pub fn snapshot(&self) -> Vec<Club> {
        self.clubs.read().unwrap().clone()
    }

    pub fn get(&self, id: u32) -> Option<Club> {
        self.clubs.read().unwrap().iter().find(|c| c.id == id).cloned()
    }

    /// Name lookup for the duplicate-join message.
    pub fn name_of(&self, id: u32) -> Option<String> {
        self.clubs
            .read()
            .unwrap()
            .iter()
            .find(|c| c.id == id)
            .map(|c| c.name.clone())
    }

    /// Case-insensitive substring match on club names, ordered by view count
    /// descending. The sort is stable, so clubs with equal views keep their
    /// roster order. An empty query matches everything.
    pub fn search(&self, query: &str) -> Vec<Club> {
        let needle = query.to_lowercase();

        let mut results: Vec<Club> = self
            .clubs
            .read()
            .unwrap()
            .iter()
            .filter(|c| c.name.to_lowercase().contains(&needle))
            .cloned()
            .collect();

        results.sort_by(|a, b| b.views.cmp(&a.views));
        results
    }

    /// Apply a successful join: bump the view count and append the member's
    /// display string. Returns false when the id is unknown.
    pub fn record_join(&self, id: u32, roster_entry: String) -> bool {
        let mut clubs = self.clubs.write().unwrap();
        match clubs.iter_mut().find(|c| c.id == id) {
            Some(club) => {
                club.views += 1;
                club.members.push(roster_entry);
                true
            }
            None => false,
        }
    }

    pub fn len(&self) -> usize {
        self.clubs.read().unwrap().len()
    }

    pub fn is_empty(&self) -> bool {
        self.clubs.read().unwrap().is_empty()
    }
}

impl Default for ClubStore {
    fn default() -> Self {
        Self::new()
    }
}
