use serde::{Deserialize, Serialize};

/// A club record. `views` doubles as the member count shown in the UI: it
/// goes up by one on every successful join and never comes back down.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Club {
    pub id: u32,
    pub name: String,
    pub category: String,
    pub bulletin: String,
    pub contact: String,
    pub views: u32,
    #[serde(default)]
    pub members: Vec<String>,
}

/// A club as it appears in the seed dataset: no roster yet.
#[derive(Clone, Debug, Deserialize)]
pub struct SeedClub {
    pub id: u32,
    pub name: String,
    pub category: String,
    pub bulletin: String,
    pub contact: String,
    pub views: u32,
}

impl From<SeedClub> for Club {
    fn from(seed: SeedClub) -> Self {
        Club {
            id: seed.id,
            name: seed.name,
            category: seed.category,
            bulletin: seed.bulletin,
            contact: seed.contact,
            views: seed.views,
            members: Vec::new(),
        }
    }
}
