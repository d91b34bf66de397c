use serde::{Deserialize, Serialize};

/// A logged-in user. Both fields come straight from the free-text login
/// form; no uniqueness is enforced anywhere.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct User {
    pub name: String,
    pub roll: String,
}

impl User {
    pub fn new(name: impl Into<String>, roll: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            roll: roll.into(),
        }
    }

    /// Display string appended to a club roster on join: `"name (roll)"`.
    pub fn roster_entry(&self) -> String {
        format!("{} ({})", self.name, self.roll)
    }

    pub fn key(&self) -> UserKey {
        UserKey {
            name: self.name.clone(),
            roll: self.roll.clone(),
        }
    }
}

/// Composite identity key for membership bookkeeping.
///
/// The storage encoding joins name and roll with the ASCII unit separator,
/// which cannot be typed into the login form, so `("a_b", "c")` and
/// `("a", "b_c")` stay distinct. Identity is still just the name/roll pair:
/// nothing stops two people from logging in with the same pair.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct UserKey {
    pub name: String,
    pub roll: String,
}

const KEY_SEPARATOR: char = '\u{1f}';

impl UserKey {
    /// Encoded form used as the map key in the `joinedByUser` slot.
    pub fn encode(&self) -> String {
        format!("{}{}{}", self.name, KEY_SEPARATOR, self.roll)
    }

    /// Parse an encoded key back into its parts. Returns None for keys
    /// written by something other than `encode`.
    pub fn decode(encoded: &str) -> Option<Self> {
        let (name, roll) = encoded.split_once(KEY_SEPARATOR)?;
        Some(Self {
            name: name.to_string(),
            roll: roll.to_string(),
        })
    }
}
