use crate::models::club::Club;
use crate::models::user::User;
use crate::utils::time::now_millis;

/// A transient status notice.
///
/// At most one notice exists at a time: showing a new one replaces the
/// previous and restarts its delay. Expiry is a deadline checked on read,
/// so no timer thread is needed in the single-threaded loop.
#[derive(Clone, Debug)]
struct Notice {
    text: String,
    expires_at: i64,
}

/// Per-session view state. Only `current_user` survives a reload (via the
/// `currentUser` slot); everything else is rebuilt empty.
#[derive(Default)]
pub struct SessionView {
    pub current_user: Option<User>,
    pub query: String,
    pub results: Vec<Club>,
    pub selected: Option<u32>,
    notice: Option<Notice>,
}

impl SessionView {
    pub fn new(current_user: Option<User>) -> Self {
        Self {
            current_user,
            ..Default::default()
        }
    }

    /// Show a notice, replacing any previous one and restarting its delay.
    pub fn show_notice(&mut self, text: impl Into<String>, ttl_ms: u64) {
        self.notice = Some(Notice {
            text: text.into(),
            expires_at: now_millis() + ttl_ms as i64,
        });
    }

    /// The notice to render, if it has not expired yet.
    pub fn notice(&self) -> Option<&str> {
        match &self.notice {
            Some(notice) if now_millis() < notice.expires_at => Some(notice.text.as_str()),
            _ => None,
        }
    }
}
