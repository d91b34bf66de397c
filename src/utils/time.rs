use std::time::{SystemTime, UNIX_EPOCH};

/// Milliseconds since the Unix epoch. Drives transient notice expiry.
pub fn now_millis() -> i64 {
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .expect("System time is before Unix epoch")
        .as_millis() as i64
}
