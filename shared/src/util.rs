/// Current UTC timestamp in milliseconds
pub fn now_millis() -> i64 {
    chrono::Utc::now().timestamp_millis()
}

/// Minutes expressed in milliseconds
pub const fn minutes_to_millis(minutes: u32) -> i64 {
    minutes as i64 * 60_000
}

/// Random id for events, commands and notifications
pub fn new_id() -> String {
    uuid::Uuid::new_v4().to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_minutes_to_millis() {
        assert_eq!(minutes_to_millis(0), 0);
        assert_eq!(minutes_to_millis(10), 600_000);
    }

    #[test]
    fn test_new_id_is_unique() {
        assert_ne!(new_id(), new_id());
    }
}
