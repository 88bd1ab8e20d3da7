/// Current UTC timestamp in milliseconds.
pub fn now_millis() -> i64 {
    chrono::Utc::now().timestamp_millis()
}

/// Today's date in the local timezone.
///
/// Report queries match on calendar dates, so "today" follows the
/// operator's clock rather than UTC.
pub fn today() -> chrono::NaiveDate {
    chrono::Local::now().date_naive()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_now_millis_is_recent() {
        // 2024-01-01 as a lower bound; catches unit mixups (seconds vs millis).
        let ts = now_millis();
        assert!(ts > 1_704_067_200_000);
    }
}
