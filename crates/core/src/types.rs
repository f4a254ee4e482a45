/// All record-store primary keys are SQLite INTEGER PRIMARY KEY rowids.
pub type DbId = i64;

/// Table timestamps are whole seconds since the Unix epoch (UTC).
pub type EpochSecs = i64;

/// Current time in epoch seconds, the unit stored in every table.
pub fn now_epoch_secs() -> EpochSecs {
    chrono::Utc::now().timestamp()
}

/// Current time in epoch milliseconds.
///
/// Only upload keys use this unit; tables stay in seconds.
pub fn now_epoch_millis() -> i64 {
    chrono::Utc::now().timestamp_millis()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn seconds_and_millis_differ_by_three_orders_of_magnitude() {
        let secs = now_epoch_secs();
        let millis = now_epoch_millis();
        // Allow for the clock ticking over between the two calls.
        assert!(millis / 1000 >= secs);
        assert!(millis / 1000 - secs <= 1);
    }

    #[test]
    fn epoch_secs_is_after_2024() {
        assert!(now_epoch_secs() > 1_704_067_200);
    }
}
