//! # Resource IDs
//!
//! Timestamp-derived resource identifiers.

use std::sync::atomic::{AtomicI64, Ordering};

use chrono::Utc;

/// Hands out Unix-nanosecond IDs that strictly increase
///
/// Two calls within the same nanosecond (or after the clock stepped back)
/// get `last + 1` instead of the clock reading.
#[derive(Debug, Default)]
pub struct IdGenerator {
    last: AtomicI64,
}

impl IdGenerator {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Next ID as a decimal string
    pub fn next_id(&self) -> String {
        self.next_value().to_string()
    }

    pub fn next_value(&self) -> i64 {
        let now = now_nanos();
        let previous = self
            .last
            .fetch_update(Ordering::SeqCst, Ordering::SeqCst, |last| {
                Some(now.max(last.saturating_add(1)))
            })
            .unwrap_or_else(|last| last);
        now.max(previous.saturating_add(1))
    }
}

fn now_nanos() -> i64 {
    Utc::now()
        .timestamp_nanos_opt()
        .unwrap_or_else(|| Utc::now().timestamp_micros().saturating_mul(1000))
}
