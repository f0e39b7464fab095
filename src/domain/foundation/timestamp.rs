//! Timestamp value object for immutable points in time.

use chrono::{DateTime, Duration, Utc};
use serde::{Deserialize, Serialize};

/// Immutable point in time, always UTC.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Timestamp(DateTime<Utc>);

impl Timestamp {
    /// Creates a timestamp for the current moment.
    pub fn now() -> Self {
        Self(Utc::now())
    }

    /// Returns the duration from another timestamp to this one.
    pub fn duration_since(&self, other: &Timestamp) -> Duration {
        self.0.signed_duration_since(other.0)
    }

    /// RFC 3339 rendering used in API responses.
    pub fn to_rfc3339(&self) -> String {
        self.0.to_rfc3339()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    #[test]
    fn duration_since_is_signed() {
        let earlier = Timestamp(Utc.with_ymd_and_hms(2024, 1, 1, 0, 0, 0).unwrap());
        let later = Timestamp(Utc.with_ymd_and_hms(2024, 1, 1, 0, 5, 0).unwrap());
        assert_eq!(later.duration_since(&earlier), Duration::minutes(5));
        assert_eq!(earlier.duration_since(&later), Duration::minutes(-5));
    }

    #[test]
    fn rfc3339_rendering() {
        let ts = Timestamp(Utc.with_ymd_and_hms(2024, 3, 15, 10, 30, 0).unwrap());
        assert_eq!(ts.to_rfc3339(), "2024-03-15T10:30:00+00:00");
    }
}
