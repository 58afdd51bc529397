// ABOUTME: Monotonic microsecond UTC timestamps used to name durable artifacts.
// ABOUTME: Successive stamps from one clock are strictly increasing.

use chrono::{NaiveDateTime, SubsecRound, TimeDelta, Utc};
use parking_lot::Mutex;

/// `strftime` pattern for artifact ids; sorts lexically in time order.
pub const STAMP_FORMAT: &str = "%Y%m%d_%H%M%S_%6f";

/// Issues strictly increasing UTC timestamps at microsecond resolution.
///
/// UTC keeps ids ordered across processes and daylight-saving changes.
/// When the wall clock has not advanced past the previous stamp (two calls
/// in the same microsecond, or the clock stepping backwards) the next stamp
/// is the previous one plus one microsecond.
#[derive(Debug, Default)]
pub struct StampClock {
    last: Mutex<Option<NaiveDateTime>>,
}

impl StampClock {
    pub fn new() -> Self {
        Self::default()
    }

    /// Next timestamp, strictly after every earlier one from this clock.
    pub fn next(&self) -> NaiveDateTime {
        let now = Utc::now().naive_utc().trunc_subsecs(6);
        let mut last = self.last.lock();
        let stamp = match *last {
            Some(prev) if now <= prev => prev + TimeDelta::microseconds(1),
            _ => now,
        };
        *last = Some(stamp);
        stamp
    }

    /// Next timestamp rendered with [`STAMP_FORMAT`].
    pub fn next_id(&self) -> (String, NaiveDateTime) {
        let stamp = self.next();
        (stamp.format(STAMP_FORMAT).to_string(), stamp)
    }
}

#[cfg(test)]
mod tests {
    use std::collections::HashSet;

    use super::*;

    #[test]
    fn test_stamps_strictly_increase() {
        let clock = StampClock::new();
        let mut prev = clock.next();
        for _ in 0..10_000 {
            let next = clock.next();
            assert!(next > prev);
            prev = next;
        }
    }

    #[test]
    fn test_ids_are_unique_and_sorted() {
        let clock = StampClock::new();
        let ids: Vec<String> = (0..2_000).map(|_| clock.next_id().0).collect();

        let unique: HashSet<_> = ids.iter().collect();
        assert_eq!(unique.len(), ids.len());

        let mut sorted = ids.clone();
        sorted.sort();
        assert_eq!(sorted, ids);
    }

    #[test]
    fn test_stamps_track_utc() {
        let before = Utc::now().naive_utc().trunc_subsecs(6);
        let stamp = StampClock::new().next();
        let after = Utc::now().naive_utc();
        assert!(stamp >= before && stamp <= after, "{} not in [{}, {}]", stamp, before, after);
    }

    #[test]
    fn test_id_format() {
        let (id, _) = StampClock::new().next_id();
        // YYYYMMDD_HHMMSS_ffffff
        assert_eq!(id.len(), 22);
        assert_eq!(id.as_bytes()[8], b'_');
        assert_eq!(id.as_bytes()[15], b'_');
    }
}
