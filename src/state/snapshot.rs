//! Published clock snapshot

use std::time::Instant;

use serde::{Deserialize, Serialize};

use super::ClockState;
use crate::format::format_time;

/// The displayable view of a clock at one instant.
///
/// Snapshots are immutable once published: observers always receive a
/// replacement object, never an in-place mutation, so a reader can never
/// see a half-updated value.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ClockSnapshot {
    /// Formatted display string, e.g. `"00:45:00"`.
    pub display: String,
    /// Whole signed seconds, floored toward negative infinity.
    pub total_seconds: i64,
    pub is_running: bool,
}

impl ClockSnapshot {
    /// Compute the snapshot of `state` at `now` under a display template.
    pub fn capture(state: &ClockState, template: &str, now: Instant) -> Self {
        let total_seconds = state.current_second(now);
        Self {
            display: format_time(total_seconds, template),
            total_seconds,
            is_running: state.is_running(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::state::Direction;
    use std::time::Duration;

    #[test]
    fn snapshot_matches_the_shared_formatter() {
        let t0 = Instant::now();
        let mut clock = ClockState::new(3665, Direction::Forward, false);
        clock.start(t0);
        let now = t0 + Duration::from_millis(2_000);
        let snapshot = ClockSnapshot::capture(&clock, "hh:mm:ss", now);
        assert_eq!(snapshot.total_seconds, 3667);
        assert_eq!(snapshot.display, format_time(3667, "hh:mm:ss"));
        assert!(snapshot.is_running);
    }

    #[test]
    fn negative_totals_render_with_a_sign() {
        let clock = ClockState::new(-65, Direction::Forward, false);
        let snapshot = ClockSnapshot::capture(&clock, "mm:ss", Instant::now());
        assert_eq!(snapshot.display, "-01:05");
        assert_eq!(snapshot.total_seconds, -65);
        assert!(!snapshot.is_running);
    }
}
