//! Clock state machine and anchor-time math
//!
//! The clock never counts ticks. It stores a base duration plus the
//! monotonic instant it last started running, and every read recomputes
//! the current duration from those two anchors. A late wake-up therefore
//! produces a correct value on its next opportunity; scheduling jitter
//! cannot compound.

use std::time::Instant;

use serde::{Deserialize, Serialize};

/// Counting direction applied to time elapsed since the anchor.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum Direction {
    Forward,
    Reverse,
}

impl Direction {
    /// Sign multiplier for elapsed milliseconds.
    pub fn sign(self) -> i64 {
        match self {
            Direction::Forward => 1,
            Direction::Reverse => -1,
        }
    }
}

/// Canonical timekeeping state for one clock instance.
///
/// Exactly one task owns a `ClockState` at a time; there is no interior
/// locking here. All methods take an explicit `now` so callers (and tests)
/// control the monotonic sample point.
#[derive(Debug, Clone)]
pub struct ClockState {
    /// Accumulated signed milliseconds; authoritative while stopped.
    base_duration_ms: i64,
    /// Instant of the last transition into the running state.
    /// `None` while stopped, so a stale anchor is unrepresentable.
    anchor: Option<Instant>,
    direction: Direction,
    stop_at_zero: bool,
}

impl ClockState {
    /// Create a stopped clock holding `initial_seconds`.
    pub fn new(initial_seconds: i64, direction: Direction, stop_at_zero: bool) -> Self {
        Self {
            base_duration_ms: initial_seconds.saturating_mul(1000),
            anchor: None,
            direction,
            stop_at_zero,
        }
    }

    pub fn is_running(&self) -> bool {
        self.anchor.is_some()
    }

    pub fn direction(&self) -> Direction {
        self.direction
    }

    /// Signed milliseconds elapsed since the anchor, with direction applied.
    fn anchored_elapsed_ms(&self, now: Instant) -> i64 {
        match self.anchor {
            Some(anchor) => {
                let elapsed = now.saturating_duration_since(anchor).as_millis() as i64;
                self.direction.sign() * elapsed
            }
            None => 0,
        }
    }

    /// The true current duration in milliseconds.
    pub fn current_duration_ms(&self, now: Instant) -> i64 {
        self.base_duration_ms
            .saturating_add(self.anchored_elapsed_ms(now))
    }

    /// Display second count: the duration floored toward negative infinity.
    /// Sign handling for display happens in the formatter, which operates
    /// on the absolute value and prefixes `-`.
    pub fn current_second(&self, now: Instant) -> i64 {
        self.current_duration_ms(now).div_euclid(1000)
    }

    /// START: anchor to `now` and run. No-op if already running.
    pub fn start(&mut self, now: Instant) {
        if self.anchor.is_none() {
            self.anchor = Some(now);
        }
    }

    /// PAUSE: collapse elapsed time into the base and stop.
    /// No-op if already stopped.
    pub fn pause(&mut self, now: Instant) {
        if self.anchor.is_some() {
            self.base_duration_ms = self.current_duration_ms(now);
            self.anchor = None;
        }
    }

    /// SET_TIME: jump to an absolute second count. Re-anchors when running
    /// so the new value takes effect without inheriting prior elapsed time.
    /// Out-of-range values are ignored.
    pub fn set_time(&mut self, seconds: i64, now: Instant) {
        let Some(ms) = seconds.checked_mul(1000) else {
            tracing::warn!("Ignoring SET_TIME out of range: {} s", seconds);
            return;
        };
        self.base_duration_ms = ms;
        if self.anchor.is_some() {
            self.anchor = Some(now);
        }
    }

    /// ADJUST_TIME: shift the base by a signed delta. The anchor is left
    /// untouched, so a running clock keeps its already-elapsed time.
    /// Deltas that would overflow the representation are ignored.
    pub fn adjust_time(&mut self, delta_seconds: i64) {
        let adjusted = delta_seconds
            .checked_mul(1000)
            .and_then(|ms| self.base_duration_ms.checked_add(ms));
        match adjusted {
            Some(ms) => self.base_duration_ms = ms,
            None => tracing::warn!("Ignoring ADJUST_TIME out of range: {} s", delta_seconds),
        }
    }

    /// SET_DIRECTION: collapse elapsed time under the old direction, then
    /// re-anchor and switch. The new sign only ever applies to time elapsed
    /// after this instant. No-op if the direction is unchanged.
    pub fn set_direction(&mut self, direction: Direction, now: Instant) {
        if self.direction == direction {
            return;
        }
        if self.anchor.is_some() {
            self.base_duration_ms = self.current_duration_ms(now);
            self.anchor = Some(now);
        }
        self.direction = direction;
    }

    /// Stop-at-zero clamp: while counting in reverse with the clamp armed,
    /// a duration at or below zero pins the clock to exactly 0 and stops
    /// it. Returns `true` when the clamp fired. One-way: resuming needs a
    /// fresh START (and SET_TIME to leave zero).
    pub fn clamp_at_zero(&mut self, now: Instant) -> bool {
        if self.stop_at_zero
            && self.direction == Direction::Reverse
            && self.anchor.is_some()
            && self.current_duration_ms(now) <= 0
        {
            self.base_duration_ms = 0;
            self.anchor = None;
            return true;
        }
        false
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::time::Duration;

    fn at(t0: Instant, ms: u64) -> Instant {
        t0 + Duration::from_millis(ms)
    }

    #[test]
    fn stopped_clock_holds_its_base() {
        let t0 = Instant::now();
        let clock = ClockState::new(42, Direction::Forward, false);
        assert_eq!(clock.current_second(at(t0, 10_000)), 42);
        assert!(!clock.is_running());
    }

    #[test]
    fn elapsed_time_is_recomputed_from_the_anchor() {
        let t0 = Instant::now();
        let mut clock = ClockState::new(0, Direction::Forward, false);
        clock.start(t0);
        // No intermediate samples needed: any wake-up lands on the truth.
        assert_eq!(clock.current_second(at(t0, 5_000)), 5);
        assert_eq!(clock.current_second(at(t0, 5_999)), 5);
        assert_eq!(clock.current_second(at(t0, 6_000)), 6);
    }

    #[test]
    fn start_is_idempotent() {
        let t0 = Instant::now();
        let mut clock = ClockState::new(0, Direction::Forward, false);
        clock.start(t0);
        clock.start(at(t0, 3_000));
        assert_eq!(clock.current_second(at(t0, 5_000)), 5);
    }

    #[test]
    fn pause_freezes_elapsed_time_into_the_base() {
        let t0 = Instant::now();
        let mut clock = ClockState::new(10, Direction::Forward, false);
        clock.start(t0);
        clock.pause(at(t0, 2_500));
        assert!(!clock.is_running());
        assert_eq!(clock.current_duration_ms(at(t0, 60_000)), 12_500);
        // Resume: elapsed time accumulates on top of the frozen base.
        clock.start(at(t0, 60_000));
        assert_eq!(clock.current_second(at(t0, 61_000)), 13);
    }

    #[test]
    fn pause_when_stopped_is_a_no_op() {
        let t0 = Instant::now();
        let mut clock = ClockState::new(7, Direction::Forward, false);
        clock.pause(at(t0, 1_000));
        assert_eq!(clock.current_second(at(t0, 2_000)), 7);
    }

    #[test]
    fn set_time_re_anchors_a_running_clock() {
        let t0 = Instant::now();
        let mut clock = ClockState::new(0, Direction::Forward, false);
        clock.start(t0);
        clock.set_time(100, at(t0, 2_500));
        // 1.5 s after the re-anchor: 100 + 1 = 101, old elapsed discarded.
        assert_eq!(clock.current_second(at(t0, 4_000)), 101);
    }

    #[test]
    fn adjust_time_preserves_the_anchor() {
        let t0 = Instant::now();
        let mut clock = ClockState::new(0, Direction::Forward, false);
        clock.start(t0);
        clock.adjust_time(30);
        // Base shift plus the 2 s already elapsed since t0.
        assert_eq!(clock.current_second(at(t0, 2_000)), 32);
        clock.adjust_time(-40);
        assert_eq!(clock.current_second(at(t0, 2_000)), -8);
    }

    #[test]
    fn reverse_direction_counts_down() {
        let t0 = Instant::now();
        let mut clock = ClockState::new(10, Direction::Reverse, false);
        clock.start(t0);
        assert_eq!(clock.current_second(at(t0, 3_000)), 7);
        // Without the clamp the count crosses zero and keeps going.
        assert_eq!(clock.current_second(at(t0, 12_000)), -2);
    }

    #[test]
    fn direction_switch_never_rewrites_elapsed_time() {
        let t0 = Instant::now();
        let mut clock = ClockState::new(0, Direction::Forward, false);
        clock.start(t0);
        clock.set_direction(Direction::Reverse, at(t0, 5_000));
        // 5 s counted up, then 2 s counted down: 5 - 2 = 3.
        assert_eq!(clock.current_second(at(t0, 7_000)), 3);
    }

    #[test]
    fn direction_switch_while_stopped_changes_sign_only() {
        let t0 = Instant::now();
        let mut clock = ClockState::new(5, Direction::Forward, false);
        clock.set_direction(Direction::Reverse, t0);
        assert_eq!(clock.current_second(t0), 5);
        clock.start(t0);
        assert_eq!(clock.current_second(at(t0, 2_000)), 3);
    }

    #[test]
    fn redundant_direction_switch_is_a_no_op() {
        let t0 = Instant::now();
        let mut clock = ClockState::new(0, Direction::Forward, false);
        clock.start(t0);
        clock.set_direction(Direction::Forward, at(t0, 4_000));
        assert_eq!(clock.current_second(at(t0, 5_000)), 5);
    }

    #[test]
    fn clamp_stops_exactly_at_zero() {
        let t0 = Instant::now();
        let mut clock = ClockState::new(10, Direction::Reverse, true);
        clock.start(t0);
        assert!(!clock.clamp_at_zero(at(t0, 9_000)));
        assert!(clock.clamp_at_zero(at(t0, 11_000)));
        assert!(!clock.is_running());
        assert_eq!(clock.current_duration_ms(at(t0, 20_000)), 0);
    }

    #[test]
    fn clamp_does_not_arm_counting_forward() {
        let t0 = Instant::now();
        let mut clock = ClockState::new(-5, Direction::Forward, true);
        clock.start(t0);
        assert!(!clock.clamp_at_zero(at(t0, 10_000)));
        assert_eq!(clock.current_second(at(t0, 10_000)), 5);
    }

    #[test]
    fn negative_durations_floor_toward_negative_infinity() {
        let t0 = Instant::now();
        let mut clock = ClockState::new(0, Direction::Reverse, false);
        clock.start(t0);
        // -500 ms is already inside second -1.
        assert_eq!(clock.current_second(at(t0, 500)), -1);
        assert_eq!(clock.current_second(at(t0, 1_000)), -1);
        assert_eq!(clock.current_second(at(t0, 2_000)), -2);
    }

    #[test]
    fn out_of_range_commands_leave_state_untouched() {
        let t0 = Instant::now();
        let mut clock = ClockState::new(30, Direction::Forward, false);
        clock.set_time(i64::MAX, t0);
        assert_eq!(clock.current_second(t0), 30);
        clock.adjust_time(i64::MAX);
        assert_eq!(clock.current_second(t0), 30);
    }
}
