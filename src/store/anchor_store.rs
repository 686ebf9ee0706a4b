//! Reactive anchor store
//!
//! The non-rendering variant of the clock: same anchor math, no surface.
//! The store keeps the canonical `ClockState` behind a mutex, computes an
//! immutable snapshot on demand, and publishes it through a watch channel
//! so a host UI can subscribe without being woken for no-op recomputations.

use std::sync::{Arc, Mutex, MutexGuard, PoisonError};
use std::time::{Duration, Instant};

use tokio::sync::watch;
use tokio::task::JoinHandle;
use tracing::info;

use super::tick;
use crate::state::{ClockSnapshot, ClockState, Direction};

/// Store construction options.
#[derive(Debug, Clone)]
pub struct StoreOptions {
    pub initial_seconds: i64,
    pub direction: Direction,
    pub stop_at_zero: bool,
    /// Display format template shared with the render side.
    pub time_format: String,
    /// Tick-source wake-up period. Bounds how stale the published snapshot
    /// can get while running; it never affects accuracy.
    pub tick_period: Duration,
}

impl Default for StoreOptions {
    fn default() -> Self {
        Self {
            initial_seconds: 0,
            direction: Direction::Forward,
            stop_at_zero: false,
            time_format: "hh:mm:ss".to_string(),
            tick_period: Duration::from_millis(200),
        }
    }
}

pub(crate) struct StoreInner {
    clock: Mutex<ClockState>,
    time_format: String,
    snapshot_tx: watch::Sender<ClockSnapshot>,
    running_tx: watch::Sender<bool>,
}

impl StoreInner {
    fn clock(&self) -> MutexGuard<'_, ClockState> {
        // A poisoned lock only means another thread panicked mid-command;
        // the state itself is always transition-consistent.
        self.clock.lock().unwrap_or_else(PoisonError::into_inner)
    }

    /// Recompute the snapshot and publish it only if a field changed.
    /// Returns whether subscribers were notified.
    pub(crate) fn refresh(&self) -> bool {
        let now = Instant::now();
        let (snapshot, clamped) = {
            let mut clock = self.clock();
            let clamped = clock.clamp_at_zero(now);
            (
                ClockSnapshot::capture(&clock, &self.time_format, now),
                clamped,
            )
        };
        if clamped {
            info!("Clock reached zero, stopping");
            let _ = self.running_tx.send(false);
        }
        self.snapshot_tx.send_if_modified(|current| {
            if *current != snapshot {
                *current = snapshot;
                true
            } else {
                false
            }
        })
    }
}

/// Single source of truth for hosts that render the clock themselves.
///
/// Every command recomputes the snapshot immediately, so a caller reads
/// its own writes without waiting for the next tick. Dropping the store
/// stops the tick source.
pub struct AnchorStore {
    inner: Arc<StoreInner>,
    ticker: JoinHandle<()>,
}

impl AnchorStore {
    /// Create a stopped store holding `initial_seconds`, with defaults for
    /// everything else. Must be called within a tokio runtime.
    pub fn new(initial_seconds: i64) -> Self {
        Self::with_options(StoreOptions {
            initial_seconds,
            ..StoreOptions::default()
        })
    }

    pub fn with_options(options: StoreOptions) -> Self {
        let clock = ClockState::new(
            options.initial_seconds,
            options.direction,
            options.stop_at_zero,
        );
        let initial = ClockSnapshot::capture(&clock, &options.time_format, Instant::now());
        let (snapshot_tx, _) = watch::channel(initial);
        let (running_tx, running_rx) = watch::channel(false);

        let inner = Arc::new(StoreInner {
            clock: Mutex::new(clock),
            time_format: options.time_format,
            snapshot_tx,
            running_tx,
        });
        let ticker = tokio::spawn(tick::tick_task(
            Arc::clone(&inner),
            options.tick_period,
            running_rx,
        ));
        Self { inner, ticker }
    }

    pub fn start(&self) {
        self.inner.clock().start(Instant::now());
        let _ = self.inner.running_tx.send(true);
        self.inner.refresh();
    }

    pub fn pause(&self) {
        self.inner.clock().pause(Instant::now());
        let _ = self.inner.running_tx.send(false);
        self.inner.refresh();
    }

    pub fn set_time(&self, seconds: i64) {
        self.inner.clock().set_time(seconds, Instant::now());
        self.inner.refresh();
    }

    pub fn adjust_time(&self, delta_seconds: i64) {
        self.inner.clock().adjust_time(delta_seconds);
        self.inner.refresh();
    }

    pub fn set_direction(&self, direction: Direction) {
        self.inner.clock().set_direction(direction, Instant::now());
        self.inner.refresh();
    }

    /// The current published snapshot.
    pub fn snapshot(&self) -> ClockSnapshot {
        self.inner.snapshot_tx.borrow().clone()
    }

    /// Subscribe to snapshot replacements. The receiver only wakes when a
    /// snapshot field actually changed.
    pub fn subscribe(&self) -> watch::Receiver<ClockSnapshot> {
        self.inner.snapshot_tx.subscribe()
    }

    /// Recompute now, as a tick-source wake-up would. Returns whether the
    /// published snapshot changed.
    pub fn refresh(&self) -> bool {
        self.inner.refresh()
    }
}

impl Drop for AnchorStore {
    fn drop(&mut self) {
        self.ticker.abort();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn initial_snapshot_is_formatted_and_stopped() {
        let store = AnchorStore::new(3_665);
        let snapshot = store.snapshot();
        assert_eq!(snapshot.display, "01:01:05");
        assert_eq!(snapshot.total_seconds, 3_665);
        assert!(!snapshot.is_running);
    }

    #[tokio::test]
    async fn set_time_is_visible_immediately() {
        let store = AnchorStore::new(0);
        store.set_time(120);
        assert_eq!(store.snapshot().display, "00:02:00");
    }

    #[tokio::test]
    async fn adjust_time_shifts_a_paused_clock() {
        let store = AnchorStore::new(10);
        store.adjust_time(-3);
        assert_eq!(store.snapshot().display, "00:00:07");
        store.adjust_time(55);
        assert_eq!(store.snapshot().display, "00:01:02");
    }

    #[tokio::test]
    async fn unchanged_recomputations_do_not_notify() {
        let store = AnchorStore::new(42);
        let mut rx = store.subscribe();
        assert!(!rx.has_changed().unwrap());

        // Paused clock: recomputing produces an identical snapshot.
        assert!(!store.refresh());
        assert!(!store.refresh());
        assert!(!rx.has_changed().unwrap());

        store.set_time(43);
        assert!(rx.has_changed().unwrap());
        assert_eq!(rx.borrow_and_update().display, "00:00:43");
    }

    #[tokio::test]
    async fn start_notifies_the_running_transition() {
        let store = AnchorStore::new(0);
        let mut rx = store.subscribe();
        store.start();
        assert!(rx.has_changed().unwrap());
        assert!(rx.borrow_and_update().is_running);
        store.pause();
        assert!(!rx.borrow_and_update().is_running);
    }

    #[tokio::test]
    async fn reverse_from_zero_clamps_on_the_first_recomputation() {
        let store = AnchorStore::with_options(StoreOptions {
            initial_seconds: 0,
            direction: Direction::Reverse,
            stop_at_zero: true,
            ..StoreOptions::default()
        });
        store.start();
        let snapshot = store.snapshot();
        assert_eq!(snapshot.total_seconds, 0);
        assert!(!snapshot.is_running);
    }

    #[tokio::test]
    async fn custom_template_flows_through_snapshots() {
        let store = AnchorStore::with_options(StoreOptions {
            initial_seconds: 3_665,
            time_format: "mm:ss".to_string(),
            ..StoreOptions::default()
        });
        assert_eq!(store.snapshot().display, "61:05");
    }
}
