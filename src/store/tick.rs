//! Store tick source
//!
//! A background task whose only job is to wake the store while the clock
//! runs. The wake-up carries no time value: the store always recomputes
//! from its own anchors, so a late or skipped tick can never introduce
//! drift, only a bounded display staleness.

use std::sync::Arc;
use std::time::Duration;

use tokio::sync::watch;
use tokio::time::MissedTickBehavior;

use super::anchor_store::StoreInner;

pub(crate) async fn tick_task(
    inner: Arc<StoreInner>,
    period: Duration,
    mut running: watch::Receiver<bool>,
) {
    loop {
        // Sleep until the clock starts running.
        while !*running.borrow() {
            if running.changed().await.is_err() {
                return;
            }
        }

        let mut ticks = tokio::time::interval(period);
        ticks.set_missed_tick_behavior(MissedTickBehavior::Skip);
        loop {
            tokio::select! {
                _ = ticks.tick() => {
                    inner.refresh();
                }
                changed = running.changed() => {
                    if changed.is_err() {
                        return;
                    }
                    if !*running.borrow() {
                        break;
                    }
                }
            }
        }
    }
}
