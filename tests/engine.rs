//! Engine command-flow integration tests
//!
//! These drive a real engine worker through its controller, using a
//! surface that discards all drawing. Snapshot reads are queued behind
//! earlier commands, so every assertion sees its own writes.

use matchclock::{ClockEngine, Direction, EngineOptions, NullSurface};

fn spawn_engine(options: EngineOptions) -> ClockEngine {
    ClockEngine::spawn(Box::new(NullSurface::new()), options)
}

#[tokio::test]
async fn commands_apply_in_order_before_a_snapshot_read() {
    let engine = spawn_engine(EngineOptions::default());
    let controller = engine.controller();

    controller.set_time(3_665);
    let snapshot = controller.snapshot().await.expect("engine should answer");
    assert_eq!(snapshot.display, "01:01:05");
    assert_eq!(snapshot.total_seconds, 3_665);
    assert!(!snapshot.is_running);

    controller.start();
    let snapshot = controller.snapshot().await.expect("engine should answer");
    assert!(snapshot.is_running);

    controller.pause();
    controller.adjust_time(-65);
    let snapshot = controller.snapshot().await.expect("engine should answer");
    assert!(!snapshot.is_running);
    assert_eq!(snapshot.total_seconds, 3_600);
    assert_eq!(snapshot.display, "01:00:00");

    engine.shutdown().await;
}

#[tokio::test]
async fn reverse_with_stop_at_zero_clamps_and_stops() {
    let engine = spawn_engine(EngineOptions {
        direction: Direction::Reverse,
        stop_at_zero: true,
        ..EngineOptions::default()
    });
    let controller = engine.controller();

    controller.start();
    let snapshot = controller.snapshot().await.expect("engine should answer");
    assert_eq!(snapshot.total_seconds, 0);
    assert!(!snapshot.is_running);

    // One-way: a bare START from zero clamps again immediately.
    controller.start();
    let snapshot = controller.snapshot().await.expect("engine should answer");
    assert!(!snapshot.is_running);

    // A fresh SET_TIME re-arms the countdown.
    controller.set_time(30);
    controller.start();
    let snapshot = controller.snapshot().await.expect("engine should answer");
    assert!(snapshot.is_running);
    // Floor semantics: the first sampled second is 30 or, once the first
    // millisecond has elapsed, 29.
    assert!((29..=30).contains(&snapshot.total_seconds));

    engine.shutdown().await;
}

#[tokio::test]
async fn direction_switch_keeps_the_accumulated_value() {
    let engine = spawn_engine(EngineOptions {
        initial_seconds: 10,
        ..EngineOptions::default()
    });
    let controller = engine.controller();

    controller.set_direction(Direction::Reverse);
    let snapshot = controller.snapshot().await.expect("engine should answer");
    assert_eq!(snapshot.total_seconds, 10);

    engine.shutdown().await;
}

#[tokio::test]
async fn commands_after_shutdown_are_dropped_silently() {
    let engine = spawn_engine(EngineOptions::default());
    let controller = engine.controller();
    engine.shutdown().await;

    // Fire-and-forget commands must not panic or error the caller.
    controller.start();
    controller.set_time(99);

    // Reads report the engine as gone.
    assert!(controller.snapshot().await.is_err());
}
