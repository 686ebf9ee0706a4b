//! Render engine worker
//!
//! The background task that owns a clock and its drawing surface. All
//! engine state lives in one `EngineState` instance constructed at spawn
//! and dropped when the worker stops; nothing is shared, so the worker
//! needs no locks. Commands arrive over an ordered channel, frames come
//! from a timer that only runs while the clock does.

use std::time::{Duration, Instant};

use tokio::sync::{mpsc, oneshot};
use tokio::time::MissedTickBehavior;
use tracing::{debug, warn};

use super::{Command, EngineOptions};
use crate::render::{painter, ClockStyle, Surface};
use crate::state::{ClockSnapshot, ClockState};

/// Messages consumed by the worker task.
pub(crate) enum WorkerMessage {
    Command(Command),
    /// Read the current snapshot. Queued behind earlier commands, so the
    /// reply reflects everything sent before it.
    Snapshot(oneshot::Sender<ClockSnapshot>),
    Shutdown,
}

/// All state owned by one engine worker.
pub(crate) struct EngineState {
    clock: ClockState,
    surface: Box<dyn Surface>,
    style: ClockStyle,
    /// Dirty-check cache: the second most recently painted.
    last_rendered_second: Option<i64>,
}

impl EngineState {
    pub(crate) fn new(surface: Box<dyn Surface>, options: &EngineOptions) -> Self {
        let mut engine = Self {
            clock: ClockState::new(
                options.initial_seconds,
                options.direction,
                options.stop_at_zero,
            ),
            surface,
            style: options.style.clone(),
            last_rendered_second: None,
        };
        engine.repaint(options.initial_seconds);
        engine
    }

    pub(crate) fn is_running(&self) -> bool {
        self.clock.is_running()
    }

    /// Paint `second` and remember it as the last rendered value.
    /// Paint failures are logged, never propagated into the loop.
    fn repaint(&mut self, second: i64) {
        self.last_rendered_second = Some(second);
        if let Err(e) = painter::paint(self.surface.as_mut(), &self.style, second) {
            warn!("Clock repaint failed: {e:#}");
        }
    }

    /// Repaint the last known second, after surface or style changes.
    fn force_repaint(&mut self) {
        if let Some(second) = self.last_rendered_second {
            self.repaint(second);
        }
    }

    /// Apply the stop-at-zero clamp; on the transition, perform the single
    /// final paint of the clamped value.
    fn apply_clamp(&mut self, now: Instant) -> bool {
        if self.clock.clamp_at_zero(now) {
            self.repaint(0);
            return true;
        }
        false
    }

    pub(crate) fn handle_command(&mut self, command: Command, now: Instant) {
        debug!("Processing clock command: {}", command.label());
        match command {
            Command::Start => self.clock.start(now),
            Command::Pause => self.clock.pause(now),
            Command::SetTime { seconds } => {
                self.clock.set_time(seconds, now);
                // Immediate feedback, without waiting for the next frame.
                let second = self.clock.current_second(now);
                self.repaint(second);
            }
            Command::AdjustTime { delta_seconds } => {
                self.clock.adjust_time(delta_seconds);
                let second = self.clock.current_second(now);
                self.repaint(second);
            }
            Command::SetDirection { direction } => self.clock.set_direction(direction, now),
            Command::Resize {
                width,
                height,
                scale,
            } => {
                self.surface.resize(width, height, scale);
                self.force_repaint();
            }
            Command::UpdateConfig(style) => {
                self.style = style;
                self.force_repaint();
            }
        }
    }

    /// One frame: clamp check, then paint only when the displayed second
    /// actually changed since the previous paint.
    pub(crate) fn render_frame(&mut self, now: Instant) {
        if !self.clock.is_running() {
            return;
        }
        if self.apply_clamp(now) {
            return;
        }
        let second = self.clock.current_second(now);
        if self.last_rendered_second != Some(second) {
            self.repaint(second);
        }
    }

    pub(crate) fn snapshot(&mut self, now: Instant) -> ClockSnapshot {
        self.apply_clamp(now);
        ClockSnapshot::capture(&self.clock, &self.style.time_format, now)
    }
}

/// Worker entry point. Runs until a shutdown message arrives or every
/// controller handle is gone, then drops the engine state, releasing the
/// surface.
pub(crate) async fn run(
    mut engine: EngineState,
    mut rx: mpsc::UnboundedReceiver<WorkerMessage>,
    frame_period: Duration,
) {
    let mut frames = tokio::time::interval(frame_period);
    // A late frame should sample the present, not replay the past; the
    // anchor math makes skipped wake-ups harmless.
    frames.set_missed_tick_behavior(MissedTickBehavior::Skip);

    loop {
        tokio::select! {
            message = rx.recv() => match message {
                Some(WorkerMessage::Command(command)) => {
                    engine.handle_command(command, Instant::now());
                }
                Some(WorkerMessage::Snapshot(reply)) => {
                    let _ = reply.send(engine.snapshot(Instant::now()));
                }
                Some(WorkerMessage::Shutdown) | None => break,
            },
            _ = frames.tick(), if engine.is_running() => {
                engine.render_frame(Instant::now());
            }
        }
    }
    debug!("Clock engine worker stopped");
}
