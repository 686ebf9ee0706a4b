//! Engine handle and controller
//!
//! `ClockEngine` owns the worker task lifecycle; `ClockController` is the
//! cheap, cloneable command surface handed to hosts. Commands are
//! fire-and-forget; a command sent after teardown is dropped silently.

use std::time::Duration;

use tokio::sync::{mpsc, oneshot};
use tokio::task::JoinHandle;
use tracing::{debug, info, warn};

use super::worker::{self, EngineState, WorkerMessage};
use super::Command;
use crate::render::{ClockStyle, Surface};
use crate::state::{ClockSnapshot, Direction};

/// Spawn-time engine configuration (the INIT payload).
#[derive(Debug, Clone)]
pub struct EngineOptions {
    pub initial_seconds: i64,
    pub direction: Direction,
    pub stop_at_zero: bool,
    pub style: ClockStyle,
    /// Render loop frequency in frames per second.
    pub frame_rate: u32,
}

impl Default for EngineOptions {
    fn default() -> Self {
        Self {
            initial_seconds: 0,
            direction: Direction::Forward,
            stop_at_zero: false,
            style: ClockStyle::default(),
            frame_rate: 60,
        }
    }
}

/// The controller surface exposed to a host application.
#[derive(Debug, Clone)]
pub struct ClockController {
    tx: mpsc::UnboundedSender<WorkerMessage>,
}

impl ClockController {
    /// Send a raw protocol command to the engine.
    pub fn dispatch(&self, command: Command) {
        if self.tx.send(WorkerMessage::Command(command)).is_err() {
            debug!("Clock command dropped: engine already shut down");
        }
    }

    pub fn start(&self) {
        self.dispatch(Command::Start);
    }

    pub fn pause(&self) {
        self.dispatch(Command::Pause);
    }

    pub fn set_time(&self, seconds: i64) {
        self.dispatch(Command::SetTime { seconds });
    }

    pub fn adjust_time(&self, delta_seconds: i64) {
        self.dispatch(Command::AdjustTime { delta_seconds });
    }

    pub fn set_direction(&self, direction: Direction) {
        self.dispatch(Command::SetDirection { direction });
    }

    pub fn resize(&self, width: u16, height: u16, scale: f32) {
        self.dispatch(Command::Resize {
            width,
            height,
            scale,
        });
    }

    pub fn update_config(&self, style: ClockStyle) {
        self.dispatch(Command::UpdateConfig(style));
    }

    /// Read the engine's current snapshot.
    ///
    /// The query is queued behind previously sent commands, so the answer
    /// reflects every command this controller dispatched before the call.
    pub async fn snapshot(&self) -> Result<ClockSnapshot, String> {
        let (reply_tx, reply_rx) = oneshot::channel();
        self.tx
            .send(WorkerMessage::Snapshot(reply_tx))
            .map_err(|_| "clock engine is not running".to_string())?;
        reply_rx
            .await
            .map_err(|_| "clock engine stopped before answering".to_string())
    }
}

/// A running render engine instance.
pub struct ClockEngine {
    controller: ClockController,
    worker: JoinHandle<()>,
}

impl ClockEngine {
    /// Spawn the engine worker, taking exclusive ownership of `surface`.
    ///
    /// The initial value is painted immediately; the clock starts stopped
    /// and waits for commands.
    pub fn spawn(surface: Box<dyn Surface>, options: EngineOptions) -> Self {
        let (tx, rx) = mpsc::unbounded_channel();
        let frame_period = Duration::from_secs_f64(1.0 / f64::from(options.frame_rate.max(1)));
        let engine = EngineState::new(surface, &options);
        let worker = tokio::spawn(worker::run(engine, rx, frame_period));
        info!(
            "Clock engine spawned: initial={}s, direction={:?}, stop_at_zero={}, {}fps",
            options.initial_seconds, options.direction, options.stop_at_zero, options.frame_rate
        );
        Self {
            controller: ClockController { tx },
            worker,
        }
    }

    /// A cloneable controller for this engine.
    pub fn controller(&self) -> ClockController {
        self.controller.clone()
    }

    /// Stop the worker, releasing the surface and the background task.
    ///
    /// Safe to call at any time; commands still in the queue are processed
    /// first, commands sent afterwards are dropped.
    pub async fn shutdown(mut self) {
        let _ = self.controller.tx.send(WorkerMessage::Shutdown);
        match tokio::time::timeout(Duration::from_secs(1), &mut self.worker).await {
            Ok(_) => info!("Clock engine shut down"),
            Err(_) => {
                warn!("Clock engine did not stop in time, aborting worker task");
                self.worker.abort();
            }
        }
    }
}
