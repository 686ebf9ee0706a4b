//! Application state for the control API

use std::sync::Mutex;
use std::time::Instant;

use chrono::{DateTime, Utc};

use crate::engine::ClockController;

/// Shared state behind the HTTP control surface.
#[derive(Debug)]
pub struct AppState {
    /// Controller for the running clock engine.
    pub controller: ClockController,
    /// Server metadata
    pub start_time: Instant,
    pub host: String,
    pub port: u16,
    /// Last command tracking
    last_command: Mutex<Option<String>>,
    last_command_time: Mutex<Option<DateTime<Utc>>>,
}

impl AppState {
    /// Create a new AppState wrapping an engine controller.
    pub fn new(controller: ClockController, host: String, port: u16) -> Self {
        Self {
            controller,
            start_time: Instant::now(),
            host,
            port,
            last_command: Mutex::new(None),
            last_command_time: Mutex::new(None),
        }
    }

    /// Track the most recent command for status reporting.
    pub fn record_command(&self, label: &str) {
        if let Ok(mut last) = self.last_command.lock() {
            *last = Some(label.to_string());
        }
        if let Ok(mut last_time) = self.last_command_time.lock() {
            *last_time = Some(Utc::now());
        }
    }

    /// Get last command information.
    pub fn last_command(&self) -> (Option<String>, Option<DateTime<Utc>>) {
        let last_command = self.last_command.lock().ok().and_then(|c| c.clone());
        let last_command_time = self.last_command_time.lock().ok().and_then(|t| *t);
        (last_command, last_command_time)
    }

    /// Calculate server uptime as a formatted string.
    pub fn uptime(&self) -> String {
        let duration = self.start_time.elapsed();
        let hours = duration.as_secs() / 3600;
        let minutes = (duration.as_secs() % 3600) / 60;
        let seconds = duration.as_secs() % 60;

        if hours > 0 {
            format!("{}h {}m {}s", hours, minutes, seconds)
        } else if minutes > 0 {
            format!("{}m {}s", minutes, seconds)
        } else {
            format!("{}s", seconds)
        }
    }
}
