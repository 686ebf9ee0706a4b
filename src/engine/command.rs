//! Engine command protocol
//!
//! The closed set of messages a controller may send to a render engine.
//! On the wire this is the tagged form `{"type": "SET_TIME", "payload":
//! {"seconds": 90}}`; unknown tags fail to deserialize and are rejected at
//! the boundary instead of reaching the state machine.

use serde::{Deserialize, Serialize};

use crate::render::ClockStyle;
use crate::state::Direction;

/// A single engine command.
///
/// Commands are processed in the order they are sent, by exactly one
/// consumer; none of them carries a timestamp, because the engine always
/// samples its own monotonic clock when the command is applied.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", content = "payload", rename_all = "SCREAMING_SNAKE_CASE")]
pub enum Command {
    /// Begin counting from the current position.
    Start,
    /// Freeze the elapsed time into the base and stop counting.
    Pause,
    /// Jump to an absolute second count.
    SetTime { seconds: i64 },
    /// Shift the current value by a signed number of seconds.
    #[serde(rename_all = "camelCase")]
    AdjustTime { delta_seconds: i64 },
    /// Switch the counting direction from this instant on.
    SetDirection { direction: Direction },
    /// Update the drawing surface dimensions; forces a repaint.
    Resize { width: u16, height: u16, scale: f32 },
    /// Replace the visual configuration; forces a repaint.
    UpdateConfig(ClockStyle),
}

impl Command {
    /// Wire tag of this command, for logging and action tracking.
    pub fn label(&self) -> &'static str {
        match self {
            Command::Start => "START",
            Command::Pause => "PAUSE",
            Command::SetTime { .. } => "SET_TIME",
            Command::AdjustTime { .. } => "ADJUST_TIME",
            Command::SetDirection { .. } => "SET_DIRECTION",
            Command::Resize { .. } => "RESIZE",
            Command::UpdateConfig(_) => "UPDATE_CONFIG",
        }
    }
}
