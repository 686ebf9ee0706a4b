//! Render engine module
//!
//! This module contains the background rendering variant of the clock: the
//! command protocol, the worker task that owns the clock state and drawing
//! surface, and the handle/controller pair hosts interact with.

pub mod command;
pub mod handle;
pub(crate) mod worker;

// Re-export main types
pub use command::Command;
pub use handle::{ClockController, ClockEngine, EngineOptions};
