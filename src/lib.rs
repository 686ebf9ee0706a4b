//! Matchclock - a drift-free broadcast clock engine
//!
//! This library keeps a visible elapsed-time counter accurate and smooth
//! even when the host application's primary thread is busy. Time is never
//! accumulated tick by tick: every read recomputes the elapsed duration
//! from a monotonic anchor, so scheduling delays can never compound into
//! drift.
//!
//! Two variants share the same timekeeping core:
//! - [`engine::ClockEngine`] - a background worker that also owns a
//!   drawing surface and repaints it only when the displayed second
//!   changes.
//! - [`store::AnchorStore`] - a reactive snapshot store for hosts that
//!   render the clock themselves.

pub mod api;
pub mod config;
pub mod engine;
pub mod format;
pub mod render;
pub mod state;
pub mod store;
pub mod utils;

// Re-export commonly used types
pub use api::{create_router, AppState};
pub use config::Config;
pub use engine::{ClockController, ClockEngine, Command, EngineOptions};
pub use format::format_time;
pub use render::{ClockStyle, NullSurface, Surface, TerminalSurface};
pub use state::{ClockSnapshot, ClockState, Direction};
pub use store::{AnchorStore, StoreOptions};
pub use utils::shutdown_signal;
