//! Clock state module
//!
//! This module contains the canonical timekeeping state machine and the
//! immutable snapshot type published to observers.

pub mod clock_state;
pub mod snapshot;

// Re-export main types
pub use clock_state::{ClockState, Direction};
pub use snapshot::ClockSnapshot;
