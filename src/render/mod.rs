//! Rendering module
//!
//! This module contains the visual side of the engine: the style
//! configuration, the surface abstraction the render loop paints into, the
//! paint sequence itself, and the terminal surface implementation.

pub mod painter;
pub mod style;
pub mod surface;
pub mod terminal;

// Re-export main types
pub use style::ClockStyle;
pub use surface::{NullSurface, Surface};
pub use terminal::TerminalSurface;
