//! Paint sequence
//!
//! One full repaint of the clock face. The caller decides *when* to paint
//! (dirty check, forced repaint after resize/config changes); this module
//! only knows *how*.

use anyhow::Result;

use super::{ClockStyle, Surface};
use crate::format::format_time;

/// Liveness indicator color.
const DOT_COLOR: &str = "#ef4444";

/// Repaint the surface for a display second count.
///
/// Order: clear, background, centered time string, then the optional
/// liveness dot on even absolute seconds. A surface with no area yet
/// (before the first resize) skips the frame entirely.
pub fn paint(surface: &mut dyn Surface, style: &ClockStyle, display_seconds: i64) -> Result<()> {
    let (width, height) = surface.size();
    if width == 0 || height == 0 {
        return Ok(());
    }

    surface.clear()?;
    surface.fill_background(&style.background_color)?;

    let text = format_time(display_seconds, &style.time_format);
    surface.draw_text_centered(&text, style)?;

    if style.show_dot && display_seconds.unsigned_abs() % 2 == 0 {
        surface.draw_indicator_dot(DOT_COLOR)?;
    }

    surface.present()
}
