//! Drawing surface abstraction

use anyhow::Result;

use super::ClockStyle;

/// A drawing surface owned exclusively by one render engine.
///
/// The surface moves into the engine at spawn and never comes back; tearing
/// the engine down drops the surface, and a subsequent engine instance must
/// be given a freshly constructed one.
pub trait Surface: Send {
    /// Current drawable size in surface units (cells, pixels, ...).
    fn size(&self) -> (u16, u16);

    /// Update the drawable size. Scale is a device-pixel-ratio hint for
    /// surfaces that care about it.
    fn resize(&mut self, width: u16, height: u16, scale: f32);

    /// Clear all previously drawn content.
    fn clear(&mut self) -> Result<()>;

    /// Fill the whole surface with a background color.
    fn fill_background(&mut self, color: &str) -> Result<()>;

    /// Draw the formatted time string centered on the surface.
    fn draw_text_centered(&mut self, text: &str, style: &ClockStyle) -> Result<()>;

    /// Draw the liveness indicator dot near the top-right corner.
    fn draw_indicator_dot(&mut self, color: &str) -> Result<()>;

    /// Make everything drawn since the last present visible.
    fn present(&mut self) -> Result<()>;
}

/// A surface that discards every draw call.
///
/// Useful for hosts that want the engine's timekeeping and command protocol
/// without any visual output, and for tests.
#[derive(Debug, Default)]
pub struct NullSurface {
    size: (u16, u16),
}

impl NullSurface {
    pub fn new() -> Self {
        Self::default()
    }
}

impl Surface for NullSurface {
    fn size(&self) -> (u16, u16) {
        self.size
    }

    fn resize(&mut self, width: u16, height: u16, _scale: f32) {
        self.size = (width, height);
    }

    fn clear(&mut self) -> Result<()> {
        Ok(())
    }

    fn fill_background(&mut self, _color: &str) -> Result<()> {
        Ok(())
    }

    fn draw_text_centered(&mut self, _text: &str, _style: &ClockStyle) -> Result<()> {
        Ok(())
    }

    fn draw_indicator_dot(&mut self, _color: &str) -> Result<()> {
        Ok(())
    }

    fn present(&mut self) -> Result<()> {
        Ok(())
    }
}
