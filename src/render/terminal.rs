//! Terminal drawing surface
//!
//! Paints the clock into an alternate-screen terminal via crossterm. The
//! surface takes over stdout for its lifetime and restores the terminal on
//! drop, so logging must go to stderr while a `TerminalSurface` is alive.

use std::io::{self, Stdout, Write};

use anyhow::{Context, Result};
use crossterm::cursor::{Hide, MoveTo, Show};
use crossterm::style::{
    Attribute, Color, Print, ResetColor, SetAttribute, SetBackgroundColor, SetForegroundColor,
};
use crossterm::terminal::{
    self, disable_raw_mode, enable_raw_mode, Clear, ClearType, EnterAlternateScreen,
    LeaveAlternateScreen,
};
use crossterm::{execute, queue};

use super::{ClockStyle, Surface};

/// Map a color string onto a terminal color. Hex `#rrggbb` becomes an RGB
/// color; a few common names are recognized; anything else falls back to
/// the terminal default.
fn parse_color(value: &str) -> Color {
    if let Some(hex) = value.strip_prefix('#') {
        if hex.len() == 6 {
            let channels = (
                u8::from_str_radix(&hex[0..2], 16),
                u8::from_str_radix(&hex[2..4], 16),
                u8::from_str_radix(&hex[4..6], 16),
            );
            if let (Ok(r), Ok(g), Ok(b)) = channels {
                return Color::Rgb { r, g, b };
            }
        }
        return Color::Reset;
    }
    match value.to_ascii_lowercase().as_str() {
        "black" => Color::Black,
        "white" => Color::White,
        "red" => Color::Red,
        "green" => Color::Green,
        "blue" => Color::Blue,
        "yellow" => Color::Yellow,
        "cyan" => Color::Cyan,
        "magenta" => Color::Magenta,
        "grey" | "gray" => Color::Grey,
        _ => Color::Reset,
    }
}

/// A clock face drawn into the terminal's alternate screen.
pub struct TerminalSurface {
    out: Stdout,
    width: u16,
    height: u16,
    background: Color,
}

impl TerminalSurface {
    /// Take over the terminal: raw mode, alternate screen, hidden cursor.
    ///
    /// Fails when stdout is not a usable terminal; the caller is expected
    /// to fall back to a non-rendering mode rather than crash.
    pub fn new() -> Result<Self> {
        let (width, height) = terminal::size().context("failed to query terminal size")?;
        let mut out = io::stdout();
        enable_raw_mode().context("failed to enable raw mode")?;
        execute!(out, EnterAlternateScreen, Hide)
            .context("failed to enter alternate screen")?;
        Ok(Self {
            out,
            width,
            height,
            background: Color::Reset,
        })
    }
}

impl Surface for TerminalSurface {
    fn size(&self) -> (u16, u16) {
        (self.width, self.height)
    }

    fn resize(&mut self, width: u16, height: u16, _scale: f32) {
        self.width = width;
        self.height = height;
    }

    fn clear(&mut self) -> Result<()> {
        queue!(self.out, ResetColor, Clear(ClearType::All))?;
        Ok(())
    }

    fn fill_background(&mut self, color: &str) -> Result<()> {
        self.background = parse_color(color);
        // Clearing with the background color set repaints every cell.
        queue!(self.out, SetBackgroundColor(self.background), Clear(ClearType::All))?;
        Ok(())
    }

    fn draw_text_centered(&mut self, text: &str, style: &ClockStyle) -> Result<()> {
        let columns = text.chars().count() as u16;
        let x = self.width.saturating_sub(columns) / 2;
        let y = self.height / 2;
        queue!(
            self.out,
            MoveTo(x, y),
            SetBackgroundColor(self.background),
            SetForegroundColor(parse_color(&style.text_color)),
        )?;
        if style.font_weight == "bold" {
            queue!(self.out, SetAttribute(Attribute::Bold))?;
        }
        queue!(self.out, Print(text), SetAttribute(Attribute::Reset))?;
        Ok(())
    }

    fn draw_indicator_dot(&mut self, color: &str) -> Result<()> {
        let x = self.width.saturating_sub(3);
        queue!(
            self.out,
            MoveTo(x, 1),
            SetBackgroundColor(self.background),
            SetForegroundColor(parse_color(color)),
            Print("●"),
        )?;
        Ok(())
    }

    fn present(&mut self) -> Result<()> {
        self.out.flush()?;
        Ok(())
    }
}

impl Drop for TerminalSurface {
    fn drop(&mut self) {
        // Restoration failures mean the terminal is already gone; either
        // way the postcondition holds.
        let _ = execute!(self.out, ResetColor, LeaveAlternateScreen, Show);
        let _ = disable_raw_mode();
    }
}
