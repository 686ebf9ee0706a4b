//! Configuration and CLI argument handling

use clap::{Parser, ValueEnum};

use crate::engine::EngineOptions;
use crate::render::ClockStyle;
use crate::state::Direction;
use crate::store::StoreOptions;

/// CLI spelling of the counting direction.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum CountDirection {
    Forward,
    Reverse,
}

impl From<CountDirection> for Direction {
    fn from(value: CountDirection) -> Self {
        match value {
            CountDirection::Forward => Direction::Forward,
            CountDirection::Reverse => Direction::Reverse,
        }
    }
}

/// CLI argument parsing structure
#[derive(Parser)]
#[command(name = "matchclock")]
#[command(about = "A drift-free broadcast clock with background rendering and HTTP control")]
#[command(version = "1.2.0")]
pub struct Config {
    /// Host address to bind the control API to
    #[arg(long, default_value = "127.0.0.1")]
    pub host: String,

    /// Port for the control API
    #[arg(short, long, default_value = "20554")]
    pub port: u16,

    /// Initial clock value in seconds (may be negative)
    #[arg(short, long, default_value = "0", allow_hyphen_values = true)]
    pub initial: i64,

    /// Display format template built from hh, mm, ss, h, m, s tokens
    #[arg(short, long, default_value = "hh:mm:ss")]
    pub format: String,

    /// Counting direction
    #[arg(short, long, value_enum, default_value_t = CountDirection::Forward)]
    pub direction: CountDirection,

    /// Stop automatically when a reverse count reaches zero
    #[arg(long)]
    pub stop_at_zero: bool,

    /// Start counting immediately
    #[arg(short, long)]
    pub autostart: bool,

    /// Render loop frequency in frames per second
    #[arg(long, default_value = "60")]
    pub fps: u32,

    /// Run the reactive store without a terminal surface
    #[arg(long)]
    pub headless: bool,

    /// Surface background color
    #[arg(long, default_value = "#0f172a")]
    pub background: String,

    /// Digit color
    #[arg(long, default_value = "#22c55e")]
    pub color: String,

    /// Disable the liveness indicator dot
    #[arg(long)]
    pub no_dot: bool,

    /// Enable verbose logging
    #[arg(short, long)]
    pub verbose: bool,
}

impl Config {
    /// Parse configuration from command line arguments
    pub fn parse() -> Self {
        Parser::parse()
    }

    /// Get the control API address as a formatted string
    pub fn address(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }

    /// Get the appropriate log level based on verbose flag
    pub fn log_level(&self) -> &'static str {
        if self.verbose {
            "debug"
        } else {
            "info"
        }
    }

    /// Visual configuration derived from the CLI flags.
    pub fn style(&self) -> ClockStyle {
        ClockStyle {
            background_color: self.background.clone(),
            text_color: self.color.clone(),
            show_dot: !self.no_dot,
            time_format: self.format.clone(),
            ..ClockStyle::default()
        }
    }

    /// Engine spawn options derived from the CLI flags.
    pub fn engine_options(&self) -> EngineOptions {
        EngineOptions {
            initial_seconds: self.initial,
            direction: self.direction.into(),
            stop_at_zero: self.stop_at_zero,
            style: self.style(),
            frame_rate: self.fps,
        }
    }

    /// Store options for headless operation.
    pub fn store_options(&self) -> StoreOptions {
        StoreOptions {
            initial_seconds: self.initial,
            direction: self.direction.into(),
            stop_at_zero: self.stop_at_zero,
            time_format: self.format.clone(),
            ..StoreOptions::default()
        }
    }
}
