//! Visual configuration

use serde::{Deserialize, Serialize};

/// Visual configuration for a rendered clock.
///
/// Opaque to the timing core: these fields are passed through to the paint
/// path and never influence time math. Field names keep the wire spelling
/// used by clients (`backgroundColor`, `timeFormat`, ...), and every field
/// has a default so a partial config replaces cleanly.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct ClockStyle {
    /// Surface background color (hex `#rrggbb` or a named color).
    pub background_color: String,
    /// Digit color.
    pub text_color: String,
    /// Font family hint; surfaces without font control ignore it.
    pub font_family: String,
    /// Fixed font size. `None` scales responsively with the surface.
    pub font_size: Option<f32>,
    /// Font weight hint (`"bold"`, `"normal"`, ...).
    pub font_weight: String,
    /// Glow/shadow behind the digits, where the surface supports it.
    pub glow_effect: bool,
    /// 1 Hz liveness dot keyed off the parity of the absolute second.
    pub show_dot: bool,
    /// Display format template, e.g. `"hh:mm:ss"` or `"mm:ss"`.
    pub time_format: String,
}

impl Default for ClockStyle {
    fn default() -> Self {
        Self {
            background_color: "#ffffff".to_string(),
            text_color: "#000000".to_string(),
            font_family: "monospace".to_string(),
            font_size: None,
            font_weight: "bold".to_string(),
            glow_effect: false,
            show_dot: true,
            time_format: "hh:mm:ss".to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::ClockStyle;

    #[test]
    fn partial_config_fills_defaults() {
        let style: ClockStyle =
            serde_json::from_str(r##"{"textColor":"#22c55e","timeFormat":"mm:ss"}"##)
                .expect("partial config should deserialize");
        assert_eq!(style.text_color, "#22c55e");
        assert_eq!(style.time_format, "mm:ss");
        assert_eq!(style.background_color, "#ffffff");
        assert!(style.show_dot);
    }
}
