//! Time string formatting
//!
//! One pure function shared by the render engine and the anchor store, so
//! both sides always produce identical output for identical input.

/// Format a signed total-second count according to a display template.
///
/// The template may contain the double-digit tokens `hh`, `mm`, `ss`
/// (zero-padded) and their unpadded single-letter forms `h`, `m`, `s`.
/// Everything else (separators like `:`) passes through literally.
///
/// Decomposition only splits out the units the template actually asks for:
/// a template without an hour token rolls hours into the minutes field
/// (3665 seconds with `"mm:ss"` is `"61:05"`, not `"01:05"`), and a bare
/// `"ss"` template yields the full second count. Double-digit tokens are
/// substituted before their single-letter forms so `hh` is never clobbered
/// by a partial `h` match. Negative input formats the absolute value and
/// prefixes a `-`.
pub fn format_time(total_seconds: i64, template: &str) -> String {
    let abs_seconds = total_seconds.unsigned_abs();

    let has_hours = template.contains('h');
    let has_minutes = template.contains('m');
    let has_seconds = template.contains('s');

    let mut remaining = abs_seconds;
    let mut hours = 0;
    let mut minutes = 0;
    let mut seconds = 0;

    if has_hours {
        hours = remaining / 3600;
        remaining %= 3600;
    }
    if has_minutes {
        minutes = remaining / 60;
        remaining %= 60;
    }
    if has_seconds {
        seconds = remaining;
    }

    // Longest tokens first; each token fills its first occurrence only.
    let mut text = template.to_string();
    text = text.replacen("hh", &format!("{hours:02}"), 1);
    text = text.replacen("mm", &format!("{minutes:02}"), 1);
    text = text.replacen("ss", &format!("{seconds:02}"), 1);
    text = text.replacen('h', &hours.to_string(), 1);
    text = text.replacen('m', &minutes.to_string(), 1);
    text = text.replacen('s', &seconds.to_string(), 1);

    if total_seconds < 0 {
        text.insert(0, '-');
    }
    text
}

#[cfg(test)]
mod tests {
    use super::format_time;

    #[test]
    fn formats_default_template() {
        assert_eq!(format_time(0, "hh:mm:ss"), "00:00:00");
        assert_eq!(format_time(3665, "hh:mm:ss"), "01:01:05");
        assert_eq!(format_time(45 * 60, "hh:mm:ss"), "00:45:00");
    }

    #[test]
    fn rolls_hours_into_minutes_without_hour_token() {
        // 3665 s = 61 min 5 s when the template has no hour field.
        assert_eq!(format_time(3665, "mm:ss"), "61:05");
    }

    #[test]
    fn truncates_units_absent_from_template() {
        assert_eq!(format_time(3665, "hh:mm"), "01:01");
    }

    #[test]
    fn bare_tokens_carry_the_full_count() {
        assert_eq!(format_time(3665, "ss"), "3665");
        assert_eq!(format_time(3665, "mm"), "61");
    }

    #[test]
    fn single_letter_tokens_are_unpadded() {
        assert_eq!(format_time(3665, "h:m:s"), "1:1:5");
        assert_eq!(format_time(65, "m:ss"), "1:05");
    }

    #[test]
    fn negative_input_prefixes_a_sign() {
        assert_eq!(format_time(-65, "mm:ss"), "-01:05");
        assert_eq!(format_time(-1, "hh:mm:ss"), "-00:00:01");
    }

    #[test]
    fn unknown_characters_pass_through() {
        assert_eq!(format_time(75, "mm'ss\""), "01'15\"");
        assert_eq!(format_time(75, "mm.ss"), "01.15");
    }

    #[test]
    fn large_values_widen_past_two_digits() {
        assert_eq!(format_time(360000, "hh:mm:ss"), "100:00:00");
        assert_eq!(format_time(-100000, "hh:mm:ss"), "-27:46:40");
    }
}
