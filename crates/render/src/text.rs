//! Text formatting helpers shared by widgets

use once_cell::sync::Lazy;
use regex::{Captures, Regex};
use std::collections::HashSet;

static PLACEHOLDER: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"\{([a-zA-Z_]+)\}").expect("Invalid placeholder regex"));

/// Format seconds as zero-padded `MM:SS`; minutes grow past two digits
pub fn format_time(seconds: u64) -> String {
    format!("{:02}:{:02}", seconds / 60, seconds % 60)
}

/// Duration rendered as whole minutes with an `m` suffix (1500 -> `25m`)
pub fn format_minutes(seconds: u64) -> String {
    format!("{}m", seconds / 60)
}

/// Replace the first `{name}` placeholder of each name using `lookup`.
///
/// Repeats of an already substituted name and unknown names stay as written.
pub fn fill_placeholders<F>(template: &str, lookup: F) -> String
where
    F: Fn(&str) -> Option<String>,
{
    let mut filled = HashSet::new();
    PLACEHOLDER
        .replace_all(template, |caps: &Captures| {
            let name = &caps[1];
            if filled.contains(name) {
                return caps[0].to_string();
            }
            match lookup(name) {
                Some(value) => {
                    filled.insert(name.to_string());
                    value
                }
                None => caps[0].to_string(),
            }
        })
        .into_owned()
}

/// Substitute `{duration}` with the session length in whole minutes
pub fn substitute_duration(template: &str, duration_secs: u64) -> String {
    fill_placeholders(template, |name| match name {
        "duration" => Some(format_minutes(duration_secs)),
        _ => None,
    })
}

/// Leading integer of a CSS length, as browsers' `parseInt` reads it
/// (`"-5px"` -> -5, `" 20.7em"` -> 20, `"auto"` -> None)
pub fn parse_css_int(value: &str) -> Option<i64> {
    let trimmed = value.trim_start();
    let (sign, digits) = match trimmed.as_bytes().first() {
        Some(b'-') => (-1, &trimmed[1..]),
        Some(b'+') => (1, &trimmed[1..]),
        _ => (1, trimmed),
    };
    let end = digits
        .find(|c: char| !c.is_ascii_digit())
        .unwrap_or(digits.len());
    if end == 0 {
        return None;
    }
    digits[..end].parse::<i64>().ok().map(|n| sign * n)
}

/// Round a percentage the way progress labels display it
pub fn percent_label(progress: f64) -> String {
    format!("{}%", progress.round() as i64)
}

/// Filled and empty cell counts for a bar of `width` cells.
///
/// `round` selects rounding (ASCII bars) over flooring (LED/LCD bars).
pub fn cell_split(progress: f64, width: usize, round: bool) -> (usize, usize) {
    let raw = progress / 100.0 * width as f64;
    let filled = if round { raw.round() } else { raw.floor() };
    let filled = (filled.max(0.0) as usize).min(width);
    (filled, width - filled)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_time_pads_both_fields() {
        assert_eq!(format_time(0), "00:00");
        assert_eq!(format_time(65), "01:05");
        assert_eq!(format_time(1500), "25:00");
        assert_eq!(format_time(6000), "100:00");
    }

    #[test]
    fn test_duration_placeholder() {
        assert_eq!(substitute_duration("Timer: {duration}", 1500), "Timer: 25m");
        assert_eq!(substitute_duration("{duration} / {duration}", 90), "1m / {duration}");
        assert_eq!(substitute_duration("no tokens", 1500), "no tokens");
        assert_eq!(substitute_duration("{other}", 1500), "{other}");
    }

    #[test]
    fn test_parse_css_int_matches_parse_int() {
        assert_eq!(parse_css_int("-5px"), Some(-5));
        assert_eq!(parse_css_int("20px"), Some(20));
        assert_eq!(parse_css_int("  12.9em"), Some(12));
        assert_eq!(parse_css_int("+7"), Some(7));
        assert_eq!(parse_css_int("auto"), None);
        assert_eq!(parse_css_int("-"), None);
        assert_eq!(parse_css_int(""), None);
    }

    #[test]
    fn test_cell_split_clamps() {
        assert_eq!(cell_split(50.0, 30, true), (15, 15));
        assert_eq!(cell_split(49.0, 10, false), (4, 6));
        assert_eq!(cell_split(150.0, 10, false), (10, 0));
        assert_eq!(cell_split(-10.0, 10, true), (0, 10));
        assert_eq!(percent_label(33.4), "33%");
    }
}
