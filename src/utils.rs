use once_cell::sync::Lazy;
use regex::Regex;

// Compiled regexes for timestamp parsing
static TIME_HOURS_REGEX: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^(\d+):([0-5]?\d):([0-5]?\d)$").expect("valid regex"));
static TIME_COLON_REGEX: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^(\d+):([0-5]?\d)$").expect("valid regex"));
static TIME_MIN_SEC_REGEX: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^(?:(\d+)m)?\s*(?:(\d+)s)?$").expect("valid regex"));

/// Format a time offset as `m:ss`, or `h:mm:ss` from one hour on.
///
/// Fractions are truncated and negative or non-finite input reads as zero.
pub fn format_seconds_to_timestamp(seconds: f64) -> String {
    let total = if seconds.is_finite() && seconds > 0.0 {
        seconds as u64
    } else {
        0
    };
    let hours = total / 3600;
    let minutes = (total % 3600) / 60;
    let secs = total % 60;
    if hours > 0 {
        format!("{}:{:02}:{:02}", hours, minutes, secs)
    } else {
        format!("{}:{:02}", minutes, secs)
    }
}

/// Parse a timestamp typed by the user into seconds.
///
/// Supported formats:
/// - Plain seconds: "83" or "83.5"
/// - Minutes:seconds: "1:23"
/// - Hours:minutes:seconds: "1:02:03"
/// - Units: "1m 23s", "1m", "23s"
pub fn parse_timestamp_to_seconds(input: &str) -> Result<f64, String> {
    let trimmed = input.trim();
    if trimmed.is_empty() {
        return Err("Time cannot be empty".to_string());
    }

    if let Ok(secs) = trimmed.parse::<f64>() {
        if secs.is_finite() && secs >= 0.0 {
            return Ok(secs);
        }
        return Err(format!("Invalid time: {}", trimmed));
    }

    let number = |s: &str| s.parse::<u64>().map_err(|_| format!("Invalid number: {}", s));
    let total = |hours: u64, minutes: u64, secs: u64| {
        hours
            .checked_mul(3600)
            .and_then(|h| minutes.checked_mul(60).and_then(|m| h.checked_add(m)))
            .and_then(|hm| hm.checked_add(secs))
            .map(|t| t as f64)
            .ok_or_else(|| format!("Invalid time: {} is too large", trimmed))
    };

    if let Some(captures) = TIME_HOURS_REGEX.captures(trimmed) {
        let hours = number(&captures[1])?;
        let minutes = number(&captures[2])?;
        let secs = number(&captures[3])?;
        return total(hours, minutes, secs);
    }

    if let Some(captures) = TIME_COLON_REGEX.captures(trimmed) {
        let minutes = number(&captures[1])?;
        let secs = number(&captures[2])?;
        return total(0, minutes, secs);
    }

    if let Some(captures) = TIME_MIN_SEC_REGEX.captures(trimmed) {
        let minutes = captures.get(1).map(|m| number(m.as_str())).transpose()?;
        let secs = captures.get(2).map(|m| number(m.as_str())).transpose()?;
        if minutes.is_some() || secs.is_some() {
            return total(0, minutes.unwrap_or(0), secs.unwrap_or(0));
        }
    }

    Err("Invalid time format. Use: 83, 1:23, 1:02:03 or 1m 23s".to_string())
}
