//! Lenient `MM:SS` duration entry parsing.
//!
//! The incident log filter accepts durations the way people type them: `5` (seconds),
//! `130` (1:30), `1230` (12:30) or an explicit `12:30`. Anything else is treated as
//! "no bound" rather than an error.

use serde::{Deserialize, Serialize};

const MIN_NORMALIZED_LEN: usize = 3;
const MAX_NORMALIZED_LEN: usize = 6;

fn insert_colon(text: &str) -> Option<String> {
    let chars: Vec<char> = text.chars().collect();
    match chars.len() {
        1 | 2 => {
            // Seconds only: left pad to two digits.
            let mut padded = String::from("00:");
            if chars.len() == 1 {
                padded.push('0');
            }
            padded.extend(chars.iter());
            Some(padded)
        }
        3 | 4 => {
            let split = chars.len() - 2;
            let mut out: String = chars[..split].iter().collect();
            out.push(':');
            out.extend(chars[split..].iter());
            Some(out)
        }
        _ => None,
    }
}

fn parse_plain_uint(part: &str) -> Option<i64> {
    if part.is_empty() || !part.bytes().all(|b| b.is_ascii_digit()) {
        return None;
    }
    part.parse::<i64>().ok()
}

/// Normalize free-form duration text into total seconds (`minutes * 60 + seconds`).
///
/// Returns 0 for empty or unparseable input; callers treat 0 as "no bound". Seconds of 60 or
/// more are added as-is (`"65"` is 65 seconds, `"1:99"` is 159).
pub fn parse_duration(text: &str) -> i64 {
    if text.is_empty() {
        return 0;
    }

    let normalized = if text.contains(':') {
        text.to_string()
    } else {
        match insert_colon(text) {
            Some(s) => s,
            None => return 0,
        }
    };

    let len = normalized.chars().count();
    if !(MIN_NORMALIZED_LEN..=MAX_NORMALIZED_LEN).contains(&len)
        || normalized.contains('.')
        || normalized.contains('-')
    {
        return 0;
    }

    let parts: Vec<&str> = normalized.split(':').collect();
    let [minutes, seconds] = parts.as_slice() else {
        return 0;
    };
    match (parse_plain_uint(minutes), parse_plain_uint(seconds)) {
        (Some(m), Some(s)) => m * 60 + s,
        _ => 0,
    }
}

/// A duration bound that is actually present.
///
/// `DurationBound::parse` returns `None` for empty or unparseable text and for text that
/// normalizes to zero seconds, so "unbounded" is never confused with a zero-length bound.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, PartialOrd, Ord)]
pub struct DurationBound(i64);

impl DurationBound {
    pub fn parse(text: &str) -> Option<Self> {
        match parse_duration(text) {
            0 => None,
            secs => Some(Self(secs)),
        }
    }

    pub fn seconds(self) -> i64 {
        self.0
    }
}

/// Render seconds as `MM:SS`. Minutes are not capped at 59; negative input renders `00:00`.
pub fn format_duration(seconds: i64) -> String {
    let secs = seconds.max(0);
    format!("{:02}:{:02}", secs / 60, secs % 60)
}
