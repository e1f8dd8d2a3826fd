//! Duration parsing — accepts `mm:ss` and integer seconds.

use crate::playlist::Duration;

use super::ast::Value;

/// Convert a duration value into seconds.
///
/// Accepted forms:
/// - time literal `3:45` (exactly two seconds digits, below 60)
/// - integer literal `225`
/// - either of the above inside a string, e.g. `"3:45"` or `"225"`
///
/// Quoted and unquoted forms follow the same rules.
pub fn parse_duration(value: &Value) -> Option<Duration> {
    match value {
        Value::Time(s) => parse_duration_str(s),
        Value::Integer(secs) => Some(Duration::from_secs(*secs)),
        Value::Str(s) => parse_duration_str(s.trim()),
        Value::Ident(_) | Value::List(_) => None,
    }
}

/// Parse `mm:ss` or a bare number of seconds.
pub fn parse_duration_str(s: &str) -> Option<Duration> {
    match s.split_once(':') {
        Some((m, sec)) => {
            if !is_digits(m) || sec.len() != 2 || !is_digits(sec) {
                return None;
            }
            from_parts(m.parse().ok()?, sec.parse().ok()?)
        }
        None if is_digits(s) => s.parse().ok().map(Duration::from_secs),
        None => None,
    }
}

fn from_parts(minutes: u64, seconds: u64) -> Option<Duration> {
    if seconds >= 60 {
        return None;
    }
    minutes
        .checked_mul(60)
        .and_then(|m| m.checked_add(seconds))
        .map(Duration::from_secs)
}

fn is_digits(s: &str) -> bool {
    !s.is_empty() && s.bytes().all(|b| b.is_ascii_digit())
}
