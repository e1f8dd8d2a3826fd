//! Source reference classification — `http(s)` URLs or local relative paths.

use crate::playlist::Source;

/// Classify a source reference, or `None` if it is not acceptable.
///
/// URLs need an `http` or `https` scheme (case-insensitive) and a host.
/// Anything else with a scheme, an absolute path, or a Windows drive
/// prefix is rejected. Whitespace is only allowed inside local paths.
pub fn parse_source(raw: &str) -> Option<Source> {
    let s = raw.trim();
    if s.is_empty() || s.chars().any(char::is_control) {
        return None;
    }

    if let Some((scheme, rest)) = s.split_once("://").filter(|(p, _)| is_scheme(p)) {
        return match scheme.to_ascii_lowercase().as_str() {
            "http" | "https" if is_valid_authority(rest) => Some(Source::Url(s.to_string())),
            _ => None,
        };
    }

    if is_relative_path(s) {
        Some(Source::Path(s.to_string()))
    } else {
        None
    }
}

fn is_valid_authority(rest: &str) -> bool {
    if rest.chars().any(char::is_whitespace) {
        return false;
    }
    let end = rest.find(['/', '?', '#']).unwrap_or(rest.len());
    let authority = &rest[..end];
    let host = authority.rsplit_once('@').map_or(authority, |(_, h)| h);
    let host = match host.rsplit_once(':') {
        Some((h, port)) if !port.is_empty() && port.bytes().all(|b| b.is_ascii_digit()) => h,
        Some((_, _)) => return false,
        None => host,
    };
    !host.is_empty()
        && host
            .chars()
            .all(|c| c.is_ascii_alphanumeric() || matches!(c, '.' | '-' | '_'))
}

fn is_relative_path(s: &str) -> bool {
    if s.starts_with('/') || s.starts_with('\\') {
        return false;
    }
    // `mailto:x`, `file:x`, `C:\x` and friends all look like a scheme.
    !s.split_once(':').is_some_and(|(prefix, _)| is_scheme(prefix))
}

/// `ALPHA *( ALPHA / DIGIT / "+" / "-" / "." )`
fn is_scheme(s: &str) -> bool {
    let mut chars = s.chars();
    chars.next().is_some_and(|c| c.is_ascii_alphabetic())
        && chars.all(|c| c.is_ascii_alphanumeric() || matches!(c, '+' | '-' | '.'))
}
