//! Duration Resolver
//!
//! Reads setup times written into free text, e.g. `"1h 30 min"`, `"2 horas"`
//! or `"45 min"`.

use once_cell::sync::Lazy;
use pcp_types::Record;
use regex::Regex;
use tracing::trace;

// The hour unit must end at a word boundary or run into the minutes group, so
// "10 hot stamping" is not read as ten hours.
static HOURS_REGEX: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"([0-9]{1,2})\s*h(?:ora)?s?(?:\s*([0-9]{1,2})\s*min|\b)").unwrap()
});

static MINUTES_REGEX: Lazy<Regex> = Lazy::new(|| Regex::new(r"([0-9]{1,2})\s*min").unwrap());

/// Parse a duration out of `record[field]`, in minutes.
///
/// Hours (with optional minutes) are tried before bare minutes. Returns `None`
/// when neither form is present; callers decide on the fallback.
pub fn resolve_duration(record: &Record, field: &str) -> Option<u32> {
    let value = record.lowercase_text(field);
    let minutes = parse_duration(&value);
    if let Some(minutes) = minutes {
        trace!(field, minutes, "duration matched");
    }
    minutes
}

/// Parse a lower-cased duration text, in minutes.
pub fn parse_duration(text: &str) -> Option<u32> {
    if let Some(caps) = HOURS_REGEX.captures(text) {
        let hours: u32 = caps.get(1)?.as_str().parse().ok()?;
        let minutes: u32 = match caps.get(2) {
            Some(m) => m.as_str().parse().ok()?,
            None => 0,
        };
        return Some(hours * 60 + minutes);
    }
    let caps = MINUTES_REGEX.captures(text)?;
    caps.get(1)?.as_str().parse().ok()
}
