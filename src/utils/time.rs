//! Timestamp formatting
//!
//! Absolute formatting with a small `YYYY-MM-DD HH:mm:ss` template language
//! and coarse relative formatting ("5 minutes ago"). All rendering goes
//! through a single pass over the template, keyed on the parsed date-time
//! fields, so repeated tokens are safe.

use chrono::{DateTime, Datelike, Local, LocalResult, NaiveDate, NaiveDateTime, Timelike, Utc};

use crate::error::AppError;

pub(crate) const DEFAULT_TEMPLATE: &str = "YYYY-MM-DD HH:mm:ss";
pub(crate) const DATE_TEMPLATE: &str = "YYYY-MM-DD";
pub(crate) const TIME_TEMPLATE: &str = "HH:mm:ss";

const JUST_NOW: &str = "just now";
const FUTURE: &str = "in the future";

/// A timestamp handed in either as text or as an already-resolved instant.
#[derive(Debug, Clone)]
pub(crate) enum TimeInput {
    Text(String),
    Instant(DateTime<Local>),
}

impl From<&str> for TimeInput {
    fn from(s: &str) -> Self {
        TimeInput::Text(s.to_string())
    }
}

impl From<&String> for TimeInput {
    fn from(s: &String) -> Self {
        TimeInput::Text(s.clone())
    }
}

impl From<String> for TimeInput {
    fn from(s: String) -> Self {
        TimeInput::Text(s)
    }
}

impl From<DateTime<Local>> for TimeInput {
    fn from(dt: DateTime<Local>) -> Self {
        TimeInput::Instant(dt)
    }
}

impl From<DateTime<Utc>> for TimeInput {
    fn from(dt: DateTime<Utc>) -> Self {
        TimeInput::Instant(dt.with_timezone(&Local))
    }
}

impl TimeInput {
    fn resolve(&self) -> Result<DateTime<Local>, AppError> {
        match self {
            TimeInput::Instant(dt) => Ok(*dt),
            TimeInput::Text(s) => parse_timestamp(s),
        }
    }
}

/// Naive formats accepted from the server, tried in order.
const NAIVE_FORMATS: &[&str] = &[
    "%Y-%m-%dT%H:%M:%S%.f",
    "%Y-%m-%d %H:%M:%S%.f",
    "%Y/%m/%d %H:%M:%S",
];

/// Parse a textual timestamp into a local date-time.
///
/// Accepts RFC 3339, the naive ISO shapes the admin API emits (with or
/// without fractional seconds), the `YYYY/MM/DD HH:MM:SS` token-expiry
/// shape, and a bare `YYYY-MM-DD` (midnight). Naive values are interpreted
/// in the local zone.
pub(crate) fn parse_timestamp(s: &str) -> Result<DateTime<Local>, AppError> {
    let trimmed = s.trim();
    if let Ok(dt) = DateTime::parse_from_rfc3339(trimmed) {
        return Ok(dt.with_timezone(&Local));
    }
    for format in NAIVE_FORMATS {
        if let Ok(naive) = NaiveDateTime::parse_from_str(trimmed, format) {
            return into_local(naive, s);
        }
    }
    if let Ok(date) = NaiveDate::parse_from_str(trimmed, "%Y-%m-%d") {
        return into_local(date.and_time(chrono::NaiveTime::MIN), s);
    }
    Err(AppError::InvalidTimestamp {
        input: s.to_string(),
    })
}

fn into_local(naive: NaiveDateTime, input: &str) -> Result<DateTime<Local>, AppError> {
    match naive.and_local_timezone(Local) {
        LocalResult::Single(dt) => Ok(dt),
        // DST fold: pick the earlier instant
        LocalResult::Ambiguous(earlier, _) => Ok(earlier),
        // DST gap: the wall-clock time does not exist
        LocalResult::None => Err(AppError::InvalidTimestamp {
            input: input.to_string(),
        }),
    }
}

/// Substitute `YYYY`, `MM`, `DD`, `HH`, `mm`, `ss` in one pass over the
/// template. Every occurrence of every token is replaced; anything else is
/// copied through verbatim.
pub(crate) fn render_template<T: Datelike + Timelike>(dt: &T, template: &str) -> String {
    let mut out = String::with_capacity(template.len() + 4);
    let mut rest = template;
    while !rest.is_empty() {
        if let Some(tail) = rest.strip_prefix("YYYY") {
            out.push_str(&format!("{:04}", dt.year()));
            rest = tail;
        } else if let Some(tail) = rest.strip_prefix("MM") {
            out.push_str(&format!("{:02}", dt.month()));
            rest = tail;
        } else if let Some(tail) = rest.strip_prefix("DD") {
            out.push_str(&format!("{:02}", dt.day()));
            rest = tail;
        } else if let Some(tail) = rest.strip_prefix("HH") {
            out.push_str(&format!("{:02}", dt.hour()));
            rest = tail;
        } else if let Some(tail) = rest.strip_prefix("mm") {
            out.push_str(&format!("{:02}", dt.minute()));
            rest = tail;
        } else if let Some(tail) = rest.strip_prefix("ss") {
            out.push_str(&format!("{:02}", dt.second()));
            rest = tail;
        } else {
            let mut chars = rest.chars();
            if let Some(ch) = chars.next() {
                out.push(ch);
            }
            rest = chars.as_str();
        }
    }
    out
}

/// Format a timestamp against a template, in the local zone.
pub(crate) fn format_date_time(
    input: impl Into<TimeInput>,
    template: &str,
) -> Result<String, AppError> {
    let dt = input.into().resolve()?;
    Ok(render_template(&dt, template))
}

/// `format_date_time` with the standard `YYYY-MM-DD HH:mm:ss` template.
pub(crate) fn format_date_time_default(input: impl Into<TimeInput>) -> Result<String, AppError> {
    format_date_time(input, DEFAULT_TEMPLATE)
}

/// Date portion only (`YYYY-MM-DD`).
pub(crate) fn format_date(input: impl Into<TimeInput>) -> Result<String, AppError> {
    format_date_time(input, DATE_TEMPLATE)
}

/// Time portion only (`HH:mm:ss`).
pub(crate) fn format_time(input: impl Into<TimeInput>) -> Result<String, AppError> {
    format_date_time(input, TIME_TEMPLATE)
}

/// Relative formatting against an explicit `now`, so callers (and tests)
/// control the clock.
///
/// Elapsed time is floor-divided into the coarsest non-zero bucket: days,
/// then hours, then minutes, else "just now". Future-dated input yields a
/// fixed label rather than an error. There is no month/year rollover; old
/// timestamps simply report a large day count.
pub(crate) fn relative_from(
    input: impl Into<TimeInput>,
    now: DateTime<Local>,
) -> Result<String, AppError> {
    let dt = input.into().resolve()?;
    let elapsed = now.signed_duration_since(dt);
    if elapsed < chrono::Duration::zero() {
        return Ok(FUTURE.to_string());
    }

    let seconds = elapsed.num_seconds();
    let days = seconds / 86_400;
    let hours = seconds / 3_600;
    let minutes = seconds / 60;

    Ok(if days > 0 {
        format!("{days} days ago")
    } else if hours > 0 {
        format!("{hours} hours ago")
    } else if minutes > 0 {
        format!("{minutes} minutes ago")
    } else {
        JUST_NOW.to_string()
    })
}

/// Relative formatting against the wall clock.
pub(crate) fn relative_time(input: impl Into<TimeInput>) -> Result<String, AppError> {
    relative_from(input, Local::now())
}
