use chrono::offset::Offset;
use chrono::{DateTime, FixedOffset, Local, Utc};
use chrono_tz::Tz;
use std::str::FromStr;

use crate::error::AppError;
use crate::utils::time;

/// Display zone for server timestamps: the machine's local zone unless the
/// user names an IANA zone.
#[derive(Debug, Clone, Copy)]
pub(crate) enum Timezone {
    Local,
    Named(Tz),
}

impl Timezone {
    pub(crate) fn parse(value: Option<&str>) -> Result<Self, AppError> {
        let Some(raw) = value else {
            return Ok(Timezone::Local);
        };
        let trimmed = raw.trim();
        if trimmed.is_empty() || trimmed.eq_ignore_ascii_case("local") {
            return Ok(Timezone::Local);
        }
        if trimmed.eq_ignore_ascii_case("utc") || trimmed.eq_ignore_ascii_case("z") {
            return Ok(Timezone::Named(chrono_tz::UTC));
        }
        Tz::from_str(trimmed)
            .map(Timezone::Named)
            .map_err(|_| AppError::InvalidTimezone {
                input: trimmed.to_string(),
            })
    }

    fn to_fixed_offset(self, instant: DateTime<Local>) -> DateTime<FixedOffset> {
        match self {
            Timezone::Local => {
                let offset = instant.offset().fix();
                instant.with_timezone(&offset)
            }
            Timezone::Named(tz) => {
                let zoned = instant.with_timezone(&Utc).with_timezone(&tz);
                let offset = zoned.offset().fix();
                zoned.with_timezone(&offset)
            }
        }
    }

    /// Render a textual server timestamp in this zone with the given
    /// template.
    pub(crate) fn render(self, raw: &str, template: &str) -> Result<String, AppError> {
        let instant = time::parse_timestamp(raw)?;
        Ok(time::render_template(&self.to_fixed_offset(instant), template))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    #[test]
    fn parse_none_returns_local() {
        assert!(matches!(Timezone::parse(None).unwrap(), Timezone::Local));
    }

    #[test]
    fn parse_local_and_empty_return_local() {
        assert!(matches!(
            Timezone::parse(Some("")).unwrap(),
            Timezone::Local
        ));
        assert!(matches!(
            Timezone::parse(Some("Local")).unwrap(),
            Timezone::Local
        ));
    }

    #[test]
    fn parse_utc_variants() {
        for raw in ["utc", "UTC", "z", "Z"] {
            let tz = Timezone::parse(Some(raw)).unwrap();
            assert!(matches!(tz, Timezone::Named(chrono_tz::UTC)));
        }
    }

    #[test]
    fn parse_named_timezone() {
        let tz = Timezone::parse(Some("Asia/Shanghai")).unwrap();
        assert!(matches!(tz, Timezone::Named(chrono_tz::Asia::Shanghai)));
    }

    #[test]
    fn parse_invalid_timezone_returns_error() {
        let err = Timezone::parse(Some("Mars/Olympus")).unwrap_err();
        assert!(err.to_string().contains("Mars/Olympus"));
    }

    #[test]
    fn render_local_matches_core_formatter() {
        let dt = Local.with_ymd_and_hms(2024, 3, 5, 9, 7, 3).unwrap();
        let raw = time::format_date_time_default(dt).unwrap();
        assert_eq!(
            Timezone::Local.render(&raw, time::DEFAULT_TEMPLATE).unwrap(),
            raw
        );
    }

    #[test]
    fn render_named_zone_shifts_rfc3339_input() {
        // 00:00 UTC is 08:00 in Shanghai year-round (no DST)
        let tz = Timezone::parse(Some("Asia/Shanghai")).unwrap();
        assert_eq!(
            tz.render("2024-03-05T00:00:00Z", time::TIME_TEMPLATE).unwrap(),
            "08:00:00"
        );
    }

    #[test]
    fn render_invalid_timestamp_propagates_error() {
        assert!(Timezone::Local.render("garbage", time::DEFAULT_TEMPLATE).is_err());
    }
}
