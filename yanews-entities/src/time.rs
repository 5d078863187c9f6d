use std::fmt;

use time::{format_description::FormatItem, macros::format_description, Date, OffsetDateTime};

const DISPLAY_FORMAT: &[FormatItem<'static>] =
    format_description!("[day].[month].[year] [hour]:[minute]");

const DATE_FORMAT: &[FormatItem<'static>] = format_description!("[year]-[month]-[day]");

/// A UTC timestamp with millisecond precision.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct TimestampMs(i64);

impl TimestampMs {
    pub fn now() -> Self {
        OffsetDateTime::now_utc().into()
    }

    pub const fn from_millis(millis: i64) -> Self {
        Self(millis)
    }

    pub const fn as_millis(self) -> i64 {
        self.0
    }

    pub fn to_offset_date_time(self) -> OffsetDateTime {
        OffsetDateTime::from_unix_timestamp_nanos(i128::from(self.0) * 1_000_000)
            .unwrap_or(OffsetDateTime::UNIX_EPOCH)
    }
}

impl From<OffsetDateTime> for TimestampMs {
    fn from(from: OffsetDateTime) -> Self {
        let millis = from.unix_timestamp_nanos() / 1_000_000;
        Self(millis as i64)
    }
}

impl fmt::Display for TimestampMs {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        let s = self
            .to_offset_date_time()
            .format(DISPLAY_FORMAT)
            .map_err(|_| fmt::Error)?;
        f.write_str(&s)
    }
}

pub fn today() -> Date {
    OffsetDateTime::now_utc().date()
}

pub fn parse_date(s: &str) -> Result<Date, time::error::Parse> {
    Date::parse(s.trim(), DATE_FORMAT)
}

pub fn format_date(date: Date) -> String {
    date.format(DATE_FORMAT).unwrap_or_default()
}

#[cfg(test)]
mod tests {
    use super::*;
    use time::macros::{date, datetime};

    #[test]
    fn convert_from_into_millis() {
        let t1 = TimestampMs::now();
        let t2 = TimestampMs::from_millis(t1.as_millis());
        assert_eq!(t1, t2);
    }

    #[test]
    fn millisecond_precision() {
        let ts = TimestampMs::from(datetime!(2023-04-01 12:30:15.123 UTC));
        assert_eq!(1_680_352_215_123, ts.as_millis());
        assert_eq!(datetime!(2023-04-01 12:30:15.123 UTC), ts.to_offset_date_time());
    }

    #[test]
    fn display_timestamp() {
        let ts = TimestampMs::from(datetime!(2023-04-01 12:30 UTC));
        assert_eq!("01.04.2023 12:30", ts.to_string());
    }

    #[test]
    fn parse_and_format_dates() {
        assert_eq!(date!(2024 - 02 - 29), parse_date(" 2024-02-29 ").unwrap());
        assert!(parse_date("2023-02-29").is_err());
        assert_eq!("2024-02-29", format_date(date!(2024 - 02 - 29)));
    }
}
