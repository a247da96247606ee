//! Time and timestamp utilities

use chrono::{DateTime, Duration, FixedOffset, Local, NaiveDate, NaiveTime, TimeZone, Utc};

/// Unix seconds of `0001-01-01T00:00:00Z`, the zero instant clients send
/// for "no timestamp".
const ZERO_UNIX_SECONDS: i64 = -62_135_596_800;

/// Current local time with its UTC offset
pub fn now() -> DateTime<FixedOffset> {
    Local::now().fixed_offset()
}

/// The zero timestamp, used as the serde default for missing times
pub fn zero_time() -> DateTime<FixedOffset> {
    DateTime::<Utc>::from_timestamp(ZERO_UNIX_SECONDS, 0)
        .unwrap_or_default()
        .fixed_offset()
}

/// Check whether a timestamp is the zero instant
pub fn is_zero_time(t: &DateTime<FixedOffset>) -> bool {
    t.timestamp() == ZERO_UNIX_SECONDS && t.timestamp_subsec_nanos() == 0
}

/// Local wall-clock time `hour:minute` on `today + day_offset`
///
/// Times that fall in a DST gap are pushed forward by an hour.
pub fn local_day_at(today: NaiveDate, day_offset: i64, hour: u32, minute: u32) -> DateTime<FixedOffset> {
    let date = today + Duration::days(day_offset);
    let naive = date.and_time(NaiveTime::from_hms_opt(hour, minute, 0).unwrap_or(NaiveTime::MIN));

    Local
        .from_local_datetime(&naive)
        .earliest()
        .or_else(|| Local.from_local_datetime(&(naive + Duration::hours(1))).earliest())
        .map(|dt| dt.fixed_offset())
        .unwrap_or_else(|| Utc.from_utc_datetime(&naive).fixed_offset())
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{Datelike, Timelike};

    #[test]
    fn test_zero_time_round_trip() {
        let zero = zero_time();
        assert!(is_zero_time(&zero));
        assert_eq!(zero.year(), 1);

        let parsed = DateTime::parse_from_rfc3339("0001-01-01T00:00:00Z").unwrap();
        assert!(is_zero_time(&parsed));
    }

    #[test]
    fn test_now_is_not_zero() {
        assert!(!is_zero_time(&now()));
    }

    #[test]
    fn test_local_day_at() {
        let today = NaiveDate::from_ymd_opt(2025, 6, 2).unwrap();
        let t = local_day_at(today, 3, 8, 30);

        assert_eq!(t.date_naive(), NaiveDate::from_ymd_opt(2025, 6, 5).unwrap());
        assert_eq!(t.hour(), 8);
        assert_eq!(t.minute(), 30);
    }
}
