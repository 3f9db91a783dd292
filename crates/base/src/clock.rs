use std::time::{SystemTime, UNIX_EPOCH};

fn unix_parts(time: SystemTime) -> (u64, u32) {
    // clocks set before 1970 are clamped to the epoch
    let since = time.duration_since(UNIX_EPOCH).unwrap_or_default();
    (since.as_secs(), since.subsec_millis())
}

/// Format a time as `YYYY-MM-DDTHH:MM:SS.mmm` (UTC).
pub fn format_timestamp(time: SystemTime) -> String {
    let (secs, millis) = unix_parts(time);
    let (year, month, day) = civil_from_days((secs / 86400) as i64);
    let time_of_day = secs % 86400;
    format!(
        "{:04}-{:02}-{:02}T{:02}:{:02}:{:02}.{:03}",
        year,
        month,
        day,
        time_of_day / 3600,
        (time_of_day % 3600) / 60,
        time_of_day % 60,
        millis
    )
}

/// Format a time as `HH:MM:SS` (UTC), used for status lines.
pub fn format_clock(time: SystemTime) -> String {
    let (secs, _) = unix_parts(time);
    let time_of_day = secs % 86400;
    format!(
        "{:02}:{:02}:{:02}",
        time_of_day / 3600,
        (time_of_day % 3600) / 60,
        time_of_day % 60
    )
}

/// Format a time as `YYYY-MM-DD` (UTC).
pub fn format_date(time: SystemTime) -> String {
    let (secs, _) = unix_parts(time);
    let (year, month, day) = civil_from_days((secs / 86400) as i64);
    format!("{:04}-{:02}-{:02}", year, month, day)
}

// Howard Hinnant's days-to-civil conversion
fn civil_from_days(z: i64) -> (i64, u32, u32) {
    let z = z + 719468;
    let era = if z >= 0 { z } else { z - 146096 } / 146097;
    let doe = (z - era * 146097) as u32;
    let yoe = (doe - doe / 1460 + doe / 36524 - doe / 146096) / 365;
    let y = yoe as i64 + era * 400;
    let doy = doe - (365 * yoe + yoe / 4 - yoe / 100);
    let mp = (5 * doy + 2) / 153;
    let d = doy - (153 * mp + 2) / 5 + 1;
    let m = if mp < 10 { mp + 3 } else { mp - 9 };
    let y = if m <= 2 { y + 1 } else { y };
    (y, m, d)
}

#[cfg(test)]
mod tests {
    use {super::*, std::time::Duration};

    #[test]
    fn test_civil_from_days_epoch() {
        assert_eq!(civil_from_days(0), (1970, 1, 1));
    }

    #[test]
    fn test_civil_from_days_leap_year() {
        assert_eq!(civil_from_days(11016), (2000, 2, 29));
    }

    #[test]
    fn test_format_clock() {
        let time = UNIX_EPOCH + Duration::from_secs(3 * 3600 + 25 * 60 + 7);
        assert_eq!(format_clock(time), "03:25:07");
    }

    #[test]
    fn test_format_timestamp_millis() {
        let time = UNIX_EPOCH + Duration::from_millis(86_400_000 + 42);
        assert_eq!(format_timestamp(time), "1970-01-02T00:00:00.042");
    }

    #[test]
    fn test_format_date() {
        let time = UNIX_EPOCH + Duration::from_secs(20088 * 86400 + 100);
        assert_eq!(format_date(time), "2024-12-31");
    }
}
