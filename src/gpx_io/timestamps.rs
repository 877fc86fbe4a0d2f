use chrono::{DateTime, Utc};
use time::OffsetDateTime;

use super::FormatError;

const NANOS_PER_SECOND: i128 = 1_000_000_000;

pub fn from_gpx_time(time: gpx::Time) -> Result<DateTime<Utc>, FormatError> {
    let nanos = OffsetDateTime::from(time).unix_timestamp_nanos();
    let seconds = i64::try_from(nanos.div_euclid(NANOS_PER_SECOND))
        .map_err(|e| FormatError::Time(e.to_string()))?;
    let subsec = nanos.rem_euclid(NANOS_PER_SECOND) as u32;

    DateTime::from_timestamp(seconds, subsec)
        .ok_or_else(|| FormatError::Time(format!("{} ns since epoch out of range", nanos)))
}

pub fn to_gpx_time(timestamp: DateTime<Utc>) -> Result<gpx::Time, FormatError> {
    let nanos = timestamp.timestamp() as i128 * NANOS_PER_SECOND
        + timestamp.timestamp_subsec_nanos() as i128;

    OffsetDateTime::from_unix_timestamp_nanos(nanos)
        .map(gpx::Time::from)
        .map_err(|e| FormatError::Time(e.to_string()))
}
