use chrono::{DateTime, Duration, Utc};

use crate::track::{Track, TrackError, TrackPoint};

/// Point a `fraction` of the way from `p0` to `p1`, every field moving
/// linearly. `fraction` must lie in `[0, 1)`.
pub fn interpolate(
    p0: &TrackPoint,
    p1: &TrackPoint,
    fraction: f64,
) -> Result<TrackPoint, TrackError> {
    if !(0.0..1.0).contains(&fraction) {
        return Err(TrackError::Domain(format!(
            "fraction {} outside [0, 1)",
            fraction
        )));
    }
    if fraction == 0.0 {
        return Ok(p0.clone());
    }

    let elevation = match (p0.elevation, p1.elevation) {
        (Some(a), Some(b)) => Some(lerp(a, b, fraction)),
        _ => None,
    };

    Ok(TrackPoint {
        latitude: lerp(p0.latitude, p1.latitude, fraction),
        longitude: lerp(p0.longitude, p1.longitude, fraction),
        elevation,
        timestamp: lerp_time(p0.timestamp, p1.timestamp, fraction),
        speed: lerp(p0.speed, p1.speed, fraction),
    })
}

/// Point on `track` at an absolute instant, interpolated inside the segment
/// that contains it.
pub fn point_at_time(track: &Track, time: DateTime<Utc>) -> Result<TrackPoint, TrackError> {
    if time < track.start_time() || time > track.end_time() {
        return Err(TrackError::Domain(format!(
            "{} outside track span {} - {}",
            time,
            track.start_time(),
            track.end_time()
        )));
    }

    let points = track.points();
    // First index strictly after `time`
    let after = points.partition_point(|p| p.timestamp <= time);
    if after == points.len() {
        return Ok(track.last().clone());
    }
    if after == 0 {
        return Ok(track.first().clone());
    }

    let (p0, p1) = (&points[after - 1], &points[after]);
    let span = (p1.timestamp - p0.timestamp).num_nanoseconds();
    let offset = (time - p0.timestamp).num_nanoseconds();
    match (offset, span) {
        (Some(offset), Some(span)) if span > 0 => {
            interpolate(p0, p1, (offset as f64 / span as f64).min(1.0 - f64::EPSILON))
        }
        _ => Ok(p0.clone()),
    }
}

fn lerp(a: f64, b: f64, fraction: f64) -> f64 {
    a + fraction * (b - a)
}

fn lerp_time(t0: DateTime<Utc>, t1: DateTime<Utc>, fraction: f64) -> DateTime<Utc> {
    let delta = t1 - t0;
    let step = match delta.num_nanoseconds() {
        Some(ns) => Duration::nanoseconds((ns as f64 * fraction).round() as i64),
        None => Duration::milliseconds((delta.num_milliseconds() as f64 * fraction).round() as i64),
    };
    t0 + step
}
