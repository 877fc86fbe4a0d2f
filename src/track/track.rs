use chrono::{DateTime, Duration, Utc};
use serde::Serialize;

use super::{BoundingBox, TrackError, TrackPoint};

/// Ordered, non-empty sequence of points. Never mutated once built; every
/// stage of the pipeline produces a new `Track`.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Track {
    points: Vec<TrackPoint>,
}

impl Track {
    pub fn new(points: Vec<TrackPoint>) -> Result<Self, TrackError> {
        if points.is_empty() {
            return Err(TrackError::EmptyTrack);
        }

        if let Some(i) = points
            .windows(2)
            .position(|pair| pair[1].timestamp < pair[0].timestamp)
        {
            log::debug!(
                "Track timestamps go backwards at point {} ({} then {})",
                i + 1,
                points[i].timestamp,
                points[i + 1].timestamp
            );
        }

        Ok(Self { points })
    }

    pub fn len(&self) -> usize {
        self.points.len()
    }

    /// Always false, a `Track` cannot be built without points.
    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    pub fn points(&self) -> &[TrackPoint] {
        &self.points
    }

    pub fn iter(&self) -> std::slice::Iter<'_, TrackPoint> {
        self.points.iter()
    }

    pub fn get(&self, index: usize) -> Option<&TrackPoint> {
        self.points.get(index)
    }

    pub fn first(&self) -> &TrackPoint {
        &self.points[0]
    }

    pub fn last(&self) -> &TrackPoint {
        &self.points[self.points.len() - 1]
    }

    pub fn start_time(&self) -> DateTime<Utc> {
        self.first().timestamp
    }

    pub fn end_time(&self) -> DateTime<Utc> {
        self.last().timestamp
    }

    pub fn duration(&self) -> Duration {
        self.end_time() - self.start_time()
    }

    pub fn duration_seconds(&self) -> f64 {
        seconds_between(self.start_time(), self.end_time())
    }

    pub fn bounding_box(&self) -> BoundingBox {
        // Non-empty by construction
        BoundingBox::from_points(&self.points).unwrap_or(BoundingBox {
            min_lat: 0.0,
            max_lat: 0.0,
            min_lon: 0.0,
            max_lon: 0.0,
        })
    }

    /// Mean latitude and longitude.
    pub fn centroid(&self) -> (f64, f64) {
        let n = self.points.len() as f64;
        let (lat, lon) = self
            .points
            .iter()
            .fold((0.0, 0.0), |(lat, lon), p| (lat + p.latitude, lon + p.longitude));
        (lat / n, lon / n)
    }
}

impl<'a> IntoIterator for &'a Track {
    type Item = &'a TrackPoint;
    type IntoIter = std::slice::Iter<'a, TrackPoint>;

    fn into_iter(self) -> Self::IntoIter {
        self.points.iter()
    }
}

/// Signed number of seconds from `from` to `to`, with sub-second precision.
pub fn seconds_between(from: DateTime<Utc>, to: DateTime<Utc>) -> f64 {
    let delta = to - from;
    match delta.num_nanoseconds() {
        Some(ns) => ns as f64 / 1e9,
        None => delta.num_milliseconds() as f64 / 1e3,
    }
}
