use serde::{Deserialize, Serialize};

use super::TrackPoint;

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct BoundingBox {
    pub min_lat: f64,
    pub max_lat: f64,
    pub min_lon: f64,
    pub max_lon: f64,
}

impl BoundingBox {
    /// Smallest box around `points`, None when there are none.
    pub fn from_points<'a>(points: impl IntoIterator<Item = &'a TrackPoint>) -> Option<Self> {
        let mut iter = points.into_iter();
        let first = iter.next()?;
        let seed = Self {
            min_lat: first.latitude,
            max_lat: first.latitude,
            min_lon: first.longitude,
            max_lon: first.longitude,
        };

        Some(iter.fold(seed, |bbox, p| Self {
            min_lat: bbox.min_lat.min(p.latitude),
            max_lat: bbox.max_lat.max(p.latitude),
            min_lon: bbox.min_lon.min(p.longitude),
            max_lon: bbox.max_lon.max(p.longitude),
        }))
    }

    pub fn center(&self) -> (f64, f64) {
        (
            (self.min_lat + self.max_lat) / 2.0,
            (self.min_lon + self.max_lon) / 2.0,
        )
    }

    pub fn is_point(&self) -> bool {
        self.min_lat == self.max_lat && self.min_lon == self.max_lon
    }

    pub fn contains(&self, latitude: f64, longitude: f64) -> bool {
        (self.min_lat..=self.max_lat).contains(&latitude)
            && (self.min_lon..=self.max_lon).contains(&longitude)
    }
}
