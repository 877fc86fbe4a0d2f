use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// A single recorded fix.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TrackPoint {
    pub latitude: f64,
    pub longitude: f64,
    /// in m
    pub elevation: Option<f64>,
    pub timestamp: DateTime<Utc>,
    /// in m/s, 0 when the source had none
    #[serde(default)]
    pub speed: f64,
}

impl TrackPoint {
    pub fn new(latitude: f64, longitude: f64, timestamp: DateTime<Utc>) -> Self {
        Self {
            latitude,
            longitude,
            elevation: None,
            timestamp,
            speed: 0.0,
        }
    }

    pub fn with_elevation(mut self, elevation: f64) -> Self {
        self.elevation = Some(elevation);
        self
    }

    pub fn with_speed(mut self, speed: f64) -> Self {
        self.speed = speed;
        self
    }

    pub fn position(&self) -> (f64, f64) {
        (self.latitude, self.longitude)
    }
}
