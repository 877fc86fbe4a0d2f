use thiserror::Error;

use crate::track::TrackError;

#[derive(Debug, Error)]
pub enum FormatError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("GPX error: {0}")]
    Gpx(String),
    #[error("invalid timestamp: {0}")]
    Time(String),
    #[error("track error: {0}")]
    Track(#[from] TrackError),
}
