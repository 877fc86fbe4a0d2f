use thiserror::Error;

#[derive(Debug, Error, PartialEq)]
pub enum TrackError {
    #[error("track has no points")]
    EmptyTrack,
    #[error("track too small to interpolate ({points} point(s))")]
    DegenerateTrack { points: usize },
    #[error("out of domain: {0}")]
    Domain(String),
}
