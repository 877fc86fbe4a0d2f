mod bounds;
mod error;
mod point;
mod track;

pub use bounds::BoundingBox;
pub use error::TrackError;
pub use point::TrackPoint;
pub use track::{seconds_between, Track};
