//! Resampling and cropping of GPS tracks into fixed-rate animation timelines.

pub mod config;
pub mod crop;
pub mod gpx_io;
pub mod interpolate;
pub mod resample;
pub mod track;

pub use crop::{select, CropRequest, CropResponse, CropWindow, Selection};
pub use interpolate::Interpolation;
pub use resample::{ResampleMode, Resampler, Timeline};
pub use track::{BoundingBox, Track, TrackError, TrackPoint};
