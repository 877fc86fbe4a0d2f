mod frame_rate;
mod sample;
mod subdivide;

use serde::{Deserialize, Serialize};
use strum_macros::Display;

use crate::interpolate::Interpolation;
use crate::track::{Track, TrackError};

pub use frame_rate::{frame_count, frame_rate};
pub use sample::{PathTimeline, PositionSample, Sample, SampleTimeline};
pub use subdivide::subdivide;

pub const DEFAULT_SUBDIVISIONS: usize = 10;
pub const DEFAULT_FPS: f64 = 30.0;
/// Upper bound on the frames either mode will build.
pub const MAX_FRAMES: usize = 10_000_000;

#[derive(Debug, Clone, Copy, PartialEq, Deserialize, Serialize, Display)]
#[serde(tag = "mode", rename_all = "snake_case")]
#[strum(serialize_all = "snake_case")]
pub enum ResampleMode {
    /// Fixed number of linear steps per original segment, every field kept.
    Subdivide {
        #[serde(default = "default_subdivisions")]
        subdivisions: usize,
    },
    /// Fixed frames per second over the track's duration, positions only.
    FrameRate {
        #[serde(default = "default_fps")]
        fps: f64,
        #[serde(default)]
        interpolation: Interpolation,
    },
}

fn default_subdivisions() -> usize {
    DEFAULT_SUBDIVISIONS
}

fn default_fps() -> f64 {
    DEFAULT_FPS
}

impl Default for ResampleMode {
    fn default() -> Self {
        ResampleMode::Subdivide {
            subdivisions: DEFAULT_SUBDIVISIONS,
        }
    }
}

#[derive(Debug, Clone, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum Timeline {
    Samples(SampleTimeline),
    Path(PathTimeline),
}

impl Timeline {
    /// Number of frames that carry a sample.
    pub fn len(&self) -> usize {
        match self {
            Timeline::Samples(t) => t.len(),
            Timeline::Path(t) => t.len(),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Milliseconds each frame stays on screen.
    pub fn frame_duration_ms(&self) -> f64 {
        match self {
            Timeline::Samples(t) => t.frame_duration_ms,
            Timeline::Path(t) => t.frame_interval_ms,
        }
    }
}

/// Turns a track into an animation timeline according to its mode.
#[derive(Debug, Clone, Copy, Default)]
pub struct Resampler {
    mode: ResampleMode,
}

impl Resampler {
    pub fn new(mode: ResampleMode) -> Self {
        Self { mode }
    }

    pub fn mode(&self) -> ResampleMode {
        self.mode
    }

    pub fn resample(&self, track: &Track) -> Result<Timeline, TrackError> {
        log::info!("Resampling {} points ({})", track.len(), self.mode);

        match self.mode {
            ResampleMode::Subdivide { subdivisions } => {
                subdivide(track, subdivisions).map(Timeline::Samples)
            }
            ResampleMode::FrameRate { fps, interpolation } => {
                frame_rate(track, fps, interpolation).map(Timeline::Path)
            }
        }
    }
}
