use serde::Serialize;

use crate::interpolate::Interpolation;
use crate::track::TrackPoint;

/// Frame of a subdivided timeline: a full point plus its place in the
/// sequence.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Sample {
    pub frame_index: usize,
    #[serde(flatten)]
    pub point: TrackPoint,
}

/// Frame of a fixed-rate path. Only the position is known; the time of the
/// frame follows from its index and the frame rate.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct PositionSample {
    pub frame_index: usize,
    pub latitude: f64,
    pub longitude: f64,
}

impl PositionSample {
    pub fn time_offset_seconds(&self, fps: f64) -> f64 {
        self.frame_index as f64 / fps
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct SampleTimeline {
    pub samples: Vec<Sample>,
    /// Display time of one frame so that the whole timeline plays in the
    /// track's real elapsed time.
    pub frame_duration_ms: f64,
}

impl SampleTimeline {
    pub fn len(&self) -> usize {
        self.samples.len()
    }

    pub fn is_empty(&self) -> bool {
        self.samples.is_empty()
    }

    pub fn frame(&self, frame_index: usize) -> Option<&Sample> {
        self.samples.get(frame_index)
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct PathTimeline {
    pub positions: Vec<PositionSample>,
    pub fps: f64,
    pub frame_interval_ms: f64,
    /// `floor(fps * duration)`; can exceed `positions.len()` for two-point
    /// tracks, which are not resampled.
    pub num_frames: usize,
    pub interpolation: Interpolation,
}

impl PathTimeline {
    pub fn len(&self) -> usize {
        self.positions.len()
    }

    pub fn is_empty(&self) -> bool {
        self.positions.is_empty()
    }

    /// Positions drawn by the time `frame` is shown: the path grows by one
    /// position per frame.
    pub fn trail(&self, frame: usize) -> &[PositionSample] {
        &self.positions[..frame.min(self.positions.len())]
    }
}
