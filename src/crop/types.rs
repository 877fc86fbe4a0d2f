use serde::{Deserialize, Serialize};

use crate::track::{BoundingBox, Track, TrackPoint};

/// What a slider/duration pair asks for.
#[derive(Debug, Clone, Copy, PartialEq, Deserialize, Serialize)]
pub struct CropRequest {
    pub start_index: usize,
    #[serde(default)]
    pub duration_minutes: Option<f64>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct CropWindow {
    pub track: Track,
    pub bounding_box: BoundingBox,
    pub start_marker: TrackPoint,
    pub end_marker: TrackPoint,
    /// Index of the first point in the source track.
    pub start_index: usize,
    /// Index of the last point in the source track, inclusive.
    pub end_index: usize,
}

#[derive(Debug, Clone, PartialEq)]
pub enum Selection {
    Window(CropWindow),
    /// Nothing fell inside the window.
    Empty,
}

impl Selection {
    pub fn window(&self) -> Option<&CropWindow> {
        match self {
            Selection::Window(w) => Some(w),
            Selection::Empty => None,
        }
    }

    pub fn into_window(self) -> Option<CropWindow> {
        match self {
            Selection::Window(w) => Some(w),
            Selection::Empty => None,
        }
    }

    pub fn is_empty(&self) -> bool {
        matches!(self, Selection::Empty)
    }
}

/// Shape handed to a map view. An empty selection has no points, no box
/// and no markers.
#[derive(Debug, Clone, Serialize)]
pub struct CropResponse {
    pub points: Vec<TrackPoint>,
    pub bounding_box: Option<BoundingBox>,
    pub start_marker: Option<TrackPoint>,
    pub end_marker: Option<TrackPoint>,
}

impl From<&Selection> for CropResponse {
    fn from(selection: &Selection) -> Self {
        match selection {
            Selection::Window(w) => CropResponse {
                points: w.track.points().to_vec(),
                bounding_box: Some(w.bounding_box),
                start_marker: Some(w.start_marker.clone()),
                end_marker: Some(w.end_marker.clone()),
            },
            Selection::Empty => CropResponse {
                points: Vec::new(),
                bounding_box: None,
                start_marker: None,
                end_marker: None,
            },
        }
    }
}
