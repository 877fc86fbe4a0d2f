use super::{CropRequest, CropWindow, Selection};
use crate::track::{seconds_between, Track, TrackError};

/// Cuts the part of `track` that starts at `start_index` and lasts
/// `duration_minutes`.
///
/// The end is the last point (anywhere in the track) stamped no later than
/// start + duration, and it is included in the window. A missing, NaN or
/// non-positive duration means "until the end of the track".
pub fn select(
    track: &Track,
    start_index: usize,
    duration_minutes: Option<f64>,
) -> Result<Selection, TrackError> {
    let start = track.get(start_index).ok_or_else(|| {
        TrackError::Domain(format!(
            "start index {} outside track of {} points",
            start_index,
            track.len()
        ))
    })?;

    let window_seconds = match duration_minutes {
        Some(minutes) if minutes > 0.0 => minutes * 60.0,
        _ => track.duration_seconds(),
    };

    let end_index = track
        .iter()
        .rposition(|p| seconds_between(start.timestamp, p.timestamp) <= window_seconds);

    let end_index = match end_index {
        Some(end) if end >= start_index => end,
        _ => {
            log::debug!(
                "Window from point {} over {:.1} s selects nothing",
                start_index,
                window_seconds
            );
            return Ok(Selection::Empty);
        }
    };

    let window = Track::new(track.points()[start_index..=end_index].to_vec())?;
    log::debug!(
        "Selected points {}..={} ({} of {})",
        start_index,
        end_index,
        window.len(),
        track.len()
    );

    Ok(Selection::Window(CropWindow {
        bounding_box: window.bounding_box(),
        start_marker: window.first().clone(),
        end_marker: window.last().clone(),
        track: window,
        start_index,
        end_index,
    }))
}

pub fn select_request(track: &Track, request: &CropRequest) -> Result<Selection, TrackError> {
    select(track, request.start_index, request.duration_minutes)
}
