use super::{Sample, SampleTimeline, MAX_FRAMES};
use crate::interpolate::interpolate;
use crate::track::{Track, TrackError};

/// Splits every segment into `subdivisions` linear steps and closes with the
/// last original point, giving `subdivisions * (n - 1) + 1` samples.
pub fn subdivide(track: &Track, subdivisions: usize) -> Result<SampleTimeline, TrackError> {
    if subdivisions == 0 {
        return Err(TrackError::Domain("subdivisions must be at least 1".into()));
    }
    if track.len() < 2 {
        return Err(TrackError::DegenerateTrack {
            points: track.len(),
        });
    }

    let count = subdivisions
        .checked_mul(track.len() - 1)
        .and_then(|n| n.checked_add(1))
        .filter(|n| *n <= MAX_FRAMES)
        .ok_or_else(|| {
            TrackError::Domain(format!(
                "{} subdivisions of {} points exceeds {} frames",
                subdivisions,
                track.len(),
                MAX_FRAMES
            ))
        })?;

    let mut samples = Vec::with_capacity(count);
    for pair in track.points().windows(2) {
        for j in 0..subdivisions {
            let fraction = j as f64 / subdivisions as f64;
            let point = interpolate(&pair[0], &pair[1], fraction)?;
            samples.push(Sample {
                frame_index: samples.len(),
                point,
            });
        }
    }
    samples.push(Sample {
        frame_index: samples.len(),
        point: track.last().clone(),
    });

    let frame_duration_ms = track.duration_seconds() / samples.len() as f64 * 1000.0;
    log::debug!(
        "Subdivided {} points into {} samples, {:.3} ms per frame",
        track.len(),
        samples.len(),
        frame_duration_ms
    );

    Ok(SampleTimeline {
        samples,
        frame_duration_ms,
    })
}
