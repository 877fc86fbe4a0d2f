use super::{PathTimeline, PositionSample, MAX_FRAMES};
use crate::interpolate::{Curve, Interpolation};
use crate::track::{Track, TrackError};

/// Samples the track's path at a fixed frame rate over its real duration.
///
/// The curve is indexed by point position, so frames are spread evenly over
/// the points rather than over time. Only latitude and longitude are
/// produced. Tracks with two points are passed through as they are,
/// truncated to the frame count.
pub fn frame_rate(
    track: &Track,
    fps: f64,
    interpolation: Interpolation,
) -> Result<PathTimeline, TrackError> {
    if !fps.is_finite() || fps <= 0.0 {
        return Err(TrackError::Domain(format!("frame rate {} must be positive", fps)));
    }
    if track.len() < 2 {
        return Err(TrackError::DegenerateTrack {
            points: track.len(),
        });
    }

    let num_frames = frame_count(fps, track.duration_seconds());
    if num_frames > MAX_FRAMES {
        return Err(TrackError::Domain(format!(
            "{} fps over {:.3} s exceeds {} frames",
            fps,
            track.duration_seconds(),
            MAX_FRAMES
        )));
    }

    let (positions, interpolation) = if track.len() <= 2 {
        let positions: Vec<PositionSample> = track
            .iter()
            .take(num_frames)
            .enumerate()
            .map(|(frame_index, p)| PositionSample {
                frame_index,
                latitude: p.latitude,
                longitude: p.longitude,
            })
            .collect();
        (positions, Interpolation::Linear)
    } else {
        let curve = Curve::build(track, interpolation)?;
        let positions = linspace(curve.domain_end(), num_frames)
            .enumerate()
            .map(|(frame_index, position)| {
                let (latitude, longitude) = curve.evaluate(position)?;
                Ok::<_, TrackError>(PositionSample {
                    frame_index,
                    latitude,
                    longitude,
                })
            })
            .collect::<Result<Vec<_>, _>>()?;
        (positions, curve.interpolation())
    };

    log::debug!(
        "Sampled {} points into {} frames at {} fps ({})",
        track.len(),
        positions.len(),
        fps,
        interpolation
    );

    Ok(PathTimeline {
        positions,
        fps,
        frame_interval_ms: 1000.0 / fps,
        num_frames,
        interpolation,
    })
}

/// `floor(fps * seconds)`, zero for empty or backwards spans. Saturates at
/// `usize::MAX`.
pub fn frame_count(fps: f64, seconds: f64) -> usize {
    let frames = (fps * seconds).floor();
    if frames > 0.0 {
        frames as usize
    } else {
        0
    }
}

/// `count` evenly spaced values from 0 to `end` inclusive. A single value
/// sits at 0.
fn linspace(end: f64, count: usize) -> impl Iterator<Item = f64> {
    let step = if count > 1 {
        end / (count - 1) as f64
    } else {
        0.0
    };
    (0..count).map(move |k| (k as f64 * step).min(end))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::track::TrackPoint;
    use chrono::{Duration, TimeZone, Utc};

    fn track(n: usize, total: Duration) -> Track {
        let start = Utc.with_ymd_and_hms(2024, 5, 1, 8, 0, 0).unwrap();
        let step = total / (n.max(2) as i32 - 1);
        Track::new(
            (0..n)
                .map(|i| {
                    let lat = 50.0 + (i as f64 * 0.7).sin() * 0.01;
                    let lon = 4.0 + i as f64 * 0.003;
                    TrackPoint::new(lat, lon, start + step * i as i32)
                })
                .collect(),
        )
        .unwrap()
    }

    fn smooth(track: &Track, fps: f64) -> Result<PathTimeline, TrackError> {
        frame_rate(track, fps, Interpolation::Smooth)
    }

    #[test]
    fn test_frame_count_matches_duration() {
        let timeline = smooth(&track(11, Duration::seconds(10)), 30.0).unwrap();
        assert_eq!(timeline.num_frames, 300);
        assert_eq!(timeline.len(), 300);
        assert_eq!(timeline.interpolation, Interpolation::Smooth);
        assert!((timeline.frame_interval_ms - 1000.0 / 30.0).abs() < 1e-12);

        let fractional = smooth(&track(5, Duration::milliseconds(2550)), 24.0).unwrap();
        assert_eq!(fractional.len(), 61);
    }

    #[test]
    fn test_shorter_than_one_frame_is_empty() {
        let timeline = smooth(&track(4, Duration::milliseconds(30)), 30.0).unwrap();
        assert_eq!(timeline.num_frames, 0);
        assert!(timeline.is_empty());
        assert!(timeline.trail(10).is_empty());
    }

    #[test]
    fn test_path_starts_and_ends_on_track() {
        let source = track(9, Duration::seconds(4));
        for interpolation in [Interpolation::Smooth, Interpolation::Linear] {
            let timeline = frame_rate(&source, 25.0, interpolation).unwrap();
            let first = timeline.positions[0];
            let last = timeline.positions[timeline.len() - 1];
            assert!((first.latitude - source.first().latitude).abs() < 1e-12);
            assert!((last.latitude - source.last().latitude).abs() < 1e-12);
            assert!((last.longitude - source.last().longitude).abs() < 1e-12);
            assert_eq!(last.frame_index, 99);
            assert!((last.time_offset_seconds(25.0) - 3.96).abs() < 1e-12);
        }
    }

    #[test]
    fn test_trail_grows_with_frame() {
        let timeline = smooth(&track(6, Duration::seconds(2)), 10.0).unwrap();
        assert_eq!(timeline.trail(0).len(), 0);
        assert_eq!(timeline.trail(7).len(), 7);
        assert_eq!(timeline.trail(1000).len(), timeline.len());
    }

    #[test]
    fn test_two_points_are_not_resampled() {
        let timeline = smooth(&track(2, Duration::seconds(60)), 30.0).unwrap();
        assert_eq!(timeline.num_frames, 1800);
        assert_eq!(timeline.len(), 2);
        assert_eq!(timeline.interpolation, Interpolation::Linear);

        let short = smooth(&track(2, Duration::milliseconds(40)), 30.0).unwrap();
        assert_eq!(short.len(), 1);
    }

    #[test]
    fn test_single_point_is_rejected() {
        assert_eq!(
            smooth(&track(1, Duration::zero()), 30.0).unwrap_err(),
            TrackError::DegenerateTrack { points: 1 }
        );
    }

    #[test]
    fn test_invalid_frame_rate() {
        let source = track(3, Duration::seconds(1));
        for fps in [0.0, -1.0, f64::NAN, f64::INFINITY] {
            assert!(matches!(
                frame_rate(&source, fps, Interpolation::Smooth),
                Err(TrackError::Domain(_))
            ));
        }
    }

    #[test]
    fn test_frame_rate_beyond_frame_limit() {
        let source = track(4, Duration::seconds(1));
        for fps in [1e300, f64::MAX, 2.0 * MAX_FRAMES as f64] {
            assert!(matches!(
                frame_rate(&source, fps, Interpolation::Smooth),
                Err(TrackError::Domain(_))
            ));
        }
        assert!(matches!(
            frame_rate(&track(2, Duration::seconds(60)), 1e300, Interpolation::Linear),
            Err(TrackError::Domain(_))
        ));
        assert_eq!(frame_count(f64::MAX, 60.0), usize::MAX);
        assert_eq!(frame_count(30.0, -2.0), 0);
    }
}
