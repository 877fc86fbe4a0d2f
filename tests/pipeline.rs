use chrono::{Duration, TimeZone, Utc};

use gpx_timeline::gpx_io::{export, parse};
use gpx_timeline::{
    select, CropResponse, Interpolation, ResampleMode, Resampler, Timeline, Track, TrackPoint,
};

/// One point per minute for 20 minutes, some of them carrying speed.
fn ride() -> Track {
    let start = Utc.with_ymd_and_hms(2024, 8, 3, 7, 15, 0).unwrap();
    Track::new(
        (0..=20)
            .map(|i| {
                TrackPoint::new(
                    48.1 + i as f64 * 0.0015,
                    11.5 + (i as f64 * 0.3).cos() * 0.002,
                    start + Duration::minutes(i),
                )
                .with_elevation(520.0 + (i % 5) as f64)
                .with_speed(if i % 2 == 0 { 4.0 } else { 0.0 })
            })
            .collect(),
    )
    .unwrap()
}

#[test]
fn crop_export_reparse_and_animate() {
    let track = ride();

    let selection = select(&track, 2, Some(5.0)).unwrap();
    let window = selection.window().expect("window");
    assert_eq!((window.start_index, window.end_index), (2, 7));

    let reparsed = parse(&export(&window.track).unwrap()).unwrap();
    assert_eq!(reparsed.len(), window.track.len());
    for (a, b) in window.track.iter().zip(reparsed.iter()) {
        assert_eq!(a.position(), b.position());
        assert_eq!(a.elevation, b.elevation);
        assert_eq!(a.timestamp, b.timestamp);
    }

    match Resampler::default().resample(&reparsed).unwrap() {
        Timeline::Samples(samples) => {
            assert_eq!(samples.len(), 10 * 5 + 1);
            assert_eq!(samples.samples[0].point.timestamp, reparsed.start_time());
            assert_eq!(
                samples.samples[samples.len() - 1].point.timestamp,
                reparsed.end_time()
            );
            // 300 s over 51 frames
            assert!((samples.frame_duration_ms - 300_000.0 / 51.0).abs() < 1e-9);
        }
        Timeline::Path(_) => panic!("expected subdivided samples"),
    }

    let path = Resampler::new(ResampleMode::FrameRate {
        fps: 2.0,
        interpolation: Interpolation::Smooth,
    })
    .resample(&reparsed)
    .unwrap();
    assert_eq!(path.len(), 600);
}

#[test]
fn full_track_window_round_trips_through_response() {
    let track = ride();
    let selection = select(&track, 0, None).unwrap();
    let response = CropResponse::from(&selection);

    assert_eq!(response.points.len(), track.len());
    assert_eq!(response.end_marker.as_ref(), Some(track.last()));
    assert_eq!(response.start_marker.as_ref(), Some(track.first()));

    let bbox = response.bounding_box.unwrap();
    assert!(track.iter().all(|p| bbox.contains(p.latitude, p.longitude)));
}

#[test]
fn cropped_window_can_be_resampled_again() {
    let track = ride();
    let window = select(&track, 10, Some(3.0))
        .unwrap()
        .into_window()
        .unwrap();
    assert_eq!(window.track.len(), 4);

    let timeline = Resampler::new(ResampleMode::Subdivide { subdivisions: 3 })
        .resample(&window.track)
        .unwrap();
    assert_eq!(timeline.len(), 10);
}
