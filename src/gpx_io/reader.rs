use std::fs;
use std::io::Cursor;
use std::path::Path;

use super::timestamps::from_gpx_time;
use super::FormatError;
use crate::track::{Track, TrackPoint};

/// Reads every track and segment of a GPX document, in order, into one
/// `Track`. Points without a time cannot be placed on a timeline and are
/// skipped.
pub fn parse(input: &[u8]) -> Result<Track, FormatError> {
    let gpx = gpx::read(Cursor::new(input)).map_err(|e| FormatError::Gpx(e.to_string()))?;

    let mut points = Vec::new();
    let mut skipped = 0;

    for track in gpx.tracks {
        for segment in track.segments {
            for waypoint in segment.points {
                let Some(time) = waypoint.time else {
                    skipped += 1;
                    continue;
                };

                let position = waypoint.point();
                let mut point = TrackPoint::new(position.y(), position.x(), from_gpx_time(time)?);
                point.elevation = waypoint.elevation;
                point.speed = waypoint.speed.unwrap_or(0.0);
                points.push(point);
            }
        }
    }

    if skipped > 0 {
        log::warn!("Skipped {} GPX points without a time", skipped);
    }

    Ok(Track::new(points)?)
}

pub fn read_file(path: &Path) -> Result<Track, FormatError> {
    let content = fs::read(path)?;
    let track = parse(&content)?;
    log::info!("Loaded {} points from {}", track.len(), path.display());
    Ok(track)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::track::TrackError;
    use chrono::{TimeZone, Utc};

    const SAMPLE: &str = r#"<?xml version="1.0" encoding="UTF-8"?>
<gpx version="1.1" creator="test" xmlns="http://www.topografix.com/GPX/1/1">
  <trk>
    <trkseg>
      <trkpt lat="46.5" lon="7.25"><ele>1200.5</ele><time>2024-06-01T10:00:00Z</time></trkpt>
      <trkpt lat="46.6" lon="7.30"><time>2024-06-01T10:00:07Z</time></trkpt>
      <trkpt lat="46.7" lon="7.35"><ele>1210</ele></trkpt>
    </trkseg>
    <trkseg>
      <trkpt lat="46.8" lon="7.40"><ele>1215</ele><time>2024-06-01T10:01:00Z</time></trkpt>
    </trkseg>
  </trk>
</gpx>"#;

    #[test]
    fn test_parse_flattens_segments() {
        let track = parse(SAMPLE.as_bytes()).unwrap();
        assert_eq!(track.len(), 3);

        let first = track.first();
        assert_eq!(first.latitude, 46.5);
        assert_eq!(first.longitude, 7.25);
        assert_eq!(first.elevation, Some(1200.5));
        assert_eq!(first.speed, 0.0);
        assert_eq!(
            first.timestamp,
            Utc.with_ymd_and_hms(2024, 6, 1, 10, 0, 0).unwrap()
        );

        assert_eq!(track.get(1).unwrap().elevation, None);
        assert_eq!(track.last().latitude, 46.8);
        assert_eq!(track.duration_seconds(), 60.0);
    }

    #[test]
    fn test_no_timed_points() {
        let input = r#"<?xml version="1.0"?>
<gpx version="1.1" creator="test"><trk><trkseg>
<trkpt lat="1" lon="2"></trkpt>
</trkseg></trk></gpx>"#;
        assert!(matches!(
            parse(input.as_bytes()),
            Err(FormatError::Track(TrackError::EmptyTrack))
        ));
    }

    #[test]
    fn test_not_gpx() {
        assert!(matches!(
            parse(b"definitely not xml"),
            Err(FormatError::Gpx(_))
        ));
    }
}
