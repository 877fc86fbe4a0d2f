use std::fs;
use std::path::Path;

use geo_types::Point;
use gpx::{Gpx, GpxVersion, TrackSegment, Waypoint};

use super::timestamps::to_gpx_time;
use super::FormatError;
use crate::track::Track;

const CREATOR: &str = "gpx-timeline";

/// GPX 1.1 document with one track and one segment. Speed is not written.
pub fn export(track: &Track) -> Result<Vec<u8>, FormatError> {
    let mut segment = TrackSegment::default();
    for point in track {
        let mut waypoint = Waypoint::new(Point::new(point.longitude, point.latitude));
        waypoint.elevation = point.elevation;
        waypoint.time = Some(to_gpx_time(point.timestamp)?);
        segment.points.push(waypoint);
    }

    let mut gpx_track = gpx::Track::default();
    gpx_track.segments.push(segment);

    let mut document = Gpx::default();
    document.version = GpxVersion::Gpx11;
    document.creator = Some(CREATOR.to_string());
    document.tracks.push(gpx_track);

    let mut out = Vec::new();
    gpx::write(&document, &mut out).map_err(|e| FormatError::Gpx(e.to_string()))?;
    Ok(out)
}

pub fn export_to_path(track: &Track, path: &Path) -> Result<(), FormatError> {
    let bytes = export(track)?;
    fs::write(path, bytes)?;
    log::info!("Wrote {} points to {}", track.len(), path.display());
    Ok(())
}
