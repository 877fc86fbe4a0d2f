use super::{CubicSpline, Interpolation};
use crate::track::{Track, TrackError};

/// Geographic path through a track, parameterised by point position
/// (0 at the first point, `len - 1` at the last), not by time.
#[derive(Debug, Clone)]
pub enum Curve {
    Linear {
        latitudes: Vec<f64>,
        longitudes: Vec<f64>,
    },
    Cubic {
        latitude: CubicSpline,
        longitude: CubicSpline,
    },
}

impl Curve {
    pub fn build(track: &Track, interpolation: Interpolation) -> Result<Self, TrackError> {
        if track.len() < 2 {
            return Err(TrackError::DegenerateTrack {
                points: track.len(),
            });
        }

        let latitudes: Vec<f64> = track.iter().map(|p| p.latitude).collect();
        let longitudes: Vec<f64> = track.iter().map(|p| p.longitude).collect();

        match interpolation {
            Interpolation::Smooth if track.len() >= 3 => Ok(Curve::Cubic {
                latitude: CubicSpline::fit(&latitudes)?,
                longitude: CubicSpline::fit(&longitudes)?,
            }),
            Interpolation::Smooth => {
                log::debug!("Only {} points, smooth curve falls back to linear", track.len());
                Ok(Curve::Linear {
                    latitudes,
                    longitudes,
                })
            }
            Interpolation::Linear => Ok(Curve::Linear {
                latitudes,
                longitudes,
            }),
        }
    }

    pub fn interpolation(&self) -> Interpolation {
        match self {
            Curve::Linear { .. } => Interpolation::Linear,
            Curve::Cubic { .. } => Interpolation::Smooth,
        }
    }

    pub fn domain_end(&self) -> f64 {
        match self {
            Curve::Linear { latitudes, .. } => (latitudes.len() - 1) as f64,
            Curve::Cubic { latitude, .. } => latitude.domain_end(),
        }
    }

    /// `(latitude, longitude)` at `position`.
    pub fn evaluate(&self, position: f64) -> Result<(f64, f64), TrackError> {
        match self {
            Curve::Linear {
                latitudes,
                longitudes,
            } => Ok((
                linear_at(latitudes, position)?,
                linear_at(longitudes, position)?,
            )),
            Curve::Cubic {
                latitude,
                longitude,
            } => Ok((latitude.evaluate(position)?, longitude.evaluate(position)?)),
        }
    }
}

fn linear_at(values: &[f64], position: f64) -> Result<f64, TrackError> {
    let end = (values.len() - 1) as f64;
    if !(0.0..=end).contains(&position) {
        return Err(TrackError::Domain(format!(
            "position {} outside [0, {}]",
            position, end
        )));
    }

    let i = (position.floor() as usize).min(values.len() - 2);
    let t = position - i as f64;
    Ok(values[i] + t * (values[i + 1] - values[i]))
}
