mod curve;
mod linear;
mod spline;

use serde::{Deserialize, Serialize};
use strum_macros::Display;

pub use curve::Curve;
pub use linear::{interpolate, point_at_time};
pub use spline::CubicSpline;

/// How positions between original points are computed.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize, Serialize, Display)]
#[serde(rename_all = "snake_case")]
#[strum(serialize_all = "snake_case")]
pub enum Interpolation {
    Linear,
    /// Cubic spline, falls back to `Linear` below three points.
    #[default]
    Smooth,
}
