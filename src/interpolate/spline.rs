use crate::track::TrackError;

/// Not-a-knot cubic spline through values sampled at positions `0, 1, .., n-1`.
///
/// Knots are unit-spaced, so the spline is stored as the knot values plus the
/// second derivative at every knot.
#[derive(Debug, Clone, PartialEq)]
pub struct CubicSpline {
    values: Vec<f64>,
    second: Vec<f64>,
}

impl CubicSpline {
    /// Needs at least three values; three give the interpolating parabola.
    pub fn fit(values: &[f64]) -> Result<Self, TrackError> {
        let n = values.len();
        if n < 3 {
            return Err(TrackError::DegenerateTrack { points: n });
        }

        // Right-hand side of M[i-1] + 4 M[i] + M[i+1] = 6 (y[i+1] - 2 y[i] + y[i-1])
        let rhs: Vec<f64> = (0..n)
            .map(|i| {
                if i == 0 || i == n - 1 {
                    0.0
                } else {
                    6.0 * (values[i + 1] - 2.0 * values[i] + values[i - 1])
                }
            })
            .collect();

        let mut second = vec![0.0; n];

        // Not-a-knot at the second knot gives M[0] = 2 M[1] - M[2], which
        // collapses the first interior equation to 6 M[1] = rhs[1]. Same at
        // the other end.
        second[1] = rhs[1] / 6.0;
        second[n - 2] = rhs[n - 2] / 6.0;

        if n == 3 {
            second[0] = second[1];
            second[2] = second[1];
        } else {
            if n > 4 {
                let inner = solve_inner(&rhs, second[1], second[n - 2]);
                second[2..n - 2].copy_from_slice(&inner);
            }
            second[0] = 2.0 * second[1] - second[2];
            second[n - 1] = 2.0 * second[n - 2] - second[n - 3];
        }

        Ok(Self {
            values: values.to_vec(),
            second,
        })
    }

    pub fn len(&self) -> usize {
        self.values.len()
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    /// Largest position `evaluate` accepts.
    pub fn domain_end(&self) -> f64 {
        (self.values.len() - 1) as f64
    }

    pub fn evaluate(&self, position: f64) -> Result<f64, TrackError> {
        if !(0.0..=self.domain_end()).contains(&position) {
            return Err(TrackError::Domain(format!(
                "position {} outside [0, {}]",
                position,
                self.domain_end()
            )));
        }

        let i = (position.floor() as usize).min(self.values.len() - 2);
        let t = position - i as f64;
        let u = 1.0 - t;

        Ok(self.values[i] * u
            + self.values[i + 1] * t
            + (self.second[i] * (u * u * u - u) + self.second[i + 1] * (t * t * t - t)) / 6.0)
    }
}

/// Thomas algorithm for rows 2..=n-3, where the diagonal is 4 and the
/// off-diagonals are 1. `first` and `last` are the already known M[1] and
/// M[n-2].
fn solve_inner(rhs: &[f64], first: f64, last: f64) -> Vec<f64> {
    let n = rhs.len();
    let mut d: Vec<f64> = rhs[2..n - 2].to_vec();
    let count = d.len();
    d[0] -= first;
    d[count - 1] -= last;

    let mut c = vec![0.0; count];
    c[0] = 1.0 / 4.0;
    d[0] /= 4.0;
    for k in 1..count {
        let denom = 4.0 - c[k - 1];
        c[k] = 1.0 / denom;
        d[k] = (d[k] - d[k - 1]) / denom;
    }

    for k in (0..count - 1).rev() {
        d[k] -= c[k] * d[k + 1];
    }
    d
}
