use tracing::debug;

use crate::error::Result;
use crate::geometry::{BSplineCurve, Curve};
use crate::math::Point3;

use super::ResampleParams;

/// Regenerates an ordered point sequence at a fixed, higher density.
///
/// Fits the spline that interpolates every input point (no smoothing) and
/// evaluates it at `samples` parameters spaced uniformly over `[0, 1]`, both
/// ends included.
#[derive(Debug)]
pub struct ResampleCurve {
    points: Vec<Point3>,
    params: ResampleParams,
}

impl ResampleCurve {
    /// Creates a new resample operation with default parameters.
    #[must_use]
    pub fn new(points: Vec<Point3>) -> Self {
        Self {
            points,
            params: ResampleParams::default(),
        }
    }

    /// Overrides the resampling parameters.
    #[must_use]
    pub fn with_params(mut self, params: ResampleParams) -> Self {
        self.params = params;
        self
    }

    /// Executes the resampling.
    ///
    /// # Errors
    ///
    /// - `OperationError::InvalidInput` if fewer than `degree + 1` points are
    ///   provided or a coordinate is not finite
    /// - `GeometryError::Degenerate` if two consecutive points coincide
    /// - `OperationError::Failed` if the spline cannot be fitted
    pub fn execute(&self) -> Result<Vec<Point3>> {
        let curve = BSplineCurve::interpolate(&self.points, self.params.degree)?;
        let resampled = curve.sample_uniform(self.params.samples)?;

        debug!(
            input = self.points.len(),
            output = resampled.len(),
            "resampled curve"
        );
        Ok(resampled)
    }
}
