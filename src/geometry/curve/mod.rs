mod bspline_curve;

pub use bspline_curve::BSplineCurve;

use crate::error::Result;
use crate::math::Point3;

/// Closed parameter interval `[start, end]` over which a curve is defined.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CurveDomain {
    pub start: f64,
    pub end: f64,
}

impl CurveDomain {
    #[must_use]
    pub fn new(start: f64, end: f64) -> Self {
        Self { start, end }
    }

    /// Returns whether `t` lies inside the domain, ends included.
    #[must_use]
    pub fn contains(&self, t: f64) -> bool {
        t >= self.start && t <= self.end
    }

    /// Returns `n` evenly spaced parameters from `start` to `end`.
    ///
    /// The first and last values are exactly `start` and `end`. A single
    /// sample sits at `start`.
    #[must_use]
    #[allow(clippy::cast_precision_loss)]
    pub fn uniform(&self, n: usize) -> Vec<f64> {
        match n {
            0 => Vec::new(),
            1 => vec![self.start],
            _ => {
                let step = (self.end - self.start) / (n - 1) as f64;
                (0..n)
                    .map(|i| {
                        if i == n - 1 {
                            self.end
                        } else {
                            self.start + step * i as f64
                        }
                    })
                    .collect()
            }
        }
    }
}

/// A parametric curve in 3D space.
pub trait Curve {
    /// Point on the curve at parameter `t`.
    ///
    /// # Errors
    ///
    /// Returns `GeometryError::ParameterOutOfRange` if `t` is outside
    /// [`Curve::domain`].
    fn evaluate(&self, t: f64) -> Result<Point3>;

    fn domain(&self) -> CurveDomain;

    /// Evaluates the curve at `n` parameters spread evenly over its domain.
    ///
    /// # Errors
    ///
    /// Propagates the first evaluation error.
    fn sample_uniform(&self, n: usize) -> Result<Vec<Point3>> {
        self.domain()
            .uniform(n)
            .into_iter()
            .map(|t| self.evaluate(t))
            .collect()
    }
}
