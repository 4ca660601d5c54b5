mod resample_curve;

pub use resample_curve::ResampleCurve;

/// Parameters controlling curve resampling.
#[derive(Debug, Clone, Copy)]
pub struct ResampleParams {
    /// Number of output samples, uniformly spaced over the parameter domain.
    pub samples: usize,
    /// Degree of the interpolating spline.
    pub degree: usize,
}

impl Default for ResampleParams {
    fn default() -> Self {
        Self {
            samples: 1000,
            degree: 3,
        }
    }
}
