pub mod parse;
pub mod query;
pub mod resample;

pub use parse::{FindSeparator, ScaleCoordinates, SeparatorParams, SplitProfiles};
pub use query::{FindSelfIntersections, IntersectionCandidate, IntersectionParams, PointIndex};
pub use resample::{ResampleCurve, ResampleParams};
