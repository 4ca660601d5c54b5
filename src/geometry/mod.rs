pub mod curve;
pub mod profile;

pub use curve::{BSplineCurve, Curve, CurveDomain};
pub use profile::{CoordinatePair, Profile, ProfilePair};
