mod find_separator;
mod scale_coordinates;
mod split_profiles;

pub use find_separator::FindSeparator;
pub use scale_coordinates::ScaleCoordinates;
pub use split_profiles::SplitProfiles;

/// Tolerances for inferring the upper/lower boundary from chordwise values.
#[derive(Debug, Clone, Copy)]
pub struct SeparatorParams {
    /// Minimum step between consecutive `x` values for a direction reversal
    /// to count; smaller steps are treated as noise.
    pub noise_tolerance: f64,
    /// How close to the leading (`0`) or trailing (`1`) edge a reversal
    /// point must lie.
    pub edge_tolerance: f64,
    /// Minimum number of coordinate lines needed to attempt inference.
    pub min_points: usize,
}

impl Default for SeparatorParams {
    fn default() -> Self {
        Self {
            noise_tolerance: 0.01,
            edge_tolerance: 0.01,
            min_points: 4,
        }
    }
}

impl SeparatorParams {
    /// Returns whether `x` lies at the leading or trailing edge of the chord.
    #[must_use]
    pub fn is_at_edge(&self, x: f64) -> bool {
        x < self.edge_tolerance || x > 1.0 - self.edge_tolerance
    }
}

/// Splits a line into exactly two whitespace-separated tokens.
fn coordinate_tokens(line: &str) -> Option<(&str, &str)> {
    let mut tokens = line.split_whitespace();
    match (tokens.next(), tokens.next(), tokens.next()) {
        (Some(x), Some(y), None) => Some((x, y)),
        _ => None,
    }
}
