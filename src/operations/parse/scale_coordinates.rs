use crate::geometry::{CoordinatePair, Profile};
use crate::math::decimal::parse_scaled;

use super::coordinate_tokens;

/// Parses coordinate lines into a [`Profile`], scaling each value by an
/// integer factor in exact decimal arithmetic.
///
/// Lines that are blank, do not hold exactly two tokens, or hold a token that
/// is not a decimal number are skipped.
#[derive(Debug)]
pub struct ScaleCoordinates<'a> {
    lines: &'a [&'a str],
    scale: i64,
}

impl<'a> ScaleCoordinates<'a> {
    /// Creates a new parse-and-scale operation.
    #[must_use]
    pub fn new(lines: &'a [&'a str], scale: i64) -> Self {
        Self { lines, scale }
    }

    /// Executes the operation, returning the scaled coordinates in line order.
    #[must_use]
    pub fn execute(&self) -> Profile {
        let points = self
            .lines
            .iter()
            .filter_map(|line| {
                let (x, y) = coordinate_tokens(line)?;
                Some(CoordinatePair::new(
                    parse_scaled(x, self.scale)?,
                    parse_scaled(y, self.scale)?,
                ))
            })
            .collect();
        Profile::new(points)
    }
}
