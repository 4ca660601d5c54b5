use tracing::warn;

use crate::geometry::ProfilePair;

use super::{FindSeparator, ScaleCoordinates, SeparatorParams};

/// Number of header lines (title, point counts) preceding the coordinates.
const HEADER_LINES: usize = 2;

/// Splits a two-surface airfoil coordinate listing into scaled upper and
/// lower profiles.
///
/// The first two lines are an opaque header. Coordinates follow, with the
/// surfaces separated by a blank line or, failing that, by the boundary
/// [`FindSeparator`] infers from the chordwise values.
#[derive(Debug)]
pub struct SplitProfiles<'a> {
    text: &'a str,
    scale: i64,
    params: SeparatorParams,
}

impl<'a> SplitProfiles<'a> {
    /// Creates a new split operation with default separator tolerances.
    #[must_use]
    pub fn new(text: &'a str, scale: i64) -> Self {
        Self {
            text,
            scale,
            params: SeparatorParams::default(),
        }
    }

    /// Overrides the separator tolerances.
    #[must_use]
    pub fn with_params(mut self, params: SeparatorParams) -> Self {
        self.params = params;
        self
    }

    /// Executes the split.
    ///
    /// When no separator can be found both profiles are empty and a warning
    /// is logged; callers still get a value to write out.
    #[must_use]
    pub fn execute(&self) -> ProfilePair {
        self.try_execute().unwrap_or_default()
    }

    /// Executes the split, returning `None` (after logging a warning) when no
    /// separator can be found.
    #[must_use]
    pub fn try_execute(&self) -> Option<ProfilePair> {
        let lines: Vec<&str> = self.text.trim().split('\n').skip(HEADER_LINES).collect();

        let start = lines
            .iter()
            .position(|line| !line.trim().is_empty())
            .unwrap_or(lines.len());

        let Some(separator) = FindSeparator::new(&lines, start, self.params).execute() else {
            warn!("could not detect separator between upper and lower profiles");
            return None;
        };

        let upper = &lines[start..separator];
        let lower_start = lines
            .iter()
            .enumerate()
            .skip(separator + 1)
            .find(|(_, line)| !line.trim().is_empty())
            .map_or(lines.len(), |(i, _)| i);
        let lower = &lines[lower_start..];

        Some(ProfilePair {
            upper: ScaleCoordinates::new(upper, self.scale).execute(),
            lower: ScaleCoordinates::new(lower, self.scale).execute(),
        })
    }
}
