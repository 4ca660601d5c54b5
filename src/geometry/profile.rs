/// One scaled airfoil coordinate.
///
/// `x` is the chord fraction (leading edge at 0, trailing edge at 1 before
/// scaling) and `y` the thickness or camber offset.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CoordinatePair {
    pub x: f64,
    pub y: f64,
}

impl CoordinatePair {
    /// Creates a new coordinate pair.
    #[must_use]
    pub fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }

    /// Returns the output record `(0.0, y, x)`.
    ///
    /// The chordwise coordinate goes last and the first axis is pinned to
    /// zero, placing the section in the YZ plane of the target CAD frame.
    #[must_use]
    pub fn to_record(self) -> [f64; 3] {
        [0.0, self.y, self.x]
    }
}

/// An ordered sequence of coordinates describing one airfoil surface.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Profile {
    /// The ordered coordinates.
    pub points: Vec<CoordinatePair>,
}

impl Profile {
    /// Creates a profile from its coordinates.
    #[must_use]
    pub fn new(points: Vec<CoordinatePair>) -> Self {
        Self { points }
    }

    /// Returns the number of coordinates.
    #[must_use]
    pub fn len(&self) -> usize {
        self.points.len()
    }

    /// Returns whether the profile has no coordinates.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    /// Returns the output records of every coordinate, in order.
    #[must_use]
    pub fn records(&self) -> Vec<[f64; 3]> {
        self.points.iter().map(|p| p.to_record()).collect()
    }
}

/// The upper and lower surfaces of one airfoil.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ProfilePair {
    pub upper: Profile,
    pub lower: Profile,
}

impl ProfilePair {
    /// Returns whether both surfaces are empty.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.upper.is_empty() && self.lower.is_empty()
    }
}
