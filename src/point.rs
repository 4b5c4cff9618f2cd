use super::*;

/// Anything that occupies a location in multidimensional space.
///
/// Metrics, frames, and centroid averaging only ever read coordinates,
/// so they accept any `Spatial` type: plain points, examples, or centroids.
pub trait Spatial {
    /// Coordinates along each axis, fixed at construction.
    fn coords(&self) -> &[Coordinate];
    /// Number of axes this location is described in.
    fn dimensionality(&self) -> usize {
        self.coords().len()
    }
}

/// Rescaling against a [`Frame`] that preserves the concrete variant.
///
/// A point normalizes to a point, an example to an example with the same
/// attributes, and a centroid refuses.
pub trait Normalize: Sized {
    fn normalize(&self, frame: &Frame) -> Result<Self, ClusterError>;
}

/// An immutable location in multidimensional real space.
#[derive(Debug, Clone, PartialEq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Point(Vec<Coordinate>);

impl Point {
    /// Rescales every coordinate into the frame's span:
    /// (x - min) / (max - min) per dimension.
    /// No zero check; a degenerate frame yields non-finite coordinates.
    pub fn rescale(&self, frame: &Frame) -> Self {
        debug_assert!(self.dimensionality() == frame.dimensionality());
        self.0
            .iter()
            .zip(frame.lo().coords())
            .zip(frame.hi().coords())
            .map(|((x, lo), hi)| (x - lo) / (hi - lo))
            .collect()
    }
}

impl Spatial for Point {
    fn coords(&self) -> &[Coordinate] {
        &self.0
    }
}

impl Normalize for Point {
    fn normalize(&self, frame: &Frame) -> Result<Self, ClusterError> {
        Ok(self.rescale(frame))
    }
}

impl From<Vec<Coordinate>> for Point {
    fn from(coords: Vec<Coordinate>) -> Self {
        Self(coords)
    }
}

impl<const D: usize> From<[Coordinate; D]> for Point {
    fn from(coords: [Coordinate; D]) -> Self {
        Self(coords.to_vec())
    }
}

impl From<&[Coordinate]> for Point {
    fn from(coords: &[Coordinate]) -> Self {
        Self(coords.to_vec())
    }
}

impl FromIterator<Coordinate> for Point {
    fn from_iter<I: IntoIterator<Item = Coordinate>>(iter: I) -> Self {
        Self(iter.into_iter().collect())
    }
}

/// Parses a delimited line of numbers, e.g. `1.5, -2, 3` or `1.5 -2 3`.
impl TryFrom<&str> for Point {
    type Error = anyhow::Error;
    fn try_from(s: &str) -> Result<Self, Self::Error> {
        let coords = s
            .split(|c: char| c == ',' || c.is_whitespace())
            .map(str::trim)
            .filter(|token| !token.is_empty())
            .map(|token| {
                token
                    .parse::<Coordinate>()
                    .map_err(|e| anyhow::anyhow!("invalid coordinate {:?}: {}", token, e))
            })
            .collect::<Result<Vec<_>, _>>()?;
        match coords.is_empty() {
            true => Err(anyhow::anyhow!("point without coordinates: {:?}", s)),
            false => Ok(Self(coords)),
        }
    }
}

/// Writes a coordinate tuple, e.g. `(0, 0.5)`.
pub(crate) fn tuple(f: &mut std::fmt::Formatter<'_>, coords: &[Coordinate]) -> std::fmt::Result {
    write!(f, "(")?;
    for (i, x) in coords.iter().enumerate() {
        if i > 0 {
            write!(f, ", ")?;
        }
        write!(f, "{}", x)?;
    }
    write!(f, ")")
}

impl std::fmt::Display for Point {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        tuple(f, self.coords())
    }
}
