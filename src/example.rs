use super::*;
use std::collections::BTreeMap;

/// A data point that carries descriptive attributes along with its location.
///
/// Attributes never take part in distances or averages; they only travel
/// with the point through normalization and clustering.
#[derive(Debug, Clone, PartialEq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Example {
    point: Point,
    attrs: BTreeMap<String, String>,
}

impl Example {
    pub fn new(point: Point, attrs: BTreeMap<String, String>) -> Self {
        Self { point, attrs }
    }
    /// Independent copy of the attributes. Mutating it leaves us untouched.
    pub fn attributes(&self) -> BTreeMap<String, String> {
        self.attrs.clone()
    }
    pub fn point(&self) -> &Point {
        &self.point
    }
}

impl Spatial for Example {
    fn coords(&self) -> &[Coordinate] {
        self.point.coords()
    }
}

impl Normalize for Example {
    fn normalize(&self, frame: &Frame) -> Result<Self, ClusterError> {
        Ok(Self {
            point: self.point.rescale(frame),
            attrs: self.attrs.clone(),
        })
    }
}

impl From<Point> for Example {
    fn from(point: Point) -> Self {
        Self::new(point, BTreeMap::new())
    }
}

impl<const D: usize> From<[Coordinate; D]> for Example {
    fn from(coords: [Coordinate; D]) -> Self {
        Self::from(Point::from(coords))
    }
}

impl std::fmt::Display for Example {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} - {{", self.point)?;
        for (i, (k, v)) in self.attrs.iter().enumerate() {
            if i > 0 {
                write!(f, ", ")?;
            }
            write!(f, "'{}': '{}'", k, v)?;
        }
        write!(f, "}}")
    }
}
