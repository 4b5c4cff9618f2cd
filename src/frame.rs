use super::*;

/// Per-dimension bounds of a point collection: (minimums, maximums).
///
/// Only ever used as a reference for rescaling,
/// hence no invariant between `lo` and `hi` is enforced here.
#[derive(Debug, Clone, PartialEq)]
pub struct Frame {
    lo: Point,
    hi: Point,
}

impl Frame {
    pub fn lo(&self) -> &Point {
        &self.lo
    }
    pub fn hi(&self) -> &Point {
        &self.hi
    }
    pub fn dimensionality(&self) -> usize {
        self.lo.dimensionality()
    }
    /// First dimension whose span is zero, if any.
    /// Rescaling against such a frame would divide by zero.
    pub fn degenerate(&self) -> Option<usize> {
        self.lo
            .coords()
            .iter()
            .zip(self.hi.coords())
            .position(|(lo, hi)| lo == hi)
    }
}

impl From<(Point, Point)> for Frame {
    fn from((lo, hi): (Point, Point)) -> Self {
        Self { lo, hi }
    }
}

impl From<Frame> for (Point, Point) {
    fn from(frame: Frame) -> Self {
        (frame.lo, frame.hi)
    }
}

impl std::fmt::Display for Frame {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "[{} .. {}]", self.lo, self.hi)
    }
}

/// Checks that a collection is non-empty and shares one dimensionality,
/// which is returned. Gate for every coordinate-wise aggregate.
pub fn dimensionality_check<P>(points: &[P]) -> Result<usize, ClusterError>
where
    P: Spatial,
{
    let first = points.first().ok_or(ClusterError::EmptyInput)?;
    let dimensionality = first.dimensionality();
    match points.iter().all(|p| p.dimensionality() == dimensionality) {
        true => Ok(dimensionality),
        false => Err(ClusterError::InconsistentDimensionality(
            points.iter().map(|p| Point::from(p.coords())).collect(),
        )),
    }
}

/// Folds every dimension of a consistent collection with `f`.
fn extremes<P, F>(points: &[P], f: F) -> Result<Point, ClusterError>
where
    P: Spatial,
    F: Fn(Coordinate, Coordinate) -> Coordinate,
{
    let n = dimensionality_check(points)?;
    Ok((0..n)
        .map(|d| {
            points
                .iter()
                .map(|p| p.coords()[d])
                .reduce(&f)
                .expect("non empty points")
        })
        .collect())
}

/// Per-dimension minimum across the collection.
pub fn minimums<P>(points: &[P]) -> Result<Point, ClusterError>
where
    P: Spatial,
{
    extremes(points, Coordinate::min)
}

/// Per-dimension maximum across the collection.
pub fn maximums<P>(points: &[P]) -> Result<Point, ClusterError>
where
    P: Spatial,
{
    extremes(points, Coordinate::max)
}

/// Bounds of the collection packaged as two points.
pub fn frame_of<P>(points: &[P]) -> Result<Frame, ClusterError>
where
    P: Spatial,
{
    Ok(Frame::from((minimums(points)?, maximums(points)?)))
}

/// Rescales the whole collection into [0, 1] per dimension.
///
/// Every point goes through its own [`Normalize`] implementation,
/// so examples come back as examples and centroids refuse.
pub fn normalize<P>(points: &[P]) -> Result<Vec<P>, ClusterError>
where
    P: Spatial + Normalize,
{
    let ref frame = frame_of(points)?;
    if let Some(d) = frame.degenerate() {
        return Err(ClusterError::DegenerateRange(d));
    }
    points.iter().map(|p| p.normalize(frame)).collect()
}
