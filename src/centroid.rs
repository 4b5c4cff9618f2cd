use super::*;

/// The mean point of a cluster together with the points currently assigned to it.
///
/// Coordinates are fixed at construction and are not kept in sync with
/// membership. Moving a centroid to the mean of its members means calling
/// [`Centroid::recalculate`], which yields a new instance and leaves this
/// one untouched. Membership is the only mutable part, driven by training
/// through [`Centroid::add_point`] and [`Centroid::flush`].
///
/// Members can be any [`Spatial`] type, so clustering examples keeps
/// their attributes attached.
#[derive(Debug, Clone, PartialEq)]
pub struct Centroid<P = Point> {
    point: Point,
    points: Vec<P>,
    name: String,
}

impl<P> Centroid<P>
where
    P: Spatial + Clone,
{
    /// Direct construction. Members are stored as given; no mean is computed.
    /// An empty `name` draws a fresh one from `namer`.
    pub fn new(point: Point, points: Vec<P>, name: &str, namer: &Namer) -> Self {
        Self {
            point,
            points,
            name: namer.name(name),
        }
    }

    /// Centroid at the per-dimension arithmetic mean of `points`,
    /// owning exactly those points.
    pub fn centroid_of(points: Vec<P>, name: &str, namer: &Namer) -> Result<Self, ClusterError> {
        let point = Self::mean(&points)?;
        Ok(Self::new(point, points, name, namer))
    }

    /// Memberless centroid seeded at the location of `point`.
    pub fn centroid_of_point<Q>(point: &Q, name: &str, namer: &Namer) -> Self
    where
        Q: Spatial + ?Sized,
    {
        Self::new(Point::from(point.coords()), Vec::new(), name, namer)
    }

    /// Average of a consistent, non-empty collection.
    fn mean(points: &[P]) -> Result<Point, ClusterError> {
        let n = dimensionality_check(points)?;
        let size = points.len() as Coordinate;
        Ok((0..n)
            .map(|d| points.iter().map(|p| p.coords()[d]).sum::<Coordinate>() / size)
            .collect())
    }

    pub fn name(&self) -> &str {
        &self.name
    }
    pub fn point(&self) -> &Point {
        &self.point
    }
    pub fn points(&self) -> &[P] {
        &self.points
    }
    pub fn number_of_points(&self) -> usize {
        self.points.len()
    }

    /// Appends a member. Dimensionality is the caller's concern.
    pub fn add_point(&mut self, point: P) {
        self.points.push(point);
    }
    /// Drops every member.
    pub fn flush(&mut self) {
        self.points.clear();
    }

    /// New centroid, same name, at the mean of the current members.
    /// A memberless centroid has no mean.
    pub fn recalculate(&self) -> Result<Self, ClusterError> {
        match Self::mean(&self.points) {
            Ok(point) => Ok(Self {
                point,
                points: self.points.clone(),
                name: self.name.clone(),
            }),
            Err(ClusterError::EmptyInput) => Err(ClusterError::EmptyCluster(self.name.clone())),
            Err(e) => Err(e),
        }
    }

    /// New centroid, same name and location, without members.
    pub fn retain(&self) -> Self {
        Self {
            point: self.point.clone(),
            points: Vec::new(),
            name: self.name.clone(),
        }
    }

    /// Bounds of the current members.
    pub fn frame(&self) -> Result<Frame, ClusterError> {
        frame_of(&self.points)
    }

    /// Sum of squared distances from this centroid to each member.
    pub fn variance<M>(&self, metric: &M) -> Result<Energy, ClusterError>
    where
        M: Metric,
    {
        self.points
            .iter()
            .map(|p| metric.distance(self, p).map(|d| d * d))
            .sum()
    }
}

impl<P> Spatial for Centroid<P> {
    fn coords(&self) -> &[Coordinate] {
        self.point.coords()
    }
}

/// Centroids are statistics over data, never data themselves.
impl<P> Normalize for Centroid<P> {
    fn normalize(&self, _: &Frame) -> Result<Self, ClusterError> {
        Err(ClusterError::CentroidNormalization)
    }
}

impl<P> std::fmt::Display for Centroid<P> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "{} {}: (points = {})",
            self.name,
            self.point,
            self.points.len()
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn points() -> Vec<Point> {
        vec![Point::from([0., 0.]), Point::from([1., 1.])]
    }

    fn divergent() -> Vec<Point> {
        vec![Point::from([4., 0.]), Point::from([-2., 3.])]
    }

    #[test]
    fn creation_using_constructor() {
        let ref namer = Namer::default();
        let c = Centroid::new(Point::from([0.5, 0.5]), points(), "test-centroid", namer);
        assert_eq!(c.coords(), &[0.5, 0.5]);
        assert_eq!(c.number_of_points(), 2);
        assert_eq!(c.dimensionality(), 2);
        assert_eq!(c.name(), "test-centroid");
        assert_eq!(namer.peek(), 0);
    }

    #[test]
    fn creation_using_factory() {
        let ref namer = Namer::default();
        let c = Centroid::centroid_of(points(), "test-centroid", namer).unwrap();
        assert_eq!(c.coords(), &[0.5, 0.5]);
        assert_eq!(c.points(), points().as_slice());
        assert_eq!(c.dimensionality(), 2);
        assert_eq!(c.name(), "test-centroid");
    }

    #[test]
    fn creation_from_point_has_no_members() {
        let ref namer = Namer::default();
        let c = Centroid::<Point>::centroid_of_point(&Point::from([3., -1.]), "", namer);
        assert_eq!(c.coords(), &[3., -1.]);
        assert_eq!(c.number_of_points(), 0);
        assert_eq!(c.name(), "centroid_0");
    }

    #[test]
    fn factory_with_inconsistent_dimensions_fails() {
        let ref namer = Namer::default();
        let points = vec![Point::from([0.]), Point::from([1., 1.])];
        assert!(matches!(
            Centroid::centroid_of(points, "failure", namer),
            Err(ClusterError::InconsistentDimensionality(_))
        ));
    }

    #[test]
    fn factory_with_no_points_fails() {
        let ref namer = Namer::default();
        assert_eq!(
            Centroid::<Point>::centroid_of(vec![], "", namer),
            Err(ClusterError::EmptyInput)
        );
    }

    #[test]
    fn automatic_unique_name_assignment() {
        let ref namer = Namer::default();
        let c1 = Centroid::centroid_of(points(), "", namer).unwrap();
        let c2 = Centroid::centroid_of(points(), "", namer).unwrap();
        assert_ne!(c1.name(), c2.name());
    }

    #[test]
    fn repr() {
        let ref namer = Namer::default();
        let c = Centroid::centroid_of(points(), "test-centroid", namer).unwrap();
        assert_eq!(c.to_string(), "test-centroid (0.5, 0.5): (points = 2)");
    }

    #[test]
    fn normalization_is_refused() {
        let ref namer = Namer::default();
        let c = Centroid::centroid_of(points(), "", namer).unwrap();
        let ref frame = frame_of(&points()).unwrap();
        let err = c.normalize(frame).unwrap_err();
        assert_eq!(err, ClusterError::CentroidNormalization);
        assert_eq!(err.to_string(), "Centroids cannot be normalized");
        let other = Centroid::centroid_of(divergent(), "", namer).unwrap();
        assert_eq!(
            normalize(&[c, other]),
            Err(ClusterError::CentroidNormalization)
        );
    }

    #[test]
    fn frame_of_members() {
        let ref namer = Namer::default();
        let (lo, hi): (Point, Point) = Centroid::centroid_of(divergent(), "", namer)
            .unwrap()
            .frame()
            .unwrap()
            .into();
        assert_eq!(lo.coords(), &[-2., 0.]);
        assert_eq!(hi.coords(), &[4., 3.]);
    }

    #[test]
    fn variance_sums_squared_distances() {
        let ref namer = Namer::default();
        let c = Centroid::centroid_of(divergent(), "", namer).unwrap();
        let variance = c.variance(&Euclidean).unwrap();
        assert_eq!((variance * 100.).round() / 100., 22.5);
    }

    #[test]
    fn mean_and_variance_ignore_order() {
        let ref namer = Namer::default();
        let forward = vec![
            Point::from([1., 2., 3.]),
            Point::from([-4., 0.5, 8.]),
            Point::from([7., -2., 1.]),
            Point::from([0., 3.5, -4.]),
        ];
        let backward = forward.iter().rev().cloned().collect::<Vec<_>>();
        let a = Centroid::centroid_of(forward, "", namer).unwrap();
        let b = Centroid::centroid_of(backward, "", namer).unwrap();
        assert_eq!(a.coords(), b.coords());
        assert_eq!(a.coords(), &[1., 1., 2.]);
        assert_eq!(
            a.variance(&Taxicab).unwrap(),
            b.variance(&Taxicab).unwrap()
        );
    }

    #[test]
    fn membership_is_mutable_coordinates_are_not() {
        let ref namer = Namer::default();
        let mut c = Centroid::centroid_of_point(&Point::from([0., 0.]), "", namer);
        c.add_point(Point::from([2., 2.]));
        c.add_point(Point::from([4., 0.]));
        assert_eq!(c.number_of_points(), 2);
        assert_eq!(c.coords(), &[0., 0.]);
        let next = c.recalculate().unwrap();
        assert_eq!(next.coords(), &[3., 1.]);
        assert_eq!(next.name(), c.name());
        assert_eq!(next.number_of_points(), 2);
        assert_eq!(c.coords(), &[0., 0.]);
        c.flush();
        assert_eq!(c.number_of_points(), 0);
    }

    #[test]
    fn recalculate_without_members_fails() {
        let ref namer = Namer::default();
        let c = Centroid::<Point>::centroid_of_point(&Point::from([1., 1.]), "lonely", namer);
        assert_eq!(
            c.recalculate(),
            Err(ClusterError::EmptyCluster(String::from("lonely")))
        );
        let kept = c.retain();
        assert_eq!(kept.coords(), c.coords());
        assert_eq!(kept.name(), "lonely");
    }

    #[test]
    fn examples_as_members() {
        let ref namer = Namer::default();
        let members = vec![Example::from([0., 2.]), Example::from([2., 0.])];
        let c = Centroid::centroid_of(members.clone(), "", namer).unwrap();
        assert_eq!(c.coords(), &[1., 1.]);
        assert_eq!(c.points(), members.as_slice());
    }
}
