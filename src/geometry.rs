//! Fundamental geometric types and predicates for mesh generation.

use nalgebra::Vector2;

/// Absolute buffer applied to the longer of two segments when testing for
/// collinear redundancy. Only needs to absorb floating point noise, so it is
/// much tighter than the region tolerance.
const OVERLAP_TOLERANCE: f64 = 1.0e-6;

/// Position in the plane measured in the model's length unit.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Point {
    /// Distance along the global X axis.
    pub x: f64,
    /// Distance along the global Y axis.
    pub y: f64,
}

impl Point {
    /// Create a [`Point`] with explicit coordinates.
    #[must_use]
    pub const fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }

    /// Convert the point into an algebraic vector.
    #[must_use]
    pub fn to_vector(self) -> Vector2<f64> {
        Vector2::new(self.x, self.y)
    }

    /// Distance of the point from the origin.
    #[must_use]
    pub fn radius(self) -> f64 {
        self.to_vector().norm()
    }
}

impl From<Vector2<f64>> for Point {
    fn from(value: Vector2<f64>) -> Self {
        Self::new(value.x, value.y)
    }
}

impl From<Point> for Vector2<f64> {
    fn from(value: Point) -> Self {
        value.to_vector()
    }
}

/// Convenience helper for creating [`Point`] instances.
///
/// # Examples
/// ```
/// use flowermesh::point;
///
/// let origin = point(0.0, 0.0);
/// assert_eq!(origin.x, 0.0);
/// ```
#[must_use]
pub const fn point(x: f64, y: f64) -> Point {
    Point::new(x, y)
}

/// Straight line segment between two points.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Segment {
    /// First endpoint.
    pub start: Point,
    /// Second endpoint.
    pub end: Point,
}

impl Segment {
    /// Create a [`Segment`] from its endpoints.
    #[must_use]
    pub const fn new(start: Point, end: Point) -> Self {
        Self { start, end }
    }

    /// Euclidean length of the segment.
    #[must_use]
    pub fn length(&self) -> f64 {
        (self.end.to_vector() - self.start.to_vector()).norm()
    }
}

/// Exact Euclidean distance from `target` to the closed segment.
#[must_use]
pub fn point_segment_distance(target: Point, segment: &Segment) -> f64 {
    let direction = segment.end.to_vector() - segment.start.to_vector();
    let offset = target.to_vector() - segment.start.to_vector();
    let length_squared = direction.norm_squared();
    if length_squared == 0.0 {
        return offset.norm();
    }
    let parameter = (offset.dot(&direction) / length_squared).clamp(0.0, 1.0);
    (offset - direction * parameter).norm()
}

/// Decide whether one segment is collinear with, and geometrically subsumed
/// by, the other.
///
/// The longer segment is buffered outward by a fixed `1e-6` tolerance and the
/// predicate holds when the shorter segment lies entirely inside that buffer.
/// Because distance to a segment is convex, checking the shorter segment's two
/// endpoints is exact. When the lengths tie, `second` is treated as the longer
/// segment, so two equal-length segments sharing only an endpoint are never
/// redundant with each other.
///
/// The result depends only on the two geometries, not on which segment was
/// accepted first.
///
/// # Examples
/// ```
/// use flowermesh::{is_collinear_redundant, point, Segment};
///
/// let spoke = Segment::new(point(0.0, 0.0), point(5.0, 0.0));
/// let diameter = Segment::new(point(0.0, 0.0), point(10.0, 0.0));
/// assert!(is_collinear_redundant(diameter, spoke));
/// ```
#[must_use]
pub fn is_collinear_redundant(first: Segment, second: Segment) -> bool {
    let (long, short) = if first.length() > second.length() {
        (first, second)
    } else {
        (second, first)
    };
    point_segment_distance(short.start, &long) <= OVERLAP_TOLERANCE
        && point_segment_distance(short.end, &long) <= OVERLAP_TOLERANCE
}

#[cfg(test)]
mod tests {
    use approx::assert_relative_eq;

    use super::*;

    #[test]
    fn point_to_vector_roundtrip() {
        let original = Point::new(1.0, -2.0);
        let vector: Vector2<f64> = original.into();
        assert_eq!(vector, Vector2::new(1.0, -2.0));
        assert_eq!(Point::from(vector), original);
    }

    #[test]
    fn segment_length_matches_euclidean_norm() {
        let segment = Segment::new(point(0.0, 0.0), point(3.0, 4.0));
        assert_relative_eq!(segment.length(), 5.0);
    }

    #[test]
    fn distance_to_interior_projection() {
        let segment = Segment::new(point(0.0, 0.0), point(10.0, 0.0));
        assert_relative_eq!(point_segment_distance(point(5.0, 3.0), &segment), 3.0);
    }

    #[test]
    fn distance_clamps_to_nearest_endpoint() {
        let segment = Segment::new(point(0.0, 0.0), point(10.0, 0.0));
        assert_relative_eq!(point_segment_distance(point(13.0, 4.0), &segment), 5.0);
        assert_relative_eq!(point_segment_distance(point(-3.0, 4.0), &segment), 5.0);
    }

    #[test]
    fn distance_to_degenerate_segment() {
        let segment = Segment::new(point(2.0, 1.0), point(2.0, 1.0));
        assert_relative_eq!(point_segment_distance(point(5.0, 5.0), &segment), 5.0);
    }

    #[test]
    fn longer_collinear_segment_subsumes_shorter() {
        let short = Segment::new(point(0.0, 0.0), point(5.0, 0.0));
        let long = Segment::new(point(0.0, 0.0), point(10.0, 0.0));
        assert!(is_collinear_redundant(long, short));
        assert!(is_collinear_redundant(short, long));
    }

    #[test]
    fn disjoint_collinear_segments_are_not_redundant() {
        let left = Segment::new(point(0.0, 0.0), point(5.0, 0.0));
        let right = Segment::new(point(5.0, 0.0), point(10.0, 0.0));
        assert!(!is_collinear_redundant(left, right));
    }

    #[test]
    fn opposite_spokes_of_equal_length_are_not_redundant() {
        // Ties make the second argument the buffered segment, which does not
        // contain the first.
        let east = Segment::new(point(0.0, 0.0), point(5.0, 0.0));
        let west = Segment::new(point(0.0, 0.0), point(-5.0, 0.0));
        assert!(!is_collinear_redundant(east, west));
        assert!(!is_collinear_redundant(west, east));
    }

    #[test]
    fn near_collinear_noise_is_absorbed_by_tolerance() {
        let long = Segment::new(point(0.0, 0.0), point(10.0, 0.0));
        let noisy = Segment::new(point(1.0, 1.0e-8), point(6.0, -1.0e-8));
        assert!(is_collinear_redundant(long, noisy));
    }

    #[test]
    fn clearly_offset_parallel_segment_is_not_redundant() {
        let long = Segment::new(point(0.0, 0.0), point(10.0, 0.0));
        let offset = Segment::new(point(1.0, 0.5), point(6.0, 0.5));
        assert!(!is_collinear_redundant(long, offset));
    }
}
