//! Annular region predicate with a construction-time tolerance buffer.

use crate::geometry::{point_segment_distance, Point, Segment};

/// Fraction of the radial span used to buffer the annulus outward. Candidate
/// segments with endpoints exactly on a boundary circle would otherwise be
/// numerically fragile.
const BOUNDARY_TOLERANCE_RATIO: f64 = 1.0e-2;

/// Planar area between two concentric circles, buffered outward once at
/// construction so boundary segments are admitted robustly.
///
/// The buffered region is the disk of radius `r2 + ε` minus the open disk of
/// radius `r1 − ε`, with `ε = 0.01·(r2 − r1)`. When `r1 − ε ≤ 0` the hole
/// vanishes and the region is the full disk.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Annulus {
    /// Outer radius after dilation.
    outer_limit: f64,
    /// Inner hole radius after dilation; non-positive means no hole.
    inner_limit: f64,
}

impl Annulus {
    /// Build the buffered region for the annulus between `inner_radius` and
    /// `outer_radius`.
    #[must_use]
    pub fn new(inner_radius: f64, outer_radius: f64) -> Self {
        let tolerance = BOUNDARY_TOLERANCE_RATIO * (outer_radius - inner_radius).abs();
        Self {
            outer_limit: outer_radius + tolerance,
            inner_limit: inner_radius - tolerance,
        }
    }

    /// Check whether a single point lies inside the buffered region.
    #[must_use]
    pub fn contains_point(&self, target: Point) -> bool {
        let radius = target.radius();
        radius <= self.outer_limit && radius >= self.inner_limit
    }

    /// Check whether the full closed segment between `start` and `end` lies
    /// inside the buffered region.
    ///
    /// The outer disk is convex, so endpoint containment covers the whole
    /// segment; the hole is avoided iff the segment's minimum distance to the
    /// origin stays at or above the buffered inner radius.
    #[must_use]
    pub fn contains_segment(&self, start: Point, end: Point) -> bool {
        if start.radius() > self.outer_limit || end.radius() > self.outer_limit {
            return false;
        }
        if self.inner_limit > 0.0 {
            let segment = Segment::new(start, end);
            if point_segment_distance(Point::new(0.0, 0.0), &segment) < self.inner_limit {
                return false;
            }
        }
        true
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::geometry::point;

    #[test]
    fn zero_inner_radius_yields_full_disk() {
        let region = Annulus::new(0.0, 10.0);
        assert!(region.contains_point(point(0.0, 0.0)));
        assert!(region.contains_segment(point(-10.0, 0.0), point(10.0, 0.0)));
    }

    #[test]
    fn boundary_points_are_admitted_by_the_buffer() {
        let region = Annulus::new(2.0, 10.0);
        assert!(region.contains_point(point(10.0, 0.0)));
        assert!(region.contains_point(point(0.0, 2.0)));
        // 0.08 buffer for this span; just beyond it is outside.
        assert!(region.contains_point(point(10.05, 0.0)));
        assert!(!region.contains_point(point(10.2, 0.0)));
        assert!(!region.contains_point(point(1.5, 0.0)));
    }

    #[test]
    fn segment_crossing_the_hole_is_rejected() {
        let region = Annulus::new(5.0, 10.0);
        assert!(!region.contains_segment(point(-10.0, 0.0), point(10.0, 0.0)));
        // A chord between adjacent inner-ring points dips into the hole.
        assert!(!region.contains_segment(point(5.0, 0.0), point(0.0, 5.0)));
    }

    #[test]
    fn radial_and_outer_chord_segments_are_accepted() {
        let region = Annulus::new(5.0, 10.0);
        assert!(region.contains_segment(point(5.0, 0.0), point(10.0, 0.0)));
        // Chord between adjacent outer-ring points stays clear of the hole.
        assert!(region.contains_segment(point(10.0, 0.0), point(0.0, 10.0)));
    }

    #[test]
    fn segment_reaching_past_the_outer_circle_is_rejected() {
        let region = Annulus::new(0.0, 10.0);
        assert!(!region.contains_segment(point(0.0, 0.0), point(11.0, 0.0)));
    }
}
