//! Core data structures and algorithms for annular ground-structure meshes.

use petgraph::graph::{NodeIndex, UnGraph};

use crate::errors::MeshConfigError;
use crate::geometry::{is_collinear_redundant, Point, Segment};
use crate::region::Annulus;

/// Radii at or below this magnitude collapse onto a single centre node.
const CENTER_EPSILON: f64 = 1.0e-8;

/// Radial spans smaller than this fraction of the outer radius make the
/// region buffer comparable to segment lengths; generation still proceeds but
/// a warning is logged.
const DEGENERATE_SPAN_RATIO: f64 = 1.0e-3;

/// Validated sampling parameters for a flower mesh.
///
/// Construction rejects invalid values up front, so a `MeshParameters` in
/// hand always describes a generatable configuration.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct MeshParameters {
    /// Radius of the inner circle.
    inner_radius: f64,
    /// Radius of the outer circle.
    outer_radius: f64,
    /// Number of equally spaced angles sampled on each ring.
    angular_divisions: usize,
    /// Number of radius values sampled between the circles, inclusive.
    radial_divisions: usize,
}

impl MeshParameters {
    /// Validate and store the sampling parameters.
    ///
    /// # Errors
    ///
    /// Returns [`MeshConfigError`] when either radius is non-finite, the
    /// inner radius is negative, the outer radius does not exceed the inner
    /// radius, or either division count is zero.
    ///
    /// # Examples
    /// ```
    /// use flowermesh::MeshParameters;
    ///
    /// let parameters = MeshParameters::new(0.0, 100.0, 12, 5).expect("valid parameters");
    /// assert_eq!(parameters.angular_divisions(), 12);
    /// ```
    pub fn new(
        inner_radius: f64,
        outer_radius: f64,
        angular_divisions: usize,
        radial_divisions: usize,
    ) -> Result<Self, MeshConfigError> {
        if !inner_radius.is_finite() || !outer_radius.is_finite() {
            return Err(MeshConfigError::NonFiniteRadius {
                inner_radius,
                outer_radius,
            });
        }
        if inner_radius < 0.0 {
            return Err(MeshConfigError::NegativeInnerRadius { inner_radius });
        }
        if outer_radius <= inner_radius {
            return Err(MeshConfigError::InvertedRadii {
                inner_radius,
                outer_radius,
            });
        }
        if angular_divisions < 1 {
            return Err(MeshConfigError::ZeroAngularDivisions);
        }
        if radial_divisions < 1 {
            return Err(MeshConfigError::ZeroRadialDivisions);
        }
        Ok(Self {
            inner_radius,
            outer_radius,
            angular_divisions,
            radial_divisions,
        })
    }

    /// Radius of the inner circle.
    #[must_use]
    pub fn inner_radius(&self) -> f64 {
        self.inner_radius
    }

    /// Radius of the outer circle.
    #[must_use]
    pub fn outer_radius(&self) -> f64 {
        self.outer_radius
    }

    /// Number of equally spaced angles sampled on each ring.
    #[must_use]
    pub fn angular_divisions(&self) -> usize {
        self.angular_divisions
    }

    /// Number of radius values sampled between the circles, inclusive.
    #[must_use]
    pub fn radial_divisions(&self) -> usize {
        self.radial_divisions
    }

    /// Generate the candidate node positions on the polar grid.
    ///
    /// Rings are visited in ascending radius and each ring emits its points
    /// in ascending angle, so indices are ring-major and angle-minor. A ring
    /// at radius zero collapses to a single centre point; this happens only
    /// when the inner radius is zero, and only for the first ring.
    ///
    /// The emission order is part of the contract: point indices feed the
    /// pair-enumeration order in [`generate`].
    #[must_use]
    pub fn sample_points(&self) -> Vec<Point> {
        let mut points = Vec::new();
        for ring_radius in linspace(self.inner_radius, self.outer_radius, self.radial_divisions) {
            if ring_radius.abs() <= CENTER_EPSILON {
                points.push(Point::new(0.0, 0.0));
                continue;
            }
            for step in 0..self.angular_divisions {
                let angle = 2.0 * std::f64::consts::PI * step as f64 / self.angular_divisions as f64;
                points.push(Point::new(
                    ring_radius * angle.cos(),
                    ring_radius * angle.sin(),
                ));
            }
        }
        points
    }
}

/// Evenly spaced values from `start` to `stop`, inclusive of both ends.
///
/// A single requested value collapses to `start`.
fn linspace(start: f64, stop: f64, count: usize) -> Vec<f64> {
    if count == 1 {
        return vec![start];
    }
    let step = (stop - start) / (count - 1) as f64;
    (0..count).map(|idx| start + step * idx as f64).collect()
}

/// Complete output of mesh generation: the sampled points plus the accepted
/// elements connecting them.
///
/// Backed by an undirected graph whose node insertion order matches point
/// sampling order and whose edge insertion order matches element acceptance
/// order. Both collections are immutable once generation finishes.
#[derive(Clone, Debug, Default)]
pub struct Mesh {
    /// Underlying graph storage for points and elements.
    graph: UnGraph<Point, ()>,
}

impl Mesh {
    /// Return the number of points in the mesh.
    #[must_use]
    pub fn point_count(&self) -> usize {
        self.graph.node_count()
    }

    /// Return the number of accepted elements in the mesh.
    #[must_use]
    pub fn element_count(&self) -> usize {
        self.graph.edge_count()
    }

    /// Position of the point with the given generation-order index.
    #[must_use]
    pub fn position(&self, index: usize) -> Option<Point> {
        self.graph.node_weight(NodeIndex::new(index)).copied()
    }

    /// All point positions in generation order.
    #[must_use]
    pub fn points(&self) -> Vec<Point> {
        self.graph.node_weights().copied().collect()
    }

    /// All elements as `(i, j)` point-index pairs, `i < j`, in acceptance
    /// order.
    #[must_use]
    pub fn elements(&self) -> Vec<(usize, usize)> {
        self.graph
            .edge_indices()
            .map(|edge| {
                let (start, end) = self.graph.edge_endpoints(edge).expect("valid edge");
                (start.index(), end.index())
            })
            .collect()
    }
}

/// Generate the flower mesh for the supplied parameters.
///
/// All unordered point-index pairs are enumerated in ascending lexicographic
/// order. Each candidate is first tested against every already-accepted
/// element, in acceptance order, and rejected as soon as one is collinear
/// redundant with it; survivors are accepted iff the buffered annular region
/// contains the full segment. The output is a pure function of the
/// parameters.
///
/// Note that acceptance is order sensitive: a long spoke enumerated after a
/// shorter collinear spoke it subsumes is rejected, even though keeping the
/// longer one might look preferable. This mirrors the enumeration order of
/// the reference implementation and is deliberately not normalized away.
///
/// # Examples
/// ```
/// use flowermesh::{generate, MeshParameters};
///
/// let parameters = MeshParameters::new(0.0, 10.0, 3, 2).expect("valid parameters");
/// let mesh = generate(&parameters);
/// assert_eq!(mesh.point_count(), 4);
/// assert_eq!(mesh.element_count(), 6);
/// ```
#[must_use]
pub fn generate(parameters: &MeshParameters) -> Mesh {
    let span = parameters.outer_radius() - parameters.inner_radius();
    if span < DEGENERATE_SPAN_RATIO * parameters.outer_radius() {
        log::warn!(
            "radial span {span} is degenerate relative to outer radius {}; \
             the element set may be empty",
            parameters.outer_radius()
        );
    }

    let region = Annulus::new(parameters.inner_radius(), parameters.outer_radius());
    let points = parameters.sample_points();

    let mut graph = UnGraph::with_capacity(points.len(), 0);
    for &position in &points {
        graph.add_node(position);
    }

    log::info!("generating elements...");
    let mut accepted: Vec<Segment> = Vec::new();
    for i in 0..points.len() {
        for j in (i + 1)..points.len() {
            let candidate = Segment::new(points[i], points[j]);
            let redundant = accepted
                .iter()
                .any(|&existing| is_collinear_redundant(candidate, existing));
            if redundant {
                continue;
            }
            if region.contains_segment(points[i], points[j]) {
                graph.add_edge(NodeIndex::new(i), NodeIndex::new(j), ());
                accepted.push(candidate);
            }
        }
    }
    log::info!(
        "generated {} elements and {} nodes",
        accepted.len(),
        points.len()
    );

    Mesh { graph }
}
