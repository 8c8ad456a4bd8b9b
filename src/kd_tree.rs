//! Two-dimensional k-d tree for range and nearest-neighbor queries.
//!
//! The tree is built once from a point set and never mutated afterwards.
//! Internal nodes split on x and y alternately by depth, keeping the lower
//! median on the low side, so the tree stays balanced. Queries take
//! `&self` and keep no state on the nodes; sharing a built tree across
//! threads for concurrent reads is safe.

use std::fmt;

use crate::error::{Error, Result};
use crate::point::Point;

/// Default bound on node depth. Point sets that would split deeper end up
/// in leaf buckets instead.
pub const DEFAULT_MAX_DEPTH: usize = 10;

/// Splitting axis of an internal node. Alternates with depth, `X` at the
/// root.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Axis {
    /// Split on the x coordinate (a vertical divider).
    X,
    /// Split on the y coordinate (a horizontal divider).
    Y,
}

impl Axis {
    fn from_depth(depth: usize) -> Self {
        if depth % 2 == 0 { Self::X } else { Self::Y }
    }

    /// The coordinate of `p` along this axis.
    #[inline]
    pub fn coord(self, p: Point) -> f64 {
        match self {
            Self::X => p.x,
            Self::Y => p.y,
        }
    }
}

/// A 2D k-d tree over a fixed point set.
///
/// The node structure is public so that renderers and other read-only
/// consumers can walk the partition: leaf-ness, splitting axis, split
/// coordinate, children and leaf buckets are all inspectable. The tree
/// offers no insertion or removal after [`KdTree::build`].
///
/// # Examples
/// ```
/// use kdsweep::{KdTree, Point};
///
/// let tree = KdTree::new(vec![
///     Point::new(1.0, 3.0),
///     Point::new(10.0, 20.0),
///     Point::new(5.0, 19.0),
///     Point::new(0.0, 11.0),
/// ]);
/// let hits = tree.points_in_range(Point::new(0.0, 0.0), Point::new(6.0, 19.0));
/// assert_eq!(hits.len(), 3);
/// ```
#[derive(Clone, Debug)]
pub enum KdTree {
    /// A bucket of points at the bottom of the partition.
    Leaf {
        /// Points in the bucket. Empty only when the tree was built from
        /// no points; the depth bound can make it arbitrarily large.
        points: Vec<Point>,
    },
    /// An internal node dividing its region in two.
    Split {
        /// Axis this node splits on.
        axis: Axis,
        /// Split coordinate: the axis value of the last point routed low.
        coord: f64,
        /// Subtree of the low (left or bottom) side.
        low: Box<KdTree>,
        /// Subtree of the high (right or top) side.
        high: Box<KdTree>,
    },
}

impl KdTree {
    /// Builds a tree with the default depth bound of
    /// [`DEFAULT_MAX_DEPTH`].
    pub fn new(points: Vec<Point>) -> Self {
        Self::build(points, DEFAULT_MAX_DEPTH)
    }

    /// Builds a tree from `points`, bounding node depth by `max_depth`.
    ///
    /// Construction sorts and partitions the point set; the input order
    /// is not preserved. Nodes holding fewer than two points, or sitting
    /// at the depth bound, become leaves. Each split sorts along the
    /// depth's axis and sends the lower half (median included) low and
    /// the upper half high, so point counts halve per level.
    pub fn build(points: Vec<Point>, max_depth: usize) -> Self {
        Self::build_node(points, 0, max_depth)
    }

    fn build_node(mut points: Vec<Point>, depth: usize, max_depth: usize) -> Self {
        if points.len() < 2 || depth >= max_depth {
            return Self::Leaf { points };
        }
        let axis = Axis::from_depth(depth);
        points.sort_by(|a, b| axis.coord(*a).total_cmp(&axis.coord(*b)));
        let halfway = points.len() / 2;
        let coord = axis.coord(points[halfway - 1]);
        let high = points.split_off(halfway);
        Self::Split {
            axis,
            coord,
            low: Box::new(Self::build_node(points, depth + 1, max_depth)),
            high: Box::new(Self::build_node(high, depth + 1, max_depth)),
        }
    }

    /// True for leaf nodes.
    pub fn is_leaf(&self) -> bool {
        matches!(self, Self::Leaf { .. })
    }

    /// Number of points stored in the subtree.
    pub fn len(&self) -> usize {
        match self {
            Self::Leaf { points } => points.len(),
            Self::Split { low, high, .. } => low.len() + high.len(),
        }
    }

    /// Returns whether the tree holds no points.
    pub fn is_empty(&self) -> bool {
        // Split nodes always hold points, so only a bare leaf can be
        // empty.
        matches!(self, Self::Leaf { points } if points.is_empty())
    }

    /// All points within or on the boundary of the axis-aligned box
    /// spanned by `bottom_left` and `top_right`.
    ///
    /// Subtrees whose region cannot intersect the box are pruned. A split
    /// coordinate inside the box descends both sides: points equal to the
    /// split value can sit on either side of the partition. The result
    /// carries no order guarantee.
    pub fn points_in_range(&self, bottom_left: Point, top_right: Point) -> Vec<Point> {
        let mut matches = Vec::new();
        self.collect_in_range(bottom_left, top_right, &mut matches);
        matches
    }

    fn collect_in_range(&self, bottom_left: Point, top_right: Point, out: &mut Vec<Point>) {
        match self {
            Self::Leaf { points } => {
                out.extend(points.iter().filter(|p| p.in_box(bottom_left, top_right)));
            }
            Self::Split { axis, coord, low, high } => {
                // The low side holds axis values <= coord, the high side
                // values >= coord; descend wherever the query interval
                // could reach.
                if *coord >= axis.coord(bottom_left) {
                    low.collect_in_range(bottom_left, top_right, out);
                }
                if *coord <= axis.coord(top_right) {
                    high.collect_in_range(bottom_left, top_right, out);
                }
            }
        }
    }

    /// The nearest point in the tree to `query`, by Euclidean distance.
    ///
    /// Descends to the leaf whose region contains `query` for a first
    /// candidate distance `d`, then verifies it with a range query over
    /// the box `query ± (d, d)`, which covers every point that could be
    /// closer. Among equidistant points, any one may be returned.
    ///
    /// # Errors
    /// Returns [`Error::EmptyTree`] when the tree was built from no
    /// points.
    pub fn nearest(&self, query: Point) -> Result<Point> {
        if self.is_empty() {
            return Err(Error::EmptyTree);
        }

        // Candidate-generating descent: follow the side of each split
        // the query falls on. Not guaranteed to end at the true nearest.
        let bucket = self.descend(query);
        let mut radius = f64::INFINITY;
        for &p in bucket {
            radius = radius.min(p.dist(query));
        }

        let corner = Point::new(radius, radius);
        let candidates = self.points_in_range(query - corner, query + corner);

        candidates
            .into_iter()
            .min_by(|a, b| a.dist_sq(query).total_cmp(&b.dist_sq(query)))
            .ok_or(Error::EmptyTree)
    }

    fn descend(&self, query: Point) -> &[Point] {
        match self {
            Self::Leaf { points } => points,
            Self::Split { axis, coord, low, high } => {
                if axis.coord(query) >= *coord {
                    high.descend(query)
                } else {
                    low.descend(query)
                }
            }
        }
    }

    fn fmt_node(&self, f: &mut fmt::Formatter<'_>, depth: usize) -> fmt::Result {
        let indent = "  ".repeat(depth);
        match self {
            Self::Leaf { points } => {
                write!(f, "{indent}Leaf(")?;
                for (i, p) in points.iter().enumerate() {
                    if i > 0 {
                        write!(f, ", ")?;
                    }
                    write!(f, "{p}")?;
                }
                write!(f, ")")
            }
            Self::Split { axis, coord, low, high } => {
                writeln!(f, "{indent}Node({axis:?}, {coord},")?;
                low.fmt_node(f, depth + 1)?;
                writeln!(f)?;
                high.fmt_node(f, depth + 1)?;
                writeln!(f)?;
                write!(f, "{indent})")
            }
        }
    }
}

impl Default for KdTree {
    fn default() -> Self {
        Self::Leaf { points: Vec::new() }
    }
}

/// Indented structure dump: `Node(axis, coord, ...)` for splits,
/// `Leaf(...)` with its points for buckets. Two spaces per level.
impl fmt::Display for KdTree {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.fmt_node(f, 0)
    }
}
