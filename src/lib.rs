//! # kdsweep - Closest-Pair Sweep and 2D k-d Tree
//!
//! A Rust library providing two classic 2D point-set queries: the closest
//! pair of points via a plane sweep, and a k-d tree for orthogonal range
//! and nearest-neighbor queries.
//!
//! ## Features
//!
//! - **Closest Pair**: sweep-line algorithm with an ordered frontier of
//!   active points, early exit on coincident points
//! - **Range Queries**: boundary-inclusive rectangle queries over a
//!   balanced, build-once k-d tree
//! - **Nearest Neighbor**: leaf descent plus a verification range query
//! - **Inspectable Structure**: public node enum for renderers and other
//!   read-only tree walkers
//!
//! ## Quick Start
//!
//! ```rust
//! use kdsweep::prelude::*;
//!
//! let points = vec![
//!     Point::new(1.0, 3.0),
//!     Point::new(10.0, 20.0),
//!     Point::new(5.0, 19.0),
//!     Point::new(0.0, 11.0),
//!     Point::new(15.0, 22.0),
//!     Point::new(30.0, 5.0),
//! ];
//!
//! // Closest pair, normalized ascending by (x, y)
//! let (p, q) = closest_pair(&points)?;
//! println!("closest pair: {p} and {q}");
//!
//! // Build the k-d tree once, query it many times
//! let tree = KdTree::new(points);
//! let in_box = tree.points_in_range(Point::new(0.0, 0.0), Point::new(10.0, 20.0));
//! assert_eq!(in_box.len(), 4);
//!
//! let nearest = tree.nearest(Point::new(6.0, 15.0))?;
//! assert_eq!(nearest, Point::new(5.0, 19.0));
//! # Ok::<(), kdsweep::Error>(())
//! ```
//!
//! ## How It Works
//!
//! The sweep processes points in ascending `(x, y)` order, keeping a
//! frontier (ordered by `y`) of the points that could still beat the best
//! distance found so far: anything farther than that distance in `x`
//! alone is evicted, and only the frontier band within that distance in
//! `y` is scanned.
//!
//! The k-d tree splits on x and y alternately by depth at the lower
//! median, so the tree is balanced and a query descends only into
//! subtrees whose region can intersect it. Nearest-neighbor queries reuse
//! the range query to verify a candidate from a single leaf descent.

pub mod closest_pair;
pub mod error;
pub mod frontier;
pub mod kd_tree;
pub mod point;
pub mod prelude;


pub use closest_pair::closest_pair;
pub use error::{Error, Result};
pub use frontier::Frontier;
pub use kd_tree::{Axis, KdTree, DEFAULT_MAX_DEPTH};
pub use point::Point;
