//! Ordered frontier of active sweep points.

use crate::error::{Error, Result};
use crate::point::Point;

/// An ordered multiset of points, kept sorted by a key projection.
///
/// Insertion keeps the contents sorted; a new point goes after any
/// existing points with an equal key, so equal-key points stay in
/// insertion order. Built for the closest-pair sweep, which keys its
/// frontier by `y`, but the key is the caller's choice.
///
/// Callers that remove points while scanning should iterate a snapshot
/// (`iter().collect()` or [`Frontier::to_vec`]) and remove afterwards; a
/// completed snapshot is unaffected by later mutation.
///
/// # Examples
/// ```
/// use kdsweep::{Frontier, Point};
///
/// let mut frontier = Frontier::by_y();
/// frontier.insert(Point::new(0.0, 2.0));
/// frontier.insert(Point::new(1.0, -1.0));
/// frontier.insert(Point::new(2.0, 0.5));
///
/// let ys: Vec<f64> = frontier.iter().map(|p| p.y).collect();
/// assert_eq!(ys, vec![-1.0, 0.5, 2.0]);
/// ```
#[derive(Clone, Debug)]
pub struct Frontier {
    /// Points in ascending key order.
    items: Vec<Point>,
    /// Key projection the ordering is maintained under.
    key: fn(Point) -> f64,
}

impl Frontier {
    /// Creates an empty frontier ordered by the given key projection.
    pub fn new(key: fn(Point) -> f64) -> Self {
        Self { items: Vec::new(), key }
    }

    /// Creates an empty frontier ordered by `y` coordinate.
    pub fn by_y() -> Self {
        Self::new(|p| p.y)
    }

    /// Number of points currently in the frontier.
    pub fn len(&self) -> usize {
        self.items.len()
    }

    /// Returns whether the frontier is empty.
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Inserts a point, keeping the frontier sorted by key.
    ///
    /// The insertion position is found by binary search and lands after
    /// every existing point whose key compares `<=` the new point's key.
    pub fn insert(&mut self, p: Point) {
        let key = self.key;
        let k = key(p);
        let pos = self.items.partition_point(|&q| key(q) <= k);
        self.items.insert(pos, p);
    }

    /// Removes the first point equal to `p` by value.
    ///
    /// Equality is on coordinates, not on the key, so with coincident
    /// points only one occurrence is removed per call.
    ///
    /// # Errors
    /// Returns [`Error::PointNotFound`] if no point equals `p`.
    pub fn remove(&mut self, p: Point) -> Result<()> {
        match self.items.iter().position(|&q| q == p) {
            Some(pos) => {
                let _ = self.items.remove(pos);
                Ok(())
            }
            None => Err(Error::PointNotFound(p)),
        }
    }

    /// Iterates the points in ascending key order.
    pub fn iter(&self) -> impl Iterator<Item = &Point> {
        self.items.iter()
    }

    /// The contiguous run of points whose key lies in `[lo, hi]`.
    ///
    /// Both bounds are inclusive. The frontier is sorted by key, so the
    /// matching points form a single slice located by binary search.
    pub fn band(&self, lo: f64, hi: f64) -> &[Point] {
        if hi < lo {
            return &[];
        }
        let key = self.key;
        let start = self.items.partition_point(|&q| key(q) < lo);
        let end = self.items.partition_point(|&q| key(q) <= hi);
        &self.items[start..end]
    }

    /// Snapshot of the current contents in ascending key order.
    pub fn to_vec(&self) -> Vec<Point> {
        self.items.clone()
    }
}
