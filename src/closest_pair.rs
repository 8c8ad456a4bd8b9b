//! Closest pair of points by plane sweep.
//!
//! Points are processed in ascending `(x, y)` order. A frontier of recent
//! points, ordered by `y`, holds every point whose x-distance to the sweep
//! position is still within the best distance found so far; only those can
//! form a closer pair with the incoming point.

use crate::error::{Error, Result};
use crate::frontier::Frontier;
use crate::point::Point;

/// Returns a pair of input points at minimum squared Euclidean distance.
///
/// The pair is two distinct input positions (coincident points form a
/// valid pair at distance zero), normalized so the first point is the
/// lexicographically smaller by `(x, y)`. When several pairs tie for the
/// minimum, whichever the sweep settles on is returned.
///
/// # Errors
/// Returns [`Error::TooFewPoints`] when `points` has fewer than two
/// points.
///
/// # Examples
/// ```
/// use kdsweep::{closest_pair, Point};
///
/// let points = vec![
///     Point::new(10.0, 0.0),
///     Point::new(1.0, 1.0),
///     Point::new(0.0, 0.0),
/// ];
/// let (p, q) = closest_pair(&points)?;
/// assert_eq!((p, q), (Point::new(0.0, 0.0), Point::new(1.0, 1.0)));
/// # Ok::<(), kdsweep::Error>(())
/// ```
pub fn closest_pair(points: &[Point]) -> Result<(Point, Point)> {
    if points.len() < 2 {
        return Err(Error::TooFewPoints(points.len()));
    }

    // Sorted by (x, y), the point list acts as the event queue.
    let mut sorted = points.to_vec();
    sorted.sort_by(|a, b| a.cmp_xy(*b));

    let mut best = (sorted[0], sorted[1]);
    let mut best_dsq = sorted[0].dist_sq(sorted[1]);

    let mut frontier = Frontier::by_y();
    frontier.insert(sorted[0]);
    frontier.insert(sorted[1]);

    for &p in &sorted[2..] {
        if best_dsq <= 0.0 {
            // A coincident pair is the global minimum; stop sweeping.
            break;
        }

        // Evict frontier points whose x-distance alone already exceeds
        // the best. Squared comparison, no square root needed.
        let far: Vec<Point> = frontier
            .iter()
            .filter(|f| (f.x - p.x) * (f.x - p.x) > best_dsq)
            .copied()
            .collect();
        for f in far {
            frontier.remove(f)?;
        }

        // Only points within the best distance of p in y can improve.
        // The band is a superset once best_dsq shrinks mid-scan, so the
        // strict y condition is rechecked per point.
        let d = best_dsq.sqrt();
        for &f in frontier.band(p.y - d, p.y + d) {
            if (p.y - f.y) * (p.y - f.y) < best_dsq {
                let dsq = p.dist_sq(f);
                if dsq < best_dsq {
                    best = (f, p);
                    best_dsq = dsq;
                }
            }
        }

        frontier.insert(p);
    }

    let (a, b) = best;
    Ok(if b < a { (b, a) } else { (a, b) })
}
