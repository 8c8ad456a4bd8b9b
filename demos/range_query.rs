//! Query all points inside a rectangle.
use kdsweep::prelude::*;

fn main() {
    let points: Vec<Point> = [
        (1.0, 3.0),
        (10.0, 20.0),
        (5.0, 19.0),
        (0.0, 11.0),
        (15.0, 22.0),
        (30.0, 5.0),
    ]
    .map(|(x, y)| Point::new(x, y))
    .to_vec();

    let tree = KdTree::new(points);
    let bottom_left = Point::new(0.0, 0.0);
    let top_right = Point::new(10.0, 20.0);

    for p in tree.points_in_range(bottom_left, top_right) {
        println!("in box {bottom_left}..{top_right}: {p}");
    }
}
