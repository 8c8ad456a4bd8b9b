//! Find the nearest point to a query, and dump the tree structure a
//! renderer would walk. Labels are assigned from enumeration order.
use kdsweep::prelude::*;

fn main() -> Result<(), Error> {
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

    for (i, p) in points.iter().enumerate() {
        println!("P{i}: {p}");
    }

    let tree = KdTree::new(points);
    println!("{tree}");

    let query = Point::new(6.0, 15.0);
    let nearest = tree.nearest(query)?;
    println!("nearest to {query}: {nearest}");
    Ok(())
}
