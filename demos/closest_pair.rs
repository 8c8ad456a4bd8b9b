//! Find the closest pair in a small point set.
use kdsweep::prelude::*;

fn main() -> Result<(), Error> {
    let points: Vec<Point> = [
        (45.0, 10.0),
        (20.0, 10.0),
        (55.0, 20.0),
        (35.0, 0.0),
        (0.0, 0.0),
        (10.0, 10.0),
        (30.0, 10.0),
        (35.0, 5.0),
        (10.0, -10.0),
        (20.0, -10.0),
    ]
    .map(|(x, y)| Point::new(x, y))
    .to_vec();

    let (p, q) = closest_pair(&points)?;
    println!("closest pair: {p} and {q}, distance² {}", p.dist_sq(q));
    Ok(())
}
