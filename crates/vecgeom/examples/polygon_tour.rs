//! Walk through the basic operations on a small polygon.
//!
//! Prints a rotated and translated square, its perimeter, and the polar form of
//! each vertex. Run with `cargo run -p vecgeom --example polygon_tour`.

use vecgeom::prelude::*;

fn main() {
    let square = Polygon::new([
        Vector::new(1.0, 1.0),
        Vector::new(-1.0, 1.0),
        Vector::new(-1.0, -1.0),
        Vector::new(1.0, -1.0),
    ])
    .with_color(colors::PURPLE);

    let turned = square.with_vertices(rotate(degrees_to_radians(45.0), &square.vertices));
    let moved = turned.translate(Vector::new(2.0, 0.0));

    println!("perimeter: {:.6}", moved.perimeter());
    for v in moved.vertices() {
        let p = v.to_polar();
        println!(
            "{v}  ->  {p}  ({:.1}°)",
            radians_to_degrees(p.angle)
        );
    }

    let arrow = Arrow::new(Vector::new(3.0, 4.0)).with_color(colors::RED);
    println!("arrow length: {}", arrow.displacement().length());
    println!("all vertices: {}", collect_vertices(&[&moved, &arrow]).len());
}
