use super::*;
use crate::cfg::EPS;
use crate::conversions::rotate;

fn unit_square() -> Polygon {
    Polygon::new([
        Vector::new(0.0, 0.0),
        Vector::new(1.0, 0.0),
        Vector::new(1.0, 1.0),
        Vector::new(0.0, 1.0),
    ])
}

#[test]
fn unit_square_perimeter() {
    assert_eq!(unit_square().perimeter(), 4.0);
    assert_eq!(Polygon::new(Vec::new()).perimeter(), 0.0);
    // single vertex closes onto itself
    assert_eq!(Polygon::new([Vector::new(2.0, 3.0)]).perimeter(), 0.0);
}

#[test]
fn triangle_perimeter_includes_closing_edge() {
    let t = Polygon::new([
        Vector::new(0.0, 0.0),
        Vector::new(3.0, 0.0),
        Vector::new(0.0, 4.0),
    ]);
    assert!((t.perimeter() - 12.0).abs() < EPS);
    assert_eq!(t.edges().count(), 3);
}

#[test]
fn translate_builds_new_polygon_with_style() {
    let sq = unit_square().with_color(colors::RED).with_fill(colors::GRAY).with_alpha(0.7);
    let moved = sq.translate(Vector::new(2.0, -1.0));
    assert_eq!(moved.vertices.len(), 4);
    assert_eq!(moved.vertices[2], Vector::new(3.0, 0.0));
    assert_eq!(moved.color, colors::RED);
    assert_eq!(moved.fill.as_deref(), Some(colors::GRAY));
    assert_eq!(moved.alpha, 0.7);
    // source polygon untouched
    assert_eq!(sq.vertices[2], Vector::new(1.0, 1.0));
    // scalar broadcast
    let up = sq.translate(0.5);
    assert_eq!(up.vertices[0], Vector::new(0.5, 0.5));
    assert_eq!(up.perimeter(), sq.perimeter());
}

#[test]
fn arrow_and_segment_vertex_order() {
    let tip = Vector::new(2.0, 1.0);
    let a = Arrow::new(tip);
    assert_eq!(a.vertices(), vec![tip, ORIGIN]);
    assert_eq!(a.displacement(), tip);
    let tail = Vector::new(1.0, 1.0);
    assert_eq!(Arrow::from_tail(tip, tail).displacement(), Vector::new(1.0, 0.0));

    let s = Segment::new(Vector::new(3.0, 4.0)).with_color(colors::BLACK);
    assert_eq!(s.vertices(), vec![ORIGIN, Vector::new(3.0, 4.0)]);
    assert_eq!(s.length(), 5.0);
    assert_eq!(s.color(), colors::BLACK);
}

#[test]
fn collect_vertices_in_shape_order() {
    let pts = Points::new([Vector::new(1.0, 1.0), Vector::new(2.0, 2.0)]).with_depthshade(true);
    let seg = Segment::from_start(Vector::new(5.0, 5.0), Vector::new(4.0, 4.0));
    let sq = unit_square();
    let all = collect_vertices(&[&pts, &seg, &sq]);
    assert_eq!(all.len(), 2 + 2 + 4);
    assert_eq!(all[0], Vector::new(1.0, 1.0));
    assert_eq!(all[2], Vector::new(4.0, 4.0));
    assert_eq!(all[3], Vector::new(5.0, 5.0));
    assert_eq!(all[7], Vector::new(0.0, 1.0));
    assert!(pts.depthshade);
    assert_eq!(pts.color(), colors::BLUE);
}

#[test]
fn rotated_square_keeps_perimeter() {
    let sq = unit_square();
    let turned = sq.with_vertices(rotate(0.3, &sq.vertices));
    assert!((turned.perimeter() - 4.0).abs() < EPS);
}
