//! Angle units and Cartesian ↔ polar conversions.
//!
//! Angles are radians unless a name says otherwise and are never wrapped into
//! `[0, 2π)`. `cartesian_to_polar` delegates to `Vector::to_polar`, so both
//! produce identical bits.

use std::f64::consts::PI;

use crate::vector::{PolarVector, Vector};

#[inline]
pub fn degrees_to_radians(deg: f64) -> f64 {
    deg * PI / 180.0
}

#[inline]
pub fn radians_to_degrees(rad: f64) -> f64 {
    rad * 180.0 / PI
}

/// `(length, angle)` → `Vector(length·cos, length·sin)`.
#[inline]
pub fn polar_to_cartesian(length: f64, angle: f64) -> Vector {
    PolarVector::new(length, angle).to_vector()
}

/// `v` → `(length(v), atan2(v.y, v.x))`.
#[inline]
pub fn cartesian_to_polar(v: Vector) -> (f64, f64) {
    v.to_polar().into()
}

/// Rotate every vector about the origin by `angle`.
///
/// Goes through the polar form of each input; output order and length match
/// the input and the inputs are left as they are.
pub fn rotate(angle: f64, vectors: &[Vector]) -> Vec<Vector> {
    vectors
        .iter()
        .map(|v| v.to_polar().rotated(angle).to_vector())
        .collect()
}

/// Euclidean distance between two points (`length(a - b)`).
#[inline]
pub fn distance(a: Vector, b: Vector) -> f64 {
    (a - b).length()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cfg::EPS;
    use rand::{rngs::StdRng, Rng, SeedableRng};
    use std::f64::consts::FRAC_PI_2;

    #[test]
    fn rotate_quarter_turn() {
        let out = rotate(FRAC_PI_2, &[Vector::new(1.0, 0.0)]);
        assert_eq!(out.len(), 1);
        assert!(out[0].approx_eq(Vector::new(0.0, 1.0), EPS));
    }

    #[test]
    fn rotate_preserves_order_and_inputs() {
        let input = vec![
            Vector::new(1.0, 0.0),
            Vector::new(0.0, 2.0),
            Vector::new(-3.0, 0.0),
            Vector::new(0.0, 0.0),
        ];
        let copy = input.clone();
        let out = rotate(PI, &input);
        assert_eq!(input, copy);
        assert_eq!(out.len(), input.len());
        assert!(out[0].approx_eq(Vector::new(-1.0, 0.0), EPS));
        assert!(out[1].approx_eq(Vector::new(0.0, -2.0), EPS));
        assert!(out[2].approx_eq(Vector::new(3.0, 0.0), EPS));
        assert!(out[3].approx_eq(Vector::new(0.0, 0.0), EPS));
        assert!(rotate(1.0, &[]).is_empty());
    }

    #[test]
    fn free_and_method_polar_agree_bitwise() {
        let mut rng = StdRng::seed_from_u64(7);
        for _ in 0..64 {
            let v = Vector::new(rng.gen_range(-5.0..5.0), rng.gen_range(-5.0..5.0));
            let (len, ang) = cartesian_to_polar(v);
            let p = v.to_polar();
            assert_eq!(len.to_bits(), p.length.to_bits());
            assert_eq!(ang.to_bits(), p.angle.to_bits());
        }
    }

    #[test]
    fn polar_round_trip_seeded() {
        let mut rng = StdRng::seed_from_u64(42);
        for _ in 0..256 {
            let v = Vector::new(rng.gen_range(-10.0..10.0), rng.gen_range(-10.0..10.0));
            let (len, ang) = cartesian_to_polar(v);
            assert!(polar_to_cartesian(len, ang).approx_eq(v, EPS));
        }
    }

    #[test]
    fn degrees_radians_inverse() {
        assert!((degrees_to_radians(180.0) - PI).abs() < EPS);
        assert!((radians_to_degrees(FRAC_PI_2) - 90.0).abs() < EPS);
        let mut rng = StdRng::seed_from_u64(3);
        for _ in 0..256 {
            let d: f64 = rng.gen_range(-1e4..1e4);
            assert!((radians_to_degrees(degrees_to_radians(d)) - d).abs() < EPS);
        }
    }

    #[test]
    fn distance_is_symmetric() {
        let a = Vector::new(1.0, 1.0);
        let b = Vector::new(4.0, 5.0);
        assert_eq!(distance(a, b), 5.0);
        assert_eq!(distance(b, a), 5.0);
        assert_eq!(distance(a, a), 0.0);
    }
}
