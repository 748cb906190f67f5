//! Property tests for Vec4 algebra
//!
//! Components are drawn from a bounded range so sums and products stay well
//! inside f64 precision.

use proptest::prelude::*;
use vec4d_math::{Vec2, Vec3, Vec4};

fn component() -> impl Strategy<Value = f64> {
    -1.0e3..1.0e3
}

fn vec4() -> impl Strategy<Value = Vec4<f64>> {
    (component(), component(), component(), component())
        .prop_map(|(x, y, z, w)| Vec4::new(x, y, z, w))
}

/// Components spread over almost the whole f64 exponent range
fn wide_component() -> impl Strategy<Value = f64> {
    (-1.0f64..1.0, -300i32..300).prop_map(|(mantissa, exp)| mantissa * 10f64.powi(exp))
}

fn wide_vec4() -> impl Strategy<Value = Vec4<f64>> {
    (wide_component(), wide_component(), wide_component(), wide_component())
        .prop_map(|(x, y, z, w)| Vec4::new(x, y, z, w))
}

fn int_vec4() -> impl Strategy<Value = Vec4<i32>> {
    (-100i32..100, -100i32..100, -100i32..100, -100i32..100)
        .prop_map(|(x, y, z, w)| Vec4::new(x, y, z, w))
}

proptest! {
    #[test]
    fn add_vec_matches_operator(u in vec4(), v in vec4()) {
        let before = u;
        let sum = u + v;
        prop_assert_eq!(u, before);

        let mut mutated = u;
        mutated.add_vec(v);
        prop_assert_eq!(mutated, sum);
        prop_assert_eq!(sum, Vec4::new(u.x + v.x, u.y + v.y, u.z + v.z, u.w + v.w));
    }

    #[test]
    fn mutators_match_operators(u in int_vec4(), v in int_vec4(), s in -50i32..50) {
        let mut a = u;
        a.subtract_vec(v);
        prop_assert_eq!(a, u - v);

        let mut m = u;
        m.multiply_scalar(s);
        prop_assert_eq!(m, u * s);

        let mut c = u;
        c += v;
        c -= s;
        prop_assert_eq!(c, u + v - s);
    }

    #[test]
    fn equality_is_componentwise(u in int_vec4(), v in int_vec4()) {
        prop_assert!(u == u);
        prop_assert_eq!(u == v, v == u);
        prop_assert_eq!(u == v, u.to_array() == v.to_array());
        prop_assert_eq!(u != v, !(u == v));
    }

    #[test]
    fn ordering_needs_every_component(u in int_vec4(), v in int_vec4()) {
        let (a, b) = (u.to_array(), v.to_array());
        prop_assert_eq!(u < v, a.iter().zip(&b).all(|(p, q)| p < q));
        prop_assert_eq!(u <= v, a.iter().zip(&b).all(|(p, q)| p <= q));
        prop_assert_eq!(u > v, a.iter().zip(&b).all(|(p, q)| p > q));
        prop_assert_eq!(u >= v, a.iter().zip(&b).all(|(p, q)| p >= q));
    }

    #[test]
    fn dot_self_is_length_squared(u in vec4()) {
        let len = u.length();
        let tolerance = 1e-9 * (1.0 + u.dot(u));
        prop_assert!((u.dot(u) - len * len).abs() <= tolerance);
    }

    #[test]
    fn normalized_has_unit_length(u in vec4()) {
        prop_assume!(u.length() > 1e-6);
        prop_assert!((u.normalized().length() - 1.0).abs() < 1e-9);
        prop_assert!(u.try_normalized().is_ok());
    }

    #[test]
    fn normalized_has_unit_length_at_any_scale(u in wide_vec4()) {
        prop_assume!(!u.is_null());
        let n = u.try_normalized();
        prop_assert!(n.is_ok());
        let n = n.unwrap();
        prop_assert!((n.length() - 1.0).abs() < 1e-12);
        prop_assert!((u.normalized().length() - 1.0).abs() < 1e-12);
        prop_assert!(u.length().is_finite());
        prop_assert!(u.length() > 0.0);
    }

    #[test]
    fn checked_line_distance_never_nan_for_finite_input(u in vec4(), p in vec4(), d in wide_vec4()) {
        prop_assume!(!d.is_null());
        let result = u.try_distance_to_line(p, d);
        prop_assert!(result.is_ok());
        prop_assert!(!result.unwrap().is_nan());
    }

    #[test]
    fn distance_to_point_is_symmetric(u in vec4(), v in vec4()) {
        prop_assert_eq!(u.distance_to_point(u), 0.0);
        prop_assert!((u.distance_to_point(v) - v.distance_to_point(u)).abs() < 1e-9);
        prop_assert!(u.distance_to_point(v) >= 0.0);
    }

    #[test]
    fn distance_to_line_bounded_by_point_distance(u in vec4(), p in vec4(), d in vec4()) {
        prop_assume!(d.length() > 1e-3);
        let to_line = u.distance_to_line(p, d);
        prop_assert!(to_line >= 0.0);
        prop_assert!(to_line <= u.distance_to_point(p) + 1e-6);
    }

    #[test]
    fn getters_round_trip(x in any::<f32>(), y in any::<f32>(), z in any::<f32>(), w in any::<f32>()) {
        let v = Vec4::new(x, y, z, w);
        prop_assert_eq!(v.x().to_bits(), x.to_bits());
        prop_assert_eq!(v.y().to_bits(), y.to_bits());
        prop_assert_eq!(v.z().to_bits(), z.to_bits());
        prop_assert_eq!(v.w().to_bits(), w.to_bits());
    }

    #[test]
    fn widening_fills_zeros(a in -1000i64..1000, b in -1000i64..1000, c in -1000i64..1000) {
        prop_assert_eq!(Vec4::from(Vec2::new(a, b)), Vec4::new(a, b, 0, 0));
        prop_assert_eq!(Vec4::from(Vec3::new(a, b, c)), Vec4::new(a, b, c, 0));
        prop_assert_eq!(Vec4::from_vec2(Vec2::new(a, b), c, a), Vec4::new(a, b, c, a));
    }
}

#[test]
fn zero_vector_normalization_is_deterministic() {
    let zero = Vec4::<f64>::zero();
    for _ in 0..3 {
        assert!(zero.normalized().to_array().iter().all(|c| c.is_nan()));
        assert!(zero.try_normalized().is_err());
    }
}
