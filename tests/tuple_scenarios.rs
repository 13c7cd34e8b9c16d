// tests/tuple_scenarios.rs
// End-to-end behavior of the tuple types through the public prelude.

mod common;

use approx::{assert_abs_diff_eq, assert_relative_eq};
use simd_tuples::prelude::*;

#[test]
fn test_add_three_lanes() {
    let a = Simd3::<f32>::new(1.0, 2.0, 3.0);
    let b = Simd3::<f32>::new(4.0, 5.0, 6.0);
    assert_eq!(a + b, Simd3::<f32>::new(5.0, 7.0, 9.0));
}

#[test]
fn test_hadd_four_lanes() {
    assert_eq!(Simd4::<f32>::new(1.0, 2.0, 3.0, 4.0).hadd(), 10.0);
    assert_eq!(Simd4::<f32, Scalar>::new(1.0, 2.0, 3.0, 4.0).hadd(), 10.0);
    assert_eq!(Simd4::<f32, B16>::new(1.0, 2.0, 3.0, 4.0).hadd(), 10.0);
}

#[test]
fn test_reverse_shuffle() {
    let a = Simd4::<f32>::new(1.0, 2.0, 3.0, 4.0);
    assert_eq!(a.shuffle::<3, 2, 1, 0>(), Simd4::<f32>::new(4.0, 3.0, 2.0, 1.0));
    let rev = Shuffle::<4>::reverse();
    assert_eq!(a.shuffle_var(&rev), a.shuffle::<3, 2, 1, 0>());
}

#[test]
fn test_cross_product_is_right_handed() {
    let x = Simd3::<f64>::new(1.0, 0.0, 0.0);
    let y = Simd3::<f64>::new(0.0, 1.0, 0.0);
    let z = Simd3::<f64>::new(0.0, 0.0, 1.0);
    assert_eq!(x.cross3(&y), z);
    assert_eq!(y.cross3(&z), x);
    assert_eq!(z.cross3(&x), y);
    assert_eq!(y.cross3(&x), -z);
}

#[test]
fn test_dot_is_symmetric() {
    let a = Simd3::<f32>::from_array(common::lcg_values(7, 10.0));
    let b = Simd3::<f32>::from_array(common::lcg_values(11, 10.0));
    assert_eq!(a.dot3(&b), b.dot3(&a));
}

/// Normalized lengths stay within a few ulps of 1.
fn unit_tolerance<T: SimdFloat>() -> f64 {
    16.0 * T::EPSILON.to_f64()
}

#[test]
fn test_normalize_is_idempotent() {
    for seed in 1..20 {
        let v = Simd3::<f32>::from_array(common::lcg_values(seed, 100.0));
        if v.length().value() < 1e-3 {
            continue;
        }
        let once = v.normalize();
        let twice = once.normalize();
        assert_abs_diff_eq!(once.length().value() as f64, 1.0, epsilon = unit_tolerance::<f32>());
        for (a, b) in once.to_array().into_iter().zip(twice.to_array()) {
            assert_abs_diff_eq!(a as f64, b as f64, epsilon = unit_tolerance::<f32>());
        }

        let wide = Simd3::<f64>::from_array(v.to_array().map(f64::from)).normalize();
        assert_abs_diff_eq!(wide.length().value(), 1.0, epsilon = unit_tolerance::<f64>());
    }
}

#[test]
fn test_mad_matches_fused_or_separate_rounding() {
    let a = [0.1, 1e8, -3.0, 0.5];
    let b = [10.0, 1e-8, 7.0, 0.5];
    let c = [-1.0, -1.0, 21.0, -0.25];
    let fused = Simd4::<f64>::from_array(a)
        .mad(Simd4::<f64>::from_array(b), Simd4::<f64>::from_array(c))
        .to_array();
    for lane in 0..4 {
        let single = a[lane].mul_add(b[lane], c[lane]);
        let separate = a[lane] * b[lane] + c[lane];
        assert!(
            fused[lane] == single || fused[lane] == separate,
            "lane {lane}: {} is neither {single} nor {separate}",
            fused[lane]
        );
    }
}

#[test]
fn test_mask_consistent_with_scalar_loop() {
    for seed in 0..16 {
        let a = common::lcg_values::<8>(seed, 4.0);
        let b = common::lcg_values::<8>(seed + 100, 4.0);
        let mask = Simd8::<f32>::from_array(a).less_than_mask(&Simd8::<f32>::from_array(b));
        let expected: Vec<bool> = a.iter().zip(&b).map(|(x, y)| x < y).collect();
        assert_eq!(mask.get_all(), expected.iter().all(|&v| v));
        assert_eq!(mask.get_none(), expected.iter().all(|&v| !v));
        assert_eq!(mask.get_any(), expected.iter().any(|&v| v));
        for (lane, &e) in expected.iter().enumerate() {
            assert_eq!(mask.get(lane), e);
        }
    }
}

#[test]
fn test_blend_swap_is_visible_on_both_bindings() {
    let mut a = Simd6::<i32>::new(0, 1, 2, 3, 4, 5);
    let mut b = Simd6::<i32>::new(10, 11, 12, 13, 14, 15);
    Simd6::<i32>::blend_swap::<0b000111>(&mut a, &mut b);
    assert_eq!(a.to_array(), [10, 11, 12, 3, 4, 5]);
    assert_eq!(b.to_array(), [0, 1, 2, 13, 14, 15]);
}

#[test]
fn test_composite_tuples_and_sub_tuples() {
    let mut a = Simd12::<f32>::splat(1.0);
    a += Simd4::<f32>::new(0.0, 1.0, 2.0, 3.0);
    assert_eq!(a.get_value4::<2>(), Simd4::<f32>::new(1.0, 2.0, 3.0, 4.0));
    assert_eq!(a.add4(), Simd4::<f32>::new(3.0, 6.0, 9.0, 12.0));
    assert_eq!(a.hadd(), 30.0);
    let (max, index) = a.hmax_index();
    assert_eq!((max.value(), index), (4.0, 3));
}

#[test]
fn test_base_and_in_base_interplay() {
    let v = Simd3::<f32>::new(2.0, 4.0, 8.0);
    let half = BaseOf::<f32, 3>::new(0.5);
    let first = v.get_value::<0>();
    assert_eq!(v * half, Simd3::<f32>::new(1.0, 2.0, 4.0));
    assert_eq!(v / first, Simd3::<f32>::new(1.0, 2.0, 4.0));
    assert_eq!((first * 3.0).value(), 6.0);
    assert_eq!(Simd3::<f32>::from_base(half).hmin(), 0.5);
}

#[test]
fn test_transcendentals() {
    let angles = Simd4::<f64>::new(0.0, 0.5, 1.0, 2.0);
    let (s, c) = angles.sin_cos();
    let unit = s * s + c * c;
    for lane in unit.to_array() {
        assert_relative_eq!(lane, 1.0, epsilon = 1e-12);
    }
    let e = Simd2::<f32>::new(1.0, 2.0).exp().ln();
    assert_relative_eq!(e.get_value::<1>().value(), 2.0, epsilon = 1e-6);
}
