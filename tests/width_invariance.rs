// tests/width_invariance.rs
// The same operations at every requested width must agree with the scalar
// engine. Integer lanes must agree exactly, float lanes within rounding.

mod common;

use approx::assert_relative_eq;
use simd_tuples::prelude::*;

fn assert_lanes_close<const N: usize>(got: [f32; N], want: [f32; N]) {
    for (lane, (g, w)) in got.into_iter().zip(want).enumerate() {
        assert!(
            (g - w).abs() <= 1e-5 * w.abs().max(1.0),
            "lane {lane}: {g} vs {w}"
        );
    }
}

macro_rules! float_parity {
    ($name:ident, $alias:ident, $n:literal; $($w:ty),*) => {
        #[test]
        fn $name() {
            let a = common::lcg_values::<$n>(3, 8.0);
            let b = common::lcg_values::<$n>(5, 8.0);
            let c = common::lcg_values::<$n>(9, 8.0);

            let s = ($alias::<f32, Scalar>::from_array(a), $alias::<f32, Scalar>::from_array(b));
            let sc = $alias::<f32, Scalar>::from_array(c);

            $({
                let (x, y) = ($alias::<f32, $w>::from_array(a), $alias::<f32, $w>::from_array(b));
                let z = $alias::<f32, $w>::from_array(c);
                assert_eq!((x + y).to_array(), (s.0 + s.1).to_array());
                assert_eq!((x * y - z).to_array(), (s.0 * s.1 - sc).to_array());
                assert_lanes_close(x.mad(y, z).to_array(), s.0.mad(s.1, sc).to_array());
                assert_lanes_close((x / y).to_array(), (s.0 / s.1).to_array());
                assert_lanes_close(x.abs().sqrt().to_array(), s.0.abs().sqrt().to_array());
                assert_lanes_close(x.abs().rsqrt().to_array(), s.0.abs().rsqrt().to_array());
                assert_eq!(x.min(y).to_array(), s.0.min(s.1).to_array());
                assert_eq!(x.max(y).to_array(), s.0.max(s.1).to_array());
                assert_eq!(x.floor().to_array(), s.0.floor().to_array());
                assert_eq!(x.round().to_array(), s.0.round().to_array());
                assert_eq!(x.hmax(), s.0.hmax().value());
                assert_eq!(x.hmin(), s.0.hmin().value());
                assert_relative_eq!(x.hadd().value(), s.0.hadd().value(), epsilon = 1e-4);
                assert_eq!(x.less_than_mask(&y).bits(), s.0.less_than_mask(&s.1).bits());
                assert_eq!(x.not_equal_mask(&x).bits(), 0);
                assert_eq!(x.hmax_index().1, s.0.hmax_index().1);
                assert_eq!(x.store(), s.0.store());
            })*
        }
    };
}

float_parity!(test_float_parity_2, Simd2, 2; B16, B32, B64);
float_parity!(test_float_parity_3, Simd3, 3; B16, B32, B64);
float_parity!(test_float_parity_4, Simd4, 4; B16, B32, B64);
float_parity!(test_float_parity_6, Simd6, 6; B16, B32, B64);
float_parity!(test_float_parity_8, Simd8, 8; B16, B32, B64);
float_parity!(test_float_parity_9, Simd9, 9; B16, B32, B64);
float_parity!(test_float_parity_12, Simd12, 12; B16, B32, B64);
float_parity!(test_float_parity_16, Simd16, 16; B16, B32, B64);

#[test]
fn test_integer_parity_is_exact() {
    let a: [i32; 12] = std::array::from_fn(|i| (i as i32 - 6) * 1_000_003);
    let b: [i32; 12] = std::array::from_fn(|i| i32::MAX - i as i32);
    let s = (Simd12::<i32, Scalar>::from_array(a), Simd12::<i32, Scalar>::from_array(b));
    let v = (Simd12::<i32>::from_array(a), Simd12::<i32>::from_array(b));
    assert_eq!((v.0 * v.1 + v.0).to_array(), (s.0 * s.1 + s.0).to_array());
    assert_eq!((v.0 - v.1).abs().to_array(), (s.0 - s.1).abs().to_array());
    assert_eq!(v.0.greater_than_mask(&v.1).bits(), s.0.greater_than_mask(&s.1).bits());
    assert_eq!(v.0.hadd(), s.0.hadd().value());

    let u = Simd8::<u32>::splat(u32::MAX);
    assert_eq!((u + 2).hmax(), 1);
}

#[test]
fn test_wide_integers_resolve_to_scalar() {
    let a = Simd4::<i64>::new(i64::MAX, 1, -1, 0);
    let s = Simd4::<i64, Scalar>::new(i64::MAX, 1, -1, 0);
    assert_eq!(a + 1, s + 1);
    assert_eq!(std::mem::size_of::<Simd4<i64>>(), 4 * 8);
    assert_eq!((a + 1).get_value::<0>(), i64::MIN);
}
