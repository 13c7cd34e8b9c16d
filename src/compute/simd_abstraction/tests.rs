//! Engine parity tests: every vector engine must agree lane-for-lane with the
//! scalar definition of each operation.

use super::{FloatEngine, SimdEngine};
use crate::compute::Scalar;
use crate::compute::element::{SimdElement, SimdFloat};

fn sample<T: SimdFloat>(lanes: usize, offset: f64) -> Vec<T> {
    (0..lanes).map(|i| T::from_f64(i as f64 * 1.5 - offset)).collect()
}

fn lanes_of<T: SimdElement, W: SimdEngine<T>>(reg: W::Reg) -> Vec<T> {
    let mut out = vec![T::ZERO; W::LANES];
    W::store(reg, &mut out);
    out
}

/// Runs binary and unary operations through `W` and through plain lane math.
fn check_float_engine<T: SimdFloat, W: FloatEngine<T>>() {
    let lanes = W::LANES;
    let a = sample::<T>(lanes, 3.0);
    let b = sample::<T>(lanes, -0.75);
    let ra = W::load(&a);
    let rb = W::load(&b);

    let binary: [(fn(W::Reg, W::Reg) -> W::Reg, fn(T, T) -> T); 6] = [
        (W::add, T::lane_add),
        (W::sub, T::lane_sub),
        (W::mul, T::lane_mul),
        (W::min, T::lane_min),
        (W::max, T::lane_max),
        (W::div, T::lane_div),
    ];
    for (engine_op, lane_op) in binary {
        let got = lanes_of::<T, W>(engine_op(ra, rb));
        for i in 0..lanes {
            assert_eq!(got[i], lane_op(a[i], b[i]), "lane {i}");
        }
    }

    let neg = lanes_of::<T, W>(W::neg(ra));
    let abs = lanes_of::<T, W>(W::abs(ra));
    let sqrt = lanes_of::<T, W>(W::sqrt(W::abs(ra)));
    for i in 0..lanes {
        assert_eq!(neg[i], a[i].lane_neg());
        assert_eq!(abs[i], a[i].lane_abs());
        assert_eq!(sqrt[i], a[i].lane_abs().lane_sqrt());
    }

    let fused = lanes_of::<T, W>(W::mul_add(ra, rb, ra));
    for i in 0..lanes {
        let expected = a[i].lane_mul(b[i]).lane_add(a[i]).to_f64();
        assert!((fused[i].to_f64() - expected).abs() <= 1e-5 * expected.abs().max(1.0));
    }

    let floor = lanes_of::<T, W>(W::floor(ra));
    let round = lanes_of::<T, W>(W::round(ra));
    for i in 0..lanes {
        assert_eq!(floor[i], a[i].lane_floor());
        assert_eq!(round[i], a[i].lane_round());
    }
}

/// Comparison masks, bit conversion, selection and reductions.
fn check_mask_engine<T: SimdFloat, W: FloatEngine<T>>() {
    let lanes = W::LANES;
    let a = sample::<T>(lanes, 3.0);
    let b: Vec<T> = a.iter().rev().copied().collect();
    let ra = W::load(&a);
    let rb = W::load(&b);

    let lt = W::cmp_lt(ra, rb);
    let bits = W::mask_bits(lt);
    for i in 0..lanes {
        assert_eq!((bits >> i) & 1 != 0, a[i] < b[i], "lane {i}");
    }
    assert_eq!(W::mask_bits(W::mask_from_bits(bits)), bits);
    assert_eq!(W::mask_bits(W::cmp_eq(ra, ra)), (1u32 << lanes) - 1);
    assert_eq!(W::mask_bits(W::cmp_ne(ra, ra)), 0);

    let picked = lanes_of::<T, W>(W::select(lt, ra, rb));
    for i in 0..lanes {
        assert_eq!(picked[i], if a[i] < b[i] { a[i] } else { b[i] });
    }

    let total = a.iter().fold(0.0, |acc, v| acc + v.to_f64());
    assert!((W::reduce_add(ra).to_f64() - total).abs() < 1e-4);
    assert_eq!(W::reduce_min(ra), a[0]);
    assert_eq!(W::reduce_max(ra), a[lanes - 1]);
    assert_eq!(W::extract(W::insert(ra, lanes - 1, T::ONE), lanes - 1), T::ONE);
}

/// `1, 2, 3, ...` without going through a float conversion.
fn counting<T: SimdElement>(lanes: usize) -> Vec<T> {
    let mut next = T::ZERO;
    (0..lanes)
        .map(|_| {
            next = next.lane_add(T::ONE);
            next
        })
        .collect()
}

/// Register permutes against indexing the stored lanes.
fn check_permute_engine<T: SimdElement, W: SimdEngine<T>>() {
    let lanes = W::LANES;
    let values = counting::<T>(lanes);
    let reg = W::load(&values);

    let mut patterns: Vec<Vec<usize>> = vec![
        (0..lanes).collect(),
        (0..lanes).rev().collect(),
        (0..lanes).map(|i| (i + 1) % lanes).collect(),
        (0..lanes).map(|i| (i * 3 + 1) % lanes).collect(),
        (0..lanes).map(|i| i - i % 3).collect(),
    ];
    patterns.extend((0..lanes).map(|src| vec![src; lanes]));

    for indices in &patterns {
        let got = lanes_of::<T, W>(W::permute(reg, indices));
        let expected: Vec<T> = indices.iter().map(|&i| values[i]).collect();
        assert_eq!(got, expected, "indices {indices:?}");
    }
}

#[test]
fn scalar_engine_matches_lane_math() {
    check_float_engine::<f32, Scalar>();
    check_float_engine::<f64, Scalar>();
    check_mask_engine::<f32, Scalar>();
    check_mask_engine::<f64, Scalar>();
    check_permute_engine::<f32, Scalar>();
    check_permute_engine::<u64, Scalar>();
}

#[cfg(simd_b16)]
#[test]
fn b16_engine_matches_lane_math() {
    use crate::compute::B16;
    check_float_engine::<f32, B16>();
    check_float_engine::<f64, B16>();
    check_mask_engine::<f32, B16>();
    check_mask_engine::<f64, B16>();
    check_permute_engine::<f32, B16>();
    check_permute_engine::<f64, B16>();
    check_permute_engine::<i32, B16>();
    check_permute_engine::<u32, B16>();
}

#[cfg(simd_b32)]
#[test]
fn b32_engine_matches_lane_math() {
    use crate::compute::B32;
    check_float_engine::<f32, B32>();
    check_float_engine::<f64, B32>();
    check_mask_engine::<f32, B32>();
    check_mask_engine::<f64, B32>();
    check_permute_engine::<f32, B32>();
    check_permute_engine::<f64, B32>();
    check_permute_engine::<i32, B32>();
    check_permute_engine::<u32, B32>();
}

#[cfg(simd_b64)]
#[test]
fn b64_engine_matches_lane_math() {
    use crate::compute::B64;
    check_float_engine::<f32, B64>();
    check_float_engine::<f64, B64>();
    check_mask_engine::<f32, B64>();
    check_mask_engine::<f64, B64>();
    check_permute_engine::<f32, B64>();
    check_permute_engine::<f64, B64>();
    check_permute_engine::<i32, B64>();
    check_permute_engine::<u32, B64>();
}

#[test]
fn scalar_integer_engine_wraps() {
    let sum = <Scalar as SimdEngine<i64>>::add(i64::MAX, 1);
    assert_eq!(sum, i64::MIN);
    assert_eq!(<Scalar as SimdEngine<u64>>::mask_bits(<Scalar as SimdEngine<u64>>::cmp_lt(1, 2)), 1);
}
