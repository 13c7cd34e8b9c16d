//! Scalar engine: one element per register.
//!
//! Always available and the only engine for `i64`/`u64`. It is also the
//! reference every vector engine is tested against.

use super::{FloatEngine, SimdEngine};
use crate::compute::Scalar;
use crate::compute::element::{SimdElement, SimdFloat};

macro_rules! scalar_engine {
    ($($t:ty),*) => {$(
        impl SimdEngine<$t> for Scalar {
            const LANES: usize = 1;

            type Reg = $t;
            type Mask = bool;

            #[inline(always)]
            fn splat(value: $t) -> $t {
                value
            }

            #[inline(always)]
            fn load(src: &[$t]) -> $t {
                src[0]
            }

            #[inline(always)]
            fn store(reg: $t, dst: &mut [$t]) {
                dst[0] = reg;
            }

            #[inline(always)]
            fn extract(reg: $t, lane: usize) -> $t {
                debug_assert_eq!(lane, 0);
                reg
            }

            #[inline(always)]
            fn insert(_reg: $t, lane: usize, value: $t) -> $t {
                debug_assert_eq!(lane, 0);
                value
            }

            #[inline(always)]
            fn permute(reg: $t, indices: &[usize]) -> $t {
                debug_assert_eq!(indices[0], 0);
                reg
            }

            #[inline(always)]
            fn add(a: $t, b: $t) -> $t { a.lane_add(b) }
            #[inline(always)]
            fn sub(a: $t, b: $t) -> $t { a.lane_sub(b) }
            #[inline(always)]
            fn mul(a: $t, b: $t) -> $t { a.lane_mul(b) }
            #[inline(always)]
            fn neg(a: $t) -> $t { a.lane_neg() }
            #[inline(always)]
            fn min(a: $t, b: $t) -> $t { a.lane_min(b) }
            #[inline(always)]
            fn max(a: $t, b: $t) -> $t { a.lane_max(b) }
            #[inline(always)]
            fn abs(a: $t) -> $t { a.lane_abs() }
            #[inline(always)]
            fn mul_add(a: $t, b: $t, c: $t) -> $t { a.lane_mul_add(b, c) }
            #[inline(always)]
            fn mul_sub(a: $t, b: $t, c: $t) -> $t { a.lane_mul_sub(b, c) }

            #[inline(always)]
            fn cmp_eq(a: $t, b: $t) -> bool { a == b }
            #[inline(always)]
            fn cmp_ne(a: $t, b: $t) -> bool { a != b }
            #[inline(always)]
            fn cmp_lt(a: $t, b: $t) -> bool { a < b }
            #[inline(always)]
            fn cmp_le(a: $t, b: $t) -> bool { a <= b }
            #[inline(always)]
            fn cmp_gt(a: $t, b: $t) -> bool { a > b }
            #[inline(always)]
            fn cmp_ge(a: $t, b: $t) -> bool { a >= b }

            #[inline(always)]
            fn select(mask: bool, if_true: $t, if_false: $t) -> $t {
                if mask { if_true } else { if_false }
            }

            #[inline(always)]
            fn mask_bits(mask: bool) -> u32 {
                mask as u32
            }

            #[inline(always)]
            fn mask_from_bits(bits: u32) -> bool {
                bits & 1 != 0
            }

            #[inline(always)]
            fn reduce_add(reg: $t) -> $t { reg }
            #[inline(always)]
            fn reduce_min(reg: $t) -> $t { reg }
            #[inline(always)]
            fn reduce_max(reg: $t) -> $t { reg }
        }
    )*};
}

scalar_engine!(f32, f64, i32, u32, i64, u64);

macro_rules! scalar_float_engine {
    ($($t:ty),*) => {$(
        impl FloatEngine<$t> for Scalar {
            #[inline(always)]
            fn div(a: $t, b: $t) -> $t { a.lane_div(b) }
            #[inline(always)]
            fn sqrt(a: $t) -> $t { a.lane_sqrt() }
            #[inline(always)]
            fn recip(a: $t) -> $t { a.lane_recip() }
            #[inline(always)]
            fn rsqrt(a: $t) -> $t { a.lane_rsqrt() }

            #[inline(always)]
            fn map(a: $t, f: impl Fn($t) -> $t) -> $t { f(a) }
            #[inline(always)]
            fn map2(a: $t, b: $t, f: impl Fn($t, $t) -> $t) -> $t { f(a, b) }
        }
    )*};
}

scalar_float_engine!(f32, f64);
