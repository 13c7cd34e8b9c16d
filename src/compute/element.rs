//! Element types a tuple may hold.
//!
//! `SimdElement` is sealed: the engines are only written for `f32`, `f64`,
//! `i32`, `u32`, `i64` and `u64`. The 64-bit integers are accepted as tuple
//! elements but never vectorized, so they always run on the scalar engine.
//!
//! Lane operations carry a `lane_` prefix so they never collide with
//! `Ord::min`, `f32::abs` and friends at call sites that have both in scope.
//! Integer lane arithmetic wraps.

use std::fmt::Debug;

mod sealed {
    pub trait Sealed {}
}

/// An element type usable as a tuple lane.
pub trait SimdElement:
    sealed::Sealed + bytemuck::Pod + Debug + Default + PartialEq + PartialOrd + Send + Sync + 'static
{
    const ZERO: Self;
    const ONE: Self;
    /// `false` for element types the engines never put in a vector register.
    const VECTORIZED: bool;

    fn lane_add(self, rhs: Self) -> Self;
    fn lane_sub(self, rhs: Self) -> Self;
    fn lane_mul(self, rhs: Self) -> Self;
    fn lane_neg(self) -> Self;
    fn lane_min(self, rhs: Self) -> Self;
    fn lane_max(self, rhs: Self) -> Self;
    fn lane_abs(self) -> Self;

    /// `self * b + c`, fused when the target has FMA.
    #[inline]
    fn lane_mul_add(self, b: Self, c: Self) -> Self {
        self.lane_mul(b).lane_add(c)
    }

    /// `self * b - c`, fused when the target has FMA.
    #[inline]
    fn lane_mul_sub(self, b: Self, c: Self) -> Self {
        self.lane_mul(b).lane_sub(c)
    }
}

/// Floating point elements. Division, roots and transcendentals are only
/// offered on tuples of these.
pub trait SimdFloat: SimdElement {
    const EPSILON: Self;

    fn lane_div(self, rhs: Self) -> Self;
    fn lane_sqrt(self) -> Self;
    fn lane_recip(self) -> Self;
    fn lane_rsqrt(self) -> Self;

    fn lane_sin(self) -> Self;
    fn lane_cos(self) -> Self;
    fn lane_tan(self) -> Self;
    fn lane_asin(self) -> Self;
    fn lane_acos(self) -> Self;
    fn lane_atan(self) -> Self;
    fn lane_atan2(self, x: Self) -> Self;
    fn lane_exp(self) -> Self;
    fn lane_exp2(self) -> Self;
    fn lane_ln(self) -> Self;
    fn lane_log2(self) -> Self;
    fn lane_pow(self, exp: Self) -> Self;

    fn lane_ceil(self) -> Self;
    fn lane_floor(self) -> Self;
    fn lane_trunc(self) -> Self;
    fn lane_round(self) -> Self;

    fn from_f64(value: f64) -> Self;
    fn to_f64(self) -> f64;
}

macro_rules! impl_float_element {
    ($($t:ty),*) => {$(
        impl sealed::Sealed for $t {}

        impl SimdElement for $t {
            const ZERO: Self = 0.0;
            const ONE: Self = 1.0;
            const VECTORIZED: bool = true;

            #[inline]
            fn lane_add(self, rhs: Self) -> Self { self + rhs }
            #[inline]
            fn lane_sub(self, rhs: Self) -> Self { self - rhs }
            #[inline]
            fn lane_mul(self, rhs: Self) -> Self { self * rhs }
            #[inline]
            fn lane_neg(self) -> Self { -self }
            #[inline]
            fn lane_min(self, rhs: Self) -> Self { self.min(rhs) }
            #[inline]
            fn lane_max(self, rhs: Self) -> Self { self.max(rhs) }
            #[inline]
            fn lane_abs(self) -> Self { self.abs() }

            #[cfg(simd_fma)]
            #[inline]
            fn lane_mul_add(self, b: Self, c: Self) -> Self { self.mul_add(b, c) }
            #[cfg(simd_fma)]
            #[inline]
            fn lane_mul_sub(self, b: Self, c: Self) -> Self { self.mul_add(b, -c) }
        }

        impl SimdFloat for $t {
            const EPSILON: Self = <$t>::EPSILON;

            #[inline]
            fn lane_div(self, rhs: Self) -> Self { self / rhs }
            #[inline]
            fn lane_sqrt(self) -> Self { self.sqrt() }
            #[inline]
            fn lane_recip(self) -> Self { self.recip() }
            #[inline]
            fn lane_rsqrt(self) -> Self { self.sqrt().recip() }

            #[inline]
            fn lane_sin(self) -> Self { self.sin() }
            #[inline]
            fn lane_cos(self) -> Self { self.cos() }
            #[inline]
            fn lane_tan(self) -> Self { self.tan() }
            #[inline]
            fn lane_asin(self) -> Self { self.asin() }
            #[inline]
            fn lane_acos(self) -> Self { self.acos() }
            #[inline]
            fn lane_atan(self) -> Self { self.atan() }
            #[inline]
            fn lane_atan2(self, x: Self) -> Self { self.atan2(x) }
            #[inline]
            fn lane_exp(self) -> Self { self.exp() }
            #[inline]
            fn lane_exp2(self) -> Self { self.exp2() }
            #[inline]
            fn lane_ln(self) -> Self { self.ln() }
            #[inline]
            fn lane_log2(self) -> Self { self.log2() }
            #[inline]
            fn lane_pow(self, exp: Self) -> Self { self.powf(exp) }

            #[inline]
            fn lane_ceil(self) -> Self { self.ceil() }
            #[inline]
            fn lane_floor(self) -> Self { self.floor() }
            #[inline]
            fn lane_trunc(self) -> Self { self.trunc() }
            #[inline]
            fn lane_round(self) -> Self { self.round() }

            #[inline]
            fn from_f64(value: f64) -> Self { value as $t }
            #[inline]
            fn to_f64(self) -> f64 { self as f64 }
        }
    )*};
}

macro_rules! impl_int_element {
    ($($t:ty => $vectorized:expr, $abs:expr),* $(,)?) => {$(
        impl sealed::Sealed for $t {}

        impl SimdElement for $t {
            const ZERO: Self = 0;
            const ONE: Self = 1;
            const VECTORIZED: bool = $vectorized;

            #[inline]
            fn lane_add(self, rhs: Self) -> Self { self.wrapping_add(rhs) }
            #[inline]
            fn lane_sub(self, rhs: Self) -> Self { self.wrapping_sub(rhs) }
            #[inline]
            fn lane_mul(self, rhs: Self) -> Self { self.wrapping_mul(rhs) }
            #[inline]
            fn lane_neg(self) -> Self { self.wrapping_neg() }
            #[inline]
            fn lane_min(self, rhs: Self) -> Self { Ord::min(self, rhs) }
            #[inline]
            fn lane_max(self, rhs: Self) -> Self { Ord::max(self, rhs) }
            #[inline]
            fn lane_abs(self) -> Self { ($abs)(self) }
        }
    )*};
}

impl_float_element!(f32, f64);

impl_int_element!(
    i32 => true, i32::wrapping_abs,
    u32 => true, |v: u32| v,
    i64 => false, i64::wrapping_abs,
    u64 => false, |v: u64| v,
);

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn integer_lanes_wrap() {
        assert_eq!(i32::MAX.lane_add(1), i32::MIN);
        assert_eq!(0u32.lane_sub(1), u32::MAX);
        assert_eq!(i32::MIN.lane_abs(), i32::MIN);
        assert_eq!(5u64.lane_neg(), 5u64.wrapping_neg());
    }

    #[test]
    fn vectorized_flags() {
        assert!(f32::VECTORIZED && f64::VECTORIZED && i32::VECTORIZED && u32::VECTORIZED);
        assert!(!i64::VECTORIZED && !u64::VECTORIZED);
    }

    #[test]
    fn mul_add_matches_separate_ops_on_exact_values() {
        assert_eq!(2.0f32.lane_mul_add(3.0, 1.0), 7.0);
        assert_eq!(2.0f64.lane_mul_sub(3.0, 1.0), 5.0);
        assert_eq!(3i32.lane_mul_sub(4, 2), 10);
    }

    #[test]
    fn rsqrt_is_full_precision() {
        assert_eq!(4.0f64.lane_rsqrt(), 0.5);
        assert_eq!(16.0f32.lane_rsqrt(), 0.25);
    }
}
