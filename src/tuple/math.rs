//! Lane-wise math: min/max/abs, fused multiply-add, roots and the
//! transcendental vocabulary of float tuples.
//!
//! No operation here guards its domain. `sqrt` of a negative lane, `ln` of
//! zero and friends produce whatever IEEE-754 says for that lane.

use super::Simd;
use crate::compute::element::{SimdElement, SimdFloat};
use crate::compute::simd_abstraction::FloatEngine;
use crate::compute::simd_abstraction::pack::Pack;
use crate::lane::Base;

impl<T: SimdElement, const N: usize, W: Pack<T, N>> Simd<T, N, W> {
    #[inline]
    pub fn min(self, other: Self) -> Self {
        self.zip_regs(other, W::min)
    }

    #[inline]
    pub fn max(self, other: Self) -> Self {
        self.zip_regs(other, W::max)
    }

    #[inline]
    pub fn abs(self) -> Self {
        self.map_regs(W::abs)
    }

    /// Clamps every lane into `[lo, hi]`.
    #[inline]
    pub fn clamp(self, lo: Self, hi: Self) -> Self {
        self.max(lo).min(hi)
    }

    /// `self * b + c`, one fused instruction per register where the target
    /// has FMA.
    #[inline]
    pub fn mad(self, b: Self, c: Self) -> Self {
        self.zip3_regs(b, c, W::mul_add)
    }

    /// `self * b - c`, fused like [`Simd::mad`].
    #[inline]
    pub fn msub(self, b: Self, c: Self) -> Self {
        self.zip3_regs(b, c, W::mul_sub)
    }

    /// `self * b + c` with a broadcast factor.
    #[inline]
    pub fn mad_base(self, b: Base<T, W>, c: Self) -> Self {
        let factor = b.reg();
        self.zip_regs(c, |a, c| W::mul_add(a, factor, c))
    }

    /// `self * b - c` with a broadcast factor.
    #[inline]
    pub fn msub_base(self, b: Base<T, W>, c: Self) -> Self {
        let factor = b.reg();
        self.zip_regs(c, |a, c| W::mul_sub(a, factor, c))
    }
}

macro_rules! lane_mapped {
    ($($name:ident => $lane:ident),* $(,)?) => {$(
        #[inline]
        pub fn $name(self) -> Self {
            self.map_regs(|r| W::map(r, T::$lane))
        }
    )*};
}

impl<T: SimdFloat, const N: usize, W: FloatEngine<T> + Pack<T, N>> Simd<T, N, W> {
    #[inline]
    pub fn sqrt(self) -> Self {
        self.map_regs(W::sqrt)
    }

    /// Full precision `1 / sqrt(x)`.
    #[inline]
    pub fn rsqrt(self) -> Self {
        self.map_regs(W::rsqrt)
    }

    #[inline]
    pub fn recip(self) -> Self {
        self.map_regs(W::recip)
    }

    #[inline]
    pub fn ceil(self) -> Self {
        self.map_regs(W::ceil)
    }

    #[inline]
    pub fn floor(self) -> Self {
        self.map_regs(W::floor)
    }

    #[inline]
    pub fn trunc(self) -> Self {
        self.map_regs(W::trunc)
    }

    /// Rounds half away from zero.
    #[inline]
    pub fn round(self) -> Self {
        self.map_regs(W::round)
    }

    lane_mapped!(
        sin => lane_sin,
        cos => lane_cos,
        tan => lane_tan,
        asin => lane_asin,
        acos => lane_acos,
        atan => lane_atan,
        exp => lane_exp,
        exp2 => lane_exp2,
        ln => lane_ln,
        log2 => lane_log2,
    );

    /// Lane-wise `atan2(self, x)`.
    #[inline]
    pub fn atan2(self, x: Self) -> Self {
        self.zip_regs(x, |y, x| W::map2(y, x, T::lane_atan2))
    }

    /// Lane-wise `self ^ exp`.
    #[inline]
    pub fn pow(self, exp: Self) -> Self {
        self.zip_regs(exp, |b, e| W::map2(b, e, T::lane_pow))
    }

    /// Every lane raised to the same power.
    #[inline]
    pub fn powf(self, exp: T) -> Self {
        self.map_regs(|r| W::map(r, |v| v.lane_pow(exp)))
    }

    #[inline]
    pub fn sin_cos(self) -> (Self, Self) {
        (self.sin(), self.cos())
    }

    /// Linear interpolation `self + (other - self) * t`.
    #[inline]
    pub fn lerp(self, other: Self, t: Base<T, W>) -> Self {
        (other - self).mad_base(t, self)
    }
}

#[cfg(test)]
mod tests {
    use approx::assert_relative_eq;

    use crate::compute::Scalar;
    use crate::prelude::*;

    #[test]
    fn mad_matches_separate_operations() {
        let a = Simd4::<f32>::new(1.5, -2.0, 3.25, 0.5);
        let b = Simd4::<f32>::new(2.0, 4.0, -1.0, 8.0);
        let c = Simd4::<f32>::new(0.25, 1.0, 2.0, -3.0);
        assert_eq!(a.mad(b, c), a * b + c);
        assert_eq!(a.msub(b, c), a * b - c);
    }

    #[test]
    fn min_max_abs_on_integers() {
        let a = Simd6::<i32>::from_array([-3, 5, 0, 7, -1, 2]);
        let b = Simd6::<i32>::from_array([1, 1, 1, 1, 1, 1]);
        assert_eq!(a.min(b).to_array(), [-3, 1, 0, 1, -1, 1]);
        assert_eq!(a.max(b).to_array(), [1, 5, 1, 7, 1, 2]);
        assert_eq!(a.abs().to_array(), [3, 5, 0, 7, 1, 2]);
    }

    #[test]
    fn roots_and_rounding() {
        let a = Simd4::<f64>::new(4.0, 9.0, 16.0, 0.25);
        assert_eq!(a.sqrt(), Simd4::<f64>::new(2.0, 3.0, 4.0, 0.5));
        assert_eq!(a.rsqrt(), Simd4::<f64>::new(0.5, 1.0 / 3.0, 0.25, 2.0));
        let r = Simd4::<f32>::new(-1.5, -0.5, 0.5, 2.5);
        assert_eq!(r.round(), Simd4::<f32>::new(-2.0, -1.0, 1.0, 3.0));
        assert_eq!(r.floor(), Simd4::<f32>::new(-2.0, -1.0, 0.0, 2.0));
        assert_eq!(r.trunc(), Simd4::<f32>::new(-1.0, -0.0, 0.0, 2.0));
    }

    #[test]
    fn transcendentals_match_std_per_lane() {
        let a = Simd8::<f32>::from_array([0.1, 0.2, 0.3, 0.4, 0.5, 0.6, 0.7, 0.8]);
        let scalar = a.convert::<Scalar>();
        for (lane, v) in a.sin().to_array().into_iter().enumerate() {
            assert_relative_eq!(v, scalar.get_value_dyn(lane).value().sin());
        }
        for (lane, v) in a.exp().to_array().into_iter().enumerate() {
            assert_relative_eq!(v, scalar.get_value_dyn(lane).value().exp());
        }
        let y = a.atan2(Simd8::<f32>::splat(1.0));
        assert_relative_eq!(y.get_value::<7>().value(), 0.8f32.atan());
    }

    #[test]
    fn lerp_between_tuples() {
        let a = Simd3::<f32>::new(0.0, 10.0, -4.0);
        let b = Simd3::<f32>::new(2.0, 20.0, 4.0);
        let mid = a.lerp(b, BaseOf::<f32, 3>::new(0.5));
        assert_eq!(mid, Simd3::<f32>::new(1.0, 15.0, 0.0));
    }
}
