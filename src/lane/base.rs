//! `Base<T, W>`: one element broadcast across a register of width `W`.
//!
//! Feeding a `Base` into tuple arithmetic costs no splat, so loops that reuse
//! a scalar factor should build it once as a `Base`. Every lane of the
//! register holds the same value.

use std::cmp::Ordering;
use std::fmt;
use std::ops::{Add, AddAssign, Div, DivAssign, Mul, MulAssign, Neg, Sub, SubAssign};

use super::InBase;
use crate::compute::element::{SimdElement, SimdFloat};
use crate::compute::simd_abstraction::{FloatEngine, SimdEngine};

pub struct Base<T: SimdElement, W: SimdEngine<T>> {
    reg: W::Reg,
}

impl<T: SimdElement, W: SimdEngine<T>> Clone for Base<T, W> {
    #[inline(always)]
    fn clone(&self) -> Self {
        *self
    }
}

impl<T: SimdElement, W: SimdEngine<T>> Copy for Base<T, W> {}

impl<T: SimdElement, W: SimdEngine<T>> Base<T, W> {
    #[inline(always)]
    pub fn new(value: T) -> Self {
        Self { reg: W::splat(value) }
    }

    #[inline(always)]
    pub fn zero() -> Self {
        Self { reg: W::zero() }
    }

    #[inline(always)]
    pub fn from_in_base(value: InBase<T>) -> Self {
        Self::new(value.value())
    }

    #[inline(always)]
    pub(crate) fn from_reg(reg: W::Reg) -> Self {
        Self { reg }
    }

    #[inline(always)]
    pub(crate) fn reg(self) -> W::Reg {
        self.reg
    }

    #[inline(always)]
    pub fn value(self) -> T {
        W::extract(self.reg, 0)
    }

    #[inline(always)]
    pub fn to_in_base(self) -> InBase<T> {
        InBase::new(self.value())
    }

    /// Same value, broadcast at another width.
    #[inline]
    pub fn convert<W2: SimdEngine<T>>(self) -> Base<T, W2> {
        Base::new(self.value())
    }

    #[inline]
    pub fn min(self, other: Self) -> Self {
        Self::from_reg(W::min(self.reg, other.reg))
    }

    #[inline]
    pub fn max(self, other: Self) -> Self {
        Self::from_reg(W::max(self.reg, other.reg))
    }

    #[inline]
    pub fn abs(self) -> Self {
        Self::from_reg(W::abs(self.reg))
    }

    /// `self * b + c`.
    #[inline]
    pub fn mad(self, b: Self, c: Self) -> Self {
        Self::from_reg(W::mul_add(self.reg, b.reg, c.reg))
    }

    /// `self * b - c`.
    #[inline]
    pub fn msub(self, b: Self, c: Self) -> Self {
        Self::from_reg(W::mul_sub(self.reg, b.reg, c.reg))
    }
}

macro_rules! scalar_float {
    ($($name:ident => $lane:ident),* $(,)?) => {$(
        #[inline]
        pub fn $name(self) -> Self {
            Self::new(self.value().$lane())
        }
    )*};
}

impl<T: SimdFloat, W: FloatEngine<T>> Base<T, W> {
    #[inline]
    pub fn sqrt(self) -> Self {
        Self::from_reg(W::sqrt(self.reg))
    }

    #[inline]
    pub fn rsqrt(self) -> Self {
        Self::from_reg(W::rsqrt(self.reg))
    }

    #[inline]
    pub fn recip(self) -> Self {
        Self::from_reg(W::recip(self.reg))
    }

    // One lane is enough for the transcendentals; the result is re-broadcast.
    scalar_float!(
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
        ceil => lane_ceil,
        floor => lane_floor,
        trunc => lane_trunc,
        round => lane_round,
    );

    #[inline]
    pub fn atan2(self, x: Self) -> Self {
        Self::new(self.value().lane_atan2(x.value()))
    }

    #[inline]
    pub fn pow(self, exp: Self) -> Self {
        Self::new(self.value().lane_pow(exp.value()))
    }

    #[inline]
    pub fn sin_cos(self) -> (Self, Self) {
        (self.sin(), self.cos())
    }
}

impl<T: SimdElement, W: SimdEngine<T>> Default for Base<T, W> {
    fn default() -> Self {
        Self::zero()
    }
}

impl<T: SimdElement, W: SimdEngine<T>> fmt::Debug for Base<T, W> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Base({:?})", self.value())
    }
}

impl<T: SimdElement, W: SimdEngine<T>> PartialEq for Base<T, W> {
    #[inline]
    fn eq(&self, other: &Self) -> bool {
        self.value() == other.value()
    }
}

impl<T: SimdElement, W: SimdEngine<T>> PartialEq<T> for Base<T, W> {
    #[inline]
    fn eq(&self, other: &T) -> bool {
        self.value() == *other
    }
}

impl<T: SimdElement, W: SimdEngine<T>> PartialOrd for Base<T, W> {
    #[inline]
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        self.value().partial_cmp(&other.value())
    }
}

impl<T: SimdElement, W: SimdEngine<T>> From<T> for Base<T, W> {
    #[inline(always)]
    fn from(value: T) -> Self {
        Self::new(value)
    }
}

impl<T: SimdElement, W: SimdEngine<T>> From<InBase<T>> for Base<T, W> {
    #[inline(always)]
    fn from(value: InBase<T>) -> Self {
        Self::from_in_base(value)
    }
}

macro_rules! base_binary {
    ($bound:ident, $engine:ident, $trait:ident, $method:ident, $assign:ident, $assign_method:ident) => {
        impl<T: $bound, W: $engine<T>> $trait for Base<T, W> {
            type Output = Self;
            #[inline(always)]
            fn $method(self, rhs: Self) -> Self {
                Self::from_reg(<W as $engine<T>>::$method(self.reg, rhs.reg))
            }
        }

        impl<T: $bound, W: $engine<T>> $trait<T> for Base<T, W> {
            type Output = Self;
            #[inline(always)]
            fn $method(self, rhs: T) -> Self {
                self.$method(Self::new(rhs))
            }
        }

        impl<T: $bound, W: $engine<T>> $trait<InBase<T>> for Base<T, W> {
            type Output = Self;
            #[inline(always)]
            fn $method(self, rhs: InBase<T>) -> Self {
                self.$method(Self::new(rhs.value()))
            }
        }

        impl<T: $bound, W: $engine<T>> $assign for Base<T, W> {
            #[inline(always)]
            fn $assign_method(&mut self, rhs: Self) {
                *self = (*self).$method(rhs);
            }
        }

        impl<T: $bound, W: $engine<T>> $assign<T> for Base<T, W> {
            #[inline(always)]
            fn $assign_method(&mut self, rhs: T) {
                *self = (*self).$method(Self::new(rhs));
            }
        }
    };
}

base_binary!(SimdElement, SimdEngine, Add, add, AddAssign, add_assign);
base_binary!(SimdElement, SimdEngine, Sub, sub, SubAssign, sub_assign);
base_binary!(SimdElement, SimdEngine, Mul, mul, MulAssign, mul_assign);
base_binary!(SimdFloat, FloatEngine, Div, div, DivAssign, div_assign);

impl<T: SimdElement, W: SimdEngine<T>> Neg for Base<T, W> {
    type Output = Self;
    #[inline(always)]
    fn neg(self) -> Self {
        Self::from_reg(W::neg(self.reg))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::compute::Scalar;

    #[test]
    fn broadcast_value_survives_arithmetic() {
        let a = Base::<f32, Scalar>::new(3.0);
        let b = Base::<f32, Scalar>::new(4.0);
        assert_eq!((a * a + b * b).sqrt(), 5.0);
        assert_eq!(a.mad(b, a), 15.0);
        assert_eq!(-a, -3.0);
    }

    #[test]
    fn scalar_and_lane_operands() {
        let mut a = Base::<i32, Scalar>::new(2);
        a *= 5;
        assert_eq!(a + InBase::new(1), 11);
        assert_eq!(a.to_in_base(), InBase::new(10));
    }

    #[cfg(simd_b16)]
    #[test]
    fn vector_base_reads_lane_zero() {
        use crate::compute::B16;
        let a = Base::<f64, B16>::new(0.25);
        assert_eq!(a.rsqrt(), 2.0);
        assert_eq!(a.convert::<Scalar>(), Base::<f64, Scalar>::new(0.25));
    }
}
