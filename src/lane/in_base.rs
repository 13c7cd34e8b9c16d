//! `InBase<T>`: one element pulled out of a tuple.
//!
//! Reductions and lane reads return this rather than a bare `T` so results
//! keep the tuple vocabulary (`mad`, `sqrt`, `abs`, ...) without re-entering a
//! register. It compares equal to plain `T` and converts in both directions.

use std::fmt;
use std::ops::{Add, AddAssign, Div, DivAssign, Mul, MulAssign, Neg, Sub, SubAssign};

use crate::compute::element::{SimdElement, SimdFloat};

#[derive(Clone, Copy, Default, PartialEq, PartialOrd)]
#[repr(transparent)]
pub struct InBase<T: SimdElement>(T);

impl<T: SimdElement> InBase<T> {
    #[inline(always)]
    pub const fn new(value: T) -> Self {
        Self(value)
    }

    #[inline(always)]
    pub fn value(self) -> T {
        self.0
    }

    #[inline]
    pub fn min(self, other: Self) -> Self {
        Self(self.0.lane_min(other.0))
    }

    #[inline]
    pub fn max(self, other: Self) -> Self {
        Self(self.0.lane_max(other.0))
    }

    #[inline]
    pub fn abs(self) -> Self {
        Self(self.0.lane_abs())
    }

    /// `self * b + c`.
    #[inline]
    pub fn mad(self, b: Self, c: Self) -> Self {
        Self(self.0.lane_mul_add(b.0, c.0))
    }

    /// `self * b - c`.
    #[inline]
    pub fn msub(self, b: Self, c: Self) -> Self {
        Self(self.0.lane_mul_sub(b.0, c.0))
    }
}

macro_rules! unary_float {
    ($($name:ident => $lane:ident),* $(,)?) => {$(
        #[inline]
        pub fn $name(self) -> Self {
            Self(self.0.$lane())
        }
    )*};
}

impl<T: SimdFloat> InBase<T> {
    unary_float!(
        sqrt => lane_sqrt,
        rsqrt => lane_rsqrt,
        recip => lane_recip,
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

    /// Four-quadrant arctangent of `self / x`.
    #[inline]
    pub fn atan2(self, x: Self) -> Self {
        Self(self.0.lane_atan2(x.0))
    }

    #[inline]
    pub fn pow(self, exp: Self) -> Self {
        Self(self.0.lane_pow(exp.0))
    }

    #[inline]
    pub fn sin_cos(self) -> (Self, Self) {
        (self.sin(), self.cos())
    }
}

impl<T: SimdElement> fmt::Debug for InBase<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "InBase({:?})", self.0)
    }
}

impl<T: SimdElement> From<T> for InBase<T> {
    #[inline(always)]
    fn from(value: T) -> Self {
        Self(value)
    }
}

impl<T: SimdElement> PartialEq<T> for InBase<T> {
    #[inline]
    fn eq(&self, other: &T) -> bool {
        self.0 == *other
    }
}

impl<T: SimdElement> PartialOrd<T> for InBase<T> {
    #[inline]
    fn partial_cmp(&self, other: &T) -> Option<std::cmp::Ordering> {
        self.0.partial_cmp(other)
    }
}

macro_rules! in_base_binary {
    ($bound:ident, $trait:ident, $method:ident, $assign:ident, $assign_method:ident, $lane:ident) => {
        impl<T: $bound> $trait for InBase<T> {
            type Output = Self;
            #[inline(always)]
            fn $method(self, rhs: Self) -> Self {
                Self(self.0.$lane(rhs.0))
            }
        }

        impl<T: $bound> $trait<T> for InBase<T> {
            type Output = Self;
            #[inline(always)]
            fn $method(self, rhs: T) -> Self {
                Self(self.0.$lane(rhs))
            }
        }

        impl<T: $bound> $assign for InBase<T> {
            #[inline(always)]
            fn $assign_method(&mut self, rhs: Self) {
                self.0 = self.0.$lane(rhs.0);
            }
        }

        impl<T: $bound> $assign<T> for InBase<T> {
            #[inline(always)]
            fn $assign_method(&mut self, rhs: T) {
                self.0 = self.0.$lane(rhs);
            }
        }
    };
}

in_base_binary!(SimdElement, Add, add, AddAssign, add_assign, lane_add);
in_base_binary!(SimdElement, Sub, sub, SubAssign, sub_assign, lane_sub);
in_base_binary!(SimdElement, Mul, mul, MulAssign, mul_assign, lane_mul);
in_base_binary!(SimdFloat, Div, div, DivAssign, div_assign, lane_div);

impl<T: SimdElement> Neg for InBase<T> {
    type Output = Self;
    #[inline(always)]
    fn neg(self) -> Self {
        Self(self.0.lane_neg())
    }
}
