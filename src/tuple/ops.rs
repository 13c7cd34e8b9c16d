//! Element-wise operators.
//!
//! Right-hand operands may be a tuple of the same arity, a [`Base`], an
//! [`InBase`], a bare `T`, or (for composite arities) a shorter tuple that is
//! repeated across the left-hand side. `Div` exists for float tuples only.

use std::ops::{Add, AddAssign, Div, DivAssign, Mul, MulAssign, Neg, Sub, SubAssign};

use super::Simd;
use crate::compute::element::{SimdElement, SimdFloat};
use crate::compute::simd_abstraction::pack::Pack;
use crate::compute::simd_abstraction::{FloatEngine, SimdEngine};
use crate::lane::{Base, InBase};

macro_rules! tuple_binary {
    ($bound:ident, $engine:ident, $trait:ident, $method:ident, $assign:ident, $assign_method:ident) => {
        impl<T: $bound, const N: usize, W: $engine<T> + Pack<T, N>> $trait for Simd<T, N, W> {
            type Output = Self;
            #[inline(always)]
            fn $method(self, rhs: Self) -> Self {
                self.zip_regs(rhs, <W as $engine<T>>::$method)
            }
        }

        impl<T: $bound, const N: usize, W: $engine<T> + Pack<T, N>> $trait<Base<T, W>>
            for Simd<T, N, W>
        {
            type Output = Self;
            #[inline(always)]
            fn $method(self, rhs: Base<T, W>) -> Self {
                let r = rhs.reg();
                self.map_regs(|l| <W as $engine<T>>::$method(l, r))
            }
        }

        impl<T: $bound, const N: usize, W: $engine<T> + Pack<T, N>> $trait<T> for Simd<T, N, W> {
            type Output = Self;
            #[inline(always)]
            fn $method(self, rhs: T) -> Self {
                self.$method(Base::<T, W>::new(rhs))
            }
        }

        impl<T: $bound, const N: usize, W: $engine<T> + Pack<T, N>> $trait<InBase<T>>
            for Simd<T, N, W>
        {
            type Output = Self;
            #[inline(always)]
            fn $method(self, rhs: InBase<T>) -> Self {
                self.$method(Base::<T, W>::new(rhs.value()))
            }
        }

        impl<T: $bound, const N: usize, W: $engine<T> + Pack<T, N>> $trait<Simd<T, N, W>>
            for Base<T, W>
        {
            type Output = Simd<T, N, W>;
            #[inline(always)]
            fn $method(self, rhs: Simd<T, N, W>) -> Simd<T, N, W> {
                let l = self.reg();
                rhs.map_regs(|r| <W as $engine<T>>::$method(l, r))
            }
        }

        impl<T: $bound, const N: usize, W: $engine<T> + Pack<T, N>> $assign for Simd<T, N, W> {
            #[inline(always)]
            fn $assign_method(&mut self, rhs: Self) {
                *self = (*self).$method(rhs);
            }
        }

        impl<T: $bound, const N: usize, W: $engine<T> + Pack<T, N>> $assign<Base<T, W>>
            for Simd<T, N, W>
        {
            #[inline(always)]
            fn $assign_method(&mut self, rhs: Base<T, W>) {
                *self = (*self).$method(rhs);
            }
        }

        impl<T: $bound, const N: usize, W: $engine<T> + Pack<T, N>> $assign<T> for Simd<T, N, W> {
            #[inline(always)]
            fn $assign_method(&mut self, rhs: T) {
                *self = (*self).$method(Base::<T, W>::new(rhs));
            }
        }
    };
}

tuple_binary!(SimdElement, SimdEngine, Add, add, AddAssign, add_assign);
tuple_binary!(SimdElement, SimdEngine, Sub, sub, SubAssign, sub_assign);
tuple_binary!(SimdElement, SimdEngine, Mul, mul, MulAssign, mul_assign);
tuple_binary!(SimdFloat, FloatEngine, Div, div, DivAssign, div_assign);

impl<T: SimdElement, const N: usize, W: Pack<T, N>> Neg for Simd<T, N, W> {
    type Output = Self;
    #[inline(always)]
    fn neg(self) -> Self {
        self.map_regs(W::neg)
    }
}

// `scalar * tuple` for the concrete element types.
macro_rules! scalar_lhs {
    ($($t:ty),*) => {$(
        impl<const N: usize, W: Pack<$t, N>> Mul<Simd<$t, N, W>> for $t {
            type Output = Simd<$t, N, W>;
            #[inline(always)]
            fn mul(self, rhs: Simd<$t, N, W>) -> Simd<$t, N, W> {
                rhs * self
            }
        }

        impl<const N: usize, W: Pack<$t, N>> Add<Simd<$t, N, W>> for $t {
            type Output = Simd<$t, N, W>;
            #[inline(always)]
            fn add(self, rhs: Simd<$t, N, W>) -> Simd<$t, N, W> {
                rhs + self
            }
        }
    )*};
}

scalar_lhs!(f32, f64, i32, u32, i64, u64);

// Shorter right-hand tuples repeat across the left-hand one, e.g. a `Simd2`
// added to every pair of a `Simd4`.
macro_rules! sub_tuple_ops {
    ($(($n:literal, $m:literal)),* $(,)?) => {$(
        sub_tuple_ops!(@op $n, $m, SimdElement, SimdEngine, Add, add, AddAssign, add_assign);
        sub_tuple_ops!(@op $n, $m, SimdElement, SimdEngine, Sub, sub, SubAssign, sub_assign);
        sub_tuple_ops!(@op $n, $m, SimdElement, SimdEngine, Mul, mul, MulAssign, mul_assign);
        sub_tuple_ops!(@op $n, $m, SimdFloat, FloatEngine, Div, div, DivAssign, div_assign);
    )*};
    (@op $n:literal, $m:literal, $bound:ident, $engine:ident,
     $trait:ident, $method:ident, $assign:ident, $assign_method:ident) => {
        impl<T: $bound, W: $engine<T> + Pack<T, $n>, W2: Pack<T, $m>> $trait<Simd<T, $m, W2>>
            for Simd<T, $n, W>
        {
            type Output = Self;
            #[inline]
            fn $method(self, rhs: Simd<T, $m, W2>) -> Self {
                self.$method(Self::repeat(rhs))
            }
        }

        impl<T: $bound, W: $engine<T> + Pack<T, $n>, W2: Pack<T, $m>> $assign<Simd<T, $m, W2>>
            for Simd<T, $n, W>
        {
            #[inline]
            fn $assign_method(&mut self, rhs: Simd<T, $m, W2>) {
                *self = (*self).$method(Self::repeat(rhs));
            }
        }
    };
}

sub_tuple_ops!(
    (4, 2),
    (6, 2),
    (6, 3),
    (8, 2),
    (8, 4),
    (9, 3),
    (12, 3),
    (12, 4),
    (12, 6),
    (16, 4),
    (16, 8),
);
