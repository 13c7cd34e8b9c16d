//! How many registers a tuple of `N` lanes needs at each width.
//!
//! Lane `i` of a tuple lives in register `i / LANES`, slot `i % LANES`. The
//! last register may be partly padding; padding slots never reach a result
//! (reductions, masks and stores only look at the first `N` lanes).

use super::SimdEngine;
use crate::compute::element::SimdElement;
use crate::compute::Scalar;

/// Fixed-size array of registers.
pub trait RegisterArray<R: Copy>: Copy {
    const COUNT: usize;

    fn from_fn<F: FnMut(usize) -> R>(f: F) -> Self;
    fn as_slice(&self) -> &[R];
    fn as_mut_slice(&mut self) -> &mut [R];
}

impl<R: Copy, const K: usize> RegisterArray<R> for [R; K] {
    const COUNT: usize = K;

    #[inline(always)]
    fn from_fn<F: FnMut(usize) -> R>(f: F) -> Self {
        std::array::from_fn(f)
    }

    #[inline(always)]
    fn as_slice(&self) -> &[R] {
        self
    }

    #[inline(always)]
    fn as_mut_slice(&mut self) -> &mut [R] {
        self
    }
}

/// Register layout of an `N`-lane tuple of `T` on this width.
pub trait Pack<T: SimdElement, const N: usize>: SimdEngine<T> {
    type Regs: RegisterArray<Self::Reg>;
    type Masks: RegisterArray<Self::Mask>;
}

/// Number of registers of `lanes` lanes needed for `arity` elements.
pub const fn register_count(arity: usize, lanes: usize) -> usize {
    arity.div_ceil(lanes)
}

macro_rules! pack_table {
    ($w:ty, $t:ty, $lanes:literal) => {
        pack_table!(@arity $w, $t, $lanes; 2, 3, 4, 6, 8, 9, 12, 16);
    };
    (@arity $w:ty, $t:ty, $lanes:literal; $($n:literal),*) => {$(
        impl Pack<$t, $n> for $w {
            type Regs = [<$w as SimdEngine<$t>>::Reg; register_count($n, $lanes)];
            type Masks = [<$w as SimdEngine<$t>>::Mask; register_count($n, $lanes)];
        }
    )*};
}

pack_table!(Scalar, f32, 1);
pack_table!(Scalar, f64, 1);
pack_table!(Scalar, i32, 1);
pack_table!(Scalar, u32, 1);
pack_table!(Scalar, i64, 1);
pack_table!(Scalar, u64, 1);

#[cfg(simd_b16)]
mod b16 {
    use super::{Pack, SimdEngine, register_count};
    use crate::compute::B16;

    pack_table!(B16, f32, 4);
    pack_table!(B16, f64, 2);
    pack_table!(B16, i32, 4);
    pack_table!(B16, u32, 4);
}

#[cfg(simd_b32)]
mod b32 {
    use super::{Pack, SimdEngine, register_count};
    use crate::compute::B32;

    pack_table!(B32, f32, 8);
    pack_table!(B32, f64, 4);
    pack_table!(B32, i32, 8);
    pack_table!(B32, u32, 8);
}

#[cfg(simd_b64)]
mod b64 {
    use super::{Pack, SimdEngine, register_count};
    use crate::compute::B64;

    pack_table!(B64, f32, 16);
    pack_table!(B64, f64, 8);
    pack_table!(B64, i32, 16);
    pack_table!(B64, u32, 16);
}
