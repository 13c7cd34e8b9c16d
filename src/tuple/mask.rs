//! Comparison masks and blends.
//!
//! A [`Mask`] is produced by the comparison methods on [`Simd`] and consumed
//! by [`Simd::blend_var`]/[`Simd::blend_swap_var`] or collapsed with
//! `get_any`/`get_all`/`get_none`. It keeps the engine's native mask
//! registers, so comparing and blending never round-trips through lanes.
//! Bit `i` of [`Mask::bits`] corresponds to lane `i`; bits past the arity are
//! always clear.

use std::fmt;
use std::ops::{BitAnd, BitOr, BitXor, Not};

use super::Simd;
use crate::compute::element::SimdElement;
use crate::compute::simd_abstraction::SimdEngine;
use crate::compute::simd_abstraction::pack::{Pack, RegisterArray};

/// One selected/unselected state per lane of a `Simd<T, N, W>`.
pub struct Mask<T: SimdElement, const N: usize, W: Pack<T, N>> {
    masks: W::Masks,
}

impl<T: SimdElement, const N: usize, W: Pack<T, N>> Clone for Mask<T, N, W> {
    #[inline(always)]
    fn clone(&self) -> Self {
        *self
    }
}

impl<T: SimdElement, const N: usize, W: Pack<T, N>> Copy for Mask<T, N, W> {}

impl<T: SimdElement, const N: usize, W: Pack<T, N>> Mask<T, N, W> {
    const FULL: u32 = if N >= 32 { u32::MAX } else { (1u32 << N) - 1 };

    #[inline(always)]
    fn build(f: impl FnMut(usize) -> W::Mask) -> Self {
        Self {
            masks: <W::Masks as RegisterArray<W::Mask>>::from_fn(f),
        }
    }

    #[inline(always)]
    pub(crate) fn masks(&self) -> &[W::Mask] {
        self.masks.as_slice()
    }

    /// Builds a mask from a bitfield. This is the only way to construct a
    /// mask other than comparing tuples; bits at or above `N` are ignored.
    pub fn from_bits(bits: u32) -> Self {
        let bits = bits & Self::FULL;
        let lanes = <W as SimdEngine<T>>::LANES;
        Self::build(|k| W::mask_from_bits(bits >> (k * lanes)))
    }

    /// Bit `i` set when lane `i` is selected.
    pub fn bits(&self) -> u32 {
        let lanes = <W as SimdEngine<T>>::LANES;
        let bits = self
            .masks()
            .iter()
            .enumerate()
            .fold(0u32, |acc, (k, &m)| acc | (W::mask_bits(m) << (k * lanes)));
        bits & Self::FULL
    }

    #[inline]
    pub fn get_any(&self) -> bool {
        self.bits() != 0
    }

    #[inline]
    pub fn get_all(&self) -> bool {
        self.bits() == Self::FULL
    }

    #[inline]
    pub fn get_none(&self) -> bool {
        self.bits() == 0
    }

    /// State of lane `index`.
    ///
    /// # Panics
    ///
    /// Panics if `index >= N`.
    #[inline]
    pub fn get(&self, index: usize) -> bool {
        assert!(index < N, "lane index {index} out of range for {N} lanes");
        self.bits() >> index & 1 == 1
    }

    /// Number of selected lanes.
    #[inline]
    pub fn count(&self) -> u32 {
        self.bits().count_ones()
    }
}

impl<T: SimdElement, const N: usize, W: Pack<T, N>> fmt::Debug for Mask<T, N, W> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        // Lane 0 is the rightmost digit.
        write!(f, "Mask{N}(0b{:0width$b})", self.bits(), width = N)
    }
}

impl<T: SimdElement, const N: usize, W: Pack<T, N>> PartialEq for Mask<T, N, W> {
    fn eq(&self, other: &Self) -> bool {
        self.bits() == other.bits()
    }
}

impl<T: SimdElement, const N: usize, W: Pack<T, N>> Eq for Mask<T, N, W> {}

macro_rules! mask_bitwise {
    ($($trait:ident, $method:ident, $op:tt);*) => {$(
        impl<T: SimdElement, const N: usize, W: Pack<T, N>> $trait for Mask<T, N, W> {
            type Output = Self;
            #[inline]
            fn $method(self, rhs: Self) -> Self {
                Self::from_bits(self.bits() $op rhs.bits())
            }
        }
    )*};
}

mask_bitwise!(BitAnd, bitand, &; BitOr, bitor, |; BitXor, bitxor, ^);

impl<T: SimdElement, const N: usize, W: Pack<T, N>> Not for Mask<T, N, W> {
    type Output = Self;
    #[inline]
    fn not(self) -> Self {
        Self::from_bits(!self.bits())
    }
}

macro_rules! compare {
    ($($name:ident => $cmp:ident),* $(,)?) => {$(
        #[inline]
        pub fn $name(&self, other: &Self) -> Mask<T, N, W> {
            let (a, b) = (self.regs(), other.regs());
            Mask::build(|k| W::$cmp(a[k], b[k]))
        }
    )*};
}

impl<T: SimdElement, const N: usize, W: Pack<T, N>> Simd<T, N, W> {
    compare!(
        equal_mask => cmp_eq,
        not_equal_mask => cmp_ne,
        less_than_mask => cmp_lt,
        less_or_equal_mask => cmp_le,
        greater_than_mask => cmp_gt,
        greater_or_equal_mask => cmp_ge,
    );

    /// Lanes of `other` where bit `i` of `MASK` is set, lanes of `self`
    /// elsewhere.
    #[inline]
    pub fn blend<const MASK: u32>(&self, other: &Self) -> Self {
        const {
            assert!(
                N >= 32 || MASK >> N == 0,
                "blend mask selects lanes past the arity"
            )
        };
        self.blend_var(other, &Mask::from_bits(MASK))
    }

    /// Runtime-mask counterpart of [`Simd::blend`].
    #[inline]
    pub fn blend_var(&self, other: &Self, mask: &Mask<T, N, W>) -> Self {
        let (a, b, m) = (self.regs(), other.regs(), mask.masks());
        Self::build(|k| W::select(m[k], b[k], a[k]))
    }

    /// Exchanges the lanes selected by `MASK` between `a` and `b`.
    #[inline]
    pub fn blend_swap<const MASK: u32>(a: &mut Self, b: &mut Self) {
        const {
            assert!(
                N >= 32 || MASK >> N == 0,
                "blend mask selects lanes past the arity"
            )
        };
        Self::blend_swap_var(a, b, &Mask::from_bits(MASK));
    }

    /// Runtime-mask counterpart of [`Simd::blend_swap`].
    #[inline]
    pub fn blend_swap_var(a: &mut Self, b: &mut Self, mask: &Mask<T, N, W>) {
        let (old_a, old_b) = (*a, *b);
        *a = old_a.blend_var(&old_b, mask);
        *b = old_b.blend_var(&old_a, mask);
    }
}
