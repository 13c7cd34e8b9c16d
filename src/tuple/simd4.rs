//! Four-lane tuples.

use super::Simd;
use crate::compute::element::SimdElement;
use crate::compute::simd_abstraction::pack::Pack;
use crate::lane::InBase;

impl<T: SimdElement, W: Pack<T, 4>> Simd<T, 4, W> {
    #[inline]
    pub fn new(x: T, y: T, z: T, w: T) -> Self {
        Self::from_array([x, y, z, w])
    }

    #[inline]
    pub fn x(&self) -> InBase<T> {
        self.get_value::<0>()
    }

    #[inline]
    pub fn y(&self) -> InBase<T> {
        self.get_value::<1>()
    }

    #[inline]
    pub fn z(&self) -> InBase<T> {
        self.get_value::<2>()
    }

    #[inline]
    pub fn w(&self) -> InBase<T> {
        self.get_value::<3>()
    }

    /// Lane `i` of the result is lane `[A, B, C, D][i]` of `self`.
    #[inline]
    pub fn shuffle<const A: usize, const B: usize, const C: usize, const D: usize>(&self) -> Self {
        const { assert!(A < 4 && B < 4 && C < 4 && D < 4, "shuffle index out of range") };
        self.permute([A, B, C, D])
    }

    #[inline]
    pub fn dot4(&self, other: &Self) -> InBase<T> {
        (*self * *other).hadd()
    }
}
