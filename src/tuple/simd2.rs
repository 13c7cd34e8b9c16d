//! Two-lane tuples.

use super::Simd;
use crate::compute::element::SimdElement;
use crate::compute::simd_abstraction::pack::Pack;
use crate::lane::InBase;

impl<T: SimdElement, W: Pack<T, 2>> Simd<T, 2, W> {
    #[inline]
    pub fn new(x: T, y: T) -> Self {
        Self::from_array([x, y])
    }

    #[inline]
    pub fn x(&self) -> InBase<T> {
        self.get_value::<0>()
    }

    #[inline]
    pub fn y(&self) -> InBase<T> {
        self.get_value::<1>()
    }

    /// Lane `i` of the result is lane `[A, B][i]` of `self`.
    #[inline]
    pub fn shuffle<const A: usize, const B: usize>(&self) -> Self {
        const { assert!(A < 2 && B < 2, "shuffle index out of range") };
        self.permute([A, B])
    }
}
