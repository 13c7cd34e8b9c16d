//! Twelve-lane tuples: four 3-vectors or three 4-lane groups.

use super::Simd;
use crate::compute::element::SimdElement;
use crate::compute::simd_abstraction::pack::Pack;

impl<T: SimdElement, W: Pack<T, 12>> Simd<T, 12, W> {
    #[inline]
    pub fn from_vectors<W3: Pack<T, 3>>(vectors: [Simd<T, 3, W3>; 4]) -> Self {
        let lanes = vectors.map(|v| v.to_array());
        Self::from_array(std::array::from_fn(|i| lanes[i / 3][i % 3]))
    }

    /// The same selection applied to every 3-vector.
    #[inline]
    pub fn shuffle3<const A: usize, const B: usize, const C: usize>(&self) -> Self {
        const { assert!(A < 3 && B < 3 && C < 3, "shuffle index out of range") };
        self.shuffle_within([A, B, C])
    }

    /// The same selection applied to every 4-lane group.
    #[inline]
    pub fn shuffle4<const A: usize, const B: usize, const C: usize, const D: usize>(&self) -> Self {
        const { assert!(A < 4 && B < 4 && C < 4 && D < 4, "shuffle index out of range") };
        self.shuffle_within([A, B, C, D])
    }

    /// Reorders the three 4-lane groups.
    #[inline]
    pub fn shuffle_groups3<const A: usize, const B: usize, const C: usize>(&self) -> Self {
        const { assert!(A < 3 && B < 3 && C < 3, "shuffle index out of range") };
        self.shuffle_groups([A, B, C])
    }

    /// Reorders the four 3-vectors.
    #[inline]
    pub fn shuffle_groups4<const A: usize, const B: usize, const C: usize, const D: usize>(
        &self,
    ) -> Self {
        const { assert!(A < 4 && B < 4 && C < 4 && D < 4, "shuffle index out of range") };
        self.shuffle_groups([A, B, C, D])
    }
}
