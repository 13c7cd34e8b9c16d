//! Nine-lane tuples: three 3-vectors, the unpacked form of `Simd3x3`.

use super::Simd;
use crate::compute::element::SimdElement;
use crate::compute::simd_abstraction::pack::Pack;

impl<T: SimdElement, W: Pack<T, 9>> Simd<T, 9, W> {
    #[inline]
    pub fn from_vectors<W3: Pack<T, 3>>(
        v0: Simd<T, 3, W3>,
        v1: Simd<T, 3, W3>,
        v2: Simd<T, 3, W3>,
    ) -> Self {
        let (a, b, c) = (v0.to_array(), v1.to_array(), v2.to_array());
        Self::from_array([a[0], a[1], a[2], b[0], b[1], b[2], c[0], c[1], c[2]])
    }

    /// The same selection applied to every 3-vector.
    #[inline]
    pub fn shuffle3<const A: usize, const B: usize, const C: usize>(&self) -> Self {
        const { assert!(A < 3 && B < 3 && C < 3, "shuffle index out of range") };
        self.shuffle_within([A, B, C])
    }

    /// Reorders the three 3-vectors.
    #[inline]
    pub fn shuffle_groups3<const A: usize, const B: usize, const C: usize>(&self) -> Self {
        const { assert!(A < 3 && B < 3 && C < 3, "shuffle index out of range") };
        self.shuffle_groups([A, B, C])
    }
}
