//! Six-lane tuples: two 3-vectors or three pairs.

use super::Simd;
use crate::compute::element::SimdElement;
use crate::compute::simd_abstraction::pack::Pack;

impl<T: SimdElement, W: Pack<T, 6>> Simd<T, 6, W> {
    #[inline]
    pub fn new(v0: T, v1: T, v2: T, v3: T, v4: T, v5: T) -> Self {
        Self::from_array([v0, v1, v2, v3, v4, v5])
    }

    /// Lane `i` of the result is lane `[A, B, C, D, E, F][i]` of `self`.
    #[inline]
    pub fn shuffle<
        const A: usize,
        const B: usize,
        const C: usize,
        const D: usize,
        const E: usize,
        const F: usize,
    >(
        &self,
    ) -> Self {
        const {
            assert!(
                A < 6 && B < 6 && C < 6 && D < 6 && E < 6 && F < 6,
                "shuffle index out of range"
            )
        };
        self.permute([A, B, C, D, E, F])
    }

    /// The same selection applied to both 3-vectors.
    #[inline]
    pub fn shuffle3<const A: usize, const B: usize, const C: usize>(&self) -> Self {
        const { assert!(A < 3 && B < 3 && C < 3, "shuffle index out of range") };
        self.shuffle_within([A, B, C])
    }

    /// Two 3-vectors laid end to end.
    #[inline]
    pub fn from_vectors<W3: Pack<T, 3>>(v0: Simd<T, 3, W3>, v1: Simd<T, 3, W3>) -> Self {
        let (a, b) = (v0.to_array(), v1.to_array());
        Self::from_array([a[0], a[1], a[2], b[0], b[1], b[2]])
    }
}

#[cfg(test)]
mod tests {
    use crate::prelude::*;

    #[test]
    fn vectors_and_groups() {
        let a = Simd6::<f32>::from_vectors(
            Simd3::<f32>::new(1.0, 2.0, 3.0),
            Simd3::<f32>::new(4.0, 5.0, 6.0),
        );
        assert_eq!(a, Simd6::<f32>::new(1.0, 2.0, 3.0, 4.0, 5.0, 6.0));
        assert_eq!(a.add3(), Simd3::<f32>::new(5.0, 7.0, 9.0));
        assert_eq!(a.hadd3(), Simd2::<f32>::new(6.0, 15.0));
        assert_eq!(a.get_value3::<1>(), Simd3::<f32>::new(4.0, 5.0, 6.0));
        assert_eq!(a.dot3(&a), Simd2::<f32>::new(14.0, 77.0));
    }

    #[test]
    fn static_shuffles() {
        let a = Simd6::<i32>::new(0, 1, 2, 3, 4, 5);
        assert_eq!(a.shuffle::<5, 4, 3, 2, 1, 0>().to_array(), [5, 4, 3, 2, 1, 0]);
        assert_eq!(a.shuffle3::<1, 2, 0>().to_array(), [1, 2, 0, 4, 5, 3]);
    }
}
