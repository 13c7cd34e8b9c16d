//! Eight-lane tuples.

use super::Simd;
use crate::compute::element::SimdElement;
use crate::compute::simd_abstraction::pack::Pack;

impl<T: SimdElement, W: Pack<T, 8>> Simd<T, 8, W> {
    #[allow(clippy::too_many_arguments)]
    #[inline]
    pub fn new(v0: T, v1: T, v2: T, v3: T, v4: T, v5: T, v6: T, v7: T) -> Self {
        Self::from_array([v0, v1, v2, v3, v4, v5, v6, v7])
    }

    /// Lane `i` of the result is lane `[A, B, C, D, E, F, G, H][i]` of `self`.
    #[inline]
    pub fn shuffle<
        const A: usize,
        const B: usize,
        const C: usize,
        const D: usize,
        const E: usize,
        const F: usize,
        const G: usize,
        const H: usize,
    >(
        &self,
    ) -> Self {
        const {
            assert!(
                A < 8 && B < 8 && C < 8 && D < 8 && E < 8 && F < 8 && G < 8 && H < 8,
                "shuffle index out of range"
            )
        };
        self.permute([A, B, C, D, E, F, G, H])
    }

    /// The same selection applied to both halves.
    #[inline]
    pub fn shuffle4<const A: usize, const B: usize, const C: usize, const D: usize>(&self) -> Self {
        const { assert!(A < 4 && B < 4 && C < 4 && D < 4, "shuffle index out of range") };
        self.shuffle_within([A, B, C, D])
    }
}

#[cfg(test)]
mod tests {
    use crate::prelude::*;

    #[test]
    fn halves_and_pairs() {
        let a = Simd8::<f32>::new(1.0, 2.0, 3.0, 4.0, 5.0, 6.0, 7.0, 8.0);
        assert_eq!(a.add4(), Simd4::<f32>::new(6.0, 8.0, 10.0, 12.0));
        assert_eq!(a.hadd4(), Simd2::<f32>::new(10.0, 26.0));
        assert_eq!(a.add2(), Simd2::<f32>::new(16.0, 20.0));
        assert_eq!(a.hadd2(), Simd4::<f32>::new(3.0, 7.0, 11.0, 15.0));
        assert_eq!(a.get_value4::<1>(), Simd4::<f32>::new(5.0, 6.0, 7.0, 8.0));
        assert_eq!(a.hadd(), 36.0);
    }

    #[test]
    fn static_shuffles() {
        let a = Simd8::<u32>::new(0, 1, 2, 3, 4, 5, 6, 7);
        assert_eq!(
            a.shuffle::<7, 6, 5, 4, 3, 2, 1, 0>().to_array(),
            [7, 6, 5, 4, 3, 2, 1, 0]
        );
        assert_eq!(a.shuffle4::<3, 2, 1, 0>().to_array(), [3, 2, 1, 0, 7, 6, 5, 4]);
    }
}
