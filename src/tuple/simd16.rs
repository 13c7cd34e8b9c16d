//! Sixteen-lane tuples: four 4-lane groups.

use super::Simd;
use crate::compute::element::SimdElement;
use crate::compute::simd_abstraction::pack::Pack;

impl<T: SimdElement, W: Pack<T, 16>> Simd<T, 16, W> {
    #[inline]
    pub fn from_groups<W4: Pack<T, 4>>(groups: [Simd<T, 4, W4>; 4]) -> Self {
        let lanes = groups.map(|g| g.to_array());
        Self::from_array(std::array::from_fn(|i| lanes[i / 4][i % 4]))
    }

    /// The same selection applied to every 4-lane group.
    #[inline]
    pub fn shuffle4<const A: usize, const B: usize, const C: usize, const D: usize>(&self) -> Self {
        const { assert!(A < 4 && B < 4 && C < 4 && D < 4, "shuffle index out of range") };
        self.shuffle_within([A, B, C, D])
    }

    /// Reorders the four 4-lane groups.
    #[inline]
    pub fn shuffle_groups4<const A: usize, const B: usize, const C: usize, const D: usize>(
        &self,
    ) -> Self {
        const { assert!(A < 4 && B < 4 && C < 4 && D < 4, "shuffle index out of range") };
        self.shuffle_groups([A, B, C, D])
    }
}

#[cfg(test)]
mod tests {
    use crate::prelude::*;

    #[test]
    fn groups_round_trip() {
        let g = [
            Simd4::<f32>::new(1.0, 2.0, 3.0, 4.0),
            Simd4::<f32>::splat(1.0),
            Simd4::<f32>::zero(),
            Simd4::<f32>::new(-1.0, -2.0, -3.0, -4.0),
        ];
        let a = Simd16::<f32>::from_groups(g);
        assert_eq!(a.get_value4::<0>(), g[0]);
        assert_eq!(a.get_value4::<3>(), g[3]);
        assert_eq!(a.add4(), Simd4::<f32>::new(1.0, 1.0, 1.0, 1.0));
        assert_eq!(a.hadd4(), Simd4::<f32>::new(10.0, 4.0, 0.0, -10.0));
        assert_eq!(a.hadd(), 4.0);
    }

    #[test]
    fn group_shuffles() {
        let a = Simd16::<u32>::from_array(core::array::from_fn(|i| i as u32));
        let b = a.shuffle_groups4::<3, 2, 1, 0>().shuffle4::<3, 2, 1, 0>();
        assert_eq!(b.to_array(), core::array::from_fn::<u32, 16, _>(|i| 15 - i as u32));
        assert_eq!(a.hmax_index(), (InBase::new(15), 15));
    }
}
