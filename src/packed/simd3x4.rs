use super::Simd3xN;
use crate::compute::element::SimdElement;
use crate::compute::simd_abstraction::pack::Pack;
use crate::tuple::Simd;

impl<T: SimdElement, W: Pack<T, 4>> Simd3xN<T, 4, W> {
    #[inline]
    pub fn new<W3: Pack<T, 3>>(
        v0: Simd<T, 3, W3>,
        v1: Simd<T, 3, W3>,
        v2: Simd<T, 3, W3>,
        v3: Simd<T, 3, W3>,
    ) -> Self {
        let lanes = [v0, v1, v2, v3].map(|v| v.to_array());
        Self::from_interleaved(&std::array::from_fn::<T, 12, _>(|i| lanes[i / 3][i % 3]))
    }
}

#[cfg(test)]
mod tests {
    use crate::compute::Scalar;
    use crate::prelude::*;

    #[test]
    fn twelve_lane_round_trip_across_widths() {
        let flat = Simd12::<f32>::from_array(core::array::from_fn(|i| i as f32 - 5.5));
        let packed = flat.pack();
        assert_eq!(packed.transpose(), flat);
        let scalar = Simd3x4::<f32, Scalar>::from_unpacked(&flat);
        assert_eq!(scalar, packed);
        assert_eq!(scalar.store(), packed.store());
        assert_eq!(Simd3x4::<f32>::from_data(&packed.store()), packed);
    }

    #[test]
    fn operators_against_base_and_three_vectors() {
        let p = Simd3x4::<f64>::splat3(Simd3::<f64>::new(1.0, 2.0, 3.0));
        let q = p * BaseOf::<f64, 4>::new(2.0) - Simd3::<f64>::new(1.0, 1.0, 1.0);
        assert_eq!(q.get_value3::<3>(), Simd3::<f64>::new(1.0, 3.0, 5.0));
        assert_eq!(q.hadd3(), Simd3::<f64>::new(4.0, 12.0, 20.0));
        assert_eq!((q / 2.0).get_value3::<0>(), Simd3::<f64>::new(0.5, 1.5, 2.5));
    }
}
