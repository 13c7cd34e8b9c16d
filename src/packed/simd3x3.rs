use super::Simd3xN;
use crate::compute::element::SimdElement;
use crate::compute::simd_abstraction::pack::Pack;
use crate::tuple::Simd;

impl<T: SimdElement, W: Pack<T, 3>> Simd3xN<T, 3, W> {
    #[inline]
    pub fn new<W3: Pack<T, 3>>(v0: Simd<T, 3, W3>, v1: Simd<T, 3, W3>, v2: Simd<T, 3, W3>) -> Self {
        let (a, b, c) = (v0.to_array(), v1.to_array(), v2.to_array());
        Self::from_interleaved(&[a[0], a[1], a[2], b[0], b[1], b[2], c[0], c[1], c[2]])
    }
}
