//! Three-lane tuples and the 3-vector kernels.

use super::Simd;
use crate::compute::element::{SimdElement, SimdFloat};
use crate::compute::simd_abstraction::FloatEngine;
use crate::compute::simd_abstraction::pack::Pack;
use crate::lane::{Base, InBase};

impl<T: SimdElement, W: Pack<T, 3>> Simd<T, 3, W> {
    #[inline]
    pub fn new(x: T, y: T, z: T) -> Self {
        Self::from_array([x, y, z])
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

    /// Lane `i` of the result is lane `[A, B, C][i]` of `self`.
    #[inline]
    pub fn shuffle<const A: usize, const B: usize, const C: usize>(&self) -> Self {
        const { assert!(A < 3 && B < 3 && C < 3, "shuffle index out of range") };
        self.permute([A, B, C])
    }

    #[inline]
    pub fn dot3(&self, other: &Self) -> InBase<T> {
        (*self * *other).hadd()
    }

    /// Dot product broadcast at the tuple's width, ready to scale another
    /// tuple without a splat.
    #[inline]
    pub fn dot3_base(&self, other: &Self) -> Base<T, W> {
        (*self * *other).hadd_base()
    }

    #[inline]
    pub fn length_sqr(&self) -> InBase<T> {
        self.dot3(self)
    }
}

impl<T: SimdFloat, W: FloatEngine<T> + Pack<T, 3>> Simd<T, 3, W> {
    /// Right-handed cross product: `x × y = z`.
    #[inline]
    pub fn cross3(&self, other: &Self) -> Self {
        self.cross3_groups(other)
    }

    #[inline]
    pub fn length(&self) -> InBase<T> {
        self.length_sqr().sqrt()
    }

    /// `self / self.length()`.
    ///
    /// The zero vector (or one close to it) gives unspecified lanes: neither
    /// an error nor a guaranteed NaN. Check the length first when that
    /// matters.
    #[inline]
    pub fn normalize(&self) -> Self {
        *self / self.length()
    }
}

#[cfg(test)]
mod tests {
    use approx::assert_relative_eq;

    use crate::compute::Scalar;
    use crate::prelude::*;

    #[test]
    fn dot_and_lengths() {
        let a = Simd3::<f32>::new(1.0, 2.0, 3.0);
        let b = Simd3::<f32>::new(4.0, 5.0, 6.0);
        assert_eq!(a.dot3(&b), 32.0);
        assert_eq!(a.dot3_base(&b).value(), 32.0);
        assert_eq!(Simd3::<f64>::new(2.0, 3.0, 6.0).length(), 7.0);
        assert_eq!(Simd3::<i32>::new(2, 3, 6).length_sqr(), 49);
    }

    #[test]
    fn cross_is_right_handed_and_orthogonal() {
        let x = Simd3::<f32>::new(1.0, 0.0, 0.0);
        let y = Simd3::<f32>::new(0.0, 1.0, 0.0);
        assert_eq!(x.cross3(&y), Simd3::<f32>::new(0.0, 0.0, 1.0));
        assert_eq!(y.cross3(&x), Simd3::<f32>::new(0.0, 0.0, -1.0));

        let a = Simd3::<f64>::new(1.5, -2.0, 0.25);
        let b = Simd3::<f64>::new(-0.5, 4.0, 3.0);
        let c = a.cross3(&b);
        assert_relative_eq!(c.dot3(&a).value(), 0.0, epsilon = 1e-12);
        assert_relative_eq!(c.dot3(&b).value(), 0.0, epsilon = 1e-12);
    }

    #[test]
    fn normalize_is_idempotent() {
        let a = Simd3::<f32>::new(3.0, -4.0, 12.0);
        let n = a.normalize();
        assert_relative_eq!(n.length().value(), 1.0, epsilon = 1e-6);
        let nn = n.normalize();
        for (l, r) in n.to_array().into_iter().zip(nn.to_array()) {
            assert_relative_eq!(l, r, epsilon = 1e-6);
        }
    }

    #[test]
    fn static_shuffle_matches_scalar_width() {
        let a = Simd3::<f32>::new(1.0, 2.0, 3.0);
        let s = Simd3::<f32, Scalar>::new(1.0, 2.0, 3.0);
        assert_eq!(a.shuffle::<2, 0, 1>(), s.shuffle::<2, 0, 1>());
        assert_eq!(a.shuffle::<2, 0, 1>().to_array(), [3.0, 1.0, 2.0]);
        assert_eq!((a.x(), a.y(), a.z()), (InBase::new(1.0), InBase::new(2.0), InBase::new(3.0)));
    }
}
