//! Composite arities: access to sub-tuples and the geometry kernels applied
//! to every consecutive 3-vector of a 6, 9 or 12 lane tuple.

use super::{Mask, Simd};
use crate::compute::element::{SimdElement, SimdFloat};
use crate::compute::simd_abstraction::FloatEngine;
use crate::compute::simd_abstraction::pack::Pack;
use crate::compute::{Resolve, Resolved};

impl<T: SimdElement, const N: usize, W: Pack<T, N>> Simd<T, N, W> {
    /// Lanes `offset..offset + M` as an `M`-lane tuple.
    #[inline]
    pub(crate) fn sub_tuple<const M: usize, W2: Pack<T, M>>(&self, offset: usize) -> Simd<T, M, W2> {
        if offset == 0 {
            return self.resize();
        }
        // Every slot reads from the sub-tuple so whole registers stay single-source.
        self.permute(std::array::from_fn(|i| offset + i % M)).resize()
    }

    /// Overwrites lanes `offset..offset + M`.
    #[inline]
    pub(crate) fn set_sub_tuple<const M: usize, W2: Pack<T, M>>(
        &mut self,
        offset: usize,
        value: Simd<T, M, W2>,
    ) {
        let placed = value.resize::<N, W>().permute(std::array::from_fn(|i| {
            if (offset..offset + M).contains(&i) {
                i - offset
            } else {
                (i + N - offset) % M
            }
        }));
        let mask = Mask::from_bits(((1u32 << M) - 1) << offset);
        *self = self.blend_var(&placed, &mask);
    }
}

// (arity, sub-tuple arity, getter, setter)
macro_rules! sub_tuple_access {
    ($(($n:literal, $m:literal, $get:ident, $set:ident)),* $(,)?) => {$(
        impl<T: SimdElement, W: Pack<T, $n> + Resolve<T, $m>> Simd<T, $n, W> {
            #[doc = concat!("Sub-tuple `I`, lanes `I * ", stringify!($m), "` onwards.")]
            #[inline]
            pub fn $get<const I: usize>(&self) -> Simd<T, $m, Resolved<T, $m, W>> {
                const { assert!(I < $n / $m, "sub-tuple index out of range") };
                self.sub_tuple(I * $m)
            }

            #[doc = concat!("Overwrites sub-tuple `I` of ", stringify!($m), " lanes.")]
            #[inline]
            pub fn $set<const I: usize>(&mut self, value: Simd<T, $m, Resolved<T, $m, W>>) {
                const { assert!(I < $n / $m, "sub-tuple index out of range") };
                self.set_sub_tuple(I * $m, value);
            }
        }
    )*};
}

sub_tuple_access!(
    (4, 2, get_value2, set_value2),
    (6, 2, get_value2, set_value2),
    (6, 3, get_value3, set_value3),
    (8, 2, get_value2, set_value2),
    (8, 4, get_value4, set_value4),
    (9, 3, get_value3, set_value3),
    (12, 2, get_value2, set_value2),
    (12, 3, get_value3, set_value3),
    (12, 4, get_value4, set_value4),
    (16, 2, get_value2, set_value2),
    (16, 4, get_value4, set_value4),
);

impl<T: SimdFloat, const N: usize, W: FloatEngine<T> + Pack<T, N>> Simd<T, N, W> {
    /// Right-handed cross product of every 3-vector with the matching one
    /// of `other`.
    #[inline]
    pub(crate) fn cross3_groups(&self, other: &Self) -> Self {
        let a_yzx = self.shuffle_within([1, 2, 0]);
        let a_zxy = self.shuffle_within([2, 0, 1]);
        let b_yzx = other.shuffle_within([1, 2, 0]);
        let b_zxy = other.shuffle_within([2, 0, 1]);
        a_yzx.msub(b_zxy, a_zxy * b_yzx)
    }

    /// Every 3-vector divided by its own length.
    #[inline]
    pub(crate) fn normalize3_groups(&self) -> Self {
        const { assert!(N % 3 == 0, "arity is not a multiple of 3") };
        let sq = (*self * *self).to_array();
        let lengths = std::array::from_fn(|i| {
            let g = i - i % 3;
            sq[g].lane_add(sq[g + 1]).lane_add(sq[g + 2]).lane_sqrt()
        });
        *self / Self::from_array(lengths)
    }
}

// (arity, vector count): one dot/length per 3-vector.
macro_rules! grouped_geometry {
    ($(($n:literal, $g:literal)),* $(,)?) => {$(
        impl<T, W> Simd<T, $n, W>
        where
            T: SimdFloat,
            W: FloatEngine<T> + Pack<T, $n> + Resolve<T, $g>,
            Resolved<T, $g, W>: FloatEngine<T>,
        {
            #[doc = concat!("Dot product of each of the ", stringify!($g), " 3-vectors.")]
            #[inline]
            pub fn dot3(&self, other: &Self) -> Simd<T, $g, Resolved<T, $g, W>> {
                (*self * *other).sum_groups()
            }

            #[inline]
            pub fn length_sqr(&self) -> Simd<T, $g, Resolved<T, $g, W>> {
                self.dot3(self)
            }

            #[inline]
            pub fn length(&self) -> Simd<T, $g, Resolved<T, $g, W>> {
                self.length_sqr().sqrt()
            }

            /// Right-handed cross product per 3-vector.
            #[inline]
            pub fn cross3(&self, other: &Self) -> Self {
                self.cross3_groups(other)
            }

            /// Each 3-vector scaled to unit length. Vectors at or near zero
            /// length give unspecified lanes.
            #[inline]
            pub fn normalize(&self) -> Self {
                self.normalize3_groups()
            }
        }
    )*};
}

grouped_geometry!((6, 2), (9, 3), (12, 4));

#[cfg(test)]
mod tests {
    use approx::assert_relative_eq;

    use crate::prelude::*;

    #[test]
    fn sub_tuples_by_group_index() {
        let mut a = Simd12::<f32>::from_array(core::array::from_fn(|i| i as f32));
        assert_eq!(a.get_value3::<2>(), Simd3::<f32>::new(6.0, 7.0, 8.0));
        assert_eq!(a.get_value4::<1>(), Simd4::<f32>::new(4.0, 5.0, 6.0, 7.0));
        a.set_value2::<5>(Simd2::<f32>::new(-1.0, -2.0));
        assert_eq!(a.get_value::<10>(), -1.0);
        assert_eq!(a.get_value::<11>(), -2.0);
        assert_eq!(a.get_value::<9>(), 9.0);
    }

    #[test]
    fn grouped_cross_is_right_handed() {
        let x = Simd6::<f64>::from_array([1.0, 0.0, 0.0, 0.0, 1.0, 0.0]);
        let y = Simd6::<f64>::from_array([0.0, 1.0, 0.0, 0.0, 0.0, 1.0]);
        // x × y = z, y × z = x
        assert_eq!(x.cross3(&y).to_array(), [0.0, 0.0, 1.0, 1.0, 0.0, 0.0]);
    }

    #[test]
    fn grouped_lengths_and_normalize() {
        let v = Simd9::<f32>::from_array([3.0, 4.0, 0.0, 0.0, 0.0, 2.0, 1.0, 2.0, 2.0]);
        assert_eq!(v.length_sqr(), Simd3::<f32>::new(25.0, 4.0, 9.0));
        assert_eq!(v.length(), Simd3::<f32>::new(5.0, 2.0, 3.0));
        let n = v.normalize();
        for len in n.length().to_array() {
            assert_relative_eq!(len, 1.0, epsilon = 1e-6);
        }
        assert_relative_eq!(n.get_value::<0>().value(), 0.6, epsilon = 1e-6);
    }

    #[test]
    fn grouped_dot_is_symmetric() {
        let a = Simd12::<f32>::from_array(core::array::from_fn(|i| i as f32 * 0.5 - 2.0));
        let b = Simd12::<f32>::from_array(core::array::from_fn(|i| 3.0 - i as f32));
        assert_eq!(a.dot3(&b), b.dot3(&a));
    }

    /// Sub-tuples that straddle register boundaries read and write the
    /// same lanes at every width.
    macro_rules! straddling_sub_tuples_at {
        ($name:ident, $w:ty) => {
            #[test]
            fn $name() {
                let lanes: [f64; 12] = core::array::from_fn(|i| i as f64);
                let mut a = Simd12::<f64, $w>::from_array(lanes);
                assert_eq!(a.get_value3::<1>().to_array(), [3.0, 4.0, 5.0]);
                assert_eq!(a.get_value3::<3>().to_array(), [9.0, 10.0, 11.0]);
                assert_eq!(a.get_value4::<1>().to_array(), [4.0, 5.0, 6.0, 7.0]);
                assert_eq!(a.get_value2::<3>().to_array(), [6.0, 7.0]);

                a.set_value3::<1>(Simd3::<f64, $w>::new(-3.0, -4.0, -5.0));
                a.set_value4::<2>(Simd4::<f64, $w>::new(-8.0, -9.0, -10.0, -11.0));
                let expected: [f64; 12] =
                    core::array::from_fn(|i| if (3..6).contains(&i) || i >= 8 { -(i as f64) } else { i as f64 });
                assert_eq!(a.to_array(), expected);

                let mut b = Simd9::<f32, $w>::from_array(core::array::from_fn(|i| i as f32));
                b.set_value3::<2>(b.get_value3::<0>());
                assert_eq!(b.to_array(), [0.0, 1.0, 2.0, 3.0, 4.0, 5.0, 0.0, 1.0, 2.0]);
            }
        };
    }
    straddling_sub_tuples_at!(straddling_sub_tuples_scalar, Scalar);
    straddling_sub_tuples_at!(straddling_sub_tuples_b16, B16);
    straddling_sub_tuples_at!(straddling_sub_tuples_b32, B32);
    straddling_sub_tuples_at!(straddling_sub_tuples_b64, B64);

    #[test]
    fn grouped_cross_agrees_across_widths() {
        let a: [f32; 12] = core::array::from_fn(|i| i as f32 * 0.25 - 1.0);
        let b: [f32; 12] = core::array::from_fn(|i| 2.0 - (i * i) as f32 * 0.1);
        let reference = Simd12::<f32, Scalar>::from_array(a)
            .cross3(&Simd12::<f32, Scalar>::from_array(b))
            .to_array();
        let widths = [
            Simd12::<f32, B16>::from_array(a).cross3(&Simd12::<f32, B16>::from_array(b)).to_array(),
            Simd12::<f32, B32>::from_array(a).cross3(&Simd12::<f32, B32>::from_array(b)).to_array(),
            Simd12::<f32, B64>::from_array(a).cross3(&Simd12::<f32, B64>::from_array(b)).to_array(),
        ];
        for lanes in widths {
            for (got, want) in lanes.into_iter().zip(reference) {
                assert_relative_eq!(got, want, epsilon = 1e-5);
            }
        }
        let v = Simd3::<f64, B16>::new(1.0, 2.0, 3.0);
        let w = Simd3::<f64, B16>::new(-2.0, 0.5, 4.0);
        assert_eq!(v.cross3(&w).to_array(), [6.5, -10.0, 4.5]);
    }
}
