//! Packed 3-vector batches.
//!
//! `Simd3xN<T, K, W>` holds `K` 3-vectors in structure-of-arrays form: one
//! `K`-lane row per component. Every kernel then works on whole rows, so a
//! dot product over four vectors is three multiplies and two adds on full
//! registers instead of four horizontal reductions. The unpacked form of the
//! same batch is a `3K`-lane tuple with the vectors laid end to end, which is
//! also the lane order of the `Data` they store to.
//!
//! | alias        | vectors | unpacked  |
//! |--------------|---------|-----------|
//! | `Simd3x2<T>` | 2       | `Simd6`   |
//! | `Simd3x3<T>` | 3       | `Simd9`   |
//! | `Simd3x4<T>` | 4       | `Simd12`  |

mod simd3x2;
mod simd3x3;
mod simd3x4;

use std::fmt;
use std::ops::{Add, AddAssign, Div, DivAssign, Mul, MulAssign, Neg, Sub, SubAssign};

use crate::compute::element::{SimdElement, SimdFloat};
use crate::compute::simd_abstraction::pack::Pack;
use crate::compute::simd_abstraction::{FloatEngine, SimdEngine};
use crate::compute::{B64, Resolve, Resolved};
use crate::data::{Data, DataPad, PadLayout};
use crate::lane::{Base, InBase};
use crate::tuple::Simd;

/// `K` 3-vectors stored as three `K`-lane rows.
pub struct Simd3xN<T: SimdElement, const K: usize, W: Pack<T, K>> {
    pub x: Simd<T, K, W>,
    pub y: Simd<T, K, W>,
    pub z: Simd<T, K, W>,
}

pub type Simd3x2<T, W = B64> = Simd3xN<T, 2, Resolved<T, 2, W>>;
pub type Simd3x3<T, W = B64> = Simd3xN<T, 3, Resolved<T, 3, W>>;
pub type Simd3x4<T, W = B64> = Simd3xN<T, 4, Resolved<T, 4, W>>;

impl<T: SimdElement, const K: usize, W: Pack<T, K>> Clone for Simd3xN<T, K, W> {
    #[inline(always)]
    fn clone(&self) -> Self {
        *self
    }
}

impl<T: SimdElement, const K: usize, W: Pack<T, K>> Copy for Simd3xN<T, K, W> {}

impl<T: SimdElement, const K: usize, W: Pack<T, K>> Simd3xN<T, K, W> {
    /// Number of packed 3-vectors.
    pub const VECTORS: usize = K;

    #[inline]
    pub fn from_rows(x: Simd<T, K, W>, y: Simd<T, K, W>, z: Simd<T, K, W>) -> Self {
        Self { x, y, z }
    }

    #[inline]
    pub fn zero() -> Self {
        let row = Simd::zero();
        Self::from_rows(row, row, row)
    }

    /// Every packed vector equal to `v`.
    #[inline]
    pub fn splat3<W3: Pack<T, 3>>(v: Simd<T, 3, W3>) -> Self {
        let [x, y, z] = v.to_array();
        Self::from_rows(Simd::splat(x), Simd::splat(y), Simd::splat(z))
    }

    #[inline(always)]
    fn map_rows(self, f: impl Fn(Simd<T, K, W>) -> Simd<T, K, W>) -> Self {
        Self::from_rows(f(self.x), f(self.y), f(self.z))
    }

    #[inline(always)]
    fn zip_rows(
        self,
        other: Self,
        f: impl Fn(Simd<T, K, W>, Simd<T, K, W>) -> Simd<T, K, W>,
    ) -> Self {
        Self::from_rows(f(self.x, other.x), f(self.y, other.y), f(self.z, other.z))
    }

    /// Builds the batch from `3K` lanes holding the vectors end to end.
    pub(crate) fn from_interleaved(lanes: &[T]) -> Self {
        let row = |c: usize| Simd::from_array(std::array::from_fn(|k| lanes[3 * k + c]));
        Self::from_rows(row(0), row(1), row(2))
    }

    /// Writes the vectors end to end into the first `3K` lanes of `out`.
    pub(crate) fn write_interleaved(&self, out: &mut [T]) {
        let (x, y, z) = (self.x.to_array(), self.y.to_array(), self.z.to_array());
        for k in 0..K {
            out[3 * k..3 * k + 3].copy_from_slice(&[x[k], y[k], z[k]]);
        }
    }

    /// Vector `index` as a lane array.
    #[inline]
    fn vector(&self, index: usize) -> [T; 3] {
        [
            self.x.get_value_dyn(index).value(),
            self.y.get_value_dyn(index).value(),
            self.z.get_value_dyn(index).value(),
        ]
    }

    #[inline]
    fn set_vector(&mut self, index: usize, [x, y, z]: [T; 3]) {
        self.x.set_value_dyn(index, x);
        self.y.set_value_dyn(index, y);
        self.z.set_value_dyn(index, z);
    }

    /// `self * b + c` per lane.
    #[inline]
    pub fn mad(self, b: Self, c: Self) -> Self {
        Self::from_rows(
            self.x.mad(b.x, c.x),
            self.y.mad(b.y, c.y),
            self.z.mad(b.z, c.z),
        )
    }

    /// `self * b - c` per lane.
    #[inline]
    pub fn msub(self, b: Self, c: Self) -> Self {
        Self::from_rows(
            self.x.msub(b.x, c.x),
            self.y.msub(b.y, c.y),
            self.z.msub(b.z, c.z),
        )
    }

    /// Multiplies vector `k` by lane `k` of `factors`.
    #[inline]
    pub fn scale(self, factors: Simd<T, K, W>) -> Self {
        self.map_rows(|row| row * factors)
    }

    #[inline]
    pub fn min(self, other: Self) -> Self {
        self.zip_rows(other, |a, b| a.min(b))
    }

    #[inline]
    pub fn max(self, other: Self) -> Self {
        self.zip_rows(other, |a, b| a.max(b))
    }

    #[inline]
    pub fn abs(self) -> Self {
        self.map_rows(|row| row.abs())
    }

    /// Dot product of every vector with the matching one of `other`.
    #[inline]
    pub fn dot3(&self, other: &Self) -> Simd<T, K, W> {
        self.z.mad(other.z, self.y.mad(other.y, self.x * other.x))
    }

    #[inline]
    pub fn length_sqr(&self) -> Simd<T, K, W> {
        self.dot3(self)
    }

    /// Right-handed cross product per vector.
    #[inline]
    pub fn cross3(&self, other: &Self) -> Self {
        Self::from_rows(
            self.y.msub(other.z, self.z * other.y),
            self.z.msub(other.x, self.x * other.z),
            self.x.msub(other.y, self.y * other.x),
        )
    }
}

impl<T, const K: usize, W> Simd3xN<T, K, W>
where
    T: SimdElement,
    W: Pack<T, K> + Resolve<T, 3>,
{
    /// Vector `I`.
    #[inline]
    pub fn get_value3<const I: usize>(&self) -> Simd<T, 3, Resolved<T, 3, W>> {
        const { assert!(I < K, "vector index out of range") };
        Simd::from_array(self.vector(I))
    }

    /// Overwrites vector `I`.
    #[inline]
    pub fn set_value3<const I: usize>(&mut self, value: Simd<T, 3, Resolved<T, 3, W>>) {
        const { assert!(I < K, "vector index out of range") };
        self.set_vector(I, value.to_array());
    }

    /// Runtime-indexed [`Simd3xN::get_value3`].
    ///
    /// # Panics
    ///
    /// Panics if `index >= K`.
    pub fn get_value3_dyn(&self, index: usize) -> Simd<T, 3, Resolved<T, 3, W>> {
        assert!(index < K, "vector index {index} out of range for {K} vectors");
        Simd::from_array(self.vector(index))
    }

    /// Sum of the packed vectors.
    #[inline]
    pub fn hadd3(&self) -> Simd<T, 3, Resolved<T, 3, W>> {
        Simd::from_array([
            self.x.hadd().value(),
            self.y.hadd().value(),
            self.z.hadd().value(),
        ])
    }
}

impl<T: SimdFloat, const K: usize, W: FloatEngine<T> + Pack<T, K>> Simd3xN<T, K, W> {
    #[inline]
    pub fn length(&self) -> Simd<T, K, W> {
        self.length_sqr().sqrt()
    }

    /// Every vector scaled to unit length. Vectors at or near zero length
    /// give unspecified lanes.
    #[inline]
    pub fn normalize(&self) -> Self {
        self.scale(self.length_sqr().rsqrt())
    }

    #[inline]
    pub fn sqrt(self) -> Self {
        self.map_rows(|row| row.sqrt())
    }
}

impl<T: SimdElement, const K: usize, W: Pack<T, K>> Default for Simd3xN<T, K, W> {
    fn default() -> Self {
        Self::zero()
    }
}

impl<T: SimdElement, const K: usize, W: Pack<T, K>> fmt::Debug for Simd3xN<T, K, W> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut list = f.debug_list();
        for k in 0..K {
            list.entry(&self.vector(k));
        }
        list.finish()
    }
}

impl<T, const K: usize, W, W2> PartialEq<Simd3xN<T, K, W2>> for Simd3xN<T, K, W>
where
    T: SimdElement,
    W: Pack<T, K>,
    W2: Pack<T, K>,
{
    fn eq(&self, other: &Simd3xN<T, K, W2>) -> bool {
        self.x == other.x && self.y == other.y && self.z == other.z
    }
}

impl<T: SimdElement, const K: usize, W: Pack<T, K>> Neg for Simd3xN<T, K, W> {
    type Output = Self;
    #[inline]
    fn neg(self) -> Self {
        self.map_rows(|row| -row)
    }
}

macro_rules! packed_binary {
    ($bound:ident, $engine:ident, $trait:ident, $method:ident, $assign:ident, $assign_method:ident) => {
        impl<T: $bound, const K: usize, W: $engine<T> + Pack<T, K>> $trait for Simd3xN<T, K, W> {
            type Output = Self;
            #[inline]
            fn $method(self, rhs: Self) -> Self {
                self.zip_rows(rhs, |a, b| a.$method(b))
            }
        }

        impl<T: $bound, const K: usize, W: $engine<T> + Pack<T, K>> $trait<Base<T, W>>
            for Simd3xN<T, K, W>
        {
            type Output = Self;
            #[inline]
            fn $method(self, rhs: Base<T, W>) -> Self {
                self.map_rows(|row| row.$method(rhs))
            }
        }

        impl<T: $bound, const K: usize, W: $engine<T> + Pack<T, K>> $trait<T> for Simd3xN<T, K, W> {
            type Output = Self;
            #[inline]
            fn $method(self, rhs: T) -> Self {
                self.$method(Base::<T, W>::new(rhs))
            }
        }

        impl<T: $bound, const K: usize, W: $engine<T> + Pack<T, K>> $trait<InBase<T>>
            for Simd3xN<T, K, W>
        {
            type Output = Self;
            #[inline]
            fn $method(self, rhs: InBase<T>) -> Self {
                self.$method(Base::<T, W>::new(rhs.value()))
            }
        }

        /// The 3-vector applied to every packed vector.
        impl<T: $bound, const K: usize, W: $engine<T> + Pack<T, K>, W3: Pack<T, 3>>
            $trait<Simd<T, 3, W3>> for Simd3xN<T, K, W>
        {
            type Output = Self;
            #[inline]
            fn $method(self, rhs: Simd<T, 3, W3>) -> Self {
                self.$method(Self::splat3(rhs))
            }
        }

        impl<T: $bound, const K: usize, W: $engine<T> + Pack<T, K>> $assign for Simd3xN<T, K, W> {
            #[inline]
            fn $assign_method(&mut self, rhs: Self) {
                *self = (*self).$method(rhs);
            }
        }

        impl<T: $bound, const K: usize, W: $engine<T> + Pack<T, K>> $assign<Base<T, W>>
            for Simd3xN<T, K, W>
        {
            #[inline]
            fn $assign_method(&mut self, rhs: Base<T, W>) {
                *self = (*self).$method(rhs);
            }
        }

        impl<T: $bound, const K: usize, W: $engine<T> + Pack<T, K>> $assign<T> for Simd3xN<T, K, W> {
            #[inline]
            fn $assign_method(&mut self, rhs: T) {
                *self = (*self).$method(rhs);
            }
        }

        impl<T: $bound, const K: usize, W: $engine<T> + Pack<T, K>, W3: Pack<T, 3>>
            $assign<Simd<T, 3, W3>> for Simd3xN<T, K, W>
        {
            #[inline]
            fn $assign_method(&mut self, rhs: Simd<T, 3, W3>) {
                *self = (*self).$method(rhs);
            }
        }
    };
}

// (vectors, unpacked arity): conversions to and from the end-to-end form.
macro_rules! packed_layout {
    ($(($k:literal, $n:literal)),* $(,)?) => {$(
        impl<T: SimdElement, W: Pack<T, $k>> Simd3xN<T, $k, W> {
            #[doc = concat!("Packs a ", stringify!($n), "-lane tuple holding the vectors end to end.")]
            #[inline]
            pub fn from_unpacked<W2: Pack<T, $n>>(unpacked: &Simd<T, $n, W2>) -> Self {
                Self::from_interleaved(&unpacked.to_array())
            }

            /// Flat copy, vectors end to end.
            #[inline]
            pub fn store(&self) -> Data<T, $n> {
                let mut data = Data::default();
                self.write_interleaved(data.values_mut());
                data
            }

            #[inline]
            pub fn store_pad(&self) -> DataPad<T, $n>
            where
                T: PadLayout<$n>,
            {
                DataPad::new(*self.store().values())
            }

            #[inline]
            pub fn from_data(data: &Data<T, $n>) -> Self {
                Self::from_interleaved(data.values())
            }

            #[inline]
            pub fn from_data_pad(data: &DataPad<T, $n>) -> Self
            where
                T: PadLayout<$n>,
            {
                Self::from_interleaved(data.values())
            }
        }

        impl<T: SimdElement, W: Pack<T, $k> + Resolve<T, $n>> Simd3xN<T, $k, W> {
            /// Back to the end-to-end tuple form.
            #[inline]
            pub fn transpose(&self) -> Simd<T, $n, Resolved<T, $n, W>> {
                Simd::from_array(*self.store().values())
            }
        }

        impl<T: SimdElement, W: Pack<T, $n> + Resolve<T, $k>> Simd<T, $n, W> {
            /// The same vectors in packed form.
            #[inline]
            pub fn pack(&self) -> Simd3xN<T, $k, Resolved<T, $k, W>> {
                Simd3xN::<T, $k, Resolved<T, $k, W>>::from_unpacked(self)
            }
        }
    )*};
}

packed_layout!((2, 6), (3, 9), (4, 12));

packed_binary!(SimdElement, SimdEngine, Add, add, AddAssign, add_assign);
packed_binary!(SimdElement, SimdEngine, Sub, sub, SubAssign, sub_assign);
packed_binary!(SimdElement, SimdEngine, Mul, mul, MulAssign, mul_assign);
packed_binary!(SimdFloat, FloatEngine, Div, div, DivAssign, div_assign);

#[cfg(test)]
mod tests {
    use approx::assert_relative_eq;

    use crate::compute::Scalar;
    use crate::prelude::*;

    fn batch() -> Simd3x4<f32> {
        Simd3x4::<f32>::new(
            Simd3::<f32>::new(1.0, 0.0, 0.0),
            Simd3::<f32>::new(0.0, 2.0, 0.0),
            Simd3::<f32>::new(3.0, 4.0, 0.0),
            Simd3::<f32>::new(1.0, 2.0, 2.0),
        )
    }

    #[test]
    fn packed_kernels_match_per_vector_kernels() {
        let a = batch();
        let b = Simd3x4::<f32>::new(
            Simd3::<f32>::new(0.5, -1.0, 2.0),
            Simd3::<f32>::new(3.0, 0.0, 1.0),
            Simd3::<f32>::new(-2.0, 1.0, 4.0),
            Simd3::<f32>::new(1.0, 1.0, -1.0),
        );
        let dots = a.dot3(&b).to_array();
        let crosses = a.cross3(&b);
        for k in 0..4 {
            let (va, vb) = (a.get_value3_dyn(k), b.get_value3_dyn(k));
            assert_eq!(dots[k], va.dot3(&vb).value());
            assert_eq!(crosses.get_value3_dyn(k), va.cross3(&vb));
        }
        assert_eq!(a.length().to_array(), [1.0, 2.0, 5.0, 3.0]);
    }

    #[test]
    fn normalize_gives_unit_vectors() {
        let n = batch().normalize();
        for len in n.length().to_array() {
            assert_relative_eq!(len, 1.0, epsilon = 1e-6);
        }
        assert_relative_eq!(n.get_value3::<2>().x().value(), 0.6, epsilon = 1e-6);
    }

    #[test]
    fn operators_broadcast_three_vectors_and_scalars() {
        let a = batch();
        let shifted = a + Simd3::<f32>::new(1.0, 1.0, 1.0);
        assert_eq!(shifted.get_value3::<0>(), Simd3::<f32>::new(2.0, 1.0, 1.0));
        let doubled = a * 2.0;
        assert_eq!(doubled.hadd3(), Simd3::<f32>::new(10.0, 16.0, 4.0));
        assert_eq!(-(-a), a);
        let mut c = a;
        c -= a;
        assert_eq!(c, Simd3x4::<f32>::zero());
        assert_eq!(a.mad(a, a), a * a + a);
    }

    #[test]
    fn packed_equality_ignores_width() {
        let a = batch();
        let s = Simd3x4::<f32, Scalar>::new(
            Simd3::<f32>::new(1.0, 0.0, 0.0),
            Simd3::<f32>::new(0.0, 2.0, 0.0),
            Simd3::<f32>::new(3.0, 4.0, 0.0),
            Simd3::<f32>::new(1.0, 2.0, 2.0),
        );
        assert_eq!(a, s);
        assert_eq!(
            format!("{s:?}"),
            "[[1.0, 0.0, 0.0], [0.0, 2.0, 0.0], [3.0, 4.0, 0.0], [1.0, 2.0, 2.0]]"
        );
    }

    macro_rules! pack_round_trip_at {
        ($name:ident, $w:ty) => {
            #[test]
            fn $name() {
                let six = Simd6::<f64, $w>::from_array(core::array::from_fn(|i| i as f64));
                let packed = six.pack();
                assert_eq!(packed.get_value3::<1>().to_array(), [3.0, 4.0, 5.0]);
                assert_eq!(packed.transpose().to_array(), six.to_array());

                let nine = Simd9::<i32, $w>::from_array(core::array::from_fn(|i| 10 - i as i32));
                let packed = nine.pack();
                assert_eq!(packed.get_value3::<2>().to_array(), [4, 3, 2]);
                assert_eq!(packed.transpose().to_array(), nine.to_array());

                let twelve = Simd12::<f32, $w>::from_array(core::array::from_fn(|i| i as f32 * 0.5));
                let packed = twelve.pack();
                assert_eq!(packed, Simd3x4::<f32, $w>::from_unpacked(&twelve));
                assert_eq!(packed.transpose().to_array(), twelve.to_array());
            }
        };
    }
    pack_round_trip_at!(pack_round_trip_scalar, Scalar);
    pack_round_trip_at!(pack_round_trip_b16, B16);
    pack_round_trip_at!(pack_round_trip_b64, B64);

    #[test]
    fn vector_and_lane_counts() {
        assert_eq!(Simd3x2::<f32>::VECTORS, 2);
        assert_eq!(Simd3x3::<f64>::VECTORS, 3);
        assert_eq!(Simd3x4::<i32, Scalar>::VECTORS, 4);
        assert_eq!(Simd12::<f32>::ARITY, 3 * Simd3x4::<f32>::VECTORS);
        assert_eq!(Simd9::<u64, B16>::ARITY, 9);
        assert_eq!(Simd2::<i64>::ARITY, 2);
    }
}
