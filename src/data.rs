//! Plain-memory forms of a tuple.
//!
//! [`Data`] is the flat, unaligned, unpadded layout: exactly
//! `N * size_of::<T>()` bytes, lane 0 first, native endianness. It is the
//! form to write to disk, hand across an FFI boundary or cast from a byte
//! buffer. [`DataPad`] is aligned and padded to the register size of the
//! tuple, so loading from it never splits a register; its padding lanes are
//! zero.
//!
//! Both are produced from a live tuple with `store`/`store_pad` and turned
//! back into one with `load::<W>()`, where `W` is a requested width:
//!
//! ```
//! use simd_tuples::prelude::*;
//!
//! let t = Simd3::<f32>::new(1.0, 2.0, 3.0);
//! let data = t.store();
//! assert_eq!(data.as_bytes().len(), 12);
//! assert_eq!(data.load::<Scalar>(), t);
//! assert_eq!(t.store_pad().load::<B64>(), t);
//! ```

use std::fmt;

use bytemuck::{Pod, Zeroable};

use crate::compute::element::SimdElement;
use crate::compute::simd_abstraction::pack::Pack;
use crate::compute::{Resolve, Resolved};
use crate::error::{Result, TupleError};
use crate::tuple::Simd;

/// `N` values of `T`, back to back, with no padding or extra alignment.
#[derive(Clone, Copy, PartialEq)]
#[repr(C)]
pub struct Data<T: SimdElement, const N: usize> {
    values: [T; N],
}

// SAFETY: `repr(C)` around a single array of `Pod` elements has no padding
// and every bit pattern of it is valid.
unsafe impl<T: SimdElement, const N: usize> Zeroable for Data<T, N> {}
unsafe impl<T: SimdElement, const N: usize> Pod for Data<T, N> {}

impl<T: SimdElement, const N: usize> Data<T, N> {
    pub const fn new(values: [T; N]) -> Self {
        Self { values }
    }

    pub fn values(&self) -> &[T; N] {
        &self.values
    }

    pub fn values_mut(&mut self) -> &mut [T; N] {
        &mut self.values
    }

    pub fn as_bytes(&self) -> &[u8] {
        bytemuck::bytes_of(self)
    }

    /// Reads a `Data` from exactly `N * size_of::<T>()` bytes. The buffer
    /// needs no particular alignment.
    pub fn from_bytes(bytes: &[u8]) -> Result<Self> {
        bytemuck::try_pod_read_unaligned(bytes).map_err(|_| TupleError::ByteLength {
            expected: std::mem::size_of::<Self>(),
            actual: bytes.len(),
        })
    }

    /// Tuple at the requested width `W`.
    #[inline]
    pub fn load<W: Resolve<T, N>>(&self) -> Simd<T, N, Resolved<T, N, W>> {
        Simd::from_array(self.values)
    }
}

impl<T: SimdElement, const N: usize> Default for Data<T, N> {
    fn default() -> Self {
        Zeroable::zeroed()
    }
}

impl<T: SimdElement, const N: usize> fmt::Debug for Data<T, N> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Data{:?}", self.values)
    }
}

impl<T: SimdElement, const N: usize> From<[T; N]> for Data<T, N> {
    fn from(values: [T; N]) -> Self {
        Self::new(values)
    }
}

/// Zero-sized alignment carriers for [`DataPad`].
#[derive(Debug, Clone, Copy, Default)]
#[repr(C, align(16))]
pub struct Align16;

#[derive(Debug, Clone, Copy, Default)]
#[repr(C, align(32))]
pub struct Align32;

#[derive(Debug, Clone, Copy, Default)]
#[repr(C, align(64))]
pub struct Align64;

/// Padded storage layout of `N` lanes of an element type.
///
/// The padded size is the tuple's byte size rounded up to a power of two
/// (at least 16 bytes) while that stays within 64 bytes, and rounded up to a
/// multiple of 64 beyond that. The alignment is the padded size capped at 64.
pub trait PadLayout<const N: usize>: SimdElement {
    /// `[Self; P]` with `P >= N` lanes.
    type Padded: Pod + AsRef<[Self]> + AsMut<[Self]>;
    type Align: Copy + Default + fmt::Debug;
}

macro_rules! pad_layout {
    ($($t:ty: $(($n:literal => $p:literal, $align:ident)),*;)*) => {$($(
        impl PadLayout<$n> for $t {
            type Padded = [$t; $p];
            type Align = $align;
        }
    )*)*};
}

pad_layout! {
    f32: (2 => 4, Align16), (3 => 4, Align16), (4 => 4, Align16), (6 => 8, Align32),
         (8 => 8, Align32), (9 => 16, Align64), (12 => 16, Align64), (16 => 16, Align64);
    i32: (2 => 4, Align16), (3 => 4, Align16), (4 => 4, Align16), (6 => 8, Align32),
         (8 => 8, Align32), (9 => 16, Align64), (12 => 16, Align64), (16 => 16, Align64);
    u32: (2 => 4, Align16), (3 => 4, Align16), (4 => 4, Align16), (6 => 8, Align32),
         (8 => 8, Align32), (9 => 16, Align64), (12 => 16, Align64), (16 => 16, Align64);
    f64: (2 => 2, Align16), (3 => 4, Align32), (4 => 4, Align32), (6 => 8, Align64),
         (8 => 8, Align64), (9 => 16, Align64), (12 => 16, Align64), (16 => 16, Align64);
    i64: (2 => 2, Align16), (3 => 4, Align32), (4 => 4, Align32), (6 => 8, Align64),
         (8 => 8, Align64), (9 => 16, Align64), (12 => 16, Align64), (16 => 16, Align64);
    u64: (2 => 2, Align16), (3 => 4, Align32), (4 => 4, Align32), (6 => 8, Align64),
         (8 => 8, Align64), (9 => 16, Align64), (12 => 16, Align64), (16 => 16, Align64);
}

/// `N` values of `T` followed by zero padding, aligned for register loads.
#[repr(C)]
pub struct DataPad<T: PadLayout<N>, const N: usize> {
    values: T::Padded,
    _align: [T::Align; 0],
}

impl<T: PadLayout<N>, const N: usize> Clone for DataPad<T, N> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<T: PadLayout<N>, const N: usize> Copy for DataPad<T, N> {}

impl<T: PadLayout<N>, const N: usize> DataPad<T, N> {
    /// Padded storage holding `values`, padding lanes zero.
    pub fn new(values: [T; N]) -> Self {
        let mut pad = Self::default();
        pad.values.as_mut()[..N].copy_from_slice(&values);
        pad
    }

    /// The `N` live lanes.
    pub fn values(&self) -> &[T] {
        &self.values.as_ref()[..N]
    }

    /// All lanes including the padding.
    pub fn padded(&self) -> &[T] {
        self.values.as_ref()
    }

    fn lanes(&self) -> [T; N] {
        let mut out = [T::ZERO; N];
        out.copy_from_slice(self.values());
        out
    }

    /// Tuple at the requested width `W`.
    #[inline]
    pub fn load<W: Resolve<T, N>>(&self) -> Simd<T, N, Resolved<T, N, W>> {
        Simd::from_array(self.lanes())
    }

    /// The unpadded form of the same lanes.
    pub fn to_data(&self) -> Data<T, N> {
        Data::new(self.lanes())
    }
}

impl<T: PadLayout<N>, const N: usize> Default for DataPad<T, N> {
    fn default() -> Self {
        Self {
            values: Zeroable::zeroed(),
            _align: [],
        }
    }
}

impl<T: PadLayout<N>, const N: usize> PartialEq for DataPad<T, N> {
    fn eq(&self, other: &Self) -> bool {
        self.values() == other.values()
    }
}

impl<T: PadLayout<N>, const N: usize> fmt::Debug for DataPad<T, N> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "DataPad{:?}", self.values())
    }
}

impl<T: SimdElement, const N: usize, W: Pack<T, N>> Simd<T, N, W> {
    /// Flat copy of the lanes.
    #[inline]
    pub fn store(&self) -> Data<T, N> {
        Data::new(self.to_array())
    }

    /// Aligned, zero-padded copy of the lanes.
    #[inline]
    pub fn store_pad(&self) -> DataPad<T, N>
    where
        T: PadLayout<N>,
    {
        DataPad::new(self.to_array())
    }

    /// Overwrites every lane from `data`.
    #[inline]
    pub fn load_from(&mut self, data: &Data<T, N>) {
        *self = Self::from_array(data.values);
    }
}
