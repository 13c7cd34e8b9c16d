//! Register-width selection.
//!
//! A tuple is parameterized by a *requested* width. The compile-time table in
//! this module turns `(requested width, element, arity)` into the width that
//! actually backs the tuple: never wider than what the target was compiled
//! for, and never wider than the smallest register that covers the tuple.
//! The runtime side (what the host CPU could do) lives in
//! [`simd_abstraction::simd`](crate::compute::simd_abstraction::simd).

pub mod element;
pub mod simd_abstraction;

use std::fmt;
use std::str::FromStr;

use crate::error::TupleError;
use element::SimdElement;
use simd_abstraction::pack::Pack;

/// Register widths, ordered from narrowest to widest.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum WidthKind {
    /// One element per "register", plain scalar code.
    Scalar,
    /// 128-bit registers (SSE2 on x86_64, NEON on aarch64).
    B16,
    /// 256-bit registers (AVX on x86_64).
    B32,
    /// 512-bit registers (AVX-512F on x86_64, behind the `avx512` feature).
    B64,
}

impl WidthKind {
    pub const ALL: [WidthKind; 4] = [Self::Scalar, Self::B16, Self::B32, Self::B64];

    /// Register size in bits; the scalar width reports 0.
    pub const fn bits(self) -> u32 {
        match self {
            Self::Scalar => 0,
            Self::B16 => 128,
            Self::B32 => 256,
            Self::B64 => 512,
        }
    }

    /// Register size in bytes; the scalar width reports 0.
    pub const fn bytes(self) -> usize {
        self.bits() as usize / 8
    }

    /// Lanes of an `elem_bytes`-wide element in one register.
    pub const fn lanes_for(self, elem_bytes: usize) -> usize {
        match self {
            Self::Scalar => 1,
            _ => self.bytes() / elem_bytes,
        }
    }

    pub const fn index(self) -> u8 {
        match self {
            Self::Scalar => 0,
            Self::B16 => 1,
            Self::B32 => 2,
            Self::B64 => 3,
        }
    }

    const fn from_index(index: u8) -> Self {
        match index {
            0 => Self::Scalar,
            1 => Self::B16,
            2 => Self::B32,
            _ => Self::B64,
        }
    }

    const fn min(self, other: Self) -> Self {
        if self.index() < other.index() { self } else { other }
    }
}

impl fmt::Display for WidthKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Self::Scalar => "scalar",
            Self::B16 => "b16",
            Self::B32 => "b32",
            Self::B64 => "b64",
        })
    }
}

impl FromStr for WidthKind {
    type Err = TupleError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "scalar" | "none" | "0" => Ok(Self::Scalar),
            "b16" | "128" | "sse" | "neon" => Ok(Self::B16),
            "b32" | "256" | "avx" => Ok(Self::B32),
            "b64" | "512" | "avx512" => Ok(Self::B64),
            _ => Err(TupleError::UnknownWidth(s.to_string())),
        }
    }
}

mod sealed {
    pub trait Sealed {}
}

/// Type-level register width. Implemented by the four marker types only.
pub trait Width: sealed::Sealed + Copy + Default + fmt::Debug + Send + Sync + 'static {
    const KIND: WidthKind;
    const BITS: u32 = Self::KIND.bits();
}

/// Scalar marker: one element per register.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub struct Scalar;

/// 128-bit marker.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub struct B16;

/// 256-bit marker.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub struct B32;

/// 512-bit marker.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub struct B64;

macro_rules! impl_width {
    ($($marker:ident => $kind:ident),*) => {$(
        impl sealed::Sealed for $marker {}
        impl Width for $marker {
            const KIND: WidthKind = WidthKind::$kind;
        }
    )*};
}

impl_width!(Scalar => Scalar, B16 => B16, B32 => B32, B64 => B64);

/// Widest register the crate was compiled to drive.
#[cfg(simd_b64)]
pub const TARGET_WIDTH: WidthKind = WidthKind::B64;
#[cfg(all(simd_b32, not(simd_b64)))]
pub const TARGET_WIDTH: WidthKind = WidthKind::B32;
#[cfg(all(simd_b16, not(simd_b32)))]
pub const TARGET_WIDTH: WidthKind = WidthKind::B16;
#[cfg(not(simd_b16))]
pub const TARGET_WIDTH: WidthKind = WidthKind::Scalar;

/// Resolves the width backing a tuple of `arity` elements of `elem_bytes`
/// bytes each, given the width the caller asked for.
///
/// Non-vectorized elements and single lanes always resolve to
/// [`WidthKind::Scalar`]. Otherwise the result is the widest width that is
/// not above `requested`, not above [`TARGET_WIDTH`], and whose register is
/// no larger than the tuple's data rounded up to a power of two (with a
/// 16-byte floor, so small tuples still land in a 128-bit register).
pub const fn resolve_width(
    requested: WidthKind,
    elem_bytes: usize,
    arity: usize,
    vectorized: bool,
) -> WidthKind {
    if !vectorized || arity < 2 {
        return WidthKind::Scalar;
    }
    let cap = requested.min(TARGET_WIDTH);
    let mut useful = (arity * elem_bytes).next_power_of_two();
    if useful < 16 {
        useful = 16;
    }
    let mut index = cap.index();
    while index > 0 && WidthKind::from_index(index).bytes() > useful {
        index -= 1;
    }
    WidthKind::from_index(index)
}

/// Maps a [`WidthKind::index`] back to its marker type.
pub struct WidthSelect<const INDEX: u8>;

pub trait SelectWidth {
    type Width: Width;
}

impl SelectWidth for WidthSelect<0> {
    type Width = Scalar;
}
impl SelectWidth for WidthSelect<1> {
    type Width = B16;
}
impl SelectWidth for WidthSelect<2> {
    type Width = B32;
}
impl SelectWidth for WidthSelect<3> {
    type Width = B64;
}

/// Compile-time width resolution for a tuple of `N` lanes of `T`.
///
/// `<W as Resolve<T, N>>::Impl` is the width marker that backs such a tuple
/// when `W` is requested. The tuple aliases (`Simd4<T, W>` and friends) go
/// through this table, so callers name the width they would like and get the
/// one the target supports.
pub trait Resolve<T: SimdElement, const N: usize>: Width {
    type Impl: Pack<T, N>;
}

/// Shorthand for the resolved implementation width.
pub type Resolved<T, const N: usize, W> = <W as Resolve<T, N>>::Impl;

macro_rules! resolve_arities {
    ($w:ty, $t:ty; $($n:literal),*) => {$(
        impl Resolve<$t, $n> for $w {
            type Impl = <WidthSelect<{
                resolve_width(
                    <$w as Width>::KIND,
                    ::std::mem::size_of::<$t>(),
                    $n,
                    <$t as SimdElement>::VECTORIZED,
                )
                .index()
            }> as SelectWidth>::Width;
        }
    )*};
}

macro_rules! resolve_table {
    ($($w:ty),*) => {$(
        resolve_arities!($w, f32; 2, 3, 4, 6, 8, 9, 12, 16);
        resolve_arities!($w, f64; 2, 3, 4, 6, 8, 9, 12, 16);
        resolve_arities!($w, i32; 2, 3, 4, 6, 8, 9, 12, 16);
        resolve_arities!($w, u32; 2, 3, 4, 6, 8, 9, 12, 16);
        resolve_arities!($w, i64; 2, 3, 4, 6, 8, 9, 12, 16);
        resolve_arities!($w, u64; 2, 3, 4, 6, 8, 9, 12, 16);
    )*};
}

resolve_table!(Scalar, B16, B32, B64);

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn widths_are_ordered() {
        assert!(WidthKind::Scalar < WidthKind::B16);
        assert!(WidthKind::B16 < WidthKind::B32);
        assert!(WidthKind::B32 < WidthKind::B64);
        assert_eq!(B32::BITS, 256);
        assert_eq!(WidthKind::B32.lanes_for(4), 8);
        assert_eq!(WidthKind::B16.lanes_for(8), 2);
        assert_eq!(WidthKind::Scalar.lanes_for(8), 1);
    }

    #[test]
    fn non_vectorized_elements_resolve_to_scalar() {
        assert_eq!(resolve_width(WidthKind::B64, 8, 4, false), WidthKind::Scalar);
        assert_eq!(resolve_width(WidthKind::B64, 4, 1, true), WidthKind::Scalar);
    }

    #[test]
    fn scalar_request_is_honoured() {
        assert_eq!(resolve_width(WidthKind::Scalar, 4, 16, true), WidthKind::Scalar);
    }

    #[test]
    fn resolution_never_exceeds_target_or_data() {
        for requested in WidthKind::ALL {
            for (bytes, arity) in [(4, 2), (4, 3), (4, 4), (4, 8), (4, 16), (8, 2), (8, 3), (8, 8)] {
                let resolved = resolve_width(requested, bytes, arity, true);
                assert!(resolved <= requested);
                assert!(resolved <= TARGET_WIDTH);
                assert!(resolved.bytes() <= (bytes * arity).next_power_of_two().max(16));
            }
        }
    }

    #[cfg(simd_b16)]
    #[test]
    fn small_tuples_use_128_bit_registers() {
        assert_eq!(resolve_width(WidthKind::B64, 4, 4, true), WidthKind::B16);
        assert_eq!(resolve_width(WidthKind::B64, 4, 2, true), WidthKind::B16);
        assert_eq!(resolve_width(WidthKind::B64, 8, 2, true), WidthKind::B16);
    }

    #[cfg(simd_b32)]
    #[test]
    fn wide_tuples_use_wider_registers() {
        assert_eq!(resolve_width(WidthKind::B64, 4, 8, true), WidthKind::B32);
        assert_eq!(resolve_width(WidthKind::B64, 8, 3, true), WidthKind::B32);
        assert_eq!(resolve_width(WidthKind::B16, 4, 8, true), WidthKind::B16);
    }

    #[test]
    fn parse_width_names() {
        assert_eq!("B32".parse::<WidthKind>(), Ok(WidthKind::B32));
        assert_eq!(" scalar ".parse::<WidthKind>(), Ok(WidthKind::Scalar));
        assert!(matches!("b24".parse::<WidthKind>(), Err(TupleError::UnknownWidth(_))));
    }
}
