//! Portable lane-array engines for the 32-bit integer elements.
//!
//! The integer registers are `LanesN<T, L>` arrays rather than `__m128i`
//! style vectors. Every operation is a fixed-length lane loop that LLVM
//! lowers to the widest integer instructions the target has (SSE2/AVX2/
//! AVX-512 on x86_64, NEON on aarch64), and falls back gracefully when a
//! width only has float instructions (plain AVX). Masks are `[bool; L]`.
//!
//! Arithmetic wraps, matching `SimdElement` for integers.

use std::array;

#[allow(unused_imports)]
use super::SimdEngine;
#[allow(unused_imports)]
use super::types::{Lanes128, Lanes256, Lanes512};
#[allow(unused_imports)]
use crate::compute::element::SimdElement;
#[allow(unused_imports)]
use crate::compute::{B16, B32, B64};

/// Packs a `[bool; L]` mask into a bitfield, lane 0 in bit 0.
#[inline(always)]
pub fn bool_mask_bits<const L: usize>(mask: &[bool; L]) -> u32 {
    mask.iter()
        .enumerate()
        .fold(0, |bits, (lane, &set)| bits | ((set as u32) << lane))
}

/// Expands the low `L` bits of `bits` into a `[bool; L]` mask.
#[inline(always)]
pub fn bool_mask_from_bits<const L: usize>(bits: u32) -> [bool; L] {
    array::from_fn(|lane| (bits >> lane) & 1 != 0)
}

#[allow(unused_macros)]
macro_rules! lane_array_engine {
    ($width:ty, $reg:ident, $lanes:literal, $($t:ty),*) => {$(
        impl SimdEngine<$t> for $width {
            const LANES: usize = $lanes;

            type Reg = $reg<$t, $lanes>;
            type Mask = [bool; $lanes];

            #[inline(always)]
            fn splat(value: $t) -> Self::Reg {
                $reg([value; $lanes])
            }

            #[inline(always)]
            fn load(src: &[$t]) -> Self::Reg {
                let mut lanes = [<$t as SimdElement>::ZERO; $lanes];
                lanes.copy_from_slice(&src[..$lanes]);
                $reg(lanes)
            }

            #[inline(always)]
            fn store(reg: Self::Reg, dst: &mut [$t]) {
                dst[..$lanes].copy_from_slice(&reg.0);
            }

            #[inline(always)]
            fn extract(reg: Self::Reg, lane: usize) -> $t {
                reg.0[lane]
            }

            #[inline(always)]
            fn insert(mut reg: Self::Reg, lane: usize, value: $t) -> Self::Reg {
                reg.0[lane] = value;
                reg
            }

            #[inline(always)]
            fn permute(reg: Self::Reg, indices: &[usize]) -> Self::Reg {
                $reg(array::from_fn(|i| reg.0[indices[i]]))
            }

            #[inline(always)]
            fn add(a: Self::Reg, b: Self::Reg) -> Self::Reg {
                $reg(array::from_fn(|i| a.0[i].lane_add(b.0[i])))
            }

            #[inline(always)]
            fn sub(a: Self::Reg, b: Self::Reg) -> Self::Reg {
                $reg(array::from_fn(|i| a.0[i].lane_sub(b.0[i])))
            }

            #[inline(always)]
            fn mul(a: Self::Reg, b: Self::Reg) -> Self::Reg {
                $reg(array::from_fn(|i| a.0[i].lane_mul(b.0[i])))
            }

            #[inline(always)]
            fn neg(a: Self::Reg) -> Self::Reg {
                $reg(a.0.map(<$t as SimdElement>::lane_neg))
            }

            #[inline(always)]
            fn min(a: Self::Reg, b: Self::Reg) -> Self::Reg {
                $reg(array::from_fn(|i| a.0[i].lane_min(b.0[i])))
            }

            #[inline(always)]
            fn max(a: Self::Reg, b: Self::Reg) -> Self::Reg {
                $reg(array::from_fn(|i| a.0[i].lane_max(b.0[i])))
            }

            #[inline(always)]
            fn abs(a: Self::Reg) -> Self::Reg {
                $reg(a.0.map(<$t as SimdElement>::lane_abs))
            }

            #[inline(always)]
            fn cmp_eq(a: Self::Reg, b: Self::Reg) -> Self::Mask {
                array::from_fn(|i| a.0[i] == b.0[i])
            }

            #[inline(always)]
            fn cmp_ne(a: Self::Reg, b: Self::Reg) -> Self::Mask {
                array::from_fn(|i| a.0[i] != b.0[i])
            }

            #[inline(always)]
            fn cmp_lt(a: Self::Reg, b: Self::Reg) -> Self::Mask {
                array::from_fn(|i| a.0[i] < b.0[i])
            }

            #[inline(always)]
            fn cmp_le(a: Self::Reg, b: Self::Reg) -> Self::Mask {
                array::from_fn(|i| a.0[i] <= b.0[i])
            }

            #[inline(always)]
            fn cmp_gt(a: Self::Reg, b: Self::Reg) -> Self::Mask {
                array::from_fn(|i| a.0[i] > b.0[i])
            }

            #[inline(always)]
            fn cmp_ge(a: Self::Reg, b: Self::Reg) -> Self::Mask {
                array::from_fn(|i| a.0[i] >= b.0[i])
            }

            #[inline(always)]
            fn select(mask: Self::Mask, if_true: Self::Reg, if_false: Self::Reg) -> Self::Reg {
                $reg(array::from_fn(|i| if mask[i] { if_true.0[i] } else { if_false.0[i] }))
            }

            #[inline(always)]
            fn mask_bits(mask: Self::Mask) -> u32 {
                bool_mask_bits(&mask)
            }

            #[inline(always)]
            fn mask_from_bits(bits: u32) -> Self::Mask {
                bool_mask_from_bits(bits)
            }

            #[inline(always)]
            fn reduce_add(reg: Self::Reg) -> $t {
                reg.0.iter().fold(<$t as SimdElement>::ZERO, |acc, &v| acc.lane_add(v))
            }

            #[inline(always)]
            fn reduce_min(reg: Self::Reg) -> $t {
                reg.0[1..].iter().fold(reg.0[0], |acc, &v| acc.lane_min(v))
            }

            #[inline(always)]
            fn reduce_max(reg: Self::Reg) -> $t {
                reg.0[1..].iter().fold(reg.0[0], |acc, &v| acc.lane_max(v))
            }
        }
    )*};
}

#[cfg(simd_b16)]
lane_array_engine!(B16, Lanes128, 4, i32, u32);
#[cfg(simd_b32)]
lane_array_engine!(B32, Lanes256, 8, i32, u32);
#[cfg(simd_b64)]
lane_array_engine!(B64, Lanes512, 16, i32, u32);
