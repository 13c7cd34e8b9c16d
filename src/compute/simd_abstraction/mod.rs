//! SIMD abstraction layer
//!
//! This module exposes a single, portable surface for the handful of register
//! operations the tuple types are built from. It hides the ISA differences
//! between x86_64 (SSE2/AVX/AVX-512F) and aarch64 (NEON) behind the
//! `SimdEngine` trait, implemented on the width markers themselves.
//!
//! ## Engines and widths
//!
//! - `Scalar`: one element per register, for every element type.
//! - `B16`: 128-bit registers. 4 lanes of f32/i32/u32, 2 lanes of f64.
//!   SSE2 on x86_64, NEON on aarch64.
//! - `B32`: 256-bit registers. 8 lanes of f32/i32/u32, 4 lanes of f64.
//!   AVX on x86_64.
//! - `B64`: 512-bit registers. 16 lanes of f32/i32/u32, 8 lanes of f64.
//!   AVX-512F on x86_64, only with the `avx512` feature.
//!
//! Float registers map onto the native vector types. The 32-bit integer
//! lanes use aligned lane arrays (see `types.rs`) that the optimizer
//! vectorizes at the target width; AVX (without AVX2) has no 256-bit integer
//! arithmetic, so this keeps one code path for all three widths.
//!
//! ## Safety model
//!
//! Unlike a runtime-dispatched engine, every implementation here is compiled
//! only when `build.rs` found the required target features enabled for the
//! whole crate, so the engine functions are safe to call. The `unsafe` blocks
//! inside are limited to raw-pointer loads/stores (guarded by slice length
//! assertions) and intrinsic calls on older toolchains.

pub mod engine128;
pub mod engine256;
pub mod engine512;
pub mod engine_scalar;
pub mod pack;
pub mod portable_intrinsics;
pub mod simd;
pub mod types;

#[cfg(test)]
mod tests;

use super::Width;
use super::element::{SimdElement, SimdFloat};

/// Largest lane count any engine uses (16 lanes of a 32-bit element at B64).
pub const MAX_LANES: usize = 16;

/// Register-level operations for one element type at one width.
///
/// Lanes of a register are numbered from 0. Masks are opaque per engine;
/// [`SimdEngine::mask_bits`] turns them into a bitfield with bit `i` set when
/// lane `i` is selected.
pub trait SimdEngine<T: SimdElement>: Width {
    /// Number of `T` lanes in one register.
    const LANES: usize;

    /// Native register type.
    type Reg: Copy;
    /// Comparison result type.
    type Mask: Copy;

    // ===== Creation and lane access =====

    /// Broadcast `value` into every lane.
    fn splat(value: T) -> Self::Reg;

    #[inline]
    fn zero() -> Self::Reg {
        Self::splat(T::ZERO)
    }

    /// Load `LANES` elements from the front of `src`.
    ///
    /// Panics if `src` is shorter than `LANES`.
    fn load(src: &[T]) -> Self::Reg;

    /// Store all lanes to the front of `dst`.
    ///
    /// Panics if `dst` is shorter than `LANES`.
    fn store(reg: Self::Reg, dst: &mut [T]);

    #[inline]
    fn extract(reg: Self::Reg, lane: usize) -> T {
        let mut buf = [T::ZERO; MAX_LANES];
        Self::store(reg, &mut buf);
        buf[lane]
    }

    #[inline]
    fn insert(reg: Self::Reg, lane: usize, value: T) -> Self::Reg {
        let mut buf = [T::ZERO; MAX_LANES];
        Self::store(reg, &mut buf);
        buf[lane] = value;
        Self::load(&buf)
    }

    // ===== Arithmetic =====

    fn add(a: Self::Reg, b: Self::Reg) -> Self::Reg;
    fn sub(a: Self::Reg, b: Self::Reg) -> Self::Reg;
    fn mul(a: Self::Reg, b: Self::Reg) -> Self::Reg;
    fn neg(a: Self::Reg) -> Self::Reg;
    fn min(a: Self::Reg, b: Self::Reg) -> Self::Reg;
    fn max(a: Self::Reg, b: Self::Reg) -> Self::Reg;
    fn abs(a: Self::Reg) -> Self::Reg;

    /// `a * b + c`. Fused on targets with FMA.
    #[inline]
    fn mul_add(a: Self::Reg, b: Self::Reg, c: Self::Reg) -> Self::Reg {
        Self::add(Self::mul(a, b), c)
    }

    /// `a * b - c`. Fused on targets with FMA.
    #[inline]
    fn mul_sub(a: Self::Reg, b: Self::Reg, c: Self::Reg) -> Self::Reg {
        Self::sub(Self::mul(a, b), c)
    }

    // ===== Comparison and selection =====

    fn cmp_eq(a: Self::Reg, b: Self::Reg) -> Self::Mask;
    fn cmp_ne(a: Self::Reg, b: Self::Reg) -> Self::Mask;
    fn cmp_lt(a: Self::Reg, b: Self::Reg) -> Self::Mask;
    fn cmp_le(a: Self::Reg, b: Self::Reg) -> Self::Mask;
    fn cmp_gt(a: Self::Reg, b: Self::Reg) -> Self::Mask;
    fn cmp_ge(a: Self::Reg, b: Self::Reg) -> Self::Mask;

    /// Per lane: `if_true` where `mask` is set, `if_false` elsewhere.
    fn select(mask: Self::Mask, if_true: Self::Reg, if_false: Self::Reg) -> Self::Reg;

    /// Bit `i` set when lane `i` of `mask` is set. Only the low `LANES` bits
    /// can be set.
    fn mask_bits(mask: Self::Mask) -> u32;

    /// Inverse of [`SimdEngine::mask_bits`]; bits above `LANES` are ignored.
    fn mask_from_bits(bits: u32) -> Self::Mask;

    // ===== Lane movement =====

    /// Lane `i` of the result is lane `indices[i]` of `reg`.
    ///
    /// Reads the first `LANES` entries of `indices`, each below `LANES`.
    /// Engines override this with a register permute; callers pass constant
    /// indices whenever they can so the control vector folds away.
    #[inline]
    fn permute(reg: Self::Reg, indices: &[usize]) -> Self::Reg {
        let mut src = [T::ZERO; MAX_LANES];
        Self::store(reg, &mut src);
        let out: [T; MAX_LANES] =
            std::array::from_fn(|lane| if lane < Self::LANES { src[indices[lane]] } else { T::ZERO });
        Self::load(&out)
    }

    // ===== Horizontal reductions =====

    #[inline]
    fn reduce_add(reg: Self::Reg) -> T {
        let mut buf = [T::ZERO; MAX_LANES];
        Self::store(reg, &mut buf);
        buf[..Self::LANES].iter().fold(T::ZERO, |acc, &v| acc.lane_add(v))
    }

    #[inline]
    fn reduce_min(reg: Self::Reg) -> T {
        let mut buf = [T::ZERO; MAX_LANES];
        Self::store(reg, &mut buf);
        buf[1..Self::LANES].iter().fold(buf[0], |acc, &v| acc.lane_min(v))
    }

    #[inline]
    fn reduce_max(reg: Self::Reg) -> T {
        let mut buf = [T::ZERO; MAX_LANES];
        Self::store(reg, &mut buf);
        buf[1..Self::LANES].iter().fold(buf[0], |acc, &v| acc.lane_max(v))
    }
}

/// `indices` as the 32-bit control words of a variable permute.
#[allow(dead_code)]
#[inline(always)]
pub(crate) fn permute_control<const L: usize>(indices: &[usize]) -> [i32; L] {
    assert!(indices.len() >= L);
    std::array::from_fn(|lane| indices[lane] as i32)
}

/// Byte selectors for a table lookup permute of `L` lanes of `BYTES` bytes
/// each in a 16-byte register.
#[allow(dead_code)]
#[inline(always)]
pub(crate) fn permute_bytes<const L: usize, const BYTES: usize>(indices: &[usize]) -> [u8; 16] {
    assert!(indices.len() >= L && L * BYTES == 16);
    std::array::from_fn(|byte| (indices[byte / BYTES] * BYTES + byte % BYTES) as u8)
}

/// Floating point register operations.
///
/// Transcendentals have no vector instruction on any supported ISA; the
/// default `map`/`map2` spill the register to lanes, apply the scalar
/// function and reload.
pub trait FloatEngine<T: SimdFloat>: SimdEngine<T> {
    fn div(a: Self::Reg, b: Self::Reg) -> Self::Reg;
    fn sqrt(a: Self::Reg) -> Self::Reg;

    #[inline]
    fn recip(a: Self::Reg) -> Self::Reg {
        Self::div(Self::splat(T::ONE), a)
    }

    /// Full precision `1 / sqrt(a)`.
    #[inline]
    fn rsqrt(a: Self::Reg) -> Self::Reg {
        Self::recip(Self::sqrt(a))
    }

    #[inline]
    fn map(a: Self::Reg, f: impl Fn(T) -> T) -> Self::Reg {
        let mut buf = [T::ZERO; MAX_LANES];
        Self::store(a, &mut buf);
        for lane in &mut buf[..Self::LANES] {
            *lane = f(*lane);
        }
        Self::load(&buf)
    }

    #[inline]
    fn map2(a: Self::Reg, b: Self::Reg, f: impl Fn(T, T) -> T) -> Self::Reg {
        let mut lhs = [T::ZERO; MAX_LANES];
        let mut rhs = [T::ZERO; MAX_LANES];
        Self::store(a, &mut lhs);
        Self::store(b, &mut rhs);
        for (l, r) in lhs[..Self::LANES].iter_mut().zip(&rhs[..Self::LANES]) {
            *l = f(*l, *r);
        }
        Self::load(&lhs)
    }

    #[inline]
    fn floor(a: Self::Reg) -> Self::Reg {
        Self::map(a, T::lane_floor)
    }

    #[inline]
    fn ceil(a: Self::Reg) -> Self::Reg {
        Self::map(a, T::lane_ceil)
    }

    #[inline]
    fn trunc(a: Self::Reg) -> Self::Reg {
        Self::map(a, T::lane_trunc)
    }

    /// Rounds half away from zero, like `f32::round`.
    #[inline]
    fn round(a: Self::Reg) -> Self::Reg {
        Self::map(a, T::lane_round)
    }
}
