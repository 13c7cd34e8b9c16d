//! 128‑bit float engines (SSE2 on x86_64; NEON on aarch64)
//!
//! This module implements `SimdEngine`/`FloatEngine` for `f32` (4 lanes) and
//! `f64` (2 lanes) on the `B16` width. The 32-bit integer lanes at this width
//! come from `portable_intrinsics.rs`.
//!
//! Highlights
//! - Masks stay in vector form (`__m128`/`uint32x4_t`) until a caller asks for
//!   bits; `movemask` on SSE, a lane store on NEON.
//! - `mul_add`/`mul_sub` are fused when `build.rs` reports FMA (always on
//!   aarch64), otherwise a multiply followed by an add.
//! - Lane permutes are one `vqtbl1q_u8` on NEON and `pshufb` on SSSE3
//!   targets. Plain SSE2 f32 keeps the lane fallback, which LLVM lowers to
//!   `shufps` once constant indices are inlined; f64 picks an unpack or
//!   `shufpd` from the two indices.
//! - Floor/ceil/trunc/round are native on NEON. SSE2 has no rounding
//!   instructions, so they use the lane fallback from `FloatEngine`.
//!
//! Safety
//! - Only compiled when the target features are enabled crate-wide, so the
//!   intrinsics are always available. Loads and stores assert the slice length
//!   before touching raw pointers.

#![allow(unused_unsafe)]

#[cfg(all(simd_b16, target_arch = "x86_64"))]
mod sse {
    #[cfg(simd_ssse3)]
    use super::super::permute_bytes;
    use super::super::types::simd_arch::*;
    use super::super::{FloatEngine, SimdEngine};
    use crate::compute::B16;

    #[inline(always)]
    fn lane_bit(bits: u32, lane: u32) -> i32 {
        if (bits >> lane) & 1 != 0 { -1 } else { 0 }
    }

    impl SimdEngine<f32> for B16 {
        const LANES: usize = 4;

        type Reg = __m128;
        type Mask = __m128;

        #[inline(always)]
        fn splat(value: f32) -> __m128 {
            unsafe { _mm_set1_ps(value) }
        }

        #[inline(always)]
        fn zero() -> __m128 {
            unsafe { _mm_setzero_ps() }
        }

        #[inline(always)]
        fn load(src: &[f32]) -> __m128 {
            assert!(src.len() >= 4);
            // SAFETY: four readable f32 checked above; loadu has no alignment requirement.
            unsafe { _mm_loadu_ps(src.as_ptr()) }
        }

        #[inline(always)]
        fn store(reg: __m128, dst: &mut [f32]) {
            assert!(dst.len() >= 4);
            // SAFETY: four writable f32 checked above.
            unsafe { _mm_storeu_ps(dst.as_mut_ptr(), reg) }
        }

        #[inline(always)]
        fn add(a: __m128, b: __m128) -> __m128 {
            unsafe { _mm_add_ps(a, b) }
        }

        #[inline(always)]
        fn sub(a: __m128, b: __m128) -> __m128 {
            unsafe { _mm_sub_ps(a, b) }
        }

        #[inline(always)]
        fn mul(a: __m128, b: __m128) -> __m128 {
            unsafe { _mm_mul_ps(a, b) }
        }

        #[inline(always)]
        fn neg(a: __m128) -> __m128 {
            unsafe { _mm_xor_ps(a, _mm_set1_ps(-0.0)) }
        }

        #[inline(always)]
        fn min(a: __m128, b: __m128) -> __m128 {
            unsafe { _mm_min_ps(a, b) }
        }

        #[inline(always)]
        fn max(a: __m128, b: __m128) -> __m128 {
            unsafe { _mm_max_ps(a, b) }
        }

        #[inline(always)]
        fn abs(a: __m128) -> __m128 {
            unsafe { _mm_andnot_ps(_mm_set1_ps(-0.0), a) }
        }

        #[cfg(simd_fma)]
        #[inline(always)]
        fn mul_add(a: __m128, b: __m128, c: __m128) -> __m128 {
            unsafe { _mm_fmadd_ps(a, b, c) }
        }

        #[cfg(simd_fma)]
        #[inline(always)]
        fn mul_sub(a: __m128, b: __m128, c: __m128) -> __m128 {
            unsafe { _mm_fmsub_ps(a, b, c) }
        }

        #[inline(always)]
        fn cmp_eq(a: __m128, b: __m128) -> __m128 {
            unsafe { _mm_cmpeq_ps(a, b) }
        }

        #[inline(always)]
        fn cmp_ne(a: __m128, b: __m128) -> __m128 {
            unsafe { _mm_cmpneq_ps(a, b) }
        }

        #[inline(always)]
        fn cmp_lt(a: __m128, b: __m128) -> __m128 {
            unsafe { _mm_cmplt_ps(a, b) }
        }

        #[inline(always)]
        fn cmp_le(a: __m128, b: __m128) -> __m128 {
            unsafe { _mm_cmple_ps(a, b) }
        }

        #[inline(always)]
        fn cmp_gt(a: __m128, b: __m128) -> __m128 {
            unsafe { _mm_cmpgt_ps(a, b) }
        }

        #[inline(always)]
        fn cmp_ge(a: __m128, b: __m128) -> __m128 {
            unsafe { _mm_cmpge_ps(a, b) }
        }

        #[inline(always)]
        fn select(mask: __m128, if_true: __m128, if_false: __m128) -> __m128 {
            unsafe { _mm_or_ps(_mm_and_ps(mask, if_true), _mm_andnot_ps(mask, if_false)) }
        }

        #[cfg(simd_ssse3)]
        #[inline(always)]
        fn permute(reg: __m128, indices: &[usize]) -> __m128 {
            let control = permute_bytes::<4, 4>(indices);
            // SAFETY: `control` is 16 readable bytes.
            unsafe {
                let control = _mm_loadu_si128(control.as_ptr().cast());
                _mm_castsi128_ps(_mm_shuffle_epi8(_mm_castps_si128(reg), control))
            }
        }

        #[inline(always)]
        fn mask_bits(mask: __m128) -> u32 {
            unsafe { _mm_movemask_ps(mask) as u32 }
        }

        #[inline(always)]
        fn mask_from_bits(bits: u32) -> __m128 {
            unsafe {
                _mm_castsi128_ps(_mm_setr_epi32(
                    lane_bit(bits, 0),
                    lane_bit(bits, 1),
                    lane_bit(bits, 2),
                    lane_bit(bits, 3),
                ))
            }
        }

        #[inline(always)]
        fn reduce_add(reg: __m128) -> f32 {
            unsafe {
                let high = _mm_movehl_ps(reg, reg);
                let pair = _mm_add_ps(reg, high);
                let odd = _mm_shuffle_ps(pair, pair, 0b01);
                _mm_cvtss_f32(_mm_add_ss(pair, odd))
            }
        }

        #[inline(always)]
        fn reduce_min(reg: __m128) -> f32 {
            unsafe {
                let high = _mm_movehl_ps(reg, reg);
                let pair = _mm_min_ps(reg, high);
                let odd = _mm_shuffle_ps(pair, pair, 0b01);
                _mm_cvtss_f32(_mm_min_ss(pair, odd))
            }
        }

        #[inline(always)]
        fn reduce_max(reg: __m128) -> f32 {
            unsafe {
                let high = _mm_movehl_ps(reg, reg);
                let pair = _mm_max_ps(reg, high);
                let odd = _mm_shuffle_ps(pair, pair, 0b01);
                _mm_cvtss_f32(_mm_max_ss(pair, odd))
            }
        }
    }

    impl FloatEngine<f32> for B16 {
        #[inline(always)]
        fn div(a: __m128, b: __m128) -> __m128 {
            unsafe { _mm_div_ps(a, b) }
        }

        #[inline(always)]
        fn sqrt(a: __m128) -> __m128 {
            unsafe { _mm_sqrt_ps(a) }
        }
    }

    impl SimdEngine<f64> for B16 {
        const LANES: usize = 2;

        type Reg = __m128d;
        type Mask = __m128d;

        #[inline(always)]
        fn splat(value: f64) -> __m128d {
            unsafe { _mm_set1_pd(value) }
        }

        #[inline(always)]
        fn zero() -> __m128d {
            unsafe { _mm_setzero_pd() }
        }

        #[inline(always)]
        fn load(src: &[f64]) -> __m128d {
            assert!(src.len() >= 2);
            // SAFETY: two readable f64 checked above.
            unsafe { _mm_loadu_pd(src.as_ptr()) }
        }

        #[inline(always)]
        fn store(reg: __m128d, dst: &mut [f64]) {
            assert!(dst.len() >= 2);
            // SAFETY: two writable f64 checked above.
            unsafe { _mm_storeu_pd(dst.as_mut_ptr(), reg) }
        }

        #[inline(always)]
        fn add(a: __m128d, b: __m128d) -> __m128d {
            unsafe { _mm_add_pd(a, b) }
        }

        #[inline(always)]
        fn sub(a: __m128d, b: __m128d) -> __m128d {
            unsafe { _mm_sub_pd(a, b) }
        }

        #[inline(always)]
        fn mul(a: __m128d, b: __m128d) -> __m128d {
            unsafe { _mm_mul_pd(a, b) }
        }

        #[inline(always)]
        fn neg(a: __m128d) -> __m128d {
            unsafe { _mm_xor_pd(a, _mm_set1_pd(-0.0)) }
        }

        #[inline(always)]
        fn min(a: __m128d, b: __m128d) -> __m128d {
            unsafe { _mm_min_pd(a, b) }
        }

        #[inline(always)]
        fn max(a: __m128d, b: __m128d) -> __m128d {
            unsafe { _mm_max_pd(a, b) }
        }

        #[inline(always)]
        fn abs(a: __m128d) -> __m128d {
            unsafe { _mm_andnot_pd(_mm_set1_pd(-0.0), a) }
        }

        #[cfg(simd_fma)]
        #[inline(always)]
        fn mul_add(a: __m128d, b: __m128d, c: __m128d) -> __m128d {
            unsafe { _mm_fmadd_pd(a, b, c) }
        }

        #[cfg(simd_fma)]
        #[inline(always)]
        fn mul_sub(a: __m128d, b: __m128d, c: __m128d) -> __m128d {
            unsafe { _mm_fmsub_pd(a, b, c) }
        }

        #[inline(always)]
        fn cmp_eq(a: __m128d, b: __m128d) -> __m128d {
            unsafe { _mm_cmpeq_pd(a, b) }
        }

        #[inline(always)]
        fn cmp_ne(a: __m128d, b: __m128d) -> __m128d {
            unsafe { _mm_cmpneq_pd(a, b) }
        }

        #[inline(always)]
        fn cmp_lt(a: __m128d, b: __m128d) -> __m128d {
            unsafe { _mm_cmplt_pd(a, b) }
        }

        #[inline(always)]
        fn cmp_le(a: __m128d, b: __m128d) -> __m128d {
            unsafe { _mm_cmple_pd(a, b) }
        }

        #[inline(always)]
        fn cmp_gt(a: __m128d, b: __m128d) -> __m128d {
            unsafe { _mm_cmpgt_pd(a, b) }
        }

        #[inline(always)]
        fn cmp_ge(a: __m128d, b: __m128d) -> __m128d {
            unsafe { _mm_cmpge_pd(a, b) }
        }

        #[inline(always)]
        fn select(mask: __m128d, if_true: __m128d, if_false: __m128d) -> __m128d {
            unsafe { _mm_or_pd(_mm_and_pd(mask, if_true), _mm_andnot_pd(mask, if_false)) }
        }

        #[inline(always)]
        fn permute(reg: __m128d, indices: &[usize]) -> __m128d {
            unsafe {
                match (indices[0], indices[1]) {
                    (0, 0) => _mm_unpacklo_pd(reg, reg),
                    (1, 1) => _mm_unpackhi_pd(reg, reg),
                    (1, 0) => _mm_shuffle_pd(reg, reg, 0b01),
                    _ => reg,
                }
            }
        }

        #[inline(always)]
        fn mask_bits(mask: __m128d) -> u32 {
            unsafe { _mm_movemask_pd(mask) as u32 }
        }

        #[inline(always)]
        fn mask_from_bits(bits: u32) -> __m128d {
            let lane = |i: u32| lane_bit(bits, i) as i64;
            unsafe { _mm_castsi128_pd(_mm_set_epi64x(lane(1), lane(0))) }
        }

        #[inline(always)]
        fn reduce_add(reg: __m128d) -> f64 {
            unsafe { _mm_cvtsd_f64(_mm_add_sd(reg, _mm_unpackhi_pd(reg, reg))) }
        }

        #[inline(always)]
        fn reduce_min(reg: __m128d) -> f64 {
            unsafe { _mm_cvtsd_f64(_mm_min_sd(reg, _mm_unpackhi_pd(reg, reg))) }
        }

        #[inline(always)]
        fn reduce_max(reg: __m128d) -> f64 {
            unsafe { _mm_cvtsd_f64(_mm_max_sd(reg, _mm_unpackhi_pd(reg, reg))) }
        }
    }

    impl FloatEngine<f64> for B16 {
        #[inline(always)]
        fn div(a: __m128d, b: __m128d) -> __m128d {
            unsafe { _mm_div_pd(a, b) }
        }

        #[inline(always)]
        fn sqrt(a: __m128d) -> __m128d {
            unsafe { _mm_sqrt_pd(a) }
        }
    }
}

#[cfg(all(simd_b16, target_arch = "aarch64"))]
mod neon {
    use std::array;

    use super::super::types::simd_arch::*;
    use super::super::{FloatEngine, SimdEngine, permute_bytes};
    use crate::compute::B16;

    impl SimdEngine<f32> for B16 {
        const LANES: usize = 4;

        type Reg = float32x4_t;
        type Mask = uint32x4_t;

        #[inline(always)]
        fn splat(value: f32) -> float32x4_t {
            unsafe { vdupq_n_f32(value) }
        }

        #[inline(always)]
        fn load(src: &[f32]) -> float32x4_t {
            assert!(src.len() >= 4);
            // SAFETY: four readable f32 checked above.
            unsafe { vld1q_f32(src.as_ptr()) }
        }

        #[inline(always)]
        fn store(reg: float32x4_t, dst: &mut [f32]) {
            assert!(dst.len() >= 4);
            // SAFETY: four writable f32 checked above.
            unsafe { vst1q_f32(dst.as_mut_ptr(), reg) }
        }

        #[inline(always)]
        fn add(a: float32x4_t, b: float32x4_t) -> float32x4_t {
            unsafe { vaddq_f32(a, b) }
        }

        #[inline(always)]
        fn sub(a: float32x4_t, b: float32x4_t) -> float32x4_t {
            unsafe { vsubq_f32(a, b) }
        }

        #[inline(always)]
        fn mul(a: float32x4_t, b: float32x4_t) -> float32x4_t {
            unsafe { vmulq_f32(a, b) }
        }

        #[inline(always)]
        fn neg(a: float32x4_t) -> float32x4_t {
            unsafe { vnegq_f32(a) }
        }

        #[inline(always)]
        fn min(a: float32x4_t, b: float32x4_t) -> float32x4_t {
            unsafe { vminq_f32(a, b) }
        }

        #[inline(always)]
        fn max(a: float32x4_t, b: float32x4_t) -> float32x4_t {
            unsafe { vmaxq_f32(a, b) }
        }

        #[inline(always)]
        fn abs(a: float32x4_t) -> float32x4_t {
            unsafe { vabsq_f32(a) }
        }

        #[inline(always)]
        fn mul_add(a: float32x4_t, b: float32x4_t, c: float32x4_t) -> float32x4_t {
            // vfmaq computes c + a * b
            unsafe { vfmaq_f32(c, a, b) }
        }

        #[inline(always)]
        fn mul_sub(a: float32x4_t, b: float32x4_t, c: float32x4_t) -> float32x4_t {
            // vfmsq computes c - a * b
            unsafe { vnegq_f32(vfmsq_f32(c, a, b)) }
        }

        #[inline(always)]
        fn cmp_eq(a: float32x4_t, b: float32x4_t) -> uint32x4_t {
            unsafe { vceqq_f32(a, b) }
        }

        #[inline(always)]
        fn cmp_ne(a: float32x4_t, b: float32x4_t) -> uint32x4_t {
            unsafe { vmvnq_u32(vceqq_f32(a, b)) }
        }

        #[inline(always)]
        fn cmp_lt(a: float32x4_t, b: float32x4_t) -> uint32x4_t {
            unsafe { vcltq_f32(a, b) }
        }

        #[inline(always)]
        fn cmp_le(a: float32x4_t, b: float32x4_t) -> uint32x4_t {
            unsafe { vcleq_f32(a, b) }
        }

        #[inline(always)]
        fn cmp_gt(a: float32x4_t, b: float32x4_t) -> uint32x4_t {
            unsafe { vcgtq_f32(a, b) }
        }

        #[inline(always)]
        fn cmp_ge(a: float32x4_t, b: float32x4_t) -> uint32x4_t {
            unsafe { vcgeq_f32(a, b) }
        }

        #[inline(always)]
        fn select(mask: uint32x4_t, if_true: float32x4_t, if_false: float32x4_t) -> float32x4_t {
            unsafe { vbslq_f32(mask, if_true, if_false) }
        }

        #[inline(always)]
        fn permute(reg: float32x4_t, indices: &[usize]) -> float32x4_t {
            let control = permute_bytes::<4, 4>(indices);
            // SAFETY: `control` is 16 readable bytes.
            unsafe {
                let control = vld1q_u8(control.as_ptr());
                vreinterpretq_f32_u8(vqtbl1q_u8(vreinterpretq_u8_f32(reg), control))
            }
        }

        #[inline(always)]
        fn mask_bits(mask: uint32x4_t) -> u32 {
            let mut lanes = [0u32; 4];
            // SAFETY: `lanes` holds exactly one register.
            unsafe { vst1q_u32(lanes.as_mut_ptr(), mask) };
            lanes
                .iter()
                .enumerate()
                .fold(0, |bits, (lane, &v)| bits | (((v != 0) as u32) << lane))
        }

        #[inline(always)]
        fn mask_from_bits(bits: u32) -> uint32x4_t {
            let lanes: [u32; 4] =
                array::from_fn(|lane| if (bits >> lane) & 1 != 0 { u32::MAX } else { 0 });
            // SAFETY: `lanes` holds exactly one register.
            unsafe { vld1q_u32(lanes.as_ptr()) }
        }

        #[inline(always)]
        fn reduce_add(reg: float32x4_t) -> f32 {
            unsafe { vaddvq_f32(reg) }
        }

        #[inline(always)]
        fn reduce_min(reg: float32x4_t) -> f32 {
            unsafe { vminvq_f32(reg) }
        }

        #[inline(always)]
        fn reduce_max(reg: float32x4_t) -> f32 {
            unsafe { vmaxvq_f32(reg) }
        }
    }

    impl FloatEngine<f32> for B16 {
        #[inline(always)]
        fn div(a: float32x4_t, b: float32x4_t) -> float32x4_t {
            unsafe { vdivq_f32(a, b) }
        }

        #[inline(always)]
        fn sqrt(a: float32x4_t) -> float32x4_t {
            unsafe { vsqrtq_f32(a) }
        }

        #[inline(always)]
        fn floor(a: float32x4_t) -> float32x4_t {
            unsafe { vrndmq_f32(a) }
        }

        #[inline(always)]
        fn ceil(a: float32x4_t) -> float32x4_t {
            unsafe { vrndpq_f32(a) }
        }

        #[inline(always)]
        fn trunc(a: float32x4_t) -> float32x4_t {
            unsafe { vrndq_f32(a) }
        }

        #[inline(always)]
        fn round(a: float32x4_t) -> float32x4_t {
            unsafe { vrndaq_f32(a) }
        }
    }

    impl SimdEngine<f64> for B16 {
        const LANES: usize = 2;

        type Reg = float64x2_t;
        type Mask = uint64x2_t;

        #[inline(always)]
        fn splat(value: f64) -> float64x2_t {
            unsafe { vdupq_n_f64(value) }
        }

        #[inline(always)]
        fn load(src: &[f64]) -> float64x2_t {
            assert!(src.len() >= 2);
            // SAFETY: two readable f64 checked above.
            unsafe { vld1q_f64(src.as_ptr()) }
        }

        #[inline(always)]
        fn store(reg: float64x2_t, dst: &mut [f64]) {
            assert!(dst.len() >= 2);
            // SAFETY: two writable f64 checked above.
            unsafe { vst1q_f64(dst.as_mut_ptr(), reg) }
        }

        #[inline(always)]
        fn add(a: float64x2_t, b: float64x2_t) -> float64x2_t {
            unsafe { vaddq_f64(a, b) }
        }

        #[inline(always)]
        fn sub(a: float64x2_t, b: float64x2_t) -> float64x2_t {
            unsafe { vsubq_f64(a, b) }
        }

        #[inline(always)]
        fn mul(a: float64x2_t, b: float64x2_t) -> float64x2_t {
            unsafe { vmulq_f64(a, b) }
        }

        #[inline(always)]
        fn neg(a: float64x2_t) -> float64x2_t {
            unsafe { vnegq_f64(a) }
        }

        #[inline(always)]
        fn min(a: float64x2_t, b: float64x2_t) -> float64x2_t {
            unsafe { vminq_f64(a, b) }
        }

        #[inline(always)]
        fn max(a: float64x2_t, b: float64x2_t) -> float64x2_t {
            unsafe { vmaxq_f64(a, b) }
        }

        #[inline(always)]
        fn abs(a: float64x2_t) -> float64x2_t {
            unsafe { vabsq_f64(a) }
        }

        #[inline(always)]
        fn mul_add(a: float64x2_t, b: float64x2_t, c: float64x2_t) -> float64x2_t {
            unsafe { vfmaq_f64(c, a, b) }
        }

        #[inline(always)]
        fn mul_sub(a: float64x2_t, b: float64x2_t, c: float64x2_t) -> float64x2_t {
            unsafe { vnegq_f64(vfmsq_f64(c, a, b)) }
        }

        #[inline(always)]
        fn cmp_eq(a: float64x2_t, b: float64x2_t) -> uint64x2_t {
            unsafe { vceqq_f64(a, b) }
        }

        #[inline(always)]
        fn cmp_ne(a: float64x2_t, b: float64x2_t) -> uint64x2_t {
            unsafe { veorq_u64(vceqq_f64(a, b), vdupq_n_u64(u64::MAX)) }
        }

        #[inline(always)]
        fn cmp_lt(a: float64x2_t, b: float64x2_t) -> uint64x2_t {
            unsafe { vcltq_f64(a, b) }
        }

        #[inline(always)]
        fn cmp_le(a: float64x2_t, b: float64x2_t) -> uint64x2_t {
            unsafe { vcleq_f64(a, b) }
        }

        #[inline(always)]
        fn cmp_gt(a: float64x2_t, b: float64x2_t) -> uint64x2_t {
            unsafe { vcgtq_f64(a, b) }
        }

        #[inline(always)]
        fn cmp_ge(a: float64x2_t, b: float64x2_t) -> uint64x2_t {
            unsafe { vcgeq_f64(a, b) }
        }

        #[inline(always)]
        fn select(mask: uint64x2_t, if_true: float64x2_t, if_false: float64x2_t) -> float64x2_t {
            unsafe { vbslq_f64(mask, if_true, if_false) }
        }

        #[inline(always)]
        fn permute(reg: float64x2_t, indices: &[usize]) -> float64x2_t {
            let control = permute_bytes::<2, 8>(indices);
            // SAFETY: `control` is 16 readable bytes.
            unsafe {
                let control = vld1q_u8(control.as_ptr());
                vreinterpretq_f64_u8(vqtbl1q_u8(vreinterpretq_u8_f64(reg), control))
            }
        }

        #[inline(always)]
        fn mask_bits(mask: uint64x2_t) -> u32 {
            let mut lanes = [0u64; 2];
            // SAFETY: `lanes` holds exactly one register.
            unsafe { vst1q_u64(lanes.as_mut_ptr(), mask) };
            ((lanes[0] != 0) as u32) | (((lanes[1] != 0) as u32) << 1)
        }

        #[inline(always)]
        fn mask_from_bits(bits: u32) -> uint64x2_t {
            let lanes: [u64; 2] =
                array::from_fn(|lane| if (bits >> lane) & 1 != 0 { u64::MAX } else { 0 });
            // SAFETY: `lanes` holds exactly one register.
            unsafe { vld1q_u64(lanes.as_ptr()) }
        }

        #[inline(always)]
        fn reduce_add(reg: float64x2_t) -> f64 {
            unsafe { vaddvq_f64(reg) }
        }

        #[inline(always)]
        fn reduce_min(reg: float64x2_t) -> f64 {
            unsafe { vminvq_f64(reg) }
        }

        #[inline(always)]
        fn reduce_max(reg: float64x2_t) -> f64 {
            unsafe { vmaxvq_f64(reg) }
        }
    }

    impl FloatEngine<f64> for B16 {
        #[inline(always)]
        fn div(a: float64x2_t, b: float64x2_t) -> float64x2_t {
            unsafe { vdivq_f64(a, b) }
        }

        #[inline(always)]
        fn sqrt(a: float64x2_t) -> float64x2_t {
            unsafe { vsqrtq_f64(a) }
        }

        #[inline(always)]
        fn floor(a: float64x2_t) -> float64x2_t {
            unsafe { vrndmq_f64(a) }
        }

        #[inline(always)]
        fn ceil(a: float64x2_t) -> float64x2_t {
            unsafe { vrndpq_f64(a) }
        }

        #[inline(always)]
        fn trunc(a: float64x2_t) -> float64x2_t {
            unsafe { vrndq_f64(a) }
        }

        #[inline(always)]
        fn round(a: float64x2_t) -> float64x2_t {
            unsafe { vrndaq_f64(a) }
        }
    }
}
