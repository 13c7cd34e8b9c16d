//! 256‑bit float engines (AVX on x86_64)
//!
//! `f32` gets 8 lanes and `f64` 4 lanes on the `B32` width. Comparisons use
//! the ordered predicates of `_mm256_cmp_ps` except not-equal, which is
//! unordered so that `NaN != NaN` holds like it does for scalars.
//! Horizontal reductions fold the upper half onto the lower half and finish
//! with SSE instructions, which AVX implies. Lane permutes cross the two
//! 128-bit halves with `vpermps` when AVX2 is on, and with a broadcast of
//! each half plus `vpermilps`/`vblendvps` on plain AVX.

#![allow(unused_unsafe)]

#[cfg(all(simd_b32, target_arch = "x86_64"))]
mod avx {
    use std::array;

    use super::super::types::simd_arch::*;
    use super::super::{FloatEngine, SimdEngine, permute_control};
    use crate::compute::B32;

    #[inline(always)]
    fn lane_bit(bits: u32, lane: u32) -> i32 {
        if (bits >> lane) & 1 != 0 { -1 } else { 0 }
    }

    impl SimdEngine<f32> for B32 {
        const LANES: usize = 8;

        type Reg = __m256;
        type Mask = __m256;

        #[inline(always)]
        fn splat(value: f32) -> __m256 {
            unsafe { _mm256_set1_ps(value) }
        }

        #[inline(always)]
        fn zero() -> __m256 {
            unsafe { _mm256_setzero_ps() }
        }

        #[inline(always)]
        fn load(src: &[f32]) -> __m256 {
            assert!(src.len() >= 8);
            // SAFETY: eight readable f32 checked above.
            unsafe { _mm256_loadu_ps(src.as_ptr()) }
        }

        #[inline(always)]
        fn store(reg: __m256, dst: &mut [f32]) {
            assert!(dst.len() >= 8);
            // SAFETY: eight writable f32 checked above.
            unsafe { _mm256_storeu_ps(dst.as_mut_ptr(), reg) }
        }

        #[inline(always)]
        fn add(a: __m256, b: __m256) -> __m256 {
            unsafe { _mm256_add_ps(a, b) }
        }

        #[inline(always)]
        fn sub(a: __m256, b: __m256) -> __m256 {
            unsafe { _mm256_sub_ps(a, b) }
        }

        #[inline(always)]
        fn mul(a: __m256, b: __m256) -> __m256 {
            unsafe { _mm256_mul_ps(a, b) }
        }

        #[inline(always)]
        fn neg(a: __m256) -> __m256 {
            unsafe { _mm256_xor_ps(a, _mm256_set1_ps(-0.0)) }
        }

        #[inline(always)]
        fn min(a: __m256, b: __m256) -> __m256 {
            unsafe { _mm256_min_ps(a, b) }
        }

        #[inline(always)]
        fn max(a: __m256, b: __m256) -> __m256 {
            unsafe { _mm256_max_ps(a, b) }
        }

        #[inline(always)]
        fn abs(a: __m256) -> __m256 {
            unsafe { _mm256_andnot_ps(_mm256_set1_ps(-0.0), a) }
        }

        #[cfg(simd_fma)]
        #[inline(always)]
        fn mul_add(a: __m256, b: __m256, c: __m256) -> __m256 {
            unsafe { _mm256_fmadd_ps(a, b, c) }
        }

        #[cfg(simd_fma)]
        #[inline(always)]
        fn mul_sub(a: __m256, b: __m256, c: __m256) -> __m256 {
            unsafe { _mm256_fmsub_ps(a, b, c) }
        }

        #[inline(always)]
        fn cmp_eq(a: __m256, b: __m256) -> __m256 {
            unsafe { _mm256_cmp_ps(a, b, _CMP_EQ_OQ) }
        }

        #[inline(always)]
        fn cmp_ne(a: __m256, b: __m256) -> __m256 {
            unsafe { _mm256_cmp_ps(a, b, _CMP_NEQ_UQ) }
        }

        #[inline(always)]
        fn cmp_lt(a: __m256, b: __m256) -> __m256 {
            unsafe { _mm256_cmp_ps(a, b, _CMP_LT_OQ) }
        }

        #[inline(always)]
        fn cmp_le(a: __m256, b: __m256) -> __m256 {
            unsafe { _mm256_cmp_ps(a, b, _CMP_LE_OQ) }
        }

        #[inline(always)]
        fn cmp_gt(a: __m256, b: __m256) -> __m256 {
            unsafe { _mm256_cmp_ps(a, b, _CMP_GT_OQ) }
        }

        #[inline(always)]
        fn cmp_ge(a: __m256, b: __m256) -> __m256 {
            unsafe { _mm256_cmp_ps(a, b, _CMP_GE_OQ) }
        }

        #[inline(always)]
        fn select(mask: __m256, if_true: __m256, if_false: __m256) -> __m256 {
            unsafe { _mm256_blendv_ps(if_false, if_true, mask) }
        }

        #[cfg(simd_avx2)]
        #[inline(always)]
        fn permute(reg: __m256, indices: &[usize]) -> __m256 {
            let control = permute_control::<8>(indices);
            // SAFETY: `control` is eight readable i32.
            unsafe { _mm256_permutevar8x32_ps(reg, _mm256_loadu_si256(control.as_ptr().cast())) }
        }

        /// AVX without AVX2 only permutes inside 128-bit halves: both halves
        /// are broadcast, permuted, and the right one picked per lane.
        #[cfg(not(simd_avx2))]
        #[inline(always)]
        fn permute(reg: __m256, indices: &[usize]) -> __m256 {
            let control = permute_control::<8>(indices);
            let upper: [i32; 8] = array::from_fn(|lane| if control[lane] >= 4 { -1 } else { 0 });
            // SAFETY: `control` and `upper` are eight readable i32 each.
            unsafe {
                let control = _mm256_loadu_si256(control.as_ptr().cast());
                let upper = _mm256_castsi256_ps(_mm256_loadu_si256(upper.as_ptr().cast()));
                let from_low = _mm256_permutevar_ps(_mm256_permute2f128_ps(reg, reg, 0x00), control);
                let from_high = _mm256_permutevar_ps(_mm256_permute2f128_ps(reg, reg, 0x11), control);
                _mm256_blendv_ps(from_low, from_high, upper)
            }
        }

        #[inline(always)]
        fn mask_bits(mask: __m256) -> u32 {
            unsafe { _mm256_movemask_ps(mask) as u32 }
        }

        #[inline(always)]
        fn mask_from_bits(bits: u32) -> __m256 {
            unsafe {
                _mm256_castsi256_ps(_mm256_setr_epi32(
                    lane_bit(bits, 0),
                    lane_bit(bits, 1),
                    lane_bit(bits, 2),
                    lane_bit(bits, 3),
                    lane_bit(bits, 4),
                    lane_bit(bits, 5),
                    lane_bit(bits, 6),
                    lane_bit(bits, 7),
                ))
            }
        }

        #[inline(always)]
        fn reduce_add(reg: __m256) -> f32 {
            unsafe {
                let half = _mm_add_ps(_mm256_castps256_ps128(reg), _mm256_extractf128_ps(reg, 1));
                let high = _mm_movehl_ps(half, half);
                let pair = _mm_add_ps(half, high);
                let odd = _mm_shuffle_ps(pair, pair, 0b01);
                _mm_cvtss_f32(_mm_add_ss(pair, odd))
            }
        }

        #[inline(always)]
        fn reduce_min(reg: __m256) -> f32 {
            unsafe {
                let half = _mm_min_ps(_mm256_castps256_ps128(reg), _mm256_extractf128_ps(reg, 1));
                let high = _mm_movehl_ps(half, half);
                let pair = _mm_min_ps(half, high);
                let odd = _mm_shuffle_ps(pair, pair, 0b01);
                _mm_cvtss_f32(_mm_min_ss(pair, odd))
            }
        }

        #[inline(always)]
        fn reduce_max(reg: __m256) -> f32 {
            unsafe {
                let half = _mm_max_ps(_mm256_castps256_ps128(reg), _mm256_extractf128_ps(reg, 1));
                let high = _mm_movehl_ps(half, half);
                let pair = _mm_max_ps(half, high);
                let odd = _mm_shuffle_ps(pair, pair, 0b01);
                _mm_cvtss_f32(_mm_max_ss(pair, odd))
            }
        }
    }

    impl FloatEngine<f32> for B32 {
        #[inline(always)]
        fn div(a: __m256, b: __m256) -> __m256 {
            unsafe { _mm256_div_ps(a, b) }
        }

        #[inline(always)]
        fn sqrt(a: __m256) -> __m256 {
            unsafe { _mm256_sqrt_ps(a) }
        }

        #[inline(always)]
        fn floor(a: __m256) -> __m256 {
            unsafe { _mm256_floor_ps(a) }
        }

        #[inline(always)]
        fn ceil(a: __m256) -> __m256 {
            unsafe { _mm256_ceil_ps(a) }
        }
    }

    impl SimdEngine<f64> for B32 {
        const LANES: usize = 4;

        type Reg = __m256d;
        type Mask = __m256d;

        #[inline(always)]
        fn splat(value: f64) -> __m256d {
            unsafe { _mm256_set1_pd(value) }
        }

        #[inline(always)]
        fn zero() -> __m256d {
            unsafe { _mm256_setzero_pd() }
        }

        #[inline(always)]
        fn load(src: &[f64]) -> __m256d {
            assert!(src.len() >= 4);
            // SAFETY: four readable f64 checked above.
            unsafe { _mm256_loadu_pd(src.as_ptr()) }
        }

        #[inline(always)]
        fn store(reg: __m256d, dst: &mut [f64]) {
            assert!(dst.len() >= 4);
            // SAFETY: four writable f64 checked above.
            unsafe { _mm256_storeu_pd(dst.as_mut_ptr(), reg) }
        }

        #[inline(always)]
        fn add(a: __m256d, b: __m256d) -> __m256d {
            unsafe { _mm256_add_pd(a, b) }
        }

        #[inline(always)]
        fn sub(a: __m256d, b: __m256d) -> __m256d {
            unsafe { _mm256_sub_pd(a, b) }
        }

        #[inline(always)]
        fn mul(a: __m256d, b: __m256d) -> __m256d {
            unsafe { _mm256_mul_pd(a, b) }
        }

        #[inline(always)]
        fn neg(a: __m256d) -> __m256d {
            unsafe { _mm256_xor_pd(a, _mm256_set1_pd(-0.0)) }
        }

        #[inline(always)]
        fn min(a: __m256d, b: __m256d) -> __m256d {
            unsafe { _mm256_min_pd(a, b) }
        }

        #[inline(always)]
        fn max(a: __m256d, b: __m256d) -> __m256d {
            unsafe { _mm256_max_pd(a, b) }
        }

        #[inline(always)]
        fn abs(a: __m256d) -> __m256d {
            unsafe { _mm256_andnot_pd(_mm256_set1_pd(-0.0), a) }
        }

        #[cfg(simd_fma)]
        #[inline(always)]
        fn mul_add(a: __m256d, b: __m256d, c: __m256d) -> __m256d {
            unsafe { _mm256_fmadd_pd(a, b, c) }
        }

        #[cfg(simd_fma)]
        #[inline(always)]
        fn mul_sub(a: __m256d, b: __m256d, c: __m256d) -> __m256d {
            unsafe { _mm256_fmsub_pd(a, b, c) }
        }

        #[inline(always)]
        fn cmp_eq(a: __m256d, b: __m256d) -> __m256d {
            unsafe { _mm256_cmp_pd(a, b, _CMP_EQ_OQ) }
        }

        #[inline(always)]
        fn cmp_ne(a: __m256d, b: __m256d) -> __m256d {
            unsafe { _mm256_cmp_pd(a, b, _CMP_NEQ_UQ) }
        }

        #[inline(always)]
        fn cmp_lt(a: __m256d, b: __m256d) -> __m256d {
            unsafe { _mm256_cmp_pd(a, b, _CMP_LT_OQ) }
        }

        #[inline(always)]
        fn cmp_le(a: __m256d, b: __m256d) -> __m256d {
            unsafe { _mm256_cmp_pd(a, b, _CMP_LE_OQ) }
        }

        #[inline(always)]
        fn cmp_gt(a: __m256d, b: __m256d) -> __m256d {
            unsafe { _mm256_cmp_pd(a, b, _CMP_GT_OQ) }
        }

        #[inline(always)]
        fn cmp_ge(a: __m256d, b: __m256d) -> __m256d {
            unsafe { _mm256_cmp_pd(a, b, _CMP_GE_OQ) }
        }

        #[inline(always)]
        fn select(mask: __m256d, if_true: __m256d, if_false: __m256d) -> __m256d {
            unsafe { _mm256_blendv_pd(if_false, if_true, mask) }
        }

        #[cfg(simd_avx2)]
        #[inline(always)]
        fn permute(reg: __m256d, indices: &[usize]) -> __m256d {
            let control: [i32; 8] = array::from_fn(|word| (indices[word / 2] * 2 + word % 2) as i32);
            // SAFETY: `control` is eight readable i32.
            unsafe {
                let control = _mm256_loadu_si256(control.as_ptr().cast());
                _mm256_castps_pd(_mm256_permutevar8x32_ps(_mm256_castpd_ps(reg), control))
            }
        }

        #[cfg(not(simd_avx2))]
        #[inline(always)]
        fn permute(reg: __m256d, indices: &[usize]) -> __m256d {
            // `vpermilpd` reads bit 1 of each 64-bit selector.
            let control: [i64; 4] = array::from_fn(|lane| ((indices[lane] & 1) << 1) as i64);
            let upper: [i64; 4] = array::from_fn(|lane| if indices[lane] >= 2 { -1 } else { 0 });
            // SAFETY: `control` and `upper` are four readable i64 each.
            unsafe {
                let control = _mm256_loadu_si256(control.as_ptr().cast());
                let upper = _mm256_castsi256_pd(_mm256_loadu_si256(upper.as_ptr().cast()));
                let from_low = _mm256_permutevar_pd(_mm256_permute2f128_pd(reg, reg, 0x00), control);
                let from_high = _mm256_permutevar_pd(_mm256_permute2f128_pd(reg, reg, 0x11), control);
                _mm256_blendv_pd(from_low, from_high, upper)
            }
        }

        #[inline(always)]
        fn mask_bits(mask: __m256d) -> u32 {
            unsafe { _mm256_movemask_pd(mask) as u32 }
        }

        #[inline(always)]
        fn mask_from_bits(bits: u32) -> __m256d {
            let lane = |i: u32| lane_bit(bits, i) as i64;
            unsafe { _mm256_castsi256_pd(_mm256_setr_epi64x(lane(0), lane(1), lane(2), lane(3))) }
        }

        #[inline(always)]
        fn reduce_add(reg: __m256d) -> f64 {
            unsafe {
                let half = _mm_add_pd(_mm256_castpd256_pd128(reg), _mm256_extractf128_pd(reg, 1));
                _mm_cvtsd_f64(_mm_add_sd(half, _mm_unpackhi_pd(half, half)))
            }
        }

        #[inline(always)]
        fn reduce_min(reg: __m256d) -> f64 {
            unsafe {
                let half = _mm_min_pd(_mm256_castpd256_pd128(reg), _mm256_extractf128_pd(reg, 1));
                _mm_cvtsd_f64(_mm_min_sd(half, _mm_unpackhi_pd(half, half)))
            }
        }

        #[inline(always)]
        fn reduce_max(reg: __m256d) -> f64 {
            unsafe {
                let half = _mm_max_pd(_mm256_castpd256_pd128(reg), _mm256_extractf128_pd(reg, 1));
                _mm_cvtsd_f64(_mm_max_sd(half, _mm_unpackhi_pd(half, half)))
            }
        }
    }

    impl FloatEngine<f64> for B32 {
        #[inline(always)]
        fn div(a: __m256d, b: __m256d) -> __m256d {
            unsafe { _mm256_div_pd(a, b) }
        }

        #[inline(always)]
        fn sqrt(a: __m256d) -> __m256d {
            unsafe { _mm256_sqrt_pd(a) }
        }

        #[inline(always)]
        fn floor(a: __m256d) -> __m256d {
            unsafe { _mm256_floor_pd(a) }
        }

        #[inline(always)]
        fn ceil(a: __m256d) -> __m256d {
            unsafe { _mm256_ceil_pd(a) }
        }
    }
}
