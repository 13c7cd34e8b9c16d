//! 512‑bit float engines (AVX‑512F on x86_64)
//!
//! Only built with the `avx512` cargo feature on a target compiled with
//! `avx512f`. Comparisons produce `__mmask16`/`__mmask8` bitfields directly,
//! which makes `mask_bits`/`mask_from_bits` plain integer casts. Lane
//! permutes are a single `vpermps`/`vpermpd` across the whole register.

#![allow(unused_unsafe)]

#[cfg(all(simd_b64, target_arch = "x86_64"))]
mod avx512 {
    use super::super::types::simd_arch::*;
    use super::super::{FloatEngine, SimdEngine, permute_control};
    use crate::compute::B64;

    impl SimdEngine<f32> for B64 {
        const LANES: usize = 16;

        type Reg = __m512;
        type Mask = __mmask16;

        #[inline(always)]
        fn splat(value: f32) -> __m512 {
            unsafe { _mm512_set1_ps(value) }
        }

        #[inline(always)]
        fn zero() -> __m512 {
            unsafe { _mm512_setzero_ps() }
        }

        #[inline(always)]
        fn load(src: &[f32]) -> __m512 {
            assert!(src.len() >= 16);
            // SAFETY: sixteen readable f32 checked above.
            unsafe { _mm512_loadu_ps(src.as_ptr()) }
        }

        #[inline(always)]
        fn store(reg: __m512, dst: &mut [f32]) {
            assert!(dst.len() >= 16);
            // SAFETY: sixteen writable f32 checked above.
            unsafe { _mm512_storeu_ps(dst.as_mut_ptr(), reg) }
        }

        #[inline(always)]
        fn add(a: __m512, b: __m512) -> __m512 {
            unsafe { _mm512_add_ps(a, b) }
        }

        #[inline(always)]
        fn sub(a: __m512, b: __m512) -> __m512 {
            unsafe { _mm512_sub_ps(a, b) }
        }

        #[inline(always)]
        fn mul(a: __m512, b: __m512) -> __m512 {
            unsafe { _mm512_mul_ps(a, b) }
        }

        #[inline(always)]
        fn neg(a: __m512) -> __m512 {
            unsafe {
                _mm512_castsi512_ps(_mm512_xor_si512(
                    _mm512_castps_si512(a),
                    _mm512_set1_epi32(i32::MIN),
                ))
            }
        }

        #[inline(always)]
        fn min(a: __m512, b: __m512) -> __m512 {
            unsafe { _mm512_min_ps(a, b) }
        }

        #[inline(always)]
        fn max(a: __m512, b: __m512) -> __m512 {
            unsafe { _mm512_max_ps(a, b) }
        }

        #[inline(always)]
        fn abs(a: __m512) -> __m512 {
            unsafe { _mm512_abs_ps(a) }
        }

        #[inline(always)]
        fn mul_add(a: __m512, b: __m512, c: __m512) -> __m512 {
            unsafe { _mm512_fmadd_ps(a, b, c) }
        }

        #[inline(always)]
        fn mul_sub(a: __m512, b: __m512, c: __m512) -> __m512 {
            unsafe { _mm512_fmsub_ps(a, b, c) }
        }

        #[inline(always)]
        fn cmp_eq(a: __m512, b: __m512) -> __mmask16 {
            unsafe { _mm512_cmp_ps_mask(a, b, _CMP_EQ_OQ) }
        }

        #[inline(always)]
        fn cmp_ne(a: __m512, b: __m512) -> __mmask16 {
            unsafe { _mm512_cmp_ps_mask(a, b, _CMP_NEQ_UQ) }
        }

        #[inline(always)]
        fn cmp_lt(a: __m512, b: __m512) -> __mmask16 {
            unsafe { _mm512_cmp_ps_mask(a, b, _CMP_LT_OQ) }
        }

        #[inline(always)]
        fn cmp_le(a: __m512, b: __m512) -> __mmask16 {
            unsafe { _mm512_cmp_ps_mask(a, b, _CMP_LE_OQ) }
        }

        #[inline(always)]
        fn cmp_gt(a: __m512, b: __m512) -> __mmask16 {
            unsafe { _mm512_cmp_ps_mask(a, b, _CMP_GT_OQ) }
        }

        #[inline(always)]
        fn cmp_ge(a: __m512, b: __m512) -> __mmask16 {
            unsafe { _mm512_cmp_ps_mask(a, b, _CMP_GE_OQ) }
        }

        #[inline(always)]
        fn select(mask: __mmask16, if_true: __m512, if_false: __m512) -> __m512 {
            unsafe { _mm512_mask_blend_ps(mask, if_false, if_true) }
        }

        #[inline(always)]
        fn permute(reg: __m512, indices: &[usize]) -> __m512 {
            let control = permute_control::<16>(indices);
            // SAFETY: `control` is sixteen readable i32.
            unsafe { _mm512_permutexvar_ps(_mm512_loadu_epi32(control.as_ptr()), reg) }
        }

        #[inline(always)]
        fn mask_bits(mask: __mmask16) -> u32 {
            mask as u32
        }

        #[inline(always)]
        fn mask_from_bits(bits: u32) -> __mmask16 {
            bits as __mmask16
        }

        #[inline(always)]
        fn reduce_add(reg: __m512) -> f32 {
            unsafe { _mm512_reduce_add_ps(reg) }
        }

        #[inline(always)]
        fn reduce_min(reg: __m512) -> f32 {
            unsafe { _mm512_reduce_min_ps(reg) }
        }

        #[inline(always)]
        fn reduce_max(reg: __m512) -> f32 {
            unsafe { _mm512_reduce_max_ps(reg) }
        }
    }

    impl FloatEngine<f32> for B64 {
        #[inline(always)]
        fn div(a: __m512, b: __m512) -> __m512 {
            unsafe { _mm512_div_ps(a, b) }
        }

        #[inline(always)]
        fn sqrt(a: __m512) -> __m512 {
            unsafe { _mm512_sqrt_ps(a) }
        }
    }

    impl SimdEngine<f64> for B64 {
        const LANES: usize = 8;

        type Reg = __m512d;
        type Mask = __mmask8;

        #[inline(always)]
        fn splat(value: f64) -> __m512d {
            unsafe { _mm512_set1_pd(value) }
        }

        #[inline(always)]
        fn zero() -> __m512d {
            unsafe { _mm512_setzero_pd() }
        }

        #[inline(always)]
        fn load(src: &[f64]) -> __m512d {
            assert!(src.len() >= 8);
            // SAFETY: eight readable f64 checked above.
            unsafe { _mm512_loadu_pd(src.as_ptr()) }
        }

        #[inline(always)]
        fn store(reg: __m512d, dst: &mut [f64]) {
            assert!(dst.len() >= 8);
            // SAFETY: eight writable f64 checked above.
            unsafe { _mm512_storeu_pd(dst.as_mut_ptr(), reg) }
        }

        #[inline(always)]
        fn add(a: __m512d, b: __m512d) -> __m512d {
            unsafe { _mm512_add_pd(a, b) }
        }

        #[inline(always)]
        fn sub(a: __m512d, b: __m512d) -> __m512d {
            unsafe { _mm512_sub_pd(a, b) }
        }

        #[inline(always)]
        fn mul(a: __m512d, b: __m512d) -> __m512d {
            unsafe { _mm512_mul_pd(a, b) }
        }

        #[inline(always)]
        fn neg(a: __m512d) -> __m512d {
            unsafe {
                _mm512_castsi512_pd(_mm512_xor_si512(
                    _mm512_castpd_si512(a),
                    _mm512_set1_epi64(i64::MIN),
                ))
            }
        }

        #[inline(always)]
        fn min(a: __m512d, b: __m512d) -> __m512d {
            unsafe { _mm512_min_pd(a, b) }
        }

        #[inline(always)]
        fn max(a: __m512d, b: __m512d) -> __m512d {
            unsafe { _mm512_max_pd(a, b) }
        }

        #[inline(always)]
        fn abs(a: __m512d) -> __m512d {
            unsafe { _mm512_abs_pd(a) }
        }

        #[inline(always)]
        fn mul_add(a: __m512d, b: __m512d, c: __m512d) -> __m512d {
            unsafe { _mm512_fmadd_pd(a, b, c) }
        }

        #[inline(always)]
        fn mul_sub(a: __m512d, b: __m512d, c: __m512d) -> __m512d {
            unsafe { _mm512_fmsub_pd(a, b, c) }
        }

        #[inline(always)]
        fn cmp_eq(a: __m512d, b: __m512d) -> __mmask8 {
            unsafe { _mm512_cmp_pd_mask(a, b, _CMP_EQ_OQ) }
        }

        #[inline(always)]
        fn cmp_ne(a: __m512d, b: __m512d) -> __mmask8 {
            unsafe { _mm512_cmp_pd_mask(a, b, _CMP_NEQ_UQ) }
        }

        #[inline(always)]
        fn cmp_lt(a: __m512d, b: __m512d) -> __mmask8 {
            unsafe { _mm512_cmp_pd_mask(a, b, _CMP_LT_OQ) }
        }

        #[inline(always)]
        fn cmp_le(a: __m512d, b: __m512d) -> __mmask8 {
            unsafe { _mm512_cmp_pd_mask(a, b, _CMP_LE_OQ) }
        }

        #[inline(always)]
        fn cmp_gt(a: __m512d, b: __m512d) -> __mmask8 {
            unsafe { _mm512_cmp_pd_mask(a, b, _CMP_GT_OQ) }
        }

        #[inline(always)]
        fn cmp_ge(a: __m512d, b: __m512d) -> __mmask8 {
            unsafe { _mm512_cmp_pd_mask(a, b, _CMP_GE_OQ) }
        }

        #[inline(always)]
        fn select(mask: __mmask8, if_true: __m512d, if_false: __m512d) -> __m512d {
            unsafe { _mm512_mask_blend_pd(mask, if_false, if_true) }
        }

        #[inline(always)]
        fn permute(reg: __m512d, indices: &[usize]) -> __m512d {
            let control: [i64; 8] = std::array::from_fn(|lane| indices[lane] as i64);
            // SAFETY: `control` is eight readable i64.
            unsafe { _mm512_permutexvar_pd(_mm512_loadu_epi64(control.as_ptr()), reg) }
        }

        #[inline(always)]
        fn mask_bits(mask: __mmask8) -> u32 {
            mask as u32
        }

        #[inline(always)]
        fn mask_from_bits(bits: u32) -> __mmask8 {
            bits as __mmask8
        }

        #[inline(always)]
        fn reduce_add(reg: __m512d) -> f64 {
            unsafe { _mm512_reduce_add_pd(reg) }
        }

        #[inline(always)]
        fn reduce_min(reg: __m512d) -> f64 {
            unsafe { _mm512_reduce_min_pd(reg) }
        }

        #[inline(always)]
        fn reduce_max(reg: __m512d) -> f64 {
            unsafe { _mm512_reduce_max_pd(reg) }
        }
    }

    impl FloatEngine<f64> for B64 {
        #[inline(always)]
        fn div(a: __m512d, b: __m512d) -> __m512d {
            unsafe { _mm512_div_pd(a, b) }
        }

        #[inline(always)]
        fn sqrt(a: __m512d) -> __m512d {
            unsafe { _mm512_sqrt_pd(a) }
        }
    }
}
