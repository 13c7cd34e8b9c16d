//! Build script resolving which register widths the target can drive.
//!
//! Emits `simd_b16`, `simd_b32`, `simd_b64` and `simd_fma` cfg flags from the
//! target features cargo hands us, plus `simd_ssse3`/`simd_avx2` for the
//! variable lane permutes, so the engine modules can be gated on a
//! single name instead of repeating the arch/feature combinations.

use std::env;

fn main() {
    for flag in [
        "simd_b16",
        "simd_b32",
        "simd_b64",
        "simd_fma",
        "simd_ssse3",
        "simd_avx2",
    ] {
        println!("cargo::rustc-check-cfg=cfg({flag})");
    }
    println!("cargo::rerun-if-changed=build.rs");

    let arch = env::var("CARGO_CFG_TARGET_ARCH").unwrap_or_default();
    let features = env::var("CARGO_CFG_TARGET_FEATURE").unwrap_or_default();
    let has = |feature: &str| features.split(',').any(|f| f == feature);
    let avx512_requested = env::var_os("CARGO_FEATURE_AVX512").is_some();

    let x86 = arch == "x86_64";
    let arm = arch == "aarch64";

    let b16 = (x86 && has("sse2")) || (arm && has("neon"));
    let b32 = b16 && x86 && has("avx");
    let b64 = b32 && avx512_requested && has("avx512f");
    let fma = (x86 && b16 && has("fma")) || (arm && b16);
    let ssse3 = x86 && b16 && has("ssse3");
    let avx2 = b32 && has("avx2");

    if avx512_requested && !b64 {
        println!(
            "cargo::warning=feature `avx512` is enabled but the target lacks avx512f; \
             512-bit engines stay disabled"
        );
    }

    for (flag, enabled) in [
        ("simd_b16", b16),
        ("simd_b32", b32),
        ("simd_b64", b64),
        ("simd_fma", fma),
        ("simd_ssse3", ssse3),
        ("simd_avx2", avx2),
    ] {
        if enabled {
            println!("cargo::rustc-cfg={flag}");
        }
    }
}
