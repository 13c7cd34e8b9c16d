// tests/common/mod.rs
// Shared helpers for the integration tests.

#![allow(dead_code)]

use std::sync::Once;

static INIT: Once = Once::new();

/// Routes `log` output through the test harness once per binary.
pub fn init_logging() {
    INIT.call_once(|| {
        let _ = env_logger::builder().is_test(true).try_init();
    });
}

/// Reproducible pseudo-random values in `[-range, range)`.
pub fn lcg_values<const N: usize>(seed: u64, range: f32) -> [f32; N] {
    let mut state = seed;
    std::array::from_fn(|_| {
        state = state.wrapping_mul(6364136223846793005).wrapping_add(1442695040888963407);
        let unit = (state >> 40) as f32 / (1u64 << 24) as f32;
        (unit * 2.0 - 1.0) * range
    })
}
