//! Register types and architecture bindings
//!
//! - `simd_arch` re-exports `std::arch::x86_64` or `std::arch::aarch64` so the
//!   engine modules can import intrinsics uniformly.
//! - `Lanes128`, `Lanes256` and `Lanes512` are plain lane arrays aligned like
//!   the matching vector register. They back the 32-bit integer engines; the
//!   alignment lets the optimizer keep them in vector registers and use
//!   aligned moves.

#[cfg(target_arch = "x86_64")]
pub use std::arch::x86_64 as simd_arch;

#[cfg(target_arch = "aarch64")]
pub use std::arch::aarch64 as simd_arch;

macro_rules! lane_array {
    ($(#[$doc:meta] $name:ident => $align:literal),*) => {$(
        #[$doc]
        #[derive(Debug, Clone, Copy, PartialEq)]
        #[repr(C, align($align))]
        pub struct $name<T, const L: usize>(pub [T; L]);

        impl<T, const L: usize> $name<T, L> {
            #[inline]
            pub fn lanes(&self) -> &[T; L] {
                &self.0
            }
        }
    )*};
}

lane_array!(
    /// 16-byte aligned lane array, one 128-bit register worth of lanes.
    Lanes128 => 16,
    /// 32-byte aligned lane array, one 256-bit register worth of lanes.
    Lanes256 => 32,
    /// 64-byte aligned lane array, one 512-bit register worth of lanes.
    Lanes512 => 64
);
