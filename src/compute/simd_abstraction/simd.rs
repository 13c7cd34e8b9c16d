//! Module for runtime register-width detection and reporting.
//!
//! Tuple widths are fixed at compile time (see [`crate::compute`]). This
//! module answers the runtime question: what could the host CPU run, and is
//! the build leaving width on the table? It never changes which engine a
//! tuple uses.

use crate::compute::{TARGET_WIDTH, WidthKind};

/// Environment variable capping the reported host width, e.g. `b16` or
/// `scalar`. Useful for checking log output and fallbacks on wide machines.
pub const FORCE_WIDTH_ENV: &str = "SIMD_TUPLES_FORCE_WIDTH";

/// Compiled versus detected register width.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct WidthReport {
    /// Widest width the crate was compiled for.
    pub compiled: WidthKind,
    /// Widest width the running CPU supports, after any override.
    pub host: WidthKind,
}

impl WidthReport {
    /// `true` when the host could run wider registers than the build uses.
    pub fn leaves_width_unused(&self) -> bool {
        self.host > self.compiled
    }
}

/// Widest register width the crate was compiled to use.
pub fn compiled_width() -> WidthKind {
    TARGET_WIDTH
}

/// Detects the widest register width the host CPU supports.
///
/// Honors [`FORCE_WIDTH_ENV`]: the override can only narrow the result.
/// An unparsable override is logged and ignored.
pub fn detect_host_width() -> WidthKind {
    let detected = detect_cpu_width();
    let forced = std::env::var(FORCE_WIDTH_ENV).ok();
    apply_width_override(detected, forced.as_deref())
}

/// Caps `detected` by a width name taken from the environment.
pub fn apply_width_override(detected: WidthKind, forced: Option<&str>) -> WidthKind {
    let Some(raw) = forced else {
        return detected;
    };
    match raw.parse::<WidthKind>() {
        Ok(cap) if cap < detected => {
            log::info!("{FORCE_WIDTH_ENV}={raw}: reporting {cap} instead of {detected}");
            cap
        }
        Ok(_) => detected,
        Err(e) => {
            log::warn!("Ignoring {FORCE_WIDTH_ENV}: {e}");
            detected
        }
    }
}

fn detect_cpu_width() -> WidthKind {
    #[cfg(target_arch = "x86_64")]
    {
        if is_x86_feature_detected!("avx512f") {
            return WidthKind::B64;
        }
        if is_x86_feature_detected!("avx") {
            return WidthKind::B32;
        }
        if is_x86_feature_detected!("sse2") {
            return WidthKind::B16;
        }
        WidthKind::Scalar
    }

    #[cfg(target_arch = "aarch64")]
    {
        if std::arch::is_aarch64_feature_detected!("neon") {
            WidthKind::B16
        } else {
            WidthKind::Scalar
        }
    }

    #[cfg(not(any(target_arch = "x86_64", target_arch = "aarch64")))]
    {
        WidthKind::Scalar
    }
}

/// Returns a human-readable description of a register width.
pub fn width_description(width: WidthKind) -> &'static str {
    match width {
        WidthKind::Scalar => "scalar (no vector registers)",
        WidthKind::B16 => {
            #[cfg(target_arch = "aarch64")]
            {
                "NEON (128-bit, 4 x f32 / 2 x f64)"
            }
            #[cfg(not(target_arch = "aarch64"))]
            {
                "SSE2 (128-bit, 4 x f32 / 2 x f64)"
            }
        }
        WidthKind::B32 => "AVX (256-bit, 8 x f32 / 4 x f64)",
        WidthKind::B64 => "AVX-512F (512-bit, 16 x f32 / 8 x f64)",
    }
}

/// Lanes of an element of `elem_bytes` bytes in one register of `width`.
pub fn lanes_per_register(width: WidthKind, elem_bytes: usize) -> usize {
    width.lanes_for(elem_bytes)
}

/// Compiled and detected widths in one value.
pub fn width_report() -> WidthReport {
    WidthReport {
        compiled: compiled_width(),
        host: detect_host_width(),
    }
}

/// Logs the compiled width, and warns when the host could do better.
pub fn log_width_summary() -> WidthReport {
    let report = width_report();
    log::info!(
        "Tuple registers: {} (compiled), host supports {}",
        width_description(report.compiled),
        width_description(report.host)
    );
    if report.leaves_width_unused() {
        log::warn!(
            "Host supports {} but the crate was compiled for {}; rebuild with \
             RUSTFLAGS=\"-C target-cpu=native\"{} to use it",
            report.host,
            report.compiled,
            if report.host == WidthKind::B64 { " and --features avx512" } else { "" }
        );
    }
    report
}

// ============================================================================
// Unit Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    /// The host can always run what the crate was compiled for.
    #[test]
    fn test_host_width_covers_compiled_width() {
        let host = detect_host_width();
        println!("Detected host width: {host} ({})", width_description(host));
        assert!(host >= compiled_width());
    }

    #[test]
    fn test_override_only_narrows() {
        assert_eq!(apply_width_override(WidthKind::B32, Some("b16")), WidthKind::B16);
        assert_eq!(apply_width_override(WidthKind::B16, Some("b64")), WidthKind::B16);
        assert_eq!(apply_width_override(WidthKind::B32, None), WidthKind::B32);
    }

    #[test]
    fn test_bad_override_is_ignored() {
        assert_eq!(apply_width_override(WidthKind::B32, Some("b48")), WidthKind::B32);
    }

    #[test]
    fn test_lanes_per_register() {
        assert_eq!(lanes_per_register(WidthKind::B16, 4), 4);
        assert_eq!(lanes_per_register(WidthKind::B32, 8), 4);
        assert_eq!(lanes_per_register(WidthKind::B64, 4), 16);
        assert_eq!(lanes_per_register(WidthKind::Scalar, 8), 1);
    }

    #[test]
    fn test_report_flags_unused_width() {
        let report = WidthReport {
            compiled: WidthKind::B16,
            host: WidthKind::B32,
        };
        assert!(report.leaves_width_unused());
        assert!(!WidthReport { compiled: WidthKind::B32, host: WidthKind::B32 }.leaves_width_unused());
    }
}
