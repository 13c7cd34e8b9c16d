// tests/width_report.rs
// Runtime capability report: logging and the environment override.

mod common;

use simd_tuples::compute::simd_abstraction::simd::{
    FORCE_WIDTH_ENV, apply_width_override, lanes_per_register, width_report,
};
use simd_tuples::{WidthKind, compiled_width, detect_host_width, log_width_summary, width_description};

#[test]
fn test_summary_logs_and_matches_report() {
    common::init_logging();
    let report = log_width_summary();
    assert_eq!(report.compiled, compiled_width());
    assert_eq!(report, width_report());
    assert!(!width_description(report.host).is_empty());
}

#[test]
fn test_host_never_below_compiled_without_override() {
    if std::env::var(FORCE_WIDTH_ENV).is_ok() {
        return;
    }
    assert!(detect_host_width() >= compiled_width());
}

#[test]
fn test_override_values() {
    common::init_logging();
    for (raw, expected) in [
        ("scalar", WidthKind::Scalar),
        ("B16", WidthKind::B16),
        ("neon", WidthKind::B16),
        ("avx", WidthKind::B32),
        ("nonsense", WidthKind::B64),
    ] {
        assert_eq!(apply_width_override(WidthKind::B64, Some(raw)), expected, "{raw}");
    }
}

#[test]
fn test_lane_counts() {
    for width in WidthKind::ALL {
        assert_eq!(lanes_per_register(width, 4), width.lanes_for(4));
    }
    assert_eq!(lanes_per_register(WidthKind::B32, 8), 4);
}
