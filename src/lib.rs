//! Fixed-size SIMD tuples with compile-time register width selection.
//!
//! Code is written once against `Simd3<f32>`, `Simd3x4<f64>` and friends;
//! the register layout behind each type (scalar, 128, 256 or 512-bit) is
//! picked at compile time from the element type, the arity and the target
//! features. Nothing here dispatches at runtime.
//!
//! Layout of the crate:
//! - [`compute`]: width markers and resolution, element traits, and the
//!   per-ISA register engines.
//! - [`lane`]: `Base` (broadcast value) and `InBase` (extracted lane).
//! - [`tuple`]: the `Simd<T, N, W>` tuples with masks and shuffles.
//! - [`packed`]: structure-of-arrays 3-vector batches.
//! - [`data`]: plain-memory `Data`/`DataPad` forms for storage and interop.

pub mod compute;
pub mod data;
pub mod error;
pub mod lane;
pub mod packed;
pub mod tuple;

pub use compute::simd_abstraction::simd::{
    compiled_width, detect_host_width, log_width_summary, width_description,
};
pub use compute::{TARGET_WIDTH, WidthKind, resolve_width};
pub use error::{Result, TupleError};

/// Everything needed to write tuple code.
pub mod prelude {
    pub use crate::compute::element::{SimdElement, SimdFloat};
    pub use crate::compute::{B16, B32, B64, Resolve, Resolved, Scalar, Width, WidthKind};
    pub use crate::data::{Data, DataPad};
    pub use crate::error::TupleError;
    pub use crate::lane::{Base, InBase};
    pub use crate::packed::{Simd3x2, Simd3x3, Simd3x4, Simd3xN};
    pub use crate::tuple::{
        BaseOf, Mask, Shuffle, Simd, Simd2, Simd3, Simd4, Simd6, Simd8, Simd9, Simd12, Simd16,
    };
}
