//! Single-element companions of the tuple types.
//!
//! - [`Base`]: a value broadcast across a register, cheap to combine with
//!   tuples of the same width.
//! - [`InBase`]: a value extracted from a tuple, width independent.

mod base;
mod in_base;

pub use base::Base;
pub use in_base::InBase;
