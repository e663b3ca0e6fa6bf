//! The algorithm layer: each operation composes the alignment dispatcher,
//! the lane-level instruction selection, and a broadcast operand or two
//! into one user-facing bulk transform.
//!
//! Every operation has a safe slice form and a raw `(pointer, length)` form
//! producing identical results, and is generic over the register backend
//! (`Engine128`/`Engine256`) except for the range-classification family,
//! which is fixed to 128-bit registers by the hardware primitive it uses.

mod add;
mod count;
mod ranges;
mod replace;
mod reverse;

pub use add::{add, add_raw};
pub use count::{count, count_raw};
pub use ranges::{
    RangeElement, convert_case, convert_case_raw, count_in_range, count_in_range_raw,
    to_lowercase, to_uppercase,
};
pub use replace::{replace, replace_raw};
pub use reverse::{reverse, reverse_raw};
