//! Alignment-aware SIMD bulk transforms over slices of primitive elements.
//!
//! Five transform families — replace-all, count-matching, element-wise add,
//! buffer reverse, and range classification — each executed many elements
//! per instruction while producing output byte-identical to the scalar
//! reference loops in [`scalar`].
//!
//! The load-bearing piece is [`dispatch`]: any buffer is split into an
//! unaligned head, a register-aligned body, and an unaligned tail; head and
//! tail run through a scalar handler, the body through a wide-register
//! handler one register at a time. [`engine`] abstracts the 128-bit and
//! 256-bit register files, and [`lane`] maps each element width to the
//! right compare/broadcast/shuffle instruction at compile time. The
//! algorithms in [`ops`] are short reducers plugged into that core.
//!
//! Register width is a compile-time choice per call site. The functions at
//! the crate root default to 256-bit registers (128-bit for the range
//! family, which has no wider hardware primitive); pick explicitly through
//! [`ops`] when the width matters. Nothing here detects CPU features at
//! runtime — callers own that decision, and own serializing concurrent
//! access to a shared buffer. Calls on disjoint buffers are freely
//! concurrent; there is no state between calls beyond the compile-time
//! permutation tables.

pub mod dispatch;
pub mod engine;
pub mod lane;
#[cfg(target_arch = "x86_64")]
pub mod ops;
pub mod scalar;
pub mod utils;

pub use lane::ScalarBits;

#[cfg(target_arch = "x86_64")]
pub use engine::{Engine128, Engine256, SimdEngine};
#[cfg(target_arch = "x86_64")]
pub use lane::{Lane, LaneAdd};

/// Register width used by the crate-root convenience functions.
#[cfg(target_arch = "x86_64")]
pub type DefaultEngine = Engine256;

/// [`ops::replace`] on the default register width.
#[cfg(target_arch = "x86_64")]
pub fn replace<T: Lane<DefaultEngine>>(data: &mut [T], target: T, replacement: T) {
    ops::replace::<DefaultEngine, T>(data, target, replacement)
}

/// [`ops::count`] on the default register width.
#[cfg(target_arch = "x86_64")]
pub fn count<T: Lane<DefaultEngine>>(data: &[T], target: T) -> usize {
    ops::count::<DefaultEngine, T>(data, target)
}

/// [`ops::add`] on the default register width.
#[cfg(target_arch = "x86_64")]
pub fn add<T>(data: &mut [T], value: T)
where
    T: LaneAdd<DefaultEngine> + core::ops::AddAssign,
{
    ops::add::<DefaultEngine, T>(data, value)
}

/// [`ops::reverse`] on the default register width.
#[cfg(target_arch = "x86_64")]
pub fn reverse<T: Lane<DefaultEngine>>(data: &mut [T]) {
    ops::reverse::<DefaultEngine, T>(data)
}

#[cfg(target_arch = "x86_64")]
pub use ops::{convert_case, count_in_range, to_lowercase, to_uppercase};

// Scalar fallbacks keep the API available off x86_64.

#[cfg(not(target_arch = "x86_64"))]
pub fn replace<T: ScalarBits>(data: &mut [T], target: T, replacement: T) {
    scalar::replace(data, target, replacement)
}

#[cfg(not(target_arch = "x86_64"))]
pub fn count<T: ScalarBits>(data: &[T], target: T) -> usize {
    scalar::count(data, target)
}

#[cfg(not(target_arch = "x86_64"))]
pub fn add<T>(data: &mut [T], value: T)
where
    T: Copy + core::ops::AddAssign,
{
    scalar::add(data, value)
}

#[cfg(not(target_arch = "x86_64"))]
pub fn reverse<T>(data: &mut [T]) {
    scalar::reverse(data)
}

#[cfg(not(target_arch = "x86_64"))]
pub fn count_in_range<T: PartialOrd + Copy>(data: &[T], ranges: &[(T, T)]) -> usize {
    scalar::count_in_range(data, ranges)
}

#[cfg(not(target_arch = "x86_64"))]
pub fn convert_case<T>(data: &mut [T], ranges: &[(T, T)])
where
    T: ScalarBits + PartialOrd,
    T::Bits: From<u8>,
{
    scalar::convert_case(data, ranges)
}

#[cfg(not(target_arch = "x86_64"))]
pub fn to_lowercase(data: &mut [u8]) {
    scalar::convert_case(data, &[(b'A', b'Z')])
}

#[cfg(not(target_arch = "x86_64"))]
pub fn to_uppercase(data: &mut [u8]) {
    scalar::convert_case(data, &[(b'a', b'z')])
}
