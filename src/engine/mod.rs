//! Register abstraction layer.
//!
//! This module exposes a single surface for the handful of wide-register
//! operations the bulk transforms are built from. It hides the width
//! difference between the 128-bit (SSE2/SSSE3/SSE4.1) and 256-bit (AVX2)
//! register files behind the `SimdEngine` trait while preserving zero-cost
//! calls to the architecture intrinsics.
//!
//! The abstraction is intentionally small and opinionated: all functions are
//! unsafe and operate on the backend's raw vector type, but with a uniform
//! API and identical semantics across widths. Register width is a
//! compile-time choice per call site — there is no runtime feature
//! detection, and selecting an operation a width/element combination does
//! not support is a missing trait bound, not a runtime error.
//!
//! ## Engines and widths
//!
//! - `Engine128`: 128-bit registers — 16 lanes of 8-bit / 8 of 16-bit /
//!   4 of 32-bit / 2 of 64-bit elements.
//! - `Engine256`: 256-bit registers — double the lane counts of `Engine128`.
//!
//! ## Safety model
//!
//! All trait functions are `unsafe` because they may:
//! - require specific CPU features (SSSE3, SSE4.1, AVX2),
//! - dereference raw pointers for loads/stores, and
//! - assume alignment constraints on pointers (the `load`/`store` pair).
//!
//! Callers must ensure the chosen engine matches the CPU's supported
//! features and that pointer arguments are valid for the full register
//! width, aligned to `BYTES` for the aligned variants.

pub mod tables;
pub mod types;

#[cfg(target_arch = "x86_64")]
mod engine128;
#[cfg(target_arch = "x86_64")]
mod engine256;

#[cfg(target_arch = "x86_64")]
pub use engine128::Engine128;
#[cfg(target_arch = "x86_64")]
pub use engine256::Engine256;

/// Compile-time description of a SIMD register backend plus the instruction
/// set the algorithms draw from.
///
/// Width-keyed operations (`cmpeq_epi8` .. `cmpeq_epi64`, the `set1`
/// broadcasts) exist for every element width; the element-to-width mapping
/// lives in [`crate::lane`]. Float and double lane adds take and return the
/// integer register type, bit-casting internally, so every algorithm moves
/// data through one register type.
#[cfg(target_arch = "x86_64")]
pub trait SimdEngine: Copy {
    /// Register width in bytes. Also the alignment the dispatcher aligns
    /// buffer bodies to.
    const BYTES: usize;

    /// The backend's raw integer register type.
    type Vec: Copy;

    /// Lane-reversal shuffle tables per element width, built at compile
    /// time in [`tables`].
    const REVERSE_W1: &'static [u8];
    const REVERSE_W2: &'static [u8];
    const REVERSE_W4: &'static [u8];
    const REVERSE_W8: &'static [u8];

    /// Load one register from a `BYTES`-aligned address.
    unsafe fn load(p: *const u8) -> Self::Vec;
    /// Load one register from any address.
    unsafe fn loadu(p: *const u8) -> Self::Vec;
    /// Store one register to a `BYTES`-aligned address.
    unsafe fn store(p: *mut u8, v: Self::Vec);
    /// Store one register to any address.
    unsafe fn storeu(p: *mut u8, v: Self::Vec);

    /// Bitwise AND of two registers.
    unsafe fn and_si(a: Self::Vec, b: Self::Vec) -> Self::Vec;
    /// Bitwise XOR of two registers.
    unsafe fn xor_si(a: Self::Vec, b: Self::Vec) -> Self::Vec;

    /// Extract the high bit of every byte lane into an integer bitmask.
    /// Bit `i` corresponds to byte lane `i`.
    unsafe fn movemask_epi8(v: Self::Vec) -> u32;

    /// Shuffle bytes of `v` by the per-half indices in `idx`.
    unsafe fn shuffle_epi8(v: Self::Vec, idx: Self::Vec) -> Self::Vec;

    /// Swap the two 128-bit halves of the register; identity when the
    /// register is a single half. Together with a per-half reversal shuffle
    /// this completes a full-width lane reversal.
    unsafe fn swap_halves(v: Self::Vec) -> Self::Vec;

    /// Broadcast a byte into every 8-bit lane.
    unsafe fn set1_epi8(a: i8) -> Self::Vec;
    /// Broadcast into every 16-bit lane.
    unsafe fn set1_epi16(a: i16) -> Self::Vec;
    /// Broadcast into every 32-bit lane.
    unsafe fn set1_epi32(a: i32) -> Self::Vec;
    /// Broadcast into every 64-bit lane.
    unsafe fn set1_epi64(a: i64) -> Self::Vec;

    /// Lane equality on 8-bit lanes; all-ones lanes where equal.
    unsafe fn cmpeq_epi8(a: Self::Vec, b: Self::Vec) -> Self::Vec;
    /// Lane equality on 16-bit lanes.
    unsafe fn cmpeq_epi16(a: Self::Vec, b: Self::Vec) -> Self::Vec;
    /// Lane equality on 32-bit lanes.
    unsafe fn cmpeq_epi32(a: Self::Vec, b: Self::Vec) -> Self::Vec;
    /// Lane equality on 64-bit lanes.
    unsafe fn cmpeq_epi64(a: Self::Vec, b: Self::Vec) -> Self::Vec;

    /// Lane-wise single-precision float add over the integer register.
    unsafe fn add_ps(a: Self::Vec, b: Self::Vec) -> Self::Vec;
    /// Lane-wise double-precision float add over the integer register.
    unsafe fn add_pd(a: Self::Vec, b: Self::Vec) -> Self::Vec;
}
