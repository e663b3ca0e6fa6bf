//! Compile-time lane-reversal permutation tables.
//!
//! A byte-shuffle register built from one of these tables maps local lane
//! index `k` to lane `capacity - 1 - k` at byte granularity, preserving the
//! byte order inside each element. The 256-bit tables reverse within each
//! 128-bit half (the byte shuffle instruction does not cross halves); a
//! register-half swap completes the full-width reversal.
//!
//! Tables are plain `const` arrays built by a `const fn` loop, immutable for
//! the process lifetime.

/// Builds the byte permutation that reverses `elem_bytes`-wide elements
/// within each 128-bit half of an `N`-byte register.
const fn reverse_table<const N: usize>(elem_bytes: usize) -> [u8; N] {
    let lanes_per_half = 16 / elem_bytes;
    let mut table = [0u8; N];
    let mut i = 0;
    while i < N {
        let offset = i % 16;
        let lane = offset / elem_bytes;
        let byte = offset % elem_bytes;
        table[i] = ((lanes_per_half - 1 - lane) * elem_bytes + byte) as u8;
        i += 1;
    }
    table
}

pub const REVERSE_128_W1: [u8; 16] = reverse_table::<16>(1);
pub const REVERSE_128_W2: [u8; 16] = reverse_table::<16>(2);
pub const REVERSE_128_W4: [u8; 16] = reverse_table::<16>(4);
pub const REVERSE_128_W8: [u8; 16] = reverse_table::<16>(8);

pub const REVERSE_256_W1: [u8; 32] = reverse_table::<32>(1);
pub const REVERSE_256_W2: [u8; 32] = reverse_table::<32>(2);
pub const REVERSE_256_W4: [u8; 32] = reverse_table::<32>(4);
pub const REVERSE_256_W8: [u8; 32] = reverse_table::<32>(8);
