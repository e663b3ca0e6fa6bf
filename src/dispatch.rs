//! Alignment-aware dispatch engine.
//!
//! Every transform in this crate is the composition of a scalar handler and
//! a one-register vectorized handler, glued together here. [`partition`]
//! splits a buffer into an unaligned head, a register-aligned body, and an
//! unaligned tail using address arithmetic only; [`process_mut`] /
//! [`process`] route head and tail through the scalar handler and stride
//! the vectorized handler across the body one register at a time.
//!
//! Guarantees:
//! - every element is handled exactly once, by exactly one of the two
//!   handlers;
//! - no access outside `[ptr, ptr + len)`;
//! - the vectorized handler only ever sees a `BYTES`-aligned pointer with a
//!   full register of elements behind it, and is never called when the body
//!   is empty (buffers shorter than one register, or with no alignment
//!   slack, degrade to head + tail);
//! - the scalar handler is always invoked for both head and tail, including
//!   zero-length slices, so result combination is uniform for every caller.

#[cfg(target_arch = "x86_64")]
use crate::engine::SimdEngine;

/// Element counts of the three-way split of a buffer.
///
/// `head + body + tail` equals the original length; `head` and `tail` are
/// each strictly smaller than one register's element capacity and `body` is
/// an exact multiple of it (possibly zero).
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Segments {
    pub head: usize,
    pub body: usize,
    pub tail: usize,
}

/// Splits `len` elements of `elem_bytes` each, starting at address `addr`,
/// against a `register_bytes` alignment boundary.
///
/// Pure address arithmetic; no data is inspected. `register_bytes` must be
/// a power of two and `addr` a multiple of `elem_bytes` (any `&[T]` of a
/// primitive satisfies this).
///
/// A buffer too short to reach the next alignment boundary is returned as
/// all-head, so callers degrade to the scalar path instead of reading past
/// the end.
#[inline]
pub fn partition(addr: usize, len: usize, elem_bytes: usize, register_bytes: usize) -> Segments {
    let mask = register_bytes - 1;
    let head = ((register_bytes - (addr & mask)) & mask) / elem_bytes;
    if head >= len {
        return Segments {
            head: len,
            body: 0,
            tail: 0,
        };
    }
    let end = addr + len * elem_bytes;
    let tail = (end & mask) / elem_bytes;
    Segments {
        head,
        body: len - head - tail,
        tail,
    }
}

/// Result of one dispatched pass: the scalar handler's head and tail
/// returns, plus where the vectorized body sat. Handlers returning `()`
/// combine trivially.
#[derive(Clone, Copy, Debug)]
pub struct Dispatched<R> {
    pub head: R,
    pub tail: R,
    /// Element offset of the aligned body within the buffer.
    pub body_offset: usize,
    /// Element count of the aligned body; an exact multiple of the
    /// register capacity.
    pub body_len: usize,
}

/// Dispatches a mutating transform across `len` elements at `ptr`.
///
/// `scalar` is applied once to the head slice and once to the tail slice;
/// `vector` is applied to the body at stride `E::BYTES / size_of::<T>()`,
/// always on a `E::BYTES`-aligned pointer.
///
/// # Safety
///
/// `ptr` must be valid for reads and writes of `len` elements and aligned
/// to `T`. The closures receive pointers derived from `ptr` and must stay
/// within the advertised counts (one register's worth for `vector`).
#[cfg(target_arch = "x86_64")]
pub unsafe fn process_mut<E, T, R, S, V>(
    ptr: *mut T,
    len: usize,
    mut scalar: S,
    mut vector: V,
) -> Dispatched<R>
where
    E: SimdEngine,
    T: Copy,
    S: FnMut(*mut T, usize) -> R,
    V: FnMut(*mut T),
{
    let seg = partition(ptr as usize, len, size_of::<T>(), E::BYTES);
    let head = scalar(ptr, seg.head);
    let tail = unsafe { scalar(ptr.add(len - seg.tail), seg.tail) };

    let step = E::BYTES / size_of::<T>();
    let body = unsafe { ptr.add(seg.head) };
    let mut i = 0;
    while i < seg.body {
        unsafe { vector(body.add(i)) };
        i += step;
    }

    Dispatched {
        head,
        tail,
        body_offset: seg.head,
        body_len: seg.body,
    }
}

/// Read-only twin of [`process_mut`] for reducing transforms.
///
/// # Safety
///
/// Same as [`process_mut`], minus the write requirement.
#[cfg(target_arch = "x86_64")]
pub unsafe fn process<E, T, R, S, V>(
    ptr: *const T,
    len: usize,
    mut scalar: S,
    mut vector: V,
) -> Dispatched<R>
where
    E: SimdEngine,
    T: Copy,
    S: FnMut(*const T, usize) -> R,
    V: FnMut(*const T),
{
    let seg = partition(ptr as usize, len, size_of::<T>(), E::BYTES);
    let head = scalar(ptr, seg.head);
    let tail = unsafe { scalar(ptr.add(len - seg.tail), seg.tail) };

    let step = E::BYTES / size_of::<T>();
    let body = unsafe { ptr.add(seg.head) };
    let mut i = 0;
    while i < seg.body {
        unsafe { vector(body.add(i)) };
        i += step;
    }

    Dispatched {
        head,
        tail,
        body_offset: seg.head,
        body_len: seg.body,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn partition_covers_every_combination() {
        for &reg in &[16usize, 32] {
            for &elem in &[1usize, 2, 4, 8] {
                let cap = reg / elem;
                for slot in 0..64 {
                    let addr = 1 << 20 | slot * elem;
                    for len in 0..(4 * cap + 3) {
                        let seg = partition(addr, len, elem, reg);
                        assert_eq!(
                            seg.head + seg.body + seg.tail,
                            len,
                            "coverage addr={addr} len={len} elem={elem} reg={reg}"
                        );
                        assert!(seg.head < cap, "head {} >= cap {}", seg.head, cap);
                        assert!(seg.tail < cap, "tail {} >= cap {}", seg.tail, cap);
                        assert_eq!(seg.body % cap, 0, "body not a register multiple");
                        if seg.body > 0 {
                            // body starts on the alignment boundary
                            assert_eq!((addr + seg.head * elem) % reg, 0);
                        }
                    }
                }
            }
        }
    }

    #[test]
    fn aligned_start_has_empty_head() {
        let seg = partition(1 << 12, 100, 4, 16);
        assert_eq!(seg.head, 0);
        assert_eq!(seg.body, 100);
        assert_eq!(seg.tail, 0);
    }

    #[test]
    fn short_buffer_is_all_head() {
        // 3 bytes starting one past an alignment boundary: the next
        // boundary is out of reach, nothing is vectorizable.
        let seg = partition((1 << 12) + 1, 3, 1, 16);
        assert_eq!(
            seg,
            Segments {
                head: 3,
                body: 0,
                tail: 0
            }
        );
    }

    #[test]
    fn empty_buffer() {
        let seg = partition((1 << 12) + 8, 0, 2, 32);
        assert_eq!(
            seg,
            Segments {
                head: 0,
                body: 0,
                tail: 0
            }
        );
    }

    #[cfg(target_arch = "x86_64")]
    #[test]
    fn process_touches_every_element_exactly_once() {
        use crate::engine::Engine128;

        // Offset the slice start so the head is non-empty on most runs.
        let mut backing = vec![0u32; 70];
        for off in 0..4 {
            let data = &mut backing[off..];
            let len = data.len();
            data.fill(0);
            let ptr = data.as_mut_ptr();
            let result = unsafe {
                process_mut::<Engine128, u32, usize, _, _>(
                    ptr,
                    len,
                    |p, n| {
                        for i in 0..n {
                            unsafe { *p.add(i) += 1 };
                        }
                        n
                    },
                    |p| {
                        for i in 0..4 {
                            unsafe { *p.add(i) += 1 };
                        }
                    },
                )
            };
            assert!(data.iter().all(|&v| v == 1), "off={off}");
            assert_eq!(result.head + result.tail + result.body_len, len);
        }
    }
}
