//! Buffer reversal by register-pair swaps.
//!
//! Works inward from both ends: load a register from each end, mirror each
//! with the lane-reversal shuffle, store them crosswise. The walk is
//! two-ended so it cannot be alignment-partitioned like the other
//! transforms; loads and stores are unaligned. Whatever is left in the
//! middle (fewer than two registers) is reversed by ordinary pairwise swap.

use crate::engine::SimdEngine;
use crate::lane::Lane;

/// Reverses the element order of `data` in place.
pub fn reverse<E, T>(data: &mut [T])
where
    E: SimdEngine,
    T: Lane<E>,
{
    let len = data.len();
    let cap = E::BYTES / size_of::<T>();
    let half_way = len / 2 / cap;
    let ptr = data.as_mut_ptr();

    for i in 0..half_way {
        unsafe {
            let left = ptr.add(i * cap);
            let right = ptr.add(len - cap - i * cap);
            let l = <T as Lane<E>>::reverse_register(E::loadu(left as *const u8));
            let r = <T as Lane<E>>::reverse_register(E::loadu(right as *const u8));
            E::storeu(left as *mut u8, r);
            E::storeu(right as *mut u8, l);
        }
    }

    data[half_way * cap..len - half_way * cap].reverse();
}

/// Raw-pointer form of [`reverse`].
///
/// # Safety
///
/// `ptr` must be valid for reads and writes of `len` elements, aligned to
/// `T`, and the elements must be initialized.
pub unsafe fn reverse_raw<E, T>(ptr: *mut T, len: usize)
where
    E: SimdEngine,
    T: Lane<E>,
{
    reverse::<E, T>(unsafe { std::slice::from_raw_parts_mut(ptr, len) });
}

#[cfg(test)]
mod tests {
    use crate::engine::Engine128;

    #[test]
    fn odd_length() {
        let mut data = [1u8, 2, 3, 4, 5];
        super::reverse::<Engine128, _>(&mut data);
        assert_eq!(data, [5, 4, 3, 2, 1]);
    }

    #[test]
    fn involution_across_lengths() {
        for len in 0..130usize {
            let original: Vec<u16> = (0..len as u16).collect();
            let mut data = original.clone();
            super::reverse::<Engine128, _>(&mut data);
            super::reverse::<Engine128, _>(&mut data);
            assert_eq!(data, original, "len={len}");
        }
    }

    #[test]
    fn matches_reference_for_wide_elements() {
        let original: Vec<u64> = (0..37).collect();
        let mut data = original.clone();
        let mut expected = original.clone();
        super::reverse::<Engine128, _>(&mut data);
        expected.reverse();
        assert_eq!(data, expected);
    }
}
