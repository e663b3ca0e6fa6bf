//! Count-matching via move-mask and population count.
//!
//! Each register compare yields a byte-granular mask, so the running sum
//! counts mask *bits*; one division by the element width at the end turns
//! bits into elements. Head and tail are counted directly.

use crate::dispatch;
use crate::engine::SimdEngine;
use crate::lane::Lane;

/// Number of elements of `data` equal to `target` (byte-pattern equality).
pub fn count<E, T>(data: &[T], target: T) -> usize
where
    E: SimdEngine,
    T: Lane<E>,
{
    unsafe { count_raw::<E, T>(data.as_ptr(), data.len(), target) }
}

/// Raw-pointer form of [`count`].
///
/// # Safety
///
/// `ptr` must be valid for reads of `len` elements, aligned to `T`.
pub unsafe fn count_raw<E, T>(ptr: *const T, len: usize, target: T) -> usize
where
    E: SimdEngine,
    T: Lane<E>,
{
    let target_v = unsafe { <T as Lane<E>>::splat(target) };
    let mut mask_bits: usize = 0;

    let scalar = |p: *const T, n: usize| {
        let mut matched = 0usize;
        for i in 0..n {
            if unsafe { *p.add(i) }.bit_eq(target) {
                matched += 1;
            }
        }
        matched
    };
    let vector = |p: *const T| unsafe {
        let mask = <T as Lane<E>>::cmpeq(E::load(p as *const u8), target_v);
        mask_bits += E::movemask_epi8(mask).count_ones() as usize;
    };

    let result = unsafe { dispatch::process::<E, T, usize, _, _>(ptr, len, scalar, vector) };
    result.head + result.tail + mask_bits / size_of::<T>()
}
