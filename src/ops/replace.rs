//! Replace-all by masked XOR toggle.
//!
//! The register path never branches per element: the equality mask, ANDed
//! with a broadcast `replacement XOR target` delta, toggles exactly the
//! bits that differ wherever a lane matched and leaves non-matching lanes
//! untouched.

use crate::dispatch;
use crate::engine::SimdEngine;
use crate::lane::Lane;

/// Writes `replacement` over every element of `data` equal to `target`
/// (byte-pattern equality).
pub fn replace<E, T>(data: &mut [T], target: T, replacement: T)
where
    E: SimdEngine,
    T: Lane<E>,
{
    unsafe { replace_raw::<E, T>(data.as_mut_ptr(), data.len(), target, replacement) }
}

/// Raw-pointer form of [`replace`].
///
/// # Safety
///
/// `ptr` must be valid for reads and writes of `len` elements, aligned to
/// `T`.
pub unsafe fn replace_raw<E, T>(ptr: *mut T, len: usize, target: T, replacement: T)
where
    E: SimdEngine,
    T: Lane<E>,
{
    let delta = replacement.to_bits() ^ target.to_bits();
    let target_v = unsafe { <T as Lane<E>>::splat(target) };
    let delta_v = unsafe { <T as Lane<E>>::splat_bits(delta) };

    let scalar = |p: *mut T, n: usize| {
        for i in 0..n {
            unsafe {
                if (*p.add(i)).bit_eq(target) {
                    *p.add(i) = replacement;
                }
            }
        }
    };
    let vector = |p: *mut T| unsafe {
        let reg = E::load(p as *const u8);
        let mask = <T as Lane<E>>::cmpeq(reg, target_v);
        let mask = E::and_si(mask, delta_v);
        E::store(p as *mut u8, E::xor_si(reg, mask));
    };

    unsafe { dispatch::process_mut::<E, T, (), _, _>(ptr, len, scalar, vector) };
}
