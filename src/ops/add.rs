//! In-place element-wise addition.
//!
//! Floating-point widths only; the register file has no integer lane add in
//! this crate's instruction set, and requesting one does not compile. NaN
//! and infinity propagate per IEEE rules identically in both paths.

use crate::dispatch;
use crate::engine::SimdEngine;
use crate::lane::{Lane, LaneAdd};

/// Adds `value` to every element of `data` in place.
pub fn add<E, T>(data: &mut [T], value: T)
where
    E: SimdEngine,
    T: LaneAdd<E> + core::ops::AddAssign,
{
    unsafe { add_raw::<E, T>(data.as_mut_ptr(), data.len(), value) }
}

/// Raw-pointer form of [`add`].
///
/// # Safety
///
/// `ptr` must be valid for reads and writes of `len` elements, aligned to
/// `T`.
pub unsafe fn add_raw<E, T>(ptr: *mut T, len: usize, value: T)
where
    E: SimdEngine,
    T: LaneAdd<E> + core::ops::AddAssign,
{
    let value_v = unsafe { <T as Lane<E>>::splat(value) };

    let scalar = |p: *mut T, n: usize| {
        for i in 0..n {
            unsafe { *p.add(i) += value };
        }
    };
    let vector = |p: *mut T| unsafe {
        let sum = <T as LaneAdd<E>>::add(E::load(p as *const u8), value_v);
        E::store(p as *mut u8, sum);
    };

    unsafe { dispatch::process_mut::<E, T, (), _, _>(ptr, len, scalar, vector) };
}

#[cfg(test)]
mod tests {
    use crate::engine::Engine128;
    use crate::scalar;

    #[test]
    fn matches_reference_bit_for_bit() {
        let mut a: Vec<f32> = (0..53).map(|i| i as f32 * 0.25).collect();
        let mut b = a.clone();
        super::add::<Engine128, _>(&mut a, 7.17);
        scalar::add(&mut b, 7.17);
        let a_bits: Vec<u32> = a.iter().map(|v| v.to_bits()).collect();
        let b_bits: Vec<u32> = b.iter().map(|v| v.to_bits()).collect();
        assert_eq!(a_bits, b_bits);
    }

    #[test]
    fn nan_propagates_in_both_paths() {
        let mut data = vec![1.0f64; 9];
        data[4] = f64::NAN;
        super::add::<Engine128, _>(&mut data, 1.0);
        assert!(data[4].is_nan());
        assert_eq!(data[0], 2.0);
    }
}
