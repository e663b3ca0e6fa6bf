//! Range classification over 8/16-bit elements.
//!
//! Built on the packed-compare range primitive (`pcmpestrm` with the
//! range-comparison control), which exists only for 128-bit registers — so
//! this family always runs on `Engine128` regardless of what width the
//! caller uses elsewhere. The explicit-length form is used rather than the
//! implicit (NUL-terminated) one so zero-valued elements classify exactly
//! like the scalar path.
//!
//! Up to [`RangeElement::MAX_PAIRS`] inclusive `(low, high)` ranges fit in
//! the comparison operand register; exceeding that is a contract violation
//! and asserts.

use std::arch::x86_64::{
    _SIDD_CMP_RANGES, _SIDD_SBYTE_OPS, _SIDD_SWORD_OPS, _SIDD_UBYTE_OPS, _SIDD_UNIT_MASK,
    _SIDD_UWORD_OPS, __m128i, _mm_cmpestrm, _mm_loadu_si128,
};

use crate::dispatch;
use crate::engine::{Engine128, SimdEngine};
use crate::lane::{Lane, ScalarBits};

/// Element types the range-compare primitive can classify, with the
/// signedness-matched control word baked into each impl.
pub trait RangeElement: ScalarBits + PartialOrd + Lane<Engine128> {
    /// How many `(low, high)` pairs fit in the comparison operand.
    const MAX_PAIRS: usize;
    /// Element lanes per 128-bit register, as the explicit-length argument.
    const LANES: i32;
    /// The 0x20 case-toggle bit at this element's width.
    const CASE_BIT: Self::Bits;

    /// Range-compares one register of data against packed `(low, high)`
    /// endpoint pairs, producing an all-ones lane mask for elements inside
    /// any range.
    ///
    /// # Safety
    ///
    /// Requires SSE4.2.
    unsafe fn range_mask(ranges: __m128i, endpoints: i32, data: __m128i) -> __m128i;
}

macro_rules! range_element_impl {
    ($($ty:ty => ($ctrl:expr, $pairs:expr, $lanes:expr, $case_bit:expr)),+ $(,)?) => {$(
        impl RangeElement for $ty {
            const MAX_PAIRS: usize = $pairs;
            const LANES: i32 = $lanes;
            const CASE_BIT: Self::Bits = $case_bit;

            #[inline]
            #[target_feature(enable = "sse4.2")]
            unsafe fn range_mask(ranges: __m128i, endpoints: i32, data: __m128i) -> __m128i {
                unsafe {
                    _mm_cmpestrm::<{ $ctrl | _SIDD_CMP_RANGES | _SIDD_UNIT_MASK }>(
                        ranges,
                        endpoints,
                        data,
                        Self::LANES,
                    )
                }
            }
        }
    )+};
}

range_element_impl!(
    u8 => (_SIDD_UBYTE_OPS, 8, 16, 0x20u8),
    i8 => (_SIDD_SBYTE_OPS, 8, 16, 0x20u8),
    u16 => (_SIDD_UWORD_OPS, 4, 8, 0x20u16),
    i16 => (_SIDD_SWORD_OPS, 4, 8, 0x20u16),
);

#[inline]
fn in_ranges<T: PartialOrd + Copy>(v: T, ranges: &[(T, T)]) -> bool {
    ranges.iter().any(|&(lo, hi)| v >= lo && v <= hi)
}

/// Flattens `(low, high)` pairs into one comparison register, padded with
/// zeros, and returns it with the endpoint count.
fn pack_ranges<T: RangeElement>(ranges: &[(T, T)]) -> ([u8; 16], i32) {
    assert!(
        ranges.len() <= T::MAX_PAIRS,
        "at most {} ranges fit the comparison register",
        T::MAX_PAIRS
    );
    let mut packed = [0u8; 16];
    let elem = size_of::<T>();
    for (i, &(lo, hi)) in ranges.iter().enumerate() {
        let at = 2 * i * elem;
        unsafe {
            core::ptr::copy_nonoverlapping(
                &lo as *const T as *const u8,
                packed.as_mut_ptr().add(at),
                elem,
            );
            core::ptr::copy_nonoverlapping(
                &hi as *const T as *const u8,
                packed.as_mut_ptr().add(at + elem),
                elem,
            );
        }
    }
    (packed, (ranges.len() * 2) as i32)
}

/// Number of elements falling inside any of the inclusive `ranges`.
pub fn count_in_range<T: RangeElement>(data: &[T], ranges: &[(T, T)]) -> usize {
    unsafe { count_in_range_raw(data.as_ptr(), data.len(), ranges) }
}

/// Raw-pointer form of [`count_in_range`].
///
/// # Safety
///
/// `ptr` must be valid for reads of `len` elements, aligned to `T`.
pub unsafe fn count_in_range_raw<T: RangeElement>(
    ptr: *const T,
    len: usize,
    ranges: &[(T, T)],
) -> usize {
    let (packed, endpoints) = pack_ranges(ranges);
    let ranges_v = unsafe { _mm_loadu_si128(packed.as_ptr() as *const __m128i) };
    let mut mask_bits: usize = 0;

    let scalar = |p: *const T, n: usize| {
        let mut matched = 0usize;
        for i in 0..n {
            if in_ranges(unsafe { *p.add(i) }, ranges) {
                matched += 1;
            }
        }
        matched
    };
    let vector = |p: *const T| unsafe {
        let mask = T::range_mask(ranges_v, endpoints, Engine128::load(p as *const u8));
        mask_bits += Engine128::movemask_epi8(mask).count_ones() as usize;
    };

    let result =
        unsafe { dispatch::process::<Engine128, T, usize, _, _>(ptr, len, scalar, vector) };
    result.head + result.tail + mask_bits / size_of::<T>()
}

/// Toggles the 0x20 case bit in every element inside any of the inclusive
/// `ranges` — the same masked-toggle pattern as replace, driven by the
/// range predicate instead of equality.
pub fn convert_case<T: RangeElement>(data: &mut [T], ranges: &[(T, T)]) {
    unsafe { convert_case_raw(data.as_mut_ptr(), data.len(), ranges) }
}

/// Raw-pointer form of [`convert_case`].
///
/// # Safety
///
/// `ptr` must be valid for reads and writes of `len` elements, aligned to
/// `T`.
pub unsafe fn convert_case_raw<T: RangeElement>(ptr: *mut T, len: usize, ranges: &[(T, T)]) {
    let (packed, endpoints) = pack_ranges(ranges);
    let ranges_v = unsafe { _mm_loadu_si128(packed.as_ptr() as *const __m128i) };
    let case_v = unsafe { <T as Lane<Engine128>>::splat_bits(T::CASE_BIT) };

    let scalar = |p: *mut T, n: usize| {
        for i in 0..n {
            unsafe {
                let v = *p.add(i);
                if in_ranges(v, ranges) {
                    *p.add(i) = T::from_bits(v.to_bits() ^ T::CASE_BIT);
                }
            }
        }
    };
    let vector = |p: *mut T| unsafe {
        let reg = Engine128::load(p as *const u8);
        let mask = T::range_mask(ranges_v, endpoints, reg);
        let mask = Engine128::and_si(mask, case_v);
        Engine128::store(p as *mut u8, Engine128::xor_si(reg, mask));
    };

    unsafe { dispatch::process_mut::<Engine128, T, (), _, _>(ptr, len, scalar, vector) };
}

/// ASCII upper-to-lower conversion.
pub fn to_lowercase(data: &mut [u8]) {
    convert_case(data, &[(b'A', b'Z')]);
}

/// ASCII lower-to-upper conversion.
pub fn to_uppercase(data: &mut [u8]) {
    convert_case(data, &[(b'a', b'z')]);
}
