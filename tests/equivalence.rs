//! Scalar vs vectorized equivalence across element types, buffer lengths,
//! alignment offsets, and register widths.
//!
//! Buffer lengths bracket the register capacity (0, 1, cap-1, cap, cap+1,
//! and a few registers plus change); offsets shift the slice start inside a
//! larger allocation so the dispatcher sees non-empty heads.

#![cfg(target_arch = "x86_64")]

use lanewise::ScalarBits;
use lanewise::engine::SimdEngine;
use lanewise::{Engine128, Engine256, ops, scalar};

fn lcg(state: &mut u64) -> u64 {
    *state = state
        .wrapping_mul(6364136223846793005)
        .wrapping_add(1442695040888963407);
    *state >> 16
}

fn lengths(cap: usize) -> Vec<usize> {
    vec![0, 1, cap - 1, cap, cap + 1, 3 * cap + 5, 10 * cap + 1]
}

fn bit_equal<T: ScalarBits>(a: &[T], b: &[T]) -> bool {
    a.len() == b.len() && a.iter().zip(b.iter()).all(|(x, y)| x.bit_eq(*y))
}

macro_rules! replace_equivalence {
    ($name:ident, $ty:ty, $engine:ty, $feature:tt) => {
        #[test]
        fn $name() {
            if !is_x86_feature_detected!($feature) {
                eprintln!("skipping: CPU lacks {}", $feature);
                return;
            }
            let cap = <$engine>::BYTES / size_of::<$ty>();
            let mut seed = 0x1e57 ^ size_of::<$ty>() as u64;
            for len in lengths(cap) {
                for off in 0..4usize {
                    let backing: Vec<$ty> = (0..len + off)
                        .map(|_| (lcg(&mut seed) % 7) as $ty)
                        .collect();
                    let mut reference = backing.clone();
                    let mut vectorized = backing;
                    ops::replace::<$engine, $ty>(&mut vectorized[off..], 3 as $ty, 9 as $ty);
                    scalar::replace(&mut reference[off..], 3 as $ty, 9 as $ty);
                    assert!(
                        bit_equal(&vectorized, &reference),
                        "len={len} off={off}"
                    );
                }
            }
        }
    };
}

replace_equivalence!(replace_u8_128, u8, Engine128, "sse4.2");
replace_equivalence!(replace_i16_128, i16, Engine128, "sse4.2");
replace_equivalence!(replace_u32_128, u32, Engine128, "sse4.2");
replace_equivalence!(replace_i64_128, i64, Engine128, "sse4.2");
replace_equivalence!(replace_f32_128, f32, Engine128, "sse4.2");
replace_equivalence!(replace_f64_128, f64, Engine128, "sse4.2");
replace_equivalence!(replace_u8_256, u8, Engine256, "avx2");
replace_equivalence!(replace_i16_256, i16, Engine256, "avx2");
replace_equivalence!(replace_u32_256, u32, Engine256, "avx2");
replace_equivalence!(replace_i64_256, i64, Engine256, "avx2");
replace_equivalence!(replace_f32_256, f32, Engine256, "avx2");
replace_equivalence!(replace_f64_256, f64, Engine256, "avx2");

macro_rules! count_equivalence {
    ($name:ident, $ty:ty, $engine:ty, $feature:tt) => {
        #[test]
        fn $name() {
            if !is_x86_feature_detected!($feature) {
                eprintln!("skipping: CPU lacks {}", $feature);
                return;
            }
            let cap = <$engine>::BYTES / size_of::<$ty>();
            let mut seed = 0xc047 ^ size_of::<$ty>() as u64;
            for len in lengths(cap) {
                for off in 0..4usize {
                    let backing: Vec<$ty> = (0..len + off)
                        .map(|_| (lcg(&mut seed) % 5) as $ty)
                        .collect();
                    let data = &backing[off..];
                    assert_eq!(
                        ops::count::<$engine, $ty>(data, 2 as $ty),
                        scalar::count(data, 2 as $ty),
                        "len={len} off={off}"
                    );
                }
            }
        }
    };
}

count_equivalence!(count_u8_128, u8, Engine128, "sse4.2");
count_equivalence!(count_u16_128, u16, Engine128, "sse4.2");
count_equivalence!(count_u32_128, u32, Engine128, "sse4.2");
count_equivalence!(count_u64_128, u64, Engine128, "sse4.2");
count_equivalence!(count_f32_128, f32, Engine128, "sse4.2");
count_equivalence!(count_u8_256, u8, Engine256, "avx2");
count_equivalence!(count_u16_256, u16, Engine256, "avx2");
count_equivalence!(count_u32_256, u32, Engine256, "avx2");
count_equivalence!(count_u64_256, u64, Engine256, "avx2");
count_equivalence!(count_f32_256, f32, Engine256, "avx2");

macro_rules! add_equivalence {
    ($name:ident, $ty:ty, $engine:ty, $feature:tt) => {
        #[test]
        fn $name() {
            if !is_x86_feature_detected!($feature) {
                eprintln!("skipping: CPU lacks {}", $feature);
                return;
            }
            let cap = <$engine>::BYTES / size_of::<$ty>();
            let mut seed = 0xadd ^ size_of::<$ty>() as u64;
            for len in lengths(cap) {
                for off in 0..4usize {
                    let backing: Vec<$ty> = (0..len + off)
                        .map(|_| (lcg(&mut seed) % 1000) as $ty * 0.25)
                        .collect();
                    let mut reference = backing.clone();
                    let mut vectorized = backing;
                    ops::add::<$engine, $ty>(&mut vectorized[off..], 7.17 as $ty);
                    scalar::add(&mut reference[off..], 7.17 as $ty);
                    assert!(
                        bit_equal(&vectorized, &reference),
                        "len={len} off={off}"
                    );
                }
            }
        }
    };
}

add_equivalence!(add_f32_128, f32, Engine128, "sse4.2");
add_equivalence!(add_f64_128, f64, Engine128, "sse4.2");
add_equivalence!(add_f32_256, f32, Engine256, "avx2");
add_equivalence!(add_f64_256, f64, Engine256, "avx2");

macro_rules! reverse_equivalence {
    ($name:ident, $ty:ty, $engine:ty, $feature:tt) => {
        #[test]
        fn $name() {
            if !is_x86_feature_detected!($feature) {
                eprintln!("skipping: CPU lacks {}", $feature);
                return;
            }
            let cap = <$engine>::BYTES / size_of::<$ty>();
            let mut seed = 0x4e4e ^ size_of::<$ty>() as u64;
            for len in lengths(cap) {
                let original: Vec<$ty> =
                    (0..len).map(|_| (lcg(&mut seed) % 251) as $ty).collect();
                let mut reference = original.clone();
                let mut vectorized = original.clone();
                ops::reverse::<$engine, $ty>(&mut vectorized);
                scalar::reverse(&mut reference);
                assert!(bit_equal(&vectorized, &reference), "len={len}");

                // Involution brings the original back.
                ops::reverse::<$engine, $ty>(&mut vectorized);
                assert!(bit_equal(&vectorized, &original), "len={len}");
            }
        }
    };
}

reverse_equivalence!(reverse_u8_128, u8, Engine128, "sse4.2");
reverse_equivalence!(reverse_i16_128, i16, Engine128, "sse4.2");
reverse_equivalence!(reverse_u32_128, u32, Engine128, "sse4.2");
reverse_equivalence!(reverse_u64_128, u64, Engine128, "sse4.2");
reverse_equivalence!(reverse_f64_128, f64, Engine128, "sse4.2");
reverse_equivalence!(reverse_u8_256, u8, Engine256, "avx2");
reverse_equivalence!(reverse_i16_256, i16, Engine256, "avx2");
reverse_equivalence!(reverse_u32_256, u32, Engine256, "avx2");
reverse_equivalence!(reverse_u64_256, u64, Engine256, "avx2");
reverse_equivalence!(reverse_f64_256, f64, Engine256, "avx2");

macro_rules! ranges_equivalence {
    ($name:ident, $ty:ty) => {
        #[test]
        fn $name() {
            if !is_x86_feature_detected!("sse4.2") {
                eprintln!("skipping: CPU lacks sse4.2");
                return;
            }
            let cap = 16 / size_of::<$ty>();
            let mut seed = 0x7a63 ^ size_of::<$ty>() as u64;
            let ranges = [(20 as $ty, 90 as $ty), (100 as $ty, 110 as $ty)];
            for len in lengths(cap) {
                for off in 0..4usize {
                    // Modulus keeps zeros in play so the explicit-length
                    // compare is exercised on terminator-looking data.
                    let backing: Vec<$ty> = (0..len + off)
                        .map(|_| (lcg(&mut seed) % 120) as $ty)
                        .collect();
                    let data = &backing[off..];
                    assert_eq!(
                        ops::count_in_range(data, &ranges),
                        scalar::count_in_range(data, &ranges),
                        "len={len} off={off}"
                    );

                    let mut reference = backing.clone();
                    let mut vectorized = backing.clone();
                    ops::convert_case(&mut vectorized[off..], &ranges);
                    scalar::convert_case(&mut reference[off..], &ranges);
                    assert!(
                        bit_equal(&vectorized, &reference),
                        "len={len} off={off}"
                    );
                }
            }
        }
    };
}

ranges_equivalence!(ranges_u8, u8);
ranges_equivalence!(ranges_i8, i8);
ranges_equivalence!(ranges_u16, u16);
ranges_equivalence!(ranges_i16, i16);

#[test]
fn raw_and_slice_forms_agree() {
    if !is_x86_feature_detected!("sse4.2") {
        eprintln!("skipping: CPU lacks sse4.2");
        return;
    }
    let mut seed = 0xabcd_u64;
    let original: Vec<u32> = (0..101).map(|_| (lcg(&mut seed) % 7) as u32).collect();

    let mut by_slice = original.clone();
    let mut by_ptr = original.clone();
    ops::replace::<Engine128, u32>(&mut by_slice, 3, 9);
    unsafe { ops::replace_raw::<Engine128, u32>(by_ptr.as_mut_ptr(), by_ptr.len(), 3, 9) };
    assert_eq!(by_slice, by_ptr);

    assert_eq!(
        ops::count::<Engine128, u32>(&by_slice, 9),
        unsafe { ops::count_raw::<Engine128, u32>(by_ptr.as_ptr(), by_ptr.len(), 9) },
    );
}
