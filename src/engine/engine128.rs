//! 128-bit register backend (SSE2/SSSE3/SSE4.1).
//!
//! Baseline width, available on every x86_64 CPU for the SSE2 subset.
//! `shuffle_epi8` needs SSSE3 and `cmpeq_epi64` needs SSE4.1; both are
//! annotated accordingly and callers take on the feature requirement as
//! part of the usual unsafe contract.

use super::SimdEngine;
use super::tables;
use super::types::{__m128i, simd_arch};

/// 128-bit SIMD backend.
///
/// 16 lanes of 8-bit elements, 8 of 16-bit, 4 of 32-bit, 2 of 64-bit.
#[derive(Clone, Copy)]
pub struct Engine128;

impl SimdEngine for Engine128 {
    const BYTES: usize = 16;

    type Vec = __m128i;

    const REVERSE_W1: &'static [u8] = &tables::REVERSE_128_W1;
    const REVERSE_W2: &'static [u8] = &tables::REVERSE_128_W2;
    const REVERSE_W4: &'static [u8] = &tables::REVERSE_128_W4;
    const REVERSE_W8: &'static [u8] = &tables::REVERSE_128_W8;

    #[inline]
    unsafe fn load(p: *const u8) -> Self::Vec {
        unsafe { simd_arch::_mm_load_si128(p as *const __m128i) }
    }

    #[inline]
    unsafe fn loadu(p: *const u8) -> Self::Vec {
        unsafe { simd_arch::_mm_loadu_si128(p as *const __m128i) }
    }

    #[inline]
    unsafe fn store(p: *mut u8, v: Self::Vec) {
        unsafe { simd_arch::_mm_store_si128(p as *mut __m128i, v) }
    }

    #[inline]
    unsafe fn storeu(p: *mut u8, v: Self::Vec) {
        unsafe { simd_arch::_mm_storeu_si128(p as *mut __m128i, v) }
    }

    #[inline]
    unsafe fn and_si(a: Self::Vec, b: Self::Vec) -> Self::Vec {
        unsafe { simd_arch::_mm_and_si128(a, b) }
    }

    #[inline]
    unsafe fn xor_si(a: Self::Vec, b: Self::Vec) -> Self::Vec {
        unsafe { simd_arch::_mm_xor_si128(a, b) }
    }

    #[inline]
    unsafe fn movemask_epi8(v: Self::Vec) -> u32 {
        unsafe { simd_arch::_mm_movemask_epi8(v) as u32 }
    }

    #[inline]
    #[target_feature(enable = "ssse3")]
    unsafe fn shuffle_epi8(v: Self::Vec, idx: Self::Vec) -> Self::Vec {
        unsafe { simd_arch::_mm_shuffle_epi8(v, idx) }
    }

    #[inline]
    unsafe fn swap_halves(v: Self::Vec) -> Self::Vec {
        // A 128-bit register is a single half.
        v
    }

    #[inline]
    unsafe fn set1_epi8(a: i8) -> Self::Vec {
        unsafe { simd_arch::_mm_set1_epi8(a) }
    }

    #[inline]
    unsafe fn set1_epi16(a: i16) -> Self::Vec {
        unsafe { simd_arch::_mm_set1_epi16(a) }
    }

    #[inline]
    unsafe fn set1_epi32(a: i32) -> Self::Vec {
        unsafe { simd_arch::_mm_set1_epi32(a) }
    }

    #[inline]
    unsafe fn set1_epi64(a: i64) -> Self::Vec {
        unsafe { simd_arch::_mm_set1_epi64x(a) }
    }

    #[inline]
    unsafe fn cmpeq_epi8(a: Self::Vec, b: Self::Vec) -> Self::Vec {
        unsafe { simd_arch::_mm_cmpeq_epi8(a, b) }
    }

    #[inline]
    unsafe fn cmpeq_epi16(a: Self::Vec, b: Self::Vec) -> Self::Vec {
        unsafe { simd_arch::_mm_cmpeq_epi16(a, b) }
    }

    #[inline]
    unsafe fn cmpeq_epi32(a: Self::Vec, b: Self::Vec) -> Self::Vec {
        unsafe { simd_arch::_mm_cmpeq_epi32(a, b) }
    }

    #[inline]
    #[target_feature(enable = "sse4.1")]
    unsafe fn cmpeq_epi64(a: Self::Vec, b: Self::Vec) -> Self::Vec {
        unsafe { simd_arch::_mm_cmpeq_epi64(a, b) }
    }

    #[inline]
    unsafe fn add_ps(a: Self::Vec, b: Self::Vec) -> Self::Vec {
        unsafe {
            simd_arch::_mm_castps_si128(simd_arch::_mm_add_ps(
                simd_arch::_mm_castsi128_ps(a),
                simd_arch::_mm_castsi128_ps(b),
            ))
        }
    }

    #[inline]
    unsafe fn add_pd(a: Self::Vec, b: Self::Vec) -> Self::Vec {
        unsafe {
            simd_arch::_mm_castpd_si128(simd_arch::_mm_add_pd(
                simd_arch::_mm_castsi128_pd(a),
                simd_arch::_mm_castsi128_pd(b),
            ))
        }
    }
}
