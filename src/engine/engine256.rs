//! 256-bit register backend (AVX2).
//!
//! Doubles the lane counts of `Engine128`. The byte shuffle operates within
//! each 128-bit half, so `swap_halves` is a real permute here; the lane
//! layer composes the two into full-width reversals.
//!
//! All functions are `unsafe` and annotated `#[target_feature(enable =
//! "avx2")]`; callers must ensure AVX2 is available.

use super::SimdEngine;
use super::tables;
use super::types::{__m256i, simd_arch};

/// 256-bit SIMD backend (AVX2).
///
/// 32 lanes of 8-bit elements, 16 of 16-bit, 8 of 32-bit, 4 of 64-bit.
/// Roughly 2x the throughput of `Engine128` on compute-bound transforms.
#[derive(Clone, Copy)]
pub struct Engine256;

impl SimdEngine for Engine256 {
    const BYTES: usize = 32;

    type Vec = __m256i;

    const REVERSE_W1: &'static [u8] = &tables::REVERSE_256_W1;
    const REVERSE_W2: &'static [u8] = &tables::REVERSE_256_W2;
    const REVERSE_W4: &'static [u8] = &tables::REVERSE_256_W4;
    const REVERSE_W8: &'static [u8] = &tables::REVERSE_256_W8;

    #[inline]
    #[target_feature(enable = "avx2")]
    unsafe fn load(p: *const u8) -> Self::Vec {
        unsafe { simd_arch::_mm256_load_si256(p as *const __m256i) }
    }

    #[inline]
    #[target_feature(enable = "avx2")]
    unsafe fn loadu(p: *const u8) -> Self::Vec {
        unsafe { simd_arch::_mm256_loadu_si256(p as *const __m256i) }
    }

    #[inline]
    #[target_feature(enable = "avx2")]
    unsafe fn store(p: *mut u8, v: Self::Vec) {
        unsafe { simd_arch::_mm256_store_si256(p as *mut __m256i, v) }
    }

    #[inline]
    #[target_feature(enable = "avx2")]
    unsafe fn storeu(p: *mut u8, v: Self::Vec) {
        unsafe { simd_arch::_mm256_storeu_si256(p as *mut __m256i, v) }
    }

    #[inline]
    #[target_feature(enable = "avx2")]
    unsafe fn and_si(a: Self::Vec, b: Self::Vec) -> Self::Vec {
        unsafe { simd_arch::_mm256_and_si256(a, b) }
    }

    #[inline]
    #[target_feature(enable = "avx2")]
    unsafe fn xor_si(a: Self::Vec, b: Self::Vec) -> Self::Vec {
        unsafe { simd_arch::_mm256_xor_si256(a, b) }
    }

    #[inline]
    #[target_feature(enable = "avx2")]
    unsafe fn movemask_epi8(v: Self::Vec) -> u32 {
        unsafe { simd_arch::_mm256_movemask_epi8(v) as u32 }
    }

    #[inline]
    #[target_feature(enable = "avx2")]
    unsafe fn shuffle_epi8(v: Self::Vec, idx: Self::Vec) -> Self::Vec {
        unsafe { simd_arch::_mm256_shuffle_epi8(v, idx) }
    }

    #[inline]
    #[target_feature(enable = "avx2")]
    unsafe fn swap_halves(v: Self::Vec) -> Self::Vec {
        unsafe { simd_arch::_mm256_permute2x128_si256::<0x01>(v, v) }
    }

    #[inline]
    #[target_feature(enable = "avx2")]
    unsafe fn set1_epi8(a: i8) -> Self::Vec {
        unsafe { simd_arch::_mm256_set1_epi8(a) }
    }

    #[inline]
    #[target_feature(enable = "avx2")]
    unsafe fn set1_epi16(a: i16) -> Self::Vec {
        unsafe { simd_arch::_mm256_set1_epi16(a) }
    }

    #[inline]
    #[target_feature(enable = "avx2")]
    unsafe fn set1_epi32(a: i32) -> Self::Vec {
        unsafe { simd_arch::_mm256_set1_epi32(a) }
    }

    #[inline]
    #[target_feature(enable = "avx2")]
    unsafe fn set1_epi64(a: i64) -> Self::Vec {
        unsafe { simd_arch::_mm256_set1_epi64x(a) }
    }

    #[inline]
    #[target_feature(enable = "avx2")]
    unsafe fn cmpeq_epi8(a: Self::Vec, b: Self::Vec) -> Self::Vec {
        unsafe { simd_arch::_mm256_cmpeq_epi8(a, b) }
    }

    #[inline]
    #[target_feature(enable = "avx2")]
    unsafe fn cmpeq_epi16(a: Self::Vec, b: Self::Vec) -> Self::Vec {
        unsafe { simd_arch::_mm256_cmpeq_epi16(a, b) }
    }

    #[inline]
    #[target_feature(enable = "avx2")]
    unsafe fn cmpeq_epi32(a: Self::Vec, b: Self::Vec) -> Self::Vec {
        unsafe { simd_arch::_mm256_cmpeq_epi32(a, b) }
    }

    #[inline]
    #[target_feature(enable = "avx2")]
    unsafe fn cmpeq_epi64(a: Self::Vec, b: Self::Vec) -> Self::Vec {
        unsafe { simd_arch::_mm256_cmpeq_epi64(a, b) }
    }

    #[inline]
    #[target_feature(enable = "avx2")]
    unsafe fn add_ps(a: Self::Vec, b: Self::Vec) -> Self::Vec {
        unsafe {
            simd_arch::_mm256_castps_si256(simd_arch::_mm256_add_ps(
                simd_arch::_mm256_castsi256_ps(a),
                simd_arch::_mm256_castsi256_ps(b),
            ))
        }
    }

    #[inline]
    #[target_feature(enable = "avx2")]
    unsafe fn add_pd(a: Self::Vec, b: Self::Vec) -> Self::Vec {
        unsafe {
            simd_arch::_mm256_castpd_si256(simd_arch::_mm256_add_pd(
                simd_arch::_mm256_castsi256_pd(a),
                simd_arch::_mm256_castsi256_pd(b),
            ))
        }
    }
}
