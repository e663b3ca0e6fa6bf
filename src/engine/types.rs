//! Architecture bindings for the register backends.
//!
//! Everything in `engine` refers to the platform intrinsics through the
//! `simd_arch` alias so the backend modules read uniformly. The vectorized
//! paths of this crate target x86_64 (SSE2/SSSE3/SSE4.1/SSE4.2 for the
//! 128-bit backend, AVX2 for the 256-bit backend); other architectures use
//! the scalar reference implementations in `crate::scalar`.

#[cfg(target_arch = "x86_64")]
pub(crate) use std::arch::x86_64 as simd_arch;

/// Raw 128-bit integer register type.
#[allow(non_camel_case_types)]
#[cfg(target_arch = "x86_64")]
pub type __m128i = simd_arch::__m128i;

/// Raw 256-bit integer register type.
#[allow(non_camel_case_types)]
#[cfg(target_arch = "x86_64")]
pub type __m256i = simd_arch::__m256i;
