//! Vectorized `u64` summation.
//!
//! The default kernel, [`sum_simd`], is built on a 2-lane vector add: every
//! chunk of four values becomes two [`U64x2`] pairs, the pairs are added in one
//! step, and both lanes of the result are folded into a scalar accumulator.
//! [`sum_lanes`] generalizes the same shape to any lane count.
//!
//! All arithmetic wraps modulo 2^64, so every kernel here returns exactly what
//! [`sum_scalar`] returns for the same input.

/// Two `u64` lanes added together by a single vector instruction.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct U64x2(pub [u64; 2]);

impl U64x2 {
    pub fn new(lo: u64, hi: u64) -> Self {
        Self([lo, hi])
    }

    /// Lane-wise wrapping addition.
    #[inline(always)]
    pub fn add(self, other: Self) -> Self {
        add_u64x2(self, other)
    }

    /// Wrapping sum of both lanes.
    #[inline(always)]
    pub fn reduce_sum(self) -> u64 {
        self.0[0].wrapping_add(self.0[1])
    }
}

#[cfg(all(target_arch = "x86_64", target_feature = "sse2"))]
#[inline(always)]
fn add_u64x2(a: U64x2, b: U64x2) -> U64x2 {
    use std::arch::x86_64::{__m128i, _mm_add_epi64, _mm_loadu_si128, _mm_storeu_si128};

    let mut out = [0u64; 2];
    // SAFETY: sse2 is enabled for this build. Each pointer covers exactly the
    // 16 bytes of a `[u64; 2]` and the loads/stores are unaligned variants.
    unsafe {
        let va = _mm_loadu_si128(a.0.as_ptr().cast::<__m128i>());
        let vb = _mm_loadu_si128(b.0.as_ptr().cast::<__m128i>());
        _mm_storeu_si128(out.as_mut_ptr().cast::<__m128i>(), _mm_add_epi64(va, vb));
    }
    U64x2(out)
}

#[cfg(not(all(target_arch = "x86_64", target_feature = "sse2")))]
#[inline(always)]
fn add_u64x2(a: U64x2, b: U64x2) -> U64x2 {
    U64x2([a.0[0].wrapping_add(b.0[0]), a.0[1].wrapping_add(b.0[1])])
}

/// Sequential wrapping sum. Reference result for the vectorized kernels.
pub fn sum_scalar(data: &[u64]) -> u64 {
    data.iter().fold(0u64, |acc, v| acc.wrapping_add(*v))
}

/// Sums `data` with two 2-lane vector adds per chunk of four values.
///
/// The 0-3 trailing values that do not fill a chunk are added one at a time.
pub fn sum_simd(data: &[u64]) -> u64 {
    let chunks = data.chunks_exact(4);
    let remainder = chunks.remainder();

    let mut acc = 0u64;
    for chunk in chunks {
        let x1 = U64x2::new(chunk[0], chunk[1]);
        let x2 = U64x2::new(chunk[2], chunk[3]);
        acc = acc.wrapping_add(x1.add(x2).reduce_sum());
    }
    for v in remainder {
        acc = acc.wrapping_add(*v);
    }
    acc
}

/// Same shape as [`sum_simd`] with `LANES` lanes per vector: chunks of
/// `2 * LANES` values are split in half, added lane-wise, then folded.
///
/// Plain lane arrays are left for the compiler to vectorize at the target's
/// native width. `LANES` must be non-zero.
pub fn sum_lanes<const LANES: usize>(data: &[u64]) -> u64 {
    const { assert!(LANES > 0, "lane count must be non-zero") };

    let chunks = data.chunks_exact(2 * LANES);
    let remainder = chunks.remainder();

    let mut acc = 0u64;
    for chunk in chunks {
        let (lo, hi) = chunk.split_at(LANES);
        let lanes: [u64; LANES] = std::array::from_fn(|i| lo[i].wrapping_add(hi[i]));
        acc = lanes.iter().fold(acc, |a, v| a.wrapping_add(*v));
    }
    for v in remainder {
        acc = acc.wrapping_add(*v);
    }
    acc
}

#[cfg(test)]
mod simd_tests {
    use super::*;

    #[test]
    fn test_sum_simd() {
        assert_eq!(sum_simd(&[1, 2, 3, 4, 5, 6, 7, 8]), 36);
        // Remainder path: one full chunk plus two trailing values.
        assert_eq!(sum_simd(&[1, 2, 3, 4, 5, 6]), 21);
    }

    #[test]
    fn test_sum_simd_short_inputs() {
        assert_eq!(sum_simd(&[]), 0);
        assert_eq!(sum_simd(&[7]), 7);
        assert_eq!(sum_simd(&[1, 2, 3]), 6);
    }

    #[test]
    fn test_u64x2_add_wraps() {
        let out = U64x2::new(u64::MAX, 1).add(U64x2::new(2, 2));
        assert_eq!(out, U64x2::new(1, 3));
        assert_eq!(U64x2::new(u64::MAX, 1).reduce_sum(), 0);
    }

    #[test]
    fn test_sum_simd_wraps_like_scalar() {
        let data = [u64::MAX, u64::MAX, 5, 9, u64::MAX];
        assert_eq!(sum_simd(&data), sum_scalar(&data));
    }

    #[test]
    fn test_sum_lanes_widths() {
        let data: Vec<u64> = (1..=37).collect();
        let want = 37 * 38 / 2;
        assert_eq!(sum_lanes::<1>(&data), want);
        assert_eq!(sum_lanes::<2>(&data), want);
        assert_eq!(sum_lanes::<4>(&data), want);
        assert_eq!(sum_lanes::<8>(&data), want);
    }
}
