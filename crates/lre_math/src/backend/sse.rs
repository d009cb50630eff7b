//! SSE lane backend.

use super::{LaneBackend, Lanes, MatrixRows};

#[cfg(target_arch = "x86")]
use std::arch::x86::{
    __m128, _mm_add_ps, _mm_add_ss, _mm_cvtss_f32, _mm_div_ps, _mm_loadu_ps, _mm_max_ps,
    _mm_min_ps, _mm_movehl_ps, _mm_mul_ps, _mm_set1_ps, _mm_setzero_ps, _mm_shuffle_ps,
    _mm_storeu_ps, _mm_sub_ps,
};
#[cfg(target_arch = "x86_64")]
use std::arch::x86_64::{
    __m128, _mm_add_ps, _mm_add_ss, _mm_cvtss_f32, _mm_div_ps, _mm_loadu_ps, _mm_max_ps,
    _mm_min_ps, _mm_movehl_ps, _mm_mul_ps, _mm_set1_ps, _mm_setzero_ps, _mm_shuffle_ps,
    _mm_storeu_ps, _mm_sub_ps,
};

/// Computes all four lanes at once in a 128-bit SSE register.
#[derive(Clone, Copy, Debug, Default)]
pub struct SseLanes;

// Swaps neighbouring lanes: (1, 0, 3, 2).
const SWAP_PAIRS: i32 = 0b10_11_00_01;

// SAFETY (for every `unsafe` block below): this module is only compiled when
// the `sse2` target feature is enabled, which implies SSE, and the unaligned
// load/store intrinsics read and write exactly the four `f32`s of a `Lanes`.

#[inline(always)]
fn load(lanes: &Lanes) -> __m128 {
    unsafe { _mm_loadu_ps(lanes.as_ptr()) }
}

#[inline(always)]
fn store(register: __m128) -> Lanes {
    let mut lanes = [0.0; 4];
    unsafe { _mm_storeu_ps(lanes.as_mut_ptr(), register) };
    lanes
}

#[inline(always)]
fn splat(value: f32) -> __m128 {
    unsafe { _mm_set1_ps(value) }
}

impl LaneBackend for SseLanes {
    const NAME: &'static str = "sse";

    #[inline]
    fn add(a: Lanes, b: Lanes) -> Lanes {
        store(unsafe { _mm_add_ps(load(&a), load(&b)) })
    }

    #[inline]
    fn sub(a: Lanes, b: Lanes) -> Lanes {
        store(unsafe { _mm_sub_ps(load(&a), load(&b)) })
    }

    #[inline]
    fn mul(a: Lanes, b: Lanes) -> Lanes {
        store(unsafe { _mm_mul_ps(load(&a), load(&b)) })
    }

    #[inline]
    fn scale(a: Lanes, scalar: f32) -> Lanes {
        store(unsafe { _mm_mul_ps(load(&a), splat(scalar)) })
    }

    #[inline]
    fn div(a: Lanes, divisor: f32) -> Lanes {
        store(unsafe { _mm_div_ps(load(&a), splat(divisor)) })
    }

    #[inline]
    fn min(a: Lanes, b: Lanes) -> Lanes {
        // `_mm_min_ps(x, y)` is `if x < y { x } else { y }`.
        store(unsafe { _mm_min_ps(load(&b), load(&a)) })
    }

    #[inline]
    fn max(a: Lanes, b: Lanes) -> Lanes {
        store(unsafe { _mm_max_ps(load(&b), load(&a)) })
    }

    #[inline]
    fn dot(a: Lanes, b: Lanes) -> f32 {
        unsafe {
            let products = _mm_mul_ps(load(&a), load(&b));
            let swapped = _mm_shuffle_ps::<SWAP_PAIRS>(products, products);
            // (p0 + p1, p1 + p0, p2 + p3, p3 + p2)
            let pair_sums = _mm_add_ps(products, swapped);
            let high_pair_sum = _mm_movehl_ps(swapped, pair_sums);
            _mm_cvtss_f32(_mm_add_ss(pair_sums, high_pair_sum))
        }
    }

    #[inline]
    fn matrix_mul(a: &MatrixRows, b: &MatrixRows) -> MatrixRows {
        let b_rows = [load(&b[0]), load(&b[1]), load(&b[2]), load(&b[3])];
        std::array::from_fn(|row| {
            let mut accumulated = unsafe { _mm_setzero_ps() };
            for (k, b_row) in b_rows.iter().enumerate() {
                accumulated =
                    unsafe { _mm_add_ps(accumulated, _mm_mul_ps(*b_row, splat(a[row][k]))) };
            }
            store(accumulated)
        })
    }
}
