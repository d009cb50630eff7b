//! Element-by-element lane backend.

use super::{LaneBackend, Lanes};

/// Computes every lane separately with ordinary `f32` arithmetic.
#[derive(Clone, Copy, Debug, Default)]
pub struct ScalarLanes;

impl LaneBackend for ScalarLanes {
    const NAME: &'static str = "scalar";

    #[inline]
    fn add(a: Lanes, b: Lanes) -> Lanes {
        [a[0] + b[0], a[1] + b[1], a[2] + b[2], a[3] + b[3]]
    }

    #[inline]
    fn sub(a: Lanes, b: Lanes) -> Lanes {
        [a[0] - b[0], a[1] - b[1], a[2] - b[2], a[3] - b[3]]
    }

    #[inline]
    fn mul(a: Lanes, b: Lanes) -> Lanes {
        [a[0] * b[0], a[1] * b[1], a[2] * b[2], a[3] * b[3]]
    }

    #[inline]
    fn scale(a: Lanes, scalar: f32) -> Lanes {
        [a[0] * scalar, a[1] * scalar, a[2] * scalar, a[3] * scalar]
    }

    #[inline]
    fn div(a: Lanes, divisor: f32) -> Lanes {
        [a[0] / divisor, a[1] / divisor, a[2] / divisor, a[3] / divisor]
    }

    #[inline]
    fn min(a: Lanes, b: Lanes) -> Lanes {
        std::array::from_fn(|i| if b[i] < a[i] { b[i] } else { a[i] })
    }

    #[inline]
    fn max(a: Lanes, b: Lanes) -> Lanes {
        std::array::from_fn(|i| if b[i] > a[i] { b[i] } else { a[i] })
    }

    #[inline]
    fn dot(a: Lanes, b: Lanes) -> f32 {
        a[0] * b[0] + a[1] * b[1] + a[2] * b[2] + a[3] * b[3]
    }
}
