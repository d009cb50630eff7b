//! Lane backends.
//!
//! All arithmetic on [`Vector4`](crate::Vector4) and
//! [`Matrix4`](crate::Matrix4) that maps onto groups of four `f32` lanes goes
//! through a [`LaneBackend`]. Two interchangeable backends exist:
//!
//! - [`ScalarLanes`] computes each lane separately and is available on every
//!   target.
//! - [`SseLanes`] uses 128-bit SSE registers and is only compiled for `x86`
//!   and `x86_64` targets with the `sse2` target feature.
//!
//! [`ActiveLanes`] is chosen at build time: the SSE backend when it is
//! compiled and the `scalar-math` feature is off, otherwise the scalar one.
//! Both backends produce bit-identical results for every operation except
//! [`LaneBackend::dot`], where the SSE backend sums the lane products
//! pairwise.

mod scalar;
#[cfg(all(
    any(target_arch = "x86", target_arch = "x86_64"),
    target_feature = "sse2"
))]
mod sse;

pub use scalar::ScalarLanes;
#[cfg(all(
    any(target_arch = "x86", target_arch = "x86_64"),
    target_feature = "sse2"
))]
pub use sse::SseLanes;

cfg_if::cfg_if! {
    if #[cfg(all(
        any(target_arch = "x86", target_arch = "x86_64"),
        target_feature = "sse2",
        not(feature = "scalar-math")
    ))] {
        /// The backend used by [`Vector4`](crate::Vector4) and
        /// [`Matrix4`](crate::Matrix4) in this build.
        pub type ActiveLanes = SseLanes;
    } else {
        /// The backend used by [`Vector4`](crate::Vector4) and
        /// [`Matrix4`](crate::Matrix4) in this build.
        pub type ActiveLanes = ScalarLanes;
    }
}

/// Name of the backend selected for this build.
pub const ACTIVE_BACKEND_NAME: &str = <ActiveLanes as LaneBackend>::NAME;

/// Four `f32` lanes.
pub type Lanes = [f32; 4];

/// The four rows of a row-major 4x4 matrix.
pub type MatrixRows = [Lanes; 4];

/// A strategy for lane-wise arithmetic.
///
/// Implementors only provide the 4-lane primitives. The matrix operations
/// are built from those primitives one row at a time, and may be overridden
/// as long as the order of floating-point operations is kept.
pub trait LaneBackend {
    /// Human-readable backend name.
    const NAME: &'static str;

    /// Lane-wise sum.
    fn add(a: Lanes, b: Lanes) -> Lanes;

    /// Lane-wise difference.
    fn sub(a: Lanes, b: Lanes) -> Lanes;

    /// Lane-wise (Hadamard) product.
    fn mul(a: Lanes, b: Lanes) -> Lanes;

    /// Multiplies every lane by `scalar`.
    fn scale(a: Lanes, scalar: f32) -> Lanes;

    /// Divides every lane by `divisor`. No guarding is done here.
    fn div(a: Lanes, divisor: f32) -> Lanes;

    /// Lane-wise `if b < a { b } else { a }`, so a NaN in `a` is kept.
    fn min(a: Lanes, b: Lanes) -> Lanes;

    /// Lane-wise `if b > a { b } else { a }`, so a NaN in `a` is kept.
    fn max(a: Lanes, b: Lanes) -> Lanes;

    /// Sum of the lane-wise products.
    fn dot(a: Lanes, b: Lanes) -> f32;

    /// Row-wise matrix sum.
    #[inline]
    fn matrix_add(a: &MatrixRows, b: &MatrixRows) -> MatrixRows {
        std::array::from_fn(|row| Self::add(a[row], b[row]))
    }

    /// Row-wise matrix difference.
    #[inline]
    fn matrix_sub(a: &MatrixRows, b: &MatrixRows) -> MatrixRows {
        std::array::from_fn(|row| Self::sub(a[row], b[row]))
    }

    /// Multiplies every element by `scalar`.
    #[inline]
    fn matrix_scale(a: &MatrixRows, scalar: f32) -> MatrixRows {
        std::array::from_fn(|row| Self::scale(a[row], scalar))
    }

    /// Matrix product `a * b`.
    ///
    /// Each result row is accumulated from zero as
    /// `a[r][0] * b[0] + a[r][1] * b[1] + a[r][2] * b[2] + a[r][3] * b[3]`,
    /// left to right.
    #[inline]
    fn matrix_mul(a: &MatrixRows, b: &MatrixRows) -> MatrixRows {
        std::array::from_fn(|row| {
            let mut accumulated = [0.0; 4];
            for k in 0..4 {
                accumulated = Self::add(accumulated, Self::scale(b[k], a[row][k]));
            }
            accumulated
        })
    }
}
