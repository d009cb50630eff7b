//! Vectors.

use crate::{
    backend::{ActiveLanes, LaneBackend},
    num,
};
use bytemuck::{Pod, Zeroable};
use core::fmt;
use std::ops::{Index, IndexMut};

/// A 4-dimensional vector.
///
/// The four components are stored contiguously and all lane-wise arithmetic
/// goes through the [`ActiveLanes`] backend.
///
/// Equality compares the raw bits of the components, so `0.0` and `-0.0`
/// differ while two identical NaNs are equal. This makes the type usable as a
/// hash key.
///
/// No operation fails. Divisions by near-zero quantities substitute a divisor
/// of `1.0` instead (see [`num`]).
#[repr(C)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(into = "[f32; 4]", from = "[f32; 4]")
)]
#[cfg_attr(feature = "arbitrary", derive(arbitrary::Arbitrary))]
#[derive(Clone, Copy, Default, Zeroable, Pod)]
pub struct Vector4 {
    components: [f32; 4],
}

impl Vector4 {
    /// Creates a new vector with the given components.
    #[inline]
    pub const fn new(x: f32, y: f32, z: f32, w: f32) -> Self {
        Self {
            components: [x, y, z, w],
        }
    }

    /// Creates a new vector with the given x-component and zeros elsewhere.
    #[inline]
    pub const fn from_x(x: f32) -> Self {
        Self::new(x, 0.0, 0.0, 0.0)
    }

    /// Creates a new vector with the given x- and y-components and zeros
    /// elsewhere.
    #[inline]
    pub const fn from_xy(x: f32, y: f32) -> Self {
        Self::new(x, y, 0.0, 0.0)
    }

    /// Creates a new vector with the given x-, y- and z-components and a zero
    /// w-component.
    #[inline]
    pub const fn from_xyz(x: f32, y: f32, z: f32) -> Self {
        Self::new(x, y, z, 0.0)
    }

    /// Creates a new vector with all zeros.
    #[inline]
    pub const fn zeros() -> Self {
        Self::new(0.0, 0.0, 0.0, 0.0)
    }

    /// Creates a new vector with the same value for all components.
    #[inline]
    pub const fn same(value: f32) -> Self {
        Self::new(value, value, value, value)
    }

    /// The x-component.
    #[inline]
    pub const fn x(&self) -> f32 {
        self.components[0]
    }

    /// The y-component.
    #[inline]
    pub const fn y(&self) -> f32 {
        self.components[1]
    }

    /// The z-component.
    #[inline]
    pub const fn z(&self) -> f32 {
        self.components[2]
    }

    /// The w-component.
    #[inline]
    pub const fn w(&self) -> f32 {
        self.components[3]
    }

    /// A mutable reference to the x-component.
    #[inline]
    pub const fn x_mut(&mut self) -> &mut f32 {
        &mut self.components[0]
    }

    /// A mutable reference to the y-component.
    #[inline]
    pub const fn y_mut(&mut self) -> &mut f32 {
        &mut self.components[1]
    }

    /// A mutable reference to the z-component.
    #[inline]
    pub const fn z_mut(&mut self) -> &mut f32 {
        &mut self.components[2]
    }

    /// A mutable reference to the w-component.
    #[inline]
    pub const fn w_mut(&mut self) -> &mut f32 {
        &mut self.components[3]
    }

    /// The components as an array.
    #[inline]
    pub const fn components(&self) -> [f32; 4] {
        self.components
    }

    /// Computes the magnitude (length) of the vector.
    #[inline]
    pub fn magnitude(&self) -> f32 {
        self.sqr_magnitude().sqrt()
    }

    /// Computes the square of the magnitude of the vector. The w-component
    /// is included.
    #[inline]
    pub fn sqr_magnitude(&self) -> f32 {
        self.dot(self)
    }

    /// Computes the normalized version of the vector.
    ///
    /// If the magnitude does not exceed [`num::NEAR_ZERO`], the vector is
    /// returned unchanged.
    #[inline]
    pub fn normalized(&self) -> Self {
        self / num::guarded_length(self.magnitude())
    }

    /// Normalizes the vector in place, with the same near-zero handling as
    /// [`Self::normalized`].
    #[inline]
    pub fn normalize(&mut self) -> &mut Self {
        *self = self.normalized();
        self
    }

    /// Computes the distance between this vector and another.
    #[inline]
    pub fn distance(&self, other: &Self) -> f32 {
        (self - other).magnitude()
    }

    /// Computes the dot product of this vector with another, over all four
    /// components.
    #[inline]
    pub fn dot(&self, other: &Self) -> f32 {
        ActiveLanes::dot(self.components, other.components)
    }

    /// Interpolates linearly from this vector towards `other`. The parameter
    /// `t` is clamped to `[0, 1]`, and a NaN `t` is treated as `0`.
    #[inline]
    pub fn lerp(&self, other: &Self, t: f32) -> Self {
        self.lerp_unclamped(other, num::clamped_unit_parameter(t))
    }

    /// Interpolates linearly from this vector towards `other` without
    /// clamping `t`, so values outside `[0, 1]` extrapolate.
    #[inline]
    pub fn lerp_unclamped(&self, other: &Self, t: f32) -> Self {
        self + (other - self) * t
    }

    /// Computes the component-wise maximum of this vector and another. Where
    /// the components do not compare greater, this vector's is kept.
    #[inline]
    pub fn max(&self, other: &Self) -> Self {
        Self::wrap(ActiveLanes::max(self.components, other.components))
    }

    /// Computes the component-wise minimum of this vector and another. Where
    /// the components do not compare less, this vector's is kept.
    #[inline]
    pub fn min(&self, other: &Self) -> Self {
        Self::wrap(ActiveLanes::min(self.components, other.components))
    }

    /// Projects this vector onto `onto`.
    ///
    /// If the squared magnitude of `onto` is below [`num::NEAR_ZERO`], it is
    /// replaced by `1.0` in the denominator.
    #[inline]
    pub fn project(&self, onto: &Self) -> Self {
        let ratio = self.dot(onto) / num::guarded_divisor(onto.sqr_magnitude());
        onto * ratio
    }

    /// Applies the given function to each component.
    #[inline]
    pub fn mapped(&self, f: impl FnMut(f32) -> f32) -> Self {
        Self::wrap(self.components.map(f))
    }

    #[inline]
    const fn wrap(components: [f32; 4]) -> Self {
        Self { components }
    }
}

impl From<[f32; 4]> for Vector4 {
    #[inline]
    fn from([x, y, z, w]: [f32; 4]) -> Self {
        Self::new(x, y, z, w)
    }
}

impl From<Vector4> for [f32; 4] {
    #[inline]
    fn from(vector: Vector4) -> Self {
        vector.components
    }
}

impl_bitwise_eq_and_hash!(Vector4);

impl_binop!(Add, add, Vector4, Vector4, Vector4, |a, b| {
    Vector4::wrap(ActiveLanes::add(a.components, b.components))
} => AddAssign, add_assign);

impl_binop!(Sub, sub, Vector4, Vector4, Vector4, |a, b| {
    Vector4::wrap(ActiveLanes::sub(a.components, b.components))
} => SubAssign, sub_assign);

impl_binop!(Mul, mul, Vector4, Vector4, Vector4, |a, b| {
    Vector4::wrap(ActiveLanes::mul(a.components, b.components))
} => MulAssign, mul_assign);

impl_binop!(Mul, mul, Vector4, f32, Vector4, |a, b| {
    Vector4::wrap(ActiveLanes::scale(a.components, *b))
} => MulAssign, mul_assign);

impl_binop!(Mul, mul, f32, Vector4, Vector4, |a, b| { b * *a });

impl_binop!(Div, div, Vector4, f32, Vector4, |a, b| {
    Vector4::wrap(ActiveLanes::div(a.components, num::guarded_divisor(*b)))
} => DivAssign, div_assign);

impl_unary_op!(Neg, neg, Vector4, |val| {
    val.mapped(|component| -component)
});

/// Indices above 3 are clamped to 3.
impl Index<usize> for Vector4 {
    type Output = f32;

    #[inline]
    fn index(&self, index: usize) -> &Self::Output {
        &self.components[index.min(3)]
    }
}

/// Indices above 3 are clamped to 3.
impl IndexMut<usize> for Vector4 {
    #[inline]
    fn index_mut(&mut self, index: usize) -> &mut Self::Output {
        &mut self.components[index.min(3)]
    }
}

impl_approx_eq!(Vector4, components);

impl fmt::Debug for Vector4 {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Vector4")
            .field("x", &self.x())
            .field("y", &self.y())
            .field("z", &self.z())
            .field("w", &self.w())
            .finish()
    }
}
