//! Utility macros.

/// Implements a binary operator for every combination of owned and borrowed
/// operands. The body receives both operands by reference.
///
/// A trailing `=> AssignOp, assign_method` also implements the compound
/// assignment operator in terms of the binary one, which requires the output
/// type to be the left-hand type.
macro_rules! impl_binop {
    (
        $op:ident, $method:ident, $lhs_ty:ty, $rhs_ty:ty, $out:ty,
        |$lhs:ident, $rhs:ident| $body:block
        $(=> $assign_op:ident, $assign_method:ident)?
    ) => {
        impl<'a> ::std::ops::$op<&'a $rhs_ty> for &'a $lhs_ty {
            type Output = $out;

            #[inline]
            fn $method(self, rhs: &'a $rhs_ty) -> $out {
                let ($lhs, $rhs) = (self, rhs);
                $body
            }
        }

        impl ::std::ops::$op<$rhs_ty> for &$lhs_ty {
            type Output = $out;

            #[inline]
            fn $method(self, rhs: $rhs_ty) -> $out {
                ::std::ops::$op::$method(self, &rhs)
            }
        }

        impl ::std::ops::$op<&$rhs_ty> for $lhs_ty {
            type Output = $out;

            #[inline]
            fn $method(self, rhs: &$rhs_ty) -> $out {
                ::std::ops::$op::$method(&self, rhs)
            }
        }

        impl ::std::ops::$op<$rhs_ty> for $lhs_ty {
            type Output = $out;

            #[inline]
            fn $method(self, rhs: $rhs_ty) -> $out {
                ::std::ops::$op::$method(&self, &rhs)
            }
        }

        $(
            impl ::std::ops::$assign_op<&$rhs_ty> for $lhs_ty {
                #[inline]
                fn $assign_method(&mut self, rhs: &$rhs_ty) {
                    *self = ::std::ops::$op::$method(&*self, rhs);
                }
            }

            impl ::std::ops::$assign_op<$rhs_ty> for $lhs_ty {
                #[inline]
                fn $assign_method(&mut self, rhs: $rhs_ty) {
                    ::std::ops::$assign_op::$assign_method(self, &rhs);
                }
            }
        )?
    };
}

macro_rules! impl_unary_op {
    ($op:ident, $method:ident, $t:ty, |$val:ident| $body:block) => {
        impl ::std::ops::$op for &$t {
            type Output = $t;

            #[inline]
            fn $method(self) -> $t {
                let $val = self;
                $body
            }
        }

        impl ::std::ops::$op for $t {
            type Output = $t;

            #[inline]
            fn $method(self) -> $t {
                ::std::ops::$op::$method(&self)
            }
        }
    };
}

/// Implements bitwise equality and hashing for a [`bytemuck::Pod`] type, so
/// that two values are equal exactly when their bytes are.
macro_rules! impl_bitwise_eq_and_hash {
    ($t:ty) => {
        impl ::std::cmp::PartialEq for $t {
            #[inline]
            fn eq(&self, other: &Self) -> bool {
                ::bytemuck::bytes_of(self) == ::bytemuck::bytes_of(other)
            }
        }

        impl ::std::cmp::Eq for $t {}

        impl ::std::hash::Hash for $t {
            #[inline]
            fn hash<H: ::std::hash::Hasher>(&self, state: &mut H) {
                ::std::hash::Hash::hash(::bytemuck::bytes_of(self), state);
            }
        }
    };
}

/// Implements [`approx::AbsDiffEq`] and [`approx::RelativeEq`] by comparing
/// the `f32` entries of the given array field pairwise.
macro_rules! impl_approx_eq {
    ($t:ty, $field:ident) => {
        impl ::approx::AbsDiffEq for $t {
            type Epsilon = f32;

            fn default_epsilon() -> f32 {
                <f32 as ::approx::AbsDiffEq>::default_epsilon()
            }

            fn abs_diff_eq(&self, other: &Self, epsilon: f32) -> bool {
                self.$field
                    .iter()
                    .zip(&other.$field)
                    .all(|(a, b)| ::approx::AbsDiffEq::abs_diff_eq(a, b, epsilon))
            }
        }

        impl ::approx::RelativeEq for $t {
            fn default_max_relative() -> f32 {
                <f32 as ::approx::RelativeEq>::default_max_relative()
            }

            fn relative_eq(&self, other: &Self, epsilon: f32, max_relative: f32) -> bool {
                self.$field.iter().zip(&other.$field).all(|(a, b)| {
                    ::approx::RelativeEq::relative_eq(a, b, epsilon, max_relative)
                })
            }
        }
    };
}
