//! Matrices.

use crate::{
    backend::{ActiveLanes, LaneBackend, MatrixRows},
    num,
};
use bytemuck::{Pod, Zeroable};
use core::fmt;
use std::ops::{Index, IndexMut};

/// A 4x4 matrix.
///
/// The sixteen elements are stored in row-major order, so the element at row
/// `r` and column `c` has linear index `r * 4 + c`. Indexing never fails:
/// indices outside `[0, 15]` are clamped to the nearest valid index.
///
/// Equality compares the raw bits of the elements, like for
/// [`Vector4`](crate::Vector4).
#[repr(C)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(into = "[f32; 16]", from = "[f32; 16]")
)]
#[cfg_attr(feature = "arbitrary", derive(arbitrary::Arbitrary))]
#[derive(Clone, Copy, Default, Zeroable, Pod)]
pub struct Matrix4 {
    elements: [f32; 16],
}

impl Matrix4 {
    /// The largest valid linear index.
    pub const MAX_INDEX: usize = 15;

    /// Creates a matrix with all zeros.
    #[inline]
    pub const fn zeros() -> Self {
        Self::from_row_major([0.0; 16])
    }

    /// Creates the identity matrix.
    #[inline]
    pub const fn identity() -> Self {
        let mut m = Self::zeros();
        m.set_identity();
        m
    }

    /// Creates a matrix from elements given in row-major order.
    #[inline]
    pub const fn from_row_major(elements: [f32; 16]) -> Self {
        Self { elements }
    }

    /// Creates a matrix from its four rows.
    #[inline]
    pub fn from_rows(rows: MatrixRows) -> Self {
        bytemuck::cast(rows)
    }

    /// The elements in row-major order.
    #[inline]
    pub const fn elements(&self) -> &[f32; 16] {
        &self.elements
    }

    /// The four rows of the matrix.
    #[inline]
    pub fn rows(&self) -> &MatrixRows {
        bytemuck::cast_ref(&self.elements)
    }

    /// The given row. A row index above 3 is clamped to 3.
    #[inline]
    pub fn row(&self, row: usize) -> [f32; 4] {
        self.rows()[row.min(3)]
    }

    /// Maps a possibly out-of-range linear index to the nearest valid one.
    #[inline]
    pub const fn clamped_index(index: isize) -> usize {
        if index < 0 {
            0
        } else if index > Self::MAX_INDEX as isize {
            Self::MAX_INDEX
        } else {
            index as usize
        }
    }

    /// The element at the given linear index, clamped into `[0, 15]`.
    #[inline]
    pub const fn element(&self, index: isize) -> f32 {
        self.elements[Self::clamped_index(index)]
    }

    /// A mutable reference to the element at the given linear index, clamped
    /// into `[0, 15]`.
    #[inline]
    pub const fn element_mut(&mut self, index: isize) -> &mut f32 {
        &mut self.elements[Self::clamped_index(index)]
    }

    /// Overwrites the matrix with the identity matrix.
    #[inline]
    pub const fn set_identity(&mut self) {
        self.elements = [0.0; 16];
        self.elements[0] = 1.0;
        self.elements[5] = 1.0;
        self.elements[10] = 1.0;
        self.elements[15] = 1.0;
    }

    /// Computes the transpose of the matrix.
    #[inline]
    pub fn transposed(&self) -> Self {
        let mut result = Self::zeros();
        for row in 0..4 {
            for column in 0..4 {
                result.elements[column * 4 + row] = self.elements[row * 4 + column];
            }
        }
        result
    }

    /// Transposes the matrix in place.
    #[inline]
    pub fn transpose(&mut self) -> &mut Self {
        *self = self.transposed();
        self
    }

    /// Computes the determinant by cofactor expansion along the first row.
    ///
    /// The expansion is evaluated in closed form, so integer-valued matrices
    /// of moderate magnitude give exact results.
    pub fn determinant(&self) -> f32 {
        let m = &self.elements;

        let mut det = 0.0;

        det += m[0]
            * (m[5] * (m[10] * m[15] - m[11] * m[14]) - m[6] * (m[9] * m[15] - m[11] * m[13])
                + m[7] * (m[9] * m[14] - m[10] * m[13]));

        det -= m[1]
            * (m[4] * (m[10] * m[15] - m[11] * m[14]) - m[6] * (m[8] * m[15] - m[11] * m[12])
                + m[7] * (m[8] * m[14] - m[10] * m[12]));

        det += m[2]
            * (m[4] * (m[9] * m[15] - m[11] * m[13]) - m[5] * (m[8] * m[15] - m[11] * m[12])
                + m[7] * (m[8] * m[13] - m[9] * m[12]));

        det -= m[3]
            * (m[4] * (m[9] * m[14] - m[10] * m[13]) - m[5] * (m[8] * m[14] - m[10] * m[12])
                + m[6] * (m[8] * m[13] - m[9] * m[12]));

        det
    }

    /// Computes the cofactor matrix.
    ///
    /// Element `(r, c)` of the result is the determinant of the 3x3 minor
    /// obtained by deleting row `r` and column `c`, negated when `r + c` is
    /// odd.
    pub fn cofactor(&self) -> Self {
        let mut result = Self::zeros();

        for row in 0..4 {
            for column in 0..4 {
                let minor = self.minor(row, column);
                let sign = if (row + column) % 2 == 0 { 1.0 } else { -1.0 };
                result.elements[row * 4 + column] = sign * determinant_3x3(&minor);
            }
        }

        result
    }

    /// Computes the inverse as the transposed cofactor matrix divided by the
    /// determinant.
    ///
    /// If the absolute determinant is below [`num::NEAR_ZERO`], the matrix is
    /// returned unchanged.
    pub fn inverted(&self) -> Self {
        let determinant = self.determinant();

        if num::is_near_zero(determinant) {
            log::trace!("Returning singular matrix uninverted (determinant {determinant})");
            return *self;
        }

        self.cofactor().transposed() * (1.0 / determinant)
    }

    /// The 3x3 submatrix, row-major, left after removing the given row and
    /// column.
    fn minor(&self, removed_row: usize, removed_column: usize) -> [f32; 9] {
        let mut minor = [0.0; 9];
        let mut minor_index = 0;
        for row in (0..4).filter(|&row| row != removed_row) {
            for column in (0..4).filter(|&column| column != removed_column) {
                minor[minor_index] = self.elements[row * 4 + column];
                minor_index += 1;
            }
        }
        minor
    }
}

fn determinant_3x3(m: &[f32; 9]) -> f32 {
    m[0] * (m[4] * m[8] - m[5] * m[7]) - m[1] * (m[3] * m[8] - m[5] * m[6])
        + m[2] * (m[3] * m[7] - m[4] * m[6])
}

impl From<[f32; 16]> for Matrix4 {
    #[inline]
    fn from(elements: [f32; 16]) -> Self {
        Self::from_row_major(elements)
    }
}

impl From<Matrix4> for [f32; 16] {
    #[inline]
    fn from(matrix: Matrix4) -> Self {
        matrix.elements
    }
}

impl_bitwise_eq_and_hash!(Matrix4);

impl_binop!(Add, add, Matrix4, Matrix4, Matrix4, |a, b| {
    Matrix4::from_rows(ActiveLanes::matrix_add(a.rows(), b.rows()))
} => AddAssign, add_assign);

impl_binop!(Sub, sub, Matrix4, Matrix4, Matrix4, |a, b| {
    Matrix4::from_rows(ActiveLanes::matrix_sub(a.rows(), b.rows()))
} => SubAssign, sub_assign);

impl_binop!(Mul, mul, Matrix4, Matrix4, Matrix4, |a, b| {
    Matrix4::from_rows(ActiveLanes::matrix_mul(a.rows(), b.rows()))
} => MulAssign, mul_assign);

impl_binop!(Mul, mul, Matrix4, f32, Matrix4, |a, b| {
    Matrix4::from_rows(ActiveLanes::matrix_scale(a.rows(), *b))
} => MulAssign, mul_assign);

impl_binop!(Mul, mul, f32, Matrix4, Matrix4, |a, b| { b * *a });

impl_unary_op!(Neg, neg, Matrix4, |val| {
    Matrix4::from_row_major(val.elements.map(|element| -element))
});

/// Indices above 15 are clamped to 15.
impl Index<usize> for Matrix4 {
    type Output = f32;

    #[inline]
    fn index(&self, index: usize) -> &Self::Output {
        &self.elements[index.min(Self::MAX_INDEX)]
    }
}

/// Indices above 15 are clamped to 15.
impl IndexMut<usize> for Matrix4 {
    #[inline]
    fn index_mut(&mut self, index: usize) -> &mut Self::Output {
        &mut self.elements[index.min(Self::MAX_INDEX)]
    }
}

impl_approx_eq!(Matrix4, elements);

impl fmt::Debug for Matrix4 {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_list().entries(self.rows()).finish()
    }
}

#[cfg(test)]
mod tests {
    #![allow(clippy::op_ref)]

    use super::*;
    use approx::{assert_abs_diff_eq, assert_relative_eq};
    use proptest::prelude::*;

    const EPSILON: f32 = 1e-5;

    fn counting_matrix() -> Matrix4 {
        Matrix4::from_row_major(std::array::from_fn(|i| (i + 1) as f32))
    }

    fn invertible_matrix() -> Matrix4 {
        Matrix4::from_row_major([
            4.0, 7.0, 2.0, 3.0, //
            0.0, 5.0, 1.0, 2.0, //
            3.0, 1.0, 6.0, 0.0, //
            2.0, 4.0, 1.0, 8.0,
        ])
    }

    fn nalgebra_matrix(m: &Matrix4) -> nalgebra::Matrix4<f64> {
        nalgebra::Matrix4::from_row_slice(&m.elements().map(f64::from))
    }

    prop_compose! {
        fn matrix4_strategy(max_abs: f32)(
            elements in prop::array::uniform16(-max_abs..max_abs)
        ) -> Matrix4 {
            Matrix4::from_row_major(elements)
        }
    }

    prop_compose! {
        // Strictly diagonally dominant, hence well-conditioned and invertible.
        fn well_conditioned_matrix4_strategy()(
            off_diagonal in prop::array::uniform16(-1.0_f32..1.0),
            diagonal in prop::array::uniform4(4.0_f32..8.0),
        ) -> Matrix4 {
            let mut m = Matrix4::from_row_major(off_diagonal);
            for (i, value) in diagonal.into_iter().enumerate() {
                m[i * 5] = value;
            }
            m
        }
    }

    #[test]
    fn default_matrix4_is_zero() {
        let m = Matrix4::default();
        for i in 0..16 {
            assert_eq!(m[i], 0.0);
        }
        assert_eq!(m, Matrix4::zeros());
    }

    #[test]
    fn copying_matrix4_duplicates_elements() {
        let original = counting_matrix();
        let mut copy = original;
        for i in 0..16 {
            assert_eq!(copy[i], original[i]);
        }
        copy[0] = 100.0;
        assert_eq!(original[0], 1.0);
    }

    #[test]
    fn indexing_matrix4_reads_and_writes_elements() {
        let mut m = Matrix4::zeros();
        for i in 0..16 {
            m[i] = (i * 2) as f32;
        }
        let read_only = m;
        for i in 0..16 {
            assert_eq!(m[i], (i * 2) as f32);
            assert_eq!(read_only[i], (i * 2) as f32);
        }
    }

    #[test]
    fn out_of_range_matrix4_index_aliases_last_element() {
        let mut m = counting_matrix();
        assert_eq!(m[20], m[15]);
        assert_eq!(m[usize::MAX], 16.0);

        m[20] = -1.0;
        assert_eq!(m[15], -1.0);
        assert!(std::ptr::eq(&m[20], &m[15]));
    }

    #[test]
    fn signed_matrix4_element_access_clamps_both_ends() {
        let mut m = counting_matrix();
        assert_eq!(m.element(-3), 1.0);
        assert_eq!(m.element(7), 8.0);
        assert_eq!(m.element(16), 16.0);
        assert_eq!(m.element(isize::MAX), 16.0);

        *m.element_mut(-1) = 0.5;
        assert_eq!(m[0], 0.5);
        *m.element_mut(99) = 0.25;
        assert_eq!(m[15], 0.25);
    }

    #[test]
    fn clamped_index_maps_into_valid_range() {
        assert_eq!(Matrix4::clamped_index(isize::MIN), 0);
        assert_eq!(Matrix4::clamped_index(-1), 0);
        assert_eq!(Matrix4::clamped_index(0), 0);
        assert_eq!(Matrix4::clamped_index(9), 9);
        assert_eq!(Matrix4::clamped_index(15), 15);
        assert_eq!(Matrix4::clamped_index(20), 15);
    }

    #[test]
    fn rows_follow_row_major_layout() {
        let m = counting_matrix();
        assert_eq!(m.row(0), [1.0, 2.0, 3.0, 4.0]);
        assert_eq!(m.row(2), [9.0, 10.0, 11.0, 12.0]);
        assert_eq!(m.row(9), [13.0, 14.0, 15.0, 16.0]);
        assert_eq!(Matrix4::from_rows(*m.rows()), m);
    }

    #[test]
    fn setting_matrix4_to_identity_overwrites_all_elements() {
        let mut m = counting_matrix();
        m.set_identity();
        for i in 0..16 {
            let expected = if i % 5 == 0 { 1.0 } else { 0.0 };
            assert_eq!(m[i], expected);
        }
        assert_eq!(m, Matrix4::identity());
    }

    #[test]
    fn transposing_matrix4_swaps_rows_and_columns() {
        let original = counting_matrix();
        let mut m = original;
        m.transpose();
        for row in 0..4 {
            for column in 0..4 {
                assert_eq!(m[row * 4 + column], original[column * 4 + row]);
            }
        }
        assert_eq!(original.transposed(), m);
    }

    #[test]
    fn transposing_matrix4_keeps_diagonal() {
        let m = counting_matrix().transposed();
        assert_eq!(m[0], 1.0);
        assert_eq!(m[5], 6.0);
        assert_eq!(m[10], 11.0);
        assert_eq!(m[15], 16.0);
    }

    #[test]
    fn determinant_of_zero_matrix4_is_zero() {
        assert_eq!(Matrix4::zeros().determinant(), 0.0);
    }

    #[test]
    fn determinant_of_identity_matrix4_is_one() {
        assert_eq!(Matrix4::identity().determinant(), 1.0);
    }

    #[test]
    fn determinant_of_counting_matrix4_is_zero() {
        assert_eq!(counting_matrix().determinant(), 0.0);
    }

    #[test]
    fn determinant_of_integer_matrix4_is_exact() {
        assert_eq!(invertible_matrix().determinant(), 673.0);

        let diagonal = Matrix4::from_row_major([
            2.0, 0.0, 0.0, 0.0, //
            0.0, 3.0, 0.0, 0.0, //
            0.0, 0.0, 4.0, 0.0, //
            0.0, 0.0, 0.0, 5.0,
        ]);
        assert_eq!(diagonal.determinant(), 120.0);
    }

    #[test]
    fn swapping_two_rows_negates_determinant() {
        let m = invertible_matrix();
        let rows = *m.rows();
        let swapped = Matrix4::from_rows([rows[1], rows[0], rows[2], rows[3]]);
        assert_eq!(swapped.determinant(), -m.determinant());
    }

    #[test]
    fn cofactor_of_identity_matrix4_is_identity() {
        // Off-diagonal cofactors may come out as negative zero.
        assert_abs_diff_eq!(Matrix4::identity().cofactor(), Matrix4::identity());
    }

    #[test]
    fn cofactor_signs_alternate_in_checkerboard_pattern() {
        let m = Matrix4::from_row_major([1.0; 16]) + Matrix4::identity();
        let cofactor = m.cofactor();
        for row in 0..4 {
            for column in 0..4 {
                let value = cofactor[row * 4 + column];
                if row == column {
                    assert_eq!(value, 4.0);
                } else {
                    assert_eq!(value, -1.0);
                }
            }
        }
    }

    #[test]
    fn first_row_cofactors_expand_to_determinant() {
        let m = invertible_matrix();
        let cofactor = m.cofactor();
        let expansion: f32 = (0..4).map(|column| m[column] * cofactor[column]).sum();
        assert_eq!(expansion, m.determinant());
    }

    #[test]
    fn inverting_diagonal_matrix4_inverts_diagonal() {
        let m = Matrix4::from_row_major([
            2.0, 0.0, 0.0, 0.0, //
            0.0, 4.0, 0.0, 0.0, //
            0.0, 0.0, 0.5, 0.0, //
            0.0, 0.0, 0.0, 1.0,
        ]);
        let expected = Matrix4::from_row_major([
            0.5, 0.0, 0.0, 0.0, //
            0.0, 0.25, 0.0, 0.0, //
            0.0, 0.0, 2.0, 0.0, //
            0.0, 0.0, 0.0, 1.0,
        ]);
        assert_abs_diff_eq!(m.inverted(), expected, epsilon = EPSILON);
    }

    #[test]
    fn inverting_matrix4_gives_multiplicative_inverse() {
        let m = invertible_matrix();
        let inverse = m.inverted();
        assert_abs_diff_eq!(&m * &inverse, Matrix4::identity(), epsilon = EPSILON);
        assert_abs_diff_eq!(&inverse * &m, Matrix4::identity(), epsilon = EPSILON);
    }

    #[test]
    fn inverting_identity_matrix4_gives_identity() {
        assert_abs_diff_eq!(Matrix4::identity().inverted(), Matrix4::identity());
    }

    #[test]
    fn inverting_singular_matrix4_returns_it_unchanged() {
        assert_eq!(Matrix4::zeros().inverted(), Matrix4::zeros());
        assert_eq!(counting_matrix().inverted(), counting_matrix());

        let mut rank_deficient = invertible_matrix();
        for column in 0..4 {
            rank_deficient[12 + column] = rank_deficient[column] * 2.0;
        }
        assert_eq!(rank_deficient.determinant(), 0.0);
        assert_eq!(rank_deficient.inverted(), rank_deficient);
    }

    #[test]
    fn inverting_nearly_singular_matrix4_returns_it_unchanged() {
        let mut m = Matrix4::identity();
        m[15] = 1e-7;
        assert_eq!(m.inverted(), m);
    }

    #[test]
    fn multiplying_matrix4_by_zero_matrix_gives_zero() {
        let result = counting_matrix() * Matrix4::zeros();
        for i in 0..16 {
            assert_eq!(result[i], 0.0);
        }
    }

    #[test]
    fn multiplying_matrix4s_composes_rows_with_columns() {
        let a = counting_matrix();
        let b = invertible_matrix();
        let product = &a * &b;
        for row in 0..4 {
            for column in 0..4 {
                let expected: f32 = (0..4).map(|k| a[row * 4 + k] * b[k * 4 + column]).sum();
                assert_eq!(product[row * 4 + column], expected);
            }
        }
    }

    #[test]
    fn multiplying_by_identity_matrix4_is_identity_map() {
        let m = invertible_matrix();
        assert_eq!(&m * Matrix4::identity(), m);
        assert_eq!(Matrix4::identity() * &m, m);
    }

    #[test]
    fn multiplying_matrix4_by_scalar_scales_all_elements() {
        let m = Matrix4::from_row_major([1.0; 16]);
        let scalar = 5.5;
        let result = &m * scalar;
        for i in 0..16 {
            assert_eq!(result[i], m[i] * scalar);
        }
        assert_eq!(scalar * &m, result);
    }

    #[test]
    fn adding_and_subtracting_matrix4s_works_element_wise() {
        let mut a = Matrix4::zeros();
        let mut b = Matrix4::zeros();
        for i in 0..16 {
            a[i] = i as f32;
            b[i] = (i * 2) as f32;
        }

        let sum = &a + &b;
        let difference = &b - &a;
        for i in 0..16 {
            assert_eq!(sum[i], a[i] + b[i]);
            assert_eq!(difference[i], b[i] - a[i]);
        }
        assert_eq!(-&b + &b, Matrix4::zeros());
    }

    #[test]
    fn matrix4_compound_assignment_operations_work() {
        let mut m = Matrix4::identity();
        m += Matrix4::identity();
        assert_eq!(m, Matrix4::identity() * 2.0);
        m -= Matrix4::identity();
        assert_eq!(m, Matrix4::identity());
        m *= 3.0;
        assert_eq!(m, Matrix4::identity() * 3.0);
        m *= invertible_matrix();
        assert_eq!(m, invertible_matrix() * 3.0);
    }

    #[test]
    fn converting_matrix4_to_and_from_array_works() {
        let elements: [f32; 16] = std::array::from_fn(|i| i as f32);
        let m = Matrix4::from(elements);
        assert_eq!(m.elements(), &elements);
        assert_eq!(<[f32; 16]>::from(m), elements);
    }

    #[cfg(feature = "serde")]
    #[test]
    fn matrix4_serializes_as_row_major_array() {
        let m = counting_matrix();
        let json = serde_json::to_string(&m).unwrap();
        let elements: Vec<f32> = serde_json::from_str(&json).unwrap();
        assert_eq!(elements, m.elements().to_vec());
        let deserialized: Matrix4 = serde_json::from_str(&json).unwrap();
        assert_eq!(deserialized, m);
    }

    proptest! {
        #[test]
        fn transposing_twice_gives_original(m in matrix4_strategy(1e3)) {
            prop_assert_eq!(m.transposed().transposed(), m);
        }
    }

    proptest! {
        #[test]
        fn multiplying_by_identity_preserves_matrix(m in matrix4_strategy(1e3)) {
            prop_assert_eq!(&m * Matrix4::identity(), m);
        }
    }

    proptest! {
        #[test]
        fn determinant_matches_nalgebra(m in matrix4_strategy(10.0)) {
            let reference = nalgebra_matrix(&m).determinant();
            let scale = m.elements().iter().fold(1.0_f32, |acc, e| acc.max(e.abs())).powi(4);
            prop_assert!((f64::from(m.determinant()) - reference).abs() <= 1e-4 * f64::from(scale));
        }
    }

    proptest! {
        #[test]
        fn inverse_matches_nalgebra(m in well_conditioned_matrix4_strategy()) {
            let inverse = m.inverted();
            let reference = nalgebra_matrix(&m)
                .try_inverse()
                .expect("diagonally dominant matrix should be invertible");
            for row in 0..4 {
                for column in 0..4 {
                    assert_relative_eq!(
                        f64::from(inverse[row * 4 + column]),
                        reference[(row, column)],
                        epsilon = 1e-5,
                        max_relative = 1e-4
                    );
                }
            }
        }
    }

    proptest! {
        #[test]
        fn determinant_of_transpose_equals_determinant(m in matrix4_strategy(10.0)) {
            let det = m.determinant();
            let scale = m.elements().iter().fold(1.0_f32, |acc, e| acc.max(e.abs())).powi(4);
            prop_assert!((m.transposed().determinant() - det).abs() <= 1e-4 * scale);
        }
    }
}
