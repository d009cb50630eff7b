use crate::{
    backend::{LaneBackend, ScalarLanes},
    matrix::Matrix4,
};
use lre_profiling::benchmark::Benchmarker;

pub fn add_matrix4(benchmarker: impl Benchmarker) {
    let a = create_matrix4();
    let b = create_other_matrix4();
    benchmarker.benchmark(&mut || a + b);
}

pub fn add_matrix4_scalar_lanes(benchmarker: impl Benchmarker) {
    let a = create_matrix4();
    let b = create_other_matrix4();
    benchmarker.benchmark(&mut || ScalarLanes::matrix_add(a.rows(), b.rows()));
}

pub fn mul_matrix4(benchmarker: impl Benchmarker) {
    let a = create_matrix4();
    let b = create_other_matrix4();
    benchmarker.benchmark(&mut || a * b);
}

pub fn mul_matrix4_scalar_lanes(benchmarker: impl Benchmarker) {
    let a = create_matrix4();
    let b = create_other_matrix4();
    benchmarker.benchmark(&mut || ScalarLanes::matrix_mul(a.rows(), b.rows()));
}

pub fn scale_matrix4(benchmarker: impl Benchmarker) {
    let a = create_matrix4();
    benchmarker.benchmark(&mut || a * 1.5);
}

pub fn transpose_matrix4(benchmarker: impl Benchmarker) {
    let a = create_matrix4();
    benchmarker.benchmark(&mut || a.transposed());
}

pub fn determinant_matrix4(benchmarker: impl Benchmarker) {
    let a = create_matrix4();
    benchmarker.benchmark(&mut || a.determinant());
}

pub fn cofactor_matrix4(benchmarker: impl Benchmarker) {
    let a = create_matrix4();
    benchmarker.benchmark(&mut || a.cofactor());
}

pub fn invert_matrix4(benchmarker: impl Benchmarker) {
    let a = create_matrix4();
    benchmarker.benchmark(&mut || a.inverted());
}

pub fn invert_singular_matrix4(benchmarker: impl Benchmarker) {
    let a = Matrix4::from_row_major(std::array::from_fn(|i| (i + 1) as f32));
    benchmarker.benchmark(&mut || a.inverted());
}

fn create_matrix4() -> Matrix4 {
    Matrix4::from_row_major([
        4.0, 7.0, 2.0, 3.0, //
        0.0, 5.0, 1.0, 2.0, //
        3.0, 1.0, 6.0, 0.0, //
        2.0, 4.0, 1.0, 8.0,
    ])
}

fn create_other_matrix4() -> Matrix4 {
    Matrix4::from_row_major([
        1.0, 0.5, -2.0, 0.0, //
        0.0, 3.0, 1.0, -1.0, //
        2.5, -1.0, 1.0, 0.0, //
        0.0, 0.0, 0.5, 1.0,
    ])
}
